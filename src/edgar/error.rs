use thiserror::Error;

/// Precondition failures raised by [`Filing`](super::Filing) accessors.
/// All three indicate a sequencing bug in the caller, not a recoverable
/// condition: the required setup call was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilingError {
    #[error("no section data, use ingest() to fill the data first")]
    SectionsNotIngested,

    #[error("no filing metadata, use set_metadata() first")]
    MetadataNotSet,

    #[error("unsupported section key: {key}")]
    UnknownSection { key: String },
}
