pub mod edgar;

// Re-exports
pub use edgar::{Filing, FilingError, FilingMetadata, FilingType};
