pub mod error;
pub mod filing;
pub mod report;

pub use error::FilingError;
pub use filing::{Filing, FilingMetadata};
pub use report::FilingType;
