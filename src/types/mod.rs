pub mod error;
pub mod file;

pub use error::{ClarityError, Result, StageKind};
pub use file::FileRecord;
