pub mod validated;

pub use validated::{ExistingId, RecordId, ValidatedBody, ValidatedUpdate};
