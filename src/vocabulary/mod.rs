pub mod candidates;
pub mod loader;

pub use crate::types::identifiers::VocabularyVersion;
pub use candidates::{read_candidates, read_candidates_from_path};
pub use loader::{LoadError, Vocabulary, VocabularyRecord};
