mod error;
mod index;
mod loader;

pub use error::WordListError;
pub use index::AnagramIndex;
pub use loader::load_index_from_file;
