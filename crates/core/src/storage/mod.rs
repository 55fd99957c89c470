mod error;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use traits::FirstSeenRepository;
pub use types::EntryFirstSeen;
