//! In-memory storage backend.
//!
//! Stores first-seen records in a `HashMap` wrapped in `Arc<RwLock<_>>`.
//! Records survive for the lifetime of the process only, which is enough
//! for development and tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use rssize::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! ```

mod repository;

pub use repository::InMemoryRepository;
