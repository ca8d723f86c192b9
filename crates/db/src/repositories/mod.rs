//! Repository implementations for data access.

mod document;

pub use document::DocumentRepository;
