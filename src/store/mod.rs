//! Blob-store collaborator for policy documents

pub mod s3;

// Re-export the main type for convenience
pub use s3::S3DocumentStore;

use async_trait::async_trait;

use crate::errors::DomainError;

/// Read-only access to stored policy documents.
///
/// The retrieval handler only ever reads; writes are out of scope for this
/// system.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetches a document by object key and decodes it as UTF-8 text.
    async fn fetch_document(&self, key: &str) -> Result<String, DomainError>;
}
