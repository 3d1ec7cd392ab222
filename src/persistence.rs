/// Persistence seam: the hosted table and storage bucket
use async_trait::async_trait;
use uuid::Uuid;

use crate::error::PersistenceError;
use crate::listing_data::{Attachment, ListingRecord};
use crate::text::file_extension;

/// Remote store used by the editor
///
/// Implementations are driven from the browser event loop, so futures
/// are not required to be `Send`.
#[async_trait(?Send)]
pub trait PersistenceService {
    /// Store `attachment` under `key` and return its public url
    async fn upload(&self, key: &str, attachment: &Attachment) -> Result<String, PersistenceError>;

    /// Insert one listing row
    async fn insert(&self, record: &ListingRecord) -> Result<(), PersistenceError>;

    /// Delete previously uploaded objects
    async fn remove(&self, keys: &[String]) -> Result<(), PersistenceError>;
}

/// Unique object key for an uploaded file, keeping its extension
///
/// - "shot.png" → "<uuid>.png"
/// - "README" → "<uuid>"
pub fn storage_key(file_name: &str) -> String {
    let id = Uuid::new_v4();
    match file_extension(file_name) {
        Some(ext) => format!("{}.{}", id, ext),
        None => id.to_string(),
    }
}
