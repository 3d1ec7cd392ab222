/// Supabase REST and storage client built on gloo-net
use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Serialize;

use crate::config::EditorConfig;
use crate::error::PersistenceError;
use crate::listing_data::{Attachment, ListingRecord};
use crate::persistence::PersistenceService;

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

#[derive(Debug, Clone, PartialEq)]
pub struct SupabaseClient {
    base_url: String,
    anon_key: String,
    table: String,
    bucket: String,
}

#[derive(Serialize)]
struct RemoveObjects<'a> {
    prefixes: &'a [String],
}

impl SupabaseClient {
    pub fn new(config: &EditorConfig) -> SupabaseClient {
        SupabaseClient {
            base_url: config.supabase_url.trim_end_matches('/').to_string(),
            anon_key: config.anon_key.clone(),
            table: config.table.clone(),
            bucket: config.bucket.clone(),
        }
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }

    fn bucket_url(&self) -> String {
        format!("{}/storage/v1/object/{}", self.base_url, self.bucket)
    }

    fn object_url(&self, key: &str) -> String {
        format!("{}/{}", self.bucket_url(), key)
    }

    /// Url the object can be fetched from once uploaded to a public bucket
    pub fn public_url(&self, key: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url, self.bucket, key
        )
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("apikey", &self.anon_key)
            .header("Authorization", &format!("Bearer {}", self.anon_key))
    }
}

#[async_trait(?Send)]
impl PersistenceService for SupabaseClient {
    async fn upload(&self, key: &str, attachment: &Attachment) -> Result<String, PersistenceError> {
        let content_type = if attachment.content_type.is_empty() {
            DEFAULT_CONTENT_TYPE
        } else {
            attachment.content_type.as_str()
        };
        let body = js_sys::Uint8Array::from(&attachment.bytes[..]);

        let request = self
            .authorized(Request::post(&self.object_url(key)))
            .header("Content-Type", content_type)
            .header("x-upsert", "false")
            .body(body)
            .map_err(|e| PersistenceError::Serialize(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| PersistenceError::Network(e.to_string()))?;
        ensure_success(response).await?;

        log::debug!("Uploaded {} ({} bytes)", key, attachment.size());
        Ok(self.public_url(key))
    }

    async fn insert(&self, record: &ListingRecord) -> Result<(), PersistenceError> {
        let request = self
            .authorized(Request::post(&self.table_url()))
            .header("Prefer", "return=minimal")
            .json(record)
            .map_err(|e| PersistenceError::Serialize(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| PersistenceError::Network(e.to_string()))?;
        ensure_success(response).await
    }

    async fn remove(&self, keys: &[String]) -> Result<(), PersistenceError> {
        if keys.is_empty() {
            return Ok(());
        }

        let request = self
            .authorized(Request::delete(&self.bucket_url()))
            .json(&RemoveObjects { prefixes: keys })
            .map_err(|e| PersistenceError::Serialize(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| PersistenceError::Network(e.to_string()))?;
        ensure_success(response).await
    }
}

async fn ensure_success(response: Response) -> Result<(), PersistenceError> {
    if response.ok() {
        return Ok(());
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(PersistenceError::Status { status, body })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_client() -> SupabaseClient {
        SupabaseClient::new(&EditorConfig {
            supabase_url: "https://abcd.supabase.co/".to_string(),
            anon_key: "anon".to_string(),
            table: "domain_listings".to_string(),
            bucket: "listing-screenshots".to_string(),
            has_attachments: true,
        })
    }

    #[test]
    fn test_table_url() {
        assert_eq!(
            create_test_client().table_url(),
            "https://abcd.supabase.co/rest/v1/domain_listings"
        );
    }

    #[test]
    fn test_object_and_public_urls() {
        let client = create_test_client();

        assert_eq!(
            client.object_url("k.png"),
            "https://abcd.supabase.co/storage/v1/object/listing-screenshots/k.png"
        );
        assert_eq!(
            client.public_url("k.png"),
            "https://abcd.supabase.co/storage/v1/object/public/listing-screenshots/k.png"
        );
    }

    #[test]
    fn test_remove_payload_shape() {
        let keys = vec!["a.png".to_string(), "b.jpg".to_string()];
        let json = serde_json::to_value(RemoveObjects { prefixes: &keys }).unwrap();

        assert_eq!(json, serde_json::json!({ "prefixes": ["a.png", "b.jpg"] }));
    }
}
