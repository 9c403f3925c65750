//! S3-backed implementation of the document store

use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::error::SdkError;

use super::DocumentStore;
use crate::errors::DomainError;

/// Document store reading from a single S3 bucket.
pub struct S3DocumentStore {
    client: Client,
    bucket: String,
}

impl S3DocumentStore {
    #[must_use]
    pub fn new(client: Client, bucket: String) -> Self {
        Self { client, bucket }
    }
}

#[async_trait]
impl DocumentStore for S3DocumentStore {
    async fn fetch_document(&self, key: &str) -> Result<String, DomainError> {
        let object = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|err| {
                if matches!(&err, SdkError::ServiceError(_)) {
                    let service_err = err.into_service_error();
                    if service_err.is_no_such_key() {
                        DomainError::Store(format!(
                            "{key} not found in bucket {}",
                            self.bucket
                        ))
                    } else {
                        DomainError::Store(service_err.to_string())
                    }
                } else {
                    DomainError::Store(err.to_string())
                }
            })?;

        let data = object
            .body
            .collect()
            .await
            .map_err(|e| DomainError::Store(e.to_string()))?;

        Ok(String::from_utf8(data.into_bytes().to_vec())?)
    }
}
