//! Object storage client for uploaded media.
//!
//! Talks to an S3-compatible endpoint (Cloudflare R2 in production) with
//! path-style addressing. Objects are stored under `{folder}/{uuid}.{ext}`
//! keys and served from a separate public base URL, so the bucket itself
//! never has to be world-readable.

use aws_config::{BehaviorVersion, Region};
use aws_credential_types::Credentials;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;

/// Errors from object storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to upload object '{key}': {message}")]
    Upload { key: String, message: String },

    #[error("Failed to delete object '{key}': {message}")]
    Delete { key: String, message: String },
}

/// Storage connection settings, loaded from environment variables.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// S3-compatible endpoint URL.
    pub endpoint: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    pub bucket: String,
    /// Base URL objects are publicly served from (CDN or bucket domain),
    /// without a trailing slash.
    pub public_url: String,
}

impl StorageConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var                     | Required |
    /// |-----------------------------|----------|
    /// | `STORAGE_ENDPOINT`          | yes      |
    /// | `STORAGE_ACCESS_KEY_ID`     | yes      |
    /// | `STORAGE_SECRET_ACCESS_KEY` | yes      |
    /// | `STORAGE_BUCKET`            | yes      |
    /// | `STORAGE_PUBLIC_URL`        | yes      |
    pub fn from_env() -> Self {
        let require = |name: &str| {
            std::env::var(name).unwrap_or_else(|_| panic!("{name} must be set"))
        };
        Self {
            endpoint: require("STORAGE_ENDPOINT"),
            access_key_id: require("STORAGE_ACCESS_KEY_ID"),
            secret_access_key: require("STORAGE_SECRET_ACCESS_KEY"),
            bucket: require("STORAGE_BUCKET"),
            public_url: require("STORAGE_PUBLIC_URL"),
        }
    }
}

/// A successfully stored object.
#[derive(Debug, Clone)]
pub struct StoredObject {
    /// Bucket key, e.g. `media/7f3a….png`.
    pub key: String,
    /// Public URL the object is reachable at.
    pub url: String,
    pub size: i64,
    pub mime_type: String,
}

/// Client handle for the media bucket. Cheap to clone.
#[derive(Clone)]
pub struct ObjectStore {
    client: Client,
    bucket: String,
    public_url: String,
}

impl ObjectStore {
    /// Build a client from configuration. Does not touch the network; the
    /// first request does.
    pub fn new(config: &StorageConfig) -> Self {
        let credentials = Credentials::new(
            config.access_key_id.clone(),
            config.secret_access_key.clone(),
            None,
            None,
            "atelier-storage",
        );
        // R2 uses the placeholder region "auto" and requires path-style keys.
        let s3_config = aws_sdk_s3::config::Builder::new()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("auto"))
            .endpoint_url(&config.endpoint)
            .credentials_provider(credentials)
            .force_path_style(true)
            .build();

        Self {
            client: Client::from_conf(s3_config),
            bucket: config.bucket.clone(),
            public_url: config.public_url.trim_end_matches('/').to_string(),
        }
    }

    /// Upload a file's bytes under a fresh UUID key in `folder`.
    pub async fn upload(
        &self,
        folder: &str,
        original_name: &str,
        mime_type: &str,
        bytes: Vec<u8>,
    ) -> Result<StoredObject, StorageError> {
        let key = object_key(folder, original_name);
        let size = bytes.len() as i64;

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .body(ByteStream::from(bytes))
            .content_type(mime_type)
            .send()
            .await
            .map_err(|err| StorageError::Upload {
                key: key.clone(),
                message: err.to_string(),
            })?;

        tracing::debug!(%key, size, "Object uploaded");

        Ok(StoredObject {
            url: self.public_object_url(&key),
            key,
            size,
            mime_type: mime_type.to_string(),
        })
    }

    /// Delete an object by key.
    pub async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|err| StorageError::Delete {
                key: key.to_string(),
                message: err.to_string(),
            })?;

        tracing::debug!(%key, "Object deleted");
        Ok(())
    }

    /// Public URL for a stored key.
    pub fn public_object_url(&self, key: &str) -> String {
        format!("{}/{}", self.public_url, key)
    }
}

/// Build a bucket key: `{folder}/{uuid}.{ext}`, keeping only the original
/// file's (lowercased) extension.
fn object_key(folder: &str, original_name: &str) -> String {
    let id = uuid::Uuid::new_v4();
    match original_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => {
            format!("{folder}/{id}.{}", ext.to_ascii_lowercase())
        }
        _ => format!("{folder}/{id}"),
    }
}

/// Coarse media classification from a mime type: `image`, `video`, or
/// `file` for anything else.
pub fn classify_file_type(mime_type: &str) -> &'static str {
    if mime_type.starts_with("image/") {
        "image"
    } else if mime_type.starts_with("video/") {
        "video"
    } else {
        "file"
    }
}
