//! Blob storage for uploaded photos.
//!
//! Handlers talk to the `BlobStore` trait; the filesystem implementation
//! writes under a configured media root and hands back URLs rooted at the
//! public media prefix, where the files are served statically.

use async_trait::async_trait;
use std::path::{Path, PathBuf};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Stores `bytes` under `key`, overwriting any previous blob.
    async fn put(&self, key: &str, bytes: &[u8]) -> anyhow::Result<()>;

    /// Returns the public URL a stored key is served under.
    fn public_url(&self, key: &str) -> String;
}

pub struct FsBlobStore {
    root: PathBuf,
    public_base: String,
}

impl FsBlobStore {
    pub fn new(root: impl Into<PathBuf>, public_base: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_base: public_base.into(),
        }
    }

    fn resolve(&self, key: &str) -> anyhow::Result<PathBuf> {
        if key.is_empty() {
            return Err(anyhow::anyhow!("Empty blob key"));
        }
        // Keys are server-generated, but refuse path traversal regardless.
        let relative = Path::new(key);
        if relative.is_absolute()
            || relative
                .components()
                .any(|c| !matches!(c, std::path::Component::Normal(_)))
        {
            return Err(anyhow::anyhow!("Invalid blob key: {}", key));
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl BlobStore for FsBlobStore {
    async fn put(&self, key: &str, bytes: &[u8]) -> anyhow::Result<()> {
        let path = self.resolve(key)?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, bytes).await?;
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.public_base.trim_end_matches('/'), key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_writes_bytes_under_root() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsBlobStore::new(dir.path(), "/media");

        store.put("incidents/photo.jpg", b"jpeg-bytes").await.unwrap();

        let written = std::fs::read(dir.path().join("incidents/photo.jpg")).unwrap();
        assert_eq!(written, b"jpeg-bytes");
    }

    #[tokio::test]
    async fn put_rejects_traversal_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsBlobStore::new(dir.path(), "/media");

        assert!(store.put("../escape.jpg", b"x").await.is_err());
        assert!(store.put("/absolute.jpg", b"x").await.is_err());
        assert!(store.put("", b"x").await.is_err());
    }

    #[test]
    fn public_url_joins_base_and_key() {
        let store = FsBlobStore::new("/tmp/media", "/media/");
        assert_eq!(
            store.public_url("exercises/a.jpg"),
            "/media/exercises/a.jpg"
        );
    }
}
