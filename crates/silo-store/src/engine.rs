//! The storage engine: seven verbs over one optional named bucket.

use std::sync::RwLock;

use tracing::{debug, info, warn};

use crate::bucket::Bucket;
use crate::cancel::CancellationToken;
use crate::encoding;
use crate::error::{StoreError, StoreResult};
use crate::record::{Content, ObjectRecord, WriteData};

/// In-memory storage engine emulating a hierarchical filesystem over a
/// single flat bucket.
///
/// The bucket name is fixed at construction; the bucket itself is created
/// lazily by the first successful `create` or `write` and destroyed only
/// by a root-scoped `purge`. All mutable state sits behind one `RwLock`,
/// so each verb is atomic with respect to other callers sharing the
/// engine.
pub struct StorageEngine {
    bucket_name: String,
    bucket: RwLock<Option<Bucket>>,
}

impl StorageEngine {
    /// Create an engine for the given bucket name.
    pub fn new(bucket_name: impl Into<String>) -> Self {
        Self {
            bucket_name: bucket_name.into(),
            bucket: RwLock::new(None),
        }
    }

    /// The configured bucket name.
    pub fn bucket_name(&self) -> &str {
        &self.bucket_name
    }

    /// Whether the bucket currently exists.
    pub fn bucket_exists(&self) -> bool {
        self.bucket.read().expect("lock poisoned").is_some()
    }

    /// Number of stored objects; zero while the bucket is absent.
    pub fn len(&self) -> usize {
        self.bucket
            .read()
            .expect("lock poisoned")
            .as_ref()
            .map_or(0, Bucket::len)
    }

    /// True while no objects are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Ensure the bucket exists.
    ///
    /// Requires a non-empty, directory-shaped path. Idempotent beyond the
    /// first allocation; existing contents are untouched.
    pub fn create(&self, path: &str, token: &CancellationToken) -> StoreResult<()> {
        token.bail_if_cancelled()?;

        let path = silo_path::to_unix(path);
        if path.is_empty() {
            return Err(StoreError::PathRequired);
        }
        if !silo_path::is_directory(&path) {
            return Err(StoreError::NotADirectory { path });
        }

        let mut guard = self.bucket.write().expect("lock poisoned");
        if guard.is_none() {
            *guard = Some(Bucket::new());
            info!(bucket = %self.bucket_name, "bucket created");
        }
        Ok(())
    }

    /// Write one or more objects at or beneath `path`.
    ///
    /// A single content object or raw string targets a file-shaped path;
    /// a batch targets a directory-shaped path, each item landing at the
    /// directory joined with the relative portion of the item's id. A raw
    /// string is Base64-decoded when it has the Base64 shape, otherwise
    /// stored as UTF-8. Existing targets fail with `AlreadyExists` unless
    /// `overwrite` is set.
    pub fn write(
        &self,
        path: &str,
        data: WriteData,
        overwrite: bool,
        token: &CancellationToken,
    ) -> StoreResult<()> {
        token.bail_if_cancelled()?;

        let path = silo_path::to_unix(path);
        if path.is_empty() {
            return Err(StoreError::PathRequired);
        }

        let items: Vec<Content> = match data {
            WriteData::One(content) => {
                if !silo_path::is_file(&path) {
                    return Err(StoreError::NotAFile { path });
                }
                vec![content]
            }
            WriteData::Many(contents) => {
                if !silo_path::is_directory(&path) {
                    return Err(StoreError::NotADirectory { path });
                }
                contents
            }
            WriteData::Text(text) => {
                if !silo_path::is_file(&path) {
                    return Err(StoreError::NotAFile { path });
                }
                vec![Content::from_raw(path.clone(), encoding::decode_text(&text))]
            }
        };

        for content in items {
            token.bail_if_cancelled()?;
            self.write_content(&path, content, overwrite)?;
        }
        Ok(())
    }

    fn write_content(&self, path: &str, content: Content, overwrite: bool) -> StoreResult<()> {
        let payload = content.resolve_payload()?;

        let target = if silo_path::is_directory(path) {
            let id = silo_path::to_unix(&content.id);
            let relative = silo_path::normalize_part(Some(&id))?;
            let prefix = silo_path::add_trailing_separator(path);
            if relative.starts_with(&prefix) {
                // Written through as-is, never de-duplicated.
                warn!(id = %content.id, path = %path, "item id already contains the target directory");
            }
            silo_path::combine([path, relative.as_str()])
        } else {
            path.to_string()
        };

        if !silo_path::is_file(&target) {
            return Err(StoreError::NotAFile { path: target });
        }

        let mut guard = self.bucket.write().expect("lock poisoned");
        let bucket = guard.get_or_insert_with(|| {
            info!(bucket = %self.bucket_name, "bucket created");
            Bucket::new()
        });

        if bucket.contains(&target) && !overwrite {
            return Err(StoreError::AlreadyExists { path: target });
        }

        debug!(path = %target, bytes = payload.len(), "object written");
        bucket.upsert(ObjectRecord::new(target, payload));
        Ok(())
    }

    /// Read the object stored exactly at a file-shaped `path`.
    pub fn read(&self, path: &str, token: &CancellationToken) -> StoreResult<ObjectRecord> {
        token.bail_if_cancelled()?;

        let path = silo_path::to_unix(path);
        if path.is_empty() {
            return Err(StoreError::PathRequired);
        }
        if !silo_path::is_file(&path) {
            return Err(StoreError::NotAFile { path });
        }

        let guard = self.bucket.read().expect("lock poisoned");
        guard
            .as_ref()
            .and_then(|bucket| bucket.get(&path))
            .cloned()
            .ok_or(StoreError::NotFound { path })
    }

    /// Delete the object at a file-shaped `path`, or every object beneath
    /// a directory-shaped `path`.
    ///
    /// Missing targets are logged as warnings and reported as success.
    pub fn delete(&self, path: &str, token: &CancellationToken) -> StoreResult<()> {
        token.bail_if_cancelled()?;

        let path = silo_path::to_unix(path);
        if path.is_empty() {
            return Err(StoreError::PathRequired);
        }

        let mut guard = self.bucket.write().expect("lock poisoned");
        let Some(bucket) = guard.as_mut() else {
            warn!(path = %path, "path does not exist");
            return Ok(());
        };

        if silo_path::is_file(&path) {
            if bucket.remove(&path) {
                info!(path = %path, "object deleted");
            } else {
                warn!(path = %path, "path does not exist");
            }
            return Ok(());
        }

        let prefix = silo_path::add_trailing_separator(&path);
        let keys = bucket.keys_with_prefix(&prefix);
        if keys.is_empty() {
            warn!(path = %path, "path does not exist");
            return Ok(());
        }
        for key in keys {
            token.bail_if_cancelled()?;
            bucket.remove(&key);
            info!(path = %key, "object deleted");
        }
        Ok(())
    }

    /// Whether an object (file-shaped path) or any descendant
    /// (directory-shaped path) exists.
    pub fn exist(&self, path: &str, token: &CancellationToken) -> StoreResult<bool> {
        token.bail_if_cancelled()?;

        let path = silo_path::to_unix(path);
        if path.is_empty() {
            return Err(StoreError::PathRequired);
        }

        let guard = self.bucket.read().expect("lock poisoned");
        let Some(bucket) = guard.as_ref() else {
            return Ok(false);
        };

        if silo_path::is_file(&path) {
            Ok(bucket.contains(&path))
        } else {
            Ok(bucket.any_with_prefix(&silo_path::add_trailing_separator(&path)))
        }
    }

    /// List every record in the subtree rooted at `path`.
    ///
    /// The empty path defaults to the root, which matches every key. The
    /// listing is the full subtree, not just immediate children.
    pub fn list(&self, path: &str, token: &CancellationToken) -> StoreResult<Vec<ObjectRecord>> {
        token.bail_if_cancelled()?;

        let path = silo_path::to_unix(path);
        if !silo_path::is_directory(&path) {
            return Err(StoreError::NotADirectory { path });
        }
        if self.bucket_name.is_empty() {
            return Err(StoreError::BucketNameRequired);
        }

        let guard = self.bucket.read().expect("lock poisoned");
        let bucket = guard.as_ref().ok_or_else(|| StoreError::BucketNotFound {
            name: self.bucket_name.clone(),
        })?;

        let prefix = if silo_path::is_root(&path) {
            String::new()
        } else {
            path
        };
        Ok(bucket.records_with_prefix(&prefix))
    }

    /// Remove every key under `path`, or drop the whole bucket when
    /// `path` is empty or the root marker.
    ///
    /// No existence check and no error when nothing matches. Root purge
    /// is the only way to destroy the bucket; a later `create` or `write`
    /// recreates it empty.
    pub fn purge(&self, path: &str, token: &CancellationToken) -> StoreResult<()> {
        token.bail_if_cancelled()?;

        let path = silo_path::to_unix(path);
        let mut guard = self.bucket.write().expect("lock poisoned");

        if silo_path::is_root(&path) {
            if guard.take().is_some() {
                info!(bucket = %self.bucket_name, "bucket purged");
            }
            return Ok(());
        }

        let Some(bucket) = guard.as_mut() else {
            return Ok(());
        };
        for key in bucket.keys_with_prefix(&path) {
            token.bail_if_cancelled()?;
            bucket.remove(&key);
            debug!(path = %key, "object purged");
        }
        Ok(())
    }
}

impl std::fmt::Debug for StorageEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageEngine")
            .field("bucket_name", &self.bucket_name)
            .field("bucket_exists", &self.bucket_exists())
            .field("object_count", &self.len())
            .finish()
    }
}
