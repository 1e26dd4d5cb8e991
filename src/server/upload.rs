//! Storage of uploaded image files.
//!
//! Files are written under the configured upload directory with a random name made of
//! 16 random bytes in hex followed by the client's file extension. Only that filename is
//! persisted. A freshly written file is owned by a [`StoredUpload`] guard that deletes it
//! again unless the caller commits it after the database write succeeded.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use axum::extract::Multipart;
use rand::RngCore;

use crate::server::error::{upload::UploadError, AppError};

/// Name of the multipart field carrying the file.
pub const FILE_FIELD: &str = "file";

/// Handle to the upload directory.
#[derive(Clone, Debug)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Creates the upload directory if it doesn't exist yet.
    pub async fn prepare(&self) -> Result<(), UploadError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|source| UploadError::Io {
                path: self.dir.clone(),
                source,
            })
    }

    /// Writes `bytes` under a freshly generated filename.
    ///
    /// # Arguments
    /// - `original_name` - Filename sent by the client; only its extension is kept
    /// - `bytes` - File content
    ///
    /// # Returns
    /// - `Ok(StoredUpload)` - Uncommitted guard over the written file
    /// - `Err(UploadError::Io)` - The file could not be written
    pub async fn store(
        &self,
        original_name: Option<&str>,
        bytes: &[u8],
    ) -> Result<StoredUpload, UploadError> {
        let filename = generate_filename(original_name);
        let path = self.dir.join(&filename);

        tokio::fs::write(&path, bytes)
            .await
            .map_err(|source| UploadError::Io {
                path: path.clone(),
                source,
            })?;

        tracing::debug!("Stored upload {} ({} bytes)", filename, bytes.len());

        Ok(StoredUpload {
            path,
            filename,
            committed: false,
        })
    }

    /// Removes a previously stored file.
    ///
    /// Failures are logged and otherwise ignored, the database row is already gone
    /// or points elsewhere when this is called.
    pub async fn remove(&self, filename: &str) {
        let Some(path) = self.path_of(filename) else {
            tracing::warn!("Refusing to remove upload with unexpected name {:?}", filename);
            return;
        };

        if let Err(e) = tokio::fs::remove_file(&path).await {
            tracing::warn!("Failed to remove upload {}: {}", path.display(), e);
        }
    }

    /// Resolves a stored filename to its path, rejecting anything that isn't a plain file name.
    fn path_of(&self, filename: &str) -> Option<PathBuf> {
        let is_plain = !filename.is_empty()
            && Path::new(filename).file_name().and_then(|n| n.to_str()) == Some(filename);

        is_plain.then(|| self.dir.join(filename))
    }
}

/// Builds `<32 hex chars><.ext>` from the client's filename.
///
/// The extension is lower-cased and kept only when it is non-empty and alphanumeric.
pub fn generate_filename(original_name: Option<&str>) -> String {
    let mut bytes = [0u8; 16];
    rand::rng().fill_bytes(&mut bytes);

    let extension = original_name
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|ext| format!(".{}", ext.to_ascii_lowercase()))
        .unwrap_or_default();

    format!("{}{}", hex::encode(bytes), extension)
}

/// A file written to the upload directory that is deleted on drop unless committed.
#[derive(Debug)]
pub struct StoredUpload {
    path: PathBuf,
    filename: String,
    committed: bool,
}

impl StoredUpload {
    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Keeps the file. Call once the row referencing it has been written.
    pub fn commit(mut self) -> String {
        self.committed = true;
        std::mem::take(&mut self.filename)
    }
}

/// Removes the file of an uncommitted upload.
///
/// `Drop` can't await, so this is a blocking `std::fs::remove_file` on whichever thread
/// drops the guard, usually a tokio worker. It is a single unlink of a file written
/// moments earlier.
impl Drop for StoredUpload {
    fn drop(&mut self) {
        if self.committed {
            return;
        }

        match std::fs::remove_file(&self.path) {
            Ok(()) => tracing::debug!("Discarded uncommitted upload {}", self.path.display()),
            Err(e) => tracing::warn!(
                "Failed to discard uncommitted upload {}: {}",
                self.path.display(),
                e
            ),
        }
    }
}

/// Multipart form split into its stored file and its text fields.
#[derive(Debug, Default)]
pub struct UploadForm {
    file: Option<StoredUpload>,
    fields: HashMap<String, String>,
}

impl UploadForm {
    /// Reads the whole multipart body.
    ///
    /// The `file` field is written to the store straight away; an empty `file` field is
    /// treated as absent. Every other field is read as text, the last occurrence wins.
    pub async fn from_multipart(
        mut multipart: Multipart,
        store: &UploadStore,
    ) -> Result<Self, AppError> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await.map_err(UploadError::from)? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            if name == FILE_FIELD {
                let original_name = field.file_name().map(str::to_string);
                let bytes = field.bytes().await.map_err(UploadError::from)?;
                if bytes.is_empty() {
                    continue;
                }

                // Replacing an earlier file field drops (and deletes) the earlier upload.
                form.file = Some(store.store(original_name.as_deref(), &bytes).await?);
            } else {
                let value = field.text().await.map_err(UploadError::from)?;
                form.fields.insert(name, value);
            }
        }

        Ok(form)
    }

    /// Takes the stored file, if the form had one.
    pub fn take_file(&mut self) -> Option<StoredUpload> {
        self.file.take()
    }

    /// Takes a text field by name.
    pub fn take_text(&mut self, name: &str) -> Option<String> {
        self.fields.remove(name)
    }
}
