//! Filesystem-backed storage for uploaded profile images.
//!
//! Uploads are written under the configured media directory with a random
//! file name that preserves the original extension, and served back at
//! `/media/{name}`. A failed profile insert after a successful upload
//! leaves the file orphaned on disk; that is accepted.

use std::io;
use std::path::{Path, PathBuf};

use uuid::Uuid;

/// Handle to the upload directory, cheap to clone into request handlers.
#[derive(Debug, Clone)]
pub struct MediaStore {
    dir: PathBuf,
}

impl MediaStore {
    /// Creates the media directory if needed and returns a store rooted at it.
    pub fn new(dir: &str) -> io::Result<Self> {
        std::fs::create_dir_all(dir)?;
        Ok(Self {
            dir: PathBuf::from(dir),
        })
    }

    /// The directory uploads live in, for the static file service.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Stores an upload and returns its public URL path (`/media/{name}`).
    ///
    /// The extension comes from the submitted file name when it looks sane,
    /// falling back to magic-byte sniffing, then to `bin`.
    pub async fn save(&self, original_name: Option<&str>, bytes: &[u8]) -> io::Result<String> {
        let ext = original_name
            .and_then(sanitized_extension)
            .unwrap_or_else(|| detect_image_ext(bytes).unwrap_or("bin").to_string());
        let file_name = format!("{}.{}", Uuid::new_v4().simple(), ext);
        let path = self.dir.join(&file_name);
        tokio::fs::write(&path, bytes).await?;
        tracing::debug!(file = %file_name, size = bytes.len(), "stored upload");
        Ok(format!("/media/{file_name}"))
    }
}

/// Extension from the submitted file name, lowercased; anything longer than
/// 8 characters or containing non-alphanumerics is treated as absent.
fn sanitized_extension(name: &str) -> Option<String> {
    let ext = Path::new(name).extension()?.to_str()?.to_ascii_lowercase();
    (!ext.is_empty() && ext.len() <= 8 && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .then_some(ext)
}

/// Detect an image extension from magic bytes.
fn detect_image_ext(bytes: &[u8]) -> Option<&'static str> {
    if bytes.starts_with(b"\x89PNG") {
        Some("png")
    } else if bytes.starts_with(b"\xFF\xD8\xFF") {
        Some("jpg")
    } else if bytes.starts_with(b"GIF8") {
        Some("gif")
    } else if bytes.starts_with(b"RIFF") && bytes.get(8..12) == Some(b"WEBP") {
        Some("webp")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_preserves_extension() {
        let dir = tempfile::tempdir().unwrap();
        let store = MediaStore::new(dir.path().to_str().unwrap()).unwrap();

        let url = store.save(Some("avatar.PNG"), b"hello").await.unwrap();
        assert!(url.starts_with("/media/"));
        assert!(url.ends_with(".png"));

        let name = url.strip_prefix("/media/").unwrap();
        let on_disk = std::fs::read(dir.path().join(name)).unwrap();
        assert_eq!(on_disk, b"hello");
    }

    #[tokio::test]
    async fn save_sniffs_image_type_without_name() {
        let dir = tempfile::tempdir().unwrap();
        let store = MediaStore::new(dir.path().to_str().unwrap()).unwrap();

        let url = store.save(None, b"\x89PNG\r\n\x1a\n....").await.unwrap();
        assert!(url.ends_with(".png"));

        let url = store.save(None, b"\xFF\xD8\xFF\xE0....").await.unwrap();
        assert!(url.ends_with(".jpg"));
    }

    #[tokio::test]
    async fn save_falls_back_to_bin() {
        let dir = tempfile::tempdir().unwrap();
        let store = MediaStore::new(dir.path().to_str().unwrap()).unwrap();

        let url = store.save(Some("noextension"), b"plain bytes").await.unwrap();
        assert!(url.ends_with(".bin"));
    }

    #[tokio::test]
    async fn save_generates_unique_names() {
        let dir = tempfile::tempdir().unwrap();
        let store = MediaStore::new(dir.path().to_str().unwrap()).unwrap();

        let a = store.save(Some("x.png"), b"same").await.unwrap();
        let b = store.save(Some("x.png"), b"same").await.unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn extension_sanitizing() {
        assert_eq!(sanitized_extension("photo.jpeg"), Some("jpeg".to_string()));
        assert_eq!(sanitized_extension("archive.tar.gz"), Some("gz".to_string()));
        assert_eq!(sanitized_extension("UPPER.WEBP"), Some("webp".to_string()));
        assert_eq!(sanitized_extension("noext"), None);
        assert_eq!(sanitized_extension("bad.ext-name"), None);
        assert_eq!(sanitized_extension("too.verylongextension"), None);
    }

    #[test]
    fn magic_byte_detection() {
        assert_eq!(detect_image_ext(b"\x89PNG\r\n"), Some("png"));
        assert_eq!(detect_image_ext(b"\xFF\xD8\xFF\xDB"), Some("jpg"));
        assert_eq!(detect_image_ext(b"GIF89a"), Some("gif"));
        assert_eq!(detect_image_ext(b"RIFF\x00\x00\x00\x00WEBPVP8 "), Some("webp"));
        assert_eq!(detect_image_ext(b"plain text"), None);
    }
}
