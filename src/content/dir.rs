//! Local directory content source.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use super::{ContentError, ContentKey, ContentSource};
use crate::models::ContentDocument;

/// Reads `<dir>/<MM-DD>.json` from disk.
#[derive(Debug, Clone)]
pub struct DirContentSource {
    dir: PathBuf,
}

impl DirContentSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &ContentKey) -> PathBuf {
        self.dir.join(key.file_name())
    }
}

#[async_trait]
impl ContentSource for DirContentSource {
    async fn fetch(&self, key: &ContentKey) -> Result<ContentDocument, ContentError> {
        let path = self.path_for(key);
        debug!(path = %path.display(), "Reading day content");

        let body = match tokio::fs::read(&path).await {
            Ok(body) => body,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ContentError::NotFound(key.clone()));
            }
            Err(e) => return Err(ContentError::Transport(e.to_string())),
        };

        Ok(serde_json::from_slice(&body)?)
    }

    fn locate(&self, key: &ContentKey) -> String {
        self.path_for(key).display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::resolve_key;
    use crate::models::CalendarDate;
    use tempfile::tempdir;

    fn key(month: u32, day: u32) -> ContentKey {
        resolve_key(&CalendarDate::new(2026, month, day).unwrap())
    }

    #[tokio::test]
    async fn test_reads_document() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("10-18.json"),
            r#"{"literary_events":[{"title":"T","description":"D","type":"israeli"}]}"#,
        )
        .unwrap();

        let source = DirContentSource::new(dir.path());
        let doc = source.fetch(&key(10, 18)).await.unwrap();
        assert_eq!(doc.events().len(), 1);
        assert!(doc.events()[0].is_israeli());
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let source = DirContentSource::new(dir.path());
        let err = source.fetch(&key(2, 30)).await.unwrap_err();
        assert!(matches!(err, ContentError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_bad_json_is_malformed() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("01-01.json"), "[1, 2").unwrap();
        let source = DirContentSource::new(dir.path());
        let err = source.fetch(&key(1, 1)).await.unwrap_err();
        assert!(matches!(err, ContentError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_unreadable_path_is_transport() {
        let dir = tempdir().unwrap();
        // A directory where the file should be.
        std::fs::create_dir(dir.path().join("07-04.json")).unwrap();
        let source = DirContentSource::new(dir.path());
        let err = source.fetch(&key(7, 4)).await.unwrap_err();
        assert!(matches!(err, ContentError::Transport(_)));
    }

    #[test]
    fn test_locate() {
        let source = DirContentSource::new("/srv/content");
        assert_eq!(source.locate(&key(3, 7)), "/srv/content/03-07.json");
    }
}
