use crate::error::Result;
use async_trait::async_trait;
use mission_core::Document;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;

/// The persistence seam: load the whole document, commit the whole document.
/// Callers are expected to serialize their read-modify-write cycles; the
/// repository itself makes no concurrency promises.
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    async fn load(&self) -> Result<Document>;
    async fn commit(&self, document: &Document) -> Result<()>;
}

/// Stores the document as one pretty-printed JSON file. A missing file is
/// seeded with the default document on first load, so a fresh data directory
/// comes up with the original board layout.
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[async_trait]
impl DocumentRepository for JsonFileRepository {
    async fn load(&self) -> Result<Document> {
        match fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "seeding new document file");
                let document = Document::default();
                self.commit(&document).await?;
                Ok(document)
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn commit(&self, document: &Document) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(document)?;
        fs::write(&self.path, json).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_seeds_default_document() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("data").join("board.json"));

        let document = repo.load().await.unwrap();
        assert_eq!(document.columns.len(), 5);
        assert!(repo.path().exists());
    }

    #[tokio::test]
    async fn commit_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("board.json"));

        let mut document = Document::default();
        document.allocate_task_id();
        document.columns.push("Icebox".to_string());
        repo.commit(&document).await.unwrap();

        let loaded = repo.load().await.unwrap();
        assert_eq!(loaded.next_task_id, 2);
        assert!(loaded.columns.contains(&"Icebox".to_string()));
    }

    #[tokio::test]
    async fn corrupt_file_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.json");
        fs::write(&path, b"{ not json").await.unwrap();

        let repo = JsonFileRepository::new(&path);
        let err = repo.load().await.unwrap_err();
        assert!(matches!(err, crate::StoreError::Serialize(_)));
    }
}
