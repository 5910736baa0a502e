use crate::error::{StorageError, StorageResult};
use crate::models::AddressBook;
use crate::repositories::traits::BookRepository;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Book repository backed by a single JSON file.
///
/// The file holds a list of records. Saves write a sibling temporary file
/// first and rename it over the target, so a crash mid-write leaves the
/// previous snapshot intact.
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository reading and writing `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The data file location.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "addressbook".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn replace_with(temp: &Path, target: &Path, contents: &[u8]) -> io::Result<()> {
        let mut file = fs::File::create(temp)?;
        file.write_all(contents)?;
        file.sync_all()?;
        drop(file);
        fs::rename(temp, target)
    }
}

impl BookRepository for JsonFileRepository {
    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let json = serde_json::to_vec_pretty(book)?;

        let temp = self.temp_path();
        if let Err(e) = Self::replace_with(&temp, &self.path, &json) {
            let _ = fs::remove_file(&temp);
            return Err(e.into());
        }

        tracing::info!(
            "Saved {} contacts to {}",
            book.len(),
            self.path.display()
        );
        Ok(())
    }

    fn try_load(&self) -> StorageResult<Option<AddressBook>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(StorageError::Corrupt(format!(
                "{} is empty",
                self.path.display()
            )));
        }

        let book: AddressBook = serde_json::from_slice(&bytes)?;
        tracing::debug!("Read {} contacts from {}", book.len(), self.path.display());
        Ok(Some(book))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Birthday;
    use crate::models::Record;
    use tempfile::TempDir;

    fn sample_book() -> AddressBook {
        let mut book = AddressBook::new();
        let mut john = Record::new("John").unwrap();
        john.add_phone("1234567890").unwrap();
        john.add_phone("5555555555").unwrap();
        john.add_birthday(Birthday::new("15.06.1990").unwrap());
        book.add_record(john);

        let mut jane = Record::new("Jane").unwrap();
        jane.add_phone("0987654321").unwrap();
        book.add_record(jane);
        book
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("book.json"));

        let book = sample_book();
        repo.save(&book).unwrap();

        let loaded = repo.try_load().unwrap().unwrap();
        assert_eq!(loaded, book);
        assert!(!repo.temp_path().exists());
    }

    #[test]
    fn test_save_overwrites_previous_snapshot() {
        let dir = TempDir::new().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("book.json"));

        repo.save(&sample_book()).unwrap();
        let mut smaller = sample_book();
        smaller.delete("John");
        repo.save(&smaller).unwrap();

        let loaded = repo.load();
        assert_eq!(loaded.len(), 1);
        assert!(loaded.find("John").is_none());
    }

    #[test]
    fn test_failed_save_removes_temp_file() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("book.json");
        // A non-empty directory at the target path makes the rename fail.
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep"), b"x").unwrap();
        let repo = JsonFileRepository::new(target.clone());

        assert!(matches!(repo.save(&sample_book()), Err(StorageError::Io(_))));
        assert!(!repo.temp_path().exists());
        assert!(target.join("keep").exists());
    }

    #[test]
    fn test_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("absent.json"));

        assert!(repo.try_load().unwrap().is_none());
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_truncated_file_degrades_to_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("book.json");
        fs::write(&path, b"[{\"name\": \"John\", \"pho").unwrap();
        let repo = JsonFileRepository::new(path.clone());

        assert!(matches!(repo.try_load(), Err(StorageError::Json(_))));
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_empty_file_is_corrupt() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("book.json");
        fs::write(&path, b"  \n").unwrap();
        let repo = JsonFileRepository::new(path.clone());

        assert!(matches!(repo.try_load(), Err(StorageError::Corrupt(_))));
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_invalid_field_in_file_is_corrupt() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("book.json");
        fs::write(&path, br#"[{"name": "John", "phones": ["123"], "birthday": null}]"#).unwrap();
        let repo = JsonFileRepository::new(path.clone());

        assert!(repo.try_load().is_err());
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_file_format() {
        let dir = TempDir::new().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("book.json"));
        repo.save(&sample_book()).unwrap();

        let value: serde_json::Value =
            serde_json::from_slice(&fs::read(repo.path()).unwrap()).unwrap();
        assert_eq!(value[0]["name"], "John");
        assert_eq!(value[0]["phones"][1], "5555555555");
        assert_eq!(value[0]["birthday"], "15.06.1990");
        assert!(value[1]["birthday"].is_null());
    }
}
