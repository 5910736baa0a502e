use contact_book::error::{StorageError, StorageResult};
use contact_book::models::AddressBook;
use contact_book::repositories::BookRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock book repository for testing.
///
/// Provides an in-memory implementation of BookRepository that can be
/// seeded with a stored book, made to fail, and tracks method calls for
/// verification.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockBookRepository {
    stored: Arc<Mutex<Option<AddressBook>>>,
    fail_reads: Arc<Mutex<bool>>,
    fail_writes: Arc<Mutex<bool>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockBookRepository {
    /// Create a new MockBookRepository with nothing stored.
    pub fn new() -> Self {
        Self {
            stored: Arc::new(Mutex::new(None)),
            fail_reads: Arc::new(Mutex::new(false)),
            fail_writes: Arc::new(Mutex::new(false)),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Seed the repository with a previously stored book.
    pub fn with_book(book: AddressBook) -> Self {
        let repo = Self::new();
        *repo.stored.lock().unwrap() = Some(book);
        repo
    }

    /// Make reads report a corrupt store.
    pub fn fail_reads(&self) {
        *self.fail_reads.lock().unwrap() = true;
    }

    /// Make writes fail.
    pub fn fail_writes(&self) {
        *self.fail_writes.lock().unwrap() = true;
    }

    /// The last saved book, if any.
    pub fn stored(&self) -> Option<AddressBook> {
        self.stored.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockBookRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl BookRepository for MockBookRepository {
    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        self.track_call("save");

        if *self.fail_writes.lock().unwrap() {
            return Err(StorageError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only store",
            )));
        }
        *self.stored.lock().unwrap() = Some(book.clone());
        Ok(())
    }

    fn try_load(&self) -> StorageResult<Option<AddressBook>> {
        self.track_call("try_load");

        if *self.fail_reads.lock().unwrap() {
            return Err(StorageError::Corrupt("truncated snapshot".to_string()));
        }
        Ok(self.stored.lock().unwrap().clone())
    }
}
