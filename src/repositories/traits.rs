use crate::error::StorageResult;
use crate::models::AddressBook;

/// Repository for persisting the address book between runs.
///
/// Provides abstraction over where the book is stored, enabling different
/// implementations (JSON file, in-memory mock). Every save is a full
/// snapshot of the book.
pub trait BookRepository: Send + Sync {
    /// Overwrite the stored book with `book`.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;

    /// Read the stored book. `Ok(None)` means nothing has been stored yet.
    fn try_load(&self) -> StorageResult<Option<AddressBook>>;

    /// Read the stored book, falling back to an empty book.
    ///
    /// Never fails: a missing store starts fresh and an unreadable one is
    /// reported through `tracing` before starting fresh.
    fn load(&self) -> AddressBook {
        match self.try_load() {
            Ok(Some(book)) => {
                tracing::info!("Address book loaded with {} contacts", book.len());
                book
            }
            Ok(None) => {
                tracing::info!("No saved address book found, starting with an empty one");
                AddressBook::new()
            }
            Err(e) => {
                tracing::warn!("Failed to read saved address book, starting with an empty one: {}", e);
                AddressBook::new()
            }
        }
    }
}
