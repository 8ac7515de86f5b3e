use contact_assistant::error::{StorageError, StorageResult};
use contact_assistant::models::AddressBook;
use contact_assistant::repositories::BookRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock book repository for testing.
///
/// Keeps the "persisted" book in memory and tracks method calls for
/// verification. Can be told to fail on save.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockBookRepository {
    stored: Arc<Mutex<Option<AddressBook>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail_on_save: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockBookRepository {
    /// Create a repository with nothing saved yet.
    pub fn new() -> Self {
        Self {
            stored: Arc::new(Mutex::new(None)),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
            fail_on_save: Arc::new(Mutex::new(false)),
        }
    }

    /// Create a repository that already holds `book`.
    pub fn with_book(book: AddressBook) -> Self {
        let repo = Self::new();
        *repo.stored.lock().unwrap() = Some(book);
        repo
    }

    /// The last saved book, if any.
    pub fn stored(&self) -> Option<AddressBook> {
        self.stored.lock().unwrap().clone()
    }

    /// Make every following save fail.
    pub fn fail_saves(&self) {
        *self.fail_on_save.lock().unwrap() = true;
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
    fn load(&self) -> StorageResult<AddressBook> {
        self.track_call("load");
        Ok(self.stored().unwrap_or_default())
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        self.track_call("save");

        if *self.fail_on_save.lock().unwrap() {
            return Err(StorageError::Io {
                path: "mock".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            });
        }

        *self.stored.lock().unwrap() = Some(book.clone());
        Ok(())
    }
}
