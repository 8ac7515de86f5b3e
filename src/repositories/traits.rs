use crate::error::StorageResult;
use crate::models::AddressBook;

/// Repository for persisting the whole address book.
///
/// The book is loaded once at startup and saved once at shutdown, so the
/// repository works on the complete value rather than on single records.
pub trait BookRepository {
    /// Load the stored book, or an empty one if nothing has been saved yet.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Replace the stored book with `book`.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
