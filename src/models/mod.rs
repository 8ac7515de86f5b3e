//! Data models for the contact book.
//!
//! This module contains the contact record and the address book that
//! stores records by name and schedules upcoming birthday greetings.

pub mod address_book;
pub mod record;

pub use address_book::{AddressBook, UpcomingBirthday, DEFAULT_UPCOMING_DAYS};
pub use record::Record;
