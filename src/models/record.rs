//! Record model representing one contact in the address book.

use crate::domain::{Birthday, ContactName, Phone, ValidationError};
use crate::error::{RecordError, RecordResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// A contact: a name, its phone numbers and an optional birthday.
///
/// Phones keep the order they were added in and may repeat.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    /// Name the record is stored under
    name: ContactName,

    /// Phone numbers, in insertion order
    #[serde(default)]
    phones: Vec<Phone>,

    /// Date of birth
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with no phones and no birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the name is blank.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: ContactName::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    /// The contact's name.
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// The contact's phone numbers, in the order they were added.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// The contact's birthday, if one was set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number.
    ///
    /// Duplicates are allowed; adding the same number twice stores it twice.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        let phone = Phone::new(phone)?;
        debug!("Adding phone {} to {}", phone, self.name);
        self.phones.push(phone);
        Ok(())
    }

    /// Remove every entry equal to `phone`.
    ///
    /// Returns `false` and leaves the record untouched when the number is
    /// not on the record.
    pub fn remove_phone(&mut self, phone: &str) -> bool {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != phone);

        if self.phones.len() == before {
            debug!("Phone number {} for the contact of {} not identified", phone, self.name);
            return false;
        }
        true
    }

    /// Replace `old` with `new`, keeping its position in the list.
    ///
    /// # Errors
    ///
    /// - `RecordError::PhoneNotFound` if `old` is not on the record
    /// - `RecordError::Validation` if `new` is not a valid phone
    ///
    /// On error the phone list is unchanged.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> RecordResult<()> {
        if self.find_phone(old).is_none() {
            return Err(RecordError::PhoneNotFound(old.to_string()));
        }
        let replacement = Phone::new(new)?;

        for phone in self.phones.iter_mut().filter(|p| p.as_str() == old) {
            *phone = replacement.clone();
        }
        debug!("Changed phone {} to {} for {}", old, new, self.name);
        Ok(())
    }

    /// Find a phone number on the record.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Validate and set the birthday, replacing any previous one.
    pub fn add_birthday(&mut self, birthday: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(birthday)?);
        debug!("Birthday {} set for {}", birthday, self.name);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        let birthday = self.birthday.as_ref().map_or("none", Birthday::as_str);
        write!(
            f,
            "Contact name: {}, phones: {}, birthday: {}",
            self.name,
            phones.join("; "),
            birthday
        )
    }
}
