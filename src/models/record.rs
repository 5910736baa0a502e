//! Record model: one contact in the address book.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use crate::error::{RecordError, RecordResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact: a name, zero or more phone numbers and an optional birthday.
///
/// The name is fixed at construction and is the record's key in an
/// [`AddressBook`](super::AddressBook). Phones keep insertion order and are
/// not deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    #[serde(default)]
    phones: Vec<Phone>,

    #[serde(default)]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if `name` is blank.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Phones in the order they were added.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Validate `phone` and append it.
    pub fn add_phone(&mut self, phone: &str) -> RecordResult<()> {
        let phone = Phone::new(phone)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Replace every phone with the single phone `phone`.
    ///
    /// The phone is validated before anything is touched, so an invalid
    /// number leaves the record unchanged.
    pub fn set_phone(&mut self, phone: &str) -> RecordResult<()> {
        let phone = Phone::new(phone)?;
        self.phones = vec![phone];
        Ok(())
    }

    /// Remove all phones equal to `phone`. Missing phones are not an error.
    pub fn remove_phone(&mut self, phone: &str) {
        self.phones.retain(|p| p.as_str() != phone);
    }

    /// Replace the first phone equal to `old` with `new`, keeping its position.
    ///
    /// # Errors
    ///
    /// - `RecordError::PhoneNotFound` if `old` is not on the record
    /// - `RecordError::InvalidNewPhone` if `new` is not a valid phone
    pub fn edit_phone(&mut self, old: &str, new: &str) -> RecordResult<()> {
        let index = self
            .phones
            .iter()
            .position(|p| p.as_str() == old)
            .ok_or_else(|| RecordError::PhoneNotFound(old.to_string()))?;

        let new_phone = Phone::new(new).map_err(RecordError::InvalidNewPhone)?;
        self.phones[index] = new_phone;
        Ok(())
    }

    /// First phone equal to `phone`, if any.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Attach a birthday, replacing any previous one.
    pub fn add_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }

    pub fn show_birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }
}

/// Renders as `<name>: <phone1>; <phone2>[, Birthday: DD.MM.YYYY]`.
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{}: {}", self.name, phones)?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", Birthday: {}", birthday)?;
        }
        Ok(())
    }
}
