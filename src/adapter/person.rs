use serde::{Deserialize, Serialize};

/// A person as recorded by a population registry.
///
/// This is the *adaptee*: its shape predates the [`Student`](super::Student) interface and
/// cannot be changed. The record is immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    nic: String,
    first_name: String,
    last_name: String,
    date_of_birth: String,
    phone: u64,
}

impl Person {
    /// Creates a new Person record.
    ///
    /// # Arguments
    /// * `nic` - National identity card number
    /// * `first_name` - Given name
    /// * `last_name` - Family name
    /// * `date_of_birth` - Calendar date formatted as `YYYY-MM-DD`
    /// * `phone` - Phone number
    pub fn new(
        nic: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        date_of_birth: impl Into<String>,
        phone: u64,
    ) -> Self {
        Self {
            nic: nic.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            date_of_birth: date_of_birth.into(),
            phone,
        }
    }

    pub fn nic(&self) -> &str {
        &self.nic
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn date_of_birth(&self) -> &str {
        &self.date_of_birth
    }

    pub fn phone(&self) -> u64 {
        self.phone
    }
}
