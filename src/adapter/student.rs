use super::AdapterError;

/// The *target* interface the rest of a university system expects.
pub trait Student {
    /// First and last name separated by a single space.
    fn full_name(&self) -> String;

    /// Age in whole years.
    fn age(&self) -> Result<u32, AdapterError>;

    fn contact_number(&self) -> u64;
}

/// A student enrolled directly, already in the target shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniversityStudent {
    full_name: String,
    age: u32,
    contact_number: u64,
}

impl UniversityStudent {
    pub fn new(full_name: impl Into<String>, age: u32, contact_number: u64) -> Self {
        Self {
            full_name: full_name.into(),
            age,
            contact_number,
        }
    }
}

impl Student for UniversityStudent {
    fn full_name(&self) -> String {
        self.full_name.clone()
    }

    fn age(&self) -> Result<u32, AdapterError> {
        Ok(self.age)
    }

    fn contact_number(&self) -> u64 {
        self.contact_number
    }
}
