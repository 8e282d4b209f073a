//! Presents a registry [`Person`] as a [`Student`].

use super::{AdapterError, Person, Student};
use chrono::{Datelike, Local, NaiveDate};
use tracing::debug;

const DATE_OF_BIRTH_FORMAT: &str = "%Y-%m-%d";

/// Wraps a [`Person`] and answers the [`Student`] interface in terms of it.
///
/// Age is computed as a plain year difference against the reference year. The reference
/// year is the current local year unless pinned with [`StudentAdapter::with_reference_year`].
#[derive(Debug, Clone)]
pub struct StudentAdapter {
    person: Person,
    reference_year: Option<i32>,
}

impl StudentAdapter {
    pub fn new(person: Person) -> Self {
        Self {
            person,
            reference_year: None,
        }
    }

    /// Pins the year used for age calculation.
    pub fn with_reference_year(mut self, year: i32) -> Self {
        self.reference_year = Some(year);
        self
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    fn birth_year(&self) -> Result<i32, AdapterError> {
        let raw = self.person.date_of_birth();
        NaiveDate::parse_from_str(raw, DATE_OF_BIRTH_FORMAT)
            .map(|date| date.year())
            .map_err(|_| AdapterError::InvalidDateOfBirth(raw.to_string()))
    }

    fn reference_year(&self) -> i32 {
        self.reference_year.unwrap_or_else(|| Local::now().year())
    }
}

impl Student for StudentAdapter {
    fn full_name(&self) -> String {
        format!("{} {}", self.person.first_name(), self.person.last_name())
    }

    fn age(&self) -> Result<u32, AdapterError> {
        let birth_year = self.birth_year()?;
        let reference_year = self.reference_year();
        debug!(nic = self.person.nic(), birth_year, reference_year, "Computing age");

        let years = reference_year
            .checked_sub(birth_year)
            .ok_or(AdapterError::AgeOutOfRange {
                birth_year,
                reference_year,
            })?;
        u32::try_from(years).map_err(|_| AdapterError::BirthYearInFuture {
            birth_year,
            reference_year,
        })
    }

    fn contact_number(&self) -> u64 {
        self.person.phone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kamal() -> Person {
        Person::new("200012345678", "Kamal", "Perera", "2000-05-14", 771234567)
    }

    #[test]
    fn full_name_joins_with_single_space() {
        let adapter = StudentAdapter::new(kamal());
        assert_eq!(adapter.full_name(), "Kamal Perera");
    }

    #[test]
    fn age_is_year_difference() {
        let adapter = StudentAdapter::new(kamal()).with_reference_year(2024);
        assert_eq!(adapter.age(), Ok(24));

        // Month and day are ignored.
        let adapter = StudentAdapter::new(kamal()).with_reference_year(2000);
        assert_eq!(adapter.age(), Ok(0));
    }

    #[test]
    fn age_defaults_to_current_year() {
        let adapter = StudentAdapter::new(kamal());
        let expected = Local::now().year() - 2000;
        assert_eq!(adapter.age(), Ok(expected as u32));
    }

    #[test]
    fn contact_number_passes_through() {
        assert_eq!(StudentAdapter::new(kamal()).contact_number(), 771234567);
    }

    #[test]
    fn rejects_malformed_date_of_birth() {
        let person = Person::new("1", "Nimal", "Silva", "14/05/2000", 1);
        let adapter = StudentAdapter::new(person).with_reference_year(2024);
        assert_eq!(
            adapter.age(),
            Err(AdapterError::InvalidDateOfBirth("14/05/2000".to_string()))
        );
    }

    #[test]
    fn rejects_birth_year_after_reference_year() {
        let adapter = StudentAdapter::new(kamal()).with_reference_year(1999);
        assert_eq!(
            adapter.age(),
            Err(AdapterError::BirthYearInFuture {
                birth_year: 2000,
                reference_year: 1999
            })
        );
    }

    #[test]
    fn extreme_reference_years_are_errors() {
        let adapter = StudentAdapter::new(kamal()).with_reference_year(i32::MIN);
        assert_eq!(
            adapter.age(),
            Err(AdapterError::BirthYearInFuture {
                birth_year: 2000,
                reference_year: i32::MIN
            })
        );

        let ancient = Person::new("2", "Old", "Record", "-0500-01-01", 1);
        let adapter = StudentAdapter::new(ancient).with_reference_year(i32::MAX);
        assert_eq!(
            adapter.age(),
            Err(AdapterError::AgeOutOfRange {
                birth_year: -500,
                reference_year: i32::MAX
            })
        );
    }
}
