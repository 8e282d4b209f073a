use super::BuilderError;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// A person's profile: two required names and a handful of optional details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    first_name: String,
    last_name: String,
    age: Option<u32>,
    phone: Option<u64>,
    address: Option<String>,
}

impl Profile {
    pub fn builder() -> ProfileBuilder {
        ProfileBuilder::default()
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn age(&self) -> Option<u32> {
        self.age
    }

    pub fn phone(&self) -> Option<u64> {
        self.phone
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }
}

/// Builder for [`Profile`] that checks its required fields at `build()` time.
#[derive(Debug, Clone, Default)]
#[must_use = "a builder does nothing unless you call `.build()`"]
pub struct ProfileBuilder {
    first_name: Option<String>,
    last_name: Option<String>,
    age: Option<u32>,
    phone: Option<u64>,
    address: Option<String>,
}

/// Generates `with_<field>` setters for optional builder fields.
///
/// `copy` fields take the value as-is; `into` fields accept anything convertible.
macro_rules! optional_setters {
    ($builder:ident { $($mode:ident $field:ident: $ty:ty),* $(,)? }) => {
        impl $builder {
            $( optional_setters!(@setter $mode $field $ty); )*
        }
    };
    (@setter copy $field:ident $ty:ty) => {
        paste::paste! {
            pub fn [<with_ $field>](mut self, value: $ty) -> Self {
                self.$field = Some(value);
                self
            }
        }
    };
    (@setter into $field:ident $ty:ty) => {
        paste::paste! {
            pub fn [<with_ $field>](mut self, value: impl Into<$ty>) -> Self {
                self.$field = Some(value.into());
                self
            }
        }
    };
}

optional_setters!(ProfileBuilder {
    copy age: u32,
    copy phone: u64,
    into address: String,
});

impl ProfileBuilder {
    pub fn first_name(mut self, name: impl Into<String>) -> Self {
        self.first_name = Some(name.into());
        self
    }

    pub fn last_name(mut self, name: impl Into<String>) -> Self {
        self.last_name = Some(name.into());
        self
    }

    pub fn build(self) -> Result<Profile, BuilderError> {
        let profile = Profile {
            first_name: required("first_name", self.first_name)?,
            last_name: required("last_name", self.last_name)?,
            age: self.age,
            phone: self.phone,
            address: self.address,
        };
        debug!(?profile, "Built profile");
        Ok(profile)
    }
}

fn required(field: &'static str, value: Option<String>) -> Result<String, BuilderError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => {
            warn!(field, "Required field missing");
            Err(BuilderError::MissingField(field))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_only_leaves_optionals_empty() {
        let profile = Profile::builder()
            .first_name("Ada")
            .last_name("Lovelace")
            .build()
            .unwrap();
        assert_eq!(profile.first_name(), "Ada");
        assert_eq!(profile.last_name(), "Lovelace");
        assert_eq!(profile.age(), None);
        assert_eq!(profile.phone(), None);
        assert_eq!(profile.address(), None);
    }

    #[test]
    fn generated_setters_keep_last_value() {
        let profile = Profile::builder()
            .first_name("Ada")
            .last_name("Lovelace")
            .with_age(27)
            .with_age(36)
            .with_phone(5550100)
            .with_address("St James's Square")
            .with_address(String::from("Marylebone"))
            .build()
            .unwrap();
        assert_eq!(profile.age(), Some(36));
        assert_eq!(profile.phone(), Some(5550100));
        assert_eq!(profile.address(), Some("Marylebone"));
    }

    #[test]
    fn missing_required_field_is_an_error() {
        let err = Profile::builder().first_name("Ada").build().unwrap_err();
        assert_eq!(err, BuilderError::MissingField("last_name"));

        let err = Profile::builder().last_name("Lovelace").build().unwrap_err();
        assert_eq!(err, BuilderError::MissingField("first_name"));
    }

    #[test]
    fn blank_required_field_counts_as_missing() {
        let err = Profile::builder()
            .first_name("   ")
            .last_name("Lovelace")
            .build()
            .unwrap_err();
        assert_eq!(err, BuilderError::MissingField("first_name"));
    }
}
