//! [`Employee`] definitions.

pub mod external;
pub mod internal;

use common::define_kind;
use derive_more::{AsRef, Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use self::{
    external::External,
    internal::{AttendancePolicy, InvalidRaise, Internal, JobLevel, YearsInService},
};

/// Employee of the organization.
#[derive(Clone, Debug, Eq, From, PartialEq)]
pub enum Employee {
    #[doc(hidden)]
    Internal(Internal),
    #[doc(hidden)]
    External(External),
}

impl Employee {
    /// Returns ID of this [`Employee`].
    #[must_use]
    pub fn id(&self) -> Id {
        match self {
            Self::Internal(e) => e.id(),
            Self::External(e) => e.id,
        }
    }

    /// Returns [`Kind`] of this [`Employee`].
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Self::Internal(_) => Kind::Internal,
            Self::External(_) => Kind::External,
        }
    }

    /// Returns first [`Name`] of this [`Employee`].
    #[must_use]
    pub fn first_name(&self) -> &Name {
        match self {
            Self::Internal(e) => e.first_name(),
            Self::External(e) => &e.first_name,
        }
    }

    /// Returns last [`Name`] of this [`Employee`].
    #[must_use]
    pub fn last_name(&self) -> &Name {
        match self {
            Self::Internal(e) => e.last_name(),
            Self::External(e) => &e.last_name,
        }
    }

    /// Returns full name of this [`Employee`].
    #[must_use]
    pub fn full_name(&self) -> String {
        full_name(self.first_name(), self.last_name())
    }

    /// Returns the [`Internal`] variant of this [`Employee`], if it is one.
    #[must_use]
    pub fn as_internal(&self) -> Option<&Internal> {
        match self {
            Self::Internal(e) => Some(e),
            Self::External(_) => None,
        }
    }

    /// Converts this [`Employee`] into the [`Internal`] variant, if it is one.
    #[must_use]
    pub fn into_internal(self) -> Option<Internal> {
        match self {
            Self::Internal(e) => Some(e),
            Self::External(_) => None,
        }
    }
}

/// Joins the provided first and last [`Name`]s into a full name.
pub(crate) fn full_name(first: &Name, last: &Name) -> String {
    format!("{first} {last}")
}

/// ID of an [`Employee`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
pub struct Id(Uuid);

impl Id {
    /// Creates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// First or last name of an [`Employee`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str)]
pub struct Name(String);

impl Name {
    /// Creates a new [`Name`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        check_name(&name).then_some(Self(name))
    }
}

impl FromStr for Name {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Name`")
    }
}

/// Name of the company employing an [`External`] employee.
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str)]
pub struct EmployerName(String);

impl EmployerName {
    /// Creates a new [`EmployerName`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        check_name(&name).then_some(Self(name))
    }
}

impl FromStr for EmployerName {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `EmployerName`")
    }
}

/// Checks whether the given `name` is non-empty, not padded with whitespace
/// and fits 512 bytes.
fn check_name(name: &str) -> bool {
    name.trim() == name && !name.is_empty() && name.len() <= 512
}

define_kind! {
    #[doc = "Kind of an [`Employee`]."]
    enum Kind {
        #[doc = "[`Internal`] [`Employee`]."]
        Internal = 1,

        #[doc = "[`External`] [`Employee`]."]
        External = 2,
    }
}

#[cfg(test)]
mod spec {
    use common::{money::Currency, Money};

    use super::{
        EmployerName, Employee, External, Internal, JobLevel, Kind, Name,
        YearsInService,
    };

    fn name(s: &str) -> Name {
        Name::new(s).unwrap()
    }

    fn john_doe() -> Internal {
        Internal::new(
            name("John"),
            name("Doe"),
            YearsInService::new(1),
            Money::new(3000, Currency::Usd),
            false,
            JobLevel::FIRST,
        )
    }

    #[test]
    fn full_name_is_concatenation() {
        let employee = Employee::from(john_doe());

        assert_eq!(employee.full_name(), "John Doe");
        assert!(employee.full_name().starts_with(employee.first_name().as_ref()));
        assert!(employee.full_name().ends_with(employee.last_name().as_ref()));
        assert!(employee.full_name().contains("ohn"));
    }

    #[test]
    fn exposes_variant() {
        let internal = Employee::from(john_doe());
        assert_eq!(internal.kind(), Kind::Internal);
        assert!(internal.as_internal().is_some());

        let external = Employee::from(External::new(
            name("Amanda"),
            name("Smith"),
            EmployerName::new("IT for Everyone, Inc").unwrap(),
        ));
        assert_eq!(external.kind(), Kind::External);
        assert_eq!(external.full_name(), "Amanda Smith");
        assert!(external.into_internal().is_none());
    }

    #[test]
    fn name_validation() {
        assert!(Name::new("Megan").is_some());
        assert!(Name::new("").is_none());
        assert!(Name::new(" Megan").is_none());
        assert!(EmployerName::new("").is_none());
    }

    #[test]
    fn kind_representation() {
        assert_eq!(Kind::Internal.u8(), 1);
        assert_eq!(Kind::from_u8(2), Some(Kind::External));
        assert_eq!(Kind::from_u8(3), None);
        assert_eq!(Kind::External.to_string(), "EXTERNAL");
        assert_eq!("INTERNAL".parse::<Kind>(), Ok(Kind::Internal));
    }
}
