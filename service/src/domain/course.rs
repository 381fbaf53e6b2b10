//! [`Course`] definitions.

use derive_more::{AsRef, Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(doc)]
use crate::domain::employee::Internal;

/// Course an [`Internal`] employee may attend.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Course {
    /// ID of this [`Course`].
    pub id: Id,

    /// [`Title`] of this [`Course`].
    pub title: Title,

    /// Indicator whether this [`Course`] was constructed in place rather than
    /// retrieved from or written to a repository.
    is_new: bool,
}

impl Course {
    /// Creates a brand new [`Course`] with a random [`Id`].
    #[must_use]
    pub fn new(title: Title) -> Self {
        Self {
            id: Id::new(),
            title,
            is_new: true,
        }
    }

    /// Rebuilds an already stored [`Course`].
    #[must_use]
    pub fn existing(id: Id, title: Title) -> Self {
        Self {
            id,
            title,
            is_new: false,
        }
    }

    /// Marks this [`Course`] as stored.
    #[must_use]
    pub fn persisted(self) -> Self {
        Self {
            is_new: false,
            ..self
        }
    }

    /// Indicates whether this [`Course`] is freshly constructed and was never
    /// stored.
    #[must_use]
    pub fn is_new(&self) -> bool {
        self.is_new
    }
}

/// ID of a [`Course`].
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
    /// ID of the first obligatory "Company Introduction" [`Course`].
    pub const FIRST_OBLIGATORY: Self =
        Self(Uuid::from_u128(0x37e0_3ca7_c730_4351_834c_b66f_280c_db01));

    /// ID of the second obligatory "Respecting Your Colleagues" [`Course`].
    pub const SECOND_OBLIGATORY: Self =
        Self(Uuid::from_u128(0x1fd1_15cf_f44c_4982_86bc_a8fe_2e4f_f83e));

    /// Creates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Title of a [`Course`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str)]
pub struct Title(String);

impl Title {
    /// Creates a new [`Title`] if the given `title` is valid.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Option<Self> {
        let title = title.into();
        Self::check(&title).then_some(Self(title))
    }

    /// Checks whether the given `title` is a valid [`Title`].
    fn check(title: impl AsRef<str>) -> bool {
        let title = title.as_ref();
        title.trim() == title && !title.is_empty() && title.len() <= 512
    }
}

impl FromStr for Title {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Title`")
    }
}

#[cfg(test)]
mod spec {
    use super::{Course, Id, Title};

    fn title(s: &str) -> Title {
        Title::new(s).unwrap()
    }

    #[test]
    fn constructed_course_is_new() {
        let course = Course::new(title("Test Course"));

        assert!(course.is_new());
    }

    #[test]
    fn existing_and_persisted_courses_are_not_new() {
        let existing = Course::existing(Id::new(), title("Company Introduction"));
        assert!(!existing.is_new());

        let course = Course::new(title("Disaster Management 101"));
        let id = course.id;
        let stored = course.persisted();
        assert!(!stored.is_new());
        assert_eq!(stored.id, id);
    }

    #[test]
    fn obligatory_ids_match_well_known_records() {
        assert_eq!(
            Id::FIRST_OBLIGATORY.to_string(),
            "37e03ca7-c730-4351-834c-b66f280cdb01",
        );
        assert_eq!(
            Id::SECOND_OBLIGATORY.to_string(),
            "1fd115cf-f44c-4982-86bc-a8fe2e4ff83e",
        );
    }

    #[test]
    fn title_validation() {
        assert!(Title::new("Dealing with Customers 101").is_some());
        assert!(Title::new("").is_none());
        assert!(Title::new(" padded ").is_none());
        assert!(Title::new("x".repeat(513)).is_none());
    }
}
