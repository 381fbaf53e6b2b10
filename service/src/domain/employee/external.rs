//! Employee hired through another company.

#[cfg(doc)]
use super::Employee;
use super::{full_name, EmployerName, Id, Name};

/// External [`Employee`], paid by their own employer.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct External {
    /// ID of this [`Employee`].
    pub id: Id,

    /// First [`Name`] of this [`Employee`].
    pub first_name: Name,

    /// Last [`Name`] of this [`Employee`].
    pub last_name: Name,

    /// Name of the company employing this [`Employee`].
    pub employer: EmployerName,
}

impl External {
    /// Creates a new [`External`] employee with a random [`Id`].
    #[must_use]
    pub fn new(first_name: Name, last_name: Name, employer: EmployerName) -> Self {
        Self {
            id: Id::new(),
            first_name,
            last_name,
            employer,
        }
    }

    /// Returns full name of this [`Employee`].
    #[must_use]
    pub fn full_name(&self) -> String {
        full_name(&self.first_name, &self.last_name)
    }
}
