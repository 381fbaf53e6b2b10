//! Employee on the organization's own payroll.

use std::num::NonZeroU16;

use common::Money;
use derive_more::{Display, Error, From, Into};
use rust_decimal::Decimal;

#[cfg(doc)]
use super::Employee;
use super::{full_name, Id, Name};
use crate::domain::Course;

/// Internal [`Employee`].
///
/// Not synchronized: concurrent mutations of the same instance must be
/// serialized by the caller.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Internal {
    /// ID of this [`Employee`].
    id: Id,

    /// First [`Name`] of this [`Employee`].
    first_name: Name,

    /// Last [`Name`] of this [`Employee`].
    last_name: Name,

    /// [`YearsInService`] of this [`Employee`].
    years_in_service: YearsInService,

    /// Current salary of this [`Employee`].
    salary: Money,

    /// [`JobLevel`] of this [`Employee`].
    job_level: JobLevel,

    /// [`Course`]s attended by this [`Employee`], in attendance order.
    attended_courses: Vec<Course>,

    /// Bonus suggested for this [`Employee`], in the salary currency.
    suggested_bonus: Money,

    /// Indicator whether the last raise was exactly [`Internal::MINIMUM_RAISE`].
    minimum_raise_given: bool,
}

impl Internal {
    /// Minimum accepted raise, in the salary currency.
    pub const MINIMUM_RAISE: Decimal = Decimal::ONE_HUNDRED;

    /// Bonus earned per attended [`Course`] per year in service.
    const BONUS_PER_COURSE_YEAR: Decimal = Decimal::ONE_HUNDRED;

    /// Creates a new [`Internal`] employee with a random [`Id`] and no
    /// attended [`Course`]s.
    #[must_use]
    pub fn new(
        first_name: Name,
        last_name: Name,
        years_in_service: YearsInService,
        salary: Money,
        minimum_raise_given: bool,
        job_level: JobLevel,
    ) -> Self {
        Self {
            id: Id::new(),
            first_name,
            last_name,
            years_in_service,
            suggested_bonus: Money::zero(salary.currency),
            salary,
            job_level,
            attended_courses: Vec::new(),
            minimum_raise_given,
        }
    }

    /// Replaces the [`Id`] of this [`Employee`].
    ///
    /// Intended for rebuilding stored employees only.
    #[must_use]
    pub fn with_id(mut self, id: Id) -> Self {
        self.id = id;
        self
    }

    /// Replaces the attended [`Course`]s of this [`Employee`] and recomputes
    /// its suggested bonus.
    ///
    /// Intended for rebuilding stored employees only.
    #[must_use]
    pub fn with_attended_courses(
        mut self,
        courses: impl IntoIterator<Item = Course>,
    ) -> Self {
        self.attended_courses = courses.into_iter().collect();
        self.recompute_suggested_bonus();
        self
    }

    /// Returns ID of this [`Employee`].
    #[must_use]
    pub fn id(&self) -> Id {
        self.id
    }

    /// Returns first [`Name`] of this [`Employee`].
    #[must_use]
    pub fn first_name(&self) -> &Name {
        &self.first_name
    }

    /// Returns last [`Name`] of this [`Employee`].
    #[must_use]
    pub fn last_name(&self) -> &Name {
        &self.last_name
    }

    /// Returns full name of this [`Employee`].
    #[must_use]
    pub fn full_name(&self) -> String {
        full_name(&self.first_name, &self.last_name)
    }

    /// Returns [`YearsInService`] of this [`Employee`].
    #[must_use]
    pub fn years_in_service(&self) -> YearsInService {
        self.years_in_service
    }

    /// Returns the current salary of this [`Employee`].
    #[must_use]
    pub fn salary(&self) -> Money {
        self.salary
    }

    /// Returns [`JobLevel`] of this [`Employee`].
    #[must_use]
    pub fn job_level(&self) -> JobLevel {
        self.job_level
    }

    /// Returns [`Course`]s attended by this [`Employee`].
    #[must_use]
    pub fn attended_courses(&self) -> &[Course] {
        &self.attended_courses
    }

    /// Returns the bonus suggested for this [`Employee`].
    #[must_use]
    pub fn suggested_bonus(&self) -> Money {
        self.suggested_bonus
    }

    /// Indicates whether the last raise was exactly the minimum one.
    #[must_use]
    pub fn minimum_raise_given(&self) -> bool {
        self.minimum_raise_given
    }

    /// Raises the salary of this [`Employee`] by the provided `amount`.
    ///
    /// # Errors
    ///
    /// - With [`InvalidRaise::BelowMinimum`] if the `amount` is below
    ///   [`Internal::MINIMUM_RAISE`].
    /// - With [`InvalidRaise::SalaryOverflow`] if the raised salary cannot be
    ///   represented.
    ///
    /// This [`Employee`] is left untouched on any error.
    pub fn give_raise(&mut self, amount: Decimal) -> Result<(), InvalidRaise> {
        if amount < Self::MINIMUM_RAISE {
            return Err(InvalidRaise::BelowMinimum {
                amount,
                minimum: Self::MINIMUM_RAISE,
            });
        }
        let raised = self.salary.amount.checked_add(amount).ok_or(
            InvalidRaise::SalaryOverflow {
                amount,
                salary: self.salary.amount,
            },
        )?;

        self.salary.amount = raised;
        self.minimum_raise_given = amount == Self::MINIMUM_RAISE;
        Ok(())
    }

    /// Records the provided [`Course`] as attended and recomputes the
    /// suggested bonus.
    pub fn attend(&mut self, course: Course, policy: AttendancePolicy) {
        let attended = self.attended_courses.iter().any(|c| c.id == course.id);
        match policy {
            AttendancePolicy::Deduplicate if attended => {}
            AttendancePolicy::AllowDuplicates
            | AttendancePolicy::Deduplicate => {
                self.attended_courses.push(course);
            }
        }
        self.recompute_suggested_bonus();
    }

    /// Advances [`JobLevel`] of this [`Employee`] by one, returning the new
    /// one.
    ///
    /// Returns [`None`] and leaves this [`Employee`] untouched if it already
    /// has the highest [`JobLevel`].
    pub fn promote(&mut self) -> Option<JobLevel> {
        self.job_level = self.job_level.next()?;
        Some(self.job_level)
    }

    /// Recomputes the suggested bonus as years in service times attended
    /// courses times [`Internal::BONUS_PER_COURSE_YEAR`].
    ///
    /// No years in service means no bonus, whatever was attended.
    fn recompute_suggested_bonus(&mut self) {
        self.suggested_bonus.currency = self.salary.currency;
        self.suggested_bonus.amount = Decimal::from(self.years_in_service.0)
            * Decimal::from(self.attended_courses.len())
            * Self::BONUS_PER_COURSE_YEAR;
    }
}

/// Number of full years an [`Internal`] employee has been in service.
#[derive(
    Clone, Copy, Debug, Default, Display, Eq, From, Into, Ord, PartialEq, PartialOrd,
)]
pub struct YearsInService(u16);

impl YearsInService {
    /// Creates new [`YearsInService`].
    #[must_use]
    pub const fn new(years: u16) -> Self {
        Self(years)
    }
}

/// Job level of an [`Internal`] employee, starting at [`JobLevel::FIRST`].
#[derive(Clone, Copy, Debug, Display, Eq, Into, Ord, PartialEq, PartialOrd)]
pub struct JobLevel(NonZeroU16);

impl JobLevel {
    /// Entry [`JobLevel`].
    pub const FIRST: Self = Self(NonZeroU16::MIN);

    /// Creates a new [`JobLevel`], if the provided `level` is positive.
    #[must_use]
    pub const fn new(level: u16) -> Option<Self> {
        match NonZeroU16::new(level) {
            Some(l) => Some(Self(l)),
            None => None,
        }
    }

    /// Returns the [`u16`] representation of this [`JobLevel`].
    #[must_use]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// Returns the [`JobLevel`] following this one, if any.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(l) => Some(Self(l)),
            None => None,
        }
    }
}

impl Default for JobLevel {
    fn default() -> Self {
        Self::FIRST
    }
}

/// Policy applied when an [`Internal`] employee attends a [`Course`] already
/// attended before.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum AttendancePolicy {
    /// Every attendance is recorded, even of the same [`Course`].
    #[default]
    AllowDuplicates,

    /// Repeated attendance of the same [`Course`] is not recorded again.
    Deduplicate,
}

/// Raise that cannot be given to an [`Internal`] employee.
#[derive(Clone, Copy, Debug, Display, Eq, Error, PartialEq)]
pub enum InvalidRaise {
    /// Raise below [`Internal::MINIMUM_RAISE`] was requested.
    #[display("raise of {amount} is below the minimum of {minimum}")]
    BelowMinimum {
        /// Requested raise amount.
        amount: Decimal,

        /// Minimum accepted raise amount.
        minimum: Decimal,
    },

    /// Raised salary exceeds the representable range.
    #[display("raise of {amount} overflows the salary of {salary}")]
    SalaryOverflow {
        /// Requested raise amount.
        amount: Decimal,

        /// Salary amount the raise was requested for.
        salary: Decimal,
    },
}

#[cfg(test)]
mod spec {
    use common::{money::Currency, Money};
    use rust_decimal::Decimal;

    use crate::domain::{course, Course};

    use super::{
        AttendancePolicy, Internal, InvalidRaise, JobLevel, Name,
        YearsInService,
    };

    fn brooklyn_cannon(years: u16) -> Internal {
        Internal::new(
            Name::new("Brooklyn").unwrap(),
            Name::new("Cannon").unwrap(),
            YearsInService::new(years),
            Money::new(3000, Currency::Usd),
            false,
            JobLevel::FIRST,
        )
    }

    fn course(title: &str) -> Course {
        Course::new(course::Title::new(title).unwrap())
    }

    #[test]
    fn minimum_raise_is_flagged() {
        let mut employee = brooklyn_cannon(5);

        employee.give_raise(Decimal::from(100)).unwrap();

        assert!(employee.minimum_raise_given());
        assert_eq!(employee.salary(), Money::new(3100, Currency::Usd));
    }

    #[test]
    fn bigger_raise_is_not_flagged() {
        let mut employee = brooklyn_cannon(5);
        employee.give_raise(Decimal::from(100)).unwrap();

        employee.give_raise(Decimal::from(200)).unwrap();

        assert!(!employee.minimum_raise_given());
        assert_eq!(employee.salary(), Money::new(3300, Currency::Usd));
    }

    #[test]
    fn raise_below_minimum_is_rejected() {
        let mut employee = brooklyn_cannon(5);
        let before = employee.clone();

        let err = employee.give_raise(Decimal::from(50)).unwrap_err();

        assert_eq!(
            err,
            InvalidRaise::BelowMinimum {
                amount: Decimal::from(50),
                minimum: Decimal::from(100),
            },
        );
        assert_eq!(employee, before);
        assert_eq!(
            err.to_string(),
            "raise of 50 is below the minimum of 100",
        );
    }

    #[test]
    fn overflowing_raise_is_rejected() {
        let mut employee = brooklyn_cannon(5);
        let before = employee.clone();

        let err = employee.give_raise(Decimal::MAX).unwrap_err();

        assert_eq!(
            err,
            InvalidRaise::SalaryOverflow {
                amount: Decimal::MAX,
                salary: Decimal::from(3000),
            },
        );
        assert_eq!(employee, before);
    }

    #[test]
    fn fractional_raise_just_below_minimum_is_rejected() {
        let mut employee = brooklyn_cannon(5);

        assert!(employee.give_raise("99.99".parse().unwrap()).is_err());
        assert_eq!(employee.salary(), Money::new(3000, Currency::Usd));
    }

    #[test]
    fn bonus_follows_years_and_courses() {
        let mut employee = brooklyn_cannon(5);

        employee.attend(course("Company Introduction"), AttendancePolicy::default());
        assert_eq!(employee.suggested_bonus(), Money::new(500, Currency::Usd));

        employee.attend(course("Respecting Your Colleagues"), AttendancePolicy::default());
        assert_eq!(employee.suggested_bonus(), Money::new(1000, Currency::Usd));
    }

    #[test]
    fn no_years_in_service_means_no_bonus() {
        let mut employee = brooklyn_cannon(0);

        for title in ["One", "Two", "Three"] {
            employee.attend(course(title), AttendancePolicy::default());
        }

        assert_eq!(employee.attended_courses().len(), 3);
        assert_eq!(employee.suggested_bonus(), Money::zero(Currency::Usd));
    }

    #[test]
    fn duplicates_follow_policy() {
        let repeated = course("Dealing with Customers 101");

        let mut allowing = brooklyn_cannon(2);
        allowing.attend(repeated.clone(), AttendancePolicy::AllowDuplicates);
        allowing.attend(repeated.clone(), AttendancePolicy::AllowDuplicates);
        assert_eq!(allowing.attended_courses().len(), 2);
        assert_eq!(allowing.suggested_bonus(), Money::new(400, Currency::Usd));

        let mut deduplicating = brooklyn_cannon(2);
        deduplicating.attend(repeated.clone(), AttendancePolicy::Deduplicate);
        deduplicating.attend(repeated, AttendancePolicy::Deduplicate);
        assert_eq!(deduplicating.attended_courses().len(), 1);
        assert_eq!(
            deduplicating.suggested_bonus(),
            Money::new(200, Currency::Usd),
        );
    }

    #[test]
    fn rebuilding_recomputes_bonus() {
        let employee = brooklyn_cannon(5)
            .with_attended_courses([course("Course1"), course("Course2")]);

        assert_eq!(employee.suggested_bonus(), Money::new(1000, Currency::Usd));
    }

    #[test]
    fn promotion_advances_job_level_by_one() {
        let mut employee = brooklyn_cannon(5);

        assert_eq!(employee.promote(), JobLevel::new(2));
        assert_eq!(employee.job_level().get(), 2);
    }

    #[test]
    fn highest_job_level_is_not_promoted() {
        let mut employee = Internal::new(
            Name::new("Brooklyn").unwrap(),
            Name::new("Cannon").unwrap(),
            YearsInService::new(5),
            Money::new(3000, Currency::Usd),
            false,
            JobLevel::new(u16::MAX).unwrap(),
        );
        let before = employee.clone();

        assert_eq!(employee.promote(), None);
        assert_eq!(employee, before);
    }

    #[test]
    fn job_level_is_positive() {
        assert!(JobLevel::new(0).is_none());
        assert_eq!(JobLevel::default(), JobLevel::FIRST);
        assert_eq!(JobLevel::FIRST.next(), JobLevel::new(2));
        assert_eq!(JobLevel::new(u16::MAX).unwrap().next(), None);
    }
}
