//! [`Factory`] constructing new [`Employee`]s.

use std::sync::Arc;

use common::{money::Currency, Money};
use derive_more::{Debug, Display, Error as StdError};
use parking_lot::Mutex;
use rand::{rngs::StdRng, Rng, SeedableRng as _};
use rust_decimal::Decimal;

use crate::domain::{
    employee::{
        self, EmployerName, External, Internal, JobLevel, YearsInService,
    },
    Employee,
};

/// [`Factory`] configuration.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Config {
    /// [`SalaryRange`] of new [`Internal`] employees.
    pub salary: SalaryRange,

    /// [`Currency`] new [`Internal`] employees are paid in.
    pub currency: Currency,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            salary: SalaryRange::new(2500, 3500),
            currency: Currency::Usd,
        }
    }
}

/// Inclusive range of starting salaries, in whole currency units.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SalaryRange {
    /// Lowest salary.
    min: u32,

    /// Highest salary.
    max: u32,
}

impl SalaryRange {
    /// Creates a new [`SalaryRange`] between the provided bounds, in any
    /// order.
    #[must_use]
    pub fn new(a: u32, b: u32) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Returns the lowest salary of this [`SalaryRange`].
    #[must_use]
    pub fn min(&self) -> Decimal {
        self.min.into()
    }

    /// Returns the highest salary of this [`SalaryRange`].
    #[must_use]
    pub fn max(&self) -> Decimal {
        self.max.into()
    }

    /// Checks whether this [`SalaryRange`] contains the provided `salary`.
    #[must_use]
    pub fn contains(&self, salary: Decimal) -> bool {
        (self.min()..=self.max()).contains(&salary)
    }
}

/// Source of starting salaries for new [`Internal`] employees.
pub trait SalaryGenerator: Send + Sync {
    /// Generates a salary within the provided [`SalaryRange`].
    fn generate(&self, range: SalaryRange) -> Decimal;
}

/// [`SalaryGenerator`] drawing salaries uniformly from the range.
#[derive(Debug)]
pub struct RandomSalary<R = StdRng>(#[debug(skip)] Mutex<R>);

impl RandomSalary {
    /// Creates a new [`RandomSalary`] seeded from the OS.
    #[must_use]
    pub fn new() -> Self {
        Self(Mutex::new(StdRng::from_os_rng()))
    }

    /// Creates a new [`RandomSalary`] with a reproducible sequence.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self(Mutex::new(StdRng::seed_from_u64(seed)))
    }
}

impl Default for RandomSalary {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng + Send> SalaryGenerator for RandomSalary<R> {
    fn generate(&self, range: SalaryRange) -> Decimal {
        self.0.lock().random_range(range.min..=range.max).into()
    }
}

/// [`SalaryGenerator`] always yielding the same salary, clamped into the
/// range.
#[derive(Clone, Copy, Debug)]
pub struct FixedSalary(pub Decimal);

impl SalaryGenerator for FixedSalary {
    fn generate(&self, range: SalaryRange) -> Decimal {
        self.0.clamp(range.min(), range.max())
    }
}

/// Factory constructing new [`Employee`]s with initialized defaults.
#[derive(Clone, Debug)]
pub struct Factory {
    /// [`Config`] of this [`Factory`].
    config: Config,

    /// [`SalaryGenerator`] of this [`Factory`].
    #[debug(skip)]
    salary: Arc<dyn SalaryGenerator>,
}

impl Factory {
    /// Creates a new [`Factory`] drawing salaries with a [`RandomSalary`].
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self::with_generator(config, RandomSalary::new())
    }

    /// Creates a new [`Factory`] with the provided [`SalaryGenerator`].
    #[must_use]
    pub fn with_generator(
        config: Config,
        generator: impl SalaryGenerator + 'static,
    ) -> Self {
        Self {
            config,
            salary: Arc::new(generator),
        }
    }

    /// Returns [`Config`] of this [`Factory`].
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Creates a new [`Employee`] of the variant selected by `is_external`
    /// alone.
    ///
    /// The `employer` is ignored for [`Internal`] employees.
    ///
    /// # Errors
    ///
    /// With [`Error::EmployerRequired`] if an [`External`] employee is
    /// requested without an `employer`.
    pub fn create_employee(
        &self,
        first_name: employee::Name,
        last_name: employee::Name,
        employer: Option<EmployerName>,
        is_external: bool,
    ) -> Result<Employee, Error> {
        if is_external {
            let employer = employer.ok_or(Error::EmployerRequired)?;
            Ok(External::new(first_name, last_name, employer).into())
        } else {
            Ok(self.create_internal(first_name, last_name).into())
        }
    }

    /// Creates a new [`Internal`] employee at [`JobLevel::FIRST`] with no
    /// years in service and a salary from the configured [`SalaryRange`].
    #[must_use]
    pub fn create_internal(
        &self,
        first_name: employee::Name,
        last_name: employee::Name,
    ) -> Internal {
        let amount = self.salary.generate(self.config.salary);
        Internal::new(
            first_name,
            last_name,
            YearsInService::default(),
            Money::new(amount, self.config.currency),
            false,
            JobLevel::FIRST,
        )
    }
}

impl Default for Factory {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

/// Error of creating an [`Employee`] with a [`Factory`].
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, StdError)]
pub enum Error {
    /// [`External`] employee requested without an employer.
    #[display("`External` employee requires an employer name")]
    EmployerRequired,
}

#[cfg(test)]
mod spec {
    use common::{money::Currency, Money};
    use rust_decimal::Decimal;

    use crate::domain::employee::{self, EmployerName, JobLevel, Kind};

    use super::{
        Config, Error, Factory, FixedSalary, RandomSalary, SalaryGenerator as _,
        SalaryRange,
    };

    fn name(s: &str) -> employee::Name {
        employee::Name::new(s).unwrap()
    }

    #[test]
    fn internal_salary_is_within_default_range() {
        let factory = Factory::default();

        for _ in 0..200 {
            let employee = factory.create_internal(name("John"), name("Doe"));
            assert!(
                factory.config().salary.contains(employee.salary().amount),
                "{} is out of range",
                employee.salary(),
            );
            assert_eq!(employee.salary().currency, Currency::Usd);
        }
    }

    #[test]
    fn internal_defaults() {
        let factory = Factory::with_generator(
            Config::default(),
            FixedSalary(Decimal::from(2500)),
        );

        let employee = factory.create_internal(name("John"), name("Doe"));

        assert_eq!(employee.salary(), Money::new(2500, Currency::Usd));
        assert_eq!(employee.job_level(), JobLevel::FIRST);
        assert_eq!(u16::from(employee.years_in_service()), 0);
        assert!(employee.attended_courses().is_empty());
        assert_eq!(employee.suggested_bonus(), Money::zero(Currency::Usd));
        assert!(!employee.minimum_raise_given());
    }

    #[test]
    fn variant_is_selected_by_flag_only() {
        let factory = Factory::default();
        let employer = || Some(EmployerName::new("IT for Everyone, Inc").unwrap());

        let external = factory
            .create_employee(name("Amanda"), name("Smith"), employer(), true)
            .unwrap();
        assert_eq!(external.kind(), Kind::External);

        let internal = factory
            .create_employee(name("Amanda"), name("Smith"), employer(), false)
            .unwrap();
        assert_eq!(internal.kind(), Kind::Internal);

        let internal = factory
            .create_employee(name("John"), name("Doe"), None, false)
            .unwrap();
        assert_eq!(internal.kind(), Kind::Internal);
    }

    #[test]
    fn external_requires_employer() {
        let factory = Factory::default();

        assert_eq!(
            factory.create_employee(name("Amanda"), name("Smith"), None, true),
            Err(Error::EmployerRequired),
        );
    }

    #[test]
    fn employer_required_is_std_error() {
        let err: &dyn std::error::Error = &Error::EmployerRequired;

        assert!(err.source().is_none());
        assert_eq!(
            err.to_string(),
            "`External` employee requires an employer name",
        );
    }

    #[test]
    fn seeded_salaries_are_reproducible() {
        let range = SalaryRange::new(2500, 3500);
        let (a, b) = (RandomSalary::seeded(42), RandomSalary::seeded(42));

        for _ in 0..20 {
            let salary = a.generate(range);
            assert_eq!(salary, b.generate(range));
            assert!(range.contains(salary));
        }
    }

    #[test]
    fn fixed_salary_is_clamped() {
        let range = SalaryRange::new(3500, 2500);

        assert_eq!(range.min(), Decimal::from(2500));
        assert_eq!(FixedSalary(Decimal::from(10)).generate(range), range.min());
        assert_eq!(
            FixedSalary(Decimal::from(9000)).generate(range),
            range.max(),
        );
        assert_eq!(
            FixedSalary(Decimal::from(3000)).generate(range),
            Decimal::from(3000),
        );
    }
}
