//! [`Config`]-related definitions.

use std::time;

use common::money::Currency;
use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use serde::Deserialize;
use service::{
    domain::{course, employee::AttendancePolicy},
    factory::{self, SalaryRange},
    infra::http,
};
use smart_default::SmartDefault;
use uuid::Uuid;

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Service configuration.
    pub service: Service,

    /// Promotion eligibility endpoint configuration.
    pub eligibility: Eligibility,

    /// Log configuration.
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }
}

/// Service configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Service {
    /// ID of the course every new internal employee attends first.
    #[default(Uuid::from(course::Id::FIRST_OBLIGATORY))]
    pub first_obligatory_course: Uuid,

    /// ID of the course every new internal employee attends second.
    #[default(Uuid::from(course::Id::SECOND_OBLIGATORY))]
    pub second_obligatory_course: Uuid,

    /// Handling of repeatedly attended courses.
    pub attendance: Attendance,

    /// Salary configuration of new internal employees.
    pub salary: Salary,
}

impl From<Service> for service::Config {
    fn from(value: Service) -> Self {
        let Service {
            first_obligatory_course,
            second_obligatory_course,
            attendance,
            salary: Salary { min, max, currency },
        } = value;
        Self {
            obligatory_courses: [
                first_obligatory_course.into(),
                second_obligatory_course.into(),
            ],
            attendance: attendance.into(),
            factory: factory::Config {
                salary: SalaryRange::new(min, max),
                currency,
            },
        }
    }
}

/// Handling of repeatedly attended courses.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Attendance {
    /// Every attendance is recorded.
    #[default]
    AllowDuplicates,

    /// Repeated attendance of the same course is not recorded.
    Deduplicate,
}

impl From<Attendance> for AttendancePolicy {
    fn from(value: Attendance) -> Self {
        match value {
            Attendance::AllowDuplicates => Self::AllowDuplicates,
            Attendance::Deduplicate => Self::Deduplicate,
        }
    }
}

/// Salary configuration of new internal employees.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Salary {
    /// Lowest possible salary, in whole currency units.
    #[default(2500)]
    pub min: u32,

    /// Highest possible salary, in whole currency units.
    #[default(3500)]
    pub max: u32,

    /// Currency of salaries.
    #[default(Currency::Usd)]
    pub currency: Currency,
}

/// Promotion eligibility endpoint configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Eligibility {
    /// Base URL of the promotion eligibility service.
    #[default("http://localhost:5057".to_owned())]
    pub base_url: String,

    /// Timeout of a single eligibility check.
    #[default(time::Duration::from_secs(10))]
    #[serde(with = "humantime_serde")]
    pub timeout: time::Duration,
}

impl From<Eligibility> for http::Config {
    fn from(value: Eligibility) -> Self {
        let Eligibility { base_url, timeout } = value;
        Self { base_url, timeout }
    }
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    #[default]
    Info,

    /// Designates hazardous situations.
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

#[cfg(test)]
mod spec {
    use common::money::Currency;
    use service::domain::{course, employee::AttendancePolicy};

    use super::Config;

    #[test]
    fn defaults_match_service_defaults() {
        let conf = Config::new("non-existent.toml").unwrap();

        let service: service::Config = conf.service.into();
        assert_eq!(
            service.obligatory_courses,
            [course::Id::FIRST_OBLIGATORY, course::Id::SECOND_OBLIGATORY],
        );
        assert_eq!(service.attendance, AttendancePolicy::AllowDuplicates);
        assert_eq!(service.factory, service::factory::Config::default());
        assert_eq!(service.factory.currency, Currency::Usd);

        let http: service::infra::http::Config = conf.eligibility.into();
        assert_eq!(http.base_url, "http://localhost:5057");
        assert_eq!(http.timeout.as_secs(), 10);
    }
}
