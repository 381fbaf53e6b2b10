//! Service contains the business logic of the application.
//!
//! List of available Cargo features:
#![doc = document_features::document_features!()]
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod absence;
pub mod command;
pub mod domain;
pub mod factory;
pub mod infra;
pub mod query;

use smart_default::SmartDefault;

use crate::domain::{course, employee::AttendancePolicy};
#[cfg(doc)]
use crate::{
    domain::{employee::Internal, Course},
    infra::{Database, Endpoint},
};

pub use self::{command::Command, factory::Factory, query::Query};

/// [`Service`] configuration.
#[derive(Clone, Copy, Debug, SmartDefault)]
pub struct Config {
    /// IDs of the [`Course`]s every new [`Internal`] employee attends, in
    /// attendance order.
    #[default([course::Id::FIRST_OBLIGATORY, course::Id::SECOND_OBLIGATORY])]
    pub obligatory_courses: [course::Id; 2],

    /// [`AttendancePolicy`] applied to repeated [`Course`] attendance.
    pub attendance: AttendancePolicy,

    /// [`Factory`] configuration.
    pub factory: factory::Config,
}

/// Domain service.
///
/// Holds no mutable state of its own besides the absence listeners. Callers
/// must serialize operations mutating the same employee instance.
#[derive(Clone, Debug)]
pub struct Service<Db, Ep> {
    /// Configuration of this [`Service`].
    config: Config,

    /// [`Database`] of this [`Service`].
    database: Db,

    /// Promotion eligibility [`Endpoint`] of this [`Service`].
    endpoint: Ep,

    /// [`Factory`] of this [`Service`].
    factory: Factory,

    /// Absence [`absence::Notifier`] of this [`Service`].
    absences: absence::Notifier,
}

impl<Db, Ep> Service<Db, Ep> {
    /// Creates a new [`Service`] with the provided parameters.
    #[must_use]
    pub fn new(config: Config, database: Db, endpoint: Ep) -> Self {
        Self {
            factory: Factory::new(config.factory),
            config,
            database,
            endpoint,
            absences: absence::Notifier::default(),
        }
    }

    /// Replaces the [`Factory`] of this [`Service`].
    #[must_use]
    pub fn with_factory(self, factory: Factory) -> Self {
        Self { factory, ..self }
    }

    /// Returns [`Config`] of this [`Service`].
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns [`Database`] of this [`Service`].
    #[must_use]
    pub fn database(&self) -> &Db {
        &self.database
    }

    /// Returns promotion eligibility [`Endpoint`] of this [`Service`].
    #[must_use]
    pub fn endpoint(&self) -> &Ep {
        &self.endpoint
    }

    /// Returns [`Factory`] of this [`Service`].
    #[must_use]
    pub fn factory(&self) -> &Factory {
        &self.factory
    }

    /// Returns [`absence::Notifier`] to (un)subscribe to absence
    /// notifications with.
    #[must_use]
    pub fn absences(&self) -> &absence::Notifier {
        &self.absences
    }
}
