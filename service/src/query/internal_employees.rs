//! [`Query`] collection related to the multiple [`Internal`] employees.

use common::operations::By;

use crate::domain::employee::Internal;
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries all the [`Internal`] employees, ordered by their last and first
/// names.
pub type ListInternalEmployees = DatabaseQuery<By<Vec<Internal>, ()>>;
