//! [`Query`] collection related to the multiple [`Course`]s.

use common::operations::By;

use crate::domain::{course, Course};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries multiple [`Course`]s by their [`course::Id`]s.
///
/// Found [`Course`]s follow the order of the provided [`course::Id`]s, the
/// missing ones are omitted.
pub type ByIds = DatabaseQuery<By<Vec<Course>, Vec<course::Id>>>;
