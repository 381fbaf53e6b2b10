//! [`Query`] collection related to a single [`Course`].

use common::operations::By;

use crate::domain::{course, Course};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries a [`Course`] by its [`course::Id`].
pub type ById = DatabaseQuery<By<Option<Course>, course::Id>>;
