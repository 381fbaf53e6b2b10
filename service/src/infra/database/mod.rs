//! [`Database`]-related implementations.
//!
//! Operations every [`Database`] backing the [`Service`] is expected to
//! support:
//! - `Select<By<Option<Course>, course::Id>>` fetching a single [`Course`];
//! - `Select<By<Vec<Course>, IDs>>` fetching [`Course`]s in the order of the
//!   provided IDs, omitting the missing ones;
//! - `Select<By<Option<Internal>, employee::Id>>` fetching a single
//!   [`Internal`] employee;
//! - `Select<By<Vec<Internal>, ()>>` listing all the [`Internal`] employees;
//! - `Insert<Employee>` adding a new [`Employee`];
//! - `Update<Employee>` storing changes of an [`Employee`].
//!
//! [`Course`]s handed out are never new. The synchronous form of each
//! operation is provided by [`common::Blocking`].
//!
//! [`Course`]: crate::domain::Course
//! [`Employee`]: crate::domain::Employee
//! [`Internal`]: crate::domain::employee::Internal
//! [`Service`]: crate::Service

#[cfg(feature = "memory")]
pub mod memory;

use derive_more::{Display, Error as StdError, From};

#[cfg(feature = "memory")]
pub use self::memory::Memory;

/// Database operation.
pub use common::Handler as Database;

/// [`Database`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    #[cfg(feature = "memory")]
    /// [`Memory`] error.
    Memory(memory::Error),
}
