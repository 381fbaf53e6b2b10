//! Outbound [`Endpoint`]s the [`Service`] consults.
//!
//! The promotion eligibility [`Endpoint`] is expected to support
//! `Select<By<Eligibility, employee::Id>>`.
//!
//! [`Service`]: crate::Service
//! [`Eligibility`]: crate::domain::promotion::Eligibility

#[cfg(feature = "http")]
pub mod http;

use derive_more::{Display, Error as StdError, From};

#[cfg(feature = "http")]
pub use self::http::Http;

/// Outbound endpoint call.
pub use common::Handler as Endpoint;

/// [`Endpoint`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    #[cfg(feature = "http")]
    /// [`Http`] error.
    Http(http::Error),
}
