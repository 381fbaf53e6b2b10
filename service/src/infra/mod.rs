//! Infrastructure layer.

pub mod database;
pub mod endpoint;

#[cfg(feature = "memory")]
pub use self::database::{memory, Memory};
pub use self::{database::Database, endpoint::Endpoint};
#[cfg(feature = "http")]
pub use self::endpoint::{http, Http};
