//! [`Command`] for raising a salary of an [`Internal`] employee.

use derive_more::{Display, Error, From};
use rust_decimal::Decimal;
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::employee::{Internal, InvalidRaise},
    Service,
};

use super::Command;

/// [`Command`] for raising a salary of an [`Internal`] employee in place.
///
/// Persisting the raised [`Internal`] employee is up to the caller.
#[derive(Debug)]
pub struct GiveRaise<'e> {
    /// [`Internal`] employee to raise the salary of.
    pub employee: &'e mut Internal,

    /// Amount to raise the salary by.
    ///
    /// Must be at least [`Internal::MINIMUM_RAISE`].
    pub amount: Decimal,
}

impl<Db, Ep> Command<GiveRaise<'_>> for Service<Db, Ep> {
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: GiveRaise<'_>) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let GiveRaise { employee, amount } = cmd;

        employee
            .give_raise(amount)
            .map_err(E::from)
            .map_err(tracerr::wrap!())?;

        log::debug!(
            "`Internal(id: {})` salary raised by {amount} to {}",
            employee.id(),
            employee.salary(),
        );
        Ok(())
    }
}

/// Error of [`GiveRaise`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Display, Eq, Error, From, PartialEq)]
pub enum ExecutionError {
    /// Raise cannot be given.
    #[display("Invalid raise: {_0}")]
    InvalidRaise(InvalidRaise),
}
