//! [`Command`] wrapper for canceling another [`Command`].

use derive_more::{Display, Error};
use tokio_util::sync::CancellationToken;
use tracing as log;

use crate::Service;

use super::Command;

/// [`Command`] executing the wrapped `C`ommand unless the [`token`] is
/// canceled.
///
/// An already canceled [`token`] fails the execution before anything runs.
/// Canceling the [`token`] while the wrapped `C`ommand waits on I/O drops it
/// at that point. Changes applied in memory before that stay applied.
///
/// Works with [`Query`]s just as well.
///
/// [`Query`]: crate::Query
/// [`token`]: Cancelable::token
#[derive(Clone, Debug)]
pub struct Cancelable<C> {
    /// Wrapped [`Command`].
    pub command: C,

    /// [`CancellationToken`] to observe.
    pub token: CancellationToken,
}

impl<C> Cancelable<C> {
    /// Wraps the provided `command` into a [`Cancelable`] one.
    #[must_use]
    pub fn new(command: C, token: CancellationToken) -> Self {
        Self { command, token }
    }
}

impl<Db, Ep, C> Command<Cancelable<C>> for Service<Db, Ep>
where
    Self: Command<C>,
{
    type Ok = <Self as Command<C>>::Ok;
    type Err = ExecutionError<<Self as Command<C>>::Err>;

    async fn execute(
        &self,
        cmd: Cancelable<C>,
    ) -> Result<Self::Ok, Self::Err> {
        let Cancelable { command, token } = cmd;

        if token.is_cancelled() {
            log::debug!("Canceled before execution");
            return Err(ExecutionError::Canceled);
        }

        tokio::select! {
            biased;

            () = token.cancelled() => {
                log::debug!("Canceled during execution");
                Err(ExecutionError::Canceled)
            }
            res = self.execute(command) => res.map_err(ExecutionError::Failed),
        }
    }
}

/// Error of [`Cancelable`] [`Command`] execution.
#[derive(Debug, Display, Error)]
pub enum ExecutionError<E> {
    /// Execution was canceled.
    #[display("Execution canceled")]
    Canceled,

    /// Wrapped [`Command`] failed.
    #[display("{_0}")]
    Failed(#[error(source)] E),
}
