//! [`Command`] for promoting an [`Internal`] employee.

use common::operations::{By, Select, Update};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{
        employee::{self, Internal},
        promotion::{Eligibility, Outcome},
        Employee,
    },
    infra::{database, endpoint, Database, Endpoint},
    Service,
};

use super::Command;

/// [`Command`] for promoting an [`Internal`] employee to the next
/// [`JobLevel`], if the promotion eligibility [`Endpoint`] allows it.
///
/// The eligibility check and the persisting of the promoted [`Internal`]
/// employee are two separate steps. If persisting fails, the in-memory
/// [`JobLevel`] stays advanced while the stored one doesn't, which is
/// reported as [`ExecutionError::Persistence`].
///
/// An eligible [`Internal`] employee at the highest [`JobLevel`] is left
/// untouched and reported as [`ExecutionError::HighestJobLevel`].
///
/// [`JobLevel`]: employee::JobLevel
#[derive(Debug)]
pub struct PromoteInternalEmployee<'e> {
    /// [`Internal`] employee to promote.
    pub employee: &'e mut Internal,
}

impl<Db, Ep> Command<PromoteInternalEmployee<'_>> for Service<Db, Ep>
where
    Db: Database<Update<Employee>, Ok = (), Err = Traced<database::Error>>,
    Ep: Endpoint<
        Select<By<Eligibility, employee::Id>>,
        Ok = Eligibility,
        Err = Traced<endpoint::Error>,
    >,
{
    type Ok = Outcome;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: PromoteInternalEmployee<'_>,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let PromoteInternalEmployee { employee } = cmd;
        let employee_id = employee.id();

        let eligibility = self
            .endpoint()
            .execute(Select(By::new(employee_id)))
            .await
            .inspect_err(|e| {
                log::warn!(
                    "Promotion eligibility of `Internal(id: {employee_id})` \
                     cannot be checked: {e}",
                );
            })
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        if !eligibility.eligible_for_promotion {
            log::debug!(
                "`Internal(id: {employee_id})` is not eligible for promotion",
            );
            return Ok(Outcome::NotEligible { employee_id });
        }

        let Some(job_level) = employee.promote() else {
            let level = employee.job_level();
            log::warn!(
                "`Internal(id: {employee_id})` is eligible for promotion, but \
                 already has the highest job level {level}",
            );
            return Err(tracerr::new!(E::HighestJobLevel(level)));
        };
        self.database()
            .execute(Update(Employee::from(employee.clone())))
            .await
            .inspect_err(|e| {
                log::error!(
                    "`Internal(id: {employee_id})` promoted to job level \
                     {job_level}, but not persisted: {e}",
                );
            })
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        log::info!(
            "`Internal(id: {employee_id})` promoted to job level {job_level}",
        );
        Ok(Outcome::Promoted {
            employee_id,
            job_level,
        })
    }
}

/// Error of [`PromoteInternalEmployee`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Internal`] employee already has the highest [`JobLevel`].
    ///
    /// [`JobLevel`]: employee::JobLevel
    #[display("`Internal` employee already has the highest job level {_0}")]
    HighestJobLevel(#[error(not(source))] employee::JobLevel),

    /// Promotion eligibility [`Endpoint`] error.
    #[display("Promotion eligibility check failed: {_0}")]
    #[from]
    EligibilityCheck(endpoint::Error),

    /// [`Database`] error while persisting a promoted [`Internal`] employee.
    #[display(
        "Promoted `Internal` employee cannot be persisted, stored state may \
         be inconsistent: {_0}"
    )]
    #[from]
    Persistence(database::Error),
}
