//! [`Command`] for reporting an absent [`Employee`].

use std::convert::Infallible;

use crate::{
    absence::{Absence, ReportDateTime},
    domain::Employee,
    Service,
};

use super::Command;

/// [`Command`] for reporting an absent [`Employee`] to the listeners attached
/// to [`Service::absences()`].
///
/// The [`Employee`] is left untouched. Returns the number of notified
/// listeners.
#[derive(Clone, Copy, Debug)]
pub struct NotifyOfAbsence<'e> {
    /// Absent [`Employee`].
    pub employee: &'e Employee,
}

impl<Db, Ep> Command<NotifyOfAbsence<'_>> for Service<Db, Ep> {
    type Ok = usize;
    type Err = Infallible;

    async fn execute(
        &self,
        cmd: NotifyOfAbsence<'_>,
    ) -> Result<Self::Ok, Self::Err> {
        let NotifyOfAbsence { employee } = cmd;

        Ok(self.absences().publish(&Absence {
            employee,
            reported_at: ReportDateTime::now(),
        }))
    }
}
