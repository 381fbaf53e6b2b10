//! [`Command`] for creating a new [`Internal`] employee.

use common::operations::{By, Select};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

#[cfg(doc)]
use crate::{domain::employee::AttendancePolicy, Config};
use crate::{
    domain::{
        course,
        employee::{self, Internal},
        Course,
    },
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`Internal`] employee.
///
/// The created [`Internal`] employee attends [`Config::obligatory_courses`]
/// in their order, which makes its suggested bonus reflect them right away.
/// Nothing is persisted.
#[derive(Clone, Debug)]
pub struct CreateInternalEmployee {
    /// First name of a new [`Internal`] employee.
    pub first_name: employee::Name,

    /// Last name of a new [`Internal`] employee.
    pub last_name: employee::Name,
}

impl<Db, Ep> Command<CreateInternalEmployee> for Service<Db, Ep>
where
    Db: Database<
        Select<By<Option<Course>, course::Id>>,
        Ok = Option<Course>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = Internal;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreateInternalEmployee,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateInternalEmployee {
            first_name,
            last_name,
        } = cmd;

        let mut employee =
            self.factory().create_internal(first_name, last_name);
        for id in self.config().obligatory_courses {
            let course = self
                .database()
                .execute(Select(By::<Option<Course>, _>::new(id)))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?
                .ok_or(E::CourseNotExists(id))
                .map_err(tracerr::wrap!())?;
            employee.attend(course, self.config().attendance);
        }

        log::debug!(
            "`Internal(id: {})` created with {} obligatory courses",
            employee.id(),
            employee.attended_courses().len(),
        );
        Ok(employee)
    }
}

/// Error of [`CreateInternalEmployee`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// Obligatory [`Course`] doesn't exist.
    #[display("Obligatory `Course(id: {_0})` does not exist")]
    CourseNotExists(#[error(not(source))] course::Id),
}
