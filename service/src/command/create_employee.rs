//! [`Command`] for creating and persisting a new [`Employee`].

use common::operations::{By, Insert, Select};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

#[cfg(doc)]
use crate::domain::employee::{External, Internal};
use crate::{
    domain::{
        course,
        employee::{self, EmployerName},
        Course, Employee,
    },
    factory,
    infra::{database, Database},
    Service,
};

use super::{create_internal_employee, Command, CreateInternalEmployee};

/// [`Command`] for creating and persisting a new [`Employee`].
///
/// [`Internal`] employees are created as [`CreateInternalEmployee`] does.
#[derive(Clone, Debug)]
pub struct CreateEmployee {
    /// First name of a new [`Employee`].
    pub first_name: employee::Name,

    /// Last name of a new [`Employee`].
    pub last_name: employee::Name,

    /// Name of the employer of a new [`External`] employee.
    ///
    /// Ignored for [`Internal`] employees.
    pub employer: Option<EmployerName>,

    /// Indicator whether an [`External`] employee should be created rather
    /// than an [`Internal`] one.
    pub is_external: bool,
}

impl<Db, Ep> Command<CreateEmployee> for Service<Db, Ep>
where
    Db: Database<
            Select<By<Option<Course>, course::Id>>,
            Ok = Option<Course>,
            Err = Traced<database::Error>,
        > + Database<Insert<Employee>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Employee;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: CreateEmployee) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateEmployee {
            first_name,
            last_name,
            employer,
            is_external,
        } = cmd;

        let employee = if is_external {
            self.factory()
                .create_employee(first_name, last_name, employer, true)
                .map_err(E::from)
                .map_err(tracerr::wrap!())?
        } else {
            self.execute(CreateInternalEmployee {
                first_name,
                last_name,
            })
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .into()
        };

        self.database()
            .execute(Insert(employee.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        log::info!(
            "`{}(id: {})` employee created",
            employee.kind(),
            employee.id(),
        );
        Ok(employee)
    }
}

/// Error of [`CreateEmployee`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`factory::Factory`] refused to create the [`Employee`].
    #[display("Cannot create `Employee`: {_0}")]
    #[from]
    Factory(factory::Error),

    /// [`CreateInternalEmployee`] failed.
    #[display("Cannot create `Internal` employee: {_0}")]
    #[from]
    Internal(create_internal_employee::ExecutionError),
}
