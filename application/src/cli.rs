//! Execution of command line [`Command`]s.

use common::operations::Update;
use itertools::Itertools as _;
use service::{
    command::{self, Cancelable},
    domain::{
        employee::{Internal, InvalidRaise},
        promotion::Outcome,
        Employee,
    },
    factory,
    query::{self, FetchInternalEmployee, ListInternalEmployees},
    Command as _,
};
use tokio_util::sync::CancellationToken;
use tracing as log;

use crate::{args::Command, define_error, AsError, Error, Service};

/// Runs the provided [`Command`] with the provided [`Service`], returning
/// the lines to report.
///
/// Operations waiting on I/O are abandoned once the provided `token` is
/// canceled.
///
/// # Errors
///
/// If the [`Command`] fails.
pub async fn run(
    service: &Service,
    command: Command,
    token: CancellationToken,
) -> Result<Vec<String>, Error> {
    match command {
        Command::Create {
            first_name,
            last_name,
            employer,
            external,
        } => {
            let employee = service
                .execute(Cancelable::new(
                    command::CreateEmployee {
                        first_name,
                        last_name,
                        employer,
                        is_external: external,
                    },
                    token,
                ))
                .await
                .map_err(AsError::into_error)?;
            Ok(vec![describe_employee(&employee)])
        }
        Command::Fetch { id: None } => Ok(service
            .execute(Cancelable::new(ListInternalEmployees::by(()), token))
            .await
            .map_err(AsError::into_error)?
            .iter()
            .map(describe_internal)
            .collect()),
        Command::Fetch { id: Some(id) } => {
            let employee = fetch(service, id, token).await?;
            Ok(vec![describe_internal(&employee)])
        }
        Command::Promote { id } => {
            let mut employee = fetch(service, id, token.clone()).await?;
            let outcome = service
                .execute(Cancelable::new(
                    command::PromoteInternalEmployee {
                        employee: &mut employee,
                    },
                    token,
                ))
                .await
                .map_err(AsError::into_error)?;
            Ok(vec![match outcome {
                Outcome::Promoted {
                    employee_id,
                    job_level,
                } => format!("{employee_id} promoted to job level {job_level}"),
                Outcome::NotEligible { employee_id } => {
                    format!("{employee_id} is not eligible for promotion")
                }
            }])
        }
        Command::Raise { id, amount } => {
            let mut employee = fetch(service, id, token.clone()).await?;
            service
                .execute(command::GiveRaise {
                    employee: &mut employee,
                    amount,
                })
                .await
                .map_err(AsError::into_error)?;
            persist(service, &employee, token).await?;
            Ok(vec![describe_internal(&employee)])
        }
        Command::Attend { id, course_id } => {
            define_error! {
                enum Error {
                    #[code = "COURSE_NOT_EXISTS"]
                    #[message = "`Course` with the provided ID does not exist"]
                    CourseNotExists,
                }
            }

            let mut employee = fetch(service, id, token.clone()).await?;
            let course = service
                .execute(Cancelable::new(
                    query::course::ById::by(course_id),
                    token.clone(),
                ))
                .await
                .map_err(AsError::into_error)?
                .ok_or_else(|| crate::Error::from(Error::CourseNotExists))?;
            service
                .execute(command::AttendCourse {
                    employee: &mut employee,
                    course,
                })
                .await
                .map_err(AsError::into_error)?;
            persist(service, &employee, token).await?;
            Ok(vec![describe_internal(&employee)])
        }
        Command::Absent { id } => {
            let employee =
                Employee::from(fetch(service, id, token).await?);
            let subscription = service.absences().subscribe(|absence| {
                log::info!(
                    "{} is absent since {}",
                    absence.employee.full_name(),
                    absence.reported_at.to_rfc3339(),
                );
            });
            let notified = service
                .execute(command::NotifyOfAbsence {
                    employee: &employee,
                })
                .await
                .map_err(AsError::into_error);
            _ = service.absences().unsubscribe(subscription);
            Ok(vec![format!(
                "{} absence reported to {} listener(s)",
                employee.id(),
                notified?,
            )])
        }
    }
}

/// Fetches an existing [`Internal`] employee.
async fn fetch(
    service: &Service,
    id: service::domain::employee::Id,
    token: CancellationToken,
) -> Result<Internal, Error> {
    service
        .execute(Cancelable::new(FetchInternalEmployee { id }, token))
        .await
        .map_err(AsError::into_error)
}

/// Stores changes of the provided [`Internal`] employee.
async fn persist(
    service: &Service,
    employee: &Internal,
    token: CancellationToken,
) -> Result<(), Error> {
    define_error! {
        enum Error {
            #[code = "CANCELED"]
            #[message = "Operation was canceled"]
            Canceled,
        }
    }

    tokio::select! {
        biased;

        () = token.cancelled() => Err(Error::Canceled.into()),
        res = service
            .database()
            .execute(Update(Employee::from(employee.clone()))) => {
            res.map_err(AsError::into_error)
        }
    }
}

/// Describes the provided [`Employee`] in a single line.
fn describe_employee(employee: &Employee) -> String {
    match employee {
        Employee::Internal(e) => describe_internal(e),
        Employee::External(e) => {
            format!("{} {} (external, {})", e.id, e.full_name(), e.employer)
        }
    }
}

/// Describes the provided [`Internal`] employee in a single line.
fn describe_internal(employee: &Internal) -> String {
    format!(
        "{} {}: job level {}, {} year(s) in service, salary {}, \
         suggested bonus {}, minimum raise given: {}, courses: [{}]",
        employee.id(),
        employee.full_name(),
        employee.job_level(),
        employee.years_in_service(),
        employee.salary(),
        employee.suggested_bonus(),
        employee.minimum_raise_given(),
        employee.attended_courses().iter().map(|c| &c.title).join(", "),
    )
}

impl<E: AsError> AsError for command::cancelable::ExecutionError<E> {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "CANCELED"]
                #[message = "Operation was canceled"]
                Canceled,
            }
        }

        match self {
            Self::Canceled => Some(Error::Canceled.into()),
            Self::Failed(e) => e.try_as_error(),
        }
    }
}

impl AsError for command::create_internal_employee::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "COURSE_NOT_EXISTS"]
                #[message = "Obligatory `Course` does not exist"]
                CourseNotExists,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::CourseNotExists(_) => Some(Error::CourseNotExists.into()),
        }
    }
}

impl AsError for command::create_employee::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "EMPLOYER_REQUIRED"]
                #[message = "External employee requires an employer name"]
                EmployerRequired,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::Factory(factory::Error::EmployerRequired) => {
                Some(Error::EmployerRequired.into())
            }
            Self::Internal(e) => e.try_as_error(),
        }
    }
}

impl AsError for command::give_raise::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        let Self::InvalidRaise(e) = self;
        let code = match e {
            InvalidRaise::BelowMinimum { .. } => "INVALID_RAISE",
            InvalidRaise::SalaryOverflow { .. } => "SALARY_OVERFLOW",
        };
        Some(Error {
            code,
            message: format!("Invalid raise: {e}"),
            backtrace: None,
        })
    }
}

impl AsError for command::promote_internal_employee::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "ELIGIBILITY_CHECK_FAILED"]
                #[message = "Promotion eligibility cannot be checked"]
                EligibilityCheckFailed,

                #[code = "PERSISTENCE_FAILED"]
                #[message = "Employee was promoted, but not stored, so the \
                             stored state may be inconsistent"]
                PersistenceFailed,

                #[code = "HIGHEST_JOB_LEVEL"]
                #[message = "Employee already has the highest job level"]
                HighestJobLevel,
            }
        }

        match self {
            Self::HighestJobLevel(_) => Some(Error::HighestJobLevel.into()),
            Self::EligibilityCheck(_) => {
                Some(Error::EligibilityCheckFailed.into())
            }
            Self::Persistence(_) => Some(Error::PersistenceFailed.into()),
        }
    }
}

impl AsError for query::internal_employee::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "EMPLOYEE_NOT_EXISTS"]
                #[message = "Internal employee with the provided ID does not \
                             exist"]
                EmployeeNotExists,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::EmployeeNotExists(_) => Some(Error::EmployeeNotExists.into()),
        }
    }
}
