//! [`Query`] collection related to a single [`Internal`] employee.

use common::operations::{By, Select};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::employee::{self, Internal},
    infra::{database, Database},
    Service,
};

use super::{DatabaseQuery, Query};

/// Queries an [`Internal`] employee by its [`employee::Id`], if any.
pub type ById = DatabaseQuery<By<Option<Internal>, employee::Id>>;

/// [`Query`] fetching an existing [`Internal`] employee by its
/// [`employee::Id`].
///
/// The suggested bonus is returned as stored, without being recomputed.
#[derive(Clone, Copy, Debug)]
pub struct FetchInternalEmployee {
    /// ID of the [`Internal`] employee to fetch.
    pub id: employee::Id,
}

impl<Db, Ep> Query<FetchInternalEmployee> for Service<Db, Ep>
where
    Db: Database<
        Select<By<Option<Internal>, employee::Id>>,
        Ok = Option<Internal>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = Internal;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        FetchInternalEmployee { id }: FetchInternalEmployee,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        self.database()
            .execute(Select(By::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::EmployeeNotExists(id))
            .map_err(tracerr::wrap!())
    }
}

/// Error of [`FetchInternalEmployee`] [`Query`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Internal`] employee doesn't exist.
    #[display("`Internal(id: {_0})` employee does not exist")]
    EmployeeNotExists(#[error(not(source))] employee::Id),
}

#[cfg(all(test, feature = "memory"))]
mod spec {
    use common::{money::Currency, Blocking as _, Handler as _, Money};

    use crate::{domain::employee, infra::Memory, Config, Service};

    use super::{ExecutionError, FetchInternalEmployee};

    fn service() -> Service<Memory, ()> {
        Service::new(Config::default(), Memory::seeded(), ())
    }

    #[tokio::test]
    async fn fetches_stored_bonus() {
        let id = "72f2f5fe-e50c-4966-8420-d50258aefdcb".parse().unwrap();

        let megan = service()
            .execute(FetchInternalEmployee { id })
            .await
            .unwrap();

        assert_eq!(megan.id(), id);
        assert_eq!(megan.full_name(), "Megan Jones");
        assert_eq!(megan.attended_courses().len(), 2);
        assert_eq!(megan.suggested_bonus(), Money::new(400, Currency::Usd));
    }

    #[tokio::test]
    async fn external_employee_is_not_found() {
        let id = "a7d13e90-55c2-4f0b-b1e4-8c6f2d937e05".parse().unwrap();

        let err = service()
            .execute(FetchInternalEmployee { id })
            .await
            .unwrap_err();

        assert!(
            matches!(
                err.as_ref(),
                ExecutionError::EmployeeNotExists(i) if *i == id,
            ),
            "{err}",
        );
    }

    #[test]
    fn blocking_form_reports_missing_employee() {
        let id = employee::Id::new();

        let err = service()
            .execute_blocking(FetchInternalEmployee { id })
            .unwrap_err();

        assert!(err.to_string().contains("does not exist"), "{err}");
    }
}
