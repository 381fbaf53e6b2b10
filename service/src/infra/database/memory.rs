//! In-memory [`Database`] implementation.

use std::{collections::HashMap, sync::Arc};

use common::{
    money::Currency,
    operations::{By, Insert, Select, Update},
    Money,
};
use derive_more::{Display, Error as StdError};
use tokio::sync::RwLock;
use tracerr::Traced;
use tracing as log;
use uuid::Uuid;

use crate::{
    domain::{
        course,
        employee::{self, EmployerName, External, Internal, JobLevel, YearsInService},
        Course, Employee,
    },
    infra::{database, Database},
};

/// In-memory [`Database`].
///
/// Clones share the same storage.
#[derive(Clone, Debug, Default)]
pub struct Memory {
    /// Stored data.
    state: Arc<RwLock<State>>,
}

/// Data stored in a [`Memory`] database.
#[derive(Debug, Default)]
struct State {
    /// Stored [`Course`]s.
    courses: HashMap<course::Id, Course>,

    /// Stored [`Employee`]s.
    employees: HashMap<employee::Id, Employee>,
}

impl State {
    /// Stores the provided [`Employee`] along with all the [`Course`]s it
    /// attended.
    fn store(&mut self, employee: Employee) {
        let employee = match employee {
            Employee::Internal(e) => {
                let courses = e
                    .attended_courses()
                    .iter()
                    .cloned()
                    .map(Course::persisted)
                    .collect::<Vec<_>>();
                for c in &courses {
                    _ = self.courses.entry(c.id).or_insert_with(|| c.clone());
                }
                Employee::from(e.with_attended_courses(courses))
            }
            e @ Employee::External(_) => e,
        };
        drop(self.employees.insert(employee.id(), employee));
    }
}

impl Memory {
    /// Creates a new empty [`Memory`] database.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new [`Memory`] database filled with the well-known
    /// [`Course`]s and [`Employee`]s.
    #[expect(clippy::missing_panics_doc, reason = "infallible")]
    #[must_use]
    pub fn seeded() -> Self {
        let mut state = State::default();
        let course = |id: u128, title: &str| {
            Course::existing(
                Uuid::from_u128(id).into(),
                course::Title::new(title).expect("valid seed `Title`"),
            )
        };
        let name =
            |n: &str| employee::Name::new(n).expect("valid seed `Name`");

        let introduction = Course::existing(
            course::Id::FIRST_OBLIGATORY,
            course::Title::new("Company Introduction").expect("valid"),
        );
        let respect = Course::existing(
            course::Id::SECOND_OBLIGATORY,
            course::Title::new("Respecting Your Colleagues").expect("valid"),
        );
        let customers =
            course(0x844e_14ce_c055_49e9_9610_8556_69c9_859b, "Dealing with Customers 101");
        let advanced = course(
            0xd6e0_e4b7_9365_4332_9b29_bb7b_f096_64a6,
            "Dealing with Customers - Advanced",
        );
        let disasters =
            course(0xcbf6_db3b_c4ee_46aa_9457_5fa8_aefe_f33a, "Disaster Management 101");
        for c in [&introduction, &respect, &customers, &advanced, &disasters] {
            drop(state.courses.insert(c.id, c.clone()));
        }

        state.store(
            Internal::new(
                name("Megan"),
                name("Jones"),
                YearsInService::new(2),
                Money::new(3000, Currency::Usd),
                false,
                JobLevel::new(2).expect("positive"),
            )
            .with_id(
                Uuid::from_u128(0x72f2_f5fe_e50c_4966_8420_d502_58ae_fdcb)
                    .into(),
            )
            .with_attended_courses([introduction.clone(), respect.clone()])
            .into(),
        );
        state.store(
            Internal::new(
                name("Jaimy"),
                name("Johnson"),
                YearsInService::new(3),
                Money::new(3400, Currency::Usd),
                true,
                JobLevel::FIRST,
            )
            .with_id(
                Uuid::from_u128(0x1f5c_2b6c_8a4e_4b7d_9c3a_0e2f_6d8b_4a11)
                    .into(),
            )
            .with_attended_courses([introduction, respect, customers])
            .into(),
        );
        state.store(
            External {
                id: Uuid::from_u128(0xa7d1_3e90_55c2_4f0b_b1e4_8c6f_2d93_7e05)
                    .into(),
                first_name: name("Amanda"),
                last_name: name("Smith"),
                employer: EmployerName::new("IT for Everyone, Inc")
                    .expect("valid seed `EmployerName`"),
            }
            .into(),
        );

        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }
}

impl Database<Select<By<Option<Course>, course::Id>>> for Memory {
    type Ok = Option<Course>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Course>, course::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.state.read().await.courses.get(by.inner()).cloned())
    }
}

impl<IDs> Database<Select<By<Vec<Course>, IDs>>> for Memory
where
    IDs: AsRef<[course::Id]>,
{
    type Ok = Vec<Course>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Course>, IDs>>,
    ) -> Result<Self::Ok, Self::Err> {
        let state = self.state.read().await;
        Ok(by
            .inner()
            .as_ref()
            .iter()
            .filter_map(|id| state.courses.get(id).cloned())
            .collect())
    }
}

impl Database<Select<By<Option<Internal>, employee::Id>>> for Memory {
    type Ok = Option<Internal>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Internal>, employee::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self
            .state
            .read()
            .await
            .employees
            .get(by.inner())
            .and_then(Employee::as_internal)
            .cloned())
    }
}

impl Database<Select<By<Vec<Internal>, ()>>> for Memory {
    type Ok = Vec<Internal>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Internal>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut all = self
            .state
            .read()
            .await
            .employees
            .values()
            .filter_map(Employee::as_internal)
            .cloned()
            .collect::<Vec<_>>();
        all.sort_by(|a, b| {
            (a.last_name().as_ref(), a.first_name().as_ref())
                .cmp(&(b.last_name().as_ref(), b.first_name().as_ref()))
        });
        Ok(all)
    }
}

impl Database<Insert<Employee>> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(employee): Insert<Employee>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self.state.write().await;
        let id = employee.id();
        if state.employees.contains_key(&id) {
            return Err(tracerr::new!(database::Error::from(
                Error::EmployeeExists(id)
            )));
        }
        state.store(employee);
        log::debug!("`Employee(id: {id})` added");
        Ok(())
    }
}

impl Database<Update<Employee>> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(employee): Update<Employee>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = employee.id();
        self.state.write().await.store(employee);
        log::debug!("`Employee(id: {id})` stored");
        Ok(())
    }
}

/// [`Memory`] database error.
#[derive(Clone, Copy, Debug, Display, StdError)]
pub enum Error {
    /// [`Employee`] with the same ID is stored already.
    #[display("`Employee(id: {_0})` already exists")]
    EmployeeExists(#[error(not(source))] employee::Id),
}
