//! [`Command`] for recording a [`Course`] attended by an [`Internal`]
//! employee.

use std::convert::Infallible;

use tracing as log;

#[cfg(doc)]
use crate::{domain::employee::AttendancePolicy, Config};
use crate::{
    domain::{employee::Internal, Course},
    Service,
};

use super::Command;

/// [`Command`] for recording a [`Course`] attended by an [`Internal`]
/// employee in place, recomputing its suggested bonus.
///
/// Repeated attendance is handled according to [`Config::attendance`]
/// [`AttendancePolicy`]. Persisting the [`Internal`] employee is up to the
/// caller.
#[derive(Debug)]
pub struct AttendCourse<'e> {
    /// [`Internal`] employee attending the [`Course`].
    pub employee: &'e mut Internal,

    /// Attended [`Course`].
    pub course: Course,
}

impl<Db, Ep> Command<AttendCourse<'_>> for Service<Db, Ep> {
    type Ok = ();
    type Err = Infallible;

    async fn execute(
        &self,
        cmd: AttendCourse<'_>,
    ) -> Result<Self::Ok, Self::Err> {
        let AttendCourse { employee, course } = cmd;

        let course_id = course.id;
        employee.attend(course, self.config().attendance);

        log::debug!(
            "`Internal(id: {})` attended `Course(id: {course_id})`, \
             suggested bonus is {}",
            employee.id(),
            employee.suggested_bonus(),
        );
        Ok(())
    }
}
