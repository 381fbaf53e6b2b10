//! [`Command`] definition.

pub mod attend_course;
pub mod cancelable;
pub mod create_employee;
pub mod create_internal_employee;
pub mod give_raise;
pub mod notify_of_absence;
pub mod promote_internal_employee;

/// [`Command`] of the [`Service`].
///
/// The synchronous form of every [`Command`] is provided by
/// [`common::Blocking`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    attend_course::AttendCourse, cancelable::Cancelable,
    create_employee::CreateEmployee,
    create_internal_employee::CreateInternalEmployee, give_raise::GiveRaise,
    notify_of_absence::NotifyOfAbsence,
    promote_internal_employee::PromoteInternalEmployee,
};
