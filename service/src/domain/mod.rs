//! Domain definitions.

pub mod course;
pub mod employee;
pub mod promotion;

pub use self::{course::Course, employee::Employee};
