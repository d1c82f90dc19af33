pub mod calculations;
pub mod models;
pub mod schedule;

pub use models::*;
pub use schedule::{BracketSchedule, ScheduleError, reference_schedule};
