//! Timetabling domain models.
//!
//! Provides the reference data for a problem instance and the mutable
//! assignment grid that search strategies explore.
//!
//! - [`Instance`] and its parts are loaded once, before any search, and
//!   shared read-only by every candidate timetable.
//! - [`Timetable`] instances are created per search attempt or per explored
//!   candidate, mutated in place, and copied explicitly when an independent
//!   baseline must be preserved.

mod instance;
mod timetable;

pub use instance::{Course, CurriculumMembership, Instance, Room, Unavailability, UnavailabilityTable};
pub use timetable::{random_slot, random_swap, Slot, Timetable};
