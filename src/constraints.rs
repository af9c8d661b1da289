//! Hard-constraint predicates.
//!
//! Three independent boolean checks over a timetable plus its instance. Each
//! scans the grid and returns `false` at the first violation found; scan
//! order does not affect the result. All are total and side-effect-free —
//! O(days · periods · rooms), the curriculum check additionally scaling with
//! the curricula of each assigned course.
//!
//! A timetable satisfying all three is *feasible*; soft-constraint quality
//! is a separate concern scored by [`crate::evaluation`].
//!
//! # Reference
//! Di Gaspero, McCollum, Schaerf (2007), "ITC-2007: Curriculum-based Course
//! Timetabling", hard constraints

use crate::models::{Instance, Slot, Timetable};

/// Checks that no lecturer teaches two courses in the same (day, period).
pub fn validate_lecturer_exclusivity(instance: &Instance, timetable: &Timetable) -> bool {
    for day in 0..timetable.days() {
        for period in 0..timetable.periods_per_day() {
            let mut lecturer_busy = vec![false; instance.lecturers];
            for room in 0..timetable.rooms() {
                let Some(course) = timetable.get(Slot::new(day, period, room)) else {
                    continue;
                };
                let lecturer = instance.courses[course].lecturer;
                if lecturer_busy[lecturer] {
                    return false;
                }
                lecturer_busy[lecturer] = true;
            }
        }
    }
    true
}

/// Checks that no two courses sharing a curriculum occupy the same (day, period).
///
/// A single assigned course marks every curriculum it belongs to as busy; a
/// curriculum marked twice in one slot is a violation.
pub fn validate_curriculum_exclusivity(instance: &Instance, timetable: &Timetable) -> bool {
    for day in 0..timetable.days() {
        for period in 0..timetable.periods_per_day() {
            let mut curriculum_busy = vec![false; instance.curricula];
            for room in 0..timetable.rooms() {
                let Some(course) = timetable.get(Slot::new(day, period, room)) else {
                    continue;
                };
                for &curriculum in instance.memberships.curricula_of(course) {
                    if curriculum_busy[curriculum] {
                        return false;
                    }
                    curriculum_busy[curriculum] = true;
                }
            }
        }
    }
    true
}

/// Checks that no course occupies a slot it is declared unavailable for.
pub fn validate_availability(instance: &Instance, timetable: &Timetable) -> bool {
    for unavailable in instance.unavailability.iter() {
        for room in 0..timetable.rooms() {
            let slot = Slot::new(unavailable.day, unavailable.period, room);
            if timetable.get(slot) == Some(unavailable.course) {
                return false;
            }
        }
    }
    true
}

/// Checks all three hard constraints.
pub fn validate_hard_constraints(instance: &Instance, timetable: &Timetable) -> bool {
    validate_lecturer_exclusivity(instance, timetable)
        && validate_curriculum_exclusivity(instance, timetable)
        && validate_availability(instance, timetable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Course, Room};

    /// Two lecturers, two curricula, three courses, two rooms, 2×2 grid.
    /// Courses 0 and 1 share lecturer 0; courses 0 and 2 share curriculum 0.
    fn sample_instance() -> Instance {
        Instance::new(2, 2)
            .with_lecturers(2)
            .with_curricula(2)
            .with_course(Course::new(0).with_lectures(2))
            .with_course(Course::new(0).with_lectures(2))
            .with_course(Course::new(1).with_lectures(2))
            .with_room(Room::new(30))
            .with_room(Room::new(30))
            .with_membership(0, 0)
            .with_membership(2, 0)
            .with_membership(1, 1)
            .with_unavailability(1, 1, 0)
    }

    #[test]
    fn test_empty_timetable_is_feasible() {
        let instance = sample_instance();
        let timetable = Timetable::for_instance(&instance);
        assert!(validate_hard_constraints(&instance, &timetable));
    }

    #[test]
    fn test_lecturer_conflict_detected() {
        let instance = sample_instance();
        let mut timetable = Timetable::for_instance(&instance);
        // Courses 0 and 1 (same lecturer) side by side in the same period
        timetable.assign(Slot::new(0, 0, 0), 0);
        timetable.assign(Slot::new(0, 0, 1), 1);
        assert!(!validate_lecturer_exclusivity(&instance, &timetable));
        // The other two checks don't care
        assert!(validate_curriculum_exclusivity(&instance, &timetable));
        assert!(validate_availability(&instance, &timetable));
    }

    #[test]
    fn test_same_lecturer_different_periods_ok() {
        let instance = sample_instance();
        let mut timetable = Timetable::for_instance(&instance);
        timetable.assign(Slot::new(0, 0, 0), 0);
        timetable.assign(Slot::new(0, 1, 1), 1);
        assert!(validate_lecturer_exclusivity(&instance, &timetable));
    }

    #[test]
    fn test_curriculum_conflict_detected() {
        let instance = sample_instance();
        let mut timetable = Timetable::for_instance(&instance);
        // Courses 0 and 2 (both in curriculum 0) in the same period
        timetable.assign(Slot::new(1, 0, 0), 0);
        timetable.assign(Slot::new(1, 0, 1), 2);
        assert!(!validate_curriculum_exclusivity(&instance, &timetable));
        assert!(validate_lecturer_exclusivity(&instance, &timetable));
    }

    #[test]
    fn test_unrelated_courses_share_period() {
        let instance = sample_instance();
        let mut timetable = Timetable::for_instance(&instance);
        // Courses 1 and 2: different lecturers, disjoint curricula
        timetable.assign(Slot::new(0, 0, 0), 1);
        timetable.assign(Slot::new(0, 0, 1), 2);
        assert!(validate_hard_constraints(&instance, &timetable));
    }

    #[test]
    fn test_availability_violation_detected() {
        let instance = sample_instance();
        let mut timetable = Timetable::for_instance(&instance);
        // Course 0 is declared unavailable at (1, 1)
        timetable.assign(Slot::new(1, 1, 1), 0);
        assert!(!validate_availability(&instance, &timetable));

        let mut moved = Timetable::for_instance(&instance);
        moved.assign(Slot::new(1, 0, 1), 0);
        assert!(validate_availability(&instance, &moved));
    }

    #[test]
    fn test_validate_all_combines_checks() {
        let instance = sample_instance();
        let mut timetable = Timetable::for_instance(&instance);
        timetable.assign(Slot::new(1, 1, 0), 0); // availability violation only
        assert!(validate_lecturer_exclusivity(&instance, &timetable));
        assert!(validate_curriculum_exclusivity(&instance, &timetable));
        assert!(!validate_hard_constraints(&instance, &timetable));
    }
}
