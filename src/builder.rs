//! Greedy construction of initial solutions.
//!
//! Produces a starting timetable for later optimization. The output always
//! satisfies the three hard constraints; soft constraints (minimum working
//! days, room capacity) are intentionally not enforced here — they are
//! scored by [`crate::evaluation`] and left to the search strategy.
//!
//! # Algorithm
//!
//! 1. Per day, reset a "course already assigned today" marker set.
//! 2. Per period within the day, reset lecturer-busy and curriculum-busy markers.
//! 3. Per room, scan course ids in ascending order and accept the first
//!    candidate that is not yet assigned today, not unavailable in the slot,
//!    whose lecturer and curricula are idle, and whose lecture count is not
//!    yet met.
//! 4. If no course is eligible, the room stays empty for that slot — a
//!    valid, expected outcome, not a failure.
//!
//! The scan restarts at course 0 for every room, so low course ids are
//! favored first in every slot. The procedure is total: it always returns a
//! timetable, even when some courses end up under-assigned.

use crate::models::{Instance, Slot, Timetable};

/// Builds a hard-constraint-feasible starting timetable.
pub fn build_initial_solution(instance: &Instance) -> Timetable {
    let mut timetable = Timetable::for_instance(instance);
    let mut assignment_count = vec![0u32; instance.course_count()];

    for day in 0..instance.days {
        let mut assigned_today = vec![false; instance.course_count()];

        for period in 0..instance.periods_per_day {
            let mut lecturer_busy = vec![false; instance.lecturers];
            let mut curriculum_busy = vec![false; instance.curricula];

            for room in 0..instance.room_count() {
                let Some(course) = find_eligible_course(
                    instance,
                    day,
                    period,
                    &assigned_today,
                    &lecturer_busy,
                    &curriculum_busy,
                    &assignment_count,
                ) else {
                    continue;
                };

                assigned_today[course] = true;
                lecturer_busy[instance.courses[course].lecturer] = true;
                for &curriculum in instance.memberships.curricula_of(course) {
                    curriculum_busy[curriculum] = true;
                }
                assignment_count[course] += 1;
                timetable.assign(Slot::new(day, period, room), course);
            }
        }
    }

    timetable
}

/// Ascending scan for the first course placeable in the given slot.
fn find_eligible_course(
    instance: &Instance,
    day: usize,
    period: usize,
    assigned_today: &[bool],
    lecturer_busy: &[bool],
    curriculum_busy: &[bool],
    assignment_count: &[u32],
) -> Option<usize> {
    (0..instance.course_count()).find(|&course| {
        if assigned_today[course] {
            return false;
        }
        if instance.unavailability.contains(day, period, course) {
            return false;
        }
        if lecturer_busy[instance.courses[course].lecturer] {
            return false;
        }
        if instance
            .memberships
            .curricula_of(course)
            .iter()
            .any(|&curriculum| curriculum_busy[curriculum])
        {
            return false;
        }
        assignment_count[course] < instance.courses[course].lectures
    })
}
