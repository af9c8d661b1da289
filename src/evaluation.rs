//! Weighted soft-constraint objective function.
//!
//! Maps any timetable to a non-negative integer cost; lower is better. The
//! cost is recomputed from scratch on every call — no incremental state — so
//! it is safe to call repeatedly on mutating candidates during search, and it
//! never assumes the grid was produced by the builder.
//!
//! # Terms
//!
//! | Term | Definition | Default weight |
//! |------|-----------|---------------|
//! | Unfulfilled lectures | Σ max(0, required − placed) | 10 |
//! | Working-day shortfall | Σ max(0, min days − distinct days taught) | 5 |
//! | Secluded lectures | isolated curriculum slots with no adjacent-period neighbor | 2 |
//! | Room changes | Σ over taught courses of (distinct rooms − 1) | 1 |
//! | Capacity overflow | Σ over occupied slots of max(0, students − capacity) | 1 |
//!
//! A course that is never taught contributes nothing to the room-changes
//! term; its absence is already penalized by the unfulfilled-lectures term.
//!
//! # Reference
//! Bonutti et al. (2012), "Benchmarking curriculum-based course timetabling",
//! UD2 weighting

use serde::{Deserialize, Serialize};

use crate::models::{Instance, Timetable};

/// Per-term penalty weights.
///
/// Defaults follow the ITC-2007 UD2 weighting shown in the module table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PenaltyWeights {
    /// Weight per unfulfilled lecture.
    pub unfulfilled_lectures: u32,
    /// Weight per missing working day.
    pub working_days: u32,
    /// Weight per secluded lecture.
    pub compactness: u32,
    /// Weight per extra room a course is taught in.
    pub room_stability: u32,
    /// Weight per student over room capacity.
    pub room_capacity: u32,
}

impl Default for PenaltyWeights {
    fn default() -> Self {
        Self {
            unfulfilled_lectures: 10,
            working_days: 5,
            compactness: 2,
            room_stability: 1,
            room_capacity: 1,
        }
    }
}

impl PenaltyWeights {
    /// Creates the default weighting.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the unfulfilled-lecture weight.
    pub fn with_unfulfilled_lectures(mut self, weight: u32) -> Self {
        self.unfulfilled_lectures = weight;
        self
    }

    /// Sets the working-day weight.
    pub fn with_working_days(mut self, weight: u32) -> Self {
        self.working_days = weight;
        self
    }

    /// Sets the compactness weight.
    pub fn with_compactness(mut self, weight: u32) -> Self {
        self.compactness = weight;
        self
    }

    /// Sets the room-stability weight.
    pub fn with_room_stability(mut self, weight: u32) -> Self {
        self.room_stability = weight;
        self
    }

    /// Sets the room-capacity weight.
    pub fn with_room_capacity(mut self, weight: u32) -> Self {
        self.room_capacity = weight;
        self
    }
}

/// Raw (unweighted) counts of the five soft-constraint terms.
///
/// Useful for reporting which terms dominate a candidate's cost; combine
/// with a [`PenaltyWeights`] via [`CostBreakdown::weighted_total`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Lectures required but not placed anywhere.
    pub unfulfilled_lectures: u32,
    /// Distinct teaching days missing below each course's minimum.
    pub working_day_shortfall: u32,
    /// (day, period, curriculum) triples holding an isolated lecture.
    pub secluded_lectures: u32,
    /// Extra rooms used beyond one, summed over taught courses.
    pub room_changes: u32,
    /// Students over room capacity, summed over occupied slots.
    pub capacity_overflow: u32,
}

impl CostBreakdown {
    /// Measures all five terms, each by its own full scan of the grid.
    pub fn measure(instance: &Instance, timetable: &Timetable) -> Self {
        Self {
            unfulfilled_lectures: unfulfilled_lectures(instance, timetable),
            working_day_shortfall: working_day_shortfall(instance, timetable),
            secluded_lectures: secluded_lectures(instance, timetable),
            room_changes: room_changes(instance, timetable),
            capacity_overflow: capacity_overflow(instance, timetable),
        }
    }

    /// Combines the raw counts into a single weighted cost.
    pub fn weighted_total(&self, weights: &PenaltyWeights) -> u32 {
        weights.unfulfilled_lectures * self.unfulfilled_lectures
            + weights.working_days * self.working_day_shortfall
            + weights.compactness * self.secluded_lectures
            + weights.room_stability * self.room_changes
            + weights.room_capacity * self.capacity_overflow
    }
}

/// Evaluates a timetable to a single weighted cost. Lower is better.
pub fn evaluate(instance: &Instance, timetable: &Timetable, weights: &PenaltyWeights) -> u32 {
    CostBreakdown::measure(instance, timetable).weighted_total(weights)
}

fn unfulfilled_lectures(instance: &Instance, timetable: &Timetable) -> u32 {
    let mut placed = vec![0u32; instance.course_count()];
    for (_, course) in timetable.occupied() {
        placed[course] += 1;
    }
    instance
        .courses
        .iter()
        .zip(&placed)
        .map(|(course, &count)| course.lectures.saturating_sub(count))
        .sum()
}

fn working_day_shortfall(instance: &Instance, timetable: &Timetable) -> u32 {
    let days = instance.days;
    let mut taught_on = vec![false; instance.course_count() * days];
    for (slot, course) in timetable.occupied() {
        taught_on[course * days + slot.day] = true;
    }
    instance
        .courses
        .iter()
        .enumerate()
        .map(|(index, course)| {
            let distinct = taught_on[index * days..(index + 1) * days]
                .iter()
                .filter(|&&taught| taught)
                .count() as u32;
            course.min_working_days.saturating_sub(distinct)
        })
        .sum()
}

fn secluded_lectures(instance: &Instance, timetable: &Timetable) -> u32 {
    let periods = instance.periods_per_day;
    let curricula = instance.curricula;

    // Presence count of each curriculum per (day, period)
    let mut presence = vec![0u32; instance.days * periods * curricula];
    for (slot, course) in timetable.occupied() {
        for &curriculum in instance.memberships.curricula_of(course) {
            presence[(slot.day * periods + slot.period) * curricula + curriculum] += 1;
        }
    }

    let at = |day: usize, period: usize, curriculum: usize| {
        presence[(day * periods + period) * curricula + curriculum]
    };

    let mut secluded = 0;
    for day in 0..instance.days {
        for period in 0..periods {
            for curriculum in 0..curricula {
                if at(day, period, curriculum) != 1 {
                    continue;
                }
                let before = period > 0 && at(day, period - 1, curriculum) > 0;
                let after = period + 1 < periods && at(day, period + 1, curriculum) > 0;
                if !before && !after {
                    secluded += 1;
                }
            }
        }
    }
    secluded
}

fn room_changes(instance: &Instance, timetable: &Timetable) -> u32 {
    let rooms = instance.room_count();
    let mut taught_in = vec![false; instance.course_count() * rooms];
    for (slot, course) in timetable.occupied() {
        taught_in[course * rooms + slot.room] = true;
    }
    (0..instance.course_count())
        .map(|course| {
            let distinct = taught_in[course * rooms..(course + 1) * rooms]
                .iter()
                .filter(|&&used| used)
                .count() as u32;
            // A never-taught course contributes 0, not -1
            distinct.saturating_sub(1)
        })
        .sum()
}

fn capacity_overflow(instance: &Instance, timetable: &Timetable) -> u32 {
    timetable
        .occupied()
        .map(|(slot, course)| {
            instance.courses[course]
                .students
                .saturating_sub(instance.rooms[slot.room].capacity)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Course, Room, Slot};

    /// One lecturer per course, one curriculum holding courses 0 and 1.
    /// 2 days × 3 periods × 2 rooms.
    fn sample_instance() -> Instance {
        Instance::new(2, 3)
            .with_lecturers(3)
            .with_curricula(1)
            .with_course(Course::new(0).with_lectures(2).with_min_working_days(2).with_students(20))
            .with_course(Course::new(1).with_lectures(1).with_students(35))
            .with_course(Course::new(2).with_lectures(1).with_students(10))
            .with_room(Room::new(30))
            .with_room(Room::new(40))
            .with_membership(0, 0)
            .with_membership(1, 0)
    }

    #[test]
    fn test_zero_cost_schedule() {
        // Courses 0 and 1 share curriculum 0 and pair up in adjacent periods
        // on both days; every course meets its lecture count and working-day
        // minimum in a single room that fits its enrollment.
        let instance = Instance::new(2, 3)
            .with_lecturers(3)
            .with_curricula(1)
            .with_course(Course::new(0).with_lectures(2).with_min_working_days(2).with_students(20))
            .with_course(Course::new(1).with_lectures(2).with_min_working_days(2).with_students(35))
            .with_course(Course::new(2).with_lectures(1).with_students(10))
            .with_room(Room::new(30))
            .with_room(Room::new(40))
            .with_membership(0, 0)
            .with_membership(1, 0);

        let mut timetable = Timetable::for_instance(&instance);
        timetable.assign(Slot::new(0, 0, 0), 0);
        timetable.assign(Slot::new(0, 1, 1), 1);
        timetable.assign(Slot::new(1, 0, 0), 0);
        timetable.assign(Slot::new(1, 1, 1), 1);
        timetable.assign(Slot::new(0, 2, 0), 2); // no curriculum → never secluded

        let breakdown = CostBreakdown::measure(&instance, &timetable);
        assert_eq!(breakdown.unfulfilled_lectures, 0);
        assert_eq!(breakdown.working_day_shortfall, 0);
        assert_eq!(breakdown.secluded_lectures, 0);
        assert_eq!(breakdown.room_changes, 0);
        assert_eq!(breakdown.capacity_overflow, 0);
        assert_eq!(evaluate(&instance, &timetable, &PenaltyWeights::default()), 0);
    }

    #[test]
    fn test_empty_timetable_cost() {
        let instance = sample_instance();
        let timetable = Timetable::for_instance(&instance);
        let breakdown = CostBreakdown::measure(&instance, &timetable);
        // 4 required lectures unplaced, 4 required working days missing
        assert_eq!(breakdown.unfulfilled_lectures, 4);
        assert_eq!(breakdown.working_day_shortfall, 4);
        assert_eq!(breakdown.secluded_lectures, 0);
        assert_eq!(breakdown.room_changes, 0);
        assert_eq!(breakdown.capacity_overflow, 0);
        assert_eq!(evaluate(&instance, &timetable, &PenaltyWeights::default()), 60);
    }

    #[test]
    fn test_unfulfilled_lecture_weighs_ten() {
        let instance = sample_instance();
        let weights = PenaltyWeights::default();
        let mut timetable = Timetable::for_instance(&instance);
        timetable.assign(Slot::new(0, 0, 0), 0);
        timetable.assign(Slot::new(1, 0, 0), 0);
        timetable.assign(Slot::new(0, 1, 0), 1);
        timetable.assign(Slot::new(1, 1, 1), 2);
        let full = evaluate(&instance, &timetable, &weights);

        // Removing course 2's only lecture adds exactly one unfulfilled
        // lecture and nothing else (no curriculum, no working-day minimum
        // beyond the one it loses).
        timetable.clear(Slot::new(1, 1, 1));
        let reduced = evaluate(&instance, &timetable, &weights);
        assert_eq!(reduced, full + 10 + 5); // +10 unfulfilled, +5 working day
    }

    #[test]
    fn test_overfulfilled_course_not_rewarded() {
        let instance = sample_instance();
        let mut timetable = Timetable::for_instance(&instance);
        // Course 2 requires 1 lecture but is placed three times
        timetable.assign(Slot::new(0, 0, 0), 2);
        timetable.assign(Slot::new(0, 1, 0), 2);
        timetable.assign(Slot::new(1, 0, 0), 2);
        let breakdown = CostBreakdown::measure(&instance, &timetable);
        // Clamped at zero — over-assignment earns no credit
        assert_eq!(breakdown.unfulfilled_lectures, 3); // courses 0 and 1 still missing
    }

    #[test]
    fn test_working_day_shortfall() {
        let instance = sample_instance();
        let mut timetable = Timetable::for_instance(&instance);
        // Course 0 needs 2 distinct days but gets both lectures on day 0
        timetable.assign(Slot::new(0, 0, 0), 0);
        timetable.assign(Slot::new(0, 1, 0), 0);
        let breakdown = CostBreakdown::measure(&instance, &timetable);
        assert_eq!(breakdown.working_day_shortfall, 1 + 1 + 1); // course 0 short 1, courses 1 and 2 short 1 each
    }

    #[test]
    fn test_secluded_lecture_interior_period() {
        let instance = sample_instance();
        let mut timetable = Timetable::for_instance(&instance);
        // Lone curriculum-0 lecture at an interior period, both neighbors empty
        timetable.assign(Slot::new(0, 1, 0), 0);
        let breakdown = CostBreakdown::measure(&instance, &timetable);
        assert_eq!(breakdown.secluded_lectures, 1);

        // An adjacent curriculum-0 lecture removes the seclusion
        timetable.assign(Slot::new(0, 2, 1), 1);
        let breakdown = CostBreakdown::measure(&instance, &timetable);
        assert_eq!(breakdown.secluded_lectures, 0);
    }

    #[test]
    fn test_secluded_lecture_edge_period() {
        let instance = sample_instance();
        let mut timetable = Timetable::for_instance(&instance);
        // Edge period 0 has only one neighbor (period 1)
        timetable.assign(Slot::new(0, 0, 0), 0);
        assert_eq!(CostBreakdown::measure(&instance, &timetable).secluded_lectures, 1);

        timetable.assign(Slot::new(0, 1, 0), 1);
        assert_eq!(CostBreakdown::measure(&instance, &timetable).secluded_lectures, 0);
    }

    #[test]
    fn test_two_in_slot_not_secluded() {
        // Two curriculum lectures in the same slot: presence is 2, not 1,
        // so neither counts as secluded (and the grid is infeasible anyway —
        // the evaluator must still score it).
        let instance = sample_instance();
        let mut timetable = Timetable::for_instance(&instance);
        timetable.assign(Slot::new(0, 1, 0), 0);
        timetable.assign(Slot::new(0, 1, 1), 1);
        assert_eq!(CostBreakdown::measure(&instance, &timetable).secluded_lectures, 0);
    }

    #[test]
    fn test_room_stability_per_extra_room() {
        let instance = sample_instance();
        let weights = PenaltyWeights::default();
        let mut timetable = Timetable::for_instance(&instance);
        // Course 0 taught in both rooms
        timetable.assign(Slot::new(0, 0, 0), 0);
        timetable.assign(Slot::new(1, 0, 1), 0);
        let spread = CostBreakdown::measure(&instance, &timetable);
        assert_eq!(spread.room_changes, 1);

        // Consolidating into one room reduces the term by 1 per vacated room
        let mut stable = Timetable::for_instance(&instance);
        stable.assign(Slot::new(0, 0, 0), 0);
        stable.assign(Slot::new(1, 0, 0), 0);
        let consolidated = CostBreakdown::measure(&instance, &stable);
        assert_eq!(consolidated.room_changes, 0);
        assert_eq!(
            spread.weighted_total(&weights),
            consolidated.weighted_total(&weights) + 1
        );
    }

    #[test]
    fn test_never_taught_course_contributes_zero_stability() {
        let instance = sample_instance();
        let timetable = Timetable::for_instance(&instance);
        // All courses untaught: the term is 0, never negative
        assert_eq!(CostBreakdown::measure(&instance, &timetable).room_changes, 0);
    }

    #[test]
    fn test_capacity_overflow() {
        let instance = sample_instance();
        let mut timetable = Timetable::for_instance(&instance);
        // Course 1 (35 students) into room 0 (capacity 30): overflow 5
        timetable.assign(Slot::new(0, 0, 0), 1);
        assert_eq!(CostBreakdown::measure(&instance, &timetable).capacity_overflow, 5);

        // Room 1 (capacity 40) fits: overflow 0
        let mut fits = Timetable::for_instance(&instance);
        fits.assign(Slot::new(0, 0, 1), 1);
        assert_eq!(CostBreakdown::measure(&instance, &fits).capacity_overflow, 0);
    }

    #[test]
    fn test_custom_weights() {
        let instance = sample_instance();
        let timetable = Timetable::for_instance(&instance);
        let doubled = PenaltyWeights::new()
            .with_unfulfilled_lectures(20)
            .with_working_days(10);
        assert_eq!(
            evaluate(&instance, &timetable, &doubled),
            2 * evaluate(&instance, &timetable, &PenaltyWeights::default())
        );
    }
}
