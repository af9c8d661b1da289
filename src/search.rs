//! Search strategy contract and shared problem-model service.
//!
//! Concrete metaheuristics (simulated annealing, tabu search, genetic
//! search) live outside this crate. What they share is defined here:
//!
//! - [`TimetableModel`] — an immutable service bundling the instance and
//!   penalty weights, exposing validation, evaluation, and construction.
//!   Any number of strategies can hold references to one model; it is plain
//!   owned data and safe to share across threads, as long as each thread
//!   mutates only its own timetables.
//! - [`TimeBudget`] / [`Countdown`] — the cooperative stop signal. A
//!   strategy starts the countdown once per search attempt and polls
//!   [`Countdown::expired`] between iterations; there is no preemptive
//!   interrupt.
//! - [`SearchStrategy`] — the entry point a strategy implements.

use std::time::{Duration, Instant};

use crate::builder::build_initial_solution;
use crate::constraints;
use crate::evaluation::{evaluate, CostBreakdown, PenaltyWeights};
use crate::models::{Instance, Timetable};

/// Default search duration in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// A whole-second search time budget.
///
/// Attempts to set a zero budget are silently ignored and the previous value
/// retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeBudget {
    seconds: u64,
}

impl Default for TimeBudget {
    fn default() -> Self {
        Self {
            seconds: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl TimeBudget {
    /// Creates a budget of the given duration, in seconds.
    ///
    /// A zero value is ignored and the default of
    /// [`DEFAULT_TIMEOUT_SECS`] seconds applies.
    pub fn new(seconds: u64) -> Self {
        let mut budget = Self::default();
        budget.set_seconds(seconds);
        budget
    }

    /// The budgeted duration, in seconds.
    pub fn seconds(&self) -> u64 {
        self.seconds
    }

    /// Sets the budgeted duration, in seconds.
    ///
    /// Zero is not a valid budget; such requests are dropped and the prior
    /// value kept.
    pub fn set_seconds(&mut self, seconds: u64) {
        if seconds == 0 {
            return;
        }
        self.seconds = seconds;
    }

    /// Starts the countdown for one search attempt.
    pub fn start(&self) -> Countdown {
        Countdown {
            started: Instant::now(),
            budget: Duration::from_secs(self.seconds),
        }
    }
}

/// A running countdown against a [`TimeBudget`].
///
/// The single cooperative stop signal: polling code is expected to terminate
/// its loop and return its best candidate once [`Countdown::expired`] turns
/// true.
#[derive(Debug, Clone, Copy)]
pub struct Countdown {
    started: Instant,
    budget: Duration,
}

impl Countdown {
    /// Whether elapsed real time has exceeded the budget.
    pub fn expired(&self) -> bool {
        self.started.elapsed() > self.budget
    }

    /// Time elapsed since the countdown started.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Immutable problem-model service shared by search strategies.
///
/// Owns the reference data and penalty weights for one problem and exposes
/// the core operations — hard-constraint validation, cost evaluation, and
/// initial-solution construction — as methods, so strategies depend on a
/// model value instead of inheriting shared helpers.
///
/// # Example
/// ```
/// use u_timetable::models::{Course, Instance, Room};
/// use u_timetable::search::TimetableModel;
///
/// let instance = Instance::new(5, 4)
///     .with_lecturers(1)
///     .with_course(Course::new(0).with_lectures(3))
///     .with_room(Room::new(40));
/// let model = TimetableModel::new(instance);
///
/// let initial = model.build_initial_solution();
/// assert!(model.validate_hard_constraints(&initial));
/// let cost = model.evaluate(&initial);
/// # let _ = cost;
/// ```
#[derive(Debug, Clone)]
pub struct TimetableModel {
    instance: Instance,
    weights: PenaltyWeights,
}

impl TimetableModel {
    /// Creates a model over the given instance with default weights.
    pub fn new(instance: Instance) -> Self {
        Self {
            instance,
            weights: PenaltyWeights::default(),
        }
    }

    /// Replaces the penalty weights.
    pub fn with_weights(mut self, weights: PenaltyWeights) -> Self {
        self.weights = weights;
        self
    }

    /// The problem instance.
    pub fn instance(&self) -> &Instance {
        &self.instance
    }

    /// The penalty weights in effect.
    pub fn weights(&self) -> &PenaltyWeights {
        &self.weights
    }

    /// Creates an empty timetable dimensioned for this instance.
    pub fn empty_timetable(&self) -> Timetable {
        Timetable::for_instance(&self.instance)
    }

    /// Builds a hard-constraint-feasible starting timetable.
    pub fn build_initial_solution(&self) -> Timetable {
        build_initial_solution(&self.instance)
    }

    /// Evaluates a timetable to a single weighted cost. Lower is better.
    pub fn evaluate(&self, timetable: &Timetable) -> u32 {
        evaluate(&self.instance, timetable, &self.weights)
    }

    /// Measures the raw per-term counts behind the cost.
    pub fn cost_breakdown(&self, timetable: &Timetable) -> CostBreakdown {
        CostBreakdown::measure(&self.instance, timetable)
    }

    /// Checks that no lecturer is double-booked in any period.
    pub fn validate_lecturer_exclusivity(&self, timetable: &Timetable) -> bool {
        constraints::validate_lecturer_exclusivity(&self.instance, timetable)
    }

    /// Checks that no curriculum is double-booked in any period.
    pub fn validate_curriculum_exclusivity(&self, timetable: &Timetable) -> bool {
        constraints::validate_curriculum_exclusivity(&self.instance, timetable)
    }

    /// Checks that no course sits in a slot it is unavailable for.
    pub fn validate_availability(&self, timetable: &Timetable) -> bool {
        constraints::validate_availability(&self.instance, timetable)
    }

    /// Checks all three hard constraints.
    pub fn validate_hard_constraints(&self, timetable: &Timetable) -> bool {
        constraints::validate_hard_constraints(&self.instance, timetable)
    }
}

/// A pluggable search strategy.
///
/// Implementors explore neighbors of the initial timetable — typically via
/// [`Timetable::swap`](crate::models::Timetable::swap) and
/// [`random_swap`](crate::models::random_swap) — keep the best candidate
/// under the model's evaluation, and poll the countdown between iterations.
///
/// The receiver is mutable because strategies carry their own state
/// (temperature, tabu lists, populations); the model stays shared and
/// immutable.
pub trait SearchStrategy {
    /// Strategy name (e.g., "SA", "Tabu").
    fn name(&self) -> &str;

    /// Searches from `initial`, returning the best timetable found.
    ///
    /// Must stop polling and return no later than the budget's countdown
    /// threshold. The returned timetable should be the best one encountered
    /// under [`TimetableModel::evaluate`]'s ordering.
    fn search(
        &mut self,
        model: &TimetableModel,
        initial: Timetable,
        budget: &TimeBudget,
    ) -> Timetable;
}
