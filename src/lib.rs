//! Curriculum-based course timetabling core.
//!
//! Assigns courses to (day, period, room) slots so that hard constraints
//! (lecturer exclusivity, curriculum exclusivity, availability) always hold
//! and a weighted soft-constraint cost is minimized. This crate is the shared
//! foundation for pluggable local-search metaheuristics — simulated
//! annealing, tabu search, genetic search live in strategy crates on top and
//! implement [`search::SearchStrategy`].
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Instance`, `Course`, `Room`,
//!   `CurriculumMembership`, `UnavailabilityTable`, `Timetable`, `Slot`
//! - **`validation`**: Input integrity checks (reference ranges, empty dimensions)
//! - **`constraints`**: Hard-constraint predicates over a timetable
//! - **`evaluation`**: Weighted multi-term objective function
//! - **`builder`**: Greedy constructive procedure for initial solutions
//! - **`search`**: Time budget, problem-model service, and the strategy contract
//!
//! # References
//!
//! - Di Gaspero, McCollum, Schaerf (2007), "The Second International
//!   Timetabling Competition (ITC-2007): Curriculum-based Course Timetabling"
//! - Bonutti et al. (2012), "Benchmarking curriculum-based course timetabling:
//!   formulations, data formats, instances, validation, and results"

pub mod builder;
pub mod constraints;
pub mod evaluation;
pub mod models;
pub mod search;
pub mod validation;
