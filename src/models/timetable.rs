//! Timetable (solution) model.
//!
//! A timetable is the mutable assignment grid: each (day, period, room) cell
//! holds a course index or is empty. No invariant is enforced at write time —
//! hard-constraint satisfaction is checked on demand by the predicates in
//! [`crate::constraints`], never maintained incrementally.
//!
//! The grid is a flat buffer indexed by a computed offset, with an explicit
//! `Option` for empty cells. Cell coordinates must lie within the dimensions
//! fixed at construction; out-of-range slots panic.
//!
//! Neighborhood move helpers ([`random_slot`], [`random_swap`]) live beside
//! the type, as building blocks for whatever local search runs on top.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::Instance;

/// A (day, period, room) coordinate in the assignment grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot {
    /// Day index.
    pub day: usize,
    /// Period index within the day.
    pub period: usize,
    /// Room index.
    pub room: usize,
}

impl Slot {
    /// Creates a slot coordinate.
    pub fn new(day: usize, period: usize, room: usize) -> Self {
        Self { day, period, room }
    }
}

/// The assignment grid: (day, period, room) → course index or empty.
///
/// Dimensions are fixed at construction and never change. The grid is freely
/// mutated in place by the builder and by [`Timetable::swap`]; callers that
/// need to preserve a baseline must copy first ([`Timetable::copy_from`] or
/// `clone`), there is no snapshot support.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timetable {
    days: usize,
    periods_per_day: usize,
    rooms: usize,
    cells: Vec<Option<usize>>,
}

impl Timetable {
    /// Creates an empty grid with the given dimensions.
    pub fn new(days: usize, periods_per_day: usize, rooms: usize) -> Self {
        Self {
            days,
            periods_per_day,
            rooms,
            cells: vec![None; days * periods_per_day * rooms],
        }
    }

    /// Creates an empty grid dimensioned for the given instance.
    pub fn for_instance(instance: &Instance) -> Self {
        Self::new(instance.days, instance.periods_per_day, instance.room_count())
    }

    /// Number of teaching days.
    pub fn days(&self) -> usize {
        self.days
    }

    /// Number of periods per day.
    pub fn periods_per_day(&self) -> usize {
        self.periods_per_day
    }

    /// Number of rooms.
    pub fn rooms(&self) -> usize {
        self.rooms
    }

    /// Total number of cells.
    pub fn slot_count(&self) -> usize {
        self.cells.len()
    }

    fn index(&self, slot: Slot) -> usize {
        debug_assert!(slot.day < self.days && slot.period < self.periods_per_day);
        (slot.day * self.periods_per_day + slot.period) * self.rooms + slot.room
    }

    fn slot_at(&self, index: usize) -> Slot {
        let cells_per_day = self.periods_per_day * self.rooms;
        Slot {
            day: index / cells_per_day,
            period: (index % cells_per_day) / self.rooms,
            room: index % self.rooms,
        }
    }

    /// The course assigned to the given slot, if any.
    pub fn get(&self, slot: Slot) -> Option<usize> {
        self.cells[self.index(slot)]
    }

    /// Assigns a course to the given slot, replacing any previous occupant.
    pub fn assign(&mut self, slot: Slot, course: usize) {
        let index = self.index(slot);
        self.cells[index] = Some(course);
    }

    /// Empties the given slot.
    pub fn clear(&mut self, slot: Slot) {
        let index = self.index(slot);
        self.cells[index] = None;
    }

    /// Exchanges the contents of two cells in place.
    ///
    /// O(1); performs no constraint checking — the caller decides whether to
    /// keep or revert the move based on evaluation. Applying the same swap
    /// twice restores the original grid.
    pub fn swap(&mut self, a: Slot, b: Slot) {
        let (ia, ib) = (self.index(a), self.index(b));
        self.cells.swap(ia, ib);
    }

    /// Copies every cell from `source` into this grid.
    ///
    /// The two grids must have identical dimensions and remain fully
    /// independent after the call.
    pub fn copy_from(&mut self, source: &Timetable) {
        assert_eq!(
            (self.days, self.periods_per_day, self.rooms),
            (source.days, source.periods_per_day, source.rooms),
            "timetable dimensions differ"
        );
        self.cells.copy_from_slice(&source.cells);
    }

    /// Iterates the occupied cells as (slot, course) pairs.
    pub fn occupied(&self) -> impl Iterator<Item = (Slot, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(index, cell)| cell.map(|course| (self.slot_at(index), course)))
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}

// ======================== Neighborhood move helpers ========================

/// Draws a uniformly random slot coordinate.
pub fn random_slot<R: Rng>(timetable: &Timetable, rng: &mut R) -> Slot {
    Slot {
        day: rng.random_range(0..timetable.days()),
        period: rng.random_range(0..timetable.periods_per_day()),
        room: rng.random_range(0..timetable.rooms()),
    }
}

/// Swaps two uniformly random cells and returns their coordinates.
///
/// The returned pair lets the caller revert the move with a second
/// [`Timetable::swap`]. Returns `None` if the grid has no cells. The two
/// slots may coincide, which leaves the grid unchanged.
pub fn random_swap<R: Rng>(timetable: &mut Timetable, rng: &mut R) -> Option<(Slot, Slot)> {
    if timetable.slot_count() == 0 {
        return None;
    }
    let a = random_slot(timetable, rng);
    let b = random_slot(timetable, rng);
    timetable.swap(a, b);
    Some((a, b))
}
