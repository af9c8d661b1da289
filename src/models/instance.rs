//! Problem instance (reference data) model.
//!
//! An [`Instance`] holds everything a timetabling run needs to know about
//! the university: grid dimensions, courses, rooms, the course↔curriculum
//! membership relation, and declared unavailability. It is loaded once by an
//! external loader, then shared read-only by every timetable explored.
//!
//! Courses and rooms are identified by dense indices (`0..course_count`,
//! `0..room_count`); lecturers and curricula are pure index ranges with no
//! per-entity data of their own.
//!
//! # Reference
//! Bonutti et al. (2012), "Benchmarking curriculum-based course timetabling"

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A course to be timetabled.
///
/// Each course is taught by exactly one lecturer and requires a fixed number
/// of lectures, spread over at least `min_working_days` distinct days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Lecturer index (`0..Instance::lecturers`).
    pub lecturer: usize,
    /// Required number of lectures.
    pub lectures: u32,
    /// Minimum number of distinct teaching days.
    pub min_working_days: u32,
    /// Enrolled students.
    pub students: u32,
}

impl Course {
    /// Creates a course taught by the given lecturer.
    ///
    /// Defaults: one lecture, one working day, zero students.
    pub fn new(lecturer: usize) -> Self {
        Self {
            lecturer,
            lectures: 1,
            min_working_days: 1,
            students: 0,
        }
    }

    /// Sets the required lecture count.
    pub fn with_lectures(mut self, lectures: u32) -> Self {
        self.lectures = lectures;
        self
    }

    /// Sets the minimum number of distinct teaching days.
    pub fn with_min_working_days(mut self, days: u32) -> Self {
        self.min_working_days = days;
        self
    }

    /// Sets the enrollment size.
    pub fn with_students(mut self, students: u32) -> Self {
        self.students = students;
        self
    }
}

/// A room with a seating capacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Seating capacity.
    pub capacity: u32,
}

impl Room {
    /// Creates a room with the given capacity.
    pub fn new(capacity: u32) -> Self {
        Self { capacity }
    }
}

/// Course↔curriculum membership relation.
///
/// A course belongs to zero or more curricula. The relation is kept both as
/// a hashed pair set (O(1) `contains`) and as per-course adjacency lists, so
/// constraint checks scale with the curricula of one course rather than with
/// the total curriculum count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurriculumMembership {
    pairs: HashSet<(usize, usize)>,
    by_course: Vec<Vec<usize>>,
}

impl CurriculumMembership {
    /// Creates an empty relation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `course` belongs to `curriculum`.
    ///
    /// Duplicate insertions are ignored.
    pub fn add(&mut self, course: usize, curriculum: usize) {
        if self.pairs.insert((course, curriculum)) {
            if course >= self.by_course.len() {
                self.by_course.resize(course + 1, Vec::new());
            }
            self.by_course[course].push(curriculum);
        }
    }

    /// Whether `course` belongs to `curriculum`.
    pub fn contains(&self, course: usize, curriculum: usize) -> bool {
        self.pairs.contains(&(course, curriculum))
    }

    /// The curricula the given course belongs to.
    pub fn curricula_of(&self, course: usize) -> &[usize] {
        self.by_course.get(course).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterates all recorded (course, curriculum) pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.pairs.iter().copied()
    }

    /// Number of recorded (course, curriculum) pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the relation is empty.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// A declared (day, period, course) unavailability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unavailability {
    /// Day index.
    pub day: usize,
    /// Period index within the day.
    pub period: usize,
    /// Course index.
    pub course: usize,
}

/// Declared unavailability triples with a hashed lookup.
///
/// Triples are kept in declaration order (the availability validator scans
/// them as declared) alongside a set for O(1) membership tests during
/// construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnavailabilityTable {
    declared: Vec<Unavailability>,
    index: HashSet<(usize, usize, usize)>,
}

impl UnavailabilityTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares that `course` cannot be taught at (`day`, `period`).
    ///
    /// Duplicate declarations are ignored.
    pub fn add(&mut self, day: usize, period: usize, course: usize) {
        if self.index.insert((day, period, course)) {
            self.declared.push(Unavailability { day, period, course });
        }
    }

    /// Whether `course` is declared unavailable at (`day`, `period`).
    pub fn contains(&self, day: usize, period: usize, course: usize) -> bool {
        self.index.contains(&(day, period, course))
    }

    /// Iterates the declared triples in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Unavailability> {
        self.declared.iter()
    }

    /// Number of declared triples.
    pub fn len(&self) -> usize {
        self.declared.len()
    }

    /// Whether no triples are declared.
    pub fn is_empty(&self) -> bool {
        self.declared.is_empty()
    }
}

/// A complete timetabling problem instance.
///
/// Read-only for the lifetime of a solve; any number of timetables may
/// reference it concurrently.
///
/// # Example
/// ```
/// use u_timetable::models::{Course, Instance, Room};
///
/// let instance = Instance::new(5, 6)
///     .with_lecturers(2)
///     .with_curricula(1)
///     .with_course(Course::new(0).with_lectures(3).with_students(40))
///     .with_course(Course::new(1).with_lectures(2).with_students(25))
///     .with_room(Room::new(50))
///     .with_membership(0, 0)
///     .with_membership(1, 0)
///     .with_unavailability(0, 0, 1);
///
/// assert_eq!(instance.course_count(), 2);
/// assert_eq!(instance.slot_count(), 30);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    /// Number of teaching days.
    pub days: usize,
    /// Number of periods per day.
    pub periods_per_day: usize,
    /// Number of lecturers.
    pub lecturers: usize,
    /// Number of curricula.
    pub curricula: usize,
    /// Courses, identified by index.
    pub courses: Vec<Course>,
    /// Rooms, identified by index.
    pub rooms: Vec<Room>,
    /// Course↔curriculum membership.
    pub memberships: CurriculumMembership,
    /// Declared unavailability.
    pub unavailability: UnavailabilityTable,
}

impl Instance {
    /// Creates an instance with the given grid dimensions and no entities.
    pub fn new(days: usize, periods_per_day: usize) -> Self {
        Self {
            days,
            periods_per_day,
            lecturers: 0,
            curricula: 0,
            courses: Vec::new(),
            rooms: Vec::new(),
            memberships: CurriculumMembership::new(),
            unavailability: UnavailabilityTable::new(),
        }
    }

    /// Sets the lecturer count.
    pub fn with_lecturers(mut self, lecturers: usize) -> Self {
        self.lecturers = lecturers;
        self
    }

    /// Sets the curriculum count.
    pub fn with_curricula(mut self, curricula: usize) -> Self {
        self.curricula = curricula;
        self
    }

    /// Adds a course.
    pub fn with_course(mut self, course: Course) -> Self {
        self.courses.push(course);
        self
    }

    /// Adds a room.
    pub fn with_room(mut self, room: Room) -> Self {
        self.rooms.push(room);
        self
    }

    /// Records a course↔curriculum membership.
    pub fn with_membership(mut self, course: usize, curriculum: usize) -> Self {
        self.memberships.add(course, curriculum);
        self
    }

    /// Declares a (day, period, course) unavailability.
    pub fn with_unavailability(mut self, day: usize, period: usize, course: usize) -> Self {
        self.unavailability.add(day, period, course);
        self
    }

    /// Number of courses.
    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    /// Number of rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Total number of (day, period, room) slots in the grid.
    pub fn slot_count(&self) -> usize {
        self.days * self.periods_per_day * self.room_count()
    }
}
