//! Roster (solution) model.
//!
//! A roster is a complete decoded solution: one entry per granted
//! (worker, day, shift) slot, annotated with whether the slot was requested,
//! plus the solve statistics the report needs. Immutable once decoded.

use serde::{Deserialize, Serialize};

/// A solved roster.
///
/// Assignments are ordered day ascending, then worker ascending, then shift
/// ascending — the decode order, which also fixes the report order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roster {
    /// Granted (worker, day, shift) slots.
    pub assignments: Vec<Assignment>,
    /// Number of assignments that match a shift request (objective value).
    pub satisfied_requests: i64,
    /// Solver wall-clock time in seconds.
    pub wall_time_secs: f64,
}

/// A single worker-day-shift assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Assigned worker index.
    pub worker: usize,
    /// Day index within the horizon.
    pub day: usize,
    /// Shift index within the day.
    pub shift: usize,
    /// Whether the worker had requested this slot.
    pub requested: bool,
}

impl Assignment {
    /// Creates a new assignment.
    pub fn new(worker: usize, day: usize, shift: usize, requested: bool) -> Self {
        Self {
            worker,
            day,
            shift,
            requested,
        }
    }
}

impl Roster {
    /// Creates an empty roster carrying the solve statistics.
    pub fn new(satisfied_requests: i64, wall_time_secs: f64) -> Self {
        Self {
            assignments: Vec::new(),
            satisfied_requests,
            wall_time_secs,
        }
    }

    /// Adds an assignment.
    pub fn add_assignment(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    /// Whether the worker works the shift on the day.
    pub fn is_assigned(&self, worker: usize, day: usize, shift: usize) -> bool {
        self.assignments
            .iter()
            .any(|a| a.worker == worker && a.day == day && a.shift == shift)
    }

    /// Workers assigned to a (day, shift) slot, in assignment order.
    pub fn workers_on(&self, day: usize, shift: usize) -> Vec<usize> {
        self.assignments
            .iter()
            .filter(|a| a.day == day && a.shift == shift)
            .map(|a| a.worker)
            .collect()
    }

    /// Number of shifts a worker holds on a given day.
    pub fn shifts_on_day(&self, worker: usize, day: usize) -> usize {
        self.assignments
            .iter()
            .filter(|a| a.worker == worker && a.day == day)
            .count()
    }

    /// Total shifts a worker holds across the horizon.
    pub fn total_shifts(&self, worker: usize) -> usize {
        self.assignments
            .iter()
            .filter(|a| a.worker == worker)
            .count()
    }

    /// Number of assignments.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }
}
