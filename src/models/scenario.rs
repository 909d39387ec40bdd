//! Scenario (problem input) model.
//!
//! A scenario fixes the roster dimensions (workers × days × shifts), the
//! exact headcount every shift requires, and the per-worker shift requests.
//! All workload bounds used by the CP formulation are derived from these
//! fields, never stored.
//!
//! # Reference
//! Ernst et al. (2004), "Staff scheduling and rostering: A review"

use serde::{Deserialize, Serialize};

/// A shift-rostering problem instance.
///
/// Immutable input to the CP formulation. Staffing requirements are indexed
/// by shift and identical across days.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// Number of workers available for assignment.
    pub worker_count: usize,
    /// Number of shifts per day.
    pub shift_count: usize,
    /// Number of days in the planning horizon.
    pub day_count: usize,
    /// Required headcount per shift index (length must equal `shift_count`).
    pub staffing_per_shift: Vec<u32>,
    /// Per-(worker, day, shift) shift requests.
    pub preferences: PreferenceMatrix,
}

impl Scenario {
    /// Creates a scenario with zero staffing and no requests.
    pub fn new(worker_count: usize, shift_count: usize, day_count: usize) -> Self {
        Self {
            worker_count,
            shift_count,
            day_count,
            staffing_per_shift: vec![0; shift_count],
            preferences: PreferenceMatrix::new(worker_count, day_count, shift_count),
        }
    }

    /// Sets the per-shift staffing requirements.
    pub fn with_staffing(mut self, staffing_per_shift: Vec<u32>) -> Self {
        self.staffing_per_shift = staffing_per_shift;
        self
    }

    /// Replaces the preference matrix.
    pub fn with_preferences(mut self, preferences: PreferenceMatrix) -> Self {
        self.preferences = preferences;
        self
    }

    /// Marks a single (worker, day, shift) request.
    pub fn with_request(mut self, worker: usize, day: usize, shift: usize) -> Self {
        self.preferences.request(worker, day, shift);
        self
    }

    /// Total headcount required per day (sum over shifts).
    pub fn total_daily_staffing(&self) -> u32 {
        self.staffing_per_shift.iter().sum()
    }

    /// Upper bound on shifts a worker may take in one day.
    ///
    /// `ceil(total_daily_staffing / worker_count)`: derived rather than
    /// hardcoded so it adapts to the demand-to-headcount ratio. Zero when
    /// there are no workers (the scenario is invalid anyway).
    pub fn max_shifts_per_day(&self) -> u32 {
        if self.worker_count == 0 {
            return 0;
        }
        (self.total_daily_staffing() as usize).div_ceil(self.worker_count) as u32
    }

    /// Whether the daily cap is part of the formulation.
    ///
    /// When workers are scarcer than the daily demand, every worker must
    /// cover several shifts per day and the cap is dropped entirely instead
    /// of being tightened against the exact-staffing equalities.
    pub fn daily_cap_applies(&self) -> bool {
        self.worker_count >= self.total_daily_staffing() as usize
    }

    /// Lower bound of the fair-workload band over the whole horizon.
    ///
    /// The largest integer such that every worker can be assigned at least
    /// that many shifts: `floor(total_daily_staffing * day_count /
    /// worker_count)`. The band upper bound is this plus one, so the busiest
    /// and least-busy worker differ by at most one shift.
    pub fn min_shifts_per_worker(&self) -> u32 {
        if self.worker_count == 0 {
            return 0;
        }
        (self.total_daily_staffing() as usize * self.day_count / self.worker_count) as u32
    }

    /// Total shift-slots over the horizon — the maximum possible number of
    /// granted requests, used as the report denominator.
    pub fn slot_count(&self) -> u32 {
        self.total_daily_staffing() * self.day_count as u32
    }

    /// Flat index of a (worker, day, shift) triple.
    ///
    /// Decision variables and preference cells share this layout.
    #[inline]
    pub fn index(&self, worker: usize, day: usize, shift: usize) -> usize {
        (worker * self.day_count + day) * self.shift_count + shift
    }
}

/// Dense boolean matrix of shift requests, indexed worker × day × shift.
///
/// Stored flat with an explicit index function; the cell count is fixed by
/// the dimensions at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceMatrix {
    worker_count: usize,
    day_count: usize,
    shift_count: usize,
    cells: Vec<bool>,
}

impl PreferenceMatrix {
    /// Creates an all-false matrix of the given dimensions.
    pub fn new(worker_count: usize, day_count: usize, shift_count: usize) -> Self {
        Self {
            worker_count,
            day_count,
            shift_count,
            cells: vec![false; worker_count * day_count * shift_count],
        }
    }

    /// Number of workers covered by the matrix.
    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    /// Number of days covered by the matrix.
    pub fn day_count(&self) -> usize {
        self.day_count
    }

    /// Number of shifts per day covered by the matrix.
    pub fn shift_count(&self) -> usize {
        self.shift_count
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    fn index(&self, worker: usize, day: usize, shift: usize) -> usize {
        (worker * self.day_count + day) * self.shift_count + shift
    }

    /// Whether the worker requested the shift on the day.
    #[inline]
    pub fn is_requested(&self, worker: usize, day: usize, shift: usize) -> bool {
        self.cells[self.index(worker, day, shift)]
    }

    /// Marks a request.
    pub fn request(&mut self, worker: usize, day: usize, shift: usize) {
        let idx = self.index(worker, day, shift);
        self.cells[idx] = true;
    }

    /// Sets a cell explicitly.
    pub fn set(&mut self, worker: usize, day: usize, shift: usize, requested: bool) {
        let idx = self.index(worker, day, shift);
        self.cells[idx] = requested;
    }

    /// Total number of requested cells.
    pub fn request_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}
