//! Workforce shift rostering via constraint programming.
//!
//! Assigns workers to shifts over a multi-day horizon so that every shift
//! receives exactly its required headcount, no worker is overloaded within a
//! day or across the horizon, and the number of granted shift requests is
//! maximized. The combinatorial search itself is delegated to an external
//! solver behind the [`solver::CpSolver`] capability; this crate owns the
//! problem formulation and the solution-to-report post-processing.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Scenario`, `PreferenceMatrix`, `Roster`,
//!   `Assignment`
//! - **`validation`**: Scenario integrity checks (dimensions, staffing length)
//! - **`demand`**: Preference-matrix generation (seeded random or fixture)
//! - **`cp`**: `RosterCpBuilder` — scenario → CP model → roster
//! - **`solver`**: CP model IR, solver capability trait, microlp backend
//! - **`report`**: Deterministic plain-text roster reports
//!
//! # Pipeline
//!
//! Each run is a pure pass: demand → scenario → model → solution → report.
//! No component keeps state across invocations, so concurrent callers only
//! need their own `Scenario`.
//!
//! # References
//!
//! - Ernst et al. (2004), "Staff scheduling and rostering: A review"
//! - Burke et al. (2004), "The State of the Art of Nurse Rostering"

pub mod cp;
pub mod demand;
pub mod models;
pub mod report;
pub mod solver;
pub mod validation;
