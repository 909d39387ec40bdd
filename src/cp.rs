//! CP formulation of the rostering problem.
//!
//! Bridges the scenario model to the solver capability. Builds a boolean
//! linear model from a [`Scenario`] — one decision variable per
//! (worker, day, shift) triple plus three constraint families — solves it
//! with any [`CpSolver`], and decodes the result into a [`Roster`].
//!
//! # Constraint families
//!
//! 1. **Exact staffing** — per (day, shift): assigned workers equal the
//!    required headcount. An equality: under- and overstaffing are both
//!    infeasible.
//! 2. **Daily cap** — per (worker, day): at most
//!    `ceil(total_daily_staffing / worker_count)` shifts. Omitted when
//!    workers are scarcer than the daily demand.
//! 3. **Fair workload band** — per worker: total shifts over the horizon
//!    within `[min_shifts_per_worker, min_shifts_per_worker + 1]`.
//!
//! Objective: maximize the number of granted shift requests.

use thiserror::Error;

use crate::models::{Assignment, Roster, Scenario};
use crate::solver::{CpModel, CpSolution, CpSolver, SolveStatus, SolverConfig};
use crate::validation::{validate_scenario, ValidationError};

/// Pipeline error.
///
/// Infeasibility and solver failure are legitimate outcomes, reported
/// distinctly and never masked; there is no partial-success mode.
#[derive(Debug, Error)]
pub enum RosterError {
    /// The scenario failed structural validation; no model was built.
    #[error("invalid scenario: {0:?}")]
    InvalidScenario(Vec<ValidationError>),
    /// No assignment satisfies the staffing and workload constraints.
    #[error("no feasible roster exists for this scenario")]
    Infeasible,
    /// The solver stopped without a conclusive result.
    #[error("solver inconclusive: {0:?}")]
    SolverInconclusive(SolveStatus),
}

/// Builds and solves the CP model for a rostering scenario.
///
/// Borrows the scenario; each instance is an independent, stateless
/// pipeline from scenario to roster.
///
/// # Example
///
/// ```
/// use shift_roster::cp::RosterCpBuilder;
/// use shift_roster::models::Scenario;
/// use shift_roster::solver::{MicrolpSolver, SolverConfig};
///
/// let scenario = Scenario::new(3, 3, 1)
///     .with_staffing(vec![1, 1, 1])
///     .with_request(0, 0, 2);
///
/// let roster = RosterCpBuilder::new(&scenario)
///     .solve(&MicrolpSolver::new(), &SolverConfig::default())
///     .unwrap();
/// assert_eq!(roster.satisfied_requests, 1);
/// ```
pub struct RosterCpBuilder<'a> {
    scenario: &'a Scenario,
}

impl<'a> RosterCpBuilder<'a> {
    /// Creates a builder for the scenario.
    pub fn new(scenario: &'a Scenario) -> Self {
        Self { scenario }
    }

    /// Builds the CP model.
    ///
    /// Fails fast on configuration errors; never pre-checks feasibility, so
    /// an over-demanded scenario still yields a well-formed model.
    pub fn build(&self) -> Result<CpModel, RosterError> {
        validate_scenario(self.scenario).map_err(RosterError::InvalidScenario)?;

        let sc = self.scenario;
        let mut model = CpModel::new("rostering");

        // One boolean per (worker, day, shift), in the flat layout shared
        // with the preference matrix.
        let var_total = sc.worker_count * sc.day_count * sc.shift_count;
        let mut vars = Vec::with_capacity(var_total);
        for _ in 0..var_total {
            vars.push(model.new_bool_var());
        }

        // Exact staffing per (day, shift).
        for day in 0..sc.day_count {
            for shift in 0..sc.shift_count {
                let terms = (0..sc.worker_count)
                    .map(|worker| (vars[sc.index(worker, day, shift)], 1))
                    .collect();
                model.add_eq(terms, i64::from(sc.staffing_per_shift[shift]));
            }
        }

        // Per-worker daily cap, dropped when every worker must take several
        // shifts a day anyway.
        if sc.daily_cap_applies() {
            let cap = i64::from(sc.max_shifts_per_day());
            for worker in 0..sc.worker_count {
                for day in 0..sc.day_count {
                    let terms = (0..sc.shift_count)
                        .map(|shift| (vars[sc.index(worker, day, shift)], 1))
                        .collect();
                    model.add_le(terms, cap);
                }
            }
        }

        // Fair workload band across the horizon.
        let min_total = i64::from(sc.min_shifts_per_worker());
        for worker in 0..sc.worker_count {
            let terms: Vec<_> = (0..sc.day_count)
                .flat_map(|day| {
                    (0..sc.shift_count).map(move |shift| (worker, day, shift))
                })
                .map(|(worker, day, shift)| (vars[sc.index(worker, day, shift)], 1))
                .collect();
            model.add_ge(terms.clone(), min_total);
            model.add_le(terms, min_total + 1);
        }

        // Maximize granted requests.
        let objective = (0..sc.worker_count)
            .flat_map(|worker| {
                (0..sc.day_count).flat_map(move |day| {
                    (0..sc.shift_count).map(move |shift| (worker, day, shift))
                })
            })
            .filter(|&(worker, day, shift)| sc.preferences.is_requested(worker, day, shift))
            .map(|(worker, day, shift)| (vars[sc.index(worker, day, shift)], 1))
            .collect();
        model.maximize(objective);

        Ok(model)
    }

    /// Builds the model, solves it, and decodes the roster.
    pub fn solve<S: CpSolver>(
        &self,
        solver: &S,
        config: &SolverConfig,
    ) -> Result<Roster, RosterError> {
        let model = self.build()?;
        let solution = solver.solve(&model, config);

        match solution.status {
            SolveStatus::Optimal | SolveStatus::Feasible => Ok(self.decode_solution(&solution)),
            SolveStatus::Infeasible => Err(RosterError::Infeasible),
            status => Err(RosterError::SolverInconclusive(status)),
        }
    }

    /// Decodes a solution into a roster.
    ///
    /// Walks days, then workers, then shifts, all ascending, so the roster
    /// (and every report derived from it) is deterministic.
    fn decode_solution(&self, solution: &CpSolution) -> Roster {
        let sc = self.scenario;
        let mut roster = Roster::new(solution.objective, solution.wall_time_secs);

        for day in 0..sc.day_count {
            for worker in 0..sc.worker_count {
                for shift in 0..sc.shift_count {
                    if solution.value_at(sc.index(worker, day, shift)) {
                        roster.add_assignment(Assignment::new(
                            worker,
                            day,
                            shift,
                            sc.preferences.is_requested(worker, day, shift),
                        ));
                    }
                }
            }
        }

        roster
    }
}
