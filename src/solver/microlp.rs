//! microlp solver backend.
//!
//! Adapts a [`CpModel`] to the `microlp` MILP crate: every decision variable
//! becomes a binary variable carrying its objective weight, every constraint
//! maps to a `ComparisonOp` row. The branch-and-bound search is entirely
//! microlp's; this module only translates in and out.

use std::time::Instant;

use ::microlp::{ComparisonOp, OptimizationDirection, Problem};

use super::{CpModel, CpSolution, CpSolver, Relation, SolveStatus, SolverConfig};

/// External MILP backend built on `microlp`.
///
/// microlp exposes no time-limit knob, so `SolverConfig::time_limit_secs`
/// is ignored by this backend.
#[derive(Debug, Clone, Default)]
pub struct MicrolpSolver;

impl MicrolpSolver {
    /// Creates a new backend instance.
    pub fn new() -> Self {
        Self
    }
}

impl CpSolver for MicrolpSolver {
    fn solve(&self, model: &CpModel, _config: &SolverConfig) -> CpSolution {
        let start = Instant::now();

        let mut problem = Problem::new(OptimizationDirection::Maximize);

        // Objective coefficients attach to variables at creation time.
        let mut weights = vec![0.0; model.var_count()];
        for (var, coeff) in model.objective_terms() {
            weights[var.index()] = *coeff as f64;
        }
        let vars: Vec<_> = weights
            .iter()
            .map(|&weight| problem.add_binary_var(weight))
            .collect();

        for constraint in model.constraints() {
            let terms: Vec<_> = constraint
                .terms
                .iter()
                .map(|(var, coeff)| (vars[var.index()], *coeff as f64))
                .collect();
            let op = match constraint.relation {
                Relation::Eq => ComparisonOp::Eq,
                Relation::Le => ComparisonOp::Le,
                Relation::Ge => ComparisonOp::Ge,
            };
            problem.add_constraint(terms, op, constraint.rhs as f64);
        }

        match problem.solve() {
            Ok(solution) => {
                // Values iterate in variable creation order, matching VarId.
                let values: Vec<bool> = solution.iter().map(|(_, value)| *value > 0.5).collect();
                let objective = solution.objective().round() as i64;
                CpSolution::found(
                    SolveStatus::Optimal,
                    values,
                    objective,
                    start.elapsed().as_secs_f64(),
                )
            }
            Err(::microlp::Error::Infeasible) => {
                CpSolution::not_found(SolveStatus::Infeasible, start.elapsed().as_secs_f64())
            }
            Err(_) => CpSolution::not_found(SolveStatus::Unknown, start.elapsed().as_secs_f64()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maximize_under_cap() {
        // max a + b subject to a + b <= 1
        let mut model = CpModel::new("cap");
        let a = model.new_bool_var();
        let b = model.new_bool_var();
        model.add_le(vec![(a, 1), (b, 1)], 1);
        model.maximize(vec![(a, 1), (b, 1)]);

        let solution = MicrolpSolver::new().solve(&model, &SolverConfig::default());
        assert_eq!(solution.status, SolveStatus::Optimal);
        assert_eq!(solution.objective, 1);
        // Exactly one of the two is picked.
        assert!(solution.value(a) ^ solution.value(b));
        assert!(solution.wall_time_secs >= 0.0);
    }

    #[test]
    fn test_equality_pins_variable() {
        let mut model = CpModel::new("pin");
        let a = model.new_bool_var();
        let b = model.new_bool_var();
        model.add_eq(vec![(a, 1)], 1);
        model.add_eq(vec![(b, 1)], 0);
        model.maximize(vec![(b, 1)]);

        let solution = MicrolpSolver::new().solve(&model, &SolverConfig::default());
        assert!(solution.is_solution_found());
        assert!(solution.value(a));
        assert!(!solution.value(b));
        assert_eq!(solution.objective, 0);
    }

    #[test]
    fn test_infeasible_model() {
        // Two binary variables cannot sum to 3.
        let mut model = CpModel::new("infeasible");
        let a = model.new_bool_var();
        let b = model.new_bool_var();
        model.add_eq(vec![(a, 1), (b, 1)], 3);

        let solution = MicrolpSolver::new().solve(&model, &SolverConfig::default());
        assert_eq!(solution.status, SolveStatus::Infeasible);
        assert!(!solution.is_solution_found());
    }
}
