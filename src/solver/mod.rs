//! CP model representation and solver capability.
//!
//! The model is deliberately a small fragment: boolean decision variables,
//! linear constraints over integer-weighted sums, and a linear maximize
//! objective — exactly what the rostering formulation needs. The search is
//! performed by whatever implements [`CpSolver`]; any conforming solver is
//! substitutable, and [`MicrolpSolver`] is the bundled backend.

mod microlp;

pub use self::microlp::MicrolpSolver;

/// Identifier of a boolean decision variable.
///
/// Variables are numbered in creation order; [`CpSolution`] values follow
/// the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VarId(usize);

impl VarId {
    /// Position of this variable in creation order.
    #[inline]
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Comparison direction of a linear constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    /// Weighted sum equals the right-hand side.
    Eq,
    /// Weighted sum is at most the right-hand side.
    Le,
    /// Weighted sum is at least the right-hand side.
    Ge,
}

/// A linear constraint `Σ coeff · var ⟨relation⟩ rhs`.
#[derive(Debug, Clone)]
pub struct LinearConstraint {
    /// Integer-weighted variable terms.
    pub terms: Vec<(VarId, i64)>,
    /// Comparison direction.
    pub relation: Relation,
    /// Right-hand side.
    pub rhs: i64,
}

/// A boolean linear optimization model.
///
/// Built once per scenario and consumed once by a solver; holds no solver
/// state of its own.
#[derive(Debug, Clone)]
pub struct CpModel {
    name: String,
    var_count: usize,
    constraints: Vec<LinearConstraint>,
    objective: Vec<(VarId, i64)>,
}

impl CpModel {
    /// Creates an empty model.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            var_count: 0,
            constraints: Vec::new(),
            objective: Vec::new(),
        }
    }

    /// Model name (diagnostic only).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds a fresh boolean decision variable.
    pub fn new_bool_var(&mut self) -> VarId {
        let id = VarId(self.var_count);
        self.var_count += 1;
        id
    }

    /// Adds an equality constraint.
    pub fn add_eq(&mut self, terms: Vec<(VarId, i64)>, rhs: i64) {
        self.constraints.push(LinearConstraint {
            terms,
            relation: Relation::Eq,
            rhs,
        });
    }

    /// Adds an at-most constraint.
    pub fn add_le(&mut self, terms: Vec<(VarId, i64)>, rhs: i64) {
        self.constraints.push(LinearConstraint {
            terms,
            relation: Relation::Le,
            rhs,
        });
    }

    /// Adds an at-least constraint.
    pub fn add_ge(&mut self, terms: Vec<(VarId, i64)>, rhs: i64) {
        self.constraints.push(LinearConstraint {
            terms,
            relation: Relation::Ge,
            rhs,
        });
    }

    /// Sets the linear maximize objective.
    pub fn maximize(&mut self, terms: Vec<(VarId, i64)>) {
        self.objective = terms;
    }

    /// Number of decision variables.
    pub fn var_count(&self) -> usize {
        self.var_count
    }

    /// Number of constraints.
    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    /// All constraints, in insertion order.
    pub fn constraints(&self) -> &[LinearConstraint] {
        &self.constraints
    }

    /// Objective terms (maximize direction).
    pub fn objective_terms(&self) -> &[(VarId, i64)] {
        &self.objective
    }
}

/// Outcome classification of a solve call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    /// A provably optimal solution was found.
    Optimal,
    /// A solution was found but optimality was not proven.
    Feasible,
    /// No assignment satisfies the constraints.
    Infeasible,
    /// The solver stopped without a conclusive answer (limits, failure).
    Unknown,
}

/// Result of a solve call.
///
/// Variable values are only meaningful when a solution was found.
#[derive(Debug, Clone)]
pub struct CpSolution {
    /// Outcome classification.
    pub status: SolveStatus,
    /// Achieved objective value (0 when no solution exists).
    pub objective: i64,
    /// Wall-clock time spent in the solver, in seconds.
    pub wall_time_secs: f64,
    values: Vec<bool>,
}

impl CpSolution {
    /// Creates a solution carrying variable values.
    pub fn found(
        status: SolveStatus,
        values: Vec<bool>,
        objective: i64,
        wall_time_secs: f64,
    ) -> Self {
        Self {
            status,
            objective,
            wall_time_secs,
            values,
        }
    }

    /// Creates an empty result for a non-success status.
    pub fn not_found(status: SolveStatus, wall_time_secs: f64) -> Self {
        Self {
            status,
            objective: 0,
            wall_time_secs,
            values: Vec::new(),
        }
    }

    /// Whether any solution (optimal or not) was found.
    pub fn is_solution_found(&self) -> bool {
        matches!(self.status, SolveStatus::Optimal | SolveStatus::Feasible)
    }

    /// Value of a decision variable.
    #[inline]
    pub fn value(&self, var: VarId) -> bool {
        self.values[var.index()]
    }

    /// Value by variable creation index.
    #[inline]
    pub fn value_at(&self, index: usize) -> bool {
        self.values[index]
    }
}

/// Solver options passed through to the backend.
///
/// The crate imposes no retry or timeout loop of its own; a time limit is
/// forwarded to backends that support one.
#[derive(Debug, Clone, Default)]
pub struct SolverConfig {
    /// Wall-clock limit in seconds, if the backend supports one.
    pub time_limit_secs: Option<f64>,
}

/// Capability interface for external constraint solvers.
///
/// Implementations receive a fully built model and must return a status, the
/// per-variable values (when a solution exists), the achieved objective, and
/// elapsed wall time. They must not mutate shared state — the surrounding
/// pipeline relies on solve calls being independent.
pub trait CpSolver {
    /// Solves the model.
    fn solve(&self, model: &CpModel, config: &SolverConfig) -> CpSolution;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_counts() {
        let mut model = CpModel::new("test");
        let a = model.new_bool_var();
        let b = model.new_bool_var();
        model.add_eq(vec![(a, 1), (b, 1)], 1);
        model.add_le(vec![(a, 1)], 1);
        model.maximize(vec![(b, 1)]);

        assert_eq!(model.name(), "test");
        assert_eq!(model.var_count(), 2);
        assert_eq!(model.constraint_count(), 2);
        assert_eq!(model.objective_terms().len(), 1);
        assert_eq!(model.constraints()[0].relation, Relation::Eq);
        assert_eq!(model.constraints()[1].relation, Relation::Le);
    }

    #[test]
    fn test_var_ids_follow_creation_order() {
        let mut model = CpModel::new("test");
        for expected in 0..5 {
            assert_eq!(model.new_bool_var().index(), expected);
        }
    }

    #[test]
    fn test_solution_accessors() {
        let sol = CpSolution::found(SolveStatus::Optimal, vec![true, false], 1, 0.01);
        assert!(sol.is_solution_found());
        assert!(sol.value_at(0));
        assert!(!sol.value_at(1));

        let none = CpSolution::not_found(SolveStatus::Infeasible, 0.0);
        assert!(!none.is_solution_found());
        assert_eq!(none.objective, 0);
    }
}
