//! Plain-text roster reports.
//!
//! Renders a solved roster day by day, then a statistics block. The
//! rendering is a pure function of (scenario, roster): it walks days, then
//! workers, then shifts, all ascending, so repeated renders are
//! byte-identical. A report only exists for a complete solution — the
//! pipeline never hands an infeasible outcome to this module.

use std::fmt;

use crate::models::{Roster, Scenario};

/// Borrow view rendering a roster as line-oriented text.
///
/// # Format
///
/// ```text
/// Day 0
/// Worker 0 works shift 2 (requested).
/// Worker 1 works shift 0 (not requested).
///
///
/// Statistics
///   - shift requests met = 1 (out of 2)
///   - wall time         : 0.004217 s
/// ```
///
/// The denominator is the total number of shift-slots over the horizon,
/// i.e. the maximum possible number of granted requests.
pub struct RosterReport<'a> {
    scenario: &'a Scenario,
    roster: &'a Roster,
}

impl<'a> RosterReport<'a> {
    /// Creates a report over a scenario and its solved roster.
    pub fn new(scenario: &'a Scenario, roster: &'a Roster) -> Self {
        Self { scenario, roster }
    }
}

impl fmt::Display for RosterReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sc = self.scenario;

        for day in 0..sc.day_count {
            writeln!(f, "Day {day}")?;
            for worker in 0..sc.worker_count {
                for shift in 0..sc.shift_count {
                    if !self.roster.is_assigned(worker, day, shift) {
                        continue;
                    }
                    let note = if sc.preferences.is_requested(worker, day, shift) {
                        "requested"
                    } else {
                        "not requested"
                    };
                    writeln!(f, "Worker {worker} works shift {shift} ({note}).")?;
                }
            }
            writeln!(f)?;
        }

        writeln!(f)?;
        writeln!(f, "Statistics")?;
        writeln!(
            f,
            "  - shift requests met = {} (out of {})",
            self.roster.satisfied_requests,
            sc.slot_count()
        )?;
        writeln!(
            f,
            "  - wall time         : {:.6} s",
            self.roster.wall_time_secs
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Assignment;

    fn sample() -> (Scenario, Roster) {
        let scenario = Scenario::new(2, 2, 1)
            .with_staffing(vec![1, 1])
            .with_request(0, 0, 0);

        let mut roster = Roster::new(1, 0.25);
        roster.add_assignment(Assignment::new(0, 0, 0, true));
        roster.add_assignment(Assignment::new(1, 0, 1, false));
        (scenario, roster)
    }

    #[test]
    fn test_exact_rendering() {
        let (scenario, roster) = sample();
        let text = RosterReport::new(&scenario, &roster).to_string();

        let expected = "Day 0\n\
                        Worker 0 works shift 0 (requested).\n\
                        Worker 1 works shift 1 (not requested).\n\
                        \n\
                        \n\
                        Statistics\n\
                        \x20 - shift requests met = 1 (out of 2)\n\
                        \x20 - wall time         : 0.250000 s\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let (scenario, roster) = sample();
        let first = RosterReport::new(&scenario, &roster).to_string();
        let second = RosterReport::new(&scenario, &roster).to_string();
        assert_eq!(first, second);
    }

    #[test]
    fn test_order_is_independent_of_roster_internal_order() {
        let (scenario, roster) = sample();
        let mut shuffled = Roster::new(roster.satisfied_requests, roster.wall_time_secs);
        for a in roster.assignments.iter().rev() {
            shuffled.add_assignment(a.clone());
        }

        let canonical = RosterReport::new(&scenario, &roster).to_string();
        let reordered = RosterReport::new(&scenario, &shuffled).to_string();
        assert_eq!(canonical, reordered);
    }

    #[test]
    fn test_empty_day_still_has_header() {
        let scenario = Scenario::new(1, 1, 2).with_staffing(vec![0]);
        let roster = Roster::new(0, 0.0);
        let text = RosterReport::new(&scenario, &roster).to_string();
        assert!(text.starts_with("Day 0\n\nDay 1\n\n"));
        assert!(text.contains("shift requests met = 0 (out of 0)"));
    }
}
