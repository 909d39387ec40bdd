//! Console demo: solves the literal weekly scenario and prints the roster.

use std::process;

use shift_roster::cp::RosterCpBuilder;
use shift_roster::demand::weekly_fixture;
use shift_roster::report::RosterReport;
use shift_roster::solver::{MicrolpSolver, SolverConfig};

fn main() {
    let scenario = weekly_fixture();
    let builder = RosterCpBuilder::new(&scenario);

    match builder.solve(&MicrolpSolver::new(), &SolverConfig::default()) {
        Ok(roster) => print!("{}", RosterReport::new(&scenario, &roster)),
        Err(err) => {
            eprintln!("rostering failed: {err}");
            process::exit(1);
        }
    }
}
