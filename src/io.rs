//! Text boundary format for instances and outcomes.
//!
//! An instance is whitespace-separated numbers over `2n + 2` lines:
//!
//! ```text
//! n
//! earliest latest service_duration     (n lines, customers 1..=n)
//! t(0,0) t(0,1) ... t(0,n)             (n+1 matrix rows)
//! ...
//! t(n,0) t(n,1) ... t(n,n)
//! ```
//!
//! An outcome is the total travel cost, the customer count, and the route
//! as space-separated customer indices, or an explicit failure line so a
//! missing answer is never mistaken for a numeric cost.

use std::fmt::Write as _;

use tracing::debug;

use crate::evaluation::RouteEvaluator;
use crate::models::{Instance, InstanceError, Solution, SolveOutcome, TimeWindow};
use crate::travel::TravelMatrix;

/// Parses an instance from the text format.
///
/// Blank lines are skipped; fields within a line are whitespace-separated.
/// All structural and numeric problems are reported as [`InstanceError`]
/// with a 1-based line number where that helps.
///
/// # Examples
///
/// ```
/// use tsptw::io::parse_instance;
///
/// let text = "\
/// 2
/// 0 10 2
/// 5 15 3
/// 0 4 6
/// 4 0 3
/// 6 3 0
/// ";
/// let instance = parse_instance(text).unwrap();
/// assert_eq!(instance.num_customers(), 2);
/// assert_eq!(instance.travel(2, 1), 3.0);
/// assert_eq!(instance.window(1).latest(), 10.0);
/// ```
pub fn parse_instance(text: &str) -> Result<Instance, InstanceError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());

    let (line, header) = lines.next().ok_or(InstanceError::Parse {
        line: 1,
        reason: "missing customer count".to_string(),
    })?;
    let n: usize = header.parse().map_err(|_| InstanceError::Parse {
        line,
        reason: format!("invalid customer count '{header}'"),
    })?;

    let mut windows = Vec::with_capacity(n);
    for customer in 1..=n {
        let (line, text) = lines.next().ok_or(InstanceError::Parse {
            line: customer + 1,
            reason: format!("missing window for customer {customer}"),
        })?;
        let fields = parse_fields(line, text)?;
        if fields.len() != 3 {
            return Err(InstanceError::Parse {
                line,
                reason: format!("expected 3 window fields, found {}", fields.len()),
            });
        }
        let (earliest, latest, service) = (fields[0], fields[1], fields[2]);
        let window = TimeWindow::new(earliest, latest, service).ok_or_else(|| {
            if earliest > latest {
                InstanceError::WindowReversed {
                    customer,
                    earliest,
                    latest,
                }
            } else {
                InstanceError::InvalidTime { customer }
            }
        })?;
        windows.push(window);
    }

    let size = n + 1;
    let mut matrix = TravelMatrix::new(size);
    for from in 0..size {
        let (line, text) = lines.next().ok_or(InstanceError::Parse {
            line: n + 2 + from,
            reason: format!("missing travel matrix row {from}"),
        })?;
        let fields = parse_fields(line, text)?;
        if fields.len() != size {
            return Err(InstanceError::MatrixDimension {
                expected: size,
                found: fields.len(),
            });
        }
        for (to, &value) in fields.iter().enumerate() {
            matrix.set(from, to, value);
        }
    }

    debug!(customers = n, "instance parsed");
    Instance::new(windows, matrix)
}

fn parse_fields(line: usize, text: &str) -> Result<Vec<f64>, InstanceError> {
    text.split_whitespace()
        .map(|field| {
            field.parse::<f64>().map_err(|_| InstanceError::Parse {
                line,
                reason: format!("invalid number '{field}'"),
            })
        })
        .collect()
}

/// Formats an instance back into the text format.
///
/// Output of [`parse_instance`] round-trips through this exactly.
pub fn format_instance(instance: &Instance) -> String {
    let n = instance.num_customers();
    let mut out = String::new();
    let _ = writeln!(out, "{n}");
    for customer in 1..=n {
        let w = instance.window(customer);
        let _ = writeln!(
            out,
            "{} {} {}",
            w.earliest(),
            w.latest(),
            w.service_duration()
        );
    }
    for from in 0..=n {
        let row: Vec<String> = (0..=n)
            .map(|to| instance.travel(from, to).to_string())
            .collect();
        let _ = writeln!(out, "{}", row.join(" "));
    }
    out
}

/// Formats a solving outcome.
///
/// Success is three lines (cost, customer count, route); every failure
/// shape gets its own explicit line, never a bare number.
///
/// # Examples
///
/// ```
/// use tsptw::io::format_outcome;
/// use tsptw::models::{Route, Solution, SolveOutcome};
///
/// let sol = Solution::new(Route::from_customers(vec![2, 1, 3]), 20.0);
/// assert_eq!(format_outcome(&SolveOutcome::Feasible(sol)), "20\n3\n2 1 3\n");
/// assert_eq!(format_outcome(&SolveOutcome::Infeasible), "no feasible solution\n");
/// ```
pub fn format_outcome(outcome: &SolveOutcome) -> String {
    match outcome {
        SolveOutcome::Optimal(sol) | SolveOutcome::Feasible(sol) => format_solution_block(sol),
        SolveOutcome::TimeLimitExceeded(incumbent) => {
            let mut out = String::from("time limit exceeded\n");
            if let Some(sol) = incumbent {
                out.push_str(&format_solution_block(sol));
            }
            out
        }
        SolveOutcome::Infeasible => String::from("no feasible solution\n"),
        SolveOutcome::NotFound(_) => String::from("no feasible route found\n"),
    }
}

fn format_solution_block(sol: &Solution) -> String {
    let customers: Vec<String> = sol
        .route()
        .customers()
        .iter()
        .map(usize::to_string)
        .collect();
    format!(
        "{}\n{}\n{}\n",
        sol.cost(),
        sol.route().len(),
        customers.join(" ")
    )
}

/// Formats the full visit schedule of a solution, one line per stop.
///
/// Diagnostic output; the schedule is replayed from the route on demand.
pub fn format_schedule(instance: &Instance, solution: &Solution) -> String {
    let evaluator = RouteEvaluator::new(instance);
    let (visits, feasible) = evaluator.schedule(solution.route());
    let mut out = String::new();
    for v in &visits {
        let _ = writeln!(
            out,
            "customer {} arrive {} start {} depart {}",
            v.customer, v.arrival, v.service_start, v.departure
        );
    }
    if !feasible {
        out.push_str("schedule infeasible\n");
    }
    out
}
