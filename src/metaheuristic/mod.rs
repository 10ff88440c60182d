//! Metaheuristic drivers orchestrating construction, improvement, and
//! diversification under a wall-clock budget.
//!
//! - [`LocalSearchDriver`] — iterated local search alternating the two
//!   windowed operators, with stall-triggered random perturbation
//! - [`SimulatedAnnealing`] — random-swap annealing with geometric cooling
//!   and a pluggable [`AcceptanceCriterion`]
//!
//! Both drivers own their session state exclusively: the current route, the
//! best-known route, and the random generator seeded from their config.
//! Nothing is shared between sessions, so independent sessions may run on
//! separate threads without locking. Stopping is driven purely by an
//! explicit deadline, which makes both drivers anytime algorithms.

mod acceptance;
mod annealing;
mod driver;

pub use acceptance::{AcceptanceCriterion, DecayingAcceptance, MetropolisAcceptance};
pub use annealing::{AnnealingConfig, SimulatedAnnealing};
pub use driver::{DriverConfig, LocalSearchDriver};
