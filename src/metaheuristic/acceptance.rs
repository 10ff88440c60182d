//! Acceptance criteria for simulated annealing.

use rand::rngs::StdRng;
use rand::Rng;

/// Decides whether a feasible neighbor is accepted as the new current
/// route. Improving moves (`delta < 0`) are always accepted; criteria
/// differ only in how they treat non-improving moves.
pub trait AcceptanceCriterion: Send + Sync {
    /// `delta` is candidate cost minus current cost; `temperature` is the
    /// driver's current (decaying) temperature.
    fn accept(&self, delta: f64, temperature: f64, rng: &mut StdRng) -> bool;
}

/// Accepts non-improving moves with probability `t / (t + 1)`, independent
/// of how much worse the candidate is.
///
/// The default rule: it starts near 1 for a hot search and decays toward 0
/// with the temperature, but unlike Metropolis it never consults the cost
/// delta. Treat it as a tuning knob rather than textbook annealing.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecayingAcceptance;

impl AcceptanceCriterion for DecayingAcceptance {
    fn accept(&self, delta: f64, temperature: f64, rng: &mut StdRng) -> bool {
        if delta < 0.0 {
            return true;
        }
        rng.random::<f64>() < temperature / (temperature + 1.0)
    }
}

/// Classical Metropolis criterion: accepts a worse candidate with
/// probability `exp(-delta / t)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetropolisAcceptance;

impl AcceptanceCriterion for MetropolisAcceptance {
    fn accept(&self, delta: f64, temperature: f64, rng: &mut StdRng) -> bool {
        if delta < 0.0 {
            return true;
        }
        if temperature <= 0.0 {
            return false;
        }
        rng.random::<f64>() < (-delta / temperature).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_improving_always_accepted() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(DecayingAcceptance.accept(-1.0, 0.0, &mut rng));
        assert!(MetropolisAcceptance.accept(-1.0, 0.0, &mut rng));
    }

    #[test]
    fn test_decaying_ignores_delta_magnitude() {
        // With the same rng stream, a tiny and a huge worsening get the
        // same verdicts: the rule only looks at the temperature.
        let verdicts = |delta: f64| -> Vec<bool> {
            let mut rng = StdRng::seed_from_u64(42);
            (0..50)
                .map(|_| DecayingAcceptance.accept(delta, 5.0, &mut rng))
                .collect()
        };
        assert_eq!(verdicts(0.001), verdicts(1e9));
    }

    #[test]
    fn test_decaying_cold_rejects() {
        let mut rng = StdRng::seed_from_u64(1);
        // t/(t+1) ≈ 1e-7: 100 draws virtually never accept.
        let accepted = (0..100)
            .filter(|_| DecayingAcceptance.accept(1.0, 1e-7, &mut rng))
            .count();
        assert_eq!(accepted, 0);
    }

    #[test]
    fn test_metropolis_scales_with_delta() {
        let trials = 2000;
        let count = |delta: f64| -> usize {
            let mut rng = StdRng::seed_from_u64(7);
            (0..trials)
                .filter(|_| MetropolisAcceptance.accept(delta, 10.0, &mut rng))
                .count()
        };
        // exp(-0.1) ≈ 0.90 vs exp(-5) ≈ 0.0067
        assert!(count(1.0) > trials * 8 / 10);
        assert!(count(50.0) < trials / 20);
    }

    #[test]
    fn test_metropolis_zero_temperature_rejects() {
        let mut rng = StdRng::seed_from_u64(2);
        assert!(!MetropolisAcceptance.accept(1.0, 0.0, &mut rng));
    }
}
