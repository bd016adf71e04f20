// src/math_utils.rs
use statrs::function::erf;
use std::f64::consts::SQRT_2;
use std::time::Instant;

/// Standard normal cumulative distribution function Φ(x)
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf::erf(x / SQRT_2))
}

/// Wall-clock stopwatch for timing simulation runs
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    start_time: Instant,
}

impl Timer {
    /// Start timing now
    pub fn start() -> Timer {
        Timer {
            start_time: Instant::now(),
        }
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64()
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_secs() * 1000.0
    }

    /// Items processed per second since the timer started
    pub fn throughput(&self, items: usize) -> f64 {
        items as f64 / self.elapsed_secs().max(f64::MIN_POSITIVE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_norm_cdf_reference_values() {
        assert_abs_diff_eq!(norm_cdf(0.0), 0.5, epsilon = 1e-15);
        assert_abs_diff_eq!(norm_cdf(1.959_963_985), 0.975, epsilon = 1e-9);
        assert_abs_diff_eq!(norm_cdf(-1.0), 0.158_655_253_931_457, epsilon = 1e-12);
    }

    #[test]
    fn test_timer_is_monotonic() {
        let timer = Timer::start();
        let first = timer.elapsed_ms();
        assert!(timer.elapsed_ms() >= first);
        assert!(timer.throughput(10).is_finite());
    }

    #[test]
    fn test_norm_cdf_symmetry() {
        for &x in &[0.1, 0.5, 1.3, 2.7] {
            assert_abs_diff_eq!(norm_cdf(x) + norm_cdf(-x), 1.0, epsilon = 1e-14);
        }
    }
}
