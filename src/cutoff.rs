use num_traits::Float;

use crate::{presets::PresetTable, Result};

/// Values of a clamped response outside `(0, CLAMP_CEILING)` collapse to 0.
pub const CLAMP_CEILING: f64 = 100.0;

/// Decreasing Hill function `ymin + (ymax - ymin) / (1 + (max(x, 0) / k)^n)`.
///
/// `x` is floored at zero so a negative activation never meets a fractional
/// exponent. A NaN activation gives NaN.
pub fn hill<T: Float>(x: T, ymax: T, ymin: T, k: T, n: T) -> T {
    if x.is_nan() {
        return x;
    }
    let ratio = x.max(T::zero()) / k;
    ymin + (ymax - ymin) / (T::one() + ratio.powf(n))
}

/// Parametrized S-shaped response.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cutoff {
    pub ymax: f64,
    pub ymin: f64,
    pub k: f64,
    pub n: f64,
}

impl Default for Cutoff {
    fn default() -> Self {
        Self {
            ymax: 1.0,
            ymin: 0.0,
            k: 0.3,
            n: 4.7,
        }
    }
}

impl Cutoff {
    pub fn new(ymax: f64, ymin: f64, k: f64, n: f64) -> Self {
        Self { ymax, ymin, k, n }
    }

    pub fn from_name(presets: &PresetTable, key: &str) -> Result<Self> {
        presets.get(key)
    }

    pub fn steady_state(&self, x: f64) -> f64 {
        hill(x, self.ymax, self.ymin, self.k, self.n)
    }

    /// Like [Cutoff::steady_state], but NaN and out-of-range responses read as 0.
    pub fn steady_state_clamp(&self, x: f64) -> f64 {
        let y = self.steady_state(x);
        if y > 0.0 && y < CLAMP_CEILING {
            y
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod test {
    use super::{hill, Cutoff};

    #[test]
    fn default_endpoints() {
        let cutoff = Cutoff::default();
        assert_eq!(cutoff.steady_state_clamp(0.0), 1.0);
        assert_eq!(cutoff.steady_state_clamp(-3.0), 1.0);
        assert!(cutoff.steady_state_clamp(1e6) < 1e-12);
    }

    #[test]
    fn default_stays_in_range() {
        let cutoff = Cutoff::default();
        for i in -100..=1000 {
            let x = i as f64 * 0.01;
            let y = cutoff.steady_state_clamp(x);
            assert!((0.0..=cutoff.ymax).contains(&y), "response({x}) = {y}");
        }
    }

    #[test]
    fn decreasing() {
        let cutoff = Cutoff::default();
        let mut last = cutoff.steady_state(0.0);
        for i in 1..200 {
            let y = cutoff.steady_state(i as f64 * 0.01);
            assert!(y <= last);
            last = y;
        }
    }

    #[test]
    fn clamp_collapses_out_of_range() {
        // ymin far above the ceiling: every response is out of range
        let cutoff = Cutoff::new(500.0, 200.0, 0.3, 4.7);
        assert!(cutoff.steady_state(0.0) > 100.0);
        assert_eq!(cutoff.steady_state_clamp(0.0), 0.0);

        // negative ymin makes large activations go negative
        let cutoff = Cutoff::new(1.0, -1.0, 0.3, 4.7);
        assert!(cutoff.steady_state(5.0) < 0.0);
        assert_eq!(cutoff.steady_state_clamp(5.0), 0.0);
    }

    #[test]
    fn nan_activation_collapses() {
        let cutoff = Cutoff::default();
        assert!(cutoff.steady_state(f64::NAN).is_nan());
        assert_eq!(cutoff.steady_state_clamp(f64::NAN), 0.0);
    }

    #[test]
    fn hill_is_generic() {
        let y: f32 = hill(0.3, 1.0, 0.0, 0.3, 2.0);
        assert!((y - 0.5).abs() < 1e-6);
    }
}
