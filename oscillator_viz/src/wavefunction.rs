//! Harmonic oscillator eigenfunctions
//!
//! Closed-form evaluation of
//!
//! ```text
//! ψ_n(x) = (2^n n!)^(-1/2) π^(-1/4) H_n(x) exp(-x²/2)
//! ```
//!
//! in natural units (m = ω = ħ = 1), together with the potential well and the
//! sampling grid used by the plots.

use crate::hermite::{ln_factorial, HermiteSeries};
use std::f64::consts::{LN_2, PI};

/// Evenly spaced samples over `[start, end]`, both endpoints included
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            (0..count)
                .map(|i| if i == count - 1 { end } else { start + i as f64 * step })
                .collect()
        }
    }
}

/// Normalization constant `sqrt(1 / (2^n n!)) π^(-1/4)`
///
/// Computed in log space so that `2^n n!` is never formed.
pub fn normalization(n: u32) -> f64 {
    let ln_norm = -0.5 * (n as f64 * LN_2 + ln_factorial(n)) - 0.25 * PI.ln();
    ln_norm.exp()
}

/// Oscillator energy `n + 1/2` in units of ħω
pub fn energy(n: u32) -> f64 {
    n as f64 + 0.5
}

/// Potential well `V(x) = x²/2`
pub fn potential(x: f64) -> f64 {
    0.5 * x * x
}

/// Potential sampled over a grid
pub fn potential_curve(x: &[f64]) -> Vec<f64> {
    x.iter().map(|&xi| potential(xi)).collect()
}

/// A single oscillator eigenstate
#[derive(Debug, Clone)]
pub struct Eigenstate {
    pub n: u32,
    norm: f64,
    hermite: HermiteSeries,
}

impl Eigenstate {
    pub fn new(n: u32) -> Self {
        Self {
            n,
            norm: normalization(n),
            hermite: HermiteSeries::basis(n),
        }
    }

    /// `ψ_n(x)` at a single point
    pub fn amplitude(&self, x: f64) -> f64 {
        self.norm * self.hermite.eval(x) * (-x * x / 2.0).exp()
    }

    /// `ψ_n` at every point of `x`
    pub fn sample(&self, x: &[f64]) -> Vec<f64> {
        x.iter().map(|&xi| self.amplitude(xi)).collect()
    }
}

/// Evaluate `ψ_n` over `x`; the result has the same length as the input
pub fn evaluate(n: u32, x: &[f64]) -> Vec<f64> {
    Eigenstate::new(n).sample(x)
}

/// Whether `ψ_n` stays finite at every point of every grid
///
/// `H_n` overflows at the edges of the domain long before the normalization
/// underflows, which turns the product into NaN.
pub fn is_finite_on(n: u32, grids: &[&[f64]]) -> bool {
    let state = Eigenstate::new(n);
    grids
        .iter()
        .all(|grid| grid.iter().all(|&x| state.amplitude(x).is_finite()))
}

/// Largest state in `0..=upper` that [`is_finite_on`] accepts
pub fn largest_finite_state(upper: u32, grids: &[&[f64]]) -> u32 {
    let (mut lo, mut hi) = (0, upper);
    while lo < hi {
        let mid = lo + (hi - lo + 1) / 2;
        if is_finite_on(mid, grids) {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }
    lo
}

/// Shift samples up by the level index so states stack on a shared axis
pub fn offset_by_level(samples: &mut [f64], n: u32) {
    let level = n as f64;
    for s in samples {
        *s += level;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hermite::factorial;

    fn trapezoid(x: &[f64], y: &[f64]) -> f64 {
        x.windows(2)
            .zip(y.windows(2))
            .map(|(xs, ys)| 0.5 * (xs[1] - xs[0]) * (ys[0] + ys[1]))
            .sum()
    }

    #[test]
    fn ground_state_is_gaussian() {
        let pi_quarter = PI.powf(-0.25);
        for &x in &[-3.0, -0.5, 0.0, 0.25, 2.0] {
            let x: f64 = x;
            let psi = evaluate(0, &[x])[0];
            let want = pi_quarter * (-x * x / 2.0).exp();
            assert!((psi - want).abs() < 1e-14, "x={} psi={} want={}", x, psi, want);
        }
    }

    #[test]
    fn ground_state_peak_value() {
        let psi = evaluate(0, &[0.0])[0];
        assert!((psi - 0.7511).abs() < 1e-4, "psi(0) = {}", psi);
    }

    #[test]
    fn first_excited_state_is_antisymmetric() {
        let psi = evaluate(1, &[-1.0, 0.0, 1.0]);
        assert!(psi[0] < 0.0);
        assert_eq!(psi[1], 0.0);
        assert!(psi[2] > 0.0);
        assert!((psi[0] + psi[2]).abs() < 1e-15);
    }

    #[test]
    fn parity_follows_state_index() {
        let x = linspace(0.0, 4.0, 50);
        let neg: Vec<f64> = x.iter().map(|v| -v).collect();
        for n in 0..=10 {
            let pos_vals = evaluate(n, &x);
            let neg_vals = evaluate(n, &neg);
            let sign = if n % 2 == 0 { 1.0 } else { -1.0 };
            for (a, b) in pos_vals.iter().zip(&neg_vals) {
                assert!((b - sign * a).abs() < 1e-12, "n={} psi(x)={} psi(-x)={}", n, a, b);
            }
        }
    }

    #[test]
    fn low_states_are_normalized_on_plot_domain() {
        let x = linspace(-4.0, 4.0, 500);
        for n in 0..=4 {
            let density: Vec<f64> = evaluate(n, &x).iter().map(|p| p * p).collect();
            let area = trapezoid(&x, &density);
            assert!((area - 1.0).abs() < 1e-3, "n={} area={}", n, area);
        }
    }

    #[test]
    fn distinct_states_are_orthogonal() {
        let x = linspace(-8.0, 8.0, 2001);
        let a = evaluate(1, &x);
        let b = evaluate(3, &x);
        let product: Vec<f64> = a.iter().zip(&b).map(|(p, q)| p * q).collect();
        assert!(trapezoid(&x, &product).abs() < 1e-6);
    }

    #[test]
    fn log_space_normalization_matches_direct_formula() {
        for n in 0..=10 {
            let direct = (1.0 / (2f64.powi(n as i32) * factorial(n))).sqrt() * PI.powf(-0.25);
            let guarded = normalization(n);
            assert!((direct - guarded).abs() / direct < 1e-12, "n={}", n);
        }
        // 2^200 * 200! overflows f64, the log-space form does not
        assert!(2f64.powi(200) * factorial(200) == f64::INFINITY);
        assert!(normalization(200) > 0.0);
        assert!(normalization(200).is_finite());
    }

    #[test]
    fn empty_grid_gives_empty_output() {
        for n in [0, 1, 7, 10] {
            assert!(evaluate(n, &[]).is_empty());
        }
    }

    #[test]
    fn potential_is_exact() {
        for &x in &[-4.0, -1.5, 0.0, 0.1, 3.0] {
            let x: f64 = x;
            assert_eq!(potential(x), 0.5 * x * x);
        }
        assert_eq!(potential_curve(&[-2.0, 2.0]), vec![2.0, 2.0]);
    }

    #[test]
    fn linspace_endpoints_and_spacing() {
        let x = linspace(-4.0, 4.0, 500);
        assert_eq!(x.len(), 500);
        assert_eq!(x[0], -4.0);
        assert_eq!(x[499], 4.0);
        let dx = x[1] - x[0];
        assert!((dx - 8.0 / 499.0).abs() < 1e-12);

        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.0, 5.0, 1), vec![2.0]);
    }

    #[test]
    fn level_offset_is_additive() {
        let x = [-1.0, 0.0, 2.0];
        let mut shifted = evaluate(3, &x);
        offset_by_level(&mut shifted, 3);
        for (s, raw) in shifted.iter().zip(evaluate(3, &x)) {
            assert!((s - (raw + 3.0)).abs() < 1e-15);
        }
        assert_eq!(energy(3), 3.5);
    }

    #[test]
    fn high_states_overflow_at_domain_edges() {
        let x = linspace(-4.0, 4.0, 500);
        let grids = [x.as_slice()];
        assert!(is_finite_on(200, &grids));

        // H_300 overflows while the normalization underflows
        assert!(evaluate(300, &[0.5, 2.0]).iter().all(|v| v.is_nan()));
        assert!(!is_finite_on(300, &grids));

        let limit = largest_finite_state(300, &grids);
        assert!(limit >= 200 && limit < 300, "limit = {}", limit);
        assert!(evaluate(limit, &x).iter().all(|v| v.is_finite()));
        assert_eq!(largest_finite_state(10, &grids), 10);
    }
}
