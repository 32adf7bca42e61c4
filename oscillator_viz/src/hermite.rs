//! Physicists' Hermite polynomials
//!
//! Polynomials are represented by their coefficients in the Hermite basis
//! `c_0 H_0 + c_1 H_1 + ... + c_m H_m` and evaluated with the Clenshaw
//! backward recurrence, so `H_n` itself is the series `[0, .., 0, 1]`.

/// Linear combination of Hermite polynomials
#[derive(Debug, Clone, PartialEq)]
pub struct HermiteSeries {
    /// Coefficient of `H_k` at index `k`
    pub coeffs: Vec<f64>,
}

impl HermiteSeries {
    pub fn new(coeffs: Vec<f64>) -> Self {
        Self { coeffs }
    }

    /// The single basis polynomial `H_n`
    pub fn basis(n: u32) -> Self {
        let mut coeffs = vec![0.0; n as usize + 1];
        coeffs[n as usize] = 1.0;
        Self { coeffs }
    }

    /// Evaluate the series at `x`
    ///
    /// Uses `H_{k+1} = 2x H_k - 2k H_{k-1}` run backwards over the
    /// coefficients. An empty series evaluates to zero.
    pub fn eval(&self, x: f64) -> f64 {
        let c = &self.coeffs;
        let x2 = 2.0 * x;

        let (c0, c1) = match c.len() {
            0 => return 0.0,
            1 => (c[0], 0.0),
            2 => (c[0], c[1]),
            len => {
                let mut nd = len as f64;
                let mut c0 = c[len - 2];
                let mut c1 = c[len - 1];
                for k in (0..len - 2).rev() {
                    let tmp = c0;
                    nd -= 1.0;
                    c0 = c[k] - c1 * (2.0 * (nd - 1.0));
                    c1 = tmp + c1 * x2;
                }
                (c0, c1)
            }
        };

        c0 + c1 * x2
    }
}

/// `H_n(x)` by forward recurrence
pub fn hermite(n: u32, x: f64) -> f64 {
    let mut prev = 1.0;
    if n == 0 {
        return prev;
    }
    let mut curr = 2.0 * x;
    for k in 1..n {
        let next = 2.0 * x * curr - 2.0 * k as f64 * prev;
        prev = curr;
        curr = next;
    }
    curr
}

/// `ln(n!)` as a running sum of logarithms
pub fn ln_factorial(n: u32) -> f64 {
    (2..=n).map(|k| (k as f64).ln()).sum()
}

/// `n!` in floating point; overflows to infinity past `n = 170`
pub fn factorial(n: u32) -> f64 {
    (1..=n).map(|k| k as f64).product()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_order_closed_forms() {
        for &x in &[-2.5, -1.0, 0.0, 0.3, 1.7] {
            let x: f64 = x;
            let expected = [
                1.0,
                2.0 * x,
                4.0 * x * x - 2.0,
                8.0 * x.powi(3) - 12.0 * x,
                16.0 * x.powi(4) - 48.0 * x * x + 12.0,
            ];
            for (n, want) in expected.iter().enumerate() {
                let series = HermiteSeries::basis(n as u32).eval(x);
                let direct = hermite(n as u32, x);
                assert!((series - want).abs() < 1e-9, "H_{}({}) series = {}", n, x, series);
                assert!((direct - want).abs() < 1e-9, "H_{}({}) direct = {}", n, x, direct);
            }
        }
    }

    #[test]
    fn series_matches_recurrence_up_to_twenty() {
        for n in 0..=20 {
            for i in 0..41 {
                let x = -4.0 + 0.2 * i as f64;
                let a = HermiteSeries::basis(n).eval(x);
                let b = hermite(n, x);
                let scale = b.abs().max(1.0);
                assert!((a - b).abs() / scale < 1e-10, "n={} x={} series={} recurrence={}", n, x, a, b);
            }
        }
    }

    #[test]
    fn mixed_series_is_linear() {
        // 3 H_0 - H_1 + 0.5 H_2 at x = 1.5
        let x = 1.5;
        let series = HermiteSeries::new(vec![3.0, -1.0, 0.5]);
        let want = 3.0 - 2.0 * x + 0.5 * (4.0 * x * x - 2.0);
        assert!((series.eval(x) - want).abs() < 1e-12);
        assert_eq!(HermiteSeries::new(Vec::new()).eval(x), 0.0);
    }

    #[test]
    fn factorials() {
        assert_eq!(factorial(0), 1.0);
        assert_eq!(factorial(10), 3_628_800.0);
        assert!((ln_factorial(10) - 3_628_800.0f64.ln()).abs() < 1e-12);
        assert!(factorial(171).is_infinite());
        assert!(ln_factorial(171).is_finite());
    }
}
