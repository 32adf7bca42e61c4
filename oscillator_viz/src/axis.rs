//! Axis bounds and tick placement

/// Rectangular data extent of a plot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self { x_min, x_max, y_min, y_max }
    }

    /// Smallest y-range covering every finite value, or `None` if there are none
    pub fn y_extent<'a, I>(values: I) -> Option<(f64, f64)>
    where
        I: IntoIterator<Item = &'a f64>,
    {
        values
            .into_iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    /// Grow the y-range by `fraction` of its span on each side
    pub fn pad_y(self, fraction: f64) -> Self {
        let span = self.y_max - self.y_min;
        let pad = if span > 0.0 { span * fraction } else { 0.5 };
        Self {
            y_min: self.y_min - pad,
            y_max: self.y_max + pad,
            ..self
        }
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }
}

/// Round tick positions inside `[min, max]`, roughly `target` of them
///
/// Steps are 1, 2, 2.5 or 5 times a power of ten.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !(max > min) || !min.is_finite() || !max.is_finite() || target == 0 {
        return Vec::new();
    }

    let raw = (max - min) / target as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let step = [1.0, 2.0, 2.5, 5.0, 10.0]
        .iter()
        .map(|m| m * magnitude)
        .find(|s| *s >= raw)
        .unwrap_or(10.0 * magnitude);

    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    (first..=last)
        .map(|i| {
            let t = i as f64 * step;
            // snap -0.0 and float fuzz onto the grid
            if t.abs() < step * 1e-9 { 0.0 } else { t }
        })
        .collect()
}

/// Tick label with as many decimals as the step needs
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = (0..6)
        .find(|d| {
            let scaled = step * 10f64.powi(*d);
            (scaled - scaled.round()).abs() < 1e-9 * scaled.max(1.0)
        })
        .unwrap_or(6) as usize;
    format!("{:.*}", decimals, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_over_full_domain() {
        let ticks = nice_ticks(-4.0, 4.0, 8);
        assert_eq!(ticks, vec![-4.0, -3.0, -2.0, -1.0, 0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn ticks_are_round_and_inside() {
        let ticks = nice_ticks(-0.62, 11.3, 6);
        assert!(!ticks.is_empty());
        let step = ticks[1] - ticks[0];
        assert!((step - 2.0).abs() < 1e-12, "step = {}", step);
        assert!(ticks.iter().all(|t| *t >= -0.62 && *t <= 11.3));
        assert!(ticks.contains(&0.0));
    }

    #[test]
    fn degenerate_ranges_have_no_ticks() {
        assert!(nice_ticks(1.0, 1.0, 5).is_empty());
        assert!(nice_ticks(2.0, 1.0, 5).is_empty());
        assert!(nice_ticks(0.0, f64::INFINITY, 5).is_empty());
        assert!(nice_ticks(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn extent_and_padding() {
        let values = [0.5, -0.25, f64::NAN, 3.0];
        let (lo, hi) = Bounds::y_extent(&values).unwrap();
        assert_eq!((lo, hi), (-0.25, 3.0));

        let padded = Bounds::new(0.0, 4.0, 0.0, 10.0).pad_y(0.05);
        assert_eq!((padded.y_min, padded.y_max), (-0.5, 10.5));
        assert!(padded.contains(4.0, 10.4));
        assert!(!padded.contains(4.1, 0.0));

        assert!(Bounds::y_extent(&Vec::<f64>::new()).is_none());
    }

    #[test]
    fn tick_labels() {
        assert_eq!(format_tick(2.0, 1.0), "2");
        assert_eq!(format_tick(-0.5, 0.5), "-0.5");
        assert_eq!(format_tick(0.25, 0.25), "0.25");
        assert_eq!(format_tick(7.5, 2.5), "7.5");
    }
}
