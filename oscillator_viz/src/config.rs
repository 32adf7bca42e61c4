//! Application configuration
//!
//! Defaults reproduce the classic layout: 500 samples over `[-4, 4]` and
//! `[0, 4]`, states 0 through 10. A few values can be overridden from the
//! environment:
//!
//! - `QHO_SAMPLES`: grid points per domain
//! - `QHO_MAX_STATE`: highest selectable state, bounded by the largest state
//!   whose wavefunction stays finite on both domains
//! - `QHO_ICON`: path to the window icon

use crate::wavefunction::{is_finite_on, largest_finite_state, linspace};
use std::path::PathBuf;
use thiserror::Error;

/// Hard cap on `max_state`, checked before any state is evaluated
pub const STATE_CEILING: u32 = 1024;

/// Returned when an environment override is invalid.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var}: expected a non-negative integer, got {value:?}")]
    NotANumber { var: &'static str, value: String },

    #[error("grid needs at least 2 samples per domain; got {0}")]
    TooFewSamples(usize),

    #[error("domain [{0}, {1}] is empty or inverted")]
    BadDomain(f64, f64),

    #[error("state {max_state} does not evaluate to finite values on the plot domains; the largest usable state is {limit}")]
    StateTooLarge { max_state: u32, limit: u32 },
}

/// Closed interval of the spatial axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    pub start: f64,
    pub end: f64,
}

impl Domain {
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VizConfig {
    /// Grid points per domain
    pub samples: usize,
    /// Domain of the full oscillator
    pub full_domain: Domain,
    /// Domain of the half oscillator
    pub half_domain: Domain,
    /// Highest state offered by the dropdown
    pub max_state: u32,
    /// Optional window icon
    pub icon_path: PathBuf,
    /// Icon edge length in pixels
    pub icon_size: u32,
    pub window_title: String,
    pub window_width: u32,
    pub window_height: u32,
}

impl Default for VizConfig {
    fn default() -> Self {
        Self {
            samples: 500,
            full_domain: Domain::new(-4.0, 4.0),
            half_domain: Domain::new(0.0, 4.0),
            max_state: 10,
            icon_path: PathBuf::from("logo.png"),
            icon_size: 50,
            window_title: "Quantum Harmonic Oscillator Visualization Tool".to_string(),
            window_width: 1600,
            window_height: 950,
        }
    }
}

impl VizConfig {
    /// Defaults with `QHO_*` overrides from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults with overrides from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("QHO_SAMPLES") {
            config.samples = parse_number("QHO_SAMPLES", &value)?;
        }
        if let Some(value) = lookup("QHO_MAX_STATE") {
            config.max_state = parse_number("QHO_MAX_STATE", &value)?;
        }
        if let Some(value) = lookup("QHO_ICON") {
            config.icon_path = PathBuf::from(value);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.samples < 2 {
            return Err(ConfigError::TooFewSamples(self.samples));
        }
        for domain in [self.full_domain, self.half_domain] {
            if !(domain.width() > 0.0) {
                return Err(ConfigError::BadDomain(domain.start, domain.end));
            }
        }

        let full = linspace(self.full_domain.start, self.full_domain.end, self.samples);
        let half = linspace(self.half_domain.start, self.half_domain.end, self.samples);
        let grids = [full.as_slice(), half.as_slice()];
        if self.max_state > STATE_CEILING || !is_finite_on(self.max_state, &grids) {
            let limit = largest_finite_state(self.max_state.min(STATE_CEILING), &grids);
            return Err(ConfigError::StateTooLarge {
                max_state: self.max_state,
                limit,
            });
        }
        Ok(())
    }
}

fn parse_number<T: std::str::FromStr>(var: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::NotANumber {
        var,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_overrides() {
        let config = VizConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, VizConfig::default());
        assert_eq!(config.samples, 500);
        assert_eq!(config.max_state, 10);
        assert_eq!(config.full_domain, Domain::new(-4.0, 4.0));
        assert_eq!(config.half_domain, Domain::new(0.0, 4.0));
    }

    #[test]
    fn overrides_apply() {
        let config = VizConfig::from_lookup(lookup(&[
            ("QHO_SAMPLES", "1000"),
            ("QHO_MAX_STATE", " 6 "),
            ("QHO_ICON", "assets/icon.png"),
        ]))
        .unwrap();
        assert_eq!(config.samples, 1000);
        assert_eq!(config.max_state, 6);
        assert_eq!(config.icon_path, PathBuf::from("assets/icon.png"));
    }

    #[test]
    fn invalid_overrides_are_rejected() {
        assert_eq!(
            VizConfig::from_lookup(lookup(&[("QHO_MAX_STATE", "-3")])),
            Err(ConfigError::NotANumber {
                var: "QHO_MAX_STATE",
                value: "-3".to_string()
            })
        );
        assert_eq!(
            VizConfig::from_lookup(lookup(&[("QHO_SAMPLES", "1")])),
            Err(ConfigError::TooFewSamples(1))
        );

        let mut config = VizConfig::default();
        config.half_domain = Domain::new(4.0, 0.0);
        assert_eq!(config.validate(), Err(ConfigError::BadDomain(4.0, 0.0)));
    }

    #[test]
    fn oversized_max_state_is_rejected() {
        let limit = match VizConfig::from_lookup(lookup(&[("QHO_MAX_STATE", "300")])) {
            Err(ConfigError::StateTooLarge { max_state: 300, limit }) => limit,
            other => panic!("expected StateTooLarge, got {:?}", other),
        };
        assert!(limit >= 200 && limit < 300, "limit = {}", limit);

        // the reported limit is itself accepted and draws finite curves
        let max = limit.to_string();
        let config = VizConfig::from_lookup(lookup(&[("QHO_MAX_STATE", max.as_str())])).unwrap();
        let scene = crate::plot::compose_scene(
            crate::plot::ViewState {
                selection: crate::selection::StateSelection::Single(limit),
            },
            &config,
        );
        for panel in &scene.panels {
            assert!(panel.curves.iter().all(|c| c.y.iter().all(|y| y.is_finite())));
        }

        assert!(matches!(
            VizConfig::from_lookup(lookup(&[("QHO_MAX_STATE", "4294967295")])),
            Err(ConfigError::StateTooLarge { max_state: u32::MAX, limit: l }) if l < STATE_CEILING
        ));
        assert_eq!(VizConfig::from_lookup(lookup(&[("QHO_MAX_STATE", "60")])).unwrap().max_state, 60);
    }
}
