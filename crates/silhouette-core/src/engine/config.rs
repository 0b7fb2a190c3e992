use crate::core::raster::{DEFAULT_ATOM_RADIUS, DEFAULT_GRID_STEP};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid value for '{name}': {value} (must be a finite number greater than zero)")]
    InvalidParameter { name: &'static str, value: f64 },
}

fn require_positive(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::InvalidParameter { name, value })
    }
}

/// Rasterization parameters shared by every cell of a sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanConfig {
    /// Grid resolution, in coordinate length units.
    pub step: f64,
    /// Disk radius drawn around every projected atom.
    pub radius: f64,
}

impl ScanConfig {
    pub fn new(step: f64, radius: f64) -> Result<Self, ConfigError> {
        let config = Self { step, radius };
        config.validate()?;
        Ok(config)
    }

    /// Re-checks the invariants; fields are public, so callers that build a
    /// `ScanConfig` by hand are validated again before a sweep starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("step", self.step)?;
        require_positive("radius", self.radius)?;
        Ok(())
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            step: DEFAULT_GRID_STEP,
            radius: DEFAULT_ATOM_RADIUS,
        }
    }
}

#[derive(Default)]
pub struct ScanConfigBuilder {
    step: Option<f64>,
    radius: Option<f64>,
}

impl ScanConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }
    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn build(self) -> Result<ScanConfig, ConfigError> {
        let step = self.step.ok_or(ConfigError::MissingParameter("step"))?;
        let radius = self.radius.ok_or(ConfigError::MissingParameter("radius"))?;
        ScanConfig::new(step, radius)
    }
}
