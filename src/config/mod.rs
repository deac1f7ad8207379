//! Run configuration with YAML schema and validation.
//!
//! Mistake-proofing happens in two layers:
//! - Schema constraints checked by `validator` derives
//! - Semantic checks that reuse the engine's own input validation

use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

use crate::engine::{Axis, SimRng, SliceParams};
use crate::error::{SimError, SimResult};

/// Top-level run configuration.
///
/// ```yaml
/// schema_version: "1.0"
/// reproducibility:
///   seed: 42
/// sampling:
///   target: 100000
///   batch_size: 1000
/// slice:
///   axis: z
///   position: 0.0
///   thickness: 0.02
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// Schema version for forward compatibility.
    #[validate(length(min = 1))]
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    /// Seed settings.
    #[serde(default)]
    pub reproducibility: ReproducibilityConfig,

    /// Point budget and batch size.
    #[validate(nested)]
    #[serde(default)]
    pub sampling: SamplingConfig,

    /// Slab used for the 2D estimate.
    #[serde(default)]
    pub slice: SliceConfig,
}

fn default_schema_version() -> String {
    "1.0".to_string()
}

impl RunConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - YAML parsing fails
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> SimResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> SimResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.check()?;
        Ok(config)
    }

    /// Run schema and semantic validation.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn check(&self) -> SimResult<()> {
        self.validate()?;
        self.validate_semantic()
    }

    /// Serialize back to YAML.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_yaml(&self) -> SimResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Create a builder for configuration.
    #[must_use]
    pub fn builder() -> RunConfigBuilder {
        RunConfigBuilder::default()
    }

    fn validate_semantic(&self) -> SimResult<()> {
        self.slice.to_params()?;
        if self.sampling.batch_size > self.sampling.target {
            return Err(SimError::config(format!(
                "batch_size {} exceeds target {}",
                self.sampling.batch_size, self.sampling.target
            )));
        }
        Ok(())
    }

    /// The configured seed, or a freshly picked one when none is set.
    #[must_use]
    pub fn resolve_seed(&self) -> u64 {
        self.reproducibility.seed.unwrap_or_else(SimRng::random_seed)
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            reproducibility: ReproducibilityConfig::default(),
            sampling: SamplingConfig::default(),
            slice: SliceConfig::default(),
        }
    }
}

/// Configuration builder for programmatic construction.
#[derive(Debug, Default)]
pub struct RunConfigBuilder {
    seed: Option<u64>,
    target: Option<u64>,
    batch_size: Option<u64>,
    slice: Option<SliceConfig>,
}

impl RunConfigBuilder {
    /// Set the random seed.
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the total number of points to generate.
    #[must_use]
    pub const fn target(mut self, target: u64) -> Self {
        self.target = Some(target);
        self
    }

    /// Set the number of points per batch.
    #[must_use]
    pub const fn batch_size(mut self, batch_size: u64) -> Self {
        self.batch_size = Some(batch_size);
        self
    }

    /// Set the slab.
    #[must_use]
    pub const fn slice(mut self, axis: Axis, position: f64, thickness: f64) -> Self {
        self.slice = Some(SliceConfig {
            axis,
            position,
            thickness,
        });
        self
    }

    /// Build the configuration.
    ///
    /// Values are not validated here; call [`RunConfig::check`].
    #[must_use]
    pub fn build(self) -> RunConfig {
        let mut config = RunConfig::default();

        if let Some(seed) = self.seed {
            config.reproducibility.seed = Some(seed);
        }
        if let Some(target) = self.target {
            config.sampling.target = target;
        }
        if let Some(batch_size) = self.batch_size {
            config.sampling.batch_size = batch_size;
        }
        if let Some(slice) = self.slice {
            config.slice = slice;
        }

        config
    }
}

/// Seed settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReproducibilityConfig {
    /// Seed for the point stream; absent means pick one at random.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Point budget and batch size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct SamplingConfig {
    /// Stop once this many points exist.
    #[validate(range(min = 1))]
    #[serde(default = "default_target")]
    pub target: u64,
    /// Points generated per step.
    #[validate(range(min = 1))]
    #[serde(default = "default_batch_size")]
    pub batch_size: u64,
}

const fn default_target() -> u64 {
    100_000
}

const fn default_batch_size() -> u64 {
    1_000
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            target: default_target(),
            batch_size: default_batch_size(),
        }
    }
}

/// Slab used for the 2D estimate.
///
/// Checked through [`SliceConfig::to_params`] so the engine and the
/// configuration share one set of rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliceConfig {
    /// Axis orthogonal to the plane.
    #[serde(default)]
    pub axis: Axis,
    /// Plane coordinate.
    #[serde(default)]
    pub position: f64,
    /// Slab width.
    #[serde(default = "default_thickness")]
    pub thickness: f64,
}

const fn default_thickness() -> f64 {
    0.02
}

impl SliceConfig {
    /// Convert to validated engine parameters.
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error for a bad position or thickness.
    pub fn to_params(&self) -> SimResult<SliceParams> {
        SliceParams::new(self.axis, self.position, self.thickness)
    }
}

impl Default for SliceConfig {
    fn default() -> Self {
        Self {
            axis: Axis::default(),
            position: 0.0,
            thickness: default_thickness(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = RunConfig::default();
        assert!(config.check().is_ok());
        assert_eq!(config.sampling.target, 100_000);
        assert_eq!(config.sampling.batch_size, 1_000);
        assert_eq!(config.slice.axis, Axis::Z);
        assert!((config.slice.thickness - 0.02).abs() < 1e-15);
        assert_eq!(config.reproducibility.seed, None);
    }

    #[test]
    fn test_builder() {
        let config = RunConfig::builder()
            .seed(7)
            .target(5_000)
            .batch_size(250)
            .slice(Axis::X, 0.5, 0.05)
            .build();

        assert_eq!(config.reproducibility.seed, Some(7));
        assert_eq!(config.sampling.target, 5_000);
        assert_eq!(config.sampling.batch_size, 250);
        assert_eq!(config.slice.axis, Axis::X);
        assert!(config.check().is_ok());
    }

    #[test]
    fn test_from_yaml_full() {
        let yaml = r#"
schema_version: "1.0"
reproducibility:
  seed: 42
sampling:
  target: 20000
  batch_size: 500
slice:
  axis: y
  position: -0.25
  thickness: 0.04
"#;
        let config = RunConfig::from_yaml(yaml).expect("valid yaml");
        assert_eq!(config.reproducibility.seed, Some(42));
        assert_eq!(config.sampling.target, 20_000);
        assert_eq!(config.slice.axis, Axis::Y);
        assert!((config.slice.position + 0.25).abs() < 1e-15);
    }

    #[test]
    fn test_from_yaml_minimal_uses_defaults() {
        let config = RunConfig::from_yaml("reproducibility:\n  seed: 3\n").expect("valid");
        assert_eq!(config.reproducibility.seed, Some(3));
        assert_eq!(config.sampling, SamplingConfig::default());
        assert_eq!(config.slice, SliceConfig::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = RunConfig::from_yaml("renderer: opengl\n");
        assert!(matches!(result, Err(SimError::YamlParse(_))));
    }

    #[test]
    fn test_zero_target_rejected() {
        let result = RunConfig::from_yaml("sampling:\n  target: 0\n  batch_size: 1\n");
        assert!(matches!(result, Err(SimError::Validation(_))));
    }

    #[test]
    fn test_position_out_of_range_rejected() {
        let result = RunConfig::from_yaml("slice:\n  position: 1.5\n");
        assert!(matches!(result, Err(SimError::InvalidPosition { .. })));
    }

    #[test]
    fn test_non_positive_thickness_rejected() {
        let result = RunConfig::from_yaml("slice:\n  thickness: 0.0\n");
        assert!(matches!(result, Err(SimError::InvalidThickness { .. })));

        let result = RunConfig::from_yaml("slice:\n  thickness: -0.1\n");
        assert!(matches!(result, Err(SimError::InvalidThickness { .. })));
    }

    #[test]
    fn test_batch_larger_than_target_rejected() {
        let config = RunConfig::builder().target(10).batch_size(100).build();
        assert!(matches!(config.check(), Err(SimError::Config { .. })));
    }

    #[test]
    fn test_unknown_axis_rejected() {
        let result = RunConfig::from_yaml("slice:\n  axis: w\n");
        assert!(matches!(result, Err(SimError::YamlParse(_))));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = RunConfig::builder().seed(11).slice(Axis::X, 0.1, 0.03).build();
        let yaml = config.to_yaml().expect("serialize");
        let restored = RunConfig::from_yaml(&yaml).expect("parse");
        assert_eq!(restored, config);
    }

    #[test]
    fn test_resolve_seed() {
        let fixed = RunConfig::builder().seed(99).build();
        assert_eq!(fixed.resolve_seed(), 99);

        let random = RunConfig::default();
        assert!(random.resolve_seed() < crate::engine::rng::RANDOM_SEED_BOUND);
    }

    #[test]
    fn test_load_missing_file() {
        let result = RunConfig::load("/nonexistent/spherepi.yaml");
        assert!(matches!(result, Err(SimError::Io(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("run.yaml");
        std::fs::write(&path, "reproducibility:\n  seed: 5\n").expect("write");
        let config = RunConfig::load(&path).expect("load");
        assert_eq!(config.reproducibility.seed, Some(5));
    }
}
