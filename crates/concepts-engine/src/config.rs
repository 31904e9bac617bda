//! Vectorizer configuration from defaults or environment variables.

use concepts_core::Representation;
use std::env;

/// Default rare-word threshold: tokens seen at most this many times in the
/// whole corpus are dropped from the vocabulary.
pub const DEFAULT_RARE_THRESHOLD: usize = 1;

/// Configuration for vocabulary building and document vectorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VectorizerConfig {
    /// Output representation of feature vectors.
    pub representation: Representation,
    /// Vectorize corpus documents on the rayon thread pool.
    pub parallel: bool,
    /// Global frequency at or below which a token is discarded.
    pub rare_threshold: usize,
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        Self {
            representation: Representation::Dense,
            parallel: true,
            rare_threshold: DEFAULT_RARE_THRESHOLD,
        }
    }
}

impl VectorizerConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `BOC_REPRESENTATION`: `dense` or `sparse` (default: dense)
    /// - `BOC_PARALLEL`: `true` or `false` (default: true)
    /// - `BOC_RARE_THRESHOLD`: non-negative integer (default: 1)
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let representation = match env::var("BOC_REPRESENTATION") {
            Ok(value) => value
                .parse::<Representation>()
                .map_err(|reason| ConfigError::InvalidValue {
                    name: "BOC_REPRESENTATION".to_string(),
                    reason,
                })?,
            Err(_) => defaults.representation,
        };

        let parallel = match env::var("BOC_PARALLEL") {
            Ok(value) => parse_bool(&value).ok_or_else(|| ConfigError::InvalidValue {
                name: "BOC_PARALLEL".to_string(),
                reason: format!("expected true or false, got '{value}'"),
            })?,
            Err(_) => defaults.parallel,
        };

        let rare_threshold = match env::var("BOC_RARE_THRESHOLD") {
            Ok(value) => value
                .trim()
                .parse::<usize>()
                .map_err(|e| ConfigError::InvalidValue {
                    name: "BOC_RARE_THRESHOLD".to_string(),
                    reason: e.to_string(),
                })?,
            Err(_) => defaults.rare_threshold,
        };

        Ok(Self {
            representation,
            parallel,
            rare_threshold,
        })
    }

    /// Returns a copy with a different output representation.
    pub fn with_representation(mut self, representation: Representation) -> Self {
        self.representation = representation;
        self
    }

    /// Returns a copy with parallel corpus vectorization toggled.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Invalid environment variable value.
    #[error("invalid value for environment variable {name}: {reason}")]
    InvalidValue { name: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    // Every BOC_* mutation stays in this one test.
    #[test]
    fn test_from_env() {
        // SAFETY: no other test in this crate reads or writes BOC_* variables.
        unsafe {
            env::remove_var("BOC_REPRESENTATION");
            env::remove_var("BOC_PARALLEL");
            env::remove_var("BOC_RARE_THRESHOLD");
        }
        let config = VectorizerConfig::from_env().unwrap();
        assert_eq!(config, VectorizerConfig::default());

        // SAFETY: see above.
        unsafe {
            env::set_var("BOC_REPRESENTATION", "sparse");
            env::set_var("BOC_PARALLEL", "off");
            env::set_var("BOC_RARE_THRESHOLD", "2");
        }
        let config = VectorizerConfig::from_env().unwrap();
        assert_eq!(config.representation, Representation::Sparse);
        assert!(!config.parallel);
        assert_eq!(config.rare_threshold, 2);

        // SAFETY: see above.
        unsafe { env::set_var("BOC_PARALLEL", "maybe") };
        let err = VectorizerConfig::from_env().unwrap_err();
        assert!(err.to_string().contains("BOC_PARALLEL"));

        // SAFETY: see above.
        unsafe {
            env::remove_var("BOC_REPRESENTATION");
            env::remove_var("BOC_PARALLEL");
            env::remove_var("BOC_RARE_THRESHOLD");
        }
    }

    #[test]
    fn test_builders() {
        let config = VectorizerConfig::default()
            .with_representation(Representation::Sparse)
            .with_parallel(false);
        assert_eq!(config.representation, Representation::Sparse);
        assert!(!config.parallel);
        assert_eq!(config.rare_threshold, DEFAULT_RARE_THRESHOLD);
    }
}
