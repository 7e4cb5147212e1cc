//! Configuration validation.

use crate::options::ExtensionOptions;
use crate::schema::Config;
use crate::site_filter::SiteFilter;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the runtime configuration.
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_logging(config, &mut result);
        Self::validate_scroll(config, &mut result);

        result
    }

    /// Validate stored extension options. Bad patterns are only warnings
    /// because they are skipped at match time.
    pub fn validate_options(options: &ExtensionOptions) -> ValidationResult {
        let mut result = ValidationResult::default();
        let filter = SiteFilter::new(&options.disabled_site_regexes);

        for (pattern, error) in filter.invalid_patterns() {
            result.add_warning(ValidationWarning::new(
                "disabledSiteRegexs",
                format!("Pattern '{}' will never match: {}", pattern, error),
            ));
        }

        result
    }

    fn validate_logging(config: &Config, result: &mut ValidationResult) {
        let valid_levels = ["trace", "debug", "info", "warn", "error", "off"];
        if !valid_levels.contains(&config.logging.level.to_lowercase().as_str()) {
            result.add_warning(ValidationWarning::new(
                "logging.level",
                format!(
                    "Unknown log level '{}', valid values: {:?}",
                    config.logging.level, valid_levels
                ),
            ));
        }
    }

    fn validate_scroll(config: &Config, result: &mut ValidationResult) {
        if !(config.scroll.down_px > 0.0) {
            result.add_error(ValidationError::new(
                "scroll.down_px",
                "down_px must be greater than 0",
            ));
        }

        if !(config.scroll.up_px > 0.0) {
            result.add_error(ValidationError::new(
                "scroll.up_px",
                "up_px must be greater than 0",
            ));
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
