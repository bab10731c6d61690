//! Page configuration.
//!
//! Every threshold, offset and timer the page uses lives here so hosts can
//! tune them from a JSON file. Missing keys fall back to the defaults.
//!
//! ```json
//! { "mobile_breakpoint": 900.0, "toast_ttl_ms": 3000 }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{PortfolioError, PortfolioResult};

/// Tunable constants for the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Compensation for the fixed header when picking the active section
    pub header_offset: f64,
    /// Scroll offset at which the navbar switches to the "scrolled" tier
    pub navbar_threshold: f64,
    /// Distance above the viewport bottom a target must cross to reveal
    pub visibility_margin: f64,
    /// Viewport width at or below which the layout is "mobile"
    pub mobile_breakpoint: f64,
    /// Gap left above a section when scrolling to it from a nav link
    pub nav_scroll_offset: f64,
    /// Trailing-edge debounce window for pointer moves
    pub pointer_debounce_ms: u64,
    /// How long a toast stays up
    pub toast_ttl_ms: u64,
    /// Simulated delivery time of the contact form
    pub submit_delay_ms: u64,
    /// Duration of rainbow robot mode
    pub easter_egg_ms: u64,
    /// Robot translate damping
    pub parallax_factor: f64,
    /// Robot rotation damping (degrees per pixel)
    pub tilt_factor: f64,
    /// Largest pupil displacement in pixels
    pub pupil_max: f64,
    /// Cursor distance per pixel of pupil displacement
    pub pupil_scale: f64,
    /// Visible fraction that fills a skill bar
    pub skill_bar_threshold: f64,
    /// Visible fraction that fades in a card
    pub card_threshold: f64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            header_offset: 100.0,
            navbar_threshold: 50.0,
            visibility_margin: 150.0,
            mobile_breakpoint: 768.0,
            nav_scroll_offset: 70.0,
            pointer_debounce_ms: 16,
            toast_ttl_ms: 5_000,
            submit_delay_ms: 2_000,
            easter_egg_ms: 10_000,
            parallax_factor: 0.02,
            tilt_factor: 0.01,
            pupil_max: 3.0,
            pupil_scale: 100.0,
            skill_bar_threshold: 0.5,
            card_threshold: 0.1,
        }
    }
}

impl PageConfig {
    /// Parse a config from JSON and validate it.
    pub fn from_json_str(json: &str) -> PortfolioResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file from disk.
    pub fn load(path: impl AsRef<Path>) -> PortfolioResult<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.as_ref().display(), "Loaded page config");
        Ok(config)
    }

    /// Reject values that would make the page misbehave.
    pub fn validate(&self) -> PortfolioResult<()> {
        if !(self.mobile_breakpoint > 0.0) {
            return Err(PortfolioError::Config(format!(
                "mobile_breakpoint must be positive, got {}",
                self.mobile_breakpoint
            )));
        }
        if !(self.pupil_scale > 0.0) {
            return Err(PortfolioError::Config(format!(
                "pupil_scale must be positive, got {}",
                self.pupil_scale
            )));
        }
        for (name, value) in [
            ("skill_bar_threshold", self.skill_bar_threshold),
            ("card_threshold", self.card_threshold),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(PortfolioError::Config(format!(
                    "{name} must be in (0, 1], got {value}"
                )));
            }
        }
        Ok(())
    }

    pub fn pointer_debounce(&self) -> Duration {
        Duration::from_millis(self.pointer_debounce_ms)
    }

    pub fn toast_ttl(&self) -> Duration {
        Duration::from_millis(self.toast_ttl_ms)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn easter_egg_duration(&self) -> Duration {
        Duration::from_millis(self.easter_egg_ms)
    }

    /// Desktop layouts are strictly wider than the breakpoint.
    pub fn is_desktop(&self, viewport_width: f64) -> bool {
        viewport_width > self.mobile_breakpoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = PageConfig::from_json_str(r#"{ "toast_ttl_ms": 3000 }"#).unwrap();
        assert_eq!(config.toast_ttl(), Duration::from_secs(3));
        assert_eq!(config.navbar_threshold, 50.0);
        assert_eq!(config.mobile_breakpoint, 768.0);
    }

    #[test]
    fn test_rejects_bad_threshold() {
        let err = PageConfig::from_json_str(r#"{ "card_threshold": 1.5 }"#).unwrap_err();
        assert!(matches!(err, PortfolioError::Config(_)));
    }

    #[test]
    fn test_rejects_zero_breakpoint() {
        let err = PageConfig::from_json_str(r#"{ "mobile_breakpoint": 0 }"#).unwrap_err();
        assert!(matches!(err, PortfolioError::Config(_)));
    }

    #[test]
    fn test_malformed_json() {
        let err = PageConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, PortfolioError::Json(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "pointer_debounce_ms": 32 }}"#).unwrap();

        let config = PageConfig::load(file.path()).unwrap();
        assert_eq!(config.pointer_debounce(), Duration::from_millis(32));
    }

    #[test]
    fn test_breakpoint_is_exclusive_for_desktop() {
        let config = PageConfig::default();
        assert!(!config.is_desktop(768.0));
        assert!(config.is_desktop(769.0));
    }
}
