use log::Level;
use thiserror::Error;

// Timing gates, all in milliseconds.
pub const ANIMATION_START_DELAY_MS: u32 = 1_200;
pub const CTA_BUTTONS_DELAY_MS: u32 = 3_000;
pub const AUTO_CONVERGENCE_DELAY_MS: u32 = 2_000;
pub const AUTO_CONVERGENCE_DURATION_MS: u32 = 4_000;
pub const CONSULTATION_POPUP_DELAY_MS: u32 = 10_000;
pub const CONTACT_BUTTON_REVEAL_MS: u32 = 400;

// Geometry, in CSS pixels.
pub const MOBILE_BREAKPOINT_PX: f64 = 640.0;
pub const DOCK_SCROLL_THRESHOLD_PX: f64 = 100.0;
pub const NAV_TOP_THRESHOLD_PX: f64 = 10.0;
pub const SCROLL_SENSITIVITY: f64 = 0.6;

/// Fraction of the viewport height the hero must scroll past before it blurs.
pub const HERO_BLUR_FRACTION: f64 = 0.6;

pub const CONNECTION_THRESHOLD: f64 = 0.6;
pub const CONNECTION_COMPLETE: f64 = 0.8;
pub const CONNECTED_AT: f64 = 0.5;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },
    #[error("{field} must be within [{min}, {max}], got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("connection threshold {threshold} is past connection complete {complete}")]
    ThresholdOrder { threshold: f64, complete: f64 },
}

/// Tuning for the converging call-to-action pair.
///
/// `connection_threshold` and `connection_complete` are fractions of the
/// maximum travel distance; progress ramps from 0 to 1 between them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CtaConfig {
    pub scroll_sensitivity: f64,
    pub gap: f64,
    pub connection_threshold: f64,
    pub connection_complete: f64,
    pub connected_at: f64,
    pub dock_scroll_threshold: f64,
    pub mobile_breakpoint: f64,
}

impl Default for CtaConfig {
    fn default() -> Self {
        Self {
            scroll_sensitivity: SCROLL_SENSITIVITY,
            gap: 0.0,
            connection_threshold: CONNECTION_THRESHOLD,
            connection_complete: CONNECTION_COMPLETE,
            connected_at: CONNECTED_AT,
            dock_scroll_threshold: DOCK_SCROLL_THRESHOLD_PX,
            mobile_breakpoint: MOBILE_BREAKPOINT_PX,
        }
    }
}

impl CtaConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("scroll_sensitivity", self.scroll_sensitivity),
            ("gap", self.gap),
            ("connection_threshold", self.connection_threshold),
            ("connection_complete", self.connection_complete),
            ("connected_at", self.connected_at),
            ("dock_scroll_threshold", self.dock_scroll_threshold),
            ("mobile_breakpoint", self.mobile_breakpoint),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }

        check_range("scroll_sensitivity", self.scroll_sensitivity, 0.0, f64::MAX)?;
        check_range("gap", self.gap, 0.0, f64::MAX)?;
        check_range("connection_threshold", self.connection_threshold, 0.0, 1.0)?;
        check_range("connection_complete", self.connection_complete, 0.0, 1.0)?;
        check_range("connected_at", self.connected_at, 0.0, 1.0)?;
        check_range("dock_scroll_threshold", self.dock_scroll_threshold, 0.0, f64::MAX)?;
        check_range("mobile_breakpoint", self.mobile_breakpoint, 0.0, f64::MAX)?;

        if self.connection_threshold > self.connection_complete {
            return Err(ConfigError::ThresholdOrder {
                threshold: self.connection_threshold,
                complete: self.connection_complete,
            });
        }
        Ok(())
    }

    /// Returns `self` when valid, otherwise logs the problem and falls back to defaults.
    pub fn or_default(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(e) => {
                log::warn!("Invalid CTA config ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Configuration a component should run with, given what it was handed.
    pub fn resolve(config: Option<Self>) -> Self {
        config.map_or_else(Self::default, Self::or_default)
    }
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), ConfigError> {
    if value < min || value > max {
        return Err(ConfigError::OutOfRange { field, value, min, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(CtaConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_threshold_past_complete() {
        let config = CtaConfig {
            connection_threshold: 0.9,
            connection_complete: 0.8,
            ..CtaConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ThresholdOrder { .. })
        ));
        assert_eq!(config.or_default(), CtaConfig::default());
    }

    #[test]
    fn rejects_non_finite_values() {
        let config = CtaConfig {
            gap: f64::NAN,
            ..CtaConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotFinite { field: "gap", .. })
        ));
    }

    #[test]
    fn rejects_out_of_range_fractions() {
        let config = CtaConfig {
            connection_complete: 1.5,
            ..CtaConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfRange { field: "connection_complete", .. })
        ));
    }

    #[test]
    fn resolve_falls_back_for_missing_or_invalid() {
        assert_eq!(CtaConfig::resolve(None), CtaConfig::default());
        let tuned = CtaConfig {
            gap: 12.0,
            ..CtaConfig::default()
        };
        assert_eq!(CtaConfig::resolve(Some(tuned)), tuned);
        let broken = CtaConfig {
            scroll_sensitivity: -1.0,
            ..CtaConfig::default()
        };
        assert_eq!(CtaConfig::resolve(Some(broken)), CtaConfig::default());
    }

    #[test]
    fn degenerate_pair_is_allowed() {
        let config = CtaConfig {
            connection_threshold: 0.8,
            connection_complete: 0.8,
            ..CtaConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
