//! Timing constants, breakpoint and navigation variant for one strip
//!
//! Everything here used to be a magic number scattered through the page
//! script; hoisting it lets tests substitute deterministic values and lets
//! the deployment tune timings without a rebuild.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// What happens when navigation runs past either end of the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Navigation {
    /// Stop at the ends; the control pointing past the end is disabled
    Bounded,
    /// Wrap to the opposite end; controls stay enabled
    Wrap,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Quiet time after the last native scroll event before the shown
    /// position is re-read
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// How long a programmatic smooth scroll is assumed to still be moving;
    /// scroll feedback is suppressed for this window
    #[serde(default = "default_settle_ms")]
    pub settle_ms: u64,
    /// Delay between mount and the initial centering scroll, giving layout
    /// time to settle before geometry is measured
    #[serde(default = "default_initial_center_delay_ms")]
    pub initial_center_delay_ms: u64,
    /// Widest page viewport that still counts as mobile
    #[serde(default = "default_mobile_breakpoint")]
    pub mobile_breakpoint: f64,
    /// Horizontal travel a touch must exceed to count as a swipe
    #[serde(default = "default_swipe_threshold")]
    pub swipe_threshold: f64,
    /// End-of-strip behavior
    #[serde(default = "default_navigation")]
    pub navigation: Navigation,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            settle_ms: default_settle_ms(),
            initial_center_delay_ms: default_initial_center_delay_ms(),
            mobile_breakpoint: default_mobile_breakpoint(),
            swipe_threshold: default_swipe_threshold(),
            navigation: default_navigation(),
        }
    }
}

impl CarouselConfig {
    /// Get the scroll debounce as a Duration
    #[inline]
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Get the programmatic-scroll settle window as a Duration
    #[inline]
    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }

    /// Get the initial centering delay as a Duration
    #[inline]
    pub fn initial_center_delay(&self) -> Duration {
        Duration::from_millis(self.initial_center_delay_ms)
    }
}

fn default_debounce_ms() -> u64 {
    150
}

fn default_settle_ms() -> u64 {
    600
}

fn default_initial_center_delay_ms() -> u64 {
    100
}

fn default_mobile_breakpoint() -> f64 {
    768.0
}

fn default_swipe_threshold() -> f64 {
    50.0
}

fn default_navigation() -> Navigation {
    Navigation::Bounded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CarouselConfig::default();
        assert_eq!(config.debounce_ms, 150);
        assert_eq!(config.settle_ms, 600);
        assert_eq!(config.initial_center_delay_ms, 100);
        assert_eq!(config.mobile_breakpoint, 768.0);
        assert_eq!(config.swipe_threshold, 50.0);
        assert_eq!(config.navigation, Navigation::Bounded);
    }

    #[test]
    fn test_durations() {
        let config = CarouselConfig {
            settle_ms: 200,
            ..Default::default()
        };
        assert_eq!(config.settle(), Duration::from_millis(200));
        assert_eq!(config.debounce(), Duration::from_millis(150));
    }

    #[test]
    fn test_navigation_from_toml() {
        let config: CarouselConfig = toml::from_str(r#"navigation = "wrap""#).unwrap();
        assert_eq!(config.navigation, Navigation::Wrap);
        assert_eq!(config.debounce_ms, 150);
    }
}
