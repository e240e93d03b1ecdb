//! Number rendering for display strings, and the display settings that control it.

use crate::kind::Polarity;

#[cfg(feature = "config")]
use crate::error::{QuantityError, Result};
#[cfg(feature = "config")]
use std::path::Path;

/// How numbers are rendered in display strings.
///
/// Values whose magnitude lies in `[fixed_min, fixed_max)`, and zero, use fixed notation with `precision`
/// decimals; everything else uses scientific notation with the same number of mantissa decimals.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DisplaySettings {
    /// Decimals after the point.
    pub precision: usize,
    /// Smallest magnitude rendered in fixed notation.
    pub fixed_min: f64,
    /// Magnitude from which scientific notation is used again.
    pub fixed_max: f64,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            precision: 3,
            fixed_min: 1e-3,
            fixed_max: 1e7,
        }
    }
}

impl DisplaySettings {
    /// Renders a number according to these settings.
    ///
    /// ```rust
    /// use dimscalar_core::DisplaySettings;
    ///
    /// let settings = DisplaySettings::default();
    /// assert_eq!(settings.format_number(12.5), "12.500");
    /// assert_eq!(settings.format_number(1.5e9), "1.500e9");
    /// ```
    pub fn format_number(&self, value: f32) -> String {
        if !value.is_finite() {
            return value.to_string();
        }
        let magnitude = (value as f64).abs();
        if magnitude == 0.0 || (magnitude >= self.fixed_min && magnitude < self.fixed_max) {
            format!("{:.*}", self.precision, value)
        } else {
            format!("{:.*e}", self.precision, value)
        }
    }
}

/// Renders `[Abs |Rel ]<number>[ <abbreviation>]`. An empty abbreviation adds nothing.
pub(crate) fn format_scalar(
    settings: &DisplaySettings,
    polarity: Option<Polarity>,
    value: f32,
    abbreviation: Option<&str>,
) -> String {
    let mut out = String::new();
    if let Some(polarity) = polarity {
        out.push_str(polarity.tag());
        out.push(' ');
    }
    out.push_str(&settings.format_number(value));
    if let Some(abbreviation) = abbreviation.filter(|a| !a.is_empty()) {
        out.push(' ');
        out.push_str(abbreviation);
    }
    out
}

// ─────────────────────────────────────────────────────────────────────────────
// TOML loading
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "config")]
#[derive(Debug, Default, serde::Deserialize)]
struct SettingsFile {
    #[serde(default)]
    display: DisplaySettings,
}

#[cfg(feature = "config")]
impl DisplaySettings {
    /// Reads the `[display]` table of a TOML document; missing keys keep their defaults.
    ///
    /// ```rust
    /// use dimscalar_core::DisplaySettings;
    ///
    /// let settings = DisplaySettings::from_toml_str("[display]\nprecision = 1\n").unwrap();
    /// assert_eq!(settings.precision, 1);
    /// assert_eq!(settings.fixed_max, 1e7);
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: SettingsFile = toml::from_str(content).map_err(|e| {
            QuantityError::Configuration(format!("Failed to parse display settings: {}", e))
        })?;
        Ok(file.display)
    }

    /// Reads display settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            QuantityError::Configuration(format!(
                "Failed to read display settings {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// As [`DisplaySettings::from_file`], falling back to the defaults when the file cannot be used.
    pub fn from_file_or_default<P: AsRef<Path>>(path: P) -> Self {
        Self::from_file(path).unwrap_or_else(|e| {
            log::warn!("{}; using default display settings", e);
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_and_scientific_ranges() {
        let s = DisplaySettings::default();
        assert_eq!(s.format_number(0.0), "0.000");
        assert_eq!(s.format_number(-0.0), "-0.000");
        assert_eq!(s.format_number(0.001), "0.001");
        assert_eq!(s.format_number(0.0005), "5.000e-4");
        assert_eq!(s.format_number(9_999_999.0), "9999999.000");
        assert_eq!(s.format_number(1.0e7), "1.000e7");
        assert_eq!(s.format_number(-12.25), "-12.250");
    }

    #[test]
    fn non_finite_values() {
        let s = DisplaySettings::default();
        assert_eq!(s.format_number(f32::NAN), "NaN");
        assert_eq!(s.format_number(f32::INFINITY), "inf");
        assert_eq!(s.format_number(f32::NEG_INFINITY), "-inf");
    }

    #[test]
    fn scalar_layout() {
        let s = DisplaySettings {
            precision: 1,
            ..DisplaySettings::default()
        };
        assert_eq!(format_scalar(&s, None, 2.0, Some("m")), "2.0 m");
        assert_eq!(format_scalar(&s, Some(Polarity::Absolute), 2.0, Some("m")), "Abs 2.0 m");
        assert_eq!(format_scalar(&s, Some(Polarity::Relative), 2.0, None), "Rel 2.0");
        assert_eq!(format_scalar(&s, None, 2.0, Some("")), "2.0");
    }

    #[cfg(feature = "config")]
    #[test]
    fn toml_settings() {
        let s = DisplaySettings::from_toml_str("[display]\nprecision = 5\nfixed_min = 0.1\n").unwrap();
        assert_eq!(s.precision, 5);
        assert_eq!(s.fixed_min, 0.1);
        assert_eq!(s.fixed_max, 1e7);
        assert_eq!(DisplaySettings::from_toml_str("").unwrap(), DisplaySettings::default());
        assert!(matches!(
            DisplaySettings::from_toml_str("[display]\nprecision = \"two\""),
            Err(QuantityError::Configuration(_))
        ));
        assert_eq!(
            DisplaySettings::from_file_or_default("/nonexistent/display.toml"),
            DisplaySettings::default()
        );
    }
}
