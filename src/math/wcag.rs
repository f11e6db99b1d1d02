use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ContrastError;

/// Convert sRGB channel (0-255) to linear light value.
/// sRGB -> linear: if V <= 0.03928: V/12.92, else ((V+0.055)/1.055)^2.4
pub fn srgb_to_linear(channel: u8) -> f64 {
    let v = channel as f64 / 255.0;
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Calculate relative luminance per WCAG 2.1.
/// L = 0.2126 * R + 0.7152 * G + 0.0722 * B (linear channels)
pub fn relative_luminance((r, g, b): (u8, u8, u8)) -> f64 {
    0.2126 * srgb_to_linear(r) + 0.7152 * srgb_to_linear(g) + 0.0722 * srgb_to_linear(b)
}

/// Calculate WCAG 2.1 contrast ratio between two canonical `#rrggbb` colors.
/// ratio = (L1 + 0.05) / (L2 + 0.05) where L1 >= L2. Unrounded.
pub fn contrast_ratio(hex1: &str, hex2: &str) -> Result<f64, ContrastError> {
    let l1 = relative_luminance(super::hex::hex_to_rgb(hex1)?);
    let l2 = relative_luminance(super::hex::hex_to_rgb(hex2)?);
    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    Ok((lighter + 0.05) / (darker + 0.05))
}

/// Round a ratio to 2 decimal places for display ("7.56").
pub fn round_ratio(ratio: f64) -> f64 {
    (ratio * 100.0).round() / 100.0
}

/// `contrast_ratio` rounded to 2 decimals.
pub fn contrast_ratio_rounded(hex1: &str, hex2: &str) -> Result<f64, ContrastError> {
    contrast_ratio(hex1, hex2).map(round_ratio)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WcagLevel {
    AA,
    AAA,
}

impl WcagLevel {
    /// Minimum ratio for this level and text-size class.
    pub fn min_ratio(self, is_large_text: bool) -> f64 {
        match (self, is_large_text) {
            (WcagLevel::AA, true) => 3.0,
            (WcagLevel::AA, false) => 4.5,
            (WcagLevel::AAA, true) => 4.5,
            (WcagLevel::AAA, false) => 7.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WcagLevel::AA => "AA",
            WcagLevel::AAA => "AAA",
        }
    }
}

impl FromStr for WcagLevel {
    type Err = ContrastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AA" => Ok(WcagLevel::AA),
            "AAA" => Ok(WcagLevel::AAA),
            other => Err(ContrastError::UnknownComplianceLevel(other.to_string())),
        }
    }
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn is_wcag_compliant(level: WcagLevel, is_large_text: bool, ratio: f64) -> bool {
    ratio >= level.min_ratio(is_large_text)
}

/// String-level entry point. Unknown levels are rejected instead of reported as failing.
pub fn check_wcag_compliance(
    level: &str,
    is_large_text: bool,
    ratio: f64,
) -> Result<bool, ContrastError> {
    let level: WcagLevel = level.parse()?;
    Ok(is_wcag_compliant(level, is_large_text, ratio))
}

/// Determine pass/fail for all WCAG thresholds.
pub fn check_wcag_thresholds(ratio: f64, is_large_text: bool) -> WcagResult {
    WcagResult {
        pass_aa: is_wcag_compliant(WcagLevel::AA, is_large_text, ratio),
        pass_aa_large: is_wcag_compliant(WcagLevel::AA, true, ratio),
        pass_aaa: is_wcag_compliant(WcagLevel::AAA, is_large_text, ratio),
        pass_aaa_large: is_wcag_compliant(WcagLevel::AAA, true, ratio),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WcagResult {
    pub pass_aa: bool,
    pub pass_aa_large: bool,
    pub pass_aaa: bool,
    pub pass_aaa_large: bool,
}
