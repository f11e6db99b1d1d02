use serde::{Deserialize, Serialize};

use crate::error::ContrastError;
use crate::i18n::Locale;
use crate::math::{self, ContrastStatus, WcagLevel};

pub const DEFAULT_BG: &str = "#ca8b8a";
pub const DEFAULT_FG: &str = "#010000";

/// Initial state for a calculator. Omitted fields take the defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CalculatorOptions {
    pub bg: Option<String>,
    pub fg: Option<String>,
    pub locale: Option<Locale>,
}

impl CalculatorOptions {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Everything the host needs to render after a color change.
/// Also serves as the change notification payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContrastReport {
    pub bg: String,
    pub fg: String,
    /// Unrounded; status and badges derive from this value.
    pub ratio: f64,
    pub ratio_rounded: f64,
    pub status: ContrastStatus,
    pub large_aa: bool,
    pub large_aaa: bool,
    pub small_aa: bool,
    pub small_aaa: bool,
}

impl ContrastReport {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Background/foreground pair plus display locale.
///
/// Colors are always canonical `#rrggbb`; every mutation goes through
/// `normalize_hex` and invalid input leaves the state untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct ContrastCalculator {
    bg: String,
    fg: String,
    locale: Locale,
}

impl ContrastCalculator {
    pub fn new(options: CalculatorOptions) -> Result<Self, ContrastError> {
        let bg = math::normalize_hex(options.bg.as_deref().unwrap_or(DEFAULT_BG))?;
        let fg = math::normalize_hex(options.fg.as_deref().unwrap_or(DEFAULT_FG))?;
        Ok(Self {
            bg,
            fg,
            locale: options.locale.unwrap_or_default(),
        })
    }

    pub fn background(&self) -> &str {
        &self.bg
    }

    pub fn foreground(&self) -> &str {
        &self.fg
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    pub fn set_background(&mut self, raw: &str) -> Result<ContrastReport, ContrastError> {
        self.bg = normalize_input("background", raw)?;
        Ok(self.evaluate())
    }

    pub fn set_foreground(&mut self, raw: &str) -> Result<ContrastReport, ContrastError> {
        self.fg = normalize_input("foreground", raw)?;
        Ok(self.evaluate())
    }

    pub fn swap(&mut self) -> ContrastReport {
        std::mem::swap(&mut self.bg, &mut self.fg);
        self.evaluate()
    }

    pub fn evaluate(&self) -> ContrastReport {
        let ratio = ratio_of_canonical(&self.bg, &self.fg);
        let status = math::classify_status(ratio);
        tracing::trace!(bg = %self.bg, fg = %self.fg, ratio, %status, "evaluated contrast");

        ContrastReport {
            bg: self.bg.clone(),
            fg: self.fg.clone(),
            ratio,
            ratio_rounded: math::round_ratio(ratio),
            status,
            large_aa: math::is_wcag_compliant(WcagLevel::AA, true, ratio),
            large_aaa: math::is_wcag_compliant(WcagLevel::AAA, true, ratio),
            small_aa: math::is_wcag_compliant(WcagLevel::AA, false, ratio),
            small_aaa: math::is_wcag_compliant(WcagLevel::AAA, false, ratio),
        }
    }

    /// Localized result line, e.g. `7,56:1 - HERVORRAGEND`.
    pub fn label(&self) -> String {
        let report = self.evaluate();
        format!(
            "{}:1 - {}",
            self.locale.format_ratio(report.ratio),
            self.locale.status_label(report.status)
        )
    }
}

fn normalize_input(which: &str, raw: &str) -> Result<String, ContrastError> {
    math::normalize_hex(raw).map_err(|err| {
        tracing::debug!(which, input = raw, "rejected color input");
        err
    })
}

// Both fields only ever hold normalize_hex output, so parsing cannot fail.
fn ratio_of_canonical(bg: &str, fg: &str) -> f64 {
    math::contrast_ratio(bg, fg).unwrap_or(1.0)
}
