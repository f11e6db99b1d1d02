use napi_derive::napi;

use crate::calculator::{CalculatorOptions, ContrastReport};

/// Calculator configuration as passed from JS. Locale is a tag ("de", "en").
#[napi(object)]
#[derive(Debug, Clone, Default)]
pub struct CalculatorOptionsJs {
    pub bg: Option<String>,
    pub fg: Option<String>,
    pub locale: Option<String>,
}

impl From<CalculatorOptionsJs> for CalculatorOptions {
    fn from(js: CalculatorOptionsJs) -> Self {
        CalculatorOptions {
            bg: js.bg,
            fg: js.fg,
            locale: js.locale.and_then(|tag| tag.parse().ok()),
        }
    }
}

/// NAPI-compatible ContrastReport; also the `detail` of the host's change event.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct ContrastReportJs {
    pub bg: String,
    pub fg: String,
    pub ratio: f64,
    pub ratio_rounded: f64,
    /// "EXCELLENT" | "GOOD" | "POOR" | "FAIL"
    pub status: String,
    pub large_aa: bool,
    pub large_aaa: bool,
    pub small_aa: bool,
    pub small_aaa: bool,
}

impl From<ContrastReport> for ContrastReportJs {
    fn from(report: ContrastReport) -> Self {
        ContrastReportJs {
            bg: report.bg,
            fg: report.fg,
            ratio: report.ratio,
            ratio_rounded: report.ratio_rounded,
            status: report.status.to_string(),
            large_aa: report.large_aa,
            large_aaa: report.large_aaa,
            small_aa: report.small_aa,
            small_aaa: report.small_aaa,
        }
    }
}

#[napi(object)]
#[derive(Debug, Clone)]
pub struct RgbJs {
    pub r: u32,
    pub g: u32,
    pub b: u32,
}

/// One bg/fg pair for batch checking. Colors are raw user input.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct ColorPairInput {
    pub bg: String,
    pub fg: String,
    pub is_large_text: Option<bool>,
}

/// Batch result. `error` is set (and colors/ratio are None) when either color is invalid.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct PairResult {
    pub bg: Option<String>,
    pub fg: Option<String>,
    pub is_large_text: bool,
    /// Rounded to 2 decimals
    pub ratio: Option<f64>,
    pub status: Option<String>,
    pub pass_aa: bool,
    pub pass_aa_large: bool,
    pub pass_aaa: bool,
    pub pass_aaa_large: bool,
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;

    #[test]
    fn options_locale_tag_parsed() {
        let opts: CalculatorOptions = CalculatorOptionsJs {
            bg: Some("#fff".to_string()),
            fg: None,
            locale: Some("en-GB".to_string()),
        }
        .into();
        assert_eq!(opts.bg.as_deref(), Some("#fff"));
        assert_eq!(opts.locale, Some(Locale::En));

        let opts: CalculatorOptions = CalculatorOptionsJs::default().into();
        assert_eq!(opts, CalculatorOptions::default());
    }
}
