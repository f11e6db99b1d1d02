#[macro_use]
extern crate napi_derive;

pub mod calculator;
pub mod engine;
pub mod error;
pub mod i18n;
pub mod math;
pub mod types;

use calculator::ContrastCalculator;
use types::{CalculatorOptionsJs, ColorPairInput, ContrastReportJs, PairResult, RgbJs};

#[napi]
pub fn health_check() -> String {
    "contrast-calc-native ok".to_string()
}

/// Canonical `#rrggbb` lowercase, or throws on invalid input.
#[napi]
pub fn normalize_hex(raw: String) -> napi::Result<String> {
    Ok(math::normalize_hex(&raw)?)
}

#[napi]
pub fn hex_to_rgb(hex: String) -> napi::Result<RgbJs> {
    let (r, g, b) = math::hex_to_rgb(&hex)?;
    Ok(RgbJs {
        r: r.into(),
        g: g.into(),
        b: b.into(),
    })
}

#[napi]
pub fn relative_luminance(hex: String) -> napi::Result<f64> {
    Ok(math::relative_luminance(math::hex_to_rgb(&hex)?))
}

#[napi]
pub fn contrast_ratio(hex1: String, hex2: String) -> napi::Result<f64> {
    Ok(math::contrast_ratio(&hex1, &hex2)?)
}

#[napi]
pub fn contrast_ratio_rounded(hex1: String, hex2: String) -> napi::Result<f64> {
    Ok(math::contrast_ratio_rounded(&hex1, &hex2)?)
}

#[napi]
pub fn classify_status(ratio: f64) -> String {
    math::classify_status(ratio).to_string()
}

/// Throws for any level other than "AA" / "AAA".
#[napi]
pub fn is_wcag_compliant(level: String, is_large_text: bool, ratio: f64) -> napi::Result<bool> {
    Ok(math::check_wcag_compliance(&level, is_large_text, ratio)?)
}

/// Any opaque CSS color (hex, rgb(), hsl(), named) to `#rrggbb`.
#[napi]
pub fn to_hex(value: String) -> napi::Result<String> {
    Ok(math::color_parse::to_hex(&value)?)
}

#[napi]
pub fn check_pairs(pairs: Vec<ColorPairInput>) -> Vec<PairResult> {
    engine::check_pairs(&pairs)
}

/// Widget state for JS hosts. Every mutating call returns the fresh report,
/// which the host dispatches as its change event.
#[napi(js_name = "ContrastCalculator")]
pub struct JsContrastCalculator {
    inner: ContrastCalculator,
}

#[napi]
impl JsContrastCalculator {
    #[napi(constructor)]
    pub fn new(options: Option<CalculatorOptionsJs>) -> napi::Result<Self> {
        let inner = ContrastCalculator::new(options.unwrap_or_default().into())?;
        Ok(Self { inner })
    }

    #[napi(getter)]
    pub fn background_color(&self) -> String {
        self.inner.background().to_string()
    }

    #[napi(getter)]
    pub fn foreground_color(&self) -> String {
        self.inner.foreground().to_string()
    }

    #[napi(getter)]
    pub fn locale(&self) -> String {
        self.inner.locale().as_str().to_string()
    }

    #[napi]
    pub fn set_locale(&mut self, locale: String) {
        self.inner.set_locale(locale.parse().unwrap_or_default());
    }

    #[napi]
    pub fn set_background(&mut self, value: String) -> napi::Result<ContrastReportJs> {
        Ok(self.inner.set_background(&value)?.into())
    }

    #[napi]
    pub fn set_foreground(&mut self, value: String) -> napi::Result<ContrastReportJs> {
        Ok(self.inner.set_foreground(&value)?.into())
    }

    #[napi]
    pub fn swap(&mut self) -> ContrastReportJs {
        self.inner.swap().into()
    }

    #[napi]
    pub fn evaluate(&self) -> ContrastReportJs {
        self.inner.evaluate().into()
    }

    #[napi]
    pub fn label(&self) -> String {
        self.inner.label()
    }

    /// Localized UI string for `key`; unknown keys are returned as-is.
    #[napi]
    pub fn message(&self, key: String) -> String {
        self.inner.locale().message(&key).to_string()
    }
}
