pub mod color_parse;
pub mod hex;
pub mod status;
pub mod wcag;

pub use hex::{hex_to_rgb, normalize_hex};
pub use status::{classify_status, ContrastStatus};
pub use wcag::{
    check_wcag_compliance, check_wcag_thresholds, contrast_ratio, contrast_ratio_rounded,
    is_wcag_compliant, relative_luminance, round_ratio, WcagLevel, WcagResult,
};
