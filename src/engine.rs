use rayon::prelude::*;

use crate::math;
use crate::types::{ColorPairInput, PairResult};

/// Check many bg/fg pairs in parallel.
///
/// Each pair is normalized then evaluated independently; an invalid color
/// yields a result carrying `error` instead of aborting the batch.
/// Output order matches input order.
pub fn check_pairs(pairs: &[ColorPairInput]) -> Vec<PairResult> {
    pairs.par_iter().map(check_pair).collect()
}

fn check_pair(pair: &ColorPairInput) -> PairResult {
    let is_large = pair.is_large_text.unwrap_or(false);
    let resolved = math::normalize_hex(&pair.bg).and_then(|bg| {
        let fg = math::normalize_hex(&pair.fg)?;
        let ratio = math::contrast_ratio(&bg, &fg)?;
        Ok((bg, fg, ratio))
    });

    match resolved {
        Ok((bg, fg, ratio)) => {
            let wcag = math::check_wcag_thresholds(ratio, is_large);
            PairResult {
                bg: Some(bg),
                fg: Some(fg),
                is_large_text: is_large,
                ratio: Some(math::round_ratio(ratio)),
                status: Some(math::classify_status(ratio).to_string()),
                pass_aa: wcag.pass_aa,
                pass_aa_large: wcag.pass_aa_large,
                pass_aaa: wcag.pass_aaa,
                pass_aaa_large: wcag.pass_aaa_large,
                error: None,
            }
        }
        Err(err) => {
            tracing::debug!(bg = %pair.bg, fg = %pair.fg, %err, "skipping pair");
            PairResult {
                bg: None,
                fg: None,
                is_large_text: is_large,
                ratio: None,
                status: None,
                pass_aa: false,
                pass_aa_large: false,
                pass_aaa: false,
                pass_aaa_large: false,
                error: Some(err.to_string()),
            }
        }
    }
}
