// Suggestion Builder
//
// Turns one computed result into ordered, human-readable advisories for the
// seller: what each floor means in practice during its window.

use crate::pricing::dates::format_date;
use crate::pricing::models::OutputRow;

/// Builds the ordered advisory strings for a computed row.
///
/// In order: the reference-floor advisory, the past-30-floor advisory, and an
/// infeasibility note echoing the reason. Any of the three may be absent; an
/// empty sequence is tolerated even though every row produced by the
/// calculator carries at least one floor or a reason.
pub fn build_suggestions(result: &OutputRow) -> Vec<String> {
    let mut tips = Vec::new();

    if let Some(floor) = result.ref_price_floor {
        tips.push(format!(
            "Keep the reference price at or above ${:.2}; between {} and {} do not cut the \
             price or promo price below that value, and avoid promoting at it for more than \
             70% of the window.",
            floor,
            format_date(result.ref_window_start),
            format_date(result.ref_window_end),
        ));
    }

    if let Some(floor) = result.past30_price_floor {
        tips.push(format!(
            "Between {} and {}, actual transaction prices must not fall below ${:.2}.",
            format_date(result.past_window_start),
            format_date(result.past_window_end),
            floor,
        ));
    }

    if !result.feasible {
        if let Some(ref reason) = result.reason {
            tips.push(format!("Note: {}", reason));
        }
    }

    tips
}
