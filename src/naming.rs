use crate::attachment::attachment_of;
use crate::config::DEFAULT_PRIMARY_RETENTION;
use crate::layer::{Position, QuoteOption, home_index};

/// One decimal place, trailing ".0" trimmed: 1.0 → "1", 1.5 → "1.5".
fn scaled(value: f64) -> String {
    let s = format!("{value:.1}");
    match s.strip_suffix(".0") {
        Some(trimmed) => trimmed.to_string(),
        None => s,
    }
}

/// Compact monetary string for display names and worksheet columns:
/// `$5M`, `$2.5M`, `$25K`, `$750`.
pub fn compact_money(amount: f64) -> String {
    if amount >= 1_000_000.0 {
        format!("${}M", scaled(amount / 1_000_000.0))
    } else if amount >= 1_000.0 {
        format!("${}K", scaled(amount / 1_000.0))
    } else {
        format!("${}", scaled(amount))
    }
}

/// Canonical display name of a quoting option, derived from its tower
/// shape: `"$5M xs $5M"`, `"$1M x $25K"`, `"$4M po $10M xs $5M"`.
///
/// The name describes the home carrier's layer; a tower with no home
/// layer falls back to its first layer, and an empty tower names itself
/// the literal `"Option"`. Deterministic, so callers that materialize it
/// into a stored `quote_name` must recompute it after any tower or
/// retention edit — the engine never reads the cached value back.
pub fn name_of(quote: &QuoteOption) -> String {
    if quote.tower.is_empty() {
        return "Option".to_string();
    }
    let index = home_index(&quote.tower).unwrap_or(0);
    let layer = &quote.tower[index];

    let mut name = compact_money(layer.limit);
    if let Some(band) = layer.band_value() {
        name.push_str(&format!(" po {}", compact_money(band)));
    }

    match quote.position {
        Position::Excess => {
            let attachment = attachment_of(&quote.tower, index);
            format!("{name} xs {}", compact_money(attachment))
        }
        Position::Primary => {
            let retention = quote.tower[0]
                .retention
                .or(quote.primary_retention)
                .unwrap_or(DEFAULT_PRIMARY_RETENTION);
            format!("{name} x {}", compact_money(retention))
        }
    }
}
