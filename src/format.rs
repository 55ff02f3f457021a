//! Locale-aware numeric label formatting.

use num_format::{Locale, ToFormattedString};

/// Map a user-provided locale tag to a `num_format::Locale` and its decimal
/// separator char.
///
/// Supported tags (case-insensitive): `en`, `us`, `en_US`, `de`, `de_DE`,
/// `german`, `fr`, `es`, `it`, `pt`, `nl`. Defaults to English.
pub fn map_locale(tag: &str) -> (&'static Locale, char) {
    match tag.to_lowercase().as_str() {
        "de" | "de_de" | "german" => (&Locale::de, ','),
        "fr" | "fr_fr" => (&Locale::fr, ','),
        "es" | "es_es" => (&Locale::es, ','),
        "it" | "it_it" => (&Locale::it, ','),
        "pt" | "pt_pt" | "pt_br" => (&Locale::pt, ','),
        "nl" | "nl_nl" => (&Locale::nl, ','),
        _ => (&Locale::en, '.'), // default
    }
}

/// Format a value with a fixed number of decimals, grouping the integer part
/// per locale (`30,000` vs `30.000`).
pub fn format_fixed(value: f64, decimals: usize, locale_tag: &str) -> String {
    let (locale, dec_sep) = map_locale(locale_tag);
    let rounded = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let int_val: u128 = int_part.parse().unwrap_or(0);

    let mut out = String::new();
    // Sign is dropped when everything rounds to zero.
    if value < 0.0 && (int_val > 0 || frac_part.chars().any(|c| c != '0')) {
        out.push('-');
    }
    out.push_str(&int_val.to_formatted_string(locale));
    if !frac_part.is_empty() {
        out.push(dec_sep);
        out.push_str(frac_part);
    }
    out
}
