//! Per-column change detection.
//!
//! Pure comparison of a declared column against its live counterpart; no I/O.
//! Columns flagged skip-migration are filtered out before this module is
//! consulted. Primary-key columns are exempt from unique/default/comment/
//! nullability alteration and only become alter-eligible through the
//! size/precision rules.

use keel_schema::ColumnDef;
use regex_lite::Regex;

use crate::inspect::LiveColumn;

/// Extract the numeral embedded in a live type name (`"varchar(255)"` → 255).
///
/// Requires a non-digit immediately before the numeral, and returns `None`
/// unless exactly one numeral appears in the string.
pub fn live_type_numeral(type_name: &str) -> Option<u32> {
    single_numeral(r"[^\d](\d+)[^\d]?", type_name)
}

/// Extract the numeral embedded in a declared type string.
///
/// Unlike [`live_type_numeral`] the numeral may sit at the start of the
/// string. Returns `None` unless exactly one numeral appears.
pub fn declared_type_numeral(type_str: &str) -> Option<u32> {
    single_numeral(r"[^\d]*(\d+)[^\d]?", type_str)
}

fn single_numeral(pattern: &str, haystack: &str) -> Option<u32> {
    let re = Regex::new(pattern).unwrap();
    let mut captures = re.captures_iter(haystack);
    let first = captures.next()?;
    if captures.next().is_some() {
        return None;
    }
    first.get(1)?.as_str().parse().ok()
}

/// Whether `type_str` embeds `numeral` as a distinct number (non-digit
/// boundaries on both sides).
fn embeds_numeral(type_str: &str, numeral: u32) -> bool {
    match Regex::new(&format!("[^0-9]{}[^0-9]", numeral)) {
        Ok(re) => re.is_match(type_str),
        Err(_) => false,
    }
}

/// Decide whether the live column needs an ALTER to match the declaration.
///
/// Each dimension is tested independently; any hit means alter. Nullability
/// is one-directional: only "database allows NULL, model forbids it" is
/// corrected, loosening is never auto-applied.
pub fn requires_alter(decl: &ColumnDef, live: &LiveColumn) -> bool {
    let mut alter = false;

    // Size: compare reported length against declared size, falling back to
    // the numerals embedded in the type strings when one side is unreported.
    let length = live.length.unwrap_or(0);
    let size = decl.size.unwrap_or(0);
    if length != size {
        if length > 0 && size > 0 {
            alter = true;
        } else {
            let real = live_type_numeral(&live.type_name.to_lowercase());
            let full = declared_type_numeral(&decl.db_type.to_lowercase());
            if (real.is_some_and(|n| n != size) || !decl.primary_key)
                && full.is_some_and(|n| n != length)
                && live.length.is_some()
            {
                alter = true;
            }
        }
    }

    // Precision: only when the declared type string spells the precision out.
    let decl_precision = decl.precision.unwrap_or(0);
    if let Some(live_precision) = live.precision {
        if live_precision != decl_precision && embeds_numeral(&decl.db_type, decl_precision) {
            alter = true;
        }
    }

    // Nullability: database allows NULL but the model forbids it.
    if let Some(nullable) = live.nullable {
        if nullable == decl.not_null && !decl.primary_key && nullable {
            alter = true;
        }
    }

    // Uniqueness.
    if let Some(unique) = live.unique {
        if unique != decl.unique && !decl.primary_key {
            alter = true;
        }
    }

    // Default value.
    if let Some(default) = &live.default {
        if default.as_str() != decl.default.as_deref().unwrap_or("") && !decl.primary_key {
            alter = true;
        }
    }

    // Comment.
    if let Some(comment) = &live.comment {
        if comment.as_str() != decl.comment.as_deref().unwrap_or("") && !decl.primary_key {
            alter = true;
        }
    }

    alter
}
