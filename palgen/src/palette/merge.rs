//! Merge and dedup step

use std::collections::HashMap;

use super::{ColorEntry, NamedColor};
use crate::error::Result;

/// Fold parsed palette entries into a map keyed by normalized identifier.
///
/// A duplicate identifier replaces the prior entry wholesale, so whichever
/// source is consumed last is authoritative for shared names. Parse errors
/// from either source propagate out unchanged.
pub fn merge<I>(entries: I) -> Result<HashMap<String, ColorEntry>>
where
    I: IntoIterator<Item = Result<NamedColor>>,
{
    let mut merged = HashMap::new();
    for entry in entries {
        let (parts, rgb) = entry?;
        let entry = ColorEntry::from_parts(&parts, rgb);
        merged.insert(entry.identifier.clone(), entry);
    }
    Ok(merged)
}
