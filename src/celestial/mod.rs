pub mod planets;

use crate::error::ValidationError;

use self::planets::{PlanetRecord, PLANETS};

// ── Name resolution ─────────────────────────────────────────────────

/// Trim, then titlecase the first character and lowercase the rest.
///
/// Multi-word names come out as "Alpha centauri", not "Alpha Centauri".
/// Every catalog key follows this form.
pub fn normalize_name(raw: &str) -> String {
    let trimmed = raw.trim();
    let first = match trimmed.chars().next() {
        Some(c) => c,
        None => return String::new(),
    };
    // Lowercase the whole string so a final sigma sees its left context.
    // A leading char is never a final sigma, so its lowercase is context free.
    let lower = trimmed.to_lowercase();
    let skip: usize = first.to_lowercase().map(char::len_utf8).sum();
    let mut name = titlecase(first);
    name.push_str(&lower[skip..]);
    name
}

/// Full Unicode titlecase mapping of one char.
fn titlecase(c: char) -> String {
    match c {
        'Ǆ' | 'ǅ' | 'ǆ' => "ǅ".to_string(),
        'Ǉ' | 'ǈ' | 'ǉ' => "ǈ".to_string(),
        'Ǌ' | 'ǋ' | 'ǌ' => "ǋ".to_string(),
        'Ǳ' | 'ǲ' | 'ǳ' => "ǲ".to_string(),
        'ŉ' => "\u{02BC}N".to_string(),
        // Georgian Mkhedruli uppercases to Mtavruli but titlecases to itself.
        '\u{10D0}'..='\u{10FF}' => c.to_string(),
        // Greek with ypogegrammeni titlecases to the prosgegrammeni form.
        '\u{1F80}'..='\u{1FAF}' => char::from_u32(c as u32 | 0x8).unwrap_or(c).to_string(),
        'ᾳ' | 'ᾼ' => "ᾼ".to_string(),
        'ῃ' | 'ῌ' => "ῌ".to_string(),
        'ῳ' | 'ῼ' => "ῼ".to_string(),
        _ => {
            let mut upper = c.to_uppercase();
            let mut title: String = upper.next().into_iter().collect();
            let rest: String = upper.collect();
            match rest.strip_suffix('\u{0399}') {
                Some(stem) if ('\u{1FB2}'..='\u{1FF7}').contains(&c) => {
                    title.push_str(stem);
                    title.push('\u{0345}');
                }
                _ => title.push_str(&rest.to_lowercase()),
            }
            title
        }
    }
}

/// Resolve a user-supplied planet name against the catalog.
/// On a miss the error carries `raw` untouched.
pub fn lookup(raw: &str) -> Result<&'static PlanetRecord, ValidationError> {
    let name = normalize_name(raw);
    match PLANETS.iter().find(|p| p.name == name) {
        Some(record) => {
            log::debug!("resolved {:?} -> {}", raw, record.name);
            Ok(record)
        }
        None => Err(ValidationError::UnknownPlanet(raw.to_string())),
    }
}

// ── Listing ─────────────────────────────────────────────────────────

/// Catalog names in table order. Call again to restart.
pub fn planet_names() -> impl ExactSizeIterator<Item = &'static str> + Clone {
    PLANETS.iter().map(|p| p.name)
}
