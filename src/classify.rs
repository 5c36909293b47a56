//! Filename classification.
//!
//! Filenames (extension already stripped) carry all the identity the
//! engine uses. Two independent grammars exist: the multi-collection
//! grammar (`classify`) and the pretty-display grammar
//! (`classify_pretty`). Both must match the original naming scheme
//! exactly; see the crate README for the conventions.

/// Classification under the multi-collection grammar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PosterKind {
    /// Name ends with "Collection" or "Productions": the single tall
    /// poster for the whole display.
    Primary,
    /// The literal name "Background": blurred canvas backdrop.
    Background,
    /// "<name> <integer>": a numbered member of a named collection.
    NumberedMember { collection: String, number: u32 },
    /// Anything else: a standalone poster.
    Standalone { name: String },
}

/// Classification under the pretty-display grammar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PrettyKind {
    /// Name ends with "Collection" or "Productions".
    Primary,
    /// Contains "Season ", "Specials", or "Special": excluded from the
    /// display.
    SeasonOrSpecial,
    /// A main show or movie poster.
    Parent,
}

pub fn is_primary_name(stem: &str) -> bool {
    stem.ends_with("Collection") || stem.ends_with("Productions")
}

/// Classify a bare filename (no extension) under the multi-collection
/// grammar.
pub fn classify(stem: &str) -> PosterKind {
    if is_primary_name(stem) {
        return PosterKind::Primary;
    }
    if stem == "Background" {
        return PosterKind::Background;
    }
    if let Some((collection, number)) = split_trailing_number(stem) {
        return PosterKind::NumberedMember {
            collection: collection.to_string(),
            number,
        };
    }
    PosterKind::Standalone {
        name: stem.to_string(),
    }
}

/// Classify a bare filename under the pretty-display grammar.
pub fn classify_pretty(stem: &str) -> PrettyKind {
    if is_primary_name(stem) {
        return PrettyKind::Primary;
    }
    if stem.contains("Season ") || stem.contains("Specials") || stem.contains("Special") {
        return PrettyKind::SeasonOrSpecial;
    }
    PrettyKind::Parent
}

/// Split "<name> <integer>" into the trimmed name and the parsed
/// trailing number. Returns None when the stem has no whitespace-
/// separated trailing integer or the name part would be empty.
fn split_trailing_number(stem: &str) -> Option<(&str, u32)> {
    let digits_at = stem.rfind(|c: char| !c.is_ascii_digit()).map(|i| {
        // rfind returns a char boundary; the digit run starts after it
        i + stem[i..].chars().next().map_or(1, char::len_utf8)
    })?;
    let digits = &stem[digits_at..];
    if digits.is_empty() {
        return None;
    }
    let before = &stem[..digits_at];
    if !before.ends_with(|c: char| c.is_whitespace()) {
        return None;
    }
    let name = before.trim_end();
    if name.is_empty() {
        return None;
    }
    let number = digits.parse::<u32>().ok()?;
    Some((name, number))
}

/// Extract the "<show name> (YYYY)" anchor, i.e. everything up to and
/// including the first four-digit parenthesized year. Falls back to the
/// whole stem when no year is present.
pub fn extract_year_anchor(stem: &str) -> &str {
    let bytes = stem.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b != b'(' {
            continue;
        }
        let rest = &bytes[i + 1..];
        if rest.len() >= 5
            && rest[..4].iter().all(u8::is_ascii_digit)
            && rest[4] == b')'
        {
            return &stem[..i + 6];
        }
    }
    stem
}
