//! Grouping and ordering of classified posters.
//!
//! Collections are ordered largest-first so the tallest columns pack
//! toward the left of the display; standalones and pretty-display
//! parents sort by name, the latter with a natural key so "Show 2"
//! lands before "Show 12".

use std::cmp::Reverse;
use std::collections::BTreeMap;

use crate::classify;
use crate::model::{Collection, Grouped, PosterRef};

/// Group numbered members into collections and order everything.
///
/// Members sort by sequence number ascending (stable, so callers that
/// feed duplicate numbers keep their enumeration order). Collections
/// sort by descending size, ties alphabetically on the raw name;
/// standalones sort alphabetically. Both comparisons are case-sensitive
/// byte order, no locale folding.
pub fn group_posters(posters: Vec<PosterRef>) -> Grouped {
    let mut by_name: BTreeMap<String, Vec<PosterRef>> = BTreeMap::new();
    let mut standalones = Vec::new();

    for poster in posters {
        match poster.sequence_number {
            Some(_) => by_name
                .entry(poster.display_name.clone())
                .or_default()
                .push(poster),
            None => standalones.push(poster),
        }
    }

    let mut collections: Vec<Collection> = by_name
        .into_iter()
        .map(|(name, mut members)| {
            members.sort_by_key(|m| m.sequence_number);
            Collection { name, members }
        })
        .collect();
    collections.sort_by(|a, b| {
        (Reverse(a.members.len()), &a.name).cmp(&(Reverse(b.members.len()), &b.name))
    });

    standalones.sort_by(|a, b| a.display_name.cmp(&b.display_name));

    Grouped {
        collections,
        standalones,
    }
}

/// One segment of a natural sort key: digit runs compare numerically,
/// everything else compares as text. Numbers order before text.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum NaturalPart {
    Number(u64),
    Text(String),
}

/// Natural sort key for a pretty-display filename stem.
///
/// The year anchor ("Name (YYYY)") is extracted first, one leading
/// article among "the "/"a "/"an " is stripped (case-insensitive, first
/// match only), the remainder is lowercased and split into alternating
/// text/digit runs. The original stem breaks ties.
pub fn natural_key(stem: &str) -> (Vec<NaturalPart>, String) {
    let anchored = classify::extract_year_anchor(stem);
    let stripped = strip_leading_article(anchored).to_lowercase();
    (split_natural(&stripped), stem.to_string())
}

fn strip_leading_article(name: &str) -> &str {
    for article in ["the ", "a ", "an "] {
        if let Some(head) = name.get(..article.len())
            && head.eq_ignore_ascii_case(article)
        {
            return &name[article.len()..];
        }
    }
    name
}

fn split_natural(text: &str) -> Vec<NaturalPart> {
    let mut parts = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        let in_digits = rest.starts_with(|c: char| c.is_ascii_digit());
        let split = rest
            .find(|c: char| c.is_ascii_digit() != in_digits)
            .unwrap_or(rest.len());
        let (run, tail) = rest.split_at(split);
        if in_digits {
            // absurdly long digit runs saturate rather than overflow
            let n = run.parse::<u64>().unwrap_or(u64::MAX);
            parts.push(NaturalPart::Number(n));
        } else {
            parts.push(NaturalPart::Text(run.to_string()));
        }
        rest = tail;
    }
    parts
}

/// Sort pretty-display parent posters in place by natural key.
pub fn sort_parents(parents: &mut [PosterRef]) {
    parents.sort_by_cached_key(|p| natural_key(&p.display_name));
}
