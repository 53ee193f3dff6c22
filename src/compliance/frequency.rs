use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Monthly quota applied when a name resolves to nothing.
pub const DEFAULT_PER_MONTH: u32 = 1;

/// Meeting cadence configured for a leader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeetingFrequency {
    Weekly,
    Biweekly,
    Monthly,
}

impl MeetingFrequency {
    pub const fn per_month(self) -> u32 {
        match self {
            MeetingFrequency::Weekly => 4,
            MeetingFrequency::Biweekly => 2,
            MeetingFrequency::Monthly => 1,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            MeetingFrequency::Weekly => "weekly",
            MeetingFrequency::Biweekly => "biweekly",
            MeetingFrequency::Monthly => "monthly",
        }
    }
}

/// How a display name was matched against the cadence table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchRule {
    Exact,
    EdgeTokens,
    Substring,
    SingleToken,
    Default,
}

/// Outcome of a cadence lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedCadence {
    pub required_per_month: u32,
    pub matched: MatchRule,
}

#[derive(Debug, Clone)]
struct CadenceEntry {
    normalized: String,
    frequency: MeetingFrequency,
}

/// Maps free-text leader names to configured meeting cadences.
///
/// Matching is deliberately forgiving — the table is hand-maintained and the
/// names come from a directory export — but a miss is never an error: it
/// falls back to [`DEFAULT_PER_MONTH`] and is logged so table gaps stay
/// discoverable.
#[derive(Debug, Clone, Default)]
pub struct FrequencyResolver {
    table: Vec<CadenceEntry>,
}

impl FrequencyResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, name: &str, frequency: MeetingFrequency) -> Self {
        let normalized = normalize_name(name);
        if !normalized.is_empty() {
            self.table.push(CadenceEntry {
                normalized,
                frequency,
            });
        }
        self
    }

    pub fn from_entries<'a>(entries: impl IntoIterator<Item = (&'a str, MeetingFrequency)>) -> Self {
        entries
            .into_iter()
            .fold(Self::new(), |resolver, (name, frequency)| {
                resolver.with_entry(name, frequency)
            })
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Resolve a display name to its monthly sync quota.
    ///
    /// Attempts, in order: exact normalized match, first+last token match,
    /// substring containment in either direction, and for one-token names a
    /// comparison against entry first tokens. Blank names short-circuit to
    /// the default without a lookup.
    pub fn resolve(&self, display_name: &str) -> ResolvedCadence {
        let needle = normalize_name(display_name);
        if needle.is_empty() {
            return ResolvedCadence {
                required_per_month: DEFAULT_PER_MONTH,
                matched: MatchRule::Default,
            };
        }

        if let Some(entry) = self.table.iter().find(|entry| entry.normalized == needle) {
            return resolved(entry, MatchRule::Exact);
        }

        let needle_tokens: Vec<&str> = needle.split_whitespace().collect();
        if needle_tokens.len() >= 2 {
            let needle_edges = edge_tokens(&needle_tokens);
            if let Some(entry) = self.table.iter().find(|entry| {
                let tokens: Vec<&str> = entry.normalized.split_whitespace().collect();
                edge_tokens(&tokens) == needle_edges
            }) {
                debug!(name = display_name, "cadence matched on first/last name tokens");
                return resolved(entry, MatchRule::EdgeTokens);
            }
        }

        if let Some(entry) = self.table.iter().find(|entry| {
            entry.normalized.contains(&needle) || needle.contains(&entry.normalized)
        }) {
            debug!(name = display_name, "cadence matched on substring containment");
            return resolved(entry, MatchRule::Substring);
        }

        if let [token] = needle_tokens.as_slice() {
            if let Some(entry) = self
                .table
                .iter()
                .find(|entry| entry.normalized.split_whitespace().next() == Some(token))
            {
                debug!(name = display_name, "cadence matched on first token");
                return resolved(entry, MatchRule::SingleToken);
            }
        }

        warn!(
            name = display_name,
            "no cadence entry matched; defaulting to one sync per month"
        );
        ResolvedCadence {
            required_per_month: DEFAULT_PER_MONTH,
            matched: MatchRule::Default,
        }
    }
}

fn resolved(entry: &CadenceEntry, matched: MatchRule) -> ResolvedCadence {
    ResolvedCadence {
        required_per_month: entry.frequency.per_month(),
        matched,
    }
}

fn edge_tokens<'a>(tokens: &[&'a str]) -> (&'a str, &'a str) {
    let first = tokens.first().copied().unwrap_or_default();
    let last = tokens.last().copied().unwrap_or(first);
    (first, last)
}

/// Case-fold, strip diacritics, and collapse whitespace.
pub(crate) fn normalize_name(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    cleaned
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
        .chars()
        .map(fold_diacritic)
        .collect()
}

fn fold_diacritic(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ý' | 'ÿ' => 'y',
        'ç' => 'c',
        'ñ' => 'n',
        _ => c,
    }
}
