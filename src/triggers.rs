//! Trigger word tables.
//!
//! A trigger word is a spelling that starts a new sentence when it appears as
//! a standalone token. Each language has its own set of spellings; case
//! variants are listed explicitly and matched exactly.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Embedded built-in triggers (format: code\tword\tword...)
static DEFAULT_TRIGGERS: &str = include_str!("data/triggers.tsv");

/// The built-in table, built on first use
static DEFAULT_TABLE: Lazy<TriggerTable> = Lazy::new(|| TriggerTableBuilder::with_defaults().build());

static EMPTY_SET: Lazy<TriggerSet> = Lazy::new(TriggerSet::new);

/// The set of trigger spellings for one language
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TriggerSet {
    words: BTreeSet<String>,
}

impl TriggerSet {
    /// Create an empty set
    pub fn new() -> Self {
        TriggerSet::default()
    }

    /// Exact, case-sensitive membership test
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of spellings in the set
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Spellings in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    fn insert(&mut self, word: &str) {
        self.words.insert(word.to_string());
    }
}

impl<S: AsRef<str>> FromIterator<S> for TriggerSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        TriggerSet {
            words: iter.into_iter().map(|s| s.as_ref().to_string()).collect(),
        }
    }
}

/// Mapping from language code to trigger set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TriggerTable {
    languages: BTreeMap<String, TriggerSet>,
}

impl TriggerTable {
    /// Create an empty table
    pub fn new() -> Self {
        TriggerTable::default()
    }

    /// The built-in table (English, Spanish, German, Russian)
    pub fn builtin() -> &'static TriggerTable {
        &*DEFAULT_TABLE
    }

    /// Trigger set for a language; empty for unknown codes
    pub fn lookup(&self, code: &str) -> &TriggerSet {
        self.languages.get(code).unwrap_or(&*EMPTY_SET)
    }

    /// Trigger set for a detection result; empty when nothing was detected
    pub fn lookup_detected(&self, code: Option<&str>) -> &TriggerSet {
        match code {
            Some(code) => self.lookup(code),
            None => &*EMPTY_SET,
        }
    }

    /// Language codes that have at least one trigger
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }

    /// Number of languages in the table
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Add every language of `other`, unioning sets that share a code
    pub fn merge(&mut self, other: &TriggerTable) {
        for (code, set) in &other.languages {
            let entry = self.languages.entry(code.clone()).or_default();
            for word in set.iter() {
                entry.insert(word);
            }
        }
    }
}

/// Builder for loading a TriggerTable from TSV data
pub struct TriggerTableBuilder {
    table: TriggerTable,
}

impl TriggerTableBuilder {
    /// Create a builder with no languages
    pub fn new() -> Self {
        TriggerTableBuilder {
            table: TriggerTable::new(),
        }
    }

    /// Create a builder preloaded with the built-in triggers
    pub fn with_defaults() -> Self {
        let mut builder = TriggerTableBuilder::new();
        builder.load_tsv(DEFAULT_TRIGGERS);
        builder
    }

    /// Load triggers from a TSV string (format: code\tword\tword...)
    ///
    /// Lines starting with # are comments. Lines without any word are skipped.
    pub fn load_tsv(&mut self, tsv_content: &str) -> &mut Self {
        for line in tsv_content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut parts = line.split('\t').map(str::trim);
            let code = match parts.next() {
                Some(code) if !code.is_empty() => code,
                _ => continue,
            };

            for word in parts.filter(|w| !w.is_empty()) {
                self.add(code, word);
            }
        }
        self
    }

    /// Add a single trigger spelling
    pub fn add(&mut self, code: &str, word: &str) -> &mut Self {
        self.table
            .languages
            .entry(code.to_string())
            .or_default()
            .insert(word);
        self
    }

    /// Drop every trigger of a language
    pub fn remove_language(&mut self, code: &str) -> &mut Self {
        self.table.languages.remove(code);
        self
    }

    /// Merge a whole table into the one being built
    pub fn merge(&mut self, other: &TriggerTable) -> &mut Self {
        self.table.merge(other);
        self
    }

    /// Get a reference to the table being built
    pub fn table(&self) -> &TriggerTable {
        &self.table
    }

    /// Build and return the TriggerTable
    pub fn build(self) -> TriggerTable {
        self.table
    }
}

impl Default for TriggerTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_sets() {
        let table = TriggerTable::builtin();

        let en: Vec<&str> = table.lookup("en").iter().collect();
        assert_eq!(en.len(), 6);
        for word in ["IF", "If", "if", "AND", "And", "and"] {
            assert!(table.lookup("en").contains(word), "missing {}", word);
        }
        for word in ["SI", "Si", "si", "Y", "y"] {
            assert!(table.lookup("es").contains(word));
        }
        for word in ["ODER", "Oder", "oder", "UND", "Und", "und"] {
            assert!(table.lookup("de").contains(word));
        }
        for word in ["ЕСЛИ", "Если", "если", "И", "и"] {
            assert!(table.lookup("ru").contains(word));
        }
        assert_eq!(table.lookup("es").len(), 5);
        assert_eq!(table.lookup("ru").len(), 5);
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_case_sensitive() {
        let en = TriggerTable::builtin().lookup("en");
        assert!(en.contains("and"));
        assert!(!en.contains("aNd"));
        assert!(!en.contains("andy"));
    }

    #[test]
    fn test_unknown_language() {
        let table = TriggerTable::builtin();
        assert!(table.lookup("fr").is_empty());
        assert!(table.lookup_detected(None).is_empty());
        assert!(!table.lookup_detected(Some("de")).is_empty());
    }

    #[test]
    fn test_builder_tsv() {
        let tsv = "# French\nfr\tet\tEt\tsi\n\nit\t\n";

        let mut builder = TriggerTableBuilder::new();
        builder.load_tsv(tsv);
        let table = builder.build();

        assert_eq!(table.len(), 1);
        assert!(table.lookup("fr").contains("Et"));
        assert!(table.lookup("it").is_empty());
    }

    #[test]
    fn test_builder_add_remove() {
        let mut builder = TriggerTableBuilder::with_defaults();
        builder.add("en", "but").remove_language("ru");
        let table = builder.build();

        assert!(table.lookup("en").contains("but"));
        assert!(table.lookup("ru").is_empty());
        assert_eq!(table.languages().collect::<Vec<_>>(), vec!["de", "en", "es"]);
    }

    #[test]
    fn test_merge() {
        let mut table = TriggerTableBuilder::new().build();
        let other: TriggerTable = serde_json::from_str(r#"{"en": ["and", "so"]}"#).unwrap();
        table.merge(&other);
        table.merge(TriggerTable::builtin());

        assert!(table.lookup("en").contains("so"));
        assert!(table.lookup("en").contains("IF"));
        assert_eq!(table.lookup("en").len(), 7);
    }

    #[test]
    fn test_serde_round_trip_shape() {
        let set: TriggerSet = ["y", "Y"].into_iter().collect();
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"["Y","y"]"#);
    }
}
