//! Dictionary construction.
//!
//! A [`Dictionary`] is assembled once through a [`DictionaryBuilder`] and is
//! immutable afterwards; tokenizers share it through an `Arc`.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::DictionaryError;
use crate::token::PosTag;
use crate::trie::{Candidate, Trie, WordData};

/// Embedded base lexicon (function morphemes and common disclosure vocabulary)
static LEXICON: &str = include_str!("data/lexicon.tsv");

/// Compound terms of fund disclosures that must stay a single unit
pub const DOMAIN_TERMS: &[&str] = &[
    "투자신탁",
    "집합투자기구",
    "수익증권",
    "법령",
    "투자대상",
    "환매청구접수",
    "총보수･비용",
    "기타비용",
    "순자산",
    "연평잔액",
    "차감전",
    "고위험자산",
    "상장지수집합투자기구",
    "운용전문인력",
    "성과보수",
    "집합투자증권",
    "이자율변동",
    "가격변동",
    "투자증권",
];

/// Priority given to [`DOMAIN_TERMS`]
pub const DOMAIN_TERM_PRIORITY: i32 = 10;

/// Priority used when a TSV line omits it
pub const DEFAULT_PRIORITY: i32 = 0;

/// An immutable set of terms with their tags and priorities
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    trie: Trie,
}

impl Dictionary {
    /// The base lexicon plus the domain terms
    pub fn standard() -> Result<Dictionary, DictionaryError> {
        let mut builder = DictionaryBuilder::new();
        builder.load_lexicon()?;
        builder.register_domain_terms()?;
        Ok(builder.build())
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    /// Number of distinct terms
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    pub fn lookup(&self, term: &str) -> Option<&WordData> {
        self.trie.get_word_data(term)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.trie.has_word(term)
    }
}

/// Builder that collects dictionary entries before freezing them
#[derive(Debug, Default)]
pub struct DictionaryBuilder {
    trie: Trie,
}

impl DictionaryBuilder {
    pub fn new() -> Self {
        DictionaryBuilder::default()
    }

    /// Register a term; registering the same term and tag again replaces
    /// the priority.
    pub fn register(&mut self, term: &str, tag: PosTag, priority: i32) -> Result<(), DictionaryError> {
        if term.is_empty() {
            return Err(DictionaryError::EmptyTerm);
        }
        if term.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(DictionaryError::InvalidTerm(term.to_string()));
        }

        if let Some(old) = self.trie.add(term, Candidate { tag, priority }) {
            if old != priority {
                warn!(term, %tag, old, priority, "dictionary entry re-registered");
            }
        }
        Ok(())
    }

    /// Load entries from TSV (`term\ttag\tpriority`, `#` starts a comment).
    /// Returns the number of entries read.
    pub fn load_tsv(&mut self, content: &str) -> Result<usize, DictionaryError> {
        let mut count = 0;

        for (idx, line) in content.lines().enumerate() {
            let line_no = idx + 1;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut parts = line.split('\t').map(str::trim);
            let term = parts.next().unwrap_or_default();
            let tag_str = parts
                .next()
                .filter(|s| !s.is_empty())
                .ok_or(DictionaryError::MissingField {
                    line: line_no,
                    field: "tag",
                })?;
            let tag: PosTag = tag_str.parse().map_err(|_| DictionaryError::UnknownTag {
                line: line_no,
                tag: tag_str.to_string(),
            })?;
            let priority = match parts.next().filter(|s| !s.is_empty()) {
                Some(value) => value.parse::<i32>().map_err(|_| DictionaryError::InvalidPriority {
                    line: line_no,
                    value: value.to_string(),
                })?,
                None => DEFAULT_PRIORITY,
            };

            self.register(term, tag, priority)?;
            count += 1;
        }

        Ok(count)
    }

    /// Load a TSV dictionary file
    pub fn load_tsv_file(&mut self, path: impl AsRef<Path>) -> Result<usize, DictionaryError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let count = self.load_tsv(&content)?;
        debug!(path = %path.display(), count, "loaded user dictionary");
        Ok(count)
    }

    /// Load the embedded base lexicon
    pub fn load_lexicon(&mut self) -> Result<usize, DictionaryError> {
        self.load_tsv(LEXICON)
    }

    /// Register [`DOMAIN_TERMS`] as proper nouns
    pub fn register_domain_terms(&mut self) -> Result<usize, DictionaryError> {
        for term in DOMAIN_TERMS {
            self.register(term, PosTag::NNP, DOMAIN_TERM_PRIORITY)?;
        }
        Ok(DOMAIN_TERMS.len())
    }

    /// Freeze the collected entries
    pub fn build(self) -> Dictionary {
        debug!(terms = self.trie.len(), "dictionary built");
        Dictionary { trie: self.trie }
    }
}
