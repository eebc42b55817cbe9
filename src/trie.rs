//! Character trie for dictionary-based segmentation.
//!
//! The Trie stores terms as sequences of characters and reports every
//! dictionary term that starts at a given position, so the tokenizer can try
//! the longest one first and fall back to shorter ones.

use std::collections::HashMap;

use crate::token::PosTag;

/// One reading of a term: its tag and how strongly it is preferred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub tag: PosTag,
    pub priority: i32,
}

/// Data associated with a term in the Trie
#[derive(Debug, Clone, Default)]
pub struct WordData {
    /// Readings, highest priority first
    pub candidates: Vec<Candidate>,
}

impl WordData {
    /// Insert or update a reading; returns the previous priority for the tag
    fn upsert(&mut self, candidate: Candidate) -> Option<i32> {
        let previous = match self.candidates.iter_mut().find(|c| c.tag == candidate.tag) {
            Some(existing) => {
                let old = existing.priority;
                existing.priority = candidate.priority;
                Some(old)
            }
            None => {
                self.candidates.push(candidate);
                None
            }
        };
        // Stable sort keeps registration order among equal priorities
        self.candidates.sort_by(|a, b| b.priority.cmp(&a.priority));
        previous
    }
}

/// A node in the Trie
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    /// Children nodes, keyed by character
    pub children: HashMap<char, TrieNode>,
    /// Data for the term ending here, if any
    pub data: Option<WordData>,
}

impl TrieNode {
    pub fn new() -> Self {
        TrieNode::default()
    }

    /// Check if this node has any children
    pub fn can_walk(&self) -> bool {
        !self.children.is_empty()
    }

    /// Check if this node is a valid term ending
    pub fn is_match(&self) -> bool {
        self.data.is_some()
    }
}

/// A term found in the input by [`Trie::prefixes`]
#[derive(Debug, Clone, Copy)]
pub struct PrefixMatch<'a> {
    /// Number of characters the term covers
    pub char_len: usize,
    pub data: &'a WordData,
}

/// A Trie of dictionary terms
#[derive(Debug, Default, Clone)]
pub struct Trie {
    root: TrieNode,
    word_count: usize,
}

impl Trie {
    pub fn new() -> Self {
        Trie::default()
    }

    /// Number of distinct terms
    pub fn len(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Add a reading of a term. Returns the priority it replaced, if the
    /// same term was already registered with the same tag.
    pub fn add(&mut self, term: &str, candidate: Candidate) -> Option<i32> {
        let mut current = &mut self.root;

        for c in term.chars() {
            current = current.children.entry(c).or_default();
        }

        if current.data.is_none() {
            self.word_count += 1;
        }

        current.data.get_or_insert_with(WordData::default).upsert(candidate)
    }

    /// Walk the trie by one character, returning the next node if it exists
    pub fn walk<'a>(&'a self, c: char, current: Option<&'a TrieNode>) -> Option<&'a TrieNode> {
        let node = current.unwrap_or(&self.root);
        node.children.get(&c)
    }

    /// Every term that starts at `chars[0]`, shortest first
    pub fn prefixes<'a>(&'a self, chars: &[char]) -> Vec<PrefixMatch<'a>> {
        let mut matches = Vec::new();
        let mut current: Option<&TrieNode> = None;

        for (i, c) in chars.iter().enumerate() {
            match self.walk(*c, current) {
                Some(node) => {
                    if let Some(ref data) = node.data {
                        matches.push(PrefixMatch {
                            char_len: i + 1,
                            data,
                        });
                    }
                    if !node.can_walk() {
                        break;
                    }
                    current = Some(node);
                }
                None => break,
            }
        }

        matches
    }

    /// Check if a term exists in the trie
    pub fn has_word(&self, term: &str) -> bool {
        self.get_word_data(term).is_some()
    }

    /// Get the data for a term if it exists
    pub fn get_word_data(&self, term: &str) -> Option<&WordData> {
        let mut current = &self.root;

        for c in term.chars() {
            match current.children.get(&c) {
                Some(node) => current = node,
                None => return None,
            }
        }

        current.data.as_ref()
    }
}
