//! Chunking of Korean text by character category.
//!
//! This module segments text into runs (Hangul, digits, Latin, Hanja) and
//! single punctuation marks that the tokenizer then analyzes. Whitespace
//! separates chunks but never belongs to one.

use crate::char_categories::{CharCategory, KoString};

/// The type of a chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkType {
    /// Run of Hangul syllables, segmented further with the dictionary
    Hangul,
    /// Run of isolated jamo
    Jamo,
    /// Digits, including an inner decimal point
    Num,
    /// Latin letters
    Latin,
    /// Hanja
    Hanja,
    /// One punctuation mark or symbol
    Punct,
    /// Control or otherwise unsupported character
    Other,
}

/// A chunk of text with its type and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub chunk_type: ChunkType,
    /// Starting byte offset in the original string
    pub start: usize,
    /// Length in bytes
    pub len: usize,
}

impl Chunk {
    pub fn new(chunk_type: ChunkType, start: usize, len: usize) -> Self {
        Chunk {
            chunk_type,
            start,
            len,
        }
    }

    /// The chunk's text within `source`
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.start + self.len]
    }
}

/// Chunker for Korean text
pub struct Chunker {
    ks: KoString,
}

impl Chunker {
    pub fn new(text: &str) -> Self {
        Chunker {
            ks: KoString::new(text),
        }
    }

    /// Chunk the text into runs and punctuation
    pub fn make_chunks(&self) -> Vec<Chunk> {
        if self.ks.is_empty() {
            return Vec::new();
        }

        let mut chunks = Vec::new();
        let chars: Vec<char> = self.ks.string.chars().collect();
        let mut byte_positions: Vec<usize> = Vec::with_capacity(chars.len() + 1);

        let mut pos = 0;
        for c in &chars {
            byte_positions.push(pos);
            pos += c.len_utf8();
        }
        byte_positions.push(pos);

        let mut i = 0;
        while i < chars.len() {
            let cat = self.ks.categories[i];

            match cat {
                CharCategory::Hangul => {
                    let next_i = self.read_run(i, CharCategory::Hangul);
                    chunks.push(self.chunk(ChunkType::Hangul, &byte_positions, i, next_i));
                    i = next_i;
                }
                CharCategory::Jamo => {
                    let next_i = self.read_run(i, CharCategory::Jamo);
                    chunks.push(self.chunk(ChunkType::Jamo, &byte_positions, i, next_i));
                    i = next_i;
                }
                CharCategory::Numeral => {
                    let next_i = self.read_number(&chars, i);
                    chunks.push(self.chunk(ChunkType::Num, &byte_positions, i, next_i));
                    i = next_i;
                }
                CharCategory::Latin => {
                    let next_i = self.read_run(i, CharCategory::Latin);
                    chunks.push(self.chunk(ChunkType::Latin, &byte_positions, i, next_i));
                    i = next_i;
                }
                CharCategory::Hanja => {
                    let next_i = self.read_run(i, CharCategory::Hanja);
                    chunks.push(self.chunk(ChunkType::Hanja, &byte_positions, i, next_i));
                    i = next_i;
                }
                CharCategory::Punct => {
                    chunks.push(self.chunk(ChunkType::Punct, &byte_positions, i, i + 1));
                    i += 1;
                }
                CharCategory::Other => {
                    chunks.push(self.chunk(ChunkType::Other, &byte_positions, i, i + 1));
                    i += 1;
                }
                CharCategory::Transparent => {
                    i += 1;
                }
            }
        }

        chunks
    }

    fn chunk(&self, chunk_type: ChunkType, byte_positions: &[usize], from: usize, to: usize) -> Chunk {
        let start = byte_positions[from];
        Chunk::new(chunk_type, start, byte_positions[to] - start)
    }

    /// Read consecutive characters of one category
    fn read_run(&self, start_i: usize, category: CharCategory) -> usize {
        let mut i = start_i;
        while self.ks.get_category(i) == Some(category) {
            i += 1;
        }
        i
    }

    /// Read digits; a single '.' between two digits stays inside the number
    fn read_number(&self, chars: &[char], start_i: usize) -> usize {
        let mut i = start_i;

        while i < chars.len() {
            match self.ks.categories[i] {
                CharCategory::Numeral => i += 1,
                CharCategory::Punct
                    if chars[i] == '.'
                        && self.ks.get_category(i + 1) == Some(CharCategory::Numeral) =>
                {
                    i += 1;
                }
                _ => break,
            }
        }

        i
    }
}
