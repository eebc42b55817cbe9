//! Character classification for Korean disclosure text.
//!
//! Every character of the analyzed string is put into one category; the
//! chunker groups runs of the same category and the tokenizer maps
//! punctuation and symbols to their part-of-speech tags.

use crate::token::PosTag;

/// Character categories used in Korean text processing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CharCategory {
    /// Precomposed Hangul syllable (가-힣)
    Hangul,
    /// Isolated jamo (ㄱ, ㅏ, ...)
    Jamo,
    /// ASCII or full-width digit
    Numeral,
    /// Latin letter
    Latin,
    /// Hanja (CJK ideograph)
    Hanja,
    /// Punctuation and symbols
    Punct,
    /// Whitespace; never part of a token
    Transparent,
    /// Control characters and anything else
    #[default]
    Other,
}

/// Get the category of a character
pub fn get_char_category(c: char) -> CharCategory {
    if c.is_whitespace() || c == '\u{200B}' || c == '\u{FEFF}' {
        return CharCategory::Transparent;
    }

    if ('\u{AC00}'..='\u{D7A3}').contains(&c) {
        return CharCategory::Hangul;
    }

    // Hangul Jamo + Compatibility Jamo
    if ('\u{1100}'..='\u{11FF}').contains(&c) || ('\u{3130}'..='\u{318F}').contains(&c) {
        return CharCategory::Jamo;
    }

    if c.is_ascii_digit() || ('\u{FF10}'..='\u{FF19}').contains(&c) {
        return CharCategory::Numeral;
    }

    if c.is_ascii_alphabetic() || ('\u{FF21}'..='\u{FF3A}').contains(&c) || ('\u{FF41}'..='\u{FF5A}').contains(&c) {
        return CharCategory::Latin;
    }

    if ('\u{4E00}'..='\u{9FFF}').contains(&c)     // CJK Unified Ideographs
        || ('\u{3400}'..='\u{4DBF}').contains(&c) // CJK Unified Ideographs Extension A
        || ('\u{F900}'..='\u{FAFF}').contains(&c) // CJK Compatibility Ideographs
    {
        return CharCategory::Hanja;
    }

    if c.is_control() {
        return CharCategory::Other;
    }

    CharCategory::Punct
}

/// Whitespace and invisible separators (zero-width space, BOM)
pub fn is_transparent(c: char) -> bool {
    get_char_category(c) == CharCategory::Transparent
}

/// Map a punctuation or symbol character to its tag
pub fn punct_tag(c: char) -> PosTag {
    match c {
        '.' | '!' | '?' | '。' => PosTag::SF,
        ',' | '/' | ':' | ';' | '･' | '·' | '・' | '，' => PosTag::SP,
        '(' | ')' | '[' | ']' | '{' | '}' | '<' | '>' | '「' | '」' | '『' | '』' | '〈' | '〉'
        | '《' | '》' | '"' | '\'' | '“' | '”' | '‘' | '’' => PosTag::SS,
        '…' | '⋯' => PosTag::SE,
        '-' | '~' | '～' | '―' | '–' | '—' => PosTag::SO,
        _ => PosTag::SW,
    }
}

/// A string with category information for each character
#[derive(Debug, Clone)]
pub struct KoString {
    /// The original string
    pub string: String,
    /// Category for each character (by index)
    pub categories: Vec<CharCategory>,
}

impl KoString {
    pub fn new(s: &str) -> Self {
        let categories: Vec<CharCategory> = s.chars().map(get_char_category).collect();
        KoString {
            string: s.to_string(),
            categories,
        }
    }

    /// Number of characters
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn get_category(&self, idx: usize) -> Option<CharCategory> {
        self.categories.get(idx).copied()
    }
}
