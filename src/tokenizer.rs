//! Morphological analysis: the [`Analyzer`] seam and the built-in
//! dictionary tokenizer.
//!
//! [`KoreanTokenizer`] chunks text by character category and segments every
//! Hangul run with a longest-match walk over the dictionary trie. A term may
//! continue past its chunk (`총보수･비용` spans a middle dot) as long as it
//! ends on a Hangul syllable.

use std::borrow::Cow;
use std::sync::Arc;

use tracing::trace;
use unicode_normalization::UnicodeNormalization;

use crate::char_categories::{get_char_category, is_transparent, punct_tag, CharCategory};
use crate::chunker::{ChunkType, Chunker};
use crate::dictionary::Dictionary;
use crate::error::{AnalysisError, DictionaryError};
use crate::token::{PosTag, TagClass, Token};

/// Splits text into tagged morphemes.
///
/// Implementations must be deterministic for identical input. Closures with
/// the right signature implement this trait, which is how an external
/// analyzer is plugged in.
pub trait Analyzer: Send + Sync {
    fn tokenize(&self, text: &str) -> Result<Vec<Token>, AnalysisError>;
}

impl<F> Analyzer for F
where
    F: Fn(&str) -> Result<Vec<Token>, AnalysisError> + Send + Sync,
{
    fn tokenize(&self, text: &str) -> Result<Vec<Token>, AnalysisError> {
        self(text)
    }
}

/// Options of the built-in tokenizer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenizerOptions {
    /// Apply NFC normalization first (composes decomposed jamo)
    pub normalize_unicode: bool,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        TokenizerOptions {
            normalize_unicode: true,
        }
    }
}

/// Dictionary-based Korean tokenizer
#[derive(Debug, Clone)]
pub struct KoreanTokenizer {
    /// The dictionary (shared reference)
    dict: Arc<Dictionary>,
    options: TokenizerOptions,
}

impl KoreanTokenizer {
    pub fn new(dict: Dictionary) -> Self {
        Self::with_arc(Arc::new(dict))
    }

    /// Create a tokenizer over a shared dictionary
    pub fn with_arc(dict: Arc<Dictionary>) -> Self {
        KoreanTokenizer {
            dict,
            options: TokenizerOptions::default(),
        }
    }

    /// Tokenizer over [`Dictionary::standard`]
    pub fn standard() -> Result<Self, DictionaryError> {
        Ok(Self::new(Dictionary::standard()?))
    }

    pub fn with_options(mut self, options: TokenizerOptions) -> Self {
        self.options = options;
        self
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dict
    }

    /// Tokenize a string
    pub fn tokenize(&self, text: &str) -> Result<Vec<Token>, AnalysisError> {
        let normalized: Cow<'_, str> = if self.options.normalize_unicode {
            Cow::Owned(text.nfc().collect())
        } else {
            Cow::Borrowed(text)
        };

        let chunker = Chunker::new(&normalized);
        let chunks = chunker.make_chunks();

        let chars: Vec<char> = normalized.chars().collect();
        let mut byte_positions: Vec<usize> = Vec::with_capacity(chars.len() + 1);
        let mut pos = 0;
        for c in &chars {
            byte_positions.push(pos);
            pos += c.len_utf8();
        }
        byte_positions.push(pos);

        // Chunk offsets always fall on char boundaries
        let char_index = |byte: usize| {
            let i = byte_positions.partition_point(|&p| p < byte);
            debug_assert_eq!(byte_positions.get(i), Some(&byte), "chunk offset off a char boundary");
            i
        };

        let mut tokens: Vec<Token> = Vec::new();
        // Characters before `cursor` are already covered by a token
        let mut cursor = 0;

        for chunk in &chunks {
            let from = char_index(chunk.start);
            let to = char_index(chunk.start + chunk.len);
            if to <= cursor {
                continue;
            }
            let from = from.max(cursor);
            let start = byte_positions[from];
            let form = &normalized[start..byte_positions[to]];

            match chunk.chunk_type {
                ChunkType::Hangul => {
                    cursor = self.segment_hangul(&chars, &byte_positions, from, to, &mut tokens);
                    continue;
                }
                ChunkType::Num => tokens.push(Token::new(form, PosTag::SN, start)),
                ChunkType::Latin => tokens.push(Token::new(form, PosTag::SL, start)),
                ChunkType::Hanja => tokens.push(Token::new(form, PosTag::SH, start)),
                ChunkType::Jamo => tokens.push(Token::new(form, PosTag::UN, start)),
                ChunkType::Punct => {
                    tokens.push(Token::new(form, punct_tag(chars[from]), start));
                }
                ChunkType::Other => {
                    return Err(AnalysisError::ControlCharacter {
                        ch: chars[from],
                        offset: start,
                    });
                }
            }
            cursor = to;
        }

        Ok(tokens)
    }

    /// Segment the Hangul run `chars[from..to]`; returns the first
    /// character index not covered, which lies past `to` when the last term
    /// extended beyond the run.
    fn segment_hangul(
        &self,
        chars: &[char],
        byte_positions: &[usize],
        from: usize,
        to: usize,
        tokens: &mut Vec<Token>,
    ) -> usize {
        // Terms never cross whitespace
        let span_end = (to..chars.len())
            .find(|&k| is_transparent(chars[k]))
            .unwrap_or(chars.len());

        let mut i = from;
        while i < to {
            let start = byte_positions[i];

            match self.longest_match(&chars[i..span_end], to - i, tokens.last()) {
                Some((char_len, tag)) => {
                    let form: String = chars[i..i + char_len].iter().collect();
                    trace!(%form, %tag, "dictionary match");
                    tokens.push(Token::new(form, tag, start));
                    i += char_len;
                }
                None => {
                    // Unknown syllable; adjacent unknown syllables form one word
                    match tokens.last_mut() {
                        Some(last) if last.tag == PosTag::UN && last.end() == start => {
                            last.form.push(chars[i]);
                            last.len += chars[i].len_utf8();
                        }
                        _ => tokens.push(Token::new(chars[i].to_string(), PosTag::UN, start)),
                    }
                    i += 1;
                }
            }
        }

        i
    }

    /// Find the longest admissible term at the start of `window`.
    ///
    /// `run_len` is how many characters of the window belong to the current
    /// Hangul run; a term reaching past it must end on a Hangul syllable.
    fn longest_match(
        &self,
        window: &[char],
        run_len: usize,
        prev: Option<&Token>,
    ) -> Option<(usize, PosTag)> {
        let matches = self.dict.trie().prefixes(window);

        for m in matches.iter().rev() {
            let ends_cleanly = m.char_len <= run_len
                || get_char_category(window[m.char_len - 1]) == CharCategory::Hangul;
            if !ends_cleanly {
                continue;
            }

            if let Some(candidate) = m
                .data
                .candidates
                .iter()
                .find(|c| can_follow(c.tag, prev))
            {
                return Some((m.char_len, candidate.tag));
            }
        }

        None
    }
}

impl Analyzer for KoreanTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<Token>, AnalysisError> {
        KoreanTokenizer::tokenize(self, text)
    }
}

/// Whether a morpheme tagged `tag` may follow `prev`.
///
/// Bound morphemes need a host of the right kind: particles and the copula
/// attach to nominals, endings to predicates, suffixes to stems. Free
/// morphemes can appear anywhere.
pub fn can_follow(tag: PosTag, prev: Option<&Token>) -> bool {
    let Some(prev) = prev else {
        return !tag.is_bound();
    };

    let nominal = matches!(
        prev.class(),
        TagClass::Noun | TagClass::Numeral | TagClass::Foreign | TagClass::Unknown
    ) || matches!(prev.tag, PosTag::XSN | PosTag::ETN)
        || is_unit_symbol(prev);

    match tag.class() {
        TagClass::Particle => {
            nominal
                || stacks_particle(prev)
                || (prev.class() == TagClass::Bracket && is_closing(&prev.form))
        }
        TagClass::Copula => nominal,
        TagClass::Ending => matches!(
            prev.tag,
            PosTag::VV
                | PosTag::VA
                | PosTag::VX
                | PosTag::VCP
                | PosTag::VCN
                | PosTag::XSV
                | PosTag::XSA
                | PosTag::EP
        ),
        TagClass::Suffix => matches!(
            prev.class(),
            TagClass::Noun | TagClass::Root | TagClass::Unknown
        ),
        _ => true,
    }
}

/// 에 + 는, 까지 + 의: adverbial and delimiting particles take another
/// particle, topic and additive markers (은, 는, 도) do not
fn stacks_particle(prev: &Token) -> bool {
    match prev.tag {
        PosTag::JKB => true,
        PosTag::JX => !matches!(prev.form.as_str(), "은" | "는" | "도"),
        _ => false,
    }
}

/// Unit symbols read as nouns: 80%를, 5‰의
fn is_unit_symbol(prev: &Token) -> bool {
    prev.tag == PosTag::SW && matches!(prev.form.as_str(), "%" | "‰" | "°" | "℃" | "$" | "₩" | "￦")
}

fn is_closing(form: &str) -> bool {
    matches!(form, ")" | "]" | "}" | ">" | "」" | "』" | "〉" | "》" | "\"" | "'" | "”" | "’")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::DictionaryBuilder;

    fn pairs(tokens: &[Token]) -> Vec<(&str, PosTag)> {
        tokens.iter().map(|t| (t.form.as_str(), t.tag)).collect()
    }

    fn standard() -> KoreanTokenizer {
        KoreanTokenizer::standard().unwrap()
    }

    #[test]
    fn test_domain_term_and_particle() {
        let tokens = standard().tokenize("고위험자산에80%이상").unwrap();
        assert_eq!(
            pairs(&tokens),
            vec![
                ("고위험자산", PosTag::NNP),
                ("에", PosTag::JKB),
                ("80", PosTag::SN),
                ("%", PosTag::SW),
                ("이상", PosTag::NNG),
            ]
        );
    }

    #[test]
    fn test_particle_after_percent() {
        let tokens = standard().tokenize("80%를").unwrap();
        assert_eq!(
            pairs(&tokens),
            vec![("80", PosTag::SN), ("%", PosTag::SW), ("를", PosTag::JKO)]
        );

        let tokens = standard().tokenize("5%의").unwrap();
        assert_eq!(tokens[2].tag, PosTag::JKG);
    }

    #[test]
    fn test_suffix_needs_stem() {
        // 하 after a noun is a suffix, after a particle it is a verb
        let tokens = standard().tokenize("투자하는").unwrap();
        assert_eq!(
            pairs(&tokens),
            vec![("투자", PosTag::NNG), ("하", PosTag::XSV), ("는", PosTag::ETM)]
        );

        let tokens = standard().tokenize("취소를하지").unwrap();
        assert_eq!(
            pairs(&tokens),
            vec![
                ("취소", PosTag::NNG),
                ("를", PosTag::JKO),
                ("하", PosTag::VV),
                ("지", PosTag::EC),
            ]
        );
    }

    #[test]
    fn test_particle_without_host() {
        // 이 at the start of a bracket is a pronoun, not a subject particle
        let tokens = standard().tokenize("(이와").unwrap();
        assert_eq!(
            pairs(&tokens),
            vec![("(", PosTag::SS), ("이", PosTag::NP), ("와", PosTag::JC)]
        );
    }

    #[test]
    fn test_legal_citation_tokens() {
        let tokens = standard().tokenize("법제9조제21항의").unwrap();
        assert_eq!(
            pairs(&tokens),
            vec![
                ("법제", PosTag::NNG),
                ("9", PosTag::SN),
                ("조", PosTag::NNB),
                ("제", PosTag::XPN),
                ("21", PosTag::SN),
                ("항", PosTag::NNB),
                ("의", PosTag::JKG),
            ]
        );
    }

    #[test]
    fn test_term_spanning_middle_dot() {
        let tokens = standard().tokenize("총보수･비용비율").unwrap();
        assert_eq!(tokens[0].form, "총보수･비용");
        assert_eq!(tokens[0].tag, PosTag::NNP);
        assert_eq!(tokens[1].form, "비율");
    }

    #[test]
    fn test_unknown_syllables_merge() {
        let dict = DictionaryBuilder::new().build();
        let tokens = KoreanTokenizer::new(dict).tokenize("가나다 라").unwrap();
        assert_eq!(
            pairs(&tokens),
            vec![("가나다", PosTag::UN), ("라", PosTag::UN)]
        );
    }

    #[test]
    fn test_offsets_map_back() {
        let text = "수익자가 당해 1,000주를";
        let tokens = standard().tokenize(text).unwrap();
        for token in &tokens {
            assert_eq!(&text[token.start..token.end()], token.form);
        }
    }

    #[test]
    fn test_numbers() {
        let tokens = standard().tokenize("1.3조원").unwrap();
        assert_eq!(tokens[0].form, "1.3");
        assert_eq!(tokens[0].tag, PosTag::SN);
    }

    #[test]
    fn test_control_character_fails() {
        let err = standard().tokenize("투자\u{1}신탁").unwrap_err();
        assert_eq!(
            err,
            AnalysisError::ControlCharacter {
                ch: '\u{1}',
                offset: 6
            }
        );
    }

    #[test]
    fn test_nfc_composes_jamo() {
        // ᄐ + ᅮ + ᄌ + ᅡ decomposed, composes to 투자
        let decomposed = "\u{1110}\u{116E}\u{110C}\u{1161}";
        let tokens = standard().tokenize(decomposed).unwrap();
        assert_eq!(pairs(&tokens), vec![("투자", PosTag::NNG)]);

        let raw = standard()
            .with_options(TokenizerOptions {
                normalize_unicode: false,
            })
            .tokenize(decomposed)
            .unwrap();
        assert_eq!(raw[0].tag, PosTag::UN);
    }

    #[test]
    fn test_empty() {
        assert!(standard().tokenize("").unwrap().is_empty());
    }

    #[test]
    fn test_closure_analyzer() {
        let analyzer = |text: &str| -> Result<Vec<Token>, AnalysisError> {
            Ok(vec![Token::new(text, PosTag::NNG, 0)])
        };
        let tokens = Analyzer::tokenize(&analyzer, "용어").unwrap();
        assert_eq!(tokens.len(), 1);
    }

    #[test]
    fn test_can_follow() {
        let noun = Token::unplaced("투자", PosTag::NNG);
        let verb = Token::unplaced("하", PosTag::VV);
        let particle = Token::unplaced("를", PosTag::JKO);
        let adverbial = Token::unplaced("에", PosTag::JKB);
        let topic = Token::unplaced("는", PosTag::JX);

        assert!(!can_follow(PosTag::JKS, None));
        assert!(can_follow(PosTag::NNG, None));
        assert!(can_follow(PosTag::JKS, Some(&noun)));
        assert!(!can_follow(PosTag::EC, Some(&noun)));
        assert!(can_follow(PosTag::EC, Some(&verb)));
        assert!(!can_follow(PosTag::XSV, Some(&particle)));
        assert!(can_follow(PosTag::JX, Some(&adverbial)));
        assert!(!can_follow(PosTag::JKS, Some(&topic)));
        assert!(!can_follow(PosTag::JX, Some(&particle)));

        let percent = Token::unplaced("%", PosTag::SW);
        let star = Token::unplaced("*", PosTag::SW);
        assert!(can_follow(PosTag::JKO, Some(&percent)));
        assert!(can_follow(PosTag::VCP, Some(&percent)));
        assert!(!can_follow(PosTag::JKO, Some(&star)));
    }
}
