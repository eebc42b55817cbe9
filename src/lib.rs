//! # spacing-fixer
//!
//! Whitespace repair for Korean financial-disclosure text.
//!
//! Text coming out of OCR, PDF extraction or manual transcription often has
//! spaces inside words ("사 전에") or none between them. The fixer discards
//! the existing spacing, analyzes the text into morphemes and rebuilds the
//! word boundaries from their tags, then applies a few corrections specific
//! to disclosures (percentages, legal citations such as "법 제110조").
//!
//! ## Quick Start
//!
//! ```rust
//! use spacing_fixer::SpacingFixer;
//!
//! let fixer = SpacingFixer::new().unwrap();
//!
//! let text = fixer.fix_text("고위험자산에 8 0%이상 투자하는 집합투자기구").unwrap();
//! assert!(text.contains("80%"));
//!
//! let words = fixer.fix_fragments(&["수", "익자가", "당해"]).unwrap();
//! assert_eq!(words, vec!["수익자가", "당해"]);
//! ```
//!
//! ## Custom Dictionary
//!
//! ```rust
//! use spacing_fixer::{DictionaryBuilder, KoreanTokenizer, PosTag, SpacingFixer};
//!
//! let mut builder = DictionaryBuilder::new();
//! builder.load_lexicon().unwrap();
//! builder.register_domain_terms().unwrap();
//! builder.register("결산배당", PosTag::NNP, 10).unwrap();
//!
//! let fixer = SpacingFixer::with_analyzer(KoreanTokenizer::new(builder.build()));
//! assert_eq!(fixer.fix_text("결산배당").unwrap(), "결산배당");
//! ```
//!
//! ## External Analyzers
//!
//! Any `Fn(&str) -> Result<Vec<Token>, AnalysisError>` is an [`Analyzer`],
//! so the output of another morphological analyzer can be fed to the joiner
//! and corrector unchanged.

pub mod char_categories;
pub mod chunker;
pub mod corrector;
pub mod dictionary;
pub mod error;
pub mod fixer;
pub mod input;
pub mod joiner;
pub mod token;
pub mod tokenizer;
pub mod trie;

// Re-export main types for convenience
pub use corrector::{CorrectionRule, PostCorrector};
pub use dictionary::{Dictionary, DictionaryBuilder, DOMAIN_TERMS};
pub use error::{AnalysisError, DictionaryError, FixError, Result};
pub use fixer::SpacingFixer;
pub use input::{Input, InputShape, Normalized, Output};
pub use joiner::{decide, Join, JoinRule, RuleContext, TokenJoiner};
pub use token::{PosTag, TagClass, Token};
pub use tokenizer::{Analyzer, KoreanTokenizer, TokenizerOptions};
pub use trie::{Candidate, Trie, WordData};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
