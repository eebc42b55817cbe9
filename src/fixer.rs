//! The spacing pipeline.
//!
//! input → normalize → analyze → join → correct → format

use rayon::prelude::*;
use serde_json::Value;
use tracing::debug;

use crate::corrector::PostCorrector;
use crate::error::{DictionaryError, Result};
use crate::input::{Input, Output};
use crate::joiner::TokenJoiner;
use crate::tokenizer::{Analyzer, KoreanTokenizer};

/// Repairs the spacing of Korean disclosure text.
///
/// A fixer holds nothing but its analyzer, so one instance can serve many
/// threads at once.
#[derive(Debug, Clone)]
pub struct SpacingFixer<A = KoreanTokenizer> {
    analyzer: A,
}

impl SpacingFixer<KoreanTokenizer> {
    /// Fixer backed by the built-in tokenizer and standard dictionary
    pub fn new() -> std::result::Result<Self, DictionaryError> {
        Ok(SpacingFixer {
            analyzer: KoreanTokenizer::standard()?,
        })
    }
}

impl<A: Analyzer> SpacingFixer<A> {
    /// Fixer backed by any analyzer
    pub fn with_analyzer(analyzer: A) -> Self {
        SpacingFixer { analyzer }
    }

    /// Fix the spacing of `input`, returning the result in the same shape
    pub fn fix(&self, input: impl Into<Input>) -> Result<Output> {
        let input = input.into();
        let normalized = input.normalize();
        debug!(
            shape = ?normalized.shape,
            bytes = normalized.text.len(),
            "normalized input"
        );

        let tokens = self.analyzer.tokenize(&normalized.text)?;
        debug!(tokens = tokens.len(), "analyzed");

        let joined = TokenJoiner::join(&tokens);
        let corrected = PostCorrector::correct(&joined);

        Ok(Output::format(&corrected, normalized.shape))
    }

    /// Fix a single string
    pub fn fix_text(&self, text: &str) -> Result<String> {
        Ok(self.fix(text)?.into_text())
    }

    /// Fix a sequence of fragments, returning the reconstructed words
    pub fn fix_fragments<S: AsRef<str>>(&self, fragments: &[S]) -> Result<Vec<String>> {
        let input = Input::Fragments(fragments.iter().map(|f| f.as_ref().to_string()).collect());
        match self.fix(input)? {
            Output::Fragments(words) => Ok(words),
            Output::Text(text) => Ok(vec![text]),
        }
    }

    /// Fix a JSON string or array of strings
    pub fn fix_json(&self, value: Value) -> Result<Value> {
        let input = Input::try_from(value)?;
        Ok(self.fix(input)?.into())
    }

    /// Fix many inputs in parallel; results keep the input order
    pub fn fix_batch<I>(&self, inputs: Vec<I>) -> Vec<Result<Output>>
    where
        I: Into<Input> + Send,
    {
        inputs.into_par_iter().map(|input| self.fix(input)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AnalysisError, FixError};
    use crate::token::{PosTag, Token};

    fn scripted(tokens: Vec<Token>) -> impl Fn(&str) -> std::result::Result<Vec<Token>, AnalysisError> {
        move |_text: &str| Ok(tokens.clone())
    }

    #[test]
    fn test_shape_is_preserved() {
        let fixer = SpacingFixer::new().unwrap();
        assert!(matches!(fixer.fix("투자신탁").unwrap(), Output::Text(_)));
        assert!(matches!(fixer.fix(["투자", "신탁"]).unwrap(), Output::Fragments(_)));
    }

    #[test]
    fn test_empty_input() {
        let fixer = SpacingFixer::new().unwrap();
        assert_eq!(fixer.fix_text("").unwrap(), "");
        assert_eq!(fixer.fix_text("   ").unwrap(), "");
        assert!(fixer.fix_fragments::<&str>(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_analyzer_error_propagates() {
        let failing = |_text: &str| -> std::result::Result<Vec<Token>, AnalysisError> {
            Err(AnalysisError::Failed("dictionary not loaded".to_string()))
        };
        let fixer = SpacingFixer::with_analyzer(failing);
        assert_eq!(
            fixer.fix("아무거나").unwrap_err(),
            FixError::Analysis(AnalysisError::Failed("dictionary not loaded".to_string()))
        );
    }

    #[test]
    fn test_scripted_numeral_merge() {
        let fixer = SpacingFixer::with_analyzer(scripted(vec![
            Token::unplaced("고위험자산", PosTag::NNP),
            Token::unplaced("에", PosTag::JKB),
            Token::unplaced("8", PosTag::SN),
            Token::unplaced("0", PosTag::SN),
            Token::unplaced("%", PosTag::SW),
            Token::unplaced("이상", PosTag::NNG),
        ]));
        assert_eq!(fixer.fix_text("고위험자산에 8 0%이상").unwrap(), "고위험자산에 80% 이상");
    }

    #[test]
    fn test_fix_json() {
        let fixer = SpacingFixer::new().unwrap();
        let out = fixer.fix_json(serde_json::json!(["투자", "신탁"])).unwrap();
        assert!(out.is_array());
        assert!(matches!(
            fixer.fix_json(serde_json::json!(7)),
            Err(FixError::InvalidInputShape(_))
        ));
    }

    #[test]
    fn test_batch_keeps_order() {
        let fixer = SpacingFixer::new().unwrap();
        let inputs = vec!["투자신탁", "", "수익증권"];
        let results = fixer.fix_batch(inputs.clone());
        assert_eq!(results.len(), 3);
        for (input, result) in inputs.iter().zip(results) {
            assert_eq!(result.unwrap(), fixer.fix(*input).unwrap());
        }
    }
}
