//! Post-correction of joined text.
//!
//! The joiner only sees tags, so a few systematic mistakes survive it:
//! digits separated from `%`, and legal citations (법 제110조) glued or split
//! the wrong way. [`PostCorrector`] fixes them with an ordered list of
//! pattern replacements; each rule runs over the output of the previous one.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

/// One pattern → replacement pass over the whole string
#[derive(Debug)]
pub struct CorrectionRule {
    pub name: &'static str,
    pattern: Regex,
    replacement: &'static str,
}

impl CorrectionRule {
    fn new(name: &'static str, pattern: &str, replacement: &'static str) -> Self {
        CorrectionRule {
            name,
            pattern: Regex::new(pattern).expect("correction pattern is a valid regex"),
            replacement,
        }
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Apply the rule to every match in `text`
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.pattern.replace_all(text, self.replacement)
    }
}

/// The correction cascade, in application order
static RULES: Lazy<Vec<CorrectionRule>> = Lazy::new(|| {
    vec![
        // "8 0 %" leftovers: digit then % or 좌
        CorrectionRule::new("percent", r"(\d)\s+([%좌])", "${1}${2}"),
        // 법제110 -> 법 제110
        CorrectionRule::new("law-article", r"법제\s*(\d)", "법 제${1}"),
        // 제 110 -> 제110
        CorrectionRule::new("ordinal", r"제\s+(\d+)", "제${1}"),
        // 110 조 -> 110조
        CorrectionRule::new("counter", r"(\d+)\s+([조항])", "${1}${2}"),
    ]
});

/// Applies the correction cascade
pub struct PostCorrector;

impl PostCorrector {
    /// The rules in the order they are applied
    pub fn rules() -> &'static [CorrectionRule] {
        &RULES
    }

    /// Run every rule in order
    pub fn correct(text: &str) -> String {
        let mut current = text.to_string();

        for rule in RULES.iter() {
            let corrected = match rule.apply(&current) {
                Cow::Borrowed(_) => continue,
                Cow::Owned(corrected) => corrected,
            };
            trace!(rule = rule.name, before = %current, after = %corrected, "corrected");
            current = corrected;
        }

        current
    }
}
