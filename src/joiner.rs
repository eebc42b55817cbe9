//! Token-to-text reconstruction.
//!
//! [`TokenJoiner`] walks a token sequence once and decides for every token
//! whether it attaches to the text emitted so far or starts a new word. The
//! decision is an ordered table ([`decide`]); the first row that applies
//! wins.

use tracing::trace;

use crate::token::{TagClass, Token};

/// Forms that close off the preceding text
pub const CLOSING_FORMS: &[&str] = &[",", ".", "!", "?", ")", "]", "}", ">", "･", ":", ";"];

/// Forms after which the next token is glued on
pub const OPENING_FORMS: &[&str] = &["(", "[", "{", "<"];

/// Counters for legal articles and clauses (조, 항)
pub const COUNTER_FORMS: &[&str] = &["조", "항"];

/// The ordinal prefix of legal citations (제1조)
pub const ORDINAL_FORM: &str = "제";

/// Symbols that join the words on either side
pub const JOINING_SYMBOLS: &[&str] = &["/", "･"];

/// Whether a token attaches or gets a space before it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Join {
    Attach,
    Space,
}

/// The row of the decision table that fired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinRule {
    /// First token of the sequence
    First,
    /// Particle, ending or suffix
    BoundMorpheme,
    /// The copula (이다)
    Copula,
    /// Closing punctuation or bracket
    ClosingPunct,
    /// Previous token opened a bracket
    AfterOpeningBracket,
    /// Numeral after a numeral (8 + 0)
    NumeralRun,
    /// Numeral after a thousands comma
    NumeralAfterComma,
    /// Numeral after the ordinal 제
    NumeralAfterOrdinal,
    /// Numeral starting a new word
    NumeralSpaced,
    /// 조 or 항 after a numeral
    CounterAfterNumeral,
    /// Sentence-final punctuation
    SentenceFinal,
    /// `/` or `･` tagged as a symbol
    JoiningSymbol,
    Default,
}

impl JoinRule {
    pub fn join(self) -> Join {
        match self {
            JoinRule::NumeralSpaced | JoinRule::Default => Join::Space,
            _ => Join::Attach,
        }
    }
}

/// What the decision procedure may look at for one position
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub index: usize,
    pub token: &'a Token,
    pub prev: Option<&'a Token>,
    /// Output accumulated before this token. Informational: no row of the
    /// table reads it.
    pub output: &'a str,
}

/// Evaluate the decision table for one position
pub fn decide(ctx: &RuleContext<'_>) -> JoinRule {
    let token = ctx.token;
    let prev = match ctx.prev {
        Some(prev) if ctx.index > 0 => prev,
        _ => return JoinRule::First,
    };
    let form = token.form.as_str();

    match token.class() {
        TagClass::Particle | TagClass::Ending | TagClass::Suffix => return JoinRule::BoundMorpheme,
        TagClass::Copula => return JoinRule::Copula,
        _ => {}
    }

    if CLOSING_FORMS.contains(&form) {
        return JoinRule::ClosingPunct;
    }

    if OPENING_FORMS.contains(&prev.form.as_str()) {
        return JoinRule::AfterOpeningBracket;
    }

    match token.class() {
        TagClass::Numeral => {
            if prev.is_numeral() {
                JoinRule::NumeralRun
            } else if prev.form == "," {
                JoinRule::NumeralAfterComma
            } else if prev.form == ORDINAL_FORM {
                JoinRule::NumeralAfterOrdinal
            } else {
                JoinRule::NumeralSpaced
            }
        }
        _ if COUNTER_FORMS.contains(&form) && prev.is_numeral() => JoinRule::CounterAfterNumeral,
        TagClass::SentenceFinal => JoinRule::SentenceFinal,
        TagClass::Symbol if JOINING_SYMBOLS.contains(&form) => JoinRule::JoiningSymbol,
        _ => JoinRule::Default,
    }
}

/// Joins a token sequence into spaced text
pub struct TokenJoiner;

impl TokenJoiner {
    /// Join tokens, inserting a single space wherever a new word starts
    pub fn join(tokens: &[Token]) -> String {
        let mut output = String::with_capacity(tokens.iter().map(|t| t.form.len() + 1).sum());
        let mut prev: Option<&Token> = None;

        for (index, token) in tokens.iter().enumerate() {
            let rule = decide(&RuleContext {
                index,
                token,
                prev,
                output: &output,
            });
            trace!(index, token = %token, ?rule, "join decision");

            if rule.join() == Join::Space {
                output.push(' ');
            }
            output.push_str(&token.form);
            prev = Some(token);
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::PosTag;

    fn tok(form: &str, tag: PosTag) -> Token {
        Token::unplaced(form, tag)
    }

    fn rule_for(prev: Token, token: Token) -> JoinRule {
        decide(&RuleContext {
            index: 1,
            token: &token,
            prev: Some(&prev),
            output: &prev.form,
        })
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(TokenJoiner::join(&[]), "");
    }

    #[test]
    fn test_first_token_has_no_space() {
        for tag in [PosTag::NNG, PosTag::JKS, PosTag::SN, PosTag::SF] {
            let token = tok("가", tag);
            let rule = decide(&RuleContext {
                index: 0,
                token: &token,
                prev: None,
                output: "",
            });
            assert_eq!(rule, JoinRule::First);
            assert_eq!(TokenJoiner::join(&[token]), "가");
        }
    }

    #[test]
    fn test_bound_morphemes_attach() {
        let noun = tok("수익자", PosTag::NNG);
        assert_eq!(rule_for(noun.clone(), tok("가", PosTag::JKS)), JoinRule::BoundMorpheme);
        assert_eq!(rule_for(noun.clone(), tok("하", PosTag::XSV)), JoinRule::BoundMorpheme);
        assert_eq!(rule_for(tok("하", PosTag::VV), tok("지", PosTag::EC)), JoinRule::BoundMorpheme);
        assert_eq!(rule_for(noun, tok("이", PosTag::VCP)), JoinRule::Copula);
    }

    #[test]
    fn test_prefix_does_not_attach_backwards() {
        assert_eq!(rule_for(tok("조", PosTag::NNB), tok("제", PosTag::XPN)), JoinRule::Default);
    }

    #[test]
    fn test_punctuation_and_brackets() {
        let noun = tok("수익증권", PosTag::NNP);
        assert_eq!(rule_for(noun.clone(), tok(",", PosTag::SP)), JoinRule::ClosingPunct);
        assert_eq!(rule_for(noun.clone(), tok(")", PosTag::SS)), JoinRule::ClosingPunct);
        assert_eq!(rule_for(noun.clone(), tok("(", PosTag::SS)), JoinRule::Default);
        assert_eq!(rule_for(tok("(", PosTag::SS), noun), JoinRule::AfterOpeningBracket);
    }

    #[test]
    fn test_numeral_rows() {
        let digit = tok("0", PosTag::SN);
        assert_eq!(rule_for(tok("8", PosTag::SN), digit.clone()), JoinRule::NumeralRun);
        assert_eq!(rule_for(tok(",", PosTag::SP), digit.clone()), JoinRule::NumeralAfterComma);
        assert_eq!(rule_for(tok("제", PosTag::XPN), digit.clone()), JoinRule::NumeralAfterOrdinal);
        assert_eq!(rule_for(tok("에", PosTag::JKB), digit), JoinRule::NumeralSpaced);
    }

    #[test]
    fn test_counter_after_numeral() {
        assert_eq!(
            rule_for(tok("110", PosTag::SN), tok("조", PosTag::NNB)),
            JoinRule::CounterAfterNumeral
        );
        assert_eq!(
            rule_for(tok("21", PosTag::SN), tok("항", PosTag::NNG)),
            JoinRule::CounterAfterNumeral
        );
        assert_eq!(rule_for(tok("법", PosTag::NNG), tok("조", PosTag::NNB)), JoinRule::Default);
    }

    #[test]
    fn test_symbols() {
        let noun = tok("매수", PosTag::NNG);
        assert_eq!(rule_for(noun.clone(), tok("/", PosTag::SP)), JoinRule::JoiningSymbol);
        assert_eq!(rule_for(noun.clone(), tok("%", PosTag::SW)), JoinRule::Default);
        assert_eq!(rule_for(noun, tok("…", PosTag::SF)), JoinRule::SentenceFinal);
    }

    #[test]
    fn test_numeral_merge() {
        let tokens = vec![tok("8", PosTag::SN), tok("0", PosTag::SN), tok("%", PosTag::SW)];
        assert_eq!(TokenJoiner::join(&tokens), "80 %");
    }

    #[test]
    fn test_thousands_separator() {
        let tokens = vec![
            tok("1", PosTag::SN),
            tok(",", PosTag::SP),
            tok("000", PosTag::SN),
            tok("주", PosTag::NNB),
        ];
        assert_eq!(TokenJoiner::join(&tokens), "1,000 주");
    }

    #[test]
    fn test_sentence() {
        let tokens = vec![
            tok("수익자", PosTag::NNG),
            tok("가", PosTag::JKS),
            tok("당해", PosTag::MM),
            tok("환매청구접수", PosTag::NNP),
            tok("의", PosTag::JKG),
            tok("취소", PosTag::NNG),
            tok("를", PosTag::JKO),
            tok("하", PosTag::VV),
            tok("지", PosTag::EC),
            tok("아니하", PosTag::VX),
            tok("였", PosTag::EP),
            tok("을", PosTag::ETM),
            tok("경우", PosTag::NNG),
            tok(".", PosTag::SF),
        ];
        assert_eq!(
            TokenJoiner::join(&tokens),
            "수익자가 당해 환매청구접수의 취소를 하지 아니하였을 경우."
        );
    }

    #[test]
    fn test_no_double_spaces() {
        let tokens: Vec<Token> = ["가", "나", "다"]
            .iter()
            .map(|f| tok(f, PosTag::NNG))
            .collect();
        let out = TokenJoiner::join(&tokens);
        assert_eq!(out, "가 나 다");
        assert!(!out.contains("  "));
    }
}
