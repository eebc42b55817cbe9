//! Token representation for Korean morphological analysis.
//!
//! A Token is one morpheme as produced by an analyzer: its surface form and a
//! part-of-speech tag from the Sejong tagset (as used by Kiwi and most Korean
//! analyzers).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// Part-of-speech tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PosTag {
    /// General noun
    NNG,
    /// Proper noun
    NNP,
    /// Bound noun
    NNB,
    /// Numeral noun
    NR,
    /// Pronoun
    NP,
    /// Verb
    VV,
    /// Adjective
    VA,
    /// Auxiliary predicate
    VX,
    /// Positive copula (이다)
    VCP,
    /// Negative copula (아니다)
    VCN,
    /// Determiner
    MM,
    /// General adverb
    MAG,
    /// Conjunctive adverb
    MAJ,
    /// Interjection
    IC,
    /// Subject particle
    JKS,
    /// Complement particle
    JKC,
    /// Genitive particle
    JKG,
    /// Object particle
    JKO,
    /// Adverbial particle
    JKB,
    /// Vocative particle
    JKV,
    /// Quotative particle
    JKQ,
    /// Auxiliary particle
    JX,
    /// Conjunctive particle
    JC,
    /// Pre-final ending
    EP,
    /// Final ending
    EF,
    /// Connective ending
    EC,
    /// Nominalizing ending
    ETN,
    /// Adnominal ending
    ETM,
    /// Noun prefix
    XPN,
    /// Noun-deriving suffix
    XSN,
    /// Verb-deriving suffix
    XSV,
    /// Adjective-deriving suffix
    XSA,
    /// Root
    XR,
    /// Sentence-final punctuation (. ! ?)
    SF,
    /// Separators (, / : ;)
    SP,
    /// Brackets and quotes
    SS,
    /// Ellipsis
    SE,
    /// Dashes and tildes
    SO,
    /// Other symbols
    SW,
    /// Latin letters
    SL,
    /// Hanja
    SH,
    /// Digits
    SN,
    /// Unknown
    #[default]
    UN,
}

/// The classes of tags the spacing decision cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagClass {
    Noun,
    Predicate,
    Copula,
    Modifier,
    Interjection,
    Particle,
    Ending,
    Suffix,
    Prefix,
    Root,
    Numeral,
    SentenceFinal,
    Bracket,
    Symbol,
    Foreign,
    Unknown,
}

const ALL_TAGS: &[PosTag] = &[
    PosTag::NNG,
    PosTag::NNP,
    PosTag::NNB,
    PosTag::NR,
    PosTag::NP,
    PosTag::VV,
    PosTag::VA,
    PosTag::VX,
    PosTag::VCP,
    PosTag::VCN,
    PosTag::MM,
    PosTag::MAG,
    PosTag::MAJ,
    PosTag::IC,
    PosTag::JKS,
    PosTag::JKC,
    PosTag::JKG,
    PosTag::JKO,
    PosTag::JKB,
    PosTag::JKV,
    PosTag::JKQ,
    PosTag::JX,
    PosTag::JC,
    PosTag::EP,
    PosTag::EF,
    PosTag::EC,
    PosTag::ETN,
    PosTag::ETM,
    PosTag::XPN,
    PosTag::XSN,
    PosTag::XSV,
    PosTag::XSA,
    PosTag::XR,
    PosTag::SF,
    PosTag::SP,
    PosTag::SS,
    PosTag::SE,
    PosTag::SO,
    PosTag::SW,
    PosTag::SL,
    PosTag::SH,
    PosTag::SN,
    PosTag::UN,
];

impl PosTag {
    /// Convert to the tagset's string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PosTag::NNG => "NNG",
            PosTag::NNP => "NNP",
            PosTag::NNB => "NNB",
            PosTag::NR => "NR",
            PosTag::NP => "NP",
            PosTag::VV => "VV",
            PosTag::VA => "VA",
            PosTag::VX => "VX",
            PosTag::VCP => "VCP",
            PosTag::VCN => "VCN",
            PosTag::MM => "MM",
            PosTag::MAG => "MAG",
            PosTag::MAJ => "MAJ",
            PosTag::IC => "IC",
            PosTag::JKS => "JKS",
            PosTag::JKC => "JKC",
            PosTag::JKG => "JKG",
            PosTag::JKO => "JKO",
            PosTag::JKB => "JKB",
            PosTag::JKV => "JKV",
            PosTag::JKQ => "JKQ",
            PosTag::JX => "JX",
            PosTag::JC => "JC",
            PosTag::EP => "EP",
            PosTag::EF => "EF",
            PosTag::EC => "EC",
            PosTag::ETN => "ETN",
            PosTag::ETM => "ETM",
            PosTag::XPN => "XPN",
            PosTag::XSN => "XSN",
            PosTag::XSV => "XSV",
            PosTag::XSA => "XSA",
            PosTag::XR => "XR",
            PosTag::SF => "SF",
            PosTag::SP => "SP",
            PosTag::SS => "SS",
            PosTag::SE => "SE",
            PosTag::SO => "SO",
            PosTag::SW => "SW",
            PosTag::SL => "SL",
            PosTag::SH => "SH",
            PosTag::SN => "SN",
            PosTag::UN => "UN",
        }
    }

    /// Every tag in the tagset
    pub fn all() -> &'static [PosTag] {
        ALL_TAGS
    }

    pub fn class(&self) -> TagClass {
        match self {
            PosTag::NNG | PosTag::NNP | PosTag::NNB | PosTag::NR | PosTag::NP => TagClass::Noun,
            PosTag::VV | PosTag::VA | PosTag::VX | PosTag::VCN => TagClass::Predicate,
            PosTag::VCP => TagClass::Copula,
            PosTag::MM | PosTag::MAG | PosTag::MAJ => TagClass::Modifier,
            PosTag::IC => TagClass::Interjection,
            PosTag::JKS
            | PosTag::JKC
            | PosTag::JKG
            | PosTag::JKO
            | PosTag::JKB
            | PosTag::JKV
            | PosTag::JKQ
            | PosTag::JX
            | PosTag::JC => TagClass::Particle,
            PosTag::EP | PosTag::EF | PosTag::EC | PosTag::ETN | PosTag::ETM => TagClass::Ending,
            PosTag::XSN | PosTag::XSV | PosTag::XSA => TagClass::Suffix,
            PosTag::XPN => TagClass::Prefix,
            PosTag::XR => TagClass::Root,
            PosTag::SN => TagClass::Numeral,
            PosTag::SF => TagClass::SentenceFinal,
            PosTag::SS => TagClass::Bracket,
            PosTag::SP | PosTag::SE | PosTag::SO | PosTag::SW => TagClass::Symbol,
            PosTag::SL | PosTag::SH => TagClass::Foreign,
            PosTag::UN => TagClass::Unknown,
        }
    }

    /// Bound morphemes never start a word on their own
    pub fn is_bound(&self) -> bool {
        matches!(
            self.class(),
            TagClass::Particle | TagClass::Ending | TagClass::Suffix | TagClass::Copula
        )
    }
}

impl FromStr for PosTag {
    type Err = AnalysisError;

    /// Parse a tag, dropping irregular-conjugation suffixes (`VV-R`, `VA-I`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let base = s.trim().split('-').next().unwrap_or_default();
        ALL_TAGS
            .iter()
            .copied()
            .find(|tag| tag.as_str() == base)
            .ok_or_else(|| AnalysisError::UnknownTag(s.to_string()))
    }
}

impl TryFrom<String> for PosTag {
    type Error = AnalysisError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PosTag> for String {
    fn from(tag: PosTag) -> Self {
        tag.as_str().to_string()
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single morpheme from the analysis
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Token {
    /// The surface text of the morpheme
    pub form: String,

    /// Part-of-speech tag
    pub tag: PosTag,

    /// Starting byte offset in the analyzed string
    pub start: usize,

    /// Length in bytes
    pub len: usize,
}

impl Token {
    /// Create a token with form, tag and position
    pub fn new(form: impl Into<String>, tag: PosTag, start: usize) -> Self {
        let form = form.into();
        let len = form.len();
        Token {
            form,
            tag,
            start,
            len,
        }
    }

    /// Create a token whose position is unknown (used by external analyzers
    /// and tests that only care about form and tag)
    pub fn unplaced(form: impl Into<String>, tag: PosTag) -> Self {
        Token::new(form, tag, 0)
    }

    pub fn class(&self) -> TagClass {
        self.tag.class()
    }

    pub fn is_numeral(&self) -> bool {
        self.tag == PosTag::SN
    }

    /// Byte offset one past the end of the token
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.form, self.tag)
    }
}
