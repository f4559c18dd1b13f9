use std::fmt;

/// Reserved marker tokens. They are inserted before any user text, in the
/// order of [`SpecialToken::ALL`], so they always hold indices 0 through 3.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpecialToken {
    /// Padding marker, index 0.
    Pad,
    /// Unknown marker, index 1. Substituted for indices with no mapping.
    Unk,
    /// Separator marker, index 2.
    Sep,
    /// Classification marker, index 3.
    Cls,
}

impl SpecialToken {
    /// All special tokens in insertion order.
    pub const ALL: [SpecialToken; 4] = [
        SpecialToken::Pad,
        SpecialToken::Unk,
        SpecialToken::Sep,
        SpecialToken::Cls,
    ];

    /// Literal text stored in the vocabulary for this token.
    pub const fn literal(self) -> &'static str {
        match self {
            SpecialToken::Pad => "[PAD]",
            SpecialToken::Unk => "[UNK]",
            SpecialToken::Sep => "[SEP]",
            SpecialToken::Cls => "[CLS]",
        }
    }

    /// Returns the special token whose literal is `text`, if any.
    pub fn from_literal(text: &str) -> Option<SpecialToken> {
        Self::ALL.into_iter().find(|s| s.literal() == text)
    }
}

impl fmt::Display for SpecialToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.literal())
    }
}
