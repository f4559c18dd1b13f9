use tracing::debug;

use crate::special::SpecialToken;
use crate::vocab::{TokenId, Vocabulary};

/// Splits `text` on runs of whitespace. Leading and trailing whitespace never
/// produce empty tokens. Tokens keep their casing and punctuation.
pub fn split_whitespace_tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Whether tokenizing may add new tokens to the vocabulary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GrowthMode {
    /// Unseen tokens are added as they are tokenized.
    #[default]
    Grow,
    /// The vocabulary is fixed; unseen tokens encode to `[UNK]`.
    /// Only [`WhitespaceTokenizer::add_token`] and [`WhitespaceTokenizer::train`] add tokens.
    Frozen,
}

/// Result of [`WhitespaceTokenizer::encode_with_tokens`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Encoding {
    /// tokens as split from the input
    pub tokens: Vec<String>,
    /// one index per token, in input order
    pub ids: Vec<TokenId>,
    /// number of tokens this call added to the vocabulary
    pub added: usize,
}

/// Whitespace tokenizer owning its vocabulary.
///
/// Operations that can grow the vocabulary take `&mut self`; lookups that
/// never grow it take `&self`.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer {
    vocab: Vocabulary,
    mode: GrowthMode,
}

impl WhitespaceTokenizer {
    /// Fresh tokenizer in [`GrowthMode::Grow`] with only the special tokens.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh tokenizer with the given growth mode.
    pub fn with_mode(mode: GrowthMode) -> Self {
        Self {
            vocab: Vocabulary::new(),
            mode,
        }
    }

    /// Current growth mode.
    pub fn mode(&self) -> GrowthMode {
        self.mode
    }

    /// Switches the growth mode. Existing tokens keep their indices.
    pub fn set_mode(&mut self, mode: GrowthMode) {
        if self.mode != mode {
            debug!(?mode, vocab_size = self.vocab.len(), "growth mode changed");
        }
        self.mode = mode;
    }

    /// Shorthand for `set_mode(GrowthMode::Frozen)`.
    pub fn freeze(&mut self) {
        self.set_mode(GrowthMode::Frozen);
    }

    /// Adds `token` regardless of mode. Idempotent; returns the token's index.
    pub fn add_token(&mut self, token: &str) -> TokenId {
        self.vocab.add_token(token)
    }

    /// Adds every token of `text` regardless of mode and returns how many were new.
    pub fn train(&mut self, text: &str) -> usize {
        let before = self.vocab.len();
        for token in split_whitespace_tokens(text) {
            self.vocab.add_token(token);
        }
        let added = self.vocab.len() - before;
        debug!(added, vocab_size = self.vocab.len(), "trained on text");
        added
    }

    /// Splits `text` into tokens. In [`GrowthMode::Grow`] every unseen token
    /// is added to the vocabulary, in order of first appearance.
    pub fn tokenize(&mut self, text: &str) -> Vec<String> {
        let grow = self.mode == GrowthMode::Grow;
        split_whitespace_tokens(text)
            .map(|token| {
                if grow {
                    self.vocab.add_token(token);
                }
                token.to_owned()
            })
            .collect()
    }

    /// Tokenizes `text` and maps each token to its index.
    pub fn encode(&mut self, text: &str) -> Vec<TokenId> {
        self.encode_with_tokens(text).ids
    }

    /// Like [`encode`](Self::encode), also returning the tokens and the
    /// number of tokens added to the vocabulary.
    pub fn encode_with_tokens(&mut self, text: &str) -> Encoding {
        let before = self.vocab.len();
        let tokens = self.tokenize(text);
        let ids = tokens.iter().map(|t| self.lookup(t)).collect();
        let added = self.vocab.len() - before;
        if added > 0 {
            debug!(added, vocab_size = self.vocab.len(), "encode grew vocabulary");
        }
        Encoding { tokens, ids, added }
    }

    /// Encodes against the current vocabulary without growing it.
    /// Unseen tokens map to the `[UNK]` index whatever the mode.
    pub fn encode_frozen(&self, text: &str) -> Vec<TokenId> {
        split_whitespace_tokens(text)
            .map(|t| self.lookup(t))
            .collect()
    }

    /// Maps indices back to tokens joined by single spaces.
    /// Unassigned indices become `[UNK]`.
    pub fn decode(&self, indices: &[TokenId]) -> String {
        join_tokens(indices.iter().map(|&id| self.vocab.token_of(id)))
    }

    /// Like [`decode`](Self::decode) for signed input, e.g. parsed from JSON.
    /// Negative values are unassigned and become `[UNK]`.
    pub fn decode_signed(&self, indices: &[i64]) -> String {
        join_tokens(indices.iter().map(|&raw| {
            TokenId::try_from(raw)
                .ok()
                .and_then(|id| self.vocab.token_of(id))
        }))
    }

    /// Like [`decode`](Self::decode) for input already checked against the
    /// `TokenId` range by the caller; `None` marks a value outside it and
    /// becomes `[UNK]`.
    pub fn decode_optional(&self, indices: &[Option<TokenId>]) -> String {
        join_tokens(
            indices
                .iter()
                .map(|&id| id.and_then(|id| self.vocab.token_of(id))),
        )
    }

    /// Number of distinct tokens, special tokens included.
    pub fn vocab_size(&self) -> usize {
        self.vocab.len()
    }

    /// Read access to the vocabulary.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    /// Index held by a special token.
    pub fn special_id(&self, special: SpecialToken) -> TokenId {
        self.vocab.special_id(special)
    }

    fn lookup(&self, token: &str) -> TokenId {
        match self.vocab.id_of(token) {
            Some(id) => id,
            None => self.vocab.special_id(SpecialToken::Unk),
        }
    }
}

fn join_tokens<'a>(tokens: impl Iterator<Item = Option<&'a str>>) -> String {
    let unk = SpecialToken::Unk.literal();
    tokens
        .map(|t| t.unwrap_or(unk))
        .collect::<Vec<_>>()
        .join(" ")
}
