use std::collections::HashMap;

use serde::Serialize;
use tracing::trace;

use crate::special::SpecialToken;

/// Index of a token in a [`Vocabulary`].
pub type TokenId = usize;

/// Append-only bidirectional mapping between tokens and indices.
///
/// `backward` is stored densely: position `i` holds the token with index `i`,
/// so indices are contiguous from 0 and the next free index is always
/// `backward.len()`. `forward` is kept as its exact inverse.
///
/// Serializes as `{"tokens": [...]}` in index order. Used for display only.
#[derive(Clone, Debug, Serialize)]
pub struct Vocabulary {
    #[serde(skip)]
    forward: HashMap<String, TokenId>,
    #[serde(rename = "tokens")]
    backward: Vec<String>,
}

impl Vocabulary {
    /// Vocabulary holding only the special tokens, at indices 0..4.
    pub fn new() -> Self {
        let mut vocab = Vocabulary {
            forward: HashMap::new(),
            backward: Vec::with_capacity(SpecialToken::ALL.len()),
        };
        for special in SpecialToken::ALL {
            vocab.add_token(special.literal());
        }
        vocab
    }

    /// Adds `token` if it is new and returns its index.
    ///
    /// A known token keeps its index and nothing changes.
    pub fn add_token(&mut self, token: &str) -> TokenId {
        if let Some(&id) = self.forward.get(token) {
            return id;
        }
        let id = self.backward.len();
        self.backward.push(token.to_owned());
        self.forward.insert(token.to_owned(), id);
        trace!(token, id, "vocabulary grew");
        id
    }

    /// Index of `token`, or `None` when it was never added.
    pub fn id_of(&self, token: &str) -> Option<TokenId> {
        self.forward.get(token).copied()
    }

    /// Token stored at `id`, or `None` when `id` is unassigned.
    pub fn token_of(&self, id: TokenId) -> Option<&str> {
        self.backward.get(id).map(String::as_str)
    }

    /// Whether `token` has an index.
    pub fn contains(&self, token: &str) -> bool {
        self.forward.contains_key(token)
    }

    /// Index held by a special token.
    pub fn special_id(&self, special: SpecialToken) -> TokenId {
        // specials are inserted first, in `ALL` order, and never move
        self.id_of(special.literal())
            .unwrap_or_else(|| special_position(special))
    }

    /// Number of distinct tokens, special tokens included.
    pub fn len(&self) -> usize {
        self.backward.len()
    }

    /// Always `false`: the special tokens are present from construction.
    pub fn is_empty(&self) -> bool {
        self.backward.is_empty()
    }

    /// `(index, token)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (TokenId, &str)> + '_ {
        self.backward.iter().map(String::as_str).enumerate()
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new()
    }
}

fn special_position(special: SpecialToken) -> TokenId {
    SpecialToken::ALL
        .iter()
        .position(|s| *s == special)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_vocab_holds_specials_in_order() {
        let v = Vocabulary::new();
        assert_eq!(v.len(), 4);
        assert_eq!(v.token_of(0), Some("[PAD]"));
        assert_eq!(v.token_of(1), Some("[UNK]"));
        assert_eq!(v.token_of(2), Some("[SEP]"));
        assert_eq!(v.token_of(3), Some("[CLS]"));
        assert_eq!(v.token_of(4), None);
    }

    #[test]
    fn add_token_assigns_next_index_once() {
        let mut v = Vocabulary::new();
        assert_eq!(v.add_token("hello"), 4);
        assert_eq!(v.add_token("world"), 5);
        assert_eq!(v.add_token("hello"), 4);
        assert_eq!(v.len(), 6);
    }

    #[test]
    fn index_zero_is_present_not_absent() {
        let v = Vocabulary::new();
        assert_eq!(v.id_of("[PAD]"), Some(0));
        assert_eq!(v.id_of("missing"), None);
    }

    #[test]
    fn forward_and_backward_stay_inverse() {
        let mut v = Vocabulary::new();
        for t in ["a", "b", "a", "c", "b", "d"] {
            v.add_token(t);
        }
        for (id, token) in v.iter() {
            assert_eq!(v.id_of(token), Some(id));
        }
        assert_eq!(v.len(), 8);
    }

    #[test]
    fn special_ids_match_insertion_order() {
        let v = Vocabulary::new();
        for (pos, special) in SpecialToken::ALL.into_iter().enumerate() {
            assert_eq!(v.special_id(special), pos);
        }
    }

    #[test]
    fn serializes_as_ordered_token_list() {
        let mut v = Vocabulary::new();
        v.add_token("hi");
        let json = serde_json::to_string(&v).unwrap_or_default();
        assert_eq!(json, r#"{"tokens":["[PAD]","[UNK]","[SEP]","[CLS]","hi"]}"#);
    }
}
