use std::collections::HashSet;

use proptest::prelude::*;
use quickcheck::quickcheck;
use tokenize::{SpecialToken, WhitespaceTokenizer};

// words never collide with the bracketed special literals
fn word() -> impl Strategy<Value = String> {
    "[a-z0-9,.!?']{1,8}"
}

fn sentence() -> impl Strategy<Value = (Vec<String>, String)> {
    (prop::collection::vec(word(), 0..24), prop::collection::vec("[ \t\n]{1,3}", 25))
        .prop_map(|(words, gaps)| {
            let mut text = String::new();
            for (w, gap) in words.iter().zip(gaps.iter()) {
                text.push_str(gap);
                text.push_str(w);
            }
            if let Some(last) = gaps.last() {
                text.push_str(last);
            }
            (words, text)
        })
}

proptest! {
    #[test]
    fn encoding_is_deterministic((_, text) in sentence()) {
        let a = WhitespaceTokenizer::new().encode(&text);
        let b = WhitespaceTokenizer::new().encode(&text);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn round_trip_normalizes_spacing((words, text) in sentence()) {
        let mut t = WhitespaceTokenizer::new();
        let ids = t.encode(&text);
        prop_assert_eq!(ids.len(), words.len());
        prop_assert_eq!(t.decode(&ids), words.join(" "));
    }

    #[test]
    fn growth_equals_distinct_new_tokens(
        (first, text_a) in sentence(),
        (second, text_b) in sentence(),
    ) {
        let mut t = WhitespaceTokenizer::new();
        t.encode(&text_a);
        let after_a = t.vocab_size();
        let seen: HashSet<&String> = first.iter().collect();
        prop_assert_eq!(after_a, 4 + seen.len());

        t.encode(&text_b);
        let fresh: HashSet<&String> = second.iter().filter(|w| !seen.contains(w)).collect();
        prop_assert!(t.vocab_size() >= after_a);
        prop_assert_eq!(t.vocab_size(), after_a + fresh.len());
    }

    #[test]
    fn indices_are_contiguous_and_inverse((_, text) in sentence()) {
        let mut t = WhitespaceTokenizer::new();
        t.tokenize(&text);
        let vocab = t.vocabulary();
        for (expected, (id, token)) in vocab.iter().enumerate() {
            prop_assert_eq!(id, expected);
            prop_assert_eq!(vocab.id_of(token), Some(id));
        }
    }

    #[test]
    fn unassigned_indices_decode_to_unk(extra in 0usize..10_000) {
        let t = WhitespaceTokenizer::new();
        let id = t.vocab_size() + extra;
        prop_assert_eq!(t.decode(&[id]), SpecialToken::Unk.literal());
    }
}

quickcheck! {
    fn add_token_is_idempotent(token: String) -> bool {
        let mut t = WhitespaceTokenizer::new();
        let first = t.add_token(&token);
        let size = t.vocab_size();
        t.add_token(&token) == first && t.vocab_size() == size
    }

    fn existing_indices_never_move(tokens: Vec<String>) -> bool {
        let mut t = WhitespaceTokenizer::new();
        let ids: Vec<usize> = tokens.iter().map(|tok| t.add_token(tok)).collect();
        tokens
            .iter()
            .zip(ids)
            .all(|(tok, id)| t.vocabulary().id_of(tok) == Some(id))
    }
}
