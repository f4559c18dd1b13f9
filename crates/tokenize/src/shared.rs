use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::tokenizer::{Encoding, GrowthMode, WhitespaceTokenizer};
use crate::vocab::TokenId;

/// Cloneable handle to one tokenizer shared between threads.
///
/// Every call holds a single lock for its whole duration, so the
/// check-then-insert of vocabulary growth is never interleaved. The
/// vocabulary is append-only, so a poisoned lock is taken over instead of
/// propagated.
#[derive(Clone, Debug, Default)]
pub struct SharedTokenizer {
    inner: Arc<Mutex<WhitespaceTokenizer>>,
}

impl SharedTokenizer {
    /// Wraps an existing tokenizer.
    pub fn new(tokenizer: WhitespaceTokenizer) -> Self {
        Self {
            inner: Arc::new(Mutex::new(tokenizer)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, WhitespaceTokenizer> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// See [`WhitespaceTokenizer::add_token`].
    pub fn add_token(&self, token: &str) -> TokenId {
        self.lock().add_token(token)
    }

    /// See [`WhitespaceTokenizer::tokenize`].
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.lock().tokenize(text)
    }

    /// See [`WhitespaceTokenizer::encode`].
    pub fn encode(&self, text: &str) -> Vec<TokenId> {
        self.lock().encode(text)
    }

    /// See [`WhitespaceTokenizer::encode_with_tokens`].
    pub fn encode_with_tokens(&self, text: &str) -> Encoding {
        self.lock().encode_with_tokens(text)
    }

    /// See [`WhitespaceTokenizer::decode`].
    pub fn decode(&self, indices: &[TokenId]) -> String {
        self.lock().decode(indices)
    }

    /// See [`WhitespaceTokenizer::vocab_size`].
    pub fn vocab_size(&self) -> usize {
        self.lock().vocab_size()
    }

    /// See [`WhitespaceTokenizer::set_mode`].
    pub fn set_mode(&self, mode: GrowthMode) {
        self.lock().set_mode(mode);
    }

    /// Runs `f` with exclusive access, for sequences that must not interleave
    /// with other callers (e.g. encode then decode).
    pub fn with<R>(&self, f: impl FnOnce(&mut WhitespaceTokenizer) -> R) -> R {
        f(&mut self.lock())
    }

    /// Copy of the tokenizer as it is right now.
    pub fn snapshot(&self) -> WhitespaceTokenizer {
        self.lock().clone()
    }
}

impl From<WhitespaceTokenizer> for SharedTokenizer {
    fn from(tokenizer: WhitespaceTokenizer) -> Self {
        Self::new(tokenizer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn concurrent_encoders_agree_on_indices() {
        let shared = SharedTokenizer::default();
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let s = shared.clone();
                thread::spawn(move || {
                    let text = format!("common w{} common", i % 4);
                    s.encode(&text)
                })
            })
            .collect();
        for h in handles {
            let ids = h.join().unwrap_or_default();
            assert_eq!(ids.len(), 3);
        }
        // [PAD] [UNK] [SEP] [CLS] common w0 w1 w2 w3
        assert_eq!(shared.vocab_size(), 9);

        let snap = shared.snapshot();
        let common = snap.vocabulary().id_of("common");
        assert!(common.is_some());
        for (id, token) in snap.vocabulary().iter() {
            assert_eq!(snap.vocabulary().id_of(token), Some(id));
        }
    }

    #[test]
    fn with_runs_round_trip_atomically() {
        let shared = SharedTokenizer::new(WhitespaceTokenizer::new());
        let decoded = shared.with(|t| {
            let ids = t.encode("alpha beta");
            t.decode(&ids)
        });
        assert_eq!(decoded, "alpha beta");
        assert_eq!(shared.decode(&[4, 5]), "alpha beta");
    }
}
