#![forbid(unsafe_code)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing
)]
#![deny(missing_docs, unused_must_use)]

//! Whitespace tokenizer with a vocabulary that grows as text is observed.
//!
//! Contract: every operation is total. Unknown indices decode to `[UNK]`,
//! empty or whitespace-only text tokenizes to nothing, and nothing here
//! returns an error or panics.
//!
//! Layout:
//! - `special.rs` — the four reserved tokens (`[PAD]`, `[UNK]`, `[SEP]`, `[CLS]`)
//! - `vocab.rs` — append-only bidirectional token/index mapping
//! - `tokenizer.rs` — `WhitespaceTokenizer`: tokenize / encode / decode
//! - `shared.rs` — `SharedTokenizer`, a lock-guarded handle for concurrent callers

/// Reserved tokens present in every vocabulary.
pub mod special;
/// Token/index mapping.
pub mod vocab;
/// Splitting, encoding and decoding.
pub mod tokenizer;
/// Thread-safe handle around a tokenizer.
pub mod shared;

pub use shared::SharedTokenizer;
pub use special::SpecialToken;
pub use tokenizer::{split_whitespace_tokens, Encoding, GrowthMode, WhitespaceTokenizer};
pub use vocab::{TokenId, Vocabulary};
