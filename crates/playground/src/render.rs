use serde::Serialize;
use tokenize::TokenId;

use crate::error::PlaygroundError;

/// Everything the encode action shows: the indices, the text decoded back
/// from them, and the vocabulary size afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EncodeReport {
    /// encoded indices in input order
    pub ids: Vec<TokenId>,
    /// `ids` decoded back to text
    pub decoded: String,
    /// vocabulary size after encoding
    pub vocab_size: usize,
}

impl EncodeReport {
    /// Renders the report as the three readouts, one per line.
    pub fn render(&self, pretty: bool) -> Result<String, PlaygroundError> {
        Ok(format!(
            "Encoded: {}\nDecoded: {}\n{}",
            render_json(&self.ids, pretty)?,
            self.decoded,
            render_vocab_size(self.vocab_size)
        ))
    }
}

/// Serializes `value` as JSON; `pretty` indents nested values by two spaces.
pub fn render_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String, PlaygroundError> {
    let out = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    out.map_err(PlaygroundError::Render)
}

/// `Vocabulary Size: N`
pub fn render_vocab_size(size: usize) -> String {
    format!("Vocabulary Size: {size}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> EncodeReport {
        EncodeReport {
            ids: vec![4, 5],
            decoded: "hello world".to_string(),
            vocab_size: 6,
        }
    }

    #[test]
    fn compact_render_is_one_line_per_readout() {
        let out = report().render(false).unwrap_or_default();
        assert_eq!(out, "Encoded: [4,5]\nDecoded: hello world\nVocabulary Size: 6");
    }

    #[test]
    fn pretty_render_indents_by_two_spaces() {
        let out = report().render(true).unwrap_or_default();
        assert!(out.starts_with("Encoded: [\n  4,\n  5\n]\n"));
        assert!(out.ends_with("Vocabulary Size: 6"));
    }

    #[test]
    fn empty_ids_render_as_empty_array() {
        let json = render_json(&Vec::<TokenId>::new(), true).unwrap_or_default();
        assert_eq!(json, "[]");
    }
}
