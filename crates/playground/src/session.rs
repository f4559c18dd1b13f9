use serde::de::Error as _;
use serde_json::Number;
use tokenize::{GrowthMode, TokenId, WhitespaceTokenizer};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::PlaygroundError;
use crate::render::{render_json, render_vocab_size, EncodeReport};

/// Help text listing the REPL commands.
pub const HELP: &str = "\
<text>            encode text, decode it back, show vocabulary size
:decode [4, 5]    decode a JSON array of indices
:vocab            list the vocabulary as JSON
:size             show the vocabulary size
:freeze           stop growing the vocabulary; unseen words encode to [UNK]
:help             show this help
:quit | :exit     leave
Commands other than :decode take no arguments.";

/// Outcome of one REPL line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    /// text to print
    Output(String),
    /// nothing to print (blank line)
    Nothing,
    /// the user asked to leave
    Quit,
}

/// One tokenizer owned for the lifetime of a terminal session.
#[derive(Debug)]
pub struct Session {
    tokenizer: WhitespaceTokenizer,
    pretty: bool,
}

impl Session {
    /// New session configured by `config`; seed text is trained in first.
    pub fn new(config: &Config) -> Self {
        let mut tokenizer = WhitespaceTokenizer::with_mode(config.mode);
        match &config.seed_text {
            Some(seed) => {
                let added = tokenizer.train(seed);
                info!(added, vocab_size = tokenizer.vocab_size(), "seeded vocabulary");
            }
            None if config.mode == GrowthMode::Frozen => {
                warn!("frozen mode without seed text: every word will encode to [UNK]");
            }
            None => {}
        }
        Self::with_tokenizer(tokenizer, config.pretty)
    }

    /// Session around an existing tokenizer.
    pub fn with_tokenizer(tokenizer: WhitespaceTokenizer, pretty: bool) -> Self {
        Self { tokenizer, pretty }
    }

    /// The session's tokenizer.
    pub fn tokenizer(&self) -> &WhitespaceTokenizer {
        &self.tokenizer
    }

    /// Encode action: trim, encode, decode the indices back.
    pub fn encode(&mut self, input: &str) -> EncodeReport {
        let ids = self.tokenizer.encode(input.trim());
        let decoded = self.tokenizer.decode(&ids);
        EncodeReport {
            ids,
            decoded,
            vocab_size: self.tokenizer.vocab_size(),
        }
    }

    /// Decode action: trim, parse a JSON integer array, decode it.
    /// Integers of any size are accepted; those that fit no index become `[UNK]`.
    pub fn decode(&self, input: &str) -> Result<String, PlaygroundError> {
        let numbers: Vec<Number> =
            serde_json::from_str(input.trim()).map_err(PlaygroundError::Indices)?;
        let indices = numbers
            .iter()
            .map(index_from_json)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.tokenizer.decode_optional(&indices))
    }

    /// Runs one REPL line. Lines that are not a known `:` command are encoded.
    pub fn handle_line(&mut self, line: &str) -> Result<Reply, PlaygroundError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Reply::Nothing);
        }
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest),
            None => (line, ""),
        };
        debug!(command = head, "handling line");
        if matches!(head, ":quit" | ":exit" | ":help" | ":vocab" | ":size" | ":freeze")
            && !rest.trim().is_empty()
        {
            return Err(PlaygroundError::UnexpectedArgument {
                command: head.to_string(),
                argument: rest.trim().to_string(),
            });
        }
        let out = match head {
            ":quit" | ":exit" => return Ok(Reply::Quit),
            ":help" => HELP.to_string(),
            ":decode" => self.decode(rest)?,
            ":vocab" => render_json(self.tokenizer.vocabulary(), self.pretty)?,
            ":size" => render_vocab_size(self.tokenizer.vocab_size()),
            ":freeze" => {
                self.tokenizer.set_mode(GrowthMode::Frozen);
                format!(
                    "vocabulary frozen at {} tokens",
                    self.tokenizer.vocab_size()
                )
            }
            _ => self.encode(line).render(self.pretty)?,
        };
        Ok(Reply::Output(out))
    }
}

// Without arbitrary precision, serde_json stores integers outside the
// i64..=u64 range as f64. Integral floats past those bounds are such integers;
// anything inside them that is not a u64/i64 was written as a float.
fn index_from_json(n: &Number) -> Result<Option<TokenId>, PlaygroundError> {
    if let Some(u) = n.as_u64() {
        return Ok(TokenId::try_from(u).ok());
    }
    if n.as_i64().is_some() {
        return Ok(None);
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && (f >= u64::MAX as f64 || f <= i64::MIN as f64) => {
            Ok(None)
        }
        _ => Err(PlaygroundError::Indices(serde_json::Error::custom(format!(
            "{n} is not an integer"
        )))),
    }
}
