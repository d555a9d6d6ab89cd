//! Reply aggregator
//!
//! A reply is the ordered list of sentences a command produces, up to and
//! including the sentence whose status terminates the exchange (`done` or
//! `trap`). The aggregator owns its sentences outright; dropping the reply
//! releases everything exactly once.

use std::io::Read;

use crate::error::{Result, RosError};
use crate::protocol::sentence::{read_sentence, Sentence};

/// Status tag that terminates a reply successfully
pub const STATUS_DONE: &str = "done";

/// Status tag that terminates a reply with a server-side error
pub const STATUS_TRAP: &str = "trap";

/// Status tag of a data-carrying sentence
pub const STATUS_RE: &str = "re";

/// The full ordered set of sentences returned for one command
///
/// A successfully aggregated reply is never empty: its last sentence is
/// always the terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    sentences: Vec<Sentence>,
}

impl Reply {
    /// All sentences in wire order
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Iterate over sentences in wire order
    pub fn iter(&self) -> std::slice::Iter<'_, Sentence> {
        self.sentences.iter()
    }

    /// Number of sentences
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Whether the reply holds no sentences
    ///
    /// Never true for a reply returned by the aggregator.
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// The terminating sentence (status `done` or `trap`)
    pub fn terminator(&self) -> &Sentence {
        // aggregation guarantees at least one sentence
        self.sentences.last().expect("reply is never empty")
    }

    /// Whether the reply terminated with a `trap`
    pub fn is_trap(&self) -> bool {
        self.terminator().status() == STATUS_TRAP
    }
}

impl<'a> IntoIterator for &'a Reply {
    type Item = &'a Sentence;
    type IntoIter = std::slice::Iter<'a, Sentence>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Read one complete reply from a stream
///
/// Appends sentences until one with a terminating status is appended; that
/// sentence stays in the list. Any error drops the partially built state.
pub fn read_reply<R: Read>(reader: &mut R) -> Result<Reply> {
    let mut sentences = Vec::new();

    loop {
        let sentence = read_sentence(reader).map_err(|e| match e {
            RosError::Io(ref io) if io.kind() == std::io::ErrorKind::UnexpectedEof => {
                RosError::Protocol(format!(
                    "Stream closed after {} sentences, before a terminator",
                    sentences.len()
                ))
            }
            other => other,
        })?;

        let terminated =
            sentence.status() == STATUS_DONE || sentence.status() == STATUS_TRAP;
        sentences.push(sentence);

        if terminated {
            return Ok(Reply { sentences });
        }
    }
}
