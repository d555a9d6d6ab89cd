//! Sentence assembler
//!
//! A sentence is one status word plus its attribute words, terminated on the
//! wire by an empty word. The assembler reads words one at a time and sorts
//! them into the sentence by their leading byte:
//!
//! - `!status` sets (or overwrites) the sentence status
//! - `=key=value` appends an attribute
//! - anything else is logged and ignored
//!
//! Attribute keys are not guaranteed unique. Lookup by key returns the
//! FIRST match; writers append unconditionally.

use std::io::Read;

use crate::error::{Result, RosError};
use crate::protocol::word::{read_word, MAX_WORD_SIZE};

/// One protocol sentence: a status tag plus ordered attributes
///
/// The status is stored without its leading `!`. Word payloads are not
/// guaranteed to be valid UTF-8; they are converted lossily, which is
/// harmless for the ASCII output RouterOS produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// Status tag with the leading `!` stripped (`done`, `trap`, `re`, ...)
    status: String,

    /// Ordered key/value attributes, duplicates kept as received
    attributes: Vec<(String, String)>,
}

impl Sentence {
    /// The sentence status (`done`, `trap`, `re`, ...)
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Look up an attribute value by key
    ///
    /// Returns the first match when the key occurs more than once.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Look up an attribute pair by position
    pub fn attribute_at(&self, index: usize) -> Option<(&str, &str)> {
        self.attributes
            .get(index)
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterate over all attributes in wire order
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of attributes
    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }
}

/// Read one complete sentence from a stream
///
/// Loops over words until the empty terminator word. Transport errors abort
/// the sentence and propagate. A sentence that terminates without ever
/// carrying a status word is a protocol error. Malformed attribute words are
/// logged and skipped without failing the sentence.
pub fn read_sentence<R: Read>(reader: &mut R) -> Result<Sentence> {
    let mut status: Option<String> = None;
    let mut attributes: Vec<(String, String)> = Vec::new();

    loop {
        let word = read_word(reader, MAX_WORD_SIZE)?;

        // Empty word ends the sentence
        if word.is_empty() {
            break;
        }

        match word[0] {
            b'!' => {
                let tag = String::from_utf8_lossy(&word[1..]).into_owned();
                if let Some(ref previous) = status {
                    tracing::warn!(
                        "Status word !{} overwrites earlier status !{}",
                        tag,
                        previous
                    );
                }
                status = Some(tag);
            }
            b'=' => {
                let text = String::from_utf8_lossy(&word[1..]);
                match text.find('=') {
                    Some(split) => {
                        let key = text[..split].to_string();
                        let value = text[split + 1..].to_string();
                        attributes.push((key, value));
                    }
                    None => {
                        tracing::warn!("Ignoring misformed attribute word: ={}", text);
                    }
                }
            }
            _ => {
                tracing::warn!(
                    "Ignoring unknown word: {}",
                    String::from_utf8_lossy(&word)
                );
            }
        }
    }

    match status {
        Some(status) => Ok(Sentence { status, attributes }),
        None => Err(RosError::Protocol(
            "Sentence terminated without a status word".to_string(),
        )),
    }
}
