//! System health projection
//!
//! Maps `/system/health/print` replies to a typed record. Only boards with
//! sensors report these attributes; absent values parse to NaN.

use crate::protocol::{Reply, Sentence, STATUS_RE};
use crate::typed::parse::parse_f64;

/// Sensor readings of one router
#[derive(Debug, Clone, PartialEq)]
pub struct SystemHealth {
    /// Supply voltage in volts
    pub voltage: f64,

    /// Board temperature in degrees Celsius
    pub temperature: f64,
}

impl SystemHealth {
    /// Map one data sentence to a record
    pub fn from_sentence(sentence: &Sentence) -> Self {
        Self {
            voltage: parse_f64(sentence.attribute("voltage")),
            temperature: parse_f64(sentence.attribute("temperature")),
        }
    }

    /// Map the first data sentence of a reply, if any
    pub fn from_reply(reply: &Reply) -> Option<Self> {
        reply
            .iter()
            .find(|s| s.status() == STATUS_RE)
            .map(Self::from_sentence)
    }
}
