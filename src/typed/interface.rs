//! Interface list projection
//!
//! Maps `/interface/print` replies to typed records.

use crate::protocol::{Reply, Sentence, STATUS_RE};
use crate::typed::parse::{parse_bool, parse_rx_tx, parse_u32};

/// One entry of the router's interface list
#[derive(Debug, Clone, PartialEq)]
pub struct Interface {
    pub name: String,
    /// Interface type as reported by the router (`ether`, `wlan`, ...)
    pub kind: String,
    pub comment: String,

    pub rx_packets: u64,
    pub tx_packets: u64,
    pub rx_bytes: u64,
    pub tx_bytes: u64,
    pub rx_errors: u64,
    pub tx_errors: u64,
    pub rx_drops: u64,
    pub tx_drops: u64,

    pub mtu: u32,
    pub l2mtu: u32,

    pub dynamic: bool,
    pub running: bool,
    /// Inverse of the `disabled` attribute
    pub enabled: bool,
}

impl Interface {
    /// Map one data sentence to a record
    pub fn from_sentence(sentence: &Sentence) -> Self {
        let (rx_packets, tx_packets) = parse_rx_tx(sentence.attribute("packets"));
        let (rx_bytes, tx_bytes) = parse_rx_tx(sentence.attribute("bytes"));
        let (rx_errors, tx_errors) = parse_rx_tx(sentence.attribute("errors"));
        let (rx_drops, tx_drops) = parse_rx_tx(sentence.attribute("drops"));

        Self {
            name: sentence.attribute("name").unwrap_or_default().to_string(),
            kind: sentence.attribute("type").unwrap_or_default().to_string(),
            comment: sentence.attribute("comment").unwrap_or_default().to_string(),
            rx_packets,
            tx_packets,
            rx_bytes,
            tx_bytes,
            rx_errors,
            tx_errors,
            rx_drops,
            tx_drops,
            mtu: parse_u32(sentence.attribute("mtu")),
            l2mtu: parse_u32(sentence.attribute("l2mtu")),
            dynamic: parse_bool(sentence.attribute("dynamic")),
            running: parse_bool(sentence.attribute("running")),
            enabled: !parse_bool(sentence.attribute("disabled")),
        }
    }

    /// Map every data sentence of a reply, skipping the terminator
    pub fn from_reply(reply: &Reply) -> Vec<Self> {
        reply
            .iter()
            .filter(|s| s.status() == STATUS_RE)
            .map(Self::from_sentence)
            .collect()
    }
}
