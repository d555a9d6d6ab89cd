//! Wireless registration table projection
//!
//! Maps `/interface/wireless/registration-table/print` replies to typed
//! records, one per registered station.

use crate::protocol::{Reply, Sentence, STATUS_RE};
use crate::typed::parse::{parse_bool, parse_f64, parse_rx_tx};

/// One entry of the wireless registration table
///
/// Rates and signal figures keep the unit the router reports them in
/// (Mbps, dBm, percent); counters are raw totals.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationEntry {
    pub interface: String,
    pub radio_name: String,

    pub ap: bool,
    pub wds: bool,

    pub rx_rate: f64,
    pub tx_rate: f64,

    pub rx_packets: u64,
    pub tx_packets: u64,
    pub rx_bytes: u64,
    pub tx_bytes: u64,
    pub rx_frames: u64,
    pub tx_frames: u64,
    pub rx_frame_bytes: u64,
    pub tx_frame_bytes: u64,
    pub rx_hw_frames: u64,
    pub tx_hw_frames: u64,
    pub rx_hw_frame_bytes: u64,
    pub tx_hw_frame_bytes: u64,

    pub rx_signal_strength: f64,
    pub tx_signal_strength: f64,
    pub signal_to_noise: f64,

    pub rx_ccq: f64,
    pub tx_ccq: f64,
}

impl RegistrationEntry {
    /// Map one data sentence to a record
    pub fn from_sentence(sentence: &Sentence) -> Self {
        let (rx_packets, tx_packets) = parse_rx_tx(sentence.attribute("packets"));
        let (rx_bytes, tx_bytes) = parse_rx_tx(sentence.attribute("bytes"));
        let (rx_frames, tx_frames) = parse_rx_tx(sentence.attribute("frames"));
        let (rx_frame_bytes, tx_frame_bytes) = parse_rx_tx(sentence.attribute("frame-bytes"));
        let (rx_hw_frames, tx_hw_frames) = parse_rx_tx(sentence.attribute("hw-frames"));
        let (rx_hw_frame_bytes, tx_hw_frame_bytes) =
            parse_rx_tx(sentence.attribute("hw-frame-bytes"));

        Self {
            interface: sentence
                .attribute("interface")
                .unwrap_or_default()
                .to_string(),
            radio_name: sentence
                .attribute("radio-name")
                .unwrap_or_default()
                .to_string(),
            ap: parse_bool(sentence.attribute("ap")),
            wds: parse_bool(sentence.attribute("wds")),
            rx_rate: parse_f64(sentence.attribute("rx-rate")),
            tx_rate: parse_f64(sentence.attribute("tx-rate")),
            rx_packets,
            tx_packets,
            rx_bytes,
            tx_bytes,
            rx_frames,
            tx_frames,
            rx_frame_bytes,
            tx_frame_bytes,
            rx_hw_frames,
            tx_hw_frames,
            rx_hw_frame_bytes,
            tx_hw_frame_bytes,
            rx_signal_strength: parse_f64(sentence.attribute("signal-strength")),
            tx_signal_strength: parse_f64(sentence.attribute("tx-signal-strength")),
            signal_to_noise: parse_f64(sentence.attribute("signal-to-noise")),
            rx_ccq: parse_f64(sentence.attribute("rx-ccq")),
            tx_ccq: parse_f64(sentence.attribute("tx-ccq")),
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
