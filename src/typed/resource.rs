//! System resource projection
//!
//! Maps `/system/resource/print` replies to a typed record. The reply
//! carries a single data sentence.

use crate::protocol::{Reply, Sentence, STATUS_RE};
use crate::typed::parse::{parse_duration, parse_u32, parse_u64};

/// System resource figures of one router
///
/// Units are normalized: memory and disk space in bytes (the device
/// reports KiB), CPU frequency in Hz (the device reports MHz), uptime in
/// seconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemResource {
    pub uptime_secs: u64,

    pub version: String,
    pub architecture_name: String,
    pub board_name: String,

    pub cpu_model: String,
    pub cpu_count: u32,
    pub cpu_load: u32,
    pub cpu_frequency_hz: u64,

    pub free_memory: u64,
    pub total_memory: u64,
    pub free_hdd_space: u64,
    pub total_hdd_space: u64,

    pub write_sect_since_reboot: u64,
    pub write_sect_total: u64,
    pub bad_blocks: u64,
}

impl SystemResource {
    /// Map one data sentence to a record
    pub fn from_sentence(sentence: &Sentence) -> Self {
        Self {
            uptime_secs: parse_duration(sentence.attribute("uptime")),
            version: sentence.attribute("version").unwrap_or_default().to_string(),
            architecture_name: sentence
                .attribute("architecture-name")
                .unwrap_or_default()
                .to_string(),
            board_name: sentence
                .attribute("board-name")
                .unwrap_or_default()
                .to_string(),
            cpu_model: sentence.attribute("cpu").unwrap_or_default().to_string(),
            cpu_count: parse_u32(sentence.attribute("cpu-count")),
            cpu_load: parse_u32(sentence.attribute("cpu-load")),
            cpu_frequency_hz: parse_u64(sentence.attribute("cpu-frequency")) * 1_000_000,
            // the device counts memory and disk space in units of 1024 bytes
            free_memory: parse_u64(sentence.attribute("free-memory")) * 1024,
            total_memory: parse_u64(sentence.attribute("total-memory")) * 1024,
            free_hdd_space: parse_u64(sentence.attribute("free-hdd-space")) * 1024,
            total_hdd_space: parse_u64(sentence.attribute("total-hdd-space")) * 1024,
            write_sect_since_reboot: parse_u64(sentence.attribute("write-sect-since-reboot")),
            write_sect_total: parse_u64(sentence.attribute("write-sect-total")),
            bad_blocks: parse_u64(sentence.attribute("bad-blocks")),
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
