//! Protocol Module
//!
//! The RouterOS API wire protocol: words, sentences, replies.
//!
//! ## Wire Format
//!
//! Every string travels as a length-prefixed *word*:
//!
//! ```text
//! ┌───────────────────┬─────────────────────────────┐
//! │ Length (1-5)      │         Payload             │
//! └───────────────────┴─────────────────────────────┘
//! ```
//!
//! Words group into *sentences*, terminated by an empty word:
//!
//! ```text
//! !re  =name=ether1  =mtu=1500  <empty>
//! ```
//!
//! Sentences group into *replies*; the reply for one command ends with a
//! sentence whose status is `done` (success) or `trap` (server error):
//!
//! ```text
//! !re ... <empty>  !re ... <empty>  !done <empty>
//! ```
//!
//! ### Word Classes
//! - `!status`    - sentence status (`done`, `trap`, `re`, `fatal`)
//! - `=key=value` - attribute
//! - anything else is ignored

mod reply;
mod sentence;
mod word;

pub use reply::{read_reply, Reply, STATUS_DONE, STATUS_RE, STATUS_TRAP};
pub use sentence::{read_sentence, Sentence};
pub use word::{
    decode_length, encode_length, encode_word, read_word, MAX_PREFIX_SIZE, MAX_WORD_SIZE,
};
