//! Record Module
//!
//! The value type stored under every key.
//!
//! ## Responsibilities
//! - Hold a payload and the media type describing it
//! - Distinguish an absent payload from an empty one
//! - Validate (key, record) pairs before they reach the store

mod validator;

pub use validator::{is_valid_media_type, validate};

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Media type given to records built from strings
pub const TEXT_PLAIN_UTF8: &str = "text/plain; charset=UTF-8";

/// A payload plus its media type (`type/subtype[;params]`)
///
/// Records are replaced as a whole, never edited in place. Cloning is cheap:
/// the payload is a reference-counted `Bytes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// `None` means no payload was set at all, which the validator rejects
    payload: Option<Bytes>,

    media_type: String,
}

impl Record {
    /// Create a record from raw bytes and a media type
    pub fn new(payload: impl Into<Bytes>, media_type: impl Into<String>) -> Self {
        Self {
            payload: Some(payload.into()),
            media_type: media_type.into(),
        }
    }

    /// Create a `text/plain; charset=UTF-8` record
    pub fn text(s: impl Into<String>) -> Self {
        Self::new(s.into().into_bytes(), TEXT_PLAIN_UTF8)
    }

    /// Create a record with no payload at all
    pub fn without_payload(media_type: impl Into<String>) -> Self {
        Self {
            payload: None,
            media_type: media_type.into(),
        }
    }

    /// Payload bytes, or `None` if the payload is absent
    pub fn payload(&self) -> Option<&Bytes> {
        self.payload.as_ref()
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// The `type/subtype` part of the media type, without parameters
    pub fn essence(&self) -> &str {
        self.media_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
    }

    /// Consume the record, returning its parts
    pub fn into_parts(self) -> (Option<Bytes>, String) {
        (self.payload, self.media_type)
    }
}
