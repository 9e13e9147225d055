//! Record validation
//!
//! Rules are checked in order and the first failure wins:
//! 1. key is non-empty
//! 2. payload is present (an empty payload is fine)
//! 3. media type is non-empty
//! 4. media type starts with `type/subtype`

use std::sync::OnceLock;

use regex::Regex;

use super::Record;
use crate::error::{MimeError, Result};

/// Prefix every media type must start with; parameters are not checked
const MEDIA_TYPE_PATTERN: &str = r"^[A-Za-z0-9]+/[A-Za-z0-9]+";

static MEDIA_TYPE_RE: OnceLock<Regex> = OnceLock::new();

fn media_type_regex() -> &'static Regex {
    MEDIA_TYPE_RE.get_or_init(|| Regex::new(MEDIA_TYPE_PATTERN).expect("media type pattern compiles"))
}

/// Check whether `media_type` has an acceptable `type/subtype` prefix
pub fn is_valid_media_type(media_type: &str) -> bool {
    media_type_regex().is_match(media_type)
}

/// Decide whether `(key, record)` may be stored
pub fn validate(key: &str, record: &Record) -> Result<()> {
    if key.is_empty() {
        return Err(MimeError::EmptyKey);
    }
    if record.payload().is_none() {
        return Err(MimeError::NilPayload);
    }
    let media_type = record.media_type();
    if media_type.is_empty() {
        return Err(MimeError::EmptyContentType);
    }
    if !is_valid_media_type(media_type) {
        return Err(MimeError::InvalidContentType(media_type.to_string()));
    }
    Ok(())
}
