//! Key Validation
//!
//! Shared by every pool and the facade. Rules are checked in order and the
//! first failure wins.

use crate::cache::MAX_KEY_LENGTH;
use crate::error::InvalidKeyError;

/// Validates a single cache key.
///
/// A key is valid when it is 1 to 64 bytes long and made only of
/// `A-Z`, `a-z`, `0-9`, `_`, `.` and `-`.
pub fn validate_key(key: &str) -> Result<(), InvalidKeyError> {
    if key.is_empty() {
        return Err(InvalidKeyError::Empty);
    }

    if key.len() > MAX_KEY_LENGTH {
        return Err(InvalidKeyError::TooLong {
            key: key.to_string(),
            length: key.len(),
        });
    }

    if !key.bytes().all(is_key_byte) {
        return Err(InvalidKeyError::InvalidCharacters {
            key: key.to_string(),
        });
    }

    Ok(())
}

/// Validates every key up front, returning the owned keys on success.
pub fn validate_keys<I, K>(keys: I) -> Result<Vec<String>, InvalidKeyError>
where
    I: IntoIterator<Item = K>,
    K: AsRef<str>,
{
    keys.into_iter()
        .map(|key| {
            let key = key.as_ref();
            validate_key(key).map(|()| key.to_string())
        })
        .collect()
}

fn is_key_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'_' | b'.' | b'-')
}
