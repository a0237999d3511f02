//! Recipe identifier.
//!
//! Identifiers are 12 bytes rendered as 24 lowercase hex characters:
//!
//! ```text
//! | seconds since epoch (4, BE) | process random (5) | counter (3, BE) |
//! ```
//!
//! The layout keeps identifiers unique across concurrent requests in one
//! process (counter) and across processes (random component), and roughly
//! ordered by creation time.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use std::sync::atomic::{AtomicU32, Ordering};

use chrono::{DateTime, Utc};
use thiserror::Error;

const ID_LEN: usize = 12;
const HEX_LEN: usize = ID_LEN * 2;
const COUNTER_MASK: u32 = 0x00FF_FFFF;

static PROCESS_UNIQUE: LazyLock<[u8; 5]> = LazyLock::new(rand::random);
static COUNTER: LazyLock<AtomicU32> =
    LazyLock::new(|| AtomicU32::new(rand::random::<u32>() & COUNTER_MASK));

/// Validation errors returned when parsing a [`RecipeId`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecipeIdValidationError {
    /// The identifier was empty.
    #[error("recipe id must not be empty")]
    Empty,
    /// The identifier was not exactly 24 bytes long.
    #[error("recipe id must be 24 hex characters, got {length} bytes")]
    InvalidLength {
        /// Number of bytes received.
        length: usize,
    },
    /// The identifier contained non-hex characters.
    #[error("recipe id must contain only hex characters")]
    InvalidHex,
}

/// Opaque, server-generated recipe identifier.
///
/// # Examples
/// ```
/// use recipes_api::domain::RecipeId;
///
/// let id: RecipeId = "65a1f0c2e4b0a1b2c3d4e5f6".parse().expect("valid id");
/// assert_eq!(id.to_string(), "65a1f0c2e4b0a1b2c3d4e5f6");
/// assert!("zz".parse::<RecipeId>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecipeId([u8; ID_LEN]);

impl RecipeId {
    /// Generate a new identifier stamped with `now`.
    #[must_use]
    pub fn generate(now: DateTime<Utc>) -> Self {
        let seconds = u32::try_from(now.timestamp()).unwrap_or(u32::MAX);
        let counter = COUNTER.fetch_add(1, Ordering::Relaxed) & COUNTER_MASK;

        let mut bytes = [0_u8; ID_LEN];
        bytes[..4].copy_from_slice(&seconds.to_be_bytes());
        bytes[4..9].copy_from_slice(PROCESS_UNIQUE.as_slice());
        bytes[9..].copy_from_slice(&counter.to_be_bytes()[1..]);
        Self(bytes)
    }

    /// Raw identifier bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; ID_LEN] {
        &self.0
    }

    /// Lowercase hex rendering used on the wire and in storage.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl FromStr for RecipeId {
    type Err = RecipeIdValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.is_empty() {
            return Err(RecipeIdValidationError::Empty);
        }
        if value.len() != HEX_LEN {
            return Err(RecipeIdValidationError::InvalidLength {
                length: value.len(),
            });
        }
        let mut bytes = [0_u8; ID_LEN];
        hex::decode_to_slice(value, &mut bytes)
            .map_err(|_| RecipeIdValidationError::InvalidHex)?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
