//! Document identifiers and sharded-path utilities.
//!
//! Notes are keyed by a 12-byte [`ObjectId`], rendered as **24 lowercase hexadecimal
//! characters**. This is the identifier shape used by document stores, so identifiers are stable
//! whichever store backend is configured.
//!
//! ## Byte layout
//! - bytes `0..4`: Unix seconds at generation time (big-endian)
//! - bytes `4..9`: random value chosen once per process
//! - bytes `9..12`: counter (big-endian), randomly seeded, wrapping at 2^24
//!
//! Because the timestamp leads, identifiers generated later sort after earlier ones (to the
//! second), and the creation time can be recovered with [`ObjectId::timestamp`].
//!
//! ## Accepted input
//! Externally supplied identifiers (URL paths, CLI arguments) must be exactly 24 ASCII hex
//! digits. Uppercase digits are accepted and normalised; every other shape is rejected by
//! [`ObjectId::parse`].
//!
//! ## Sharded directory layout
//! For an identifier `i`, file-backed stores place the document under
//! `parent_dir/<i[20..22]>/<i[22..24]>/<i>/`.
//!
//! The shard keys come from the counter bytes rather than the timestamp, so notes created close
//! together still spread across directories.

mod object_id;

pub use object_id::ObjectId;

/// Error type for identifier operations.
#[derive(Debug, thiserror::Error)]
pub enum IdError {
    /// Invalid input provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for identifier operations.
pub type IdResult<T> = Result<T, IdError>;
