//! Internal implementation of [`ObjectId`].

use crate::{IdError, IdResult};
use chrono::{DateTime, TimeZone, Utc};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::OnceLock;
use std::{fmt, str::FromStr};

const COUNTER_MASK: u32 = 0x00ff_ffff;

/// Random bytes fixed for the lifetime of the process.
static PROCESS_UNIQUE: OnceLock<[u8; 5]> = OnceLock::new();

/// Per-process counter; only the low 24 bits are used.
static COUNTER: OnceLock<AtomicU32> = OnceLock::new();

fn process_unique() -> [u8; 5] {
    *PROCESS_UNIQUE.get_or_init(rand::random::<[u8; 5]>)
}

fn next_count() -> u32 {
    let counter = COUNTER.get_or_init(|| AtomicU32::new(rand::random::<u32>() & COUNTER_MASK));
    counter.fetch_add(1, Ordering::Relaxed) & COUNTER_MASK
}

/// A 12-byte document identifier in canonical form.
///
/// Once constructed, the identifier is always valid: [`ObjectId::new`] generates a fresh one,
/// [`ObjectId::parse`] validates an externally supplied string. Display output is always 24
/// lowercase hex characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId([u8; 12]);

impl Default for ObjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl ObjectId {
    /// Generates a new identifier stamped with the current time.
    pub fn new() -> Self {
        // Four-byte seconds field: wraps in 2106, like every id of this format.
        let seconds = Utc::now().timestamp() as u32;
        Self::from_parts(seconds, process_unique(), next_count())
    }

    /// Assembles an identifier from its components.
    ///
    /// Only the low 24 bits of `counter` are kept.
    pub fn from_parts(seconds: u32, process: [u8; 5], counter: u32) -> Self {
        let mut bytes = [0u8; 12];
        bytes[0..4].copy_from_slice(&seconds.to_be_bytes());
        bytes[4..9].copy_from_slice(&process);
        bytes[9..12].copy_from_slice(&(counter & COUNTER_MASK).to_be_bytes()[1..4]);
        Self(bytes)
    }

    /// Validates and parses a 24-character hex identifier.
    ///
    /// Uppercase hex digits are accepted; the result always displays in lowercase.
    ///
    /// # Errors
    ///
    /// Returns [`IdError::InvalidInput`] if `input` is not exactly 24 hex digits.
    pub fn parse(input: &str) -> IdResult<Self> {
        if !Self::is_well_formed(input) {
            return Err(IdError::InvalidInput(format!(
                "identifier must be 24 hex characters, got: '{}'",
                input
            )));
        }

        let mut bytes = [0u8; 12];
        hex::decode_to_slice(input, &mut bytes)
            .map_err(|e| IdError::InvalidInput(format!("invalid hex '{}': {}", input, e)))?;
        Ok(Self(bytes))
    }

    /// Returns true if `input` has the shape of an identifier.
    ///
    /// Purely syntactic: exactly 24 bytes, every byte an ASCII hex digit.
    pub fn is_well_formed(input: &str) -> bool {
        input.len() == 24 && input.bytes().all(|b| b.is_ascii_hexdigit())
    }

    /// Returns the generation time encoded in the leading four bytes.
    pub fn timestamp(&self) -> DateTime<Utc> {
        let seconds = u32::from_be_bytes([self.0[0], self.0[1], self.0[2], self.0[3]]);
        Utc.timestamp_opt(i64::from(seconds), 0)
            .single()
            .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
    }

    /// Returns `parent_dir/<s1>/<s2>/<id>/`, with `s1`/`s2` taken from the last four hex
    /// characters.
    pub fn sharded_dir(&self, parent_dir: &Path) -> PathBuf {
        let canonical = self.to_string();
        let s1 = &canonical[20..22];
        let s2 = &canonical[22..24];
        parent_dir.join(s1).join(s2).join(&canonical)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl FromStr for ObjectId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectId::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ObjectId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ObjectId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ObjectId::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_generates_well_formed_id() {
        let id = ObjectId::new();
        let canonical = id.to_string();

        assert_eq!(canonical.len(), 24);
        assert!(ObjectId::is_well_formed(&canonical));
        assert_eq!(canonical, canonical.to_lowercase());
    }

    #[test]
    fn test_new_ids_are_distinct() {
        let a = ObjectId::new();
        let b = ObjectId::new();

        assert_ne!(a, b);
    }

    #[test]
    fn test_new_stamps_current_time() {
        let before = Utc::now().timestamp();
        let id = ObjectId::new();
        let after = Utc::now().timestamp();

        let ts = id.timestamp().timestamp();
        assert!(ts >= before && ts <= after);
    }

    #[test]
    fn test_parse_valid_id() {
        let canonical = "507f1f77bcf86cd799439011";
        let id = ObjectId::parse(canonical).expect("should parse");

        assert_eq!(id.to_string(), canonical);
    }

    #[test]
    fn test_parse_normalises_uppercase() {
        let id = ObjectId::parse("507F1F77BCF86CD799439011").expect("should parse");

        assert_eq!(id.to_string(), "507f1f77bcf86cd799439011");
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert!(ObjectId::parse("507f1f77bcf86cd79943901").is_err());
        assert!(ObjectId::parse("507f1f77bcf86cd7994390111").is_err());
        assert!(ObjectId::parse("").is_err());
    }

    #[test]
    fn test_parse_rejects_non_hex() {
        let result = ObjectId::parse("507f1f77bcf86cd79943901z");

        match result {
            Err(IdError::InvalidInput(msg)) => assert!(msg.contains("24 hex characters")),
            _ => panic!("Expected InvalidInput error"),
        }
    }

    #[test]
    fn test_parse_rejects_twelve_byte_strings() {
        // Twelve arbitrary characters are a valid raw id in some drivers, but not here.
        assert!(ObjectId::parse("abcdefghijkl").is_err());
    }

    #[test]
    fn test_parse_rejects_multibyte_input_of_matching_length() {
        assert!(ObjectId::parse("507f1f77bcf86cd7994390é").is_err());
    }

    #[test]
    fn test_from_parts_layout() {
        let id = ObjectId::from_parts(0x01020304, [0xaa, 0xbb, 0xcc, 0xdd, 0xee], 0xff000102);

        assert_eq!(id.to_string(), "01020304aabbccddee000102");
        assert_eq!(id.timestamp().timestamp(), 0x01020304);
    }

    #[test]
    fn test_counter_wraps_at_24_bits() {
        let id = ObjectId::from_parts(0, [0; 5], 0x01ff_ffff);

        assert_eq!(&id.to_string()[18..], "ffffff");
    }

    #[test]
    fn test_ids_share_process_bytes_and_advance_counter() {
        let first = ObjectId::new();
        let second = ObjectId::new();

        assert_eq!(first.0[4..9], second.0[4..9]);
        assert_ne!(first.0[9..12], second.0[9..12]);
    }

    #[test]
    fn test_timestamp_at_seconds_field_limit() {
        let id = ObjectId::from_parts(u32::MAX, [0; 5], 0);

        assert_eq!(id.timestamp().timestamp(), i64::from(u32::MAX));
        assert_eq!(&id.to_string()[..8], "ffffffff");
    }

    #[test]
    fn test_later_ids_sort_after_earlier_ones() {
        let early = ObjectId::from_parts(100, [9; 5], 500);
        let late = ObjectId::from_parts(101, [0; 5], 0);

        assert!(early < late);
    }

    #[test]
    fn test_sharded_dir_structure() {
        let id = ObjectId::parse("507f1f77bcf86cd799439011").unwrap();
        let parent = Path::new("/notes_data/notes");

        let sharded = id.sharded_dir(parent);

        assert_eq!(
            sharded,
            PathBuf::from("/notes_data/notes/90/11/507f1f77bcf86cd799439011")
        );
    }

    #[test]
    fn test_from_str_matches_parse() {
        let id: ObjectId = "507f1f77bcf86cd799439011".parse().unwrap();

        assert_eq!(id, ObjectId::parse("507f1f77bcf86cd799439011").unwrap());
    }

    #[test]
    fn test_serde_uses_hex_string() {
        let id = ObjectId::parse("507f1f77bcf86cd799439011").unwrap();

        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"507f1f77bcf86cd799439011\"");

        let back: ObjectId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);

        assert!(serde_json::from_str::<ObjectId>("\"nope\"").is_err());
    }
}
