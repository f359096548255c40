//! Constants used throughout the notes core crate.

/// Default root directory for the file-backed store.
pub const DEFAULT_NOTES_DATA_DIR: &str = "notes_data";

/// Directory under the data root holding one sharded directory per note.
pub const NOTES_DIR_NAME: &str = "notes";

/// Filename of the JSON document inside each note directory.
pub const NOTE_JSON_FILENAME: &str = "note.json";

/// Suffix of in-flight writes; such files are never read back as documents.
pub const TEMP_FILE_SUFFIX: &str = ".tmp";
