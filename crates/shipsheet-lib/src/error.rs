use thiserror::Error;

/// Convenient result alias for the shipsheet library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// A catalog record's `__type__` discriminator did not match the entity
    /// being loaded.
    #[error("record type mismatch: expected {expected}, found {found}")]
    RecordTypeMismatch {
        expected: &'static str,
        found: String,
    },

    /// Raised when a weapon fails a mount's compatibility check.
    #[error("weapon {weapon} cannot be equipped on this mount")]
    IncompatibleWeapon { weapon: String },

    /// Raised when a craft fails a bay's compatibility check.
    #[error("craft {craft} cannot be equipped in this bay")]
    IncompatibleCraft { craft: String },

    /// Raised when a system fails a ship's class or slot check.
    #[error("system {system} cannot be equipped on ship {ship}")]
    IncompatibleSystem { system: String, ship: String },

    /// Raised when a system's bubble labels do not line up with its hit points.
    #[error("system {system} has {labels} bubble labels, must equal hp ({hp})")]
    BubbleLabelMismatch {
        system: String,
        labels: usize,
        hp: u32,
    },

    /// Raised when a damage or shots value is not valid dice notation.
    #[error("malformed dice notation: {value}")]
    MalformedDice { value: String },

    /// Raised when a structured tag (e.g. `Shots 2d6`) fails to parse.
    #[error("malformed {tag} tag: {value}")]
    MalformedTag { tag: &'static str, value: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON deserialization errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
