//! Stat table errors.

use crate::error::{ErrorSeverity, GameError};

/// Errors raised when raw integers do not map onto the fixed stat tables.
///
/// The loader never propagates these: a rejected override falls back to the
/// compiled-in default and is reported through `tracing`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TableError {
    /// Value does not name one of the 19 weapon slots.
    #[error("weapon id {0} is outside the weapon table")]
    UnknownWeapon(i32),

    /// Value does not name one of the 14 monster subtypes.
    #[error("monster subtype {0} is outside the monster table")]
    UnknownMonster(i32),

    /// Override is outside the range its field can represent.
    #[error("[{section}] {key} = {value} is out of range")]
    FieldOutOfRange {
        section: String,
        key: &'static str,
        value: i32,
    },
}

impl GameError for TableError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            TableError::UnknownWeapon(_) | TableError::UnknownMonster(_) => ErrorSeverity::OutOfTable,
            TableError::FieldOutOfRange { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use TableError::*;
        match self {
            UnknownWeapon(_) => "TABLE_UNKNOWN_WEAPON",
            UnknownMonster(_) => "TABLE_UNKNOWN_MONSTER",
            FieldOutOfRange { .. } => "TABLE_FIELD_OUT_OF_RANGE",
        }
    }
}
