//! Error classification shared by combat-core.
//!
//! The combat sequencer itself has no error path: misses, dodges and failed
//! rituals are gameplay outcomes surfaced as HUD messages. Errors only arise
//! where raw data crosses into typed tables, and every one of them ends in
//! the compiled-in default being kept.

/// Why a raw value was turned away.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Names a slot outside one of the fixed-cardinality tables.
    OutOfTable,

    /// Well-addressed, but the field cannot hold the value.
    Validation,
}

impl ErrorSeverity {
    /// Label used in structured log fields.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OutOfTable => "out_of_table",
            Self::Validation => "validation",
        }
    }
}

/// Common trait for combat-core errors, so log sites can tag them uniformly.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
