//! Domain-level error type used by the rules core and the service layer.
//!
//! This error type is transport- and storage-agnostic. Services return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! through the provided `From<DomainError> for AppError` implementation.

use thiserror::Error;

/// Recoverable rule violations. Every one of these is caused by bad input
/// and leaves the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationKind {
    InvalidPlayerCount,
    DuplicatePlayer,
    AdminNotInPlayers,
    PlayerNotFound,
    WrongRoundStatus,
    NotCurrentPlayer,
    BunkerRestriction,
    InvalidCall,
    InvalidCardSelection,
    MustFollowSuit,
    DeckExhausted,
    GameNotActive,
    InvalidSuit,
    InvalidCard,
}

/// Broken invariants. These never come from player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FatalKind {
    TooManyTopCallers,
    UnresolvedWinner,
    UnsupportedPlayerCount,
    CorruptState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotFoundKind {
    Game,
    Player,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConflictKind {
    /// The stored revision moved on since the game was loaded.
    StaleRevision,
    GameExists,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Input validation or business rule violation
    #[error("validation error {0:?}: {1}")]
    Validation(ValidationKind, String),
    /// Invariant violation; the aggregate should be considered unusable
    #[error("invariant violated {0:?}: {1}")]
    Fatal(FatalKind, String),
    #[error("not found {0:?}: {1}")]
    NotFound(NotFoundKind, String),
    #[error("conflict {0:?}: {1}")]
    Conflict(ConflictKind, String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn fatal(kind: FatalKind, detail: impl Into<String>) -> Self {
        Self::Fatal(kind, detail.into())
    }

    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }

    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }

    /// The validation kind, if this is a recoverable validation failure.
    pub fn validation_kind(&self) -> Option<ValidationKind> {
        match self {
            Self::Validation(kind, _) => Some(*kind),
            _ => None,
        }
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal(..))
    }
}
