//! Error codes surfaced by the game engine.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and are what an API boundary shows.

use core::fmt;

use super::domain::{ConflictKind, DomainError, FatalKind, NotFoundKind, ValidationKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Game setup
    InvalidPlayerCount,
    DuplicatePlayer,
    AdminNotInPlayers,

    // Turn and phase
    PlayerNotFound,
    WrongRoundStatus,
    NotCurrentPlayer,
    GameNotActive,

    // Bidding
    BunkerRestriction,
    InvalidCall,

    // Cards
    InvalidCardSelection,
    MustFollowSuit,
    DeckExhausted,
    InvalidSuit,
    InvalidCard,

    // Access
    Forbidden,

    // Resource Not Found
    GameNotFound,

    // Conflicts
    OptimisticLock,
    GameExists,

    // System Errors
    InvariantViolation,
    Internal,
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidPlayerCount => "INVALID_PLAYER_COUNT",
            Self::DuplicatePlayer => "DUPLICATE_PLAYER",
            Self::AdminNotInPlayers => "ADMIN_NOT_IN_PLAYERS",

            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::WrongRoundStatus => "WRONG_ROUND_STATUS",
            Self::NotCurrentPlayer => "NOT_CURRENT_PLAYER",
            Self::GameNotActive => "GAME_NOT_ACTIVE",

            Self::BunkerRestriction => "BUNKER_RESTRICTION",
            Self::InvalidCall => "INVALID_CALL",

            Self::InvalidCardSelection => "INVALID_CARD_SELECTION",
            Self::MustFollowSuit => "MUST_FOLLOW_SUIT",
            Self::DeckExhausted => "DECK_EXHAUSTED",
            Self::InvalidSuit => "INVALID_SUIT",
            Self::InvalidCard => "INVALID_CARD",

            Self::Forbidden => "FORBIDDEN",

            Self::GameNotFound => "GAME_NOT_FOUND",

            Self::OptimisticLock => "OPTIMISTIC_LOCK",
            Self::GameExists => "GAME_EXISTS",

            Self::InvariantViolation => "INVARIANT_VIOLATION",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<ValidationKind> for ErrorCode {
    fn from(kind: ValidationKind) -> Self {
        match kind {
            ValidationKind::InvalidPlayerCount => Self::InvalidPlayerCount,
            ValidationKind::DuplicatePlayer => Self::DuplicatePlayer,
            ValidationKind::AdminNotInPlayers => Self::AdminNotInPlayers,
            ValidationKind::PlayerNotFound => Self::PlayerNotFound,
            ValidationKind::WrongRoundStatus => Self::WrongRoundStatus,
            ValidationKind::NotCurrentPlayer => Self::NotCurrentPlayer,
            ValidationKind::BunkerRestriction => Self::BunkerRestriction,
            ValidationKind::InvalidCall => Self::InvalidCall,
            ValidationKind::InvalidCardSelection => Self::InvalidCardSelection,
            ValidationKind::MustFollowSuit => Self::MustFollowSuit,
            ValidationKind::DeckExhausted => Self::DeckExhausted,
            ValidationKind::GameNotActive => Self::GameNotActive,
            ValidationKind::InvalidSuit => Self::InvalidSuit,
            ValidationKind::InvalidCard => Self::InvalidCard,
        }
    }
}

impl From<&DomainError> for ErrorCode {
    fn from(err: &DomainError) -> Self {
        match err {
            DomainError::Validation(kind, _) => (*kind).into(),
            DomainError::Fatal(FatalKind::TooManyTopCallers, _)
            | DomainError::Fatal(FatalKind::UnresolvedWinner, _)
            | DomainError::Fatal(FatalKind::UnsupportedPlayerCount, _)
            | DomainError::Fatal(FatalKind::CorruptState, _) => Self::InvariantViolation,
            DomainError::NotFound(NotFoundKind::Game, _) => Self::GameNotFound,
            DomainError::NotFound(NotFoundKind::Player, _) => Self::PlayerNotFound,
            DomainError::Conflict(ConflictKind::StaleRevision, _) => Self::OptimisticLock,
            DomainError::Conflict(ConflictKind::GameExists, _) => Self::GameExists,
        }
    }
}
