//! Leaderboard score records and the player-name normalisation rule.

use std::fmt;

use chrono::{DateTime, Utc};

/// Maximum player-name length, in Unicode scalar values.
pub const PLAYER_NAME_MAX: usize = 20;

/// Name substituted when a submission's name normalises to nothing.
pub const ANONYMOUS_PLAYER_NAME: &str = "Anónimo";

/// Number of entries served by the public leaderboard.
pub const LEADERBOARD_SIZE: u32 = 10;

/// Validation errors returned by [`PlayerName::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerNameValidationError {
    Empty,
    TooLong { max: usize },
    SurroundingWhitespace,
}

impl fmt::Display for PlayerNameValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "player name must not be empty"),
            Self::TooLong { max } => write!(f, "player name must be at most {max} characters"),
            Self::SurroundingWhitespace => {
                write!(f, "player name must not start or end with whitespace")
            }
        }
    }
}

impl std::error::Error for PlayerNameValidationError {}

/// Player name as stored on a leaderboard entry.
///
/// ## Invariants
/// - 1 to [`PLAYER_NAME_MAX`] characters.
/// - No leading or trailing whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerName(String);

impl PlayerName {
    /// Normalise a raw submitted name.
    ///
    /// Keeps the first [`PLAYER_NAME_MAX`] characters, then trims surrounding
    /// whitespace, falling back to [`ANONYMOUS_PLAYER_NAME`] when nothing is
    /// left. Truncation runs before trimming, so leading blanks count towards
    /// the limit.
    ///
    /// # Examples
    /// ```
    /// use scoreboard::domain::PlayerName;
    ///
    /// assert_eq!(PlayerName::normalise("  Ada  ").as_ref(), "Ada");
    /// assert_eq!(PlayerName::normalise("   ").as_ref(), "Anónimo");
    /// assert_eq!(PlayerName::normalise(&"A".repeat(30)).as_ref(), "A".repeat(20));
    /// ```
    #[must_use]
    pub fn normalise(raw: &str) -> Self {
        let truncated: String = raw.chars().take(PLAYER_NAME_MAX).collect();
        let trimmed = truncated.trim();
        if trimmed.is_empty() {
            Self(ANONYMOUS_PLAYER_NAME.to_owned())
        } else {
            Self(trimmed.to_owned())
        }
    }

    /// Validate an already-normalised name, e.g. one read back from storage.
    pub fn new(name: impl Into<String>) -> Result<Self, PlayerNameValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(PlayerNameValidationError::Empty);
        }
        if name.chars().count() > PLAYER_NAME_MAX {
            return Err(PlayerNameValidationError::TooLong {
                max: PLAYER_NAME_MAX,
            });
        }
        if name.trim() != name {
            return Err(PlayerNameValidationError::SurroundingWhitespace);
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for PlayerName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<PlayerName> for String {
    fn from(value: PlayerName) -> Self {
        value.0
    }
}

impl TryFrom<String> for PlayerName {
    type Error = PlayerNameValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Store-assigned identifier of a score record.
///
/// Identifiers increase with insertion order, which makes them the
/// tie-breaker for equal scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScoreId(i64);

impl ScoreId {
    /// Wrap a raw store identifier.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Raw store identifier.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ScoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Score submission ready to be appended to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewScore {
    pub name: PlayerName,
    pub score: i64,
    pub created_at: DateTime<Utc>,
}

/// Persisted leaderboard entry. Records are never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreRecord {
    id: ScoreId,
    name: PlayerName,
    score: i64,
    created_at: DateTime<Utc>,
}

impl ScoreRecord {
    /// Build a record from validated components.
    #[must_use]
    pub fn new(id: ScoreId, name: PlayerName, score: i64, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            score,
            created_at,
        }
    }

    #[must_use]
    pub fn id(&self) -> ScoreId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &PlayerName {
        &self.name
    }

    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Public projection of a record shown on the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub name: PlayerName,
    pub score: i64,
}

impl From<ScoreRecord> for LeaderboardEntry {
    fn from(record: ScoreRecord) -> Self {
        Self {
            name: record.name,
            score: record.score,
        }
    }
}
