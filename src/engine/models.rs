use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors raised by the generation and selection functions.
///
/// Persistence problems are deliberately *not* represented here — snapshot
/// failures are recovered inside the storage layer and never reach callers.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A selection was requested from a pool with zero items.
    #[error("content pool is empty")]
    EmptyPool,

    /// A generator was asked for more unique prompts than the pool holds.
    #[error("requested {requested} unique prompts but the pool only has {available}")]
    InsufficientContent { requested: usize, available: usize },
}

/// Result type used throughout the engine.
pub type GameResult<T> = Result<T, GameError>;

// ---------------------------------------------------------------------------
// Bingo
// ---------------------------------------------------------------------------

/// One cell of a 5×5 bingo board.
///
/// `id` is position-derived (`row * 5 + col`, 0..24). Exactly one square per
/// board is the free space: pre-marked at creation and never togglable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BingoSquare {
    pub id: u32,
    pub text: String,
    pub is_marked: bool,
    pub is_free_space: bool,
}

/// The orientation of a completed bingo line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Row,
    Column,
    Diagonal,
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineKind::Row      => write!(f, "row"),
            LineKind::Column   => write!(f, "column"),
            LineKind::Diagonal => write!(f, "diagonal"),
        }
    }
}

/// A fully-marked row, column, or diagonal.
///
/// `index` is the row/column number (0..4), or 0 for the main diagonal and
/// 1 for the anti-diagonal. `squares` lists the five cell ids in line order.
/// The first line a session detects is retained until reset, even if more
/// lines complete later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BingoLine {
    #[serde(rename = "type")]
    pub kind: LineKind,
    pub index: u32,
    pub squares: Vec<u32>,
}

/// Bingo session states, serialized as `"start" | "playing" | "bingo"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BingoGameState {
    Start,
    Playing,
    Bingo,
}

impl fmt::Display for BingoGameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BingoGameState::Start   => write!(f, "start"),
            BingoGameState::Playing => write!(f, "playing"),
            BingoGameState::Bingo   => write!(f, "bingo"),
        }
    }
}

// ---------------------------------------------------------------------------
// Scavenger hunt
// ---------------------------------------------------------------------------

/// One entry of a scavenger checklist. Ids are sequential from 0 in the
/// shuffled order the checklist was generated in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScavengerItem {
    pub id: u32,
    pub text: String,
    pub is_checked: bool,
}

/// Derived checklist progress. Never persisted — recomputed from the items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub checked: u32,
    pub total: u32,
    /// Whole-number percentage in 0..=100, rounded half-up.
    pub percent: u32,
}

/// Scavenger session states, serialized with the historical
/// `"scavenger-"`-prefixed wire strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScavengerGameState {
    #[serde(rename = "start")]
    Start,
    #[serde(rename = "scavenger-playing")]
    Playing,
    #[serde(rename = "scavenger-complete")]
    Complete,
}

impl fmt::Display for ScavengerGameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScavengerGameState::Start    => write!(f, "start"),
            ScavengerGameState::Playing  => write!(f, "scavenger-playing"),
            ScavengerGameState::Complete => write!(f, "scavenger-complete"),
        }
    }
}

// ---------------------------------------------------------------------------
// Card deck
// ---------------------------------------------------------------------------

/// A single drawn prompt card. Draws are stateless apart from the
/// don't-repeat-the-previous-card rule, so this is just the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptCard {
    pub text: String,
}

/// Card deck session states, serialized with the historical
/// `"card-"`-prefixed wire strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardDeckGameState {
    #[serde(rename = "start")]
    Start,
    #[serde(rename = "card-ready")]
    Ready,
    #[serde(rename = "card-revealed")]
    Revealed,
}

impl fmt::Display for CardDeckGameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardDeckGameState::Start    => write!(f, "start"),
            CardDeckGameState::Ready    => write!(f, "card-ready"),
            CardDeckGameState::Revealed => write!(f, "card-revealed"),
        }
    }
}
