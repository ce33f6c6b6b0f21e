use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

use crate::engine::board::{generate_board, toggle_square, BOARD_SIZE};
use crate::engine::detector::{find_winning_line, winning_square_ids};
use crate::engine::models::{BingoGameState, BingoLine, BingoSquare, GameResult};
use crate::session::DeferredCheck;
use crate::storage::{self, CollectionRule, SnapshotSchema, SnapshotStore, SCHEMA_VERSION};

/// Storage key for the bingo mode.
pub const BINGO_STORAGE_KEY: &str = "bingo-game-state";

const ALLOWED_STATES: &[&str] = &["start", "playing", "bingo"];
const BOARD_LENGTHS: &[usize] = &[0, BOARD_SIZE];

/// The persisted fields of a bingo session. The modal flag is presentation
/// state and is not stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BingoSnapshot {
    pub version: u32,
    pub game_state: BingoGameState,
    pub board: Vec<BingoSquare>,
    pub winning_line: Option<BingoLine>,
}

fn square_shaped(value: &Value) -> bool {
    value.get("id").is_some_and(Value::is_number)
        && value.get("text").is_some_and(Value::is_string)
        && value.get("isMarked").is_some_and(Value::is_boolean)
        && value.get("isFreeSpace").is_some_and(Value::is_boolean)
}

fn winning_line_shaped(snapshot: &Value) -> bool {
    let line = match snapshot.get("winningLine") {
        Some(line) => line,
        None => return false,
    };
    if line.is_null() {
        return true;
    }
    matches!(
        line.get("type").and_then(Value::as_str),
        Some("row" | "column" | "diagonal")
    ) && line.get("index").is_some_and(Value::is_number)
        && line.get("squares").is_some_and(Value::is_array)
}

fn schema() -> SnapshotSchema {
    SnapshotSchema {
        key: BINGO_STORAGE_KEY,
        version: SCHEMA_VERSION,
        allowed_states: ALLOWED_STATES,
        collection: Some(CollectionRule {
            field: "board",
            entity: square_shaped,
            lengths: Some(BOARD_LENGTHS),
        }),
        extra: Some(winning_line_shaped),
    }
}

/// The bingo mode state machine.
///
/// Owns the board, the retained winning line, and the modal flag, and
/// persists a snapshot after every transition that changes persisted fields.
/// A prior snapshot is read once, at construction; an invalid or absent one
/// falls back to the start state.
///
/// The win check after a toggle is a deferred, two-phase update: the toggle
/// commits first, then the queued check runs — never nested inside the
/// mutation, always before the click handler returns.
pub struct BingoSession<S: SnapshotStore> {
    pool: Vec<String>,
    store: S,
    rng: StdRng,
    game_state: BingoGameState,
    board: Vec<BingoSquare>,
    winning_line: Option<BingoLine>,
    show_bingo_modal: bool,
    pending_checks: Vec<DeferredCheck>,
}

impl<S: SnapshotStore> BingoSession<S> {
    /// Create a session with an entropy-seeded RNG, resuming any valid
    /// snapshot found in `store`.
    pub fn new(pool: Vec<String>, store: S) -> Self {
        Self::build(pool, store, StdRng::from_entropy())
    }

    /// Create a fully deterministic session (for tests and replays).
    pub fn with_seed(pool: Vec<String>, store: S, seed: u64) -> Self {
        Self::build(pool, store, StdRng::seed_from_u64(seed))
    }

    fn build(pool: Vec<String>, mut store: S, rng: StdRng) -> Self {
        let restored: Option<BingoSnapshot> = storage::load(&mut store, &schema());
        let (game_state, board, winning_line) = match restored {
            Some(snapshot) => (snapshot.game_state, snapshot.board, snapshot.winning_line),
            None => (BingoGameState::Start, Vec::new(), None),
        };
        BingoSession {
            pool,
            store,
            rng,
            game_state,
            board,
            winning_line,
            show_bingo_modal: false,
            pending_checks: Vec::new(),
        }
    }

    /// Generate a fresh board, clear any retained line, and enter `playing`.
    /// On generation failure the session state is untouched.
    pub fn start_game(&mut self) -> GameResult<()> {
        let board = generate_board(&self.pool, &mut self.rng)?;
        self.board = board;
        self.winning_line = None;
        self.game_state = BingoGameState::Playing;
        self.persist();
        Ok(())
    }

    /// Toggle a square, then run the deferred win check.
    ///
    /// Phase 1 applies the toggle and persists the new board. Phase 2 — the
    /// queued check — retains the first winning line ever found, enters
    /// `bingo`, and raises the modal flag. Once a line is retained, later
    /// toggles keep mutating the board but never change the line or state.
    pub fn handle_square_click(&mut self, id: u32) {
        self.board = toggle_square(&self.board, id);
        self.persist();
        self.pending_checks.push(DeferredCheck::Completion);
        self.drain_pending_checks();
    }

    /// Back to `start`: empty board, no retained line, modal cleared.
    pub fn reset_game(&mut self) {
        self.game_state = BingoGameState::Start;
        self.board = Vec::new();
        self.winning_line = None;
        self.show_bingo_modal = false;
        self.persist();
    }

    /// Hide the win modal. Independent of the game state, not persisted.
    pub fn dismiss_modal(&mut self) {
        self.show_bingo_modal = false;
    }

    pub fn game_state(&self) -> BingoGameState {
        self.game_state
    }

    pub fn board(&self) -> &[BingoSquare] {
        &self.board
    }

    pub fn winning_line(&self) -> Option<&BingoLine> {
        self.winning_line.as_ref()
    }

    /// Ids of the retained line's squares, for highlighting.
    pub fn winning_square_ids(&self) -> HashSet<u32> {
        winning_square_ids(self.winning_line.as_ref())
    }

    pub fn show_bingo_modal(&self) -> bool {
        self.show_bingo_modal
    }

    /// Tear down the session and hand back the store.
    pub fn into_store(self) -> S {
        self.store
    }

    fn drain_pending_checks(&mut self) {
        while let Some(DeferredCheck::Completion) = self.pending_checks.pop() {
            self.check_for_bingo();
        }
    }

    fn check_for_bingo(&mut self) {
        if self.winning_line.is_some() {
            return;
        }
        if let Some(line) = find_winning_line(&self.board) {
            self.winning_line = Some(line);
            self.game_state = BingoGameState::Bingo;
            self.show_bingo_modal = true;
            self.persist();
        }
    }

    fn persist(&mut self) {
        let snapshot = BingoSnapshot {
            version: SCHEMA_VERSION,
            game_state: self.game_state,
            board: self.board.clone(),
            winning_line: self.winning_line.clone(),
        };
        storage::save(&mut self.store, &schema(), &snapshot);
    }
}
