//! # icebreaker_games
//!
//! The game-logic core of a set of party/icebreaker mini-games: a 5×5 bingo
//! board, a scavenger checklist, and a flashcard deck — fully offline, with
//! state persisted as versioned JSON snapshots to a pluggable key-value
//! store.
//!
//! ## How it works
//!
//! 1. Hand a session a content pool (a list of prompt strings — bring your
//!    own or use [`default_prompts`]) and a [`SnapshotStore`]
//!    ([`MemoryStore`] or [`FileStore`]).
//! 2. Drive it with the mode's transitions: `start_game`, the toggle/draw
//!    operations, `reset_game`. Win and completion checks run automatically
//!    after each toggle commits.
//! 3. The session snapshots itself after every state change and resumes
//!    from the store on the next construction. Corrupt or stale snapshots
//!    are discarded silently — persistence is best-effort and never blocks
//!    gameplay.
//!
//! ## Key features
//!
//! - **Deterministic**: every session takes an optional RNG seed
//!   (`with_seed`) so boards, checklists, and draws can be reproduced
//!   exactly — useful for tests and replays.
//! - **Pure engines**: board generation, win detection, checklist math, and
//!   card draws are stateless functions in [`engine`], usable without a
//!   session.
//! - **Validated persistence**: one reusable snapshot schema per mode checks
//!   the version, the state enum, and every entity's shape before a stored
//!   value is trusted.
//!
//! ## Quick start
//!
//! ```rust
//! use icebreaker_games::{default_prompts, BingoGameState, BingoSession, MemoryStore};
//!
//! let mut session = BingoSession::with_seed(default_prompts(), MemoryStore::new(), 42);
//! session.start_game().expect("28 prompts is plenty for a 24-prompt board");
//!
//! // Mark all of column 2 — the free space at id 12 is already marked.
//! for id in [2, 7, 17, 22] {
//!     session.handle_square_click(id);
//! }
//!
//! assert_eq!(session.game_state(), BingoGameState::Bingo);
//! let line = session.winning_line().expect("column 2 is complete");
//! assert_eq!(line.index, 2);
//! ```

pub mod engine;
pub mod session;
pub mod storage;
pub mod ui_adapter;

// Convenience re-exports so callers can use `icebreaker_games::BingoSession`
// directly without reaching into submodules.
pub use engine::{
    calculate_progress, default_prompts, draw_first_card, draw_next_card, find_winning_line,
    generate_board, generate_checklist, is_complete, pick_one, pick_one_excluding, shuffle,
    toggle_item, toggle_square, winning_square_ids, BingoGameState, BingoLine, BingoSquare,
    CardDeckGameState, GameError, GameResult, LineKind, Progress, PromptCard, ScavengerGameState,
    ScavengerItem, BOARD_DIM, BOARD_SIZE, DEFAULT_CHECKLIST_LEN, DEFAULT_PROMPTS,
    FREE_SPACE_INDEX, FREE_SPACE_TEXT, PROMPTS_PER_BOARD,
};
pub use session::{
    BingoSession, BingoSnapshot, CardDeckSession, CardDeckSnapshot, ScavengerSession,
    ScavengerSnapshot, BINGO_STORAGE_KEY, CARD_DECK_STORAGE_KEY, SCAVENGER_STORAGE_KEY,
};
pub use storage::{FileStore, MemoryStore, SnapshotSchema, SnapshotStore, StoreError, SCHEMA_VERSION};
pub use ui_adapter::{bingo_view, card_deck_view, scavenger_view};
