use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::engine::checklist::{
    calculate_progress, generate_checklist, is_complete, toggle_item, DEFAULT_CHECKLIST_LEN,
};
use crate::engine::models::{GameResult, Progress, ScavengerGameState, ScavengerItem};
use crate::session::DeferredCheck;
use crate::storage::{self, CollectionRule, SnapshotSchema, SnapshotStore, SCHEMA_VERSION};

/// Storage key for the scavenger mode.
pub const SCAVENGER_STORAGE_KEY: &str = "scavenger-game-state";

const ALLOWED_STATES: &[&str] = &["start", "scavenger-playing", "scavenger-complete"];

/// The persisted fields of a scavenger session. Progress is derived, the
/// modal flag is presentation state; neither is stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScavengerSnapshot {
    pub version: u32,
    pub game_state: ScavengerGameState,
    pub items: Vec<ScavengerItem>,
}

fn item_shaped(value: &Value) -> bool {
    value.get("id").is_some_and(Value::is_number)
        && value.get("text").is_some_and(Value::is_string)
        && value.get("isChecked").is_some_and(Value::is_boolean)
}

fn schema() -> SnapshotSchema {
    SnapshotSchema {
        key: SCAVENGER_STORAGE_KEY,
        version: SCHEMA_VERSION,
        allowed_states: ALLOWED_STATES,
        collection: Some(CollectionRule {
            field: "items",
            entity: item_shaped,
            lengths: None,
        }),
        extra: None,
    }
}

/// The scavenger hunt state machine.
///
/// Completion is checked after each toggle commits, as a deferred phase-2
/// update. Once complete, the session stays complete: items keep toggling
/// and persisting, but unchecking never re-opens the hunt.
pub struct ScavengerSession<S: SnapshotStore> {
    pool: Vec<String>,
    store: S,
    rng: StdRng,
    game_state: ScavengerGameState,
    items: Vec<ScavengerItem>,
    show_complete_modal: bool,
    pending_checks: Vec<DeferredCheck>,
}

impl<S: SnapshotStore> ScavengerSession<S> {
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
        let restored: Option<ScavengerSnapshot> = storage::load(&mut store, &schema());
        let (game_state, items) = match restored {
            Some(snapshot) => (snapshot.game_state, snapshot.items),
            None => (ScavengerGameState::Start, Vec::new()),
        };
        ScavengerSession {
            pool,
            store,
            rng,
            game_state,
            items,
            show_complete_modal: false,
            pending_checks: Vec::new(),
        }
    }

    /// Generate the default-length checklist and enter `scavenger-playing`.
    pub fn start_game(&mut self) -> GameResult<()> {
        self.start_game_with(DEFAULT_CHECKLIST_LEN)
    }

    /// Like [`start_game`](Self::start_game) with a custom checklist length.
    /// On generation failure the session state is untouched.
    pub fn start_game_with(&mut self, count: usize) -> GameResult<()> {
        let items = generate_checklist(&self.pool, count, &mut self.rng)?;
        self.items = items;
        self.game_state = ScavengerGameState::Playing;
        self.persist();
        Ok(())
    }

    /// Toggle an item, then run the deferred completion check.
    ///
    /// Phase 1 applies the toggle and persists the new checklist. Phase 2 —
    /// the queued check — moves a playing session with a fully-checked,
    /// non-empty checklist to `scavenger-complete` and raises the modal.
    pub fn handle_item_click(&mut self, id: u32) {
        self.items = toggle_item(&self.items, id);
        self.persist();
        self.pending_checks.push(DeferredCheck::Completion);
        self.drain_pending_checks();
    }

    /// Back to `start`: empty checklist, modal cleared.
    pub fn reset_game(&mut self) {
        self.game_state = ScavengerGameState::Start;
        self.items = Vec::new();
        self.show_complete_modal = false;
        self.persist();
    }

    /// Hide the completion modal. Independent of the game state, not
    /// persisted.
    pub fn dismiss_modal(&mut self) {
        self.show_complete_modal = false;
    }

    pub fn game_state(&self) -> ScavengerGameState {
        self.game_state
    }

    pub fn items(&self) -> &[ScavengerItem] {
        &self.items
    }

    /// Derived progress over the current checklist.
    pub fn progress(&self) -> Progress {
        calculate_progress(&self.items)
    }

    pub fn show_complete_modal(&self) -> bool {
        self.show_complete_modal
    }

    /// Tear down the session and hand back the store.
    pub fn into_store(self) -> S {
        self.store
    }

    fn drain_pending_checks(&mut self) {
        while let Some(DeferredCheck::Completion) = self.pending_checks.pop() {
            self.check_for_completion();
        }
    }

    fn check_for_completion(&mut self) {
        // The vacuous completeness of an empty checklist must never finish
        // an unstarted hunt.
        if self.game_state != ScavengerGameState::Playing || self.items.is_empty() {
            return;
        }
        if is_complete(&self.items) {
            self.game_state = ScavengerGameState::Complete;
            self.show_complete_modal = true;
            self.persist();
        }
    }

    fn persist(&mut self) {
        let snapshot = ScavengerSnapshot {
            version: SCHEMA_VERSION,
            game_state: self.game_state,
            items: self.items.clone(),
        };
        storage::save(&mut self.store, &schema(), &snapshot);
    }
}
