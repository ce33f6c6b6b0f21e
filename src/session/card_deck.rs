use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::engine::card_deck as deck;
use crate::engine::models::{CardDeckGameState, GameResult, PromptCard};
use crate::storage::{self, SnapshotSchema, SnapshotStore, SCHEMA_VERSION};

/// Storage key for the card deck mode.
pub const CARD_DECK_STORAGE_KEY: &str = "card-deck-game-state";

const ALLOWED_STATES: &[&str] = &["start", "card-ready", "card-revealed"];

/// The persisted fields of a card deck session. The flip flag is fully
/// determined by the game state and is re-derived on restore.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDeckSnapshot {
    pub version: u32,
    pub game_state: CardDeckGameState,
    pub current_card: Option<PromptCard>,
}

fn current_card_shaped(snapshot: &Value) -> bool {
    let card = match snapshot.get("currentCard") {
        Some(card) => card,
        None => return false,
    };
    card.is_null() || card.get("text").is_some_and(Value::is_string)
}

fn schema() -> SnapshotSchema {
    SnapshotSchema {
        key: CARD_DECK_STORAGE_KEY,
        version: SCHEMA_VERSION,
        allowed_states: ALLOWED_STATES,
        collection: None,
        extra: Some(current_card_shaped),
    }
}

/// The card deck state machine.
///
/// Starting a game draws and immediately reveals the first card. Drawing
/// the next card (pass and fail both land here) excludes the current card's
/// text and presents the new card face-down in `card-ready`; flipping
/// reveals it. There is no deferred check in this mode — no win to detect.
pub struct CardDeckSession<S: SnapshotStore> {
    pool: Vec<String>,
    store: S,
    rng: StdRng,
    game_state: CardDeckGameState,
    current_card: Option<PromptCard>,
    is_flipped: bool,
}

impl<S: SnapshotStore> CardDeckSession<S> {
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
        let restored: Option<CardDeckSnapshot> = storage::load(&mut store, &schema());
        let (game_state, current_card) = match restored {
            Some(snapshot) => (snapshot.game_state, snapshot.current_card),
            None => (CardDeckGameState::Start, None),
        };
        CardDeckSession {
            pool,
            store,
            rng,
            game_state,
            current_card,
            is_flipped: game_state == CardDeckGameState::Revealed,
        }
    }

    /// Draw the first card and reveal it immediately.
    /// On draw failure the session state is untouched.
    pub fn start_game(&mut self) -> GameResult<()> {
        let card = deck::draw_first_card(&self.pool, &mut self.rng)?;
        self.current_card = Some(card);
        self.is_flipped = true;
        self.game_state = CardDeckGameState::Revealed;
        self.persist();
        Ok(())
    }

    /// Reveal a face-down card. Only acts in `card-ready`.
    pub fn flip_card(&mut self) {
        if self.game_state != CardDeckGameState::Ready {
            return;
        }
        self.is_flipped = true;
        self.game_state = CardDeckGameState::Revealed;
        self.persist();
    }

    /// Draw a new card excluding the current one, presented face-down in
    /// `card-ready`. Pass and fail are both "next" — they land here. No-op
    /// before a game has started. On draw failure the session state is
    /// untouched.
    pub fn draw_next_card(&mut self) -> GameResult<()> {
        if self.game_state == CardDeckGameState::Start {
            return Ok(());
        }
        let previous = self.current_card.as_ref().map(|card| card.text.as_str());
        let card = deck::draw_next_card(&self.pool, previous, &mut self.rng)?;
        self.current_card = Some(card);
        self.is_flipped = false;
        self.game_state = CardDeckGameState::Ready;
        self.persist();
        Ok(())
    }

    /// Back to `start`: no card, face-down.
    pub fn reset_game(&mut self) {
        self.game_state = CardDeckGameState::Start;
        self.current_card = None;
        self.is_flipped = false;
        self.persist();
    }

    pub fn game_state(&self) -> CardDeckGameState {
        self.game_state
    }

    pub fn current_card(&self) -> Option<&PromptCard> {
        self.current_card.as_ref()
    }

    pub fn is_flipped(&self) -> bool {
        self.is_flipped
    }

    /// Tear down the session and hand back the store.
    pub fn into_store(self) -> S {
        self.store
    }

    fn persist(&mut self) {
        let snapshot = CardDeckSnapshot {
            version: SCHEMA_VERSION,
            game_state: self.game_state,
            current_card: self.current_card.clone(),
        };
        storage::save(&mut self.store, &schema(), &snapshot);
    }
}
