//! Read-only JSON views of session state for a rendering layer.
//!
//! The display client (web shell, TUI, whatever hosts the games) receives
//! one JSON object per mode bundling the game state, the entity collection,
//! derived values, and the presentation flags. Sessions are never mutated
//! from here.

use serde_json::{json, Value};

use crate::session::{BingoSession, CardDeckSession, ScavengerSession};
use crate::storage::SnapshotStore;

/// Everything the bingo screen needs to render one frame.
pub fn bingo_view<S: SnapshotStore>(session: &BingoSession<S>) -> Value {
    let mut winning_ids: Vec<u32> = session.winning_square_ids().into_iter().collect();
    winning_ids.sort_unstable();

    json!({
        "gameState": session.game_state(),
        "board": session.board(),
        "winningLine": session.winning_line(),
        "winningSquareIds": winning_ids,
        "showBingoModal": session.show_bingo_modal(),
    })
}

/// Everything the scavenger screen needs to render one frame.
pub fn scavenger_view<S: SnapshotStore>(session: &ScavengerSession<S>) -> Value {
    let progress = session.progress();
    json!({
        "gameState": session.game_state(),
        "items": session.items(),
        "progress": {
            "checked": progress.checked,
            "total": progress.total,
            "percent": progress.percent,
        },
        "showCompleteModal": session.show_complete_modal(),
    })
}

/// Everything the card deck screen needs to render one frame.
pub fn card_deck_view<S: SnapshotStore>(session: &CardDeckSession<S>) -> Value {
    json!({
        "gameState": session.game_state(),
        "currentCard": session.current_card(),
        "isFlipped": session.is_flipped(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::prompts::default_prompts;
    use crate::storage::MemoryStore;

    #[test]
    fn bingo_view_carries_state_board_and_flags() {
        let mut session = BingoSession::with_seed(default_prompts(), MemoryStore::new(), 42);
        session.start_game().unwrap();
        let view = bingo_view(&session);

        assert_eq!(view["gameState"], "playing");
        assert_eq!(view["board"].as_array().unwrap().len(), 25);
        assert!(view["winningLine"].is_null());
        assert_eq!(view["winningSquareIds"], json!([]));
        assert_eq!(view["showBingoModal"], json!(false));
    }

    #[test]
    fn scavenger_view_embeds_progress() {
        let mut session = ScavengerSession::with_seed(default_prompts(), MemoryStore::new(), 42);
        session.start_game().unwrap();
        session.handle_item_click(0);
        let view = scavenger_view(&session);

        assert_eq!(view["gameState"], "scavenger-playing");
        assert_eq!(view["progress"]["checked"], json!(1));
        assert_eq!(view["progress"]["total"], json!(24));
        assert_eq!(view["progress"]["percent"], json!(4)); // 1/24 ≈ 4.2 → 4
    }

    #[test]
    fn card_deck_view_shows_card_and_flip() {
        let mut session = CardDeckSession::with_seed(default_prompts(), MemoryStore::new(), 42);
        let view = card_deck_view(&session);
        assert_eq!(view["gameState"], "start");
        assert!(view["currentCard"].is_null());

        session.start_game().unwrap();
        let view = card_deck_view(&session);
        assert_eq!(view["gameState"], "card-revealed");
        assert!(view["currentCard"]["text"].is_string());
        assert_eq!(view["isFlipped"], json!(true));
    }
}
