//! Full walkthrough of all three game modes.
//!
//! Run with: `cargo run --example demo`
//!
//! Everything uses fixed seeds and an in-memory store, so the output is
//! deterministic and reproducible:
//!
//! 1. **Bingo** — generate a board, mark a column, watch the win land.
//! 2. **Scavenger** — a short checklist checked off to completion.
//! 3. **Card deck** — draw, pass, flip, a few times in a row.

use icebreaker_games::{
    bingo_view, default_prompts, BingoSession, CardDeckSession, MemoryStore, ScavengerSession,
    BOARD_DIM,
};

/// Print the board as a 5×5 grid of markers: `[x]` marked, `[ ]` not,
/// `[*]` the free space.
fn print_board(session: &BingoSession<MemoryStore>) {
    for row in session.board().chunks(BOARD_DIM) {
        let cells: Vec<&str> = row
            .iter()
            .map(|sq| {
                if sq.is_free_space {
                    "[*]"
                } else if sq.is_marked {
                    "[x]"
                } else {
                    "[ ]"
                }
            })
            .collect();
        println!("  {}", cells.join(" "));
    }
}

fn main() {
    // ── Bingo ────────────────────────────────────────────────────────────────
    println!();
    println!("══ Bingo: mark column 2 ══");
    println!();

    let mut bingo = BingoSession::with_seed(default_prompts(), MemoryStore::new(), 42);
    bingo.start_game().expect("default pool covers a full board");
    print_board(&bingo);

    for id in [2u32, 7, 17, 22] {
        bingo.handle_square_click(id);
        let square = &bingo.board()[id as usize];
        println!("  marked {:>2}: {}", id, square.text);
    }

    println!();
    print_board(&bingo);
    let line = bingo.winning_line().expect("column 2 is complete");
    println!();
    println!("  BINGO! {} {} — squares {:?}", line.kind, line.index, line.squares);
    println!("  view for the renderer: {}", bingo_view(&bingo));

    // ── Scavenger ────────────────────────────────────────────────────────────
    println!();
    println!("══ Scavenger: a 5-item hunt ══");
    println!();

    let mut hunt = ScavengerSession::with_seed(default_prompts(), MemoryStore::new(), 7);
    hunt.start_game_with(5).expect("pool has more than 5 prompts");

    let ids: Vec<u32> = hunt.items().iter().map(|item| item.id).collect();
    for id in ids {
        hunt.handle_item_click(id);
        let progress = hunt.progress();
        println!(
            "  checked {:>2} — {}/{} ({}%) [{}]",
            id, progress.checked, progress.total, progress.percent,
            hunt.game_state()
        );
    }

    // ── Card deck ────────────────────────────────────────────────────────────
    println!();
    println!("══ Card deck: draw, pass, flip ══");
    println!();

    let mut deck = CardDeckSession::with_seed(default_prompts(), MemoryStore::new(), 99);
    deck.start_game().expect("pool is non-empty");
    println!("  first card (auto-revealed): {}", deck.current_card().unwrap().text);

    for round in 1..=4 {
        deck.draw_next_card().expect("pool is non-empty");
        println!("  round {round}: drew face-down [{}]", deck.game_state());
        deck.flip_card();
        println!("           flipped → {}", deck.current_card().unwrap().text);
    }
}
