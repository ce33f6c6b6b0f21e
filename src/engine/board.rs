use rand::Rng;

use crate::engine::models::{BingoSquare, GameError, GameResult};
use crate::engine::random::shuffle;

/// Cells on a board.
pub const BOARD_SIZE: usize = 25;
/// Rows/columns per board.
pub const BOARD_DIM: usize = 5;
/// Center cell (row 2, col 2), pre-marked and never togglable.
pub const FREE_SPACE_INDEX: u32 = 12;
/// Text shown on the free space.
pub const FREE_SPACE_TEXT: &str = "FREE SPACE";
/// Prompts consumed per board: every cell except the free space.
pub const PROMPTS_PER_BOARD: usize = BOARD_SIZE - 1;

/// Build a fresh 5×5 board from `pool`.
///
/// The pool is shuffled and its first 24 prompts fill the cells in increasing
/// id order, skipping the free space at id 12, which is created pre-marked
/// and consumes no prompt. Fails with [`GameError::InsufficientContent`]
/// when the pool holds fewer than 24 prompts. The pool is not mutated.
pub fn generate_board<R: Rng>(pool: &[String], rng: &mut R) -> GameResult<Vec<BingoSquare>> {
    if pool.len() < PROMPTS_PER_BOARD {
        return Err(GameError::InsufficientContent {
            requested: PROMPTS_PER_BOARD,
            available: pool.len(),
        });
    }

    let prompts = shuffle(pool, rng);
    let board = (0..BOARD_SIZE as u32)
        .map(|id| {
            if id == FREE_SPACE_INDEX {
                BingoSquare {
                    id,
                    text: FREE_SPACE_TEXT.to_string(),
                    is_marked: true,
                    is_free_space: true,
                }
            } else {
                // Cells after the free space are offset by one prompt slot.
                let slot = (if id < FREE_SPACE_INDEX { id } else { id - 1 }) as usize;
                BingoSquare {
                    id,
                    text: prompts[slot].clone(),
                    is_marked: false,
                    is_free_space: false,
                }
            }
        })
        .collect();

    Ok(board)
}

/// Return a new board with the matching square's mark inverted.
///
/// Unknown ids and the free-space id are guaranteed no-ops (an equivalent
/// copy is returned). The input board is not mutated.
pub fn toggle_square(board: &[BingoSquare], id: u32) -> Vec<BingoSquare> {
    board
        .iter()
        .map(|square| {
            if square.id == id && !square.is_free_space {
                BingoSquare {
                    is_marked: !square.is_marked,
                    ..square.clone()
                }
            } else {
                square.clone()
            }
        })
        .collect()
}
