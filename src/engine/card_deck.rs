use rand::Rng;

use crate::engine::models::{GameResult, PromptCard};
use crate::engine::random::{pick_one, pick_one_excluding};

/// Draw the opening card: a uniform pick from the pool.
pub fn draw_first_card<R: Rng>(pool: &[String], rng: &mut R) -> GameResult<PromptCard> {
    Ok(PromptCard { text: pick_one(pool, rng)?.to_string() })
}

/// Draw a follow-up card, avoiding the previous card's text when possible.
///
/// Comparison is by text content. `previous_text: None` behaves like a first
/// draw. The exclusion carries the same relaxation as
/// [`pick_one_excluding`](crate::engine::random::pick_one_excluding).
pub fn draw_next_card<R: Rng>(
    pool: &[String],
    previous_text: Option<&str>,
    rng: &mut R,
) -> GameResult<PromptCard> {
    let text = match previous_text {
        Some(previous) => pick_one_excluding(pool, previous, rng)?,
        None => pick_one(pool, rng)?,
    };
    Ok(PromptCard { text: text.to_string() })
}
