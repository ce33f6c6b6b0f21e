use rand::Rng;

use crate::engine::models::{GameError, GameResult, Progress, ScavengerItem};
use crate::engine::random::shuffle;

/// Checklist length used by `ScavengerSession::start_game`.
pub const DEFAULT_CHECKLIST_LEN: usize = 24;

/// Build a checklist of `count` items from a shuffle of `pool`, truncated to
/// `count`, with sequential ids from 0 in shuffled order and every item
/// unchecked. `count = 0` yields an empty checklist. Fails with
/// [`GameError::InsufficientContent`] when `count` exceeds the pool size.
pub fn generate_checklist<R: Rng>(
    pool: &[String],
    count: usize,
    rng: &mut R,
) -> GameResult<Vec<ScavengerItem>> {
    if count > pool.len() {
        return Err(GameError::InsufficientContent {
            requested: count,
            available: pool.len(),
        });
    }

    let mut picks = shuffle(pool, rng);
    picks.truncate(count);
    Ok(picks
        .into_iter()
        .enumerate()
        .map(|(id, text)| ScavengerItem {
            id: id as u32,
            text,
            is_checked: false,
        })
        .collect())
}

/// Return a new checklist with the matching item's checked flag inverted.
/// Unknown ids are a no-op copy.
pub fn toggle_item(items: &[ScavengerItem], id: u32) -> Vec<ScavengerItem> {
    items
        .iter()
        .map(|item| {
            if item.id == id {
                ScavengerItem {
                    is_checked: !item.is_checked,
                    ..item.clone()
                }
            } else {
                item.clone()
            }
        })
        .collect()
}

/// Count checked items and derive a whole-number percentage (half-up).
/// An empty checklist is 0 percent.
pub fn calculate_progress(items: &[ScavengerItem]) -> Progress {
    let total = items.len() as u32;
    let checked = items.iter().filter(|item| item.is_checked).count() as u32;
    let percent = if total == 0 {
        0
    } else {
        (f64::from(checked) / f64::from(total) * 100.0).round() as u32
    };
    Progress { checked, total, percent }
}

/// True when every item is checked. Vacuously true for an empty checklist —
/// callers must not treat an unstarted checklist as a win.
pub fn is_complete(items: &[ScavengerItem]) -> bool {
    items.iter().all(|item| item.is_checked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn prompt_pool(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("prompt {i}")).collect()
    }

    fn items_from(flags: &[bool]) -> Vec<ScavengerItem> {
        flags
            .iter()
            .enumerate()
            .map(|(id, &is_checked)| ScavengerItem {
                id: id as u32,
                text: format!("item {id}"),
                is_checked,
            })
            .collect()
    }

    #[test]
    fn checklist_has_requested_length_and_sequential_ids() {
        let mut rng = StdRng::seed_from_u64(42);
        let items = generate_checklist(&prompt_pool(30), 24, &mut rng).unwrap();
        assert_eq!(items.len(), 24);
        for (idx, item) in items.iter().enumerate() {
            assert_eq!(item.id, idx as u32);
            assert!(!item.is_checked);
        }
    }

    #[test]
    fn checklist_items_are_distinct_pool_prompts() {
        let pool = prompt_pool(30);
        let mut rng = StdRng::seed_from_u64(9);
        let items = generate_checklist(&pool, 24, &mut rng).unwrap();
        let mut seen = std::collections::HashSet::new();
        for item in &items {
            assert!(pool.contains(&item.text));
            assert!(seen.insert(item.text.clone()), "duplicate '{}'", item.text);
        }
    }

    #[test]
    fn count_zero_yields_empty_checklist() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(generate_checklist(&prompt_pool(5), 0, &mut rng).unwrap().is_empty());
    }

    #[test]
    fn count_beyond_pool_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = generate_checklist(&prompt_pool(10), 11, &mut rng).unwrap_err();
        assert_eq!(
            err,
            GameError::InsufficientContent { requested: 11, available: 10 }
        );
    }

    #[test]
    fn toggle_flips_only_the_matching_item() {
        let items = items_from(&[false, true, false]);
        let toggled = toggle_item(&items, 0);
        assert!(toggled[0].is_checked);
        assert!(toggled[1].is_checked);
        assert!(!toggled[2].is_checked);
        // and back
        assert_eq!(toggle_item(&toggled, 0), items);
    }

    #[test]
    fn toggle_unknown_id_is_a_no_op() {
        let items = items_from(&[false, true]);
        assert_eq!(toggle_item(&items, 999), items);
    }

    #[test]
    fn progress_counts_and_rounds() {
        let progress = calculate_progress(&items_from(&[true, false, true, false]));
        assert_eq!(progress.checked, 2);
        assert_eq!(progress.total, 4);
        assert_eq!(progress.percent, 50);

        // 1/3 rounds down to 33, not up to 34.
        let third = calculate_progress(&items_from(&[true, false, false]));
        assert_eq!(third.percent, 33);

        // 2/3 rounds 66.67 up to 67.
        let two_thirds = calculate_progress(&items_from(&[true, true, false]));
        assert_eq!(two_thirds.percent, 67);
    }

    #[test]
    fn progress_on_empty_checklist_is_zero() {
        assert_eq!(
            calculate_progress(&[]),
            Progress { checked: 0, total: 0, percent: 0 }
        );
    }

    #[test]
    fn is_complete_handles_edge_cases() {
        assert!(is_complete(&[]), "empty checklist is vacuously complete");
        assert!(!is_complete(&items_from(&[false])));
        assert!(is_complete(&items_from(&[true, true, true])));
        assert!(!is_complete(&items_from(&[true, false, true])));
    }
}
