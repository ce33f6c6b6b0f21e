use rand::Rng;

use crate::engine::models::{GameError, GameResult};

/// Return a new vector with every input element exactly once, in a uniformly
/// random permutation. The input is not mutated.
///
/// Fisher-Yates: walk from the last index down to 1, swapping index `i` with
/// a uniformly chosen index in `[0, i]`. With a uniform source, every one of
/// the k! permutations of a k-element pool is equally likely.
pub fn shuffle<T: Clone, R: Rng>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.gen_range(0..=i);
        out.swap(i, j);
    }
    out
}

/// Pick one prompt uniformly at random.
pub fn pick_one<'a, R: Rng>(pool: &'a [String], rng: &mut R) -> GameResult<&'a str> {
    if pool.is_empty() {
        return Err(GameError::EmptyPool);
    }
    Ok(&pool[rng.gen_range(0..pool.len())])
}

/// Pick one prompt uniformly at random, avoiding `exclude` when possible.
///
/// The exclusion is a best-effort guarantee: with a single-element pool, or
/// when every element equals `exclude`, the pick falls back to an
/// unrestricted uniform draw. Candidates are filtered once and indexed, so
/// there is no retry loop to bound.
pub fn pick_one_excluding<'a, R: Rng>(
    pool: &'a [String],
    exclude: &str,
    rng: &mut R,
) -> GameResult<&'a str> {
    if pool.is_empty() {
        return Err(GameError::EmptyPool);
    }
    if pool.len() == 1 {
        return Ok(&pool[0]);
    }

    let candidates: Vec<&String> = pool.iter().filter(|text| *text != exclude).collect();
    if candidates.is_empty() {
        return pick_one(pool, rng);
    }
    Ok(candidates[rng.gen_range(0..candidates.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pool(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let input: Vec<u32> = (0..50).collect();
        let mut shuffled = shuffle(&input, &mut rng);
        shuffled.sort_unstable();
        assert_eq!(shuffled, input);
    }

    #[test]
    fn shuffle_does_not_mutate_input() {
        let mut rng = StdRng::seed_from_u64(7);
        let input = pool(&["a", "b", "c", "d"]);
        let before = input.clone();
        let _ = shuffle(&input, &mut rng);
        assert_eq!(input, before);
    }

    #[test]
    fn shuffle_is_deterministic_with_seed() {
        let input: Vec<u32> = (0..20).collect();
        let a = shuffle(&input, &mut StdRng::seed_from_u64(99));
        let b = shuffle(&input, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
        let c = shuffle(&input, &mut StdRng::seed_from_u64(100));
        assert_ne!(a, c, "seeds 99 and 100 produced the same permutation");
    }

    #[test]
    fn pick_one_fails_on_empty_pool() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(pick_one(&[], &mut rng), Err(GameError::EmptyPool));
    }

    #[test]
    fn pick_one_excluding_never_returns_excluded() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool = pool(&["a", "b", "c"]);
        for _ in 0..500 {
            let picked = pick_one_excluding(&pool, "b", &mut rng).unwrap();
            assert_ne!(picked, "b");
        }
    }

    #[test]
    fn pick_one_excluding_relaxes_on_single_element_pool() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool = pool(&["only"]);
        assert_eq!(pick_one_excluding(&pool, "only", &mut rng).unwrap(), "only");
    }

    #[test]
    fn pick_one_excluding_relaxes_when_all_elements_match() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool = pool(&["same", "same", "same"]);
        assert_eq!(pick_one_excluding(&pool, "same", &mut rng).unwrap(), "same");
    }

    #[test]
    fn pick_one_excluding_fails_on_empty_pool() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(pick_one_excluding(&[], "x", &mut rng), Err(GameError::EmptyPool));
    }
}
