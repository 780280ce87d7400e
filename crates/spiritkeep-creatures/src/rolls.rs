//! Small uniform-roll helpers shared by the decay and autonomy rules.

use rand::Rng;

/// Draw a uniform value from the inclusive `[lo, hi]` range.
///
/// A degenerate range (`lo >= hi`) returns `lo` without consulting the
/// generator, so a misconfigured [`CareConfig`] cannot panic inside `rand`.
///
/// [`CareConfig`]: crate::config::CareConfig
pub(crate) fn between<R: Rng>(rng: &mut R, (lo, hi): (u32, u32)) -> u32 {
    if lo >= hi {
        return lo;
    }
    rng.random_range(lo..=hi)
}

/// Roll a whole-percent chance: true with probability `chance_pct / 100`.
///
/// A chance of 0 never succeeds; 100 or more always succeeds.
pub(crate) fn percent<R: Rng>(rng: &mut R, chance_pct: u32) -> bool {
    if chance_pct == 0 {
        return false;
    }
    if chance_pct >= 100 {
        return true;
    }
    let roll: u32 = rng.random_range(0..100);
    roll < chance_pct
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    #[test]
    fn between_stays_inside_range() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..1000 {
            let v = between(&mut rng, (3, 7));
            assert!((3..=7).contains(&v));
        }
    }

    #[test]
    fn degenerate_range_returns_lo() {
        let mut rng = SmallRng::seed_from_u64(42);
        assert_eq!(between(&mut rng, (5, 5)), 5);
        assert_eq!(between(&mut rng, (9, 2)), 9);
    }

    #[test]
    fn percent_extremes_never_consult_rng() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..100 {
            assert!(!percent(&mut rng, 0));
            assert!(percent(&mut rng, 100));
        }
    }
}
