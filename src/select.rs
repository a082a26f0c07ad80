use std::collections::BTreeSet;

use rand::{Rng, seq::index};

use crate::error::{FixtureError, Result};

/// Distinct bit indices that are active in a mask.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveSet(BTreeSet<usize>);

impl ActiveSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, index: usize) -> bool {
        self.0.insert(index)
    }

    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    pub fn max(&self) -> Option<usize> {
        self.0.last().copied()
    }
}

impl FromIterator<usize> for ActiveSet {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Picks `valid_cnt` active positions out of `total_cnt`.
///
/// Indices are drawn uniformly without replacement from
/// `[0, total_cnt - 1)`. With `last_valid` the final position is forced in
/// and only `valid_cnt - 1` are drawn; without it the final position is never
/// chosen.
pub fn select<R: Rng + ?Sized>(
    valid_cnt: usize,
    total_cnt: usize,
    last_valid: bool,
    rng: &mut R,
) -> Result<ActiveSet> {
    let Some(pool) = total_cnt.checked_sub(1) else {
        return Err(FixtureError::InvalidParameters(
            "total_cnt must be at least 1".into(),
        ));
    };
    if valid_cnt > total_cnt {
        return Err(FixtureError::InvalidParameters(format!(
            "valid_cnt {valid_cnt} exceeds total_cnt {total_cnt}"
        )));
    }

    let drawn = if last_valid {
        valid_cnt.checked_sub(1).ok_or_else(|| {
            FixtureError::InvalidParameters("last_valid requires valid_cnt >= 1".into())
        })?
    } else {
        valid_cnt
    };
    if drawn > pool {
        return Err(FixtureError::InvalidParameters(format!(
            "cannot draw {drawn} positions from a pool of {pool} (last position is not drawable)"
        )));
    }

    let mut active: ActiveSet = index::sample(rng, pool, drawn).into_iter().collect();
    if last_valid {
        active.insert(pool);
    }
    debug_assert_eq!(active.len(), valid_cnt);
    Ok(active)
}

pub const RANDOM_MASK_BYTES: usize = 32;
const CLEARED_PAIRS: usize = 3;

/// A 32-byte mask with random content and a few zeroed 16-bit columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomByteMask {
    pub bytes: [u8; RANDOM_MASK_BYTES],
    pub active_cnt: usize,
}

pub fn random_byte_mask<R: Rng + ?Sized>(rng: &mut R) -> RandomByteMask {
    let mut bytes = [0u8; RANDOM_MASK_BYTES];
    rng.fill(&mut bytes[..]);

    // Pairs may repeat, so between one and three pairs end up cleared.
    for _ in 0..CLEARED_PAIRS {
        let pair = rng.random_range(0..RANDOM_MASK_BYTES / 2);
        bytes[2 * pair] = 0;
        bytes[2 * pair + 1] = 0;
    }

    let active_cnt = bytes.iter().map(|b| b.count_ones() as usize).sum();
    RandomByteMask { bytes, active_cnt }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::seeded;

    #[test]
    fn exact_count_with_forced_tail() {
        let mut rng = seeded(1);
        let active = select(64, 128, true, &mut rng).unwrap();
        assert_eq!(active.len(), 64);
        assert!(active.contains(127));
    }

    #[test]
    fn tail_never_drawn_without_last_valid() {
        let mut rng = seeded(2);
        for _ in 0..200 {
            let active = select(7, 8, false, &mut rng).unwrap();
            assert_eq!(active.len(), 7);
            assert!(!active.contains(7));
        }
    }

    #[test]
    fn full_field_only_with_last_valid() {
        let mut rng = seeded(3);
        let active = select(16, 16, true, &mut rng).unwrap();
        assert_eq!(active.iter().collect::<Vec<_>>(), (0..16).collect::<Vec<_>>());
        assert!(matches!(
            select(16, 16, false, &mut rng),
            Err(FixtureError::InvalidParameters(_))
        ));
    }

    #[test]
    fn single_bit_field() {
        let mut rng = seeded(4);
        assert_eq!(
            select(1, 1, true, &mut rng).unwrap().iter().collect::<Vec<_>>(),
            vec![0]
        );
        assert!(select(0, 1, false, &mut rng).unwrap().is_empty());
    }

    #[test]
    fn rejects_infeasible_parameters() {
        let mut rng = seeded(5);
        for (valid, total, last) in [(0, 0, false), (1, 0, true), (9, 8, true), (0, 8, true)] {
            assert!(
                matches!(
                    select(valid, total, last, &mut rng),
                    Err(FixtureError::InvalidParameters(_))
                ),
                "({valid}, {total}, {last}) should be rejected"
            );
        }
    }

    #[test]
    fn each_index_equally_likely() {
        const RUNS: usize = 20_000;
        let mut rng = seeded(6);
        let mut hits = [0usize; 21];
        for _ in 0..RUNS {
            for i in select(5, 21, false, &mut rng).unwrap().iter() {
                hits[i] += 1;
            }
        }
        // 5 of 20 drawable positions: expect RUNS / 4 hits each.
        for &count in &hits[..20] {
            assert!(count.abs_diff(RUNS / 4) < 400, "hits {hits:?}");
        }
        assert_eq!(hits[20], 0);
    }

    #[test]
    fn random_byte_mask_counts_bits() {
        let mut rng = seeded(8);
        let mask = random_byte_mask(&mut rng);
        let expected: usize = mask.bytes.iter().map(|b| b.count_ones() as usize).sum();
        assert_eq!(mask.active_cnt, expected);
        let zero_pairs = mask.bytes.chunks(2).filter(|pair| *pair == [0, 0]).count();
        assert!(zero_pairs >= 1);
    }
}
