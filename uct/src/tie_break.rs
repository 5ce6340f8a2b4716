use std::cmp::Ordering;

use rand::Rng;

/// Tracks the item with the highest key seen so far in a single pass.
///
/// Ties are resolved by reservoir sampling: the n-th item tied for the best key replaces the
/// current winner with probability 1/n, so every tied item is equally likely to be kept.
#[derive(Debug)]
pub struct ReservoirMax<T, K> {
    best: Option<(T, K)>,
    num_best: usize,
}

impl<T, K: PartialOrd> ReservoirMax<T, K> {
    pub fn new() -> Self {
        Self {
            best: None,
            num_best: 0,
        }
    }

    pub fn offer<R: Rng + ?Sized>(&mut self, item: T, key: K, rng: &mut R) {
        let ordering = self
            .best
            .as_ref()
            .map(|(_, best_key)| key.partial_cmp(best_key));

        match ordering {
            None | Some(Some(Ordering::Greater)) => {
                self.best = Some((item, key));
                self.num_best = 1;
            }
            Some(Some(Ordering::Equal)) => {
                self.num_best += 1;
                if rng.gen_range(0..self.num_best) == 0 {
                    self.best = Some((item, key));
                }
            }
            _ => {}
        }
    }

    /// Number of items currently tied for the best key.
    pub fn num_best(&self) -> usize {
        self.num_best
    }

    pub fn best_key(&self) -> Option<&K> {
        self.best.as_ref().map(|(_, key)| key)
    }

    pub fn into_best(self) -> Option<T> {
        self.best.map(|(item, _)| item)
    }
}

impl<T, K: PartialOrd> Default for ReservoirMax<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_empty_has_no_best() {
        let best: ReservoirMax<u8, f32> = ReservoirMax::new();
        assert_eq!(best.num_best(), 0);
        assert_eq!(best.into_best(), None);
    }

    #[test]
    fn test_picks_strict_maximum() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut best = ReservoirMax::new();

        for (item, key) in [('a', 1), ('b', 5), ('c', 3), ('d', 4)] {
            best.offer(item, key, &mut rng);
        }

        assert_eq!(best.num_best(), 1);
        assert_eq!(best.best_key(), Some(&5));
        assert_eq!(best.into_best(), Some('b'));
    }

    #[test]
    fn test_new_maximum_resets_ties() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut best = ReservoirMax::new();

        best.offer('a', 2, &mut rng);
        best.offer('b', 2, &mut rng);
        assert_eq!(best.num_best(), 2);

        best.offer('c', 3, &mut rng);
        assert_eq!(best.num_best(), 1);
        assert_eq!(best.into_best(), Some('c'));
    }

    #[test]
    fn test_ties_are_chosen_uniformly() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut counts = [0usize; 3];
        let trials = 30_000;

        for _ in 0..trials {
            let mut best = ReservoirMax::new();
            best.offer(0, 1.0, &mut rng);
            best.offer(1, 1.0, &mut rng);
            best.offer(2, 1.0, &mut rng);
            counts[best.into_best().unwrap()] += 1;
        }

        for count in counts {
            let frequency = count as f64 / trials as f64;
            assert!((frequency - 1.0 / 3.0).abs() < 0.02, "{:?}", counts);
        }
    }
}
