//! Shared test instances.

use super::{KnapsackInstance, KnapsackItem};
use crate::random::create_rng;
use rand::Rng;

/// A(9, 3), B(5, 4), C(6, 5) with capacity 7.
pub(crate) fn abc() -> KnapsackInstance {
    KnapsackInstance::new(
        7,
        vec![
            KnapsackItem::new(9.0, 3),
            KnapsackItem::new(5.0, 4),
            KnapsackItem::new(6.0, 5),
        ],
    )
}

/// Random instance whose capacity holds roughly a third of the items.
pub(crate) fn random_instance(n: usize, seed: u64) -> KnapsackInstance {
    let mut rng = create_rng(seed);
    let items: Vec<KnapsackItem> = (0..n)
        .map(|_| KnapsackItem::new(rng.random_range(1.0..100.0), rng.random_range(1..40)))
        .collect();
    let capacity = items.iter().map(|item| item.weight).sum::<u64>() / 3;
    KnapsackInstance::new(capacity, items)
}
