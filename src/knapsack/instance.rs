//! Knapsack instance and its file format.

use super::solution::KnapsackSolution;
use crate::error::InstanceError;
use crate::problem::Instance;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

/// An item that may be packed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnapsackItem {
    /// Profit gained when the item is packed.
    pub value: f64,
    /// Capacity consumed when the item is packed.
    pub weight: u64,
}

impl KnapsackItem {
    pub fn new(value: f64, weight: u64) -> Self {
        Self { value, weight }
    }

    /// Value per unit of weight. Weightless items rank first.
    pub fn density(&self) -> f64 {
        if self.weight == 0 {
            f64::INFINITY
        } else {
            self.value / self.weight as f64
        }
    }
}

/// A 0/1 knapsack instance: items and one capacity.
#[derive(Debug, Clone)]
pub struct KnapsackInstance {
    items: Arc<[KnapsackItem]>,
    capacity: u64,
}

impl KnapsackInstance {
    pub fn new(capacity: u64, items: Vec<KnapsackItem>) -> Self {
        Self {
            items: items.into(),
            capacity,
        }
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Sum of all item weights, saturating at `u64::MAX`.
    pub fn total_weight(&self) -> u64 {
        self.items
            .iter()
            .fold(0u64, |total, item| total.saturating_add(item.weight))
    }

    /// Loads an instance file.
    ///
    /// The first line is a free-form header. It is followed by the item
    /// count and the capacity, then one `value weight` pair per item.
    /// Lines starting with `#` are comments.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, InstanceError> {
        std::fs::read_to_string(path)?.parse()
    }
}

impl FromStr for KnapsackInstance {
    type Err = InstanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s
            .lines()
            .enumerate()
            .skip(1)
            .filter(|(_, line)| !line.trim_start().starts_with('#'))
            .flat_map(|(i, line)| line.split_whitespace().map(move |t| (i + 1, t)));

        let declared: usize = next_token(&mut tokens, "item count")?;
        let capacity: u64 = next_token(&mut tokens, "capacity")?;

        let mut items = Vec::with_capacity(declared);
        while let Some((line, raw)) = tokens.next() {
            let value = parse_token::<f64>(line, raw, "item value")?;
            let weight = next_token::<u64>(&mut tokens, "item weight")?;
            items.push(KnapsackItem::new(value, weight));
        }
        // Items keep file order, so element ids match line order.

        if items.len() != declared {
            return Err(InstanceError::CountMismatch {
                declared,
                found: items.len(),
            });
        }
        Ok(Self::new(capacity, items))
    }
}

fn next_token<'a, T: FromStr>(
    tokens: &mut impl Iterator<Item = (usize, &'a str)>,
    what: &str,
) -> Result<T, InstanceError> {
    match tokens.next() {
        Some((line, raw)) => parse_token(line, raw, what),
        None => Err(InstanceError::Malformed {
            line: 0,
            reason: format!("unexpected end of input, expected {what}"),
        }),
    }
}

fn parse_token<T: FromStr>(line: usize, raw: &str, what: &str) -> Result<T, InstanceError> {
    raw.parse().map_err(|_| InstanceError::Malformed {
        line,
        reason: format!("cannot parse {what} from `{raw}`"),
    })
}

impl Instance for KnapsackInstance {
    type Element = KnapsackItem;
    type Solution = KnapsackSolution;

    fn elements(&self) -> &[KnapsackItem] {
        &self.items
    }

    fn initialize_solution(&self) -> KnapsackSolution {
        KnapsackSolution::new(Arc::clone(&self.items))
    }
}
