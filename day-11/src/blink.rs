use tracing::debug;

use crate::count_map::CountMap;
use crate::stone::Stone;

/// Applies one blink to every stone, consuming the previous generation.
///
/// The next generation starts from the baseline capacity and grows on its
/// own; stones that land on the same value have their counts added.
pub fn blink(current: CountMap) -> CountMap {
    let mut next = CountMap::new();
    for entry in current.iter() {
        for successor in Stone::new(entry.key).blink() {
            next.insert(successor, entry.count);
        }
    }
    next
}

#[tracing::instrument(skip(stones), fields(distinct = stones.occupied()))]
pub fn run_blinks(mut stones: CountMap, rounds: usize) -> CountMap {
    for round in 1..=rounds {
        stones = blink(stones);
        debug!(
            round,
            capacity = stones.capacity(),
            distinct = stones.occupied(),
            population = stones.total(),
            "blinked"
        );
    }
    stones
}
