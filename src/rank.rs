use itertools::Itertools;

use crate::line::Direction;
use crate::train::TrainState;

/// Composite key grouping trains by how far they have gotten toward their
/// terminus. Inbound trains take a +1 offset so the two directions
/// interleave onto one list, with ties broken by progress along the leg.
fn display_key(train: &TrainState) -> (i32, f64) {
    let inbound_offset = i32::from(train.direction == Direction::Inbound);
    (
        -train.next_station_index + inbound_offset,
        train.pct_distance_along_trip,
    )
}

/// Orders trains for display, ascending by key. Stable: ties keep their
/// feed order.
pub fn rank(trains: Vec<TrainState>) -> Vec<TrainState> {
    trains
        .into_iter()
        .sorted_by(|a, b| {
            let (ka, kb) = (display_key(a), display_key(b));
            ka.0.cmp(&kb.0).then_with(|| ka.1.total_cmp(&kb.1))
        })
        .collect()
}
