use std::collections::HashMap;

use crate::error::TrackError;
use crate::feed::{StopReference, TripReference};
use crate::line::Direction;

/// Stop-id to station-name lookup, rebuilt from each snapshot's references
/// and dropped with the snapshot.
#[derive(Debug, Default)]
pub struct StopNames(HashMap<String, String>);

impl StopNames {
    pub fn resolve(&self, stop_id: &str) -> Option<&str> {
        self.0.get(stop_id).map(String::as_str)
    }
}

impl From<&[StopReference]> for StopNames {
    fn from(stops: &[StopReference]) -> Self {
        // last write wins when the feed repeats an id
        Self(
            stops
                .iter()
                .map(|stop| (stop.id.clone(), stop.name.clone()))
                .collect(),
        )
    }
}

/// Trip-id to direction lookup, built once per snapshot and reused for
/// every record in it.
#[derive(Debug, Default)]
pub struct TripDirections(HashMap<String, Direction>);

impl TripDirections {
    pub fn resolve(&self, trip_id: &str) -> Result<Direction, TrackError> {
        self.0
            .get(trip_id)
            .copied()
            .ok_or_else(|| TrackError::TripNotFound {
                trip_id: trip_id.to_owned(),
            })
    }
}

impl From<&[TripReference]> for TripDirections {
    fn from(trips: &[TripReference]) -> Self {
        Self(
            trips
                .iter()
                .map(|trip| {
                    (
                        trip.id.clone(),
                        Direction::from_direction_id(trip.direction_id.as_deref()),
                    )
                })
                .collect(),
        )
    }
}
