use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrackError {
    #[error("No such station {name:?} on line {line}")]
    UnknownStation { name: String, line: String },

    #[error("Trip {trip_id:?} not found in the snapshot's trip references")]
    TripNotFound { trip_id: String },

    #[error("Trip {trip_id:?} has no distance-along-trip data")]
    MissingDistance { trip_id: String },
}

/// Why one feed record produced no train. Skips are per trip and never abort
/// the rest of the snapshot.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SkipReason {
    #[error("record has no status block")]
    MissingStatus,

    #[error(transparent)]
    Failed(#[from] TrackError),
}
