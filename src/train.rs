use log::warn;
use serde::Serialize;

use crate::error::{SkipReason, TrackError};
use crate::feed::{RawTripRecord, Snapshot, TripStatus};
use crate::line::{Direction, Line};
use crate::resolve::{StopNames, TripDirections};

pub const NO_NEXT_STOP: &str = "(no next stop)";
pub const UNKNOWN_STOP: &str = "(unknown stop)";

/// Normalized view of one tracked train, derived from a single snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct TrainState {
    pub trip_id: String,
    pub vehicle_id: String,
    pub direction: Direction,
    /// terminus label displayed for this train's direction
    pub direction_label: &'static str,
    /// ordinal of the next station, -1 when it cannot be resolved
    pub next_station_index: i32,
    pub next_station: String,
    /// staleness-corrected seconds until the next station
    pub time_until: f64,
    /// scheduled duration of the current leg in seconds
    pub leg_total: i64,
    /// progress along the trip, 0.0 at the trip's origin in either direction
    pub pct_distance_along_trip: f64,
}

/// What became of one feed record.
#[derive(Debug)]
pub enum TripOutcome {
    Built(TrainState),
    Skipped { trip_id: String, reason: SkipReason },
}

pub struct TrainStateBuilder<'a> {
    line: &'a Line,
    stops: &'a StopNames,
    directions: &'a TripDirections,
    /// unix time in seconds, fixed for the whole pass
    now: f64,
}

impl<'a> TrainStateBuilder<'a> {
    pub fn new(
        line: &'a Line,
        stops: &'a StopNames,
        directions: &'a TripDirections,
        now: f64,
    ) -> Self {
        Self {
            line,
            stops,
            directions,
            now,
        }
    }

    pub fn build(&self, record: &RawTripRecord) -> TripOutcome {
        let Some(status) = record.status.as_ref() else {
            return TripOutcome::Skipped {
                trip_id: record.trip_id.clone(),
                reason: SkipReason::MissingStatus,
            };
        };

        match self.train_state(record, status) {
            Ok(state) => TripOutcome::Built(state),
            Err(err) => TripOutcome::Skipped {
                trip_id: record.trip_id.clone(),
                reason: SkipReason::Failed(err),
            },
        }
    }

    fn train_state(
        &self,
        record: &RawTripRecord,
        status: &TripStatus,
    ) -> Result<TrainState, TrackError> {
        let (next_station, next_station_index) = self.next_station(status)?;
        let time_until = self.time_until_next(status);
        let vehicle_id = self.vehicle_id(status);
        let direction = self.directions.resolve(&record.trip_id)?;
        let leg_total = leg_time(record);
        let pct_distance_along_trip =
            pct_distance_along_trip(status, &record.trip_id, direction)?;

        Ok(TrainState {
            trip_id: record.trip_id.clone(),
            vehicle_id,
            direction,
            direction_label: self.line.label(direction),
            next_station_index,
            next_station,
            time_until,
            leg_total,
            pct_distance_along_trip,
        })
    }

    fn next_station(&self, status: &TripStatus) -> Result<(String, i32), TrackError> {
        let Some(stop_id) = status.next_stop.as_deref().filter(|id| !id.is_empty()) else {
            return Ok((NO_NEXT_STOP.to_owned(), -1));
        };
        let Some(name) = self.stops.resolve(stop_id) else {
            return Ok((UNKNOWN_STOP.to_owned(), -1));
        };
        let index = self.line.stations().index_of(name)?;
        Ok((name.to_owned(), index as i32))
    }

    /// Extrapolates the feed's ETA forward by the age of the vehicle's last
    /// report, clamped so it never goes negative.
    fn time_until_next(&self, status: &TripStatus) -> f64 {
        let updated = status.last_update_time.unwrap_or(0) as f64 / 1000.0;
        let staleness = self.now - updated;
        (status.next_stop_time_offset.unwrap_or(0.0) - staleness).max(0.0)
    }

    fn vehicle_id(&self, status: &TripStatus) -> String {
        match status.vehicle_id.as_deref().filter(|id| !id.is_empty()) {
            Some(id) => id.to_owned(),
            None => " ".repeat(self.line.vehicle_id_width),
        }
    }
}

/// Scheduled duration of the leg ending at the trip's next stop: the next
/// stop's arrival minus the previous stop's departure. 0 when the schedule
/// is missing, the next stop opens the trip, or it never appears in the
/// stop-times list. First occurrence wins on duplicates.
fn leg_time(record: &RawTripRecord) -> i64 {
    let next_stop_id = record
        .status
        .as_ref()
        .and_then(|status| status.next_stop.as_deref())
        .filter(|id| !id.is_empty());
    let stop_times = record
        .schedule
        .as_ref()
        .map(|schedule| schedule.stop_times.as_slice())
        .unwrap_or_default();

    let Some(next_stop_id) = next_stop_id else {
        return 0;
    };

    match stop_times.iter().position(|stop| stop.stop_id == next_stop_id) {
        Some(0) | None => 0,
        Some(at) => stop_times[at].arrival_time - stop_times[at - 1].departure_time,
    }
}

/// Fraction of the trip already covered, oriented so 0.0 is the trip's
/// origin whichever way the train is heading.
fn pct_distance_along_trip(
    status: &TripStatus,
    trip_id: &str,
    direction: Direction,
) -> Result<f64, TrackError> {
    let (scheduled, total) = match (
        status.scheduled_distance_along_trip,
        status.total_distance_along_trip,
    ) {
        (Some(scheduled), Some(total)) => (scheduled, total),
        _ => {
            return Err(TrackError::MissingDistance {
                trip_id: trip_id.to_owned(),
            })
        }
    };

    let raw = scheduled / total;
    Ok(match direction {
        Direction::Outbound => raw,
        Direction::Inbound => 1.0 - raw,
    })
}

/// Derives every record in a snapshot, logging and dropping the trips that
/// cannot be resolved. One bad trip never aborts the pass.
pub fn process_snapshot(line: &Line, snapshot: &Snapshot, now: f64) -> Vec<TrainState> {
    let stops = StopNames::from(snapshot.references.stops.as_slice());
    let directions = TripDirections::from(snapshot.references.trips.as_slice());
    let builder = TrainStateBuilder::new(line, &stops, &directions, now);

    let mut trains = Vec::with_capacity(snapshot.list.len());
    for record in &snapshot.list {
        match builder.build(record) {
            TripOutcome::Built(state) => trains.push(state),
            TripOutcome::Skipped { trip_id, reason } => {
                warn!("skipping trip {trip_id}: {reason}");
            }
        }
    }
    trains
}
