use serde::Deserialize;

/// One trips-for-route document as fetched from the feed. A document missing
/// the references or list sections fails to decode, which aborts the cycle.
#[derive(Deserialize, Debug)]
pub struct TripsForRoute {
    pub data: Snapshot,
}

#[derive(Deserialize, Debug)]
pub struct Snapshot {
    pub references: References,
    pub list: Vec<RawTripRecord>,
}

#[derive(Deserialize, Debug, Default)]
pub struct References {
    #[serde(default)]
    pub stops: Vec<StopReference>,
    #[serde(default)]
    pub trips: Vec<TripReference>,
}

#[derive(Deserialize, Debug)]
pub struct StopReference {
    pub id: String,
    pub name: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TripReference {
    pub id: String,
    #[serde(default)]
    pub direction_id: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RawTripRecord {
    pub trip_id: String,
    #[serde(default)]
    pub status: Option<TripStatus>,
    #[serde(default)]
    pub schedule: Option<TripSchedule>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct TripStatus {
    #[serde(default)]
    pub next_stop: Option<String>,
    /// epoch milliseconds of the vehicle's last report
    #[serde(default)]
    pub last_update_time: Option<i64>,
    /// seconds from the last report until the next stop
    #[serde(default)]
    pub next_stop_time_offset: Option<f64>,
    #[serde(default)]
    pub vehicle_id: Option<String>,
    #[serde(default)]
    pub scheduled_distance_along_trip: Option<f64>,
    #[serde(default)]
    pub total_distance_along_trip: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct TripSchedule {
    #[serde(default)]
    pub stop_times: Vec<ScheduledStopTime>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledStopTime {
    #[serde(default)]
    pub stop_id: String,
    #[serde(default)]
    pub arrival_time: i64,
    #[serde(default)]
    pub departure_time: i64,
}

/// One stops-for-route document; only its stop references are read.
#[derive(Deserialize, Debug)]
pub struct StopsForRoute {
    pub data: StopsSection,
}

#[derive(Deserialize, Debug)]
pub struct StopsSection {
    pub references: References,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_minimal_snapshot() {
        let text = r#"{
            "code": 200,
            "data": {
                "references": {
                    "stops": [{"id": "40_990", "name": "Westlake", "lat": 47.6}],
                    "trips": [{"id": "40_trip_a", "directionId": "0", "routeId": "40_100479"}]
                },
                "list": [{
                    "tripId": "40_trip_a",
                    "status": {
                        "nextStop": "40_990",
                        "lastUpdateTime": 1700000000000,
                        "nextStopTimeOffset": 90,
                        "vehicleId": "40_123",
                        "scheduledDistanceAlongTrip": 500.0,
                        "totalDistanceAlongTrip": 1000.0,
                        "phase": "IN_PROGRESS"
                    },
                    "schedule": {
                        "stopTimes": [{"stopId": "40_990", "arrivalTime": 120, "departureTime": 130}]
                    }
                }]
            }
        }"#;

        let document: TripsForRoute = serde_json::from_str(text).unwrap();
        let snapshot = document.data;
        assert_eq!(snapshot.references.stops[0].name, "Westlake");
        assert_eq!(snapshot.references.trips[0].direction_id.as_deref(), Some("0"));

        let record = &snapshot.list[0];
        assert_eq!(record.trip_id, "40_trip_a");
        let status = record.status.as_ref().unwrap();
        assert_eq!(status.next_stop.as_deref(), Some("40_990"));
        assert_eq!(status.last_update_time, Some(1_700_000_000_000));
        assert_eq!(status.next_stop_time_offset, Some(90.0));
        assert_eq!(record.schedule.as_ref().unwrap().stop_times[0].departure_time, 130);
    }

    #[test]
    fn status_and_schedule_are_optional() {
        let text = r#"{
            "data": {
                "references": {"stops": [], "trips": []},
                "list": [{"tripId": "40_bare"}]
            }
        }"#;

        let document: TripsForRoute = serde_json::from_str(text).unwrap();
        let record = &document.data.list[0];
        assert!(record.status.is_none());
        assert!(record.schedule.is_none());
    }

    #[test]
    fn missing_list_section_fails_the_document() {
        let text = r#"{"data": {"references": {"stops": [], "trips": []}}}"#;
        assert!(serde_json::from_str::<TripsForRoute>(text).is_err());
    }

    #[test]
    fn missing_references_section_fails_the_document() {
        let text = r#"{"data": {"list": []}}"#;
        assert!(serde_json::from_str::<TripsForRoute>(text).is_err());
    }

    #[test]
    fn null_status_subfields_are_tolerated() {
        let text = r#"{
            "data": {
                "references": {"stops": [], "trips": []},
                "list": [{
                    "tripId": "40_nulls",
                    "status": {"nextStop": null, "vehicleId": null}
                }]
            }
        }"#;

        let document: TripsForRoute = serde_json::from_str(text).unwrap();
        let status = document.data.list[0].status.as_ref().unwrap();
        assert!(status.next_stop.is_none());
        assert!(status.last_update_time.is_none());
        assert!(status.scheduled_distance_along_trip.is_none());
    }
}
