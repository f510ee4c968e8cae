use std::collections::HashMap;
use std::fmt;

use clap::ValueEnum;
use serde::Serialize;

use crate::error::TrackError;

const LINE_1_STATIONS: [&str; 26] = [
    "Federal Way Downtown",
    "Star Lake",
    "Kent Des Moines",
    "Angle Lake",
    "SeaTac/Airport",
    "Tukwila Int'l Blvd",
    "Rainier Beach",
    "Othello",
    "Columbia City",
    "Mount Baker",
    "Beacon Hill",
    "SODO",
    "Stadium",
    "Int'l Dist/Chinatown",
    "Pioneer Square",
    "Symphony",
    "Westlake",
    "Capitol Hill",
    "Univ of Washington",
    "U District",
    "Roosevelt",
    "Northgate",
    "Shoreline South/148th",
    "Shoreline North/185th",
    "Mountlake Terrace",
    "Lynnwood City Center",
];

const LINE_2_STATIONS: [&str; 10] = [
    "South Bellevue",
    "East Main",
    "Bellevue Downtown",
    "Wilburton",
    "Spring District",
    "BelRed",
    "Overlake Village",
    "Redmond Technology",
    "Marymoor Village",
    "Downtown Redmond",
];

const LINE_T_STATIONS: [&str; 12] = [
    "Tacoma Dome",
    "S 25th",
    "Union Station",
    "Convention Center",
    "Theater District",
    "Old City Hall",
    "S 4th",
    "Stadium District",
    "Tacoma General",
    "6th Ave",
    "Hilltop District",
    "St Joseph",
];

/// Line selector accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LineCode {
    /// 1 Line, Federal Way Downtown to Lynnwood City Center
    #[value(name = "1")]
    One,
    /// 2 Line, South Bellevue to Downtown Redmond
    #[value(name = "2")]
    Two,
    /// T Line, Tacoma Dome to St Joseph
    #[value(name = "T", alias = "t")]
    T,
}

impl fmt::Display for LineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            LineCode::One => "1",
            LineCode::Two => "2",
            LineCode::T => "T",
        };
        write!(f, "{code}")
    }
}

/// Travel direction, following the feed's directionId convention: "0" is
/// outbound (toward the first configured terminus), anything else inbound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Outbound,
    Inbound,
}

impl Direction {
    pub fn from_direction_id(direction_id: Option<&str>) -> Self {
        match direction_id {
            Some("0") => Direction::Outbound,
            _ => Direction::Inbound,
        }
    }
}

/// Ordered terminus-to-terminus station sequence with name lookup.
#[derive(Debug)]
pub struct StationIndex {
    line: LineCode,
    names: Vec<&'static str>,
    ordinals: HashMap<&'static str, usize>,
}

impl StationIndex {
    fn new(line: LineCode, names: &[&'static str]) -> Self {
        let ordinals = names
            .iter()
            .enumerate()
            .map(|(ordinal, &name)| (name, ordinal))
            .collect();

        Self {
            line,
            names: names.to_vec(),
            ordinals,
        }
    }

    pub fn index_of(&self, name: &str) -> Result<usize, TrackError> {
        self.ordinals
            .get(name)
            .copied()
            .ok_or_else(|| TrackError::UnknownStation {
                name: name.to_owned(),
                line: self.line.to_string(),
            })
    }

    pub fn name_at(&self, ordinal: usize) -> Option<&'static str> {
        self.names.get(ordinal).copied()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Static description of one tracked line.
#[derive(Debug)]
pub struct Line {
    pub code: LineCode,
    pub route_id: &'static str,
    /// column width of the blank shown when a train reports no vehicle id
    pub vehicle_id_width: usize,
    labels: (&'static str, &'static str),
    stations: StationIndex,
}

impl From<LineCode> for Line {
    fn from(code: LineCode) -> Self {
        match code {
            LineCode::One => Line::new(code, "40_100479", 13, ("S", "N"), &LINE_1_STATIONS),
            LineCode::Two => Line::new(
                code,
                "40_2LINE",
                13,
                ("Downtown Redmond", "South Bellevue"),
                &LINE_2_STATIONS,
            ),
            LineCode::T => Line::new(
                code,
                "40_TLINE",
                4,
                ("Tacoma Dome", "St Joseph"),
                &LINE_T_STATIONS,
            ),
        }
    }
}

impl Line {
    fn new(
        code: LineCode,
        route_id: &'static str,
        vehicle_id_width: usize,
        labels: (&'static str, &'static str),
        stations: &[&'static str],
    ) -> Self {
        Self {
            code,
            route_id,
            vehicle_id_width,
            labels,
            stations: StationIndex::new(code, stations),
        }
    }

    /// Terminus label displayed for trains heading in `direction`.
    pub fn label(&self, direction: Direction) -> &'static str {
        match direction {
            Direction::Outbound => self.labels.0,
            Direction::Inbound => self.labels.1,
        }
    }

    pub fn stations(&self) -> &StationIndex {
        &self.stations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn station_ordinals_round_trip() {
        for code in [LineCode::One, LineCode::Two, LineCode::T] {
            let line = Line::from(code);
            let stations = line.stations();
            assert!(!stations.is_empty());
            for ordinal in 0..stations.len() {
                let name = stations.name_at(ordinal).unwrap();
                assert_eq!(stations.index_of(name).unwrap(), ordinal);
            }
        }
    }

    #[test]
    fn name_at_is_none_past_the_terminus() {
        let line = Line::from(LineCode::Two);
        assert_eq!(line.stations().name_at(10), None);
    }

    #[test]
    fn unknown_station_is_an_error() {
        let line = Line::from(LineCode::T);
        let err = line.stations().index_of("Westlake").unwrap_err();
        assert_eq!(
            err,
            TrackError::UnknownStation {
                name: "Westlake".to_owned(),
                line: "T".to_owned(),
            }
        );
    }

    #[test]
    fn direction_id_zero_is_outbound() {
        assert_eq!(Direction::from_direction_id(Some("0")), Direction::Outbound);
        assert_eq!(Direction::from_direction_id(Some("1")), Direction::Inbound);
        assert_eq!(Direction::from_direction_id(None), Direction::Inbound);
    }

    #[test]
    fn labels_follow_direction() {
        let line = Line::from(LineCode::One);
        assert_eq!(line.label(Direction::Outbound), "S");
        assert_eq!(line.label(Direction::Inbound), "N");

        let line = Line::from(LineCode::Two);
        assert_eq!(line.label(Direction::Outbound), "Downtown Redmond");
        assert_eq!(line.label(Direction::Inbound), "South Bellevue");
    }
}
