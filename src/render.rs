use std::fmt;

use anyhow::Result;

use crate::train::TrainState;

const RED_BG: &str = "\x1b[1;41m";
const BLUE_BG: &str = "\x1b[1;44m";
const YELLOW: &str = "\x1b[1;33m";
const RESET: &str = "\x1b[0m";

impl fmt::Display for TrainState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\n{RED_BG}{}{RESET} {BLUE_BG}{}{RESET}\n{YELLOW}{} in {}s{RESET}",
            self.direction_label,
            self.vehicle_id,
            self.next_station,
            self.time_until.round()
        )
    }
}

/// Prints the ranked trains as colored terminal blocks.
pub fn print_board(trains: &[TrainState]) {
    for train in trains {
        println!("{train}");
    }
}

/// Prints the ranked trains as a JSON array for programmatic consumers.
pub fn print_json(trains: &[TrainState]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(trains)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::Direction;

    #[test]
    fn display_rounds_the_eta_and_colors_the_fields() {
        let train = TrainState {
            trip_id: "40_trip".to_owned(),
            vehicle_id: "40_123".to_owned(),
            direction: Direction::Inbound,
            direction_label: "N",
            next_station_index: 16,
            next_station: "Westlake".to_owned(),
            time_until: 169.6,
            leg_total: 170,
            pct_distance_along_trip: 0.4,
        };

        let rendered = train.to_string();
        assert!(rendered.contains("Westlake in 170s"));
        assert!(rendered.contains("\x1b[1;41mN\x1b[0m"));
        assert!(rendered.contains("\x1b[1;44m40_123\x1b[0m"));
    }

    #[test]
    fn json_output_carries_the_derived_fields() {
        let train = TrainState {
            trip_id: "40_trip".to_owned(),
            vehicle_id: "40_123".to_owned(),
            direction: Direction::Outbound,
            direction_label: "S",
            next_station_index: 4,
            next_station: "SeaTac/Airport".to_owned(),
            time_until: 45.0,
            leg_total: 120,
            pct_distance_along_trip: 0.25,
        };

        let value = serde_json::to_value([train]).unwrap();
        assert_eq!(value[0]["direction"], "outbound");
        assert_eq!(value[0]["direction_label"], "S");
        assert_eq!(value[0]["next_station_index"], 4);
        assert_eq!(value[0]["pct_distance_along_trip"], 0.25);
    }
}
