//! Maximum FDP and flight-time resolution.
//!
//! The regulation expresses limits as lookup tables keyed by the start-time
//! bracket, crew composition and (fixed wing only) the sector count. The
//! tables are kept as explicit const data so the rule set can be audited and
//! unit-tested independently of the code that consults it.

use crate::libs::clock;
use crate::libs::duty::AircraftCategory;

/// Resolved limits for one day. Zero limits mean "not computable", never a
/// violation in themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FdpLimits {
    pub max_fdp: f64,
    pub max_flight_time: f64,
}

// Start-time brackets, in table row order:
//   0: 06:00-06:59
//   1: 07:00-07:59
//   2: 08:00-13:59
//   3: 14:00-21:59
//   4: 22:00-05:59  (wraps midnight)
const BRACKET_COUNT: usize = 5;

/// Helicopter limits as (max FDP, max flight time) per bracket.
const HELI_SINGLE_PILOT: [(f64, f64); BRACKET_COUNT] =
    [(9.0, 6.0), (9.5, 6.5), (10.0, 7.0), (9.5, 6.5), (9.0, 6.0)];
const HELI_TWO_PILOT: [(f64, f64); BRACKET_COUNT] =
    [(11.0, 8.0), (11.5, 8.5), (12.0, 9.0), (11.5, 8.5), (11.0, 8.0)];

/// Fixed-wing two-crew maximum FDP, rows per bracket, columns per sector
/// count 1, 2, 3, 4, 5, 6, 7 and 8-or-more. Quarter-hour increments.
const FW_TWO_CREW: [[f64; 8]; BRACKET_COUNT] = [
    [12.0, 12.0, 11.5, 11.0, 10.5, 10.0, 9.5, 9.0],
    [12.75, 12.75, 12.25, 11.75, 11.25, 10.75, 10.25, 9.75],
    [13.0, 13.0, 12.5, 12.0, 11.5, 11.0, 10.5, 10.0],
    [12.5, 12.5, 12.0, 11.5, 11.0, 10.5, 10.0, 9.5],
    [11.0, 11.0, 10.5, 10.0, 9.5, 9.0, 9.0, 9.0],
];
const FW_TWO_CREW_MAX_FLIGHT: f64 = 10.0;

/// Fixed-wing single-pilot maximum FDP, columns per sector bucket:
/// up to 4, 5, 6, 7 and 8-or-more.
const FW_SINGLE_PILOT: [[f64; 5]; BRACKET_COUNT] = [
    [10.0, 9.5, 9.0, 8.5, 8.0],
    [10.5, 10.0, 9.5, 9.0, 8.5],
    [11.0, 10.5, 10.0, 9.5, 9.0],
    [10.5, 10.0, 9.5, 9.0, 8.5],
    [9.0, 8.5, 8.0, 8.0, 8.0],
];
const FW_SINGLE_MAX_FLIGHT: f64 = 8.0;

/// Maps a decimal start hour onto its bracket row.
///
/// Every valid clock value falls into exactly one bracket; the night bracket
/// covers both sides of midnight (22:00-23:59 and 00:00-05:59).
fn bracket_index(start: f64) -> usize {
    if (6.0..7.0).contains(&start) {
        0
    } else if (7.0..8.0).contains(&start) {
        1
    } else if (8.0..14.0).contains(&start) {
        2
    } else if (14.0..22.0).contains(&start) {
        3
    } else {
        4
    }
}

fn fw_two_crew_column(sectors: u32) -> usize {
    (sectors.max(1).min(8) - 1) as usize
}

fn fw_single_pilot_column(sectors: u32) -> usize {
    match sectors {
        0..=4 => 0,
        5 => 1,
        6 => 2,
        7 => 3,
        _ => 4,
    }
}

/// Looks up the base limits for a duty starting at `start_time` ("HH:MM").
///
/// A missing or unparseable start time resolves to zero limits; the caller
/// treats those as "not computable" rather than as a breach. A missing
/// sector count is treated as a single sector.
pub fn resolve(
    start_time: Option<&str>,
    category: Option<AircraftCategory>,
    is_two_pilot_operation: bool,
    sectors: Option<u32>,
) -> FdpLimits {
    let start = match start_time.and_then(clock::parse_clock) {
        Some(start) => start,
        None => return FdpLimits::default(),
    };
    let category = match category {
        Some(category) => category,
        None => return FdpLimits::default(),
    };
    let row = bracket_index(start);
    match category {
        AircraftCategory::Helicopter => {
            let (max_fdp, max_flight_time) = if is_two_pilot_operation {
                HELI_TWO_PILOT[row]
            } else {
                HELI_SINGLE_PILOT[row]
            };
            FdpLimits { max_fdp, max_flight_time }
        }
        AircraftCategory::FixedWing => {
            let sectors = sectors.unwrap_or(1);
            if is_two_pilot_operation {
                FdpLimits {
                    max_fdp: FW_TWO_CREW[row][fw_two_crew_column(sectors)],
                    max_flight_time: FW_TWO_CREW_MAX_FLIGHT,
                }
            } else {
                FdpLimits {
                    max_fdp: FW_SINGLE_PILOT[row][fw_single_pilot_column(sectors)],
                    max_flight_time: FW_SINGLE_MAX_FLIGHT,
                }
            }
        }
    }
}
