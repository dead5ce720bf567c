use std::fmt;

use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

const DISPLAY_FORMAT: &str = "%Y-%m-%dT%H:%M";

// ---------------------------------------------------------------------------
// Segment – one leg of a flight
// ---------------------------------------------------------------------------

/// A single flight leg. Nothing forces `arrival` to come after `departure`;
/// inconsistent legs are exactly what some filters look for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub departure: NaiveDateTime,
    pub arrival: NaiveDateTime,
}

impl Segment {
    pub fn new(departure: NaiveDateTime, arrival: NaiveDateTime) -> Self {
        Self { departure, arrival }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}|{}]",
            self.departure.format(DISPLAY_FORMAT),
            self.arrival.format(DISPLAY_FORMAT)
        )
    }
}

// ---------------------------------------------------------------------------
// Flight – an ordered chain of segments
// ---------------------------------------------------------------------------

/// A trip made of one or more segments, in travel order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flight {
    pub segments: Vec<Segment>,
}

impl Flight {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Total time spent on the ground between consecutive segments.
    ///
    /// Each gap runs from one segment's arrival to the next segment's departure.
    /// Overlapping legs contribute negative gaps. Single-segment flights have no
    /// ground time.
    pub fn ground_time(&self) -> TimeDelta {
        self.segments
            .windows(2)
            .map(|pair| pair[1].departure - pair[0].arrival)
            .fold(TimeDelta::zero(), |total, gap| total + gap)
    }
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}
