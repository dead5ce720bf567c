use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, LazyLock};

use chrono::Local;

use super::model::Flight;
use crate::error::FilterError;
use crate::filter::predicate::{always, negate, predicate, Predicate};

// ---------------------------------------------------------------------------
// Named flight conditions
// ---------------------------------------------------------------------------

/// The built-in conditions over [`Flight`] records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FlightFilter {
    /// Accepts every flight.
    NoFilter,
    /// Some segment departs before the local wall clock.
    DepartureBeforeNow,
    /// Some segment arrives before it departs.
    ArrivalBeforeDeparture,
    /// More than two whole hours on the ground between segments.
    GroundTimeMoreThanTwoHours,
}

/// Predicates for every [`FlightFilter`], built once per process.
static REGISTRY: LazyLock<BTreeMap<FlightFilter, Predicate<Flight>>> = LazyLock::new(|| {
    FlightFilter::ALL
        .iter()
        .map(|&filter| (filter, filter.build()))
        .collect()
});

impl FlightFilter {
    pub const ALL: [FlightFilter; 4] = [
        FlightFilter::NoFilter,
        FlightFilter::DepartureBeforeNow,
        FlightFilter::ArrivalBeforeDeparture,
        FlightFilter::GroundTimeMoreThanTwoHours,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FlightFilter::NoFilter => "no_filter",
            FlightFilter::DepartureBeforeNow => "departure_before_now",
            FlightFilter::ArrivalBeforeDeparture => "arrival_before_departure",
            FlightFilter::GroundTimeMoreThanTwoHours => "ground_time_more_than_2_hours",
        }
    }

    /// The stored predicate for this condition.
    pub fn predicate(self) -> Predicate<Flight> {
        // Every variant is inserted when the registry is built.
        match REGISTRY.get(&self) {
            Some(stored) => Arc::clone(stored),
            None => self.build(),
        }
    }

    /// The logical negation of [`FlightFilter::predicate`].
    pub fn negative(self) -> Predicate<Flight> {
        negate(self.predicate())
    }

    fn build(self) -> Predicate<Flight> {
        match self {
            FlightFilter::NoFilter => always(),
            FlightFilter::DepartureBeforeNow => predicate(|flight: &Flight| {
                let now = Local::now().naive_local();
                flight.segments.iter().any(|s| s.departure < now)
            }),
            FlightFilter::ArrivalBeforeDeparture => predicate(|flight: &Flight| {
                flight.segments.iter().any(|s| s.arrival < s.departure)
            }),
            FlightFilter::GroundTimeMoreThanTwoHours => predicate(|flight: &Flight| {
                flight.segments.len() > 1 && flight.ground_time().num_hours() > 2
            }),
        }
    }
}

impl fmt::Display for FlightFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FlightFilter {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        FlightFilter::ALL
            .into_iter()
            .find(|filter| filter.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| FilterError::UnknownFilter(wanted.to_string()))
    }
}
