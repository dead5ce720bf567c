use chrono::{Local, NaiveDateTime, TimeDelta};

use super::model::{Flight, Segment};

/// Build the demo dataset, anchored three days from now.
///
/// | # | segments (relative to `T = now + 3d`) | notes                    |
/// |---|---------------------------------------|--------------------------|
/// | 0 | `T..T+2h`                             | plain two-hour flight    |
/// | 1 | `T..T+2h, T+3h..T+5h`                 | one hour on the ground   |
/// | 2 | `T-6d..T`                             | departs in the past      |
/// | 3 | `T..T-6h`                             | arrives before departing |
/// | 4 | `T..T+2h, T+5h..T+6h`                 | three hours on the ground|
/// | 5 | `T..T+2h, T+3h..T+4h, T+6h..T+7h`     | three hours on the ground|
pub fn create_flights() -> Vec<Flight> {
    create_flights_from(Local::now().naive_local() + TimeDelta::days(3))
}

/// Same layout as [`create_flights`], relative to an explicit anchor.
pub fn create_flights_from(anchor: NaiveDateTime) -> Vec<Flight> {
    let h = TimeDelta::hours;
    vec![
        flight(&[anchor, anchor + h(2)]),
        flight(&[anchor, anchor + h(2), anchor + h(3), anchor + h(5)]),
        flight(&[anchor - TimeDelta::days(6), anchor]),
        flight(&[anchor, anchor - h(6)]),
        flight(&[anchor, anchor + h(2), anchor + h(5), anchor + h(6)]),
        flight(&[
            anchor,
            anchor + h(2),
            anchor + h(3),
            anchor + h(4),
            anchor + h(6),
            anchor + h(7),
        ]),
    ]
}

/// Pair up `dates` as (departure, arrival) legs. A trailing odd date is dropped.
fn flight(dates: &[NaiveDateTime]) -> Flight {
    Flight::new(
        dates
            .chunks_exact(2)
            .map(|leg| Segment::new(leg[0], leg[1]))
            .collect(),
    )
}
