use flight_filter::flight::builder::create_flights;
use flight_filter::flight::{Flight, FlightFilter};
use flight_filter::{FilterConfig, FilterEngine, FilterError, FilterList};

struct Fixture {
    flights: Vec<Flight>,
    engine: FilterEngine<Flight>,
}

impl Fixture {
    fn new() -> Self {
        let flights = create_flights();
        let engine = FilterEngine::new(flights.clone()).unwrap();
        Self { flights, engine }
    }

    fn pick(&self, indices: &[usize]) -> Vec<Flight> {
        indices.iter().map(|&i| self.flights[i].clone()).collect()
    }

    /// Run the same query in both modes and check they agree.
    fn run(&self, lists: &[FilterList<Flight>]) -> Vec<Flight> {
        let sequential = self.engine.filter_sequential(lists).unwrap();
        let parallel = self.engine.filter_parallel(lists).unwrap();
        assert_eq!(sequential, parallel);
        sequential
    }
}

fn list(filters: &[FlightFilter]) -> FilterList<Flight> {
    filters.iter().map(|f| f.predicate()).collect()
}

#[test]
fn departure_before_now() {
    let fx = Fixture::new();
    let result = fx.run(&[list(&[FlightFilter::DepartureBeforeNow])]);
    assert_eq!(result, fx.pick(&[2]));
}

#[test]
fn arrival_before_departure() {
    let fx = Fixture::new();
    let result = fx.run(&[list(&[FlightFilter::ArrivalBeforeDeparture])]);
    assert_eq!(result, fx.pick(&[3]));
}

#[test]
fn ground_time_more_than_two_hours() {
    let fx = Fixture::new();
    let result = fx.run(&[list(&[FlightFilter::GroundTimeMoreThanTwoHours])]);
    assert_eq!(result, fx.pick(&[4, 5]));
}

#[test]
fn departure_before_now_or_arrival_before_departure() {
    let fx = Fixture::new();
    let result = fx.run(&[
        list(&[FlightFilter::DepartureBeforeNow]),
        list(&[FlightFilter::ArrivalBeforeDeparture]),
    ]);
    assert_eq!(result, fx.pick(&[2, 3]));
}

#[test]
fn or_union_keeps_source_order() {
    let fx = Fixture::new();
    let result = fx.run(&[
        list(&[FlightFilter::GroundTimeMoreThanTwoHours]),
        list(&[FlightFilter::DepartureBeforeNow]),
    ]);
    assert_eq!(result, fx.pick(&[2, 4, 5]));
}

#[test]
fn and_within_a_list() {
    let fx = Fixture::new();
    let none = fx.run(&[list(&[
        FlightFilter::DepartureBeforeNow,
        FlightFilter::ArrivalBeforeDeparture,
    ])]);
    assert!(none.is_empty());

    let mut clean = vec![
        FlightFilter::DepartureBeforeNow.negative(),
        FlightFilter::ArrivalBeforeDeparture.negative(),
    ];
    clean.push(FlightFilter::GroundTimeMoreThanTwoHours.negative());
    assert_eq!(fx.run(&[clean]), fx.pick(&[0, 1]));
}

#[test]
fn no_filter_returns_everything() {
    let fx = Fixture::new();
    let result = fx.run(&[list(&[FlightFilter::NoFilter])]);
    assert_eq!(result, fx.flights);
    assert_eq!(fx.engine.data(), fx.flights.as_slice());
}

#[test]
fn empty_filter_list_fails_in_both_modes() {
    let fx = Fixture::new();
    let empty: Vec<FilterList<Flight>> = vec![Vec::new()];

    assert!(matches!(
        fx.engine.filter_sequential(&empty),
        Err(FilterError::EmptyFilterList { index: 0 })
    ));
    assert!(matches!(
        fx.engine.filter_parallel(&empty),
        Err(FilterError::EmptyFilterList { index: 0 })
    ));

    let mixed = vec![list(&[FlightFilter::DepartureBeforeNow]), Vec::new()];
    assert!(matches!(
        fx.engine.filter_sequential(&mixed),
        Err(FilterError::EmptyFilterList { index: 1 })
    ));
}

#[test]
fn empty_dataset_fails() {
    assert!(matches!(
        FilterEngine::<Flight>::new(Vec::new()),
        Err(FilterError::EmptyDataset)
    ));
    assert!(matches!(
        FilterEngine::<Flight>::with_config(Vec::new(), &FilterConfig::with_threads(2)),
        Err(FilterError::EmptyDataset)
    ));
}

#[test]
fn dedicated_pool_on_large_dataset() {
    let flights: Vec<Flight> = (0..500).flat_map(|_| create_flights()).collect();
    let engine = FilterEngine::with_config(flights, &FilterConfig::with_threads(4)).unwrap();
    let lists = vec![
        list(&[FlightFilter::GroundTimeMoreThanTwoHours]),
        list(&[FlightFilter::ArrivalBeforeDeparture]),
    ];

    let parallel = engine.filter_parallel(&lists).unwrap();
    assert_eq!(parallel, engine.filter_sequential(&lists).unwrap());
    assert_eq!(parallel.len(), 1_500);
}
