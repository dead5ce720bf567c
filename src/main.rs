use anyhow::{bail, Context, Result};
use log::info;

use flight_filter::flight::builder::create_flights;
use flight_filter::flight::{Flight, FlightFilter};
use flight_filter::{FilterConfig, FilterEngine, FilterList};

const USAGE: &str = "usage: flight-filter [--parallel] [--json] [FILTER[,FILTER...] ...]";

/// Command-line options. Each positional argument is one AND list; the lists
/// are OR'ed together.
struct Options {
    parallel: bool,
    json: bool,
    lists: Vec<Vec<FlightFilter>>,
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<Options> {
    let mut options = Options {
        parallel: false,
        json: false,
        lists: Vec::new(),
    };

    for arg in args {
        match arg.as_str() {
            "--parallel" => options.parallel = true,
            "--json" => options.json = true,
            "-h" | "--help" => bail!("{USAGE}"),
            flag if flag.starts_with("--") => bail!("unknown option {flag}\n{USAGE}"),
            list => {
                let filters = list
                    .split(',')
                    .filter(|name| !name.trim().is_empty())
                    .map(|name| name.parse::<FlightFilter>())
                    .collect::<Result<Vec<_>, _>>()
                    .with_context(|| format!("parsing filter list '{list}'"))?;
                options.lists.push(filters);
            }
        }
    }
    Ok(options)
}

fn to_filter_list(filters: &[FlightFilter]) -> FilterList<Flight> {
    filters.iter().map(|f| f.predicate()).collect()
}

fn describe(lists: &[Vec<FlightFilter>]) -> String {
    lists
        .iter()
        .map(|list| {
            list.iter()
                .map(|f| f.name())
                .collect::<Vec<_>>()
                .join(" AND ")
        })
        .collect::<Vec<_>>()
        .join(" OR ")
}

fn run_query(
    engine: &FilterEngine<Flight>,
    options: &Options,
    lists: &[Vec<FlightFilter>],
) -> Result<()> {
    let filter_lists: Vec<FilterList<Flight>> =
        lists.iter().map(|list| to_filter_list(list)).collect();
    let result = if options.parallel {
        engine.filter_parallel(&filter_lists)
    } else {
        engine.filter_sequential(&filter_lists)
    };
    let flights = result.with_context(|| format!("filtering by {}", describe(lists)))?;

    info!("{} matched {} flights", describe(lists), flights.len());
    println!("{} filter:", describe(lists));
    print_flights(&flights, options.json)
}

fn print_flights(flights: &[Flight], json: bool) -> Result<()> {
    if json {
        let text = serde_json::to_string_pretty(flights).context("serializing flights")?;
        println!("{text}");
    } else {
        for flight in flights {
            println!("{flight}");
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let options = parse_args(std::env::args().skip(1))?;
    let engine = FilterEngine::with_config(create_flights(), &FilterConfig::from_env())
        .context("building flight filter engine")?;

    if !options.lists.is_empty() {
        return run_query(&engine, &options, &options.lists);
    }

    println!("No filter flights:");
    print_flights(engine.data(), options.json)?;

    let demo = [
        vec![vec![FlightFilter::DepartureBeforeNow]],
        vec![vec![FlightFilter::ArrivalBeforeDeparture]],
        vec![vec![FlightFilter::GroundTimeMoreThanTwoHours]],
        vec![
            vec![FlightFilter::DepartureBeforeNow],
            vec![FlightFilter::ArrivalBeforeDeparture],
        ],
    ];
    for lists in &demo {
        run_query(&engine, &options, lists)?;
    }
    Ok(())
}
