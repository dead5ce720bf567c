use log::warn;

/// Environment variable that sizes the dedicated worker pool.
pub const THREADS_ENV: &str = "FLIGHT_FILTER_THREADS";

/// Engine tuning.
///
/// `num_threads: None` runs parallel filtering on rayon's global pool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterConfig {
    pub num_threads: Option<usize>,
}

impl FilterConfig {
    pub fn with_threads(num_threads: usize) -> Self {
        Self {
            num_threads: Some(num_threads),
        }
    }

    /// Read the config from the process environment.
    ///
    /// An unparsable or zero thread count is ignored with a warning.
    pub fn from_env() -> Self {
        let num_threads = std::env::var(THREADS_ENV)
            .ok()
            .and_then(|raw| parse_threads(&raw));
        Self { num_threads }
    }
}

fn parse_threads(raw: &str) -> Option<usize> {
    match raw.trim().parse::<usize>() {
        Ok(0) | Err(_) => {
            warn!("ignoring {THREADS_ENV}={raw:?}: expected a positive integer");
            None
        }
        Ok(n) => Some(n),
    }
}
