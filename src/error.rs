use thiserror::Error;

/// Errors raised by the filter engine and the flight filter registry.
#[derive(Error, Debug)]
pub enum FilterError {
    #[error("data for filtering should not be empty")]
    EmptyDataset,

    #[error("filter list {index} should not be empty")]
    EmptyFilterList { index: usize },

    #[error("at least one filter list is required")]
    NoFilterLists,

    #[error("unknown filter: {0}")]
    UnknownFilter(String),

    #[error("failed to build filter worker pool")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, FilterError>;
