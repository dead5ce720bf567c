use log::{debug, trace};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use super::config::FilterConfig;
use super::predicate::{combine, FilterList, Predicate};
use crate::error::{FilterError, Result};

// ---------------------------------------------------------------------------
// FilterEngine – owns one dataset, filters it on demand
// ---------------------------------------------------------------------------

/// Applies combined filter lists to an owned, non-empty dataset.
///
/// The dataset is never modified. Each call builds a fresh predicate and returns
/// a new `Vec` holding clones of the matching records in source order, so one
/// engine can serve any number of concurrent calls.
#[derive(Debug)]
pub struct FilterEngine<T> {
    data: Vec<T>,
    /// Dedicated worker pool; `None` means rayon's global pool.
    pool: Option<ThreadPool>,
}

impl<T> FilterEngine<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Take ownership of `data`, which must contain at least one record.
    pub fn new(data: Vec<T>) -> Result<Self> {
        Self::with_config(data, &FilterConfig::default())
    }

    /// Like [`FilterEngine::new`], building a dedicated pool when the config asks
    /// for a fixed thread count.
    pub fn with_config(data: Vec<T>, config: &FilterConfig) -> Result<Self> {
        if data.is_empty() {
            return Err(FilterError::EmptyDataset);
        }

        let pool = match config.num_threads {
            Some(n) => Some(ThreadPoolBuilder::new().num_threads(n).build()?),
            None => None,
        };
        debug!(
            "filter engine ready: {} records, {} worker threads",
            data.len(),
            config
                .num_threads
                .unwrap_or_else(rayon::current_num_threads)
        );

        Ok(Self { data, pool })
    }

    /// The owned dataset.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Number of records in the dataset (never zero).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Filter on the calling thread, in input order.
    pub fn filter_sequential(&self, filter_lists: &[FilterList<T>]) -> Result<Vec<T>> {
        let predicate = combine(filter_lists)?;
        let result: Vec<T> = self
            .data
            .iter()
            .filter(|item| predicate(*item))
            .cloned()
            .collect();

        trace!(
            "sequential filter over {} lists kept {}/{} records",
            filter_lists.len(),
            result.len(),
            self.data.len()
        );
        Ok(result)
    }

    /// Filter across the worker pool.
    ///
    /// Workers write one verdict per record into a mask addressed by the record's
    /// position, and the mask is read back in index order, so the result matches
    /// [`FilterEngine::filter_sequential`] element for element.
    pub fn filter_parallel(&self, filter_lists: &[FilterList<T>]) -> Result<Vec<T>> {
        let predicate = combine(filter_lists)?;
        let mask = match &self.pool {
            Some(pool) => pool.install(|| self.evaluate_mask(&predicate)),
            None => self.evaluate_mask(&predicate),
        };

        let result: Vec<T> = self
            .data
            .iter()
            .zip(&mask)
            .filter(|(_, keep)| **keep)
            .map(|(item, _)| item.clone())
            .collect();

        trace!(
            "parallel filter over {} lists kept {}/{} records",
            filter_lists.len(),
            result.len(),
            self.data.len()
        );
        Ok(result)
    }

    fn evaluate_mask(&self, predicate: &Predicate<T>) -> Vec<bool> {
        let mut mask = Vec::with_capacity(self.data.len());
        self.data
            .par_iter()
            .map(|item| predicate(item))
            .collect_into_vec(&mut mask);
        mask
    }
}
