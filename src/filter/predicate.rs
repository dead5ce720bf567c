use std::sync::Arc;

use crate::error::{FilterError, Result};

// ---------------------------------------------------------------------------
// Predicate values
// ---------------------------------------------------------------------------

/// A shareable boolean test over a record.
///
/// Predicates are evaluated from worker threads during parallel filtering, so
/// they must be `Send + Sync` and must not mutate shared state.
pub type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// An ordered list of predicates that are combined with logical AND.
pub type FilterList<T> = Vec<Predicate<T>>;

/// Wrap a closure as a [`Predicate`].
pub fn predicate<T, F>(f: F) -> Predicate<T>
where
    F: Fn(&T) -> bool + Send + Sync + 'static,
{
    Arc::new(f)
}

/// A predicate that accepts every record.
pub fn always<T: 'static>() -> Predicate<T> {
    Arc::new(|_: &T| true)
}

/// Logical NOT of `inner`.
pub fn negate<T: 'static>(inner: Predicate<T>) -> Predicate<T> {
    Arc::new(move |item: &T| !inner(item))
}

// ---------------------------------------------------------------------------
// Combination
// ---------------------------------------------------------------------------

/// Reduce several filter lists into one predicate.
///
/// Each list is combined with AND in list order, then the per-list results are
/// combined with OR in the order the lists were supplied. Both levels stop at
/// the first predicate that decides the outcome.
///
/// Every list is checked for emptiness before anything is combined, so a call
/// with one bad list fails even when the other lists are valid.
pub fn combine<T: 'static>(filter_lists: &[FilterList<T>]) -> Result<Predicate<T>> {
    if filter_lists.is_empty() {
        return Err(FilterError::NoFilterLists);
    }
    if let Some(index) = filter_lists.iter().position(|list| list.is_empty()) {
        return Err(FilterError::EmptyFilterList { index });
    }

    if let [single] = filter_lists {
        return Ok(all_of(single));
    }

    let branches: Vec<Predicate<T>> = filter_lists.iter().map(|list| all_of(list)).collect();
    Ok(Arc::new(move |item: &T| branches.iter().any(|p| p(item))))
}

/// AND-combination of a non-empty list.
fn all_of<T: 'static>(list: &[Predicate<T>]) -> Predicate<T> {
    if let [only] = list {
        return Arc::clone(only);
    }
    let conjuncts = list.to_vec();
    Arc::new(move |item: &T| conjuncts.iter().all(|p| p(item)))
}
