//! Shared hooks and fetch plumbing for the admin pages.

use yew::prelude::*;

/// Monotonic request counter. Each spawned fetch takes an id from `next` and
/// checks `is_current` after the await; a response whose id is no longer
/// current belongs to a superseded request and must be dropped.
#[derive(Debug, Default)]
pub struct RequestSeq(u64);

impl RequestSeq {
    /// Issues the id for a new request, invalidating all earlier ids.
    pub fn next(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    /// True while `id` is the latest issued request.
    pub fn is_current(&self, id: u64) -> bool {
        self.0 == id
    }
}

/// Paginate arbitrary vectors inside a component. Returns the visible slice,
/// the clamped current page, the total page count, and a page-change
/// callback.
#[hook]
pub fn use_pagination<T>(
    items: Vec<T>,
    items_per_page: usize,
) -> (Vec<T>, usize, usize, Callback<usize>)
where
    T: Clone + PartialEq + 'static,
{
    let per_page = items_per_page.max(1);
    let total_pages = calculate_total_pages(items.len(), per_page);
    let current_page = use_state(|| 1usize);

    {
        let current_page = current_page.clone();
        use_effect_with(total_pages, move |total| {
            let safe_page = clamp_page(*current_page, *total);
            if safe_page != *current_page {
                current_page.set(safe_page);
            }
            || ()
        });
    }

    let memoized_slice = {
        let current_snapshot = *current_page;
        use_memo((items, current_snapshot, per_page), move |(items, page, per_page)| {
            if items.is_empty() {
                return Vec::new();
            }
            let total_pages = calculate_total_pages(items.len(), *per_page);
            let safe_page = clamp_page(*page, total_pages);
            let start = (*per_page).saturating_mul(safe_page - 1);
            let end = usize::min(start + *per_page, items.len());
            items[start..end].to_vec()
        })
    };

    let visible_items = (*memoized_slice).clone();
    let visible_page = clamp_page(*current_page, total_pages);
    let go_to_page = {
        let current_page = current_page.clone();
        Callback::from(move |page: usize| {
            let next_page = clamp_page(page, total_pages);
            if next_page != *current_page {
                current_page.set(next_page);
            }
        })
    };

    (visible_items, visible_page, total_pages, go_to_page)
}

fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.max(1).min(total_pages)
}

fn calculate_total_pages(len: usize, per_page: usize) -> usize {
    if len == 0 {
        1
    } else {
        let numerator = len.saturating_add(per_page - 1);
        usize::max(numerator / per_page, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_issued_request_id_is_distinct_and_current() {
        let mut seq = RequestSeq::default();
        let first = seq.next();
        assert!(seq.is_current(first));
        let second = seq.next();
        assert_ne!(first, second);
        assert!(seq.is_current(second));
    }

    #[test]
    fn a_newer_request_invalidates_older_ids() {
        // A list fetch is in flight when the selection changes and a second
        // fetch starts; the first response must be identifiable as stale.
        let mut seq = RequestSeq::default();
        let stale = seq.next();
        let fresh = seq.next();
        assert!(!seq.is_current(stale));
        assert!(seq.is_current(fresh));
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(calculate_total_pages(0, 10), 1);
        assert_eq!(calculate_total_pages(10, 10), 1);
        assert_eq!(calculate_total_pages(11, 10), 2);
        assert_eq!(calculate_total_pages(25, 10), 3);
    }

    #[test]
    fn page_clamps_into_range() {
        assert_eq!(clamp_page(0, 5), 1);
        assert_eq!(clamp_page(3, 5), 3);
        assert_eq!(clamp_page(9, 5), 5);
    }
}
