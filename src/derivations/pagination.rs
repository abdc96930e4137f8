/// One page of a longer list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number actually served.
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Page<T> {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// 1-based positions of the first and last served item, for "showing X to Y of Z".
    pub fn shown_range(&self) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            return None;
        }
        let first = (self.page - 1) * self.per_page + 1;
        Some((first, first + self.items.len() - 1))
    }
}

/// Splits `items` into pages of `per_page` and returns page `page`, clamped into range.
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page);
    let page = page.clamp(1, total_pages.max(1));
    let start = (page - 1) * per_page;
    let items = items.iter().skip(start).take(per_page).cloned().collect();
    Page {
        items,
        page,
        per_page,
        total_pages,
        total_items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_into_full_and_partial_pages() {
        let items: Vec<u32> = (1..=23).collect();
        let first = paginate(&items, 1, 10);
        assert_eq!(first.items.len(), 10);
        assert_eq!(first.total_pages, 3);
        assert!(!first.has_previous());
        assert!(first.has_next());

        let last = paginate(&items, 3, 10);
        assert_eq!(last.items, vec![21, 22, 23]);
        assert_eq!(last.shown_range(), Some((21, 23)));
        assert!(!last.has_next());
    }

    #[test]
    fn out_of_range_pages_are_clamped() {
        let items: Vec<u32> = (1..=5).collect();
        assert_eq!(paginate(&items, 0, 2).page, 1);
        assert_eq!(paginate(&items, 99, 2).page, 3);
    }

    #[test]
    fn empty_input_has_no_pages() {
        let page = paginate::<u32>(&[], 4, 10);
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.page, 1);
        assert!(page.items.is_empty());
        assert_eq!(page.shown_range(), None);
    }
}
