//! Page slicing and the page-number strip under the roster table.

/// One slot of the page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

/// Number of pages needed for `len` rows; never less than one.
pub fn total_pages(len: usize, per_page: usize) -> usize {
    len.div_ceil(per_page.max(1)).max(1)
}

/// Rows on 1-based `page`. Pages past the end are empty.
pub fn page_slice<T>(rows: &[T], page: usize, per_page: usize) -> &[T] {
    let per_page = per_page.max(1);
    let start = page.saturating_sub(1).saturating_mul(per_page).min(rows.len());
    let end = page.saturating_mul(per_page).min(rows.len());
    &rows[start..end]
}

/// Page numbers to render: the first and last page, every page within one
/// of `current`, and a single ellipsis for each gap in between.
pub fn page_items(current: usize, total: usize) -> Vec<PageItem> {
    let mut items = Vec::new();
    for page in 1..=total {
        if page == 1 || page == total || page.abs_diff(current) <= 1 {
            items.push(PageItem::Page(page));
        } else if items.last() != Some(&PageItem::Ellipsis) {
            items.push(PageItem::Ellipsis);
        }
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::{Ellipsis, Page};

    #[test]
    fn twenty_five_rows_in_pages_of_ten() {
        let rows: Vec<usize> = (0..25).collect();

        assert_eq!(total_pages(rows.len(), 10), 3);
        assert_eq!(page_slice(&rows, 1, 10).len(), 10);
        assert_eq!(page_slice(&rows, 3, 10), &[20, 21, 22, 23, 24]);
    }

    #[test]
    fn empty_sequence_still_has_one_page() {
        let rows: Vec<usize> = Vec::new();

        assert_eq!(total_pages(0, 20), 1);
        assert!(page_slice(&rows, 1, 20).is_empty());
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let rows: Vec<usize> = (0..5).collect();

        assert!(page_slice(&rows, 4, 5).is_empty());
    }

    #[test]
    fn pages_partition_the_sequence() {
        for len in [0usize, 1, 9, 10, 11, 57, 100] {
            for per_page in [1usize, 3, 10, 20, 50, 100] {
                let rows: Vec<usize> = (0..len).collect();
                let pages = total_pages(len, per_page);
                let joined: Vec<usize> = (1..=pages)
                    .flat_map(|page| page_slice(&rows, page, per_page).iter().copied())
                    .collect();

                assert_eq!(joined, rows, "len={len} per_page={per_page}");
            }
        }
    }

    #[test]
    fn small_page_counts_have_no_ellipsis() {
        assert_eq!(page_items(1, 1), vec![Page(1)]);
        assert_eq!(page_items(2, 3), vec![Page(1), Page(2), Page(3)]);
    }

    #[test]
    fn gaps_collapse_to_one_ellipsis_per_side() {
        assert_eq!(
            page_items(5, 10),
            vec![
                Page(1),
                Ellipsis,
                Page(4),
                Page(5),
                Page(6),
                Ellipsis,
                Page(10)
            ]
        );
        assert_eq!(
            page_items(1, 10),
            vec![Page(1), Page(2), Ellipsis, Page(10)]
        );
        assert_eq!(
            page_items(10, 10),
            vec![Page(1), Ellipsis, Page(9), Page(10)]
        );
    }
}
