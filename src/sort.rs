//! Chronological ordering of articles.
//!
//! [`sort_by_date`] is pure: it never touches the articles it is given and
//! returns a freshly ordered vector.  The direction is an explicit argument;
//! remembering which way to sort next is the caller's job (see
//! [`SortOrder::toggled`]).
//!
//! ## Undated articles
//!
//! An article whose `publishedAt` does not parse sorts **after** every dated
//! article, in both directions, and undated articles keep their relative
//! order.  Sorting never fails.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::source::Article;

/// Which chronological direction to sort in.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum SortOrder {
    /// Earliest first.
    #[default]
    Ascending,
    /// Latest first.
    Descending,
}

impl SortOrder {
    /// The opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Short label for the status bar.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ascending => "old → new",
            Self::Descending => "new → old",
        }
    }
}

/// Return `articles` ordered by publish date.
///
/// The sort is stable: articles with identical timestamps keep their input
/// order.
pub fn sort_by_date(articles: &[Article], order: SortOrder) -> Vec<Article> {
    let mut keyed: Vec<(Option<DateTime<Utc>>, &Article)> = articles
        .iter()
        .map(|article| {
            let published = match article.published_at() {
                Ok(ts) => Some(ts),
                Err(e) => {
                    tracing::warn!(title = %article.title, error = %e, "Unparseable publish date, sorting last");
                    None
                }
            };
            (published, article)
        })
        .collect();

    // `Vec::sort_by` is stable.
    keyed.sort_by(|(a, _), (b, _)| compare(*a, *b, order));

    keyed.into_iter().map(|(_, article)| article.clone()).collect()
}

fn compare(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>, order: SortOrder) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => match order {
            SortOrder::Ascending => a.cmp(&b),
            SortOrder::Descending => b.cmp(&a),
        },
        // Undated sinks to the bottom regardless of direction.
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::source::make_article;

    fn order_for(ascending: bool) -> SortOrder {
        if ascending {
            SortOrder::Ascending
        } else {
            SortOrder::Descending
        }
    }

    fn titles(articles: &[Article]) -> Vec<&str> {
        articles.iter().map(|a| a.title.as_str()).collect()
    }

    #[test]
    fn ascending_puts_earliest_first() {
        let input = vec![
            make_article("newer", "2023-01-02T03:04:05Z"),
            make_article("older", "2023-01-01T00:00:00Z"),
        ];

        let sorted = sort_by_date(&input, SortOrder::Ascending);
        assert_eq!(titles(&sorted), ["older", "newer"]);
    }

    #[test]
    fn descending_puts_latest_first() {
        let input = vec![
            make_article("older", "2023-01-01T00:00:00Z"),
            make_article("newer", "2023-01-02T03:04:05Z"),
        ];

        let sorted = sort_by_date(&input, SortOrder::Descending);
        assert_eq!(titles(&sorted), ["newer", "older"]);
    }

    #[test]
    fn input_is_left_untouched() {
        let input = vec![
            make_article("b", "2023-01-02T00:00:00Z"),
            make_article("a", "2023-01-01T00:00:00Z"),
        ];
        let before = input.clone();

        let _ = sort_by_date(&input, SortOrder::Ascending);
        assert_eq!(input, before);
    }

    #[test]
    fn empty_list_sorts_to_empty_list() {
        assert!(sort_by_date(&[], SortOrder::Ascending).is_empty());
        assert!(sort_by_date(&[], SortOrder::Descending).is_empty());
    }

    #[test]
    fn equal_timestamps_keep_input_order() {
        let ts = "2023-06-01T12:00:00Z";
        let input = vec![
            make_article("first", ts),
            make_article("second", ts),
            make_article("third", ts),
        ];

        for order in [SortOrder::Ascending, SortOrder::Descending] {
            let sorted = sort_by_date(&input, order);
            assert_eq!(titles(&sorted), ["first", "second", "third"], "{order:?}");
        }
    }

    #[test]
    fn undated_articles_sort_last_in_both_directions() {
        let input = vec![
            make_article("bad-1", "not a date"),
            make_article("jan", "2023-01-01T00:00:00Z"),
            make_article("bad-2", "2023-01-01"),
            make_article("feb", "2023-02-01T00:00:00Z"),
        ];

        let asc = sort_by_date(&input, SortOrder::Ascending);
        assert_eq!(titles(&asc), ["jan", "feb", "bad-1", "bad-2"]);

        let desc = sort_by_date(&input, SortOrder::Descending);
        assert_eq!(titles(&desc), ["feb", "jan", "bad-1", "bad-2"]);
    }

    #[test]
    fn duplicates_are_kept() {
        let a = make_article("dup", "2023-01-01T00:00:00Z");
        let sorted = sort_by_date(&[a.clone(), a.clone()], SortOrder::Descending);
        assert_eq!(sorted, vec![a.clone(), a]);
    }

    #[test]
    fn toggled_flips_direction() {
        assert_eq!(SortOrder::Ascending.toggled(), SortOrder::Descending);
        assert_eq!(SortOrder::Descending.toggled(), SortOrder::Ascending);
    }

    // -- properties ----------------------------------------------------------

    /// Timestamps spread over a few years, formatted the way the feed does.
    fn timestamp() -> impl Strategy<Value = String> {
        (1_600_000_000i64..1_700_000_000).prop_map(|secs| {
            DateTime::from_timestamp(secs, 0)
                .unwrap()
                .format("%Y-%m-%dT%H:%M:%SZ")
                .to_string()
        })
    }

    fn articles() -> impl Strategy<Value = Vec<Article>> {
        prop::collection::vec(timestamp(), 0..40).prop_map(|stamps| {
            stamps
                .iter()
                .enumerate()
                .map(|(i, ts)| make_article(&format!("a{i}"), ts))
                .collect()
        })
    }

    fn is_permutation(a: &[Article], b: &[Article]) -> bool {
        let mut a: Vec<_> = titles(a);
        let mut b: Vec<_> = titles(b);
        a.sort_unstable();
        b.sort_unstable();
        a == b
    }

    proptest! {
        #[test]
        fn sort_is_monotonic_and_a_permutation(input in articles(), ascending in any::<bool>()) {
            let order = order_for(ascending);
            let sorted = sort_by_date(&input, order);

            prop_assert_eq!(sorted.len(), input.len());
            prop_assert!(is_permutation(&input, &sorted));

            for pair in sorted.windows(2) {
                let (a, b) = (pair[0].published_at().unwrap(), pair[1].published_at().unwrap());
                match order {
                    SortOrder::Ascending => prop_assert!(a <= b),
                    SortOrder::Descending => prop_assert!(a >= b),
                }
            }
        }

        #[test]
        fn sort_is_stable_for_equal_timestamps(input in articles(), ascending in any::<bool>()) {
            let sorted = sort_by_date(&input, order_for(ascending));
            let position = |title: &str| input.iter().position(|a| a.title == title).unwrap();

            for pair in sorted.windows(2) {
                if pair[0].published_at == pair[1].published_at {
                    prop_assert!(position(&pair[0].title) < position(&pair[1].title));
                }
            }
        }

        #[test]
        fn double_toggle_matches_direct_descending_sort(input in articles()) {
            let via_ascending = sort_by_date(&sort_by_date(&input, SortOrder::Ascending), SortOrder::Descending);
            let direct = sort_by_date(&input, SortOrder::Descending);

            // Titles may differ only among equal timestamps; compare the dates.
            let dates = |v: &[Article]| v.iter().map(|a| a.published_at.clone()).collect::<Vec<_>>();
            prop_assert_eq!(dates(&via_ascending), dates(&direct));
        }
    }
}
