//! Search, facet filtering, and pagination for admin tables.
//!
//! Every table in the console narrows its rows with a free-text query and a
//! handful of single-valued facets before slicing out the visible page.

/// A single-valued filter with an "all" wildcard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Facet<T> {
    /// Accept every value.
    #[default]
    All,
    /// Accept only values equal to the contained one.
    Only(T),
}

impl<T: PartialEq> Facet<T> {
    /// Whether `value` passes the filter.
    #[must_use]
    pub fn accepts(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == value,
        }
    }
}

impl Facet<String> {
    /// Parse a select-box value where `all` is the wildcard.
    #[must_use]
    pub fn from_selection(raw: &str) -> Self {
        if raw == "all" {
            Self::All
        } else {
            Self::Only(raw.to_owned())
        }
    }
}

/// Case-insensitive substring match of `query` against any of `fields`.
///
/// An empty query matches every row.
///
/// # Examples
///
/// ```
/// use pharmadesk::listing::matches_query;
///
/// assert!(matches_query(["Sok Dara", "dara@example.com"], "DARA"));
/// assert!(!matches_query(["Sok Dara"], "vitamin"));
/// ```
pub fn matches_query<'a>(fields: impl IntoIterator<Item = &'a str>, query: &str) -> bool {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// One page of a filtered listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// Rows on this page.
    pub items: &'a [T],
    /// 1-based page number that was requested.
    pub number: usize,
    /// Total number of pages; zero when there are no rows.
    pub total_pages: usize,
    /// Total number of rows across all pages.
    pub total_items: usize,
}

impl<T> Page<'_, T> {
    /// Whether a previous page exists.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.number > 1
    }

    /// Whether a following page exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.number < self.total_pages
    }
}

/// Slice out page `number` (1-based) of `items`.
///
/// Pages beyond the end, and page zero, are empty. A `per_page` of zero is
/// treated as one.
///
/// # Examples
///
/// ```
/// use pharmadesk::listing::paginate;
///
/// let rows = [1, 2, 3, 4, 5, 6, 7];
/// let page = paginate(&rows, 2, 5);
/// assert_eq!(page.items, &[6, 7]);
/// assert_eq!(page.total_pages, 2);
/// ```
#[must_use]
pub fn paginate<T>(items: &[T], number: usize, per_page: usize) -> Page<'_, T> {
    let page_size = per_page.max(1);
    let total_pages = items.len().div_ceil(page_size);
    let start = number.saturating_sub(1).saturating_mul(page_size);
    let visible: &[T] = if number == 0 {
        &[]
    } else {
        items
            .get(start..)
            .map_or(&[][..], |rest| rest.get(..page_size).unwrap_or(rest))
    };
    Page {
        items: visible,
        number,
        total_pages,
        total_items: items.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Role {
        Admin,
        Cashier,
    }

    struct User {
        name: &'static str,
        email: &'static str,
        role: Role,
    }

    fn users() -> Vec<User> {
        vec![
            User { name: "Sok Dara", email: "dara@pharmacy.com", role: Role::Admin },
            User { name: "Chan Sophea", email: "sophea@pharmacy.com", role: Role::Cashier },
            User { name: "Lim Vanna", email: "vanna@pharmacy.com", role: Role::Cashier },
        ]
    }

    fn filter(query: &str, role: &Facet<Role>) -> Vec<&'static str> {
        users()
            .into_iter()
            .filter(|user| matches_query([user.name, user.email], query) && role.accepts(&user.role))
            .map(|user| user.name)
            .collect()
    }

    #[rstest]
    #[case("", Facet::All, vec!["Sok Dara", "Chan Sophea", "Lim Vanna"])]
    #[case("SOPHEA", Facet::All, vec!["Chan Sophea"])]
    #[case("pharmacy.com", Facet::Only(Role::Cashier), vec!["Chan Sophea", "Lim Vanna"])]
    #[case("dara", Facet::Only(Role::Cashier), vec![])]
    fn combines_query_and_facet(
        #[case] query: &str,
        #[case] role: Facet<Role>,
        #[case] expected: Vec<&'static str>,
    ) {
        assert_eq!(filter(query, &role), expected);
    }

    #[rstest]
    fn selection_all_is_wildcard() {
        assert_eq!(Facet::from_selection("all"), Facet::All);
        assert_eq!(
            Facet::from_selection("active"),
            Facet::Only("active".to_owned())
        );
    }

    #[rstest]
    #[case(1, &[1, 2, 3, 4, 5][..])]
    #[case(2, &[6, 7, 8, 9, 10][..])]
    #[case(3, &[11][..])]
    #[case(4, &[][..])]
    #[case(0, &[][..])]
    fn slices_pages(#[case] number: usize, #[case] expected: &[u32]) {
        let rows: Vec<u32> = (1..=11).collect();
        let page = paginate(&rows, number, 5);
        assert_eq!(page.items, expected);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_items, 11);
    }

    #[rstest]
    fn empty_listing_has_no_pages() {
        let rows: [u8; 0] = [];
        let page = paginate(&rows, 1, 5);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_next());
        assert!(!page.has_previous());
    }

    #[rstest]
    fn zero_page_size_is_treated_as_one() {
        let rows = ["a", "b"];
        let page = paginate(&rows, 2, 0);
        assert_eq!(page.items, &["b"]);
        assert_eq!(page.total_pages, 2);
        assert!(page.has_previous());
        assert!(!page.has_next());
    }
}
