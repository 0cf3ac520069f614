//! User list queries: search, filter, sort and paginate.
//!
//! Composes the repository's predicates with a stable sort and in-memory
//! slicing. Both the HTML table and the JSON API read through here.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use lendsqr_core::{ParseEnumError, UserRecord, UserStatus};

use crate::db::{SearchTerm, UserFilter, UserRepository};

/// Page sizes offered by the table footer.
pub const PAGE_SIZES: [usize; 4] = [10, 20, 50, 100];

/// Page size used when none (or an unsupported one) is requested.
pub const DEFAULT_PER_PAGE: usize = 10;

/// Errors from parsing list query parameters.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error(transparent)]
    Status(#[from] ParseEnumError),

    #[error("unknown sort column: {0:?}")]
    SortKey(String),

    #[error("unknown sort direction: {0:?}")]
    Direction(String),
}

/// Query parameters for the user list.
///
/// Every field is optional; empty strings count as absent so the filter
/// form can submit blank selects.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UserQuery {
    /// Free-text search.
    pub q: Option<String>,
    /// Exact status.
    pub status: Option<String>,
    /// Exact organization.
    pub organization: Option<String>,
    /// Sort column.
    pub sort: Option<String>,
    /// Sort direction (`asc` or `desc`).
    pub dir: Option<String>,
    /// 1-indexed page number.
    pub page: Option<usize>,
    /// Rows per page.
    pub per_page: Option<usize>,
}

/// Columns the user table can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Organization,
    Username,
    Email,
    PhoneNumber,
    DateJoined,
    Status,
}

impl SortKey {
    pub const ALL: [Self; 6] = [
        Self::Organization,
        Self::Username,
        Self::Email,
        Self::PhoneNumber,
        Self::DateJoined,
        Self::Status,
    ];

    /// Query-string spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Organization => "organization",
            Self::Username => "username",
            Self::Email => "email",
            Self::PhoneNumber => "phone_number",
            Self::DateJoined => "date_joined",
            Self::Status => "status",
        }
    }

    /// Column header text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Organization => "Organization",
            Self::Username => "Username",
            Self::Email => "Email",
            Self::PhoneNumber => "Phone Number",
            Self::DateJoined => "Date Joined",
            Self::Status => "Status",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == s)
    }

    fn compare(self, a: &UserRecord, b: &UserRecord) -> Ordering {
        match self {
            Self::Organization => a.organization.cmp(&b.organization),
            Self::Username => a.username.cmp(&b.username),
            Self::Email => a.email.cmp(&b.email),
            Self::PhoneNumber => a.phone_number.cmp(&b.phone_number),
            Self::DateJoined => a.date_joined.cmp(&b.date_joined),
            Self::Status => a.status.as_str().cmp(b.status.as_str()),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// The opposite direction, for header toggle links.
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Parsed, validated list criteria.
#[derive(Debug, Clone, Default)]
pub struct ListCriteria {
    pub q: String,
    pub status: Option<UserStatus>,
    pub organization: Option<String>,
    pub sort: Option<(SortKey, SortDirection)>,
    pub page: usize,
    pub per_page: usize,
}

impl UserQuery {
    /// Validate the raw parameters.
    ///
    /// Out-of-range page numbers are not errors; they are clamped when the
    /// page is sliced.
    ///
    /// # Errors
    ///
    /// Returns `QueryError` for an unknown status, sort column or direction.
    pub fn criteria(&self) -> Result<ListCriteria, QueryError> {
        let status = non_empty(self.status.as_deref())
            .map(str::parse::<UserStatus>)
            .transpose()?;

        let direction = match non_empty(self.dir.as_deref()) {
            None | Some("asc") => SortDirection::Asc,
            Some("desc") => SortDirection::Desc,
            Some(other) => return Err(QueryError::Direction(other.to_string())),
        };

        let sort = non_empty(self.sort.as_deref())
            .map(|s| SortKey::parse(s).ok_or_else(|| QueryError::SortKey(s.to_string())))
            .transpose()?
            .map(|key| (key, direction));

        let per_page = self
            .per_page
            .filter(|n| PAGE_SIZES.contains(n))
            .unwrap_or(DEFAULT_PER_PAGE);

        Ok(ListCriteria {
            q: self.q.clone().unwrap_or_default(),
            status,
            organization: non_empty(self.organization.as_deref()).map(String::from),
            sort,
            page: self.page.unwrap_or(1).max(1),
            per_page,
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// One page of query results.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-indexed, clamped into `1..=total_pages`.
    pub page: usize,
    pub per_page: usize,
    /// Matches across all pages.
    pub total: usize,
    /// At least 1, even for an empty result.
    pub total_pages: usize,
}

impl<T> Page<T> {
    /// Slice `all` into the requested page, clamping the page number.
    #[must_use]
    pub fn slice(all: Vec<T>, page: usize, per_page: usize) -> Self {
        let per_page = per_page.max(1);
        let total = all.len();
        let total_pages = total.div_ceil(per_page).max(1);
        let page = page.clamp(1, total_pages);
        let items = all
            .into_iter()
            .skip((page - 1) * per_page)
            .take(per_page)
            .collect();

        Self {
            items,
            page,
            per_page,
            total,
            total_pages,
        }
    }

    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// 1-based position of the first row on this page (0 when empty).
    #[must_use]
    pub const fn first_row(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            (self.page - 1) * self.per_page + 1
        }
    }

    /// 1-based position of the last row on this page.
    #[must_use]
    pub const fn last_row(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            self.first_row() + self.items.len() - 1
        }
    }

    /// Convert the items, keeping the paging fields.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            per_page: self.per_page,
            total: self.total,
            total_pages: self.total_pages,
        }
    }
}

/// Run a list query against the repository.
#[must_use]
pub fn run<'a>(repo: &'a UserRepository, criteria: &ListCriteria) -> Page<&'a UserRecord> {
    let term = SearchTerm::new(&criteria.q);
    let filter = UserFilter {
        status: criteria.status,
        organization: criteria.organization.as_deref(),
    };

    let mut matched: Vec<&UserRecord> = repo
        .list()
        .iter()
        .filter(|u| term.as_ref().is_none_or(|t| t.matches(u)))
        .filter(|u| filter.matches(u))
        .collect();

    if let Some((key, direction)) = criteria.sort {
        // sort_by is stable, so ties keep collection order in both directions
        matched.sort_by(|a, b| match direction {
            SortDirection::Asc => key.compare(a, b),
            SortDirection::Desc => key.compare(b, a),
        });
    }

    Page::slice(matched, criteria.page, criteria.per_page)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::test_support::sample_user;

    fn repo() -> UserRepository {
        UserRepository::new(vec![
            sample_user(1, "Adaeze", "Okafor", UserStatus::Active, "Lendsqr"),
            sample_user(2, "Bola", "Tinubu", UserStatus::Pending, "Kuda"),
            sample_user(3, "Chidi", "Eze", UserStatus::Active, "Kuda"),
            sample_user(4, "Dayo", "Adeyemi", UserStatus::Blacklisted, "Opay"),
        ])
    }

    fn seqs(page: &Page<&UserRecord>) -> Vec<u32> {
        page.items.iter().map(|u| u.id.sequence()).collect()
    }

    fn query(pairs: &str) -> UserQuery {
        serde_json::from_str(pairs).unwrap()
    }

    #[test]
    fn test_default_query_is_first_page_of_list() {
        let repo = repo();
        let criteria = UserQuery::default().criteria().unwrap();
        let page = run(&repo, &criteria);
        assert_eq!(seqs(&page), vec![1, 2, 3, 4]);
        assert_eq!(page.page, 1);
        assert_eq!(page.per_page, DEFAULT_PER_PAGE);
        assert_eq!(page.total, 4);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_search_and_filter_combine() {
        let repo = repo();
        let criteria = query(r#"{"q":"e","status":"Active","organization":"Kuda"}"#)
            .criteria()
            .unwrap();
        assert_eq!(seqs(&run(&repo, &criteria)), vec![3]);
    }

    #[test]
    fn test_blank_fields_impose_no_constraint() {
        let repo = repo();
        let criteria = query(r#"{"q":"","status":"","organization":"","sort":"","dir":""}"#)
            .criteria()
            .unwrap();
        assert_eq!(run(&repo, &criteria).total, 4);
    }

    #[test]
    fn test_search_text_is_not_trimmed() {
        let repo = repo();
        let criteria = query(r#"{"q":" e"}"#).criteria().unwrap();
        assert_eq!(criteria.q, " e");
        let expected: Vec<u32> = repo.search(" e").iter().map(|u| u.id.sequence()).collect();
        assert_eq!(seqs(&run(&repo, &criteria)), expected);
        assert!(expected.is_empty());

        let blank = query(r#"{"q":"   "}"#).criteria().unwrap();
        assert_eq!(run(&repo, &blank).total, 0);
    }

    #[test]
    fn test_sort_by_organization_is_stable() {
        let repo = repo();
        let asc = query(r#"{"sort":"organization"}"#).criteria().unwrap();
        assert_eq!(seqs(&run(&repo, &asc)), vec![2, 3, 1, 4]);

        let desc = query(r#"{"sort":"organization","dir":"desc"}"#)
            .criteria()
            .unwrap();
        // Kuda rows keep collection order when reversed
        assert_eq!(seqs(&run(&repo, &desc)), vec![4, 1, 2, 3]);
    }

    #[test]
    fn test_sort_by_status_uses_label() {
        let repo = repo();
        let criteria = query(r#"{"sort":"status"}"#).criteria().unwrap();
        assert_eq!(seqs(&run(&repo, &criteria)), vec![1, 3, 4, 2]);
    }

    #[test]
    fn test_pagination_slices_and_clamps() {
        let users = (1..=25)
            .map(|i| sample_user(i, "Ngozi", "Obi", UserStatus::Inactive, "Irorun"))
            .collect();
        let repo = UserRepository::new(users);

        let criteria = query(r#"{"page":3,"per_page":10}"#).criteria().unwrap();
        let page = run(&repo, &criteria);
        assert_eq!(seqs(&page), vec![21, 22, 23, 24, 25]);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.first_row(), 21);
        assert_eq!(page.last_row(), 25);
        assert!(page.has_prev());
        assert!(!page.has_next());

        let beyond = query(r#"{"page":99}"#).criteria().unwrap();
        assert_eq!(run(&repo, &beyond).page, 3);

        let zero = query(r#"{"page":0}"#).criteria().unwrap();
        assert_eq!(run(&repo, &zero).page, 1);
    }

    #[test]
    fn test_unsupported_page_size_falls_back() {
        let criteria = query(r#"{"per_page":7}"#).criteria().unwrap();
        assert_eq!(criteria.per_page, DEFAULT_PER_PAGE);
        let criteria = query(r#"{"per_page":50}"#).criteria().unwrap();
        assert_eq!(criteria.per_page, 50);
    }

    #[test]
    fn test_empty_result_has_one_page() {
        let repo = repo();
        let criteria = query(r#"{"q":"nobody"}"#).criteria().unwrap();
        let page = run(&repo, &criteria);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.first_row(), 0);
        assert_eq!(page.last_row(), 0);
    }

    #[test]
    fn test_invalid_parameters_are_rejected() {
        assert!(matches!(
            query(r#"{"status":"Frozen"}"#).criteria(),
            Err(QueryError::Status(_))
        ));
        assert!(matches!(
            query(r#"{"sort":"bvn"}"#).criteria(),
            Err(QueryError::SortKey(_))
        ));
        assert!(matches!(
            query(r#"{"sort":"email","dir":"up"}"#).criteria(),
            Err(QueryError::Direction(_))
        ));
    }
}
