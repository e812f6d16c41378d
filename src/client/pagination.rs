//! Cursor pagination for GitHub GraphQL connections
//!
//! GitHub exposes collections as connections: a page of `edges[].node` plus a
//! `pageInfo` carrying an opaque `endCursor` and a `hasNextPage` flag. The
//! [`paginate`] driver walks a connection from the first page to the last,
//! handing each page's items to a consumer.

use std::future::Future;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, Result};

/// Maximum `first:` value GitHub accepts on a connection.
pub const MAX_PAGE_SIZE: usize = 100;

/// Page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: usize = MAX_PAGE_SIZE;

/// Arguments for a single page request: `first: $first, after: $cursor`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    /// Number of items to request (1..=100)
    pub first: usize,
    /// Cursor of the previous page; `None` on the first request
    pub after: Option<String>,
}

impl PageRequest {
    /// Request the first page with the given size, clamped to GitHub's limits.
    pub fn first_page(page_size: usize) -> Self {
        Self {
            first: page_size.clamp(1, MAX_PAGE_SIZE),
            after: None,
        }
    }

    /// Request the page following `cursor`, keeping the same size.
    pub fn next(&self, cursor: String) -> Self {
        Self {
            first: self.first,
            after: Some(cursor),
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first_page(DEFAULT_PAGE_SIZE)
    }
}

/// `pageInfo` block of a connection
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    #[serde(default)]
    pub end_cursor: Option<String>,
    #[serde(default)]
    pub has_next_page: bool,
}

/// Connection edge wrapping one node
#[derive(Debug, Clone, Deserialize)]
pub struct Edge<T> {
    pub node: Option<T>,
}

/// GraphQL connection as returned on the wire
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection<T> {
    #[serde(default = "Vec::new")]
    pub edges: Vec<Option<Edge<T>>>,
    #[serde(default)]
    pub page_info: PageInfo,
}

/// One page of results with its continuation state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Nodes in server order
    pub items: Vec<T>,
    /// Cursor to request the next page with
    pub end_cursor: Option<String>,
    /// Whether the server reports more pages
    pub has_next_page: bool,
}

impl<T> Page<T> {
    /// A terminal page with no items.
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            end_cursor: None,
            has_next_page: false,
        }
    }

    /// A terminal page.
    #[cfg(test)]
    pub fn last(items: Vec<T>) -> Self {
        Self {
            items,
            end_cursor: None,
            has_next_page: false,
        }
    }

    /// A page followed by more, continued from `cursor`.
    #[cfg(test)]
    pub fn with_next(items: Vec<T>, cursor: impl Into<String>) -> Self {
        Self {
            items,
            end_cursor: Some(cursor.into()),
            has_next_page: true,
        }
    }
}

impl<T> From<Connection<T>> for Page<T> {
    fn from(connection: Connection<T>) -> Self {
        Self {
            items: connection
                .edges
                .into_iter()
                .flatten()
                .filter_map(|edge| edge.node)
                .collect(),
            end_cursor: connection.page_info.end_cursor,
            has_next_page: connection.page_info.has_next_page,
        }
    }
}

/// Counters reported by [`paginate`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PaginationStats {
    /// Requests issued
    pub pages: usize,
    /// Items handed to the consumer
    pub items: usize,
}

/// Walk a connection from the first page to the last.
///
/// `fetch` is called once per page, starting with no cursor and continuing
/// with each page's `endCursor` while `hasNextPage` is true. Every item is
/// passed to `consume` exactly once, in page order. The first failed fetch
/// stops the walk and its error is returned.
///
/// A page claiming `hasNextPage` without a usable `endCursor` (missing, empty,
/// or the cursor it was requested with) is rejected as an
/// invalid response rather than re-requesting the first page forever.
///
/// # Example
///
/// ```ignore
/// let mut logins = Vec::new();
/// paginate(
///     100,
///     |page| async move { client.organization_saml_identities("octo", &page).await },
///     |items| logins.extend(items.into_iter().filter_map(|i| i.login())),
/// )
/// .await?;
/// ```
pub async fn paginate<T, F, Fut, C>(
    page_size: usize,
    mut fetch: F,
    mut consume: C,
) -> Result<PaginationStats>
where
    F: FnMut(PageRequest) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
    C: FnMut(Vec<T>),
{
    let mut request = PageRequest::first_page(page_size);
    let mut stats = PaginationStats::default();

    loop {
        let page = fetch(request.clone()).await?;
        stats.pages += 1;
        stats.items += page.items.len();

        debug!(
            "Page {} returned {} items (has_next_page: {})",
            stats.pages,
            page.items.len(),
            page.has_next_page
        );

        let Page {
            items,
            end_cursor,
            has_next_page,
        } = page;
        consume(items);

        if !has_next_page {
            break;
        }

        let cursor = match end_cursor.filter(|c| !c.is_empty()) {
            None => {
                return Err(ApiError::InvalidResponse(format!(
                    "page {} reports hasNextPage but no endCursor",
                    stats.pages
                ))
                .into());
            }
            Some(cursor) if request.after.as_deref() == Some(cursor.as_str()) => {
                return Err(ApiError::InvalidResponse(format!(
                    "page {} repeats endCursor '{}'",
                    stats.pages, cursor
                ))
                .into());
            }
            Some(cursor) => cursor,
        };
        request = request.next(cursor);
    }

    debug!(
        "Pagination finished: {} items over {} pages",
        stats.items, stats.pages
    );
    Ok(stats)
}
