//! Response headers for mutations and paginated listings.
//!
//! Mutations carry a client alert pair, `X-<app>-alert: <app>.<entity>.<action>`
//! and `X-<app>-params: <id>`, which the front end turns into notifications.
//! Creations also carry `Location`. Paginated listings carry `X-Total-Count`
//! and an RFC 5988 `Link` header.

use axum::http::header::{LINK, LOCATION};
use axum::http::{HeaderMap, HeaderName, HeaderValue};
use campus_core::pagination::Page;
use campus_core::types::DbId;

const X_TOTAL_COUNT: &str = "x-total-count";

fn insert<N, V>(headers: &mut HeaderMap, name: N, value: V)
where
    N: TryInto<HeaderName>,
    V: TryInto<HeaderValue>,
{
    match (
        TryInto::<HeaderName>::try_into(name),
        TryInto::<HeaderValue>::try_into(value),
    ) {
        (Ok(name), Ok(value)) => {
            headers.insert(name, value);
        }
        _ => tracing::warn!("Skipping response header with an invalid name or value"),
    }
}

fn entity_alert(app: &str, entity: &str, action: &str, id: DbId) -> HeaderMap {
    let mut headers = HeaderMap::new();
    insert(
        &mut headers,
        format!("x-{app}-alert"),
        format!("{app}.{entity}.{action}"),
    );
    insert(&mut headers, format!("x-{app}-params"), id.to_string());
    headers
}

/// Alert headers plus `Location: <base_path>/<id>`.
pub fn entity_creation_alert(app: &str, entity: &str, base_path: &str, id: DbId) -> HeaderMap {
    let mut headers = entity_alert(app, entity, "created", id);
    insert(&mut headers, LOCATION, format!("{base_path}/{id}"));
    headers
}

pub fn entity_update_alert(app: &str, entity: &str, id: DbId) -> HeaderMap {
    entity_alert(app, entity, "updated", id)
}

pub fn entity_deletion_alert(app: &str, entity: &str, id: DbId) -> HeaderMap {
    entity_alert(app, entity, "deleted", id)
}

/// `X-Total-Count` and `Link` (next, prev, last, first) for a page.
///
/// `extra_query` is appended to every link, e.g. `eagerload=true`.
pub fn pagination_headers<T>(base_path: &str, extra_query: Option<&str>, page: &Page<T>) -> HeaderMap {
    let mut headers = HeaderMap::new();
    insert(&mut headers, X_TOTAL_COUNT, page.total_elements.to_string());

    let size = page.request.size;
    let current = page.request.page;
    let last = (page.total_pages() - 1).max(0);
    let link = |p: i64, rel: &str| {
        let extra = extra_query.map(|q| format!("&{q}")).unwrap_or_default();
        format!("<{base_path}?page={p}&size={size}{extra}>; rel=\"{rel}\"")
    };

    let mut links = Vec::with_capacity(4);
    if current < last {
        links.push(link(current + 1, "next"));
    }
    if current > 0 {
        links.push(link(current - 1, "prev"));
    }
    links.push(link(last, "last"));
    links.push(link(0, "first"));

    insert(&mut headers, LINK, links.join(","));
    headers
}
