//! Pagination middleware.

use axum::{
    extract::{Query, Request},
    middleware::Next,
    response::Response,
};

use crate::types::PaginationQuery;

/// Resolve `page`/`size` once per request and inject the resulting
/// [`Pagination`](crate::types::Pagination) into the request extensions.
///
/// Malformed query strings are treated as empty; this never rejects.
pub async fn pagination_middleware(mut request: Request, next: Next) -> Response {
    let pairs = Query::<Vec<(String, String)>>::try_from_uri(request.uri())
        .map(|Query(pairs)| pairs)
        .unwrap_or_default();

    let pagination = PaginationQuery::from_pairs(&pairs).resolve();
    tracing::debug!(
        offset = pagination.offset,
        limit = ?pagination.limit,
        "Resolved pagination"
    );

    request.extensions_mut().insert(pagination);

    next.run(request).await
}
