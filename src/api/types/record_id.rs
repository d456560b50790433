//! Path segment holding a record id

use axum::extract::{rejection::PathRejection, FromRequestParts, Path};
use axum::http::request::Parts;

/// Record id taken from the `{id}` path segment
///
/// A segment that is not an integer cannot name any stored row, so it is
/// carried as `None` and the handler answers 404 like any other miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordId(pub Option<i64>);

impl RecordId {
    pub fn parse(raw: &str) -> Self {
        Self(raw.trim().parse().ok())
    }
}

impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = PathRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state).await?;
        Ok(Self::parse(&raw))
    }
}
