//! `CriteriaQuery` extractor: criteria filters plus paging from the query
//! string.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;

use tutor_core::error::AppError;
use tutor_core::types::PageRequest;
use tutor_service::Criteria;

use super::pagination::PaginationParams;
use crate::error::ApiError;

/// Parsed `?field.op=value&distinct=true&page=0&size=20&sort=f,dir`.
#[derive(Debug, Clone)]
pub struct CriteriaQuery<C> {
    /// The compiled criteria.
    pub criteria: C,
    /// Requested page; only list endpoints use it.
    pub page: PageRequest,
}

impl<S, C> FromRequestParts<S> for CriteriaQuery<C>
where
    S: Send + Sync,
    C: Criteria,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
            .map_err(|e| AppError::validation(format!("Malformed query string: {e}")))?;

        let mut paging = PaginationParams::default();
        let mut filters = Vec::with_capacity(pairs.len());
        for (key, raw) in &pairs {
            if PaginationParams::is_paging_key(key) {
                paging.accept(key, raw)?;
            } else {
                filters.push((key.as_str(), raw.as_str()));
            }
        }

        let criteria = C::from_pairs(filters)?;
        Ok(Self {
            criteria,
            page: paging.into_page_request(),
        })
    }
}
