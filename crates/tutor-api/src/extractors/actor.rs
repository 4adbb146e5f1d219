//! `Actor` extractor: the request context for audit stamping.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use tutor_service::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Header naming the acting user. There is no authentication; the value is
/// recorded as-is in the audit columns.
pub const ACTOR_HEADER: &str = "x-actor";

/// The request context of the caller, falling back to the configured
/// default actor when the header is absent or blank.
#[derive(Debug, Clone)]
pub struct Actor(pub RequestContext);

impl std::ops::Deref for Actor {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for Actor {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let actor = parts
            .headers
            .get(ACTOR_HEADER)
            .and_then(|v| v.to_str().ok());
        Ok(Self(RequestContext::for_actor(
            actor,
            &state.config.audit.default_actor,
        )))
    }
}
