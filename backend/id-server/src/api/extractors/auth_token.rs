//! Axum extractor for routes behind the token gate

use crate::api::gate;
use crate::{Admitted, ApiError, AppState};

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

/// Extracts the authenticated identity from the request.
///
/// Runs the token gate; a handler taking `AuthToken` only ever sees
/// admitted requests. Rejections become the gate's 401 responses and
/// internal failures its 500.
pub struct AuthToken(pub Admitted);

impl FromRequestParts<AppState> for AuthToken {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let admitted = gate::authenticate(state, &parts.headers).await?;
            log::debug!("Token gate admitted user {}", admitted.user_id);
            Ok(AuthToken(admitted))
        }
    }
}
