/// Caller identity resolution.
///
/// Authentication proper (sessions, tokens, passwords) belongs to the
/// external identity provider. Requests carry the opaque user id it
/// issued as a bearer credential; this module resolves that id against
/// the store and hands the resolved record to the handler, so the
/// current user is an explicit parameter rather than ambient state.
use axum::http::{header, HeaderMap, StatusCode};
use axum::Json;

use crate::api::ErrorResponse;
use crate::store::{TaskStore, User};

/// Extract the bearer credential from the Authorization header.
fn bearer_credential(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Resolve the authenticated caller, or reject with 401.
pub fn resolve_caller(
    store: &dyn TaskStore,
    headers: &HeaderMap,
) -> Result<User, (StatusCode, Json<ErrorResponse>)> {
    let user_id = bearer_credential(headers).ok_or_else(|| {
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse::unauthorized()),
        )
    })?;

    store.get_user(user_id).map_err(|e| {
        log::warn!("[taskboard.auth] Rejected unknown caller: {}", e);
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse::unauthorized()),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;

    fn headers_with_auth(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, value.parse().unwrap());
        headers
    }

    #[test]
    fn test_resolves_known_user() {
        let store = MemoryStore::new();
        let user = store.create_user("Alice", "alice@example.com", &[]).unwrap();
        let headers = headers_with_auth(&format!("Bearer {}", user.id));
        let caller = resolve_caller(&store, &headers).unwrap();
        assert_eq!(caller.id, user.id);
    }

    #[test]
    fn test_missing_header_is_unauthorized() {
        let store = MemoryStore::new();
        let result = resolve_caller(&store, &HeaderMap::new());
        assert_eq!(result.unwrap_err().0, StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_unknown_user_is_unauthorized() {
        let store = MemoryStore::new();
        let headers = headers_with_auth("Bearer nobody");
        let result = resolve_caller(&store, &headers);
        assert_eq!(result.unwrap_err().0, StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_malformed_scheme_is_unauthorized() {
        let store = MemoryStore::new();
        let user = store.create_user("Alice", "alice@example.com", &[]).unwrap();
        let headers = headers_with_auth(&user.id);
        let result = resolve_caller(&store, &headers);
        assert_eq!(result.unwrap_err().0, StatusCode::UNAUTHORIZED);
    }
}
