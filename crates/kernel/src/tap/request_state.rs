//! Per-request context handed to menu providers.
//!
//! A `RequestContext` is created at the start of a request and dropped with
//! the response. Nothing in it is shared across requests.

use serde::Serialize;
use uuid::Uuid;

/// Permission that grants every other permission.
pub const ADMINISTER_SITE: &str = "administer site";

/// The authenticated user for the current request.
#[derive(Debug, Clone, Serialize)]
pub struct UserContext {
    /// User ID.
    pub id: Uuid,
    /// Login or display name.
    pub name: String,
    /// Cached permissions for the user.
    pub permissions: Vec<String>,
}

impl UserContext {
    /// Create context for an authenticated user.
    pub fn new(id: Uuid, name: impl Into<String>, permissions: Vec<String>) -> Self {
        Self {
            id,
            name: name.into(),
            permissions,
        }
    }

    /// Check if user has a specific permission.
    pub fn has_permission(&self, permission: &str) -> bool {
        self.is_admin() || self.permissions.iter().any(|p| p == permission)
    }

    /// Check if user is admin.
    pub fn is_admin(&self) -> bool {
        self.permissions.iter().any(|p| p == ADMINISTER_SITE)
    }
}

/// Request-scoped inputs of menu assembly.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Normalized current URL.
    url: String,
    /// Authenticated user, if any.
    user: Option<UserContext>,
}

impl RequestContext {
    /// Create a request context, normalizing the raw request URL.
    pub fn new(raw_url: &str, user: Option<UserContext>) -> Self {
        Self {
            url: normalize_url(raw_url),
            user,
        }
    }

    /// The current URL without query string, fragment or trailing slash.
    pub fn current_url(&self) -> &str {
        &self.url
    }

    /// The authenticated user, `None` for anonymous requests.
    pub fn current_user(&self) -> Option<&UserContext> {
        self.user.as_ref()
    }
}

/// Strip query string, fragment and trailing slashes from a request URL.
///
/// A URL consisting only of slashes normalizes to `/`.
fn normalize_url(raw: &str) -> String {
    let base = raw.split(['?', '#']).next().unwrap_or_default();
    let trimmed = base.trim_end_matches('/');
    if trimmed.is_empty() && !base.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_query_and_trailing_slash() {
        assert_eq!(normalize_url("/admin/users/?page=2"), "/admin/users");
        assert_eq!(normalize_url("/admin/users#top"), "/admin/users");
        assert_eq!(
            normalize_url("http://example.com/admin/"),
            "http://example.com/admin"
        );
    }

    #[test]
    fn normalize_keeps_root() {
        assert_eq!(normalize_url("/"), "/");
        assert_eq!(normalize_url("/?q=1"), "/");
        assert_eq!(normalize_url(""), "");
    }

    #[test]
    fn admin_has_every_permission() {
        let admin = UserContext::new(Uuid::nil(), "admin", vec![ADMINISTER_SITE.to_string()]);
        assert!(admin.is_admin());
        assert!(admin.has_permission("manage chat"));

        let editor = UserContext::new(Uuid::nil(), "editor", vec!["manage chat".to_string()]);
        assert!(!editor.is_admin());
        assert!(editor.has_permission("manage chat"));
        assert!(!editor.has_permission("administer users"));
    }

    #[test]
    fn request_context_exposes_user() {
        let anon = RequestContext::new("/admin", None);
        assert!(anon.current_user().is_none());
        assert_eq!(anon.current_url(), "/admin");
    }
}
