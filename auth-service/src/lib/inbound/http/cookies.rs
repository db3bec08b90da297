//! Refresh-token cookie construction.

use axum_extra::extract::cookie::Cookie;
use axum_extra::extract::cookie::SameSite;

use crate::config::CookieConfig;
use crate::config::SameSitePolicy;

/// Path the refresh cookie is scoped to; only the auth routes ever see it.
pub const REFRESH_COOKIE_PATH: &str = "/auth";

const REFRESH_COOKIE_MAX_AGE_DAYS: i64 = 7;

/// Builds the `Set-Cookie` values for the refresh token.
#[derive(Debug, Clone)]
pub struct RefreshCookie {
    config: CookieConfig,
}

impl RefreshCookie {
    pub fn new(config: CookieConfig) -> Self {
        Self { config }
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Cookie carrying a freshly issued refresh token.
    pub fn issue(&self, token: String) -> Cookie<'static> {
        Cookie::build((self.config.name.clone(), token))
            .http_only(true)
            .secure(self.config.secure)
            .same_site(same_site(self.config.same_site))
            .path(REFRESH_COOKIE_PATH)
            .max_age(time::Duration::days(REFRESH_COOKIE_MAX_AGE_DAYS))
            .build()
    }

    /// Expired cookie matching the issued one by name and path.
    ///
    /// Always sent, whether or not the request carried a refresh cookie.
    pub fn removal(&self) -> Cookie<'static> {
        let mut cookie = Cookie::build((self.config.name.clone(), ""))
            .http_only(true)
            .secure(self.config.secure)
            .same_site(same_site(self.config.same_site))
            .path(REFRESH_COOKIE_PATH)
            .build();
        cookie.make_removal();
        cookie
    }
}

fn same_site(policy: SameSitePolicy) -> SameSite {
    match policy {
        SameSitePolicy::Strict => SameSite::Strict,
        SameSitePolicy::Lax => SameSite::Lax,
        SameSitePolicy::None => SameSite::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_cookie_attributes() {
        let cookies = RefreshCookie::new(CookieConfig::default());

        let cookie = cookies.issue("token-value".to_string());

        assert_eq!(cookie.name(), "cm_refresh");
        assert_eq!(cookie.value(), "token-value");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(false));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.path(), Some("/auth"));
        assert_eq!(cookie.max_age(), Some(time::Duration::days(7)));
    }

    #[test]
    fn test_issue_cookie_follows_config() {
        let cookies = RefreshCookie::new(CookieConfig {
            name: "custom_refresh".to_string(),
            secure: true,
            same_site: SameSitePolicy::Strict,
        });

        let cookie = cookies.issue("t".to_string());

        assert_eq!(cookie.name(), "custom_refresh");
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
        // httpOnly is never configurable
        assert_eq!(cookie.http_only(), Some(true));
    }

    #[test]
    fn test_removal_cookie_matches_path() {
        let cookies = RefreshCookie::new(CookieConfig::default());

        let cookie = cookies.removal();

        assert_eq!(cookie.name(), "cm_refresh");
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.path(), Some("/auth"));
        assert_eq!(cookie.max_age(), Some(time::Duration::ZERO));
    }
}
