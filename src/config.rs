//! Service endpoints and access policy selected at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The site talks to two remote services: the Discord-OAuth identity service
//! (`/auth/*`) and the clan data API (`/clan/*`). Both base URLs are baked in
//! at compile time because the WASM bundle has no process environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use url::form_urlencoded;

pub const DEV_AUTH_BASE: &str = "http://localhost:8787";
pub const DEV_API_BASE: &str = "http://localhost:8792";
pub const PROD_AUTH_BASE: &str = "https://auth.api.emuy.gg";
pub const PROD_API_BASE: &str = "https://api.emuy.gg";

/// Permission that unlocks staging deployments for non-super-admins.
pub const DEFAULT_ELEVATED_PERMISSION: &str = "view_devops";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildProfile {
    Development,
    Production,
}

impl BuildProfile {
    /// Profile of the binary being compiled.
    pub fn current() -> Self {
        if cfg!(debug_assertions) { Self::Development } else { Self::Production }
    }
}

/// Which of the clan's front ends is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppKind {
    /// Home page, leaderboard, profiles and the admin console.
    #[default]
    Site,
    /// The tile-events mini-app.
    Events,
}

impl AppKind {
    /// Value for the `source` parameter on the login redirect, if any.
    pub fn login_source(self) -> Option<&'static str> {
        match self {
            Self::Site => None,
            Self::Events => Some("ironforged-events"),
        }
    }

    /// Permissions that each switch on the admin feature flag for this app.
    pub fn admin_permissions(self) -> &'static [&'static str] {
        match self {
            Self::Site => &["view_clan_admin", "manage_clan"],
            Self::Events => &["view_events_admin", "manage_events"],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    pub auth_base: String,
    pub api_base: String,
    pub elevated_permission: String,
    pub app: AppKind,
}

impl AuthConfig {
    /// Build config from compile-time environment variables.
    ///
    /// Optional:
    /// - `IRONFORGED_AUTH_URL`: identity service base URL
    /// - `IRONFORGED_API_URL`: clan data API base URL
    /// - `IRONFORGED_ELEVATED_PERMISSION`: default `view_devops`
    ///
    /// Missing URLs fall back to localhost in debug builds and to the
    /// production hosts in release builds.
    pub fn from_build_env(app: AppKind) -> Self {
        Self::resolve(
            BuildProfile::current(),
            app,
            option_env!("IRONFORGED_AUTH_URL"),
            option_env!("IRONFORGED_API_URL"),
            option_env!("IRONFORGED_ELEVATED_PERMISSION"),
        )
    }

    pub fn resolve(
        profile: BuildProfile,
        app: AppKind,
        auth_url: Option<&str>,
        api_url: Option<&str>,
        elevated_permission: Option<&str>,
    ) -> Self {
        let (default_auth, default_api) = match profile {
            BuildProfile::Development => (DEV_AUTH_BASE, DEV_API_BASE),
            BuildProfile::Production => (PROD_AUTH_BASE, PROD_API_BASE),
        };
        Self {
            auth_base: base_url(auth_url, default_auth),
            api_base: base_url(api_url, default_api),
            elevated_permission: non_blank(elevated_permission)
                .unwrap_or(DEFAULT_ELEVATED_PERMISSION)
                .to_owned(),
            app,
        }
    }

    /// `GET {auth}/auth/me`
    pub fn me_url(&self) -> String {
        format!("{}/auth/me", self.auth_base)
    }

    /// Login redirect that brings the user back to `return_url` afterwards.
    pub fn login_url(&self, return_url: &str) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        query.append_pair("return_url", return_url);
        if let Some(source) = self.app.login_source() {
            query.append_pair("source", source);
        }
        format!("{}/auth/login?{}", self.auth_base, query.finish())
    }

    /// Logout redirect; the service clears its session then returns to `return_url`.
    pub fn logout_url(&self, return_url: &str) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("return_url", return_url)
            .finish();
        format!("{}/auth/logout?{query}", self.auth_base)
    }

    /// `GET {api}/clan/member/{discord_id}`
    pub fn member_url(&self, discord_id: &str) -> String {
        let segment: String = form_urlencoded::byte_serialize(discord_id.as_bytes()).collect();
        format!("{}/clan/member/{segment}", self.api_base)
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

fn base_url(raw: Option<&str>, default: &str) -> String {
    non_blank(raw).unwrap_or(default).trim_end_matches('/').to_owned()
}
