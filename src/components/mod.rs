//! UI components.
//!
//! ARCHITECTURE
//! ============
//! `auth_root` initializes the session once and publishes it through context;
//! `staging_gate` blocks protected content on staging hosts; the rest are
//! small presentational pieces that read that context.

pub mod auth_root;
pub mod nav_bar;
pub(crate) mod redirect;
pub mod require_session;
pub mod staging_banner;
pub mod staging_gate;
