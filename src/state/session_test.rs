use super::*;
use crate::test_support::{ScriptedIdentity, identity, me};
use crate::util::environment::StaticEnvironment;
use crate::util::token_store::MemoryTokenStore;

// =============================================================
// Session values
// =============================================================

#[test]
fn default_session_is_signed_out_and_idle() {
    let session = Session::default();
    assert!(!session.is_authenticated());
    assert!(!session.loading);
    assert_eq!(session.display_name(), None);
}

#[test]
fn pending_session_is_loading() {
    assert!(Session::pending().loading);
}

#[test]
fn from_me_requires_authenticated_user() {
    assert_eq!(Session::from_me(me(false, &["view_devops"], true)), Session::default());

    let no_user = MeResponse { authenticated: true, ..MeResponse::default() };
    assert!(!Session::from_me(no_user).is_authenticated());
}

#[test]
fn limited_user_is_still_signed_in() {
    let session = Session::from_me(me(true, &[], false));
    assert!(session.is_authenticated());
    assert!(!session.has_permission("view_devops"));
    assert!(!session.is_admin(AppKind::Site));
}

#[test]
fn super_admin_has_every_permission() {
    let session = Session::from_me(me(true, &[], true));
    assert!(session.has_permission("anything"));
    assert!(session.is_admin(AppKind::Site));
    assert!(session.is_admin(AppKind::Events));
}

#[test]
fn admin_flag_is_per_app() {
    let session = Session::from_me(me(true, &["manage_events"], false));
    assert!(session.is_admin(AppKind::Events));
    assert!(!session.is_admin(AppKind::Site));
}

#[test]
fn display_name_prefers_global_name() {
    let mut user = identity("1", "zezima");
    let mut session = Session { user: Some(user.clone()), ..Session::default() };
    assert_eq!(session.display_name(), Some("zezima"));

    user.display_name = Some("Zezima".to_owned());
    session.user = Some(user);
    assert_eq!(session.display_name(), Some("Zezima"));
}

// =============================================================
// resolve_session
// =============================================================

#[tokio::test]
async fn resolve_sends_acquired_token() {
    let env = StaticEnvironment::new("https://ironforged.gg/?auth_token=XYZ");
    let store = MemoryTokenStore::default();
    let service = ScriptedIdentity::replying(me(true, &["view_clan_admin"], false));

    let session = resolve_session(&env, &store, &service).await;
    assert!(session.is_authenticated());
    assert!(session.is_admin(AppKind::Site));
    assert_eq!(service.calls(), 1);
    assert_eq!(service.last_token().as_deref(), Some("XYZ"));
    assert_eq!(store.get().as_deref(), Some("XYZ"));
}

#[tokio::test]
async fn resolve_without_token_still_asks_service() {
    let env = StaticEnvironment::new("https://ironforged.gg/");
    let store = MemoryTokenStore::default();
    let service = ScriptedIdentity::replying(me(true, &[], false));

    let session = resolve_session(&env, &store, &service).await;
    assert!(session.is_authenticated());
    assert_eq!(service.calls(), 1);
    assert_eq!(service.last_token(), None);
}

#[tokio::test]
async fn limited_user_keeps_token() {
    let env = StaticEnvironment::new("https://ironforged.gg/");
    let store = MemoryTokenStore::with_token("abc");
    let service = ScriptedIdentity::replying(me(true, &[], false));

    resolve_session(&env, &store, &service).await;
    assert_eq!(store.get().as_deref(), Some("abc"));
}

#[tokio::test]
async fn unauthenticated_reply_clears_token() {
    let env = StaticEnvironment::new("https://ironforged.gg/");
    let store = MemoryTokenStore::with_token("expired");
    let service = ScriptedIdentity::replying(me(false, &[], false));

    let session = resolve_session(&env, &store, &service).await;
    assert!(!session.is_authenticated());
    assert_eq!(store.get(), None);
}

#[tokio::test]
async fn service_failure_signs_out_but_keeps_token() {
    let env = StaticEnvironment::new("https://ironforged.gg/");
    let store = MemoryTokenStore::with_token("abc");
    let service = ScriptedIdentity::failing(ApiError::Status(503));

    let session = resolve_session(&env, &store, &service).await;
    assert_eq!(session, Session::default());
    assert_eq!(store.get().as_deref(), Some("abc"));
}

// =============================================================
// route_access
// =============================================================

#[test]
fn route_access_waits_while_loading() {
    assert_eq!(route_access(&Session::pending(), AppKind::Site, false), RouteAccess::Loading);
    assert_eq!(route_access(&Session::pending(), AppKind::Site, true), RouteAccess::Loading);
}

#[test]
fn route_access_sends_signed_out_visitors_home() {
    assert_eq!(route_access(&Session::default(), AppKind::Site, false), RouteAccess::Redirect("/"));
}

#[test]
fn route_access_allows_any_signed_in_user_without_admin_requirement() {
    let session = Session::from_me(me(true, &[], false));
    assert_eq!(route_access(&session, AppKind::Site, false), RouteAccess::Allow);
}

#[test]
fn route_access_sends_non_admins_to_profile() {
    let session = Session::from_me(me(true, &["manage_events"], false));
    assert_eq!(route_access(&session, AppKind::Site, true), RouteAccess::Redirect("/profile"));
    assert_eq!(route_access(&session, AppKind::Events, true), RouteAccess::Allow);
}

#[test]
fn route_access_allows_super_admin_everywhere() {
    let session = Session::from_me(me(true, &[], true));
    assert_eq!(route_access(&session, AppKind::Site, true), RouteAccess::Allow);
}
