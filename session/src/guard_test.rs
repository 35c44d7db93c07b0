use super::*;

fn session(role: Role) -> Session {
    Session::new("a1", "r1", role, "S-1").unwrap()
}

fn admin_only() -> RouteGuard {
    RouteGuard::new(Role::Admin)
}

// =============================================================
// AllowedRoles
// =============================================================

#[test]
fn allowed_roles_rejects_empty_set() {
    assert_eq!(AllowedRoles::new([]), Err(SessionError::NoAllowedRoles));
}

#[test]
fn allowed_roles_dedups() {
    let roles = AllowedRoles::new([Role::Vendor, Role::Vendor, Role::StaffAdmin]).unwrap();
    assert_eq!(roles.iter().count(), 2);
    assert!(roles.contains(Role::Vendor));
    assert!(roles.contains(Role::StaffAdmin));
    assert!(!roles.contains(Role::Customer));
}

// =============================================================
// Decisions
// =============================================================

#[test]
fn absent_session_redirects_to_login() {
    assert_eq!(admin_only().evaluate(None), GuardDecision::RedirectTo("/login".to_owned()));
}

#[test]
fn wrong_role_redirects_to_own_landing() {
    assert_eq!(
        admin_only().evaluate(Some(&session(Role::Customer))),
        GuardDecision::RedirectTo("/customer".to_owned())
    );
}

#[test]
fn matching_role_renders() {
    assert_eq!(admin_only().evaluate(Some(&session(Role::Admin))), GuardDecision::Render);
}

#[test]
fn wrong_role_never_renders_for_any_non_admin() {
    for role in Role::ALL.into_iter().filter(|r| *r != Role::Admin) {
        assert_ne!(admin_only().evaluate(Some(&session(role))), GuardDecision::Render);
    }
}

#[test]
fn custom_login_path_is_used() {
    let guard = admin_only().with_paths(GuardPaths::default().with_login("/app/login"));
    assert_eq!(guard.evaluate(None), GuardDecision::RedirectTo("/app/login".to_owned()));
}

#[test]
fn vendor_session_renders_then_redirects_after_logout() {
    use crate::manager::SessionManager;
    use crate::store::{MemoryStorage, TokenStore};

    let manager = SessionManager::new(TokenStore::new(MemoryStorage::new()));
    manager.login(Session::new("a1", "r1", Role::Vendor, "V100").unwrap());
    let guard = RouteGuard::new(AllowedRoles::new([Role::Vendor, Role::StaffAdmin]).unwrap());

    assert_eq!(guard.evaluate(manager.session().as_ref()), GuardDecision::Render);

    manager.logout();
    assert_eq!(
        guard.evaluate(manager.session().as_ref()),
        GuardDecision::RedirectTo(LOGIN_PATH.to_owned())
    );
}
