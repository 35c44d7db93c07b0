use session::Role;

use super::*;

fn session_as(role: Role) -> Session {
    Session::new("a1", "r1", role, "S1").unwrap()
}

fn vendor_or_staff() -> RouteGuard {
    RouteGuard::new(AllowedRoles::new([Role::Vendor, Role::StaffAdmin]).unwrap())
}

#[test]
fn pending_until_ready_regardless_of_session() {
    let guard = vendor_or_staff();
    assert_eq!(guard_view(false, None, &guard), GuardView::Pending);
    assert_eq!(guard_view(false, Some(&session_as(Role::Vendor)), &guard), GuardView::Pending);
}

#[test]
fn ready_without_session_redirects_to_login() {
    assert_eq!(
        guard_view(true, None, &vendor_or_staff()),
        GuardView::Decided(GuardDecision::RedirectTo("/login".to_owned()))
    );
}

#[test]
fn ready_with_allowed_role_renders() {
    assert_eq!(
        guard_view(true, Some(&session_as(Role::StaffAdmin)), &vendor_or_staff()),
        GuardView::Decided(GuardDecision::Render)
    );
}

#[test]
fn ready_with_other_role_goes_to_its_landing_page() {
    assert_eq!(
        guard_view(true, Some(&session_as(Role::Customer)), &vendor_or_staff()),
        GuardView::Decided(GuardDecision::RedirectTo("/customer".to_owned()))
    );
}
