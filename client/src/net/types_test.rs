use super::*;

// =============================================================
// LoginRequest / LoginResponse
// =============================================================

#[test]
fn login_request_serializes_plain_fields() {
    let body = serde_json::to_value(LoginRequest {
        identifier: "V100".to_owned(),
        password: "hunter2".to_owned(),
    })
    .unwrap();
    assert_eq!(body, serde_json::json!({ "identifier": "V100", "password": "hunter2" }));
}

#[test]
fn login_response_uses_requested_role_when_absent() {
    let resp: LoginResponse = serde_json::from_str(
        r#"{"accessToken":"a1","refreshToken":"r1","subjectId":"V100"}"#,
    )
    .unwrap();
    let session = resp.into_session(Role::Vendor).unwrap();
    assert_eq!(session.role(), Role::Vendor);
    assert_eq!(session.subject_id(), "V100");
}

#[test]
fn login_response_role_overrides_requested_role() {
    let resp: LoginResponse = serde_json::from_str(
        r#"{"accessToken":"a1","refreshToken":"r1","subjectId":"S7","role":"staffadmin"}"#,
    )
    .unwrap();
    assert_eq!(resp.into_session(Role::Admin).unwrap().role(), Role::StaffAdmin);
}

#[test]
fn login_response_with_blank_token_is_rejected() {
    let resp: LoginResponse = serde_json::from_str(
        r#"{"accessToken":"","refreshToken":"r1","subjectId":"V100"}"#,
    )
    .unwrap();
    assert_eq!(
        resp.into_session(Role::Vendor),
        Err(SessionError::EmptyField("accessToken"))
    );
}

#[test]
fn login_response_missing_refresh_token_fails_to_parse() {
    assert!(
        serde_json::from_str::<LoginResponse>(r#"{"accessToken":"a1","subjectId":"V100"}"#)
            .is_err()
    );
}

// =============================================================
// Profile
// =============================================================

#[test]
fn profile_tolerates_missing_fields() {
    let profile: Profile = serde_json::from_str("{}").unwrap();
    assert_eq!(profile, Profile::default());
}

#[test]
fn display_name_prefers_name_then_email_then_fallback() {
    let named = Profile { name: Some("Asha".into()), email: Some("a@x.in".into()), mobile: None };
    assert_eq!(named.display_name("V100"), "Asha");

    let emailed = Profile { name: None, email: Some("a@x.in".into()), mobile: None };
    assert_eq!(emailed.display_name("V100"), "a@x.in");

    assert_eq!(Profile::default().display_name("V100"), "V100");
}

#[test]
fn blank_name_falls_through_to_email() {
    let profile = Profile { name: Some("  ".into()), email: Some("a@x.in".into()), mobile: None };
    assert_eq!(profile.display_name("V100"), "a@x.in");

    let both_blank = Profile { name: Some(String::new()), email: Some(" ".into()), mobile: None };
    assert_eq!(both_blank.display_name("V100"), "V100");
}
