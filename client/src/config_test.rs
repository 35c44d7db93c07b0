use super::*;

#[test]
fn default_base_is_same_origin_api() {
    assert_eq!(ClientConfig::default().api_base_url(), "/api");
}

#[test]
fn trailing_slashes_are_trimmed() {
    assert_eq!(
        ClientConfig::new("https://api.example.test/v1/").api_base_url(),
        "https://api.example.test/v1"
    );
}

#[test]
fn blank_base_falls_back_to_default() {
    assert_eq!(ClientConfig::new("   ").api_base_url(), DEFAULT_API_BASE_URL);
}

#[test]
fn endpoints_follow_role_layout() {
    let config = ClientConfig::new("https://api.example.test");
    assert_eq!(config.refresh_url(), "https://api.example.test/auth/refresh");
    assert_eq!(config.login_url(Role::StaffAdmin), "https://api.example.test/staffadmin/login");
    assert_eq!(
        config.profile_url(Role::Vendor, "V100"),
        "https://api.example.test/vendor/V100"
    );
}
