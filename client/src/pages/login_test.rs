use super::*;

#[test]
fn validate_login_input_trims_email_and_keeps_password() {
    assert_eq!(
        validate_login_input("  ops@example.com ", " pass word "),
        Ok(("ops@example.com".to_owned(), " pass word ".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_email_first() {
    assert_eq!(validate_login_input("   ", ""), Err("Email is required"));
}

#[test]
fn validate_login_input_requires_password() {
    assert_eq!(validate_login_input("ops@example.com", ""), Err("Password is required"));
}

#[test]
fn api_error_message_surfaces_server_rejection() {
    let err = ApiError::Rejected { status: 401, message: "Invalid credentials".to_owned() };
    assert_eq!(api_error_message(&err), "Invalid credentials");
}

#[test]
fn api_error_message_hides_transport_details() {
    assert_eq!(api_error_message(&ApiError::Network("dns".to_owned())), GENERIC_FAILURE);
    assert_eq!(api_error_message(&ApiError::Decode("eof".to_owned())), GENERIC_FAILURE);
}

#[test]
fn session_error_message_names_the_problem() {
    let message = session_error_message(&SessionError::UnknownRole("owner".to_owned()));
    assert_eq!(message, "Sign in failed. Please try again. (unsupported role: owner)");
}
