use super::*;

#[test]
fn sign_in_failed_message_formats_status() {
    assert_eq!(sign_in_failed_message(502), "sign in failed: 502");
}

#[test]
fn rejection_uses_server_error_message() {
    let err = rejection(401, r#"{ "error": "Invalid email or password" }"#);
    assert_eq!(
        err,
        ApiError::Rejected { status: 401, message: "Invalid email or password".to_owned() }
    );
    assert_eq!(err.to_string(), "Invalid email or password");
}

#[test]
fn rejection_falls_back_on_unparseable_body() {
    let err = rejection(500, "<html>oops</html>");
    assert_eq!(err, ApiError::Rejected { status: 500, message: "sign in failed: 500".to_owned() });
}

#[test]
fn rejection_falls_back_on_empty_body() {
    let err = rejection(403, "");
    assert_eq!(err.to_string(), "sign in failed: 403");
}

#[test]
fn endpoints_resolve_against_config() {
    let api = HttpAuthApi::new(ApiConfig::new("https://api.example.com/api"));
    assert_eq!(api.config().endpoint(SIGN_IN_PATH), "https://api.example.com/api/admin/signin");
    assert_eq!(api.config().endpoint(SIGN_OUT_PATH), "https://api.example.com/api/admin/logout");
}

#[test]
fn timeout_error_reports_seconds() {
    assert_eq!(ApiError::Timeout(LOGOUT_TIMEOUT).to_string(), "request timed out after 5s");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_build_sign_in_is_unavailable() {
    let api = HttpAuthApi::default();
    let result = futures::executor::block_on(api.sign_in("a@b.com", "pw"));
    assert_eq!(result, Err(ApiError::Unavailable));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_build_invalidate_is_unavailable() {
    let api = HttpAuthApi::default();
    let result = futures::executor::block_on(api.invalidate(&Credential::new("tok")));
    assert_eq!(result, Err(ApiError::Unavailable));
}

#[test]
fn bounded_times_out_when_request_never_finishes() {
    let outcome = futures::executor::block_on(bounded(
        futures::future::pending::<Result<(), ApiError>>(),
        futures::future::ready(()),
    ));
    assert_eq!(outcome, Err(ApiError::Timeout(LOGOUT_TIMEOUT)));
    assert_eq!(outcome.unwrap_err().to_string(), "request timed out after 5s");
}

#[test]
fn bounded_passes_through_request_result_before_deadline() {
    let ok = futures::executor::block_on(bounded(futures::future::ready(Ok(())), futures::future::pending()));
    assert_eq!(ok, Ok(()));

    let failed = futures::executor::block_on(bounded(
        futures::future::ready(Err(ApiError::Network("reset".to_owned()))),
        futures::future::pending(),
    ));
    assert_eq!(failed, Err(ApiError::Network("reset".to_owned())));
}
