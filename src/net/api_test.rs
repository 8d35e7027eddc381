use super::*;

fn creds() -> Credentials {
    Credentials { email: "a@b.com".to_owned(), password: "pw".to_owned() }
}

// =============================================================
// Request building
// =============================================================

#[test]
fn prepare_login_request_sets_json_body_and_content_type() {
    let req = prepare_login_request("http://localhost:8081/user/login", &creds(), &RequestHeaders::new()).unwrap();
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.url, "http://localhost:8081/user/login");
    assert_eq!(req.headers, vec![("Content-Type".to_owned(), "application/json".to_owned())]);
    let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
    assert_eq!(body, serde_json::json!({ "email": "a@b.com", "password": "pw" }));
}

#[test]
fn prepare_login_request_passes_parent_headers_verbatim() {
    let headers: RequestHeaders = [("Cookie", "sessionId=abc"), ("content-type", "application/json; charset=utf-8")]
        .into_iter()
        .collect();
    let req = prepare_login_request("/user/login", &creds(), &headers).unwrap();
    assert_eq!(
        req.headers,
        vec![
            ("Cookie".to_owned(), "sessionId=abc".to_owned()),
            ("content-type".to_owned(), "application/json; charset=utf-8".to_owned()),
        ]
    );
}

#[test]
fn prepare_login_request_rejects_unsendable_headers() {
    let bad_name: RequestHeaders = [("Bad Header", "x")].into_iter().collect();
    assert!(matches!(
        prepare_login_request("/user/login", &creds(), &bad_name),
        Err(LoginError::Request(_))
    ));

    let bad_value: RequestHeaders = [("X-Note", "line\r\nInjected: 1")].into_iter().collect();
    assert!(matches!(
        prepare_login_request("/user/login", &creds(), &bad_value),
        Err(LoginError::Request(_))
    ));
}

#[test]
fn prepare_logout_request_has_no_body() {
    let headers: RequestHeaders = [("Cookie", "sessionId=abc")].into_iter().collect();
    let req = prepare_logout_request("/user/logout", &headers).unwrap();
    assert_eq!(req.body, None);
    assert_eq!(req.headers, vec![("Cookie".to_owned(), "sessionId=abc".to_owned())]);
}

#[test]
fn prepare_session_check_request_is_a_bodyless_get() {
    let headers: RequestHeaders = [("Cookie", "sessionId=abc")].into_iter().collect();
    let url = ClientConfig::default().secure_url(7);
    let req = prepare_session_check_request(&url, &headers).unwrap();
    assert_eq!(req.method, Method::Get);
    assert_eq!(req.url, "http://localhost:8081/user/secure/7");
    assert_eq!(req.body, None);
    assert_eq!(req.headers, vec![("Cookie".to_owned(), "sessionId=abc".to_owned())]);
}

// =============================================================
// Response decoding
// =============================================================

#[test]
fn decode_login_response_accepts_identity_payload() {
    let resp = decode_login_response(
        200,
        r#"{"id":1,"firstName":"A","lastName":"B","email":"a@b.com"}"#,
    )
    .unwrap();
    assert_eq!(resp.id, 1);
    assert_eq!(resp.email, "a@b.com");
}

#[test]
fn decode_login_response_surfaces_rejection_payload() {
    assert_eq!(
        decode_login_response(401, "\"Invalid credentials\""),
        Err(LoginError::Rejected { status: 401, message: "Invalid credentials".to_owned() })
    );
    assert_eq!(
        decode_login_response(401, "Invalid credentials"),
        Err(LoginError::Rejected { status: 401, message: "Invalid credentials".to_owned() })
    );
}

#[test]
fn decode_login_response_flags_malformed_success_body() {
    assert!(matches!(decode_login_response(200, "not json"), Err(LoginError::Decode(_))));
    assert!(matches!(decode_login_response(200, r#"{"id":1}"#), Err(LoginError::Decode(_))));
}

#[test]
fn expect_success_accepts_any_2xx() {
    assert_eq!(expect_success(204, ""), Ok(()));
    assert_eq!(expect_success(200, "ignored"), Ok(()));
    assert_eq!(
        expect_success(403, "\"Forbidden\""),
        Err(LoginError::Rejected { status: 403, message: "Forbidden".to_owned() })
    );
}

#[test]
fn failure_payload_message_renders_structured_bodies_compactly() {
    assert_eq!(failure_payload_message(r#"{ "error": "locked" }"#), r#"{"error":"locked"}"#);
    assert_eq!(failure_payload_message("  plain text \n"), "plain text");
    assert_eq!(failure_payload_message("null"), "");
    assert_eq!(failure_payload_message(""), "");
}

// =============================================================
// Host transport
// =============================================================

#[test]
fn http_auth_api_reports_request_error_without_browser() {
    let api = HttpAuthApi::new(&ClientConfig::default());
    let result = futures::executor::block_on(api.login(&creds(), &RequestHeaders::new()));
    assert!(matches!(result, Err(LoginError::Request(_))));
}

#[test]
fn http_auth_api_session_check_fails_without_browser() {
    let api = HttpAuthApi::new(&ClientConfig::default());
    let result = futures::executor::block_on(api.validate_session(1, &RequestHeaders::new()));
    assert!(matches!(result, Err(LoginError::Request(_))));
}
