//! End-to-end tests driving the full router (session layer included) against
//! an in-memory `SQLite` database.

#![allow(clippy::unwrap_used)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode, header};
use chrono::Datelike;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

use alumni_manager::{app, config::AppConfig, db, state::AppState};

/// Build the application over a fresh in-memory database.
async fn test_app() -> Router {
    // One connection: every connection to `sqlite::memory:` is a separate
    // database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    db::init_schema(&pool).await.unwrap();

    let config = AppConfig {
        database_url: "sqlite::memory:".to_owned(),
        host: std::net::IpAddr::from([127, 0, 0, 1]),
        port: 0,
    };

    app(AppState::new(config, pool))
}

async fn get(app: &Router, uri: &str, cookie: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    app.clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post_form(app: &Router, uri: &str, body: &str, cookie: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    app.clone()
        .oneshot(builder.body(Body::from(body.to_owned())).unwrap())
        .await
        .unwrap()
}

/// Extract the session cookie (name=value) from a response, if one was set.
fn session_cookie(res: &Response<Body>) -> Option<String> {
    res.headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(ToOwned::to_owned)
}

fn location(res: &Response<Body>) -> &str {
    res.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

async fn body_string(res: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Register `jo@x.com` and log in, returning the session cookie.
async fn login_test_user(app: &Router) -> String {
    let res = post_form(
        app,
        "/register",
        "name=Jo&email=jo%40x.com&password=secret1",
        None,
    )
    .await;
    assert!(res.status().is_redirection());

    let res = post_form(app, "/login", "email=jo%40x.com&password=secret1", None).await;
    assert!(res.status().is_redirection());
    session_cookie(&res).expect("login should set a session cookie")
}

const VALID_ALUMNI: &str =
    "name=A&department=CS&year=2020&email=a%40b.com&phone=1234567890&job=Eng";

// ============================================================================
// Auth Flow
// ============================================================================

#[tokio::test]
async fn test_register_login_flow() {
    let app = test_app().await;

    // Register redirects to the login page, without creating a session
    let res = post_form(
        &app,
        "/register",
        "name=Jo&email=jo%40x.com&password=secret1",
        None,
    )
    .await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/login");
    assert!(session_cookie(&res).is_none());

    // Correct credentials establish a session and redirect home
    let res = post_form(&app, "/login", "email=jo%40x.com&password=secret1", None).await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/");
    let cookie = session_cookie(&res).unwrap();

    let res = get(&app, "/", Some(&cookie)).await;
    assert_eq!(res.status(), StatusCode::OK);

    // Wrong password renders the message with HTTP 200 and no session
    let res = post_form(&app, "/login", "email=jo%40x.com&password=wrong", None).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(session_cookie(&res).is_none());
    assert!(body_string(res).await.contains("Invalid email or password"));
}

#[tokio::test]
async fn test_register_rejects_invalid_input() {
    let app = test_app().await;

    let res = post_form(&app, "/register", "name=Jo&email=bad&password=secret1", None).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(body_string(res).await.contains("Invalid Email Format"));

    // Five characters once the padding is trimmed
    let res = post_form(
        &app,
        "/register",
        "name=Jo&email=jo%40x.com&password=%20abcde%20",
        None,
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(
        body_string(res)
            .await
            .contains("Password must be at least 6 characters")
    );

    // Nothing was persisted, so the email is still free to register
    let res = post_form(
        &app,
        "/register",
        "name=Jo&email=jo%40x.com&password=secret1",
        None,
    )
    .await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_duplicate_registration_is_rejected() {
    let app = test_app().await;

    let res = post_form(
        &app,
        "/register",
        "name=Jo&email=jo%40x.com&password=secret1",
        None,
    )
    .await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);

    let res = post_form(
        &app,
        "/register",
        "name=Other&email=jo%40x.com&password=different1",
        None,
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(body_string(res).await.contains("Email already registered"));
}

#[tokio::test]
async fn test_logout_destroys_session() {
    let app = test_app().await;
    let cookie = login_test_user(&app).await;

    let res = get(&app, "/logout", Some(&cookie)).await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/login");

    // The old token no longer resolves
    let res = get(&app, "/", Some(&cookie)).await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/login");

    // Logging out again is not an error
    let res = get(&app, "/logout", None).await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
}

// ============================================================================
// Protected Routes
// ============================================================================

#[tokio::test]
async fn test_unauthenticated_requests_redirect_to_login() {
    let app = test_app().await;

    for uri in ["/", "/add", "/delete/1"] {
        let res = get(&app, uri, None).await;
        assert_eq!(res.status(), StatusCode::SEE_OTHER, "GET {uri}");
        assert_eq!(location(&res), "/login", "GET {uri}");
    }

    // The underlying operation never executes either
    let res = post_form(&app, "/add", VALID_ALUMNI, None).await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/login");
}

// ============================================================================
// Alumni Lifecycle
// ============================================================================

#[tokio::test]
async fn test_alumni_add_list_delete_lifecycle() {
    let app = test_app().await;
    let cookie = login_test_user(&app).await;

    // Empty table shows the placeholder row
    let res = get(&app, "/", Some(&cookie)).await;
    assert!(body_string(res).await.contains("No Alumni Found"));

    let res = post_form(&app, "/add", VALID_ALUMNI, Some(&cookie)).await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/");

    // Record appears in the listing; pull its id out of the delete link
    let res = get(&app, "/", Some(&cookie)).await;
    let body = body_string(res).await;
    assert!(body.contains("1234567890"));
    let start = body.find("/delete/").unwrap() + "/delete/".len();
    let id: String = body[start..]
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();

    let res = get(&app, &format!("/delete/{id}"), Some(&cookie)).await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/");

    let res = get(&app, "/", Some(&cookie)).await;
    let body = body_string(res).await;
    assert!(body.contains("No Alumni Found"));
    assert!(!body.contains("1234567890"));

    // Deleting the same id again is Not Found
    let res = get(&app, &format!("/delete/{id}"), Some(&cookie)).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_add_alumni_validation_messages() {
    let app = test_app().await;
    let cookie = login_test_user(&app).await;

    let cases = [
        (
            "name=A&department=CS&year=2020&email=bad&phone=1234567890&job=Eng",
            "Invalid Email Format",
        ),
        (
            "name=A&department=CS&year=2020&email=a%40b.com&phone=12345&job=Eng",
            "Phone number must be 10 digits",
        ),
        (
            "name=A&department=CS&year=1979&email=a%40b.com&phone=1234567890&job=Eng",
            "Invalid Passing Year",
        ),
        (
            "name=A&department=CS&year=abc&email=a%40b.com&phone=1234567890&job=Eng",
            "Passing Year must be a number",
        ),
        (
            "name=A&department=&year=2020&email=a%40b.com&phone=1234567890&job=Eng",
            "All fields are required",
        ),
    ];

    for (form, message) in cases {
        let res = post_form(&app, "/add", form, Some(&cookie)).await;
        assert_eq!(res.status(), StatusCode::OK, "{message}");
        assert!(body_string(res).await.contains(message), "{message}");
    }

    // None of the rejected submissions were persisted
    let res = get(&app, "/", Some(&cookie)).await;
    assert!(body_string(res).await.contains("No Alumni Found"));
}

#[tokio::test]
async fn test_add_alumni_accepts_boundary_years() {
    let app = test_app().await;
    let cookie = login_test_user(&app).await;

    let current_year = chrono::Utc::now().year();
    for year in [1980, current_year] {
        let form = format!(
            "name=A&department=CS&year={year}&email=a%40b.com&phone=1234567890&job=Eng"
        );
        let res = post_form(&app, "/add", &form, Some(&cookie)).await;
        assert_eq!(res.status(), StatusCode::SEE_OTHER, "year {year}");
    }

    let res = get(&app, "/", Some(&cookie)).await;
    let body = body_string(res).await;
    assert!(body.contains("1980"));
    assert!(body.contains(&current_year.to_string()));
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health_endpoints() {
    let app = test_app().await;

    let res = get(&app, "/health", None).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_string(res).await, "ok");

    let res = get(&app, "/health/ready", None).await;
    assert_eq!(res.status(), StatusCode::OK);
}
