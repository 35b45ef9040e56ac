//! Authentication route handlers.
//!
//! Registration, login, and logout. Validation failures re-render the form
//! with an inline message (HTTP 200); successful mutations redirect
//! (post-redirect-get).

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form, Router,
    extract::State,
    response::{IntoResponse, Redirect, Response},
    routing::get,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::error::AppError;
use crate::middleware::set_current_user;
use crate::models::CurrentUser;
use crate::services::auth::{AuthError, AuthService};
use crate::state::AppState;
use crate::validate;

/// Registration form data.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Registration page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/register.html")]
struct RegisterTemplate {
    error: Option<String>,
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
struct LoginTemplate {
    error: Option<String>,
}

/// Build the auth router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", get(register_page).post(register))
        .route("/login", get(login_page).post(login))
        .route("/logout", get(logout))
}

/// Render the registration form.
///
/// GET /register
async fn register_page() -> impl IntoResponse {
    RegisterTemplate { error: None }
}

/// Handle registration form submission.
///
/// POST /register
///
/// No session is created on registration; the user logs in separately.
async fn register(State(state): State<AppState>, Form(form): Form<RegisterForm>) -> Response {
    let name = form.name.trim();
    let email = form.email.trim();
    let password = form.password.trim();

    if name.is_empty() || email.is_empty() || password.is_empty() {
        return register_error("All fields are required");
    }
    if !validate::is_valid_email(email) {
        return register_error("Invalid Email Format");
    }
    if !validate::is_valid_password(password) {
        return register_error("Password must be at least 6 characters");
    }

    match AuthService::new(state.pool())
        .register(name, email, password)
        .await
    {
        Ok(user) => {
            tracing::info!(user_id = user.id, "user registered");
            Redirect::to("/login").into_response()
        }
        Err(AuthError::EmailTaken) => register_error("Email already registered"),
        Err(e) => AppError::from(e).into_response(),
    }
}

fn register_error(message: &str) -> Response {
    RegisterTemplate {
        error: Some(message.to_owned()),
    }
    .into_response()
}

/// Render the login form.
///
/// GET /login
async fn login_page() -> impl IntoResponse {
    LoginTemplate { error: None }
}

/// Handle login form submission.
///
/// POST /login
///
/// Establishes a session on success; renders the invalid-credentials message
/// with HTTP 200 (not a redirect) on failure.
async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Response {
    let email = form.email.trim();
    let password = form.password.trim();

    match AuthService::new(state.pool()).login(email, password).await {
        Ok(user) => {
            let current = CurrentUser {
                id: user.id,
                name: user.name,
                email: user.email,
            };
            if let Err(e) = set_current_user(&session, &current).await {
                tracing::error!(error = %e, "failed to establish session");
                return AppError::Internal("session store".to_owned()).into_response();
            }
            tracing::info!(user_id = current.id, "user logged in");
            Redirect::to("/").into_response()
        }
        Err(AuthError::InvalidCredentials) => LoginTemplate {
            error: Some("Invalid email or password".to_owned()),
        }
        .into_response(),
        Err(e) => AppError::from(e).into_response(),
    }
}

/// Destroy the session and redirect to login.
///
/// GET /logout
///
/// Idempotent: logging out without a session is not an error.
async fn logout(session: Session) -> impl IntoResponse {
    if let Err(e) = session.flush().await {
        tracing::warn!(error = %e, "failed to clear session");
    }
    Redirect::to("/login")
}
