//! Alumni record route handlers.
//!
//! Every route here requires an active session; unauthenticated requests are
//! redirected to the login page by the [`RequireAuth`] extractor.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form, Router,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
    routing::get,
};
use chrono::Datelike;
use serde::Deserialize;

use crate::db::AlumniRepository;
use crate::error::AppError;
use crate::middleware::RequireAuth;
use crate::models::{Alumni, NewAlumni};
use crate::state::AppState;
use crate::validate;

/// New-alumni form data. `year` stays a string so that a non-numeric value
/// is reported as a form error rather than a framework rejection.
#[derive(Debug, Deserialize)]
pub struct AddAlumniForm {
    pub name: String,
    pub department: String,
    pub year: String,
    pub email: String,
    pub phone: String,
    pub job: String,
}

/// Alumni listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "alumni/index.html")]
struct AlumniListTemplate {
    user_name: String,
    alumni: Vec<Alumni>,
}

/// New-alumni form page template.
#[derive(Template, WebTemplate)]
#[template(path = "alumni/add.html")]
struct AddAlumniTemplate {
    error: Option<String>,
}

/// Build the alumni router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/add", get(add_page).post(add))
        .route("/delete/{id}", get(delete))
}

/// List all alumni records in insertion order.
///
/// GET /
async fn index(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<AlumniListTemplate, AppError> {
    let alumni = AlumniRepository::new(state.pool()).list_all().await?;

    Ok(AlumniListTemplate {
        user_name: user.name,
        alumni,
    })
}

/// Render the new-alumni form.
///
/// GET /add
async fn add_page(RequireAuth(_user): RequireAuth) -> impl IntoResponse {
    AddAlumniTemplate { error: None }
}

/// Handle new-alumni form submission.
///
/// POST /add
///
/// Checks run in order (year parse, email format, phone format, year range);
/// the first failure re-renders the form and later checks are skipped.
async fn add(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Form(form): Form<AddAlumniForm>,
) -> Response {
    let name = form.name.trim();
    let department = form.department.trim();
    let email = form.email.trim();
    let phone = form.phone.trim();
    let job = form.job.trim();

    if name.is_empty()
        || department.is_empty()
        || email.is_empty()
        || phone.is_empty()
        || job.is_empty()
    {
        return add_error("All fields are required");
    }

    let Ok(year) = form.year.trim().parse::<i64>() else {
        return add_error("Passing Year must be a number");
    };

    if !validate::is_valid_email(email) {
        return add_error("Invalid Email Format");
    }
    if !validate::is_valid_phone(phone) {
        return add_error("Phone number must be 10 digits");
    }

    let current_year = i64::from(chrono::Utc::now().year());
    if !validate::is_valid_year(year, current_year) {
        return add_error("Invalid Passing Year");
    }

    let record = NewAlumni {
        name,
        department,
        year,
        email,
        phone,
        job,
    };

    match AlumniRepository::new(state.pool()).create(&record).await {
        Ok(created) => {
            tracing::info!(alumni_id = created.id, "alumni record created");
            Redirect::to("/").into_response()
        }
        Err(e) => AppError::from(e).into_response(),
    }
}

fn add_error(message: &str) -> Response {
    AddAlumniTemplate {
        error: Some(message.to_owned()),
    }
    .into_response()
}

/// Delete an alumni record by id (hard delete), then redirect home.
///
/// GET /delete/{id}
///
/// Responds 404 if no record has that id.
async fn delete(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<i64>,
) -> Result<Redirect, AppError> {
    AlumniRepository::new(state.pool()).delete(id).await?;
    tracing::info!(alumni_id = id, "alumni record deleted");

    Ok(Redirect::to("/"))
}
