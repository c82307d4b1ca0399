//! Todo routes - the browser-facing CRUD surface
//!
//! Mutating routes change exactly one record, then bounce back to `/`.

use axum::{
    extract::{Form, Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};

use crate::db::Database;
use crate::error::ServerResult;
use crate::models::TodoForm;
use crate::render;

/// GET / - Home page listing every record
pub async fn home(State(db): State<Database>) -> ServerResult<Html<String>> {
    let todos = db.list_todos()?;
    Ok(Html(render::home_page(&todos)))
}

/// POST /add - Create a record from the submitted form
pub async fn add_todo(
    State(db): State<Database>,
    Form(form): Form<TodoForm>,
) -> ServerResult<Response> {
    db.insert_todo(&form.title)?;
    Ok(redirect_home())
}

/// GET /update/{id} - Flip the record's completion flag
pub async fn toggle_todo(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> ServerResult<Response> {
    db.toggle_todo(id)?;
    Ok(redirect_home())
}

/// GET /delete/{id} - Remove the record entirely
pub async fn delete_todo(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> ServerResult<Response> {
    db.delete_todo(id)?;
    Ok(redirect_home())
}

/// 302 back to the home page. `Redirect::to` would send 303; the form flow
/// here is plain 302 Found.
fn redirect_home() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, "/")]).into_response()
}
