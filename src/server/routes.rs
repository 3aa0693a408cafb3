//! Request handlers. Each one opens its own connection through `AppState`.

use axum::{
    extract::{Path, State},
    http::header,
    response::{Html, IntoResponse, Redirect},
    Form,
};

use crate::core::clock::ClockLogic;
use crate::core::employee::EmployeeLogic;
use crate::errors::AppResult;
use crate::export::{ExportLogic, EXPORT_FILE_NAME, XLSX_MIME};
use crate::models::NewEmployee;
use crate::server::pages;
use crate::server::state::AppState;

/// GET / - Landing page
pub async fn index() -> Html<String> {
    Html(pages::index())
}

/// GET /employees - List employees
pub async fn list_employees(State(state): State<AppState>) -> AppResult<Html<String>> {
    let list = state.with_db(|pool| EmployeeLogic::list(pool)).await?;
    Ok(Html(pages::employees(&list)))
}

/// POST /employees - Create an employee, then render the list
pub async fn create_employee(
    State(state): State<AppState>,
    Form(emp): Form<NewEmployee>,
) -> AppResult<Html<String>> {
    let list = state
        .with_db(move |pool| {
            EmployeeLogic::add(pool, &emp)?;
            EmployeeLogic::list(pool)
        })
        .await?;
    Ok(Html(pages::employees(&list)))
}

/// POST /employees/{id}/remove - Delete an employee and its events
pub async fn remove_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Redirect> {
    state.with_db(move |pool| EmployeeLogic::remove(pool, id)).await?;
    Ok(Redirect::to("/employees"))
}

/// POST /clock/{employee_id}/{kind} - Record an entrance or exit
pub async fn record_clock_event(
    State(state): State<AppState>,
    Path((employee_id, kind)): Path<(i64, String)>,
) -> AppResult<Redirect> {
    state
        .with_db(move |pool| ClockLogic::punch(pool, employee_id, &kind))
        .await?;
    Ok(Redirect::to("/employees"))
}

/// GET /records - Joined event list, newest first
pub async fn list_records(State(state): State<AppState>) -> AppResult<Html<String>> {
    let records = state.with_db(|pool| ClockLogic::records(pool)).await?;
    Ok(Html(pages::records(&records)))
}

/// GET /export - Spreadsheet download, oldest first
pub async fn export_records(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let bytes = state.with_db(|pool| ExportLogic::xlsx_bytes(pool)).await?;

    let headers = [
        (header::CONTENT_TYPE, XLSX_MIME.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{EXPORT_FILE_NAME}\""),
        ),
    ];
    Ok((headers, bytes))
}

/// POST /records/clear - Delete every clock event
pub async fn clear_records(State(state): State<AppState>) -> AppResult<Redirect> {
    state.with_db(|pool| ClockLogic::clear(pool)).await?;
    Ok(Redirect::to("/records"))
}
