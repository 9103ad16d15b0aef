//! Notes pages: list, create, edit, update and delete.
//!
//! Every handler loads the whole collection from the store, and the mutating
//! ones save it back before redirecting. Missing fields and bad indices just
//! redirect; only an oversized form body or a storage failure is an error.

use actix_web::http::{header, StatusCode};
use actix_web::{web, HttpResponse};

use crate::error::StoreError;
use crate::notes::{collection, model, NoteForm};
use crate::views;
use crate::AppState;

fn redirect(location: impl Into<String>) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location.into()))
        .finish()
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

/// Largest accepted form body, the same ceiling as the default express urlencoded parser
pub const FORM_LIMIT_BYTES: usize = 100 * 1024;

type FormResult = Result<web::Form<NoteForm>, actix_web::Error>;

/// A body that fails to parse is treated the same as one with no fields.
/// An oversized body is still an error.
fn form_or_default(form: FormResult) -> Result<NoteForm, actix_web::Error> {
    match form {
        Ok(form) => Ok(form.into_inner()),
        Err(e) if e.as_response_error().status_code() == StatusCode::PAYLOAD_TOO_LARGE => {
            log::warn!("[NOTES] Rejecting form body over {} bytes", FORM_LIMIT_BYTES);
            Err(e)
        }
        Err(_) => Ok(NoteForm::default()),
    }
}

// GET /
async fn list_notes(data: web::Data<AppState>) -> Result<HttpResponse, StoreError> {
    let notes = data.store.load()?;
    Ok(html(views::list_page(&notes)))
}

// POST /add-note
async fn add_note(
    data: web::Data<AppState>,
    form: FormResult,
) -> Result<HttpResponse, actix_web::Error> {
    let form = form_or_default(form)?;
    let Some((title, content)) = form.fields() else {
        log::debug!("[NOTES] Ignoring add with missing title or content");
        return Ok(redirect("/"));
    };

    let mut notes = data.store.load()?;
    collection::add_note(&mut notes, title, content, model::now());
    data.store.save(&notes)?;

    log::info!("[NOTES] Created note '{}' ({} total)", title, notes.len());
    Ok(redirect("/"))
}

// GET /edit/{id}
async fn edit_form(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, StoreError> {
    let notes = data.store.load()?;

    let found = collection::parse_index(&path)
        .and_then(|index| notes.get(index).map(|note| (index, note)));

    match found {
        Some((index, note)) => Ok(html(views::edit_page(index, note))),
        None => {
            log::debug!("[NOTES] Edit requested for unknown index '{}'", path.as_str());
            Ok(redirect("/"))
        }
    }
}

// POST /update/{id}
async fn update_note(
    data: web::Data<AppState>,
    path: web::Path<String>,
    form: FormResult,
) -> Result<HttpResponse, actix_web::Error> {
    let Some(index) = collection::parse_index(&path) else {
        log::debug!("[NOTES] Update requested for invalid index '{}'", path.as_str());
        return Ok(redirect("/"));
    };

    let form = form_or_default(form)?;
    let Some((title, content)) = form.fields() else {
        return Ok(redirect(format!("/edit/{}", index)));
    };

    let mut notes = data.store.load()?;
    if !collection::update_note(&mut notes, index, title, content, model::now()) {
        log::debug!("[NOTES] Update requested for out-of-range index {}", index);
        return Ok(redirect("/"));
    }
    data.store.save(&notes)?;

    log::info!("[NOTES] Updated note {} ('{}')", index, title);
    Ok(redirect("/"))
}

// GET /delete/{id}
async fn delete_note(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, StoreError> {
    let mut notes = data.store.load()?;

    let removed = collection::parse_index(&path)
        .and_then(|index| collection::remove_note(&mut notes, index));

    match removed {
        Some(note) => {
            data.store.save(&notes)?;
            log::info!("[NOTES] Deleted note '{}' ({} left)", note.title, notes.len());
        }
        None => log::debug!("[NOTES] Delete requested for unknown index '{}'", path.as_str()),
    }

    Ok(redirect("/"))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::FormConfig::default().limit(FORM_LIMIT_BYTES))
        .route("/", web::get().to(list_notes))
        .route("/add-note", web::post().to(add_note))
        .route("/edit/{id}", web::get().to(edit_form))
        .route("/update/{id}", web::post().to(update_note))
        .route("/delete/{id}", web::get().to(delete_note));
}
