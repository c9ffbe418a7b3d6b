use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use dioxus::prelude::*;
use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::{
    model::{
        form::{FieldErrors, FormFields},
        search::SearchForm,
        venue::VenueForm,
    },
    server::{
        controller::invalid_form,
        error::AppError,
        middleware::session::FlashSession,
        model::venue::{CreateVenueParams, UpdateVenueParams},
        service::venue::VenueService,
        state::AppState,
        util::parse::parse_path_id,
    },
    view::{
        page::{
            search::{into_hits, SearchPage},
            venue::{VenueDetailPage, VenueFormPage, VenuesPage},
        },
        render::render_page,
    },
};

pub async fn list_venues(
    State(state): State<AppState>,
    session: Session,
) -> Result<Html<String>, AppError> {
    let flashes = FlashSession::new(&session).take().await?;
    let areas = VenueService::new(&state.db).get_all_by_area().await?;

    Ok(render_page("Venues", flashes, rsx! { VenuesPage { areas } }))
}

/// `GET /venues/search?search_term=...`
pub async fn search_venues_query(
    State(state): State<AppState>,
    Query(fields): Query<Vec<(String, String)>>,
) -> Result<Html<String>, AppError> {
    search(&state, SearchForm::from_fields(&FormFields::new(fields))).await
}

/// `POST /venues/search`
pub async fn search_venues(
    State(state): State<AppState>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Html<String>, AppError> {
    search(&state, SearchForm::from_fields(&FormFields::new(fields))).await
}

async fn search(state: &AppState, form: SearchForm) -> Result<Html<String>, AppError> {
    let results = VenueService::new(&state.db)
        .search(&form.search_term)
        .await?;

    Ok(render_page(
        "Venue Search",
        Vec::new(),
        rsx! {
            SearchPage {
                action: "/venues/search",
                placeholder: "Find a venue",
                search_term: form.search_term,
                results: into_hits(results),
            }
        },
    ))
}

pub async fn show_venue(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let id = parse_path_id(&id)?;

    let detail = VenueService::new(&state.db)
        .get_detail(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Venue {} not found", id)))?;

    let flashes = FlashSession::new(&session).take().await?;
    let title = detail.venue.name.clone();

    Ok(render_page(&title, flashes, rsx! { VenueDetailPage { detail } }))
}

pub async fn create_venue_form() -> Html<String> {
    form_page("/venues/create", "List a new venue", VenueForm::default(), FieldErrors::new())
}

pub async fn create_venue(
    State(state): State<AppState>,
    session: Session,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let form = VenueForm::from_fields(&FormFields::new(fields));
    if let Err(errors) = form.validate() {
        return Ok(invalid_form(form_page("/venues/create", "List a new venue", form, errors)));
    }

    let flash = FlashSession::new(&session);
    let name = form.name.clone();

    match VenueService::new(&state.db)
        .create(CreateVenueParams::from_form(form))
        .await
    {
        Ok(venue) => {
            tracing::info!("Listed venue {} ({})", venue.id, venue.name);
            flash
                .push(format!("Venue {} was successfully listed!", name))
                .await?;
        }
        Err(e) => {
            tracing::error!("Failed to list venue {}: {}", name, e);
            flash
                .push(format!(
                    "An error occurred. Venue {} could not be listed.",
                    name
                ))
                .await?;
        }
    }

    Ok(Redirect::to("/").into_response())
}

pub async fn edit_venue_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let id = parse_path_id(&id)?;

    let venue = VenueService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Venue {} not found", id)))?;

    Ok(form_page(
        &format!("/venues/{}/edit", id),
        "Edit venue",
        venue.into_form(),
        FieldErrors::new(),
    ))
}

pub async fn edit_venue(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let id = parse_path_id(&id)?;
    let action = format!("/venues/{}/edit", id);
    let service = VenueService::new(&state.db);

    if service.get_by_id(id).await?.is_none() {
        return Err(AppError::NotFound(format!("Venue {} not found", id)));
    }

    let form = VenueForm::from_fields(&FormFields::new(fields));
    if let Err(errors) = form.validate() {
        return Ok(invalid_form(form_page(&action, "Edit venue", form, errors)));
    }

    let flash = FlashSession::new(&session);
    let name = form.name.clone();

    match service
        .update(UpdateVenueParams::from_form(id, form))
        .await
    {
        Ok(Some(_)) => {
            flash
                .push(format!("Venue {} was successfully updated!", name))
                .await?;
        }
        Ok(None) => return Err(AppError::NotFound(format!("Venue {} not found", id))),
        Err(e) => {
            tracing::error!("Failed to update venue {}: {}", id, e);
            flash
                .push(format!(
                    "An error occurred. Venue {} could not be updated.",
                    name
                ))
                .await?;
        }
    }

    Ok(Redirect::to(&format!("/venues/{}", id)).into_response())
}

pub async fn delete_venue(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    let id = parse_path_id(&id)?;
    let service = VenueService::new(&state.db);

    let venue = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Venue {} not found", id)))?;

    let flash = FlashSession::new(&session);

    match service.delete(id).await {
        Ok(_) => {
            tracing::info!("Deleted venue {} ({})", venue.id, venue.name);
            flash
                .push(format!("Venue {} has been deleted.", venue.name))
                .await?;
        }
        Err(e) => {
            tracing::error!("Failed to delete venue {}: {}", id, e);
            flash
                .push(format!(
                    "An error occurred. Venue {} could not be deleted.",
                    venue.name
                ))
                .await?;
        }
    }

    Ok(Redirect::to("/"))
}

fn form_page(action: &str, heading: &str, form: VenueForm, errors: FieldErrors) -> Html<String> {
    let action = action.to_string();
    let heading = heading.to_string();

    render_page(
        &heading,
        Vec::new(),
        rsx! { VenueFormPage { heading: heading.clone(), action, form, errors } },
    )
}
