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
        artist::ArtistForm,
        form::{FieldErrors, FormFields},
        search::SearchForm,
    },
    server::{
        controller::invalid_form,
        error::AppError,
        middleware::session::FlashSession,
        model::artist::{CreateArtistParams, UpdateArtistParams},
        service::artist::ArtistService,
        state::AppState,
        util::parse::parse_path_id,
    },
    view::{
        page::{
            artist::{ArtistDetailPage, ArtistFormPage, ArtistsPage},
            search::{into_hits, SearchPage},
        },
        render::render_page,
    },
};

pub async fn list_artists(
    State(state): State<AppState>,
    session: Session,
) -> Result<Html<String>, AppError> {
    let flashes = FlashSession::new(&session).take().await?;
    let artists = ArtistService::new(&state.db).get_all().await?;

    Ok(render_page("Artists", flashes, rsx! { ArtistsPage { artists } }))
}

/// `GET /artists/search?search_term=...`
pub async fn search_artists_query(
    State(state): State<AppState>,
    Query(fields): Query<Vec<(String, String)>>,
) -> Result<Html<String>, AppError> {
    search(&state, SearchForm::from_fields(&FormFields::new(fields))).await
}

/// `POST /artists/search`
pub async fn search_artists(
    State(state): State<AppState>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Html<String>, AppError> {
    search(&state, SearchForm::from_fields(&FormFields::new(fields))).await
}

async fn search(state: &AppState, form: SearchForm) -> Result<Html<String>, AppError> {
    let results = ArtistService::new(&state.db)
        .search(&form.search_term)
        .await?;

    Ok(render_page(
        "Artist Search",
        Vec::new(),
        rsx! {
            SearchPage {
                action: "/artists/search",
                placeholder: "Find an artist",
                search_term: form.search_term,
                results: into_hits(results),
            }
        },
    ))
}

pub async fn show_artist(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let id = parse_path_id(&id)?;

    let detail = ArtistService::new(&state.db)
        .get_detail(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Artist {} not found", id)))?;

    let flashes = FlashSession::new(&session).take().await?;
    let title = detail.artist.name.clone();

    Ok(render_page(&title, flashes, rsx! { ArtistDetailPage { detail } }))
}

pub async fn create_artist_form() -> Html<String> {
    form_page("/artists/create", "List a new artist", ArtistForm::default(), FieldErrors::new())
}

pub async fn create_artist(
    State(state): State<AppState>,
    session: Session,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let form = ArtistForm::from_fields(&FormFields::new(fields));
    if let Err(errors) = form.validate() {
        return Ok(invalid_form(form_page("/artists/create", "List a new artist", form, errors)));
    }

    let flash = FlashSession::new(&session);
    let name = form.name.clone();

    match ArtistService::new(&state.db)
        .create(CreateArtistParams::from_form(form))
        .await
    {
        Ok(artist) => {
            tracing::info!("Listed artist {} ({})", artist.id, artist.name);
            flash
                .push(format!("Artist {} was successfully listed!", name))
                .await?;
        }
        Err(e) => {
            tracing::error!("Failed to list artist {}: {}", name, e);
            flash
                .push(format!(
                    "An error occurred. Artist {} could not be listed.",
                    name
                ))
                .await?;
        }
    }

    Ok(Redirect::to("/").into_response())
}

pub async fn edit_artist_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let id = parse_path_id(&id)?;

    let artist = ArtistService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Artist {} not found", id)))?;

    Ok(form_page(
        &format!("/artists/{}/edit", id),
        "Edit artist",
        artist.into_form(),
        FieldErrors::new(),
    ))
}

pub async fn edit_artist(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let id = parse_path_id(&id)?;
    let action = format!("/artists/{}/edit", id);
    let service = ArtistService::new(&state.db);

    if service.get_by_id(id).await?.is_none() {
        return Err(AppError::NotFound(format!("Artist {} not found", id)));
    }

    let form = ArtistForm::from_fields(&FormFields::new(fields));
    if let Err(errors) = form.validate() {
        return Ok(invalid_form(form_page(&action, "Edit artist", form, errors)));
    }

    let flash = FlashSession::new(&session);
    let name = form.name.clone();

    match service
        .update(UpdateArtistParams::from_form(id, form))
        .await
    {
        Ok(Some(_)) => {
            flash
                .push(format!("Artist {} was successfully updated!", name))
                .await?;
        }
        Ok(None) => return Err(AppError::NotFound(format!("Artist {} not found", id))),
        Err(e) => {
            tracing::error!("Failed to update artist {}: {}", id, e);
            flash
                .push(format!(
                    "An error occurred. Artist {} could not be updated.",
                    name
                ))
                .await?;
        }
    }

    Ok(Redirect::to(&format!("/artists/{}", id)).into_response())
}

pub async fn delete_artist(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    let id = parse_path_id(&id)?;
    let service = ArtistService::new(&state.db);

    let artist = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Artist {} not found", id)))?;

    let flash = FlashSession::new(&session);

    match service.delete(id).await {
        Ok(_) => {
            tracing::info!("Deleted artist {} ({})", artist.id, artist.name);
            flash
                .push(format!("Artist {} has been deleted.", artist.name))
                .await?;
        }
        Err(e) => {
            tracing::error!("Failed to delete artist {}: {}", id, e);
            flash
                .push(format!(
                    "An error occurred. Artist {} could not be deleted.",
                    artist.name
                ))
                .await?;
        }
    }

    Ok(Redirect::to("/"))
}

fn form_page(action: &str, heading: &str, form: ArtistForm, errors: FieldErrors) -> Html<String> {
    let action = action.to_string();
    let heading = heading.to_string();

    render_page(
        &heading,
        Vec::new(),
        rsx! { ArtistFormPage { heading: heading.clone(), action, form, errors } },
    )
}
