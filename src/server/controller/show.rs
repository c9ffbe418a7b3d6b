use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use chrono::Utc;
use dioxus::prelude::*;
use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::{
    model::{
        form::{FieldErrors, FormFields},
        show::ShowForm,
    },
    server::{
        controller::invalid_form,
        error::AppError,
        middleware::session::FlashSession,
        model::show::CreateShowParams,
        service::show::ShowService,
        state::AppState,
    },
    view::{
        page::show::{ShowFormPage, ShowsPage},
        render::render_page,
    },
};

pub async fn list_shows(
    State(state): State<AppState>,
    session: Session,
) -> Result<Html<String>, AppError> {
    let flashes = FlashSession::new(&session).take().await?;
    let shows = ShowService::new(&state.db).get_all().await?;

    Ok(render_page("Shows", flashes, rsx! { ShowsPage { shows } }))
}

pub async fn create_show_form() -> Html<String> {
    form_page(ShowForm::default(), FieldErrors::new())
}

/// Lists a new show.
///
/// Unparseable fields re-render the form with 422. An artist or venue id that does
/// not exist is a 400. Database failures are flashed and redirect home.
pub async fn create_show(
    State(state): State<AppState>,
    session: Session,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let form = ShowForm::from_fields(&FormFields::new(fields));
    let params = match CreateShowParams::from_form(&form, Utc::now()) {
        Ok(params) => params,
        Err(errors) => return Ok(invalid_form(form_page(form, errors))),
    };

    let flash = FlashSession::new(&session);

    match ShowService::new(&state.db).create(params).await {
        Ok(show) => {
            tracing::info!(
                "Listed show {} (artist {}, venue {})",
                show.id,
                show.artist_id,
                show.venue_id
            );
            flash.push("Show was successfully listed!").await?;
        }
        Err(AppError::DbErr(e)) => {
            tracing::error!("Failed to list show: {}", e);
            flash
                .push("An error occurred. Show could not be listed.")
                .await?;
        }
        Err(e) => return Err(e),
    }

    Ok(Redirect::to("/").into_response())
}

fn form_page(form: ShowForm, errors: FieldErrors) -> Html<String> {
    render_page(
        "List a new show",
        Vec::new(),
        rsx! { ShowFormPage { form, errors } },
    )
}
