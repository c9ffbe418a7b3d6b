use crate::server::{
    data::artist::ArtistRepository,
    model::artist::{CreateArtistParams, UpdateArtistParams},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod get_recent;
mod search_by_name;
mod update;

fn artist_params(name: &str) -> CreateArtistParams {
    CreateArtistParams {
        name: name.to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        phone: Some("326-123-5000".to_string()),
        website: Some("https://www.gunsnpetalsband.com".to_string()),
        facebook_link: Some("https://www.facebook.com/GunsNPetals".to_string()),
        image_link: None,
        genres: vec!["Rock n Roll".to_string()],
        seeking_venue: true,
        seeking_description: Some("Looking for shows to perform at in the San Francisco Bay Area!".to_string()),
    }
}
