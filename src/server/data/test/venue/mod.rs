use crate::server::{
    data::venue::VenueRepository,
    model::venue::{CreateVenueParams, UpdateVenueParams},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod get_recent;
mod search_by_name;
mod update;

fn venue_params(name: &str) -> CreateVenueParams {
    CreateVenueParams {
        name: name.to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        address: "1015 Folsom Street".to_string(),
        phone: Some("123-123-1234".to_string()),
        website: Some("https://www.themusicalhop.com".to_string()),
        facebook_link: None,
        image_link: None,
        genres: vec!["Jazz".to_string(), "Reggae".to_string()],
        seeking_talent: true,
        seeking_description: Some("We are on the lookout for a local artist".to_string()),
    }
}
