use crate::server::{data::show::ShowRepository, model::show::CreateShowParams};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::show::ShowFactory};

mod count_upcoming;
mod create;
mod get_all_with_relations;
mod get_by_artist_with_venue;
mod get_by_venue_with_artist;
