use crate::model::form::{FieldErrors, FormFields};

/// Artist create/edit form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArtistForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub genres: Vec<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

impl ArtistForm {
    pub fn from_fields(fields: &FormFields) -> Self {
        Self {
            name: fields.text("name"),
            city: fields.text("city"),
            state: fields.text("state"),
            phone: fields.optional("phone"),
            image_link: fields.optional("image_link"),
            genres: fields.all("genres"),
            facebook_link: fields.optional("facebook_link"),
            website_link: fields.optional("website_link"),
            seeking_venue: fields.flag("seeking_venue"),
            seeking_description: fields.optional("seeking_description"),
        }
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        errors.require("name", &self.name);
        errors.require("city", &self.city);
        errors.require("state", &self.state);
        errors.check_state("state", &self.state);
        errors.check_phone("phone", self.phone.as_deref());
        errors.check_genres("genres", &self.genres);
        errors.check_url("image_link", self.image_link.as_deref());
        errors.check_url("facebook_link", self.facebook_link.as_deref());
        errors.check_url("website_link", self.website_link.as_deref());

        errors.into_result()
    }
}
