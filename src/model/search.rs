use crate::model::form::FormFields;

/// Search box submission. An empty term matches every record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchForm {
    pub search_term: String,
}

impl SearchForm {
    pub fn from_fields(fields: &FormFields) -> Self {
        Self {
            search_term: fields.text("search_term"),
        }
    }
}
