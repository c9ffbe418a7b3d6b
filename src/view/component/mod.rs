pub mod flash;
pub mod form;
pub mod header;
pub mod layout;
pub mod search;
pub mod show_card;

pub use flash::FlashMessages;
pub use header::Header;
pub use layout::Document;
pub use search::SearchBox;
pub use show_card::ShowCard;
