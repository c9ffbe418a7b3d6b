use thiserror::Error;

/// Internal issues indicating unexpected behavior and possible bugs.
#[derive(Error, Debug)]
pub enum InternalError {
    /// A show row references an artist or venue that could not be loaded.
    ///
    /// Foreign keys should make this impossible. Results in a 500 Internal
    /// Server Error with a generic page returned to the client.
    #[error("Show {show_id} references a missing {relation}")]
    DanglingShow {
        /// Id of the show row.
        show_id: i32,
        /// Which side of the relation is missing.
        relation: &'static str,
    },
}
