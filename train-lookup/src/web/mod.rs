//! Web layer for the train lookup front-end.
//!
//! Provides the search form, the two lookup endpoints and the rendered
//! result page.

mod dto;
mod error;
mod routes;
mod state;
mod templates;

pub use dto::SubmitForm;
pub use error::{InputSource, PageError};
pub use routes::create_router;
pub use state::AppState;
pub use templates::*;
