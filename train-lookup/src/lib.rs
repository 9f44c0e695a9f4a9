//! Train lookup server.
//!
//! A small web front-end: the user enters a 5-digit train number, the server
//! asks a third-party train API about it, and the raw answer (or a friendly
//! error) is rendered back as a page.

pub mod config;
pub mod domain;
pub mod logging;
pub mod upstream;
pub mod web;
