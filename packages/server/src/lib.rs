// Text summarization service - API core
//
// Accepts raw (possibly HTML) text over HTTP and returns a short summary
// produced by the configured backend (LSA extraction or a generative model).

pub mod config;
pub mod server;

pub use config::*;
