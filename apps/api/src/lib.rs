//! Butter API: the HTTP service behind the recruitment site's contact form.
//!
//! One business endpoint (`POST /api/contact`, wired from the shared
//! contract), a health probe, optional hosting of the built site bundle,
//! and a pluggable sink that receives accepted leads.

pub mod config;
pub mod errors;
pub mod routes;
pub mod sink;
pub mod state;
