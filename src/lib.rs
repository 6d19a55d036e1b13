#![doc(test(attr(deny(warnings))))]

//! templet instantiates text templates from a per-user directory into the
//! current working directory, optionally date-prefixing the new file and
//! stamping prose files with a short header.

pub mod catalog;
pub mod cli;
pub mod command;
pub mod config;
pub mod errors;
pub mod instantiate;
pub mod selection;
pub mod session;
pub mod time;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("templet tracing initialized");
    });
}
