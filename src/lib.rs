#![doc(test(attr(deny(warnings))))]

//! Buildino Core offers the calendar, unit, and monthly-charge primitives that
//! power the building-management dashboard and its issuance workflows.

pub mod calendar;
pub mod charge;
pub mod config;
pub mod domain;
pub mod errors;
pub mod services;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("buildino_core=info".parse().unwrap());
        fmt().with_env_filter(filter).init();
        tracing::info!("Buildino Core tracing initialized.");
    });
}
