//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Initialize the tracing subscriber.
///
/// `IMMO_LOG` takes precedence, e.g. `IMMO_LOG=immo_features=debug`.
/// Otherwise `default_directive` is used, and if that does not parse,
/// the compiled default filter.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing(default_directive: Option<&str>) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .or_else(|_| EnvFilter::try_new(default_directive.unwrap_or(DEFAULT_LOG_FILTER)))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_line_number(true),
            )
            .with(filter)
            .init();
    });
}
