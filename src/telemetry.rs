//! Opt-in `tracing` bootstrap.
//!
//! Rendering only emits events (`debug!` per frame, `trace!` per axis and
//! curve, `warn!` for unmatched legend/color keys). Hosts that already run a
//! subscriber need nothing from here.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_TRACING_DIRECTIVE: &str = "density_chart=info";

/// Installs a stderr subscriber filtered by `RUST_LOG` or [`DEFAULT_TRACING_DIRECTIVE`].
///
/// Returns `false` without the `telemetry` feature, or when a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_directive(DEFAULT_TRACING_DIRECTIVE)
}

/// Same as [`init_default_tracing`] with a caller-chosen fallback directive.
///
/// An unparsable directive is reported as `false` rather than a panic.
#[must_use]
pub fn init_tracing_with_directive(directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let Ok(filter) = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(directive))
        else {
            return false;
        };

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = directive;
        false
    }
}
