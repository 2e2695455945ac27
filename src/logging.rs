use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install a compact stderr subscriber for the CLI.
///
/// `RUST_LOG` takes precedence; otherwise `verbose` picks between debug and
/// warn for this crate. A second call is a no-op.
pub fn init_cli_logger(verbose: bool) {
    let default_directive = if verbose {
        "fengshui_catalog=debug,warn"
    } else {
        "fengshui_catalog=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init();
}
