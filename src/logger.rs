use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// `RUST_LOG` wins; otherwise progress is shown only with `--verbose`.
pub fn init(verbose: bool) {
    let tracing_subscriber = tracing_subscriber::registry();
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let fmt = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_timer(ChronoLocal::new("%H:%M:%S%.3f".to_owned()))
        .with_target(false);
    tracing_subscriber.with(filter).with(fmt).init();
}
