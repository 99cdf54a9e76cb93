use tracing_subscriber::EnvFilter;

use crate::args::LogArgs;

pub mod http;

/// Installs the global subscriber. `RUST_LOG` takes precedence over `--log-level`.
pub fn init_logger(args: &LogArgs) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.filter));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);

    if args.json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}
