use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Process-wide log setup. `--debug` forces debug level; otherwise
/// `RUST_LOG` decides, defaulting to warnings only.
pub struct Logger {
    debug: bool,
}

impl Logger {
    pub fn init(debug: bool) {
        let _ = LOGGER.get_or_init(|| {
            let filter = if debug {
                EnvFilter::new("debug")
            } else {
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
            };
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .without_time()
                .with_target(false)
                .try_init();
            Logger { debug }
        });
    }

    pub fn is_debug() -> bool {
        LOGGER.get().is_some_and(|logger| logger.debug)
    }
}

#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}
