use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info", "warn",
/// "glbridge_engine=debug"). On wasm32 only the global level applies:
/// `level` is used and `env_filter` is ignored.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub level: log::Level,
    /// Install a panic hook that forwards panics to the browser console.
    pub panic_hook: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            level: log::Level::Info,
            panic_hook: true,
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// This function is idempotent; subsequent calls are ignored.
/// Intended usage is at module start, before the context is created.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        install(config);
        log::debug!("logging initialized");
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn install(config: LoggingConfig) {
    let mut builder = env_logger::Builder::new();

    if let Some(filter) = config.env_filter {
        builder.parse_filters(&filter);
    } else if let Ok(filter) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filter);
    } else {
        builder.filter_level(config.level.to_level_filter());
    }

    // Another logger may already be installed (e.g. by a test harness).
    let _ = builder.try_init();
}

#[cfg(target_arch = "wasm32")]
fn install(config: LoggingConfig) {
    if config.panic_hook {
        console_error_panic_hook::set_once();
    }
    let _ = console_log::init_with_level(config.level);
}
