use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the global logger once, subsequent calls are ignored.
///
/// `RUST_LOG` takes precedence over `default_level`.
pub fn init_logging(default_level: log::LevelFilter) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(default_level);
        }

        builder.init();

        log::debug!("logging initialized");
    });
}
