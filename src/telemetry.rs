use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install a `tracing` subscriber for the SDK's log events.
///
/// Hosts that already install their own subscriber should skip this.
/// The filter comes from `RUST_LOG` (default `info`). When `WISHKIT_LOG`
/// names a file path, output goes there instead of stderr.
///
/// Calling this more than once, or after another subscriber was set, is a
/// no-op.
pub fn init_tracing() {
    // Checked first so a repeated call does not truncate the log file.
    if tracing::dispatcher::has_been_set() {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Some(log_path) = std::env::var("WISHKIT_LOG").ok() else {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_level(true)
            .with_timer(fmt::time::UtcTime::rfc_3339())
            .with_writer(std::io::stderr)
            .try_init();
        return;
    };

    let Ok(file) = std::fs::File::create(&log_path) else {
        eprintln!("Warning: Failed to create log file: {}", log_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_survives_second_init() {
        let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let log_path = temp_dir.path().join("wishkit.log");
        std::env::set_var("WISHKIT_LOG", &log_path);

        init_tracing();
        tracing::warn!("first session event");
        init_tracing();
        tracing::warn!("second session event");

        let contents = std::fs::read_to_string(&log_path).expect("log file written");
        assert!(contents.contains("first session event"));
        assert!(contents.contains("second session event"));
        assert!(contents.contains("WARN"));
    }
}
