// 📜 Logging - tracing subscriber setup for the binaries
//
// The library only emits `tracing` events; installing a subscriber is the
// binary's job.

use tracing_subscriber::{fmt, EnvFilter};

/// Build the filter directive for a base level, e.g. "debug"
///
/// `RUST_LOG` wins when set.
pub fn filter_directive(base_level: Option<&str>) -> String {
    let base_level = base_level.unwrap_or("info");
    format!("artist_marketplace={base_level},marketplace={base_level},marketplace_server={base_level},tower_http=warn,axum=warn")
}

/// Install a compact stdout subscriber; safe to call more than once
pub fn init(base_level: Option<&str>) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(base_level)));

    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive_uses_base_level() {
        let directive = filter_directive(Some("debug"));
        assert!(directive.starts_with("artist_marketplace=debug"));
        assert!(directive.contains("tower_http=warn"));

        assert!(filter_directive(None).contains("marketplace=info"));
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init(Some("warn"));
        init(None);
    }
}
