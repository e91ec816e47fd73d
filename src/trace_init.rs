#[cfg(feature = "trace")]
use std::path::Path;
#[cfg(feature = "trace")]
use std::sync::Once;

#[cfg(feature = "trace")]
static INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// With a log directory, events go to `baybayin-trace.jsonl` there as JSON
/// lines; without one, they go to stderr. `RUST_LOG` overrides the default
/// filter. Later calls are ignored.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: Option<&Path>) {
    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("baybayin_core=debug,baybayin_engine=debug")
        });
        match log_dir {
            Some(dir) => {
                let file_appender = tracing_appender::rolling::never(dir, "baybayin-trace.jsonl");
                let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
                std::mem::forget(guard); // flushed for the life of the process

                tracing_subscriber::fmt()
                    .json()
                    .with_writer(non_blocking)
                    .with_target(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .with_env_filter(filter)
                    .init();
            }
            None => {
                tracing_subscriber::fmt()
                    .with_writer(std::io::stderr)
                    .with_span_events(FmtSpan::CLOSE)
                    .with_env_filter(filter)
                    .init();
            }
        }
    });
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: Option<&std::path::Path>) {}
