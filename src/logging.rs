//! Console output plus an optional daily-rolling JSON file, filtered by
//! `RUST_LOG` layered over the configured directive.

use std::fs;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LoggingConfig;

/// `RUST_LOG` filter with `directive` added on top; an unparsable directive is skipped
pub fn env_filter(directive: &str) -> EnvFilter {
    let filter = EnvFilter::from_default_env();
    match directive.parse::<Directive>() {
        Ok(directive) => filter.add_directive(directive),
        Err(e) => {
            eprintln!("Ignoring log directive '{}': {}", directive, e);
            filter
        }
    }
}

/// Install the global subscriber. A second call is a no-op.
pub fn init_logging(config: &LoggingConfig) {
    let file_layer = config.file_output.then(|| {
        if let Err(e) = fs::create_dir_all(&config.directory) {
            eprintln!("Could not create log directory {}: {}", config.directory, e);
        }
        let file_appender = tracing_appender::rolling::daily(&config.directory, &config.file_name);
        let (writer, guard) = tracing_appender::non_blocking(file_appender);
        // Flushes on drop, so it has to outlive every log call
        std::mem::forget(guard);
        fmt::layer().json().with_writer(writer)
    });
    let console_layer = fmt::layer().with_writer(std::io::stdout);

    let _ = tracing_subscriber::registry()
        .with(env_filter(&config.directive))
        .with(console_layer)
        .with(file_layer)
        .try_init();
}

#[cfg(test)]
pub(crate) mod capture {
    use std::io;
    use std::sync::{Arc, Mutex};

    use tracing_subscriber::{fmt, EnvFilter};

    /// In-memory log sink for asserting on emitted events
    #[derive(Clone, Default)]
    pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        /// Plain-text subscriber at the crate's default level writing into this sink
        pub fn subscriber(&self) -> impl tracing::Subscriber + Send + Sync {
            let sink = self.clone();
            fmt()
                .with_env_filter(EnvFilter::new(crate::constants::DEFAULT_LOG_DIRECTIVE))
                .with_ansi(false)
                .with_writer(move || sink.clone())
                .finish()
        }

        pub fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }
}
