const DEFAULT_FILTER: &str = "survey_portfolio=info";

#[cfg(not(target_arch = "wasm32"))]
pub fn init_server_logger() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .try_init();
}

#[cfg(target_arch = "wasm32")]
pub use console::init_browser_logger;

#[cfg(target_arch = "wasm32")]
mod console {
    use super::DEFAULT_FILTER;
    use std::io;
    use tracing_subscriber::{
        fmt::MakeWriter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
    };

    /// Buffers one formatted event and hands it to `console.log` on drop.
    pub struct ConsoleWriter {
        buffer: Vec<u8>,
    }

    impl io::Write for ConsoleWriter {
        fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
            self.buffer.extend_from_slice(bytes);
            Ok(bytes.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            let line = String::from_utf8_lossy(&self.buffer);
            let line = line.trim_end();
            if !line.is_empty() {
                web_sys::console::log_1(&line.into());
            }
        }
    }

    pub struct Console;

    impl<'a> MakeWriter<'a> for Console {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleWriter { buffer: Vec::new() }
        }
    }

    pub fn init_browser_logger() {
        let _ = tracing_subscriber::registry()
            .with(EnvFilter::new(DEFAULT_FILTER))
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(Console)
                    .with_ansi(false)
                    .without_time()
                    .with_target(false),
            )
            .try_init();
    }
}
