//! Console Logger
//!
//! Forwards `log` records (including the ones storefront-core emits) to the
//! browser console, tagged like the rest of the UI output.

use log::{Level, LevelFilter, Log, Metadata, Record};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

/// `[storefront_core::pricing] message`
fn console_line(target: &str, message: &str) -> String {
    format!("[{}] {}", target, message)
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line: wasm_bindgen::JsValue = console_line(record.target(), &record.args().to_string()).into();
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger. Debug builds also show cart traces.
pub fn init_logger() {
    let level = if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info };
    match log::set_logger(&LOGGER) {
        Ok(()) => log::set_max_level(level),
        Err(e) => web_sys::console::error_1(&format!("[APP] Logger already set: {}", e).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_line_tags_target() {
        assert_eq!(
            console_line("storefront_core::storage", "discarding corrupt cart snapshot"),
            "[storefront_core::storage] discarding corrupt cart snapshot"
        );
    }
}
