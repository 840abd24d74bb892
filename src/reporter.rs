const PREFIX: &str = "[compress-dist]";

/// Human-facing progress messages
///
/// Reporting is observational only: nothing a reporter does (or fails to do)
/// changes the outcome of a hook.
pub trait Reporter {
    fn info(&self, message: &str);
    fn start(&self, message: &str);
    fn success(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// Prints to the terminal through `cliclack`
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

fn prefixed(message: &str) -> String {
    format!("{} {}", PREFIX, message)
}

impl Reporter for ConsoleReporter {
    fn info(&self, message: &str) {
        let _ = cliclack::log::info(prefixed(message));
    }

    fn start(&self, message: &str) {
        let _ = cliclack::log::step(prefixed(message));
    }

    fn success(&self, message: &str) {
        let _ = cliclack::log::success(prefixed(message));
    }

    fn warn(&self, message: &str) {
        let _ = cliclack::log::warning(prefixed(message));
    }

    fn error(&self, message: &str) {
        let _ = cliclack::log::error(prefixed(message));
    }
}

/// Format a byte count with 1024-based units labelled `KB`, `MB`, ...
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 7] = ["B", "KB", "MB", "GB", "TB", "PB", "EB"];

    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    // Rounding can carry into the next unit (1023.999 KB is 1 MB).
    if (value * 100.0).round() / 100.0 >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let formatted = format!("{:.2}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, UNITS[unit])
}
