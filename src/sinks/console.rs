//! Console sinks

use super::Sink;

/// Standard output; each record is written with one `write_all`
pub fn stdout() -> Sink {
    Box::new(std::io::stdout())
}

/// Standard error
pub fn stderr() -> Sink {
    Box::new(std::io::stderr())
}
