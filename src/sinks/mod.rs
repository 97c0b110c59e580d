//! Output sinks
//!
//! A sink is anything accepting byte writes. The logger writes each formatted
//! record to it in a single `write_all` call.

pub mod console;
pub mod file;
pub mod memory;

use std::fmt;
use std::io::Write;
use std::path::PathBuf;

pub use console::{stderr, stdout};
pub use file::open_file;
pub use memory::SharedBuffer;

/// Destination the logger writes formatted records to
pub type Sink = Box<dyn Write + Send>;

/// Output destination named in configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputTarget {
    #[default]
    Stdout,
    Stderr,
    File(PathBuf),
}

impl OutputTarget {
    /// `"stdout"` and `"stderr"` select the console streams, anything else is a path
    pub fn parse(output: &str) -> Self {
        match output {
            "stdout" => OutputTarget::Stdout,
            "stderr" => OutputTarget::Stderr,
            path => OutputTarget::File(PathBuf::from(path)),
        }
    }

    /// Open the destination, falling back to stdout if the file cannot be opened
    pub fn open(&self) -> Sink {
        match self {
            OutputTarget::Stdout => stdout(),
            OutputTarget::Stderr => stderr(),
            OutputTarget::File(path) => match open_file(path) {
                Ok(sink) => sink,
                Err(e) => {
                    eprintln!("[LOGGER ERROR] Error opening log file: {}", e);
                    stdout()
                }
            },
        }
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputTarget::Stdout => f.write_str("stdout"),
            OutputTarget::Stderr => f.write_str("stderr"),
            OutputTarget::File(path) => write!(f, "{}", path.display()),
        }
    }
}
