//! Error types for the LearnOpenGL sandbox
//!
//! Every error in this crate is recoverable: shader setup failures leave the
//! previous program in place, and asset read failures are logged and skipped.

use std::fmt;
use std::path::PathBuf;

use crate::device::ShaderStage;

/// Result type for sandbox operations
pub type Result<T> = std::result::Result<T, Error>;

/// Sandbox errors
#[derive(Debug, Clone)]
pub enum Error {
    /// A shader stage was rejected by the compiler
    ShaderCompile {
        /// Stage that failed
        stage: ShaderStage,
        /// Compiler diagnostic text
        log: String,
    },

    /// Both stages compiled but the program failed to link
    ShaderLink {
        /// Linker diagnostic text
        log: String,
    },

    /// A shader source file could not be read
    ResourceLoad {
        /// Path that was requested
        path: PathBuf,
        /// IO error description
        reason: String,
    },

    /// Device-side object allocation failed
    Backend(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ShaderCompile { stage, log } => {
                write!(f, "{:?} shader compilation failed: {}", stage, log.trim_end())
            }
            Error::ShaderLink { log } => write!(f, "Shader program link failed: {}", log.trim_end()),
            Error::ResourceLoad { path, reason } => {
                write!(f, "Failed to read '{}': {}", path.display(), reason)
            }
            Error::Backend(msg) => write!(f, "Backend error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Log an ERROR with file:line and return `Err(Error::Backend(..))`
///
/// # Example
///
/// ```ignore
/// lgl_bail!("lgl::HeadlessDevice", "program {:?} does not exist", program);
/// ```
#[macro_export]
macro_rules! lgl_bail {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::lgl_error!($source, "{}", message);
        return Err($crate::lgl::Error::Backend(message));
    }};
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
