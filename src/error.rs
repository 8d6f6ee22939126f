use std::path::PathBuf;

/// Errors raised outside the editor core.
///
/// The core itself never fails: bad dimensions clamp, out-of-range cells
/// are ignored and unknown glyphs render blank.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid color '{0}'")]
    InvalidColor(String),

    #[error("unknown demo '{0}' (expected clock, marquee, spinner, bouncer or typewriter)")]
    UnknownDemo(String),

    #[error("failed to write SVG to {path}")]
    SvgWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
