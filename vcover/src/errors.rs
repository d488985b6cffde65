// Copyright (c) The vcover Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Contains types that describe errors that `vcover` methods can return.

use std::error;
use std::fmt;
use std::io;

use Error::*;

/// Error type describing the sorts of errors `vcover` can return.
///
/// Parse errors and configuration errors are the only recoverable failures the crate
/// ever produces -- an internal invariant violation is a bug, and is reported through
/// `assert!`/`debug_assert!` rather than this type.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// A malformed edge-list line was encountered while building a graph.
    EdgeParseError {
        /// The line that failed to parse.
        line: String,
        /// Why it failed.
        reason: String,
    },
    /// An error occurred while reading a configuration file.
    ConfigIoError(io::Error),
    /// A configuration file line could not be parsed.
    ConfigParseError {
        /// The offending line.
        line: String,
        /// Why it failed.
        reason: String,
    },
    /// A vertex name was looked up but is not known to this graph.
    UnknownVertexName(String),
    /// An internal invariant of the solver was violated.
    ///
    /// Reaching this means there's a bug in `vcover` itself, not a problem with the
    /// input -- it is surfaced as an `Error` rather than a panic only at boundaries
    /// where recovering the process is cheaper than a hard abort (e.g. library use
    /// from a long-running service).
    GraphInternalError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeParseError { line, reason } => {
                write!(f, "malformed edge line '{}': {}", line, reason)
            }
            ConfigIoError(err) => write!(f, "error while reading config file: {}", err),
            ConfigParseError { line, reason } => {
                write!(f, "error while parsing config line '{}': {}", line, reason)
            }
            UnknownVertexName(name) => write!(f, "unknown vertex name: {}", name),
            GraphInternalError(msg) => write!(f, "internal error in vertex cover graph: {}", msg),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            ConfigIoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        ConfigIoError(err)
    }
}
