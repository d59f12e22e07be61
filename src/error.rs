use std::path::PathBuf;

use thiserror::Error;

use crate::NodeId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("no node with id {0:?} in this circuit")]
    UnknownNode(NodeId),

    #[error("node '{0}' is an input and cannot take upstream nodes")]
    NotAGate(String),

    #[error("gate '{node}' uses {combinator} which takes {expected} inputs, got {got}")]
    Arity {
        node: String,
        combinator: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("{name} must be finite and positive, got {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("no preset named '{0}'")]
    UnknownPreset(String),

    #[error("bad preset header '{0}', expected 'name,ymax,ymin,K,n,equation'")]
    PresetHeader(String),

    #[error("preset line {line}: {reason}")]
    PresetRow { line: usize, reason: String },

    #[error("failed to parse config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Passes `value` through when it is finite and strictly positive.
pub(crate) fn positive(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(Error::InvalidParameter { name, value })
    }
}
