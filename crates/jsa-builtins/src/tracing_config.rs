//! Log subscriber setup for hosts embedding the builtin layer.
//!
//! Catalogue construction and dispatch emit `tracing` events (`debug!` for
//! precision losses such as a non-constant `require` argument, `trace!` for
//! every synthetic call). Hosts that do not install a subscriber of their own
//! can call [`init_tracing`]:
//!
//! ```bash
//! # Why did this require resolve to nothing?
//! JSA_LOG=jsa_builtins=debug my-analyzer app.js
//!
//! # Indented span tree, one level per nested synthetic call
//! JSA_LOG=trace JSA_LOG_FORMAT=tree my-analyzer app.js
//!
//! # Newline-delimited JSON for tooling
//! JSA_LOG=debug JSA_LOG_FORMAT=json my-analyzer app.js
//! ```
//!
//! `JSA_LOG` wins over `RUST_LOG`. With neither set nothing is installed.
//! Output always goes to stderr.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Environment variable holding the filter directives.
pub const LOG_ENV: &str = "JSA_LOG";
/// Environment variable selecting the output format.
pub const LOG_FORMAT_ENV: &str = "JSA_LOG_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Flat `fmt` lines.
    #[default]
    Text,
    /// Hierarchical output via `tracing-tree`.
    Tree,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    /// Case-insensitive; anything unrecognized is `Text`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        std::env::var(LOG_FORMAT_ENV)
            .map(|value| Self::parse(&value))
            .unwrap_or_default()
    }
}

/// Filter directives from `JSA_LOG`, else `RUST_LOG`, else `None`.
fn filter_from_env() -> Option<EnvFilter> {
    match std::env::var(LOG_ENV) {
        Ok(directives) => Some(EnvFilter::builder().parse_lossy(directives)),
        Err(_) if std::env::var("RUST_LOG").is_ok() => Some(EnvFilter::from_default_env()),
        Err(_) => None,
    }
}

/// Install a global subscriber configured from the environment.
///
/// Returns `false` when logging is not requested or another subscriber is
/// already installed.
pub fn init_tracing() -> bool {
    let Some(filter) = filter_from_env() else {
        return false;
    };

    match LogFormat::from_env() {
        LogFormat::Tree => {
            let tree = tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_deferred_spans(true)
                .with_targets(true);
            Registry::default().with(filter).with(tree).try_init().is_ok()
        }
        LogFormat::Json => {
            let json = fmt::layer().json().with_writer(std::io::stderr);
            Registry::default().with(filter).with(json).try_init().is_ok()
        }
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .is_ok(),
    }
}

#[cfg(test)]
#[path = "../tests/tracing_config_tests.rs"]
mod tests;
