//! Debug driver for the IDL front end.
//!
//! Reads an IDL file, lexes it, and prints either the token stream or the
//! parsed module tree. The binary in `main.rs` is a thin wrapper around
//! [`run`].

pub mod dump;
mod options;

pub use options::{Options, UsageError};

use std::fmt;
use std::io::{self, Write};
use std::sync::Once;

use idl_ir::Span;
use idl_parse::FrontEndError;
use thiserror::Error;
use tracing::debug;

static TRACING_INIT: Once = Once::new();

/// Install the `tracing` subscriber, filtered by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

/// Failure of a driver run.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("cannot read '{path}': {source}")]
    Read { path: String, source: io::Error },
    #[error(transparent)]
    FrontEnd(#[from] FrontEndError),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Read a source file. Invalid UTF-8 is replaced rather than rejected.
pub fn read_source(path: &str) -> Result<String, DriverError> {
    let bytes = std::fs::read(path).map_err(|source| DriverError::Read {
        path: path.to_owned(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Lex `source` and dump what `options` asks for to `out`.
pub fn run(options: &Options, source: &str, out: &mut dyn Write) -> Result<(), DriverError> {
    let tokens = idl_lexer::lex(source).map_err(FrontEndError::from)?;
    if options.tokens {
        dump::tokens(&tokens, out)?;
        return Ok(());
    }

    let tree = idl_parse::parse(&tokens).map_err(FrontEndError::from)?;
    debug!(path = %options.path, modules = tree.module_count(), "dumping module tree");
    dump::tree(&tree, out)?;
    Ok(())
}

/// Render a diagnostic as `path:line:col: error: message`, followed by the
/// offending source line and a caret under the error position.
pub fn render_error(path: &str, source: &str, span: Span, message: &dyn fmt::Display) -> String {
    let pos = span.line_col(source);
    let mut rendered = format!("{path}:{pos}: error: {message}");

    let line_index = pos.line.saturating_sub(1) as usize;
    if let Some(text) = source.lines().nth(line_index) {
        let column = pos.column.saturating_sub(1) as usize;
        rendered.push('\n');
        rendered.push_str(&format!("  {text}\n  {:column$}^", ""));
    }
    rendered
}
