//! Mint interpreter driver.
//!
//! Wires lexing, parsing and execution together. The `mint` binary is a thin
//! wrapper over [`run_file`] and [`run_reader`].

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::Once;

use mint_eval::{Closure, RuntimeError, StreamContext};
use mint_parse::ParseError;
use thiserror::Error;

/// Anything that stops a program from running to completion.
#[derive(Debug, Error)]
pub enum MintError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("runtime error: {0}")]
    Runtime(#[from] RuntimeError),
}

/// Parse and run a program read from `input`, printing to `output`.
///
/// Returns the global scope the program finished with.
pub fn run_reader<R: BufRead>(input: R, output: &mut dyn Write) -> Result<Closure, MintError> {
    let program = mint_parse::parse(input)?;
    tracing::debug!(classes = program.classes.len(), "parsed; executing");
    let mut ctx = StreamContext::new(output);
    let globals = program.run(&mut ctx)?;
    tracing::debug!(globals = globals.len(), "finished");
    Ok(globals)
}

/// Parse and run a program held in memory.
pub fn run_source(source: &str, output: &mut dyn Write) -> Result<Closure, MintError> {
    run_reader(source.as_bytes(), output)
}

/// Parse and run the program in the file at `path`.
pub fn run_file(path: &Path, output: &mut dyn Write) -> Result<Closure, MintError> {
    tracing::debug!(path = %path.display(), "opening source");
    let file = File::open(path).map_err(|source| MintError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    run_reader(BufReader::new(file), output)
}

static TRACING_INIT: Once = Once::new();

/// Install the diagnostic subscriber.
///
/// Does nothing unless `RUST_LOG` is set (e.g. `RUST_LOG=mint_eval=debug`).
/// Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(EnvFilter::from_default_env())
                .with(
                    HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .init();
        }
    });
}
