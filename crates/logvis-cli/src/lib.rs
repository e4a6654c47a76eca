#![forbid(unsafe_code)]

//! Line-oriented command-line front end for logvis.
//!
//! Reads a file (or stdin), decodes each line through the selected charset,
//! reorders it into visual order, and prints the result. Right-to-left
//! lines are right-adjusted to the text width unless padding is disabled.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use logvis_charsets::Charset;
use logvis_core::{BaseDirection, Direction, ResolveRequest, resolve};

mod error;

pub use error::{CliError, Result};

#[derive(Debug, Parser)]
#[command(
    name = "logvis",
    about = "Reorder bidirectional text from logical to visual order, one line at a time",
    version
)]
pub struct Cli {
    /// Input file; reads stdin when omitted.
    pub file: Option<PathBuf>,

    /// Force the base direction to right-to-left.
    #[arg(long, conflicts_with = "ltr")]
    pub rtl: bool,

    /// Force the base direction to left-to-right.
    #[arg(long, conflicts_with = "rtl")]
    pub ltr: bool,

    /// Input/output character set.
    #[arg(long, default_value_t = Charset::CapRtl)]
    pub charset: Charset,

    /// Text width used to right-adjust RTL lines.
    #[arg(long, default_value_t = 80)]
    pub width: usize,

    /// Do not right-adjust RTL lines.
    #[arg(long = "nopad")]
    pub no_pad: bool,

    /// String printed at the start of every line.
    #[arg(long)]
    pub bol: Option<String>,

    /// String printed at the end of every line.
    #[arg(long)]
    pub eol: Option<String>,

    /// Print resolved embedding levels under each line.
    #[arg(long)]
    pub levels: bool,
}

impl Cli {
    fn base_direction(&self) -> BaseDirection {
        if self.rtl {
            BaseDirection::Rtl
        } else if self.ltr {
            BaseDirection::Ltr
        } else {
            BaseDirection::Auto
        }
    }
}

pub fn run_from_env() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
    run(Cli::parse())
}

pub fn run(cli: Cli) -> Result<()> {
    let reader: Box<dyn Read> = match &cli.file {
        Some(path) => Box::new(File::open(path).map_err(|source| CliError::ReadInput {
            path: path.clone(),
            source,
        })?),
        None => Box::new(io::stdin()),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in ByteLines::new(BufReader::new(reader)) {
        let line = line?;
        let rendered = render_line(&cli, &line)?;
        out.write_all(&rendered)?;
        out.write_all(b"\n")?;
    }
    Ok(())
}

/// Decode, reorder, and re-encode one line, with padding and the bol/eol
/// decorations applied.
fn render_line(cli: &Cli, line: &[u8]) -> Result<Vec<u8>> {
    let chars = cli.charset.decode(line);
    debug!(len = chars.len(), charset = %cli.charset, "line decoded");

    let request = ResolveRequest {
        visual: true,
        levels: cli.levels,
        ..Default::default()
    };
    let resolved = resolve(&chars, cli.base_direction(), request)?;
    let visual = resolved.visual.unwrap_or_default();

    let mut out = Vec::with_capacity(line.len() + 16);
    if let Some(bol) = &cli.bol {
        out.extend_from_slice(bol.as_bytes());
    }
    if resolved.direction == Direction::Rtl && !cli.no_pad {
        let pad = cli.width.saturating_sub(chars.len());
        out.extend(std::iter::repeat_n(b' ', pad));
    }
    out.extend_from_slice(&cli.charset.encode(&visual));
    if let Some(eol) = &cli.eol {
        out.extend_from_slice(eol.as_bytes());
    }

    if cli.levels {
        let levels = resolved.levels.unwrap_or_default();
        out.extend_from_slice(b"\nlevels:");
        for level in levels {
            out.extend_from_slice(format!(" {level}").as_bytes());
        }
    }
    Ok(out)
}

/// Line iterator over raw bytes. `BufRead::lines` assumes UTF-8, which the
/// single-byte charsets are not.
struct ByteLines<R: BufRead> {
    reader: R,
}

impl<R: BufRead> ByteLines<R> {
    fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> Iterator for ByteLines<R> {
    type Item = io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut buf = Vec::new();
        match self.reader.read_until(b'\n', &mut buf) {
            Ok(0) => None,
            Ok(_) => {
                if buf.last() == Some(&b'\n') {
                    buf.pop();
                    if buf.last() == Some(&b'\r') {
                        buf.pop();
                    }
                }
                Some(Ok(buf))
            }
            Err(e) => Some(Err(e)),
        }
    }
}
