//! Line Service
//!
//! Reads transcripts from stdin, one per line, and writes one JSON response
//! per line to stdout. Logging goes to stderr.

pub mod session;
pub mod watcher;

use std::borrow::Cow;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::RwLock;

pub use session::{Response, Session};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::parser::CommandParser;

/// Parser shared between the line loop and the lexicon watcher
pub type SharedParser = Arc<RwLock<CommandParser>>;

/// Run the service on stdin/stdout
pub async fn serve(config: &Config, watch: bool) -> Result<()> {
    let parser: SharedParser = Arc::new(RwLock::new(config.build_parser()?));

    let _watcher = match (&config.lexicon_path, watch) {
        (Some(path), true) => Some(watcher::watch_lexicon(
            path.clone(),
            config.keyword_match,
            parser.clone(),
        )?),
        (None, true) => {
            log::warn!("--watch has no effect without a lexicon file");
            None
        }
        _ => None,
    };

    log::info!("Reading transcripts from stdin");
    run(
        parser,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    )
    .await
}

/// Answer every non-empty line of `reader` until end of input
///
/// Lines that are not valid UTF-8 are decoded lossily rather than ending
/// the session.
pub async fn run<R, W>(parser: SharedParser, mut reader: R, mut writer: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut session = Session::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .await
            .context("Failed to read transcript")?;
        if read == 0 {
            break;
        }

        let line = String::from_utf8_lossy(&buf);
        if let Cow::Owned(_) = line {
            log::warn!("Transcript is not valid UTF-8, decoding lossily");
        }
        let transcript = line.trim();
        if transcript.is_empty() {
            continue;
        }

        let response = {
            let parser = parser.read().await;
            session.handle(&parser, Catalog::shared(), transcript)
        };

        let mut out = serde_json::to_string(&response)?;
        out.push('\n');
        writer
            .write_all(out.as_bytes())
            .await
            .context("Failed to write response")?;
        writer.flush().await?;
    }

    log::info!("End of input, {} items on the list", session.list().items().len());
    Ok(())
}
