//! Lexicon File Watching
//!
//! Rebuilds the shared parser whenever the user lexicon file changes.
//! A file that fails to load leaves the previous parser in place.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use super::SharedParser;
use crate::lexicon::Lexicon;
use crate::parser::{CommandParser, KeywordMatch};

/// Events forwarded from the notify callback
#[derive(Debug)]
enum WatcherEvent {
    LexiconChanged,
    WatcherError(notify::Error),
}

/// Keeps the underlying watcher alive; dropping it stops reloads
pub struct LexiconWatcher {
    _watcher: RecommendedWatcher,
}

/// Start watching `path` and swap a rebuilt parser into `parser` on change
pub fn watch_lexicon(
    path: PathBuf,
    keyword_match: KeywordMatch,
    parser: SharedParser,
) -> Result<LexiconWatcher> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let file_name = path.file_name().map(|n| n.to_os_string());

    let mut watcher = RecommendedWatcher::new(
        move |res: Result<Event, notify::Error>| match res {
            Ok(event) => {
                if let EventKind::Create(_) | EventKind::Modify(_) = event.kind {
                    let touches_lexicon = event
                        .paths
                        .iter()
                        .any(|p| p.file_name().map(|n| n.to_os_string()) == file_name);
                    if touches_lexicon {
                        let _ = tx.send(WatcherEvent::LexiconChanged);
                    }
                }
            }
            Err(e) => {
                let _ = tx.send(WatcherEvent::WatcherError(e));
            }
        },
        Config::default().with_poll_interval(Duration::from_secs(1)),
    )?;

    // Editors often replace the file, so watch its directory instead
    let dir = watch_dir(&path);
    watcher
        .watch(&dir, RecursiveMode::NonRecursive)
        .with_context(|| format!("Failed to watch lexicon directory: {}", dir.display()))?;
    log::info!("Watching lexicon file {}", path.display());

    tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            match event {
                WatcherEvent::LexiconChanged => match reload(&path, keyword_match).await {
                    Ok(rebuilt) => {
                        log::info!("Reloaded lexicon '{}'", rebuilt.lexicon().name);
                        *parser.write().await = rebuilt;
                    }
                    Err(e) => {
                        log::warn!("Keeping previous lexicon: {:#}", e);
                    }
                },
                WatcherEvent::WatcherError(e) => {
                    log::warn!("Lexicon watcher error: {}", e);
                }
            }
        }
    });

    Ok(LexiconWatcher { _watcher: watcher })
}

/// Load the lexicon file and build a fresh parser around it
pub async fn reload(path: &Path, keyword_match: KeywordMatch) -> Result<CommandParser> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read lexicon file: {}", path.display()))?;
    let user = Lexicon::from_toml_str(&content)
        .with_context(|| format!("Invalid lexicon file: {}", path.display()))?;

    let mut lexicon = (*Lexicon::shared()).clone();
    lexicon.merge(user);
    Ok(CommandParser::new(Arc::new(lexicon)).with_keyword_match(keyword_match))
}

fn watch_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
