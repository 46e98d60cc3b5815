use anyhow::{Context, Result};
use colored::Colorize;
use notify::event::ModifyKind;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use pageparams::{build, is_page_file, BuildOptions};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, warn};

/// Kind of file change that schedules a rebuild
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Created,
    Modified,
    Removed,
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ChangeKind::Created => "created",
            ChangeKind::Modified => "modified",
            ChangeKind::Removed => "removed",
        };
        f.write_str(label)
    }
}

/// A relevant change under the pages root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageChange {
    pub kind: ChangeKind,
    pub path: PathBuf,
}

/// Decides which raw watcher events concern the page tree
#[derive(Debug, Clone)]
pub struct WatchScope {
    extensions: Vec<String>,
    artifact: PathBuf,
}

impl WatchScope {
    pub fn new(options: &BuildOptions) -> Self {
        Self {
            extensions: options.extensions.clone(),
            artifact: options.artifact_path(),
        }
    }

    /// Extracts page changes from a watcher event
    ///
    /// Page files count for every create/modify/remove. Directories count
    /// too, since renaming or removing one changes segments without any page
    /// file event. The artifact itself never counts.
    pub fn changes(&self, event: &Event) -> Vec<PageChange> {
        let (kind, vanished) = match event.kind {
            EventKind::Create(_) => (ChangeKind::Created, false),
            EventKind::Remove(_) => (ChangeKind::Removed, true),
            EventKind::Modify(ModifyKind::Metadata(_)) => return Vec::new(),
            EventKind::Modify(ModifyKind::Name(_)) => (ChangeKind::Modified, true),
            EventKind::Modify(_) => (ChangeKind::Modified, false),
            _ => return Vec::new(),
        };

        event
            .paths
            .iter()
            .filter(|path| self.is_relevant(path, vanished))
            .map(|path| PageChange {
                kind,
                path: path.clone(),
            })
            .collect()
    }

    fn is_relevant(&self, path: &Path, vanished: bool) -> bool {
        if path == self.artifact {
            return false;
        }
        is_page_file(path, &self.extensions)
            || path.is_dir()
            || (vanished && looks_like_directory(path))
    }
}

// Removed or renamed directories can no longer be stat'ed; `[...slug]` has a fake extension
fn looks_like_directory(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    if name.starts_with('.') {
        return false;
    }
    path.extension().is_none() || (name.starts_with('[') && name.ends_with(']'))
}

/// Waits for the next change, then gathers the burst that follows it
///
/// The batch closes once no change arrives for `window`. A zero window
/// returns every change as its own batch. Returns `None` once the sender is gone.
pub async fn next_batch(
    rx: &mut mpsc::Receiver<PageChange>,
    window: Duration,
) -> Option<Vec<PageChange>> {
    let first = rx.recv().await?;
    let mut batch = vec![first];

    if window.is_zero() {
        return Some(batch);
    }

    while let Ok(Some(change)) = tokio::time::timeout(window, rx.recv()).await {
        batch.push(change);
    }

    Some(batch)
}

/// Single worker: one rebuild per batch, each awaited before the next batch
async fn rebuild_loop(mut rx: mpsc::Receiver<PageChange>, options: Arc<BuildOptions>) {
    while let Some(batch) = next_batch(&mut rx, options.debounce).await {
        for change in &batch {
            println!(
                "{} Page {}: {}",
                "🔄".yellow(),
                change.kind,
                change.path.display()
            );
        }
        debug!("Rebuilding after {} change(s)", batch.len());

        let pass_options = options.clone();
        match tokio::task::spawn_blocking(move || build::run(&pass_options)).await {
            Ok(Ok(report)) => {
                println!(
                    "{} Regenerated {} parameters → {}",
                    "✓".green(),
                    report.routes.len(),
                    report.artifact.display()
                );
            }
            Ok(Err(e)) => {
                warn!("Rebuild failed: {:#}", e);
                eprintln!("{} Rebuild failed: {:#}", "❌".red(), e);
            }
            Err(e) => error!("Rebuild task aborted: {}", e),
        }
    }
}

/// Watches the pages root and regenerates the declaration on change
pub struct PageWatcher {
    options: Arc<BuildOptions>,
}

impl PageWatcher {
    pub fn new(options: BuildOptions) -> Self {
        Self {
            options: Arc::new(options),
        }
    }

    /// Subscribes to changes under the pages root
    ///
    /// Nothing is built here. The returned watcher must be kept alive for
    /// events to keep flowing into the receiver.
    pub fn subscribe(&self) -> Result<(RecommendedWatcher, mpsc::Receiver<PageChange>)> {
        let source_dir = &self.options.source_dir;
        let scope = WatchScope::new(&self.options);

        let (tx, rx) = mpsc::channel(100);

        let mut watcher = notify::recommended_watcher(move |res: Result<Event, notify::Error>| {
            match res {
                Ok(event) => {
                    for change in scope.changes(&event) {
                        // Receiver is gone only during shutdown
                        let _ = tx.blocking_send(change);
                    }
                }
                Err(e) => error!("Watch error: {:?}", e),
            }
        })
        .context("Failed to create file watcher")?;

        watcher
            .watch(source_dir, RecursiveMode::Recursive)
            .with_context(|| format!("Failed to watch pages directory: {:?}", source_dir))?;

        Ok((watcher, rx))
    }

    /// Start watching until Ctrl-C
    ///
    /// No pass runs at startup; the first rebuild waits for the first change.
    /// Failing to subscribe to the pages root is fatal.
    pub async fn watch(&self) -> Result<()> {
        let (watcher, rx) = self.subscribe()?;
        println!("  {} Watching: {}", "👀".cyan(), self.options.source_dir.display());
        println!();

        let worker = tokio::spawn(rebuild_loop(rx, self.options.clone()));

        tokio::select! {
            signal = tokio::signal::ctrl_c() => {
                signal.context("Failed to listen for Ctrl-C")?;
                println!();
                println!("{}", "Stopped watching".cyan());
            }
            joined = worker => {
                joined.context("Rebuild worker stopped")?;
            }
        }

        drop(watcher);
        Ok(())
    }
}
