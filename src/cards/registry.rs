use std::{
    path::PathBuf,
    sync::{Arc, Mutex, RwLock},
};

use log::{info, warn};
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::watch;

use crate::error::{AppError, Result};

use super::catalog::CardCatalog;

/// Holds the active card catalog, with optional watching of its JSON file.
pub struct CatalogRegistry {
    path: PathBuf,
    state: RwLock<Arc<CardCatalog>>,
    updates_tx: watch::Sender<Arc<CardCatalog>>,
    watcher: Mutex<Option<RecommendedWatcher>>,
}

impl CatalogRegistry {
    /// Load the catalog at `path`, or the builtin list when the file is absent.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let catalog = Arc::new(CardCatalog::load_or_builtin(&path)?);
        let (updates_tx, _) = watch::channel(catalog.clone());

        Ok(Self {
            path,
            state: RwLock::new(catalog),
            updates_tx,
            watcher: Mutex::new(None),
        })
    }

    /// Return the catalog currently in effect.
    pub fn snapshot(&self) -> Arc<CardCatalog> {
        match self.state.read() {
            Ok(state) => state.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Subscribe to catalog updates. The receiver starts at the latest snapshot.
    pub fn subscribe(&self) -> watch::Receiver<Arc<CardCatalog>> {
        self.updates_tx.subscribe()
    }

    /// Re-read the catalog file and broadcast it when it changed.
    pub fn refresh(&self) -> Result<()> {
        let catalog = Arc::new(CardCatalog::load_or_builtin(&self.path)?);

        {
            let mut state = self
                .state
                .write()
                .map_err(|_| AppError::message("card catalog lock poisoned"))?;
            if **state == *catalog {
                return Ok(());
            }
            *state = catalog.clone();
        }

        info!(
            "Card catalog reloaded from {} ({} cards)",
            self.path.display(),
            catalog.len()
        );
        let _ = self.updates_tx.send(catalog);
        Ok(())
    }

    /// Begin watching the catalog's directory. Multiple invocations are no-ops.
    /// A missing directory is logged and left alone; a later call can retry.
    pub fn start_watching(self: &Arc<Self>) -> Result<()> {
        let mut slot = self
            .watcher
            .lock()
            .map_err(|_| AppError::message("catalog watcher lock poisoned"))?;
        if slot.is_some() {
            return Ok(());
        }

        let dir = self.watch_dir();
        if !dir.is_dir() {
            warn!(
                "Card catalog directory {} does not exist; not watching for changes",
                dir.display()
            );
            return Ok(());
        }

        let registry = Arc::clone(self);
        let mut watcher =
            notify::recommended_watcher(move |res: notify::Result<notify::Event>| match res {
                Ok(event) if registry.is_relevant(&event) => {
                    if let Err(err) = registry.refresh() {
                        warn!("Failed to refresh card catalog: {err}");
                    }
                }
                Ok(_) => {}
                Err(err) => warn!("Card catalog watch error: {err}"),
            })?;

        watcher.watch(&dir, RecursiveMode::NonRecursive)?;
        *slot = Some(watcher);
        Ok(())
    }

    fn watch_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    fn is_relevant(&self, event: &notify::Event) -> bool {
        is_relevant_kind(&event.kind)
            && event
                .paths
                .iter()
                .any(|changed| changed.file_name() == self.path.file_name())
    }
}

fn is_relevant_kind(kind: &EventKind) -> bool {
    matches!(
        kind,
        EventKind::Create(_)
            | EventKind::Modify(_)
            | EventKind::Remove(_)
            | EventKind::Any
            | EventKind::Other
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::Duration;

    #[test]
    fn falls_back_to_builtin_catalog() {
        let dir = tempfile::tempdir().expect("temp dir");
        let registry = CatalogRegistry::new(dir.path().join("cards.json")).expect("registry");
        assert_eq!(*registry.snapshot(), CardCatalog::builtin());
    }

    #[test]
    fn refresh_broadcasts_changes() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("cards.json");
        fs::write(&path, r#"{"cards": ["Knight"]}"#).expect("write catalog");

        let registry = CatalogRegistry::new(&path).expect("registry");
        let mut updates = registry.subscribe();
        assert_eq!(registry.snapshot().cards, vec!["Knight"]);

        fs::write(&path, r#"{"cards": ["Knight", "Hog Rider"]}"#).expect("rewrite catalog");
        registry.refresh().expect("refresh succeeds");

        assert!(updates.has_changed().expect("sender alive"));
        assert_eq!(updates.borrow_and_update().cards.len(), 2);
        assert_eq!(registry.snapshot().cards, vec!["Knight", "Hog Rider"]);
    }

    #[test]
    fn refresh_keeps_previous_catalog_on_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("cards.json");
        fs::write(&path, r#"{"cards": ["Knight"]}"#).expect("write catalog");

        let registry = CatalogRegistry::new(&path).expect("registry");
        fs::write(&path, "not json").expect("corrupt catalog");

        assert!(registry.refresh().is_err());
        assert_eq!(registry.snapshot().cards, vec!["Knight"]);
    }

    #[test]
    fn watching_a_missing_directory_leaves_it_absent() {
        let dir = tempfile::tempdir().expect("temp dir");
        let catalog_dir = dir.path().join("not-yet");
        let registry =
            Arc::new(CatalogRegistry::new(catalog_dir.join("cards.json")).expect("registry"));

        registry.start_watching().expect("missing directory is not an error");
        assert!(!catalog_dir.exists());
        assert_eq!(*registry.snapshot(), CardCatalog::builtin());
    }

    #[tokio::test]
    async fn file_changes_reach_subscribers() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("cards.json");
        fs::write(&path, r#"{"cards": ["Knight"]}"#).expect("write catalog");

        let registry = Arc::new(CatalogRegistry::new(&path).expect("registry"));
        registry.start_watching().expect("watch catalog dir");
        let mut updates = registry.subscribe();

        fs::write(&path, r#"{"cards": ["Knight", "Golem"]}"#).expect("rewrite catalog");

        let reloaded = tokio::time::timeout(Duration::from_secs(5), async {
            loop {
                updates.changed().await.expect("sender alive");
                if updates.borrow_and_update().cards.len() == 2 {
                    break;
                }
            }
        })
        .await;

        assert!(reloaded.is_ok(), "no catalog update within 5s");
        assert_eq!(registry.snapshot().cards, vec!["Knight", "Golem"]);
    }
}
