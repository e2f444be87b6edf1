//! Builder for creating and configuring Tracker instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use log::{debug, warn};
use tokio::task;

use super::Tracker;
use crate::{
    error::{Result, TrackerError},
    plan_table::PlanTable,
    store::{AttemptStore, SqliteAttemptStore},
};

/// Builder for creating and configuring Tracker instances.
#[derive(Clone, Default)]
pub struct TrackerBuilder {
    database_path: Option<PathBuf>,
    plan_path: Option<PathBuf>,
    plan: Option<PlanTable>,
    store: Option<Arc<dyn AttemptStore>>,
}

impl TrackerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/pushups/pushups.db` or
    /// `~/.local/share/pushups/pushups.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Loads the training plan from a CSV file instead of the embedded one.
    pub fn with_plan_file<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.plan_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Uses an already loaded plan table. Takes precedence over
    /// [`TrackerBuilder::with_plan_file`].
    pub fn with_plan(mut self, plan: PlanTable) -> Self {
        self.plan = Some(plan);
        self
    }

    /// Uses the given store instead of opening a SQLite database.
    pub fn with_store(mut self, store: Arc<dyn AttemptStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Builds the configured tracker instance.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::FileSystem` if the plan file cannot be read or
    /// the database directory cannot be created
    /// Returns `TrackerError::Database` if database initialization fails
    pub async fn build(self) -> Result<Tracker> {
        let plan = match (self.plan, self.plan_path) {
            (Some(plan), _) => plan,
            (None, Some(path)) => task::spawn_blocking(move || PlanTable::from_path(&path))
                .await
                .map_err(TrackerError::join)??,
            (None, None) => PlanTable::embedded(),
        };
        if plan.is_empty() {
            warn!("Training plan has no entries");
        }

        let store = match self.store {
            Some(store) => store,
            None => {
                let db_path = match self.database_path {
                    Some(path) => path,
                    None => Self::default_database_path()?,
                };
                Arc::new(Self::open_database(db_path).await?) as Arc<dyn AttemptStore>
            }
        };

        Ok(Tracker::new(store, plan))
    }

    async fn open_database(db_path: PathBuf) -> Result<SqliteAttemptStore> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| TrackerError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        debug!("Opening attempt database at {}", db_path.display());
        task::spawn_blocking(move || SqliteAttemptStore::open(&db_path))
            .await
            .map_err(TrackerError::join)?
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("pushups")
            .place_data_file("pushups.db")
            .map_err(|e| TrackerError::XdgDirectory(e.to_string()))
    }
}
