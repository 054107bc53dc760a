use std::{
    path::{Path, PathBuf},
    sync::{mpsc, Arc, Mutex},
    thread::{self, JoinHandle},
};

use anyhow::{anyhow, Context};
use chrono::{DateTime, Utc};
use log::{error, info};
use rusqlite::{Connection, OpenFlags};
use tokio::sync::oneshot;

mod helpers;
mod migrations;
pub mod models;
mod repositories;

pub use repositories::journals::{DEFAULT_JOURNAL_LIMIT, UNTITLED_JOURNAL_TITLE};
pub use repositories::moods::DEFAULT_MOOD_WINDOW_DAYS;

use crate::error::CoreError;
use migrations::run_migrations;

/// State owned by the writer thread. Mutating tasks get exclusive access to
/// the writable connection and draw their insertion timestamps from here.
pub(crate) struct WriteCtx {
    pub(crate) conn: Connection,
    last_stamp: Option<DateTime<Utc>>,
}

impl WriteCtx {
    /// Timestamp for the next insert. Never moves backwards, so insertion
    /// order and timestamp order agree even if the wall clock steps back.
    pub(crate) fn next_timestamp(&mut self) -> DateTime<Utc> {
        let mut now = Utc::now();
        if let Some(last) = self.last_stamp {
            if now < last {
                now = last;
            }
        }
        self.last_stamp = Some(now);
        now
    }
}

type WriteTask = Box<dyn FnOnce(&mut WriteCtx) + Send + 'static>;

enum StoreCommand {
    Execute(WriteTask),
    Shutdown,
}

struct StoreInner {
    sender: mpsc::Sender<StoreCommand>,
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl Drop for StoreInner {
    fn drop(&mut self) {
        let mut guard = match self.worker.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        if let Some(handle) = guard.take() {
            if let Err(err) = self.sender.send(StoreCommand::Shutdown) {
                error!("Failed to send shutdown to store thread: {err}");
            }
            if let Err(join_err) = handle.join() {
                error!("Failed to join store thread: {join_err:?}");
            }
        }
    }
}

/// Handle to the durable store. Cloning is cheap; all clones share the single
/// writer thread, so mutations are serialized no matter how many callers hold
/// a handle. Reads bypass the writer and run on their own connections.
#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
    db_path: Arc<PathBuf>,
}

impl Store {
    pub fn open(db_path: PathBuf) -> Result<Self, CoreError> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create store directory {}", parent.display())
            })?;
        }

        let (command_tx, command_rx) = mpsc::channel::<StoreCommand>();
        let (ready_tx, ready_rx) = mpsc::channel();
        let path_for_thread = db_path.clone();

        let worker = thread::Builder::new()
            .name("solace-store".into())
            .spawn(move || {
                let mut conn = match Connection::open(&path_for_thread) {
                    Ok(connection) => connection,
                    Err(err) => {
                        let _ = ready_tx.send(Err(anyhow::Error::new(err)
                            .context("failed to open SQLite database")));
                        return;
                    }
                };

                if let Err(err) = conn.pragma_update(None, "journal_mode", "WAL") {
                    error!("Failed to enable WAL mode: {err}");
                }
                if let Err(err) = conn.pragma_update(None, "foreign_keys", "ON") {
                    error!("Failed to enable foreign keys: {err}");
                }

                let init_result =
                    run_migrations(&mut conn).context("failed to run store migrations");
                if ready_tx.send(init_result).is_err() {
                    error!("Store initialization receiver dropped before ready signal");
                    return;
                }

                let mut ctx = WriteCtx {
                    conn,
                    last_stamp: None,
                };

                while let Ok(command) = command_rx.recv() {
                    match command {
                        StoreCommand::Execute(task) => {
                            task(&mut ctx);
                        }
                        StoreCommand::Shutdown => break,
                    }
                }

                info!("Store thread shutting down");
            })
            .with_context(|| "failed to spawn store worker thread")?;

        ready_rx
            .recv()
            .context("store worker exited before signaling readiness")?
            .map_err(CoreError::Storage)?;

        info!("Store initialized at {}", db_path.as_path().display());

        Ok(Self {
            inner: Arc::new(StoreInner {
                sender: command_tx,
                worker: Mutex::new(Some(worker)),
            }),
            db_path: Arc::new(db_path),
        })
    }

    pub fn path(&self) -> &Path {
        self.db_path.as_path()
    }

    /// Ships a mutating task to the writer thread and awaits its result.
    /// At most one of these runs at a time.
    pub(crate) async fn write<F, T>(&self, task: F) -> Result<T, CoreError>
    where
        F: FnOnce(&mut WriteCtx) -> Result<T, CoreError> + Send + 'static,
        T: Send + 'static,
    {
        let sender = self.inner.sender.clone();
        let (reply_tx, reply_rx) = oneshot::channel();

        let command = StoreCommand::Execute(Box::new(move |ctx| {
            let result = task(ctx);
            if reply_tx.send(result).is_err() {
                error!("Store caller dropped before receiving result");
            }
        }));

        sender
            .send(command)
            .map_err(|err| anyhow!("failed to send task to store thread: {err}"))?;

        reply_rx
            .await
            .map_err(|_| anyhow!("store thread terminated unexpectedly"))?
    }

    /// Runs a query on its own read-only connection. Readers never enter the
    /// writer queue; WAL lets them run alongside an in-flight write while
    /// still seeing every write that committed before the query was issued.
    pub(crate) async fn read<F, T>(&self, task: F) -> Result<T, CoreError>
    where
        F: FnOnce(&Connection) -> Result<T, CoreError> + Send + 'static,
        T: Send + 'static,
    {
        let path = Arc::clone(&self.db_path);
        tokio::task::spawn_blocking(move || {
            let conn = Connection::open_with_flags(
                path.as_path(),
                OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
            )
            .map_err(|err| {
                CoreError::Storage(
                    anyhow::Error::new(err).context("failed to open read connection"),
                )
            })?;
            task(&conn)
        })
        .await
        .map_err(|err| anyhow!("read task failed to complete: {err}"))?
    }
}
