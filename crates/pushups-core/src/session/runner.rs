//! Live session handle: owns the engine, the rest timer and the final write.

use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError, Weak},
    time::Duration,
};

use log::{debug, info};
use tokio::{sync::watch, task::JoinHandle, time};

use super::engine::{Effect, SessionEngine, SessionKey, SessionState, Tick};
use crate::{
    models::{Attempt, Outcome, PlanEntry},
    tracker::Tracker,
};

const TICK: Duration = Duration::from_secs(1);

struct Shared {
    engine: Mutex<SessionEngine>,
    state_tx: watch::Sender<SessionState>,
    timer: Mutex<Option<JoinHandle<()>>>,
    save: Mutex<Option<JoinHandle<Option<Attempt>>>>,
    tracker: Tracker,
}

impl Shared {
    fn engine(&self) -> MutexGuard<'_, SessionEngine> {
        self.engine.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, engine: &SessionEngine) {
        self.state_tx.send_replace(engine.state().clone());
    }

    fn stop_timer(&self) {
        if let Some(handle) = self
            .timer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            handle.abort();
        }
    }
}

/// One in-progress workout.
///
/// Transitions are synchronous and must be called from inside a tokio
/// runtime, which runs the rest countdown and the attempt write. Dropping
/// the session cancels any countdown; an attempt already handed to the
/// store is still written.
pub struct Session {
    shared: Arc<Shared>,
}

impl Session {
    pub(crate) fn start(engine: SessionEngine, tracker: Tracker) -> Self {
        let (state_tx, _) = watch::channel(engine.state().clone());
        if engine.is_plan_missing() {
            info!(
                "No plan entry for week {} day {} column {}",
                engine.key().week,
                engine.key().day,
                engine.key().column
            );
        }

        Self {
            shared: Arc::new(Shared {
                engine: Mutex::new(engine),
                state_tx,
                timer: Mutex::new(None),
                save: Mutex::new(None),
                tracker,
            }),
        }
    }

    pub fn key(&self) -> SessionKey {
        self.shared.engine().key().clone()
    }

    pub fn plan(&self) -> Option<PlanEntry> {
        self.shared.engine().plan().cloned()
    }

    pub fn is_plan_missing(&self) -> bool {
        self.shared.engine().is_plan_missing()
    }

    pub fn set_labels(&self) -> Vec<String> {
        self.shared.engine().set_labels().to_vec()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SessionState {
        self.shared.engine().state().clone()
    }

    pub fn is_final_set(&self) -> bool {
        self.shared.engine().is_final_set()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.shared.engine().outcome()
    }

    /// Receiver that sees every state change, including each rest tick.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.shared.state_tx.subscribe()
    }

    /// Marks the active set done at its recommended reps.
    pub fn complete_set(&self) {
        let effect = {
            let mut engine = self.shared.engine();
            let effect = engine.complete_set();
            self.shared.publish(&engine);
            effect
        };
        apply(&self.shared, effect);
    }

    /// Records the reps done on the active set and completes the session.
    pub fn submit_final_set(&self, actual_reps: u32) {
        let effect = {
            let mut engine = self.shared.engine();
            let effect = engine.submit_final_set(actual_reps);
            self.shared.publish(&engine);
            effect
        };
        apply(&self.shared, effect);
    }

    /// Ends the current rest now. Returns `false` when not resting.
    pub fn skip_rest(&self) -> bool {
        let skipped = {
            let mut engine = self.shared.engine();
            let skipped = engine.skip_rest();
            if skipped {
                self.shared.publish(&engine);
            }
            skipped
        };
        if skipped {
            self.shared.stop_timer();
        }
        skipped
    }

    /// Waits until the session reaches its terminal state.
    pub async fn completed(&self) -> SessionState {
        let mut rx = self.subscribe();
        let done = match rx.wait_for(|state| state.is_complete).await {
            Ok(state) => state.clone(),
            Err(_) => self.state(),
        };
        done
    }

    /// Waits for the attempt write triggered by completion and returns the
    /// stored record. `None` when nothing was written (plan missing, not
    /// complete yet, already taken, or the store failed).
    pub async fn saved(&self) -> Option<Attempt> {
        let handle = self
            .shared
            .save
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()?;
        handle.await.ok().flatten()
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.shared.engine().cancel_rest();
        self.shared.stop_timer();
    }
}

fn apply(shared: &Arc<Shared>, effect: Effect) {
    match effect {
        Effect::None => {}
        Effect::StartRest { epoch, seconds } => {
            debug!("Resting {seconds}s (epoch {epoch})");
            let handle = tokio::spawn(run_rest_timer(Arc::downgrade(shared), epoch));
            if let Some(previous) = shared
                .timer
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .replace(handle)
            {
                previous.abort();
            }
        }
        Effect::Record(attempt) => {
            info!(
                "Session week {} day {} column {} finished: {}",
                attempt.week,
                attempt.day,
                attempt.column,
                attempt.outcome.as_str()
            );
            let handle = shared.tracker.spawn_record(attempt);
            *shared.save.lock().unwrap_or_else(PoisonError::into_inner) = Some(handle);
        }
    }
}

async fn run_rest_timer(session: Weak<Shared>, epoch: u64) {
    loop {
        time::sleep(TICK).await;

        let Some(shared) = session.upgrade() else {
            return;
        };
        let mut engine = shared.engine();
        match engine.tick(epoch) {
            Tick::Stale => return,
            Tick::Counting(_) => shared.publish(&engine),
            Tick::Advanced => {
                shared.publish(&engine);
                return;
            }
        }
    }
}
