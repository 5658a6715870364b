//! Draw sequencer: schedules the countdown, reveal and advance steps.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, error, info, warn};

use super::schedule::{DrawTiming, RevealMode};
use super::state::{Frame, RunOutcome, RunReport, Stage};
use crate::core::config::{COUNTDOWN_SEED, HISTORY_SEPARATOR};
use crate::core::error::DrawError;
use crate::core::pool::CandidatePool;
use crate::core::random::{RandomSource, ThreadRandom};
use crate::display::DisplaySurface;

/// Owns the candidate pool, the display and the random source for a series of runs
pub struct DrawSequencer {
    pool: Arc<CandidatePool>,
    display: Arc<dyn DisplaySurface>,
    random: Arc<dyn RandomSource>,
    timing: DrawTiming,
    reveal: RevealMode,
    last_winner: Arc<Mutex<Option<String>>>,
    running: Arc<AtomicBool>,
}

impl DrawSequencer {
    pub fn new(pool: CandidatePool, display: Arc<dyn DisplaySurface>) -> Self {
        Self {
            pool: Arc::new(pool),
            display,
            random: Arc::new(ThreadRandom),
            timing: DrawTiming::default(),
            reveal: RevealMode::default(),
            last_winner: Arc::new(Mutex::new(None)),
            running: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn with_random(mut self, random: Arc<dyn RandomSource>) -> Self {
        self.random = random;
        self
    }

    pub fn with_timing(mut self, timing: DrawTiming) -> Self {
        self.timing = timing;
        self
    }

    pub fn with_reveal(mut self, reveal: RevealMode) -> Self {
        self.reveal = reveal;
        self
    }

    pub fn timing(&self) -> DrawTiming {
        self.timing
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Starts a run and returns its handle
    ///
    /// The seed value is written before this returns; the remaining steps are
    /// scheduled on a tokio task, so this must be called inside a runtime.
    /// Fails with [`DrawError::AlreadyRunning`] while an earlier run is pending.
    pub fn start(&self) -> Result<RunHandle, DrawError> {
        if self
            .running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            warn!("start rejected: a draw is already running");
            return Err(DrawError::AlreadyRunning);
        }
        let guard = RunningGuard(Arc::clone(&self.running));

        let started = Instant::now();
        let run = RunContext {
            pool: Arc::clone(&self.pool),
            display: Arc::clone(&self.display),
            random: Arc::clone(&self.random),
            timing: self.timing,
            reveal: self.reveal.clone(),
            last_winner: Arc::clone(&self.last_winner),
        };
        info!(candidates = run.pool.len(), "draw started");
        let seed = run.apply(Stage::Seed)?;
        let frames = vec![Frame {
            stage: Stage::Seed,
            value: seed,
        }];

        let (cancel_tx, cancel_rx) = watch::channel(false);
        let join = tokio::spawn(async move {
            let _guard = guard;
            run.run(started, frames, cancel_rx).await
        });

        Ok(RunHandle {
            cancel: RunCanceller(Arc::new(cancel_tx)),
            join,
        })
    }

    /// Starts a run and waits for it to finish
    pub async fn run(&self) -> Result<RunReport, DrawError> {
        self.start()?.wait().await
    }
}

/// Handle to a scheduled run
pub struct RunHandle {
    cancel: RunCanceller,
    join: JoinHandle<Result<RunReport, DrawError>>,
}

/// Cancels a run from somewhere other than the task holding its handle
#[derive(Clone)]
pub struct RunCanceller(Arc<watch::Sender<bool>>);

impl RunCanceller {
    pub fn cancel(&self) {
        // Fails only once the run has ended, which is fine
        let _ = self.0.send(true);
    }
}

impl RunHandle {
    /// Drops every step that has not fired yet
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn canceller(&self) -> RunCanceller {
        self.cancel.clone()
    }

    /// Waits for the run to end and surfaces its result
    pub async fn wait(self) -> Result<RunReport, DrawError> {
        match self.join.await {
            Ok(result) => result,
            Err(e) => Err(DrawError::TaskFailed(e.to_string())),
        }
    }
}

/// Clears the running flag when the run task ends, however it ends
struct RunningGuard(Arc<AtomicBool>);

impl Drop for RunningGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

struct RunContext {
    pool: Arc<CandidatePool>,
    display: Arc<dyn DisplaySurface>,
    random: Arc<dyn RandomSource>,
    timing: DrawTiming,
    reveal: RevealMode,
    last_winner: Arc<Mutex<Option<String>>>,
}

impl RunContext {
    async fn run(
        self,
        started: Instant,
        mut frames: Vec<Frame>,
        mut cancel_rx: watch::Receiver<bool>,
    ) -> Result<RunReport, DrawError> {
        for (offset, stage) in self.timing.steps().into_iter().skip(1) {
            tokio::select! {
                biased;
                _ = wait_for_cancel(&mut cancel_rx) => {
                    let after = frames.last().map_or(Stage::Seed, |frame| frame.stage);
                    info!(%after, "draw cancelled");
                    return Ok(RunReport {
                        frames,
                        outcome: RunOutcome::Cancelled { after },
                    });
                }
                _ = sleep_until_offset(started, offset) => {}
            }

            let value = self.apply(stage).inspect_err(|e| {
                error!(%stage, error = %e, "draw step failed");
            })?;
            frames.push(Frame { stage, value });
        }

        let winner = frames
            .last()
            .map(|frame| frame.value.clone())
            .unwrap_or_default();
        Ok(RunReport {
            frames,
            outcome: RunOutcome::Completed { winner },
        })
    }

    /// Performs one step and returns the display value it left behind
    fn apply(&self, stage: Stage) -> Result<String, DrawError> {
        let value = match stage {
            Stage::Seed => COUNTDOWN_SEED.to_string(),
            Stage::Count1 => (COUNTDOWN_SEED + 1).to_string(),
            Stage::Count2 => (COUNTDOWN_SEED + 2).to_string(),
            Stage::Reveal => {
                let previous = self.last_winner.lock().unwrap_or_else(|e| e.into_inner());
                self.reveal.resolve(previous.as_deref())
            }
            Stage::Advance => {
                let winner = advance(self.display.as_ref(), &self.pool, self.random.as_ref())?;
                *self.last_winner.lock().unwrap_or_else(|e| e.into_inner()) = Some(winner.clone());
                info!(%winner, "winner drawn");
                return Ok(winner);
            }
        };
        debug!(%stage, %value, "display updated");
        self.display.set_display_value(&value);
        Ok(value)
    }
}

/// Logs the current display value to the history and shows a freshly drawn name
///
/// The draw happens first, so a failure leaves both the display value and the
/// history untouched.
pub fn advance(
    display: &dyn DisplaySurface,
    pool: &CandidatePool,
    random: &dyn RandomSource,
) -> Result<String, DrawError> {
    let winner = pool.draw(random)?.to_string();
    let last = display.display_value();
    let history = display.history_markup();
    display.set_history_markup(&format!("{last}{HISTORY_SEPARATOR}{history}"));
    display.set_display_value(&winner);
    Ok(winner)
}

/// Sleeps until `started + offset`; an offset past the clock's range never fires
async fn sleep_until_offset(started: Instant, offset: std::time::Duration) {
    match started.checked_add(offset) {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => {
            warn!(?offset, "step offset out of clock range; step will not fire");
            std::future::pending::<()>().await
        }
    }
}

async fn wait_for_cancel(rx: &mut watch::Receiver<bool>) {
    loop {
        if *rx.borrow_and_update() {
            return;
        }
        // A dropped handle detaches the run instead of cancelling it
        if rx.changed().await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}
