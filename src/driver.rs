//! Per-frame callback scheduling.
//!
//! The driver owns a single repeating tick registration. Ticks arrive on a
//! channel and are drained by the host loop, so the render step always runs on
//! the host thread and never overlaps itself.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

/// Default frame period (~60 fps).
pub const DEFAULT_TICK: Duration = Duration::from_millis(16);

/// Frame numbers delivered by a scheduler.
pub type TickReceiver = mpsc::UnboundedReceiver<u64>;

/// Shared cancellation flag for one registration.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Source of repeating ticks. A registration lives until its token is cancelled.
pub trait Scheduler {
    fn schedule_repeating(&mut self, period: Duration, cancel: CancelToken) -> TickReceiver;
}

/// Ticks from a background tokio task.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioScheduler;

impl Scheduler for TokioScheduler {
    fn schedule_repeating(&mut self, period: Duration, cancel: CancelToken) -> TickReceiver {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            let mut frame: u64 = 0;
            loop {
                interval.tick().await;
                if cancel.is_cancelled() || tx.send(frame).is_err() {
                    break;
                }
                frame = frame.wrapping_add(1);
            }
            log::debug!("tick task exited after {} ticks", frame);
        });
        rx
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Stopped,
    Running,
}

impl std::fmt::Display for DriverState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DriverState::Stopped => write!(f, "Stopped"),
            DriverState::Running => write!(f, "Running"),
        }
    }
}

struct Registration {
    cancel: CancelToken,
    ticks: TickReceiver,
}

/// Start/stop wrapper around one scheduler registration.
pub struct AnimationDriver<S: Scheduler = TokioScheduler> {
    scheduler: S,
    period: Duration,
    active: Option<Registration>,
}

impl<S: Scheduler> AnimationDriver<S> {
    pub fn new(scheduler: S, period: Duration) -> Self {
        Self {
            scheduler,
            period,
            active: None,
        }
    }

    pub fn state(&self) -> DriverState {
        if self.active.is_some() {
            DriverState::Running
        } else {
            DriverState::Stopped
        }
    }

    pub fn is_running(&self) -> bool {
        self.state() == DriverState::Running
    }

    /// Begin ticking. No-op when already running.
    pub fn start(&mut self) {
        if self.active.is_some() {
            return;
        }
        let cancel = CancelToken::new();
        let ticks = self.scheduler.schedule_repeating(self.period, cancel.clone());
        self.active = Some(Registration { cancel, ticks });
        log::info!("animation started ({} ms tick)", self.period.as_millis());
    }

    /// Stop ticking. Once this returns, `poll` never invokes the step again
    /// until the next `start`. No-op when already stopped.
    pub fn stop(&mut self) {
        if let Some(reg) = self.active.take() {
            reg.cancel.cancel();
            // dropping the receiver discards any ticks still queued
            drop(reg.ticks);
            log::info!("animation stopped");
        }
    }

    /// Drain due ticks, invoking `step` once per tick. Returns how many steps ran.
    pub fn poll(&mut self, mut step: impl FnMut(u64)) -> usize {
        let mut ran = 0;
        let mut lost = false;
        if let Some(reg) = &mut self.active {
            loop {
                if reg.cancel.is_cancelled() {
                    break;
                }
                match reg.ticks.try_recv() {
                    Ok(frame) => {
                        step(frame);
                        ran += 1;
                    }
                    Err(mpsc::error::TryRecvError::Empty) => break,
                    Err(mpsc::error::TryRecvError::Disconnected) => {
                        lost = true;
                        break;
                    }
                }
            }
        }
        if lost {
            log::warn!("tick source went away; animation stopped");
            self.stop();
        }
        ran
    }
}

impl<S: Scheduler> Drop for AnimationDriver<S> {
    fn drop(&mut self) {
        self.stop();
    }
}
