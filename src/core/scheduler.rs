//! Periodic snapshot publisher.
//!
//! A worker thread wakes on every tick, samples the clock, reads the latest
//! committed settings and publishes a fresh immutable [`Snapshot`] to every
//! subscriber. Nothing is shared between ticks. A settings change re-arms
//! the timer at once when the update frequency moved.

use crate::config::{Settings, SettingsService};
use crate::core::clock::{Clock, SystemClock};
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::models::snapshot::Snapshot;
use crossbeam_channel::{Receiver, Sender, select, tick, unbounded};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

type Subscribers = Arc<Mutex<Vec<Sender<Arc<Snapshot>>>>>;

#[derive(Default)]
pub struct TickerBuilder {
    settings: Option<Arc<SettingsService>>,
    clock: Option<Arc<dyn Clock>>,
    interval: Option<Duration>,
}

impl TickerBuilder {
    pub fn settings(mut self, settings: Arc<SettingsService>) -> Self {
        self.settings = Some(settings);
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Fixed tick interval instead of the one implied by the update frequency.
    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = Some(interval);
        self
    }

    pub fn build(self) -> AppResult<Ticker> {
        let settings = self.settings.ok_or(AppError::MissingSettings)?;
        if self.interval.is_some_and(|d| d.is_zero()) {
            return Err(AppError::Scheduler("tick interval must be positive".into()));
        }

        Ok(Ticker {
            settings,
            clock: self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
            interval: self.interval,
            subscribers: Arc::default(),
            stop_tx: None,
            handle: None,
        })
    }
}

pub struct Ticker {
    settings: Arc<SettingsService>,
    clock: Arc<dyn Clock>,
    interval: Option<Duration>,
    subscribers: Subscribers,
    stop_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    pub fn builder() -> TickerBuilder {
        TickerBuilder::default()
    }

    pub fn subscribe(&self) -> Receiver<Arc<Snapshot>> {
        let (tx, rx) = unbounded();
        self.subscribers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(tx);
        rx
    }

    /// Build a snapshot for the current instant without publishing it.
    pub fn snapshot_now(&self) -> Snapshot {
        Core::build_snapshot(self.clock.now(), &self.settings.current())
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Publish a first snapshot immediately, then one per tick.
    pub fn start(&mut self) -> AppResult<()> {
        if self.is_running() {
            return Err(AppError::Scheduler("ticker already running".into()));
        }

        let (stop_tx, stop_rx) = unbounded::<()>();
        let worker = Worker {
            settings: Arc::clone(&self.settings),
            clock: Arc::clone(&self.clock),
            interval: self.interval,
            subscribers: Arc::clone(&self.subscribers),
            changes: self.settings.watch(),
        };

        let handle = thread::Builder::new()
            .name("tzglance-ticker".into())
            .spawn(move || worker.run(stop_rx))
            .map_err(|e| AppError::Scheduler(e.to_string()))?;

        self.stop_tx = Some(stop_tx);
        self.handle = Some(handle);
        Ok(())
    }

    /// Cancel future ticks and wait for the worker to exit.
    pub fn stop(&mut self) {
        // Dropping the sender disconnects the worker's stop channel.
        self.stop_tx.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}

struct Worker {
    settings: Arc<SettingsService>,
    clock: Arc<dyn Clock>,
    interval: Option<Duration>,
    subscribers: Subscribers,
    changes: Receiver<Settings>,
}

impl Worker {
    fn current_interval(&self) -> Duration {
        self.interval
            .unwrap_or_else(|| self.settings.current().update_frequency.interval())
    }

    fn publish(&self) {
        let snapshot = Arc::new(Core::build_snapshot(
            self.clock.now(),
            &self.settings.current(),
        ));
        let mut subs = self.subscribers.lock().unwrap_or_else(|e| e.into_inner());
        subs.retain(|tx| tx.send(Arc::clone(&snapshot)).is_ok());
    }

    fn run(self, stop_rx: Receiver<()>) {
        let mut period = self.current_interval();
        let mut ticks = tick(period);

        self.publish();

        loop {
            let event = select! {
                recv(stop_rx) -> _ => Event::Stop,
                recv(ticks) -> _ => Event::Tick,
                recv(self.changes) -> _ => Event::SettingsChanged,
            };

            match event {
                Event::Stop => break,
                Event::Tick => self.publish(),
                Event::SettingsChanged => {}
            }

            let wanted = self.current_interval();
            if wanted != period {
                period = wanted;
                ticks = tick(period);
            }
        }
    }
}

enum Event {
    Stop,
    Tick,
    SettingsChanged,
}
