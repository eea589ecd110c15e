//! Round-robin driver that advances every racing instance by one step per tick.
//!
//! All instances start from identical copies of one shuffled array and are advanced in
//! declaration order. An instance whose stack is found empty is marked finished on that tick,
//! once all of them are finished the tick source stops itself.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::clock::{Clock, SystemClock, Ticker};
use crate::config::{self, Config};
use crate::patterns;
use crate::step::{Algorithm, Progress, Runner};

/// Emitted once per instance, on the tick that found its stack empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    pub name: &'static str,
    pub step_count: u64,
}

/// Read-only view of one instance.
#[derive(Debug, Clone, Copy)]
pub struct Lane<'a> {
    pub name: &'static str,
    pub values: &'a [i32],
    pub finished: bool,
}

/// Everything a presentation layer needs to draw a frame.
#[derive(Debug, Clone)]
pub struct Snapshot<'a> {
    pub step_count: u64,
    pub running: bool,
    pub lanes: Vec<Lane<'a>>,
}

pub struct Scheduler<C = SystemClock> {
    algorithms: Vec<Algorithm>,
    instances: Vec<Box<dyn Runner>>,
    len: usize,
    interval: Duration,
    step_count: u64,
    // Some while running.
    ticker: Option<Ticker>,
    clock: C,
    rng: StdRng,
}

impl Scheduler<SystemClock> {
    pub fn new(config: Config) -> Self {
        Self::with_clock(config, SystemClock::new())
    }
}

impl<C: Clock> Scheduler<C> {
    /// Races all known algorithms. Invalid values in `config` fall back to the defaults.
    pub fn with_clock(config: Config, clock: C) -> Self {
        let len = config::validate_len(config.len).unwrap_or_else(|err| {
            log::warn!("{err}, using {}", config::DEFAULT_LEN);
            config::DEFAULT_LEN
        });

        let interval_ms = u64::try_from(config.interval.as_millis()).unwrap_or(u64::MAX);
        let interval = config::validate_interval_ms(interval_ms).unwrap_or_else(|err| {
            log::warn!("{err}, using {}ms", config::DEFAULT_INTERVAL_MS);
            Duration::from_millis(config::DEFAULT_INTERVAL_MS)
        });

        let seed = patterns::random_init_seed();
        log::debug!("seed: {seed}");

        let mut scheduler = Self {
            algorithms: Algorithm::ALL.to_vec(),
            instances: Vec::new(),
            len,
            interval,
            step_count: 0,
            ticker: None,
            clock,
            rng: StdRng::seed_from_u64(seed),
        };
        scheduler.populate();

        scheduler
    }

    /// Reseeds shuffling and pivot selection, then rebuilds all instances.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self.populate();
        self
    }

    /// Races `algorithms` in the given order instead, then rebuilds all instances.
    pub fn with_algorithms(mut self, algorithms: &[Algorithm]) -> Self {
        self.algorithms = algorithms.to_vec();
        self.populate();
        self
    }

    /// Rebuilds every instance over a fresh shuffle of `len` keys and zeroes the step counter.
    ///
    /// An out of range `len` is ignored and the previous element count is used.
    pub fn init(&mut self, len: usize) {
        match config::validate_len(len) {
            Ok(len) => self.len = len,
            Err(err) => log::warn!("ignoring {err}, keeping {}", self.len),
        }

        self.populate();
    }

    /// Advances every unfinished instance by one step.
    ///
    /// Returns the instances that finished on this tick, in declaration order.
    pub fn tick(&mut self) -> Vec<Completion> {
        let mut completed = Vec::new();

        for instance in &mut self.instances {
            if instance.advance() == Progress::JustFinished {
                log::info!(
                    "{} finished after {} steps",
                    instance.name(),
                    self.step_count
                );

                completed.push(Completion {
                    name: instance.name(),
                    step_count: self.step_count,
                });
            }
        }

        if self.is_finished() {
            if self.ticker.take().is_some() {
                log::debug!("all instances finished, tick source stopped");
            }
        } else {
            self.step_count += 1;
        }

        completed
    }

    /// Starts ticking every `interval_ms`. Does nothing if already running.
    ///
    /// An out of range `interval_ms` is ignored and the previous interval is used.
    pub fn start(&mut self, interval_ms: u64) {
        if self.ticker.is_some() {
            log::debug!("already running, ignoring start({interval_ms})");
            return;
        }

        match config::validate_interval_ms(interval_ms) {
            Ok(interval) => self.interval = interval,
            Err(err) => log::warn!("ignoring {err}, keeping {:?}", self.interval),
        }

        log::debug!("starting, one tick every {:?}", self.interval);
        self.ticker = Some(Ticker::start(self.clock.now(), self.interval));
    }

    /// Halts ticking, all other state is kept.
    pub fn stop(&mut self) {
        if self.ticker.take().is_some() {
            log::debug!("stopped at step {}", self.step_count);
        }
    }

    /// Stops and rebuilds with the last accepted element count.
    pub fn reset(&mut self) {
        self.stop();
        self.populate();
    }

    /// Performs every tick that came due since the last call. Returns how many ran.
    pub fn poll(&mut self) -> usize {
        let now = self.clock.now();
        let mut ticks = 0;

        while self.tick_due(now) {
            self.tick();
            ticks += 1;
        }

        ticks
    }

    /// Blocks on the clock and ticks on schedule until the tick source stops, either because
    /// every instance finished or because `on_frame` called for it. `on_frame` sees every tick.
    pub fn run<F>(&mut self, mut on_frame: F)
    where
        F: FnMut(&mut Self),
    {
        while let Some(deadline) = self.ticker.map(|ticker| ticker.deadline()) {
            self.clock.sleep_until(deadline);

            let now = self.clock.now();
            while self.tick_due(now) {
                self.tick();
                on_frame(self);
            }
        }
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            step_count: self.step_count,
            running: self.is_running(),
            lanes: self
                .instances
                .iter()
                .map(|instance| Lane {
                    name: instance.name(),
                    values: instance.values(),
                    finished: instance.is_finished(),
                })
                .collect(),
        }
    }

    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_some()
    }

    /// True once every instance went from running to finished.
    pub fn is_finished(&self) -> bool {
        self.instances.iter().all(|instance| instance.is_finished())
    }

    pub fn element_count(&self) -> usize {
        self.len
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    fn tick_due(&mut self, now: Duration) -> bool {
        self.ticker.as_mut().is_some_and(|ticker| ticker.poll(now))
    }

    fn populate(&mut self) {
        self.step_count = 0;

        let base = patterns::shuffled_with(self.len, &mut self.rng);
        self.instances = self
            .algorithms
            .iter()
            .map(|algorithm| algorithm.instantiate(base.clone(), &mut self.rng))
            .collect();

        log::debug!(
            "initialized {} instances over {} keys",
            self.instances.len(),
            self.len
        );
    }
}
