//! The `Sim` struct: one thread per agent plus the render loop.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use std::thread;
use std::time::Instant;

use sd_behavior::BehaviorModel;
use sd_core::{AgentRng, SimConfig};
use sd_grid::{Agent, AgentInfo, Enclosure};
use tracing::{debug, info, trace, warn};

use crate::{SimError, SimObserver, SimReport, SimResult};

// ── Actor plumbing ────────────────────────────────────────────────────────────

/// Shared, borrowed state every agent thread runs against.
#[derive(Clone, Copy)]
struct Actor<'a> {
    enclosure: &'a Enclosure,
    config:    &'a SimConfig,
    live:      &'a AtomicUsize,
    halt:      &'a AtomicBool,
}

/// Decrements the live-actor count when an agent thread exits, including by
/// unwinding.
struct Departure<'a>(&'a AtomicUsize);

impl Drop for Departure<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::AcqRel);
    }
}

impl Actor<'_> {
    fn should_stop(&self) -> bool {
        self.enclosure.is_over() || self.halt.load(Ordering::Acquire)
    }

    /// Take the agent out of its hand-off slot, then sleep, check the stop
    /// conditions, propose, apply; repeat.
    ///
    /// Blocked moves are not errors: the agent waits for its next tick.
    fn run(self, slot: &Mutex<Option<Agent>>, mut rng: AgentRng) -> Option<(Agent, u64)> {
        let _departure = Departure(self.live);
        let mut agent = slot.lock().unwrap_or_else(PoisonError::into_inner).take()?;
        let mut ticks = 0u64;

        while self.config.tick_limit.is_none_or(|limit| ticks < limit) {
            thread::sleep(self.config.tick_interval);
            if self.should_stop() {
                break;
            }
            let step = agent.species().propose(agent.pos(), self.enclosure, &mut rng);
            let target = agent.pos().offset(step);
            let outcome = self.enclosure.try_move(&mut agent, target);
            trace!(%agent, %target, ?outcome, "tick");
            ticks += 1;
        }

        debug!(%agent, ticks, "actor stopped");
        Some((agent, ticks))
    }
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The simulation runner.
///
/// [`run`](Self::run) moves every [`Agent`] handle onto its own scoped
/// thread and uses the calling thread as the render actor:
///
/// 1. **Start**: `on_start` with the initial grid.
/// 2. **Actors**: each agent thread sleeps one tick interval, stops if the
///    game is over (or its tick limit is reached), otherwise proposes a step
///    with its species' behavior and applies it with
///    [`Enclosure::try_move`].
/// 3. **Render**: `on_frame` every frame interval until the game is over or
///    no actor is left.
/// 4. **Join**: every actor is joined; panics are logged and counted.
/// 5. **Finish**: a final frame, `on_escape` if a sheep got out, then
///    `on_sim_end` with the [`SimReport`].
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Tick and frame cadence.
    pub config: SimConfig,

    /// Seed mixed into every agent's RNG.
    pub seed: u64,

    /// The shared grid.
    pub enclosure: Enclosure,

    /// Agent handles, in `AgentId` order.  Moved onto the actor threads for
    /// the duration of [`run`](Self::run) and handed back afterwards;
    /// handles of actors that panicked are not returned.
    pub agents: Vec<Agent>,

    /// Stack size for actor threads; `None` uses the platform default.
    pub actor_stack_size: Option<usize>,
}

impl Sim {
    /// Run until a sheep escapes, or until every actor has used up its tick
    /// limit.
    ///
    /// Without a tick limit and without an escape this never returns.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<SimReport> {
        let started = Instant::now();
        let agents = std::mem::take(&mut self.agents);
        let roster: Vec<AgentInfo> = agents.iter().map(AgentInfo::from).collect();
        // Each actor takes its handle from here; handles of actors that never
        // started stay behind and are reclaimed after the scope.
        let slots: Vec<Mutex<Option<Agent>>> =
            agents.into_iter().map(|agent| Mutex::new(Some(agent))).collect();
        let live = AtomicUsize::new(slots.len());
        let halt = AtomicBool::new(false);
        let actor = Actor {
            enclosure: &self.enclosure,
            config:    &self.config,
            live:      &live,
            halt:      &halt,
        };
        let seed = self.seed;
        let stack_size = self.actor_stack_size;

        info!(
            width  = self.enclosure.width(),
            height = self.enclosure.height(),
            agents = slots.len(),
            seed,
            "simulation starting"
        );
        observer.on_start(&self.enclosure.snapshot());

        let (mut survivors, ticks_per_agent, panicked_agents, mut frames, spawn_error) =
            thread::scope(|s| {
                let mut actors = Vec::with_capacity(slots.len());
                let mut spawn_error = None;

                for (info, slot) in roster.into_iter().zip(&slots) {
                    let rng = AgentRng::new(seed, info.id);
                    let mut builder =
                        thread::Builder::new().name(format!("{}-{}", info.species, info.label));
                    if let Some(bytes) = stack_size {
                        builder = builder.stack_size(bytes);
                    }
                    match builder.spawn_scoped(s, move || actor.run(slot, rng)) {
                        Ok(handle) => actors.push((info, handle)),
                        Err(err) => {
                            halt.store(true, Ordering::Release);
                            spawn_error = Some(err);
                            break;
                        }
                    }
                }

                // ── Render loop ───────────────────────────────────────────
                let mut frames = 0u64;
                while !actor.should_stop() && live.load(Ordering::Acquire) > 0 {
                    frames += 1;
                    observer.on_frame(frames, &actor.enclosure.snapshot());
                    thread::sleep(actor.config.frame_interval);
                }

                // ── Join ──────────────────────────────────────────────────
                let mut survivors = Vec::with_capacity(actors.len());
                let mut ticks = Vec::with_capacity(actors.len());
                let mut panicked = 0usize;
                for (info, handle) in actors {
                    match handle.join() {
                        Ok(Some((agent, n))) => {
                            ticks.push((info.id, n));
                            survivors.push(agent);
                        }
                        Ok(None) => {}
                        Err(_) => {
                            warn!(species = %info.species, agent = %info.label, "actor thread panicked");
                            panicked += 1;
                        }
                    }
                }
                (survivors, ticks, panicked, frames, spawn_error)
            });

        survivors.extend(
            slots
                .into_iter()
                .filter_map(|slot| slot.into_inner().unwrap_or_else(PoisonError::into_inner)),
        );
        survivors.sort_by_key(Agent::id);
        self.agents = survivors;
        if let Some(err) = spawn_error {
            return Err(SimError::Spawn(err));
        }

        frames += 1;
        observer.on_frame(frames, &self.enclosure.snapshot());

        let winner = self.enclosure.winner().cloned();
        if let Some(escape) = &winner {
            observer.on_escape(escape);
        }

        let report = SimReport {
            winner,
            frames,
            ticks_per_agent,
            panicked_agents,
            elapsed: started.elapsed(),
        };
        match &report.winner {
            Some(escape) => info!(
                sheep   = %escape.label,
                gate    = %escape.gate,
                ticks   = report.total_ticks(),
                elapsed = ?report.elapsed,
                "simulation finished: a sheep escaped"
            ),
            None => info!(
                ticks   = report.total_ticks(),
                elapsed = ?report.elapsed,
                "simulation finished: tick limit reached"
            ),
        }
        observer.on_sim_end(&report);
        Ok(report)
    }
}
