//! Integration tests for sd-sim.

use std::time::Duration;

use sd_core::{EnclosureConfig, Pos, SimConfig, Species};
use sd_grid::{Escape, GridError, Side, Snapshot};

use crate::{NoopObserver, SimBuilder, SimError, SimObserver, SimReport};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn enclosure(width: i32, height: i32, sheep: usize, dogs: usize) -> EnclosureConfig {
    EnclosureConfig { width, height, sheep, dogs, seed: 42 }
}

fn fast(tick_limit: Option<u64>) -> SimConfig {
    SimConfig {
        tick_interval:  Duration::ZERO,
        frame_interval: Duration::from_millis(1),
        tick_limit,
    }
}

#[derive(Default)]
struct Recorder {
    starts:  usize,
    frames:  Vec<u64>,
    escapes: Vec<Escape>,
    ends:    usize,
    first:   Option<Snapshot>,
    last:    Option<Snapshot>,
}

impl SimObserver for Recorder {
    fn on_start(&mut self, snapshot: &Snapshot) {
        self.starts += 1;
        self.first = Some(snapshot.clone());
    }

    fn on_frame(&mut self, frame: u64, snapshot: &Snapshot) {
        self.frames.push(frame);
        self.last = Some(snapshot.clone());
    }

    fn on_escape(&mut self, escape: &Escape) {
        self.escapes.push(escape.clone());
    }

    fn on_sim_end(&mut self, _report: &SimReport) {
        self.ends += 1;
    }
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_with_agents_in_id_order() {
        let sim = SimBuilder::new(enclosure(8, 8, 2, 3), fast(Some(1))).build().unwrap();
        assert_eq!(sim.agents.len(), 5);
        assert_eq!(sim.enclosure.roster().len(), 5);
        for (i, agent) in sim.agents.iter().enumerate() {
            assert_eq!(agent.id().index(), i);
        }
        assert_eq!(sim.seed, 42);
    }

    #[test]
    fn zero_frame_interval_rejected() {
        let config = SimConfig { frame_interval: Duration::ZERO, ..fast(None) };
        let result = SimBuilder::new(enclosure(8, 8, 1, 1), config).build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn zero_tick_limit_rejected() {
        let result = SimBuilder::new(enclosure(8, 8, 1, 1), fast(Some(0))).build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn bad_dimensions_surface_as_grid_errors() {
        let result = SimBuilder::new(enclosure(9, 8, 1, 1), fast(None)).build();
        assert!(matches!(result, Err(SimError::Grid(GridError::Core(_)))));
    }

    #[test]
    fn gate_and_place_pass_through() {
        let sim = SimBuilder::new(enclosure(8, 8, 0, 0), fast(None))
            .gate(Side::Top, 3)
            .place(Species::Sheep, Pos::new(3, 3))
            .build()
            .unwrap();
        assert_eq!(sim.enclosure.gates()[Side::Top.slot()], Pos::new(3, 0));
        assert_eq!(sim.agents[0].pos(), Pos::new(3, 3));
    }

    #[test]
    fn bad_gate_offset_rejected() {
        let result = SimBuilder::new(enclosure(8, 8, 0, 0), fast(None))
            .gate(Side::Left, 0)
            .build();
        assert!(matches!(result, Err(SimError::Grid(GridError::GateOffset { .. }))));
    }
}

// ── Bounded runs ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[test]
    fn tick_limited_run_keeps_the_grid_consistent() {
        let limit = 200;
        let mut sim = SimBuilder::new(enclosure(14, 14, 3, 4), fast(Some(limit))).build().unwrap();
        let mut recorder = Recorder::default();
        let report = sim.run(&mut recorder).unwrap();

        assert_eq!(report.panicked_agents, 0);
        assert_eq!(report.ticks_per_agent.len(), 7);
        assert!(report.ticks_per_agent.iter().all(|&(_, n)| n <= limit));
        if !report.escaped() {
            assert!(report.ticks_per_agent.iter().all(|&(_, n)| n == limit));
        }

        let census = sim.enclosure.census();
        assert_eq!((census.sheep, census.dogs, census.gates), (3, 4, 4));
        assert_eq!(census.walls, 2 * 14 + 2 * 12 - 4);

        assert_eq!(sim.agents.len(), 7);
        for agent in &sim.agents {
            assert!(census.occupants.contains(&(agent.id(), agent.pos())), "{agent} misplaced");
        }
    }

    #[test]
    fn observer_hooks_fire_in_order() {
        let mut sim = SimBuilder::new(enclosure(8, 8, 0, 2), fast(Some(50))).build().unwrap();
        let mut recorder = Recorder::default();
        let report = sim.run(&mut recorder).unwrap();

        assert_eq!(recorder.starts, 1);
        assert_eq!(recorder.ends, 1);
        assert!(recorder.escapes.is_empty());
        assert_eq!(recorder.frames.len() as u64, report.frames);
        assert_eq!(recorder.frames, (1..=report.frames).collect::<Vec<_>>());
        assert_eq!(recorder.last, Some(sim.enclosure.snapshot()));

        let first = recorder.first.unwrap();
        assert_eq!(first.width, 8);
        assert_eq!(first.rows.len(), 8);
    }

    #[test]
    fn dogs_stay_out_of_the_refuge_and_off_the_gates() {
        let mut sim = SimBuilder::new(enclosure(11, 11, 0, 6), fast(Some(2_000))).build().unwrap();
        let report = sim.run(&mut NoopObserver).unwrap();

        assert!(report.winner.is_none());
        assert!(!sim.enclosure.is_over());
        assert_eq!(report.total_ticks(), 6 * 2_000);
        let zones = *sim.enclosure.zones();
        for dog in &sim.agents {
            assert!(zones.is_interior(dog.pos()), "{dog} left the interior");
            assert!(!zones.in_refuge(dog.pos()), "{dog} entered the refuge");
        }
    }

    #[test]
    fn empty_enclosure_renders_one_final_frame() {
        let mut sim = SimBuilder::new(enclosure(5, 5, 0, 0), fast(None)).build().unwrap();
        let mut recorder = Recorder::default();
        let report = sim.run(&mut recorder).unwrap();

        assert_eq!(report.frames, 1);
        assert!(report.ticks_per_agent.is_empty());
        assert_eq!(recorder.frames, vec![1]);
    }
}

// ── Escapes ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod escape_tests {
    use super::*;

    #[test]
    fn lone_sheep_finds_a_gate() {
        let limit = 100_000;
        let mut sim = SimBuilder::new(enclosure(5, 5, 1, 0), fast(Some(limit))).build().unwrap();
        let mut recorder = Recorder::default();
        let report = sim.run(&mut recorder).unwrap();

        let escape = report.winner.clone().expect("a random walk in a 3x3 pen reaches a gate");
        assert!(sim.enclosure.is_over());
        assert!(sim.enclosure.gates().contains(&escape.gate));
        assert_eq!(recorder.escapes, vec![escape.clone()]);
        assert!(report.ticks_per_agent[0].1 < limit);

        // The winner stays on the cell it escaped from.
        let sheep = &sim.agents[0];
        assert_eq!(sheep.pos(), escape.from);
        assert_eq!(sim.enclosure.census().sheep, 1);
        assert_eq!(recorder.last.unwrap().symbol_at(escape.gate), Some("G"));
    }

    #[test]
    fn only_the_first_escape_wins() {
        let mut sim = SimBuilder::new(enclosure(5, 5, 0, 0), fast(Some(100_000)))
            .place(Species::Sheep, Pos::new(1, 1))
            .place(Species::Sheep, Pos::new(2, 2))
            .place(Species::Sheep, Pos::new(3, 3))
            .build()
            .unwrap();
        let mut recorder = Recorder::default();
        let report = sim.run(&mut recorder).unwrap();

        let winner = report.winner.expect("one of three sheep gets out");
        assert!(["A", "B", "C"].contains(&winner.label.as_str()));
        assert_eq!(recorder.escapes.len(), 1);
        assert_eq!(sim.enclosure.winner(), Some(&winner));
        assert_eq!(sim.enclosure.census().sheep, 3);
    }

    #[test]
    fn dogs_cannot_end_the_game() {
        let mut sim = SimBuilder::new(enclosure(5, 5, 0, 0), fast(Some(5_000)))
            .place(Species::Dog, Pos::new(1, 1))
            .place(Species::Dog, Pos::new(3, 3))
            .build()
            .unwrap();
        let report = sim.run(&mut NoopObserver).unwrap();

        assert!(report.winner.is_none());
        assert_eq!(sim.enclosure.census().gates, 4);
    }
}

// ── Spawn failure ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod spawn_tests {
    use super::*;

    #[test]
    fn failed_spawn_hands_every_agent_back() {
        // No address space can map a stack this large, so the first spawn fails.
        let mut sim = SimBuilder::new(enclosure(8, 8, 2, 3), fast(Some(5)))
            .actor_stack_size(usize::MAX / 2)
            .build()
            .unwrap();
        let before: Vec<_> = sim.agents.iter().map(|a| (a.id(), a.pos())).collect();

        let result = sim.run(&mut NoopObserver);
        assert!(matches!(result, Err(SimError::Spawn(_))));

        let after: Vec<_> = sim.agents.iter().map(|a| (a.id(), a.pos())).collect();
        assert_eq!(after, before);
        let census = sim.enclosure.census();
        for (id, pos) in after {
            assert!(census.occupants.contains(&(id, pos)));
        }
    }

    #[test]
    fn modest_stack_size_runs_normally() {
        let mut sim = SimBuilder::new(enclosure(8, 8, 1, 2), fast(Some(10)))
            .actor_stack_size(256 * 1024)
            .build()
            .unwrap();
        let report = sim.run(&mut NoopObserver).unwrap();
        assert_eq!(report.ticks_per_agent.len(), 3);
        assert_eq!(sim.agents.len(), 3);
    }
}
