//! Unit tests for sd-behavior.

use sd_core::{AgentId, AgentRng, Axis, Pos, Step};

use crate::{BehaviorModel, DogBehavior, Proximity, SheepBehavior, keep_moving};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// A world where dogs are reported on exactly the listed axes.
struct DogsOn(&'static [Axis]);

impl Proximity for DogsOn {
    fn is_dog_nearby(&self, _at: Pos, axis: Axis) -> bool {
        self.0.contains(&axis)
    }
}

const NO_DOGS: DogsOn = DogsOn(&[]);

fn rng(agent: u32) -> AgentRng {
    AgentRng::new(2024, AgentId(agent))
}

fn samples(model: &dyn BehaviorModel, world: &dyn Proximity, n: usize) -> Vec<Step> {
    let mut rng = rng(0);
    (0..n).map(|_| model.propose(Pos::new(5, 5), world, &mut rng)).collect()
}

fn is_unit(step: Step) -> bool {
    (-1..=1).contains(&step.dx) && (-1..=1).contains(&step.dy)
}

// ── keep_moving ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod keep_moving_tests {
    use super::*;

    #[test]
    fn non_zero_steps_pass_through() {
        let mut rng = rng(1);
        for step in [Step::new(1, 0), Step::new(-1, 1), Step::new(0, -1)] {
            assert_eq!(keep_moving(step, &mut rng), step);
        }
    }

    #[test]
    fn zero_step_becomes_a_single_axis_unit_step() {
        let mut rng = rng(2);
        let mut seen = Vec::new();
        for _ in 0..1_000 {
            let step = keep_moving(Step::STILL, &mut rng);
            assert_eq!(step.dx.abs() + step.dy.abs(), 1, "got {step}");
            if !seen.contains(&step) {
                seen.push(step);
            }
        }
        assert_eq!(seen.len(), 4, "all four orthogonal steps appear");
    }
}

// ── DogBehavior ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod dog_tests {
    use super::*;

    #[test]
    fn always_tries_to_move() {
        for step in samples(&DogBehavior, &NO_DOGS, 5_000) {
            assert!(is_unit(step));
            assert!(!step.is_still());
        }
    }

    #[test]
    fn reaches_all_eight_neighbours() {
        let mut steps = samples(&DogBehavior, &NO_DOGS, 5_000);
        steps.sort_by_key(|s| (s.dx, s.dy));
        steps.dedup();
        assert_eq!(steps.len(), 8);
    }

    #[test]
    fn ignores_other_dogs() {
        let alone = samples(&DogBehavior, &NO_DOGS, 200);
        let crowded = samples(&DogBehavior, &DogsOn(&[Axis::Horizontal, Axis::Vertical]), 200);
        assert_eq!(alone, crowded);
    }
}

// ── SheepBehavior ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod sheep_tests {
    use super::*;

    #[test]
    fn wanders_when_no_dog_is_near() {
        let mut steps = samples(&SheepBehavior, &NO_DOGS, 5_000);
        assert!(steps.iter().all(|&s| is_unit(s) && !s.is_still()));
        steps.sort_by_key(|s| (s.dx, s.dy));
        steps.dedup();
        assert_eq!(steps.len(), 8);
    }

    #[test]
    fn flees_horizontally_from_a_dog_on_the_row() {
        let steps = samples(&SheepBehavior, &DogsOn(&[Axis::Horizontal]), 2_000);
        assert!(steps.iter().all(|s| s.dx.abs() == 1));
        assert!(steps.iter().any(|s| s.dx == 1) && steps.iter().any(|s| s.dx == -1));
        // The other axis still wanders freely.
        assert!(steps.iter().any(|s| s.dy == 0));
    }

    #[test]
    fn flees_vertically_from_a_dog_on_the_column() {
        let steps = samples(&SheepBehavior, &DogsOn(&[Axis::Vertical]), 2_000);
        assert!(steps.iter().all(|s| s.dy.abs() == 1));
        assert!(steps.iter().any(|s| s.dx == 0));
    }

    #[test]
    fn flees_diagonally_when_boxed_in() {
        let steps = samples(&SheepBehavior, &DogsOn(&[Axis::Horizontal, Axis::Vertical]), 2_000);
        assert!(steps.iter().all(|s| s.dx.abs() == 1 && s.dy.abs() == 1));
    }

    #[test]
    fn same_seed_same_walk() {
        assert_eq!(
            samples(&SheepBehavior, &NO_DOGS, 100),
            samples(&SheepBehavior, &NO_DOGS, 100)
        );
    }
}

// ── Species dispatch ──────────────────────────────────────────────────────────

#[cfg(test)]
mod dispatch_tests {
    use sd_core::Species;

    use super::*;

    #[test]
    fn species_delegates_to_its_policy() {
        let world = DogsOn(&[Axis::Vertical]);
        assert_eq!(samples(&Species::Sheep, &world, 300), samples(&SheepBehavior, &world, 300));
        assert_eq!(samples(&Species::Dog, &world, 300), samples(&DogBehavior, &world, 300));
    }

    #[test]
    fn model_is_object_safe_via_box() {
        let models: Vec<Box<dyn BehaviorModel>> = vec![Box::new(SheepBehavior), Box::new(DogBehavior)];
        let mut rng = rng(3);
        for model in &models {
            assert!(!model.propose(Pos::new(1, 1), &NO_DOGS, &mut rng).is_still());
        }
    }
}

// ── Against a real enclosure ──────────────────────────────────────────────────

#[cfg(test)]
mod enclosure_tests {
    use sd_core::{EnclosureConfig, Species};
    use sd_grid::EnclosureBuilder;

    use super::*;

    #[test]
    fn sheep_reads_dogs_through_the_enclosure() {
        let config = EnclosureConfig { width: 8, height: 8, sheep: 0, dogs: 0, seed: 1 };
        let (enclosure, _agents) = EnclosureBuilder::new(config)
            .place(Species::Sheep, Pos::new(3, 3))
            .place(Species::Dog, Pos::new(2, 3))
            .build()
            .unwrap();

        let mut rng = rng(4);
        for _ in 0..500 {
            let step = SheepBehavior.propose(Pos::new(3, 3), &enclosure, &mut rng);
            assert_eq!(step.dx.abs(), 1);
        }
    }
}
