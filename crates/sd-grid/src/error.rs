use sd_core::{CoreError, Pos, Species};
use thiserror::Error;

/// Construction-time failures.  A running enclosure never returns errors:
/// refused moves are ordinary [`MoveOutcome`][crate::MoveOutcome]s.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("cannot place {species} at {pos}: {reason}")]
    Placement {
        species: Species,
        pos:     Pos,
        reason:  &'static str,
    },

    #[error("gate offset {offset} is not a non-corner cell of a side {span} cells long")]
    GateOffset {
        offset: i32,
        span:   i32,
    },

    #[error("{requested} random {species} requested but only {capacity} free cells remain in the {zone}")]
    Overcrowded {
        species:   Species,
        zone:      &'static str,
        requested: usize,
        capacity:  usize,
    },
}

pub type GridResult<T> = Result<T, GridError>;
