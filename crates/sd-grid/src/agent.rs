//! Agent handles.
//!
//! [`Agent`] is the token an actor owns for the whole run: its identity plus
//! its last committed position.  Only [`Enclosure::try_move`] writes the
//! position, and only after committing the move under both cell locks, so
//! the cached value matches the grid whenever the owning actor reads it.
//!
//! [`AgentInfo`] is the immutable roster entry the enclosure keeps for
//! rendering and reporting.
//!
//! [`Enclosure::try_move`]: crate::Enclosure::try_move

use sd_core::{AgentId, Pos, Species};

/// A live agent, owned by exactly one actor.
///
/// Not `Clone`: two handles for one token would let two actors move it.
#[derive(Debug)]
pub struct Agent {
    pub(crate) id:      AgentId,
    pub(crate) species: Species,
    pub(crate) label:   String,
    pub(crate) pos:     Pos,
}

impl Agent {
    #[inline]
    pub fn id(&self) -> AgentId {
        self.id
    }

    #[inline]
    pub fn species(&self) -> Species {
        self.species
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Last committed position.
    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }
}

impl std::fmt::Display for Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.species, self.label)
    }
}

/// Roster entry: identity without position.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentInfo {
    pub id:      AgentId,
    pub species: Species,
    pub label:   String,
}

impl From<&Agent> for AgentInfo {
    fn from(agent: &Agent) -> Self {
        Self {
            id:      agent.id,
            species: agent.species,
            label:   agent.label.clone(),
        }
    }
}
