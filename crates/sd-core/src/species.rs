//! The two kinds of agent that share the enclosure.

/// What an agent is.  Decides both its movement policy and which cells the
/// enclosure lets it enter.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Species {
    /// Flees nearby dogs; escapes by reaching a gate.
    Sheep,
    /// Wanders the outer thirds; never enters the inner zone or a gate.
    Dog,
}

impl Species {
    /// Human-readable label, used in logs and reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Species::Sheep => "sheep",
            Species::Dog   => "dog",
        }
    }

    /// Display label for the `n`-th agent of this species (0-based).
    ///
    /// Sheep are lettered `A`..`Z` (wrapping), dogs are numbered from `1`.
    pub fn label(self, n: usize) -> String {
        match self {
            Species::Sheep => char::from(b'A' + (n % 26) as u8).to_string(),
            Species::Dog   => (n + 1).to_string(),
        }
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
