use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[cfg(feature = "schema")]
use schemars::JsonSchema;

use crate::error::{ModelError, ModelResult};

/// Kind of replica a rule governs.
///
/// Carried through the compiler unchanged; its meaning belongs to the scheduler.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum RoleKind {
    /// Voting member of the replication group.
    #[default]
    Voter,
    /// Voting member eligible for leadership.
    Leader,
    /// Voting member never elected leader.
    Follower,
    /// Non-voting member that only receives the log.
    Learner,
}

impl RoleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleKind::Voter => "voter",
            RoleKind::Leader => "leader",
            RoleKind::Follower => "follower",
            RoleKind::Learner => "learner",
        }
    }
}

impl fmt::Display for RoleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoleKind {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "voter" | "" => Ok(RoleKind::Voter),
            "leader" => Ok(RoleKind::Leader),
            "follower" => Ok(RoleKind::Follower),
            "learner" => Ok(RoleKind::Learner),
            other => Err(ModelError::UnknownRole(other.to_string())),
        }
    }
}
