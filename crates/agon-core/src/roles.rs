//! Attacker/defender role assignment.

use serde::{Deserialize, Serialize};

/// Ordered pair of participant identities.
///
/// Position 0 is the currently attacking participant. Reversal produces a new
/// value rather than mutating in place; the owning episode replaces its copy
/// at the midpoint swap and turn-order queries read the replaced value, so
/// there is no second structure to keep in sync.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAssignment {
    attacker: String,
    defender: String,
}

impl RoleAssignment {
    /// Create an assignment with `attacker` acting first
    pub fn new(attacker: &str, defender: &str) -> Self {
        Self {
            attacker: attacker.to_string(),
            defender: defender.to_string(),
        }
    }

    /// The participant currently attacking
    pub fn attacker(&self) -> &str {
        &self.attacker
    }

    /// The participant currently defending
    pub fn defender(&self) -> &str {
        &self.defender
    }

    /// A new assignment with the roles exchanged
    pub fn reversed(&self) -> Self {
        Self {
            attacker: self.defender.clone(),
            defender: self.attacker.clone(),
        }
    }
}
