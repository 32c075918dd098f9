use crate::types::activity::{Activity, RosterSnapshot};

pub(crate) mod seed;

use std::collections::HashMap;
use thiserror::Error;

pub use seed::{SeedError, load_seed, parse_seed};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("Activity '{0}' not found")]
    ActivityNotFound(String),
    #[error("Student {email} is already signed up for {activity}")]
    AlreadySignedUp { activity: String, email: String },
    #[error("Student {email} is not signed up for {activity}")]
    NotSignedUp { activity: String, email: String },
}

/// Outcome of a successful roster mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterChange {
    SignedUp { activity: String, email: String },
    Unregistered { activity: String, email: String },
}

impl RosterChange {
    pub fn message(&self) -> String {
        match self {
            RosterChange::SignedUp { activity, email } => {
                format!("Signed up {email} for {activity}")
            }
            RosterChange::Unregistered { activity, email } => {
                format!("Unregistered {email} from {activity}")
            }
        }
    }
}

/// In-memory registry of activities and their participants.
///
/// The set of activities is fixed at construction; only participant lists
/// change afterwards, and only through [`Roster::signup`] and
/// [`Roster::unregister`]. Both check every precondition before touching
/// state, so a failed call leaves the roster exactly as it was.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    activities: Vec<Activity>,
    index: HashMap<String, usize>,
}

impl Roster {
    /// Fresh roster holding the built-in Mergington seed activities.
    pub fn seeded() -> Self {
        Self::from_activities(seed::builtin_activities())
    }

    /// Activity names must already be unique; [`parse_seed`] checks this
    /// for external input.
    pub(crate) fn from_activities(activities: Vec<Activity>) -> Self {
        let index = activities
            .iter()
            .enumerate()
            .map(|(pos, activity)| (activity.name.clone(), pos))
            .collect();
        Self { activities, index }
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.index.get(name).map(|&pos| &self.activities[pos])
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn list(&self) -> RosterSnapshot {
        RosterSnapshot {
            activities: self
                .activities
                .iter()
                .map(|activity| (activity.name.clone(), activity.view()))
                .collect(),
        }
    }

    /// Appends `email` to the activity's participants. `max_participants` is
    /// reported but not enforced here.
    pub fn signup(&mut self, activity: &str, email: &str) -> Result<RosterChange, RosterError> {
        let entry = self.get_mut(activity)?;
        if !entry.participants.insert(email) {
            return Err(RosterError::AlreadySignedUp {
                activity: activity.to_string(),
                email: email.to_string(),
            });
        }
        Ok(RosterChange::SignedUp {
            activity: activity.to_string(),
            email: email.to_string(),
        })
    }

    pub fn unregister(
        &mut self,
        activity: &str,
        email: &str,
    ) -> Result<RosterChange, RosterError> {
        let entry = self.get_mut(activity)?;
        if !entry.participants.remove(email) {
            return Err(RosterError::NotSignedUp {
                activity: activity.to_string(),
                email: email.to_string(),
            });
        }
        Ok(RosterChange::Unregistered {
            activity: activity.to_string(),
            email: email.to_string(),
        })
    }

    fn get_mut(&mut self, name: &str) -> Result<&mut Activity, RosterError> {
        match self.index.get(name) {
            Some(&pos) => Ok(&mut self.activities[pos]),
            None => Err(RosterError::ActivityNotFound(name.to_string())),
        }
    }
}
