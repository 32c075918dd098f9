use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashSet;

/// Signup-ordered participant emails with constant-time membership checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Participants {
    order: Vec<String>,
    members: HashSet<String>,
}

impl Participants {
    pub fn contains(&self, email: &str) -> bool {
        self.members.contains(email)
    }

    /// Appends `email`, returning `false` when it is already present.
    pub fn insert(&mut self, email: &str) -> bool {
        if !self.members.insert(email.to_string()) {
            return false;
        }
        self.order.push(email.to_string());
        true
    }

    /// Removes the single occurrence of `email`, returning `false` when absent.
    pub fn remove(&mut self, email: &str) -> bool {
        if !self.members.remove(email) {
            return false;
        }
        if let Some(pos) = self.order.iter().position(|entry| entry == email) {
            self.order.remove(pos);
        }
        true
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.order.clone()
    }
}

#[derive(Debug, Clone)]
pub struct Activity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Participants,
}

impl Activity {
    pub fn view(&self) -> ActivityView {
        ActivityView {
            description: self.description.clone(),
            schedule: self.schedule.clone(),
            max_participants: self.max_participants,
            participants: self.participants.to_vec(),
        }
    }
}

/// Wire shape of a single activity in `GET /activities`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityView {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

/// Point-in-time copy of the roster. Serializes as a JSON object keyed by
/// activity name, keeping seed order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterSnapshot {
    pub activities: Vec<(String, ActivityView)>,
}

impl RosterSnapshot {
    pub fn get(&self, name: &str) -> Option<&ActivityView> {
        self.activities
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, view)| view)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.activities.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

impl Serialize for RosterSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.activities.len()))?;
        for (name, view) in &self.activities {
            map.serialize_entry(name, view)?;
        }
        map.end()
    }
}
