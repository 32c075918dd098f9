use crate::roster::Roster;
use crate::types::activity::{Activity, Participants};

use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid seed file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("seed file defines no activities")]
    Empty,
    #[error("activity name cannot be empty")]
    EmptyName,
    #[error("activity '{0}' is defined more than once")]
    DuplicateActivity(String),
    #[error("activity '{0}' must allow at least one participant")]
    ZeroCapacity(String),
    #[error("participant {email} is listed twice for {activity}")]
    DuplicateParticipant { activity: String, email: String },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SeedFile {
    #[serde(default, rename = "activity")]
    activities: Vec<SeedActivity>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SeedActivity {
    name: String,
    description: String,
    schedule: String,
    max_participants: u32,
    #[serde(default)]
    participants: Vec<String>,
}

pub fn load_seed(path: &Path) -> Result<Roster, SeedError> {
    let contents = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_seed(&contents)
}

/// Parses a TOML document of `[[activity]]` tables into a roster.
pub fn parse_seed(contents: &str) -> Result<Roster, SeedError> {
    let file: SeedFile = toml::from_str(contents)?;
    if file.activities.is_empty() {
        return Err(SeedError::Empty);
    }

    let mut names = HashSet::new();
    let mut activities = Vec::with_capacity(file.activities.len());
    for entry in file.activities {
        let name = entry.name.trim().to_string();
        if name.is_empty() {
            return Err(SeedError::EmptyName);
        }
        if !names.insert(name.clone()) {
            return Err(SeedError::DuplicateActivity(name));
        }
        if entry.max_participants == 0 {
            return Err(SeedError::ZeroCapacity(name));
        }
        let mut participants = Participants::default();
        for email in &entry.participants {
            if !participants.insert(email) {
                return Err(SeedError::DuplicateParticipant {
                    activity: name,
                    email: email.clone(),
                });
            }
        }
        activities.push(Activity {
            name,
            description: entry.description,
            schedule: entry.schedule,
            max_participants: entry.max_participants,
            participants,
        });
    }

    Ok(Roster::from_activities(activities))
}

const BUILTIN: &[(&str, &str, &str, u32, [&str; 2])] = &[
    (
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
        ["michael@mergington.edu", "daniel@mergington.edu"],
    ),
    (
        "Soccer Team",
        "Join the school soccer team for training and matches",
        "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        18,
        ["lucas@mergington.edu", "mia@mergington.edu"],
    ),
    (
        "Basketball Club",
        "Practice basketball skills and compete in games",
        "Wednesdays, 3:30 PM - 5:00 PM",
        15,
        ["liam@mergington.edu", "ava@mergington.edu"],
    ),
    (
        "Drama Club",
        "Participate in theater productions and acting workshops",
        "Mondays, 4:00 PM - 5:30 PM",
        25,
        ["noah@mergington.edu", "isabella@mergington.edu"],
    ),
    (
        "Art Workshop",
        "Explore painting, drawing, and other visual arts",
        "Fridays, 2:00 PM - 3:30 PM",
        20,
        ["amelia@mergington.edu", "ethan@mergington.edu"],
    ),
    (
        "Math Club",
        "Solve challenging math problems and prepare for competitions",
        "Thursdays, 3:30 PM - 4:30 PM",
        16,
        ["charlotte@mergington.edu", "jack@mergington.edu"],
    ),
    (
        "Science Olympiad",
        "Engage in science projects and compete in science events",
        "Wednesdays, 4:00 PM - 5:00 PM",
        14,
        ["benjamin@mergington.edu", "harper@mergington.edu"],
    ),
    (
        "Programming Class",
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
        ["emma@mergington.edu", "sophia@mergington.edu"],
    ),
    (
        "Gym Class",
        "Physical education and sports activities",
        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        30,
        ["john@mergington.edu", "olivia@mergington.edu"],
    ),
];

pub(crate) fn builtin_activities() -> Vec<Activity> {
    BUILTIN
        .iter()
        .map(|(name, description, schedule, max_participants, emails)| {
            let mut participants = Participants::default();
            for email in emails {
                participants.insert(email);
            }
            Activity {
                name: name.to_string(),
                description: description.to_string(),
                schedule: schedule.to_string(),
                max_participants: *max_participants,
                participants,
            }
        })
        .collect()
}

#[cfg(test)]
#[allow(non_snake_case)]
mod tests {
    use super::*;

    const ROBOTICS: &str = r#"
[[activity]]
name = "Robotics"
description = "Build and program robots"
schedule = "Saturdays, 10:00 AM - 12:00 PM"
max_participants = 8
participants = ["ada@mergington.edu"]

[[activity]]
name = "Debate Team"
description = "Practice public speaking"
schedule = "Thursdays, 4:00 PM - 5:00 PM"
max_participants = 10
"#;

    #[test]
    fn parse_seed__should_load_activities_in_order() {
        // When
        let roster = parse_seed(ROBOTICS).expect("parse seed");

        // Then
        let snapshot = roster.list();
        assert_eq!(
            snapshot.names().collect::<Vec<_>>(),
            vec!["Robotics", "Debate Team"]
        );
        let robotics = snapshot.get("Robotics").expect("robotics");
        assert_eq!(robotics.max_participants, 8);
        assert_eq!(robotics.participants, vec!["ada@mergington.edu".to_string()]);
        assert!(snapshot.get("Debate Team").expect("debate").participants.is_empty());
    }

    #[test]
    fn parse_seed__should_reject_duplicate_activity() {
        // Given
        let contents = r#"
[[activity]]
name = "Robotics"
description = "a"
schedule = "b"
max_participants = 1

[[activity]]
name = "Robotics"
description = "c"
schedule = "d"
max_participants = 2
"#;

        // When
        let err = parse_seed(contents).expect_err("duplicate activity");

        // Then
        assert!(matches!(err, SeedError::DuplicateActivity(name) if name == "Robotics"));
    }

    #[test]
    fn parse_seed__should_reject_zero_capacity() {
        // Given
        let contents = r#"
[[activity]]
name = "Robotics"
description = "a"
schedule = "b"
max_participants = 0
"#;

        // Then
        assert!(matches!(
            parse_seed(contents),
            Err(SeedError::ZeroCapacity(_))
        ));
    }

    #[test]
    fn parse_seed__should_reject_duplicate_participant() {
        // Given
        let contents = r#"
[[activity]]
name = "Robotics"
description = "a"
schedule = "b"
max_participants = 4
participants = ["ada@mergington.edu", "ada@mergington.edu"]
"#;

        // Then
        assert!(matches!(
            parse_seed(contents),
            Err(SeedError::DuplicateParticipant { .. })
        ));
    }

    #[test]
    fn parse_seed__should_reject_empty_and_malformed_input() {
        // Then
        assert!(matches!(parse_seed(""), Err(SeedError::Empty)));
        assert!(matches!(
            parse_seed("[[activity]]\nname = \"x\""),
            Err(SeedError::Parse(_))
        ));
        assert!(matches!(
            parse_seed(
                "[[activity]]\nname = \" \"\ndescription = \"a\"\nschedule = \"b\"\nmax_participants = 1"
            ),
            Err(SeedError::EmptyName)
        ));
    }

    #[test]
    fn parse_seed__should_reject_unknown_top_level_table() {
        // Given
        let contents = r#"
[[activities]]
name = "Robotics"
description = "a"
schedule = "b"
max_participants = 4
"#;

        // When
        let err = parse_seed(contents).expect_err("misspelled table");

        // Then
        assert!(matches!(err, SeedError::Parse(_)));
        assert!(err.to_string().contains("activities"));
    }

    #[test]
    fn load_seed__should_report_missing_file() {
        // Given
        let path = std::env::temp_dir().join("activities-missing-seed.toml");

        // When
        let err = load_seed(&path).expect_err("missing file");

        // Then
        assert!(matches!(err, SeedError::Io { .. }));
        assert!(err.to_string().contains("activities-missing-seed.toml"));
    }

    #[test]
    fn load_seed__should_read_file_from_disk() {
        // Given
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time")
            .as_nanos();
        let path = std::env::temp_dir().join(format!("activities-seed-{nanos}.toml"));
        std::fs::write(&path, ROBOTICS).expect("write seed");

        // When
        let roster = load_seed(&path).expect("load seed");

        // Then
        assert_eq!(roster.len(), 2);

        std::fs::remove_file(&path).expect("cleanup");
    }
}
