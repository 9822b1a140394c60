use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use thiserror::Error;

use crate::models::Activity;

/// Rejected directory mutations. The message text is what ends up in the
/// response body, so keep it caller-facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student is already signed up")]
    AlreadyRegistered,
    #[error("Student is not signed up for this activity")]
    NotRegistered,
}

/// Process-wide activity map. Cloning is cheap and every clone shares the
/// same underlying state, so a handle can be injected into each request
/// handler as router state.
///
/// The whole map sits behind one lock; every operation is a short
/// read-modify-write with nothing async inside, so contention is a
/// non-issue at this scale and check-then-mutate stays atomic.
#[derive(Clone)]
pub struct ActivityDirectory {
    inner: Arc<RwLock<BTreeMap<String, Activity>>>,
}

impl ActivityDirectory {
    pub fn new(activities: BTreeMap<String, Activity>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(activities)),
        }
    }

    /// Directory preloaded with the school's standing clubs. State lives
    /// only in memory; a restart starts over from this seed.
    pub fn seeded() -> Self {
        Self::new(seed_activities())
    }

    /// Full copy of the current map, for the listing endpoint.
    pub fn snapshot(&self) -> BTreeMap<String, Activity> {
        self.inner
            .read()
            .expect("activity directory lock poisoned")
            .clone()
    }

    /// Add `email` to an activity's roster. Capacity is deliberately not
    /// checked here; signups past `max_participants` are accepted.
    pub fn signup(&self, activity_name: &str, email: &str) -> Result<(), DirectoryError> {
        let mut activities = self
            .inner
            .write()
            .expect("activity directory lock poisoned");
        let activity = activities
            .get_mut(activity_name)
            .ok_or(DirectoryError::ActivityNotFound)?;
        if activity.is_registered(email) {
            return Err(DirectoryError::AlreadyRegistered);
        }
        activity.participants.push(email.to_string());
        Ok(())
    }

    /// Remove `email` from an activity's roster.
    pub fn unregister(&self, activity_name: &str, email: &str) -> Result<(), DirectoryError> {
        let mut activities = self
            .inner
            .write()
            .expect("activity directory lock poisoned");
        let activity = activities
            .get_mut(activity_name)
            .ok_or(DirectoryError::ActivityNotFound)?;
        let before = activity.participants.len();
        activity.participants.retain(|p| p != email);
        if activity.participants.len() == before {
            return Err(DirectoryError::NotRegistered);
        }
        Ok(())
    }
}

fn activity(
    description: &str,
    schedule: &str,
    max_participants: usize,
    participants: &[&str],
) -> Activity {
    Activity {
        description: description.to_string(),
        schedule: schedule.to_string(),
        max_participants,
        participants: participants.iter().map(|p| p.to_string()).collect(),
    }
}

fn seed_activities() -> BTreeMap<String, Activity> {
    BTreeMap::from([
        (
            "Chess Club".to_string(),
            activity(
                "Learn strategies and compete in chess tournaments",
                "Mondays and Fridays, 3:30 PM - 5:00 PM",
                12,
                &["michael@mergington.edu", "daniel@mergington.edu"],
            ),
        ),
        (
            "Programming Class".to_string(),
            activity(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                &["emma@mergington.edu", "sophia@mergington.edu"],
            ),
        ),
        (
            "Gym Class".to_string(),
            activity(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                &["john@mergington.edu", "olivia@mergington.edu"],
            ),
        ),
        (
            "Soccer Team".to_string(),
            activity(
                "Join the school soccer team and compete in local matches",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                22,
                &["liam@mergington.edu", "noah@mergington.edu"],
            ),
        ),
        (
            "Basketball Team".to_string(),
            activity(
                "Practice basketball and play against other schools",
                "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
                15,
                &["ava@mergington.edu", "mia@mergington.edu"],
            ),
        ),
        (
            "Art Club".to_string(),
            activity(
                "Explore painting, drawing, and other visual arts",
                "Thursdays, 3:30 PM - 5:00 PM",
                15,
                &["amelia@mergington.edu", "harper@mergington.edu"],
            ),
        ),
        (
            "Drama Club".to_string(),
            activity(
                "Act, direct, and produce plays and performances",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                20,
                &["ella@mergington.edu", "scarlett@mergington.edu"],
            ),
        ),
        (
            "Math Club".to_string(),
            activity(
                "Solve challenging problems and prepare for math competitions",
                "Tuesdays, 3:30 PM - 4:30 PM",
                10,
                &["james@mergington.edu", "benjamin@mergington.edu"],
            ),
        ),
        (
            "Debate Team".to_string(),
            activity(
                "Develop public speaking and argumentation skills",
                "Fridays, 4:00 PM - 5:30 PM",
                12,
                &["charlotte@mergington.edu", "henry@mergington.edu"],
            ),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_contains_standing_clubs() {
        let activities = seed_activities();
        assert_eq!(activities.len(), 9);
        for name in ["Chess Club", "Programming Class", "Gym Class"] {
            assert!(activities.contains_key(name), "missing {name}");
        }
        for (name, activity) in &activities {
            assert!(
                activity.participants.len() <= activity.max_participants,
                "{name} seeded over capacity"
            );
        }
    }

    #[test]
    fn signup_adds_participant_once() {
        let directory = ActivityDirectory::seeded();
        let email = "test.student1@mergington.edu";

        directory.signup("Chess Club", email).unwrap();
        assert!(directory.snapshot()["Chess Club"].is_registered(email));

        assert_eq!(
            directory.signup("Chess Club", email),
            Err(DirectoryError::AlreadyRegistered)
        );
        let snapshot = directory.snapshot();
        let roster = &snapshot["Chess Club"].participants;
        assert_eq!(roster.iter().filter(|p| *p == email).count(), 1);
    }

    #[test]
    fn unregister_removes_participant() {
        let directory = ActivityDirectory::seeded();

        directory
            .unregister("Chess Club", "michael@mergington.edu")
            .unwrap();
        assert!(!directory.snapshot()["Chess Club"].is_registered("michael@mergington.edu"));

        assert_eq!(
            directory.unregister("Chess Club", "michael@mergington.edu"),
            Err(DirectoryError::NotRegistered)
        );
    }

    #[test]
    fn unknown_activity_is_rejected() {
        let directory = ActivityDirectory::seeded();
        assert_eq!(
            directory.signup("No Such Club", "someone@mergington.edu"),
            Err(DirectoryError::ActivityNotFound)
        );
        assert_eq!(
            directory.unregister("No Such Club", "someone@mergington.edu"),
            Err(DirectoryError::ActivityNotFound)
        );
    }

    #[test]
    fn clones_share_state() {
        let directory = ActivityDirectory::seeded();
        let handle = directory.clone();

        handle.signup("Math Club", "test.student2@mergington.edu").unwrap();
        assert!(directory.snapshot()["Math Club"].is_registered("test.student2@mergington.edu"));
    }

    #[test]
    fn signup_past_capacity_is_allowed() {
        let directory = ActivityDirectory::new(BTreeMap::from([(
            "Tiny Club".to_string(),
            activity("A very small club", "Sometimes", 1, &["only@mergington.edu"]),
        )]));

        directory
            .signup("Tiny Club", "overflow@mergington.edu")
            .unwrap();
        assert_eq!(directory.snapshot()["Tiny Club"].spots_left(), 0);
    }
}
