use std::collections::HashMap;

use parking_lot::RwLock;
use thiserror::Error;

use crate::models::Activity;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("{email} is already signed up for {activity}")]
    AlreadySignedUp { activity: String, email: String },
    #[error("{email} is not registered for {activity}")]
    NotRegistered { activity: String, email: String },
}

/// In-memory store of activities, keyed by name. Owned by the composition
/// root and shared with handlers; the lock serializes the check-then-mutate
/// steps so concurrent signups cannot both pass the duplicate check.
pub struct ActivityRegistry {
    inner: RwLock<HashMap<String, Activity>>,
}

impl ActivityRegistry {
    pub fn new(activities: HashMap<String, Activity>) -> Self {
        Self {
            inner: RwLock::new(activities),
        }
    }

    /// Registry pre-populated with the Mergington High School catalog.
    /// Restart resets to this seed; nothing is persisted.
    pub fn with_seed() -> Self {
        Self::new(seed_activities())
    }

    pub fn list(&self) -> HashMap<String, Activity> {
        self.inner.read().clone()
    }

    pub fn get(&self, activity_name: &str) -> Option<Activity> {
        self.inner.read().get(activity_name).cloned()
    }

    /// Appends `email` to the activity's roster. Rejected operations leave
    /// the registry untouched. Capacity (`max_participants`) is descriptive
    /// and not checked here.
    pub fn signup(&self, activity_name: &str, email: &str) -> Result<(), RegistryError> {
        let mut activities = self.inner.write();
        let activity = activities
            .get_mut(activity_name)
            .ok_or(RegistryError::ActivityNotFound)?;

        if activity.participants.iter().any(|p| p == email) {
            return Err(RegistryError::AlreadySignedUp {
                activity: activity_name.to_string(),
                email: email.to_string(),
            });
        }

        activity.participants.push(email.to_string());
        Ok(())
    }

    /// Removes `email` from the activity's roster, preserving the order of
    /// the remaining entries.
    pub fn unregister(&self, activity_name: &str, email: &str) -> Result<(), RegistryError> {
        let mut activities = self.inner.write();
        let activity = activities
            .get_mut(activity_name)
            .ok_or(RegistryError::ActivityNotFound)?;

        let Some(pos) = activity.participants.iter().position(|p| p == email) else {
            return Err(RegistryError::NotRegistered {
                activity: activity_name.to_string(),
                email: email.to_string(),
            });
        };

        activity.participants.remove(pos);
        Ok(())
    }
}

pub fn seed_activities() -> HashMap<String, Activity> {
    HashMap::from([
        (
            "Debate Team".to_string(),
            Activity::new(
                "Develop argumentation and public speaking skills",
                "Wednesdays, 4:00 PM - 5:30 PM",
                16,
                &["alex@mergington.edu"],
            ),
        ),
        (
            "Science Club".to_string(),
            Activity::new(
                "Explore scientific experiments and discoveries",
                "Thursdays, 3:30 PM - 4:45 PM",
                18,
                &["james@mergington.edu", "lucy@mergington.edu"],
            ),
        ),
        (
            "Basketball Team".to_string(),
            Activity::new(
                "Competitive basketball training and games",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                15,
                &["marcus@mergington.edu"],
            ),
        ),
        (
            "Tennis Club".to_string(),
            Activity::new(
                "Tennis skills development and matches",
                "Tuesdays and Thursdays, 4:00 PM - 5:15 PM",
                12,
                &["sarah@mergington.edu", "ryan@mergington.edu"],
            ),
        ),
        (
            "Drama Club".to_string(),
            Activity::new(
                "Theater performances and acting workshops",
                "Mondays and Thursdays, 3:30 PM - 5:00 PM",
                25,
                &["isabella@mergington.edu"],
            ),
        ),
        (
            "Art Studio".to_string(),
            Activity::new(
                "Painting, drawing, and sculpture techniques",
                "Tuesdays and Fridays, 3:30 PM - 5:00 PM",
                20,
                &["hannah@mergington.edu", "grace@mergington.edu"],
            ),
        ),
        (
            "Chess Club".to_string(),
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                &["michael@mergington.edu", "daniel@mergington.edu"],
            ),
        ),
        (
            "Programming Class".to_string(),
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                &["emma@mergington.edu", "sophia@mergington.edu"],
            ),
        ),
        (
            "Gym Class".to_string(),
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                &["john@mergington.edu", "olivia@mergington.edu"],
            ),
        ),
    ])
}
