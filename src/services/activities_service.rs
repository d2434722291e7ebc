use std::collections::HashMap;

use crate::models::Activity;
use crate::registry::{ActivityRegistry, RegistryError};

/// Full catalog snapshot, name -> record.
pub fn list_activities(registry: &ActivityRegistry) -> HashMap<String, Activity> {
    registry.list()
}

pub fn signup(
    registry: &ActivityRegistry,
    activity_name: &str,
    email: &str,
) -> Result<String, RegistryError> {
    registry.signup(activity_name, email)?;
    Ok(format!("Signed up {} for {}", email, activity_name))
}

pub fn unregister(
    registry: &ActivityRegistry,
    activity_name: &str,
    email: &str,
) -> Result<String, RegistryError> {
    registry.unregister(activity_name, email)?;
    Ok(format!("Unregistered {} from {}", email, activity_name))
}
