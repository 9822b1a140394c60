use std::collections::BTreeMap;

use crate::models::Activity;
use crate::store::{ActivityDirectory, DirectoryError};

pub fn list_activities(directory: &ActivityDirectory) -> BTreeMap<String, Activity> {
    directory.snapshot()
}

/// Register a student for an activity and return the confirmation line shown
/// to them.
pub fn sign_up(
    directory: &ActivityDirectory,
    activity_name: &str,
    email: &str,
) -> Result<String, DirectoryError> {
    directory.signup(activity_name, email)?;
    Ok(format!("Signed up {} for {}", email, activity_name))
}

/// Take a student off an activity's roster.
pub fn unregister(
    directory: &ActivityDirectory,
    activity_name: &str,
    email: &str,
) -> Result<String, DirectoryError> {
    directory.unregister(activity_name, email)?;
    Ok(format!("Unregistered {} from {}", email, activity_name))
}
