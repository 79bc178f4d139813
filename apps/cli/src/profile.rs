use std::path::Path;

use tracing::debug;

use crate::errors::AppError;
use crate::models::user::UserProfile;

/// Loads the author profile from a JSON file.
///
/// Missing and malformed files are the caller's problem to report; a
/// profile with missing fields is fine and loads with empty strings.
pub fn load_profile(path: &Path) -> Result<UserProfile, AppError> {
    if !path.is_file() {
        return Err(AppError::ProfileNotFound {
            path: path.display().to_string(),
        });
    }

    let json = std::fs::read_to_string(path)?;
    let profile: UserProfile =
        serde_json::from_str(&json).map_err(|source| AppError::ProfileParse {
            path: path.display().to_string(),
            source,
        })?;

    debug!("Loaded profile for '{}' from {}", profile.name, path.display());
    Ok(profile)
}
