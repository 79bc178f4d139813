use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::errors::AppError;
use crate::models::user::UserProfile;

/// Placeholder tokens paired with their profile values.
fn replacements(profile: &UserProfile) -> [(&'static str, &str); 6] {
    [
        ("{name}", profile.name.as_str()),
        ("{title}", profile.title.as_str()),
        ("{email}", profile.email.as_str()),
        ("{phone}", profile.phone.as_str()),
        ("{linkedin}", profile.linked_in.as_str()),
        ("{location}", profile.location.as_str()),
    ]
}

/// Replaces every profile placeholder in `template_text`.
///
/// All occurrences of each token are replaced; unknown tokens are left
/// untouched. An empty profile field substitutes an empty string.
pub fn merge_profile(template_text: &str, profile: &UserProfile) -> String {
    let mut merged = template_text.to_string();
    for (token, value) in replacements(profile) {
        merged = merged.replace(token, value);
    }
    merged
}

/// Reads a template, merges the profile into it, and writes the result as
/// `output_name` under `output_dir`, creating the folder if needed.
/// Returns the written path.
pub fn generate_document(
    template_path: &Path,
    profile: &UserProfile,
    output_dir: &Path,
    output_name: &str,
) -> Result<PathBuf, AppError> {
    if !template_path.is_file() {
        return Err(AppError::TemplateNotFound {
            name: template_path.display().to_string(),
        });
    }

    let template_text = fs::read_to_string(template_path)?;
    let merged = merge_profile(&template_text, profile);

    fs::create_dir_all(output_dir)?;
    let output_path = output_dir.join(output_name);
    fs::write(&output_path, merged)?;

    info!("Wrote merged document to {}", output_path.display());
    Ok(output_path)
}
