use std::path::Path;

use tracing::warn;

use crate::errors::AppError;
use crate::parser::document::parse_resume;
use crate::preview::render_preview;

/// Parses a résumé file and prints the structured result.
pub fn run(file: &Path, json: bool) -> Result<(), AppError> {
    let text = std::fs::read_to_string(file)?;
    let resume = parse_resume(&text);

    if resume.is_empty() {
        warn!("No tagged sections found in {}", file.display());
    }

    if json {
        let rendered =
            serde_json::to_string_pretty(&resume).map_err(|e| AppError::Internal(e.into()))?;
        println!("{rendered}");
    } else {
        print!("{}", render_preview(&resume));
    }
    Ok(())
}
