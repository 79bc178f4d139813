use tracing::{info, warn};

use crate::cli::GenerateArgs;
use crate::config::Config;
use crate::errors::AppError;
use crate::parser::document::parse_resume;
use crate::profile::load_profile;
use crate::templates::catalog::find_template;
use crate::templates::merge::generate_document;

/// Parses the résumé input, then merges the author profile into the chosen
/// template and writes the output document.
///
/// The template placeholders are filled from the profile only; the parsed
/// résumé is surfaced in the log so an empty input is visible, not fatal.
pub fn run(config: &Config, args: &GenerateArgs) -> Result<(), AppError> {
    let text = std::fs::read_to_string(&args.file)?;
    let resume = parse_resume(&text);

    if resume.is_empty() {
        warn!("No tagged sections found in {}", args.file.display());
    } else {
        info!(
            "Parsed {} skill categories, {} experience entries",
            resume.skills.categories.len(),
            resume.experience.len()
        );
    }

    let profile = load_profile(&config.profile_path)?;
    let template = find_template(&config.templates_dir, &args.template)?;
    let output_name = args.output.clone().unwrap_or_else(|| template.name.clone());

    let written = generate_document(&template.path, &profile, &config.output_dir, &output_name)?;
    println!("Generated {}", written.display());
    Ok(())
}
