use std::path::Path;

use crate::errors::AppError;
use crate::templates::catalog::list_templates;

/// Prints the template catalog, one file name per line.
pub fn run(templates_dir: &Path) -> Result<(), AppError> {
    let templates = list_templates(templates_dir)?;
    if templates.is_empty() {
        println!("No templates found in {}", templates_dir.display());
        return Ok(());
    }
    for template in templates {
        println!("{}", template.name);
    }
    Ok(())
}
