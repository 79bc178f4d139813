use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::errors::AppError;

/// Extensions recognized as template documents.
const TEMPLATE_EXTENSIONS: &[&str] = &["md", "txt"];

/// A template document found in the templates folder.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateFile {
    pub name: String,
    pub path: PathBuf,
}

/// Lists template documents directly inside `dir`, sorted by file name.
///
/// Subdirectories are not descended into and files with other extensions
/// are skipped.
pub fn list_templates(dir: &Path) -> Result<Vec<TemplateFile>, AppError> {
    if !dir.is_dir() {
        return Err(AppError::TemplatesDirNotFound {
            path: dir.display().to_string(),
        });
    }

    let mut templates: Vec<TemplateFile> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file() && has_template_extension(entry.path()))
        .map(|entry| TemplateFile {
            name: entry.file_name().to_string_lossy().into_owned(),
            path: entry.into_path(),
        })
        .collect();

    templates.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(templates)
}

/// Finds a template by file name in the catalog.
pub fn find_template(dir: &Path, name: &str) -> Result<TemplateFile, AppError> {
    list_templates(dir)?
        .into_iter()
        .find(|template| template.name == name)
        .ok_or_else(|| AppError::TemplateNotFound {
            name: name.to_string(),
        })
}

fn has_template_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| TEMPLATE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn seed(dir: &TempDir, names: &[&str]) {
        for name in names {
            fs::write(dir.path().join(name), "body").unwrap();
        }
    }

    #[test]
    fn test_lists_sorted_by_name() {
        let dir = TempDir::new().unwrap();
        seed(&dir, &["zeta.md", "alpha.md", "mid.txt"]);

        let names: Vec<String> = list_templates(dir.path())
            .unwrap()
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, vec!["alpha.md", "mid.txt", "zeta.md"]);
    }

    #[test]
    fn test_other_extensions_skipped() {
        let dir = TempDir::new().unwrap();
        seed(&dir, &["resume.md", "notes.docx", "script.sh"]);

        let templates = list_templates(dir.path()).unwrap();
        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].name, "resume.md");
    }

    #[test]
    fn test_subdirectories_not_descended() {
        let dir = TempDir::new().unwrap();
        seed(&dir, &["top.md"]);
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested/inner.md"), "body").unwrap();

        let templates = list_templates(dir.path()).unwrap();
        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].name, "top.md");
    }

    #[test]
    fn test_missing_dir_is_error() {
        let dir = TempDir::new().unwrap();
        let err = list_templates(&dir.path().join("absent")).unwrap_err();
        assert!(matches!(err, AppError::TemplatesDirNotFound { .. }));
    }

    #[test]
    fn test_find_template_by_name() {
        let dir = TempDir::new().unwrap();
        seed(&dir, &["classic.md", "modern.md"]);

        let found = find_template(dir.path(), "modern.md").unwrap();
        assert_eq!(found.path, dir.path().join("modern.md"));
    }

    #[test]
    fn test_find_unknown_template_is_error() {
        let dir = TempDir::new().unwrap();
        seed(&dir, &["classic.md"]);

        let err = find_template(dir.path(), "missing.md").unwrap_err();
        assert!(matches!(err, AppError::TemplateNotFound { .. }));
    }
}
