use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::records::ResumeData;
use super::sample::sample_resume;

/// Loads the resume dataset from `path`, or falls back to the built-in
/// sample when no path was given.
pub fn load_resume(path: Option<&Path>) -> Result<ResumeData> {
    let Some(path) = path else {
        return Ok(sample_resume());
    };

    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read resume file {}", path.display()))?;
    let data: ResumeData = serde_json::from_str(&raw)
        .with_context(|| format!("invalid resume JSON in {}", path.display()))?;

    for tag in data.untracked_skill_tags() {
        log::warn!("skill tag {tag:?} is not in the skill list; it will not appear in the graph");
    }

    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_path_yields_sample() {
        let data = load_resume(None).unwrap();
        assert_eq!(data.name, "Adrian Peh");
        assert!(!data.experiences.is_empty());
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = load_resume(Some(Path::new("/nonexistent/resume.json")));
        assert!(result.is_err());
    }
}
