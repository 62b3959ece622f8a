// Rust guideline compliant 2026-10-12

//! Builds the analysis strings the detectors run against.

use domain::JobRecord;

/// Lower-cased `title + " " + description`, shared by the text detectors.
///
/// Absent fields contribute `""`; no other transformation is applied.
#[must_use]
pub fn analysis_text(job: &JobRecord) -> String {
    raw_text(job).to_lowercase()
}

/// `title + " " + description` with original casing, for the tone check.
#[must_use]
pub fn raw_text(job: &JobRecord) -> String {
    format!("{} {}", job.title(), job.description())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_with_single_space_and_lowercases() {
        let job = JobRecord::new("Data ENTRY", "Work From Home!");
        assert_eq!(analysis_text(&job), "data entry work from home!");
        assert_eq!(raw_text(&job), "Data ENTRY Work From Home!");
    }

    #[test]
    fn missing_fields_become_empty() {
        let job = JobRecord::default();
        assert_eq!(analysis_text(&job), " ");

        let title_only = JobRecord { job_title: Some("Clerk".to_owned()), ..JobRecord::default() };
        assert_eq!(analysis_text(&title_only), "clerk ");
    }

    #[test]
    fn punctuation_is_preserved() {
        let job = JobRecord::new("A", "node.js, $99 fee!!");
        assert_eq!(analysis_text(&job), "a node.js, $99 fee!!");
    }
}
