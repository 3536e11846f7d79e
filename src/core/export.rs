// src/core/export.rs

use crate::core::models::AnalysisResult;
use chrono::{DateTime, Local};
use std::fmt::Write as _;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

/// Renders the report as Markdown.
///
/// The submitted text is not written as a whole, but each flagged section is
/// quoted verbatim, so the file can hold excerpts of it.
pub fn render_markdown(result: &AnalysisResult, generated_at: DateTime<Local>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# Analysis Report");
    let _ = writeln!(out);
    let _ = writeln!(out, "_Generated {}_", generated_at.format("%Y-%m-%d %H:%M:%S"));
    let _ = writeln!(out);
    let _ = writeln!(out, "| Originality Score | Similarity Index | Outcome |");
    let _ = writeln!(out, "|---|---|---|");
    let _ = writeln!(
        out,
        "| {}/100 | {}% | {} |",
        result.score,
        result.similarity_percentage,
        result.outcome()
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "## Detailed AI Analysis");
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", result.analysis.trim_end());
    let _ = writeln!(out);

    if result.flagged_sections.is_empty() {
        let _ = writeln!(out, "No specific sections were flagged as suspicious.");
    } else {
        let _ = writeln!(out, "## Flagged Sections");
        let _ = writeln!(out);
        for (idx, section) in result.flagged_sections.iter().enumerate() {
            let _ = writeln!(out, "{}. > \"{}\"", idx + 1, section.text.replace('\n', " "));
            let _ = writeln!(out, "   **Issue:** {}", section.reason);
            let _ = writeln!(out);
        }
    }
    out
}

/// Writes the report into `dir` and returns the path of the new file.
pub fn export_report(result: &AnalysisResult, dir: &Path) -> io::Result<PathBuf> {
    let now = Local::now();
    std::fs::create_dir_all(dir)?;
    let path = dir.join(format!("originality-report-{}.md", now.format("%Y%m%d-%H%M%S")));
    std::fs::write(&path, render_markdown(result, now))?;
    info!(path = %path.display(), "Exported analysis report.");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::FlaggedSection;

    fn result_with(sections: Vec<FlaggedSection>) -> AnalysisResult {
        AnalysisResult {
            score: 42,
            similarity_percentage: 37,
            analysis: "Several passages mirror a 2019 survey.".to_string(),
            flagged_sections: sections,
        }
    }

    #[test]
    fn markdown_lists_flagged_sections_in_order() {
        let result = result_with(vec![
            FlaggedSection { text: "first excerpt".into(), reason: "Verbatim match".into() },
            FlaggedSection { text: "second\nexcerpt".into(), reason: "Paraphrase".into() },
        ]);
        let md = render_markdown(&result, Local::now());

        assert!(md.contains("| 42/100 | 37% | Review Needed |"));
        assert!(md.contains("1. > \"first excerpt\""));
        assert!(md.contains("2. > \"second excerpt\""));
        assert!(md.contains("**Issue:** Paraphrase"));
        assert!(md.find("first excerpt").unwrap() < md.find("second excerpt").unwrap());
    }

    #[test]
    fn markdown_notes_when_nothing_was_flagged() {
        let md = render_markdown(&result_with(vec![]), Local::now());
        assert!(md.contains("No specific sections were flagged as suspicious."));
        assert!(!md.contains("## Flagged Sections"));
    }

    #[test]
    fn export_writes_a_file() {
        let dir = std::env::temp_dir().join(format!(
            "originality-export-test-{}",
            Local::now().timestamp_nanos_opt().unwrap_or_default()
        ));
        let path = export_report(&result_with(vec![]), &dir).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# Analysis Report"));
        let _ = std::fs::remove_dir_all(&dir);
    }
}
