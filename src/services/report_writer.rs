// Report Writer
// Renders an analysis report as a plain-text document

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::models::AnalysisReport;

pub const NO_HIGHLIGHTS_MESSAGE: &str = "No specific AI-generated sections identified.";

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to save report: {0}")]
    Io(#[from] std::io::Error),
}

/// Verdict band for an overall score.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Interpretation {
    MostlyHuman,
    SomeAiTraits,
    ModerateAi,
    HighAi,
}

impl Interpretation {
    pub fn from_score(ai_percentage: u8) -> Self {
        match ai_percentage {
            0..=29 => Self::MostlyHuman,
            30..=49 => Self::SomeAiTraits,
            50..=69 => Self::ModerateAi,
            _ => Self::HighAi,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::MostlyHuman => "This content appears to be mostly human-written.",
            Self::SomeAiTraits => {
                "This content shows some characteristics of AI-generated text, but is likely mostly human-written."
            }
            Self::ModerateAi => {
                "This content has a moderate likelihood of being AI-generated or heavily edited AI content."
            }
            Self::HighAi => "This content has a high likelihood of being AI-generated.",
        }
    }
}

/// Render the full text report, quoting at most `preview_chars` of the input.
pub fn render_report(report: &AnalysisReport, analyzed_text: &str, preview_chars: usize) -> String {
    let details = &report.details;
    let interpretation = Interpretation::from_score(report.ai_percentage);

    let mut out = String::new();
    out.push_str("AI Content Detection Report\n");
    out.push_str("==========================\n\n");
    out.push_str(&format!("Overall AI Score: {}%\n\n", report.ai_percentage));
    out.push_str("Detailed Analysis:\n");
    out.push_str(&format!("- Sentence Variety: {}%\n", details.sentence_variety));
    out.push_str(&format!("- Word Repetition: {}%\n", details.word_repetition));
    out.push_str(&format!("- Transition Usage: {}%\n", details.transition_usage));
    out.push_str(&format!("- Burstiness: {}%\n\n", details.burstiness));
    out.push_str(&format!("Interpretation:\n{}\n\n", interpretation.message()));
    out.push_str("Highlighted AI Sections:\n");

    if report.highlighted_sections.is_empty() {
        out.push_str(NO_HIGHLIGHTS_MESSAGE);
        out.push_str("\n\n");
    } else {
        for section in &report.highlighted_sections {
            out.push_str(&format!("• {}\n\n", section));
        }
    }

    let preview: String = analyzed_text.chars().take(preview_chars).collect();
    out.push_str(&format!("Analyzed Text (first {} chars):\n", preview_chars));
    out.push_str("--------------------------------\n");
    out.push_str(&format!("{}...\n\n", preview));
    out.push_str("Report generated by AI Content Detector");
    out
}

/// Render and write the report to `path`.
pub fn write_report(
    path: &Path,
    report: &AnalysisReport,
    analyzed_text: &str,
    preview_chars: usize,
) -> Result<(), ReportError> {
    let content = render_report(report, analyzed_text, preview_chars);
    fs::write(path, content)?;
    info!(path = %path.display(), ai_percentage = report.ai_percentage, "report.saved");
    Ok(())
}
