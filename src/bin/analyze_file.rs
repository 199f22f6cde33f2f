use std::path::Path;

use ai_detector_lib::init_console_only_logging;
use ai_detector_lib::models::AnalysisOutcome;
use ai_detector_lib::services::config_store::ConfigStore;
use ai_detector_lib::services::detection::analyze;
use ai_detector_lib::services::pdf_extractor::{extract_text_from_pdf, is_pdf_path};
use ai_detector_lib::services::report_writer::{write_report, Interpretation};
use anyhow::{bail, Context};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

fn preview(s: &str, max_chars: usize) -> String {
    let mut out: String = s.chars().take(max_chars).collect();
    if s.chars().count() > max_chars {
        out.push_str("...");
    }
    out.replace('\n', " ")
}

fn parse_arg_value(args: &[String], key: &str) -> Option<String> {
    args.iter()
        .position(|a| a == key)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!(
            "Usage:\n  cargo run --bin analyze_file -- <path.txt|path.pdf> [--out <json_path>] [--report <txt_path>]\n\nNotes:\n  - PDF input is converted to text before analysis.\n  - `--report` writes the plain-text detection report."
        );
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    init_console_only_logging(env_filter);

    let path = args[1].clone();
    let out_path = parse_arg_value(&args, "--out");
    let report_path = parse_arg_value(&args, "--report");
    let preview_chars = ConfigStore::open_default().load_or_default().report.preview_chars;

    let input = Path::new(&path);
    let raw = if is_pdf_path(input) {
        extract_text_from_pdf(input)?
    } else {
        std::fs::read_to_string(input).with_context(|| format!("read file failed: {}", path))?
    };
    let text = raw.trim().to_string();
    if text.is_empty() {
        bail!("{} contains no text", path);
    }

    let outcome = analyze(&text);

    println!("File: {}", path);
    println!("Text: {} chars", text.chars().count());
    println!();

    match &outcome {
        AnalysisOutcome::Failed { error } => {
            println!("Error: {}", error);
        }
        AnalysisOutcome::Report(report) => {
            let d = &report.details;
            println!("AI Content Score: {}%", report.ai_percentage);
            println!("{}", Interpretation::from_score(report.ai_percentage).message());
            println!();
            println!("Sentence Variety: {:>3}%", d.sentence_variety);
            println!("Word Repetition:  {:>3}%", d.word_repetition);
            println!("Transition Usage: {:>3}%", d.transition_usage);
            println!("Burstiness:       {:>3}%", d.burstiness);
            println!();
            if report.highlighted_sections.is_empty() {
                println!("No specific AI-generated sections identified.");
            } else {
                println!("Highlighted sections: {}", report.highlighted_sections.len());
                for (i, s) in report.highlighted_sections.iter().enumerate() {
                    println!("[H{}] {}", i + 1, preview(s, 140));
                }
            }

            if let Some(report_path) = &report_path {
                write_report(Path::new(report_path), report, &text, preview_chars)?;
                println!();
                println!("Wrote report: {}", report_path);
            }
        }
    }

    if let Some(out_path) = out_path {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Output<'a> {
            file: &'a str,
            text_chars: usize,
            result: &'a AnalysisOutcome,
        }

        let out = Output {
            file: &path,
            text_chars: text.chars().count(),
            result: &outcome,
        };

        let json = serde_json::to_string_pretty(&out)?;
        std::fs::write(&out_path, json).with_context(|| format!("write out failed: {}", out_path))?;
        println!();
        println!("Wrote JSON: {}", out_path);
    }

    Ok(())
}
