//! Plain-text rendering of an assessment result.

use std::fmt::{self, Write};

use readiness::{AssessmentResult, QuestionBank, Recommendation};

const BAR_WIDTH: usize = 20;

/// A fixed-width progress bar such as `[#########-----------]`.
pub fn bar(percentage: f64) -> String {
    let filled = ((percentage.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

fn headline(recommendation: Recommendation) -> &'static str {
    match recommendation {
        Recommendation::Yes => "Recommended: this career path is a strong fit.",
        Recommendation::Maybe => "Possible fit: worth pursuing with targeted development.",
        Recommendation::No => "Not recommended right now: consider the alternative paths below.",
    }
}

fn list(out: &mut impl Write, title: &str, items: &[String]) -> fmt::Result {
    writeln!(out, "\n{title}")?;
    for item in items {
        writeln!(out, "  - {item}")?;
    }
    Ok(())
}

/// The full results page, printable through [`fmt::Display`].
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    pub result: &'a AssessmentResult,
    pub bank: &'a QuestionBank,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_report(f, self.result, self.bank)
    }
}

fn write_report(
    out: &mut impl Write,
    result: &AssessmentResult,
    bank: &QuestionBank,
) -> fmt::Result {
    writeln!(out, "Your Assessment Results")?;
    if let Some(epilogue) = &bank.epilogue {
        writeln!(out, "{epilogue}")?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "Overall Score: {:.0}%  ({})",
        result.overall_score, result.recommendation
    )?;
    writeln!(out, "{}", headline(result.recommendation))?;

    writeln!(out, "\nScore Breakdown")?;
    for (label, score) in [
        ("Personality & Motivation", result.psychometric_score),
        ("Technical Knowledge", result.technical_score),
    ] {
        writeln!(out, "  {label:<26} {} {score:>3.0}%", bar(score))?;
    }

    writeln!(out, "\nWISCAR Framework")?;
    for (dimension, score) in result.wiscar_scores.iter() {
        writeln!(out, "  {:<26} {} {score:>3.0}%", dimension.label(), bar(score))?;
    }

    list(out, "Key Insights", &result.insights)?;
    list(out, "Next Steps", &result.next_steps)?;
    list(out, "Alternative Paths", &result.alternative_paths)?;

    writeln!(out, "\nConfidence: {:.0}%", result.confidence_score)
}

/// The full results page as a string.
pub fn render(result: &AssessmentResult, bank: &QuestionBank) -> String {
    Report { result, bank }.to_string()
}
