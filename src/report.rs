use std::fmt::Write;

use chrono::{DateTime, Utc};
use html_escape::encode_text;

use crate::models::ConvictionScore;
use crate::normalize::round_display;
use crate::ranking::{conviction_class, summarize_spread};

pub struct ReportOptions<'a> {
    pub title: &'a str,
    pub max_score: f64,
    pub top_n: usize,
    pub refresh_secs: u64,
    pub generated_at: DateTime<Utc>,
}

pub fn build_markdown(options: &ReportOptions<'_>, scores: &[ConvictionScore]) -> String {
    let spread = summarize_spread(scores);
    let mut output = String::new();

    let _ = writeln!(output, "# {}", options.title);
    let _ = writeln!(
        output,
        "Generated {} (max raw score {})",
        options.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
        options.max_score
    );
    let _ = writeln!(output);
    let _ = writeln!(output, "## Spread");

    if scores.is_empty() {
        let _ = writeln!(output, "No candidates scored.");
        return output;
    }

    let _ = writeln!(
        output,
        "- {} candidates, conviction {:.1}% to {:.1}%",
        spread.count, spread.min, spread.max
    );
    let _ = writeln!(output, "- {} distinct displayed values", spread.distinct);

    let _ = writeln!(output);
    let _ = writeln!(output, "## Top Conviction");
    let _ = writeln!(output, "| Symbol | Raw score | Conviction |");
    let _ = writeln!(output, "|---|---:|---:|");
    for score in scores.iter().take(options.top_n) {
        let _ = writeln!(
            output,
            "| {} | {:.2} | {:.1}% |",
            escape_table_cell(&score.symbol),
            score.raw_score,
            round_display(score.conviction)
        );
    }

    let noted: Vec<&ConvictionScore> = scores
        .iter()
        .take(options.top_n)
        .filter(|s| !s.note.is_empty())
        .collect();
    if !noted.is_empty() {
        let _ = writeln!(output);
        let _ = writeln!(output, "## Notes");
        for score in noted {
            let _ = writeln!(output, "- {}: {}", score.symbol, score.note);
        }
    }

    output
}

pub fn build_html(options: &ReportOptions<'_>, scores: &[ConvictionScore]) -> String {
    let spread = summarize_spread(scores);
    let title = encode_text(options.title);
    let mut output = String::new();

    let _ = writeln!(output, "<!DOCTYPE html>");
    let _ = writeln!(output, "<html>");
    let _ = writeln!(output, "<head>");
    let _ = writeln!(output, "    <title>{title}</title>");
    let _ = writeln!(output, "    <meta charset=\"utf-8\">");
    let _ = writeln!(
        output,
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">"
    );
    let _ = writeln!(
        output,
        "    <meta http-equiv=\"refresh\" content=\"{}\">",
        options.refresh_secs
    );
    let _ = writeln!(output, "    <style>{STYLE}</style>");
    let _ = writeln!(output, "</head>");
    let _ = writeln!(output, "<body>");
    let _ = writeln!(output, "<div class=\"container\">");
    let _ = writeln!(output, "    <div class=\"card\">");
    let _ = writeln!(output, "        <h1>{title}</h1>");
    let _ = writeln!(
        output,
        "        <p>Last updated: {} | Max raw score: {}</p>",
        options.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
        options.max_score
    );
    let _ = writeln!(output, "    </div>");
    let _ = writeln!(output, "    <div class=\"card\">");

    if scores.is_empty() {
        let _ = writeln!(output, "        <p>No candidates scored.</p>");
    } else {
        let _ = writeln!(
            output,
            "        <h3>Conviction ({} candidates, {} distinct, {:.1}% to {:.1}%)</h3>",
            spread.count, spread.distinct, spread.min, spread.max
        );
        let _ = writeln!(output, "        <table>");
        let _ = writeln!(
            output,
            "            <thead><tr><th>Symbol</th><th>Raw score</th><th>Conviction</th><th>Note</th></tr></thead>"
        );
        let _ = writeln!(output, "            <tbody>");
        for score in scores.iter().take(options.top_n) {
            let _ = writeln!(
                output,
                "                <tr><td class=\"symbol\">{}</td><td>{:.2}</td><td class=\"{}\">{:.1}%</td><td>{}</td></tr>",
                encode_text(&score.symbol),
                score.raw_score,
                conviction_class(score.conviction),
                round_display(score.conviction),
                encode_text(&score.note)
            );
        }
        let _ = writeln!(output, "            </tbody>");
        let _ = writeln!(output, "        </table>");
    }

    let _ = writeln!(output, "    </div>");
    let _ = writeln!(output, "</div>");
    let _ = writeln!(output, "</body>");
    let _ = writeln!(output, "</html>");

    output
}

const STYLE: &str = "body { font-family: -apple-system, system-ui, sans-serif; margin: 0; padding: 20px; background: #f3f4f6; } \
.container { max-width: 1100px; margin: 0 auto; } \
.card { background: #fff; padding: 25px; border-radius: 12px; margin-bottom: 25px; } \
.positive { color: #22c55e; } .negative { color: #ef4444; } .neutral { color: #6b7280; } \
table { width: 100%; border-collapse: collapse; } \
th, td { padding: 12px; text-align: left; border-bottom: 1px solid #e5e7eb; } \
.symbol { font-weight: bold; font-family: monospace; }";

fn escape_table_cell(value: &str) -> String {
    value.replace('|', "\\|")
}
