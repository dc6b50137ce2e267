// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for the loomsearch CLI.
//!
//! Three reports (search results, index inspection, verification), drawn in
//! boxes with OneDark colors on dark terminals and One Light on light ones.
//! `LOOMSEARCH_THEME` overrides the `COLORFGBG` hint; dark is the fallback.
//! `NO_COLOR` or a non-TTY stdout disables color entirely.

use std::sync::OnceLock;
use std::time::Duration;

use loomsearch::{ScoredResult, SearchIndex, VerificationReport};

/// Inner width of every box, border characters excluded.
pub const BOX_WIDTH: usize = 80;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

// ═══════════════════════════════════════════════════════════════════════════
// THEME & PALETTE
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

fn parse_theme(value: &str) -> Option<Theme> {
    match value.to_lowercase().as_str() {
        "light" | "l" => Some(Theme::Light),
        "dark" | "d" => Some(Theme::Dark),
        _ => None,
    }
}

/// `COLORFGBG` is "fg;bg"; backgrounds 7 and up (except 8) are light.
fn theme_from_colorfgbg(value: &str) -> Option<Theme> {
    let bg: u8 = value.split(';').next_back()?.parse().ok()?;
    (bg >= 7 && bg != 8).then_some(Theme::Light)
}

fn theme() -> Theme {
    static THEME: OnceLock<Theme> = OnceLock::new();
    *THEME.get_or_init(|| {
        std::env::var("LOOMSEARCH_THEME")
            .ok()
            .as_deref()
            .and_then(parse_theme)
            .or_else(|| {
                std::env::var("COLORFGBG")
                    .ok()
                    .as_deref()
                    .and_then(theme_from_colorfgbg)
            })
            .unwrap_or(Theme::Dark)
    })
}

/// The handful of colors the reports use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    Gray,
}

impl Color {
    fn rgb(self, theme: Theme) -> (u8, u8, u8) {
        match (theme, self) {
            (Theme::Dark, Color::Red) => (224, 108, 117),
            (Theme::Dark, Color::Green) => (152, 195, 121),
            (Theme::Dark, Color::Yellow) => (229, 192, 123),
            (Theme::Dark, Color::Blue) => (97, 175, 239),
            (Theme::Dark, Color::Magenta) => (198, 120, 221),
            (Theme::Dark, Color::Cyan) => (86, 182, 194),
            (Theme::Dark, Color::Gray) => (92, 99, 112),
            (Theme::Light, Color::Red) => (228, 86, 73),
            (Theme::Light, Color::Green) => (80, 161, 79),
            (Theme::Light, Color::Yellow) => (193, 132, 1),
            (Theme::Light, Color::Blue) => (64, 120, 242),
            (Theme::Light, Color::Magenta) => (166, 38, 164),
            (Theme::Light, Color::Cyan) => (1, 132, 188),
            (Theme::Light, Color::Gray) => (160, 161, 167),
        }
    }

    fn escape(self, theme: Theme) -> String {
        let (r, g, b) = self.rgb(theme);
        format!("\x1b[38;2;{};{};{}m", r, g, b)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// STYLING
// ═══════════════════════════════════════════════════════════════════════════

fn use_colors() -> bool {
    static ENABLED: OnceLock<bool> = OnceLock::new();
    *ENABLED.get_or_init(|| {
        std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
    })
}

fn wrap(prefix: &str, text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", prefix, text, RESET)
    } else {
        text.to_string()
    }
}

pub fn paint(color: Color, text: &str) -> String {
    wrap(&color.escape(theme()), text)
}

pub fn bold(color: Color, text: &str) -> String {
    wrap(&format!("{}{}", BOLD, color.escape(theme())), text)
}

pub fn dim(text: &str) -> String {
    wrap(DIM, text)
}

/// Length as it appears on screen, skipping ANSI escape sequences.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    s.chars()
        .filter(|&c| match (in_escape, c) {
            (_, '\x1b') => {
                in_escape = true;
                false
            }
            (true, 'm') => {
                in_escape = false;
                false
            }
            (escaping, _) => !escaping,
        })
        .count()
}

// ═══════════════════════════════════════════════════════════════════════════
// BOXES
// ═══════════════════════════════════════════════════════════════════════════

fn frame(text: &str) -> String {
    paint(Color::Gray, text)
}

/// │ content          │
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("{}{}{}{}", frame("│"), content, " ".repeat(pad), frame("│"));
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let label = format!(" {} ", bold(Color::Cyan, label));
    let rest = BOX_WIDTH.saturating_sub(1 + visible_len(&label));
    println!("{}{}{}", frame("┌─"), label, frame(&format!("{}┐", "─".repeat(rest))));
}

/// └──────────────────┘
pub fn section_bot() {
    println!("{}", frame(&format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

fn heading(text: &str) {
    println!("{}", bold(Color::Blue, text));
}

// ═══════════════════════════════════════════════════════════════════════════
// FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

/// Truncate to `max_len` characters, adding a `...` prefix if needed
pub fn truncate_path(path: &str, max_len: usize) -> String {
    let count = path.chars().count();
    if count <= max_len {
        return path.to_string();
    }
    let keep = max_len.saturating_sub(3);
    let tail: String = path.chars().skip(count - keep).collect();
    format!("...{}", tail)
}

/// Truncate to `max_len` characters, adding a `...` suffix if needed
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let head: String = text.chars().take(max_len.saturating_sub(3)).collect();
    format!("{}...", head)
}

/// Color-coded BM25 score
pub fn score_value(score: f64) -> String {
    let text = format!("{:>7.3}", score);
    match score {
        s if s >= 5.0 => bold(Color::Green, &text),
        s if s >= 2.0 => paint(Color::Green, &text),
        s if s >= 0.5 => paint(Color::Yellow, &text),
        _ => paint(Color::Gray, &text),
    }
}

/// Color-coded timing value in ms
pub fn timing_ms(value: f64) -> String {
    let text = format!("{:.3} ms", value);
    let color = if value < 1.0 {
        Color::Green
    } else if value < 10.0 {
        Color::Yellow
    } else {
        Color::Red
    };
    paint(color, &text)
}

/// "weave / loom" grouping label, if the document has one
fn grouping_label(result: &ScoredResult) -> Option<String> {
    match (&result.weave, &result.loom) {
        (Some(weave), Some(loom)) => Some(format!("{} / {}", weave, loom)),
        (Some(weave), None) => Some(weave.clone()),
        (None, Some(loom)) => Some(loom.clone()),
        (None, None) => None,
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// REPORTS
// ═══════════════════════════════════════════════════════════════════════════

/// Print ranked search results
pub fn print_results(query: &str, terms: &[String], results: &[ScoredResult], elapsed: Duration) {
    heading("LOOMSEARCH");

    section_top("QUERY");
    row(&format!("  {} {}", dim("query:"), query));
    let terms = if terms.is_empty() {
        paint(Color::Gray, "(no searchable terms)")
    } else {
        terms.join(" ")
    };
    row(&format!("  {} {}", dim("terms:"), terms));
    row(&format!(
        "  {} {}",
        dim("time: "),
        timing_ms(elapsed.as_secs_f64() * 1000.0)
    ));
    section_bot();

    section_top(&format!("RESULTS ({})", results.len()));
    if results.is_empty() {
        row(&format!("  {}", paint(Color::Gray, "No matches")));
    }
    for (rank, result) in results.iter().enumerate() {
        let title = if result.title.is_empty() {
            paint(Color::Gray, "(untitled)")
        } else {
            bold(Color::Cyan, &truncate_text(&result.title, 52))
        };
        row(&format!(
            "  {} {} {}",
            pad_right(&paint(Color::Gray, &format!("{:>2}.", rank + 1)), 3),
            score_value(result.combined_score),
            title
        ));
        row(&format!("             {}", paint(Color::Blue, &truncate_path(&result.path, 64))));
        if let Some(group) = grouping_label(result) {
            row(&format!("             {}", paint(Color::Magenta, &truncate_text(&group, 64))));
        }
        for contribution in &result.matched_terms {
            row(&format!(
                "             {} {}",
                pad_right(&paint(Color::Yellow, &truncate_text(&contribution.term, 24)), 24),
                dim(&format!("{:+.4}", contribution.score))
            ));
        }
    }
    section_bot();
}

/// Print corpus statistics and the `top` terms by document frequency
pub fn print_inspect(path: &str, index: &SearchIndex, top: usize) {
    heading("LOOMSEARCH INDEX");

    let stats = index.corpus_stats;
    section_top("CORPUS");
    row(&format!("  {} {}", dim("file:            "), truncate_path(path, 58)));
    row(&format!("  {} {}", dim("documents:       "), index.documents.len()));
    row(&format!("  {} {}", dim("terms:           "), index.vocabulary.len()));
    row(&format!("  {} {}", dim("totalDocuments:  "), stats.total_documents));
    row(&format!(
        "  {} {:.3}",
        dim("avgDocLength:    "),
        stats.average_document_length
    ));
    row(&format!("  {} {}", dim("vocabularySize:  "), stats.vocabulary_size));
    if index.embeddings_blob.is_some() {
        row(&format!("  {}", paint(Color::Gray, "embeddings blob present (ignored)")));
    }
    section_bot();

    let mut terms: Vec<(&String, usize)> = index
        .vocabulary
        .iter()
        .map(|(term, postings)| (term, postings.len()))
        .collect();
    terms.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    section_top("TOP TERMS");
    if terms.is_empty() {
        row(&format!("  {}", paint(Color::Gray, "Empty vocabulary")));
    }
    for (term, df) in terms.into_iter().take(top) {
        row(&format!(
            "  {} {}",
            pad_right(&paint(Color::Cyan, &truncate_text(term, 40)), 42),
            dim(&format!("df={}", df))
        ));
    }
    section_bot();
}

/// Print a verification report
pub fn print_report(path: &str, report: &VerificationReport) {
    heading("LOOMSEARCH VERIFY");

    section_top("SUMMARY");
    row(&format!("  {} {}", dim("file:      "), truncate_path(path, 64)));
    row(&format!("  {} {}", dim("documents: "), report.documents));
    row(&format!("  {} {}", dim("terms:     "), report.terms));
    row(&format!("  {} {}", dim("postings:  "), report.postings));
    section_bot();

    section_top(&format!("ISSUES ({})", report.issues.len()));
    if report.is_clean() {
        row(&format!("  {}", bold(Color::Green, "✓ No issues found")));
    }
    for issue in &report.issues {
        row(&format!(
            "  {} {}",
            bold(Color::Red, "✗"),
            truncate_text(&issue.to_string(), BOX_WIDTH - 4)
        ));
    }
    section_bot();
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
