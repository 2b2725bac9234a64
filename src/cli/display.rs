// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the concordance CLI.
//!
//! OneDark colors on dark terminals, One Light on light ones. The theme comes
//! from `CONCORDANCE_THEME` if set, then the `COLORFGBG` hint, and defaults to
//! dark. Respects `NO_COLOR` and stays plain when stdout is not a TTY.

use std::sync::OnceLock;

use concordance::{HistoryEntry, IndexStats, MatchType, SearchResult, Suggestion, SuggestionKind};

/// Width between the box borders.
pub const BOX_WIDTH: usize = 78;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("CONCORDANCE_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg": background 7 and up (except 8) is a light terminal
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121);
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123);
    pub const BLUE: (u8, u8, u8) = (97, 175, 239);
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221);
    pub const CYAN: (u8, u8, u8) = (86, 182, 194);
    pub const GRAY: (u8, u8, u8) = (92, 99, 112);
}

mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79);
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1);
    pub const BLUE: (u8, u8, u8) = (64, 120, 242);
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164);
    pub const CYAN: (u8, u8, u8) = (1, 132, 188);
    pub const GRAY: (u8, u8, u8) = (160, 161, 167);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            match theme() {
                Theme::Dark => rgb(onedark::$name),
                Theme::Light => rgb(onelight::$name),
            }
        }
    };
}

theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

pub fn use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Theme color plus modifiers, or plain text when colors are off.
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Visible length, ignoring ANSI escapes.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// ┌─ LABEL ─────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        themed(GRAY, &[], "┌"),
        label_part,
        themed(GRAY, &[], &format!("{}┐", "─".repeat(remaining)))
    );
}

/// │ content     │
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    let border = themed(GRAY, &[], "│");
    println!("{}{}{}{}", border, content, " ".repeat(pad), border);
}

/// └─────────────┘
pub fn section_bot() {
    println!("{}", themed(GRAY, &[], &format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

pub fn match_type_label(match_type: MatchType) -> String {
    match match_type {
        MatchType::Exact => themed(GREEN, &[BOLD], "exact"),
        MatchType::Fuzzy => themed(MAGENTA, &[], "fuzzy"),
    }
}

pub fn score_value(score: u32) -> String {
    let text = format!("{:>4}", score);
    if score >= 100 {
        themed(GREEN, &[BOLD], &text)
    } else if score >= 50 {
        themed(GREEN, &[], &text)
    } else if score >= 20 {
        themed(YELLOW, &[], &text)
    } else {
        themed(GRAY, &[], &text)
    }
}

pub fn timing_ms(value: f64) -> String {
    let text = format!("{:.3} ms", value);
    if value < 5.0 {
        themed(GREEN, &[], &text)
    } else if value < 20.0 {
        themed(YELLOW, &[], &text)
    } else {
        themed(MAGENTA, &[], &text)
    }
}

/// Swap highlight markers for terminal styling (or `*...*` without color).
pub fn render_snippet(snippet: &str, open: &str, close: &str) -> String {
    let (start, end) = if use_colors() {
        (format!("{}{}", BOLD, YELLOW()), RESET.to_string())
    } else {
        ("*".to_string(), "*".to_string())
    };
    snippet.replace(open, &start).replace(close, &end)
}

pub fn suggestion_badge(kind: SuggestionKind) -> String {
    match kind {
        SuggestionKind::Correction => themed(YELLOW, &[], "did you mean"),
        SuggestionKind::Related => themed(BLUE, &[], "related"),
        SuggestionKind::Autocomplete => themed(CYAN, &[], "complete"),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// REPORTS
// ═══════════════════════════════════════════════════════════════════════════

pub fn print_results(
    query: &str,
    results: &[SearchResult],
    total: usize,
    offset: usize,
    elapsed_ms: f64,
    highlight: (&str, &str),
) {
    section_top(&format!("\"{}\"", query));
    row(&format!(
        " {} of {} results, {}",
        results.len(),
        total,
        timing_ms(elapsed_ms)
    ));
    for (i, result) in results.iter().enumerate() {
        row("");
        row(&format!(
            " {:>3}. {} {} {} {}",
            offset + i + 1,
            score_value(result.score),
            pad_right(&match_type_label(result.match_type), 5),
            themed(BLUE, &[BOLD], &result.title),
            themed(GRAY, &[], &format!("[{}] {}", result.type_tag, result.url))
        ));
        println!("      {}", render_snippet(&result.snippet, highlight.0, highlight.1));
    }
    section_bot();
}

pub fn print_suggestions(suggestions: &[Suggestion]) {
    if suggestions.is_empty() {
        return;
    }
    section_top("suggestions");
    for suggestion in suggestions {
        row(&format!(
            " {} {}",
            pad_right(&suggestion_badge(suggestion.kind), 13),
            suggestion.text
        ));
    }
    section_bot();
}

pub fn print_stats(stats: &[IndexStats]) {
    section_top("collections");
    row(&format!(
        " {:<14} {:<10} {:>8} {:>8} {:>8} {:>9}",
        "name", "type", "records", "skipped", "words", "trigrams"
    ));
    for s in stats {
        row(&format!(
            " {} {:<10} {:>8} {:>8} {:>8} {:>9}",
            pad_right(&themed(CYAN, &[], &s.name), 14),
            s.type_tag,
            s.records,
            s.skipped,
            s.words,
            s.trigrams
        ));
    }
    section_bot();
}

pub fn print_history(entries: &[HistoryEntry]) {
    section_top("history");
    if entries.is_empty() {
        row(&themed(GRAY, &[], " no searches yet"));
    }
    for entry in entries {
        row(&format!(
            " {} {} {}",
            themed(GRAY, &[], &entry.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()),
            pad_right(&entry.query, 40),
            themed(GRAY, &[], &format!("{} results", entry.result_count))
        ));
    }
    section_bot();
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
