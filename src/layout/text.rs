// src/layout/text.rs
//! Greedy word wrapping against real glyph metrics.

use crate::layout::fonts::Font;

/// Wraps `text` into lines no wider than `max_width` points.
///
/// Words accumulate onto the current line while the candidate line still
/// measures under `max_width`; on overflow the line is closed and the word
/// starts the next one. A single word wider than `max_width` is emitted as a
/// line of its own and allowed to overflow horizontally — resume content
/// (URLs, names) reads better clipped than hyphenated at arbitrary bytes.
/// Embedded newlines force a break regardless of width.
///
/// Empty input yields an empty vec, not `[""]`. Non-empty input always
/// yields at least one line.
pub fn wrap(text: &str, font: Font, size: f32, max_width: f32) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::new();
    for paragraph in text.lines() {
        if paragraph.trim().is_empty() {
            // Forced blank line from consecutive newlines.
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            if current.is_empty() {
                current = word.to_string();
                continue;
            }
            let candidate = format!("{current} {word}");
            if font.text_width(&candidate, size) < max_width {
                current = candidate;
            } else {
                lines.push(std::mem::take(&mut current));
                current = word.to_string();
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }
    lines
}
