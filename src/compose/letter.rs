// src/compose/letter.rs
//! Cover-letter renderers: four header arrangements over a shared block
//! sequence (date, recipient, salutation, opening, body, closing,
//! signature).

use super::split_paragraphs;
use crate::document::CoverLetter;
use crate::layout::cursor::LayoutCursor;
use crate::layout::fonts::Font;
use crate::layout::text::wrap;
use crate::style::{Color, HeaderLayout, StyleConfig};

const BAR_HEIGHT: f32 = 14.0;
const SIDEBAR_FRACTION: f32 = 0.33;
const COLUMN_GUTTER: f32 = 18.0;

pub fn compose(letter: &CoverLetter, cursor: &mut LayoutCursor, style: &StyleConfig) {
    match style.layout {
        HeaderLayout::SidebarSplit => compose_sidebar(letter, cursor, style),
        _ => compose_flow(letter, cursor, style),
    }
}

/// Traditional, creative and minimalist layouts: a header block (right- or
/// left-aligned, optionally under a bar) above the letter blocks.
fn compose_flow(letter: &CoverLetter, cursor: &mut LayoutCursor, style: &StyleConfig) {
    if style.layout == HeaderLayout::BarHeader {
        top_bar(cursor, style);
    }
    let right_aligned = style.layout == HeaderLayout::RightAligned;

    let name_size = style.sizes.name;
    let name_height = style.line_height(name_size);
    cursor.ensure_space(name_height);
    let x = if right_aligned {
        cursor.content_right() - style.bold.text_width(&letter.name, name_size)
    } else {
        cursor.content_left()
    };
    let baseline = cursor.y() - style.bold.ascent(name_size);
    cursor.text_run(
        x,
        baseline,
        &letter.name,
        style.bold,
        name_size,
        style.palette.heading,
    );
    cursor.advance(name_height);

    let small = style.sizes.small;
    let small_height = style.line_height(small);
    for line in contact_lines(letter) {
        cursor.ensure_space(small_height);
        let x = if right_aligned {
            cursor.content_right() - style.regular.text_width(&line, small)
        } else {
            cursor.content_left()
        };
        let baseline = cursor.y() - style.regular.ascent(small);
        cursor.text_run(
            x,
            baseline,
            &line,
            style.regular,
            small,
            style.palette.secondary,
        );
        cursor.advance(small_height);
    }
    cursor.advance(style.spacing.section);

    letter_blocks(letter, cursor, style, false);
}

/// Modern layout: colored top bar, contact sidebar on the left, letter
/// blocks flowing in the right column with the date right-aligned.
fn compose_sidebar(letter: &CoverLetter, cursor: &mut LayoutCursor, style: &StyleConfig) {
    top_bar(cursor, style);

    let left = cursor.content_left();
    let full_width = cursor.content_width();
    let sidebar_width = full_width * SIDEBAR_FRACTION;
    let top = cursor.y();

    cursor.set_content_box(left, sidebar_width);
    let name_size = style.sizes.name;
    let name_height = style.line_height(name_size);
    for line in wrap(&letter.name, style.bold, name_size, sidebar_width) {
        cursor.text_line(
            left,
            &line,
            style.bold,
            name_size,
            style.palette.heading,
            name_height,
        );
    }
    cursor.advance(style.spacing.item);

    let address_lines: Vec<String> = letter
        .address
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect();
    sidebar_entry(cursor, style, "Address", &address_lines);
    sidebar_entry(cursor, style, "Phone", std::slice::from_ref(&letter.phone));
    sidebar_entry(cursor, style, "Email", std::slice::from_ref(&letter.email));

    // Both columns hang from the same top edge.
    cursor.rewind_to(top);
    cursor.set_content_box(
        left + sidebar_width + COLUMN_GUTTER,
        full_width - sidebar_width - COLUMN_GUTTER,
    );
    letter_blocks(letter, cursor, style, true);
}

fn top_bar(cursor: &mut LayoutCursor, style: &StyleConfig) {
    cursor.rect(
        0.0,
        cursor.page_height() - BAR_HEIGHT,
        cursor.page_width(),
        BAR_HEIGHT,
        style.palette.heading,
    );
}

/// Bold label over its values, skipped entirely when every value is blank.
fn sidebar_entry(cursor: &mut LayoutCursor, style: &StyleConfig, label: &str, values: &[String]) {
    let values: Vec<&String> = values.iter().filter(|value| !value.is_empty()).collect();
    if values.is_empty() {
        return;
    }
    let small = style.sizes.small;
    let line_height = style.line_height(small);
    cursor.text_line(
        cursor.content_left(),
        label,
        style.bold,
        small,
        style.palette.text,
        line_height,
    );
    for value in values {
        cursor.text_line(
            cursor.content_left(),
            value,
            style.regular,
            small,
            style.palette.secondary,
            line_height,
        );
    }
    cursor.advance(style.spacing.item);
}

fn contact_lines(letter: &CoverLetter) -> Vec<String> {
    let mut lines: Vec<String> = letter
        .address
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect();
    if !letter.phone.is_empty() {
        lines.push(letter.phone.clone());
    }
    if !letter.email.is_empty() {
        lines.push(letter.email.clone());
    }
    lines
}

/// The shared block sequence below the header. Paragraph gaps are larger
/// than the intra-paragraph line gap by the item spacing.
fn letter_blocks(
    letter: &CoverLetter,
    cursor: &mut LayoutCursor,
    style: &StyleConfig,
    date_right: bool,
) {
    let size = style.sizes.content;
    let line_height = style.body_line_height(size);

    if !letter.date.is_empty() {
        cursor.ensure_space(line_height);
        let x = if date_right {
            cursor.content_right() - style.regular.text_width(&letter.date, size)
        } else {
            cursor.content_left()
        };
        let baseline = cursor.y() - style.regular.ascent(size);
        cursor.text_run(
            x,
            baseline,
            &letter.date,
            style.regular,
            size,
            style.palette.text,
        );
        cursor.advance(line_height + style.spacing.item);
    }

    let mut recipient_lines: Vec<String> = Vec::new();
    if !letter.recipient.name.is_empty() {
        recipient_lines.push(letter.recipient.name.clone());
    }
    if !letter.recipient.company.is_empty() {
        recipient_lines.push(letter.recipient.company.clone());
    }
    recipient_lines.extend(
        letter
            .recipient
            .address
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from),
    );
    if !recipient_lines.is_empty() {
        for line in &recipient_lines {
            cursor.text_line(
                cursor.content_left(),
                line,
                style.regular,
                size,
                style.palette.text,
                line_height,
            );
        }
        cursor.advance(style.spacing.item);
    }

    if !letter.salutation.is_empty() {
        cursor.text_line(
            cursor.content_left(),
            &letter.salutation,
            style.regular,
            size,
            style.palette.text,
            line_height,
        );
        cursor.advance(style.spacing.item);
    }

    // The hook paragraph leads in bold.
    if !letter.opening.is_empty() {
        flow_paragraph(cursor, style, &letter.opening, style.bold, style.palette.text);
        cursor.advance(style.spacing.item);
    }

    for block in &letter.body {
        for paragraph in split_paragraphs(block) {
            flow_paragraph(cursor, style, &paragraph, style.regular, style.palette.text);
            cursor.advance(style.spacing.item);
        }
    }

    if !letter.closing.is_empty() {
        cursor.text_line(
            cursor.content_left(),
            &letter.closing,
            style.regular,
            size,
            style.palette.text,
            line_height,
        );
    }
    if !letter.signature.is_empty() {
        // Room for an ink signature above the typed name.
        cursor.advance(line_height * 1.5);
        cursor.text_line(
            cursor.content_left(),
            &letter.signature,
            style.bold,
            size,
            style.palette.text,
            line_height,
        );
    }
}

fn flow_paragraph(
    cursor: &mut LayoutCursor,
    style: &StyleConfig,
    text: &str,
    font: Font,
    color: Color,
) {
    let size = style.sizes.content;
    let line_height = style.body_line_height(size);
    for line in wrap(text, font, size, cursor.content_width()) {
        cursor.text_line(cursor.content_left(), &line, font, size, color, line_height);
    }
}
