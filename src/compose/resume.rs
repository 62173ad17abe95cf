// src/compose/resume.rs
//! Section renderers for resumes.
//!
//! Each renderer consumes the cursor and the resolved style and emits draw
//! commands; none of them can fail. Missing fields render as empty strings —
//! resumes are user-editable drafts and partial content is the normal case.

use super::ensure_scheme;
use crate::document::{CustomField, Project, Resume, Section, SkillGroup, SkillList};
use crate::layout::cursor::LayoutCursor;
use crate::layout::fonts::Font;
use crate::layout::rows::{self, Chip};
use crate::layout::text::wrap;
use crate::style::{Color, HeaderLayout, StyleConfig};
use itertools::Itertools;

const RULE_WIDTH: f32 = 0.75;
const RULE_GAP: f32 = 5.0;
const MIN_CHIP_GAP: f32 = 18.0;
const BAR_HEIGHT: f32 = 6.0;
const PROJECT_INDENT: f32 = 6.0;

pub fn compose(resume: &Resume, cursor: &mut LayoutCursor, style: &StyleConfig) {
    render_header(resume, cursor, style);
    for section in &resume.sections {
        render_section(section, cursor, style);
    }
}

fn render_header(resume: &Resume, cursor: &mut LayoutCursor, style: &StyleConfig) {
    if style.layout == HeaderLayout::BarHeader {
        cursor.rect(
            0.0,
            cursor.page_height() - BAR_HEIGHT,
            cursor.page_width(),
            BAR_HEIGHT,
            style.palette.heading,
        );
    }

    let name_size = style.sizes.name;
    let name_height = style.line_height(name_size);
    cursor.ensure_space(name_height);
    let x = match style.layout {
        HeaderLayout::RightAligned => {
            cursor.content_right() - style.bold.text_width(&resume.name, name_size)
        }
        _ => cursor.content_left(),
    };
    let baseline = cursor.y() - style.bold.ascent(name_size);
    cursor.text_run(
        x,
        baseline,
        &resume.name,
        style.bold,
        name_size,
        style.palette.heading,
    );
    cursor.advance(name_height);

    render_custom_fields(&resume.custom_fields, cursor, style);
    cursor.advance(style.spacing.page);
}

/// The contact chips under the name, packed into justified rows.
fn render_custom_fields(fields: &[CustomField], cursor: &mut LayoutCursor, style: &StyleConfig) {
    let size = style.sizes.small;
    let height = style.line_height(size);
    let chips: Vec<Chip> = fields
        .iter()
        .filter(|field| !field.hidden)
        .map(|field| contact_chip(field, style, size, height))
        .collect();
    if chips.is_empty() {
        return;
    }
    for row in rows::pack(chips, cursor.content_width(), MIN_CHIP_GAP) {
        row.draw(cursor);
    }
}

fn contact_chip(field: &CustomField, style: &StyleConfig, size: f32, height: f32) -> Chip {
    let label = if field.title.is_empty() {
        String::new()
    } else {
        format!("{}: ", field.title)
    };
    let value = field.content.clone();
    let label_width = style.bold.text_width(&label, size);
    let value_width = style.regular.text_width(&value, size);
    let bold = style.bold;
    let regular = style.regular;
    let label_color = style.palette.text;
    let value_color = if field.is_link {
        style.palette.link
    } else {
        style.palette.text
    };
    let is_link = field.is_link;

    let draw = Box::new(move |cursor: &mut LayoutCursor, x: f32, top: f32| {
        let baseline = top - bold.ascent(size);
        if !label.is_empty() {
            cursor.text_run(x, baseline, &label, bold, size, label_color);
        }
        cursor.text_run(x + label_width, baseline, &value, regular, size, value_color);
        if is_link && !value.is_empty() {
            let rect = [
                x + label_width,
                baseline + regular.descent(size),
                x + label_width + value_width,
                baseline + regular.ascent(size),
            ];
            cursor.link(rect, ensure_scheme(&value));
        }
    });

    Chip {
        width: label_width + value_width,
        height,
        draw,
    }
}

fn render_section(section: &Section, cursor: &mut LayoutCursor, style: &StyleConfig) {
    section_heading(section.title(), cursor, style);

    if section_is_empty(section) {
        // Headed but empty: keep the vertical rhythm with a half gap.
        cursor.advance(style.spacing.section * 0.5);
        return;
    }

    match section {
        Section::Education { entries, .. } => {
            for entry in entries {
                render_dated_entry(
                    cursor,
                    style,
                    &entry.institution,
                    subtitle(&entry.degree, entry.location.as_deref()),
                    &date_range(&entry.start_date, &entry.end_date),
                    &entry.highlights,
                );
            }
        }
        Section::Experience { entries, .. } => {
            for entry in entries {
                render_dated_entry(
                    cursor,
                    style,
                    &entry.role,
                    subtitle(&entry.company, entry.location.as_deref()),
                    &date_range(&entry.start_date, &entry.end_date),
                    &entry.highlights,
                );
            }
        }
        Section::Skills { list, .. } => match list {
            SkillList::Flat(items) => render_inline_items(cursor, style, items),
            SkillList::Grouped(groups) => render_skill_groups(cursor, style, groups),
        },
        Section::Languages { items, .. } | Section::Certifications { items, .. } => {
            render_inline_items(cursor, style, items);
        }
        Section::Projects { entries, .. } => {
            for project in entries {
                render_project(cursor, style, project);
            }
        }
        Section::Custom { paragraphs, .. } => render_paragraphs(cursor, style, paragraphs),
    }

    cursor.advance(style.spacing.section);
}

fn section_is_empty(section: &Section) -> bool {
    match section {
        Section::Education { entries, .. } => entries.is_empty(),
        Section::Experience { entries, .. } => entries.is_empty(),
        Section::Skills { list, .. } => match list {
            SkillList::Flat(items) => items.is_empty(),
            SkillList::Grouped(groups) => groups.is_empty(),
        },
        Section::Languages { items, .. } | Section::Certifications { items, .. } => {
            items.is_empty()
        }
        Section::Projects { entries, .. } => entries.is_empty(),
        Section::Custom { paragraphs, .. } => paragraphs.is_empty(),
    }
}

/// Heading plus divider rule. Reserves the heading together with one content
/// line so a heading is never orphaned at the bottom of a page.
fn section_heading(title: &str, cursor: &mut LayoutCursor, style: &StyleConfig) {
    let size = style.sizes.section;
    let heading_height = style.line_height(size);
    let content_height = style.line_height(style.sizes.content);
    cursor.ensure_space(heading_height + RULE_GAP + content_height);

    let baseline = cursor.y() - style.bold.ascent(size);
    cursor.text_run(
        cursor.content_left(),
        baseline,
        title,
        style.bold,
        size,
        style.palette.heading,
    );
    cursor.advance(heading_height);
    cursor.rule(
        cursor.content_left(),
        cursor.content_right(),
        RULE_WIDTH,
        style.palette.secondary,
    );
    cursor.advance(RULE_GAP);
}

fn subtitle(primary: &str, location: Option<&str>) -> String {
    [Some(primary), location]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .join(", ")
}

fn date_range(start: &str, end: &str) -> String {
    match (start.is_empty(), end.is_empty()) {
        (true, _) => end.to_string(),
        (_, true) => start.to_string(),
        _ => format!("{start} \u{2013} {end}"),
    }
}

/// Shared education/experience entry: bold title with the date range
/// right-aligned on the same baseline, a secondary subtitle line, then
/// bulleted highlights with every wrapped line pagination-checked.
fn render_dated_entry(
    cursor: &mut LayoutCursor,
    style: &StyleConfig,
    title: &str,
    subtitle: String,
    date: &str,
    highlights: &[String],
) {
    let size = style.sizes.content;
    let line_height = style.line_height(size);
    let header_height = if subtitle.is_empty() {
        line_height
    } else {
        2.0 * line_height
    };
    cursor.ensure_space(header_height);

    let baseline = cursor.y() - style.bold.ascent(size);
    cursor.text_run(
        cursor.content_left(),
        baseline,
        title,
        style.bold,
        size,
        style.palette.text,
    );
    if !date.is_empty() {
        let date_width = style.regular.text_width(date, style.sizes.small);
        cursor.text_run(
            cursor.content_right() - date_width,
            baseline,
            date,
            style.regular,
            style.sizes.small,
            style.palette.secondary,
        );
    }
    cursor.advance(line_height);

    if !subtitle.is_empty() {
        let baseline = cursor.y() - style.regular.ascent(size);
        cursor.text_run(
            cursor.content_left(),
            baseline,
            &subtitle,
            style.regular,
            size,
            style.palette.secondary,
        );
        cursor.advance(line_height);
    }

    render_bullets(
        cursor,
        style,
        highlights,
        "\u{2022} ",
        style.palette.text,
        0.0,
    );
    cursor.advance(style.spacing.item);
}

/// Prefixed bullet items. Continuation lines align after the prefix, and
/// each line is an independent pagination checkpoint.
fn render_bullets(
    cursor: &mut LayoutCursor,
    style: &StyleConfig,
    items: &[String],
    prefix: &str,
    color: Color,
    indent: f32,
) {
    let size = style.sizes.content;
    let line_height = style.line_height(size);
    let prefix_width = style.regular.text_width(prefix, size);
    let available = (cursor.content_width() - indent - prefix_width).max(size);

    for item in items {
        let lines = wrap(item, style.regular, size, available);
        for (index, line) in lines.iter().enumerate() {
            cursor.ensure_space(line_height);
            let left = cursor.content_left() + indent;
            let baseline = cursor.y() - style.regular.ascent(size);
            if index == 0 {
                cursor.text_run(left, baseline, prefix, style.regular, size, color);
            }
            cursor.text_run(
                left + prefix_width,
                baseline,
                line,
                style.regular,
                size,
                color,
            );
            cursor.advance(line_height);
        }
    }
}

/// Flat item lists flow as one `" • "`-joined block.
fn render_inline_items(cursor: &mut LayoutCursor, style: &StyleConfig, items: &[String]) {
    let joined = items.iter().join(" \u{2022} ");
    flow_text(cursor, style, &joined, style.regular, style.palette.text);
}

/// Grouped skills: bold label inline, the first wrapped line sharing its
/// baseline, continuation lines starting fresh under the label's end-x.
fn render_skill_groups(cursor: &mut LayoutCursor, style: &StyleConfig, groups: &[SkillGroup]) {
    let size = style.sizes.content;
    let line_height = style.line_height(size);

    for group in groups {
        let label = if group.name.is_empty() {
            String::new()
        } else {
            format!("{}: ", group.name)
        };
        let label_width = style.bold.text_width(&label, size);
        let list = group.skills.iter().join(", ");
        let available = (cursor.content_width() - label_width).max(size);
        let lines = wrap(&list, style.regular, size, available);

        cursor.ensure_space(line_height);
        let left = cursor.content_left();
        let baseline = cursor.y() - style.bold.ascent(size);
        cursor.text_run(left, baseline, &label, style.bold, size, style.palette.text);
        if let Some(first) = lines.first() {
            cursor.text_run(
                left + label_width,
                baseline,
                first,
                style.regular,
                size,
                style.palette.text,
            );
        }
        cursor.advance(line_height);

        for line in lines.iter().skip(1) {
            cursor.ensure_space(line_height);
            let left = cursor.content_left();
            let baseline = cursor.y() - style.regular.ascent(size);
            cursor.text_run(
                left + label_width,
                baseline,
                line,
                style.regular,
                size,
                style.palette.text,
            );
            cursor.advance(line_height);
        }
        cursor.advance(style.spacing.item * 0.5);
    }
}

fn render_project(cursor: &mut LayoutCursor, style: &StyleConfig, project: &Project) {
    let size = style.sizes.content;
    let line_height = style.line_height(size);
    cursor.ensure_space(2.0 * line_height);

    let baseline = cursor.y() - style.bold.ascent(size);
    cursor.text_run(
        cursor.content_left(),
        baseline,
        &project.name,
        style.bold,
        size,
        style.palette.text,
    );
    cursor.advance(line_height);

    let mut segments: Vec<(&str, &str)> = Vec::new();
    if let Some(link) = project.link.as_deref() {
        if !link.is_empty() {
            segments.push(("Link: ", link));
        }
    }
    if let Some(github) = project.github.as_deref() {
        if !github.is_empty() {
            segments.push(("GitHub: ", github));
        }
    }
    if !segments.is_empty() {
        let small = style.sizes.small;
        let small_height = style.line_height(small);
        cursor.ensure_space(small_height);
        let baseline = cursor.y() - style.regular.ascent(small);
        let mut x = cursor.content_left();
        for (index, (label, url)) in segments.iter().enumerate() {
            if index > 0 {
                x += cursor.text_run(
                    x,
                    baseline,
                    " | ",
                    style.regular,
                    small,
                    style.palette.secondary,
                );
            }
            x += cursor.text_run(x, baseline, label, style.regular, small, style.palette.link);
            let url_width =
                cursor.text_run(x, baseline, url, style.regular, small, style.palette.link);
            cursor.link(
                [
                    x,
                    baseline + style.regular.descent(small),
                    x + url_width,
                    baseline + style.regular.ascent(small),
                ],
                ensure_scheme(url),
            );
            x += url_width;
        }
        cursor.advance(small_height);
    }

    render_bullets(
        cursor,
        style,
        &project.description,
        "- ",
        style.palette.secondary,
        PROJECT_INDENT,
    );
    cursor.advance(style.spacing.item);
}

fn render_paragraphs(cursor: &mut LayoutCursor, style: &StyleConfig, paragraphs: &[String]) {
    for (index, paragraph) in paragraphs.iter().enumerate() {
        if index > 0 {
            cursor.advance(style.spacing.item * 0.5);
        }
        flow_text(cursor, style, paragraph, style.regular, style.palette.text);
    }
}

fn flow_text(cursor: &mut LayoutCursor, style: &StyleConfig, text: &str, font: Font, color: Color) {
    let size = style.sizes.content;
    let line_height = style.line_height(size);
    for line in wrap(text, font, size, cursor.content_width()) {
        cursor.text_line(cursor.content_left(), &line, font, size, color, line_height);
    }
}
