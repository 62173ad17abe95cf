// src/themes.rs
//! Template registry: maps a template id to a fully resolved [`StyleConfig`].
//!
//! Templates are data, not code paths. An unrecognized id is a content
//! problem, so resolution falls back to a documented default instead of
//! failing the render: the first registered resume template, or the
//! `minimalist` cover-letter layout.

use crate::document::Document;
use crate::layout::fonts::Font;
use crate::style::{
    Color, FontSizes, HeaderLayout, Margins, PageSize, Palette, Spacing, StyleConfig,
};
use log::warn;

const INK: Color = Color::rgb(33, 33, 33);
const SLATE: Color = Color::rgb(105, 105, 105);
const LINK_BLUE: Color = Color::rgb(17, 85, 204);

/// Ordered resume registry; the first entry is the fallback.
static RESUME_TEMPLATES: &[(&str, fn() -> StyleConfig)] = &[
    ("classic", classic),
    ("contemporary", contemporary),
    ("executive", executive),
    ("minimal", minimal),
];

/// Resolves the style for `document` under `template_id`.
pub fn resolve(document: &Document, template_id: &str) -> StyleConfig {
    match document {
        Document::Resume(_) => resume_style(template_id),
        Document::CoverLetter(_) => letter_style(template_id),
    }
}

pub fn resume_style(template_id: &str) -> StyleConfig {
    for (id, build) in RESUME_TEMPLATES {
        if *id == template_id {
            return build();
        }
    }
    let (fallback_id, build) = RESUME_TEMPLATES[0];
    warn!("unknown resume template '{template_id}', falling back to '{fallback_id}'");
    build()
}

pub fn letter_style(template_id: &str) -> StyleConfig {
    match template_id {
        "traditional" => traditional(),
        "modern" => modern(),
        "creative" => creative(),
        "minimalist" => minimalist(),
        other => {
            warn!("unknown cover letter layout '{other}', falling back to 'minimalist'");
            minimalist()
        }
    }
}

fn resume_base() -> StyleConfig {
    StyleConfig {
        regular: Font::Helvetica,
        bold: Font::HelveticaBold,
        sizes: FontSizes {
            name: 22.0,
            section: 13.0,
            content: 10.5,
            small: 9.0,
        },
        palette: Palette {
            text: INK,
            heading: INK,
            secondary: SLATE,
            link: LINK_BLUE,
        },
        spacing: Spacing {
            page: 18.0,
            section: 14.0,
            item: 8.0,
        },
        margins: Margins::uniform(54.0),
        page_size: PageSize::Letter,
        layout: HeaderLayout::Plain,
        body_leading: 0.0,
    }
}

/// Serif, plain left header, understated navy headings.
fn classic() -> StyleConfig {
    let mut style = resume_base();
    style.regular = Font::TimesRoman;
    style.bold = Font::TimesBold;
    style.palette.heading = Color::rgb(28, 40, 84);
    style
}

/// Sans with a colored bar header and a blue accent.
fn contemporary() -> StyleConfig {
    let mut style = resume_base();
    style.layout = HeaderLayout::BarHeader;
    style.palette.heading = Color::rgb(21, 101, 192);
    style
}

/// Serif, header block on the right margin.
fn executive() -> StyleConfig {
    let mut style = resume_base();
    style.regular = Font::TimesRoman;
    style.bold = Font::TimesBold;
    style.layout = HeaderLayout::RightAligned;
    style.palette.heading = Color::rgb(66, 66, 66);
    style
}

/// Sans, no accent at all.
fn minimal() -> StyleConfig {
    let mut style = resume_base();
    style.palette.secondary = Color::rgb(130, 130, 130);
    style
}

fn letter_base() -> StyleConfig {
    StyleConfig {
        regular: Font::TimesRoman,
        bold: Font::TimesBold,
        sizes: FontSizes {
            name: 20.0,
            section: 12.0,
            content: 11.0,
            small: 9.5,
        },
        palette: Palette {
            text: INK,
            heading: INK,
            secondary: SLATE,
            link: LINK_BLUE,
        },
        spacing: Spacing {
            page: 24.0,
            section: 16.0,
            item: 7.0,
        },
        margins: Margins::uniform(72.0),
        page_size: PageSize::Letter,
        layout: HeaderLayout::Plain,
        body_leading: 0.0,
    }
}

/// Right-aligned header block, no color bar.
fn traditional() -> StyleConfig {
    let mut style = letter_base();
    style.layout = HeaderLayout::RightAligned;
    style
}

/// Colored top bar, left sidebar for contact details, relaxed body leading,
/// right-aligned date.
fn modern() -> StyleConfig {
    let mut style = letter_base();
    style.regular = Font::Helvetica;
    style.bold = Font::HelveticaBold;
    style.layout = HeaderLayout::SidebarSplit;
    style.palette.heading = Color::rgb(0, 121, 107);
    style.body_leading = 1.0;
    style
}

/// Left header under a colored bar, larger name.
fn creative() -> StyleConfig {
    let mut style = letter_base();
    style.regular = Font::Helvetica;
    style.bold = Font::HelveticaBold;
    style.layout = HeaderLayout::BarHeader;
    style.palette.heading = Color::rgb(123, 31, 162);
    style.sizes.name = 26.0;
    style
}

/// Plain left header, no bar, no accent.
fn minimalist() -> StyleConfig {
    let mut style = letter_base();
    style.regular = Font::Helvetica;
    style.bold = Font::HelveticaBold;
    style
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_letter_layout_maps_to_its_arrangement() {
        assert_eq!(letter_style("traditional").layout, HeaderLayout::RightAligned);
        assert_eq!(letter_style("modern").layout, HeaderLayout::SidebarSplit);
        assert_eq!(letter_style("creative").layout, HeaderLayout::BarHeader);
        assert_eq!(letter_style("minimalist").layout, HeaderLayout::Plain);
    }

    #[test]
    fn unknown_letter_layout_falls_back_to_minimalist() {
        let style = letter_style("vaporwave");
        assert_eq!(style.layout, HeaderLayout::Plain);
        assert_eq!(style.palette.heading, style.palette.text);
    }

    #[test]
    fn unknown_resume_template_falls_back_to_first_registered() {
        let fallback = resume_style("does-not-exist");
        let first = resume_style("classic");
        assert_eq!(fallback.regular, first.regular);
        assert_eq!(fallback.layout, first.layout);
        assert_eq!(fallback.palette.heading, first.palette.heading);
    }

    #[test]
    fn modern_letter_relaxes_body_leading() {
        let style = letter_style("modern");
        assert!(style.body_leading > 0.0);
        assert!(style.body_line_height(11.0) > style.line_height(11.0));
    }

    #[test]
    fn resolution_is_pure() {
        let a = resume_style("contemporary");
        let b = resume_style("contemporary");
        assert_eq!(a.palette.heading, b.palette.heading);
        assert_eq!(a.sizes.name, b.sizes.name);
    }
}
