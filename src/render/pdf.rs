// src/render/pdf.rs
//! The lopdf writer boundary.
//!
//! Translates finished [`Page`]s into the PDF object graph: one content
//! stream per page, a shared resources dictionary referencing the four
//! standard fonts, URI link annotations attached to their page, and a final
//! serialize-to-bytes. This module is the only place PDF syntax exists; a
//! failure here is the one fatal error class and propagates unmodified.

use crate::error::RenderError;
use crate::layout::fonts::{Font, encode_win_ansi};
use crate::layout::page::{DrawCommand, Page};
use crate::style::{Color, StyleConfig};
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, Stream, dictionary};

pub struct PdfWriter {
    title: String,
}

impl PdfWriter {
    pub fn new(title: impl Into<String>) -> Self {
        PdfWriter {
            title: title.into(),
        }
    }

    fn resource_tag(font: Font) -> &'static str {
        match font {
            Font::Helvetica => "F1",
            Font::HelveticaBold => "F2",
            Font::TimesRoman => "F3",
            Font::TimesBold => "F4",
        }
    }

    /// Builds the document object graph for `pages` and serializes it.
    pub fn write(&self, pages: &[Page], style: &StyleConfig) -> Result<Vec<u8>, RenderError> {
        let mut document = Document::with_version("1.7");
        let pages_id = document.new_object_id();

        let mut font_dict = Dictionary::new();
        for font in Font::ALL {
            let entry = dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => font.postscript_name(),
                "Encoding" => "WinAnsiEncoding",
            };
            font_dict.set(Self::resource_tag(font).as_bytes(), Object::Dictionary(entry));
        }
        let resources_id = document.add_object(dictionary! {
            "Font" => Object::Dictionary(font_dict),
        });

        let (page_width, page_height) = style.page_size.dimensions();
        let mut page_ids = Vec::with_capacity(pages.len());

        for page in pages {
            let content = render_commands(&page.commands);
            let content_stream = Stream::new(Dictionary::new(), content.encode()?);
            let content_id = document.add_object(content_stream);

            let mut page_dict = dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.into(), 0.into(), page_width.into(), page_height.into()],
                "Contents" => content_id,
                "Resources" => resources_id,
            };

            let mut annot_ids = Vec::with_capacity(page.annotations.len());
            for annotation in &page.annotations {
                let action = dictionary! {
                    "Type" => "Action",
                    "S" => "URI",
                    "URI" => Object::string_literal(annotation.uri.clone()),
                };
                let action_id = document.add_object(action);
                let [x1, y1, x2, y2] = annotation.rect;
                let annot = dictionary! {
                    "Type" => "Annot",
                    "Subtype" => "Link",
                    "Rect" => vec![x1.into(), y1.into(), x2.into(), y2.into()],
                    "Border" => vec![0.into(), 0.into(), 0.into()],
                    "A" => action_id,
                };
                annot_ids.push(document.add_object(annot));
            }
            if !annot_ids.is_empty() {
                page_dict.set(
                    "Annots",
                    Object::Array(annot_ids.into_iter().map(Object::Reference).collect()),
                );
            }

            page_ids.push(document.add_object(page_dict));
        }

        let kids: Vec<Object> = page_ids.iter().map(|id| Object::Reference(*id)).collect();
        document.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => page_ids.len() as i32,
            }),
        );

        let catalog_id = document.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        document.trailer.set("Root", catalog_id);

        let info_id = document.add_object(dictionary! {
            "Title" => Object::string_literal(self.title.clone()),
            "Producer" => Object::string_literal("vitae"),
        });
        document.trailer.set("Info", info_id);

        document.compress();
        let mut bytes = Vec::new();
        document.save_to(&mut bytes)?;
        Ok(bytes)
    }
}

/// Graphics-state tracker so consecutive commands sharing a font or color
/// do not re-emit the selection operators.
#[derive(Default)]
struct RenderState {
    font_tag: &'static str,
    font_size: f32,
    fill_color: Option<Color>,
}

fn render_commands(commands: &[DrawCommand]) -> Content {
    let mut operations = Vec::new();
    let mut state = RenderState::default();

    for command in commands {
        match command {
            DrawCommand::Text(text) => {
                operations.push(Operation::new("BT", vec![]));
                let tag = PdfWriter::resource_tag(text.font);
                if state.font_tag != tag || state.font_size != text.size {
                    operations.push(Operation::new("Tf", vec![tag.into(), text.size.into()]));
                    state.font_tag = tag;
                    state.font_size = text.size;
                }
                if state.fill_color != Some(text.color) {
                    operations.push(fill_color_op(text.color));
                    state.fill_color = Some(text.color);
                }
                operations.push(Operation::new("Td", vec![text.x.into(), text.y.into()]));
                operations.push(Operation::new(
                    "Tj",
                    vec![Object::string_literal(encode_win_ansi(&text.content))],
                ));
                operations.push(Operation::new("ET", vec![]));
            }
            DrawCommand::Line(line) => {
                operations.push(Operation::new("w", vec![line.width.into()]));
                operations.push(stroke_color_op(line.color));
                operations.push(Operation::new("m", vec![line.x1.into(), line.y1.into()]));
                operations.push(Operation::new("l", vec![line.x2.into(), line.y2.into()]));
                operations.push(Operation::new("S", vec![]));
            }
            DrawCommand::Rect(rect) => {
                operations.push(fill_color_op(rect.color));
                // Fill color changed outside the text state tracker.
                state.fill_color = Some(rect.color);
                operations.push(Operation::new(
                    "re",
                    vec![
                        rect.x.into(),
                        rect.y.into(),
                        rect.width.into(),
                        rect.height.into(),
                    ],
                ));
                operations.push(Operation::new("f", vec![]));
            }
        }
    }

    Content { operations }
}

fn fill_color_op(color: Color) -> Operation {
    Operation::new(
        "rg",
        vec![
            (color.r as f32 / 255.0).into(),
            (color.g as f32 / 255.0).into(),
            (color.b as f32 / 255.0).into(),
        ],
    )
}

fn stroke_color_op(color: Color) -> Operation {
    Operation::new(
        "RG",
        vec![
            (color.r as f32 / 255.0).into(),
            (color.g as f32 / 255.0).into(),
            (color.b as f32 / 255.0).into(),
        ],
    )
}
