// src/layout/cursor.rs
//! The mutable vertical-position tracker driving one render pass.
//!
//! One cursor is created per render call and discarded when the pages are
//! taken; nothing is shared between renders. Within a page the y offset only
//! moves downward; any block that would cross the bottom margin triggers a
//! new page before it draws.

use crate::layout::fonts::Font;
use crate::layout::page::{
    DrawCommand, LineCommand, LinkAnnotation, Page, RectCommand, TextCommand,
};
use crate::style::{Color, StyleConfig};
use log::debug;

pub struct LayoutCursor {
    page_width: f32,
    page_height: f32,
    margin_top: f32,
    margin_bottom: f32,
    /// Left edge and width of the active content box. Column layouts narrow
    /// this; it survives page breaks so columns continue on overflow.
    content_x: f32,
    content_width: f32,
    default_x: f32,
    default_width: f32,
    y: f32,
    pages: Vec<Page>,
}

impl LayoutCursor {
    pub fn new(style: &StyleConfig) -> Self {
        let (page_width, page_height) = style.page_size.dimensions();
        let content_x = style.margins.left;
        let content_width = page_width - style.margins.left - style.margins.right;
        LayoutCursor {
            page_width,
            page_height,
            margin_top: style.margins.top,
            margin_bottom: style.margins.bottom,
            content_x,
            content_width,
            default_x: content_x,
            default_width: content_width,
            y: page_height - style.margins.top,
            pages: vec![Page::new(1)],
        }
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn page_width(&self) -> f32 {
        self.page_width
    }

    pub fn page_height(&self) -> f32 {
        self.page_height
    }

    pub fn content_left(&self) -> f32 {
        self.content_x
    }

    pub fn content_right(&self) -> f32 {
        self.content_x + self.content_width
    }

    pub fn content_width(&self) -> f32 {
        self.content_width
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Narrows the active content box (column layouts).
    pub fn set_content_box(&mut self, x: f32, width: f32) {
        self.content_x = x;
        self.content_width = width;
    }

    /// Restores the full margin-to-margin content box.
    pub fn reset_content_box(&mut self) {
        self.content_x = self.default_x;
        self.content_width = self.default_width;
    }

    /// Moves the cursor back up to `y` on the current page. Only used to lay
    /// out side-by-side columns that start from the same top edge; ordinary
    /// flow never rewinds.
    pub fn rewind_to(&mut self, y: f32) {
        self.y = y;
    }

    /// Guarantees `height` points of room above the bottom margin, opening a
    /// new page if the current one cannot provide it.
    ///
    /// A block taller than a whole page draws from the top of a fresh page
    /// and overflows the bottom margin; rejecting the render would block the
    /// user's only path to a document.
    pub fn ensure_space(&mut self, height: f32) {
        if self.y - height >= self.margin_bottom {
            return;
        }
        if self.at_page_top() {
            debug!("block of {height:.1}pt exceeds a full page, drawing with overflow");
            return;
        }
        self.new_page();
    }

    fn at_page_top(&self) -> bool {
        self.y >= self.page_height - self.margin_top
    }

    pub fn advance(&mut self, height: f32) {
        self.y -= height;
    }

    pub fn new_page(&mut self) {
        let number = self.pages.len() + 1;
        debug!("page {} full, starting page {}", number - 1, number);
        self.pages.push(Page::new(number));
        self.y = self.page_height - self.margin_top;
    }

    fn push(&mut self, command: DrawCommand) {
        // A page always exists; the vec is seeded in `new`.
        if let Some(page) = self.pages.last_mut() {
            page.commands.push(command);
        }
    }

    /// Draws `text` with its baseline at `y`, returning the drawn width.
    /// Does not move the cursor; callers position runs that share a line.
    pub fn text_run(
        &mut self,
        x: f32,
        baseline: f32,
        text: &str,
        font: Font,
        size: f32,
        color: Color,
    ) -> f32 {
        let width = font.text_width(text, size);
        self.push(DrawCommand::Text(TextCommand {
            x,
            y: baseline,
            content: text.to_string(),
            font,
            size,
            color,
        }));
        width
    }

    /// One full flow line: reserve `line_height`, draw at `x`, advance.
    pub fn text_line(
        &mut self,
        x: f32,
        text: &str,
        font: Font,
        size: f32,
        color: Color,
        line_height: f32,
    ) {
        self.ensure_space(line_height);
        let baseline = self.y - font.ascent(size);
        self.text_run(x, baseline, text, font, size, color);
        self.advance(line_height);
    }

    /// Horizontal rule at the current y.
    pub fn rule(&mut self, x1: f32, x2: f32, width: f32, color: Color) {
        let y = self.y;
        self.push(DrawCommand::Line(LineCommand {
            x1,
            y1: y,
            x2,
            y2: y,
            width,
            color,
        }));
    }

    /// Filled rectangle at absolute page coordinates (decorative bars).
    pub fn rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.push(DrawCommand::Rect(RectCommand {
            x,
            y,
            width,
            height,
            color,
        }));
    }

    /// Registers a URI annotation on the page currently being laid out.
    pub fn link(&mut self, rect: [f32; 4], uri: String) {
        if let Some(page) = self.pages.last_mut() {
            page.annotations.push(LinkAnnotation { rect, uri });
        }
    }

    pub fn into_pages(self) -> Vec<Page> {
        self.pages
    }
}
