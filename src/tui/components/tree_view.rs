//! # TreeView Component
//!
//! Draws a `Node` tree into the terminal and records a hit map so mouse
//! clicks can be traced back to the node under the cursor.
//!
//! ## Layout rules
//!
//! - Text, `span`/`strong`/`em`/`input`, and a `p` holding only those, are
//!   *inline*.
//! - An element whose children are all inline becomes one row (wrapped if
//!   wider than the area). Adjacent element children are separated by a
//!   space.
//! - Any other element stacks its children vertically.
//! - A checkbox `input` draws as `[x]` / `[ ]`.
//!
//! Classes map to styles the way a stylesheet would: `highlight` is
//! yellow, `selected` is reversed, `bio` is cyan italic, `error` is red.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::core::vdom::{Element, Node};
use crate::tui::component::Component;

const INLINE_TAGS: &[&str] = &["span", "strong", "b", "em", "i", "input"];

/// A run of text belonging to one node.
#[derive(Debug, Clone, PartialEq)]
struct Segment {
    text: String,
    style: Style,
    path: Vec<usize>,
}

/// One laid-out row of the tree.
#[derive(Debug, Clone, PartialEq)]
struct Row {
    segments: Vec<Segment>,
    path: Vec<usize>,
    margin_top: u16,
}

/// Screen region of a drawn row, in absolute frame coordinates.
#[derive(Debug, Clone, PartialEq)]
struct HitRow {
    area: Rect,
    /// `(start_col, end_col, path)`, only recorded for single-line rows.
    segments: Vec<(u16, u16, Vec<usize>)>,
    path: Vec<usize>,
}

/// Persistent state: the hit map of the last frame.
#[derive(Debug, Default)]
pub struct TreeViewState {
    hits: Vec<HitRow>,
}

impl TreeViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Path of the deepest node drawn at (col, row), if any.
    pub fn hit_test(&self, col: u16, row: u16) -> Option<Vec<usize>> {
        let hit = self.hits.iter().find(|h| {
            row >= h.area.y
                && row < h.area.y + h.area.height
                && col >= h.area.x
                && col < h.area.x + h.area.width
        })?;
        let path = hit
            .segments
            .iter()
            .find(|(start, end, _)| col >= *start && col < *end)
            .map(|(_, _, path)| path.clone())
            .unwrap_or_else(|| hit.path.clone());
        Some(path)
    }
}

/// Transient render wrapper, built each frame with borrowed state.
pub struct TreeView<'a> {
    tree: &'a Node,
    state: &'a mut TreeViewState,
}

impl<'a> TreeView<'a> {
    pub fn new(tree: &'a Node, state: &'a mut TreeViewState) -> Self {
        Self { tree, state }
    }
}

impl Component for TreeView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.hits.clear();
        let mut y = area.y;
        let bottom = area.y + area.height;

        for row in layout(self.tree) {
            y += row.margin_top;
            if y >= bottom {
                break;
            }

            let spans: Vec<Span> = row
                .segments
                .iter()
                .map(|s| Span::styled(s.text.clone(), s.style))
                .collect();
            let single_line: Vec<(u16, u16, Vec<usize>)> = {
                let mut x = area.x;
                spans
                    .iter()
                    .zip(&row.segments)
                    .map(|(span, seg)| {
                        let start = x;
                        x = x.saturating_add(span.width() as u16);
                        (start, x, seg.path.clone())
                    })
                    .collect()
            };

            let paragraph = Paragraph::new(Line::from(spans)).wrap(Wrap { trim: false });
            let height = (paragraph.line_count(area.width) as u16).max(1);
            let row_area = Rect::new(area.x, y, area.width, height.min(bottom - y));
            frame.render_widget(paragraph, row_area);

            self.state.hits.push(HitRow {
                area: row_area,
                segments: if height == 1 { single_line } else { Vec::new() },
                path: row.path,
            });
            y += height;
        }
    }
}

fn is_inline(node: &Node) -> bool {
    match node {
        Node::Text(_) => true,
        Node::Element(e) if INLINE_TAGS.contains(&e.tag.as_str()) => true,
        Node::Element(e) if e.tag == "p" => e.children.iter().all(is_inline),
        Node::Element(_) => false,
    }
}

fn renders_as_row(node: &Node) -> bool {
    match node {
        Node::Text(_) => true,
        Node::Element(e) => {
            INLINE_TAGS.contains(&e.tag.as_str())
                || (!e.children.is_empty() && e.children.iter().all(is_inline))
        }
    }
}

fn layout(tree: &Node) -> Vec<Row> {
    let mut rows = Vec::new();
    collect_rows(tree, &mut Vec::new(), &mut rows);
    rows
}

fn collect_rows(node: &Node, path: &mut Vec<usize>, rows: &mut Vec<Row>) {
    if renders_as_row(node) {
        let mut segments = Vec::new();
        emit(node, path, Style::default(), &mut segments);
        let margin_top = match node {
            Node::Element(e) if e.has_class("bio") || e.has_class("error") => 1,
            _ => 0,
        };
        rows.push(Row {
            segments,
            path: path.clone(),
            margin_top,
        });
        return;
    }
    for (i, child) in node.children().iter().enumerate() {
        path.push(i);
        collect_rows(child, path, rows);
        path.pop();
    }
}

fn emit(node: &Node, path: &mut Vec<usize>, inherited: Style, out: &mut Vec<Segment>) {
    match node {
        Node::Text(s) => out.push(Segment {
            text: s.clone(),
            style: inherited,
            path: path.clone(),
        }),
        Node::Element(e) => {
            let style = inherited.patch(element_style(e));
            if e.tag == "input" {
                out.push(Segment {
                    text: input_mark(e).to_string(),
                    style,
                    path: path.clone(),
                });
                return;
            }
            for (i, child) in e.children.iter().enumerate() {
                let prev_is_element = i > 0 && e.children[i - 1].as_element().is_some();
                if prev_is_element && child.as_element().is_some() {
                    out.push(Segment {
                        text: " ".to_string(),
                        style,
                        path: path.clone(),
                    });
                }
                path.push(i);
                emit(child, path, style, out);
                path.pop();
            }
        }
    }
}

fn input_mark(e: &Element) -> &'static str {
    match (e.str_attr("type"), e.bool_attr("checked")) {
        (Some("checkbox"), true) => "[x]",
        (Some("checkbox"), false) => "[ ]",
        _ => "[_]",
    }
}

fn element_style(e: &Element) -> Style {
    let base = match e.tag.as_str() {
        "strong" | "b" => Style::default().add_modifier(Modifier::BOLD),
        "em" | "i" => Style::default().add_modifier(Modifier::ITALIC),
        _ => Style::default(),
    };
    e.classes
        .iter()
        .filter(|(_, on)| *on)
        .fold(base, |style, (class, _)| style.patch(class_style(class)))
}

fn class_style(class: &str) -> Style {
    match class {
        "highlight" => Style::default().fg(Color::Yellow),
        "selected" => Style::default().add_modifier(Modifier::REVERSED),
        "bio" => Style::default().fg(Color::Cyan).add_modifier(Modifier::ITALIC),
        "error" => Style::default().fg(Color::Red),
        _ => Style::default(),
    }
}
