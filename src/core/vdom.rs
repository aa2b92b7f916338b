//! # Virtual Tree
//!
//! The declarative description a view returns: elements with a tag,
//! attributes, a class set, an optional click handler, and children; or a
//! text leaf. The terminal adapter lays it out and draws it.
//!
//! Click handlers are data. A `Handler` names the action to dispatch and
//! whether the click stops there; `bubble()` does the walking.

use std::collections::BTreeMap;

use crate::core::action::Action;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    Str(String),
    Bool(bool),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handler {
    pub action: Action,
    pub stop_propagation: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attrs: BTreeMap<String, AttrValue>,
    /// Class name → enabled, in declaration order.
    pub classes: Vec<(String, bool)>,
    pub on_click: Option<Handler>,
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(String),
    Element(Element),
}

/// Start an element with the given tag.
pub fn h(tag: &str) -> Element {
    Element {
        tag: tag.to_string(),
        attrs: BTreeMap::new(),
        classes: Vec::new(),
        on_click: None,
        children: Vec::new(),
    }
}

pub fn text(s: impl Into<String>) -> Node {
    Node::Text(s.into())
}

impl Element {
    pub fn class(mut self, name: &str, enabled: bool) -> Self {
        self.classes.push((name.to_string(), enabled));
        self
    }

    pub fn attr(mut self, name: &str, value: AttrValue) -> Self {
        self.attrs.insert(name.to_string(), value);
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    /// Dispatch `action` on click and let the click bubble further.
    pub fn on_click(mut self, action: Action) -> Self {
        self.on_click = Some(Handler {
            action,
            stop_propagation: false,
        });
        self
    }

    /// Dispatch `action` on click; ancestors never see the click.
    pub fn on_click_stop(mut self, action: Action) -> Self {
        self.on_click = Some(Handler {
            action,
            stop_propagation: true,
        });
        self
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.classes.iter().any(|(c, on)| *on && c == name)
    }

    pub fn bool_attr(&self, name: &str) -> bool {
        matches!(self.attrs.get(name), Some(AttrValue::Bool(true)))
    }

    pub fn str_attr(&self, name: &str) -> Option<&str> {
        match self.attrs.get(name) {
            Some(AttrValue::Str(s)) => Some(s),
            _ => None,
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element(e) => &e.children,
            Node::Text(_) => &[],
        }
    }

    /// Node reached by following child indices from this node.
    pub fn at(&self, path: &[usize]) -> Option<&Node> {
        path.iter()
            .try_fold(self, |node, &i| node.children().get(i))
    }

    /// Concatenated text of this subtree.
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(s) => s.clone(),
            Node::Element(e) => e.children.iter().map(Node::text_content).collect(),
        }
    }
}

/// Actions a click on the node at `path` dispatches, innermost first.
///
/// Walks from the target up to `root`, collecting each click handler,
/// and stops after the first handler that stops propagation.
pub fn bubble(root: &Node, path: &[usize]) -> Vec<Action> {
    let mut chain = vec![root];
    let mut node = root;
    for &i in path {
        match node.children().get(i) {
            Some(child) => {
                chain.push(child);
                node = child;
            }
            None => break,
        }
    }

    let mut actions = Vec::new();
    for handler in chain
        .iter()
        .rev()
        .filter_map(|n| n.as_element())
        .filter_map(|e| e.on_click.as_ref())
    {
        actions.push(handler.action.clone());
        if handler.stop_propagation {
            break;
        }
    }
    actions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> Node {
        h("main")
            .child(
                h("div")
                    .class("person", true)
                    .on_click(Action::Select(0))
                    .child(h("p").child(text("Ada")))
                    .child(
                        h("input")
                            .attr("type", AttrValue::Str("checkbox".to_string()))
                            .on_click_stop(Action::ToggleHighlight(0)),
                    ),
            )
            .into()
    }

    #[test]
    fn test_click_on_text_bubbles_to_row() {
        assert_eq!(bubble(&row(), &[0, 0, 0]), vec![Action::Select(0)]);
    }

    #[test]
    fn test_click_on_checkbox_stops_at_checkbox() {
        assert_eq!(bubble(&row(), &[0, 1]), vec![Action::ToggleHighlight(0)]);
    }

    #[test]
    fn test_click_without_stop_reaches_every_handler() {
        let tree: Node = h("div")
            .on_click(Action::Select(1))
            .child(h("span").on_click(Action::ToggleHighlight(1)))
            .into();
        assert_eq!(
            bubble(&tree, &[0]),
            vec![Action::ToggleHighlight(1), Action::Select(1)]
        );
    }

    #[test]
    fn test_click_on_root_without_handler_is_empty() {
        assert!(bubble(&row(), &[]).is_empty());
    }

    #[test]
    fn test_at_and_text_content() {
        let tree = row();
        assert_eq!(tree.at(&[0, 0]).map(Node::text_content).as_deref(), Some("Ada"));
        assert!(tree.at(&[3]).is_none());
    }

    #[test]
    fn test_class_lookup_ignores_disabled() {
        let e = h("div").class("person", true).class("selected", false);
        assert!(e.has_class("person"));
        assert!(!e.has_class("selected"));
    }
}
