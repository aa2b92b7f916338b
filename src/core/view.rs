//! Views: pure functions from state to a `Node` tree.

use crate::core::action::Action;
use crate::core::state::App;
use crate::core::vdom::{AttrValue, Node, h, text};

/// `<p>Hello <strong>World</strong></p>`
pub fn hello_view() -> Node {
    h("p")
        .child(text("Hello "))
        .child(h("strong").child(text("World")))
        .into()
}

struct PersonProps<'a> {
    name: &'a str,
    highlight: bool,
    selected: bool,
    on_toggle: Action,
    on_select: Action,
}

fn person(props: PersonProps<'_>) -> Node {
    h("div")
        .class("person", true)
        .class("highlight", props.highlight)
        .class("selected", props.selected)
        .on_click(props.on_select)
        .child(h("p").child(text(props.name)))
        .child(
            h("input")
                .attr("type", AttrValue::Str("checkbox".to_string()))
                .attr("checked", AttrValue::Bool(props.highlight))
                .on_click_stop(props.on_toggle),
        )
        .into()
}

pub fn people_view(state: &App) -> Node {
    let rows = state.names.iter().enumerate().map(|(index, name)| {
        person(PersonProps {
            name: name.as_str(),
            highlight: state.highlight.get(index).copied().unwrap_or(false),
            selected: state.selected == Some(index),
            on_toggle: Action::ToggleHighlight(index),
            on_select: Action::Select(index),
        })
    });

    let mut main = h("main").children(rows);
    if !state.bio.is_empty() {
        main = main.child(h("div").class("bio", true).child(text(state.bio.as_str())));
    }
    if let Some(error) = &state.error {
        main = main.child(h("div").class("error", true).child(text(error.as_str())));
    }
    main.into()
}
