use dioxus::prelude::*;
use dioxus_primitives::checkbox as prim;

pub use prim::CheckboxState;

#[component]
pub fn Checkbox(mut props: prim::CheckboxProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "checkbox", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Checkbox { ..props }
    }
}

/// Tick mark shown while the box is checked.
#[component]
pub fn CheckboxIndicator(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    let mut attrs = attributes;
    attrs.push(Attribute::new("class", "checkbox-indicator", None, false));

    rsx! {
        prim::CheckboxIndicator {
            attributes: attrs,
            svg {
                class: "checkbox-icon",
                xmlns: "http://www.w3.org/2000/svg",
                width: "12",
                height: "12",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "3",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                polyline { points: "20 6 9 17 4 12" }
            }
        }
    }
}

/// A checkbox with its text label, used for multi-select option grids.
#[component]
pub fn CheckboxField(
    id: String,
    label: String,
    checked: bool,
    on_change: EventHandler<bool>,
) -> Element {
    let state = if checked {
        CheckboxState::Checked
    } else {
        CheckboxState::Unchecked
    };

    rsx! {
        div { class: "checkbox-field",
            Checkbox {
                id: "{id}",
                checked: Some(state),
                on_checked_change: move |next: CheckboxState| {
                    on_change.call(matches!(next, CheckboxState::Checked));
                },
                CheckboxIndicator {}
            }
            label { class: "checkbox-label", r#for: "{id}", "{label}" }
        }
    }
}
