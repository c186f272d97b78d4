use dioxus::prelude::*;

/// Labelled text input with an optional leading icon and inline error.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] disabled: bool,
    #[props(default = false)] required: bool,
    #[props(default)] error: Option<String>,
    /// Icon drawn inside the field on the left.
    #[props(default)]
    icon: Option<Element>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let has_icon = icon.is_some();
    let base = vec![
        Attribute::new("class", "input", None, false),
        Attribute::new(
            "data-with-icon",
            if has_icon { "true" } else { "false" },
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "input-wrapper",
            if !label.is_empty() {
                label { class: "input-label", "{label}" }
            }
            div { class: "input-field",
                if let Some(icon) = icon {
                    span { class: "input-icon", {icon} }
                }
                input {
                    r#type: "{input_type}",
                    value: value,
                    placeholder: placeholder,
                    disabled: disabled,
                    required: required,
                    "aria-invalid": if error.is_some() { "true" } else { "false" },
                    oninput: move |evt| on_input.call(evt),
                    ..merged,
                }
            }
            if let Some(error) = error {
                p { class: "input-error", "{error}" }
            }
        }
    }
}
