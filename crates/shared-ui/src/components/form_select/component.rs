use dioxus::prelude::*;

/// Native `<select>` styled for filters and forms.
///
/// `options` are `(value, label)` pairs. With a `placeholder` an empty-valued
/// first option is shown until the user picks something.
#[component]
pub fn FormSelect(
    #[props(default)] value: String,
    options: Vec<(String, String)>,
    #[props(default)] placeholder: Option<String>,
    #[props(default)] onchange: Option<EventHandler<String>>,
    #[props(default)] label: String,
    #[props(default)] id: String,
    #[props(default)] error: Option<String>,
    #[props(default = false)] disabled: bool,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "form-select-wrapper",
            if !label.is_empty() {
                label { class: "form-select-label", r#for: "{id}", "{label}" }
            }
            select {
                class: "form-select",
                id: "{id}",
                value: value.clone(),
                disabled: disabled,
                "aria-invalid": if error.is_some() { "true" } else { "false" },
                onchange: move |evt: Event<FormData>| {
                    if let Some(handler) = &onchange {
                        handler.call(evt.value());
                    }
                },
                if let Some(placeholder) = placeholder {
                    option { value: "", disabled: true, selected: value.is_empty(), "{placeholder}" }
                }
                for (opt_value, opt_label) in options {
                    option {
                        key: "{opt_value}",
                        selected: opt_value == value,
                        value: "{opt_value}",
                        "{opt_label}"
                    }
                }
            }
            if let Some(error) = error {
                p { class: "form-field-error", "{error}" }
            }
        }
    }
}

/// Build `(value, label)` pairs from static tables.
pub fn select_options(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(value, label)| (value.to_string(), label.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn options_from_pairs() {
        let opts = select_options(&[("all", "All Sports"), ("Athletics", "Athletics")]);
        assert_eq!(
            opts,
            vec![
                ("all".to_string(), "All Sports".to_string()),
                ("Athletics".to_string(), "Athletics".to_string()),
            ]
        );
    }

    #[test]
    fn renders_error_message() {
        let html = dioxus_ssr::render_element(rsx! {
            FormSelect {
                label: "Role",
                id: "official-role",
                options: select_options(&[("coach", "Senior Coach")]),
                placeholder: "Select role".to_string(),
                error: "Select a role".to_string(),
            }
        });
        assert!(html.contains("Senior Coach"));
        assert!(html.contains("Select a role"));
        assert!(html.contains("aria-invalid=\"true\""));
    }
}
