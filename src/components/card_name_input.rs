use dioxus::prelude::*;

/// Text field for the profile card name. Suggestions come from an external
/// autocomplete widget; this component only reports the text.
#[component]
pub fn CardNameInput(
    value: String,
    name: String,
    on_change: EventHandler<String>,
    on_submit: EventHandler<String>,
    /// Suggestion index the autocomplete widget attaches to.
    tree_url: String,
    tree_path: String,
    #[props(default = "Cardname for Image".to_string())] placeholder: String,
) -> Element {
    let typed = value.clone();

    rsx! {
        input {
            r#type: "text",
            class: "card-name-input",
            name: "{name}",
            value: "{value}",
            placeholder: "{placeholder}",
            autocomplete: "off",
            "data-lpignore": "true",
            "data-tree-url": "{tree_url}",
            "data-tree-path": "{tree_path}",
            oninput: move |evt: FormEvent| on_change.call(evt.value()),
            // Enter picks the card, it must not submit the profile form.
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Enter {
                    evt.prevent_default();
                    on_submit.call(typed.clone());
                }
            },
        }
    }
}
