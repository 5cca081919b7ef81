use crate::api::models::Account;
use crate::components::image_resolver::ResolvedImage;
use crate::components::CardNameInput;
use crate::config::PageConfig;
use dioxus::prelude::*;

pub const UPDATE_USER_INFO_ENDPOINT: &str = "/user/updateuserinfo";
const ABOUT_MAX_LENGTH: &str = "2500";

#[component]
pub fn ProfileForm(
    account: Account,
    mut image_query: Signal<String>,
    preview: ResolvedImage,
    /// Lower-cased dictionary key, present only when the typed name matched.
    #[props(!optional)]
    selection: Option<String>,
) -> Element {
    let config = use_context::<PageConfig>();

    rsx! {
        form {
            method: "POST",
            action: UPDATE_USER_INFO_ENDPOINT,
            class: "settings-form",
            dl { class: "profile-grid",
                dt { "Username" }
                dd {
                    input {
                        name: "username",
                        class: "form-input",
                        initial_value: "{account.username}",
                    }
                }
                dt { "Email" }
                dd { "{account.email}" }
                dt { "About" }
                dd {
                    textarea {
                        name: "body",
                        class: "form-input",
                        maxlength: ABOUT_MAX_LENGTH,
                        placeholder: "Describe yourself here... (max length 2500)",
                        initial_value: "{account.about}",
                    }
                }
                dt { "Profile Pic" }
                dd { class: "profile-pic",
                    div { class: "profile-pic-preview",
                        img {
                            width: "100%",
                            src: "{preview.uri}",
                            alt: "{preview.name}",
                        }
                        em { class: "cube-preview-artist", "Art by {preview.artist}" }
                    }
                    div { class: "profile-pic-picker",
                        CardNameInput {
                            name: "remove".to_string(),
                            tree_url: config.card_names_url(),
                            tree_path: config.card_names_tree.clone(),
                            value: image_query(),
                            on_change: move |text: String| image_query.set(text),
                            on_submit: move |text: String| image_query.set(text),
                        }
                        if let Some(image) = selection {
                            input { r#type: "hidden", name: "image", value: "{image}" }
                        }
                    }
                }
            }
            div { class: "form-actions",
                button { class: "btn-success", r#type: "submit", "Update" }
            }
        }
    }
}
