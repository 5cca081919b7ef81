use crate::api::models::Account;
use dioxus::prelude::*;

pub const UPDATE_NOTIFICATIONS_ENDPOINT: &str = "/user/updatenotifications";

/// Opt-out notification types, in display order.
pub const NOTIFICATION_TYPES: [(&str, &str); 4] = [
    ("cube_draft_own", "Drafts of cubes you own"),
    ("user_follow", "Another user follows you"),
    ("user_comment", "Comments on your blog, draft, or conversation"),
    ("cube_clone", "Clones of one of your cubes"),
];

/// Initial radio state. Accounts that never saved preferences get everything.
pub fn is_checked(account: &Account, notification_type: &str) -> bool {
    account
        .notification_silenced_types
        .as_ref()
        .map_or(true, |silenced| {
            !silenced.iter().any(|name| name == notification_type)
        })
}

#[component]
pub fn NotificationsForm(account: Account) -> Element {
    rsx! {
        form {
            method: "POST",
            action: UPDATE_NOTIFICATIONS_ENDPOINT,
            class: "settings-form",
            h5 { class: "form-heading", "Choose which updates will show in your notification menu:" }

            for (kind, label) in NOTIFICATION_TYPES {
                div { key: "{kind}", class: "form-row",
                    span { class: "form-label", "{label}" }
                    div { class: "radio-choice",
                        input {
                            id: "{kind}_true",
                            name: kind,
                            r#type: "radio",
                            value: "true",
                            initial_checked: is_checked(&account, kind),
                        }
                        label { r#for: "{kind}_true", "Yes" }
                    }
                    div { class: "radio-choice",
                        input {
                            id: "{kind}_false",
                            name: kind,
                            r#type: "radio",
                            value: "false",
                            initial_checked: !is_checked(&account, kind),
                        }
                        label { r#for: "{kind}_false", "No" }
                    }
                }
            }

            button { class: "btn-success", r#type: "submit", "Update" }
        }
    }
}
