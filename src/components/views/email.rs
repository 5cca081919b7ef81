use crate::api::models::Account;
use dioxus::prelude::*;

pub const UPDATE_EMAIL_ENDPOINT: &str = "/user/updateemail";

#[component]
pub fn EmailForm(account: Account) -> Element {
    rsx! {
        form {
            method: "POST",
            action: UPDATE_EMAIL_ENDPOINT,
            class: "settings-form",
            div { class: "form-row",
                label { r#for: "email", class: "form-label", "New Email:" }
                input {
                    id: "email",
                    name: "email",
                    r#type: "email",
                    class: "form-input",
                    initial_value: "{account.email}",
                }
            }
            div { class: "form-row",
                label { r#for: "emailPassword", class: "form-label", "Password:" }
                input {
                    id: "emailPassword",
                    name: "password",
                    r#type: "password",
                    class: "form-input",
                }
            }
            button { class: "btn-success", r#type: "submit", "Update" }
        }
    }
}
