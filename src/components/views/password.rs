use dioxus::prelude::*;

pub const RESET_PASSWORD_ENDPOINT: &str = "/user/resetpassword";

#[component]
pub fn PasswordForm() -> Element {
    rsx! {
        form {
            method: "POST",
            action: RESET_PASSWORD_ENDPOINT,
            class: "settings-form",
            div { class: "form-row",
                label { r#for: "currentPassword", class: "form-label", "Old password:" }
                input {
                    id: "currentPassword",
                    name: "password",
                    r#type: "password",
                    class: "form-input",
                }
            }
            div { class: "form-row",
                label { r#for: "newPassword", class: "form-label", "New Password:" }
                input {
                    id: "newPassword",
                    name: "password2",
                    r#type: "password",
                    class: "form-input",
                }
            }
            div { class: "form-row",
                label { r#for: "confirmPassword", class: "form-label", "Confirm New Password:" }
                input {
                    id: "confirmPassword",
                    name: "password3",
                    r#type: "password",
                    class: "form-input",
                }
            }
            button { class: "btn-success", r#type: "submit", "Change Password" }
        }
    }
}
