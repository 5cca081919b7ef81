use crate::api::models::{Account, ImageDictionary};
use crate::api::ImageDictClient;
use crate::components::image_resolver::{resolve, selection_field};
use crate::components::query_params::SharedQueryParams;
use crate::components::section::Section;
use crate::components::views::{EmailForm, NotificationsForm, PasswordForm, ProfileForm};
use crate::components::{use_tab_navigator, SectionNav};
use crate::config::PageConfig;
use dioxus::logger::tracing::{debug, info, warn};
use dioxus::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

#[component]
pub fn AccountPage(account: Account, initial_section: Section) -> Element {
    let config = use_context::<PageConfig>();
    let query_params = use_context::<SharedQueryParams>();

    let navigator = use_tab_navigator(initial_section, query_params);
    let image_query = use_signal(String::new);
    let mut image_dict = use_signal(ImageDictionary::new);

    use_context_provider(|| navigator);

    // The fetch task belongs to this scope; the flag covers a response that
    // lands while the scope is being torn down.
    let mounted = use_hook(|| Rc::new(Cell::new(true)));
    {
        let mounted = mounted.clone();
        use_drop(move || mounted.set(false));
    }

    // Fetch the dictionary once on mount. Reads no signals, so it never re-runs.
    use_effect(move || {
        let mounted = mounted.clone();
        let client = ImageDictClient::new(config.clone());
        spawn(async move {
            match client.fetch().await {
                Ok(dict) => {
                    if !mounted.get() {
                        debug!("[imagedict] view unmounted, dropping response");
                        return;
                    }
                    info!("[imagedict] loaded {} entries", dict.len());
                    image_dict.set(dict);
                }
                Err(err) => {
                    warn!("[imagedict] {err}; previews use the stored image");
                }
            }
        });
    });

    let query = image_query();
    let stored = account.stored_image();
    let (preview, selection) = {
        let dict = image_dict.read();
        (
            resolve(&query, &dict, &stored),
            selection_field(&query, &dict),
        )
    };

    rsx! {
        div { class: "account-page",
            h2 { class: "page-title", "My Account" }
            div { class: "account-layout",
                aside { class: "account-sidebar", SectionNav {} }
                div { class: "tab-content",
                    match navigator.current_section() {
                        Section::Profile => rsx! {
                            ProfileForm {
                                account: account.clone(),
                                image_query,
                                preview,
                                selection,
                            }
                        },
                        Section::Password => rsx! {
                            PasswordForm {}
                        },
                        Section::Email => rsx! {
                            EmailForm { account: account.clone() }
                        },
                        Section::Notifications => rsx! {
                            NotificationsForm { account: account.clone() }
                        },
                        Section::Unknown(_) => rsx! {},
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::query_params::MemoryQueryParams;
    use dioxus::core::VirtualDom;

    #[derive(Props, Clone, PartialEq)]
    struct PageHarnessProps {
        section: Section,
    }

    fn page_harness(props: PageHarnessProps) -> Element {
        use_context_provider(|| PageConfig::with_origin("http://127.0.0.1:9"));
        use_context_provider(|| -> SharedQueryParams { Rc::new(MemoryQueryParams::new()) });
        let account = Account {
            email: "player@example.com".to_string(),
            username: "player".to_string(),
            ..Account::default()
        };

        rsx! {
            AccountPage { account, initial_section: props.section }
        }
    }

    // First render only: mount effects (and the dictionary fetch) never run.
    fn render_page(section: Section) -> String {
        let mut dom = VirtualDom::new_with_props(page_harness, PageHarnessProps { section });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn unknown_section_renders_empty_pane() {
        let html = render_page(Section::Unknown("bogus".to_string()));
        assert!(html.contains("My Account"));
        assert!(html.contains("Change Password"));
        assert!(html.contains("tab-content"));
        assert!(!html.contains("<form"));
    }

    #[test]
    fn only_the_active_section_form_renders() {
        let html = render_page(Section::Password);
        assert_eq!(html.matches("<form").count(), 1);
        assert!(html.contains("/user/resetpassword"));
        assert!(!html.contains("/user/updateuserinfo"));
        assert!(!html.contains("/user/updateemail"));
        assert!(!html.contains("/user/updatenotifications"));
    }

    #[test]
    fn profile_pane_without_match_has_no_image_field() {
        let html = render_page(Section::Profile);
        assert!(html.contains("/user/updateuserinfo"));
        assert!(html.contains("name=\"remove\""));
        assert!(!html.contains("name=\"image\""));
    }
}
