use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::components::query_params::{QueryParams, SharedQueryParams};
use crate::components::section::{section_icon, section_label, Section, NAV_QUERY_KEY};
use crate::components::Icon;

/// Owns the active settings section. The URL is updated by an effect that
/// watches the section signal, not by `activate` itself.
#[derive(Clone, Copy, PartialEq)]
pub struct TabNavigator {
    active: Signal<Section>,
}

impl TabNavigator {
    pub fn new(active: Signal<Section>) -> Self {
        Self { active }
    }

    pub fn activate(&self, section: Section) {
        let mut active = self.active;
        if *active.peek() == section {
            return;
        }
        active.set(section);
    }

    pub fn current_section(&self) -> Section {
        (self.active)()
    }

    pub fn is_active(&self, section: &Section) -> bool {
        *self.active.read() == *section
    }
}

/// Mirrors `section` into the `nav` parameter. Returns whether the URL changed.
pub fn sync_section_query(params: &dyn QueryParams, section: &Section) -> bool {
    let desired = section.query_value();
    if params.get(NAV_QUERY_KEY).as_deref() == desired {
        return false;
    }
    match desired {
        Some(value) => params.set(NAV_QUERY_KEY, value),
        None => params.delete(NAV_QUERY_KEY),
    }
    true
}

pub fn use_tab_navigator(initial: Section, params: SharedQueryParams) -> TabNavigator {
    let active = use_signal(|| initial);

    use_effect(move || {
        let section = active();
        if sync_section_query(&*params, &section) {
            debug!("[nav] query synced to section {}", section.id());
        }
    });

    TabNavigator::new(active)
}

#[component]
pub fn SectionNav() -> Element {
    let navigator = use_context::<TabNavigator>();
    let links: Vec<(Section, String, &'static str, &'static str, bool)> = Section::ALL
        .into_iter()
        .map(|section| {
            let active = navigator.is_active(&section);
            let id = section.id().to_string();
            let label = section_label(&section);
            let icon = section_icon(&section);
            (section, id, label, icon, active)
        })
        .collect();

    rsx! {
        nav { class: "section-nav",
            for (section, id, label, icon, active) in links {
                a {
                    key: "{id}",
                    href: "#",
                    class: if active { "section-link active" } else { "section-link" },
                    "data-nav": "{id}",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        navigator.activate(section.clone());
                    },
                    Icon { name: icon.to_string(), class: "w-4 h-4".to_string() }
                    span { "{label}" }
                }
            }
        }
    }
}
