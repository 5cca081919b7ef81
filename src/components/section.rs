//! Settings sections and their mapping to the `nav` query parameter.

pub const NAV_QUERY_KEY: &str = "nav";

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Profile,
    Password,
    Email,
    Notifications,
    /// Identifier from a stale or garbled URL. Kept as-is; no pane matches it.
    Unknown(String),
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Profile,
        Section::Password,
        Section::Email,
        Section::Notifications,
    ];

    pub fn from_id(id: &str) -> Self {
        match id {
            "profile" => Section::Profile,
            "password" => Section::Password,
            "email" => Section::Email,
            "notifications" => Section::Notifications,
            other => Section::Unknown(other.to_string()),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Section::Profile => "profile",
            Section::Password => "password",
            Section::Email => "email",
            Section::Notifications => "notifications",
            Section::Unknown(id) => id,
        }
    }

    pub fn is_default(&self) -> bool {
        *self == Section::default()
    }

    /// A missing parameter means the default section.
    pub fn from_query_value(value: Option<&str>) -> Self {
        value.map(Section::from_id).unwrap_or_default()
    }

    /// The value `nav` should hold, or `None` when it should be absent.
    pub fn query_value(&self) -> Option<&str> {
        if self.is_default() {
            None
        } else {
            Some(self.id())
        }
    }
}

pub fn section_label(section: &Section) -> &'static str {
    match section {
        Section::Profile => "Profile",
        Section::Password => "Change Password",
        Section::Email => "Update Email",
        Section::Notifications => "Notifications",
        Section::Unknown(_) => "",
    }
}

pub fn section_icon(section: &Section) -> &'static str {
    match section {
        Section::Profile => "user",
        Section::Password => "lock",
        Section::Email => "mail",
        Section::Notifications => "bell",
        Section::Unknown(_) => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_for_known_sections() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), section);
        }
    }

    #[test]
    fn default_section_has_no_query_value() {
        assert_eq!(Section::Profile.query_value(), None);
        assert_eq!(Section::Password.query_value(), Some("password"));
        assert_eq!(Section::Notifications.query_value(), Some("notifications"));
    }

    #[test]
    fn missing_query_value_means_profile() {
        assert_eq!(Section::from_query_value(None), Section::Profile);
        assert_eq!(Section::from_query_value(Some("email")), Section::Email);
    }

    #[test]
    fn unknown_identifiers_are_kept_verbatim() {
        let section = Section::from_query_value(Some("Passw0rd"));
        assert_eq!(section, Section::Unknown("Passw0rd".to_string()));
        assert_eq!(section.query_value(), Some("Passw0rd"));
        assert_eq!(section_label(&section), "");
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(
            Section::from_id("Profile"),
            Section::Unknown("Profile".to_string())
        );
    }
}
