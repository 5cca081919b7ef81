//! Utility helpers for card names

/// Lookup key for the image dictionary. Only case is folded; whitespace and
/// set tags are part of the key.
pub fn normalize_card_name<S: AsRef<str>>(s: S) -> String {
    s.as_ref().to_lowercase()
}

/// Removes a trailing `" [...]"` annotation such as a set tag.
///
/// The annotation must close the string and its body may not contain `]`,
/// so `"Forest [m19] [foil]"` only loses `" [foil]"`.
pub fn strip_bracket_suffix(s: &str) -> &str {
    let Some(body) = s.strip_suffix(']') else {
        return s;
    };
    // The annotation body can't contain ']', so it starts after the last one.
    let tail_start = body.rfind(']').map(|idx| idx + 1).unwrap_or(0);
    match body[tail_start..].find(" [") {
        Some(offset) => &s[..tail_start + offset],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_set_tag() {
        assert_eq!(strip_bracket_suffix("Llanowar Elves [DOM]"), "Llanowar Elves");
        assert_eq!(strip_bracket_suffix("Island [m19-264]"), "Island");
    }

    #[test]
    fn leaves_plain_names_alone() {
        assert_eq!(strip_bracket_suffix("Llanowar Elves"), "Llanowar Elves");
        assert_eq!(strip_bracket_suffix(""), "");
        assert_eq!(strip_bracket_suffix("]"), "]");
    }

    #[test]
    fn requires_leading_space_and_trailing_position() {
        assert_eq!(strip_bracket_suffix("Elves[DOM]"), "Elves[DOM]");
        assert_eq!(strip_bracket_suffix("Elves [DOM] extra"), "Elves [DOM] extra");
    }

    #[test]
    fn only_last_annotation_is_removed() {
        assert_eq!(strip_bracket_suffix("Forest [m19] [foil]"), "Forest [m19]");
        assert_eq!(strip_bracket_suffix("Who [What [Where]"), "Who");
        assert_eq!(strip_bracket_suffix("Name []"), "Name");
    }

    #[test]
    fn stripping_is_idempotent_for_single_annotation() {
        for name in ["Llanowar Elves [DOM]", "Llanowar Elves", "Name []", "A [b [c]"] {
            let once = strip_bracket_suffix(name);
            assert_eq!(strip_bracket_suffix(once), once);
        }
    }

    #[test]
    fn normalization_only_folds_case() {
        assert_eq!(normalize_card_name("Llanowar Elves [DOM]"), "llanowar elves [dom]");
        assert_eq!(normalize_card_name(" Bolt "), " bolt ");
    }
}
