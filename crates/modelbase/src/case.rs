use convert_case::{Boundary, Case, Casing};

///
/// Case
///
/// Identifier casing for generated table names.
///
/// Word boundaries are pinned explicitly rather than taken from the
/// convert_case defaults:
/// - a lowercase letter or digit followed by an uppercase letter
/// - an acronym run ending before a lowercase letter
///
/// Underscores and digit-to-lowercase transitions are not boundaries, so
/// already-snake-cased input passes through unchanged and digits do not
/// force a split on their own.
///

const WORD_BOUNDARIES: [Boundary; 3] = [
    Boundary::LOWER_UPPER,
    Boundary::DIGIT_UPPER,
    Boundary::ACRONYM,
];

/// Convert a `CamelCase` type name to its `snake_case` table form.
#[must_use]
pub fn camel_to_snake(name: &str) -> String {
    name.with_boundaries(&WORD_BOUNDARIES).to_case(Case::Snake)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn splits_camel_humps() {
        assert_eq!(camel_to_snake("User"), "user");
        assert_eq!(camel_to_snake("UserAccount"), "user_account");
    }

    #[test]
    fn splits_acronym_runs_at_word_transitions() {
        assert_eq!(camel_to_snake("HTTPServer"), "http_server");
        assert_eq!(camel_to_snake("HTTPServerError"), "http_server_error");
    }

    #[test]
    fn digits_do_not_force_a_split() {
        assert_eq!(camel_to_snake("ABTest2Variant"), "ab_test2_variant");
        assert_eq!(camel_to_snake("User2Fa"), "user2_fa");
    }

    #[test]
    fn snake_input_is_unchanged() {
        assert_eq!(camel_to_snake("user_account"), "user_account");
        assert_eq!(camel_to_snake("ab_test2_variant"), "ab_test2_variant");
    }

    #[test]
    fn leading_uppercase_produces_no_leading_separator() {
        assert_eq!(camel_to_snake("Account"), "account");
        assert_eq!(camel_to_snake("ABTest"), "ab_test");
    }

    proptest! {
        #[test]
        fn conversion_is_idempotent(name in "[A-Za-z][A-Za-z0-9]{0,16}") {
            let once = camel_to_snake(&name);
            let twice = camel_to_snake(&once);

            prop_assert_eq!(twice, once);
        }

        #[test]
        fn output_stays_in_snake_alphabet(name in "[A-Za-z][A-Za-z0-9]{0,16}") {
            let out = camel_to_snake(&name);

            prop_assert!(!out.starts_with('_'), "no leading separator: {out}");
            prop_assert!(
                out.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'),
                "unexpected character in {out}"
            );
        }
    }
}
