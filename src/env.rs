//! `{ENV_VAR}` placeholder substitution for API and RPC URLs.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("placeholder regex"));

/// Replaces every `{VAR}` placeholder in `url` with the value of the
/// environment variable `VAR`.
///
/// Returns `None` if any referenced variable is unset or empty: a URL with
/// an unfilled key slot is not usable, and half-substituted secrets must not
/// leak into request logs. Text without well-formed placeholders (including
/// an unclosed `{VAR`) passes through unchanged.
pub fn apply_env_vars(url: &str) -> Option<String> {
    let mut unresolved = false;
    let out = PLACEHOLDER.replace_all(url, |caps: &Captures<'_>| {
        match std::env::var(&caps[1]) {
            Ok(value) if !value.is_empty() => value,
            _ => {
                tracing::debug!(placeholder = &caps[1], "environment variable unset or empty");
                unresolved = true;
                String::new()
            }
        }
    });
    if unresolved { None } else { Some(out.into_owned()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test owns distinct variable names; the process environment is
    // shared across threads.

    #[test]
    fn url_without_placeholders_passes_through() {
        let url = "https://api.example.com/v1";
        assert_eq!(apply_env_vars(url).as_deref(), Some(url));
    }

    #[test]
    fn single_placeholder_is_replaced() {
        unsafe { std::env::set_var("NR_TEST_KEY_A", "secret123") };
        assert_eq!(
            apply_env_vars("https://api.example.com/v1?key={NR_TEST_KEY_A}").as_deref(),
            Some("https://api.example.com/v1?key=secret123")
        );
    }

    #[test]
    fn multiple_and_repeated_placeholders_are_replaced() {
        unsafe {
            std::env::set_var("NR_TEST_KEY_B", "secret123");
            std::env::set_var("NR_TEST_VER_B", "v2");
        }
        assert_eq!(
            apply_env_vars("https://{NR_TEST_VER_B}.example.com/api?key={NR_TEST_KEY_B}").as_deref(),
            Some("https://v2.example.com/api?key=secret123")
        );
        assert_eq!(
            apply_env_vars("https://api.example.com/{NR_TEST_KEY_B}/endpoint?key={NR_TEST_KEY_B}").as_deref(),
            Some("https://api.example.com/secret123/endpoint?key=secret123")
        );
    }

    #[test]
    fn any_missing_variable_fails_the_whole_url() {
        unsafe { std::env::set_var("NR_TEST_KEY_C", "secret123") };
        assert_eq!(
            apply_env_vars("https://{NR_TEST_MISSING_C}.example.com/api?key={NR_TEST_KEY_C}"),
            None
        );
    }

    #[test]
    fn empty_variable_counts_as_missing() {
        unsafe { std::env::set_var("NR_TEST_KEY_D", "") };
        assert_eq!(apply_env_vars("https://api.example.com/v1?key={NR_TEST_KEY_D}"), None);
    }

    #[test]
    fn values_are_inserted_verbatim() {
        unsafe { std::env::set_var("NR_TEST_KEY_E", "secret/123+456") };
        assert_eq!(
            apply_env_vars("https://api.example.com/v1?key={NR_TEST_KEY_E}").as_deref(),
            Some("https://api.example.com/v1?key=secret/123+456")
        );
    }

    #[test]
    fn placeholders_inside_larger_tokens_are_replaced() {
        unsafe { std::env::set_var("NR_TEST_KEY_F", "secret123") };
        assert_eq!(
            apply_env_vars("https://api.example.com/v1?prefix{NR_TEST_KEY_F}suffix").as_deref(),
            Some("https://api.example.com/v1?prefixsecret123suffix")
        );
    }

    #[test]
    fn malformed_placeholder_passes_through() {
        unsafe { std::env::set_var("NR_TEST_KEY_G", "secret123") };
        let url = "https://api.example.com/v1?key={NR_TEST_KEY_G";
        assert_eq!(apply_env_vars(url).as_deref(), Some(url));
    }
}
