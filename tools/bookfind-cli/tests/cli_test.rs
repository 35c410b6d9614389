//! CLI integration tests using assert_cmd

use assert_cmd::Command;
use predicates::prelude::*;

fn bookfind_cmd() -> Command {
    Command::cargo_bin("bookfind").unwrap()
}

mod validate {
    use super::*;

    #[test]
    fn test_validate_accepts_a_real_term() {
        bookfind_cmd()
            .arg("validate")
            .arg("lord of the rings")
            .assert()
            .success()
            .stdout(predicate::str::contains("Valid query term"));
    }

    #[test]
    fn test_validate_rejects_short_term_with_inline_message() {
        bookfind_cmd()
            .arg("validate")
            .arg("ab")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Please type at least 3 characters."));
    }

    #[test]
    fn test_validate_rejects_empty_term_with_inline_message() {
        bookfind_cmd()
            .arg("validate")
            .arg("")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Search box can't be empty."));
    }

    #[test]
    fn test_validate_rejects_whitespace_only_term() {
        bookfind_cmd()
            .arg("validate")
            .arg("   ")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Search box can't be empty."));
    }
}

mod search {
    use super::*;

    #[test]
    fn test_search_with_short_term_fails_before_any_request() {
        // Validation short-circuits, so no endpoint is needed
        bookfind_cmd()
            .arg("search")
            .arg("ab")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Please type at least 3 characters."));
    }

    #[test]
    fn test_search_against_unreachable_catalog_shows_generic_message() {
        bookfind_cmd()
            .arg("search")
            .arg("dune")
            .arg("--base-url")
            .arg("http://127.0.0.1:1")
            .assert()
            .failure()
            .stderr(predicate::str::contains(
                "Something went wrong. Please try again.",
            ));
    }

    #[test]
    fn test_env_var_overrides_default_endpoint() {
        bookfind_cmd()
            .env("BOOKFIND_URL", "http://127.0.0.1:1")
            .arg("search")
            .arg("dune")
            .assert()
            .failure()
            .stderr(predicate::str::contains(
                "Something went wrong. Please try again.",
            ));
    }
}

mod help {
    use super::*;

    #[test]
    fn test_help_flag() {
        bookfind_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Bookfind Command Line Tool"))
            .stdout(predicate::str::contains("validate"))
            .stdout(predicate::str::contains("search"));
    }

    #[test]
    fn test_version_flag() {
        bookfind_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("bookfind"));
    }

    #[test]
    fn test_no_args_shows_help() {
        bookfind_cmd()
            .assert()
            .failure()
            .stderr(predicate::str::contains("Usage"));
    }
}
