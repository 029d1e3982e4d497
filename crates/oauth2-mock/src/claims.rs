//! Claim-line parsing.
//!
//! The authorization "code" in this server is not opaque: it is a
//! newline-delimited blob of `key=value` claim lines, edited by the tester
//! on the authorize page and handed back verbatim to `/token`.

/// Fabricated claims pre-filled into the authorize form.
pub const DEMO_CLAIMS: &[&str] = &[
    "user_id=fake_user",
    "user_name=Fake User",
    "email=fake@user.invalid",
    "extra=Extra Authenticated Value",
];

/// Parse newline-delimited `key=value` lines into claim pairs.
///
/// Each line is trimmed, then split on the first `=`. Lines without an `=`
/// (blank lines included) are skipped silently; the value keeps any further
/// `=` characters untouched.
#[must_use]
pub fn parse_claim_lines(code: &str) -> Vec<(String, String)> {
    code.lines()
        .filter_map(|line| {
            line.trim().split_once('=').map(|(key, value)| (key.to_string(), value.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_well_formed_lines() {
        let pairs = parse_claim_lines("user_id=u1\nemail=e@x.com");
        assert_eq!(
            pairs,
            vec![
                ("user_id".to_string(), "u1".to_string()),
                ("email".to_string(), "e@x.com".to_string()),
            ]
        );
    }

    #[test]
    fn test_skips_malformed_lines_silently() {
        let pairs = parse_claim_lines("user_id=u1\nbad_line\n\nemail=e@x.com");
        assert_eq!(pairs.len(), 2);
        assert!(pairs.iter().all(|(key, _)| key != "bad_line"));
    }

    #[test]
    fn test_splits_on_first_equals_only() {
        let pairs = parse_claim_lines("query=a=b=c");
        assert_eq!(pairs, vec![("query".to_string(), "a=b=c".to_string())]);
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        let pairs = parse_claim_lines("  user_id=u1  \r\n\tname=Fake User");
        assert_eq!(
            pairs,
            vec![
                ("user_id".to_string(), "u1".to_string()),
                ("name".to_string(), "Fake User".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_input_yields_no_claims() {
        assert!(parse_claim_lines("").is_empty());
    }

    #[test]
    fn test_demo_claims_are_well_formed() {
        let joined = DEMO_CLAIMS.join("\n");
        assert_eq!(parse_claim_lines(&joined).len(), DEMO_CLAIMS.len());
    }
}
