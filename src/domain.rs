use regex::Regex;

/// Compile the email-domain pattern: everything after the first `@`
/// up to the next whitespace.
pub fn domain_pattern() -> Result<Regex, regex::Error> {
    Regex::new(r"@([^\s]+)")
}

/// Extract the domain part of an email address. Addresses without an
/// `@` contribute no domain.
pub fn extract_domain(email: &str, pattern: &Regex) -> Option<String> {
    pattern
        .captures(email)
        .and_then(|captures| captures.get(1))
        .map(|matched| matched.as_str().to_string())
}
