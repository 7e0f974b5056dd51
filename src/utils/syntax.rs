//! Local, network-free email syntax check used by the precheck pass.
//!
//! Deliberately a subset of RFC 5322: atext local parts with non-edge dots,
//! LDH domain labels with at least one dot. The remote API remains the
//! authority; this only exists to report obviously broken input up front.

fn is_atext(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '!' | '#'
                | '$'
                | '%'
                | '&'
                | '\''
                | '*'
                | '+'
                | '-'
                | '/'
                | '='
                | '?'
                | '^'
                | '_'
                | '`'
                | '{'
                | '|'
                | '}'
                | '~'
        )
}

fn check_local(local: &str) -> Result<(), String> {
    if local.is_empty() || local.len() > 64 {
        return Err(format!("local part length {} invalid (1..=64)", local.len()));
    }
    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return Err("local part has a leading, trailing or doubled dot".to_string());
    }
    if !local.chars().all(|c| is_atext(c) || c == '.') {
        return Err("local part contains characters outside the atext set".to_string());
    }
    Ok(())
}

fn check_domain(domain: &str) -> Result<(), String> {
    if domain.is_empty() || domain.len() > 253 {
        return Err(format!("domain length {} invalid (1..=253)", domain.len()));
    }
    if !domain.contains('.') {
        return Err("domain must contain at least one dot".to_string());
    }
    for label in domain.split('.') {
        if label.is_empty() || label.len() > 63 {
            return Err(format!("domain label '{label}' length invalid (1..=63)"));
        }
        if label.starts_with('-') || label.ends_with('-') {
            return Err(format!("domain label '{label}' starts or ends with a hyphen"));
        }
        if !label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(format!("domain label '{label}' contains invalid characters"));
        }
    }
    Ok(())
}

/// Returns a human-readable reason on failure.
pub fn check_syntax(address: &str) -> Result<(), String> {
    if address.len() > 254 {
        return Err(format!("total length {} > 254", address.len()));
    }
    let mut parts = address.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            check_local(local)?;
            check_domain(domain)
        }
        _ => Err("must contain exactly one '@'".to_string()),
    }
}
