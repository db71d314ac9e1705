use crate::models::Role;

/// Personal webmail domains. Anyone signing in from one of these is a candidate.
///
/// This is a heuristic, not verification: any unlisted domain (typos and
/// disposable-mail domains included) is treated as a company domain.
pub const PERSONAL_DOMAINS: &[&str] = &[
    "gmail.com",
    "yahoo.com",
    "hotmail.com",
    "outlook.com",
    "aol.com",
    "icloud.com",
    "me.com",
    "mail.com",
    "protonmail.com",
    "zoho.com",
];

/// Returns the part after the last `@`, lowercased. `None` if there is no `@`.
pub fn email_domain(email: &str) -> Option<String> {
    email
        .trim()
        .rsplit_once('@')
        .map(|(_, domain)| domain.to_ascii_lowercase())
}

/// Returns the part before the last `@`, or the whole string if there is none.
pub fn email_local_part(email: &str) -> &str {
    let email = email.trim();
    email
        .rsplit_once('@')
        .map(|(local, _)| local)
        .unwrap_or(email)
}

pub fn is_personal_domain(domain: &str) -> bool {
    let domain = domain.to_ascii_lowercase();
    PERSONAL_DOMAINS.iter().any(|&d| d == domain)
}

/// Derives a role from the email domain.
///
/// Personal webmail → `Candidate`, anything else → `Hr`.
/// A string without `@` has no company domain and is classified `Candidate`.
pub fn classify_role(email: &str) -> Role {
    match email_domain(email) {
        Some(domain) if !is_personal_domain(&domain) => Role::Hr,
        _ => Role::Candidate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_personal_domain_is_candidate() {
        for domain in PERSONAL_DOMAINS {
            let email = format!("jane@{domain}");
            assert_eq!(classify_role(&email), Role::Candidate, "{email}");
        }
    }

    #[test]
    fn test_company_domain_is_hr() {
        assert_eq!(classify_role("jane@acme.com"), Role::Hr);
        assert_eq!(classify_role("recruiter@talent.io"), Role::Hr);
    }

    #[test]
    fn test_typo_domain_is_hr() {
        assert_eq!(classify_role("jane@gmial.com"), Role::Hr);
    }

    #[test]
    fn test_disposable_domain_is_hr() {
        assert_eq!(classify_role("x@mailinator.com"), Role::Hr);
    }

    #[test]
    fn test_subdomain_of_personal_is_hr() {
        // Only the exact listed domain counts.
        assert_eq!(classify_role("jane@eu.gmail.com"), Role::Hr);
    }

    #[test]
    fn test_domain_match_ignores_case() {
        assert_eq!(classify_role("Jane@GMAIL.com"), Role::Candidate);
    }

    #[test]
    fn test_missing_at_is_candidate() {
        assert_eq!(classify_role("not-an-email"), Role::Candidate);
    }

    #[test]
    fn test_local_part() {
        assert_eq!(email_local_part("jane.doe@acme.com"), "jane.doe");
        assert_eq!(email_local_part("jane"), "jane");
    }

    #[test]
    fn test_domain_uses_last_at() {
        assert_eq!(email_domain("a@b@gmail.com"), Some("gmail.com".to_string()));
        assert_eq!(email_domain("nobody"), None);
    }
}
