use std::sync::LazyLock;

use regex::Regex;

/// Institutional email domain every applicant must use.
pub const EMAIL_DOMAIN: &str = "@student.undiksha.ac.id";

// `\d` is Unicode-aware in this engine; only ASCII digits are accepted.
static NIM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{10}$").expect("valid NIM pattern")
});

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@student\.undiksha\.ac\.id$").expect("valid email pattern")
});

static WHATSAPP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+$").expect("valid WhatsApp pattern")
});

/// A NIM is exactly ten decimal digits.
pub fn is_valid_nim(nim: &str) -> bool {
    NIM_RE.is_match(nim)
}

/// Email must end with the institutional domain. Case-sensitive.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// WhatsApp numbers are digits only, no separators or `+`.
pub fn is_valid_whatsapp(number: &str) -> bool {
    WHATSAPP_RE.is_match(number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nim_needs_exactly_ten_digits() {
        assert!(is_valid_nim("1305123045"));
        assert!(!is_valid_nim("130512304"));
        assert!(!is_valid_nim("13051230456"));
        assert!(!is_valid_nim("130512304A"));
        assert!(!is_valid_nim(""));
        assert!(!is_valid_nim(" 1305123045"));
    }

    #[test]
    fn nim_rejects_non_ascii_digits() {
        assert!(!is_valid_nim("١٢٣٤٥٦٧٨٩٠"));
    }

    #[test]
    fn email_must_end_with_domain() {
        assert!(is_valid_email("a@student.undiksha.ac.id"));
        assert!(!is_valid_email("a@gmail.com"));
        assert!(!is_valid_email("a@student.undiksha.ac.id.evil.com"));
        assert!(!is_valid_email("a@STUDENT.UNDIKSHA.AC.ID"));
        assert!(!is_valid_email("a@studentXundiksha.ac.id"));
    }

    #[test]
    fn whatsapp_digits_only() {
        assert!(is_valid_whatsapp("081234567890"));
        assert!(!is_valid_whatsapp("0812-345"));
        assert!(!is_valid_whatsapp("+6281234"));
        assert!(!is_valid_whatsapp(""));
    }
}
