use once_cell::sync::Lazy;
use regex::Regex;

/// Indian mobile numbers: ten ASCII digits, leading 6-9.
pub static MOBILE_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[6-9][0-9]{9}$").expect("mobile pattern compiles"));

/// Six ASCII digits.
pub static PIN_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{6}$").expect("pin pattern compiles"));

/// 0-100 with up to two decimals; `100` only as `100`, `100.0` or `100.00`.
pub static PERCENTAGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(100(\.0{1,2})?|[0-9]{1,2}(\.[0-9]{1,2})?)$")
        .expect("percentage pattern compiles")
});

pub static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)+$")
        .expect("email pattern compiles")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mobile_number_must_start_with_six_to_nine() {
        assert!(!MOBILE_NUMBER.is_match("5123456789"));
        assert!(MOBILE_NUMBER.is_match("9123456789"));
        assert!(!MOBILE_NUMBER.is_match("912345678"));
        assert!(!MOBILE_NUMBER.is_match("91234567890"));
        assert!(!MOBILE_NUMBER.is_match("9१२३४५६७८९"));
    }

    #[test]
    fn percentage_caps_at_one_hundred() {
        assert!(PERCENTAGE.is_match("100.00"));
        assert!(PERCENTAGE.is_match("100"));
        assert!(PERCENTAGE.is_match("87.25"));
        assert!(PERCENTAGE.is_match("0"));
        assert!(!PERCENTAGE.is_match("100.5"));
        assert!(!PERCENTAGE.is_match("87.255"));
        assert!(!PERCENTAGE.is_match("101"));
        assert!(!PERCENTAGE.is_match("-1"));
    }

    #[test]
    fn pin_code_is_six_digits() {
        assert!(PIN_CODE.is_match("500081"));
        assert!(!PIN_CODE.is_match("50008"));
        assert!(!PIN_CODE.is_match("50008a"));
        assert!(!PIN_CODE.is_match("५०००८१"));
    }

    #[test]
    fn email_needs_domain_with_dot() {
        assert!(EMAIL.is_match("john.doe@company.com"));
        assert!(!EMAIL.is_match("john.doe@company"));
        assert!(!EMAIL.is_match("john doe@company.com"));
    }
}
