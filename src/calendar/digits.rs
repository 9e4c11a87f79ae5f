//! Digit translation between Western (ASCII) and Persian numerals.
//!
//! Every number the dashboard renders goes through [`to_persian_digits`];
//! every number typed by a user comes back through [`to_english_digits`].
//! Both leave non-digit characters untouched and are idempotent.

const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

/// Replaces ASCII digits with Persian (Extended Arabic-Indic) digits.
pub fn to_persian_digits(input: &str) -> String {
    input
        .chars()
        .map(|ch| match ch {
            '0'..='9' => PERSIAN_DIGITS[(ch as u32 - '0' as u32) as usize],
            _ => ch,
        })
        .collect()
}

/// Replaces Persian digits with ASCII digits. Arabic-Indic digits, which show
/// up in text pasted from Arabic keyboard layouts, are normalized too.
pub fn to_english_digits(input: &str) -> String {
    input
        .chars()
        .map(|ch| match ch {
            '۰'..='۹' => char::from_digit(ch as u32 - '۰' as u32, 10).unwrap(),
            '٠'..='٩' => char::from_digit(ch as u32 - '٠' as u32, 10).unwrap(),
            _ => ch,
        })
        .collect()
}
