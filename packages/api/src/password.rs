//! # Password policy
//!
//! The same four rules guard both registration and password change. Each rule
//! is evaluated on its own so the form can show live, per-rule feedback while
//! the user types; submission requires all four.

/// Characters that satisfy the special-character rule.
pub const SPECIAL_CHARS: &[char] = &['@', '$', '!', '%', '*', '?', '&', '#'];

/// Minimum password length, counted in characters.
pub const MIN_LENGTH: usize = 8;

/// Per-rule result of checking a candidate password.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PasswordCriteria {
    pub length: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub special_char: bool,
}

impl PasswordCriteria {
    /// Evaluate every rule against `password`.
    pub fn validate(password: &str) -> Self {
        Self {
            length: password.chars().count() >= MIN_LENGTH,
            uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
            special_char: password.chars().any(|c| SPECIAL_CHARS.contains(&c)),
        }
    }

    /// True when the password may be submitted.
    pub fn all_met(&self) -> bool {
        self.length && self.uppercase && self.lowercase && self.special_char
    }

    /// Each rule paired with its checklist label, in display order.
    pub fn rules(&self) -> [(bool, &'static str); 4] {
        [
            (self.length, "Password must be at least 8 characters long"),
            (self.uppercase, "Password must contain an uppercase letter"),
            (self.lowercase, "Password must contain a lowercase letter"),
            (
                self.special_char,
                "Password must contain a special character (@, $, !, %, *, ?, &, #)",
            ),
        ]
    }
}
