//! Checkout form validation.
//!
//! Mirrors the browser form controller as an explicit value type: field
//! values, per-field touched flags, and the submit-attempted flag all live
//! on [`CheckoutForm`] rather than in mutable globals. The static checkout
//! page applies the same rules client-side; this module is the tested
//! source of truth.
//!
//! Display policy: a field can be invalid without showing an error. Error
//! text appears only once the field has been touched (blurred) or a submit
//! was attempted.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));
static AMOUNT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+(\.\d{1,2})?$").expect("amount pattern"));
static CONTACT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[6-9]\d{9}$").expect("contact pattern"));

/// The four checkout form fields, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Contact,
    Amount,
}

impl Field {
    /// Fields in the order the first invalid one is focused.
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Contact, Field::Amount];
}

/// Checkout form state with touch tracking.
#[derive(Debug, Clone, Default)]
pub struct CheckoutForm {
    name: String,
    email: String,
    contact: String,
    amount: String,
    touched: [bool; 4],
    submit_attempted: bool,
    gateway_key: Option<String>,
}

/// A validated, normalized form ready to start checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSubmission {
    pub name: String,
    pub email: String,
    /// Contact normalized to exactly 10 digits.
    pub contact: String,
    /// Amount converted from rupees to paise.
    pub amount_paise: i64,
    pub gateway_key: String,
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// All fields valid and the gateway key is loaded.
    Ready(CheckoutSubmission),
    /// Some field is invalid; focus this one first.
    Invalid { focus: Field },
    /// Fields are valid but the public key has not loaded yet.
    KeyNotLoaded,
}

impl CheckoutForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates a field's value. Typing does not mark a field touched.
    pub fn set_value(&mut self, field: Field, value: &str) {
        *self.value_mut(field) = value.to_string();
    }

    /// Marks a field touched (the browser fires this on blur).
    pub fn touch(&mut self, field: Field) {
        self.touched[index(field)] = true;
    }

    /// Records the public gateway key once `/config` has loaded.
    pub fn set_gateway_key(&mut self, key: Option<String>) {
        self.gateway_key = key;
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Contact => &self.contact,
            Field::Amount => &self.amount,
        }
    }

    /// Whether the field currently passes its validity predicate.
    pub fn is_valid(&self, field: Field) -> bool {
        match field {
            Field::Name => valid_name(&self.name),
            Field::Email => valid_email(&self.email),
            Field::Contact => valid_contact(&self.contact),
            Field::Amount => parse_amount_rupees(&self.amount).is_some(),
        }
    }

    /// Error text to display, or `None` when the field is valid or has not
    /// yet earned visible feedback.
    pub fn error_message(&self, field: Field) -> Option<&'static str> {
        if self.is_valid(field) {
            return None;
        }
        if !self.touched[index(field)] && !self.submit_attempted {
            return None;
        }
        Some(self.invalid_reason(field))
    }

    /// All four fields valid and the gateway key loaded.
    pub fn can_submit(&self) -> bool {
        Field::ALL.iter().all(|f| self.is_valid(*f)) && self.gateway_key.is_some()
    }

    /// Status line mirroring the page footer.
    pub fn status(&self) -> &'static str {
        if self.can_submit() {
            "Ready to pay"
        } else if self.gateway_key.is_some() {
            "Fix form errors"
        } else {
            "Loading config..."
        }
    }

    /// First invalid field in focus order.
    pub fn first_invalid(&self) -> Option<Field> {
        Field::ALL.into_iter().find(|f| !self.is_valid(*f))
    }

    /// Attempts to submit, surfacing all outstanding errors.
    ///
    /// Marks submit attempted so every invalid field shows its message from
    /// now on. Succeeds only when every field passes and the gateway key
    /// has loaded.
    pub fn attempt_submit(&mut self) -> SubmitOutcome {
        self.submit_attempted = true;

        if let Some(focus) = self.first_invalid() {
            return SubmitOutcome::Invalid { focus };
        }

        let Some(gateway_key) = self.gateway_key.clone() else {
            return SubmitOutcome::KeyNotLoaded;
        };

        let rupees = parse_amount_rupees(&self.amount).expect("all fields validated");
        SubmitOutcome::Ready(CheckoutSubmission {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            contact: normalize_contact(&self.contact),
            amount_paise: (rupees * 100.0).round() as i64,
            gateway_key,
        })
    }

    /// Resets values and touch state after a successful payment.
    pub fn reset(&mut self) {
        let gateway_key = self.gateway_key.take();
        *self = Self {
            gateway_key,
            ..Self::default()
        };
    }

    fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Contact => &mut self.contact,
            Field::Amount => &mut self.amount,
        }
    }

    fn invalid_reason(&self, field: Field) -> &'static str {
        match field {
            Field::Name => {
                if self.name.trim().is_empty() {
                    "Name is required."
                } else {
                    "Enter a valid name."
                }
            }
            Field::Email => {
                if self.email.trim().is_empty() {
                    "Email is required."
                } else {
                    "Enter a valid email."
                }
            }
            Field::Contact => {
                if normalize_contact(&self.contact).is_empty() {
                    "Contact is required."
                } else {
                    "Enter a valid 10-digit mobile number."
                }
            }
            Field::Amount => {
                if self.amount.is_empty() {
                    "Amount is required."
                } else {
                    match self.amount.parse::<f64>() {
                        Err(_) => "Enter a valid number.",
                        Ok(n) if n < 1.0 => "Minimum amount is \u{20b9}1.00",
                        Ok(_) => "Max two decimals allowed.",
                    }
                }
            }
        }
    }
}

fn index(field: Field) -> usize {
    match field {
        Field::Name => 0,
        Field::Email => 1,
        Field::Contact => 2,
        Field::Amount => 3,
    }
}

/// Name: trimmed, non-empty, at least two characters.
pub fn valid_name(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty() && value.chars().count() >= 2
}

/// Email: simple `local@domain.tld` shape.
pub fn valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value.trim())
}

/// Strips everything except digits.
pub fn normalize_contact(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Contact: normalizes to exactly 10 digits starting 6-9.
pub fn valid_contact(value: &str) -> bool {
    CONTACT_RE.is_match(&normalize_contact(value))
}

/// Amount: positive number >= 1 rupee with at most two decimal places.
/// Returns the parsed rupee value when valid.
pub fn parse_amount_rupees(value: &str) -> Option<f64> {
    if !AMOUNT_RE.is_match(value) {
        return None;
    }
    let rupees: f64 = value.parse().ok()?;
    (rupees >= 1.0).then_some(rupees)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> CheckoutForm {
        let mut form = CheckoutForm::new();
        form.set_value(Field::Name, "Asha Rao");
        form.set_value(Field::Email, "asha@example.com");
        form.set_value(Field::Contact, "9123456789");
        form.set_value(Field::Amount, "250.50");
        form
    }

    #[test]
    fn name_predicate() {
        assert!(valid_name("Jo"));
        assert!(valid_name("  Priya  "));
        assert!(!valid_name(""));
        assert!(!valid_name("   "));
        assert!(!valid_name("A"));
    }

    #[test]
    fn email_predicate() {
        assert!(valid_email("user@example.com"));
        assert!(valid_email("a.b+c@sub.domain.in"));
        assert!(!valid_email("userexample.com"));
        assert!(!valid_email("user@example"));
        assert!(!valid_email("user @example.com"));
        assert!(!valid_email(""));
    }

    #[test]
    fn contact_predicate() {
        assert!(valid_contact("9123456789"));
        assert!(valid_contact("6000000000"));
        // Formatting characters are stripped before the check.
        assert!(valid_contact("91234-56789"));
        // Leading digit below 6 is not a valid mobile number.
        assert!(!valid_contact("5123456789"));
        assert!(!valid_contact("912345678"));
        assert!(!valid_contact("91234567890"));
        assert!(!valid_contact(""));
    }

    #[test]
    fn amount_predicate() {
        assert_eq!(parse_amount_rupees("1.00"), Some(1.0));
        assert_eq!(parse_amount_rupees("1"), Some(1.0));
        assert_eq!(parse_amount_rupees("250.5"), Some(250.5));
        // Three decimal places rejected even though the value rounds past 1.
        assert_eq!(parse_amount_rupees("0.999"), None);
        assert_eq!(parse_amount_rupees("1.999"), None);
        // Below the 1-rupee minimum.
        assert_eq!(parse_amount_rupees("0.50"), None);
        assert_eq!(parse_amount_rupees("abc"), None);
        assert_eq!(parse_amount_rupees("-5"), None);
        assert_eq!(parse_amount_rupees(""), None);
    }

    #[test]
    fn untouched_invalid_field_shows_no_error() {
        let form = CheckoutForm::new();
        assert!(!form.is_valid(Field::Name));
        assert_eq!(form.error_message(Field::Name), None);
    }

    #[test]
    fn touched_invalid_field_shows_error() {
        let mut form = CheckoutForm::new();
        form.touch(Field::Name);
        assert_eq!(form.error_message(Field::Name), Some("Name is required."));

        form.set_value(Field::Name, "A");
        assert_eq!(form.error_message(Field::Name), Some("Enter a valid name."));
    }

    #[test]
    fn submit_attempt_reveals_all_errors() {
        let mut form = CheckoutForm::new();
        form.set_gateway_key(Some("rzp_test_key".to_string()));
        let outcome = form.attempt_submit();

        assert_eq!(outcome, SubmitOutcome::Invalid { focus: Field::Name });
        for field in Field::ALL {
            assert!(form.error_message(field).is_some());
        }
    }

    #[test]
    fn amount_error_messages() {
        let mut form = CheckoutForm::new();
        form.touch(Field::Amount);

        assert_eq!(form.error_message(Field::Amount), Some("Amount is required."));

        form.set_value(Field::Amount, "abc");
        assert_eq!(form.error_message(Field::Amount), Some("Enter a valid number."));

        form.set_value(Field::Amount, "0.50");
        assert_eq!(
            form.error_message(Field::Amount),
            Some("Minimum amount is \u{20b9}1.00")
        );

        form.set_value(Field::Amount, "1.999");
        assert_eq!(
            form.error_message(Field::Amount),
            Some("Max two decimals allowed.")
        );

        form.set_value(Field::Amount, "1.00");
        assert_eq!(form.error_message(Field::Amount), None);
    }

    #[test]
    fn submit_blocked_until_key_loads() {
        let mut form = filled_form();
        assert!(!form.can_submit());
        assert_eq!(form.status(), "Loading config...");
        assert_eq!(form.attempt_submit(), SubmitOutcome::KeyNotLoaded);

        form.set_gateway_key(Some("rzp_test_key".to_string()));
        assert!(form.can_submit());
        assert_eq!(form.status(), "Ready to pay");
    }

    #[test]
    fn successful_submit_normalizes_and_converts() {
        let mut form = filled_form();
        form.set_value(Field::Contact, " 91234-56789 ");
        form.set_gateway_key(Some("rzp_test_key".to_string()));

        let SubmitOutcome::Ready(submission) = form.attempt_submit() else {
            panic!("expected a ready submission");
        };

        assert_eq!(submission.contact, "9123456789");
        assert_eq!(submission.amount_paise, 25050);
        assert_eq!(submission.gateway_key, "rzp_test_key");
    }

    #[test]
    fn first_invalid_follows_focus_order() {
        let mut form = filled_form();
        form.set_value(Field::Email, "bad");
        form.set_value(Field::Amount, "0");
        assert_eq!(form.first_invalid(), Some(Field::Email));
    }

    #[test]
    fn reset_clears_values_and_touch_state_but_keeps_key() {
        let mut form = filled_form();
        form.set_gateway_key(Some("rzp_test_key".to_string()));
        form.touch(Field::Name);
        form.attempt_submit();

        form.reset();

        assert_eq!(form.value(Field::Name), "");
        assert_eq!(form.error_message(Field::Name), None);
        assert_eq!(form.status(), "Fix form errors");
    }
}
