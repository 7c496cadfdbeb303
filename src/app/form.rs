//! Add-contact form state and validation.
//!
//! This module defines the [`ContactForm`] buffer holding in-progress field
//! values, the per-field [`FieldErrors`] raised by validation, and the
//! validation rules themselves. Validation is pure: it inspects the buffer and
//! reports errors without mutating anything, so the handler can decide whether
//! to append a contact or surface the errors inline.
//!
//! # Validation rules
//!
//! - Name: at least [`MIN_NAME_LEN`] characters after trimming
//! - Phone: non-empty after trimming
//! - Email: contains `@`
//!
//! Any failing rule blocks submission entirely; there is no partial submission.

use crate::domain::{AvatarCode, ValidationError};

use super::modes::FormField;

/// Minimum number of characters required in the name field.
pub const MIN_NAME_LEN: usize = 2;

/// Per-field validation errors for the add-contact form.
///
/// Each field carries at most one error. Errors are recomputed on every
/// submission attempt and cleared for a field as soon as the user edits it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    /// Error for the name field, if any.
    pub name: Option<ValidationError>,
    /// Error for the phone field, if any.
    pub phone: Option<ValidationError>,
    /// Error for the email field, if any.
    pub email: Option<ValidationError>,
}

impl FieldErrors {
    /// Returns whether no field has a pending error.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone.is_none() && self.email.is_none()
    }
}

/// In-progress state of the add-contact form.
///
/// Holds the text buffers for the three input fields, the currently selected
/// avatar, and the validation errors from the last failed submission attempt.
/// A successful submission clears the buffers and resets the avatar selection
/// to [`AvatarCode::Default`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    /// Name field buffer.
    pub name: String,
    /// Phone field buffer.
    pub phone: String,
    /// Email field buffer.
    pub email: String,
    /// Currently selected avatar.
    pub avatar: AvatarCode,
    /// Validation errors from the last submission attempt.
    pub errors: FieldErrors,
}

impl ContactForm {
    /// Validates the form buffers against the submission rules.
    ///
    /// Returns the errors for all failing fields at once so the form panel can
    /// show every problem inline, not just the first one. Does not mutate the
    /// form; storing the result in [`ContactForm::errors`] is the caller's
    /// decision.
    ///
    /// # Examples
    ///
    /// ```
    /// use zontacts::app::form::ContactForm;
    /// use zontacts::domain::ValidationError;
    ///
    /// let mut form = ContactForm::default();
    /// form.name = "A".to_string();
    /// let errors = form.validate();
    /// assert_eq!(errors.name, Some(ValidationError::NameTooShort));
    /// assert_eq!(errors.phone, Some(ValidationError::PhoneMissing));
    /// ```
    #[must_use]
    pub fn validate(&self) -> FieldErrors {
        FieldErrors {
            name: (self.name.trim().chars().count() < MIN_NAME_LEN)
                .then_some(ValidationError::NameTooShort),
            phone: self
                .phone
                .trim()
                .is_empty()
                .then_some(ValidationError::PhoneMissing),
            email: (!self.email.contains('@')).then_some(ValidationError::EmailInvalid),
        }
    }

    /// Clears all buffers, errors, and resets the avatar selection.
    ///
    /// Called after a successful submission.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Returns a mutable reference to the text buffer of a field.
    ///
    /// Returns `None` for [`FormField::Avatar`], which has no text buffer.
    pub fn buffer_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Name => Some(&mut self.name),
            FormField::Phone => Some(&mut self.phone),
            FormField::Email => Some(&mut self.email),
            FormField::Avatar => None,
        }
    }

    /// Clears the pending error for one field.
    ///
    /// Called when the user edits a field so stale errors do not linger while
    /// they correct the input.
    pub fn clear_error(&mut self, field: FormField) {
        match field {
            FormField::Name => self.errors.name = None,
            FormField::Phone => self.errors.phone = None,
            FormField::Email => self.errors.email = None,
            FormField::Avatar => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Jo Smith".to_string(),
            phone: "555-1234".to_string(),
            email: "jo@x.com".to_string(),
            ..ContactForm::default()
        }
    }

    #[test]
    fn valid_form_passes_validation() {
        assert!(valid_form().validate().is_empty());
    }

    #[test]
    fn single_character_name_is_too_short() {
        let mut form = valid_form();
        form.name = "A".to_string();
        let errors = form.validate();
        assert_eq!(errors.name, Some(ValidationError::NameTooShort));
        assert!(errors.phone.is_none());
        assert!(errors.email.is_none());
    }

    #[test]
    fn whitespace_only_phone_is_missing() {
        let mut form = valid_form();
        form.phone = "   ".to_string();
        assert_eq!(form.validate().phone, Some(ValidationError::PhoneMissing));
    }

    #[test]
    fn email_without_at_sign_is_invalid() {
        let mut form = valid_form();
        form.email = "jo.example.com".to_string();
        assert_eq!(form.validate().email, Some(ValidationError::EmailInvalid));
    }

    #[test]
    fn all_errors_reported_at_once() {
        let errors = ContactForm::default().validate();
        assert!(errors.name.is_some());
        assert!(errors.phone.is_some());
        assert!(errors.email.is_some());
        assert!(!errors.is_empty());
    }

    #[test]
    fn clear_resets_buffers_and_avatar() {
        let mut form = valid_form();
        form.avatar = AvatarCode::ElderFemale;
        form.errors = form.validate();
        form.clear();
        assert_eq!(form, ContactForm::default());
        assert_eq!(form.avatar, AvatarCode::Default);
    }

    #[test]
    fn avatar_field_has_no_buffer() {
        let mut form = valid_form();
        assert!(form.buffer_mut(FormField::Avatar).is_none());
        assert!(form.buffer_mut(FormField::Email).is_some());
    }
}
