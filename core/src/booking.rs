//! Client-side booking form draft.
//!
//! The draft is the only locally mutable state in the storefront. It turns
//! into a `BookingRequest` only after validation against the hostel's
//! booking fee.

use thiserror::Error;

use crate::types::BookingRequest;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingFormError {
    #[error("This hostel has not enabled online bookings yet.")]
    BookingDisabled,
    #[error("Please provide your full name and a phone number we can reach.")]
    MissingContact,
}

/// Raw form fields, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingDraft {
    pub full_name: String,
    pub email: String,
    phone: String,
    payment_phone: String,
    pub gender: String,
    pub course: String,
    pub preferred_check_in: String,
    pub stay_duration: String,
    pub notes: String,
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl BookingDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn payment_phone(&self) -> &str {
        &self.payment_phone
    }

    /// Update the contact phone. The payment phone follows along until the
    /// user has typed a different one.
    pub fn set_phone(&mut self, value: impl Into<String>) {
        let value = value.into();
        if self.payment_phone.is_empty() || self.payment_phone == self.phone {
            self.payment_phone = value.clone();
        }
        self.phone = value;
    }

    pub fn set_payment_phone(&mut self, value: impl Into<String>) {
        self.payment_phone = value.into();
    }

    /// Validate and build the request body.
    pub fn submission(&self, booking_fee: Option<f64>) -> Result<BookingRequest, BookingFormError> {
        if booking_fee.is_none() {
            return Err(BookingFormError::BookingDisabled);
        }
        let full_name = non_blank(&self.full_name);
        let phone = non_blank(&self.phone);
        let (Some(full_name), Some(phone)) = (full_name, phone) else {
            return Err(BookingFormError::MissingContact);
        };
        let payment_phone = non_blank(&self.payment_phone).unwrap_or_else(|| phone.clone());

        Ok(BookingRequest {
            full_name,
            email: non_blank(&self.email),
            gender: non_blank(&self.gender),
            course: non_blank(&self.course),
            preferred_check_in: non_blank(&self.preferred_check_in),
            stay_duration: non_blank(&self.stay_duration),
            notes: non_blank(&self.notes),
            payment_phone: Some(payment_phone),
            phone,
        })
    }

    /// Clear the form after a successful submission.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
