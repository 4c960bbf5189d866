//! Stateless HTTP request builder and response parser for the public API.
//!
//! # Design
//! `StorefrontClient` holds only the resolved `ApiConfig` and carries no
//! mutable state between calls. Each operation is split into a `build_*`
//! method that produces an `HttpRequest` and a `parse_*` method that consumes
//! an `HttpResponse` and returns normalized domain types. The caller executes
//! the round-trip, either directly or through a `Transport`.

use chrono::{SecondsFormat, Utc};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::error::{ApiError, Resource};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::normalize;
use crate::types::{
    BookingConfirmation, BookingRequest, HostelDetail, University, UniversityHostels,
};
use crate::wire::{
    ApiBookingConfirmation, ApiEnvelope, ApiHostelDetail, ApiUniversity, ApiUniversityHostels,
};

const BOOKING_FAILED: &str = "Failed to submit booking request";
const BOOKING_UNEXPECTED_FORMAT: &str =
    "Unexpected response format when submitting booking request";
const BOOKING_RECEIVED: &str = "Booking request received. Complete the payment via the \
    instructions provided to finalize your reservation.";
const DEFAULT_BOOKING_STATUS: &str = "pending";

/// Synchronous, stateless client for the storefront's public API.
#[derive(Debug, Clone)]
pub struct StorefrontClient {
    config: ApiConfig,
}

impl StorefrontClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.api_base_url())
    }

    fn origin(&self) -> &str {
        self.config.backend_origin()
    }

    pub fn build_list_universities(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.url("/universities-with-hostels"),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: None,
        }
    }

    pub fn build_get_university(&self, university_id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.url(&format!("/universities/{university_id}/hostels")),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_hostel(&self, hostel_id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.url(&format!("/hostels/{hostel_id}")),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_booking(
        &self,
        hostel_id: i64,
        input: &BookingRequest,
    ) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.url(&format!("/hostels/{hostel_id}/bookings")),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn parse_list_universities(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<University>, ApiError> {
        if !response.is_success() {
            return Err(failed(format!("Failed to load universities ({})", response.status)));
        }
        let universities: Vec<ApiUniversity> =
            unwrap_envelope(&response, "Unexpected response loading universities")?;
        debug!(count = universities.len(), "loaded universities");
        Ok(universities
            .into_iter()
            .map(|university| normalize::map_university(self.origin(), university))
            .collect())
    }

    pub fn parse_get_university(
        &self,
        response: HttpResponse,
    ) -> Result<UniversityHostels, ApiError> {
        check_single(&response, Resource::University, "Failed to load university")?;
        let payload: ApiUniversityHostels =
            unwrap_envelope(&response, "Unexpected response loading university")?;
        Ok(normalize::map_university_hostels(self.origin(), payload))
    }

    pub fn parse_get_hostel(&self, response: HttpResponse) -> Result<HostelDetail, ApiError> {
        check_single(&response, Resource::Hostel, "Failed to load hostel")?;
        let detail: ApiHostelDetail =
            unwrap_envelope(&response, "Unexpected response loading hostel")?;
        Ok(normalize::map_hostel_detail(self.origin(), detail))
    }

    /// Interpret a booking response.
    ///
    /// The content type is checked before anything is decoded: plain-text
    /// bodies are only meaningful as error messages.
    pub fn parse_create_booking(
        &self,
        response: HttpResponse,
    ) -> Result<BookingConfirmation, ApiError> {
        if !response.is_json() {
            if !response.is_success() {
                let text = response.body.trim();
                let message = if text.is_empty() { BOOKING_FAILED } else { text };
                return Err(failed(message.to_string()));
            }
            warn!(status = response.status, "booking response was not JSON");
            return Err(ApiError::UnexpectedFormat(BOOKING_UNEXPECTED_FORMAT.to_string()));
        }

        let envelope = match decode::<ApiEnvelope<ApiBookingConfirmation>>(&response.body) {
            Ok(envelope) => envelope,
            Err(_) if !response.is_success() => return Err(failed(BOOKING_FAILED.to_string())),
            Err(err) => return Err(err),
        };

        if !response.is_success() || !envelope.success {
            return Err(failed(server_message(envelope.message, BOOKING_FAILED)));
        }

        let data = envelope.data.unwrap_or_default();
        Ok(BookingConfirmation {
            booking_fee: data.booking_fee.unwrap_or(0.0),
            payment_reference: data.payment_reference.unwrap_or_default(),
            payment_status: data
                .payment_status
                .unwrap_or_else(|| DEFAULT_BOOKING_STATUS.to_string()),
            status: data.status.unwrap_or_else(|| DEFAULT_BOOKING_STATUS.to_string()),
            created_at: data
                .created_at
                .unwrap_or_else(|| Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
            message: server_message(envelope.message, BOOKING_RECEIVED),
        })
    }
}

fn failed(message: String) -> ApiError {
    warn!(%message, "request failed");
    ApiError::RequestFailed(message)
}

/// The server's message, unless it is absent or empty.
fn server_message(message: Option<String>, fallback: &str) -> String {
    message
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Map non-success status codes on single-resource fetches.
fn check_single(response: &HttpResponse, resource: Resource, prefix: &str) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        debug!(%resource, "resource not found");
        return Err(ApiError::NotFound { resource });
    }
    Err(failed(format!("{prefix} ({})", response.status)))
}

/// Decode the envelope and return its payload, or the server's message when
/// it reports failure or carries no data.
fn unwrap_envelope<T: DeserializeOwned>(
    response: &HttpResponse,
    fallback: &str,
) -> Result<T, ApiError> {
    let envelope: ApiEnvelope<T> = decode(&response.body)?;
    match envelope.data {
        Some(data) if envelope.success => Ok(data),
        _ => Err(failed(server_message(envelope.message, fallback))),
    }
}
