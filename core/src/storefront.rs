//! Async facade pairing the stateless client with a transport.

use crate::client::StorefrontClient;
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::transport::{ReqwestTransport, Transport};
use crate::types::{
    BookingConfirmation, BookingRequest, HostelDetail, University, UniversityHostels,
};

/// One call per backend operation; each is a single request with no retry.
#[derive(Debug, Clone)]
pub struct Storefront<T = ReqwestTransport> {
    client: StorefrontClient,
    transport: T,
}

impl Storefront<ReqwestTransport> {
    pub fn from_config(config: ApiConfig) -> Self {
        Self::new(StorefrontClient::new(config), ReqwestTransport::default())
    }
}

impl<T: Transport> Storefront<T> {
    pub fn new(client: StorefrontClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &StorefrontClient {
        &self.client
    }

    pub async fn universities_with_hostels(&self) -> Result<Vec<University>, ApiError> {
        let response = self.transport.execute(self.client.build_list_universities()).await?;
        self.client.parse_list_universities(response)
    }

    pub async fn university_hostels(
        &self,
        university_id: i64,
    ) -> Result<UniversityHostels, ApiError> {
        let response = self
            .transport
            .execute(self.client.build_get_university(university_id))
            .await?;
        self.client.parse_get_university(response)
    }

    pub async fn hostel_detail(&self, hostel_id: i64) -> Result<HostelDetail, ApiError> {
        let response = self.transport.execute(self.client.build_get_hostel(hostel_id)).await?;
        self.client.parse_get_hostel(response)
    }

    pub async fn create_booking(
        &self,
        hostel_id: i64,
        input: &BookingRequest,
    ) -> Result<BookingConfirmation, ApiError> {
        let request = self.client.build_create_booking(hostel_id, input)?;
        let response = self.transport.execute(request).await?;
        self.client.parse_create_booking(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{HttpRequest, HttpResponse};
    use async_trait::async_trait;
    use parking_lot::Mutex;

    /// Replays one canned response and records the request it was given.
    struct Canned {
        response: HttpResponse,
        seen: Mutex<Vec<HttpRequest>>,
    }

    impl Canned {
        fn new(status: u16, body: &str) -> Self {
            Self {
                response: HttpResponse {
                    status,
                    headers: vec![("content-type".to_string(), "application/json".to_string())],
                    body: body.to_string(),
                },
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl Transport for Canned {
        async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            self.seen.lock().push(request);
            Ok(self.response.clone())
        }
    }

    struct Refused;

    #[async_trait]
    impl Transport for Refused {
        async fn execute(&self, _request: HttpRequest) -> Result<HttpResponse, ApiError> {
            Err(ApiError::Transport("connection refused".to_string()))
        }
    }

    fn client() -> StorefrontClient {
        StorefrontClient::new(ApiConfig::new("http://backend.test/api/public"))
    }

    #[tokio::test]
    async fn university_not_found_surfaces_as_not_found() {
        let storefront = Storefront::new(client(), Canned::new(404, r#"{"success":false}"#));
        let err = storefront.university_hostels(999).await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(
            storefront.transport.seen.lock()[0].path,
            "http://backend.test/api/public/universities/999/hostels"
        );
    }

    #[tokio::test]
    async fn booking_posts_payload() {
        let storefront = Storefront::new(
            client(),
            Canned::new(201, r#"{"success":true,"data":{"payment_reference":"BK-9"}}"#),
        );
        let input = BookingRequest {
            full_name: "Brian K.".to_string(),
            phone: "0788000111".to_string(),
            ..Default::default()
        };
        let confirmation = storefront.create_booking(3, &input).await.unwrap();
        assert_eq!(confirmation.payment_reference, "BK-9");
        let seen = storefront.transport.seen.lock();
        assert_eq!(seen[0].path, "http://backend.test/api/public/hostels/3/bookings");
        assert!(seen[0].body.as_deref().unwrap().contains("\"fullName\":\"Brian K.\""));
    }

    #[tokio::test]
    async fn transport_failure_is_reported() {
        let storefront = Storefront::new(client(), Refused);
        let err = storefront.universities_with_hostels().await.unwrap_err();
        assert_eq!(err.to_string(), "network error: connection refused");
    }
}
