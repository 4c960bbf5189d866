use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;
use uuid::Uuid;

mod seed;

pub use seed::seeded_catalog;

#[derive(Clone, Debug)]
pub struct University {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub address: String,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub website: Option<String>,
}

#[derive(Clone, Debug)]
pub struct HostelImage {
    pub id: i64,
    pub image_url: String,
    pub caption: Option<String>,
    pub is_primary: bool,
}

#[derive(Clone, Debug)]
pub struct Room {
    pub price: f64,
    pub available: bool,
}

#[derive(Clone, Debug)]
pub struct Hostel {
    pub id: i64,
    pub university_id: i64,
    pub name: String,
    pub address: String,
    pub description: Option<String>,
    pub price_per_room: Option<f64>,
    pub booking_fee: Option<f64>,
    /// Stored the way the admin form saves it: one comma-separated string.
    pub amenities: Option<String>,
    pub distance_from_campus: Option<f64>,
    pub occupancy_type: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub published: bool,
    pub images: Vec<HostelImage>,
    pub rooms: Vec<Room>,
}

impl Hostel {
    fn available_rooms(&self) -> usize {
        self.rooms.iter().filter(|room| room.available).count()
    }

    fn primary_image(&self) -> Option<&str> {
        self.images
            .iter()
            .find(|image| image.is_primary)
            .or_else(|| self.images.first())
            .map(|image| image.image_url.as_str())
    }
}

#[derive(Clone, Debug, Default)]
pub struct Catalog {
    pub universities: Vec<University>,
    pub hostels: Vec<Hostel>,
}

impl Catalog {
    fn published_hostels(&self, university_id: i64) -> impl Iterator<Item = &Hostel> {
        self.hostels
            .iter()
            .filter(move |h| h.published && h.university_id == university_id)
    }

    fn published_hostel(&self, hostel_id: i64) -> Option<&Hostel> {
        self.hostels.iter().find(|h| h.published && h.id == hostel_id)
    }

    fn university(&self, university_id: i64) -> Option<&University> {
        self.universities.iter().find(|u| u.id == university_id)
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct Booking {
    pub id: Uuid,
    pub hostel_id: i64,
    pub full_name: String,
    pub phone: String,
    pub payment_phone: String,
    pub booking_fee: f64,
    pub payment_reference: String,
    pub created_at: String,
}

/// Success or failure wrapper shared by every endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HostelSummaryDto {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub description: Option<String>,
    pub price_per_room: Option<f64>,
    pub booking_fee: Option<f64>,
    pub amenities: Option<String>,
    pub distance_from_campus: Option<f64>,
    pub available_rooms: usize,
    pub occupancy_type: Option<String>,
    pub primary_image: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UniversityDto {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub address: String,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostels: Option<Vec<HostelSummaryDto>>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UniversityHostelsDto {
    pub university: UniversityDto,
    pub hostels: Vec<HostelSummaryDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HostelImageDto {
    pub id: i64,
    pub image_url: String,
    pub caption: Option<String>,
    pub is_primary: bool,
}

/// Aggregates as a SQL view would return them: `AVG` over a numeric column
/// comes back as a decimal string.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoomStatsDto {
    pub total_rooms: usize,
    pub available_rooms: usize,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub avg_price: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HostelDetailDto {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub description: Option<String>,
    pub total_rooms: usize,
    pub available_rooms: usize,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub price_per_room: Option<f64>,
    pub booking_fee: Option<f64>,
    pub occupancy_type: Option<String>,
    pub distance_from_campus: Option<f64>,
    pub amenities: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub university_id: Option<i64>,
    pub university_name: Option<String>,
    pub university_code: Option<String>,
    pub university_address: Option<String>,
    pub images: Vec<HostelImageDto>,
    pub room_stats: Option<RoomStatsDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BookingConfirmationDto {
    pub booking_fee: String,
    pub payment_reference: String,
    pub payment_status: String,
    pub status: String,
    pub created_at: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBooking {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub phone: String,
    pub email: Option<String>,
    pub gender: Option<String>,
    pub course: Option<String>,
    pub preferred_check_in: Option<String>,
    pub stay_duration: Option<String>,
    pub notes: Option<String>,
    pub payment_phone: Option<String>,
}

fn summary_dto(hostel: &Hostel) -> HostelSummaryDto {
    HostelSummaryDto {
        id: hostel.id,
        name: hostel.name.clone(),
        address: hostel.address.clone(),
        description: hostel.description.clone(),
        price_per_room: hostel.price_per_room,
        booking_fee: hostel.booking_fee,
        amenities: hostel.amenities.clone(),
        distance_from_campus: hostel.distance_from_campus,
        available_rooms: hostel.available_rooms(),
        occupancy_type: hostel.occupancy_type.clone(),
        primary_image: hostel.primary_image().map(str::to_string),
        latitude: hostel.latitude,
        longitude: hostel.longitude,
    }
}

fn university_dto(
    university: &University,
    hostels: Option<Vec<HostelSummaryDto>>,
) -> UniversityDto {
    UniversityDto {
        id: university.id,
        name: university.name.clone(),
        code: university.code.clone(),
        address: university.address.clone(),
        contact_email: university.contact_email.clone(),
        contact_phone: university.contact_phone.clone(),
        website: university.website.clone(),
        hostels,
    }
}

pub fn room_stats(rooms: &[Room]) -> Option<RoomStatsDto> {
    if rooms.is_empty() {
        return None;
    }
    let prices = rooms.iter().map(|room| room.price);
    let min = prices.clone().fold(f64::INFINITY, f64::min);
    let max = prices.clone().fold(f64::NEG_INFINITY, f64::max);
    let avg = prices.sum::<f64>() / rooms.len() as f64;
    Some(RoomStatsDto {
        total_rooms: rooms.len(),
        available_rooms: rooms.iter().filter(|room| room.available).count(),
        min_price: Some(min),
        max_price: Some(max),
        avg_price: Some(format!("{avg:.2}")),
    })
}

fn detail_dto(hostel: &Hostel, university: Option<&University>) -> HostelDetailDto {
    HostelDetailDto {
        id: hostel.id,
        name: hostel.name.clone(),
        address: hostel.address.clone(),
        description: hostel.description.clone(),
        total_rooms: hostel.rooms.len(),
        available_rooms: hostel.available_rooms(),
        contact_phone: hostel.contact_phone.clone(),
        contact_email: hostel.contact_email.clone(),
        price_per_room: hostel.price_per_room,
        booking_fee: hostel.booking_fee,
        occupancy_type: hostel.occupancy_type.clone(),
        distance_from_campus: hostel.distance_from_campus,
        amenities: hostel.amenities.clone(),
        latitude: hostel.latitude,
        longitude: hostel.longitude,
        university_id: university.map(|u| u.id),
        university_name: university.map(|u| u.name.clone()),
        university_code: university.map(|u| u.code.clone()),
        university_address: university.map(|u| u.address.clone()),
        images: hostel
            .images
            .iter()
            .map(|image| HostelImageDto {
                id: image.id,
                image_url: image.image_url.clone(),
                caption: image.caption.clone(),
                is_primary: image.is_primary,
            })
            .collect(),
        room_stats: room_stats(&hostel.rooms),
    }
}

/// A failed request, rendered as a `success: false` envelope.
pub struct ApiFailure {
    status: StatusCode,
    message: String,
}

impl ApiFailure {
    fn new(status: StatusCode, message: &str) -> Self {
        Self {
            status,
            message: message.to_string(),
        }
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        let body = Envelope::<()> {
            success: false,
            data: None,
            message: Some(self.message),
        };
        (self.status, Json(body)).into_response()
    }
}

/// Shared handler state. Clones share the same booking ledger.
#[derive(Clone)]
pub struct AppState {
    catalog: Arc<Catalog>,
    bookings: Arc<RwLock<Vec<Booking>>>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            bookings: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Bookings accepted so far, oldest first.
    pub async fn bookings(&self) -> Vec<Booking> {
        self.bookings.read().await.clone()
    }
}

pub fn app() -> Router {
    app_with(seeded_catalog())
}

pub fn app_with(catalog: Catalog) -> Router {
    router(AppState::new(catalog))
}

pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/universities-with-hostels", get(list_universities))
        .route("/universities/{id}/hostels", get(university_hostels))
        .route("/hostels/{id}", get(hostel_detail))
        .route("/hostels/{id}/bookings", post(create_booking));
    Router::new().nest("/api/public", api).with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_universities(State(state): State<AppState>) -> Json<Envelope<Vec<UniversityDto>>> {
    let catalog = &state.catalog;
    let universities = catalog
        .universities
        .iter()
        .map(|university| {
            let hostels = catalog.published_hostels(university.id).map(summary_dto).collect();
            university_dto(university, Some(hostels))
        })
        .collect();
    Json(Envelope::ok(universities))
}

async fn university_hostels(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Envelope<UniversityHostelsDto>>, ApiFailure> {
    let catalog = &state.catalog;
    let university = catalog
        .university(id)
        .ok_or_else(|| ApiFailure::new(StatusCode::NOT_FOUND, "University not found"))?;
    let hostels = catalog.published_hostels(id).map(summary_dto).collect();
    Ok(Json(Envelope::ok(UniversityHostelsDto {
        university: university_dto(university, None),
        hostels,
    })))
}

async fn hostel_detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Envelope<HostelDetailDto>>, ApiFailure> {
    let catalog = &state.catalog;
    let hostel = catalog
        .published_hostel(id)
        .ok_or_else(|| ApiFailure::new(StatusCode::NOT_FOUND, "Hostel not found"))?;
    let university = catalog.university(hostel.university_id);
    Ok(Json(Envelope::ok(detail_dto(hostel, university))))
}

async fn create_booking(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<CreateBooking>,
) -> Result<(StatusCode, Json<Envelope<BookingConfirmationDto>>), ApiFailure> {
    let hostel = state
        .catalog
        .published_hostel(id)
        .ok_or_else(|| ApiFailure::new(StatusCode::NOT_FOUND, "Hostel not found"))?;
    let full_name = input.full_name.trim();
    let phone = input.phone.trim();
    if full_name.is_empty() || phone.is_empty() {
        return Err(ApiFailure::new(
            StatusCode::BAD_REQUEST,
            "Full name and phone number are required",
        ));
    }
    let booking_fee = hostel.booking_fee.ok_or_else(|| {
        ApiFailure::new(
            StatusCode::BAD_REQUEST,
            "Online booking is not enabled for this hostel",
        )
    })?;

    let payment_phone = input
        .payment_phone
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .unwrap_or(phone)
        .to_string();
    let reference = Uuid::new_v4().simple().to_string();
    let booking = Booking {
        id: Uuid::new_v4(),
        hostel_id: hostel.id,
        full_name: full_name.to_string(),
        phone: phone.to_string(),
        payment_phone,
        booking_fee,
        payment_reference: format!("BK-{}", reference[..10].to_uppercase()),
        created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    };
    info!(hostel_id = id, reference = %booking.payment_reference, "booking received");

    let confirmation = BookingConfirmationDto {
        booking_fee: format!("{:.2}", booking.booking_fee),
        payment_reference: booking.payment_reference.clone(),
        payment_status: "pending".to_string(),
        status: "pending".to_string(),
        created_at: booking.created_at.clone(),
    };
    let message = format!(
        "Booking request received. Pay the booking fee from {} to confirm your room.",
        booking.payment_phone
    );
    state.bookings.write().await.push(booking);

    Ok((
        StatusCode::CREATED,
        Json(Envelope {
            success: true,
            data: Some(confirmation),
            message: Some(message),
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(price: f64, available: bool) -> Room {
        Room { price, available }
    }

    #[test]
    fn room_stats_absent_without_rooms() {
        assert!(room_stats(&[]).is_none());
    }

    #[test]
    fn room_stats_aggregate_prices() {
        let stats = room_stats(&[
            room(300_000.0, true),
            room(450_000.0, false),
            room(500_000.0, true),
        ])
        .unwrap();
        assert_eq!(stats.total_rooms, 3);
        assert_eq!(stats.available_rooms, 2);
        assert_eq!(stats.min_price, Some(300_000.0));
        assert_eq!(stats.max_price, Some(500_000.0));
        assert_eq!(stats.avg_price.as_deref(), Some("416666.67"));
    }

    #[test]
    fn primary_image_prefers_flag() {
        let catalog = seeded_catalog();
        for hostel in &catalog.hostels {
            if let Some(flagged) = hostel.images.iter().find(|i| i.is_primary) {
                assert_eq!(hostel.primary_image(), Some(flagged.image_url.as_str()));
            }
        }
    }

    #[test]
    fn unpublished_hostels_are_hidden() {
        let catalog = seeded_catalog();
        let hidden = catalog.hostels.iter().find(|h| !h.published).unwrap();
        assert!(catalog.published_hostel(hidden.id).is_none());
        assert!(catalog
            .published_hostels(hidden.university_id)
            .all(|h| h.id != hidden.id));
    }

    #[test]
    fn failure_envelope_omits_data() {
        let body = Envelope::<()> {
            success: false,
            data: None,
            message: Some("Hostel not found".to_string()),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["success"], false);
        assert!(json.get("data").is_none());
        assert_eq!(json["message"], "Hostel not found");
    }

    #[test]
    fn create_booking_accepts_camel_case() {
        let input: CreateBooking =
            serde_json::from_str(r#"{"fullName":"Amina","phone":"0700","paymentPhone":"0788"}"#)
                .unwrap();
        assert_eq!(input.full_name, "Amina");
        assert_eq!(input.payment_phone.as_deref(), Some("0788"));
        assert!(input.email.is_none());
    }
}
