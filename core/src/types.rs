//! Normalized domain types handed to the presentation layer.
//!
//! # Design
//! These are the shapes pages consume: typed optionals, parsed amenity lists
//! and absolute image URLs. They serialize to camelCase JSON so a rendered
//! snapshot reads the same as the storefront's view model. The backend's raw
//! snake_case shapes live in `wire` and never leak past the client.

use serde::{Deserialize, Serialize};

/// Categorical hostel attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OccupancyType {
    Male,
    Female,
    Mixed,
}

impl OccupancyType {
    pub fn label(&self) -> &'static str {
        match self {
            OccupancyType::Male => "Male",
            OccupancyType::Female => "Female",
            OccupancyType::Mixed => "Mixed",
        }
    }

    /// Case-insensitive match on the backend value.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "male" => Some(OccupancyType::Male),
            "female" => Some(OccupancyType::Female),
            "mixed" => Some(OccupancyType::Mixed),
            _ => None,
        }
    }
}

/// Listing-level view of a hostel, as nested under a university.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostelSummary {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub description: String,
    /// `None` means "contact for pricing".
    pub price_per_room: Option<f64>,
    /// `None` means online booking is not enabled.
    pub booking_fee: Option<f64>,
    pub amenities: Vec<String>,
    pub distance_from_campus: Option<f64>,
    pub available_rooms: u32,
    pub occupancy_type: Option<OccupancyType>,
    pub primary_image: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct University {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub address: String,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub website: Option<String>,
    pub hostels: Vec<HostelSummary>,
}

/// Result of fetching a single university.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UniversityHostels {
    pub university: University,
    pub hostels: Vec<HostelSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    pub id: i64,
    pub url: String,
    pub caption: Option<String>,
    pub is_primary: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomStats {
    pub total_rooms: u32,
    pub available_rooms: u32,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub avg_price: Option<f64>,
}

/// Full view of a single hostel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostelDetail {
    #[serde(flatten)]
    pub summary: HostelSummary,
    pub total_rooms: u32,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub university_id: Option<i64>,
    pub university_name: Option<String>,
    pub university_code: Option<String>,
    pub university_address: Option<String>,
    pub gallery: Vec<GalleryImage>,
    pub room_stats: Option<RoomStats>,
}

/// Request payload for `POST /hostels/{id}/bookings`. Omitted optionals are
/// left out of the JSON body entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_check_in: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stay_duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_phone: Option<String>,
}

/// Server acknowledgement of a booking request, with defaults filled in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfirmation {
    pub booking_fee: f64,
    pub payment_reference: String,
    pub payment_status: String,
    pub status: String,
    pub created_at: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_request_omits_absent_optionals() {
        let request = BookingRequest {
            full_name: "Amina N.".to_string(),
            phone: "0700000000".to_string(),
            payment_phone: Some("0700000000".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["fullName"], "Amina N.");
        assert_eq!(json["phone"], "0700000000");
        assert_eq!(json["paymentPhone"], "0700000000");
        assert!(json.get("email").is_none());
        assert!(json.get("preferredCheckIn").is_none());
    }

    #[test]
    fn hostel_detail_flattens_summary_fields() {
        let detail = HostelDetail {
            summary: HostelSummary {
                id: 7,
                name: "Cedar".to_string(),
                address: "Wandegeya".to_string(),
                description: "Quiet".to_string(),
                price_per_room: None,
                booking_fee: None,
                amenities: Vec::new(),
                distance_from_campus: None,
                available_rooms: 0,
                occupancy_type: Some(OccupancyType::Mixed),
                primary_image: None,
                latitude: None,
                longitude: None,
            },
            total_rooms: 0,
            contact_phone: None,
            contact_email: None,
            university_id: None,
            university_name: None,
            university_code: None,
            university_address: None,
            gallery: Vec::new(),
            room_stats: None,
        };
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["occupancyType"], "mixed");
        assert_eq!(json["totalRooms"], 0);
        assert!(json.get("summary").is_none());
    }
}
