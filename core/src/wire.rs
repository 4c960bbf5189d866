//! Raw backend payloads.
//!
//! # Design
//! Field names follow the backend (snake_case). Anything the backend may send
//! as `null` is an `Option`, and numeric columns go through the lenient
//! helpers in [`numeric`] because decimal columns arrive as JSON strings
//! (`"15000.00"`). These types are deliberately defined apart from the mock
//! server's so the integration tests catch schema drift.

use serde::Deserialize;

use crate::types::OccupancyType;

/// The `{success, data, message?}` wrapper every response uses. Other keys,
/// such as paging metadata, are ignored.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiHostelSummary {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "numeric::optional")]
    pub price_per_room: Option<f64>,
    #[serde(default, deserialize_with = "numeric::optional")]
    pub booking_fee: Option<f64>,
    #[serde(default)]
    pub amenities: Option<String>,
    #[serde(default, deserialize_with = "numeric::optional")]
    pub distance_from_campus: Option<f64>,
    #[serde(default, deserialize_with = "numeric::count")]
    pub available_rooms: u32,
    #[serde(default, deserialize_with = "occupancy::optional")]
    pub occupancy_type: Option<OccupancyType>,
    #[serde(default)]
    pub primary_image: Option<String>,
    #[serde(default, deserialize_with = "numeric::optional")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "numeric::optional")]
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiUniversity {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    /// Only present on the nested listing endpoint.
    #[serde(default)]
    pub hostels: Option<Vec<ApiHostelSummary>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiUniversityHostels {
    pub university: ApiUniversity,
    #[serde(default)]
    pub hostels: Vec<ApiHostelSummary>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiHostelImage {
    pub id: i64,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub is_primary: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiRoomStats {
    #[serde(default, deserialize_with = "numeric::count")]
    pub total_rooms: u32,
    #[serde(default, deserialize_with = "numeric::count")]
    pub available_rooms: u32,
    #[serde(default, deserialize_with = "numeric::optional")]
    pub min_price: Option<f64>,
    #[serde(default, deserialize_with = "numeric::optional")]
    pub max_price: Option<f64>,
    #[serde(default, deserialize_with = "numeric::optional")]
    pub avg_price: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiHostelDetail {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "numeric::count")]
    pub total_rooms: u32,
    #[serde(default, deserialize_with = "numeric::count")]
    pub available_rooms: u32,
    #[serde(default)]
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default, deserialize_with = "numeric::optional")]
    pub price_per_room: Option<f64>,
    #[serde(default, deserialize_with = "numeric::optional")]
    pub booking_fee: Option<f64>,
    #[serde(default, deserialize_with = "occupancy::optional")]
    pub occupancy_type: Option<OccupancyType>,
    #[serde(default, deserialize_with = "numeric::optional")]
    pub distance_from_campus: Option<f64>,
    #[serde(default)]
    pub amenities: Option<String>,
    #[serde(default, deserialize_with = "numeric::optional")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "numeric::optional")]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub university_id: Option<i64>,
    #[serde(default)]
    pub university_name: Option<String>,
    #[serde(default)]
    pub university_code: Option<String>,
    #[serde(default)]
    pub university_address: Option<String>,
    #[serde(default)]
    pub images: Vec<ApiHostelImage>,
    #[serde(default)]
    pub room_stats: Option<ApiRoomStats>,
}

/// Booking acknowledgement. Every field may be missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiBookingConfirmation {
    #[serde(default, deserialize_with = "numeric::optional")]
    pub booking_fee: Option<f64>,
    #[serde(default)]
    pub payment_reference: Option<String>,
    #[serde(default)]
    pub payment_status: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Deserializers that accept numbers encoded either as JSON numbers or as
/// decimal strings.
pub mod numeric {
    use serde::de::{self, Deserializer};
    use serde::Deserialize;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(f64),
        Text(String),
    }

    fn coerce<E: de::Error>(value: NumberOrText) -> Result<Option<f64>, E> {
        match value {
            NumberOrText::Number(n) => Ok(Some(n)),
            NumberOrText::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    return Ok(None);
                }
                text.parse::<f64>()
                    .map(Some)
                    .map_err(|_| E::custom(format!("invalid number: {text:?}")))
            }
        }
    }

    /// `null`, `""` → `None`; `12`, `"12.5"` → `Some`.
    pub fn optional<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<NumberOrText>::deserialize(deserializer)? {
            Some(value) => coerce(value),
            None => Ok(None),
        }
    }

    /// Non-negative integer count; `null` and blanks read as 0.
    pub fn count<'de, D>(deserializer: D) -> Result<u32, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = optional(deserializer)?.unwrap_or(0.0);
        if !value.is_finite() || value < 0.0 {
            return Err(de::Error::custom(format!("invalid count: {value}")));
        }
        Ok(value as u32)
    }
}

/// Occupancy is matched case-insensitively; values outside the known set read
/// as `None` instead of failing the whole payload.
pub mod occupancy {
    use serde::{Deserialize, Deserializer};

    use crate::types::OccupancyType;

    pub fn optional<'de, D>(deserializer: D) -> Result<Option<OccupancyType>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value.as_deref().and_then(OccupancyType::parse))
    }
}
