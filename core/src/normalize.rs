//! Field-level normalization from wire shapes to domain types.
//!
//! Every function here is pure. The only context needed is the backend
//! origin used to absolutize relative image paths.

use crate::types::{
    GalleryImage, HostelDetail, HostelSummary, RoomStats, University, UniversityHostels,
};
use crate::wire::{
    ApiHostelDetail, ApiHostelImage, ApiHostelSummary, ApiRoomStats, ApiUniversity,
    ApiUniversityHostels,
};

/// Shown when a hostel has no description.
pub const DESCRIPTION_PLACEHOLDER: &str = "No description provided yet.";

/// Resolve an image path against `origin`. Absolute `http`/`https` URLs pass
/// through untouched; `None` and empty strings resolve to `None`.
pub fn resolve_image_url(origin: &str, url: Option<&str>) -> Option<String> {
    let url = url.filter(|u| !u.is_empty())?;
    if url.starts_with("http://") || url.starts_with("https://") {
        return Some(url.to_string());
    }
    Some(format!("{origin}{url}"))
}

/// Split a comma-separated amenity string into trimmed, non-empty entries.
pub fn normalize_amenities(value: Option<&str>) -> Vec<String> {
    value
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

pub fn normalize_description(value: Option<&str>) -> String {
    match value {
        Some(text) if !text.trim().is_empty() => text.to_string(),
        _ => DESCRIPTION_PLACEHOLDER.to_string(),
    }
}

pub fn map_hostel(origin: &str, hostel: ApiHostelSummary) -> HostelSummary {
    HostelSummary {
        id: hostel.id,
        name: hostel.name,
        address: hostel.address,
        description: normalize_description(hostel.description.as_deref()),
        price_per_room: hostel.price_per_room,
        booking_fee: hostel.booking_fee,
        amenities: normalize_amenities(hostel.amenities.as_deref()),
        distance_from_campus: hostel.distance_from_campus,
        available_rooms: hostel.available_rooms,
        occupancy_type: hostel.occupancy_type,
        primary_image: resolve_image_url(origin, hostel.primary_image.as_deref()),
        latitude: hostel.latitude,
        longitude: hostel.longitude,
    }
}

/// Map a university and whatever hostels were nested under it.
pub fn map_university(origin: &str, university: ApiUniversity) -> University {
    let hostels = university
        .hostels
        .unwrap_or_default()
        .into_iter()
        .map(|hostel| map_hostel(origin, hostel))
        .collect();
    University {
        id: university.id,
        name: university.name,
        code: university.code,
        address: university.address,
        contact_email: university.contact_email,
        contact_phone: university.contact_phone,
        website: university.website,
        hostels,
    }
}

/// The single-university endpoint sends hostels beside the university rather
/// than inside it; the normalized university carries them either way.
pub fn map_university_hostels(origin: &str, payload: ApiUniversityHostels) -> UniversityHostels {
    let hostels: Vec<HostelSummary> = payload
        .hostels
        .into_iter()
        .map(|hostel| map_hostel(origin, hostel))
        .collect();
    let mut university = map_university(origin, payload.university);
    university.hostels = hostels.clone();
    UniversityHostels {
        university,
        hostels,
    }
}

/// Pick the cover image: the one flagged primary, else the first entry.
pub fn primary_image(origin: &str, images: &[ApiHostelImage]) -> Option<String> {
    let flagged = images
        .iter()
        .find(|image| image.is_primary)
        .and_then(|image| image.image_url.as_deref())
        .filter(|url| !url.is_empty());
    let chosen = flagged.or_else(|| images.first().and_then(|image| image.image_url.as_deref()));
    resolve_image_url(origin, chosen)
}

fn map_room_stats(stats: ApiRoomStats) -> RoomStats {
    RoomStats {
        total_rooms: stats.total_rooms,
        available_rooms: stats.available_rooms,
        min_price: stats.min_price,
        max_price: stats.max_price,
        avg_price: stats.avg_price,
    }
}

pub fn map_hostel_detail(origin: &str, detail: ApiHostelDetail) -> HostelDetail {
    let primary = primary_image(origin, &detail.images);
    let gallery = detail
        .images
        .into_iter()
        .map(|image| GalleryImage {
            id: image.id,
            url: resolve_image_url(origin, image.image_url.as_deref()).unwrap_or_default(),
            caption: image.caption,
            is_primary: image.is_primary,
        })
        .collect();

    HostelDetail {
        summary: HostelSummary {
            id: detail.id,
            name: detail.name,
            address: detail.address,
            description: normalize_description(detail.description.as_deref()),
            price_per_room: detail.price_per_room,
            booking_fee: detail.booking_fee,
            amenities: normalize_amenities(detail.amenities.as_deref()),
            distance_from_campus: detail.distance_from_campus,
            available_rooms: detail.available_rooms,
            occupancy_type: detail.occupancy_type,
            primary_image: primary,
            latitude: detail.latitude,
            longitude: detail.longitude,
        },
        total_rooms: detail.total_rooms,
        contact_phone: detail.contact_phone,
        contact_email: detail.contact_email,
        university_id: detail.university_id,
        university_name: detail.university_name,
        university_code: detail.university_code,
        university_address: detail.university_address,
        gallery,
        room_stats: detail.room_stats.map(map_room_stats),
    }
}
