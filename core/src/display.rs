//! Human-readable labels for hostel listings.
//!
//! Amounts are Ugandan shillings and are grouped the way `en-US` number
//! formatting does it: comma thousands separators, at most three fraction
//! digits, trailing zeros dropped.

use crate::types::{HostelSummary, OccupancyType};

pub const CURRENCY: &str = "UGX";
pub const CONTACT_FOR_PRICING: &str = "Contact for pricing";
pub const FEE_NOT_SET: &str = "Not set";

/// Format `value` with thousands separators.
pub fn format_amount(value: f64) -> String {
    let scaled = (value.abs() * 1000.0).round();
    let whole = (scaled / 1000.0).trunc() as u64;
    let fraction = (scaled % 1000.0) as u64;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && (whole > 0 || fraction > 0) { "-" } else { "" };
    if fraction == 0 {
        return format!("{sign}{grouped}");
    }
    let fraction = format!("{fraction:03}");
    format!("{sign}{grouped}.{}", fraction.trim_end_matches('0'))
}

fn nonzero(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v != 0.0)
}

/// `"UGX 480,000"`, or `"Contact for pricing"` when there is no usable price.
pub fn price_label(price: Option<f64>) -> String {
    match nonzero(price) {
        Some(price) => format!("{CURRENCY} {}", format_amount(price)),
        None => CONTACT_FOR_PRICING.to_string(),
    }
}

pub fn booking_fee_label(fee: Option<f64>) -> String {
    match nonzero(fee) {
        Some(fee) => format!("{CURRENCY} {}", format_amount(fee)),
        None => FEE_NOT_SET.to_string(),
    }
}

/// Online booking needs a configured booking fee. A fee of zero still counts.
pub fn booking_enabled(hostel: &HostelSummary) -> bool {
    hostel.booking_fee.is_some_and(f64::is_finite)
}

pub fn distance_label(distance_km: Option<f64>) -> Option<String> {
    distance_km
        .filter(|d| d.is_finite())
        .map(|d| format!("{d} km to campus"))
}

pub fn availability_label(available_rooms: u32) -> String {
    format!("{available_rooms} rooms available")
}

pub fn occupancy_label(occupancy: Option<OccupancyType>) -> &'static str {
    occupancy.map(|o| o.label()).unwrap_or("Any")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hostel(booking_fee: Option<f64>, price_per_room: Option<f64>) -> HostelSummary {
        HostelSummary {
            id: 1,
            name: "Cedar".to_string(),
            address: "Wandegeya".to_string(),
            description: "Quiet".to_string(),
            price_per_room,
            booking_fee,
            amenities: Vec::new(),
            distance_from_campus: None,
            available_rooms: 3,
            occupancy_type: None,
            primary_image: None,
            latitude: None,
            longitude: None,
        }
    }

    #[test]
    fn amounts_are_grouped() {
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(999.0), "999");
        assert_eq!(format_amount(1000.0), "1,000");
        assert_eq!(format_amount(480_000.0), "480,000");
        assert_eq!(format_amount(1_234_567.5), "1,234,567.5");
        assert_eq!(format_amount(12.3456), "12.346");
        assert_eq!(format_amount(-2500.0), "-2,500");
    }

    #[test]
    fn missing_price_reads_contact_for_pricing() {
        assert_eq!(price_label(None), "Contact for pricing");
        assert_eq!(price_label(Some(0.0)), "Contact for pricing");
        assert_eq!(price_label(Some(450_000.0)), "UGX 450,000");
    }

    #[test]
    fn fee_labels() {
        assert_eq!(booking_fee_label(None), "Not set");
        assert_eq!(booking_fee_label(Some(15_000.0)), "UGX 15,000");
    }

    #[test]
    fn null_fee_disables_booking() {
        assert!(!booking_enabled(&hostel(None, None)));
        assert!(!booking_enabled(&hostel(Some(f64::NAN), None)));
        assert!(booking_enabled(&hostel(Some(0.0), None)));
        assert!(booking_enabled(&hostel(Some(20_000.0), Some(500_000.0))));
    }

    #[test]
    fn unpriced_hostel_never_shows_a_number() {
        let listing = hostel(None, None);
        let label = price_label(listing.price_per_room);
        assert!(!label.chars().any(|c| c.is_ascii_digit()));
        assert!(!booking_enabled(&listing));
    }

    #[test]
    fn small_labels() {
        assert_eq!(distance_label(Some(0.4)).as_deref(), Some("0.4 km to campus"));
        assert_eq!(distance_label(None), None);
        assert_eq!(availability_label(5), "5 rooms available");
        assert_eq!(occupancy_label(Some(OccupancyType::Female)), "Female");
        assert_eq!(occupancy_label(None), "Any");
    }
}
