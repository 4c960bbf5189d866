//! Print the public catalog from a running backend.
//!
//! # Usage
//!
//! ```bash
//! # Every university with its hostels
//! STOREFRONT_API_URL=http://localhost:5000/api/public cargo run --bin storefront-browse
//!
//! # One hostel in detail
//! cargo run --bin storefront-browse -- 101
//! ```
//!
//! # Environment Variables
//!
//! - `STOREFRONT_API_URL`: API base URL (default: http://localhost:5000/api/public)
//! - `RUST_LOG`: Log level (default: info)

use std::env;

use anyhow::Context;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use storefront_core::display::{
    availability_label, booking_enabled, booking_fee_label, distance_label, occupancy_label,
    price_label,
};
use storefront_core::{ApiConfig, AsyncLoader, HostelDetail, Storefront, University};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(false)
        .init();

    let config = ApiConfig::from_env();
    info!(api = config.api_base_url(), "using backend");
    let storefront = Storefront::from_config(config);

    match env::args().nth(1) {
        Some(arg) => {
            let hostel_id: i64 = arg
                .parse()
                .with_context(|| format!("invalid hostel id: {arg}"))?;
            let loader: AsyncLoader<i64, HostelDetail> = AsyncLoader::default();
            loader
                .load(hostel_id, || storefront.hostel_detail(hostel_id))
                .await;
            let state = loader.state();
            match (state.data, state.error) {
                (Some(hostel), _) => print_hostel(&hostel),
                (None, Some(error)) => anyhow::bail!(error),
                (None, None) => anyhow::bail!("hostel {hostel_id} did not load"),
            }
        }
        None => {
            let universities = storefront.universities_with_hostels().await?;
            print_catalog(&universities);
        }
    }

    Ok(())
}

fn print_catalog(universities: &[University]) {
    for university in universities {
        println!("{} ({}) - {}", university.name, university.code, university.address);
        for hostel in &university.hostels {
            println!(
                "  #{:<5} {:<30} {:<22} {}",
                hostel.id,
                hostel.name,
                price_label(hostel.price_per_room),
                availability_label(hostel.available_rooms)
            );
        }
    }
}

fn print_hostel(detail: &HostelDetail) {
    let hostel = &detail.summary;
    println!("{}", hostel.name);
    println!("{}", hostel.address);
    if let Some(university) = &detail.university_name {
        println!("{university}");
    }
    println!();
    println!("{}", hostel.description);
    println!();
    println!("Price:      {}", price_label(hostel.price_per_room));
    println!("Booking:    {}", booking_fee_label(hostel.booking_fee));
    println!("Occupancy:  {}", occupancy_label(hostel.occupancy_type));
    println!("Rooms:      {}", availability_label(hostel.available_rooms));
    if let Some(distance) = distance_label(hostel.distance_from_campus) {
        println!("Distance:   {distance}");
    }
    if !hostel.amenities.is_empty() {
        println!("Amenities:  {}", hostel.amenities.join(", "));
    }
    for image in &detail.gallery {
        let marker = if image.is_primary { "*" } else { " " };
        println!("  {marker} {}", image.url);
    }
    if !booking_enabled(hostel) {
        println!("Online booking is not available for this hostel.");
    }
}
