//! API client core for the hostel booking storefront.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values for the
//! backend's public REST API (host-does-IO pattern), normalizing the
//! backend's snake_case payloads into the shapes the storefront pages render.
//!
//! # Design
//! - `StorefrontClient` is stateless; it holds only the resolved `ApiConfig`.
//! - Each operation is split into `build_*` (produces request) and `parse_*`
//!   (consumes response), so the I/O boundary is explicit. `Storefront` pairs
//!   the two with a `Transport` for async hosts.
//! - `AsyncLoader` gives each page a `{data, loading, error}` view that
//!   ignores results from superseded loads.
//! - Wire DTOs are defined independently from the mock-server crate;
//!   integration tests catch schema drift.

pub mod booking;
pub mod catalog;
pub mod client;
pub mod config;
pub mod display;
pub mod error;
pub mod http;
pub mod loader;
pub mod normalize;
pub mod storefront;
pub mod transport;
pub mod types;
pub mod wire;

pub use booking::{BookingDraft, BookingFormError};
pub use client::StorefrontClient;
pub use config::ApiConfig;
pub use error::{ApiError, Resource};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use loader::{AsyncLoader, LoadOutcome, LoadState, LoadTicket, LoaderOptions};
pub use storefront::Storefront;
pub use transport::{ReqwestTransport, Transport};
pub use types::{
    BookingConfirmation, BookingRequest, GalleryImage, HostelDetail, HostelSummary, OccupancyType,
    RoomStats, University, UniversityHostels,
};
