//! End-to-end tests against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then exercises every client
//! operation over real HTTP: once through ureq with the build/parse split
//! (the host executing I/O itself) and once through the async `Storefront`
//! facade, driven by an `AsyncLoader` as a page would. Validates that the
//! core's wire types match what the server actually sends.

use std::net::SocketAddr;

use storefront_core::display::{booking_enabled, price_label};
use storefront_core::{
    ApiConfig, ApiError, AsyncLoader, BookingDraft, HostelDetail, HttpMethod, HttpResponse,
    LoadOutcome, Storefront, StorefrontClient,
};

/// Start the mock server on its own thread and return its address.
fn spawn_server() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

fn config(addr: SocketAddr) -> ApiConfig {
    ApiConfig::new(&format!("http://{addr}/api/public"))
}

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses are returned as data rather than `Err`, letting the core
/// client handle status interpretation.
fn execute(req: storefront_core::HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.path).call(),
        (HttpMethod::Post, Some(body)) => {
            agent.post(&req.path).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Post, None) => agent.post(&req.path).send_empty(),
    }
    .expect("HTTP transport error");

    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|value| (name.as_str().to_string(), value.to_string()))
        })
        .collect();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    HttpResponse {
        status,
        headers,
        body,
    }
}

#[test]
fn browse_and_book_with_host_io() {
    let addr = spawn_server();
    let client = StorefrontClient::new(config(addr));

    // Step 1: list - three universities, unpublished hostel hidden.
    let universities = client
        .parse_list_universities(execute(client.build_list_universities()))
        .unwrap();
    assert_eq!(universities.len(), 3);
    let mak = &universities[0];
    assert_eq!(mak.code, "MAK");
    assert_eq!(mak.hostels.len(), 2);
    assert!(mak.hostels.iter().all(|h| h.id != 199));

    // Step 2: relative images were resolved against the server origin.
    let cedar = &mak.hostels[0];
    assert_eq!(
        cedar.primary_image.as_deref(),
        Some(format!("http://{addr}/uploads/hostels/cedar-front.jpg").as_str())
    );
    assert_eq!(cedar.amenities, vec!["WiFi", "CCTV cameras", "Shuttle to campus", "Gym"]);

    // Step 3: amenity string with a blank entry drops it.
    let lake_view = &mak.hostels[1];
    assert_eq!(lake_view.amenities, vec!["24/7 security", "Study lounges", "On-site cafeteria"]);
    assert!(!booking_enabled(lake_view));

    // Step 4: single university.
    let ucu = client
        .parse_get_university(execute(client.build_get_university(3)))
        .unwrap();
    assert_eq!(ucu.university.name, "Uganda Christian University");
    assert_eq!(ucu.hostels.len(), 2);

    // Step 5: unknown university is NotFound.
    let err = client
        .parse_get_university(execute(client.build_get_university(999)))
        .unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "University not found");

    // Step 6: hostel detail picks the flagged cover and decodes string stats.
    let detail = client.parse_get_hostel(execute(client.build_get_hostel(101))).unwrap();
    assert_eq!(detail.summary.primary_image, cedar.primary_image);
    assert_eq!(detail.gallery.len(), 3);
    assert!(detail.gallery[2].url.starts_with("https://images.unsplash.com/"));
    let stats = detail.room_stats.as_ref().unwrap();
    assert_eq!(stats.avg_price, Some(500_000.0));
    assert_eq!(detail.university_code.as_deref(), Some("MAK"));

    // Step 7: hostel without description gets the placeholder, and its only
    // image becomes the cover.
    let hilltop = client.parse_get_hostel(execute(client.build_get_hostel(201))).unwrap();
    assert_eq!(hilltop.summary.description, "No description provided yet.");
    assert_eq!(
        hilltop.summary.primary_image.as_deref(),
        Some(format!("http://{addr}/uploads/hostels/hilltop.jpg").as_str())
    );

    // Step 8: unpublished hostel is NotFound.
    let err = client.parse_get_hostel(execute(client.build_get_hostel(199))).unwrap_err();
    assert!(matches!(err, ApiError::NotFound { .. }));

    // Step 9: book through the draft form.
    let mut draft = BookingDraft::new();
    draft.full_name = " Amina Nakato ".to_string();
    draft.set_phone("0700111222");
    let request = draft.submission(detail.summary.booking_fee).unwrap();
    let confirmation = client
        .parse_create_booking(execute(client.build_create_booking(101, &request).unwrap()))
        .unwrap();
    assert_eq!(confirmation.booking_fee, 20_000.0);
    assert!(confirmation.payment_reference.starts_with("BK-"));
    assert_eq!(confirmation.payment_status, "pending");
    assert_eq!(confirmation.status, "pending");
    assert!(confirmation.message.contains("0700111222"));

    // Step 10: the server's own rejection message reaches the caller.
    let request = storefront_core::BookingRequest {
        full_name: "Amina".to_string(),
        phone: "0700".to_string(),
        ..Default::default()
    };
    let err = client
        .parse_create_booking(execute(client.build_create_booking(102, &request).unwrap()))
        .unwrap_err();
    assert_eq!(err.to_string(), "Online booking is not enabled for this hostel");
    assert_eq!(price_label(lake_view.price_per_room), "UGX 520,000");
}

#[tokio::test]
async fn storefront_facade_over_reqwest() {
    let addr = spawn_server();
    let storefront = Storefront::from_config(config(addr));

    let universities = storefront.universities_with_hostels().await.unwrap();
    assert_eq!(universities.len(), 3);

    let err = storefront.university_hostels(999).await.unwrap_err();
    assert!(err.is_not_found());

    let detail = storefront.hostel_detail(301).await.unwrap();
    assert_eq!(detail.summary.booking_fee, Some(25_000.0));
    assert!(detail.gallery.is_empty());
    assert_eq!(detail.summary.primary_image, None);
}

#[tokio::test]
async fn loader_drives_page_state() {
    let addr = spawn_server();
    let storefront = Storefront::from_config(config(addr));
    let loader: AsyncLoader<i64, HostelDetail> = AsyncLoader::default();

    let outcome = loader.load(101, || storefront.hostel_detail(101)).await;
    assert_eq!(outcome, LoadOutcome::Applied);
    let state = loader.state();
    assert!(!state.loading);
    assert_eq!(state.data.as_ref().map(|d| d.summary.id), Some(101));

    // Same key: no refetch.
    let outcome = loader.load(101, || storefront.hostel_detail(101)).await;
    assert_eq!(outcome, LoadOutcome::Skipped);

    // Unknown hostel: error message surfaces, data cleared.
    let outcome = loader.load(4040, || storefront.hostel_detail(4040)).await;
    assert_eq!(outcome, LoadOutcome::Applied);
    let state = loader.state();
    assert!(state.data.is_none());
    assert_eq!(state.error.as_deref(), Some("Hostel not found"));
}

#[tokio::test]
async fn transport_failure_surfaces_as_error() {
    // Bind and drop to get a port nobody listens on.
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let storefront = Storefront::from_config(config(addr));

    let err = storefront.universities_with_hostels().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}
