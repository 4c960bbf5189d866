//! Demo catalog served by default.

use crate::{Catalog, Hostel, HostelImage, Room, University};

const CEDAR_PHOTO: &str =
    "https://images.unsplash.com/photo-1523217582562-09d0def993a6?auto=format&fit=crop&w=900&q=80";
const LAKE_VIEW_PHOTO: &str =
    "https://images.unsplash.com/photo-1505691938895-1758d7feb511?auto=format&fit=crop&w=900&q=80";
const CAMPUS_EDGE_PHOTO: &str =
    "https://images.unsplash.com/photo-1582719478250-c89cae4dc85b?auto=format&fit=crop&w=900&q=80";

/// `contact` is `(email, phone, website)`.
fn university(id: i64, name: &str, code: &str, address: &str, contact: [&str; 3]) -> University {
    let [email, phone, website] = contact;
    University {
        id,
        name: name.to_string(),
        code: code.to_string(),
        address: address.to_string(),
        contact_email: Some(email.to_string()),
        contact_phone: Some(phone.to_string()),
        website: Some(website.to_string()),
    }
}

fn image(id: i64, url: &str, caption: Option<&str>, is_primary: bool) -> HostelImage {
    HostelImage {
        id,
        image_url: url.to_string(),
        caption: caption.map(str::to_string),
        is_primary,
    }
}

/// `count` rooms at `price`, the first `available` of which are free.
fn rooms(count: usize, available: usize, price: f64) -> Vec<Room> {
    (0..count)
        .map(|i| Room {
            price,
            available: i < available,
        })
        .collect()
}

fn hostel(id: i64, university_id: i64, name: &str, address: &str) -> Hostel {
    Hostel {
        id,
        university_id,
        name: name.to_string(),
        address: address.to_string(),
        description: None,
        price_per_room: None,
        booking_fee: None,
        amenities: None,
        distance_from_campus: None,
        occupancy_type: Some("mixed".to_string()),
        latitude: None,
        longitude: None,
        contact_phone: None,
        contact_email: None,
        published: true,
        images: Vec::new(),
        rooms: Vec::new(),
    }
}

pub fn seeded_catalog() -> Catalog {
    let universities = vec![
        university(
            1,
            "Makerere University",
            "MAK",
            "Kampala, Uganda",
            ["info@mak.ac.ug", "+256 414 542803", "https://www.mak.ac.ug"],
        ),
        university(
            2,
            "Kyambogo University",
            "KYU",
            "Kampala, Uganda",
            ["info@kyu.ac.ug", "+256 414 286 300", "https://kyu.ac.ug"],
        ),
        university(
            3,
            "Uganda Christian University",
            "UCU",
            "Mukono, Uganda",
            ["admissions@ucu.ac.ug", "+256 312 350 800", "https://ucu.ac.ug"],
        ),
    ];

    let cedar = Hostel {
        description: Some(
            "A modern hostel with spacious rooms, 24/7 security, and fast internet for every \
             student."
                .to_string(),
        ),
        price_per_room: Some(480_000.0),
        booking_fee: Some(20_000.0),
        amenities: Some("WiFi, CCTV cameras, Shuttle to campus, Gym".to_string()),
        distance_from_campus: Some(0.4),
        latitude: Some(0.3322),
        longitude: Some(32.5704),
        contact_phone: Some("+256 700 100 101".to_string()),
        images: vec![
            image(1, "/uploads/hostels/cedar-corridor.jpg", Some("Corridor"), false),
            image(2, "/uploads/hostels/cedar-front.jpg", Some("Front view"), true),
            image(3, CEDAR_PHOTO, None, false),
        ],
        rooms: [rooms(3, 2, 480_000.0), rooms(3, 3, 520_000.0)].concat(),
        ..hostel(101, 1, "Cedar Heights Hostel", "Wandegeya, Kampala")
    };

    let lake_view = Hostel {
        description: Some(
            "Female-only residence with study lounges and an on-site cafeteria.".to_string(),
        ),
        price_per_room: Some(520_000.0),
        amenities: Some("24/7 security,Study lounges, ,On-site cafeteria".to_string()),
        occupancy_type: Some("female".to_string()),
        images: vec![image(4, LAKE_VIEW_PHOTO, None, false)],
        rooms: rooms(12, 12, 520_000.0),
        ..hostel(102, 1, "Lake View Residences", "Kikoni, Kampala")
    };

    let closed = Hostel {
        published: false,
        ..hostel(199, 1, "Annex Under Renovation", "Kikoni, Kampala")
    };

    let hilltop = Hostel {
        price_per_room: Some(430_000.0),
        booking_fee: Some(15_000.0),
        amenities: Some("WiFi, Power backup, Meal plans, Parking".to_string()),
        distance_from_campus: Some(0.6),
        images: vec![image(5, "/uploads/hostels/hilltop.jpg", None, false)],
        rooms: rooms(9, 9, 430_000.0),
        ..hostel(201, 2, "Hilltop Haven", "Banda, Kampala")
    };

    let trinity = Hostel {
        description: Some("Quiet suites a short walk from the main gate.".to_string()),
        price_per_room: Some(600_000.0),
        booking_fee: Some(25_000.0),
        amenities: Some("Biometric access, Dedicated study rooms, Daily cleaning".to_string()),
        occupancy_type: Some("female".to_string()),
        rooms: rooms(6, 4, 600_000.0),
        ..hostel(301, 3, "Trinity Suites", "Mukono")
    };

    let campus_edge = Hostel {
        price_per_room: Some(550_000.0),
        amenities: Some("Fast WiFi, Co-working lounge, Outdoor garden".to_string()),
        occupancy_type: None,
        images: vec![image(6, CAMPUS_EDGE_PHOTO, None, true)],
        rooms: rooms(10, 10, 550_000.0),
        ..hostel(302, 3, "Campus Edge Apartments", "Mukono")
    };

    Catalog {
        universities,
        hostels: vec![cedar, lake_view, closed, hilltop, trinity, campus_edge],
    }
}
