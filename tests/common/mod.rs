use carmatch::catalog::{InMemoryCatalog, ListingCounts, VehicleRecord};
use carmatch::config::MatcherSettings;
use carmatch::Session;

pub fn vehicle(
    id: &str,
    make: &str,
    model: &str,
    badge: &str,
    transmission_type: &str,
    fuel_type: &str,
    drive_type: &str,
) -> VehicleRecord {
    let opt = |s: &str| (!s.is_empty()).then(|| s.to_string());
    VehicleRecord {
        id: id.to_string(),
        make: opt(make),
        model: opt(model),
        badge: opt(badge),
        transmission_type: opt(transmission_type),
        fuel_type: opt(fuel_type),
        drive_type: opt(drive_type),
    }
}

/// A small catalog with overlapping makes, models and drive types
pub fn sample_vehicles() -> Vec<VehicleRecord> {
    vec![
        vehicle("1001", "Toyota", "Camry", "Ascent", "Automatic", "Petrol", "Front Wheel Drive"),
        vehicle("1002", "Toyota", "Camry", "Atara SX", "Automatic", "Hybrid", "Front Wheel Drive"),
        vehicle("1003", "Toyota", "Hilux", "SR5", "Manual", "Diesel", "Four Wheel Drive"),
        vehicle("1004", "Mazda", "CX-5", "Maxx Sport", "Automatic", "Petrol", "All Wheel Drive"),
        vehicle("1005", "Holden", "Commodore", "SS V", "Automatic", "Petrol", "Rear Wheel Drive"),
        vehicle("1006", "Ford", "Ranger", "XLT", "Automatic", "Diesel", "Four Wheel Drive"),
    ]
}

pub fn sample_counts() -> ListingCounts {
    ListingCounts::from([
        ("1001".to_string(), 40),
        ("1002".to_string(), 12),
        ("1003".to_string(), 55),
        ("1006".to_string(), 31),
    ])
}

pub fn sample_catalog() -> InMemoryCatalog {
    InMemoryCatalog::new(sample_vehicles(), sample_counts())
}

pub fn session_for(catalog: &InMemoryCatalog) -> Session {
    Session::build(catalog, &MatcherSettings::default()).expect("Failed to build session")
}

pub fn sample_session() -> Session {
    session_for(&sample_catalog())
}
