//! Built-in fixture table
//!
//! A small set of hand-authored records for the places most requests name,
//! used when the knowledge store is unavailable or has no match. Keys are
//! matched against the lowercase leading token of the query, so "Puri
//! Temple" resolves through the "puri" fixture.

use crate::domain::{PlaceRecord, RecordSource};

struct Fixture {
    key: &'static str,
    name: &'static str,
    description: &'static str,
    lat: f64,
    lng: f64,
    district: &'static str,
    city: &'static str,
    entry_fee: i64,
    stay_cost: i64,
    travel_cost: i64,
}

const FIXTURES: &[Fixture] = &[
    Fixture {
        key: "puri",
        name: "Puri",
        description: "Coastal pilgrimage town, home of the Jagannath Temple and Golden Beach.",
        lat: 19.8135,
        lng: 85.8312,
        district: "Puri",
        city: "Puri",
        entry_fee: 0,
        stay_cost: 1200,
        travel_cost: 400,
    },
    Fixture {
        key: "konark",
        name: "Konark",
        description: "Site of the 13th-century Sun Temple, a UNESCO World Heritage monument.",
        lat: 19.8876,
        lng: 86.0945,
        district: "Puri",
        city: "Konark",
        entry_fee: 40,
        stay_cost: 1000,
        travel_cost: 350,
    },
    Fixture {
        key: "bhubaneswar",
        name: "Bhubaneswar",
        description: "The temple city: Lingaraj, Udayagiri caves and the state museum.",
        lat: 20.2961,
        lng: 85.8245,
        district: "Khordha",
        city: "Bhubaneswar",
        entry_fee: 25,
        stay_cost: 1500,
        travel_cost: 500,
    },
    Fixture {
        key: "chilika",
        name: "Chilika Lake",
        description: "Asia's largest brackish-water lagoon, famous for dolphins and migratory birds.",
        lat: 19.7160,
        lng: 85.3206,
        district: "Khordha",
        city: "Balugaon",
        entry_fee: 50,
        stay_cost: 900,
        travel_cost: 600,
    },
    Fixture {
        key: "cuttack",
        name: "Cuttack",
        description: "The silver city on the Mahanadi, known for filigree work and Barabati fort.",
        lat: 20.4625,
        lng: 85.8830,
        district: "Cuttack",
        city: "Cuttack",
        entry_fee: 0,
        stay_cost: 1100,
        travel_cost: 450,
    },
    Fixture {
        key: "simlipal",
        name: "Simlipal",
        description: "Tiger reserve and national park with sal forests and the Barehipani falls.",
        lat: 21.7519,
        lng: 86.3756,
        district: "Mayurbhanj",
        city: "Baripada",
        entry_fee: 100,
        stay_cost: 1400,
        travel_cost: 800,
    },
    Fixture {
        key: "daringbadi",
        name: "Daringbadi",
        description: "Hill station of Odisha with coffee gardens, pine forests and valley views.",
        lat: 19.9096,
        lng: 84.1432,
        district: "Kandhamal",
        city: "Daringbadi",
        entry_fee: 0,
        stay_cost: 1300,
        travel_cost: 700,
    },
];

/// Look up a place by the lowercase leading token of its name
pub fn lookup(name: &str) -> Option<PlaceRecord> {
    let token = name.split_whitespace().next()?.to_lowercase();
    let fixture = FIXTURES.iter().find(|f| f.key == token)?;

    Some(PlaceRecord {
        place_name: name.trim().to_string(),
        description: fixture.description.to_string(),
        lat: Some(fixture.lat),
        lng: Some(fixture.lng),
        district: fixture.district.to_string(),
        city: fixture.city.to_string(),
        entry_fee: fixture.entry_fee,
        stay_cost: fixture.stay_cost,
        travel_cost: fixture.travel_cost,
        raw_meta: serde_json::json!({ "fixture": fixture.name }),
        source: RecordSource::Fixture,
    })
}
