//! Static hospital directory: states, their cities, and each city's
//! hospitals, plus the offered specializations.

use once_cell::sync::Lazy;
use std::collections::HashMap;

struct CityRecord {
    name: &'static str,
    hospitals: &'static [&'static str],
}

struct StateRecord {
    name: &'static str,
    cities: &'static [CityRecord],
}

static DIRECTORY: &[StateRecord] = &[
    StateRecord {
        name: "Delhi",
        cities: &[
            CityRecord {
                name: "New Delhi",
                hospitals: &[
                    "AIIMS Delhi",
                    "Apollo Hospital",
                    "Max Super Specialty Hospital",
                ],
            },
            CityRecord {
                name: "South Delhi",
                hospitals: &[
                    "Fortis Hospital Vasant Kunj",
                    "BLK Super Specialty Hospital",
                ],
            },
            CityRecord {
                name: "North Delhi",
                hospitals: &["Max Hospital Shalimar Bagh", "Jaipur Golden Hospital"],
            },
        ],
    },
    StateRecord {
        name: "Haryana",
        cities: &[
            CityRecord {
                name: "Faridabad",
                hospitals: &["Fortis Hospital", "Asian Hospital", "QRG Health City"],
            },
            CityRecord {
                name: "Gurgaon",
                hospitals: &[
                    "Medanta The Medicity",
                    "Fortis Memorial Research Institute",
                    "Artemis Hospital",
                ],
            },
            CityRecord {
                name: "Panipat",
                hospitals: &["Woodland Hospital", "Kalpana Chawla Hospital"],
            },
        ],
    },
    StateRecord {
        name: "Maharashtra",
        cities: &[
            CityRecord {
                name: "Mumbai",
                hospitals: &[
                    "Lilavati Hospital",
                    "Hinduja Hospital",
                    "Breach Candy Hospital",
                ],
            },
            CityRecord {
                name: "Pune",
                hospitals: &[
                    "Ruby Hall Clinic",
                    "Sahyadri Hospital",
                    "Columbia Asia Hospital",
                ],
            },
            CityRecord {
                name: "Nagpur",
                hospitals: &[
                    "Wockhardt Hospital",
                    "Kingsway Hospital",
                    "Orange City Hospital",
                ],
            },
        ],
    },
];

static SPECIALIZATIONS: &[&str] = &[
    "General Physician",
    "Cardiologist",
    "ENT Specialist",
    "Orthopedic",
    "Dermatologist",
    "Gynecologist",
];

static STATE_INDEX: Lazy<HashMap<&'static str, &'static StateRecord>> = Lazy::new(|| {
    DIRECTORY.iter().map(|s| (s.name, s)).collect()
});

/// All supported states, in directory order.
pub fn states() -> Vec<&'static str> {
    DIRECTORY.iter().map(|s| s.name).collect()
}

/// Cities in a state, or `None` for an unknown state.
pub fn cities(state: &str) -> Option<Vec<&'static str>> {
    let record = STATE_INDEX.get(state)?;
    Some(record.cities.iter().map(|c| c.name).collect())
}

/// Hospitals in a city, or `None` when the state or city is unknown.
pub fn hospitals(state: &str, city: &str) -> Option<Vec<&'static str>> {
    let record = STATE_INDEX.get(state)?;
    let city = record.cities.iter().find(|c| c.name == city)?;
    Some(city.hospitals.to_vec())
}

/// Offered doctor specializations.
pub fn specializations() -> Vec<&'static str> {
    SPECIALIZATIONS.to_vec()
}
