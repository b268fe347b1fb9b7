//! The shipped western-province bus network.
//!
//! Hand-authored tables, loaded exactly once into a process-wide network.
//! Each route table entry describes a bidirectional road segment and expands
//! into a forward and a reverse `Route`.

use std::sync::LazyLock;

use crate::network::{Route, Stop, TransitNetwork};

/// (name, x, y, lat, lon)
const STOP_TABLE: [(&str, f64, f64, f64, f64); 20] = [
    ("Fort", 150.0, 300.0, 6.9344, 79.8428),
    ("Pettah", 200.0, 280.0, 6.9387, 79.8550),
    ("Maradana", 250.0, 270.0, 6.9297, 79.8606),
    ("Kollupitiya", 180.0, 350.0, 6.9147, 79.8500),
    ("Bambalapitiya", 220.0, 370.0, 6.8942, 79.8553),
    ("Wellawatte", 260.0, 390.0, 6.8774, 79.8573),
    ("Dehiwala", 300.0, 410.0, 6.8559, 79.8642),
    ("Mount Lavinia", 340.0, 430.0, 6.8382, 79.8637),
    ("Moratuwa", 380.0, 450.0, 6.7730, 79.8816),
    ("Kaduwela", 350.0, 230.0, 6.9333, 79.9833),
    ("Malabe", 400.0, 250.0, 6.9097, 79.9536),
    ("Maharagama", 320.0, 350.0, 6.8484, 79.9267),
    ("Nugegoda", 280.0, 330.0, 6.8649, 79.8997),
    ("Rajagiriya", 300.0, 290.0, 6.9089, 79.8867),
    ("Negombo", 50.0, 150.0, 7.2083, 79.8358),
    ("Katunayake", 100.0, 200.0, 7.1697, 79.8844),
    ("Ja-Ela", 120.0, 220.0, 7.0742, 79.8919),
    ("Kelaniya", 220.0, 240.0, 6.9553, 79.9219),
    ("Kiribathgoda", 260.0, 220.0, 6.9789, 79.9292),
    ("Gampaha", 200.0, 180.0, 7.0911, 79.9956),
];

/// (from, to, distance km, time min, fare, line)
const ROUTE_TABLE: [(&str, &str, f64, u32, u32, &str); 22] = [
    ("Negombo", "Katunayake", 8.0, 15, 30, "240"),
    ("Katunayake", "Ja-Ela", 6.0, 12, 25, "240"),
    ("Ja-Ela", "Fort", 22.0, 45, 50, "240"),
    ("Negombo", "Gampaha", 25.0, 50, 60, "903"),
    ("Gampaha", "Kiribathgoda", 12.0, 25, 35, "903"),
    ("Kiribathgoda", "Kelaniya", 8.0, 15, 25, "903"),
    ("Kelaniya", "Pettah", 7.0, 18, 20, "235"),
    ("Fort", "Pettah", 2.0, 8, 15, "138"),
    ("Pettah", "Maradana", 3.0, 10, 15, "138"),
    ("Maradana", "Rajagiriya", 6.0, 15, 25, "177"),
    ("Rajagiriya", "Kaduwela", 8.0, 20, 30, "177"),
    ("Kaduwela", "Malabe", 5.0, 12, 20, "177"),
    ("Fort", "Kollupitiya", 3.0, 10, 18, "100"),
    ("Kollupitiya", "Bambalapitiya", 2.0, 8, 15, "100"),
    ("Bambalapitiya", "Wellawatte", 3.0, 10, 18, "100"),
    ("Wellawatte", "Dehiwala", 3.0, 12, 20, "100"),
    ("Dehiwala", "Mount Lavinia", 2.0, 8, 15, "100"),
    ("Mount Lavinia", "Moratuwa", 5.0, 15, 25, "155"),
    ("Rajagiriya", "Nugegoda", 4.0, 12, 20, "138"),
    ("Nugegoda", "Maharagama", 3.0, 10, 18, "138"),
    ("Maharagama", "Dehiwala", 4.0, 12, 20, "154"),
    ("Kelaniya", "Kaduwela", 12.0, 30, 40, "245"),
];

static NETWORK: LazyLock<TransitNetwork> = LazyLock::new(build_network);

/// The process-wide shipped network. Built on first access, never torn down.
pub fn default_network() -> &'static TransitNetwork {
    &NETWORK
}

fn build_network() -> TransitNetwork {
    let stops = STOP_TABLE
        .iter()
        .map(|&(name, x, y, lat, lon)| Stop::new(name, x, y, lat, lon))
        .collect();

    let mut routes = Vec::with_capacity(ROUTE_TABLE.len() * 2);
    for &(from, to, distance, time, fare, line) in &ROUTE_TABLE {
        routes.push(Route::new(from, to, distance, time, fare, line));
        routes.push(Route::new(to, from, distance, time, fare, line));
    }

    TransitNetwork::new(stops, routes)
}
