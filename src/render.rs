//! Text rendering of a map: the ASCII chart and the plain reports.

use std::fmt::Write;

use crate::map::Map;

/// ASCII chart of the map, one character per settlement (the first letter
/// of its name). North is up: row 0 is y near 1.
pub fn render(map: &Map, width: usize, height: usize) -> String {
    if width == 0 || height == 0 {
        return String::new();
    }
    let mut rows = vec![vec![' '; width]; height];
    for (name, pos) in map.positions() {
        let col = ((pos.x() * width as f64).floor() as usize).min(width - 1);
        let row_from_south = ((pos.y() * height as f64).floor() as usize).min(height - 1);
        let row = height - 1 - row_from_south;
        rows[row][col] = name.chars().next().unwrap_or('?');
    }
    let lines: Vec<String> = rows.into_iter().map(|row| row.into_iter().collect()).collect();
    lines.join("\n")
}

/// One line per city: name, centrality, quadrant, type and altitude in feet.
pub fn city_report(map: &Map) -> String {
    let mut out = String::new();
    for (name, city) in map.cities() {
        if let Some(pos) = map.position(name) {
            let altitude = (pos.z() * map.config().altitude_scale).round() as i64;
            let _ = writeln!(
                out,
                "{:>16}   {:>5} {} {:>12} {:>6} ft",
                name,
                pos.centrality().display_name(),
                pos.quadrant(),
                city.city_type.display_name(),
                altitude,
            );
        }
    }
    out.trim_end().to_string()
}

/// River course and the water-connected name sets.
pub fn water_report(map: &Map) -> String {
    let sorted = |set: &std::collections::BTreeSet<String>| {
        set.iter().cloned().collect::<Vec<_>>().join(", ")
    };
    [
        format!("River: {}", map.river_path().join(" -> ")),
        format!("West coast: {}", sorted(map.west_coast())),
        format!("East coast: {}", sorted(map.east_coast())),
        format!("West isles: {}", sorted(map.west_isles())),
        format!("East isles: {}", sorted(map.east_isles())),
    ]
    .join("\n")
}
