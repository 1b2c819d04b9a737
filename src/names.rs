//! City name pools.
//!
//! Default implementation of the naming collaborator: given a locale flavor,
//! a starting letter and a set of names already taken, draw a fresh name.
//! Each locale falls back to a neighboring flavor before giving up, so the
//! thin pools (islands, mountains) borrow from the broader ones.

use std::collections::BTreeSet;

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NameError {
    #[error("no {} names left for letter '{}'", .locale.display_name(), .letter)]
    Exhausted { locale: Locale, letter: char },
}

/// Name flavor, matching the terrain a settlement was placed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Locale {
    Inland,
    Coastal,
    Delta,
    Island,
    Mountain,
}

impl Locale {
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::Inland => "inland",
            Locale::Coastal => "coastal",
            Locale::Delta => "delta",
            Locale::Island => "island",
            Locale::Mountain => "mountain",
        }
    }
}

/// Draw a name for `locale` starting with `letter`, avoiding `excluded`.
/// Uniqueness across the map is the caller's job: pass every name already
/// in use. Falls back to the locale's neighbor pool before failing.
pub fn name_for(
    locale: Locale,
    letter: char,
    excluded: &BTreeSet<String>,
    rng: &mut ChaCha8Rng,
) -> Result<String, NameError> {
    let primary = pool(locale, letter);
    let candidates: Vec<&str> = primary
        .iter()
        .copied()
        .filter(|n| !excluded.contains(*n))
        .collect();
    if !candidates.is_empty() {
        return Ok(pick(rng, &candidates).to_string());
    }

    // Primary pool drained; widen to the fallback flavor.
    let mut widened: Vec<&str> = primary.to_vec();
    for fb in fallback(locale) {
        widened.extend_from_slice(pool(*fb, letter));
    }
    let candidates: Vec<&str> = widened
        .into_iter()
        .filter(|n| !excluded.contains(*n))
        .collect();
    if candidates.is_empty() {
        return Err(NameError::Exhausted { locale, letter });
    }
    Ok(pick(rng, &candidates).to_string())
}

fn fallback(locale: Locale) -> &'static [Locale] {
    match locale {
        Locale::Inland => &[Locale::Mountain],
        Locale::Coastal => &[Locale::Island],
        Locale::Delta => &[Locale::Inland, Locale::Coastal],
        Locale::Island => &[Locale::Coastal],
        Locale::Mountain => &[Locale::Inland],
    }
}

fn pick<'a>(rng: &mut ChaCha8Rng, options: &[&'a str]) -> &'a str {
    options[rng.gen_range(0..options.len())]
}

fn pool(locale: Locale, letter: char) -> &'static [&'static str] {
    match locale {
        Locale::Inland => inland(letter),
        Locale::Coastal => coastal(letter),
        Locale::Delta => delta(letter),
        Locale::Island => island(letter),
        Locale::Mountain => mountain(letter),
    }
}

fn inland(letter: char) -> &'static [&'static str] {
    match letter {
        'a' => &["Atlanta", "Austin", "Antwerp", "Ankara"],
        'b' => &["Birmingham", "Boise", "Buffalo", "Brussels", "Bogota"],
        'c' => &["Chicago", "Cleveland", "Cairo", "Cordoba"],
        'd' => &["Dallas", "Detroit", "Delhi", "Damascus"],
        'e' => &["El Paso", "Eugene", "Edmonton", "Essen"],
        'f' => &["Fargo", "Fresno", "Frankfurt", "Florence"],
        'g' => &["Grand Rapids", "Glasgow", "Giza"],
        'h' => &["Houston", "Helena", "Hamburg", "Hyderabad"],
        'i' => &["Indianapolis", "Isfahan"],
        'j' => &["Jackson", "Johannesburg", "Jerusalem"],
        'k' => &["Knoxville", "Krakow", "Kinshasa", "Kyiv"],
        'l' => &["Louisville", "Las Vegas", "Lincoln", "London"],
        'm' => &["Memphis", "Milwaukee", "Moscow", "Madrid"],
        'n' => &["Nashville", "Nairobi", "Novosibirsk", "Nottingham"],
        'o' => &["Omaha", "Oklahoma City", "Orlando", "Ottawa"],
        'p' => &["Phoenix", "Pittsburgh", "Paris", "Pretoria"],
        'q' => &["Quakertown", "Quito", "Quebec City"],
        'r' => &["Richmond", "Reno", "Raleigh", "Rome"],
        's' => &["St. Louis", "San Antonio", "Seville", "Seoul"],
        't' => &["Tucson", "Tulsa", "Torino", "Tehran"],
        'u' => &["Utica", "Urbana", "Utrecht", "Uppsala"],
        'v' => &["Victorville", "Vallejo", "Vienna"],
        'w' => &["Wichita", "Winston-Salem", "Wuhan", "Warsaw"],
        'x' => &["Xenia", "Xi'an"],
        'y' => &["Yonkers", "Yuma", "Yakutsk"],
        'z' => &["Zion", "Zhengzhou", "Zagreb"],
        _ => &[],
    }
}

fn coastal(letter: char) -> &'static [&'static str] {
    match letter {
        'a' => &["Anchorage", "Athens", "Alexandria", "Abu Dhabi"],
        'b' => &["Boston", "Biloxi", "Buenos Aires", "Bergen"],
        'c' => &["Charleston", "Cape Town", "Casablanca", "Copenhagen"],
        'd' => &["Daytona Beach", "Durban", "Dakar", "Dubai"],
        'e' => &["Encinitas", "Edinburgh", "Ensenada"],
        'f' => &["Fort Lauderdale", "Fukuoka", "Fujisawa"],
        'g' => &["Galveston", "Gold Coast"],
        'h' => &["Honolulu", "Huntington Beach", "Hong Kong"],
        'i' => &["Irvine", "Izmir"],
        'j' => &["Jakarta", "Juneau"],
        'k' => &["Key West", "Ketchikan", "Karachi"],
        'l' => &["Los Angeles", "Lagos", "Lima", "Liverpool"],
        'm' => &["Miami", "Myrtle Beach", "Mumbai", "Macao"],
        'n' => &["Newport Beach", "Naples", "Nice"],
        'o' => &["Oceanside", "Osaka", "Oslo"],
        'p' => &["Portland", "Panama City", "Perth"],
        'q' => &["Quincy"],
        'r' => &["Redondo Beach", "Rio de Janeiro", "Riga"],
        's' => &["San Francisco", "San Diego", "Shanghai", "Stockholm"],
        't' => &["Tampa", "Tulum", "Tokyo"],
        'u' => &["Union City"],
        'v' => &["Virginia Beach", "Veracruz", "Valencia"],
        'w' => &["Wellington", "Weymouth"],
        'x' => &["Xiamen"],
        'y' => &["Yokohama"],
        'z' => &["Zamboanga"],
        _ => &[],
    }
}

fn delta(letter: char) -> &'static [&'static str] {
    match letter {
        'a' => &["Amsterdam", "Antwerp"],
        'b' => &["Baltimore", "Beaumont", "Belfast"],
        'c' => &["Chesapeake", "Corpus Christi"],
        'd' => &["Dublin"],
        'e' => &["Eureka"],
        'f' => &["Fort Bragg"],
        'g' => &["Gold Beach", "Garden Grove"],
        'h' => &["Homestead"],
        'i' => &["Inverness", "Istanbul", "Incheon"],
        'j' => &["Jacksonville", "Jersey City"],
        'k' => &["Klamath"],
        'l' => &["Long Beach", "Londonderry"],
        'm' => &["Mobile", "Montreal", "Melbourne"],
        'n' => &["New Orleans", "Newport News", "Norfolk"],
        'o' => &["Oakland", "Olympia"],
        'p' => &["Philadelphia", "Providence", "Point Arena"],
        'q' => &["Quebec City"],
        'r' => &["Riga"],
        's' => &["Seattle", "Savannah", "Suez"],
        't' => &["Tacoma", "Taipei"],
        'u' => &["Utrecht"],
        'v' => &["Vancouver", "Venice"],
        'w' => &["Wilmington", "West Palm Beach"],
        'x' => &["Xiamen"],
        'y' => &["Yonkers"],
        'z' => &["Zamboanga"],
        _ => &[],
    }
}

fn island(letter: char) -> &'static [&'static str] {
    match letter {
        'b' => &["Bimini"],
        'c' => &["Corsica", "Corfu"],
        'g' => &["Guernsey"],
        'i' => &["Ibiza"],
        'j' => &["Jeju City", "Jersey"],
        'k' => &["Key Largo"],
        'm' => &["Malta", "Mykonos"],
        'n' => &["Nicosia", "Nassau"],
        'p' => &["Palma"],
        's' => &["Sardinia"],
        'v' => &["Vancouver Island"],
        _ => &[],
    }
}

fn mountain(letter: char) -> &'static [&'static str] {
    match letter {
        'a' => &["Aspen", "Asheville", "Albuquerque"],
        'b' => &["Boone", "Breckenridge", "Boulder"],
        'c' => &["Crested Butte", "Cheyenne"],
        'd' => &["Denver", "Deer Valley"],
        'e' => &["Ellijay"],
        'f' => &["Frisco", "Flagstaff"],
        'g' => &["Grand Junction"],
        'h' => &["Highlands"],
        'i' => &["Idaho Falls"],
        'k' => &["Keystone"],
        'l' => &["La Paz", "Lake Tahoe", "Laramie"],
        'm' => &["Missoula"],
        'o' => &["Ogden"],
        'p' => &["Park City"],
        'q' => &["Quito"],
        'r' => &["Rapid City"],
        's' => &["Sun Valley", "Salt Lake City", "Santa Fe"],
        't' => &["Taos", "Telluride"],
        'v' => &["Vail"],
        'w' => &["Winter Park"],
        'y' => &["Yuma"],
        _ => &[],
    }
}
