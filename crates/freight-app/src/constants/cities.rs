//! City size classes, country codes, and coordinates

use freight_types::SizeClass;
use freight_types::SizeClass::{Large, Medium, Small};

/// City name and size class, in catalog order
pub const CITY_SIZES: &[(&str, SizeClass)] = &[
    ("Berlin", Large),
    ("Hamburg", Large),
    ("Munich", Large),
    ("Cologne", Large),
    ("Frankfurt", Large),
    ("Stuttgart", Medium),
    ("Dusseldorf", Medium),
    ("Dortmund", Medium),
    ("Leipzig", Medium),
    ("Dresden", Medium),
    ("Hanover", Medium),
    ("Nuremberg", Medium),
    ("Bremen", Medium),
    ("Potsdam", Small),
    ("Magdeburg", Small),
    ("Augsburg", Small),
    ("Kassel", Small),
    ("Erfurt", Small),
    ("Rostock", Small),
    ("Amsterdam", Large),
    ("Rotterdam", Large),
    ("Utrecht", Medium),
    ("Eindhoven", Small),
    ("Brussels", Large),
    ("Antwerp", Medium),
    ("Liege", Small),
    ("Paris", Large),
    ("Lyon", Large),
    ("Strasbourg", Medium),
    ("Lille", Medium),
    ("Reims", Small),
    ("Warsaw", Large),
    ("Poznan", Medium),
    ("Szczecin", Medium),
    ("Wroclaw", Medium),
    ("Lodz", Medium),
    ("Prague", Large),
    ("Brno", Medium),
    ("Vienna", Large),
    ("Salzburg", Small),
    ("Linz", Small),
    ("Zurich", Large),
    ("Basel", Medium),
    ("Copenhagen", Large),
    ("Aarhus", Medium),
    ("Milan", Large),
    ("Madrid", Large),
    ("Lisbon", Large),
];

/// ISO country code per city
pub const CITY_COUNTRIES: &[(&str, &str)] = &[
    ("Berlin", "DE"),
    ("Hamburg", "DE"),
    ("Munich", "DE"),
    ("Cologne", "DE"),
    ("Frankfurt", "DE"),
    ("Stuttgart", "DE"),
    ("Dusseldorf", "DE"),
    ("Dortmund", "DE"),
    ("Leipzig", "DE"),
    ("Dresden", "DE"),
    ("Hanover", "DE"),
    ("Nuremberg", "DE"),
    ("Bremen", "DE"),
    ("Potsdam", "DE"),
    ("Magdeburg", "DE"),
    ("Augsburg", "DE"),
    ("Kassel", "DE"),
    ("Erfurt", "DE"),
    ("Rostock", "DE"),
    ("Amsterdam", "NL"),
    ("Rotterdam", "NL"),
    ("Utrecht", "NL"),
    ("Eindhoven", "NL"),
    ("Brussels", "BE"),
    ("Antwerp", "BE"),
    ("Liege", "BE"),
    ("Paris", "FR"),
    ("Lyon", "FR"),
    ("Strasbourg", "FR"),
    ("Lille", "FR"),
    ("Reims", "FR"),
    ("Warsaw", "PL"),
    ("Poznan", "PL"),
    ("Szczecin", "PL"),
    ("Wroclaw", "PL"),
    ("Lodz", "PL"),
    ("Prague", "CZ"),
    ("Brno", "CZ"),
    ("Vienna", "AT"),
    ("Salzburg", "AT"),
    ("Linz", "AT"),
    ("Zurich", "CH"),
    ("Basel", "CH"),
    ("Copenhagen", "DK"),
    ("Aarhus", "DK"),
    ("Milan", "IT"),
    ("Madrid", "ES"),
    ("Lisbon", "PT"),
];

/// Latitude and longitude in degrees, used by the built-in distance provider
pub const CITY_COORDINATES: &[(&str, f64, f64)] = &[
    ("Berlin", 52.520, 13.405),
    ("Hamburg", 53.551, 9.994),
    ("Munich", 48.137, 11.575),
    ("Cologne", 50.938, 6.960),
    ("Frankfurt", 50.110, 8.682),
    ("Stuttgart", 48.776, 9.183),
    ("Dusseldorf", 51.227, 6.774),
    ("Dortmund", 51.514, 7.468),
    ("Leipzig", 51.340, 12.375),
    ("Dresden", 51.051, 13.738),
    ("Hanover", 52.375, 9.732),
    ("Nuremberg", 49.452, 11.077),
    ("Bremen", 53.079, 8.802),
    ("Potsdam", 52.391, 13.066),
    ("Magdeburg", 52.121, 11.628),
    ("Augsburg", 48.370, 10.898),
    ("Kassel", 51.313, 9.480),
    ("Erfurt", 50.978, 11.029),
    ("Rostock", 54.092, 12.099),
    ("Amsterdam", 52.370, 4.895),
    ("Rotterdam", 51.924, 4.478),
    ("Utrecht", 52.091, 5.122),
    ("Eindhoven", 51.441, 5.478),
    ("Brussels", 50.850, 4.352),
    ("Antwerp", 51.219, 4.402),
    ("Liege", 50.633, 5.567),
    ("Paris", 48.857, 2.352),
    ("Lyon", 45.764, 4.836),
    ("Strasbourg", 48.573, 7.752),
    ("Lille", 50.629, 3.057),
    ("Reims", 49.258, 4.032),
    ("Warsaw", 52.230, 21.012),
    ("Poznan", 52.406, 16.925),
    ("Szczecin", 53.428, 14.553),
    ("Wroclaw", 51.108, 17.039),
    ("Lodz", 51.759, 19.456),
    ("Prague", 50.075, 14.438),
    ("Brno", 49.195, 16.608),
    ("Vienna", 48.208, 16.373),
    ("Salzburg", 47.810, 13.055),
    ("Linz", 48.306, 14.286),
    ("Zurich", 47.377, 8.541),
    ("Basel", 47.560, 7.589),
    ("Copenhagen", 55.676, 12.568),
    ("Aarhus", 56.163, 10.204),
    ("Milan", 45.464, 9.190),
    ("Madrid", 40.417, -3.704),
    ("Lisbon", 38.722, -9.139),
];

/// Country lookup, kept separate from the size table
pub fn country_code(city: &str) -> Option<&'static str> {
    CITY_COUNTRIES
        .iter()
        .find(|(name, _)| *name == city)
        .map(|&(_, code)| code)
}

pub fn city_coordinates(city: &str) -> Option<(f64, f64)> {
    CITY_COORDINATES
        .iter()
        .find(|(name, _, _)| *name == city)
        .map(|&(_, lat, lon)| (lat, lon))
}
