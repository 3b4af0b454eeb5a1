//! Country/city options for the sign-up form

/// `(value, label)` pair used by select inputs
pub type SelectOption = (&'static str, &'static str);

pub const COUNTRIES: &[SelectOption] = &[
    ("usa", "United States"),
    ("canada", "Canada"),
    ("uk", "United Kingdom"),
    ("australia", "Australia"),
    ("germany", "Germany"),
];

/// Cities available for a country value; empty for unknown or blank input
pub fn cities_for(country: &str) -> &'static [SelectOption] {
    match country {
        "usa" => &[("nyc", "New York"), ("la", "Los Angeles"), ("chicago", "Chicago")],
        "canada" => &[
            ("toronto", "Toronto"),
            ("vancouver", "Vancouver"),
            ("montreal", "Montreal"),
        ],
        "uk" => &[
            ("london", "London"),
            ("manchester", "Manchester"),
            ("birmingham", "Birmingham"),
        ],
        "australia" => &[
            ("sydney", "Sydney"),
            ("melbourne", "Melbourne"),
            ("brisbane", "Brisbane"),
        ],
        "germany" => &[("berlin", "Berlin"), ("hamburg", "Hamburg"), ("munich", "Munich")],
        _ => &[],
    }
}

/// Owned `(value, label)` pairs for the generic select component
pub fn to_options(options: &[SelectOption]) -> Vec<(String, String)> {
    options
        .iter()
        .map(|(v, l)| (v.to_string(), l.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_country_has_cities() {
        for (value, _) in COUNTRIES {
            assert_eq!(cities_for(value).len(), 3, "country {}", value);
        }
    }

    #[test]
    fn test_unknown_country_has_no_cities() {
        assert!(cities_for("").is_empty());
        assert!(cities_for("mars").is_empty());
    }
}
