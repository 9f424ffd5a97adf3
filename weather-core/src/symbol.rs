/// WeatherAPI.com condition codes with a display glyph.
///
/// Codes missing from the table have no glyph; see [`symbol_for`].
pub const CONDITION_SYMBOLS: &[(i32, &str)] = &[
    (1000, "☀️"),
    (1003, "⛅"),
    (1006, "☁️"),
    (1009, "☁️"),
    (1030, "🌫️"),
    (1063, "🌦️"),
    (1066, "🌨️"),
    (1069, "🌨️"),
    (1072, "🌧️"),
    (1087, "⛈️"),
    (1114, "🌨️"),
    (1135, "🌫️"),
    (1147, "🌫️"),
    (1150, "🌦️"),
    (1180, "🌦️"),
    (1183, "🌧️"),
    (1192, "🌧️"),
    (1210, "🌨️"),
    (1225, "❄️"),
    (1240, "🌦️"),
    (1273, "⛈️"),
];

/// Glyph for a condition code, or an empty string when the code is unmapped.
pub fn symbol_for(code: i32) -> &'static str {
    CONDITION_SYMBOLS
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, glyph)| *glyph)
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_table_entry_is_returned() {
        for (code, glyph) in CONDITION_SYMBOLS {
            assert_eq!(symbol_for(*code), *glyph, "code {code}");
        }
    }

    #[test]
    fn common_conditions() {
        assert_eq!(symbol_for(1000), "☀️");
        assert_eq!(symbol_for(1003), "⛅");
        assert_eq!(symbol_for(1087), "⛈️");
        assert_eq!(symbol_for(1225), "❄️");
    }

    #[test]
    fn unmapped_codes_have_no_symbol() {
        for code in [0, -1, 999, 1001, 1117, 1195, 1282, i32::MAX, i32::MIN] {
            assert_eq!(symbol_for(code), "", "code {code}");
        }
    }

    #[test]
    fn table_has_no_duplicate_codes() {
        let mut codes: Vec<i32> = CONDITION_SYMBOLS.iter().map(|(c, _)| *c).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), CONDITION_SYMBOLS.len());
    }
}
