/// Keyword to emoji, checked in order against the name and then the kinds.
/// Earlier entries win, so "Fort Museum" gets the museum icon.
const PLACE_ICONS: &[(&str, &str)] = &[
    ("temple", "🛕"),
    ("church", "⛪"),
    ("mosque", "🕌"),
    ("cathedral", "⛪"),
    ("monastery", "🏛️"),
    ("shrine", "🛕"),
    ("museum", "🏛️"),
    ("gallery", "🖼️"),
    ("palace", "🏰"),
    ("castle", "🏰"),
    ("fort", "🏰"),
    ("monument", "🗽"),
    ("statue", "🗽"),
    ("park", "🌳"),
    ("garden", "🌺"),
    ("beach", "🏖️"),
    ("mountain", "⛰️"),
    ("lake", "🏞️"),
    ("river", "🏞️"),
    ("forest", "🌲"),
    ("sanctuary", "🐦"),
    ("zoo", "🦁"),
    ("wildlife", "🦁"),
    ("bird", "🐦"),
    ("nature", "🌿"),
    ("theater", "🎭"),
    ("cinema", "🎬"),
    ("amusement", "🎡"),
    ("aquarium", "🐠"),
    ("circus", "🎪"),
    ("concert", "🎵"),
    ("stadium", "🏟️"),
    ("bowling", "🎳"),
    ("restaurant", "🍽️"),
    ("cafe", "☕"),
    ("market", "🛒"),
    ("mall", "🏬"),
    ("shopping", "🛍️"),
    ("bakery", "🥖"),
    ("pizzeria", "🍕"),
    ("bar", "🍺"),
    ("pub", "🍺"),
    ("airport", "✈️"),
    ("station", "🚉"),
    ("port", "🚢"),
];

pub const DEFAULT_ICON: &str = "📍";

/// Emoji for a place, from the first keyword found in its name or kinds
pub fn place_icon(name: &str, kinds: &str) -> &'static str {
    let name = name.to_lowercase();
    let kinds = kinds.to_lowercase();

    PLACE_ICONS
        .iter()
        .find(|(keyword, _)| name.contains(keyword) || kinds.contains(keyword))
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_ICON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_from_name() {
        assert_eq!(place_icon("Lotus Temple", ""), "🛕");
        assert_eq!(place_icon("Lodhi Garden", ""), "🌺");
    }

    #[test]
    fn test_icon_from_kinds() {
        assert_eq!(place_icon("Qutub Minar", "historic,monuments"), "🗽");
    }

    #[test]
    fn test_table_order_decides() {
        // "museum" comes before "fort" in the table
        assert_eq!(place_icon("Red Fort Museum", ""), "🏛️");
    }

    #[test]
    fn test_default_icon() {
        assert_eq!(place_icon("India Gate", "urban_environment"), DEFAULT_ICON);
    }
}
