/// Glyph for a symbolic icon name from the catalog or store profile.
pub fn glyph(name: &str) -> &'static str {
    match name {
        "star" => "⭐",
        "flame" => "🔥",
        "utensils" | "utensils-crossed" => "🍽️",
        "soup" => "🍲",
        "leafy-green" => "🥗",
        "cherry" => "🍒",
        "coffee" => "☕",
        "droplets" => "💧",
        "message-circle" => "💬",
        "facebook" => "📘",
        "instagram" => "📸",
        "send" => "✈️",
        "github" => "🐙",
        "map-pin" => "📍",
        "phone" => "📞",
        "mail" => "✉️",
        _ => "•",
    }
}
