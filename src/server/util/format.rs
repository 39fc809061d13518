//! Display formatting for users, counts and timestamps.

use serenity::all::UserId;

pub const CDN_URL: &str = "https://cdn.discordapp.com";

/// Number of default avatar images Discord serves for legacy discriminators.
const DEFAULT_AVATAR_COUNT: u64 = 5;

/// Upper-cases the first character and lower-cases the rest.
pub fn title_case(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// `name` for unique usernames, `name#dddd` for legacy accounts.
pub fn user_tag(username: &str, discriminator: &str) -> String {
    match discriminator {
        "" | "0" => username.to_string(),
        discriminator => format!("{}#{}", username, discriminator),
    }
}

/// CDN URL of a user's avatar.
///
/// Animated hashes (`a_` as Discord issues them, `_a` as some clients report
/// them) resolve to `.gif`. Users without an avatar get one of the default
/// images picked by discriminator.
pub fn avatar_url(user_id: UserId, avatar: Option<&str>, discriminator: &str) -> String {
    match avatar.filter(|hash| !hash.is_empty()) {
        Some(hash) => {
            let extension = if is_animated(hash) { "gif" } else { "png" };
            format!("{}/avatars/{}/{}.{}", CDN_URL, user_id, hash, extension)
        }
        None => {
            let index = discriminator.parse::<u64>().unwrap_or(0) % DEFAULT_AVATAR_COUNT;
            format!("{}/embed/avatars/{}.png", CDN_URL, index)
        }
    }
}

fn is_animated(hash: &str) -> bool {
    hash.starts_with("a_") || hash.starts_with("_a")
}

/// Groups digits in thousands: `1234567` becomes `1,234,567`.
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(digit);
    }

    formatted
}

/// Discord timestamp markup rendered in the reader's locale, `R` is relative.
pub fn discord_timestamp(unix_seconds: i64, style: char) -> String {
    format!("<t:{}:{}>", unix_seconds, style)
}
