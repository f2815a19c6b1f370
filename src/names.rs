//! Generated resource names.
//!
//! When the caller leaves `vm_name` or `resource_group_name` unset, finalize
//! assigns a short adjective-noun-number identifier. Names only use lowercase
//! alphanumerics and hyphens so they are valid Azure resource and DNS label
//! names. Two generations are allowed to collide in principle; uniqueness
//! strong enough for scratch resources is all that is promised.

use rand::Rng;

const ADJECTIVES: &[&str] = &[
    "ancient", "autumn", "billowy", "bitter", "bold", "broken", "calm", "cool",
    "crimson", "curly", "damp", "dawn", "empty", "falling", "gentle", "green",
    "hidden", "icy", "late", "lively", "misty", "morning", "muddy", "noisy",
    "patient", "polished", "proud", "purple", "quiet", "rapid", "restless",
    "rough", "royal", "silent", "snowy", "soft", "spring", "steep", "still",
    "summer", "sweet", "tiny", "twilight", "white", "wild", "winter", "wispy",
    "young",
];

const NOUNS: &[&str] = &[
    "bird", "block", "boat", "breeze", "brook", "bush", "cherry", "cloud",
    "darkness", "dew", "dream", "dust", "feather", "field", "fire", "firefly",
    "flower", "fog", "forest", "frog", "frost", "glade", "grass", "haze",
    "hill", "lake", "leaf", "meadow", "moon", "mountain", "night", "pine",
    "pond", "rain", "river", "sea", "shadow", "silence", "sky", "smoke",
    "snow", "sound", "star", "sun", "sunset", "surf", "thunder", "tree",
    "violet", "voice", "water", "wave",
];

/// Numeric suffix upper bound, inclusive.
const MAX_TOKEN: u16 = 100;

/// Upper bound on generated name length: the longest adjective and noun plus
/// two hyphens and a three-digit suffix.
pub const MAX_GENERATED_LEN: usize = 24;

/// Generate an adjective-noun-number name, e.g. `quiet-brook-42`.
pub fn generate() -> String {
    generate_with(&mut rand::thread_rng())
}

/// Generate a name from the given randomness source.
pub fn generate_with<R: Rng>(rng: &mut R) -> String {
    let adjective = ADJECTIVES[rng.gen_range(0..ADJECTIVES.len())];
    let noun = NOUNS[rng.gen_range(0..NOUNS.len())];
    let token = rng.gen_range(0..=MAX_TOKEN);
    format!("{}-{}-{}", adjective, noun, token)
}
