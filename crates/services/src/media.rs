//! Fallback URLs for unreliable media hosts.
//!
//! The sample feed data points at hosts that intermittently 404. Known-bad
//! hosts are rerouted before the first load attempt; anything else gets a
//! deterministic substitute keyed on the author name (or a random seed for
//! post images) after it actually fails.

use rand::Rng;

fn name_seed(name: &str) -> String {
    name.to_lowercase().split_whitespace().collect()
}

/// Substitute avatar for a user, stable across renders.
#[must_use]
pub fn alternative_avatar(name: &str) -> String {
    format!("https://picsum.photos/80/80?random={}", name_seed(name))
}

/// Substitute full-bleed story image for a user, stable across renders.
#[must_use]
pub fn alternative_story_image(name: &str) -> String {
    format!("https://picsum.photos/400/700?random={}", name_seed(name))
}

/// Avatar URL to load first: reroutes the dead `cloudflare-ipfs` host.
#[must_use]
pub fn avatar_url(avatar: &str, name: &str) -> String {
    if avatar.contains("cloudflare-ipfs") {
        alternative_avatar(name)
    } else {
        avatar.to_string()
    }
}

/// Story image URL to load first: reroutes `loremflickr.com`.
#[must_use]
pub fn story_image_url(image: &str, name: &str) -> String {
    if image.contains("loremflickr.com") {
        alternative_story_image(name)
    } else {
        image.to_string()
    }
}

/// Post image URL to load first.
#[must_use]
pub fn post_image_url(image: &str, seed: u32) -> String {
    if image.contains("loremflickr.com") {
        fallback_image_url(0, seed)
    } else {
        image.to_string()
    }
}

/// Fallback chain for a failed post image; one host per retry attempt.
#[must_use]
pub fn fallback_image_url(attempt: u32, seed: u32) -> String {
    match attempt % 3 {
        0 => format!("https://picsum.photos/640/640?random={seed}"),
        1 => format!("https://via.placeholder.com/640x640/E1E1E1/FFFFFF?text=Imagen+{seed}"),
        _ => format!("https://dummyimage.com/640x640/f0f0f0/999999&text=Post+{seed}"),
    }
}

/// Random seed for a retry, so repeated failures do not hammer one URL.
#[must_use]
pub fn random_seed() -> u32 {
    rand::rng().random_range(0..1000)
}
