//! Phoneme-based star naming with global uniqueness.

use rand::Rng;
use std::collections::HashSet;

const ONSETS: &[&str] = &[
    "st", "dr", "kr", "m", "n", "v", "th", "z", "gl", "pr", "t", "k", "r", "s", "l",
];
const VOWELS: &[&str] = &["a", "e", "i", "o", "u", "ae", "ia", "ai", "oo"];
const CODAS: &[&str] = &["n", "r", "s", "th", "l", "x", "k", "m", "sh"];
const ENDINGS: &[&str] = &["os", "ar", "en", "ion", "is", "or", "un", "eth", "eus"];

fn pick<'a>(rng: &mut impl Rng, options: &'a [&str]) -> &'a str {
    options[rng.random_range(0..options.len())]
}

fn candidate(rng: &mut impl Rng) -> String {
    // A few phoneme patterns keep names pronounceable without a dictionary.
    match rng.random_range(0..4) {
        0 => format!("{}{}{}", pick(rng, ONSETS), pick(rng, VOWELS), pick(rng, ENDINGS)),
        1 => format!(
            "{}{}{}{}",
            pick(rng, ONSETS),
            pick(rng, VOWELS),
            pick(rng, CODAS),
            pick(rng, ENDINGS)
        ),
        2 => format!(
            "{}{}{}{}{}",
            pick(rng, ONSETS),
            pick(rng, VOWELS),
            pick(rng, ONSETS),
            pick(rng, VOWELS),
            pick(rng, ENDINGS)
        ),
        _ => format!(
            "{}{}{}{}",
            pick(rng, ONSETS),
            pick(rng, VOWELS),
            pick(rng, ENDINGS),
            pick(rng, CODAS)
        ),
    }
}

/// Draws a star name not seen before in `used`.
///
/// The phoneme space is far larger than any universe we generate; should the
/// draw loop somehow exhaust its attempts, a numbered fallback keeps the name
/// unique rather than failing generation.
pub fn star_name(rng: &mut impl Rng, used: &mut HashSet<String>) -> String {
    for _ in 0..500 {
        let raw = candidate(rng);
        let mut chars = raw.chars();
        let Some(first) = chars.next() else { continue };
        let name = format!("{}{}", first.to_ascii_uppercase(), chars.collect::<String>());
        if used.insert(name.clone()) {
            return name;
        }
    }

    let mut n = used.len();
    loop {
        let fallback = format!("Star {n}");
        if used.insert(fallback.clone()) {
            return fallback;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn names_are_deterministic_per_seed() {
        let mut used_a = HashSet::new();
        let mut used_b = HashSet::new();
        let mut rng_a = ChaCha8Rng::seed_from_u64(7);
        let mut rng_b = ChaCha8Rng::seed_from_u64(7);

        for _ in 0..10 {
            assert_eq!(star_name(&mut rng_a, &mut used_a), star_name(&mut rng_b, &mut used_b));
        }
    }

    #[test]
    fn names_are_capitalized_and_unique() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let mut used = HashSet::new();
        for _ in 0..64 {
            let name = star_name(&mut rng, &mut used);
            assert!(name.chars().next().is_some_and(|c| c.is_ascii_uppercase()));
        }
        assert_eq!(used.len(), 64);
    }
}
