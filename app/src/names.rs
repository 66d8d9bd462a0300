//! Randomized human readable default names of the form `{adjective}-{animal}`.

use crate::consts::{NAME_ADJECTIVES, NAME_ANIMALS};

/// Generates a default snippet name, e.g. `brave-otter`.
pub fn generate() -> String {
    generate_with(js_sys::Math::random)
}

/// The adjective length is randomized between 3 and 9 characters inclusive.
fn generate_with(mut random: impl FnMut() -> f64) -> String {
    let length = 3 + (random() * 6.0).round() as usize;

    let adjective = pick_with_length(&mut random, &NAME_ADJECTIVES, length);
    let animal = pick(&mut random, &NAME_ANIMALS);

    format!("{adjective}-{animal}")
}

fn pick_with_length(
    random: &mut impl FnMut() -> f64,
    words: &'static [&'static str],
    length: usize,
) -> &'static str {
    let matching = words
        .iter()
        .copied()
        .filter(|word| word.len() == length)
        .collect::<Vec<_>>();

    match matching.is_empty() {
        true => pick(random, words),
        false => matching[index(random(), matching.len())],
    }
}

fn pick(random: &mut impl FnMut() -> f64, words: &'static [&'static str]) -> &'static str {
    words[index(random(), words.len())]
}

fn index(random: f64, len: usize) -> usize {
    ((random * len as f64) as usize).min(len - 1)
}
