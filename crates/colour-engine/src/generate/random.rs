//! Random colours.

use rand::Rng;

use crate::colour::Rgb;

/// Uniformly random colour from `rng`.
pub fn generate_random_colour_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    Rgb::new(rng.gen(), rng.gen(), rng.gen()).to_hex()
}

/// `count` independent random colours from `rng`.
pub fn generate_random_palette_with<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<String> {
    (0..count).map(|_| generate_random_colour_with(rng)).collect()
}

pub fn generate_random_colour() -> String {
    generate_random_colour_with(&mut rand::thread_rng())
}

pub fn generate_random_palette(count: usize) -> Vec<String> {
    generate_random_palette_with(&mut rand::thread_rng(), count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::is_valid_hex;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_seeded_palette_is_deterministic() {
        let a = generate_random_palette_with(&mut StdRng::seed_from_u64(7), 6);
        let b = generate_random_palette_with(&mut StdRng::seed_from_u64(7), 6);
        assert_eq!(a, b);
        assert_eq!(a.len(), 6);
    }

    #[test]
    fn test_random_colours_are_canonical_hex() {
        for hex in generate_random_palette(32) {
            assert!(is_valid_hex(&hex));
            assert_eq!(hex, hex.to_lowercase());
            assert_eq!(hex.len(), 7);
        }
        assert!(is_valid_hex(&generate_random_colour()));
    }
}
