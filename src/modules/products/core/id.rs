use crate::modules::products::core::product::Product;
use rand::Rng;

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
pub const PRODUCT_ID_LEN: usize = 9;
const MAX_ATTEMPTS: usize = 8;

/// Short random base-36 id. Uniqueness is not checked here.
pub fn random_product_id<R: Rng>(rng: &mut R) -> String {
    (0..PRODUCT_ID_LEN)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect()
}

/// Draws ids until one is not taken by `existing`. After `MAX_ATTEMPTS`
/// collisions the last candidate is returned unchecked.
pub fn fresh_product_id<R: Rng>(rng: &mut R, existing: &[Product]) -> String {
    let mut candidate = random_product_id(rng);
    for _ in 1..MAX_ATTEMPTS {
        if !existing.iter().any(|p| p.id == candidate) {
            break;
        }
        tracing::warn!(product_id = %candidate, "generated product id collided, retrying");
        candidate = random_product_id(rng);
    }
    candidate
}
