//! DateKey to seed hashing (32-bit FNV-1a).

use crate::model::date_key::DateKey;

const FNV_OFFSET_BASIS: u32 = 2_166_136_261;
const FNV_PRIME: u32 = 16_777_619;

/// Hashes arbitrary text with 32-bit FNV-1a over its UTF-8 bytes.
pub fn hash_str_to_seed(value: &str) -> u32 {
    value.bytes().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ u32::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// Derives the generation seed for a day.
pub fn date_key_to_seed(date_key: &DateKey) -> u32 {
    hash_str_to_seed(date_key.as_str())
}

#[cfg(test)]
mod tests {
    use super::{date_key_to_seed, hash_str_to_seed, FNV_OFFSET_BASIS};
    use crate::model::date_key::DateKey;

    #[test]
    fn reference_dates_hash_to_fixed_seeds() {
        let cases = [
            ("2024-01-01", 1_395_918_025),
            ("2024-06-15", 3_427_155_295),
            ("2025-12-31", 2_670_561_445),
        ];
        for (raw, expected) in cases {
            let key = DateKey::parse(raw).unwrap();
            assert_eq!(date_key_to_seed(&key), expected, "seed for {raw}");
        }
    }

    #[test]
    fn empty_input_is_offset_basis() {
        assert_eq!(hash_str_to_seed(""), FNV_OFFSET_BASIS);
    }
}
