//! Content digests.
//!
//! Post ids are derived from the title with blake3 so the same title always
//! maps to the same article file.

/// Prefix every post id carries.
pub const ID_PREFIX: &str = "id_";

/// Number of hex digits kept from the digest.
const ID_HEX_LEN: usize = 10;

/// Full blake3 digest of `data` as lowercase hex.
#[inline]
pub fn hex_digest<T: AsRef<[u8]> + ?Sized>(data: &T) -> String {
    blake3::hash(data.as_ref()).to_hex().to_string()
}

/// Stable post id for a title, e.g. `id_3f2a9c01be`.
pub fn post_id(title: &str) -> String {
    let hex = hex_digest(title);
    format!("{ID_PREFIX}{}", &hex[..ID_HEX_LEN])
}
