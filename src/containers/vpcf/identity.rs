use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

static NONCE: AtomicU64 = AtomicU64::new(0);

/// CRC-32 (IEEE) of a compiled texture resource, as stored in the REDI input
/// dependency.
pub fn texture_checksum(texture: &[u8]) -> u32 {
    crc32fast::hash(texture)
}

/// Tag the engine uses to tell resource instances apart. Only needs to be unlikely to
/// collide locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourceId(pub u64);

impl ResourceId {
    /// Draws an id from a generator owned by this call, seeded from the clock and a
    /// process-wide nonce so two builds in the same tick still get different seeds.
    pub fn random() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        let nonce = NONCE.fetch_add(1, Ordering::Relaxed);

        let mut rng = StdRng::seed_from_u64(nanos ^ nonce.rotate_left(32));
        ResourceId(rng.gen())
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:016x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checksum_is_ieee_crc32() {
        assert_eq!(texture_checksum(&[0x00, 0x01, 0x02, 0x03]), 0x8BB9_8613);
        assert_eq!(texture_checksum(b"hello"), 0x3610_A686);
        assert_eq!(texture_checksum(&[]), 0);
    }

    #[test]
    fn consecutive_ids_differ() {
        let a = ResourceId::random();
        let b = ResourceId::random();
        assert_ne!(a, b);
    }

    #[test]
    fn display_is_padded_hex() {
        assert_eq!(ResourceId(0xBEEF).to_string(), "0x000000000000beef");
    }
}
