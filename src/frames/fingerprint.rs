use std::time::Duration;

use xxhash_rust::xxh3::Xxh3;

use crate::raster::image::Image;

const XXH3_SEED: u64 = 0x3f1c_52e9_a7b0_d46d;

/// Stable identity of one build tuple `(A, B, frame_count, per_frame_duration)`.
///
/// Two frame sets built from identical inputs share a key, whatever their `reverse` flag or
/// threading mode, because their frame storage is identical.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameSetKey {
    /// High 64 bits of the xxh3-128 digest.
    pub hi: u64,
    /// Low 64 bits of the xxh3-128 digest.
    pub lo: u64,
}

pub(crate) fn fingerprint_sources(
    a: &Image,
    b: &Image,
    frame_count: u32,
    per_frame_duration: Duration,
) -> FrameSetKey {
    let mut h = StableHasher::new();
    write_image(&mut h, a);
    write_image(&mut h, b);
    h.write_u32(frame_count);
    h.write_u64(per_frame_duration.as_secs());
    h.write_u32(per_frame_duration.subsec_nanos());
    h.finish()
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u32(&mut self, v: u32) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn finish(self) -> FrameSetKey {
        let v = self.inner.digest128();
        FrameSetKey {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

fn write_image(h: &mut StableHasher, img: &Image) {
    h.write_u32(img.width());
    h.write_u32(img.height());
    h.write_bytes(img.as_bytes());
}
