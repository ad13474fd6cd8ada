use super::*;
use crate::frames::builder::FrameSetBuilder;
use crate::frames::frame_set::FrameSet;
use crate::raster::image::Image;
use std::sync::Arc;
use std::time::Duration;

fn set(seed: u8) -> FrameSet {
    let a = Image::filled(3, 3, [seed, 0, 0, 255]).unwrap();
    let b = Image::filled(3, 3, [0, seed, 0, 255]).unwrap();
    FrameSetBuilder::build(&a, &b, 4, Duration::from_millis(10), false).unwrap()
}

#[test]
fn repeated_render_reuses_the_drawing() {
    let s = set(200);
    let vp = Viewport::new(6, 6);
    let mut cache = RenderCache::new();

    let first = Arc::clone(cache.render(s.key(), &s.frames()[1], vp).surface());
    let second = Arc::clone(cache.render(s.key(), &s.frames()[1], vp).surface());
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(
        cache.stats(),
        RenderCacheStats {
            hits: 1,
            misses: 1
        }
    );
}

#[test]
fn index_viewport_and_set_changes_recompile() {
    let s1 = set(200);
    let s2 = set(100);
    let vp = Viewport::new(6, 6);
    let mut cache = RenderCache::new();

    let _ = cache.render(s1.key(), &s1.frames()[0], vp);
    let _ = cache.render(s1.key(), &s1.frames()[1], vp);
    let _ = cache.render(s1.key(), &s1.frames()[1], Viewport::new(7, 6));
    let _ = cache.render(s2.key(), &s2.frames()[1], Viewport::new(7, 6));
    assert_eq!(cache.stats().misses, 4);
    assert_eq!(cache.stats().hits, 0);
    assert_eq!(
        cache.cached().map(|d| d.key().frame_set),
        Some(s2.key())
    );
}

#[test]
fn cached_output_equals_fresh_compile() {
    let s = set(50);
    let vp = Viewport::new(3, 3).with_background([0, 0, 0, 255]);
    let mut cache = RenderCache::new();
    let _ = cache.render(s.key(), &s.frames()[2], vp);
    let cached = cache.render(s.key(), &s.frames()[2], vp).clone();
    assert_eq!(cached, compile_frame(s.key(), &s.frames()[2], vp));
}

#[test]
fn invalidate_forces_recompile() {
    let s = set(10);
    let vp = Viewport::new(3, 3);
    let mut cache = RenderCache::new();
    let _ = cache.render(s.key(), &s.frames()[0], vp);
    cache.invalidate();
    assert!(cache.cached().is_none());
    let _ = cache.render(s.key(), &s.frames()[0], vp);
    assert_eq!(cache.stats().misses, 2);
}
