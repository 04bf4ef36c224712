//! Falling-rain particles in screen space.

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Length of the streak drawn for each drop, in pixels.
pub const DROP_LEN: f32 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Raindrop {
    pub x: f32,
    pub y: f32,
    /// Pixels per frame, in `0.5 ..= 0.9`.
    pub speed: f32,
}

/// Fixed pool of drops that wrap back to the top once off screen.
pub struct Rain {
    drops: Vec<Raindrop>,
    rng: StdRng,
    width: usize,
    height: usize,
}

impl Rain {
    /// Scatter `count` drops over a `width`×`height` screen.
    pub fn new(count: usize, width: usize, height: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let w = width.max(1);
        let h = height.max(1);
        let drops = (0..count)
            .map(|_| Raindrop {
                x: rng.gen_range(0..w) as f32,
                y: rng.gen_range(0..h) as f32,
                speed: rng.gen_range(5..10) as f32 / 10.0,
            })
            .collect();
        Self {
            drops,
            rng,
            width: w,
            height: h,
        }
    }

    #[inline]
    pub fn drops(&self) -> &[Raindrop] {
        &self.drops
    }

    /// Advance every drop by one frame.
    pub fn step(&mut self) {
        let bottom = self.height as f32;
        for d in &mut self.drops {
            d.y += d.speed;
            if d.y > bottom {
                d.x = self.rng.gen_range(0..self.width) as f32;
                d.y = -DROP_LEN;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_start_on_screen() {
        let rain = Rain::new(100, 64, 48, 7);
        assert_eq!(rain.drops().len(), 100);
        for d in rain.drops() {
            assert!((0.0..64.0).contains(&d.x));
            assert!((0.0..48.0).contains(&d.y));
            assert!((0.5..=0.9).contains(&d.speed));
        }
    }

    #[test]
    fn drops_fall_and_wrap() {
        let mut rain = Rain::new(20, 32, 10, 1);
        let before: Vec<f32> = rain.drops().iter().map(|d| d.y).collect();
        rain.step();
        for (d, y0) in rain.drops().iter().zip(&before) {
            assert!(d.y > *y0 || d.y == -DROP_LEN);
        }
        // 0.5 px/frame minimum: 30 frames moves every drop past 10 px
        for _ in 0..30 {
            rain.step();
        }
        assert!(rain.drops().iter().all(|d| d.y <= 10.0));
        assert!(rain.drops().iter().all(|d| (0.0..32.0).contains(&d.x)));
    }

    #[test]
    fn same_seed_same_rain() {
        let mut a = Rain::new(10, 100, 100, 42);
        let mut b = Rain::new(10, 100, 100, 42);
        for _ in 0..50 {
            a.step();
            b.step();
        }
        assert_eq!(a.drops(), b.drops());
    }
}
