/// Constants that depend on the *frame-buffer*, not on the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Screen {
    pub w: usize,
    pub h: usize,
    pub half_h: i32, // pre-derived, integer like the column maths
    pub half_w: i32,
}

impl Screen {
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            half_h: (h / 2) as i32,
            half_w: (w / 2) as i32,
        }
    }
}
