const RING_RADIUS_PX: f64 = 16.0;
const DOT_RADIUS_PX: f64 = 4.0;

/// Last known pointer position in viewport (client) coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    /// Top-left corner for the cursor ring so that it is centred on the pointer.
    pub fn ring_origin(self) -> (f64, f64) {
        (self.x - RING_RADIUS_PX, self.y - RING_RADIUS_PX)
    }

    pub fn dot_origin(self) -> (f64, f64) {
        (self.x - DOT_RADIUS_PX, self.y - DOT_RADIUS_PX)
    }
}

pub fn translate_style((x, y): (f64, f64)) -> String {
    format!("transform: translate3d({x:.1}px, {y:.1}px, 0);")
}
