/// Convert a canvas Y coordinate (origin top-left) to a PDF Y coordinate
/// (origin bottom-left).
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}
