use glam::Vec2;

/// Drawing capability the effects engine needs from its host.
///
/// The browser build implements this over a `CanvasRenderingContext2d`; the
/// engine itself never touches web APIs, so it runs (and is tested) on any target.
pub trait Surface {
    /// Backing resolution in pixels.
    fn size(&self) -> (u32, u32);
    fn set_size(&mut self, width: u32, height: u32);

    fn clear(&mut self);
    fn save(&mut self);
    fn restore(&mut self);
    /// CSS filter applied to subsequent draw calls until the next `restore`.
    fn set_filter(&mut self, filter: &str);

    fn stroke_circle(&mut self, center: Vec2, radius: f32, style: &str, line_width: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, style: &str);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, style: &str, line_width: f32, dash: &[f32]);

    /// Draw the whole of `source` onto this surface with its top-left corner at `origin`.
    fn composite(&mut self, source: &Self, origin: Vec2)
    where
        Self: Sized;
}

/// Backing resolution for a window of `window_w` x `window_h` CSS pixels at `ratio`.
/// Never smaller than 1x1.
#[inline]
pub fn backing_size(window_w: f64, window_h: f64, ratio: f64) -> (u32, u32) {
    let scale = |v: f64| {
        let px = (v * ratio).floor();
        if px.is_finite() && px >= 1.0 {
            px as u32
        } else {
            1
        }
    };
    (scale(window_w), scale(window_h))
}
