use color_match::{Raster, Rect, RgbBuffer};

/// A 1-pixel rectangle outline drawn onto an image that can be taken back.
///
/// Drawing remembers every pixel it overwrites; [`UndoableRect::undo`] puts
/// them back, so the image returns to exactly the state it had before.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoableRect {
    rect: Rect,
    saved: Vec<(u32, u32, [u8; 3])>,
}

impl UndoableRect {
    /// Stroke the outline of `rect` with `color`.
    ///
    /// The rectangle is clipped to the image. A zero-sized or fully outside
    /// rectangle draws nothing.
    pub fn draw(image: &mut RgbBuffer, rect: Rect, color: [u8; 3]) -> Self {
        let saved = outline(image, rect)
            .into_iter()
            .map(|(x, y)| {
                let previous = image.get_pixel(x, y);
                image.put_pixel(x, y, color);
                (x, y, previous)
            })
            .collect();
        Self { rect, saved }
    }

    /// Restore the pixels replaced by [`draw`](Self::draw).
    pub fn undo(self, image: &mut RgbBuffer) {
        for (x, y, previous) in self.saved.into_iter().rev() {
            image.put_pixel(x, y, previous);
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Number of pixels the outline covers.
    pub fn len(&self) -> usize {
        self.saved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.saved.is_empty()
    }
}

/// Perimeter pixels of `rect` inside the image, each listed once.
fn outline(image: &RgbBuffer, rect: Rect) -> Vec<(u32, u32)> {
    if rect.width == 0 || rect.height == 0 || rect.x >= image.width() || rect.y >= image.height() {
        return Vec::new();
    }
    let x0 = rect.x;
    let y0 = rect.y;
    let x1 = rect.x.saturating_add(rect.width - 1).min(image.width() - 1);
    let y1 = rect.y.saturating_add(rect.height - 1).min(image.height() - 1);

    let mut points = Vec::new();
    for x in x0..=x1 {
        points.push((x, y0));
    }
    if y1 != y0 {
        for x in x0..=x1 {
            points.push((x, y1));
        }
    }
    if y1 > y0 + 1 {
        for y in y0 + 1..y1 {
            points.push((x0, y));
            if x1 != x0 {
                points.push((x1, y));
            }
        }
    }
    points
}
