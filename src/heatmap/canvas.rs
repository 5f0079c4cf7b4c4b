use super::font;
use image::Rgb;
use image::RgbImage;

/// Raster surface with rectangle fills and bitmap text.
pub struct Canvas {
    image: RgbImage,
    scale: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32, scale: u32) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, super::WHITE),
            scale,
        }
    }
    pub fn width(&self) -> u32 {
        self.image.width()
    }
    pub fn height(&self) -> u32 {
        self.image.height()
    }
    /// pixel width of `text` at this canvas' scale
    pub fn measure(&self, text: &str) -> u32 {
        font::width(text) * self.scale
    }
    /// pixel height of one line of text
    pub fn line(&self) -> u32 {
        font::GLYPH_H * self.scale
    }
    /// clipped to the canvas
    pub fn fill(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgb<u8>) {
        let x1 = (x + w).min(self.width());
        let y1 = (y + h).min(self.height());
        for py in y..y1 {
            for px in x..x1 {
                self.image.put_pixel(px, py, color);
            }
        }
    }
    /// text with its top-left corner at (x, y)
    pub fn text(&mut self, x: u32, y: u32, text: &str, color: Rgb<u8>) {
        let s = self.scale;
        for (k, c) in text.chars().enumerate() {
            let origin = x + k as u32 * font::ADVANCE * s;
            for gy in 0..font::GLYPH_H {
                for gx in 0..font::GLYPH_W {
                    if font::inked(c, gx, gy) {
                        self.fill(origin + gx * s, y + gy * s, s, s, color);
                    }
                }
            }
        }
    }
    /// text centred on (cx, cy)
    pub fn centered(&mut self, cx: u32, cy: u32, text: &str, color: Rgb<u8>) {
        let x = cx.saturating_sub(self.measure(text) / 2);
        let y = cy.saturating_sub(self.line() / 2);
        self.text(x, y, text, color);
    }
    /// text whose right edge sits at x, vertically centred on cy
    pub fn right(&mut self, x: u32, cy: u32, text: &str, color: Rgb<u8>) {
        let x = x.saturating_sub(self.measure(text));
        let y = cy.saturating_sub(self.line() / 2);
        self.text(x, y, text, color);
    }
    pub fn pixel(&self, x: u32, y: u32) -> Rgb<u8> {
        *self.image.get_pixel(x, y)
    }
    pub fn image(self) -> RgbImage {
        self.image
    }
}
