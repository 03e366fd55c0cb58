//=========================================================================
// Canvas
//=========================================================================
//
// CPU-side render target handed to the active state once per frame.
//
// The frame driver owns the canvas for the whole run and clears it
// before every render pass. How a state fills it is up to the state.
//
//=========================================================================

//=== Color ===============================================================

/// RGBA color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

//=== Canvas ==============================================================

/// Fixed-size pixel buffer, row-major, top-left origin.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Canvas {
    /// Creates a black canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::BLACK; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Fills the whole canvas with one color.
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Writes one pixel. Coordinates outside the canvas are ignored.
    pub fn put_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(index) = self.index_of(x, y) {
            self.pixels[index] = color;
        }
    }

    /// Fills a disc centered on `(cx, cy)`, clipped to the canvas.
    ///
    /// Only the part of the bounding box that overlaps the canvas is
    /// visited, so huge radii cost no more than the canvas itself.
    pub fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Color) {
        if radius < 0 || self.width == 0 || self.height == 0 {
            return;
        }

        let (cx, cy, radius) = (i64::from(cx), i64::from(cy), i64::from(radius));
        let r2 = radius * radius;

        let x_min = (cx - radius).max(0);
        let x_max = (cx + radius).min(i64::from(self.width) - 1);
        let y_min = (cy - radius).max(0);
        let y_max = (cy + radius).min(i64::from(self.height) - 1);

        for y in y_min..=y_max {
            let dy = y - cy;
            for x in x_min..=x_max {
                let dx = x - cx;
                if dx * dx + dy * dy <= r2 {
                    // in bounds after clamping
                    let index = y as usize * self.width as usize + x as usize;
                    self.pixels[index] = color;
                }
            }
        }
    }

    /// Reads one pixel, `None` outside the canvas.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index_of(x, y).map(|index| self.pixels[index])
    }

    fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        let x = u32::try_from(x).ok().filter(|&x| x < self.width)?;
        let y = u32::try_from(y).ok().filter(|&y| y < self.height)?;
        Some(y as usize * self.width as usize + x as usize)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
