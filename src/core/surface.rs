/// Drawing collaborator consumed by every scene.
///
/// Scenes work in a fixed logical window space (`WINDOW_WIDTH` x `WINDOW_HEIGHT`);
/// the surface decides how those coordinates land on the real output.
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;

use crate::core::assets::Image;
use crate::core::window::{WINDOW_HEIGHT, WINDOW_WIDTH};

/// Ink used for text and image strokes.
pub const INK: Color = Color::Rgb(0, 0, 0);

/// Axis-aligned rectangle in logical window coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Inclusive on every edge: corners and edge midpoints count as inside.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }

    pub fn center(&self) -> (i32, i32) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }
}

/// Measured extent of a run of text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextSize {
    pub width: i32,
    pub height: i32,
}

pub trait Surface {
    fn fill_rect(&mut self, bounds: Bounds, color: Color);

    fn fill_round_rect(&mut self, bounds: Bounds, color: Color);

    fn stroke_round_rect(&mut self, bounds: Bounds, color: Color);

    /// Draws `image` with its top-left corner at `(x, y)`. A missing image draws nothing.
    fn draw_image(&mut self, image: Option<&Image>, x: i32, y: i32);

    /// Draws `text` with its top-left corner at `(x, y)`.
    fn fill_text(&mut self, text: &str, x: i32, y: i32, color: Color);

    fn measure_text(&self, text: &str) -> TextSize;
}

/// Widest line of `image` as measured by `surface`.
pub fn image_width(surface: &dyn Surface, image: &Image) -> i32 {
    image
        .lines()
        .iter()
        .map(|line| surface.measure_text(line).width)
        .max()
        .unwrap_or(0)
}

/// Logical coordinate of the center of cell `index` when `cells` cells span `extent` units.
/// Shared by pointer input and filled shapes.
pub fn cell_center(index: i32, cells: i32, extent: i32) -> i32 {
    (2 * index + 1) * extent / (2 * cells)
}

/// Cells `[start, end)` whose centers fall inside `[from, to]`; empty when none do.
fn cell_span(from: i32, to: i32, cells: i32, extent: i32) -> (i32, i32) {
    let mut inside = (0..cells).filter(|&c| (from..=to).contains(&cell_center(c, cells, extent)));
    match inside.next() {
        Some(start) => (start, inside.last().unwrap_or(start) + 1),
        None => (0, 0),
    }
}

/// Surface backed by a ratatui buffer. Logical coordinates are scaled onto the cells of `area`.
pub struct TerminalSurface<'a> {
    buf: &'a mut Buffer,
    area: Rect,
}

impl<'a> TerminalSurface<'a> {
    pub fn new(buf: &'a mut Buffer, area: Rect) -> Self {
        Self { buf, area }
    }

    fn column(&self, x: i32) -> i32 {
        i32::from(self.area.x) + x * i32::from(self.area.width) / WINDOW_WIDTH
    }

    fn row(&self, y: i32) -> i32 {
        i32::from(self.area.y) + y * i32::from(self.area.height) / WINDOW_HEIGHT
    }

    /// Columns `[start, end)` painted for a logical span: exactly the cells a click would hit.
    fn columns(&self, x: i32, width: i32) -> (i32, i32) {
        let (start, end) = cell_span(x, x + width, i32::from(self.area.width), WINDOW_WIDTH);
        (i32::from(self.area.x) + start, i32::from(self.area.x) + end)
    }

    fn rows(&self, y: i32, height: i32) -> (i32, i32) {
        let (start, end) = cell_span(y, y + height, i32::from(self.area.height), WINDOW_HEIGHT);
        (i32::from(self.area.y) + start, i32::from(self.area.y) + end)
    }

    fn in_area(&self, col: i32, row: i32) -> bool {
        let right = i32::from(self.area.x) + i32::from(self.area.width);
        let bottom = i32::from(self.area.y) + i32::from(self.area.height);
        col >= i32::from(self.area.x) && col < right && row >= i32::from(self.area.y) && row < bottom
    }

    fn put(&mut self, col: i32, row: i32, symbol: char, fg: Option<Color>, bg: Option<Color>) {
        if !self.in_area(col, row) {
            return;
        }
        // in_area guarantees both coordinates fit in u16
        if let Some(cell) = self.buf.cell_mut((col as u16, row as u16)) {
            cell.set_char(symbol);
            if let Some(fg) = fg {
                cell.set_fg(fg);
            }
            if let Some(bg) = bg {
                cell.set_bg(bg);
            }
        }
    }
}

impl Surface for TerminalSurface<'_> {
    fn fill_rect(&mut self, bounds: Bounds, color: Color) {
        let (c0, c1) = self.columns(bounds.x, bounds.width);
        let (r0, r1) = self.rows(bounds.y, bounds.height);
        for row in r0..r1 {
            for col in c0..c1 {
                self.put(col, row, ' ', None, Some(color));
            }
        }
    }

    fn fill_round_rect(&mut self, bounds: Bounds, color: Color) {
        // cells have no sub-cell corners to round off
        self.fill_rect(bounds, color);
    }

    fn stroke_round_rect(&mut self, bounds: Bounds, color: Color) {
        let (c0, c1) = self.columns(bounds.x, bounds.width);
        let (r0, r1) = self.rows(bounds.y, bounds.height);
        // a border on a single row or column would hide whatever is drawn inside
        if c1 - c0 < 2 || r1 - r0 < 2 {
            return;
        }
        let (right, bottom) = (c1 - 1, r1 - 1);
        for col in c0 + 1..right {
            self.put(col, r0, '─', Some(color), None);
            self.put(col, bottom, '─', Some(color), None);
        }
        for row in r0 + 1..bottom {
            self.put(c0, row, '│', Some(color), None);
            self.put(right, row, '│', Some(color), None);
        }
        self.put(c0, r0, '╭', Some(color), None);
        self.put(right, r0, '╮', Some(color), None);
        self.put(c0, bottom, '╰', Some(color), None);
        self.put(right, bottom, '╯', Some(color), None);
    }

    fn draw_image(&mut self, image: Option<&Image>, x: i32, y: i32) {
        let Some(image) = image else { return };
        let (col, row) = (self.column(x), self.row(y));
        for (dy, line) in image.lines().iter().enumerate() {
            for (dx, symbol) in line.chars().enumerate() {
                // blanks stay transparent so the scene background shows through
                if symbol != ' ' {
                    self.put(col + dx as i32, row + dy as i32, symbol, Some(INK), None);
                }
            }
        }
    }

    fn fill_text(&mut self, text: &str, x: i32, y: i32, color: Color) {
        let (col, row) = (self.column(x), self.row(y));
        for (dx, symbol) in text.chars().enumerate() {
            self.put(col + dx as i32, row, symbol, Some(color), None);
        }
    }

    fn measure_text(&self, text: &str) -> TextSize {
        if self.area.width == 0 || self.area.height == 0 {
            return TextSize::default();
        }
        let cell_width = WINDOW_WIDTH / i32::from(self.area.width);
        let cell_height = WINDOW_HEIGHT / i32::from(self.area.height);
        TextSize {
            width: text.chars().count() as i32 * cell_width,
            height: cell_height,
        }
    }
}
