/// Character-cell drawing surface for terminal output
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use painter_core::Surface;
use std::io::Write;

/// Character luminosity ramp for shading (darkest to lightest)
const LUMINOSITY_RAMP: &[char] = &['.', ':', '-', '=', '+', '*', '#', '%', '@'];

#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    character: char,
    level: u8,
}

/// A grid of terminal cells addressed in logical pixel coordinates.
///
/// The logical size is whatever the last `clear` asked for; every cell
/// samples the logical point at its center.
pub struct CellCanvas {
    columns: usize,
    rows: usize,
    logical: (f64, f64),
    cells: Vec<Option<Cell>>,
    path: Vec<(f64, f64)>,
    fill: (u8, u8, u8),
}

impl CellCanvas {
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            columns,
            rows,
            logical: (columns as f64, rows as f64),
            cells: vec![None; columns * rows],
            path: Vec::new(),
            fill: (0, 0, 0),
        }
    }

    pub fn size(&self) -> (usize, usize) {
        (self.columns, self.rows)
    }

    /// Character at a cell, or a space when nothing was painted there
    pub fn char_at(&self, column: usize, row: usize) -> char {
        self.cells[row * self.columns + column].map_or(' ', |cell| cell.character)
    }

    fn to_logical(&self, column: usize, row: usize) -> (f64, f64) {
        (
            (column as f64 + 0.5) * self.logical.0 / self.columns as f64,
            (row as f64 + 0.5) * self.logical.1 / self.rows as f64,
        )
    }

    fn to_cell(&self, point: (f64, f64)) -> (f64, f64) {
        (
            point.0 * self.columns as f64 / self.logical.0,
            point.1 * self.rows as f64 / self.logical.1,
        )
    }

    fn shade(&self) -> Cell {
        let (r, g, b) = self.fill;
        let level = ((r as u16 + g as u16 + b as u16) / 3) as u8;
        let index = level as usize * (LUMINOSITY_RAMP.len() - 1) / 255;
        Cell {
            character: LUMINOSITY_RAMP[index],
            level,
        }
    }

    fn rasterize_triangle(&mut self, v0: (f64, f64), v1: (f64, f64), v2: (f64, f64), cell: Cell) {
        // Bounding box in cell space
        let corners = [self.to_cell(v0), self.to_cell(v1), self.to_cell(v2)];
        let min_x = corners.iter().map(|c| c.0).fold(f64::INFINITY, f64::min).floor();
        let max_x = corners.iter().map(|c| c.0).fold(f64::NEG_INFINITY, f64::max).ceil();
        let min_y = corners.iter().map(|c| c.1).fold(f64::INFINITY, f64::min).floor();
        let max_y = corners.iter().map(|c| c.1).fold(f64::NEG_INFINITY, f64::max).ceil();

        // Clip to screen bounds
        let min_x = min_x.max(0.0) as usize;
        let min_y = min_y.max(0.0) as usize;
        let max_x = (max_x.max(0.0) as usize).min(self.columns);
        let max_y = (max_y.max(0.0) as usize).min(self.rows);

        for row in min_y..max_y {
            for column in min_x..max_x {
                let p = self.to_logical(column, row);
                if let Some((w0, w1, w2)) = barycentric(v0, v1, v2, p) {
                    if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                        // Later fills overwrite earlier ones
                        self.cells[row * self.columns + column] = Some(cell);
                    }
                }
            }
        }
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for row in 0..self.rows {
            writer.queue(cursor::MoveTo(0, row as u16))?;
            for column in 0..self.columns {
                match self.cells[row * self.columns + column] {
                    Some(Cell { character, level }) => {
                        writer.queue(SetForegroundColor(Color::Rgb {
                            r: level,
                            g: level,
                            b: level,
                        }))?;
                        writer.queue(Print(character))?;
                    }
                    None => {
                        writer.queue(Print(' '))?;
                    }
                }
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

impl Surface for CellCanvas {
    fn clear(&mut self, width: f64, height: f64) {
        self.logical = (width, height);
        self.cells.iter_mut().for_each(|cell| *cell = None);
        self.path.clear();
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.path.clear();
        self.path.push((x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.path.push((x, y));
    }

    fn close_path(&mut self) {}

    fn set_fill_color(&mut self, r: u8, g: u8, b: u8) {
        self.fill = (r, g, b);
    }

    fn fill(&mut self) {
        if self.path.len() < 3 {
            return;
        }
        let cell = self.shade();
        let path = std::mem::take(&mut self.path);
        for pair in path[1..].windows(2) {
            self.rasterize_triangle(path[0], pair[0], pair[1], cell);
        }
        self.path = path;
    }
}

/// Calculate barycentric coordinates for a point in a triangle
fn barycentric(
    v0: (f64, f64),
    v1: (f64, f64),
    v2: (f64, f64),
    p: (f64, f64),
) -> Option<(f64, f64, f64)> {
    let denom = (v1.1 - v2.1) * (v0.0 - v2.0) + (v2.0 - v1.0) * (v0.1 - v2.1);

    if denom.abs() < 1e-9 {
        return None;
    }

    let w0 = ((v1.1 - v2.1) * (p.0 - v2.0) + (v2.0 - v1.0) * (p.1 - v2.1)) / denom;
    let w1 = ((v2.1 - v0.1) * (p.0 - v2.0) + (v0.0 - v2.0) * (p.1 - v2.1)) / denom;
    let w2 = 1.0 - w0 - w1;

    Some((w0, w1, w2))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_triangle(canvas: &mut CellCanvas, points: [(f64, f64); 3], level: u8) {
        canvas.begin_path();
        canvas.move_to(points[0].0, points[0].1);
        canvas.line_to(points[1].0, points[1].1);
        canvas.line_to(points[2].0, points[2].1);
        canvas.close_path();
        canvas.set_fill_color(level, level, level);
        canvas.fill();
    }

    #[test]
    fn test_fill_covers_interior_only() {
        let mut canvas = CellCanvas::new(10, 10);
        canvas.clear(10.0, 10.0);
        fill_triangle(&mut canvas, [(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)], 255);

        assert_eq!(canvas.char_at(0, 0), '@');
        assert_eq!(canvas.char_at(9, 9), ' ');
    }

    #[test]
    fn test_winding_does_not_matter() {
        let mut canvas = CellCanvas::new(10, 10);
        canvas.clear(10.0, 10.0);
        fill_triangle(&mut canvas, [(0.0, 10.0), (10.0, 0.0), (0.0, 0.0)], 0);
        assert_eq!(canvas.char_at(1, 1), '.');
    }

    #[test]
    fn test_later_fill_overwrites() {
        let mut canvas = CellCanvas::new(4, 4);
        canvas.clear(4.0, 4.0);
        let square_half = [(0.0, 0.0), (4.0, 0.0), (0.0, 4.0)];
        fill_triangle(&mut canvas, square_half, 0);
        fill_triangle(&mut canvas, square_half, 255);
        assert_eq!(canvas.char_at(0, 0), '@');
    }

    #[test]
    fn test_logical_size_scales_to_cells() {
        let mut canvas = CellCanvas::new(8, 6);
        canvas.clear(800.0, 600.0);
        fill_triangle(&mut canvas, [(400.0, 0.0), (800.0, 0.0), (800.0, 600.0)], 255);
        assert_eq!(canvas.char_at(7, 0), '@');
        assert_eq!(canvas.char_at(0, 5), ' ');

        canvas.clear(800.0, 600.0);
        assert_eq!(canvas.char_at(7, 0), ' ');
    }

    #[test]
    fn test_offscreen_fill_is_clipped() {
        let mut canvas = CellCanvas::new(4, 4);
        canvas.clear(4.0, 4.0);
        fill_triangle(&mut canvas, [(-50.0, -50.0), (-10.0, -50.0), (-50.0, -10.0)], 255);
        fill_triangle(&mut canvas, [(50.0, 50.0), (90.0, 50.0), (50.0, 90.0)], 255);
        assert!((0..4).all(|y| (0..4).all(|x| canvas.char_at(x, y) == ' ')));
    }
}
