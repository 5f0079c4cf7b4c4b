use super::Canvas;
use super::palette;
use crate::game::Game;
use crate::game::Matrix;
use anyhow::Context;
use image::RgbImage;
use std::path::Path;
use std::path::PathBuf;

/// Annotated grid picture of one payoff matrix.
///
/// Cells are coloured on a shared scale from the matrix minimum to its
/// maximum and annotated with their value to one decimal place. Row labels
/// run down the left edge, column labels along the bottom, and a colour bar
/// with the extreme values sits on the right.
pub struct Heatmap<'a> {
    title: String,
    matrix: &'a Matrix,
    rows: &'a [String],
    cols: &'a [String],
}

impl<'a> Heatmap<'a> {
    pub fn new(title: String, matrix: &'a Matrix, rows: &'a [String], cols: &'a [String]) -> Self {
        assert!(rows.len() == matrix.rows(), "row labels differ from matrix rows");
        assert!(cols.len() == matrix.cols(), "column labels differ from matrix columns");
        Self {
            title,
            matrix,
            rows,
            cols,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    fn annotate(value: f64) -> String {
        format!("{:.1}", value)
    }

    pub fn render(&self) -> RgbImage {
        let cell = crate::HEATMAP_CELL;
        let pad = crate::HEATMAP_PADDING;
        let bar = crate::HEATMAP_COLORBAR;
        let probe = Canvas::new(1, 1, crate::HEATMAP_SCALE);
        let (min, max) = (self.matrix.min(), self.matrix.max());
        let (lo, hi) = (Self::annotate(min), Self::annotate(max));

        let label_w = self.rows.iter().map(|r| probe.measure(r)).max().unwrap_or(0);
        let ticks_w = probe.measure(&lo).max(probe.measure(&hi));
        let header_h = probe.line() + 2 * pad;
        let footer_h = probe.line() + 2 * pad;
        let grid_x = pad + label_w + pad;
        let grid_y = header_h;
        let grid_w = self.matrix.cols() as u32 * cell;
        let grid_h = self.matrix.rows() as u32 * cell;
        let bar_x = grid_x + grid_w + pad;
        let ticks_x = bar_x + bar + pad / 2;
        let width = (ticks_x + ticks_w + pad).max(probe.measure(&self.title) + 2 * pad);
        let height = header_h + grid_h + footer_h;

        let mut canvas = Canvas::new(width, height, crate::HEATMAP_SCALE);
        canvas.centered(width / 2, header_h / 2, &self.title, palette::BLACK);
        for i in 0..self.matrix.rows() {
            let y = grid_y + i as u32 * cell;
            canvas.right(grid_x - pad, y + cell / 2, &self.rows[i], palette::BLACK);
            for j in 0..self.matrix.cols() {
                let x = grid_x + j as u32 * cell;
                let value = self.matrix.get(i, j);
                let fill = palette::color(palette::scale(value, min, max));
                canvas.fill(x, y, cell, cell, fill);
                canvas.centered(x + cell / 2, y + cell / 2, &Self::annotate(value), palette::ink(fill));
            }
        }
        for (j, label) in self.cols.iter().enumerate() {
            let x = grid_x + j as u32 * cell + cell / 2;
            canvas.centered(x, grid_y + grid_h + footer_h / 2, label, palette::BLACK);
        }
        for dy in 0..grid_h {
            let t = 1. - dy as f64 / (grid_h - 1).max(1) as f64;
            canvas.fill(bar_x, grid_y + dy, bar, 1, palette::color(t));
        }
        canvas.text(ticks_x, grid_y, &hi, palette::BLACK);
        canvas.text(ticks_x, grid_y + grid_h - canvas.line(), &lo, palette::BLACK);
        canvas.image()
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        self.render()
            .save_with_format(path, image::ImageFormat::Png)
            .with_context(|| format!("write heatmap {}", path.display()))?;
        log::info!("{:<32}{}", "saved heatmap", path.display());
        Ok(())
    }
}

/// `<game>_P1_heatmap.png` and `<game>_P2_heatmap.png` inside `dir`
pub fn paths(game: &Game, dir: &Path) -> [PathBuf; 2] {
    [
        dir.join(format!("{}_P1_heatmap.png", game.name())),
        dir.join(format!("{}_P2_heatmap.png", game.name())),
    ]
}

/// render and write both players' heatmaps for one game
pub fn heatmaps(game: &Game, dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let [p1, p2] = paths(game, dir);
    let rows = game.row_labels();
    let cols = game.col_labels();
    Heatmap::new(format!("P1 Payoff Heatmap: {}", game.name()), game.p1(), rows, cols).save(&p1)?;
    Heatmap::new(format!("P2 Payoff Heatmap: {}", game.name()), game.p2(), rows, cols).save(&p2)?;
    Ok(vec![p1, p2])
}
