//! Maze panel: draws the grid's walls onto the central panel.
//!
//! This is the whole render adapter. It walks `Grid::tiles` and paints
//! filled strips for each present wall bit, plus the corner dots when
//! enabled. It never mutates the grid and holds no per-frame state, so
//! repaints after expose, resize or regeneration all go through the
//! same path.

use eframe::egui::{self, Color32, Painter, Pos2, Rect};

use crate::config::MazeConfig;
use crate::maze::{Grid, Walls};

pub struct MazePanel {
    cell_width: u32,
    cell_height: u32,
    wall_thickness: f32,
    wall_color: Color32,
    background: Color32,
    corner_dots: bool,
}

impl MazePanel {
    pub fn new(config: &MazeConfig) -> Self {
        Self {
            cell_width: config.cell_width,
            cell_height: config.cell_height,
            wall_thickness: config.wall_thickness as f32,
            wall_color: color32(config.wall_color),
            background: color32(config.background_color),
            corner_dots: config.corner_dots,
        }
    }

    /// Paints the maze for this frame.
    pub fn show(&self, ctx: &egui::Context, grid: &Grid) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(self.background))
            .show(ctx, |ui| {
                let rect = ui.available_rect_before_wrap();
                let painter = ui.painter_at(rect);

                for (_, walls, (px, py)) in grid.tiles(self.cell_width, self.cell_height) {
                    let min = Pos2::new(rect.min.x + px as f32, rect.min.y + py as f32);
                    self.draw_tile(&painter, min, walls);
                }
            });
    }

    fn draw_tile(&self, painter: &Painter, min: Pos2, walls: Walls) {
        let w = self.cell_width as f32;
        let h = self.cell_height as f32;
        let t = self.wall_thickness;

        let strip = |x: f32, y: f32, sw: f32, sh: f32| {
            Rect::from_min_size(Pos2::new(x, y), egui::vec2(sw, sh))
        };

        if self.corner_dots && walls.contains(Walls::DOT) {
            painter.rect_filled(strip(min.x, min.y, t, t), 0.0, self.wall_color);
            painter.rect_filled(strip(min.x + w - t, min.y, t, t), 0.0, self.wall_color);
            painter.rect_filled(strip(min.x, min.y + h - t, t, t), 0.0, self.wall_color);
            painter.rect_filled(
                strip(min.x + w - t, min.y + h - t, t, t),
                0.0,
                self.wall_color,
            );
        }

        if walls.contains(Walls::LEFT) {
            painter.rect_filled(strip(min.x, min.y, t, h), 0.0, self.wall_color);
        }
        if walls.contains(Walls::RIGHT) {
            painter.rect_filled(strip(min.x + w - t, min.y, t, h), 0.0, self.wall_color);
        }
        if walls.contains(Walls::TOP) {
            painter.rect_filled(strip(min.x, min.y, w, t), 0.0, self.wall_color);
        }
        if walls.contains(Walls::BOTTOM) {
            painter.rect_filled(strip(min.x, min.y + h - t, w, t), 0.0, self.wall_color);
        }
    }
}

fn color32(rgb: u32) -> Color32 {
    Color32::from_rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color32_unpacks_rgb() {
        assert_eq!(color32(0x70_7070), Color32::from_rgb(0x70, 0x70, 0x70));
        assert_eq!(color32(0x28_2828), Color32::from_rgb(0x28, 0x28, 0x28));
        assert_eq!(color32(0xFF_0001), Color32::from_rgb(0xFF, 0x00, 0x01));
    }
}
