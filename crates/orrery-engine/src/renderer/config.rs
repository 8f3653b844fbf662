use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::components::color::Color;

/// Page margins around the plot area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub left: u32,
    pub right: u32,
    pub bottom: u32,
    pub top: u32,
}

/// Fixed scene configuration handed to the renderer with every frame.
///
/// The engine never renders; it only supplies these values so every frame
/// is viewed through the same box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    pub title: String,
    /// Viewport width in pixels.
    pub width: u32,
    /// Viewport height in pixels.
    pub height: u32,
    pub x_range: [f32; 2],
    pub y_range: [f32; 2],
    pub z_range: [f32; 2],
    /// Relative on-screen length of the x, y and z axes.
    pub aspect_ratio: [f32; 3],
    pub axes_visible: bool,
    pub background: Color,
    pub paper_background: Color,
    pub margins: Margins,
    pub show_legend: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        let space = Color::rgb8(0x0E, 0x11, 0x17);
        Self {
            title: "Interactive Solar System Simulation".to_string(),
            width: 1000,
            height: 800,
            x_range: [-150.0, 150.0],
            y_range: [-150.0, 150.0],
            z_range: [-100.0, 100.0],
            aspect_ratio: [1.0, 1.0, 0.6],
            axes_visible: false,
            background: space,
            paper_background: space,
            margins: Margins {
                left: 0,
                right: 0,
                bottom: 0,
                top: 40,
            },
            show_legend: false,
        }
    }
}

impl SceneConfig {
    /// Lower corner of the view box.
    pub fn min_corner(&self) -> Vec3 {
        Vec3::new(self.x_range[0], self.y_range[0], self.z_range[0])
    }

    /// Upper corner of the view box.
    pub fn max_corner(&self) -> Vec3 {
        Vec3::new(self.x_range[1], self.y_range[1], self.z_range[1])
    }

    /// Check if a world-space point falls inside the axis ranges.
    pub fn contains(&self, point: Vec3) -> bool {
        let lo = self.min_corner();
        let hi = self.max_corner();
        point.cmpge(lo).all() && point.cmple(hi).all()
    }

    /// Map the axis box onto a centered box whose half-extents are the
    /// aspect ratio normalized to its longest axis (1, 1, 0.6 by default).
    pub fn view_box_matrix(&self) -> Mat4 {
        let lo = self.min_corner();
        let hi = self.max_corner();
        let center = (lo + hi) * 0.5;
        let half = (hi - lo) * 0.5;
        let aspect = Vec3::from_array(self.aspect_ratio);
        // Scale each axis so the box spans its aspect share of [-1, 1].
        let longest = aspect.max_element();
        let scale = aspect / (half * longest);
        Mat4::from_scale(scale) * Mat4::from_translation(-center)
    }
}
