use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Difficulty ramp
// ---------------------------------------------------------------------------

/// Generates `n` colours running from green (easiest) to red (hardest).
pub fn difficulty_ramp(n: usize) -> Vec<Color32> {
    (0..n)
        .map(|i| {
            let t = if n > 1 { i as f32 / (n - 1) as f32 } else { 0.0 };
            let hue = 130.0 * (1.0 - t);
            let hsl = Hsl::new(hue, 0.65, 0.42);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Level badge colours
// ---------------------------------------------------------------------------

/// Maps each ILR level of a collection to a badge colour. Levels are spread
/// over the ramp in their sorted order; the empty level is drawn grey.
#[derive(Debug, Clone, Default)]
pub struct LevelColors {
    mapping: BTreeMap<String, Color32>,
}

impl LevelColors {
    pub fn new(levels: &BTreeSet<String>) -> Self {
        let graded: Vec<&String> = levels.iter().filter(|l| !l.is_empty()).collect();
        let mapping = graded
            .iter()
            .zip(difficulty_ramp(graded.len()))
            .map(|(level, color)| ((*level).clone(), color))
            .collect();
        LevelColors { mapping }
    }

    pub fn color_for(&self, level: &str) -> Color32 {
        self.mapping.get(level).copied().unwrap_or(Color32::GRAY)
    }
}
