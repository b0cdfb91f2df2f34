//! Scored options plotted on the decision matrix.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::OptionId;

/// Anything with a benefit score (higher is better) and a cost score
/// (lower is better).
pub trait Scored {
    fn benefit(&self) -> f64;
    fn cost(&self) -> f64;
}

/// `(benefit, cost)` pairs.
impl Scored for (f64, f64) {
    fn benefit(&self) -> f64 {
        self.0
    }

    fn cost(&self) -> f64 {
        self.1
    }
}

impl<T: Scored + ?Sized> Scored for &T {
    fn benefit(&self) -> f64 {
        (**self).benefit()
    }

    fn cost(&self) -> f64 {
        (**self).cost()
    }
}

/// A named colour from the option palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaletteColor {
    pub name: &'static str,
    pub hex: &'static str,
}

/// Colours assigned to options in order of creation.
pub const PALETTE: [PaletteColor; 8] = [
    PaletteColor { name: "gray", hex: "#808080" },
    PaletteColor { name: "purple", hex: "#9370DB" },
    PaletteColor { name: "yellow", hex: "#FFD700" },
    PaletteColor { name: "green", hex: "#32CD32" },
    PaletteColor { name: "blue", hex: "#4169E1" },
    PaletteColor { name: "coral", hex: "#FF7F50" },
    PaletteColor { name: "teal", hex: "#20B2AA" },
    PaletteColor { name: "pink", hex: "#FF69B4" },
];

/// Palette colour for the option added when `count` options already exist.
pub fn palette_color(count: usize) -> &'static PaletteColor {
    &PALETTE[count % PALETTE.len()]
}

/// An option on the matrix: `x` is benefit, `y` is cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredOption {
    id: OptionId,
    name: String,
    x: f64,
    y: f64,
    color: String,
}

impl ScoredOption {
    pub(crate) fn new(name: impl Into<String>, x: f64, y: f64, color: impl Into<String>) -> Self {
        Self {
            id: OptionId::new(),
            name: name.into(),
            x,
            y,
            color: color.into(),
        }
    }

    pub fn id(&self) -> &OptionId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub(crate) fn move_to(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }
}

impl Scored for ScoredOption {
    fn benefit(&self) -> f64 {
        self.x
    }

    fn cost(&self) -> f64 {
        self.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_cycles_by_count() {
        assert_eq!(palette_color(0).hex, "#808080");
        assert_eq!(palette_color(4).name, "blue");
        assert_eq!(palette_color(8), palette_color(0));
        assert_eq!(palette_color(13).name, "coral");
    }

    #[test]
    fn scored_option_maps_x_to_benefit_and_y_to_cost() {
        let option = ScoredOption::new("Outsource", 6.0, 4.0, "#4169E1");
        assert_eq!(option.benefit(), 6.0);
        assert_eq!(option.cost(), 4.0);
    }
}
