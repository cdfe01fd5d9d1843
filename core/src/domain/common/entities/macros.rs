use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
pub const KCAL_PER_GRAM_CARB: f64 = 4.0;
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Macro amounts in grams, with an optional energy figure.
///
/// `kcal` may be supplied independently of the gram values and is never
/// recomputed over a supplied value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct Macros {
    pub protein_g: f64,
    pub fat_g: f64,
    pub carb_g: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kcal: Option<f64>,
}

impl Macros {
    pub fn new(protein_g: f64, fat_g: f64, carb_g: f64) -> Self {
        Self {
            protein_g,
            fat_g,
            carb_g,
            kcal: None,
        }
    }

    pub fn with_kcal(mut self, kcal: f64) -> Self {
        self.kcal = Some(kcal);
        self
    }

    /// Energy implied by the gram values alone.
    pub fn derived_kcal(&self) -> f64 {
        KCAL_PER_GRAM_PROTEIN * self.protein_g
            + KCAL_PER_GRAM_FAT * self.fat_g
            + KCAL_PER_GRAM_CARB * self.carb_g
    }

    /// The supplied `kcal` when present, otherwise the derived figure.
    pub fn kcal_or_derived(&self) -> f64 {
        self.kcal.unwrap_or_else(|| self.derived_kcal())
    }
}

/// Macro amounts where the energy figure is mandatory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct MacroTargets {
    pub kcal: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub carb_g: f64,
}

impl From<MacroTargets> for Macros {
    fn from(value: MacroTargets) -> Self {
        Macros::new(value.protein_g, value.fat_g, value.carb_g).with_kcal(value.kcal)
    }
}
