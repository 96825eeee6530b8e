//! Material and print-pass unit costs for digital printing.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Print substrate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Material {
    /// Flex banner material.
    Flex,
    /// Matte-finish sticker stock.
    MatteSticker,
    /// Gloss-finish sticker stock.
    GlossSticker,
    /// Printable fabric.
    Fabric,
    /// Luminous (glow) film.
    Luminous,
    /// Backlit film.
    Backlit,
    /// Anything not covered above.
    Other,
}

impl Material {
    /// Every material, in display order.
    pub const ALL: [Material; 7] = [
        Material::Flex,
        Material::MatteSticker,
        Material::GlossSticker,
        Material::Fabric,
        Material::Luminous,
        Material::Backlit,
        Material::Other,
    ];
}

/// Print-pass tier. The number is the pass count, not a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quality {
    /// Four passes.
    #[serde(rename = "PASS_4")]
    Pass4,
    /// Six passes.
    #[serde(rename = "PASS_6")]
    Pass6,
    /// Eight passes.
    #[serde(rename = "PASS_8")]
    Pass8,
}

impl Quality {
    /// Every tier, cheapest first.
    pub const ALL: [Quality; 3] = [Quality::Pass4, Quality::Pass6, Quality::Pass8];
}

/// Cost per square foot for a material printed at a quality tier.
///
/// The match is exhaustive over both enums, so a material or tier added
/// without a price fails to compile rather than silently costing zero.
#[must_use]
pub fn unit_cost(material: Material, quality: Quality) -> Decimal {
    match material {
        Material::Flex | Material::Other => match quality {
            Quality::Pass4 => dec!(100),
            Quality::Pass6 => dec!(140),
            Quality::Pass8 => dec!(280),
        },
        Material::MatteSticker | Material::GlossSticker => match quality {
            Quality::Pass4 => dec!(150),
            Quality::Pass6 => dec!(200),
            Quality::Pass8 => dec!(280),
        },
        Material::Fabric => match quality {
            Quality::Pass4 => dec!(100),
            Quality::Pass6 => dec!(140),
            Quality::Pass8 => dec!(450),
        },
        Material::Luminous | Material::Backlit => match quality {
            Quality::Pass4 => dec!(100),
            Quality::Pass6 => dec!(140),
            Quality::Pass8 => dec!(350),
        },
    }
}

/// Total material cost for a printed area.
///
/// `square_feet` must be positive for a submittable job; that check belongs
/// to the validation layer, not here.
#[must_use]
pub fn material_cost(material: Material, quality: Quality, square_feet: Decimal) -> Decimal {
    unit_cost(material, quality) * square_feet
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_combination_has_a_positive_cost() {
        for material in Material::ALL {
            for quality in Quality::ALL {
                assert!(
                    unit_cost(material, quality) > Decimal::ZERO,
                    "{material:?}/{quality:?} must have a positive unit cost"
                );
            }
        }
    }

    #[test]
    fn spot_checks_match_the_rate_card() {
        assert_eq!(unit_cost(Material::Flex, Quality::Pass6), dec!(140));
        assert_eq!(unit_cost(Material::MatteSticker, Quality::Pass4), dec!(150));
        assert_eq!(unit_cost(Material::Fabric, Quality::Pass8), dec!(450));
        assert_eq!(unit_cost(Material::Backlit, Quality::Pass8), dec!(350));
        assert_eq!(unit_cost(Material::Other, Quality::Pass8), dec!(280));
    }

    #[test]
    fn material_cost_scales_with_area() {
        assert_eq!(
            material_cost(Material::Flex, Quality::Pass6, dec!(10)),
            dec!(1400)
        );
    }

    #[test]
    fn enums_use_backend_wire_names() -> testresult::TestResult {
        let material = serde_json::to_string(&Material::MatteSticker)?;
        let quality = serde_json::to_string(&Quality::Pass6)?;

        assert_eq!(material, r#""MATTE_STICKER""#);
        assert_eq!(quality, r#""PASS_6""#);

        Ok(())
    }
}
