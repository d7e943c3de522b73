// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the application's visual scales.
//!
//! # Organization
//!
//! - **Opacity**: Standardized opacity levels
//! - **Spacing**: Spacing scale (8px grid)
//! - **Sizing**: Component sizes
//! - **Typography**: Font size scale
//! - **Radius**: Border radii
//!
//! Tokens are designed to be consistent. Before modifying, check the impact
//! on all components and maintain the ratios (e.g., MD = XS * 2).

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OPAQUE: f32 = 1.0;

    /// Surface background - Semi-transparent panels and containers
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Height of the top navigation bar.
    pub const NAVBAR_HEIGHT: f32 = 48.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Medium title - App name, prominent labels
    pub const TITLE_MD: f32 = 20.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Caption - Badges, timestamps, small info
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XXS > 0.0);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Typography validation
    assert!(typography::TITLE_MD > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    // Radius validation
    assert!(radius::MD > radius::SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn navbar_fits_a_title_row() {
        assert!(sizing::NAVBAR_HEIGHT > typography::TITLE_MD + 2.0 * spacing::SM);
    }
}
