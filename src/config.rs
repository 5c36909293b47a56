use crate::error::{PostergridError, PostergridResult};

/// Inter-block spacing is this many narrow gaps wide. Separates
/// semantically distinct sections (primary poster, collection columns,
/// standalones) from posters that belong together.
pub const WIDE_GAP_FACTOR: u32 = 10;

/// Standard theatrical poster aspect ratio, width over height.
pub const POSTER_ASPECT: f64 = 2.0 / 3.0;

/// Layout parameters for one generation run.
///
/// Passed explicitly into every engine entry point; there is no global
/// configuration state.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct LayoutConfig {
    /// Width in pixels every non-primary poster is resized to.
    pub base_width: u32,
    /// Narrow gap in pixels between posters inside a column.
    pub gap: u32,
    /// Number of collection columns in the multi-collection display.
    pub columns: u32,
    /// Target width/height ratio for the optimal-rows search.
    pub target_ratio: f64,
    /// JPEG quality for the final output (1-100).
    pub jpeg_quality: u8,
}

impl LayoutConfig {
    /// Defaults for the multi-collection display.
    pub fn collections() -> Self {
        Self {
            base_width: 600,
            gap: 20,
            columns: 2,
            target_ratio: 16.0 / 9.0,
            jpeg_quality: 85,
        }
    }

    /// Defaults for the pretty (optimal-rows) display.
    pub fn pretty() -> Self {
        Self {
            gap: 10,
            ..Self::collections()
        }
    }

    pub fn validate(&self) -> PostergridResult<()> {
        if self.base_width == 0 {
            return Err(PostergridError::config("base width must be > 0"));
        }
        if self.gap == 0 {
            return Err(PostergridError::config("gap must be > 0"));
        }
        if self.columns == 0 {
            return Err(PostergridError::config("column count must be > 0"));
        }
        if !self.target_ratio.is_finite() || self.target_ratio <= 0.0 {
            return Err(PostergridError::config("target aspect ratio must be > 0"));
        }
        if self.jpeg_quality == 0 || self.jpeg_quality > 100 {
            return Err(PostergridError::config("jpeg quality must be in 1..=100"));
        }
        Ok(())
    }

    /// Wide gap in pixels between major layout blocks.
    pub fn wide_gap(&self) -> u32 {
        self.gap * WIDE_GAP_FACTOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        LayoutConfig::collections().validate().unwrap();
        LayoutConfig::pretty().validate().unwrap();
    }

    #[test]
    fn variant_defaults_differ_only_in_gap() {
        let c = LayoutConfig::collections();
        let p = LayoutConfig::pretty();
        assert_eq!(c.gap, 20);
        assert_eq!(p.gap, 10);
        assert_eq!(c.base_width, p.base_width);
        assert_eq!(c.columns, p.columns);
    }

    #[test]
    fn malformed_configs_are_rejected() {
        let mut cfg = LayoutConfig::collections();
        cfg.columns = 0;
        assert!(cfg.validate().is_err());

        let mut cfg = LayoutConfig::collections();
        cfg.base_width = 0;
        assert!(cfg.validate().is_err());

        let mut cfg = LayoutConfig::collections();
        cfg.target_ratio = 0.0;
        assert!(cfg.validate().is_err());

        let mut cfg = LayoutConfig::collections();
        cfg.jpeg_quality = 0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn wide_gap_is_ten_narrow_gaps() {
        assert_eq!(LayoutConfig::collections().wide_gap(), 200);
        assert_eq!(LayoutConfig::pretty().wide_gap(), 100);
    }
}
