//! Font sizes and spacing for generated slides.

/// Fixed text styling, in points.
///
/// Every size is smaller than the master defaults so generated bullets fit
/// without autofit kicking in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideStyle {
    /// Title on the opening slide.
    pub title_size: u32,
    /// Subtitle on the opening slide.
    pub subtitle_size: u32,
    /// Title on content slides.
    pub heading_size: u32,
    /// Bullet text on content slides.
    pub bullet_size: u32,
    /// Space after each bullet paragraph.
    pub bullet_space_after: u32,
}

impl Default for SlideStyle {
    fn default() -> Self {
        Self {
            title_size: 32,
            subtitle_size: 18,
            heading_size: 24,
            bullet_size: 14,
            bullet_space_after: 12,
        }
    }
}

/// DrawingML expresses font sizes and point spacing in hundredths of a point.
pub(crate) fn hundredths(points: u32) -> u32 {
    points * 100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let style = SlideStyle::default();
        assert_eq!(style.title_size, 32);
        assert_eq!(style.subtitle_size, 18);
        assert_eq!(style.heading_size, 24);
        assert_eq!(style.bullet_size, 14);
        assert_eq!(style.bullet_space_after, 12);
    }

    #[test]
    fn test_hundredths() {
        assert_eq!(hundredths(14), 1400);
    }
}
