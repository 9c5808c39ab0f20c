//! Builder patterns for avatar options.
//!
//! # Size Profiles
//!
//! | Profile | Size |
//! |---------|------|
//! | `new()` | generator default |
//! | `small()` | 64 px |
//! | `medium()` | 128 px |
//! | `large()` | 256 px |
//!
//! # Example
//!
//! ```rust
//! use seapair::prelude::*;
//!
//! let options = AvatarOptionsBuilder::medium()
//!     .round(true)
//!     .draw(DrawStyle::Squares)
//!     .build();
//! assert_eq!(options.size, Some(128));
//!
//! // Style names from user input: unknown names fall back to the default.
//! let options = AvatarOptionsBuilder::new().draw_name("hexagons").build();
//! assert_eq!(options.draw, None);
//! ```

#![cfg(feature = "avatar")]

use crate::core::operations::avatar::{AvatarOptions, DrawStyle};

/// Builder for [`AvatarOptions`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AvatarOptionsBuilder {
    options: AvatarOptions,
}

impl AvatarOptionsBuilder {
    /// Creates a builder with every option left to the generator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            options: AvatarOptions {
                size: None,
                round: false,
                dark: false,
                reflect: false,
                draw: None,
            },
        }
    }

    /// Small profile: 64 px.
    #[must_use]
    pub const fn small() -> Self {
        Self::new().size(64)
    }

    /// Medium profile: 128 px.
    #[must_use]
    pub const fn medium() -> Self {
        Self::new().size(128)
    }

    /// Large profile: 256 px.
    #[must_use]
    pub const fn large() -> Self {
        Self::new().size(256)
    }

    /// Sets the image size in pixels.
    #[must_use]
    pub const fn size(mut self, size: u32) -> Self {
        self.options.size = Some(size);
        self
    }

    /// Rounds the image element's corners fully.
    #[must_use]
    pub const fn round(mut self, round: bool) -> Self {
        self.options.round = round;
        self
    }

    /// Selects the dark theme.
    #[must_use]
    pub const fn dark(mut self, dark: bool) -> Self {
        self.options.dark = dark;
        self
    }

    /// Mirrors the pattern.
    #[must_use]
    pub const fn reflect(mut self, reflect: bool) -> Self {
        self.options.reflect = reflect;
        self
    }

    /// Sets the drawing style.
    #[must_use]
    pub const fn draw(mut self, draw: DrawStyle) -> Self {
        self.options.draw = Some(draw);
        self
    }

    /// Sets the drawing style by name. Names other than `"circles"` and
    /// `"squares"` clear the style.
    #[must_use]
    pub fn draw_name(mut self, name: &str) -> Self {
        self.options.draw = DrawStyle::parse(name);
        self
    }

    /// Returns the configured options.
    #[must_use]
    pub const fn build(self) -> AvatarOptions {
        self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles() {
        assert_eq!(AvatarOptionsBuilder::new().build().size, None);
        assert_eq!(AvatarOptionsBuilder::small().build().size, Some(64));
        assert_eq!(AvatarOptionsBuilder::medium().build().size, Some(128));
        assert_eq!(AvatarOptionsBuilder::large().build().size, Some(256));
    }

    #[test]
    fn test_default_matches_new() {
        assert_eq!(
            AvatarOptionsBuilder::default().build(),
            AvatarOptionsBuilder::new().build()
        );
        assert_eq!(AvatarOptionsBuilder::new().build(), AvatarOptions::default());
    }

    #[test]
    fn test_custom() {
        let options = AvatarOptionsBuilder::new()
            .size(48)
            .round(true)
            .dark(true)
            .reflect(true)
            .draw(DrawStyle::Circles)
            .build();

        assert_eq!(
            options,
            AvatarOptions {
                size: Some(48),
                round: true,
                dark: true,
                reflect: true,
                draw: Some(DrawStyle::Circles),
            }
        );
    }

    #[test]
    fn test_draw_name() {
        let circles = AvatarOptionsBuilder::new().draw_name("circles").build();
        assert_eq!(circles.draw, Some(DrawStyle::Circles));

        let cleared = AvatarOptionsBuilder::new()
            .draw(DrawStyle::Squares)
            .draw_name("triangles")
            .build();
        assert_eq!(cleared.draw, None);
    }
}
