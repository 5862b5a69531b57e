use tickface_engine::paint::Color;

/// Colors used by the clock widgets.
///
/// Translucent tints (ring, minute ticks, badge) are derived from these with
/// [`Color::faded`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Page behind the widget. `None` leaves the SVG transparent.
    pub background: Option<Color>,
    /// Dial face and the inner center cap.
    pub card: Color,
    pub border: Color,
    /// Hands, hour ticks, digital readout.
    pub foreground: Color,
    /// Minute ticks and captions.
    pub muted: Color,
    /// Second hand and zone badge.
    pub accent: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            background: Some(Color::from_srgb_u8(10, 10, 12, 255)),
            card: Color::from_srgb_u8(24, 24, 27, 255),
            border: Color::from_srgb_u8(63, 63, 70, 255),
            foreground: Color::from_srgb_u8(244, 244, 245, 255),
            muted: Color::from_srgb_u8(161, 161, 170, 255),
            accent: Color::from_srgb_u8(249, 115, 22, 255),
        }
    }

    pub fn light() -> Self {
        Self {
            background: Some(Color::from_srgb_u8(250, 250, 250, 255)),
            card: Color::from_srgb_u8(255, 255, 255, 255),
            border: Color::from_srgb_u8(228, 228, 231, 255),
            foreground: Color::from_srgb_u8(9, 9, 11, 255),
            muted: Color::from_srgb_u8(113, 113, 122, 255),
            accent: Color::from_srgb_u8(234, 88, 12, 255),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
