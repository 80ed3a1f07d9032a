//! Options that control how an outline is turned into triangles.

/// Selects how much of the outline is reproduced.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FillMode {
    /// Reconstruct every line and quadratic segment, including implied
    /// on-curve points, and emit a curve triangle per quadratic.
    #[default]
    Curves,
    /// Fan only the real on-curve points of each contour and ignore curves.
    ///
    /// Curved glyphs come out as polygons. Useful as a coarse preview.
    Polygon,
}

/// Selects the shared vertex of each contour's triangle fan.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FanOrigin {
    /// Fan from the first hull anchor. A hull of `n` anchors yields `n - 2`
    /// triangles.
    #[default]
    FirstAnchor,
    /// Fan from the average of the hull anchors around the closed hull. A
    /// hull of `n` anchors yields `n` triangles.
    Centroid,
}

/// Configuration for [`tessellate`](crate::tessellate).
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TessellateSettings {
    fill_mode: FillMode,
    fan_origin: FanOrigin,
}

impl TessellateSettings {
    /// Creates settings for full curve reconstruction with a fan from the
    /// first anchor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the fill mode.
    pub fn with_fill_mode(mut self, fill_mode: FillMode) -> Self {
        self.fill_mode = fill_mode;
        self
    }

    /// Builder method to set the fan origin.
    pub fn with_fan_origin(mut self, fan_origin: FanOrigin) -> Self {
        self.fan_origin = fan_origin;
        self
    }

    pub fn fill_mode(&self) -> FillMode {
        self.fill_mode
    }

    pub fn fan_origin(&self) -> FanOrigin {
        self.fan_origin
    }
}
