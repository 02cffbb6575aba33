//! Typography - Font Sizes

/// Typography constants
pub struct Typography;

impl Typography {
    // Font sizes
    pub const TEXT_XS: f32 = 12.0;
    pub const TEXT_SM: f32 = 14.0;
    pub const TEXT_BASE: f32 = 16.0;
    pub const TEXT_LG: f32 = 18.0;
    pub const TEXT_XL: f32 = 20.0;

    // Component defaults
    /// Default toast message size
    pub const TOAST_TEXT: f32 = 15.0;
    /// Default popup title size
    pub const POPUP_TITLE: f32 = 16.0;
}
