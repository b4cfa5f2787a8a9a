use crate::constants::{DEFAULT_CURSOR_BLUR_PX, DEFAULT_RATIO, DEFAULT_REFLECTIVE_BLUR_PX};
use anyhow::{bail, Context};

/// Static rendering options, built once at startup and passed around by value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Settings {
    /// Blur (px) applied to the visible canvas as a CSS filter.
    pub cursor_blur: f64,
    /// Blur (px) applied only while drawing the sweep into the buffer.
    pub reflective_blur: f64,
    /// Backing resolution relative to the window size.
    pub ratio: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cursor_blur: DEFAULT_CURSOR_BLUR_PX,
            reflective_blur: DEFAULT_REFLECTIVE_BLUR_PX,
            ratio: DEFAULT_RATIO,
        }
    }
}

impl Settings {
    pub const KEY_CURSOR_BLUR: &'static str = "cursor-blur";
    pub const KEY_REFLECTIVE_BLUR: &'static str = "reflective-blur";
    pub const KEY_RATIO: &'static str = "ratio";

    /// Defaults overridden by whatever `lookup` returns for the recognized keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut s = Self::default();
        if let Some(v) = parse_key(&lookup, Self::KEY_CURSOR_BLUR)? {
            s.cursor_blur = v;
        }
        if let Some(v) = parse_key(&lookup, Self::KEY_REFLECTIVE_BLUR)? {
            s.reflective_blur = v;
        }
        if let Some(v) = parse_key(&lookup, Self::KEY_RATIO)? {
            s.ratio = v;
        }
        s.validate()
    }

    pub fn validate(self) -> anyhow::Result<Self> {
        if !self.cursor_blur.is_finite() || self.cursor_blur < 0.0 {
            bail!("{} must be a non-negative number, got {}", Self::KEY_CURSOR_BLUR, self.cursor_blur);
        }
        if !self.reflective_blur.is_finite() || self.reflective_blur < 0.0 {
            bail!(
                "{} must be a non-negative number, got {}",
                Self::KEY_REFLECTIVE_BLUR,
                self.reflective_blur
            );
        }
        if !self.ratio.is_finite() || self.ratio <= 0.0 {
            bail!("{} must be a positive number, got {}", Self::KEY_RATIO, self.ratio);
        }
        Ok(self)
    }

    #[inline]
    pub fn cursor_filter(&self) -> String {
        format!("blur({}px)", self.cursor_blur)
    }

    #[inline]
    pub fn sweep_filter(&self) -> String {
        format!("blur({}px)", self.reflective_blur)
    }
}

fn parse_key(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> anyhow::Result<Option<f64>> {
    match lookup(key) {
        Some(raw) => {
            let v = raw
                .trim()
                .parse::<f64>()
                .with_context(|| format!("invalid value for {key}: {raw:?}"))?;
            Ok(Some(v))
        }
        None => Ok(None),
    }
}
