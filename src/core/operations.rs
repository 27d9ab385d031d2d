// imgmanip/src/core/operations.rs
use super::{FlipDirection, ResizeMode, Rotation};
use std::fmt;
use std::str::FromStr;

/// Parameterless convolution filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Blur,
    Contour,
    Detail,
    EdgeEnhance,
    EdgeEnhanceMore,
    Emboss,
    FindEdges,
    Sharpen,
    Smooth,
    SmoothMore,
}

impl FilterKind {
    pub const ALL: [FilterKind; 10] = [
        FilterKind::Blur,
        FilterKind::Contour,
        FilterKind::Detail,
        FilterKind::EdgeEnhance,
        FilterKind::EdgeEnhanceMore,
        FilterKind::Emboss,
        FilterKind::FindEdges,
        FilterKind::Sharpen,
        FilterKind::Smooth,
        FilterKind::SmoothMore,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FilterKind::Blur => "BLUR",
            FilterKind::Contour => "CONTOUR",
            FilterKind::Detail => "DETAIL",
            FilterKind::EdgeEnhance => "EDGE_ENHANCE",
            FilterKind::EdgeEnhanceMore => "EDGE_ENHANCE_MORE",
            FilterKind::Emboss => "EMBOSS",
            FilterKind::FindEdges => "FIND_EDGES",
            FilterKind::Sharpen => "SHARPEN",
            FilterKind::Smooth => "SMOOTH",
            FilterKind::SmoothMore => "SMOOTH_MORE",
        }
    }
}

impl FromStr for FilterKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        FilterKind::ALL
            .into_iter()
            .find(|kind| kind.name() == upper)
            .ok_or(upper)
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Factor-driven adjustments, plus greyscale conversion and the two
/// radius-driven blurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnhancerKind {
    Brightness,
    Color,
    Contrast,
    Sharpness,
    Greyscale,
    GaussianBlur,
    BoxBlur,
}

impl EnhancerKind {
    pub fn name(self) -> &'static str {
        match self {
            EnhancerKind::Brightness => "BRIGHTNESS",
            EnhancerKind::Color => "COLOR",
            EnhancerKind::Contrast => "CONTRAST",
            EnhancerKind::Sharpness => "SHARPNESS",
            EnhancerKind::Greyscale => "GREYSCALE",
            EnhancerKind::GaussianBlur => "GAUSSIANBLUR",
            EnhancerKind::BoxBlur => "BOXBLUR",
        }
    }

    /// Whether `factor` changes what this enhancer does.
    pub fn uses_factor(self) -> bool {
        !matches!(self, EnhancerKind::Greyscale)
    }
}

impl FromStr for EnhancerKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        match upper.as_str() {
            "BRIGHTNESS" => Ok(EnhancerKind::Brightness),
            "COLOR" | "COLOUR" => Ok(EnhancerKind::Color),
            "CONTRAST" => Ok(EnhancerKind::Contrast),
            "SHARPNESS" => Ok(EnhancerKind::Sharpness),
            "GREYSCALE" => Ok(EnhancerKind::Greyscale),
            "GAUSSIANBLUR" => Ok(EnhancerKind::GaussianBlur),
            "BOXBLUR" => Ok(EnhancerKind::BoxBlur),
            _ => Err(upper),
        }
    }
}

impl fmt::Display for EnhancerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn is_valid_filter(name: &str) -> bool {
    name.parse::<FilterKind>().is_ok()
}

pub fn is_valid_enhancer(name: &str) -> bool {
    name.parse::<EnhancerKind>().is_ok()
}

/// One image-replacing step of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operation {
    Filter(FilterKind),
    Enhance(EnhancerKind, f32),
    Flip(FlipDirection),
    Resize(ResizeMode),
    Rotate(Rotation),
}

/// Parses `names` in order, dropping unknown ones with a warning.
pub fn parse_filters(names: &[String]) -> Vec<FilterKind> {
    names
        .iter()
        .filter_map(|name| match name.parse::<FilterKind>() {
            Ok(kind) => Some(kind),
            Err(upper) => {
                log::warn!("'{}' not a valid filter name. Skipping...", upper);
                None
            }
        })
        .collect()
}

/// Parses `names` in order, dropping unknown ones with a warning.
pub fn parse_enhancers(names: &[String]) -> Vec<EnhancerKind> {
    names
        .iter()
        .filter_map(|name| match name.parse::<EnhancerKind>() {
            Ok(kind) => Some(kind),
            Err(upper) => {
                log::warn!("'{}' not a valid enhancer name. Skipping...", upper);
                None
            }
        })
        .collect()
}
