// imgmanip/src/cli.rs
use crate::core::{
    Config, FlipDirection, ResizeAlgorithm, ResizeMode, Rotation, DEFAULT_FACTOR,
    DEFAULT_JPEG_QUALITY, DEFAULT_THUMBNAIL_WIDTH,
};
use clap::{ArgGroup, Parser, ValueEnum};
use std::path::PathBuf;

const ABOUT: &str = "Perform a range of manipulations on image files.";

const LONG_ABOUT: &str = "\
Perform a range of manipulations on image files.

    Available Enhancers (-e, --enhance):

        BRIGHTNESS    COLOR    CONTRAST    SHARPNESS    GREYSCALE
        GAUSSIANBLUR  BOXBLUR

    Control the strength of an enhancer with the --factor option:

        --factor 1.0    No change to the image.
        --factor 1.2    Subtle change, a good starting point.

    Available Filters (-f, --filter):

        BLUR    CONTOUR     DETAIL   EDGE_ENHANCE  EDGE_ENHANCE_MORE
        EMBOSS  FIND_EDGES  SHARPEN  SMOOTH        SMOOTH_MORE

    Filter and enhancer names are case-insensitive.";

const AFTER_HELP: &str = "\
Example usages:
    $ imgmanip file.jpg -e greyscale brightness --factor 1.25
    $ imgmanip file.jpg -f contour detail smooth -e greyscale
    $ imgmanip file.jpg --resize-width-proportional 512
    $ imgmanip file.jpg --flip horz --rotate 180
    $ imgmanip file.jpg --thumbnail --thumbnail-width 256

    * All options can be combined in a single command to
      customise final output.";

#[derive(Parser, Debug)]
#[command(
    name = "imgmanip",
    version,
    about = ABOUT,
    long_about = LONG_ABOUT,
    after_help = AFTER_HELP,
    override_usage = "imgmanip FILES [-e ENHANCERS] [-f FILTERS] [--thumbnail] ..."
)]
#[command(group(
    ArgGroup::new("resize_mode")
        .multiple(false)
        .args([
            "resize",
            "resize_width_proportional",
            "resize_height_proportional",
            "resize_width",
            "resize_height",
        ])
))]
pub struct Cli {
    /// A list of image files to process
    #[arg(required = true, num_args = 1.., value_name = "FILES")]
    pub inputs: Vec<PathBuf>,

    /// Display image properties
    #[arg(short, long)]
    pub info: bool,

    /// Apply filters to the images
    #[arg(short = 'f', long = "filter", num_args = 1.., value_name = "FILTERS")]
    pub filters: Option<Vec<String>>,

    /// Apply enhancers to the images
    #[arg(short = 'e', long = "enhance", num_args = 1.., value_name = "ENHANCERS")]
    pub enhancers: Option<Vec<String>>,

    /// Float to specify the strength of enhancers
    #[arg(long, default_value_t = DEFAULT_FACTOR, allow_negative_numbers = true)]
    pub factor: f32,

    /// Generate a thumbnail
    #[arg(long)]
    pub thumbnail: bool,

    /// Width of the generated thumbnail
    #[arg(
        long,
        default_value_t = DEFAULT_THUMBNAIL_WIDTH,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub thumbnail_width: u32,

    /// Flip an image vertically or horizontally
    #[arg(long, value_enum, num_args = 1..)]
    pub flip: Vec<Flip>,

    /// Rotate an image counter-clockwise in a 90 degree increment
    #[arg(long, value_enum)]
    pub rotate: Option<Rotate>,

    /// Pass a width and height value to resize image
    #[arg(
        long,
        num_args = 2,
        value_names = ["WIDTH", "HEIGHT"],
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub resize: Option<Vec<u32>>,

    /// Resize image proportionally based on passed width
    #[arg(long, value_name = "WIDTH", value_parser = clap::value_parser!(u32).range(1..))]
    pub resize_width_proportional: Option<u32>,

    /// Resize image proportionally based on passed height
    #[arg(long, value_name = "HEIGHT", value_parser = clap::value_parser!(u32).range(1..))]
    pub resize_height_proportional: Option<u32>,

    /// Resize width only
    #[arg(long, value_name = "WIDTH", value_parser = clap::value_parser!(u32).range(1..))]
    pub resize_width: Option<u32>,

    /// Resize height only
    #[arg(long, value_name = "HEIGHT", value_parser = clap::value_parser!(u32).range(1..))]
    pub resize_height: Option<u32>,

    /// Resampling filter used by resizes and thumbnails
    #[arg(long, value_enum, default_value_t = Algorithm::Bicubic)]
    pub resample: Algorithm,

    /// JPEG output quality (1-100)
    #[arg(
        long,
        default_value_t = DEFAULT_JPEG_QUALITY,
        value_parser = clap::value_parser!(u8).range(1..=100)
    )]
    pub quality: u8,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Flip {
    Horz,
    Vert,
}

impl From<Flip> for FlipDirection {
    fn from(flip: Flip) -> Self {
        match flip {
            Flip::Horz => FlipDirection::Horizontal,
            Flip::Vert => FlipDirection::Vertical,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Rotate {
    #[value(name = "90")]
    Deg90,
    #[value(name = "180")]
    Deg180,
    #[value(name = "270")]
    Deg270,
}

impl From<Rotate> for Rotation {
    fn from(rotate: Rotate) -> Self {
        match rotate {
            Rotate::Deg90 => Rotation::Ccw90,
            Rotate::Deg180 => Rotation::Ccw180,
            Rotate::Deg270 => Rotation::Ccw270,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    Nearest,
    Bilinear,
    Bicubic,
    Lanczos3,
}

impl From<Algorithm> for ResizeAlgorithm {
    fn from(algo: Algorithm) -> Self {
        match algo {
            Algorithm::Nearest => ResizeAlgorithm::Nearest,
            Algorithm::Bilinear => ResizeAlgorithm::Bilinear,
            Algorithm::Bicubic => ResizeAlgorithm::Bicubic,
            Algorithm::Lanczos3 => ResizeAlgorithm::Lanczos3,
        }
    }
}

impl Cli {
    fn resize_mode(&self) -> Option<ResizeMode> {
        if let Some(dims) = &self.resize {
            // clap guarantees exactly two values
            return Some(ResizeMode::Exact(dims[0], dims[1]));
        }

        self.resize_width
            .map(ResizeMode::Width)
            .or(self.resize_height.map(ResizeMode::Height))
            .or(self
                .resize_width_proportional
                .map(ResizeMode::WidthProportional))
            .or(self
                .resize_height_proportional
                .map(ResizeMode::HeightProportional))
    }

    pub fn into_config(self) -> Config {
        let resize = self.resize_mode();
        Config {
            inputs: self.inputs,
            info: self.info,
            filters: self.filters,
            enhancers: self.enhancers,
            factor: self.factor,
            thumbnail: self.thumbnail.then_some(self.thumbnail_width),
            flips: self.flip.into_iter().map(FlipDirection::from).collect(),
            rotate: self.rotate.map(Rotation::from),
            resize,
            algorithm: self.resample.into(),
            quality: self.quality,
            verbose: self.verbose,
        }
    }
}
