#[cfg(test)]
mod tests {
    use assert_fs::prelude::*;
    use assert_fs::TempDir;
    use clap::Parser;
    use image::{GenericImageView, ImageFormat, Rgb, RgbImage};
    use imgmanip::{BatchProcessor, Cli, Config, ResizeMode, Rotation};
    use std::path::Path;
    use std::process::Command;

    fn write_image(path: &Path, width: u32, height: u32) {
        let img = RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x * 7 % 256) as u8, (y * 13 % 256) as u8, 90])
        });
        img.save(path).unwrap();
    }

    fn imgmanip(dir: &Path, args: &[&str]) -> std::process::Output {
        Command::new(env!("CARGO_BIN_EXE_imgmanip"))
            .current_dir(dir)
            .args(args)
            .output()
            .unwrap()
    }

    fn file_names(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_filter_with_unknown_name_still_applies_the_rest() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.child("photo.png");
        write_image(input.path(), 16, 16);

        let cli = Cli::try_parse_from([
            "imgmanip",
            input.path().to_str().unwrap(),
            "--filter",
            "BOGUS",
            "blur",
        ])
        .unwrap();
        let stats = BatchProcessor::new(cli.into_config()).run();

        assert_eq!(stats.saved_count, 1);
        let output = temp_dir.child("photo-manip-0.png");
        assert!(output.path().exists());

        let before = image::open(input.path()).unwrap().to_rgb8();
        let after = image::open(output.path()).unwrap().to_rgb8();
        assert_eq!(after.dimensions(), (16, 16));
        assert_ne!(before, after);
    }

    #[test]
    fn test_resize_width_proportional() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.child("wide.png");
        write_image(input.path(), 1000, 500);

        let config = Config {
            inputs: vec![input.path().to_path_buf()],
            resize: Some(ResizeMode::WidthProportional(500)),
            ..Default::default()
        };
        BatchProcessor::new(config).run();

        let resized = image::open(temp_dir.child("wide-manip-0.png").path()).unwrap();
        assert_eq!(resized.dimensions(), (500, 250));
    }

    #[test]
    fn test_jpeg_round_trip_keeps_format_and_extension_case() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.child("photo.JPG");
        let img = RgbImage::from_pixel(40, 30, Rgb([120, 80, 40]));
        img.save_with_format(input.path(), ImageFormat::Jpeg).unwrap();

        let placeholder = temp_dir.child("other.png");
        write_image(placeholder.path(), 4, 4);

        let config = Config {
            inputs: vec![
                placeholder.path().to_path_buf(),
                temp_dir.child("missing.png").path().to_path_buf(),
                input.path().to_path_buf(),
            ],
            rotate: Some(Rotation::Ccw90),
            ..Default::default()
        };
        let stats = BatchProcessor::new(config).run();
        assert_eq!(stats.saved_count, 2);

        let output = temp_dir.child("photo-manip-2.JPG");
        assert!(output.path().exists());
        let reader = image::ImageReader::open(output.path())
            .unwrap()
            .with_guessed_format()
            .unwrap();
        assert_eq!(reader.format(), Some(ImageFormat::Jpeg));
        assert_eq!(reader.decode().unwrap().dimensions(), (30, 40));
    }

    #[test]
    fn test_cli_info_only_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        write_image(temp_dir.child("a.png").path(), 8, 6);

        let output = imgmanip(temp_dir.path(), &["a.png", "-i"]);

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("Filename : a.png"), "{stdout}");
        assert!(stdout.contains("Size     : (8, 6)"), "{stdout}");
        assert!(stdout.contains("Format   : PNG"), "{stdout}");
        assert!(stdout.contains("Bands    : ('R', 'G', 'B')"), "{stdout}");
        assert_eq!(file_names(temp_dir.path()), vec!["a.png"]);
    }

    #[test]
    fn test_cli_missing_file_warns_and_continues() {
        let temp_dir = TempDir::new().unwrap();
        write_image(temp_dir.child("a.png").path(), 8, 6);
        write_image(temp_dir.child("c.png").path(), 8, 6);

        let output = imgmanip(
            temp_dir.path(),
            &["a.png", "ghost.png", "c.png", "--flip", "horz"],
        );

        assert_eq!(output.status.code(), Some(0));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("ghost.png not found. Skipping..."), "{stderr}");
        assert_eq!(
            file_names(temp_dir.path()),
            vec!["a-manip-0.png", "a.png", "c-manip-2.png", "c.png"]
        );
    }

    #[test]
    fn test_cli_thumbnail_name_uses_computed_box() {
        let temp_dir = TempDir::new().unwrap();
        write_image(temp_dir.child("photo.png").path(), 1024, 768);

        let output = imgmanip(
            temp_dir.path(),
            &["photo.png", "--thumbnail", "--thumbnail-width", "256"],
        );

        assert!(output.status.success());
        let thumb = temp_dir.child("photo-256x192-0.thumb");
        assert!(thumb.path().exists());
        assert!(!temp_dir.child("photo-manip-0.png").path().exists());

        let decoded = image::ImageReader::open(thumb.path())
            .unwrap()
            .with_guessed_format()
            .unwrap()
            .decode()
            .unwrap();
        assert_eq!(decoded.dimensions(), (256, 192));
    }

    #[test]
    fn test_cli_conflicting_resize_fails_before_io() {
        let temp_dir = TempDir::new().unwrap();
        write_image(temp_dir.child("a.png").path(), 8, 6);

        let output = imgmanip(
            temp_dir.path(),
            &["a.png", "--resize", "10", "10", "--resize-width", "5"],
        );

        assert!(!output.status.success());
        assert_ne!(output.status.code(), Some(0));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Usage"), "{stderr}");
        assert_eq!(file_names(temp_dir.path()), vec!["a.png"]);
    }

    #[test]
    fn test_cli_negative_factor_is_accepted() {
        let temp_dir = TempDir::new().unwrap();
        write_image(temp_dir.child("a.png").path(), 8, 6);

        let output = imgmanip(temp_dir.path(), &["a.png", "-e", "contrast", "--factor", "-1"]);

        assert_eq!(output.status.code(), Some(0));
        assert_eq!(file_names(temp_dir.path()), vec!["a-manip-0.png", "a.png"]);
    }

    #[test]
    fn test_cli_non_numeric_factor_is_an_argument_error() {
        let temp_dir = TempDir::new().unwrap();
        write_image(temp_dir.child("a.png").path(), 8, 6);

        let output = imgmanip(temp_dir.path(), &["a.png", "-e", "contrast", "--factor", "lots"]);

        assert_eq!(output.status.code(), Some(2));
        assert_eq!(file_names(temp_dir.path()), vec!["a.png"]);
    }

    #[test]
    fn test_cli_warns_about_unknown_names_only() {
        let temp_dir = TempDir::new().unwrap();
        write_image(temp_dir.child("a.png").path(), 8, 6);

        let output = imgmanip(
            temp_dir.path(),
            &["a.png", "--filter", "BOGUS", "blur", "-e", "sepia", "greyscale"],
        );

        assert!(output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(
            stderr.contains("'BOGUS' not a valid filter name. Skipping..."),
            "{stderr}"
        );
        assert!(
            stderr.contains("'SEPIA' not a valid enhancer name. Skipping..."),
            "{stderr}"
        );
        let warnings: Vec<&str> = stderr.lines().filter(|l| l.contains("not a valid")).collect();
        assert_eq!(warnings.len(), 2, "{stderr}");
        assert!(warnings
            .iter()
            .all(|l| !l.contains("BLUR") && !l.contains("GREYSCALE")));
        assert!(temp_dir.child("a-manip-0.png").path().exists());
    }

    #[test]
    fn test_cli_skip_warnings_survive_strict_rust_log() {
        let temp_dir = TempDir::new().unwrap();
        write_image(temp_dir.child("a.png").path(), 8, 6);

        let output = Command::new(env!("CARGO_BIN_EXE_imgmanip"))
            .current_dir(temp_dir.path())
            .env("RUST_LOG", "error")
            .args(["a.png", "ghost.png", "--filter", "BOGUS"])
            .output()
            .unwrap();

        assert!(output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("ghost.png not found. Skipping..."), "{stderr}");
        assert!(
            stderr.contains("'BOGUS' not a valid filter name. Skipping..."),
            "{stderr}"
        );
        // info lines stay filtered
        assert!(!stderr.contains("Processed"), "{stderr}");
    }

    #[test]
    fn test_greyscale_gif_is_saved_as_gif() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.child("anim.gif");
        let img = RgbImage::from_fn(8, 8, |x, y| Rgb([(x * 30) as u8, (y * 30) as u8, 200]));
        img.save_with_format(input.path(), ImageFormat::Gif).unwrap();

        let config = Config {
            inputs: vec![input.path().to_path_buf()],
            enhancers: Some(vec!["greyscale".to_string()]),
            ..Default::default()
        };
        let stats = BatchProcessor::new(config).run();

        assert_eq!(stats.saved_count, 1, "{:?}", stats.skipped);
        let output = temp_dir.child("anim-manip-0.gif");
        assert!(output.path().exists());
        let reader = image::ImageReader::open(output.path())
            .unwrap()
            .with_guessed_format()
            .unwrap();
        assert_eq!(reader.format(), Some(ImageFormat::Gif));
        assert_eq!(reader.decode().unwrap().dimensions(), (8, 8));
    }

    #[test]
    fn test_cli_version_exits_zero() {
        let temp_dir = TempDir::new().unwrap();
        let output = imgmanip(temp_dir.path(), &["--version"]);

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.starts_with("imgmanip "), "{stdout}");
    }

    #[test]
    fn test_cli_rotations_round_trip_dimensions() {
        let temp_dir = TempDir::new().unwrap();
        write_image(temp_dir.child("a.png").path(), 9, 5);

        let first = imgmanip(temp_dir.path(), &["a.png", "--rotate", "180"]);
        assert!(first.status.success());
        let second = imgmanip(temp_dir.path(), &["a-manip-0.png", "--rotate", "180"]);
        assert!(second.status.success());

        let result = image::open(temp_dir.child("a-manip-0-manip-0.png").path()).unwrap();
        assert_eq!(result.dimensions(), (9, 5));
    }
}
