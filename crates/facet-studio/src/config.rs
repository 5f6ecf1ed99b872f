use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use facet_engine::logging::{LoggingConfig, WriteStyle};

/// Command-line configuration for the studio renderer.
#[derive(Debug, Clone)]
pub struct StudioConfig {
    /// PNG written after rendering.
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    /// Atlas image to use instead of the generated one. Cut into 16px tiles.
    pub atlas: Option<PathBuf>,
    pub logging: LoggingConfig,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("facet.png"),
            width: 256,
            height: 256,
            atlas: None,
            logging: LoggingConfig::default(),
        }
    }
}

pub const USAGE: &str =
    "usage: facet-studio [--out <file.png>] [--size <W>x<H>] [--atlas <file.png>] [--log <filter>] [--color auto|always|never]";

impl StudioConfig {
    /// Parses arguments (without the program name).
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let mut value = || args.next().with_context(|| format!("{arg} needs a value\n{USAGE}"));
            match arg.as_str() {
                "--out" => config.output = PathBuf::from(value()?),
                "--atlas" => config.atlas = Some(PathBuf::from(value()?)),
                "--log" => config.logging.env_filter = Some(value()?),
                "--color" => config.logging.write_style = parse_color(&value()?)?,
                "--size" => {
                    let (w, h) = parse_size(&value()?)?;
                    config.width = w;
                    config.height = h;
                }
                other => bail!("unknown argument {other:?}\n{USAGE}"),
            }
        }

        Ok(config)
    }
}

fn parse_size(s: &str) -> Result<(u32, u32)> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .with_context(|| format!("size {s:?} must look like 256x256"))?;
    let w: u32 = w.trim().parse().with_context(|| format!("bad width in {s:?}"))?;
    let h: u32 = h.trim().parse().with_context(|| format!("bad height in {s:?}"))?;
    if w == 0 || h == 0 {
        bail!("size {s:?} must be non-zero");
    }
    Ok((w, h))
}

fn parse_color(s: &str) -> Result<WriteStyle> {
    Ok(match s {
        "auto" => WriteStyle::Auto,
        "always" => WriteStyle::Always,
        "never" => WriteStyle::Never,
        _ => bail!("color {s:?} must be auto, always or never"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<StudioConfig> {
        StudioConfig::from_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn defaults() {
        let c = parse(&[]).unwrap();
        assert_eq!(c.output, PathBuf::from("facet.png"));
        assert_eq!((c.width, c.height), (256, 256));
        assert!(c.atlas.is_none());
        assert!(c.logging.env_filter.is_none());
    }

    #[test]
    fn all_flags() {
        let c = parse(&["--out", "a.png", "--size", "320x200", "--atlas", "t.png", "--log", "debug"]).unwrap();
        assert_eq!(c.output, PathBuf::from("a.png"));
        assert_eq!((c.width, c.height), (320, 200));
        assert_eq!(c.atlas, Some(PathBuf::from("t.png")));
        assert_eq!(c.logging.env_filter.as_deref(), Some("debug"));
    }

    #[test]
    fn color_sets_write_style() {
        let c = parse(&["--color", "never"]).unwrap();
        assert!(matches!(c.logging.write_style, WriteStyle::Never));
        assert!(matches!(parse(&[]).unwrap().logging.write_style, WriteStyle::Auto));
    }

    #[test] fn err_bad_color() { parse(&["--color", "rainbow"]).unwrap_err(); }
    #[test] fn err_missing_value() { parse(&["--out"]).unwrap_err(); }
    #[test] fn err_unknown_flag() { parse(&["--fast"]).unwrap_err(); }
    #[test] fn err_bad_size() { parse(&["--size", "big"]).unwrap_err(); }
    #[test] fn err_zero_size() { parse(&["--size", "0x10"]).unwrap_err(); }
}
