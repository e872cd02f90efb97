use std::str::FromStr;

use log::warn;

use crate::config::RenderConfig;
use crate::math::Color;

/// Reads up to three positional lines on top of `defaults`:
///
/// ```text
/// ambient 0.2 0.2 0.2
/// canvas 640 480
/// depth 5
/// ```
///
/// The leading label is ignored. A missing or malformed line keeps the
/// default for that line and is reported by line number.
pub fn parse_settings(data: &str, defaults: RenderConfig) -> RenderConfig {
    let mut config = defaults;
    let mut lines = data.lines();

    match lines.next().map(|line| numeric_fields::<f32>(line, 3)) {
        Some(Some(ambient)) => config.ambient = Color::new(ambient[0], ambient[1], ambient[2]),
        Some(None) => warn!("settings, line 1: invalid data"),
        None => warn!("settings, line 1: missing, keeping ambient {:?}", config.ambient),
    }

    match lines.next().map(|line| numeric_fields::<u32>(line, 2)) {
        Some(Some(size)) if size[0] > 0 && size[1] > 0 => {
            config.width = size[0];
            config.height = size[1];
        }
        Some(_) => warn!("settings, line 2: invalid data"),
        None => warn!(
            "settings, line 2: missing, keeping canvas {}x{}",
            config.width, config.height
        ),
    }

    match lines.next().map(|line| numeric_fields::<u32>(line, 1)) {
        Some(Some(depth)) => config.max_depth = depth[0],
        Some(None) => warn!("settings, line 3: invalid data"),
        None => warn!("settings, line 3: missing, keeping max depth {}", config.max_depth),
    }

    config
}

// a label token followed by at least `count` values. extra tokens are ignored.
fn numeric_fields<T: FromStr>(line: &str, count: usize) -> Option<Vec<T>> {
    let mut tokens = line.split_whitespace();
    tokens.next()?;
    let values = tokens
        .take(count)
        .map(|token| token.parse::<T>().ok())
        .collect::<Option<Vec<T>>>()?;
    if values.len() == count {
        Some(values)
    } else {
        None
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_full_settings() {
        let config = parse_settings(
            "ambient 0.1 0.2 0.3\ncanvas 320 200\ndepth 2\n",
            RenderConfig::default(),
        );
        assert_eq!(config.ambient, Color::new(0.1, 0.2, 0.3));
        assert_eq!((config.width, config.height), (320, 200));
        assert_eq!(config.max_depth, 2);
        assert_eq!(config.fov, RenderConfig::DEFAULT_FOV);
    }

    #[test]
    fn test_labels_are_positional() {
        let config = parse_settings("x 1 1 1\ny 8 6\nz 0", RenderConfig::default());
        assert_eq!(config.ambient, Color::splat(1.0));
        assert_eq!((config.width, config.height), (8, 6));
        assert_eq!(config.max_depth, 0);
    }

    #[test]
    fn test_malformed_lines_keep_defaults() {
        let defaults = RenderConfig::default();
        let config = parse_settings("ambient 0.5 oops 0.5\ncanvas 0 100\ndepth -3\n", defaults);
        assert_eq!(config, defaults);

        // a partially valid line does not leak into the config
        let config = parse_settings("ambient 0.5 0.5\ncanvas 100\n", defaults);
        assert_eq!(config, defaults);
    }

    #[test]
    fn test_missing_lines_keep_defaults() {
        let defaults = RenderConfig::default();
        let config = parse_settings("ambient 0 0 0\n", defaults);
        assert_eq!(config.ambient, Color::ZERO);
        assert_eq!((config.width, config.height), (640, 480));
        assert_eq!(config.max_depth, 5);
        assert_eq!(parse_settings("", defaults), defaults);
    }

    #[test]
    fn test_extra_tokens_ignored() {
        let config = parse_settings(
            "ambient 0.1 0.1 0.1 9\ncanvas 4 3 junk\ndepth 1 2\n",
            RenderConfig::default(),
        );
        assert_eq!(config.ambient, Color::splat(0.1));
        assert_eq!((config.width, config.height), (4, 3));
        assert_eq!(config.max_depth, 1);
    }
}
