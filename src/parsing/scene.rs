use log::warn;

use crate::geometry::Sphere;
use crate::math::{Color, Point3};

const COMMENT: char = '/';

/// Parses one sphere per line.
///
/// Lines starting with `//` are comments. A record is either 11 fields
/// (center, radius, color, reflectivity, emission) or 8 fields without the
/// emission. Tokens past the eleventh are ignored. Anything else is reported
/// with its line number and skipped.
pub fn parse_scene(data: &str) -> Vec<Sphere> {
    let mut spheres = Vec::new();
    for (line_nr, line) in data.lines().enumerate().map(|(i, l)| (i + 1, l)) {
        if is_comment(line) {
            continue;
        }
        match parse_record(line) {
            Some(sphere) => spheres.push(sphere),
            None => warn!("scene, line {}: invalid data", line_nr),
        }
    }
    spheres
}

fn is_comment(line: &str) -> bool {
    let mut chars = line.chars();
    matches!((chars.next(), chars.next()), (Some(COMMENT), Some(COMMENT)))
}

fn parse_record(line: &str) -> Option<Sphere> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let arity = match tokens.len() {
        n if n >= 11 => 11,
        8 => 8,
        _ => return None,
    };
    let fields = tokens[..arity]
        .iter()
        .map(|field| field.parse::<f32>())
        .collect::<Result<Vec<f32>, _>>()
        .ok()?;

    let emission = if arity == 11 {
        Color::new(fields[8], fields[9], fields[10])
    } else {
        Color::ZERO
    };
    let radius = fields[3];
    if !(radius > 0.0) {
        return None;
    }
    Some(Sphere::new(
        Point3::new(fields[0], fields[1], fields[2]),
        radius,
        Color::new(fields[4], fields[5], fields[6]),
        fields[7],
        emission,
    ))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_both_arities() {
        let data = "\
0 0 -5 1 1 0 0 0.5 0 0 0
1 2 3 0.5 0.1 0.2 0.3 0
";
        let spheres = parse_scene(data);
        assert_eq!(spheres.len(), 2);
        assert_eq!(spheres[0].center, Point3::new(0.0, 0.0, -5.0));
        assert_eq!(spheres[0].surface_color, Color::new(1.0, 0.0, 0.0));
        assert_eq!(spheres[0].reflectivity, 0.5);
        assert!(!spheres[0].is_emissive());
        assert_eq!(spheres[1].radius, 0.5);
        assert_eq!(spheres[1].emission_color, Color::ZERO);
    }

    #[test]
    fn test_emission_record() {
        let spheres = parse_scene("0 20 -30 3 0 0 0 0 3 3 3");
        assert_eq!(spheres.len(), 1);
        assert_eq!(spheres[0].emission_color, Color::splat(3.0));
        assert!(spheres[0].is_emissive());
    }

    #[test]
    fn test_fields_past_emission_are_ignored() {
        let data = "\
0 20 -30 3 0 0 0 0 3 3 3 7
0 20 -30 3 0 0 0 0 1 2 3 trailing words
0 20 -30 3 0 0 0 0 x 3 3 7
";
        let spheres = parse_scene(data);
        assert_eq!(spheres.len(), 2);
        assert_eq!(spheres[0].emission_color, Color::splat(3.0));
        assert_eq!(spheres[1].emission_color, Color::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_comments_and_invalid_lines_are_skipped() {
        let data = "\
// position radius color reflectivity emission
0 0 -5 1 1 0 0 0
1 2 3
0 0 -5 1 1 0 0 0 1
not a sphere at all really ok
0 0 -5 -1 1 0 0 0

/ single slash is not a comment
0 -10004 -20 10000 0.2 0.2 0.2 0
";
        let spheres = parse_scene(data);
        assert_eq!(spheres.len(), 2);
        assert_eq!(spheres[1].radius, 10000.0);
        // order is preserved
        assert_eq!(spheres[0].center, Point3::new(0.0, 0.0, -5.0));
    }

    #[test]
    fn test_empty_source_yields_empty_scene() {
        assert!(parse_scene("").is_empty());
        assert!(parse_scene("// nothing here\n").is_empty());
    }
}
