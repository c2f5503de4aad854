/// Wavefront OBJ parser for the vertex/face subset
use nom::{
    branch::alt,
    bytes::complete::{tag, take_till, take_till1},
    character::complete::{char, digit1, space1},
    combinator::{all_consuming, map, map_res, opt, rest, verify},
    multi::separated_list1,
    number::complete::double,
    sequence::{preceded, terminated, tuple},
    IResult,
};

use crate::error::LoadError;
use crate::loader::ModelData;

#[derive(Debug, PartialEq)]
enum Record {
    Vertex([f64; 3]),
    Face(Vec<usize>),
    Other,
}

/// Parse OBJ text into a vertex table and 1-based triangle indices.
///
/// Only `v` and `f` records matter. Faces with more than three corners are
/// fan-triangulated; `v/vt/vn` references keep the position index.
pub fn parse_obj(input: &str) -> Result<ModelData, LoadError> {
    let mut model = ModelData::default();

    for (number, line) in input.lines().enumerate() {
        let line = line.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }

        let (_, record) = all_consuming(parse_record)(line).map_err(|_| LoadError::Obj {
            line: number + 1,
            message: format!("malformed record `{line}`"),
        })?;

        match record {
            Record::Vertex(point) => model.points.push(point),
            Record::Face(corners) if corners.len() < 3 => {
                return Err(LoadError::Obj {
                    line: number + 1,
                    message: format!("face has {} corners, need at least 3", corners.len()),
                });
            }
            Record::Face(corners) => {
                for pair in corners[1..].windows(2) {
                    model.triangles.push([corners[0], pair[0], pair[1]]);
                }
            }
            Record::Other => {}
        }
    }

    Ok(model)
}

fn parse_record(input: &str) -> IResult<&str, Record> {
    alt((parse_vertex, parse_face, parse_other))(input)
}

fn parse_vertex(input: &str) -> IResult<&str, Record> {
    let (input, _) = terminated(tag("v"), space1)(input)?;
    let (input, (x, _, y, _, z)) = tuple((double, space1, double, space1, double))(input)?;
    // Optional homogeneous weight
    let (input, _) = opt(preceded(space1, double))(input)?;
    Ok((input, Record::Vertex([x, y, z])))
}

fn parse_face(input: &str) -> IResult<&str, Record> {
    let (input, _) = terminated(tag("f"), space1)(input)?;
    let (input, corners) = separated_list1(space1, parse_corner)(input)?;
    Ok((input, Record::Face(corners)))
}

fn parse_corner(input: &str) -> IResult<&str, usize> {
    terminated(
        map_res(digit1, str::parse::<usize>),
        opt(preceded(char('/'), take_till(char::is_whitespace))),
    )(input)
}

fn parse_other(input: &str) -> IResult<&str, Record> {
    let keyword = verify(take_till1(char::is_whitespace), |k: &str| k != "v" && k != "f");
    map(tuple((keyword, rest)), |_| Record::Other)(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_triangle() {
        let model = parse_obj("# a triangle\nv 0 0 0\nv 1.5 0 0\nv 0 -2e1 0\nf 1 2 3\n").unwrap();
        assert_eq!(
            model.points,
            vec![[0.0, 0.0, 0.0], [1.5, 0.0, 0.0], [0.0, -20.0, 0.0]]
        );
        assert_eq!(model.triangles, vec![[1, 2, 3]]);
    }

    #[test]
    fn test_quad_is_fanned() {
        let model = parse_obj("v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1/1/1 2/2/1 3//1 4\n").unwrap();
        assert_eq!(model.triangles, vec![[1, 2, 3], [1, 3, 4]]);
    }

    #[test]
    fn test_other_records_ignored() {
        let model = parse_obj("o thing\nvn 0 0 1\nvt 0.5 0.5\ns off\nv 1 2 3 1.0\n").unwrap();
        assert_eq!(model.points, vec![[1.0, 2.0, 3.0]]);
        assert!(model.triangles.is_empty());
    }

    #[test]
    fn test_malformed_vertex_reports_line() {
        let err = parse_obj("v 0 0 0\nv 1 nope 0\n").unwrap_err();
        assert!(matches!(err, LoadError::Obj { line: 2, .. }));
    }

    #[test]
    fn test_short_face_rejected() {
        let err = parse_obj("v 0 0 0\nv 1 0 0\nf 1 2\n").unwrap_err();
        assert!(matches!(err, LoadError::Obj { line: 3, .. }));
    }
}
