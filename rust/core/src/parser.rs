//! OBJ/MTL line parser using nom
//!
//! Classifies one line of text into a tagged directive value.
//! Pure string processing, no I/O.

use nom::{
    bytes::complete::take_while1,
    character::complete::{char, digit1},
    combinator::{all_consuming, map_res, opt},
    sequence::{preceded, tuple},
    IResult,
};
use smallvec::SmallVec;

use crate::error::{Error, Result};

/// One classified line of an OBJ geometry file
#[derive(Debug, Clone, PartialEq)]
pub enum ObjLine<'a> {
    /// Vertex position: `v x y z`
    Position(f32, f32, f32),
    /// Vertex normal: `vn x y z`
    Normal(f32, f32, f32),
    /// Texture coordinate: `vt u v`
    TexCoord(f32, f32),
    /// Triangle face: `f v/vt/vn v/vt/vn v/vt/vn` or `f v//vn v//vn v//vn`
    Face(FaceIndices),
    /// Material library reference: `mtllib <path>`
    MtlLib(&'a str),
    /// Material selection: `usemtl <name>`
    UseMtl(&'a str),
    /// Unrecognized directive, blank line, comment, or a face line
    /// that does not have exactly three vertex groups
    Ignored,
}

/// One classified line of an MTL material file
#[derive(Debug, Clone, PartialEq)]
pub enum MtlLine<'a> {
    /// `newmtl <name>` opens a new material draft
    NewMtl(&'a str),
    /// `Ka r g b`
    Ambient([f32; 3]),
    /// `Kd r g b`
    Diffuse([f32; 3]),
    /// `Ks r g b`
    Specular([f32; 3]),
    /// `map_Kd <path>`, relative to the MTL file's directory
    DiffuseMap(&'a str),
    /// `Ns`, `map_Ka`, `map_Ks`, `map_Ns` and anything unrecognized
    Ignored,
}

/// Raw 1-based index triplets of a triangle face line.
///
/// Texture indices are all-present or all-absent: they are parsed only
/// when the first group's middle field is non-empty, and are then
/// required on every group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceIndices {
    pub vertex: [u32; 3],
    pub texture: Option<[u32; 3]>,
    pub normal: [u32; 3],
}

fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'e' | 'E')
}

/// Parse a float field: 1, -0.5, 1.5e-3
fn float(input: &str) -> IResult<&str, f32> {
    map_res(take_while1(is_number_char), |s: &str| {
        fast_float::parse::<f32, _>(s)
    })(input)
}

/// Parse a 1-based index field
fn index(input: &str) -> IResult<&str, u32> {
    map_res(digit1, |s: &str| lexical_core::parse::<u32>(s.as_bytes()))(input)
}

/// Parse one face vertex group: `v/vt/vn` or `v//vn`
fn face_group(input: &str) -> IResult<&str, (u32, Option<u32>, u32)> {
    tuple((
        index,
        preceded(char('/'), opt(index)),
        preceded(char('/'), index),
    ))(input)
}

/// Parse a whole whitespace token as a float
fn float_field(directive: &'static str, field: Option<&str>) -> Result<f32> {
    let field = field.ok_or(Error::numeric(directive, ""))?;
    match all_consuming(float)(field) {
        Ok((_, value)) => Ok(value),
        Err(_) => Err(Error::numeric(directive, field)),
    }
}

fn float3<'a>(
    directive: &'static str,
    fields: &mut impl Iterator<Item = &'a str>,
) -> Result<[f32; 3]> {
    Ok([
        float_field(directive, fields.next())?,
        float_field(directive, fields.next())?,
        float_field(directive, fields.next())?,
    ])
}

fn parse_face<'a>(fields: impl Iterator<Item = &'a str>) -> Result<ObjLine<'a>> {
    let groups: SmallVec<[&str; 4]> = fields.collect();

    // Only triangulated faces are supported; any other group count
    // is skipped rather than treated as an error.
    if groups.len() != 3 {
        return Ok(ObjLine::Ignored);
    }

    let mut vertex = [0u32; 3];
    let mut normal = [0u32; 3];
    let mut texture = [0u32; 3];
    let mut with_texture = false;

    for (i, group) in groups.iter().enumerate() {
        let (v, vt, vn) = match all_consuming(face_group)(group) {
            Ok((_, parsed)) => parsed,
            Err(_) => return Err(Error::numeric("f", group)),
        };
        vertex[i] = v;
        normal[i] = vn;
        if i == 0 {
            with_texture = vt.is_some();
        }
        if with_texture {
            // The first group promised texture indices; all must carry one
            texture[i] = vt.ok_or(Error::numeric("f", group))?;
        }
    }

    Ok(ObjLine::Face(FaceIndices {
        vertex,
        texture: with_texture.then_some(texture),
        normal,
    }))
}

/// Classify one line of an OBJ geometry file.
///
/// Tokens are whitespace-separated; trailing tokens beyond what a
/// directive consumes are ignored. Unrecognized directives map to
/// [`ObjLine::Ignored`].
pub fn parse_obj_line(line: &str) -> Result<ObjLine<'_>> {
    let mut fields = line.split_whitespace();
    let Some(keyword) = fields.next() else {
        return Ok(ObjLine::Ignored);
    };

    match keyword {
        "v" => {
            let [x, y, z] = float3("v", &mut fields)?;
            Ok(ObjLine::Position(x, y, z))
        }
        "vn" => {
            let [x, y, z] = float3("vn", &mut fields)?;
            Ok(ObjLine::Normal(x, y, z))
        }
        "vt" => {
            let u = float_field("vt", fields.next())?;
            let v = float_field("vt", fields.next())?;
            Ok(ObjLine::TexCoord(u, v))
        }
        "f" => parse_face(fields),
        "mtllib" => Ok(fields.next().map_or(ObjLine::Ignored, ObjLine::MtlLib)),
        "usemtl" => Ok(fields.next().map_or(ObjLine::Ignored, ObjLine::UseMtl)),
        _ => Ok(ObjLine::Ignored),
    }
}

/// Classify one line of an MTL material file.
pub fn parse_mtl_line(line: &str) -> Result<MtlLine<'_>> {
    let mut fields = line.split_whitespace();
    let Some(keyword) = fields.next() else {
        return Ok(MtlLine::Ignored);
    };

    match keyword {
        "newmtl" => Ok(fields.next().map_or(MtlLine::Ignored, MtlLine::NewMtl)),
        "Ka" => Ok(MtlLine::Ambient(float3("Ka", &mut fields)?)),
        "Kd" => Ok(MtlLine::Diffuse(float3("Kd", &mut fields)?)),
        "Ks" => Ok(MtlLine::Specular(float3("Ks", &mut fields)?)),
        "map_Kd" => Ok(fields.next().map_or(MtlLine::Ignored, MtlLine::DiffuseMap)),
        _ => Ok(MtlLine::Ignored),
    }
}
