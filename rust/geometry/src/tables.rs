//! Growable position/normal/texcoord arenas with 1-based lookup

use nalgebra::{Point2, Point3, Vector3};

use crate::error::{Error, Result};

/// Ordered attribute arenas populated in file order.
///
/// Faces reference entries through the 1-based indices of the OBJ
/// format; lookups fail with [`Error::IndexOutOfRange`] rather than
/// panicking. Tables only grow during a parse.
#[derive(Debug, Clone, Default)]
pub struct GeometryTables {
    positions: Vec<Point3<f32>>,
    normals: Vec<Vector3<f32>>,
    texcoords: Vec<Point2<f32>>,
}

impl GeometryTables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_position(&mut self, x: f32, y: f32, z: f32) {
        self.positions.push(Point3::new(x, y, z));
    }

    pub fn push_normal(&mut self, x: f32, y: f32, z: f32) {
        self.normals.push(Vector3::new(x, y, z));
    }

    pub fn push_texcoord(&mut self, u: f32, v: f32) {
        self.texcoords.push(Point2::new(u, v));
    }

    /// Look up a position by 1-based index
    pub fn position(&self, index: u32) -> Result<&Point3<f32>> {
        lookup(&self.positions, index, "position")
    }

    /// Look up a normal by 1-based index
    pub fn normal(&self, index: u32) -> Result<&Vector3<f32>> {
        lookup(&self.normals, index, "normal")
    }

    /// Look up a texture coordinate by 1-based index
    pub fn texcoord(&self, index: u32) -> Result<&Point2<f32>> {
        lookup(&self.texcoords, index, "texcoord")
    }

    /// All positions in declaration order
    pub fn positions(&self) -> &[Point3<f32>] {
        &self.positions
    }

    /// All normals in declaration order
    pub fn normals(&self) -> &[Vector3<f32>] {
        &self.normals
    }

    /// All texture coordinates in declaration order
    pub fn texcoords(&self) -> &[Point2<f32>] {
        &self.texcoords
    }
}

fn lookup<'a, T>(table: &'a [T], index: u32, name: &'static str) -> Result<&'a T> {
    if index < 1 {
        return Err(Error::IndexOutOfRange {
            table: name,
            index,
            len: table.len(),
        });
    }
    table.get(index as usize - 1).ok_or(Error::IndexOutOfRange {
        table: name,
        index,
        len: table.len(),
    })
}
