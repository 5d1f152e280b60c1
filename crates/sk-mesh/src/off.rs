//! Reader for the plain-text Object File Format.
//!
//! Layout accepted:
//!
//! ```text
//! OFF
//! V F [T]
//! x y z            (V vertex lines)
//! 3 a b c          (F triangle faces)
//! 4 a b c d        (T tetrahedra)
//! ```
//!
//! Blank lines and `#` comments are skipped. Values after the counts line are
//! read as a whitespace-separated token stream, so line breaks inside a record
//! do not matter.

use std::io::Read;
use std::path::Path;

use log::debug;
use sk_core::{Result, SketchError};
use sk_math::Point3;

use crate::TriangleMesh;

/// Element counts come from the file, so pre-allocation is capped; larger
/// meshes grow as records are read.
const PREALLOC_LIMIT: usize = 1 << 16;

/// Vertices, triangle faces, and tetrahedra read from an OFF file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OffMesh {
    pub vertices: Vec<Point3>,
    pub faces: Vec<[u32; 3]>,
    pub tetrahedra: Vec<[u32; 4]>,
}

impl OffMesh {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let mesh = Self::from_reader(file)?;
        debug!(
            "read {}: {} vertices, {} faces, {} tetrahedra",
            path.display(),
            mesh.vertices.len(),
            mesh.faces.len(),
            mesh.tetrahedra.len()
        );
        Ok(mesh)
    }

    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = text
            .lines()
            .map(|l| l.split('#').next().unwrap_or("").trim())
            .filter(|l| !l.is_empty());

        match lines.next() {
            Some("OFF") => {}
            Some(other) => {
                return Err(SketchError::parse(format!(
                    "expected OFF header, found {:?}",
                    other
                )))
            }
            None => return Err(SketchError::parse("empty OFF input")),
        }

        let counts = lines
            .next()
            .ok_or_else(|| SketchError::parse("missing OFF counts line"))?;
        let counts = counts
            .split_whitespace()
            .map(|t| parse_token::<usize>(t, "count"))
            .collect::<Result<Vec<_>>>()?;
        let (num_vertices, num_faces, num_tetrahedra) = match counts[..] {
            [v, f] => (v, f, 0),
            [v, f, t] => (v, f, t),
            _ => {
                return Err(SketchError::parse(format!(
                    "OFF counts line needs 2 or 3 values, got {}",
                    counts.len()
                )))
            }
        };

        let mut tokens = Tokens {
            inner: lines.flat_map(str::split_whitespace),
        };

        let mut vertices = Vec::with_capacity(num_vertices.min(PREALLOC_LIMIT));
        for _ in 0..num_vertices {
            let x = tokens.next_value::<f64>("vertex coordinate")?;
            let y = tokens.next_value::<f64>("vertex coordinate")?;
            let z = tokens.next_value::<f64>("vertex coordinate")?;
            vertices.push(Point3::new(x, y, z));
        }

        let mut faces = Vec::with_capacity(num_faces.min(PREALLOC_LIMIT));
        for _ in 0..num_faces {
            faces.push(tokens.record::<3>(num_vertices)?);
        }

        let mut tetrahedra = Vec::with_capacity(num_tetrahedra.min(PREALLOC_LIMIT));
        for _ in 0..num_tetrahedra {
            tetrahedra.push(tokens.record::<4>(num_vertices)?);
        }

        Ok(Self {
            vertices,
            faces,
            tetrahedra,
        })
    }

    /// Triangle mesh of the faces plus the four faces of every tetrahedron.
    pub fn to_triangle_mesh(&self) -> TriangleMesh {
        let mut indices: Vec<u32> = self.faces.iter().flatten().copied().collect();
        for &[a, b, c, d] in &self.tetrahedra {
            indices.extend_from_slice(&[a, c, b, a, b, d, b, c, d, a, d, c]);
        }
        let mut mesh = TriangleMesh {
            positions: self.vertices.clone(),
            normals: Vec::new(),
            indices,
        };
        mesh.compute_normals();
        mesh
    }
}

/// Read an OFF file into a triangle mesh.
pub fn read_off(path: impl AsRef<Path>) -> Result<TriangleMesh> {
    OffMesh::from_path(path).map(|m| m.to_triangle_mesh())
}

struct Tokens<I> {
    inner: I,
}

impl<'a, I: Iterator<Item = &'a str>> Tokens<I> {
    fn next_value<T: std::str::FromStr>(&mut self, what: &str) -> Result<T> {
        let token = self
            .inner
            .next()
            .ok_or_else(|| SketchError::parse(format!("unexpected end of OFF input reading {}", what)))?;
        parse_token(token, what)
    }

    /// One `N i_0 .. i_{N-1}` element record with in-range indices.
    fn record<const N: usize>(&mut self, num_vertices: usize) -> Result<[u32; N]> {
        let arity = self.next_value::<usize>("element arity")?;
        if arity != N {
            return Err(SketchError::parse(format!(
                "expected element with {} vertices, got {}",
                N, arity
            )));
        }
        let mut out = [0u32; N];
        for slot in &mut out {
            let idx = self.next_value::<u32>("vertex index")?;
            if idx as usize >= num_vertices {
                return Err(SketchError::parse(format!(
                    "vertex index {} out of range for {} vertices",
                    idx, num_vertices
                )));
            }
            *slot = idx;
        }
        Ok(out)
    }
}

fn parse_token<T: std::str::FromStr>(token: &str, what: &str) -> Result<T> {
    token
        .parse()
        .map_err(|_| SketchError::parse(format!("invalid {}: {:?}", what, token)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    const TETRA: &str = "OFF
# unit tetrahedron
4 4 1
0 0 0
1 0 0
0 1 0
0 0 1
3 0 2 1
3 0 1 3
3 1 2 3
3 0 3 2
4 0 1 2 3
";

    #[test]
    fn test_parse_faces_and_tetrahedra() {
        let mesh = OffMesh::parse(TETRA).unwrap();
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.vertices[3], Point3::new(0.0, 0.0, 1.0));
        assert_eq!(mesh.faces[1], [0, 1, 3]);
        assert_eq!(mesh.tetrahedra, vec![[0, 1, 2, 3]]);
    }

    #[test]
    fn test_two_value_counts() {
        let mesh = OffMesh::parse("OFF\n3 1\n0 0 0\n1 0 0\n0 1 0\n3 0 1 2\n").unwrap();
        assert_eq!(mesh.faces, vec![[0, 1, 2]]);
        assert!(mesh.tetrahedra.is_empty());
    }

    #[test]
    fn test_records_may_wrap_lines() {
        let mesh = OffMesh::parse("OFF\n3 1 0\n0 0 0 1 0\n0 0 1 0\n3 0\n1 2\n").unwrap();
        assert_eq!(mesh.vertices[1], Point3::new(1.0, 0.0, 0.0));
        assert_eq!(mesh.faces, vec![[0, 1, 2]]);
    }

    #[test]
    fn test_bad_header() {
        let err = OffMesh::parse("PLY\n0 0 0\n").unwrap_err();
        assert!(matches!(err, SketchError::Parse(_)));
        assert!(matches!(OffMesh::parse("").unwrap_err(), SketchError::Parse(_)));
    }

    #[test]
    fn test_bad_counts() {
        assert!(matches!(OffMesh::parse("OFF\n3\n").unwrap_err(), SketchError::Parse(_)));
        assert!(matches!(OffMesh::parse("OFF\n3 x 0\n").unwrap_err(), SketchError::Parse(_)));
    }

    #[test]
    fn test_non_triangle_face() {
        let err = OffMesh::parse("OFF\n4 1 0\n0 0 0\n1 0 0\n1 1 0\n0 1 0\n4 0 1 2 3\n").unwrap_err();
        assert!(err.to_string().contains("3 vertices"), "{}", err);
    }

    #[test]
    fn test_truncated_and_out_of_range() {
        assert!(matches!(
            OffMesh::parse("OFF\n3 1 0\n0 0 0\n1 0 0\n").unwrap_err(),
            SketchError::Parse(_)
        ));
        assert!(matches!(
            OffMesh::parse("OFF\n3 1 0\n0 0 0\n1 0 0\n0 1 0\n3 0 1 7\n").unwrap_err(),
            SketchError::Parse(_)
        ));
    }

    #[test]
    fn test_huge_counts_are_truncation_errors() {
        let err = OffMesh::parse("OFF\n18446744073709551615 0\n0 0 0\n").unwrap_err();
        assert!(matches!(err, SketchError::Parse(_)), "{}", err);
        let err = OffMesh::parse("OFF\n1 100000000000 0\n0 0 0\n3 0 0 0\n").unwrap_err();
        assert!(err.to_string().contains("end of OFF input"), "{}", err);
        let err = OffMesh::parse("OFF\n0 0 18446744073709551615\n").unwrap_err();
        assert!(matches!(err, SketchError::Parse(_)));
    }

    #[test]
    fn test_tetrahedra_become_faces() {
        let mesh = OffMesh::parse(TETRA).unwrap().to_triangle_mesh();
        assert_eq!(mesh.triangle_count(), 8);
        assert_eq!(mesh.edges().len(), 6);
    }

    #[test]
    fn test_from_reader_and_path() {
        let mesh = OffMesh::from_reader(Cursor::new(TETRA)).unwrap();
        assert_eq!(mesh.faces.len(), 4);

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TETRA.as_bytes()).unwrap();
        let mesh = read_off(file.path()).unwrap();
        assert_eq!(mesh.vertex_count(), 4);

        let err = read_off(file.path().with_extension("missing")).unwrap_err();
        assert!(matches!(err, SketchError::Io(_)));
    }
}
