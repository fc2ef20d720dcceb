//! Sweeps a ring along a curve to build an open tube mesh.

use bevy::math::{Quat, Vec3};
use bevy::render::mesh::{Indices, Mesh, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;

use crate::star::PathCurve;

/// Vertex data of a swept tube. Rings are `radial_segments + 1` vertices wide
/// (seam duplicated for UVs); the ends are left open.
#[derive(Clone, Debug, Default)]
pub struct TubeGeometry {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub uvs: Vec<[f32; 2]>,
    pub indices: Vec<u32>,
}

impl TubeGeometry {
    pub fn extrude(
        curve: &impl PathCurve,
        tubular_segments: usize,
        radius: f32,
        radial_segments: usize,
    ) -> Self {
        let tubular = tubular_segments.max(1);
        let radial = radial_segments.max(3);
        let frames = transport_frames(curve, tubular);

        let ring = radial + 1;
        let mut geo = TubeGeometry {
            positions: Vec::with_capacity((tubular + 1) * ring),
            normals: Vec::with_capacity((tubular + 1) * ring),
            uvs: Vec::with_capacity((tubular + 1) * ring),
            indices: Vec::with_capacity(tubular * radial * 6),
        };

        for (i, frame) in frames.iter().enumerate() {
            let center = curve.position(i as f32 / tubular as f32);
            for j in 0..=radial {
                let v = j as f32 / radial as f32 * std::f32::consts::TAU;
                let normal =
                    (-v.cos() * frame.normal + v.sin() * frame.binormal).normalize_or_zero();
                geo.positions.push((center + radius * normal).to_array());
                geo.normals.push(normal.to_array());
                geo.uvs.push([i as f32 / tubular as f32, j as f32 / radial as f32]);
            }
        }

        let ring = ring as u32;
        for j in 1..=tubular as u32 {
            for i in 1..=radial as u32 {
                let a = ring * (j - 1) + (i - 1);
                let b = ring * j + (i - 1);
                let c = ring * j + i;
                let d = ring * (j - 1) + i;
                geo.indices.extend_from_slice(&[a, b, d, b, c, d]);
            }
        }

        geo
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

impl From<TubeGeometry> for Mesh {
    fn from(geo: TubeGeometry) -> Self {
        Mesh::new(
            PrimitiveTopology::TriangleList,
            RenderAssetUsages::default(),
        )
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, geo.positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, geo.normals)
        .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, geo.uvs)
        .with_inserted_indices(Indices::U32(geo.indices))
    }
}

#[derive(Clone, Copy, Debug)]
struct Frame {
    normal: Vec3,
    binormal: Vec3,
}

/// Rotation-minimizing frames: the first normal is perpendicular to the
/// tangent along its smallest axis, later normals are rotated by the turn
/// between consecutive tangents.
fn transport_frames(curve: &impl PathCurve, tubular: usize) -> Vec<Frame> {
    let tangents: Vec<Vec3> = (0..=tubular)
        .map(|i| curve.tangent(i as f32 / tubular as f32))
        .scan(Vec3::X, |last, t| {
            // Keep the previous direction where the curve stalls.
            if t != Vec3::ZERO {
                *last = t;
            }
            Some(*last)
        })
        .collect();

    let t0 = tangents[0];
    let abs = t0.abs();
    let axis = if abs.x <= abs.y && abs.x <= abs.z {
        Vec3::X
    } else if abs.y <= abs.z {
        Vec3::Y
    } else {
        Vec3::Z
    };
    let mut normal = t0.cross(t0.cross(axis)).normalize_or_zero();
    if normal == Vec3::ZERO {
        normal = t0.any_orthonormal_vector();
    }

    let mut frames = Vec::with_capacity(tangents.len());
    frames.push(Frame {
        normal,
        binormal: t0.cross(normal),
    });

    for pair in tangents.windows(2) {
        let (prev, next) = (pair[0], pair[1]);
        if let Some(axis) = prev.cross(next).try_normalize() {
            let angle = prev.dot(next).clamp(-1.0, 1.0).acos();
            normal = Quat::from_axis_angle(axis, angle) * normal;
        }
        frames.push(Frame {
            normal,
            binormal: next.cross(normal),
        });
    }

    frames
}
