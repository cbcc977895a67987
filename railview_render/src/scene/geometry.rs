/// Built-in geometry generators

use crate::gfx::MeshData;

/// Unit ground plane in the XZ plane, facing +Y.
/// Scaled to world size through the model matrix.
pub fn ground_plane() -> MeshData {
    MeshData {
        positions: vec![
            [-0.5, 0.0, -0.5],
            [0.5, 0.0, -0.5],
            [0.5, 0.0, 0.5],
            [-0.5, 0.0, 0.5],
        ],
        normals: vec![[0.0, 1.0, 0.0]; 4],
        uvs: vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]],
        indices: vec![0, 1, 2, 0, 2, 3],
    }
}

/// Fullscreen quad in clip space for composite and filter passes
pub fn fullscreen_quad() -> MeshData {
    MeshData {
        positions: vec![
            [-1.0, -1.0, 0.0],
            [1.0, -1.0, 0.0],
            [1.0, 1.0, 0.0],
            [-1.0, 1.0, 0.0],
        ],
        normals: vec![[0.0, 0.0, 1.0]; 4],
        uvs: vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]],
        indices: vec![0, 1, 2, 0, 2, 3],
    }
}

/// Regular water grid in the XZ plane, `resolution` quads per side,
/// spanning `size` world units and centered on the origin.
///
/// The vertex shader displaces Y, so the grid itself is flat.
pub fn water_grid(resolution: u32, size: f32) -> MeshData {
    let resolution = resolution.max(1);
    let verts_per_side = resolution + 1;
    let step = size / resolution as f32;
    let half = size / 2.0;

    let mut mesh = MeshData::default();
    for z in 0..verts_per_side {
        for x in 0..verts_per_side {
            let wx = -half + x as f32 * step;
            let wz = -half + z as f32 * step;
            mesh.positions.push([wx, 0.0, wz]);
            mesh.normals.push([0.0, 1.0, 0.0]);
            mesh.uvs.push([
                x as f32 / resolution as f32,
                z as f32 / resolution as f32,
            ]);
        }
    }
    for z in 0..resolution {
        for x in 0..resolution {
            let i = z * verts_per_side + x;
            mesh.indices.extend_from_slice(&[
                i,
                i + 1,
                i + verts_per_side + 1,
                i,
                i + verts_per_side + 1,
                i + verts_per_side,
            ]);
        }
    }
    mesh
}

/// Axis-aligned cube marker centered on the origin
pub fn point_marker(size: f32) -> MeshData {
    let h = size / 2.0;
    let faces: [([f32; 3], [[f32; 3]; 4]); 6] = [
        // +X
        ([1.0, 0.0, 0.0], [[h, -h, -h], [h, h, -h], [h, h, h], [h, -h, h]]),
        // -X
        ([-1.0, 0.0, 0.0], [[-h, -h, h], [-h, h, h], [-h, h, -h], [-h, -h, -h]]),
        // +Y
        ([0.0, 1.0, 0.0], [[-h, h, -h], [-h, h, h], [h, h, h], [h, h, -h]]),
        // -Y
        ([0.0, -1.0, 0.0], [[-h, -h, h], [-h, -h, -h], [h, -h, -h], [h, -h, h]]),
        // +Z
        ([0.0, 0.0, 1.0], [[-h, -h, h], [h, -h, h], [h, h, h], [-h, h, h]]),
        // -Z
        ([0.0, 0.0, -1.0], [[h, -h, -h], [-h, -h, -h], [-h, h, -h], [h, h, -h]]),
    ];

    let mut mesh = MeshData::default();
    for (normal, corners) in faces {
        let base = mesh.positions.len() as u32;
        for corner in corners {
            mesh.positions.push(corner);
            mesh.normals.push(normal);
        }
        mesh.uvs.extend_from_slice(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]);
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    mesh
}

#[cfg(test)]
#[path = "geometry_tests.rs"]
mod tests;
