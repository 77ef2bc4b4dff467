use cgmath::Vector3;

/// Compute a bounding sphere for a set of 3D points using Ritter's algorithm.
///
/// Returns (center, radius). The algorithm is approximate but fast:
/// 1. Find the two most distant points along any axis.
/// 2. Create an initial sphere containing those two points.
/// 3. Expand the sphere to include all remaining points.
pub fn ritter_bounding_sphere(points: &[Vector3<f32>]) -> (Vector3<f32>, f32) {
    if points.is_empty() {
        return (Vector3::new(0.0, 0.0, 0.0), 0.0);
    }

    if points.len() == 1 {
        return (points[0], 0.0);
    }

    let mut min_x = points[0];
    let mut max_x = points[0];
    let mut min_y = points[0];
    let mut max_y = points[0];
    let mut min_z = points[0];
    let mut max_z = points[0];

    for p in points.iter() {
        if p.x < min_x.x {
            min_x = *p;
        }
        if p.x > max_x.x {
            max_x = *p;
        }
        if p.y < min_y.y {
            min_y = *p;
        }
        if p.y > max_y.y {
            max_y = *p;
        }
        if p.z < min_z.z {
            min_z = *p;
        }
        if p.z > max_z.z {
            max_z = *p;
        }
    }

    let dx = distance_sq(&min_x, &max_x);
    let dy = distance_sq(&min_y, &max_y);
    let dz = distance_sq(&min_z, &max_z);

    let (p1, p2) = if dx >= dy && dx >= dz {
        (min_x, max_x)
    } else if dy >= dx && dy >= dz {
        (min_y, max_y)
    } else {
        (min_z, max_z)
    };

    let mut center = (p1 + p2) * 0.5;
    let mut radius = distance(&p1, &p2) * 0.5;

    for p in points.iter() {
        let dist = distance(&center, p);
        if dist > radius {
            let new_radius = (radius + dist) * 0.5;
            let k = (new_radius - radius) / dist;
            center = center + ((*p) - center) * k;
            radius = new_radius;
        }
    }

    (center, radius)
}

/// Axis-aligned bounding box over a point set. Returns (min, max); an empty
/// set collapses to the origin.
pub fn bounding_box(points: &[Vector3<f32>]) -> (Vector3<f32>, Vector3<f32>) {
    if points.is_empty() {
        return (Vector3::new(0.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 0.0));
    }

    let mut min = points[0];
    let mut max = points[0];
    for p in points.iter() {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        min.z = min.z.min(p.z);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
        max.z = max.z.max(p.z);
    }
    (min, max)
}

fn distance_sq(a: &Vector3<f32>, b: &Vector3<f32>) -> f32 {
    let d = *a - *b;
    d.x * d.x + d.y * d.y + d.z * d.z
}

fn distance(a: &Vector3<f32>, b: &Vector3<f32>) -> f32 {
    distance_sq(a, b).sqrt()
}
