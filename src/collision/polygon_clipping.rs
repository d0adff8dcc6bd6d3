//! Polygon against polygon: separating axis test over face normals, then
//! clipping of the incident face against the reference face's side planes.

use tracing::trace;

use crate::bodies::RigidBody;
use crate::collision::contact_manifold::ContactManifold;
use crate::math::{bias_greater_than, Vector2};
use crate::shapes::Polygon;

/// A polygon together with the world position of its body
#[derive(Clone, Copy)]
struct Placed<'a> {
    polygon: &'a Polygon,
    position: Vector2,
}

impl Placed<'_> {
    #[inline]
    fn world_vertex(&self, i: usize) -> Vector2 {
        self.polygon.get_orientation() * self.polygon.vertex(i) + self.position
    }
}

/// Finds the face of `a` with the greatest signed distance to `b`
///
/// Returns the distance and the face index. A non-negative distance means the
/// face is a separating axis.
fn find_axis_least_penetration(a: Placed<'_>, b: Placed<'_>) -> (f32, usize) {
    let mut best_distance = f32::NEG_INFINITY;
    let mut best_index = 0;

    let a_u = a.polygon.get_orientation();
    let b_u_t = b.polygon.get_orientation().transpose();

    for (i, normal) in a.polygon.get_normals().iter().enumerate() {
        // Face normal of A in B's model space
        let n = b_u_t * (a_u * *normal);

        let support = b.polygon.support(-n);

        // Vertex on A's face in B's model space
        let v = b_u_t * (a.world_vertex(i) - b.position);

        let d = n.dot(&(support - v));
        if d > best_distance {
            best_distance = d;
            best_index = i;
        }
    }

    (best_distance, best_index)
}

/// Returns the world-space endpoints of the incident polygon's face that is
/// most anti-parallel to the reference face
fn find_incident_face(reference: Placed<'_>, incident: Placed<'_>, reference_index: usize) -> [Vector2; 2] {
    let reference_normal = reference.polygon.get_normals()[reference_index];

    // Reference normal in the incident polygon's model space
    let reference_normal = incident.polygon.get_orientation().transpose()
        * (reference.polygon.get_orientation() * reference_normal);

    let mut incident_face = 0;
    let mut min_dot = f32::INFINITY;
    for (i, normal) in incident.polygon.get_normals().iter().enumerate() {
        let dot = reference_normal.dot(normal);
        if dot < min_dot {
            min_dot = dot;
            incident_face = i;
        }
    }

    [
        incident.world_vertex(incident_face),
        incident.world_vertex(incident.polygon.next_index(incident_face)),
    ]
}

/// Clips `face` against the plane `dot(n, x) = c`, keeping the side where `dot(n, x) <= c`
///
/// Returns the number of points left in `face`.
fn clip(n: Vector2, c: f32, face: &mut [Vector2; 2]) -> usize {
    let mut sp = 0;
    let mut out = *face;

    // Signed distances of the endpoints to the line
    let d1 = n.dot(&face[0]) - c;
    let d2 = n.dot(&face[1]) - c;

    if d1 <= 0.0 {
        out[sp] = face[0];
        sp += 1;
    }
    if d2 <= 0.0 {
        out[sp] = face[1];
        sp += 1;
    }

    // Endpoints on opposite sides; strict test so -0.0 does not count
    if d1 * d2 < 0.0 && sp < 2 {
        let alpha = d1 / (d1 - d2);
        out[sp] = face[0] + (face[1] - face[0]) * alpha;
        sp += 1;
    }

    *face = out;
    sp
}

/// Convex polygon (body A) against convex polygon (body B)
pub fn polygon_to_polygon(
    manifold: &mut ContactManifold,
    body_a: &RigidBody,
    a: &Polygon,
    body_b: &RigidBody,
    b: &Polygon,
) {
    manifold.contact_count = 0;

    let a = Placed { polygon: a, position: body_a.get_position() };
    let b = Placed { polygon: b, position: body_b.get_position() };

    let (penetration_a, face_a) = find_axis_least_penetration(a, b);
    if penetration_a >= 0.0 {
        return;
    }

    let (penetration_b, face_b) = find_axis_least_penetration(b, a);
    if penetration_b >= 0.0 {
        return;
    }

    // A keeps the reference face on near-ties
    let (reference, incident, reference_index, flip) = if bias_greater_than(penetration_a, penetration_b) {
        (a, b, face_a, false)
    } else {
        (b, a, face_b, true)
    };

    let mut incident_face = find_incident_face(reference, incident, reference_index);

    let v1 = reference.world_vertex(reference_index);
    let v2 = reference.world_vertex(reference.polygon.next_index(reference_index));

    let side_plane_normal = (v2 - v1).normalize();
    let ref_face_normal = Vector2::new(side_plane_normal.y, -side_plane_normal.x);

    let ref_c = ref_face_normal.dot(&v1);
    let neg_side = -side_plane_normal.dot(&v1);
    let pos_side = side_plane_normal.dot(&v2);

    if clip(-side_plane_normal, neg_side, &mut incident_face) < 2 {
        trace!(pair = ?manifold.pair, "incident face clipped away on negative side");
        return;
    }

    if clip(side_plane_normal, pos_side, &mut incident_face) < 2 {
        trace!(pair = ?manifold.pair, "incident face clipped away on positive side");
        return;
    }

    manifold.normal = if flip { -ref_face_normal } else { ref_face_normal };

    // Keep only points behind the reference face
    let mut contact_count = 0;
    let mut penetration = 0.0;
    for point in incident_face {
        let separation = ref_face_normal.dot(&point) - ref_c;
        if separation <= 0.0 {
            manifold.contacts[contact_count] = point;
            penetration += -separation;
            contact_count += 1;
        }
    }

    manifold.penetration = if contact_count > 0 {
        penetration / contact_count as f32
    } else {
        0.0
    };
    manifold.contact_count = contact_count;
}
