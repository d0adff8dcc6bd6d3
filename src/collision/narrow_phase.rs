use tracing::trace;

use crate::bodies::RigidBody;
use crate::collision::contact_manifold::ContactManifold;
use crate::collision::polygon_clipping::polygon_to_polygon;
use crate::math::{Vector2, EPSILON};
use crate::shapes::{Circle, Polygon, Shape};

/// Fills `manifold` with the contact geometry between two bodies
///
/// The routine is chosen by the ordered pair of shape kinds. The normal always
/// points from `body_a` to `body_b`; a polygon–circle pair reuses the
/// circle–polygon routine with the bodies swapped and flips the result.
pub fn collide(manifold: &mut ContactManifold, body_a: &RigidBody, body_b: &RigidBody) {
    match (body_a.get_shape(), body_b.get_shape()) {
        (Shape::Circle(a), Shape::Circle(b)) => circle_to_circle(manifold, body_a, a, body_b, b),
        (Shape::Circle(a), Shape::Polygon(b)) => circle_to_polygon(manifold, body_a, a, body_b, b),
        (Shape::Polygon(a), Shape::Circle(b)) => polygon_to_circle(manifold, body_a, a, body_b, b),
        (Shape::Polygon(a), Shape::Polygon(b)) => polygon_to_polygon(manifold, body_a, a, body_b, b),
    }
}

/// Circle against circle
pub fn circle_to_circle(
    manifold: &mut ContactManifold,
    body_a: &RigidBody,
    a: &Circle,
    body_b: &RigidBody,
    b: &Circle,
) {
    manifold.contact_count = 0;

    let normal = body_b.get_position() - body_a.get_position();
    let dist_sqr = normal.length_squared();
    let radius = a.get_radius() + b.get_radius();

    if dist_sqr >= radius * radius {
        return;
    }

    let distance = dist_sqr.sqrt();
    manifold.contact_count = 1;

    if distance == 0.0 {
        trace!(pair = ?manifold.pair, "coincident circle centers, using default normal");
        manifold.penetration = a.get_radius();
        manifold.normal = Vector2::unit_x();
        manifold.contacts[0] = body_a.get_position();
    } else {
        manifold.penetration = radius - distance;
        manifold.normal = normal / distance;
        manifold.contacts[0] = manifold.normal * a.get_radius() + body_a.get_position();
    }
}

/// Circle (body A) against convex polygon (body B)
pub fn circle_to_polygon(
    manifold: &mut ContactManifold,
    body_a: &RigidBody,
    circle: &Circle,
    body_b: &RigidBody,
    polygon: &Polygon,
) {
    manifold.contact_count = 0;

    let radius = circle.get_radius();
    let u = polygon.get_orientation();
    let vertices = polygon.get_vertices();
    let normals = polygon.get_normals();

    // Circle center in the polygon's model space
    let center = u.transpose() * (body_a.get_position() - body_b.get_position());

    // Face of least penetration
    let mut separation = f32::NEG_INFINITY;
    let mut face_normal = 0;
    for (i, (normal, vertex)) in normals.iter().zip(vertices).enumerate() {
        let s = normal.dot(&(center - *vertex));

        if s > radius {
            return;
        }

        if s > separation {
            separation = s;
            face_normal = i;
        }
    }

    let v1 = vertices[face_normal];
    let v2 = vertices[polygon.next_index(face_normal)];

    // Center inside the polygon
    if separation < EPSILON {
        manifold.contact_count = 1;
        manifold.normal = -(u * normals[face_normal]);
        manifold.contacts[0] = manifold.normal * radius + body_a.get_position();
        manifold.penetration = radius;
        return;
    }

    // Voronoi region of the face the center lies in
    let dot1 = (center - v1).dot(&(v2 - v1));
    let dot2 = (center - v2).dot(&(v1 - v2));

    if dot1 <= 0.0 {
        if center.distance_squared(&v1) > radius * radius {
            return;
        }

        manifold.normal = (u * (v1 - center)).normalize();
        manifold.contacts[0] = u * v1 + body_b.get_position();
    } else if dot2 <= 0.0 {
        if center.distance_squared(&v2) > radius * radius {
            return;
        }

        manifold.normal = (u * (v2 - center)).normalize();
        manifold.contacts[0] = u * v2 + body_b.get_position();
    } else {
        let n = normals[face_normal];
        if (center - v1).dot(&n) > radius {
            return;
        }

        manifold.normal = -(u * n);
        manifold.contacts[0] = manifold.normal * radius + body_a.get_position();
    }

    manifold.penetration = radius - separation;
    manifold.contact_count = 1;
}

/// Convex polygon (body A) against circle (body B)
pub fn polygon_to_circle(
    manifold: &mut ContactManifold,
    body_a: &RigidBody,
    polygon: &Polygon,
    body_b: &RigidBody,
    circle: &Circle,
) {
    circle_to_polygon(manifold, body_b, circle, body_a, polygon);
    manifold.normal = -manifold.normal;
}
