use crate::error::PhysicsError;
use crate::math::{Matrix2, Vector2, EPSILON, PI};
use crate::shapes::MassProperties;
use crate::Result;

/// Maximum number of vertices a polygon can hold
pub const MAX_POLY_VERTEX_COUNT: usize = 64;

/// A convex polygon collision shape
///
/// Vertices are stored counter-clockwise in local space. Normal `i` is the
/// outward unit normal of the edge from vertex `i` to vertex `i + 1`. The
/// public constructors only produce polygons with 3 to 64 vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    /// Local-space vertices, centroid-relative once the mass has been computed
    vertices: Vec<Vector2>,

    /// Outward face normals, one per edge
    normals: Vec<Vector2>,

    /// Orientation transform
    u: Matrix2,
}

impl Polygon {
    /// Empty polygon, only valid as the target of `set` or `set_box`
    fn new() -> Self {
        Self {
            vertices: Vec::new(),
            normals: Vec::new(),
            u: Matrix2::identity(),
        }
    }

    /// Creates an axis-aligned box with the given half extents
    pub fn rectangle(half_width: f32, half_height: f32) -> Self {
        let mut polygon = Self::new();
        polygon.set_box(half_width, half_height);
        polygon
    }

    /// Creates a polygon from the convex hull of a point set
    pub fn from_points(points: &[Vector2]) -> Result<Self> {
        let mut polygon = Self::new();
        polygon.set(points)?;
        Ok(polygon)
    }

    /// Creates a regular polygon with `sides` vertices on a circle of `radius`
    pub fn regular(sides: usize, radius: f32) -> Result<Self> {
        let step = 2.0 * PI / sides.max(1) as f32;
        let points: Vec<Vector2> = (0..sides)
            .map(|i| Vector2::new(radius, 0.0).rotate(step * i as f32))
            .collect();
        Self::from_points(&points)
    }

    /// Returns the local-space vertices
    pub fn get_vertices(&self) -> &[Vector2] {
        &self.vertices
    }

    /// Returns the outward face normals
    pub fn get_normals(&self) -> &[Vector2] {
        &self.normals
    }

    /// Returns the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the orientation transform
    pub fn get_orientation(&self) -> Matrix2 {
        self.u
    }

    /// Sets the orientation transform from an angle in radians
    pub fn set_orientation(&mut self, radians: f32) {
        self.u.set(radians);
    }

    /// Returns vertex `i`, wrapping around past the last one
    #[inline]
    pub fn vertex(&self, i: usize) -> Vector2 {
        self.vertices[i % self.vertices.len()]
    }

    /// Returns the index of the vertex following `i`
    #[inline]
    pub fn next_index(&self, i: usize) -> usize {
        if i + 1 < self.vertices.len() { i + 1 } else { 0 }
    }

    /// Iterates over the vertices transformed into world space
    pub fn world_vertices(&self, position: Vector2) -> impl Iterator<Item = Vector2> + '_ {
        self.vertices.iter().map(move |v| self.u * *v + position)
    }

    /// Turns the polygon into an axis-aligned box with the given half extents
    pub fn set_box(&mut self, half_width: f32, half_height: f32) {
        self.vertices = vec![
            Vector2::new(-half_width, -half_height),
            Vector2::new(half_width, -half_height),
            Vector2::new(half_width, half_height),
            Vector2::new(-half_width, half_height),
        ];
        self.normals = vec![
            Vector2::new(0.0, -1.0),
            Vector2::new(1.0, 0.0),
            Vector2::new(0.0, 1.0),
            Vector2::new(-1.0, 0.0),
        ];
    }

    /// Replaces the polygon with the convex hull of `points` (gift wrapping)
    ///
    /// On error the polygon is left unchanged.
    pub fn set(&mut self, points: &[Vector2]) -> Result<()> {
        let count = points.len();
        if count < 3 {
            return Err(PhysicsError::TooFewVertices(count));
        }
        if count > MAX_POLY_VERTEX_COUNT {
            return Err(PhysicsError::TooManyVertices(count));
        }

        // Rightmost point, most negative y on ties
        let mut right_most = 0;
        let mut highest_x = points[0].x;
        for (i, point) in points.iter().enumerate().skip(1) {
            if point.x > highest_x {
                highest_x = point.x;
                right_most = i;
            } else if point.x == highest_x && point.y < points[right_most].y {
                right_most = i;
            }
        }

        let mut hull: Vec<usize> = Vec::with_capacity(count);
        let mut index_hull = right_most;

        loop {
            if hull.len() >= count {
                return Err(PhysicsError::InvalidParameter(
                    "convex hull construction did not close".to_string(),
                ));
            }
            hull.push(index_hull);

            // Pick the most clockwise candidate, preferring the farther point when collinear
            let current = points[index_hull];
            let mut next_hull_index = 0;
            for i in 1..count {
                if next_hull_index == index_hull {
                    next_hull_index = i;
                    continue;
                }

                let e1 = points[next_hull_index] - current;
                let e2 = points[i] - current;
                let c = e1.cross(&e2);
                if c < 0.0 {
                    next_hull_index = i;
                }
                if c == 0.0 && e2.length_squared() > e1.length_squared() {
                    next_hull_index = i;
                }
            }

            index_hull = next_hull_index;
            if next_hull_index == right_most {
                break;
            }
        }

        if hull.len() < 3 {
            return Err(PhysicsError::TooFewVertices(hull.len()));
        }

        let vertices: Vec<Vector2> = hull.iter().map(|&i| points[i]).collect();
        let mut normals = Vec::with_capacity(vertices.len());
        for i1 in 0..vertices.len() {
            let i2 = if i1 + 1 < vertices.len() { i1 + 1 } else { 0 };
            let face = vertices[i2] - vertices[i1];

            if face.length_squared() <= EPSILON * EPSILON {
                return Err(PhysicsError::DegenerateEdge(i1));
            }

            normals.push(Vector2::new(face.y, -face.x).normalize());
        }

        self.vertices = vertices;
        self.normals = normals;
        Ok(())
    }

    /// Returns the vertex farthest along `direction`
    ///
    /// Ties keep the first vertex found.
    pub fn support(&self, direction: Vector2) -> Vector2 {
        let mut best_projection = f32::NEG_INFINITY;
        let mut best_vertex = Vector2::zero();

        for vertex in &self.vertices {
            let projection = vertex.dot(&direction);
            if projection > best_projection {
                best_vertex = *vertex;
                best_projection = projection;
            }
        }

        best_vertex
    }

    /// Computes mass properties and re-centers the vertices on the centroid
    pub fn compute_mass(&mut self, density: f32) -> MassProperties {
        const K_INV3: f32 = 1.0 / 3.0;

        let mut centroid = Vector2::zero();
        let mut area = 0.0;
        let mut inertia = 0.0;

        for i1 in 0..self.vertices.len() {
            let p1 = self.vertices[i1];
            let p2 = self.vertices[self.next_index(i1)];

            let d = p1.cross(&p2);
            let triangle_area = 0.5 * d;
            area += triangle_area;

            // Triangle centroid weighted by its area
            centroid += (p1 + p2) * (triangle_area * K_INV3);

            let int_x2 = p1.x * p1.x + p2.x * p1.x + p2.x * p2.x;
            let int_y2 = p1.y * p1.y + p2.y * p1.y + p2.y * p2.y;
            inertia += (0.25 * K_INV3 * d) * (int_x2 + int_y2);
        }

        if area.abs() > EPSILON {
            centroid *= 1.0 / area;
        }

        for vertex in &mut self.vertices {
            *vertex -= centroid;
        }

        MassProperties::new(density * area, density * inertia)
    }
}
