use impulse_2d::{
    collision::{
        narrow_phase, BroadPhase, BruteForceBroadPhase, CollisionPair, ContactManifold,
        ContactSolver, SequentialImpulseSolver,
    },
    core::BodyStorage,
    math::{Vector2, PI},
    shapes::Shape,
    PhysicsWorld, RigidBody,
};
use approx::{assert_relative_eq, assert_abs_diff_eq};

fn circle(radius: f32, x: f32, y: f32) -> RigidBody {
    RigidBody::new(Shape::circle(radius), Vector2::new(x, y))
}

fn rectangle(half_width: f32, half_height: f32, x: f32, y: f32) -> RigidBody {
    RigidBody::new(Shape::rectangle(half_width, half_height), Vector2::new(x, y))
}

/// Stores the two bodies and returns them with an empty manifold for the pair
fn manifold_for(a: RigidBody, b: RigidBody) -> (BodyStorage<RigidBody>, ContactManifold) {
    let mut storage = BodyStorage::new();
    let handle_a = storage.add(a);
    let handle_b = storage.add(b);
    (storage, ContactManifold::new(CollisionPair::new(handle_a, handle_b)))
}

fn collide(storage: &BodyStorage<RigidBody>, manifold: &mut ContactManifold) {
    let body_a = storage.get(manifold.pair.body_a).expect("body a");
    let body_b = storage.get(manifold.pair.body_b).expect("body b");
    manifold.solve(body_a, body_b);
}

#[test]
fn test_overlapping_circles() {
    let (storage, mut manifold) = manifold_for(circle(1.0, 0.0, 0.0), circle(1.0, 1.5, 0.0));
    collide(&storage, &mut manifold);

    assert_eq!(manifold.contact_count, 1);
    assert_relative_eq!(manifold.penetration, 0.5);
    assert_abs_diff_eq!(manifold.normal, Vector2::new(1.0, 0.0));
    assert_abs_diff_eq!(manifold.contacts[0], Vector2::new(1.0, 0.0));
}

#[test]
fn test_separated_circles() {
    let (storage, mut manifold) = manifold_for(circle(1.0, 0.0, 0.0), circle(1.0, 3.0, 0.0));
    collide(&storage, &mut manifold);

    assert_eq!(manifold.contact_count, 0);
    assert!(manifold.is_empty());
    assert!(manifold.get_contacts().is_empty());
}

#[test]
fn test_touching_circles_do_not_collide() {
    let (storage, mut manifold) = manifold_for(circle(1.0, 0.0, 0.0), circle(1.0, 2.0, 0.0));
    collide(&storage, &mut manifold);

    assert_eq!(manifold.contact_count, 0);
}

#[test]
fn test_coincident_circles_use_default_normal() {
    let (storage, mut manifold) = manifold_for(circle(2.0, 5.0, 5.0), circle(1.0, 5.0, 5.0));
    collide(&storage, &mut manifold);

    assert_eq!(manifold.contact_count, 1);
    assert_eq!(manifold.normal, Vector2::new(1.0, 0.0));
    assert_eq!(manifold.penetration, 2.0);
    assert_eq!(manifold.contacts[0], Vector2::new(5.0, 5.0));
}

#[test]
fn test_circle_against_polygon_face() {
    let (storage, mut manifold) =
        manifold_for(circle(1.0, 0.0, -1.2), rectangle(2.0, 0.5, 0.0, 0.0));
    collide(&storage, &mut manifold);

    assert_eq!(manifold.contact_count, 1);
    assert_abs_diff_eq!(manifold.normal, Vector2::new(0.0, 1.0), epsilon = 1.0e-6);
    assert_relative_eq!(manifold.penetration, 0.3, epsilon = 1.0e-5);
    assert_abs_diff_eq!(manifold.contacts[0], Vector2::new(0.0, -0.2), epsilon = 1.0e-5);
}

#[test]
fn test_circle_against_polygon_vertex() {
    let (storage, mut manifold) =
        manifold_for(circle(1.0, 2.5, -1.0), rectangle(2.0, 0.5, 0.0, 0.0));
    collide(&storage, &mut manifold);

    let diagonal = 0.5f32.sqrt();
    assert_eq!(manifold.contact_count, 1);
    assert_abs_diff_eq!(manifold.normal, Vector2::new(-diagonal, diagonal), epsilon = 1.0e-5);
    assert_abs_diff_eq!(manifold.contacts[0], Vector2::new(2.0, -0.5), epsilon = 1.0e-5);
}

#[test]
fn test_circle_near_polygon_corner_but_outside() {
    let (storage, mut manifold) =
        manifold_for(circle(1.0, 2.8, -1.3), rectangle(2.0, 0.5, 0.0, 0.0));
    collide(&storage, &mut manifold);

    assert_eq!(manifold.contact_count, 0);
}

#[test]
fn test_circle_center_inside_polygon() {
    let (storage, mut manifold) =
        manifold_for(circle(0.5, 0.0, -0.3), rectangle(2.0, 0.5, 0.0, 0.0));
    collide(&storage, &mut manifold);

    assert_eq!(manifold.contact_count, 1);
    assert_eq!(manifold.penetration, 0.5);
    assert_abs_diff_eq!(manifold.normal, Vector2::new(0.0, 1.0), epsilon = 1.0e-6);
}

#[test]
fn test_polygon_circle_mirrors_circle_polygon() {
    let (storage, mut forward) =
        manifold_for(circle(1.0, 0.3, -1.2), rectangle(2.0, 0.5, 0.0, 0.0));
    collide(&storage, &mut forward);

    let (storage, mut reverse) =
        manifold_for(rectangle(2.0, 0.5, 0.0, 0.0), circle(1.0, 0.3, -1.2));
    collide(&storage, &mut reverse);

    assert_eq!(reverse.contact_count, forward.contact_count);
    assert_eq!(reverse.normal, -forward.normal);
    assert_eq!(reverse.penetration, forward.penetration);
    assert_eq!(reverse.contacts[0], forward.contacts[0]);
}

#[test]
fn test_box_resting_on_ground_has_two_contacts() {
    let (storage, mut manifold) =
        manifold_for(rectangle(5.0, 0.5, 0.0, 0.0), rectangle(0.5, 0.5, 0.0, -0.9));
    collide(&storage, &mut manifold);

    assert_eq!(manifold.contact_count, 2);
    assert_abs_diff_eq!(manifold.normal, Vector2::new(0.0, -1.0), epsilon = 1.0e-6);
    assert_relative_eq!(manifold.penetration, 0.1, epsilon = 1.0e-5);

    for contact in manifold.get_contacts() {
        assert_relative_eq!(contact.y, -0.5, epsilon = 1.0e-5);
        assert!(contact.x.abs() <= 0.5 + 1.0e-5);
    }
}

#[test]
fn test_separated_boxes() {
    let (storage, mut manifold) =
        manifold_for(rectangle(1.0, 1.0, 0.0, 0.0), rectangle(1.0, 1.0, 2.5, 0.0));
    collide(&storage, &mut manifold);

    assert_eq!(manifold.contact_count, 0);
}

#[test]
fn test_rotated_box_corner_contact() {
    let mut diamond = rectangle(0.5, 0.5, 0.0, -1.1);
    diamond.set_orientation(PI / 4.0);

    let (storage, mut manifold) = manifold_for(rectangle(5.0, 0.5, 0.0, 0.0), diamond);
    collide(&storage, &mut manifold);

    // Only the lowest corner of the diamond reaches below the ground's top face
    assert_eq!(manifold.contact_count, 1);
    assert_abs_diff_eq!(manifold.normal, Vector2::new(0.0, -1.0), epsilon = 1.0e-5);
    assert_relative_eq!(manifold.penetration, 0.5f32.sqrt() - 0.6, epsilon = 1.0e-4);
}

#[test]
fn test_flipped_reference_face_points_normal_from_a_to_b() {
    let mut diamond = rectangle(0.5, 0.5, 0.0, -1.1);
    diamond.set_orientation(PI / 4.0);

    // Ground is B, so its top face is the reference and the normal is negated
    let (storage, mut manifold) = manifold_for(diamond, rectangle(5.0, 0.5, 0.0, 0.0));
    collide(&storage, &mut manifold);

    assert_eq!(manifold.contact_count, 1);
    assert_abs_diff_eq!(manifold.normal, Vector2::new(0.0, 1.0), epsilon = 1.0e-5);
    assert_relative_eq!(manifold.penetration, 0.5f32.sqrt() - 0.6, epsilon = 1.0e-4);
    assert_relative_eq!(manifold.contacts[0].y, 0.5f32.sqrt() - 1.1, epsilon = 1.0e-4);
}

#[test]
fn test_dispatch_matches_direct_routine() {
    let a = circle(1.0, 0.0, 0.0);
    let b = circle(1.0, 1.2, 0.4);
    let (storage, mut direct) = manifold_for(a.clone(), b.clone());

    let circles = (
        a.get_shape().as_circle().expect("circle"),
        b.get_shape().as_circle().expect("circle"),
    );
    narrow_phase::circle_to_circle(&mut direct, &a, circles.0, &b, circles.1);

    let mut dispatched = ContactManifold::new(direct.pair);
    collide(&storage, &mut dispatched);

    assert_eq!(dispatched, direct);
}

#[test]
fn test_broad_phase_skips_static_pairs() {
    let mut storage = BodyStorage::new();
    let ground = storage.add(RigidBody::new_static(Shape::rectangle(5.0, 0.5), Vector2::zero()));
    let wall = storage.add(RigidBody::new_static(Shape::rectangle(0.5, 5.0), Vector2::new(6.0, 0.0)));
    let ball = storage.add(circle(1.0, 0.0, -3.0));

    let mut broad_phase = BruteForceBroadPhase::new();
    broad_phase.update(&storage);
    let pairs = broad_phase.get_collision_pairs();

    assert_eq!(pairs, vec![CollisionPair::new(ground, ball), CollisionPair::new(wall, ball)]);
    assert!(!pairs.contains(&CollisionPair::new(ground, wall)));
    assert_eq!(pairs[0].other(ball), Some(ground));
}

#[test]
fn test_material_mixing() {
    let mut bouncy = circle(1.0, 0.0, 0.0);
    bouncy.set_material(impulse_2d::Material::rubber());
    let (storage, mut manifold) = manifold_for(bouncy, circle(1.0, 1.5, 0.0));

    collide(&storage, &mut manifold);
    let body_b = storage.get(manifold.pair.body_b).expect("body b");
    let mut moving_b = body_b.clone();
    moving_b.set_linear_velocity(Vector2::new(-5.0, 0.0));
    let body_a = storage.get(manifold.pair.body_a).expect("body a");
    manifold.initialize(body_a, &moving_b, 1.0 / 60.0, Vector2::new(0.0, 49.05));

    assert_relative_eq!(manifold.restitution, 0.2);
    assert_relative_eq!(manifold.static_friction, (0.9f32 * 0.5).sqrt());
    assert_relative_eq!(manifold.dynamic_friction, (0.8f32 * 0.3).sqrt());
}

#[test]
fn test_resting_contact_drops_restitution() {
    let (storage, mut manifold) = manifold_for(circle(1.0, 0.0, 0.0), circle(1.0, 1.5, 0.0));
    collide(&storage, &mut manifold);

    let body_a = storage.get(manifold.pair.body_a).expect("body a");
    let body_b = storage.get(manifold.pair.body_b).expect("body b");
    manifold.initialize(body_a, body_b, 1.0 / 60.0, Vector2::new(0.0, 49.05));

    assert_eq!(manifold.restitution, 0.0);
}

#[test]
fn test_head_on_impulse_conserves_momentum() {
    let mut a = circle(1.0, 0.0, 0.0);
    a.set_linear_velocity(Vector2::new(1.0, 0.0));
    let mut b = circle(1.0, 1.9, 0.0);
    b.set_linear_velocity(Vector2::new(-1.0, 0.0));

    let (mut storage, mut manifold) = manifold_for(a, b);
    collide(&storage, &mut manifold);

    let mut solver = SequentialImpulseSolver::new(1, Vector2::zero(), 0.05, 0.4);
    let mut contacts = vec![manifold];
    solver.prepare(&mut contacts, &storage, 1.0 / 60.0);
    solver.solve_velocity(&contacts, &mut storage);

    let body_a = storage.get(contacts[0].pair.body_a).expect("body a");
    let body_b = storage.get(contacts[0].pair.body_b).expect("body b");
    let va = body_a.get_linear_velocity();
    let vb = body_b.get_linear_velocity();

    // Equal masses: total momentum stays zero
    assert_abs_diff_eq!(va + vb, Vector2::zero(), epsilon = 1.0e-5);

    // Separating at e times the approach speed
    assert_relative_eq!(vb.x - va.x, 0.2 * 2.0, epsilon = 1.0e-5);
    assert_abs_diff_eq!(body_a.get_angular_velocity(), 0.0);
}

#[test]
fn test_separating_contact_gets_no_impulse() {
    let mut a = circle(1.0, 0.0, 0.0);
    a.set_linear_velocity(Vector2::new(-1.0, 0.0));
    let (mut storage, mut manifold) = manifold_for(a, circle(1.0, 1.5, 0.0));
    collide(&storage, &mut manifold);

    let mut solver = SequentialImpulseSolver::new(10, Vector2::zero(), 0.05, 0.4);
    let mut contacts = vec![manifold];
    solver.prepare(&mut contacts, &storage, 1.0 / 60.0);
    solver.solve_velocity(&contacts, &mut storage);

    let body_a = storage.get(contacts[0].pair.body_a).expect("body a");
    let body_b = storage.get(contacts[0].pair.body_b).expect("body b");
    assert_eq!(body_a.get_linear_velocity(), Vector2::new(-1.0, 0.0));
    assert_eq!(body_b.get_linear_velocity(), Vector2::zero());
}

#[test]
fn test_static_pair_velocities_are_zeroed() {
    let mut ground = RigidBody::new_static(Shape::rectangle(5.0, 0.5), Vector2::zero());
    ground.set_linear_velocity(Vector2::new(3.0, -2.0));
    let mut post = RigidBody::new_static(Shape::circle(1.0), Vector2::new(0.0, -1.2));
    post.set_linear_velocity(Vector2::new(-1.0, 4.0));
    post.set_angular_velocity(2.0);

    let (mut storage, mut manifold) = manifold_for(ground, post);
    collide(&storage, &mut manifold);
    assert_eq!(manifold.contact_count, 1);

    let mut solver = SequentialImpulseSolver::new(10, Vector2::zero(), 0.05, 0.4);
    let mut contacts = vec![manifold];
    solver.prepare(&mut contacts, &storage, 1.0 / 60.0);
    solver.solve_velocity(&contacts, &mut storage);

    for handle in [contacts[0].pair.body_a, contacts[0].pair.body_b] {
        let body = storage.get(handle).expect("static body");
        assert_eq!(body.get_linear_velocity(), Vector2::zero());
        assert_eq!(body.get_angular_velocity(), 0.0);
    }
}

#[test]
fn test_heavy_body_on_static_ground_still_gets_impulse() {
    let mut boulder = circle(60.0, 0.0, 0.0);
    boulder.set_linear_velocity(Vector2::new(200.0, 50.0));
    assert!(boulder.get_inverse_mass() < 1.0e-4);

    let ground = RigidBody::new_static(Shape::rectangle(100.0, 1.0), Vector2::new(0.0, 60.5));
    let (mut storage, mut manifold) = manifold_for(boulder, ground);
    collide(&storage, &mut manifold);
    assert_eq!(manifold.contact_count, 1);

    let mut solver = SequentialImpulseSolver::new(1, Vector2::zero(), 0.05, 0.4);
    let mut contacts = vec![manifold];
    solver.prepare(&mut contacts, &storage, 1.0 / 60.0);
    solver.solve_velocity(&contacts, &mut storage);

    // Bounces at e = 0.2 and loses 0.3 * 60 of its sliding speed to friction
    let body = storage.get(contacts[0].pair.body_a).expect("boulder");
    assert_relative_eq!(body.get_linear_velocity().y, -10.0, epsilon = 1.0e-2);
    assert_relative_eq!(body.get_linear_velocity().x, 182.0, epsilon = 1.0e-1);
}

#[test]
fn test_positional_correction() {
    let (mut storage, mut manifold) = manifold_for(circle(1.0, 0.0, 0.0), circle(1.0, 1.5, 0.0));
    collide(&storage, &mut manifold);

    let mut solver = SequentialImpulseSolver::new(10, Vector2::zero(), 0.05, 0.4);
    solver.solve_position(std::slice::from_ref(&manifold), &mut storage);

    // 0.4 * (0.5 - 0.05), split evenly between equal masses
    let body_a = storage.get(manifold.pair.body_a).expect("body a");
    let body_b = storage.get(manifold.pair.body_b).expect("body b");
    assert_relative_eq!(body_a.get_position().x, -0.09, epsilon = 1.0e-5);
    assert_relative_eq!(body_b.get_position().x, 1.59, epsilon = 1.0e-5);
}

#[test]
fn test_world_reports_contacts() {
    let mut world = PhysicsWorld::new(1.0 / 60.0, 10);
    world.set_gravity(Vector2::zero());
    world.add(Shape::circle(1.0), 0.0, 0.0);
    world.add(Shape::circle(1.0), 1.5, 0.0);
    world.add(Shape::circle(1.0), 10.0, 0.0);

    world.step();

    let contacts = world.get_contacts();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].pair.body_a.index(), 0);
    assert_eq!(contacts[0].pair.body_b.index(), 1);
}
