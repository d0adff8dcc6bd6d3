/// Type of rigid body, determining how it behaves in the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RigidBodyType {
    /// Dynamic bodies are moved by forces, gravity and contact impulses
    Dynamic,

    /// Static bodies have infinite mass; they collide but never move
    Static,
}
