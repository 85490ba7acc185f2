pub mod angle;
pub mod controller;
pub mod host;
pub mod loader;
pub mod mesh;
pub mod stage;
pub mod transform;

pub use controller::{IslandInput, RotationController, RotationKey};
pub use host::{HomeState, IslandHost};
pub use loader::{IslandLoader, IslandSource, IslandStatus};
pub use mesh::{IslandMesh, MeshVertex};
pub use stage::Stage;
pub use transform::IslandTransform;
