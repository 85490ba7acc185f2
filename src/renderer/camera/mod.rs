mod state;

pub use state::CameraState;
