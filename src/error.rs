use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IslandError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid mesh '{name}': {reason}")]
    InvalidMesh { name: String, reason: String },

    #[error("asset task failed: {0}")]
    AssetTask(String),

    #[error("wgpu::CreateSurfaceError: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    #[error("wgpu::RequestAdapterError: {0}")]
    RequestAdapter(#[from] wgpu::RequestAdapterError),

    #[error("wgpu::RequestDeviceError: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),

    #[error("winit::error::EventLoopError: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("winit::error::OsError: {0}")]
    Window(#[from] winit::error::OsError),
}

impl IslandError {
    pub fn invalid_mesh(name: impl ToString, reason: impl ToString) -> Self {
        IslandError::InvalidMesh {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl From<tokio::task::JoinError> for IslandError {
    fn from(err: tokio::task::JoinError) -> Self {
        IslandError::AssetTask(err.to_string())
    }
}
