use std::path::PathBuf;

use log::{debug, info, warn};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

use super::mesh::IslandMesh;
use crate::error::IslandError;

pub const DEFAULT_SEED: u32 = 2024;

#[derive(Debug, Clone, PartialEq)]
pub enum IslandSource {
    Procedural { seed: u32 },
    File(PathBuf),
}

impl Default for IslandSource {
    fn default() -> Self {
        IslandSource::Procedural { seed: DEFAULT_SEED }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum IslandStatus {
    NotLoaded,
    Loading,
    Loaded { triangles: usize },
    Error(String),
}

pub enum IslandLoadResult {
    Success { mesh: IslandMesh },
    Error { error: String },
}

/// Loads the island off the event loop and hands the result back over a
/// channel that the frame loop drains.
pub struct IslandLoader {
    sender: UnboundedSender<IslandLoadResult>,
    receiver: UnboundedReceiver<IslandLoadResult>,
    status: IslandStatus,
}

impl IslandLoader {
    pub fn new() -> Self {
        let (sender, receiver) = unbounded_channel();
        Self {
            sender,
            receiver,
            status: IslandStatus::NotLoaded,
        }
    }

    pub fn status(&self) -> &IslandStatus {
        &self.status
    }

    pub fn start(&mut self, source: IslandSource, runtime: &Handle) {
        info!("Loading island from {:?}", source);
        self.status = IslandStatus::Loading;

        let sender = self.sender.clone();
        runtime.spawn(async move {
            let result = match tokio::task::spawn_blocking(move || load_source(&source)).await {
                Ok(result) => result,
                Err(join_err) => Err(IslandError::from(join_err)),
            };
            let message = match result {
                Ok(mesh) => IslandLoadResult::Success { mesh },
                Err(e) => IslandLoadResult::Error {
                    error: e.to_string(),
                },
            };
            let _ = sender.send(message);
        });
    }

    /// Next finished load, if any. A failed load falls back to the procedural
    /// island so the scene is never left empty.
    pub fn poll(&mut self) -> Option<IslandMesh> {
        match self.receiver.try_recv().ok()? {
            IslandLoadResult::Success { mesh } => {
                info!(
                    "Island '{}' loaded: {} vertices, {} triangles",
                    mesh.name,
                    mesh.vertices.len(),
                    mesh.triangle_count()
                );
                if let Some((min, max)) = mesh.bounds() {
                    debug!("Island bounds: {min:?} .. {max:?}");
                }
                self.status = IslandStatus::Loaded {
                    triangles: mesh.triangle_count(),
                };
                Some(mesh)
            }
            IslandLoadResult::Error { error } => {
                warn!("Failed to load island ({error}), using procedural island");
                let mesh = IslandMesh::generate(DEFAULT_SEED);
                self.status = IslandStatus::Error(error);
                Some(mesh)
            }
        }
    }
}

pub fn load_source(source: &IslandSource) -> Result<IslandMesh, IslandError> {
    match source {
        IslandSource::Procedural { seed } => Ok(IslandMesh::generate(*seed)),
        IslandSource::File(path) => IslandMesh::load(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn wait_for_mesh(loader: &mut IslandLoader) -> IslandMesh {
        for _ in 0..200 {
            if let Some(mesh) = loader.poll() {
                return mesh;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        panic!("island never arrived");
    }

    #[test]
    fn test_procedural_load_arrives() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut loader = IslandLoader::new();
        assert_eq!(loader.status(), &IslandStatus::NotLoaded);

        loader.start(IslandSource::default(), runtime.handle());
        let mesh = wait_for_mesh(&mut loader);

        assert!(mesh.validate().is_ok());
        assert!(matches!(loader.status(), IslandStatus::Loaded { .. }));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut loader = IslandLoader::new();

        loader.start(
            IslandSource::File(PathBuf::from("/definitely/not/here/island.json")),
            runtime.handle(),
        );
        let mesh = wait_for_mesh(&mut loader);

        assert!(mesh.triangle_count() > 0);
        assert!(matches!(loader.status(), IslandStatus::Error(_)));
    }
}
