use std::path::PathBuf;

use anyhow::{Context, bail};

use crate::island::IslandSource;

/// Command line: `island-folio [--mesh <file.json>] [--content <file.json>]`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LaunchOptions {
    pub mesh_path: Option<PathBuf>,
    pub content_path: Option<PathBuf>,
}

impl LaunchOptions {
    pub fn parse(args: impl IntoIterator<Item = String>) -> anyhow::Result<Self> {
        let mut options = LaunchOptions::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--mesh" => {
                    let path = args.next().context("--mesh expects a file path")?;
                    options.mesh_path = Some(PathBuf::from(path));
                }
                "--content" => {
                    let path = args.next().context("--content expects a file path")?;
                    options.content_path = Some(PathBuf::from(path));
                }
                other => bail!("unknown argument '{other}'"),
            }
        }

        Ok(options)
    }

    pub fn island_source(&self) -> IslandSource {
        match &self.mesh_path {
            Some(path) => IslandSource::File(path.clone()),
            None => IslandSource::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_arguments() {
        let options = LaunchOptions::parse(args(&[])).unwrap();
        assert_eq!(options, LaunchOptions::default());
        assert_eq!(options.island_source(), IslandSource::default());
    }

    #[test]
    fn test_mesh_and_content() {
        let options =
            LaunchOptions::parse(args(&["--content", "c.json", "--mesh", "island.json"])).unwrap();
        assert_eq!(options.content_path, Some(PathBuf::from("c.json")));
        assert_eq!(
            options.island_source(),
            IslandSource::File(PathBuf::from("island.json"))
        );
    }

    #[test]
    fn test_missing_value() {
        assert!(LaunchOptions::parse(args(&["--mesh"])).is_err());
    }

    #[test]
    fn test_unknown_flag() {
        assert!(LaunchOptions::parse(args(&["--fullscreen"])).is_err());
    }
}
