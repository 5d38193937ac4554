use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{VpcfError, VpcfResult};

/// Compiled resources live next to their source path with a `_c` suffix.
const COMPILED_SUFFIX: &str = "_c";

/// `<sdk>/game/<game>`, the root every game-relative resource path hangs off.
#[derive(Debug, Clone)]
pub struct SdkLayout {
    game_dir: PathBuf,
}

impl SdkLayout {
    pub fn new(sdk_root: &Path, game: &str) -> Self {
        SdkLayout {
            game_dir: sdk_root.join("game").join(game),
        }
    }

    pub fn game_dir(&self) -> &Path {
        &self.game_dir
    }

    /// `materials/x.vtex` -> `<game dir>/materials/x.vtex_c`
    pub fn compiled_path(&self, resource: &str) -> PathBuf {
        self.game_dir.join(format!("{resource}{COMPILED_SUFFIX}"))
    }

    pub fn read_texture(&self, texture: &str) -> VpcfResult<Vec<u8>> {
        let path = self.compiled_path(texture);
        let bytes = fs::read(&path).map_err(|source| VpcfError::ReadTexture {
            path: path.clone(),
            source,
        })?;
        info!("Read texture resource {:?} ({} bytes)", path, bytes.len());
        Ok(bytes)
    }

    /// Creates any missing parent directories, then writes the whole resource at once.
    pub fn write_particle(&self, particle: &str, bytes: &[u8]) -> VpcfResult<PathBuf> {
        let path = self.compiled_path(particle);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| VpcfError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::write(&path, bytes).map_err(|source| VpcfError::WriteParticle {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiled_path_appends_suffix() {
        let layout = SdkLayout::new(Path::new("/sdk"), "hlvr");
        assert_eq!(layout.game_dir(), Path::new("/sdk/game/hlvr"));
        assert_eq!(
            layout.compiled_path("materials/x.vtex"),
            Path::new("/sdk/game/hlvr/materials/x.vtex_c")
        );
    }

    #[test]
    fn reads_and_writes_under_game_dir() {
        let sdk = tempfile::tempdir().unwrap();
        let layout = SdkLayout::new(sdk.path(), "hlvr");
        let texture_dir = layout.game_dir().join("materials");
        fs::create_dir_all(&texture_dir).unwrap();
        fs::write(texture_dir.join("x.vtex_c"), [0u8, 1, 2, 3]).unwrap();

        assert_eq!(layout.read_texture("materials/x.vtex").unwrap(), vec![0, 1, 2, 3]);

        let written = layout
            .write_particle("particles/dry_erase/x.vpcf", b"vpcf")
            .unwrap();
        assert_eq!(written, layout.game_dir().join("particles/dry_erase/x.vpcf_c"));
        assert_eq!(fs::read(written).unwrap(), b"vpcf");
    }

    #[test]
    fn missing_texture_names_the_path() {
        let sdk = tempfile::tempdir().unwrap();
        let layout = SdkLayout::new(sdk.path(), "hlvr");

        match layout.read_texture("materials/missing.vtex") {
            Err(VpcfError::ReadTexture { path, .. }) => {
                assert!(path.ends_with("materials/missing.vtex_c"));
            }
            other => panic!("expected ReadTexture error, got {other:?}"),
        }
    }

    #[test]
    fn blocked_output_dir_is_reported() {
        let sdk = tempfile::tempdir().unwrap();
        let layout = SdkLayout::new(sdk.path(), "hlvr");
        fs::create_dir_all(layout.game_dir()).unwrap();
        // A file where the particles directory should be
        fs::write(layout.game_dir().join("particles"), b"").unwrap();

        let err = layout
            .write_particle("particles/dry_erase/x.vpcf", b"vpcf")
            .unwrap_err();
        assert!(matches!(err, VpcfError::CreateDir { .. }));
    }
}
