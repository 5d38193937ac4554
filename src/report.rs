use std::{fs, path::Path};

use serde::Serialize;

use crate::containers::vpcf::{ResourcePaths, VpcfFile};
use crate::error::{VpcfError, VpcfResult};

/// Summary of one build, written for pipeline tooling that needs the stamped values
/// without parsing the vpcf_c back.
#[derive(Debug, Serialize)]
pub struct BuildReport<'a> {
    pub texture: &'a str,
    pub particle: &'a str,
    pub game: &'a str,
    pub written_to: &'a Path,
    #[serde(rename = "crc32")]
    pub checksum: String,
    pub resource_id: String,
    pub file_size: usize,
    pub data_size: u32,
    pub decompressed_size: u32,
    pub compressed_size: u32,
}

impl<'a> BuildReport<'a> {
    pub fn new(paths: &'a ResourcePaths, file: &VpcfFile, written_to: &'a Path) -> Self {
        BuildReport {
            texture: &paths.texture,
            particle: &paths.output,
            game: &paths.game,
            written_to,
            checksum: format!("0x{:08x}", file.checksum),
            resource_id: file.resource_id.to_string(),
            file_size: file.bytes.len(),
            data_size: file.data_size(),
            decompressed_size: file.decompressed_len,
            compressed_size: file.compressed_len,
        }
    }
}

pub fn write_report(path: &Path, report: &BuildReport) -> VpcfResult<()> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json).map_err(|source| VpcfError::WriteReport {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::containers::compression::Lz4Block;
    use crate::containers::vpcf::{build_with, ResourceId};

    #[test]
    fn report_lists_stamped_values() {
        let paths = ResourcePaths::new("materials/x.vtex", None, "hlvr");
        let file = build_with(&paths, 0x8BB9_8613, ResourceId(0xFF), &Lz4Block).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let report_path = dir.path().join("report.json");
        let written_to = Path::new("game/hlvr/particles/dry_erase/x.vpcf_c");

        write_report(&report_path, &BuildReport::new(&paths, &file, written_to)).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
        assert_eq!(json["texture"], "materials/x.vtex");
        assert_eq!(json["particle"], "particles/dry_erase/x.vpcf");
        assert_eq!(json["game"], "hlvr");
        assert_eq!(json["crc32"], "0x8bb98613");
        assert_eq!(json["resource_id"], "0x00000000000000ff");
        assert_eq!(json["file_size"], file.bytes.len());
        assert_eq!(json["data_size"], file.compressed_len + 0x28);
    }

    #[test]
    fn unwritable_report_is_reported() {
        let paths = ResourcePaths::new("materials/x.vtex", None, "hlvr");
        let file = build_with(&paths, 0, ResourceId(0), &Lz4Block).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let report_path = dir.path().join("missing").join("report.json");

        let err = write_report(&report_path, &BuildReport::new(&paths, &file, dir.path()))
            .unwrap_err();
        assert!(matches!(err, VpcfError::WriteReport { .. }));
    }
}
