use crate::binary_utils::write_u32;
use crate::containers::vpcf::data::DataSection;
use crate::containers::vpcf::identity::ResourceId;
use crate::containers::vpcf::layout::{self, Field};
use crate::containers::vpcf::templates::HEADER_TEMPLATE;
use crate::containers::vpcf::ResourcePaths;
use crate::error::VpcfResult;

/// Where the three path strings land in the header template and how long each one is.
#[derive(Debug, Clone, Copy)]
pub struct Splice {
    inserts: [(usize, usize); 3],
}

impl Splice {
    pub fn new(paths: &ResourcePaths) -> Self {
        Splice {
            inserts: [
                (layout::TEXTURE_PATH_SLOT, paths.texture.len()),
                (layout::RELATED_FILE_SLOT, paths.output.len()),
                (layout::SEARCH_PATH_SLOT, paths.game.len()),
            ],
        }
    }

    /// Maps a template offset to its position in the spliced buffer. Content inserted
    /// at the offset itself counts, since the string goes in front of the template
    /// byte there.
    pub fn shifted(&self, offset: usize) -> usize {
        offset
            + self
                .inserts
                .iter()
                .filter(|(at, _)| *at <= offset)
                .map(|(_, len)| len)
                .sum::<usize>()
    }

    pub fn inserted_len(&self) -> usize {
        self.inserts.iter().map(|(_, len)| len).sum()
    }
}

/// Builds the structural prefix of a vpcf_c and later folds the compressed payload
/// into it.
pub struct HeaderWriter {
    buf: Vec<u8>,
    splice: Splice,
}

impl HeaderWriter {
    /// Copies the header template in four segments with the texture, output and game
    /// paths in between.
    pub fn splice(paths: &ResourcePaths) -> Self {
        let splice = Splice::new(paths);
        let mut buf = Vec::with_capacity(HEADER_TEMPLATE.len() + splice.inserted_len() + 1024);

        let (texture_at, related_at, search_at) = (
            layout::TEXTURE_PATH_SLOT,
            layout::RELATED_FILE_SLOT,
            layout::SEARCH_PATH_SLOT,
        );
        buf.extend_from_slice(&HEADER_TEMPLATE[..texture_at]);
        buf.extend_from_slice(paths.texture.as_bytes());
        buf.extend_from_slice(&HEADER_TEMPLATE[texture_at..related_at]);
        buf.extend_from_slice(paths.output.as_bytes());
        buf.extend_from_slice(&HEADER_TEMPLATE[related_at..search_at]);
        buf.extend_from_slice(paths.game.as_bytes());
        buf.extend_from_slice(&HEADER_TEMPLATE[search_at..]);

        HeaderWriter { buf, splice }
    }

    fn put(&mut self, field: Field, value: u64) -> VpcfResult<()> {
        let at = self.splice.shifted(field.offset);
        field.write(&mut self.buf, at, value)
    }

    /// Rewrites every field the inserted strings invalidated, plus the id and CRC.
    pub fn patch(
        &mut self,
        paths: &ResourcePaths,
        checksum: u32,
        id: ResourceId,
    ) -> VpcfResult<()> {
        let texture_len = paths.texture.len() as u64;
        let output_len = paths.output.len() as u64;
        let dependency_len = paths.game.len() as u64 + output_len;
        let biased = |len: u64, bias: u32| len + bias as u64;

        self.put(layout::RERL_SIZE, biased(texture_len, layout::RERL_SIZE_BIAS))?;
        self.put(layout::REDI_OFFSET, biased(texture_len, layout::REDI_OFFSET_BIAS))?;
        self.put(layout::REDI_SIZE, biased(dependency_len, layout::REDI_SIZE_BIAS))?;
        self.put(layout::RESOURCE_ID, id.0)?;

        self.put(
            layout::REDI_ADDITIONAL_DEPS,
            biased(dependency_len, layout::ADDITIONAL_DEPS_BIAS),
        )?;
        self.put(
            layout::REDI_ARGUMENT_DEPS,
            biased(dependency_len, layout::ARGUMENT_DEPS_BIAS),
        )?;
        self.put(
            layout::REDI_CHILD_RESOURCES,
            biased(dependency_len, layout::CHILD_RESOURCES_BIAS),
        )?;

        self.put(
            layout::REDI_SEARCH_PATH_PTR,
            biased(output_len, layout::SEARCH_PATH_BIAS),
        )?;
        self.put(layout::REDI_TEXTURE_CRC, checksum as u64)
    }

    /// Points DATA at the KV3 prefix closing the header and appends the 4-byte
    /// decompressed size slot. Returns the slot position.
    pub fn reserve_payload(&mut self) -> VpcfResult<usize> {
        let header_len = self.buf.len() as u64;
        self.put(layout::DATA_OFFSET, header_len - layout::DATA_OFFSET_BIAS as u64)?;

        let slot = self.buf.len();
        self.buf.extend_from_slice(&[0, 0, 0, 0]);
        Ok(slot)
    }

    /// Fills the size slot, appends the payload and stamps the DATA and file sizes.
    pub fn finish(mut self, slot: usize, section: &DataSection) -> VpcfResult<Vec<u8>> {
        write_u32(&mut self.buf, section.decompressed_len, slot);
        self.buf.extend_from_slice(&section.compressed);

        self.put(
            layout::DATA_SIZE,
            section.compressed.len() as u64 + layout::DATA_SIZE_BIAS as u64,
        )?;
        let file_len = self.buf.len() as u64;
        self.put(layout::FILE_SIZE, file_len)?;

        Ok(self.buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binary_utils::read_u32;

    fn paths() -> ResourcePaths {
        ResourcePaths::new("materials/a.vtex", Some("particles/b.vpcf"), "hlvr")
    }

    #[test]
    fn shift_counts_only_earlier_inserts() {
        let splice = Splice::new(&paths());
        let t = "materials/a.vtex".len();
        let o = "particles/b.vpcf".len();

        assert_eq!(splice.shifted(layout::RERL_SIZE.offset), layout::RERL_SIZE.offset);
        assert_eq!(splice.shifted(layout::TEXTURE_PATH_SLOT), layout::TEXTURE_PATH_SLOT + t);
        assert_eq!(
            splice.shifted(layout::REDI_TEXTURE_CRC.offset),
            layout::REDI_TEXTURE_CRC.offset + t
        );
        assert_eq!(
            splice.shifted(layout::SEARCH_PATH_SLOT),
            layout::SEARCH_PATH_SLOT + t + o + 4
        );
        assert_eq!(splice.inserted_len(), t + o + 4);
    }

    #[test]
    fn spliced_strings_keep_their_terminators() {
        let p = paths();
        let writer = HeaderWriter::splice(&p);
        let buf = &writer.buf;
        let t = p.texture.len();
        let o = p.output.len();

        assert_eq!(writer.buf.len(), HEADER_TEMPLATE.len() + t + o + p.game.len());
        assert_eq!(&buf[0x48..0x48 + t], p.texture.as_bytes());
        assert_eq!(buf[0x48 + t], 0);

        let related = layout::RELATED_FILE_SLOT + t;
        assert_eq!(&buf[related..related + o], p.output.as_bytes());
        assert_eq!(buf[related + o], 0);
        assert_eq!(&buf[related + o + 1..related + o + 1 + 4], b"hlvr");
        assert_eq!(buf[related + o + 5], 0);
    }

    #[test]
    fn data_offset_is_relative_to_kv3_prefix() {
        let p = paths();
        let mut writer = HeaderWriter::splice(&p);
        let header_len = writer.buf.len();
        let slot = writer.reserve_payload().unwrap();

        assert_eq!(slot, header_len);
        assert_eq!(writer.buf.len(), header_len + 4);

        let data_offset = read_u32(&writer.buf, layout::DATA_OFFSET.offset) as usize;
        assert_eq!(data_offset, header_len - 0x50);
        let data_start = layout::DATA_OFFSET.offset + data_offset;
        assert_eq!(&writer.buf[data_start..data_start + 4], b"VKV\x03");
    }
}
