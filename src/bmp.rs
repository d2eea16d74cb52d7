//! Uncompressed 24-bit BMP serialization.
//!
//! Fixed byte-layout writer for the simplest header pair: the 14-byte file
//! header and the 40-byte BITMAPINFOHEADER, both little-endian, followed by
//! the pixel array. The `PixelBuffer` already stores rows in BMP pixel order
//! (b, g, r, padded to 4-byte multiples), so serialization is the two headers
//! plus its bytes verbatim.
//!
//! Rows are written top-down, in buffer order. Bottom-up is the conventional
//! orientation for this format; existing consumers of these files rely on the
//! top-down layout, so it is kept.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::raster::PixelBuffer;

pub const FILE_HEADER_LEN: usize = 14;
pub const INFO_HEADER_LEN: usize = 40;
/// Offset from the start of the file to the pixel array.
pub const PIXEL_DATA_OFFSET: u32 = (FILE_HEADER_LEN + INFO_HEADER_LEN) as u32;

const SIGNATURE: [u8; 2] = *b"BM";
const BITS_PER_PIXEL: u16 = 24;
const PIXELS_PER_METER: u32 = 2835; // 72 dpi

// ============================================================================
// Headers
// ============================================================================

/// The 14-byte file header: signature, total size, pixel-array offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    pub file_size: u32,
    pub pixel_offset: u32,
}

impl FileHeader {
    /// Header for an image whose pixel array is `data_size` bytes.
    pub fn for_data_size(data_size: u32) -> Self {
        Self {
            file_size: PIXEL_DATA_OFFSET + data_size,
            pixel_offset: PIXEL_DATA_OFFSET,
        }
    }

    pub fn encode(&self) -> [u8; FILE_HEADER_LEN] {
        let mut out = [0u8; FILE_HEADER_LEN];
        out[0..2].copy_from_slice(&SIGNATURE);
        out[2..6].copy_from_slice(&self.file_size.to_le_bytes());
        // 4 reserved bytes stay zero
        out[10..14].copy_from_slice(&self.pixel_offset.to_le_bytes());
        out
    }

    /// Decode an encoded header; `None` if the signature doesn't match.
    pub fn decode(bytes: &[u8; FILE_HEADER_LEN]) -> Option<Self> {
        if bytes[0..2] != SIGNATURE {
            return None;
        }
        Some(Self {
            file_size: u32::from_le_bytes([bytes[2], bytes[3], bytes[4], bytes[5]]),
            pixel_offset: u32::from_le_bytes([bytes[10], bytes[11], bytes[12], bytes[13]]),
        })
    }
}

/// The 40-byte info header. Plane count, bit depth, compression, resolution,
/// and palette fields are fixed for this writer; only the geometry varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoHeader {
    pub width: u32,
    pub height: u32,
    pub data_size: u32,
}

impl InfoHeader {
    pub fn for_buffer(buffer: &PixelBuffer) -> Self {
        Self {
            width: buffer.width(),
            height: buffer.height(),
            data_size: buffer.row_stride() as u32 * buffer.height(),
        }
    }

    pub fn encode(&self) -> [u8; INFO_HEADER_LEN] {
        let mut out = [0u8; INFO_HEADER_LEN];
        out[0..4].copy_from_slice(&(INFO_HEADER_LEN as u32).to_le_bytes());
        out[4..8].copy_from_slice(&self.width.to_le_bytes());
        out[8..12].copy_from_slice(&self.height.to_le_bytes());
        out[12..14].copy_from_slice(&1u16.to_le_bytes()); // planes
        out[14..16].copy_from_slice(&BITS_PER_PIXEL.to_le_bytes());
        // bytes 16..20: compression = 0
        out[20..24].copy_from_slice(&self.data_size.to_le_bytes());
        out[24..28].copy_from_slice(&PIXELS_PER_METER.to_le_bytes());
        out[28..32].copy_from_slice(&PIXELS_PER_METER.to_le_bytes());
        // bytes 32..40: palette color count and important-color count = 0
        out
    }

    /// Decode an encoded header; `None` if the fixed fields don't match this
    /// writer's layout.
    pub fn decode(bytes: &[u8; INFO_HEADER_LEN]) -> Option<Self> {
        let header_size = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        let bpp = u16::from_le_bytes([bytes[14], bytes[15]]);
        if header_size != INFO_HEADER_LEN as u32 || bpp != BITS_PER_PIXEL {
            return None;
        }
        Some(Self {
            width: u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]),
            height: u32::from_le_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]),
            data_size: u32::from_le_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]),
        })
    }
}

// ============================================================================
// Writing
// ============================================================================

/// Serialize `buffer` as a BMP stream.
pub fn write_to<W: Write>(buffer: &PixelBuffer, out: &mut W) -> Result<()> {
    let info = InfoHeader::for_buffer(buffer);
    out.write_all(&FileHeader::for_data_size(info.data_size).encode())?;
    out.write_all(&info.encode())?;
    out.write_all(buffer.as_bytes())?;
    Ok(())
}

/// Serialize `buffer` to a file at `path`.
pub fn save<P: AsRef<Path>>(buffer: &PixelBuffer, path: P) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_to(buffer, &mut out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    #[test]
    fn test_header_lengths() {
        assert_eq!(FileHeader::for_data_size(16).encode().len(), FILE_HEADER_LEN);
        let buf = PixelBuffer::new(2, 2).unwrap();
        assert_eq!(InfoHeader::for_buffer(&buf).encode().len(), INFO_HEADER_LEN);
    }

    #[test]
    fn test_file_header_roundtrip() {
        let header = FileHeader::for_data_size(1024);
        let decoded = FileHeader::decode(&header.encode()).unwrap();
        assert_eq!(decoded, header);
        assert_eq!(decoded.pixel_offset, 54);
    }

    #[test]
    fn test_info_header_roundtrip() {
        let buf = PixelBuffer::new(31, 17).unwrap();
        let header = InfoHeader::for_buffer(&buf);
        let decoded = InfoHeader::decode(&header.encode()).unwrap();
        assert_eq!(decoded, header);
    }

    #[test]
    fn test_decode_rejects_bad_signature() {
        let mut bytes = FileHeader::for_data_size(8).encode();
        bytes[0] = b'X';
        assert!(FileHeader::decode(&bytes).is_none());
    }

    #[test]
    fn test_2x2_layout() {
        // 2 pixels * 3 bytes = 6, padded to 8 per row; 16 data bytes total
        let buf = PixelBuffer::new(2, 2).unwrap();
        assert_eq!(buf.row_stride(), 8);

        let mut bytes = Vec::new();
        write_to(&buf, &mut bytes).unwrap();
        assert_eq!(bytes.len(), 70);
        assert_eq!(&bytes[0..2], &[0x42, 0x4D]);
        assert_eq!(u32::from_le_bytes([bytes[2], bytes[3], bytes[4], bytes[5]]), 70);
        assert_eq!(
            u32::from_le_bytes([bytes[10], bytes[11], bytes[12], bytes[13]]),
            54
        );
        // Info header geometry
        assert_eq!(u32::from_le_bytes([bytes[18], bytes[19], bytes[20], bytes[21]]), 2);
        assert_eq!(u32::from_le_bytes([bytes[22], bytes[23], bytes[24], bytes[25]]), 2);
    }

    #[test]
    fn test_rows_written_top_down() {
        let mut buf = PixelBuffer::new(2, 2).unwrap();
        buf.set_pixel(0, 0, Rgb::new(255, 0, 0)).unwrap();
        buf.set_pixel(0, 1, Rgb::new(0, 0, 255)).unwrap();

        let mut bytes = Vec::new();
        write_to(&buf, &mut bytes).unwrap();
        let data = &bytes[54..];
        // First stored row is the buffer's top row: red in b, g, r order
        assert_eq!(&data[0..3], &[0, 0, 255]);
        // Second row starts one padded stride in: blue
        assert_eq!(&data[8..11], &[255, 0, 0]);
    }

    #[test]
    fn test_save_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.bmp");
        let buf = PixelBuffer::new(2, 2).unwrap();
        save(&buf, &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(bytes.len(), 70);
        assert_eq!(&bytes[0..2], b"BM");
    }
}
