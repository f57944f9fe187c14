//! Tests for PNG encoding functionality.

use std::io::Read;

use heatmap_common::HeatmapError;
use renderer::png::create_png;

/// Split a PNG file into (type, data) chunks, checking lengths as we go.
fn chunks(png: &[u8]) -> Vec<(String, Vec<u8>)> {
    let mut out = Vec::new();
    let mut pos = 8;
    while pos < png.len() {
        let len = u32::from_be_bytes([png[pos], png[pos + 1], png[pos + 2], png[pos + 3]]) as usize;
        let kind = String::from_utf8(png[pos + 4..pos + 8].to_vec()).unwrap();
        let data = png[pos + 8..pos + 8 + len].to_vec();
        let crc = u32::from_be_bytes([
            png[pos + 8 + len],
            png[pos + 9 + len],
            png[pos + 10 + len],
            png[pos + 11 + len],
        ]);
        assert_eq!(crc, reference_crc32(&png[pos + 4..pos + 8 + len]));
        out.push((kind, data));
        pos += 12 + len;
    }
    out
}

fn reference_crc32(bytes: &[u8]) -> u32 {
    // Bitwise CRC-32 (IEEE), independent of the encoder's implementation
    let mut crc = 0xFFFF_FFFFu32;
    for &b in bytes {
        crc ^= b as u32;
        for _ in 0..8 {
            crc = if crc & 1 != 0 { (crc >> 1) ^ 0xEDB8_8320 } else { crc >> 1 };
        }
    }
    !crc
}

// ============================================================================
// Basic PNG creation tests
// ============================================================================

#[test]
fn test_create_png_rgba() {
    let pixels = [
        255, 0, 0, 255, // red
        0, 255, 0, 255, // green
        0, 0, 255, 255, // blue
        255, 255, 0, 255, // yellow
    ];

    let png = create_png(&pixels, 2, 2).unwrap();
    assert_eq!(&png[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);

    let kinds: Vec<String> = chunks(&png).into_iter().map(|(k, _)| k).collect();
    assert_eq!(kinds, vec!["IHDR", "IDAT", "IEND"]);
}

#[test]
fn test_ihdr_fields() {
    let pixels = vec![0u8; 7 * 3 * 4];
    let png = create_png(&pixels, 7, 3).unwrap();
    let (_, ihdr) = &chunks(&png)[0];

    assert_eq!(&ihdr[0..4], &7u32.to_be_bytes());
    assert_eq!(&ihdr[4..8], &3u32.to_be_bytes());
    assert_eq!(ihdr[8], 8); // bit depth
    assert_eq!(ihdr[9], 6); // RGBA
}

#[test]
fn test_pixels_survive_compression() {
    let pixels: Vec<u8> = (0..4 * 4 * 4).map(|i| (i * 7 % 256) as u8).collect();
    let png = create_png(&pixels, 4, 4).unwrap();
    let (_, idat) = &chunks(&png)[1];

    let mut raw = Vec::new();
    flate2::read::ZlibDecoder::new(&idat[..])
        .read_to_end(&mut raw)
        .unwrap();

    let unfiltered: Vec<u8> = raw
        .chunks_exact(1 + 16)
        .flat_map(|row| {
            assert_eq!(row[0], 0);
            row[1..].to_vec()
        })
        .collect();
    assert_eq!(unfiltered, pixels);
}

#[test]
fn test_rejects_mismatched_buffer() {
    assert!(matches!(
        create_png(&[0u8; 15], 2, 2),
        Err(HeatmapError::RenderError(_))
    ));
    assert!(create_png(&[], 0, 0).is_err());
}
