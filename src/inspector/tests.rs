use super::header::HeaderField;
use super::*;
use image::{DynamicImage, ImageFormat};
use std::io::Cursor;

fn header(len: usize) -> Vec<u8> {
    vec![0_u8; len]
}

fn put(mut buffer: Vec<u8>, offset: usize, bytes: &[u8]) -> Vec<u8> {
    buffer[offset..offset + bytes.len()].copy_from_slice(bytes);
    buffer
}

fn encode(
    image: &DynamicImage,
    format: ImageFormat,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), format)?;
    Ok(bytes)
}

/// TIFF en escala de grises de 2x2 con el IFD después de los campos de posición fija.
fn gray_tiff(bits_at_14: u16, samples_at_16: u16, compression_at_20: u16) -> Vec<u8> {
    const IFD_OFFSET: u32 = 24;
    const ENTRY_COUNT: u16 = 9;
    const STRIP_OFFSET: u32 = IFD_OFFSET + 2 + ENTRY_COUNT as u32 * 12 + 4;

    let mut bytes = put(header(IFD_OFFSET as usize), 0, b"II*\0");
    bytes = put(bytes, 4, &IFD_OFFSET.to_le_bytes());
    bytes = put(bytes, 14, &bits_at_14.to_le_bytes());
    bytes = put(bytes, 16, &samples_at_16.to_le_bytes());
    bytes = put(bytes, 20, &compression_at_20.to_le_bytes());

    const SHORT: u16 = 3;
    const LONG: u16 = 4;
    let entries: [(u16, u16, u32); ENTRY_COUNT as usize] = [
        (256, SHORT, 2),
        (257, SHORT, 2),
        (258, SHORT, 8),
        (259, SHORT, 1),
        (262, SHORT, 1),
        (273, LONG, STRIP_OFFSET),
        (277, SHORT, 1),
        (278, SHORT, 2),
        (279, LONG, 4),
    ];

    bytes.extend_from_slice(&ENTRY_COUNT.to_le_bytes());
    for (tag, kind, value) in entries {
        bytes.extend_from_slice(&tag.to_le_bytes());
        bytes.extend_from_slice(&kind.to_le_bytes());
        bytes.extend_from_slice(&1_u32.to_le_bytes());
        bytes.extend_from_slice(&value.to_le_bytes());
    }
    bytes.extend_from_slice(&0_u32.to_le_bytes());
    bytes.extend_from_slice(&[0, 64, 128, 255]);
    bytes
}

#[test]
fn classifier_accepts_mime_and_extensions_case_insensitively() {
    assert_eq!(FormatVariant::from_declared_type("image/jpeg"), FormatVariant::Jpeg);
    assert_eq!(FormatVariant::from_declared_type("IMAGE/PNG"), FormatVariant::Png);
    assert_eq!(FormatVariant::from_declared_type("JPG"), FormatVariant::Jpeg);
    assert_eq!(FormatVariant::from_declared_type(".tif"), FormatVariant::Tiff);
    assert_eq!(FormatVariant::from_declared_type(" gif "), FormatVariant::Gif);
    assert_eq!(FormatVariant::from_declared_type("image/bmp"), FormatVariant::Bmp);
}

#[test]
fn classifier_rejects_unknown_types() {
    assert_eq!(FormatVariant::from_declared_type("text/plain"), FormatVariant::Unsupported);
    assert_eq!(FormatVariant::from_declared_type("application/png"), FormatVariant::Unsupported);
    assert_eq!(FormatVariant::from_declared_type("image/webp"), FormatVariant::Unsupported);
    assert_eq!(FormatVariant::from_declared_type(""), FormatVariant::Unsupported);
    assert_eq!(FormatVariant::from_declared_type(OCTET_STREAM), FormatVariant::Unsupported);
}

#[test]
fn declared_type_is_derived_from_member_names() {
    assert_eq!(declared_type_for_name("fotos/Playa.JPEG"), "image/jpeg");
    assert_eq!(declared_type_for_name("scan.tif"), "image/tiff");
    assert_eq!(declared_type_for_name("icono.bmp"), "image/bmp");
    assert_eq!(declared_type_for_name("notas.txt"), OCTET_STREAM);
    assert_eq!(declared_type_for_name("sin_extension"), OCTET_STREAM);
    assert!(is_archive_name("lote.ZIP"));
    assert!(is_archive_type("application/x-zip-compressed"));
    assert!(!is_archive_type("image/png"));
}

#[test]
fn header_field_reads_little_endian_words() -> Result<(), CoreError> {
    let buffer = put(header(4), 1, &[0x34, 0x12]);
    assert_eq!(HeaderField::U16Le(1).read(&buffer, "campo")?, 0x1234);
    assert_eq!(HeaderField::Byte(2).read(&buffer, "campo")?, 0x12);
    Ok(())
}

#[test]
fn bit_depth_rules() -> Result<(), CoreError> {
    use bit_depth::extract;

    assert_eq!(extract(&[], FormatVariant::Jpeg)?, BitDepth::Bits(24));
    assert_eq!(extract(&[], FormatVariant::Gif)?, BitDepth::Bits(8));
    assert_eq!(extract(&[], FormatVariant::Unsupported)?, BitDepth::Unknown);

    let png_8 = put(header(26), 24, &[8]);
    assert_eq!(extract(&png_8, FormatVariant::Png)?, BitDepth::Bits(32));
    let png_16 = put(header(26), 24, &[16]);
    assert_eq!(extract(&png_16, FormatVariant::Png)?, BitDepth::Bits(24));

    let bmp = put(header(30), 28, &16_u16.to_le_bytes());
    assert_eq!(extract(&bmp, FormatVariant::Bmp)?, BitDepth::Bits(16));

    let tiff = put(header(22), 14, &12_u16.to_le_bytes());
    assert_eq!(extract(&tiff, FormatVariant::Tiff)?, BitDepth::Bits(12));
    Ok(())
}

#[test]
fn color_mode_rules() -> Result<(), CoreError> {
    use color_mode::extract;

    assert_eq!(extract(&[], FormatVariant::Jpeg)?, ColorMode::Rgb);
    assert_eq!(extract(&[], FormatVariant::Gif)?, ColorMode::Indexed);
    assert_eq!(extract(&[], FormatVariant::Unsupported)?, ColorMode::Unknown);

    let png_alpha = put(header(26), 25, &[6]);
    assert_eq!(extract(&png_alpha, FormatVariant::Png)?, ColorMode::Rgba);
    for color_type in [0_u8, 2, 3, 4] {
        let png = put(header(26), 25, &[color_type]);
        assert_eq!(extract(&png, FormatVariant::Png)?, ColorMode::Rgb);
    }

    for (bits, expected) in [
        (8_u16, ColorMode::L),
        (24, ColorMode::Rgb),
        (32, ColorMode::Rgba),
        (4, ColorMode::Unknown),
    ] {
        let bmp = put(header(30), 28, &bits.to_le_bytes());
        assert_eq!(extract(&bmp, FormatVariant::Bmp)?, expected);
    }

    for (samples, expected) in [
        (1_u16, ColorMode::Gray),
        (3, ColorMode::Rgb),
        (4, ColorMode::Rgba),
        (2, ColorMode::Unknown),
    ] {
        let tiff = put(header(22), 16, &samples.to_le_bytes());
        assert_eq!(extract(&tiff, FormatVariant::Tiff)?, expected);
    }
    Ok(())
}

#[test]
fn compression_rules() -> Result<(), CoreError> {
    use compression::extract;

    assert_eq!(extract(&[], FormatVariant::Jpeg)?, Compression::Jpeg);
    assert_eq!(extract(&[], FormatVariant::Png)?, Compression::Deflate);
    assert_eq!(extract(&[], FormatVariant::Gif)?, Compression::Lzw);
    assert_eq!(extract(&[], FormatVariant::Bmp)?, Compression::None);
    assert_eq!(extract(&[], FormatVariant::Unsupported)?, Compression::Unknown);

    for (code, expected) in [
        (1_u16, Compression::None),
        (5, Compression::Lzw),
        (7, Compression::Jpeg),
        (8, Compression::Varies),
    ] {
        let tiff = put(header(22), 20, &code.to_le_bytes());
        assert_eq!(extract(&tiff, FormatVariant::Tiff)?, expected);
    }
    Ok(())
}

#[test]
fn short_buffers_are_reported_as_truncated() {
    let png = put(header(25), 24, &[8]);
    assert!(bit_depth::extract(&png, FormatVariant::Png).is_ok());
    assert_eq!(
        color_mode::extract(&png, FormatVariant::Png),
        Err(CoreError::TruncatedInput {
            field: "el modo de color",
            needed: Some(26),
            available: 25,
        })
    );

    let bmp = header(29);
    assert!(matches!(
        bit_depth::extract(&bmp, FormatVariant::Bmp),
        Err(CoreError::TruncatedInput { needed: Some(30), .. })
    ));

    let tiff = header(21);
    assert!(bit_depth::extract(&tiff, FormatVariant::Tiff).is_ok());
    assert!(matches!(
        compression::extract(&tiff, FormatVariant::Tiff),
        Err(CoreError::TruncatedInput { needed: Some(22), .. })
    ));
}

#[test]
fn unsupported_type_ignores_buffer_contents() -> Result<(), Box<dyn std::error::Error>> {
    let png = encode(&DynamicImage::new_rgb8(2, 2), ImageFormat::Png)?;
    let error = extract_metadata(&png, "text/plain", "nota.png").unwrap_err();
    assert_eq!(error, CoreError::Unsupported("text/plain".to_string()));
    assert!(error.is_unsupported());
    Ok(())
}

#[test]
fn png_with_alpha_reports_32_bits_rgba() -> Result<(), Box<dyn std::error::Error>> {
    let png = encode(&DynamicImage::new_rgba8(5, 3), ImageFormat::Png)?;
    assert_eq!(png[24], 8);
    assert_eq!(png[25], 6);

    let record = extract_metadata(&png, "image/png", "logo.png")?;
    assert_eq!(record.format(), FormatVariant::Png);
    assert_eq!(record.file_name(), "logo.png");
    assert_eq!(record.dimensions(), Dimensions::new(5, 3));
    assert_eq!(record.bit_depth(), BitDepth::Bits(32));
    assert_eq!(record.color_mode(), ColorMode::Rgba);
    assert_eq!(record.compression(), Compression::Deflate);
    Ok(())
}

#[test]
fn bmp_reads_bit_count() -> Result<(), Box<dyn std::error::Error>> {
    let bmp = encode(&DynamicImage::new_rgb8(7, 4), ImageFormat::Bmp)?;
    let record = extract_metadata(&bmp, "image/bmp", "mapa.bmp")?;
    assert_eq!(record.dimensions(), Dimensions::new(7, 4));
    assert_eq!(record.bit_depth(), BitDepth::Bits(24));
    assert_eq!(record.color_mode(), ColorMode::Rgb);
    assert_eq!(record.compression(), Compression::None);
    Ok(())
}

#[test]
fn jpeg_and_gif_use_constant_rules() -> Result<(), Box<dyn std::error::Error>> {
    let jpeg = encode(&DynamicImage::new_rgb8(16, 9), ImageFormat::Jpeg)?;
    let record = extract_metadata(&jpeg, "jpg", "foto.jpg")?;
    assert_eq!(record.dimensions().to_string(), "16x9");
    assert_eq!(record.bit_depth(), BitDepth::Bits(24));
    assert_eq!(record.color_mode(), ColorMode::Rgb);
    assert_eq!(record.compression(), Compression::Jpeg);

    let gif = encode(&DynamicImage::new_rgba8(3, 8), ImageFormat::Gif)?;
    let record = extract_metadata(&gif, "image/gif", "anim.gif")?;
    assert_eq!(record.dimensions(), Dimensions::new(3, 8));
    assert_eq!(record.bit_depth(), BitDepth::Bits(8));
    assert_eq!(record.color_mode(), ColorMode::Indexed);
    assert_eq!(record.compression(), Compression::Lzw);
    Ok(())
}

#[test]
fn tiff_reads_fixed_offset_fields() -> Result<(), CoreError> {
    let tiff = gray_tiff(8, 1, 5);
    let record = extract_metadata(&tiff, "image/tiff", "escaneo.tiff")?;
    assert_eq!(record.dimensions(), Dimensions::new(2, 2));
    assert_eq!(record.bit_depth(), BitDepth::Bits(8));
    assert_eq!(record.color_mode(), ColorMode::Gray);
    assert_eq!(record.compression(), Compression::Lzw);
    Ok(())
}

#[test]
fn extraction_is_idempotent() -> Result<(), CoreError> {
    let tiff = gray_tiff(16, 3, 7);
    let first = extract_metadata(&tiff, "tif", "a.tif")?;
    let second = extract_metadata(&tiff, "tif", "a.tif")?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn truncated_files_produce_no_record() -> Result<(), Box<dyn std::error::Error>> {
    let png = encode(&DynamicImage::new_rgb8(4, 4), ImageFormat::Png)?;
    let result = extract_metadata(&png[..20], "image/png", "cortado.png");
    assert!(matches!(result, Err(CoreError::TruncatedInput { .. })));

    let result = extract_metadata(&[], "image/jpeg", "vacio.jpg");
    assert!(matches!(result, Err(CoreError::TruncatedInput { needed: None, .. })));
    Ok(())
}

#[test]
fn record_serializes_with_table_labels() -> Result<(), CoreError> {
    let record = extract_metadata(&gray_tiff(8, 4, 9), "image/tiff", "capa.tif")?;
    let json = serde_json::to_value(&record).expect("el registro debería serializarse");
    assert_eq!(json["format"], "TIFF");
    assert_eq!(json["bit_depth"], 8);
    assert_eq!(json["color_mode"], "RGBA");
    assert_eq!(json["compression"], "Varies");
    assert_eq!(json["dimensions"]["width"], 2);
    Ok(())
}
