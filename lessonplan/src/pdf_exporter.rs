//! Rasterized PDF export with printpdf
//!
//! The PDF path mirrors the preview: an externally captured bitmap of the
//! rendered plan is embedded into a single A4 portrait page, scaled to page
//! width with the height following the capture's aspect ratio. Content taller
//! than one page is clipped at the bottom edge, matching the preview capture
//! flow this replaces. No text is drawn, so no fonts are required.

use crate::export::ExportError;
use image::GenericImageView;
use printpdf::{
    ColorBits, ColorSpace, Image, ImageTransform, ImageXObject, Mm, PdfDocument, Px,
};
use std::io::BufWriter;
use std::path::Path;

/// A4 portrait page size
const A4_WIDTH_MM: f32 = 210.0;
const A4_HEIGHT_MM: f32 = 297.0;

const MM_PER_INCH: f32 = 25.4;

/// Embed a captured preview bitmap (PNG or JPEG bytes) into an A4 PDF
pub fn to_pdf(snapshot: &[u8], title: &str, output_path: &Path) -> Result<(), ExportError> {
    // Probe dimensions before decoding so an unusable capture is rejected
    // with a snapshot error rather than surfacing mid-assembly
    let size = imagesize::blob_size(snapshot)
        .map_err(|e| ExportError::Snapshot(format!("cannot read capture dimensions: {}", e)))?;
    if size.width == 0 || size.height == 0 {
        return Err(ExportError::Snapshot("capture has zero area".to_string()));
    }

    let decoded = image::load_from_memory(snapshot)
        .map_err(|e| ExportError::Snapshot(format!("cannot decode capture: {}", e)))?;
    let (px_width, px_height) = decoded.dimensions();
    let rgb = decoded.to_rgb8();

    // Scale to page width; height follows the capture aspect ratio
    let dpi = px_width as f32 * MM_PER_INCH / A4_WIDTH_MM;
    let height_mm = px_height as f32 * MM_PER_INCH / dpi;

    log::info!(
        "creating PDF from {}x{} capture ({}mm tall on page): {}",
        px_width,
        px_height,
        height_mm.round(),
        output_path.display()
    );

    let (doc, page, layer) =
        PdfDocument::new(title, Mm(A4_WIDTH_MM), Mm(A4_HEIGHT_MM), "preview");
    let layer_ref = doc.get_page(page).get_layer(layer);

    let xobject = ImageXObject {
        width: Px(px_width as usize),
        height: Px(px_height as usize),
        color_space: ColorSpace::Rgb,
        bits_per_component: ColorBits::Bit8,
        interpolate: true,
        image_data: rgb.into_raw(),
        image_filter: None,
        smask: None,
        clipping_bbox: None,
    };

    // Pages have a bottom-left origin; anchor the capture to the top edge
    Image::from(xobject).add_to_layer(
        layer_ref,
        ImageTransform {
            translate_x: Some(Mm(0.0)),
            translate_y: Some(Mm(A4_HEIGHT_MM - height_mm)),
            dpi: Some(dpi),
            ..Default::default()
        },
    );

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = std::fs::File::create(output_path)?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| ExportError::Pdf(e.to_string()))?;

    Ok(())
}
