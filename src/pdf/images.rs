use pdf_writer::{Filter, Pdf, Ref};

use crate::compose::check_image_size;
use crate::error::Error;
use crate::model::{ImageSlot, ImageSpec};

/// An image decoded and ready to be written as an XObject.
pub(super) struct DecodedImage {
    pub(super) slot: ImageSlot,
    width: u32,
    height: u32,
    rgb: Vec<u8>,
    alpha: Option<Vec<u8>>,
}

/// Decode a layout image. Fails on bytes that are neither PNG nor JPEG, and on a
/// declared size that cannot be placed.
pub(super) fn decode_image(slot: ImageSlot, spec: &ImageSpec) -> Result<DecodedImage, Error> {
    check_image_size(slot, spec)?;

    let decoded = image::load_from_memory(&spec.data).map_err(|e| Error::InvalidImageData {
        slot,
        reason: e.to_string(),
    })?;
    let rgba: image::RgbaImage = decoded.to_rgba8();
    let (width, height) = (rgba.width(), rgba.height());
    let has_alpha = rgba.pixels().any(|p| p.0[3] < 255);

    let rgb: Vec<u8> = rgba
        .pixels()
        .flat_map(|p| [p.0[0], p.0[1], p.0[2]])
        .collect();
    let alpha = has_alpha.then(|| rgba.pixels().map(|p| p.0[3]).collect());

    log::debug!("decoded {slot} image: {width}x{height}px, alpha={has_alpha}");
    Ok(DecodedImage {
        slot,
        width,
        height,
        rgb,
        alpha,
    })
}

/// Write the image (and its soft mask, if any) into the PDF and return the
/// XObject reference.
pub(super) fn embed_image(
    pdf: &mut Pdf,
    img: &DecodedImage,
    alloc: &mut impl FnMut() -> Ref,
) -> Ref {
    let xobj_ref = alloc();

    let smask_ref = img.alpha.as_ref().map(|alpha| {
        let compressed_alpha = miniz_oxide::deflate::compress_to_vec_zlib(alpha, 6);
        let mask_ref = alloc();
        let mut mask = pdf.image_xobject(mask_ref, &compressed_alpha);
        mask.filter(Filter::FlateDecode);
        mask.width(img.width as i32);
        mask.height(img.height as i32);
        mask.color_space().device_gray();
        mask.bits_per_component(8);
        mask_ref
    });

    let compressed_rgb = miniz_oxide::deflate::compress_to_vec_zlib(&img.rgb, 6);
    let mut xobj = pdf.image_xobject(xobj_ref, &compressed_rgb);
    xobj.filter(Filter::FlateDecode);
    xobj.width(img.width as i32);
    xobj.height(img.height as i32);
    xobj.color_space().device_rgb();
    xobj.bits_per_component(8);
    if let Some(mask_ref) = smask_ref {
        xobj.s_mask(mask_ref);
    }
    xobj_ref
}
