use crate::refs::{ObjectReferences, RefType};
use crate::PDFError;
use image::{ColorType, DynamicImage};
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use pdf_writer::{Filter, Finish, Pdf};
use std::path::{Path, PathBuf};

/// How a raster image will be embedded in the PDF
pub enum RasterImageType {
    /// RGB JPEGs can be copied into the PDF byte-for-byte with a DCT filter
    DirectlyEmbeddableJpeg(PathBuf),
    /// Everything else is re-encoded as a flate-compressed RGB bitmap
    Image(DynamicImage),
}

/// A raster image (typically a company logo) to be embedded in a document.
/// Missing or unparseable image assets are a recoverable setup problem:
/// document generators skip the optional visual element rather than failing
/// the whole render.
pub struct Image {
    pub image: RasterImageType,
    /// Pixel width of the source image
    pub width: f32,
    /// Pixel height of the source image
    pub height: f32,
}

struct EncodeOutput {
    filter: Filter,
    bytes: Vec<u8>,
    mask: Option<Vec<u8>>,
}

impl Image {
    /// Load a raster image (PNG, JPEG, ...) from disk
    pub fn new_from_disk<P: AsRef<Path>>(path: P) -> Result<Image, PDFError> {
        let path = path.as_ref().to_owned();
        let data = std::fs::read(&path)?;

        let format = image::guess_format(&data)?;
        let image = image::load_from_memory_with_format(&data, format)?;

        match (format, image.color()) {
            (image::ImageFormat::Jpeg, ColorType::Rgb8) => {
                // we can embed it directly!
                let width = image.width() as f32;
                let height = image.height() as f32;

                Ok(Image {
                    image: RasterImageType::DirectlyEmbeddableJpeg(path),
                    width,
                    height,
                })
            }
            _ => Self::new_raster(image),
        }
    }

    /// Wrap an already-decoded image
    pub fn new_raster(image: DynamicImage) -> Result<Image, PDFError> {
        let width = image.width() as f32;
        let height = image.height() as f32;
        Ok(Image {
            image: RasterImageType::Image(image),
            width,
            height,
        })
    }

    /// The source aspect ratio (width / height), for scaling placements
    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }

    fn encode_raster(&self) -> Result<EncodeOutput, PDFError> {
        match &self.image {
            RasterImageType::DirectlyEmbeddableJpeg(path) => {
                let bytes = std::fs::read(path)?;
                Ok(EncodeOutput {
                    filter: Filter::DctDecode,
                    bytes,
                    mask: None,
                })
            }
            RasterImageType::Image(image) => {
                use image::GenericImageView;
                let level = CompressionLevel::DefaultLevel as u8;

                let mask = image.color().has_alpha().then(|| {
                    let alphas: Vec<_> = image.pixels().map(|p| (p.2).0[3]).collect();
                    compress_to_vec_zlib(&alphas, level)
                });

                let bytes = compress_to_vec_zlib(image.to_rgb8().as_raw(), level);

                Ok(EncodeOutput {
                    filter: Filter::FlateDecode,
                    bytes,
                    mask,
                })
            }
        }
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        image_index: usize,
        writer: &mut Pdf,
    ) -> Result<(), PDFError> {
        let id = refs.gen(RefType::Image(image_index));

        let encoded = self.encode_raster()?;

        let mut image = writer.image_xobject(id, encoded.bytes.as_slice());
        image.filter(encoded.filter);
        image.width(self.width as i32);
        image.height(self.height as i32);
        image.color_space().device_rgb();
        image.bits_per_component(8);

        let mask_id = encoded
            .mask
            .as_ref()
            .map(|_| refs.gen(RefType::ImageMask(image_index)));
        if let Some(mask_id) = &mask_id {
            image.s_mask(*mask_id);
        }

        image.finish();

        // add a transparency mask if we have one
        if let (Some(mask_id), Some(mask)) = (mask_id, encoded.mask.as_ref()) {
            let mut s_mask = writer.image_xobject(mask_id, mask.as_slice());
            s_mask.filter(Filter::FlateDecode);
            s_mask.width(self.width as i32);
            s_mask.height(self.height as i32);
            s_mask.color_space().device_gray();
            s_mask.bits_per_component(8);
        }

        Ok(())
    }
}
