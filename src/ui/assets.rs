use std::io::Cursor;
use std::sync::{Mutex, PoisonError};

use eframe::egui;
use icns::PixelFormat;
use log::warn;
use rust_embed::RustEmbed;

use crate::error::{AssetError, Outcome};

#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

// Image decoding is serialized process-wide so loaders on different threads
// never decode at the same time.
static DECODER: Mutex<()> = Mutex::new(());

/// A decoded RGBA image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl Image {
    pub fn to_icon_data(&self) -> egui::IconData {
        egui::IconData {
            rgba: self.rgba.clone(),
            width: self.width,
            height: self.height,
        }
    }

    pub fn to_color_image(&self) -> egui::ColorImage {
        egui::ColorImage::from_rgba_unmultiplied(
            [self.width as usize, self.height as usize],
            &self.rgba,
        )
    }
}

pub fn resource(name: &str) -> Result<Vec<u8>, AssetError> {
    EmbeddedAssets::get(name)
        .map(|file| file.data.into_owned())
        .ok_or_else(|| AssetError::Missing(name.to_owned()))
}

/// Load and decode an embedded image. Failures are logged and reported as
/// degraded so the caller can simply go without the image.
pub fn load_image(name: &str) -> Outcome<Image> {
    match resource(name).and_then(|bytes| decode_png(name, &bytes)) {
        Ok(image) => Outcome::Ready(image),
        Err(err) => {
            warn!("ui: error loading image {name}: {err}");
            err.into()
        }
    }
}

fn decode_png(name: &str, bytes: &[u8]) -> Result<Image, AssetError> {
    let decoded = {
        let _guard = DECODER.lock().unwrap_or_else(PoisonError::into_inner);
        icns::Image::read_png(Cursor::new(bytes))
    }
    .map_err(|source| AssetError::Decode {
        name: name.to_owned(),
        source,
    })?;

    let rgba = decoded.convert_to(PixelFormat::RGBA);
    Ok(Image {
        width: rgba.width(),
        height: rgba.height(),
        rgba: rgba.into_data().into_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn loads_bundled_logo() {
        let image = load_image("runelite.png")
            .ready()
            .expect("bundled logo decodes");
        assert_eq!((image.width, image.height), (64, 64));
        assert_eq!(image.rgba.len(), 64 * 64 * 4);

        let icon = image.to_icon_data();
        assert_eq!((icon.width, icon.height), (64, 64));
        assert_eq!(image.to_color_image().size, [64, 64]);
    }

    #[test]
    fn bundled_resources_are_embedded() {
        assert!(resource("runelite.png").is_ok());
        assert!(resource("look_and_feel.json").is_ok());
        assert!(matches!(resource("nope.bin"), Err(AssetError::Missing(_))));
    }

    #[test]
    fn missing_image_degrades() {
        let outcome = load_image("does-not-exist.png");
        assert_eq!(
            outcome.reason(),
            Some("resource not found: does-not-exist.png")
        );
    }

    #[test]
    fn corrupt_image_degrades() {
        let err = decode_png("broken.png", b"definitely not a png").unwrap_err();
        assert!(matches!(err, AssetError::Decode { ref name, .. } if name == "broken.png"));
    }

    #[test]
    fn concurrent_loads_all_succeed() {
        let workers: Vec<_> = (0..8)
            .map(|_| thread::spawn(|| load_image("runelite.png")))
            .collect();
        for worker in workers {
            let outcome = worker.join().unwrap();
            assert!(!outcome.is_degraded());
        }
    }
}
