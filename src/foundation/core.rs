#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
/// Opaque 24-bit RGB color.
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Construct from individual channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Construct from the low 24 bits of `v` (`0xRRGGBB`); higher bits are ignored.
    pub const fn from_u24(v: u32) -> Self {
        Self {
            r: ((v >> 16) & 0xff) as u8,
            g: ((v >> 8) & 0xff) as u8,
            b: (v & 0xff) as u8,
        }
    }

    /// Lowercase `#rrggbb` form, as used by CSS.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
/// Deck background choice.
pub enum Background {
    /// White slides.
    #[default]
    Light,
    /// Black slides.
    Dark,
}

impl Background {
    /// Fill color for this background.
    pub fn rgb(self) -> Rgb8 {
        match self {
            Self::Light => Rgb8::WHITE,
            Self::Dark => Rgb8::BLACK,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
/// Font families a text run may be styled with.
pub enum FontFamily {
    /// Arial.
    Arial,
    /// Calibri.
    Calibri,
    /// Times New Roman.
    #[serde(rename = "Times New Roman")]
    TimesNewRoman,
    /// Verdana.
    Verdana,
    /// Tahoma.
    Tahoma,
}

impl FontFamily {
    /// Every family, in a fixed order.
    pub const ALL: [Self; 5] = [
        Self::Arial,
        Self::Calibri,
        Self::TimesNewRoman,
        Self::Verdana,
        Self::Tahoma,
    ];

    /// Family name as understood by office suites and browsers.
    pub fn name(self) -> &'static str {
        match self {
            Self::Arial => "Arial",
            Self::Calibri => "Calibri",
            Self::TimesNewRoman => "Times New Roman",
            Self::Verdana => "Verdana",
            Self::Tahoma => "Tahoma",
        }
    }

    /// Generic CSS fallback for when the family is not installed.
    pub fn generic_fallback(self) -> &'static str {
        match self {
            Self::TimesNewRoman => "serif",
            _ => "sans-serif",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
/// Raster formats accepted for slide images.
pub enum ImageFormat {
    /// JPEG.
    Jpeg,
    /// PNG.
    Png,
    /// GIF.
    Gif,
    /// WebP.
    WebP,
}

impl ImageFormat {
    /// Map a decoder-detected format; `None` for formats decks do not embed.
    pub fn from_image_format(f: image::ImageFormat) -> Option<Self> {
        match f {
            image::ImageFormat::Jpeg => Some(Self::Jpeg),
            image::ImageFormat::Png => Some(Self::Png),
            image::ImageFormat::Gif => Some(Self::Gif),
            image::ImageFormat::WebP => Some(Self::WebP),
            _ => None,
        }
    }

    /// Lowercase file extension used when materializing assets.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Jpeg => "jpeg",
            Self::Png => "png",
            Self::Gif => "gif",
            Self::WebP => "webp",
        }
    }

    /// MIME type for embedding.
    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Gif => "image/gif",
            Self::WebP => "image/webp",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
