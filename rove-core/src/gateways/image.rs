use std::{fmt, io, str::FromStr};

/// The picture formats accepted for posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
}

impl ImageFormat {
    pub const fn file_extension(self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
            Self::Png => "png",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsupportedImageFormat;

impl fmt::Display for UnsupportedImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Only .jpg and .png images are allowed")
    }
}

impl std::error::Error for UnsupportedImageFormat {}

impl FromStr for ImageFormat {
    type Err = UnsupportedImageFormat;
    fn from_str(ext: &str) -> Result<Self, Self::Err> {
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "png" => Ok(Self::Png),
            _ => Err(UnsupportedImageFormat),
        }
    }
}

/// An uploaded picture that has not been stored yet.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub format: ImageFormat,
    pub data: Vec<u8>,
}

impl fmt::Debug for ImageUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageUpload")
            .field("format", &self.format)
            .field("len", &self.data.len())
            .finish()
    }
}

pub trait ImageStorage {
    /// Stores the picture under a newly generated name and returns that name.
    fn store_image(&self, image: &ImageUpload) -> io::Result<String>;

    fn remove_image(&self, name: &str) -> io::Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_image_format() {
        assert_eq!("JPG".parse(), Ok(ImageFormat::Jpeg));
        assert_eq!("jpeg".parse(), Ok(ImageFormat::Jpeg));
        assert_eq!("png".parse(), Ok(ImageFormat::Png));
        assert_eq!("gif".parse::<ImageFormat>(), Err(UnsupportedImageFormat));
        assert_eq!(ImageFormat::Jpeg.file_extension(), "jpg");
    }
}
