use std::{
    fs, io,
    path::{Path, PathBuf},
};

use rove_core::gateways::image::{ImageStorage, ImageUpload};
use uuid::Uuid;

/// Stores post pictures as plain files in a single directory.
///
/// Every picture gets a random name, the name sent
/// by the client is ignored.
#[derive(Debug, Clone)]
pub struct FsImageStorage {
    dir: PathBuf,
}

impl FsImageStorage {
    pub fn try_new<P: AsRef<Path>>(dir: P) -> io::Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        log::info!("Storing post pictures in {}", dir.display());
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }

    fn file_path(&self, name: &str) -> io::Result<PathBuf> {
        // Only plain file names inside of the directory
        if name.is_empty() || name.contains(['/', '\\']) || name.starts_with('.') {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid image name '{name}'"),
            ));
        }
        Ok(self.dir.join(name))
    }
}

fn new_image_name(upload: &ImageUpload) -> String {
    format!(
        "{}.{}",
        Uuid::new_v4().as_simple(),
        upload.format.file_extension()
    )
}

impl ImageStorage for FsImageStorage {
    fn store_image(&self, image: &ImageUpload) -> io::Result<String> {
        let name = new_image_name(image);
        let path = self.file_path(&name)?;
        fs::write(&path, &image.data).inspect_err(|err| {
            log::warn!("Failed to write image {}: {err}", path.display());
        })?;
        log::debug!("Stored image {name} ({} bytes)", image.data.len());
        Ok(name)
    }

    fn remove_image(&self, name: &str) -> io::Result<()> {
        let path = self.file_path(name)?;
        fs::remove_file(&path)?;
        log::debug!("Removed image {name}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rove_core::gateways::image::ImageFormat;

    fn png() -> ImageUpload {
        ImageUpload {
            format: ImageFormat::Png,
            data: vec![0x89, b'P', b'N', b'G'],
        }
    }

    #[test]
    fn store_and_remove() {
        let tmp = tempfile::tempdir().unwrap();
        let storage = FsImageStorage::try_new(tmp.path().join("post_pics")).unwrap();
        let name = storage.store_image(&png()).unwrap();
        assert!(name.ends_with(".png"));
        let path = storage.path().join(&name);
        assert_eq!(fs::read(&path).unwrap(), png().data);

        storage.remove_image(&name).unwrap();
        assert!(!path.exists());
        assert_eq!(
            storage.remove_image(&name).unwrap_err().kind(),
            io::ErrorKind::NotFound
        );
    }

    #[test]
    fn generated_names_differ() {
        let tmp = tempfile::tempdir().unwrap();
        let storage = FsImageStorage::try_new(tmp.path()).unwrap();
        let a = storage.store_image(&png()).unwrap();
        let b = storage.store_image(&png()).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn reject_names_outside_of_the_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let storage = FsImageStorage::try_new(tmp.path()).unwrap();
        for name in ["", "../secret", "a/b.png", ".hidden"] {
            assert_eq!(
                storage.remove_image(name).unwrap_err().kind(),
                io::ErrorKind::InvalidInput
            );
        }
    }
}
