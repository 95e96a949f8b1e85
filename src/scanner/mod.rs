mod probe;

pub use probe::image_dimensions;

use crate::error::{QrReaderError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct ImageInfo {
    pub path: PathBuf,
    pub file_name: String,
}

impl ImageInfo {
    pub fn from_path(path: &Path) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        Self {
            path: path.to_path_buf(),
            file_name,
        }
    }
}

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "webp"];

/// 入力（ファイル/フォルダ混在）から画像一覧を作る
///
/// ファイルは拡張子を問わずそのまま、フォルダは画像拡張子のみ収集する。
pub fn collect_images(inputs: &[PathBuf], recursive: bool) -> Result<Vec<ImageInfo>> {
    let mut images = Vec::new();

    for input in inputs {
        if input.is_dir() {
            images.extend(scan_folder(input, recursive)?);
        } else if input.is_file() {
            images.push(ImageInfo::from_path(input));
        } else {
            return Err(QrReaderError::FileNotFound(input.display().to_string()));
        }
    }

    Ok(images)
}

pub fn scan_folder(folder: &Path, recursive: bool) -> Result<Vec<ImageInfo>> {
    if !folder.exists() {
        return Err(QrReaderError::FolderNotFound(folder.display().to_string()));
    }

    let max_depth = if recursive { usize::MAX } else { 1 };

    let mut images: Vec<ImageInfo> = WalkDir::new(folder)
        .max_depth(max_depth)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| is_image_extension(e.path()))
        .map(|e| ImageInfo::from_path(e.path()))
        .collect();

    // パスでソート（再帰時もフォルダ単位でまとまる）
    images.sort_by(|a, b| a.path.cmp(&b.path));

    Ok(images)
}

fn is_image_extension(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};

    #[test]
    fn test_is_image_extension() {
        assert!(is_image_extension(Path::new("a.jpg")));
        assert!(is_image_extension(Path::new("a.JPG")));
        assert!(is_image_extension(Path::new("a.png")));
        assert!(is_image_extension(Path::new("a.webp")));
        assert!(!is_image_extension(Path::new("a.txt")));
        assert!(!is_image_extension(Path::new("noext")));
    }

    #[test]
    fn test_scan_folder_not_found() {
        let result = scan_folder(Path::new("/nonexistent/folder"), false);
        assert!(matches!(result, Err(QrReaderError::FolderNotFound(_))));
    }

    #[test]
    fn test_scan_folder_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("c.png")).unwrap();
        File::create(dir.path().join("a.jpg")).unwrap();
        File::create(dir.path().join("b.GIF")).unwrap();
        File::create(dir.path().join("notes.txt")).unwrap();

        let result = scan_folder(dir.path(), false).unwrap();
        let names: Vec<&str> = result.iter().map(|i| i.file_name.as_str()).collect();
        assert_eq!(names, vec!["a.jpg", "b.GIF", "c.png"]);
    }

    #[test]
    fn test_scan_folder_recursive() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("sub")).unwrap();
        File::create(dir.path().join("top.png")).unwrap();
        File::create(dir.path().join("sub").join("nested.png")).unwrap();

        assert_eq!(scan_folder(dir.path(), false).unwrap().len(), 1);
        assert_eq!(scan_folder(dir.path(), true).unwrap().len(), 2);
    }

    #[test]
    fn test_collect_images_mixed_inputs() {
        let dir = tempfile::tempdir().unwrap();
        let folder = dir.path().join("photos");
        fs::create_dir_all(&folder).unwrap();
        File::create(folder.join("one.png")).unwrap();
        let single = dir.path().join("code.dat");
        File::create(&single).unwrap();

        let result = collect_images(&[single.clone(), folder], false).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].file_name, "code.dat");
        assert_eq!(result[1].file_name, "one.png");
    }

    #[test]
    fn test_collect_images_missing_file() {
        let result = collect_images(&[PathBuf::from("/nonexistent/code.png")], false);
        assert!(matches!(result, Err(QrReaderError::FileNotFound(_))));
    }
}
