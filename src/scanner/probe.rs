use crate::error::{QrReaderError, Result};
use std::path::Path;

/// 画像ヘッダを読んで寸法を返す（デコード前の読み込み確認）
pub fn image_dimensions(path: &Path) -> Result<(u32, u32)> {
    let (width, height) = image::image_dimensions(path)
        .map_err(|e| QrReaderError::ImageLoad(format!("{}: {}", path.display(), e)))?;

    if width == 0 || height == 0 {
        return Err(QrReaderError::ImageLoad(format!("{}: 空の画像", path.display())));
    }

    Ok((width, height))
}
