use std::fmt::Write;

use qrcode::types::QrError;
use qrcode::{Color, EcLevel, QrCode};
use thiserror::Error;

/// Modules of light margin around the code, as the QR standard asks for.
pub const QUIET_ZONE: usize = 4;

#[derive(Debug, Error)]
pub enum QrRenderError {
    #[error("could not encode QR code: {0}")]
    Encode(#[from] QrError),
}

/// Square grid of dark/light modules for one encoded payload.
#[derive(Clone, Debug, PartialEq)]
pub struct QrMatrix {
    width: usize,
    dark: Vec<bool>,
}

impl QrMatrix {
    /// Encodes with high error correction so the code survives screen glare.
    pub fn encode(data: &str) -> Result<Self, QrRenderError> {
        let code = QrCode::with_error_correction_level(data.as_bytes(), EcLevel::H)?;
        let width = code.width();
        let dark = code
            .to_colors()
            .into_iter()
            .map(|c| c == Color::Dark)
            .collect();
        Ok(Self { width, dark })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.width && self.dark[y * self.width + x]
    }

    /// Side length of the SVG view box, margin included.
    pub fn view_size(&self) -> usize {
        self.width + 2 * QUIET_ZONE
    }

    /// One path covering every dark module, offset by the quiet zone.
    pub fn svg_path(&self) -> String {
        let mut path = String::new();
        for y in 0..self.width {
            for x in 0..self.width {
                if self.is_dark(x, y) {
                    let _ = write!(path, "M{} {}h1v1h-1z", x + QUIET_ZONE, y + QUIET_ZONE);
                }
            }
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_download_url() {
        let matrix = QrMatrix::encode("https://localfix.app/download").unwrap();
        // versions grow in steps of four modules from 21
        assert!(matrix.width() >= 21);
        assert_eq!((matrix.width() - 21) % 4, 0);
        assert_eq!(matrix.view_size(), matrix.width() + 8);
    }

    #[test]
    fn finder_pattern_in_top_left_corner() {
        let matrix = QrMatrix::encode("https://localfix.app/download").unwrap();
        for i in 0..7 {
            assert!(matrix.is_dark(i, 0));
            assert!(matrix.is_dark(0, i));
        }
        assert!(!matrix.is_dark(1, 1));
        assert!(matrix.is_dark(3, 3));
        assert!(!matrix.is_dark(7, 0));
    }

    #[test]
    fn path_has_one_square_per_dark_module() {
        let matrix = QrMatrix::encode("LocalFix").unwrap();
        let dark = (0..matrix.width())
            .flat_map(|y| (0..matrix.width()).map(move |x| (x, y)))
            .filter(|&(x, y)| matrix.is_dark(x, y))
            .count();
        assert_eq!(matrix.svg_path().matches('M').count(), dark);
        assert!(matrix.svg_path().starts_with("M4 4h1v1h-1z"));
    }

    #[test]
    fn out_of_range_is_light() {
        let matrix = QrMatrix::encode("LocalFix").unwrap();
        assert!(!matrix.is_dark(matrix.width(), 0));
    }
}
