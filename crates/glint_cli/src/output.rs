//! Framebuffer writers: binary PPM (P6) and PNG.

use anyhow::{bail, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Save an RGB framebuffer to `path`, picking the format from the
/// file extension.
pub fn save(path: &Path, framebuffer: &[u8], width: u32, height: u32) -> Result<()> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("ppm") => save_ppm(path, framebuffer, width, height),
        Some("png") => {
            image::save_buffer(path, framebuffer, width, height, image::ColorType::Rgb8)?;
            Ok(())
        }
        _ => bail!("unsupported output format (use .ppm or .png)"),
    }
}

/// Write a binary P6 PPM.
fn save_ppm(path: &Path, framebuffer: &[u8], width: u32, height: u32) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write!(writer, "P6\n{width} {height}\n255\n")?;
    writer.write_all(framebuffer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ppm_header_and_payload() {
        let dir = std::env::temp_dir();
        let path = dir.join("glint_output_test.ppm");
        let fb = vec![7u8; 2 * 2 * 3];

        save(&path, &fb, 2, 2).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"P6\n2 2\n255\n"));
        assert_eq!(bytes.len(), b"P6\n2 2\n255\n".len() + fb.len());
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let err = save(Path::new("frame.gif"), &[0; 3], 1, 1);
        assert!(err.is_err());
    }
}
