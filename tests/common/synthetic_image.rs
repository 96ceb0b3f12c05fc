/// Generates a uniform RGBA image of a single gray level.
pub fn uniform_rgba(width: usize, height: usize, gray: u8) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");

    let mut img = vec![gray; width * height * 4];
    for px in img.chunks_exact_mut(4) {
        px[3] = 255;
    }
    img
}

/// Generates an image split into a dark left half and a light right half,
/// with the boundary at column `split`.
pub fn split_rgba(width: usize, height: usize, split: usize, dark: u8, light: u8) -> Vec<u8> {
    assert!(split <= width, "split column must lie inside the image");

    let mut img = uniform_rgba(width, height, light);
    for y in 0..height {
        for x in 0..split {
            let i = (y * width + x) * 4;
            img[i] = dark;
            img[i + 1] = dark;
            img[i + 2] = dark;
        }
    }
    img
}

/// Generates alternating vertical dark/light stripes of width `stripe`.
/// Dense boundaries produce many flagged crack pixels.
pub fn striped_rgba(width: usize, height: usize, stripe: usize, dark: u8, light: u8) -> Vec<u8> {
    assert!(stripe > 0, "stripe width must be positive");

    let mut img = uniform_rgba(width, height, light);
    for y in 0..height {
        for x in 0..width {
            if (x / stripe) & 1 == 0 {
                let i = (y * width + x) * 4;
                img[i] = dark;
                img[i + 1] = dark;
                img[i + 2] = dark;
            }
        }
    }
    img
}
