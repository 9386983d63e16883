use image::{GenericImage, GrayImage, RgbaImage};

/// Which quarter of a disc a pie slice covers, relative to its center.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Set a pixel if (x,y) is inside the buffer, ignore it otherwise.
#[inline]
fn put<I: GenericImage>(img: &mut I, x: i32, y: i32, color: I::Pixel) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as u32, y as u32);
    if x >= img.width() || y >= img.height() {
        return;
    }
    img.put_pixel(x, y, color);
}

/// Fill the rectangle spanned by the inclusive corner coordinates.
pub fn fill_rect<I: GenericImage>(img: &mut I, x0: i32, y0: i32, x1: i32, y1: i32, color: I::Pixel) {
    for y in y0..=y1 {
        for x in x0..=x1 {
            put(img, x, y, color);
        }
    }
}

/// Fill a quarter disc of radius `r` around (cx,cy), opening towards `corner`.
pub fn fill_quarter_disc<I: GenericImage>(
    img: &mut I,
    cx: i32,
    cy: i32,
    r: i32,
    corner: Corner,
    color: I::Pixel,
) {
    let (sx, sy) = match corner {
        Corner::TopLeft => (-1, -1),
        Corner::TopRight => (1, -1),
        Corner::BottomLeft => (-1, 1),
        Corner::BottomRight => (1, 1),
    };
    for dy in 0..=r {
        for dx in 0..=r {
            if dx * dx + dy * dy <= r * r {
                put(img, cx + sx * dx, cy + sy * dy, color);
            }
        }
    }
}

/// Fill a rectangle whose corners are quarter-circle arcs of radius `r`.
///
/// Built from four quarter-disc pie slices plus three rectangles: the full-height
/// middle band between the corner columns and the two side bands between the
/// corner rows. The pieces meet without gaps; `r` must not exceed half the
/// shorter side.
pub fn rounded_rect<I: GenericImage>(
    img: &mut I,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    r: i32,
    color: I::Pixel,
) {
    fill_quarter_disc(img, x0 + r, y0 + r, r, Corner::TopLeft, color);
    fill_quarter_disc(img, x1 - r, y0 + r, r, Corner::TopRight, color);
    fill_quarter_disc(img, x0 + r, y1 - r, r, Corner::BottomLeft, color);
    fill_quarter_disc(img, x1 - r, y1 - r, r, Corner::BottomRight, color);
    fill_rect(img, x0 + r, y0, x1 - r, y1, color);
    fill_rect(img, x0, y0 + r, x0 + r, y1 - r, color);
    fill_rect(img, x1 - r, y0 + r, x1, y1 - r, color);
}

/// Fill the ellipse inscribed in the inclusive bounding box.
pub fn fill_ellipse<I: GenericImage>(
    img: &mut I,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    color: I::Pixel,
) {
    let cx = (x0 + x1) as f32 * 0.5;
    let cy = (y0 + y1) as f32 * 0.5;
    let rx = (x1 - x0) as f32 * 0.5;
    let ry = (y1 - y0) as f32 * 0.5;
    if rx <= 0.0 || ry <= 0.0 {
        return;
    }
    for y in y0..=y1 {
        for x in x0..=x1 {
            let nx = (x as f32 - cx) / rx;
            let ny = (y as f32 - cy) / ry;
            if nx * nx + ny * ny <= 1.0 {
                put(img, x, y, color);
            }
        }
    }
}

/// Thick line segment with flat caps: a pixel is covered when its projection
/// falls between the endpoints and its perpendicular distance is within half
/// the stroke width. Round joints have to be stamped separately.
pub fn thick_line<I: GenericImage>(
    img: &mut I,
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
    width: f32,
    color: I::Pixel,
) {
    let dx = x1 - x0;
    let dy = y1 - y0;
    let len2 = dx * dx + dy * dy;
    if len2 == 0.0 {
        return;
    }
    let half = width * 0.5;
    let min_x = (x0.min(x1) - half).floor() as i32;
    let max_x = (x0.max(x1) + half).ceil() as i32;
    let min_y = (y0.min(y1) - half).floor() as i32;
    let max_y = (y0.max(y1) + half).ceil() as i32;
    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let t = ((x as f32 - x0) * dx + (y as f32 - y0) * dy) / len2;
            if !(0.0..=1.0).contains(&t) {
                continue;
            }
            let qx = x as f32 - (x0 + t * dx);
            let qy = y as f32 - (y0 + t * dy);
            if qx * qx + qy * qy <= half * half {
                put(img, x, y, color);
            }
        }
    }
}

/// Opaque vertical gradient, linearly interpolated per scanline from `top`
/// (t = 0.0) to `bottom` (t = 1.0), channels truncated to integer.
pub fn vertical_gradient(width: u32, height: u32, top: [u8; 3], bottom: [u8; 3]) -> RgbaImage {
    let mut img = RgbaImage::new(width, height);
    for y in 0..height {
        let t = y as f32 / height as f32;
        let r = (top[0] as f32 + (bottom[0] as f32 - top[0] as f32) * t) as u8;
        let g = (top[1] as f32 + (bottom[1] as f32 - top[1] as f32) * t) as u8;
        let b = (top[2] as f32 + (bottom[2] as f32 - top[2] as f32) * t) as u8;
        let px = image::Rgba([r, g, b, 255]);
        for x in 0..width {
            img.put_pixel(x, y, px);
        }
    }
    img
}

/// Paste `src` onto `dst` using `mask` as the per-pixel alpha selector,
/// blending all four channels. All three buffers must share dimensions.
pub fn paste_masked(dst: &mut RgbaImage, src: &RgbaImage, mask: &GrayImage) {
    for (x, y, m) in mask.enumerate_pixels() {
        let m = m.0[0] as u16;
        if m == 0 {
            continue;
        }
        let s = src.get_pixel(x, y);
        let d = dst.get_pixel_mut(x, y);
        for c in 0..4 {
            d.0[c] = ((d.0[c] as u16 * (255 - m) + s.0[c] as u16 * m) / 255) as u8;
        }
    }
}
