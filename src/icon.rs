use image::{GrayImage, Luma, Rgba, RgbaImage, imageops};

use crate::draw::{fill_ellipse, paste_masked, rounded_rect, thick_line, vertical_gradient};

// Generate the ClipVault app icon: clipboard with a shield-checkmark badge
// on a blue-to-purple rounded square.

pub const SIZE: u32 = 1024;
const PADDING: i32 = 100; // breathing room inside the rounded square

const GRADIENT_TOP: [u8; 3] = [41, 98, 255];
const GRADIENT_BOTTOM: [u8; 3] = [103, 58, 183];
const SHADOW: Rgba<u8> = Rgba([0, 0, 0, 60]);
const BODY: Rgba<u8> = Rgba([248, 248, 252, 255]);
const CLIP_METAL: Rgba<u8> = Rgba([160, 168, 180, 255]);
const CLIP_HOLE: Rgba<u8> = Rgba([120, 128, 140, 255]);
const TEXT_LINE: Rgba<u8> = Rgba([180, 190, 210, 255]);
const BADGE_GREEN: Rgba<u8> = Rgba([41, 182, 115, 255]);
const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

// Clipboard geometry on the 1024 canvas
const CLIP_LEFT: i32 = 240;
const CLIP_RIGHT: i32 = 784;
const CLIP_TOP: i32 = 260;
const CLIP_BOTTOM: i32 = 850;
const CLIP_RADIUS: i32 = 32;

// Placeholder text lines, as fractions of the inner clipboard width
const LINE_LENGTHS: [f32; 7] = [1.0, 0.75, 0.9, 0.6, 0.85, 0.5, 0.7];
const LINE_Y_START: i32 = 370;
const LINE_SPACING: i32 = 52;
const LINE_HEIGHT: i32 = 14;

/// Compose the full 1024x1024 icon. Layer order matters; the shadow sits
/// under the clipboard and the highlight goes over everything.
pub fn generate_icon() -> RgbaImage {
    let size = SIZE as i32;
    let mut img = RgbaImage::new(SIZE, SIZE);

    // Rounded-square background: vertical gradient clipped by a grayscale mask
    let grad = vertical_gradient(SIZE, SIZE, GRADIENT_TOP, GRADIENT_BOTTOM);
    let mut mask = GrayImage::new(SIZE, SIZE);
    let corner_radius = (SIZE as f32 * 0.22) as i32; // Big Sur rounding
    let inset = PADDING / 2;
    rounded_rect(
        &mut mask,
        inset,
        inset,
        size - inset,
        size - inset,
        corner_radius,
        Luma([255]),
    );
    paste_masked(&mut img, &grad, &mask);

    // Drop shadow on its own layer so it blends with the gradient underneath
    let mut shadow = RgbaImage::new(SIZE, SIZE);
    rounded_rect(
        &mut shadow,
        CLIP_LEFT + 6,
        CLIP_TOP + 8,
        CLIP_RIGHT + 6,
        CLIP_BOTTOM + 8,
        CLIP_RADIUS,
        SHADOW,
    );
    imageops::overlay(&mut img, &shadow, 0, 0);

    // Clipboard body, warm white
    rounded_rect(&mut img, CLIP_LEFT, CLIP_TOP, CLIP_RIGHT, CLIP_BOTTOM, CLIP_RADIUS, BODY);

    // Fastener clip straddling the top edge; the hole is overdrawn in a
    // darker tone rather than cut out
    let cx = (CLIP_LEFT + CLIP_RIGHT) / 2;
    rounded_rect(&mut img, cx - 100, CLIP_TOP - 30, cx + 100, CLIP_TOP + 30, 14, CLIP_METAL);
    rounded_rect(&mut img, cx - 40, CLIP_TOP - 22, cx + 40, CLIP_TOP + 6, 10, CLIP_HOLE);

    // Placeholder text lines
    for (x0, y0, x1, y1) in text_line_boxes() {
        rounded_rect(&mut img, x0, y0, x1, y1, 7, TEXT_LINE);
    }

    // Badge: green disc with a white checkmark near the bottom-right corner.
    // The line primitive has flat caps, so round joints are stamped on as
    // small discs at each vertex.
    let bx = CLIP_RIGHT - 30;
    let by = CLIP_BOTTOM - 30;
    fill_ellipse(&mut img, bx - 50, by - 50, bx + 50, by + 50, BADGE_GREEN);
    let check = [(bx - 30, by - 2), (bx - 10, by + 22), (bx + 32, by - 24)];
    for pair in check.windows(2) {
        let (ax, ay) = pair[0];
        let (bx2, by2) = pair[1];
        thick_line(&mut img, ax as f32, ay as f32, bx2 as f32, by2 as f32, 14.0, WHITE);
    }
    for (px, py) in check {
        fill_ellipse(&mut img, px - 7, py - 7, px + 7, py + 7, WHITE);
    }

    // Soft highlight towards the top-left: 80 concentric rings fading from
    // alpha 30 at the rim to 0 at the center, composited over the scene
    let mut highlight = RgbaImage::new(SIZE, SIZE);
    for i in 0..80 {
        let alpha = (30.0 * (1.0 - i as f32 / 80.0)) as u8;
        fill_ellipse(
            &mut highlight,
            inset - 100 + i,
            inset - 100 + i,
            inset + 400 - i,
            inset + 400 - i,
            Rgba([255, 255, 255, alpha]),
        );
    }
    imageops::overlay(&mut img, &highlight, 0, 0);

    img
}

/// Bounding boxes for the placeholder text lines. Generation stops as soon
/// as a line would run into the bottom margin of the clipboard.
fn text_line_boxes() -> Vec<(i32, i32, i32, i32)> {
    let left = CLIP_LEFT + 60;
    let right_full = CLIP_RIGHT - 60;
    let mut boxes = Vec::new();
    for (i, len) in LINE_LENGTHS.iter().enumerate() {
        let y = LINE_Y_START + i as i32 * LINE_SPACING;
        if y + LINE_HEIGHT > CLIP_BOTTOM - 40 {
            break;
        }
        let right = left + ((right_full - left) as f32 * len) as i32;
        boxes.push((left, y, right, y + LINE_HEIGHT));
    }
    boxes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_layers_land_where_expected() {
        let img = generate_icon();
        assert_eq!(img.dimensions(), (SIZE, SIZE));
        // outside the rounded square stays transparent
        assert_eq!(img.get_pixel(2, 2).0[3], 0);
        assert_eq!(img.get_pixel(1021, 2).0[3], 0);
        assert_eq!(img.get_pixel(1021, 1021).0[3], 0);
        // gradient inside the mask, interpolated exactly at y = 60
        assert_eq!(img.get_pixel(512, 60).0, [44, 95, 250, 255]);
        // clipboard body
        assert_eq!(*img.get_pixel(512, 512), BODY);
        // fastener clip and its hole
        assert_eq!(*img.get_pixel(512, 236), CLIP_METAL);
        assert_eq!(*img.get_pixel(512, 250), CLIP_HOLE);
        // first text line
        assert_eq!(*img.get_pixel(400, 377), TEXT_LINE);
        // badge disc, and a white joint cap on the checkmark
        assert_eq!(*img.get_pixel(754, 820), BADGE_GREEN);
        assert_eq!(*img.get_pixel(744, 842), WHITE);
    }

    #[test]
    fn all_seven_text_lines_fit_above_bottom_margin() {
        let boxes = text_line_boxes();
        assert_eq!(boxes.len(), LINE_LENGTHS.len());
        for &(left, _y0, right, y1) in &boxes {
            assert!(y1 <= CLIP_BOTTOM - 40);
            assert!(left < right);
        }
        // the full-length line spans the whole inner width
        assert_eq!(boxes[0].2, CLIP_RIGHT - 60);
        // last line bottom edge: 370 + 6 * 52 + 14
        assert_eq!(boxes[6].3, 706);
    }

    #[test]
    fn shadow_peeks_out_semi_transparent() {
        let img = generate_icon();
        // just right of the clipboard, inside the shadow offset band
        let px = img.get_pixel(788, 600).0;
        assert_eq!(px[3], 255, "background under shadow is opaque");
        // darker than the pure gradient at the same scanline
        let grad = vertical_gradient(SIZE, SIZE, GRADIENT_TOP, GRADIENT_BOTTOM);
        let g = grad.get_pixel(788, 600).0;
        assert!(px[0] < g[0] && px[1] < g[1] && px[2] < g[2]);
    }
}
