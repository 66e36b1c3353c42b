use super::*;

use crate::foundation::core::Canvas;

fn pixel(img: &FrameRGBA, x: u32, y: u32) -> [u8; 4] {
    let i = ((y * img.width + x) * 4) as usize;
    [img.data[i], img.data[i + 1], img.data[i + 2], img.data[i + 3]]
}

const PAPER_PX: [u8; 4] = [0xFF, 0xF8, 0xE6, 0xFF];

#[test]
fn background_fills_every_pixel() {
    let frame = Frame::new(Canvas::new(8, 8).unwrap(), Rgba8::PAPER);
    let img = rasterize(&frame).unwrap();
    assert_eq!((img.width, img.height), (8, 8));
    assert_eq!(img.data.len(), 8 * 8 * 4);
    assert!(img.premultiplied);
    // Opaque background: premultiplied equals straight alpha.
    assert_eq!(pixel(&img, 0, 0), PAPER_PX);
    assert_eq!(pixel(&img, 7, 7), PAPER_PX);
}

#[test]
fn rect_fill_covers_its_interior() {
    let mut frame = Frame::new(Canvas::new(8, 8).unwrap(), Rgba8::PAPER);
    frame.push(Primitive::RectFill {
        rect: Rect::new(2.0, 2.0, 6.0, 6.0),
        color: Rgba8::BLACK,
    });
    let img = rasterize(&frame).unwrap();
    assert_eq!(pixel(&img, 4, 4), [0, 0, 0, 255]);
    assert_eq!(pixel(&img, 0, 0), PAPER_PX);
}

#[test]
fn dot_and_line_cover_their_centers() {
    let mut frame = Frame::new(Canvas::new(16, 16).unwrap(), Rgba8::PAPER);
    frame.push(Primitive::Dot {
        center: Point::new(4.0, 4.0),
        size: 6.0,
        color: Rgba8::BLACK,
    });
    frame.push(Primitive::Line {
        from: Point::new(1.0, 12.0),
        to: Point::new(14.0, 12.0),
        weight: 3.0,
        color: Rgba8::BLACK,
    });
    let img = rasterize(&frame).unwrap();
    assert_eq!(pixel(&img, 4, 4), [0, 0, 0, 255]);
    assert_eq!(pixel(&img, 7, 12), [0, 0, 0, 255]);
    assert_eq!(pixel(&img, 15, 0), PAPER_PX);
}

#[test]
fn rect_stroke_leaves_the_interior_untouched() {
    let mut frame = Frame::new(Canvas::new(16, 16).unwrap(), Rgba8::PAPER);
    frame.push(Primitive::RectStroke {
        rect: Rect::new(2.0, 2.0, 14.0, 14.0),
        weight: 2.0,
        color: Rgba8::BLACK,
    });
    let img = rasterize(&frame).unwrap();
    assert_eq!(pixel(&img, 8, 2), [0, 0, 0, 255]);
    assert_eq!(pixel(&img, 8, 8), PAPER_PX);
}

#[test]
fn degenerate_primitives_are_tolerated() {
    let mut frame = Frame::new(Canvas::new(8, 8).unwrap(), Rgba8::PAPER);
    frame.push(Primitive::Line {
        from: Point::new(4.0, 4.0),
        to: Point::new(4.0, 4.0),
        weight: 2.0,
        color: Rgba8::BLACK,
    });
    frame.push(Primitive::Dot {
        center: Point::new(2.0, 2.0),
        size: 0.0,
        color: Rgba8::BLACK,
    });
    let img = rasterize(&frame).unwrap();
    assert_eq!(pixel(&img, 0, 0), PAPER_PX);
}

#[test]
fn oversized_canvas_is_rejected() {
    let frame = Frame::new(Canvas::new(70_000, 10).unwrap(), Rgba8::PAPER);
    assert!(matches!(rasterize(&frame), Err(FlowError::Validation(_))));
}
