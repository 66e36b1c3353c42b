use kurbo::Shape as _;

use crate::foundation::core::{Point, Rect, Rgba8};
use crate::foundation::error::{FlowError, FlowResult};
use crate::render::frame::{Frame, Primitive};

/// Raw RGBA8 pixels read back from the raster backend (premultiplied).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub premultiplied: bool,
}

/// Rasterize a frame into premultiplied RGBA8 via the CPU backend.
#[tracing::instrument(skip_all, fields(ops = frame.ops.len()))]
pub fn rasterize(frame: &Frame) -> FlowResult<FrameRGBA> {
    let width: u16 = frame
        .canvas
        .width
        .try_into()
        .map_err(|_| FlowError::validation("canvas width exceeds u16"))?;
    let height: u16 = frame
        .canvas
        .height
        .try_into()
        .map_err(|_| FlowError::validation("canvas height exceeds u16"))?;

    let mut pixmap = vello_cpu::Pixmap::new(width, height);
    let mut ctx = vello_cpu::RenderContext::new(width, height);
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);

    set_paint(&mut ctx, frame.background);
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
        0.0,
        0.0,
        f64::from(width),
        f64::from(height),
    ));

    for op in &frame.ops {
        draw_op(&mut ctx, op);
    }

    ctx.flush();
    ctx.render_to_pixmap(&mut pixmap);

    Ok(FrameRGBA {
        width: u32::from(width),
        height: u32::from(height),
        data: pixmap.data_as_u8_slice().to_vec(),
        premultiplied: true,
    })
}

fn draw_op(ctx: &mut vello_cpu::RenderContext, op: &Primitive) {
    match op {
        Primitive::Dot { center, size, color } => {
            set_paint(ctx, *color);
            let radius = (size * 0.5).max(0.0);
            let circle = kurbo::Circle::new(*center, radius);
            ctx.fill_path(&bezpath_to_cpu(&circle.to_path(0.1)));
        }
        Primitive::Line {
            from,
            to,
            weight,
            color,
        } => {
            set_paint(ctx, *color);
            ctx.fill_path(&line_quad(*from, *to, *weight));
        }
        Primitive::RectFill { rect, color } => {
            set_paint(ctx, *color);
            ctx.fill_rect(&rect_to_cpu(*rect));
        }
        Primitive::RectStroke {
            rect,
            weight,
            color,
        } => {
            set_paint(ctx, *color);
            let half = weight * 0.5;
            // Four edge bands instead of a stroked path; keeps the backend
            // surface to plain fills.
            let edges = [
                Rect::new(rect.x0 - half, rect.y0 - half, rect.x1 + half, rect.y0 + half),
                Rect::new(rect.x0 - half, rect.y1 - half, rect.x1 + half, rect.y1 + half),
                Rect::new(rect.x0 - half, rect.y0 + half, rect.x0 + half, rect.y1 - half),
                Rect::new(rect.x1 - half, rect.y0 + half, rect.x1 + half, rect.y1 - half),
            ];
            for edge in edges {
                ctx.fill_rect(&rect_to_cpu(edge));
            }
        }
    }
}

fn set_paint(ctx: &mut vello_cpu::RenderContext, color: Rgba8) {
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
        color.r, color.g, color.b, color.a,
    ));
}

/// Filled quad around a line segment; collapses to an empty area (and thus
/// draws nothing) for zero-length input.
fn line_quad(from: Point, to: Point, weight: f64) -> vello_cpu::kurbo::BezPath {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let len = dx.hypot(dy);
    let (nx, ny) = if len > f64::EPSILON {
        (-dy / len * weight * 0.5, dx / len * weight * 0.5)
    } else {
        (0.0, 0.0)
    };

    let mut path = vello_cpu::kurbo::BezPath::new();
    path.move_to(point_to_cpu(Point::new(from.x + nx, from.y + ny)));
    path.line_to(point_to_cpu(Point::new(to.x + nx, to.y + ny)));
    path.line_to(point_to_cpu(Point::new(to.x - nx, to.y - ny)));
    path.line_to(point_to_cpu(Point::new(from.x - nx, from.y - ny)));
    path.close_path();
    path
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &kurbo::BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
