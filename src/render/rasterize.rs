use std::sync::Arc;

use crate::foundation::core::Rgba;
use crate::foundation::error::{AstraError, AstraResult};
use crate::layers::primitive::Primitive;
use crate::raster::Raster;

/// Antialiased painter over a square canvas.
///
/// Owns a `vello_cpu` scene seeded with the base raster; layers append
/// primitives in composition order and `finish` resolves the scene to RGB
/// bytes. Unit-square geometry (origin bottom-left) is mapped to pixel space
/// here, including the y-flip, so layers never see pixel coordinates.
pub(crate) struct CanvasPainter {
    ctx: vello_cpu::RenderContext,
    side: u32,
}

impl CanvasPainter {
    /// Start a scene with `base` filling the whole canvas.
    pub(crate) fn new(base: &Raster) -> AstraResult<Self> {
        let side = base.size();
        let dim: u16 = side
            .try_into()
            .map_err(|_| AstraError::render(format!("canvas side {side} exceeds u16")))?;

        let mut ctx = vello_cpu::RenderContext::new(dim, dim);
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(base_image_paint(base)?);
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(side),
            f64::from(side),
        ));

        Ok(Self { ctx, side })
    }

    /// Append one layer's primitives; later draws overpaint earlier ones.
    pub(crate) fn draw(&mut self, primitives: &[Primitive]) {
        let s = f64::from(self.side);
        let to_px = |p: kurbo::Point| vello_cpu::kurbo::Point::new(p.x * s, (1.0 - p.y) * s);

        for prim in primitives {
            match prim {
                Primitive::Polyline {
                    points,
                    color,
                    width,
                    round_caps,
                } => {
                    if points.len() < 2 {
                        continue;
                    }
                    let mut path = vello_cpu::kurbo::BezPath::new();
                    path.move_to(to_px(points[0]));
                    for p in &points[1..] {
                        path.line_to(to_px(*p));
                    }
                    let cap = if *round_caps {
                        vello_cpu::kurbo::Cap::Round
                    } else {
                        vello_cpu::kurbo::Cap::Butt
                    };
                    let stroke = vello_cpu::kurbo::Stroke::new(width * s)
                        .with_caps(cap)
                        .with_join(vello_cpu::kurbo::Join::Round);
                    self.ctx.set_paint(paint_color(*color));
                    self.ctx.set_stroke(stroke);
                    self.ctx.stroke_path(&path);
                }
                Primitive::Circle {
                    center,
                    radius,
                    color,
                } => {
                    use vello_cpu::kurbo::Shape as _;

                    let circle = vello_cpu::kurbo::Circle::new(to_px(*center), radius * s);
                    let mut path = vello_cpu::kurbo::BezPath::new();
                    for el in circle.path_elements(0.1) {
                        path.push(el);
                    }
                    self.ctx.set_paint(paint_color(*color));
                    self.ctx.fill_path(&path);
                }
                Primitive::RectFill { rect, color } => {
                    // y-flip swaps which unit edge becomes the pixel top.
                    let px_rect = vello_cpu::kurbo::Rect::new(
                        rect.x0 * s,
                        (1.0 - rect.y1) * s,
                        rect.x1 * s,
                        (1.0 - rect.y0) * s,
                    );
                    self.ctx.set_paint(paint_color(*color));
                    self.ctx.fill_rect(&px_rect);
                }
            }
        }
    }

    /// Resolve the scene to an RGB raster.
    pub(crate) fn finish(mut self) -> AstraResult<Raster> {
        let dim = self.side as u16;
        let mut pixmap = vello_cpu::Pixmap::new(dim, dim);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);

        // The base fill is opaque, so alpha stays 255 and premultiplied
        // equals straight; the divide path is kept for safety.
        let premul = pixmap.data_as_u8_slice();
        let mut rgb = Vec::with_capacity((self.side as usize).pow(2) * 3);
        for px in premul.chunks_exact(4) {
            let a = px[3];
            match a {
                255 => rgb.extend_from_slice(&px[..3]),
                0 => rgb.extend_from_slice(&[0, 0, 0]),
                _ => {
                    let a16 = u16::from(a);
                    for &c in &px[..3] {
                        rgb.push(((u16::from(c) * 255 + a16 / 2) / a16).min(255) as u8);
                    }
                }
            }
        }
        Raster::from_rgb8(self.side, rgb)
    }
}

fn paint_color(c: Rgba) -> vello_cpu::peniko::Color {
    let [r, g, b, a] = c.to_rgba8();
    vello_cpu::peniko::Color::from_rgba8(r, g, b, a)
}

fn base_image_paint(base: &Raster) -> AstraResult<vello_cpu::Image> {
    let side = base.size();
    let w: u16 = side
        .try_into()
        .map_err(|_| AstraError::render("pixmap side exceeds u16"))?;

    let mut pixels = Vec::<vello_cpu::peniko::color::PremulRgba8>::with_capacity(
        (side as usize) * (side as usize),
    );
    for px in base.data().chunks_exact(3) {
        // Opaque pixels premultiply to themselves.
        pixels.push(vello_cpu::peniko::color::PremulRgba8::from_u8_array([
            px[0], px[1], px[2], 255,
        ]));
    }

    let pixmap = vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, w, true);
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}
