use crate::{
    assets::decode::PreparedImage,
    foundation::{
        core::{Affine, Canvas, Point, Rect, Rgba8Premul},
        error::{DocError, DocResult},
    },
    render::{
        composite::{CompositeMode, composite_in_place},
        frame::FrameRGBA,
    },
};

/// Read access to premultiplied RGBA8 pixels, the input side of [`Surface::blit`].
pub trait PixelSource {
    /// Width in pixels.
    fn width(&self) -> u32;
    /// Height in pixels.
    fn height(&self) -> u32;
    /// Tightly packed premultiplied RGBA8 rows.
    fn premul_bytes(&self) -> &[u8];
}

impl PixelSource for PreparedImage {
    fn width(&self) -> u32 {
        PreparedImage::width(self)
    }

    fn height(&self) -> u32 {
        PreparedImage::height(self)
    }

    fn premul_bytes(&self) -> &[u8] {
        PreparedImage::premul_bytes(self)
    }
}

/// Owned premultiplied RGBA8 raster.
///
/// Axis-aligned work (rectangles, region blits) runs directly on the byte buffer with
/// integer-rounded edges. Vector work (polygons, transformed images) goes through
/// [`Surface::paint`], which rasterizes with `vello_cpu` into a scratch layer and then
/// composites that layer with the requested [`CompositeMode`].
#[derive(Clone, PartialEq, Eq)]
pub struct Surface {
    width: u16,
    height: u16,
    data: Vec<u8>,
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl PixelSource for Surface {
    fn width(&self) -> u32 {
        u32::from(self.width)
    }

    fn height(&self) -> u32 {
        u32::from(self.height)
    }

    fn premul_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl Surface {
    /// Transparent surface of `width` x `height` pixels.
    pub fn new(width: u32, height: u32) -> DocResult<Self> {
        if width == 0 || height == 0 {
            return Err(DocError::validation("surface dimensions must be non-zero"));
        }
        let w: u16 = width
            .try_into()
            .map_err(|_| DocError::validation("surface width exceeds u16"))?;
        let h: u16 = height
            .try_into()
            .map_err(|_| DocError::validation("surface height exceeds u16"))?;
        Ok(Self {
            width: w,
            height: h,
            data: vec![0; usize::from(w) * usize::from(h) * 4],
        })
    }

    /// Transparent surface sized to `canvas`.
    pub fn for_canvas(canvas: Canvas) -> DocResult<Self> {
        Self::new(canvas.width, canvas.height)
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        u32::from(self.width)
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        u32::from(self.height)
    }

    /// Dimensions as a [`Canvas`].
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width(),
            height: self.height(),
        }
    }

    /// Raw premultiplied bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Reset every pixel to transparent.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Overwrite every pixel with `color`.
    pub fn fill(&mut self, color: Rgba8Premul) {
        let rgba = color.to_array();
        for px in self.data.chunks_exact_mut(4) {
            px.copy_from_slice(&rgba);
        }
    }

    /// Pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8Premul> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let idx = self.index(x, y);
        let px = &self.data[idx..idx + 4];
        Some(Rgba8Premul {
            r: px[0],
            g: px[1],
            b: px[2],
            a: px[3],
        })
    }

    /// Fill the pixel-rounded, clipped `rect` with `color`.
    pub fn fill_rect(&mut self, rect: Rect, color: Rgba8Premul, mode: CompositeMode) {
        let Some((x0, x1)) = pixel_span(rect.x0, rect.x1, self.width()) else {
            return;
        };
        let Some((y0, y1)) = pixel_span(rect.y0, rect.y1, self.height()) else {
            return;
        };
        let src = color.to_array();
        for y in y0..y1 {
            let row = self.index(x0, y);
            for px in self.data[row..row + (x1 - x0) as usize * 4].chunks_exact_mut(4) {
                let out = mode.apply([px[0], px[1], px[2], px[3]], src);
                px.copy_from_slice(&out);
            }
        }
    }

    /// Copy `src_rect` of `src` so that its top-left corner lands on `dest`.
    ///
    /// Both the region and the destination are rounded to whole pixels; parts falling outside
    /// either surface are skipped.
    pub fn blit(
        &mut self,
        src: &impl PixelSource,
        src_rect: Rect,
        dest: Point,
        mode: CompositeMode,
    ) {
        let Some((sx0, sx1)) = pixel_span(src_rect.x0, src_rect.x1, src.width()) else {
            return;
        };
        let Some((sy0, sy1)) = pixel_span(src_rect.y0, src_rect.y1, src.height()) else {
            return;
        };
        let off_x = dest.x.round() as i64 - src_rect.x0.round() as i64;
        let off_y = dest.y.round() as i64 - src_rect.y0.round() as i64;

        let (dw, dh) = (i64::from(self.width()), i64::from(self.height()));
        let x_lo = i64::from(sx0).max(-off_x);
        let x_hi = i64::from(sx1).min(dw - off_x);
        if x_hi <= x_lo {
            return;
        }

        let src_bytes = src.premul_bytes();
        let src_stride = src.width() as usize * 4;
        for sy in sy0..sy1 {
            let dy = i64::from(sy) + off_y;
            if dy < 0 || dy >= dh {
                continue;
            }
            for sx in x_lo..x_hi {
                let si = sy as usize * src_stride + sx as usize * 4;
                let s = [
                    src_bytes[si],
                    src_bytes[si + 1],
                    src_bytes[si + 2],
                    src_bytes[si + 3],
                ];
                if s[3] == 0 && mode == CompositeMode::SourceOver {
                    continue;
                }
                let di = self.index((sx + off_x) as u32, dy as u32);
                let d = [
                    self.data[di],
                    self.data[di + 1],
                    self.data[di + 2],
                    self.data[di + 3],
                ];
                self.data[di..di + 4].copy_from_slice(&mode.apply(d, s));
            }
        }
    }

    /// Rasterize a batch of vector draws and composite the result with `mode`.
    ///
    /// Draws inside one batch blend with each other source-over; `mode` only governs how the
    /// finished batch meets the existing pixels.
    pub fn paint<F>(&mut self, mode: CompositeMode, draw: F) -> DocResult<()>
    where
        F: FnOnce(&mut Painter<'_>) -> DocResult<()>,
    {
        let mut ctx = vello_cpu::RenderContext::new(self.width, self.height);
        draw(&mut Painter { ctx: &mut ctx })?;
        ctx.flush();

        let mut layer = vello_cpu::Pixmap::new(self.width, self.height);
        ctx.render_to_pixmap(&mut layer);
        composite_in_place(&mut self.data, layer.data_as_u8_slice(), mode)
    }

    /// Snapshot the surface as an image that can be painted elsewhere.
    pub fn to_image(&self) -> DocResult<PreparedImage> {
        PreparedImage::from_premul(self.width(), self.height(), self.data.clone())
    }

    /// Copy the surface out as a premultiplied frame.
    pub fn to_frame(&self) -> FrameRGBA {
        FrameRGBA {
            width: self.width(),
            height: self.height(),
            data: self.data.clone(),
            premultiplied: true,
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * usize::from(self.width) + x as usize) * 4
    }
}

/// Vector drawing calls recorded inside [`Surface::paint`].
pub struct Painter<'a> {
    ctx: &'a mut vello_cpu::RenderContext,
}

impl Painter<'_> {
    /// Fill the closed polygon through `points` (non-zero winding).
    pub fn fill_polygon(&mut self, points: &[Point], color: Rgba8Premul) {
        let [first, rest @ ..] = points else {
            return;
        };
        if rest.len() < 2 || color.a == 0 {
            return;
        }

        let mut path = vello_cpu::kurbo::BezPath::new();
        path.move_to(point_to_cpu(*first));
        for p in rest {
            path.line_to(point_to_cpu(*p));
        }
        path.close_path();

        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx
            .set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(color_to_cpu(color));
        self.ctx.fill_path(&path);
    }

    /// Draw all of `image` with `transform` mapping image pixels to surface pixels.
    pub fn draw_image(&mut self, image: &PreparedImage, transform: Affine) {
        let (w, h) = (f64::from(image.width()), f64::from(image.height()));
        self.ctx.set_transform(affine_to_cpu(transform));
        self.ctx
            .set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(image.paint().clone());
        self.ctx
            .fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, w, h));
    }
}

/// Rounded, clipped `[lo, hi)` pixel span, or `None` when empty.
fn pixel_span(lo: f64, hi: f64, limit: u32) -> Option<(u32, u32)> {
    let a = lo.round().max(0.0);
    let b = hi.round().min(f64::from(limit));
    if b <= a {
        return None;
    }
    Some((a as u32, b as u32))
}

fn color_to_cpu(c: Rgba8Premul) -> vello_cpu::peniko::Color {
    if c.a == 0 {
        return vello_cpu::peniko::Color::from_rgba8(0, 0, 0, 0);
    }
    let a = u32::from(c.a);
    let unpremul = |v: u8| ((u32::from(v) * 255 + a / 2) / a).min(255) as u8;
    vello_cpu::peniko::Color::from_rgba8(unpremul(c.r), unpremul(c.g), unpremul(c.b), c.a)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
