//! Software raster surface
//!
//! A [`Canvas`] is an RGBA8 buffer of exactly `grid × scale` pixels per side.
//! The scale lives in the base transform, so every drawing call takes
//! logical grid units and the same routine renders crisply at any scale.
//!
//! Shapes are rasterized by sampling pixel centers against the shape in user
//! space (no anti-aliasing), which keeps output bit-for-bit deterministic.
//! Each painted pixel also records the [`Layer`] that painted it last.

use crate::blend::{blend_pixel, BlendMode};
use crate::glyphs::{self, GLYPH_H, GLYPH_W};
use runeforge_core::{Color, ImageFrame, MAX_SCALE};
use std::f64::consts::TAU;

/// 2D affine transform, canvas convention:
/// `x' = a·x + c·y + e`, `y' = b·x + d·y + f`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    /// Uniform scale
    pub fn scale(s: f64) -> Self {
        Self {
            a: s,
            d: s,
            ..Self::IDENTITY
        }
    }

    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.a * x + self.c * y + self.e,
            self.b * x + self.d * y + self.f,
        )
    }

    /// `self × translate(dx, dy)`
    pub fn then_translate(self, dx: f64, dy: f64) -> Self {
        Self {
            e: self.a * dx + self.c * dy + self.e,
            f: self.b * dx + self.d * dy + self.f,
            ..self
        }
    }

    /// `self × rotate(angle)`
    pub fn then_rotate(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            a: self.a * cos + self.c * sin,
            b: self.b * cos + self.d * sin,
            c: self.c * cos - self.a * sin,
            d: self.d * cos - self.b * sin,
            ..self
        }
    }

    /// `self × scale(sx, sy)`
    pub fn then_scale(self, sx: f64, sy: f64) -> Self {
        Self {
            a: self.a * sx,
            b: self.b * sx,
            c: self.c * sy,
            d: self.d * sy,
            ..self
        }
    }

    pub fn invert(&self) -> Option<Self> {
        let det = self.a * self.d - self.b * self.c;
        if det.abs() < 1e-12 {
            return None;
        }
        Some(Self {
            a: self.d / det,
            b: -self.b / det,
            c: -self.c / det,
            d: self.a / det,
            e: (self.c * self.f - self.d * self.e) / det,
            f: (self.b * self.e - self.a * self.f) / det,
        })
    }

    pub fn is_axis_aligned(&self) -> bool {
        self.b == 0.0 && self.c == 0.0
    }

    /// Geometric mean scale factor
    pub fn linear_scale(&self) -> f64 {
        (self.a * self.d - self.b * self.c).abs().sqrt()
    }
}

/// Semantic layer that painted a pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Layer {
    Shadow,
    Feet,
    Legs,
    Torso,
    Arms,
    Gloves,
    Head,
    Face,
    Hair,
    Helmet,
    Weapon,
    Item,
    Monster,
    #[default]
    Effect,
}

/// Line end style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
}

/// Canvas-style shadow: a blurred halo in `color` beneath each shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    pub color: Color,
    /// Blur in device pixels; not affected by the transform
    pub blur: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GradientShape {
    Linear { x0: f64, y0: f64, x1: f64, y1: f64 },
    /// Concentric radial gradient
    Radial { cx: f64, cy: f64, r0: f64, r1: f64 },
}

/// Gradient in user space with straight-alpha color stops
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    pub shape: GradientShape,
    stops: Vec<(f64, Color)>,
}

impl Gradient {
    pub fn linear(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            shape: GradientShape::Linear { x0, y0, x1, y1 },
            stops: Vec::new(),
        }
    }

    pub fn radial(cx: f64, cy: f64, r0: f64, r1: f64) -> Self {
        Self {
            shape: GradientShape::Radial { cx, cy, r0, r1 },
            stops: Vec::new(),
        }
    }

    /// Add a color stop at `offset` in `0..=1`
    pub fn stop(mut self, offset: f64, color: Color) -> Self {
        let offset = offset.clamp(0.0, 1.0);
        let at = self.stops.partition_point(|(o, _)| *o <= offset);
        self.stops.insert(at, (offset, color));
        self
    }

    fn param(&self, x: f64, y: f64) -> f64 {
        match self.shape {
            GradientShape::Linear { x0, y0, x1, y1 } => {
                let (dx, dy) = (x1 - x0, y1 - y0);
                let len2 = dx * dx + dy * dy;
                if len2 <= 0.0 {
                    return 0.0;
                }
                ((x - x0) * dx + (y - y0) * dy) / len2
            }
            GradientShape::Radial { cx, cy, r0, r1 } => {
                let dist = ((x - cx).powi(2) + (y - cy).powi(2)).sqrt();
                if r1 <= r0 {
                    return if dist <= r0 { 0.0 } else { 1.0 };
                }
                (dist - r0) / (r1 - r0)
            }
        }
    }

    /// Color at user-space point
    pub fn color_at(&self, x: f64, y: f64) -> Color {
        let t = self.param(x, y).clamp(0.0, 1.0);
        let (Some(first), Some(last)) = (self.stops.first(), self.stops.last()) else {
            return Color::TRANSPARENT;
        };
        if t <= first.0 {
            return first.1;
        }
        if t >= last.0 {
            return last.1;
        }

        for pair in self.stops.windows(2) {
            let ((o0, c0), (o1, c1)) = (pair[0], pair[1]);
            if t >= o0 && t <= o1 {
                let span = o1 - o0;
                let k = if span > 0.0 { (t - o0) / span } else { 0.0 };
                let ch = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * k).round() as u8;
                return Color::rgba(
                    ch(c0.r, c1.r),
                    ch(c0.g, c1.g),
                    ch(c0.b, c1.b),
                    c0.a + (c1.a - c0.a) * k as f32,
                );
            }
        }
        last.1
    }
}

/// Fill or stroke source
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    Gradient(Gradient),
}

impl Paint {
    fn color_at(&self, x: f64, y: f64) -> Color {
        match self {
            Paint::Solid(c) => *c,
            Paint::Gradient(g) => g.color_at(x, y),
        }
    }
}

impl From<Color> for Paint {
    fn from(c: Color) -> Self {
        Paint::Solid(c)
    }
}

impl From<Gradient> for Paint {
    fn from(g: Gradient) -> Self {
        Paint::Gradient(g)
    }
}

#[derive(Debug, Clone)]
struct DrawState {
    transform: Transform,
    alpha: f32,
    blend: BlendMode,
    glow: Option<Glow>,
    line_width: f64,
    dash: Vec<f64>,
    cap: LineCap,
    layer: Layer,
}

/// Device-pixel coverage over a clipped bounding box
struct Mask {
    x0: i32,
    y0: i32,
    w: usize,
    h: usize,
    cov: Vec<f32>,
}

impl Mask {
    fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Option<Self> {
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        let (w, h) = ((x1 - x0) as usize, (y1 - y0) as usize);
        Some(Self {
            x0,
            y0,
            w,
            h,
            cov: vec![0.0; w * h],
        })
    }

    fn set(&mut self, px: i32, py: i32) {
        let (dx, dy) = (px - self.x0, py - self.y0);
        if dx >= 0 && dy >= 0 && (dx as usize) < self.w && (dy as usize) < self.h {
            self.cov[dy as usize * self.w + dx as usize] = 1.0;
        }
    }

    fn is_empty(&self) -> bool {
        self.cov.iter().all(|c| *c <= 0.0)
    }
}

/// RGBA raster surface with a canvas-like drawing state
#[derive(Debug, Clone)]
pub struct Canvas {
    grid: u32,
    scale: u32,
    frame: ImageFrame,
    layers: Vec<Option<Layer>>,
    state: DrawState,
    stack: Vec<DrawState>,
}

impl Canvas {
    /// New transparent surface of `grid × scale` pixels per side.
    /// `scale` is clamped to `1..=MAX_SCALE`.
    pub fn new(grid: u32, scale: u32) -> Self {
        let scale = scale.clamp(1, MAX_SCALE);
        let size = grid * scale;
        Self {
            grid,
            scale,
            frame: ImageFrame::new_rgba8(size, size),
            layers: vec![None; (size * size) as usize],
            state: DrawState {
                transform: Transform::scale(scale as f64),
                alpha: 1.0,
                blend: BlendMode::Normal,
                glow: None,
                line_width: 1.0,
                dash: Vec::new(),
                cap: LineCap::Butt,
                layer: Layer::Effect,
            },
            stack: Vec::new(),
        }
    }

    pub fn grid(&self) -> u32 {
        self.grid
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.frame.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.frame.height
    }

    pub fn frame(&self) -> &ImageFrame {
        &self.frame
    }

    pub fn into_frame(self) -> ImageFrame {
        self.frame
    }

    /// Layer that last painted device pixel `(x, y)`
    pub fn layer_at(&self, x: u32, y: u32) -> Option<Layer> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        self.layers[(y * self.width() + x) as usize]
    }

    /// Number of device pixels currently owned by `layer`
    pub fn layer_count(&self, layer: Layer) -> usize {
        self.layers.iter().filter(|l| **l == Some(layer)).count()
    }

    /// Erase every pixel; the drawing state is kept
    pub fn clear(&mut self) {
        self.frame.fill([0, 0, 0, 0]);
        self.layers.fill(None);
    }

    // ----- state -----

    pub fn save(&mut self) {
        self.stack.push(self.state.clone());
    }

    pub fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }

    /// Run `f` between `save` and `restore`
    pub fn scoped<R>(&mut self, f: impl FnOnce(&mut Canvas) -> R) -> R {
        self.save();
        let out = f(self);
        self.restore();
        out
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.state.transform = self.state.transform.then_translate(dx, dy);
    }

    pub fn rotate(&mut self, angle: f64) {
        self.state.transform = self.state.transform.then_rotate(angle);
    }

    pub fn scale_by(&mut self, sx: f64, sy: f64) {
        self.state.transform = self.state.transform.then_scale(sx, sy);
    }

    pub fn transform(&self) -> Transform {
        self.state.transform
    }

    /// Global alpha multiplied into every paint
    pub fn set_alpha(&mut self, alpha: f64) {
        self.state.alpha = alpha.clamp(0.0, 1.0) as f32;
    }

    pub fn alpha(&self) -> f64 {
        self.state.alpha as f64
    }

    pub fn set_blend(&mut self, mode: BlendMode) {
        self.state.blend = mode;
    }

    /// Halo in `color` blurred by `blur` device pixels; zero blur disables it
    pub fn set_glow(&mut self, color: Color, blur: f64) {
        self.state.glow = (blur > 0.0).then_some(Glow { color, blur });
    }

    pub fn clear_glow(&mut self) {
        self.state.glow = None;
    }

    pub fn set_line_width(&mut self, width: f64) {
        self.state.line_width = width.max(0.0);
    }

    /// Alternating dash/gap lengths in user units; empty for solid lines
    pub fn set_line_dash(&mut self, pattern: &[f64]) {
        self.state.dash = if pattern.iter().all(|d| *d > 0.0) {
            pattern.to_vec()
        } else {
            Vec::new()
        };
    }

    pub fn set_line_cap(&mut self, cap: LineCap) {
        self.state.cap = cap;
    }

    pub fn set_layer(&mut self, layer: Layer) {
        self.state.layer = layer;
    }

    pub fn layer(&self) -> Layer {
        self.state.layer
    }

    // ----- fills -----

    /// Fill a `w × h` rectangle
    pub fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, paint: impl Into<Paint>) {
        let (x, w) = if w < 0.0 { (x + w, -w) } else { (x, w) };
        let (y, h) = if h < 0.0 { (y + h, -h) } else { (y, h) };
        if w == 0.0 || h == 0.0 {
            return;
        }

        let t = self.state.transform;
        let mask = if t.is_axis_aligned() {
            let (dx0, dy0) = t.apply(x, y);
            let (dx1, dy1) = t.apply(x + w, y + h);
            let px0 = (dx0.min(dx1) - 0.5).ceil() as i32;
            let px1 = (dx0.max(dx1) - 0.5).ceil() as i32;
            let py0 = (dy0.min(dy1) - 0.5).ceil() as i32;
            let py1 = (dy0.max(dy1) - 0.5).ceil() as i32;
            self.clipped_mask(px0, py0, px1, py1).map(|mut m| {
                m.cov.fill(1.0);
                m
            })
        } else {
            self.rasterize((x, y, x + w, y + h), |ux, uy| {
                ux >= x && ux < x + w && uy >= y && uy < y + h
            })
        };

        if let Some(mask) = mask {
            self.paint_mask(mask, &paint.into());
        }
    }

    /// Fill one logical unit
    pub fn pixel(&mut self, x: f64, y: f64, color: Color) {
        self.fill_rect(x, y, 1.0, 1.0, color);
    }

    /// One-unit border just inside `(x, y, w, h)`
    pub fn outline(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color) {
        self.fill_rect(x, y, w, 1.0, color);
        self.fill_rect(x, y + h - 1.0, w, 1.0, color);
        self.fill_rect(x, y, 1.0, h, color);
        self.fill_rect(x + w - 1.0, y, 1.0, h, color);
    }

    /// Fill an axis-aligned ellipse
    pub fn fill_ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64, paint: impl Into<Paint>) {
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }
        let mask = self.rasterize((cx - rx, cy - ry, cx + rx, cy + ry), |ux, uy| {
            let nx = (ux - cx) / rx;
            let ny = (uy - cy) / ry;
            nx * nx + ny * ny <= 1.0
        });
        if let Some(mask) = mask {
            self.paint_mask(mask, &paint.into());
        }
    }

    pub fn fill_circle(&mut self, cx: f64, cy: f64, r: f64, paint: impl Into<Paint>) {
        self.fill_ellipse(cx, cy, r, r, paint);
    }

    /// Fill a polygon (even-odd rule)
    pub fn fill_polygon(&mut self, points: &[(f64, f64)], paint: impl Into<Paint>) {
        if points.len() < 3 {
            return;
        }
        let bounds = bounds_of(points);
        let mask = self.rasterize(bounds, |ux, uy| point_in_polygon(points, ux, uy));
        if let Some(mask) = mask {
            self.paint_mask(mask, &paint.into());
        }
    }

    /// Draw a rune glyph centered on `(cx, cy)`, `size` units tall.
    /// Characters without a bitmap draw nothing.
    pub fn fill_glyph(&mut self, ch: char, cx: f64, cy: f64, size: f64, paint: impl Into<Paint>) {
        let Some(bitmap) = glyphs::glyph(ch) else {
            return;
        };
        if size <= 0.0 {
            return;
        }
        let cell = size / GLYPH_H as f64;
        let left = cx - cell * GLYPH_W as f64 / 2.0;
        let top = cy - size / 2.0;
        let right = left + cell * GLYPH_W as f64;

        let mask = self.rasterize((left, top, right, top + size), |ux, uy| {
            let gx = ((ux - left) / cell).floor();
            let gy = ((uy - top) / cell).floor();
            gx >= 0.0 && gy >= 0.0 && glyphs::is_ink(bitmap, gx as usize, gy as usize)
        });
        if let Some(mask) = mask {
            self.paint_mask(mask, &paint.into());
        }
    }

    // ----- strokes -----

    /// Stroke a straight line
    pub fn stroke_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, paint: impl Into<Paint>) {
        self.stroke_path(&[(x0, y0), (x1, y1)], false, &paint.into());
    }

    /// Stroke an open polyline
    pub fn stroke_polyline(&mut self, points: &[(f64, f64)], paint: impl Into<Paint>) {
        self.stroke_path(points, false, &paint.into());
    }

    /// Stroke an elliptical arc from `start` to `end` radians (clockwise in
    /// screen space, as on a canvas)
    #[allow(clippy::too_many_arguments)]
    pub fn stroke_arc(
        &mut self,
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
        start: f64,
        end: f64,
        paint: impl Into<Paint>,
    ) {
        let sweep = end - start;
        let full = sweep.abs() >= TAU;
        let points = self.arc_points(cx, cy, rx, ry, start, if full { start + TAU } else { end });
        self.stroke_path(&points, full, &paint.into());
    }

    /// Fill the pie slice between `start` and `end` radians
    #[allow(clippy::too_many_arguments)]
    pub fn fill_arc(
        &mut self,
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
        start: f64,
        end: f64,
        paint: impl Into<Paint>,
    ) {
        if (end - start).abs() >= TAU {
            self.fill_ellipse(cx, cy, rx, ry, paint);
            return;
        }
        let mut points = self.arc_points(cx, cy, rx, ry, start, end);
        points.push((cx, cy));
        self.fill_polygon(&points, paint);
    }

    /// Stroke a full ellipse outline
    pub fn stroke_ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64, paint: impl Into<Paint>) {
        self.stroke_arc(cx, cy, rx, ry, 0.0, TAU, paint);
    }

    /// Stroke a cubic Bézier curve
    pub fn stroke_bezier(
        &mut self,
        p0: (f64, f64),
        c1: (f64, f64),
        c2: (f64, f64),
        p3: (f64, f64),
        paint: impl Into<Paint>,
    ) {
        const STEPS: usize = 24;
        let points: Vec<(f64, f64)> = (0..=STEPS)
            .map(|i| {
                let t = i as f64 / STEPS as f64;
                let u = 1.0 - t;
                let (b0, b1, b2, b3) = (u * u * u, 3.0 * u * u * t, 3.0 * u * t * t, t * t * t);
                (
                    b0 * p0.0 + b1 * c1.0 + b2 * c2.0 + b3 * p3.0,
                    b0 * p0.1 + b1 * c1.1 + b2 * c2.1 + b3 * p3.1,
                )
            })
            .collect();
        self.stroke_path(&points, false, &paint.into());
    }

    fn arc_points(&self, cx: f64, cy: f64, rx: f64, ry: f64, start: f64, end: f64) -> Vec<(f64, f64)> {
        let radius_px = rx.abs().max(ry.abs()) * self.state.transform.linear_scale();
        let sweep = end - start;
        let steps = ((sweep.abs() * radius_px / 2.0).ceil() as usize).clamp(8, 256);
        (0..=steps)
            .map(|i| {
                let a = start + sweep * i as f64 / steps as f64;
                (cx + a.cos() * rx, cy + a.sin() * ry)
            })
            .collect()
    }

    fn stroke_path(&mut self, points: &[(f64, f64)], closed: bool, paint: &Paint) {
        if points.len() < 2 || self.state.line_width <= 0.0 {
            return;
        }
        let t = self.state.transform;
        let Some(inv) = t.invert() else {
            return;
        };

        // Keep hairlines at least one device pixel wide
        let half = (self.state.line_width / 2.0).max(0.5 / t.linear_scale());
        let pieces = if self.state.dash.is_empty() {
            vec![points.to_vec()]
        } else {
            dash_path(points, &self.state.dash)
        };

        let (bx0, by0, bx1, by1) = bounds_of(points);
        let Some(mut mask) = self.device_mask((bx0 - half, by0 - half, bx1 + half, by1 + half))
        else {
            return;
        };

        let round = self.state.cap == LineCap::Round;
        for piece in &pieces {
            let last = piece.len().saturating_sub(1);
            for (i, seg) in piece.windows(2).enumerate() {
                let (p, q) = (seg[0], seg[1]);
                // Interior joints are round; path ends follow the cap
                let round_start = round || i > 0 || (closed && pieces.len() == 1);
                let round_end = round || i + 1 < last || (closed && pieces.len() == 1);
                self.stamp_segment(&mut mask, &inv, p, q, half, round_start, round_end);
            }
        }

        if !mask.is_empty() {
            self.paint_mask(mask, paint);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn stamp_segment(
        &self,
        mask: &mut Mask,
        inv: &Transform,
        p: (f64, f64),
        q: (f64, f64),
        half: f64,
        round_start: bool,
        round_end: bool,
    ) {
        let seg_bounds = (
            p.0.min(q.0) - half,
            p.1.min(q.1) - half,
            p.0.max(q.0) + half,
            p.1.max(q.1) + half,
        );
        let Some((px0, py0, px1, py1)) = self.device_bounds(seg_bounds) else {
            return;
        };

        let (dx, dy) = (q.0 - p.0, q.1 - p.1);
        let len2 = dx * dx + dy * dy;
        let half2 = half * half;

        for py in py0..py1 {
            for px in px0..px1 {
                let (ux, uy) = inv.apply(px as f64 + 0.5, py as f64 + 0.5);
                let s = if len2 > 0.0 {
                    ((ux - p.0) * dx + (uy - p.1) * dy) / len2
                } else {
                    0.0
                };
                let inside = if (0.0..=1.0).contains(&s) {
                    let (cx, cy) = (p.0 + dx * s, p.1 + dy * s);
                    (ux - cx).powi(2) + (uy - cy).powi(2) <= half2
                } else if s < 0.0 {
                    round_start && (ux - p.0).powi(2) + (uy - p.1).powi(2) <= half2
                } else {
                    round_end && (ux - q.0).powi(2) + (uy - q.1).powi(2) <= half2
                };
                if inside {
                    mask.set(px, py);
                }
            }
        }
    }

    // ----- rasterization -----

    /// Device pixel range covering a user-space bounding box, clipped
    fn device_bounds(&self, (x0, y0, x1, y1): (f64, f64, f64, f64)) -> Option<(i32, i32, i32, i32)> {
        let t = self.state.transform;
        let corners = [t.apply(x0, y0), t.apply(x1, y0), t.apply(x0, y1), t.apply(x1, y1)];
        let (dx0, dy0, dx1, dy1) = bounds_of(&corners);
        let px0 = (dx0.floor() as i32).max(0);
        let py0 = (dy0.floor() as i32).max(0);
        let px1 = (dx1.ceil() as i32).min(self.width() as i32);
        let py1 = (dy1.ceil() as i32).min(self.height() as i32);
        (px1 > px0 && py1 > py0).then_some((px0, py0, px1, py1))
    }

    fn device_mask(&self, bounds: (f64, f64, f64, f64)) -> Option<Mask> {
        let (px0, py0, px1, py1) = self.device_bounds(bounds)?;
        Mask::new(px0, py0, px1, py1)
    }

    fn clipped_mask(&self, px0: i32, py0: i32, px1: i32, py1: i32) -> Option<Mask> {
        Mask::new(
            px0.max(0),
            py0.max(0),
            px1.min(self.width() as i32),
            py1.min(self.height() as i32),
        )
    }

    /// Sample pixel centers against `inside` (user space)
    fn rasterize(
        &self,
        bounds: (f64, f64, f64, f64),
        inside: impl Fn(f64, f64) -> bool,
    ) -> Option<Mask> {
        let inv = self.state.transform.invert()?;
        let mut mask = self.device_mask(bounds)?;
        for row in 0..mask.h {
            for col in 0..mask.w {
                let px = mask.x0 + col as i32;
                let py = mask.y0 + row as i32;
                let (ux, uy) = inv.apply(px as f64 + 0.5, py as f64 + 0.5);
                if inside(ux, uy) {
                    mask.cov[row * mask.w + col] = 1.0;
                }
            }
        }
        (!mask.is_empty()).then_some(mask)
    }

    // ----- painting -----

    fn paint_mask(&mut self, mask: Mask, paint: &Paint) {
        let Some(inv) = self.state.transform.invert() else {
            return;
        };
        let alpha = self.state.alpha;
        if alpha <= 0.0 {
            return;
        }

        let colors: Vec<Option<Color>> = mask
            .cov
            .iter()
            .enumerate()
            .map(|(i, cov)| {
                (*cov > 0.0).then(|| {
                    let px = mask.x0 + (i % mask.w) as i32;
                    let py = mask.y0 + (i / mask.w) as i32;
                    let (ux, uy) = inv.apply(px as f64 + 0.5, py as f64 + 0.5);
                    paint.color_at(ux, uy)
                })
            })
            .collect();

        if let Some(glow) = self.state.glow {
            self.paint_glow(&mask, &colors, glow);
        }

        let blend = self.state.blend;
        let layer = self.state.layer;
        for (i, color) in colors.iter().enumerate() {
            let Some(color) = color else { continue };
            if color.a <= 0.0 {
                continue;
            }
            let px = (mask.x0 + (i % mask.w) as i32) as u32;
            let py = (mask.y0 + (i / mask.w) as i32) as u32;
            let idx = (py * self.width() + px) as usize;
            let dst = self.frame.get_pixel(px, py).unwrap_or([0; 4]);
            self.frame
                .set_pixel(px, py, blend_pixel(dst, *color, alpha, blend));
            self.layers[idx] = Some(layer);
        }
    }

    /// Blurred alpha halo beneath the shape. Halo pixels are not tagged
    /// with a layer.
    fn paint_glow(&mut self, mask: &Mask, colors: &[Option<Color>], glow: Glow) {
        let radius = ((glow.blur / 2.0).round() as i32).max(1);
        let pad = radius * 2;

        let Some(mut halo) = self.clipped_mask(
            mask.x0 - pad,
            mask.y0 - pad,
            mask.x0 + mask.w as i32 + pad,
            mask.y0 + mask.h as i32 + pad,
        ) else {
            return;
        };

        for (i, color) in colors.iter().enumerate() {
            if let Some(c) = color {
                let hx = (mask.x0 + (i % mask.w) as i32 - halo.x0) as usize;
                let hy = (mask.y0 + (i / mask.w) as i32 - halo.y0) as usize;
                halo.cov[hy * halo.w + hx] = c.a;
            }
        }

        // Two box passes approximate a gaussian
        for _ in 0..2 {
            box_blur(&mut halo.cov, halo.w, halo.h, radius as usize);
        }

        let alpha = self.state.alpha;
        let blend = self.state.blend;
        for (i, cov) in halo.cov.iter().enumerate() {
            if *cov <= 0.002 {
                continue;
            }
            let px = (halo.x0 + (i % halo.w) as i32) as u32;
            let py = (halo.y0 + (i / halo.w) as i32) as u32;
            let dst = self.frame.get_pixel(px, py).unwrap_or([0; 4]);
            self.frame
                .set_pixel(px, py, blend_pixel(dst, glow.color, alpha * cov, blend));
        }
    }
}

/// Separable box blur, in place, edges clamp to zero
fn box_blur(data: &mut [f32], w: usize, h: usize, r: usize) {
    let window = (2 * r + 1) as f32;
    let mut line = Vec::with_capacity(w.max(h));

    for row in 0..h {
        line.clear();
        line.extend_from_slice(&data[row * w..(row + 1) * w]);
        blur_line(&line, &mut data[row * w..(row + 1) * w], r, window);
    }

    let mut out = vec![0.0; h];
    for col in 0..w {
        line.clear();
        line.extend((0..h).map(|row| data[row * w + col]));
        blur_line(&line, &mut out, r, window);
        for (row, v) in out.iter().enumerate() {
            data[row * w + col] = *v;
        }
    }
}

fn blur_line(src: &[f32], dst: &mut [f32], r: usize, window: f32) {
    let n = src.len();
    let mut sum: f32 = src.iter().take(r.min(n)).sum();
    for i in 0..n {
        if i + r < n {
            sum += src[i + r];
        }
        if i > r {
            sum -= src[i - r - 1];
        }
        dst[i] = (sum / window).max(0.0);
    }
}

fn bounds_of(points: &[(f64, f64)]) -> (f64, f64, f64, f64) {
    points.iter().fold(
        (f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        |(x0, y0, x1, y1), (x, y)| (x0.min(*x), y0.min(*y), x1.max(*x), y1.max(*y)),
    )
}

fn point_in_polygon(points: &[(f64, f64)], x: f64, y: f64) -> bool {
    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let (xi, yi) = points[i];
        let (xj, yj) = points[j];
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Split a polyline into dash pieces by arc length
fn dash_path(points: &[(f64, f64)], pattern: &[f64]) -> Vec<Vec<(f64, f64)>> {
    let mut pieces = Vec::new();
    let mut current = vec![points[0]];
    let mut idx = 0;
    let mut left = pattern[0];
    let mut on = true;

    for seg in points.windows(2) {
        let (mut p, q) = (seg[0], seg[1]);
        let mut seg_len = ((q.0 - p.0).powi(2) + (q.1 - p.1).powi(2)).sqrt();

        while seg_len > left {
            let k = left / seg_len;
            let cut = (p.0 + (q.0 - p.0) * k, p.1 + (q.1 - p.1) * k);
            current.push(cut);
            if on {
                pieces.push(std::mem::take(&mut current));
            }
            seg_len -= left;
            p = cut;
            on = !on;
            idx = (idx + 1) % pattern.len();
            left = pattern[idx];
        }

        left -= seg_len;
        if on {
            current.push(q);
        }
    }

    if on && current.len() >= 2 {
        pieces.push(current);
    }
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::rgb(255, 0, 0);

    #[test]
    fn test_canvas_size_is_grid_times_scale() {
        let canvas = Canvas::new(48, 5);
        assert_eq!((canvas.width(), canvas.height()), (240, 240));
        assert_eq!(Canvas::new(24, 0).scale(), 1);
    }

    #[test]
    fn test_huge_scale_is_clamped() {
        let canvas = Canvas::new(64, 1366);
        assert_eq!(canvas.scale(), MAX_SCALE);
        assert_eq!(canvas.width(), 64 * MAX_SCALE);
    }

    #[test]
    fn test_fill_rect_scales_to_device_pixels() {
        let mut canvas = Canvas::new(10, 3);
        canvas.fill_rect(2.0, 1.0, 2.0, 1.0, RED);

        let frame = canvas.frame();
        assert_eq!(frame.opaque_count(), 6 * 3);
        assert_eq!(frame.get_pixel(6, 3), Some([255, 0, 0, 255]));
        assert_eq!(frame.get_pixel(11, 5), Some([255, 0, 0, 255]));
        assert_eq!(frame.get_pixel(12, 3), Some([0, 0, 0, 0]));
        assert_eq!(frame.get_pixel(5, 3), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_offscreen_is_clipped() {
        let mut canvas = Canvas::new(8, 1);
        canvas.fill_rect(-4.0, -4.0, 6.0, 6.0, RED);
        assert_eq!(canvas.frame().opaque_count(), 4);
        canvas.fill_rect(20.0, 20.0, 2.0, 2.0, RED);
        assert_eq!(canvas.frame().opaque_count(), 4);
    }

    #[test]
    fn test_outline_is_hollow() {
        let mut canvas = Canvas::new(8, 1);
        canvas.outline(0.0, 0.0, 4.0, 4.0, RED);
        assert_eq!(canvas.frame().opaque_count(), 12);
        assert_eq!(canvas.frame().get_pixel(1, 1), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_translate_and_restore() {
        let mut canvas = Canvas::new(8, 2);
        canvas.save();
        canvas.translate(3.0, 0.0);
        canvas.pixel(0.0, 0.0, RED);
        canvas.restore();
        canvas.pixel(0.0, 0.0, RED);

        assert_eq!(canvas.frame().get_pixel(6, 0), Some([255, 0, 0, 255]));
        assert_eq!(canvas.frame().get_pixel(0, 0), Some([255, 0, 0, 255]));
        assert_eq!(canvas.frame().opaque_count(), 8);
    }

    #[test]
    fn test_rotation_quarter_turn() {
        let mut canvas = Canvas::new(10, 1);
        canvas.translate(5.0, 5.0);
        canvas.rotate(std::f64::consts::FRAC_PI_2);
        canvas.fill_rect(0.0, 0.0, 3.0, 1.0, RED);
        // A horizontal bar becomes vertical, extending downward
        let frame = canvas.frame();
        assert_eq!(frame.opaque_count(), 3);
        assert_eq!(frame.get_pixel(4, 6).unwrap()[3], 255);
    }

    #[test]
    fn test_global_alpha() {
        let mut canvas = Canvas::new(4, 1);
        canvas.set_alpha(0.5);
        canvas.pixel(0.0, 0.0, Color::WHITE);
        let px = canvas.frame().get_pixel(0, 0).unwrap();
        assert!((127..=128).contains(&px[3]));
    }

    #[test]
    fn test_ellipse_and_circle() {
        let mut canvas = Canvas::new(20, 1);
        canvas.fill_circle(10.0, 10.0, 5.0, RED);
        let count = canvas.frame().opaque_count();
        // Area of a radius-5 disc is about 78.5
        assert!((70..=90).contains(&count), "{count}");
        assert_eq!(canvas.frame().get_pixel(10, 10).unwrap()[3], 255);
        assert_eq!(canvas.frame().get_pixel(0, 0).unwrap()[3], 0);
    }

    #[test]
    fn test_stroke_line_width() {
        let mut canvas = Canvas::new(20, 1);
        canvas.set_line_width(2.0);
        canvas.stroke_line(2.0, 10.0, 12.0, 10.0, RED);
        let frame = canvas.frame();
        assert_eq!(frame.get_pixel(5, 9).unwrap()[3], 255);
        assert_eq!(frame.get_pixel(5, 10).unwrap()[3], 255);
        assert_eq!(frame.get_pixel(5, 12).unwrap()[3], 0);
        assert_eq!(frame.opaque_count(), 20);
    }

    #[test]
    fn test_hairline_still_visible() {
        let mut canvas = Canvas::new(20, 1);
        canvas.set_line_width(0.1);
        canvas.stroke_line(0.0, 5.5, 20.0, 5.5, RED);
        assert!(canvas.frame().opaque_count() >= 20);
    }

    #[test]
    fn test_dashed_line_has_gaps() {
        let mut solid = Canvas::new(24, 1);
        solid.stroke_line(0.0, 5.5, 24.0, 5.5, RED);

        let mut dashed = Canvas::new(24, 1);
        dashed.set_line_dash(&[2.0, 3.0]);
        dashed.stroke_line(0.0, 5.5, 24.0, 5.5, RED);

        let n = dashed.frame().opaque_count();
        assert!(n > 0 && n < solid.frame().opaque_count());
    }

    #[test]
    fn test_linear_gradient() {
        let grad = Gradient::linear(0.0, 0.0, 10.0, 0.0)
            .stop(0.0, Color::rgb(0, 0, 0))
            .stop(1.0, Color::rgb(200, 0, 0));
        assert_eq!(grad.color_at(-5.0, 0.0), Color::rgb(0, 0, 0));
        assert_eq!(grad.color_at(5.0, 3.0), Color::rgb(100, 0, 0));
        assert_eq!(grad.color_at(50.0, 0.0), Color::rgb(200, 0, 0));
    }

    #[test]
    fn test_radial_gradient_alpha() {
        let grad = Gradient::radial(0.0, 0.0, 0.0, 10.0)
            .stop(0.0, Color::rgba(255, 255, 255, 1.0))
            .stop(1.0, Color::rgba(255, 255, 255, 0.0));
        assert_eq!(grad.color_at(0.0, 0.0).a, 1.0);
        assert!((grad.color_at(5.0, 0.0).a - 0.5).abs() < 1e-6);
        assert_eq!(grad.color_at(20.0, 0.0).a, 0.0);
    }

    #[test]
    fn test_glow_paints_outside_shape() {
        let mut plain = Canvas::new(20, 2);
        plain.fill_rect(8.0, 8.0, 4.0, 4.0, RED);

        let mut glowing = Canvas::new(20, 2);
        glowing.set_glow(Color::rgb(255, 200, 0), 8.0);
        glowing.fill_rect(8.0, 8.0, 4.0, 4.0, RED);

        assert!(glowing.frame().opaque_count() > plain.frame().opaque_count());
        // The shape itself is unchanged on top of its halo
        assert_eq!(glowing.frame().get_pixel(20, 20), Some([255, 0, 0, 255]));
        // Halo pixels carry no layer
        assert_eq!(glowing.layer_count(Layer::Effect), plain.layer_count(Layer::Effect));
    }

    #[test]
    fn test_layer_tags() {
        let mut canvas = Canvas::new(8, 1);
        canvas.set_layer(Layer::Hair);
        canvas.fill_rect(0.0, 0.0, 4.0, 4.0, RED);
        canvas.set_layer(Layer::Helmet);
        canvas.fill_rect(2.0, 0.0, 4.0, 4.0, RED);

        assert_eq!(canvas.layer_at(0, 0), Some(Layer::Hair));
        assert_eq!(canvas.layer_at(3, 0), Some(Layer::Helmet));
        assert_eq!(canvas.layer_count(Layer::Hair), 8);
        assert_eq!(canvas.layer_at(7, 7), None);

        canvas.clear();
        assert_eq!(canvas.layer_count(Layer::Helmet), 0);
        assert!(canvas.frame().is_blank());
    }

    #[test]
    fn test_glyph_draws_ink_only() {
        let mut canvas = Canvas::new(14, 1);
        canvas.fill_glyph('ᛁ', 7.0, 7.0, 7.0, RED);
        assert_eq!(canvas.frame().opaque_count(), 7);

        canvas.fill_glyph('Q', 7.0, 7.0, 7.0, RED);
        assert_eq!(canvas.frame().opaque_count(), 7);
    }

    #[test]
    fn test_polygon() {
        let mut canvas = Canvas::new(10, 1);
        canvas.fill_polygon(&[(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)], RED);
        let n = canvas.frame().opaque_count();
        assert!((40..=60).contains(&n), "{n}");
    }

    #[test]
    fn test_fill_arc_quarter() {
        let mut canvas = Canvas::new(20, 1);
        canvas.fill_arc(10.0, 10.0, 8.0, 8.0, 0.0, std::f64::consts::FRAC_PI_2, RED);
        // lower right quadrant only
        assert!(canvas.frame().get_pixel(13, 13).unwrap()[3] > 0);
        assert_eq!(canvas.frame().get_pixel(6, 6).unwrap()[3], 0);
        assert_eq!(canvas.frame().get_pixel(6, 13).unwrap()[3], 0);
    }

    #[test]
    fn test_transform_inverse() {
        let t = Transform::scale(3.0).then_translate(2.0, 1.0).then_rotate(0.7);
        let inv = t.invert().unwrap();
        let (x, y) = t.apply(1.5, -2.0);
        let (bx, by) = inv.apply(x, y);
        assert!((bx - 1.5).abs() < 1e-9 && (by + 2.0).abs() < 1e-9);
    }
}
