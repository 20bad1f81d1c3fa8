// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`DrawContext`] on top of a `vello_cpu` render context.

use core::fmt;

use kurbo::{BezPath, Cap, Join, PathEl, Shape};
use understory_ink::{DrawContext, DrawOp, StateOp, StrokeStyle};
use vello_cpu::RenderContext;
use vello_cpu::kurbo::{
    BezPath as CpuBezPath, Cap as CpuCap, Join as CpuJoin, Point as CpuPoint, Stroke as CpuStroke,
};

/// Flattening tolerance for circles, in pixels.
const CIRCLE_TOLERANCE: f64 = 0.1;

/// Drawing context that forwards ops to a [`RenderContext`].
pub(crate) struct VelloCpuContext {
    pub(crate) ctx: RenderContext,
}

impl fmt::Debug for VelloCpuContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("VelloCpuContext { .. }")
    }
}

impl VelloCpuContext {
    pub(crate) fn new(width: u16, height: u16) -> Self {
        Self {
            ctx: RenderContext::new(width, height),
        }
    }

    fn stroke_to_cpu(style: &StrokeStyle) -> CpuStroke {
        let mut stroke = CpuStroke::new(style.width);
        stroke.miter_limit = style.miter_limit;
        stroke.join = match style.join {
            Join::Bevel => CpuJoin::Bevel,
            Join::Miter => CpuJoin::Miter,
            Join::Round => CpuJoin::Round,
        };
        stroke.start_cap = Self::cap_to_cpu(style.start_cap);
        stroke.end_cap = Self::cap_to_cpu(style.end_cap);
        stroke
    }

    fn cap_to_cpu(cap: Cap) -> CpuCap {
        match cap {
            Cap::Butt => CpuCap::Butt,
            Cap::Round => CpuCap::Round,
            Cap::Square => CpuCap::Square,
        }
    }

    fn path_to_cpu(elements: impl IntoIterator<Item = PathEl>) -> CpuBezPath {
        let pt = |p: kurbo::Point| CpuPoint::new(p.x, p.y);
        let mut out = CpuBezPath::new();
        for el in elements {
            match el {
                PathEl::MoveTo(p) => out.move_to(pt(p)),
                PathEl::LineTo(p) => out.line_to(pt(p)),
                PathEl::QuadTo(p1, p2) => out.quad_to(pt(p1), pt(p2)),
                PathEl::CurveTo(p1, p2, p3) => out.curve_to(pt(p1), pt(p2), pt(p3)),
                PathEl::ClosePath => out.close_path(),
            }
        }
        out
    }

    fn bez_to_cpu(path: &BezPath) -> CpuBezPath {
        Self::path_to_cpu(path.elements().iter().copied())
    }
}

impl DrawContext for VelloCpuContext {
    fn state(&mut self, op: StateOp) {
        match op {
            StateOp::SetPaint(color) => self.ctx.set_paint(color),
            StateOp::SetStroke(style) => self.ctx.set_stroke(Self::stroke_to_cpu(&style)),
        }
    }

    fn draw(&mut self, op: DrawOp) {
        match op {
            DrawOp::StrokePath(path) => self.ctx.stroke_path(&Self::bez_to_cpu(&path)),
            DrawOp::FillCircle(circle) => {
                let path = Self::path_to_cpu(circle.path_elements(CIRCLE_TOLERANCE));
                self.ctx.fill_path(&path);
            }
        }
    }
}
