use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::domain::{
    chart::{ChartHandle, ChartOptions, HoverState, PlotBand},
    errors::{AppError, RenderingResult},
    logging::LogComponent,
};
use crate::log_trace;
use crate::time_utils::format_axis_label;

const BACKGROUND: &str = "#ffffff";
const TEXT: &str = "#333333";
const MUTED_TEXT: &str = "#666666";
const GRID: &str = "#e6e6e6";
const SERIES: &str = "#2caffe";
const CROSSHAIR: &str = "#cccccc";
const HIGHLIGHT: &str = "rgba(44, 175, 254, 0.25)";
const TOOLTIP_BG: &str = "rgba(247, 247, 247, 0.95)";
const MARKER_RADIUS: f64 = 2.5;
const X_TICKS: usize = 6;
const Y_TICKS: usize = 5;

fn js_err(context: &str) -> impl Fn(JsValue) -> AppError + '_ {
    move |e| AppError::Rendering(format!("{context}: {e:?}"))
}

/// Canvas 2D renderer. Stateless: every call repaints from the handle and options.
pub struct CanvasRenderer;

impl CanvasRenderer {
    pub fn new() -> Self {
        Self
    }

    fn context(&self, canvas: &HtmlCanvasElement) -> RenderingResult<CanvasRenderingContext2d> {
        canvas
            .get_context("2d")
            .map_err(js_err("failed to get 2D context"))?
            .ok_or_else(|| AppError::Rendering("2D context unavailable".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| AppError::Rendering("failed to cast to 2D context".to_string()))
    }

    pub fn render(
        &self,
        canvas: &HtmlCanvasElement,
        handle: &ChartHandle,
        options: &ChartOptions,
    ) -> RenderingResult<()> {
        if canvas.width() != handle.width() || canvas.height() != handle.height() {
            canvas.set_width(handle.width());
            canvas.set_height(handle.height());
        }
        let ctx = self.context(canvas)?;
        let (width, height) = (handle.width() as f64, handle.height() as f64);

        ctx.clear_rect(0.0, 0.0, width, height);
        ctx.set_fill_style_str(BACKGROUND);
        ctx.fill_rect(0.0, 0.0, width, height);

        self.render_titles(&ctx, width, options)?;
        for band in handle.plot_bands() {
            self.render_plot_band(&ctx, handle, band)?;
        }
        self.render_axes(&ctx, handle, options)?;

        if handle.series_data().is_empty() {
            self.render_no_data(&ctx, handle)?;
        } else {
            self.render_series(&ctx, handle, options)?;
        }

        if let Some(rect) = handle.highlight() {
            ctx.set_fill_style_str(HIGHLIGHT);
            ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);
        }

        if let Some(hover) = handle.hover() {
            self.render_crosshair(&ctx, handle, options, hover);
            self.render_tooltip(&ctx, handle, options, hover)?;
        }

        log_trace!(
            LogComponent::Infrastructure("CanvasRenderer"),
            "frame: {} points, highlight={}",
            handle.series_data().len(),
            handle.highlight().is_some()
        );
        Ok(())
    }

    fn render_titles(&self, ctx: &CanvasRenderingContext2d, width: f64, options: &ChartOptions) -> RenderingResult<()> {
        ctx.set_text_align("center");
        ctx.set_fill_style_str(TEXT);
        ctx.set_font("bold 16px sans-serif");
        ctx.fill_text(&options.title.text, width / 2.0, 24.0).map_err(js_err("title"))?;
        ctx.set_fill_style_str(MUTED_TEXT);
        ctx.set_font("12px sans-serif");
        ctx.fill_text(&options.subtitle.text, width / 2.0, 44.0).map_err(js_err("subtitle"))?;
        Ok(())
    }

    fn render_plot_band(&self, ctx: &CanvasRenderingContext2d, handle: &ChartHandle, band: &PlotBand) -> RenderingResult<()> {
        let plot = handle.plot_area();
        let x1 = handle.to_pixel_x(band.from).clamp(plot.left, plot.right());
        let x2 = handle.to_pixel_x(band.to).clamp(plot.left, plot.right());
        let (left, right) = (x1.min(x2), x1.max(x2));

        ctx.set_fill_style_str(&band.color);
        ctx.fill_rect(left, plot.top, (right - left).max(1.0), plot.height);

        ctx.set_text_align("left");
        ctx.set_fill_style_str(TEXT);
        ctx.set_font("10px sans-serif");
        for (i, line) in band.label.iter().enumerate() {
            ctx.fill_text(line, left + 4.0, plot.top + 14.0 + 12.0 * i as f64)
                .map_err(js_err("band label"))?;
        }
        Ok(())
    }

    fn render_axes(&self, ctx: &CanvasRenderingContext2d, handle: &ChartHandle, options: &ChartOptions) -> RenderingResult<()> {
        let plot = handle.plot_area();
        ctx.set_line_width(1.0);
        ctx.set_stroke_style_str(GRID);
        ctx.set_font("11px sans-serif");
        ctx.set_fill_style_str(MUTED_TEXT);

        ctx.set_text_align("right");
        for value in handle.y_axis().ticks(Y_TICKS) {
            let y = handle.to_pixel_y(value);
            ctx.begin_path();
            ctx.move_to(plot.left, y);
            ctx.line_to(plot.right(), y);
            ctx.stroke();
            ctx.fill_text(&format!("{value:.2}"), plot.left - 6.0, y + 4.0)
                .map_err(js_err("y label"))?;
        }

        if options.x_axis.labels.enabled && !handle.series_data().is_empty() {
            ctx.set_text_align("center");
            for value in handle.x_axis().ticks(X_TICKS) {
                let x = handle.to_pixel_x(value);
                ctx.fill_text(&format_axis_label(value), x, plot.bottom() + 18.0)
                    .map_err(js_err("x label"))?;
            }
        }
        Ok(())
    }

    fn render_series(&self, ctx: &CanvasRenderingContext2d, handle: &ChartHandle, options: &ChartOptions) -> RenderingResult<()> {
        let points = handle.series_data();
        ctx.set_stroke_style_str(SERIES);
        ctx.set_line_width(options.series.line_width);
        ctx.begin_path();
        for (i, point) in points.iter().enumerate() {
            let (x, y) = handle.pixel_of(point);
            if i == 0 {
                ctx.move_to(x, y);
            } else {
                ctx.line_to(x, y);
            }
        }
        ctx.stroke();

        if options.series.allow_point_select {
            ctx.set_fill_style_str(SERIES);
            for point in points {
                let (x, y) = handle.pixel_of(point);
                ctx.begin_path();
                ctx.arc(x, y, MARKER_RADIUS, 0.0, std::f64::consts::TAU).map_err(js_err("marker"))?;
                ctx.fill();
            }
        }
        Ok(())
    }

    fn render_no_data(&self, ctx: &CanvasRenderingContext2d, handle: &ChartHandle) -> RenderingResult<()> {
        let plot = handle.plot_area();
        ctx.set_text_align("center");
        ctx.set_fill_style_str(MUTED_TEXT);
        ctx.set_font("14px sans-serif");
        ctx.fill_text("No data", plot.left + plot.width / 2.0, plot.top + plot.height / 2.0)
            .map_err(js_err("no data"))
    }

    fn render_crosshair(&self, ctx: &CanvasRenderingContext2d, handle: &ChartHandle, options: &ChartOptions, hover: &HoverState) {
        let plot = handle.plot_area();
        ctx.set_stroke_style_str(CROSSHAIR);
        ctx.set_line_width(1.0);
        if options.x_axis.crosshair {
            let x = handle.to_pixel_x(hover.point.x);
            ctx.begin_path();
            ctx.move_to(x, plot.top);
            ctx.line_to(x, plot.bottom());
            ctx.stroke();
        }
        if options.y_axis.crosshair {
            ctx.begin_path();
            ctx.move_to(plot.left, hover.cursor_y);
            ctx.line_to(plot.right(), hover.cursor_y);
            ctx.stroke();
        }
    }

    fn render_tooltip(
        &self,
        ctx: &CanvasRenderingContext2d,
        handle: &ChartHandle,
        options: &ChartOptions,
        hover: &HoverState,
    ) -> RenderingResult<()> {
        let lines = options.tooltip.format(&hover.point, options.series_name());
        let plot = handle.plot_area();
        let (px, py) = handle.pixel_of(&hover.point);
        let box_width = 150.0;
        let box_height = 8.0 + 16.0 * lines.len() as f64;
        // Flip to the left of the point near the right edge
        let x = if px + 12.0 + box_width > plot.right() { px - 12.0 - box_width } else { px + 12.0 };
        let y = (py - box_height / 2.0).clamp(plot.top, (plot.bottom() - box_height).max(plot.top));

        ctx.set_fill_style_str(TOOLTIP_BG);
        ctx.fill_rect(x, y, box_width, box_height);
        ctx.set_stroke_style_str(SERIES);
        ctx.stroke_rect(x, y, box_width, box_height);

        ctx.set_text_align("left");
        ctx.set_fill_style_str(TEXT);
        ctx.set_font("12px sans-serif");
        for (i, line) in lines.iter().enumerate() {
            ctx.fill_text(line, x + 8.0, y + 18.0 + 16.0 * i as f64).map_err(js_err("tooltip"))?;
        }
        Ok(())
    }
}

impl Default for CanvasRenderer {
    fn default() -> Self {
        Self::new()
    }
}
