use crate::domain::chart::{
    ChartHandle, ChartOptions, DragState, HighlightRect, MEASURE_BAND_ID, OptionsUpdate, PRIMARY_BUTTON,
    PointerInput, RangeSelection, compose, measure_selection,
};
use crate::domain::logging::LogComponent;
use crate::domain::quotes::{QuoteField, SeriesCollection, Ticker};
use crate::{log_debug, log_info, log_trace};

/// What the view has to do after a pointer event
#[derive(Debug, Clone, PartialEq)]
pub enum PointerOutcome {
    Ignored,
    /// Overlay or hover changed; options did not
    Redraw,
    /// Options were rebuilt; publish them and redraw
    Options(ChartOptions),
}

/// One chart on the page: its current options, the handle the gestures
/// work against, and the gesture state.
pub struct ChartSession {
    ticker: Ticker,
    options: ChartOptions,
    handle: ChartHandle,
    drag: DragState,
    selection: Option<RangeSelection>,
    /// Last pointer column of an active pan gesture
    pan_last_x: Option<f64>,
}

impl ChartSession {
    pub fn new(ticker: Ticker, width: u32, height: u32) -> Self {
        let options = ChartOptions::for_ticker(&ticker);
        Self {
            ticker,
            options,
            handle: ChartHandle::new(width, height),
            drag: DragState::default(),
            selection: None,
            pan_last_x: None,
        }
    }

    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    pub fn handle(&self) -> &ChartHandle {
        &self.handle
    }

    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    pub fn selection(&self) -> Option<&RangeSelection> {
        self.selection.as_ref()
    }

    pub fn is_panning(&self) -> bool {
        self.pan_last_x.is_some()
    }

    fn pans(&self, input: &PointerInput) -> bool {
        let chart = &self.options.chart;
        chart.panning && input.button == PRIMARY_BUTTON && input.modifier_held(&chart.pan_key)
    }

    fn rebuild(&mut self, update: OptionsUpdate) -> ChartOptions {
        let refit = matches!(update, OptionsUpdate::Selection { .. });
        self.options = compose(&self.options, update);
        if refit {
            self.handle.apply_options(&self.options);
        } else if self.handle.plot_bands() != self.options.x_axis.plot_bands.as_slice() {
            self.handle.set_plot_bands(self.options.x_axis.plot_bands.clone());
        }
        log_debug!(
            LogComponent::Application("ChartSession"),
            "options rebuilt: subtitle='{}' delta={:?} bands={}",
            self.options.subtitle.text,
            self.options.tooltip.delta,
            self.options.x_axis.plot_bands.len()
        );
        log_trace!(LogComponent::Application("ChartSession"), "options: {}", self.options.to_json());
        self.options.clone()
    }

    /// Plot `field` from `prices`. A field with no series plots nothing.
    /// Gestures in progress end, and the previous field's measure band goes.
    pub fn select(&mut self, field: QuoteField, prices: &SeriesCollection) -> ChartOptions {
        if self.drag.is_dragging {
            self.drag.release(&mut self.handle);
        }
        self.selection = None;
        self.pan_last_x = None;
        self.handle.destroy_highlight();
        let data = prices.get(field).map(<[_]>::to_vec);
        log_info!(
            LogComponent::Application("ChartSession"),
            "plotting {} {} ({} points)",
            self.ticker,
            field,
            data.as_ref().map_or(0, Vec::len)
        );
        self.rebuild(OptionsUpdate::Selection { field, data });
        self.rebuild(OptionsUpdate::PlotBand(None));
        self.rebuild(OptionsUpdate::Delta(None))
    }

    pub fn pointer_down(&mut self, input: PointerInput) -> PointerOutcome {
        if self.pans(&input) && self.handle.plot_area().contains(input.x, input.y) {
            self.pan_last_x = Some(input.x);
            log_debug!(LogComponent::Application("ChartSession"), "pan start at px={}", input.x);
            return PointerOutcome::Ignored;
        }
        if self.drag.press(&self.handle, input) {
            return PointerOutcome::Redraw;
        }
        if input.button == PRIMARY_BUTTON && self.handle.plot_area().contains(input.x, input.y) {
            self.selection = Some(RangeSelection::new(input.x));
        }
        PointerOutcome::Ignored
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) -> PointerOutcome {
        if let Some(last_x) = self.pan_last_x {
            self.pan_last_x = Some(x);
            self.handle.pan_x(x - last_x);
            return PointerOutcome::Redraw;
        }
        self.handle.set_hover(x, y);

        if self.drag.is_dragging {
            let delta = self.drag.track(&mut self.handle, x);
            if delta != self.options.tooltip.delta {
                return PointerOutcome::Options(self.rebuild(OptionsUpdate::Delta(delta)));
            }
            return PointerOutcome::Redraw;
        }

        if let Some(selection) = self.selection.as_mut() {
            selection.current_x = x;
            let rect = HighlightRect::spanning(selection.origin_x, x, self.handle.plot_area());
            self.handle.destroy_highlight();
            self.handle.draw_highlight(rect);
        }
        PointerOutcome::Redraw
    }

    /// Ends whichever gesture is active. Listens on the window, so the
    /// position is the last one seen over the canvas.
    pub fn pointer_up(&mut self) -> PointerOutcome {
        if self.pan_last_x.take().is_some() {
            return PointerOutcome::Redraw;
        }
        if self.drag.is_dragging {
            self.drag.release(&mut self.handle);
            return PointerOutcome::Options(self.rebuild(OptionsUpdate::Delta(None)));
        }

        let Some(selection) = self.selection.take() else {
            return PointerOutcome::Ignored;
        };
        self.handle.destroy_highlight();

        if selection.is_click() {
            if self.handle.remove_plot_band(MEASURE_BAND_ID) {
                return PointerOutcome::Options(self.rebuild(OptionsUpdate::PlotBand(None)));
            }
            return PointerOutcome::Redraw;
        }

        let from = self.handle.to_axis_value(selection.origin_x);
        let to = self.handle.to_axis_value(selection.current_x);
        match measure_selection(self.handle.series_data(), from, to) {
            Some(band) => PointerOutcome::Options(self.rebuild(OptionsUpdate::PlotBand(Some(band)))),
            None => PointerOutcome::Redraw,
        }
    }

    pub fn pointer_leave(&mut self) -> PointerOutcome {
        self.handle.clear_hover();
        PointerOutcome::Redraw
    }
}
