use leptos::html::Canvas;
use leptos::*;
use strum::IntoEnumIterator;

use crate::application::chart_service::{ChartSession, PointerOutcome};
use crate::application::use_cases::load_series;
use crate::config::AppConfig;
use crate::domain::{
    chart::PointerInput,
    logging::LogComponent,
    quotes::{QuoteField, Ticker},
};
use crate::event_utils::on_window_mouseup;
use crate::global_state::{chart_options, is_loading, price_series, selected_field, status_text};
use crate::infrastructure::{HistoricalPriceClient, rendering::CanvasRenderer};
use crate::{log_error, log_info};

pub const DROPDOWN_PLACEHOLDER: &str = "Choose Price Type";

/// 📈 Root component: price-type dropdown above the chart
#[component]
pub fn App(config: AppConfig, ticker: Ticker) -> impl IntoView {
    let (width, height) = (config.chart_width, config.chart_height);

    // Fetch once per ticker; the selection effect below re-runs when data lands
    let ticker_signal = create_rw_signal(ticker);
    let base_url = config.api_base_url.clone();
    create_effect(move |_| {
        let ticker = ticker_signal.get();
        let client = HistoricalPriceClient::new(base_url.clone());
        is_loading().set(true);
        status_text().set(format!("Loading {ticker} history..."));
        spawn_local(async move {
            let series = load_series(client, &ticker).await;
            let message = if series.is_empty() {
                format!("No history available for {ticker}")
            } else {
                format!("{} records loaded for {ticker}", series.record_count())
            };
            price_series().set(series);
            status_text().set(message);
            is_loading().set(false);
        });
    });

    view! {
        <style>
            {r#"
            .quote-chart-app {
                font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
                padding: 20px;
                color: #333;
            }

            .dropdown {
                position: relative;
                display: inline-block;
                margin-bottom: 16px;
            }

            .dropdown-toggle {
                padding: 8px 14px;
                border: 1px solid #ccc;
                border-radius: 6px;
                background: #f7f7f7;
                cursor: pointer;
                min-width: 180px;
                text-align: left;
            }

            .dropdown-menu {
                position: absolute;
                z-index: 10;
                margin: 4px 0 0;
                padding: 4px 0;
                list-style: none;
                background: white;
                border: 1px solid #ccc;
                border-radius: 6px;
                min-width: 180px;
                box-shadow: 0 4px 12px rgba(0, 0, 0, 0.1);
            }

            .dropdown-item {
                display: block;
                padding: 6px 14px;
                color: #333;
                text-decoration: none;
            }

            .dropdown-item:hover, .dropdown-item.active {
                background: #e8f4fd;
            }

            .chart-canvas {
                border: 1px solid #e6e6e6;
                cursor: crosshair;
            }

            .status {
                margin-top: 8px;
                font-size: 12px;
                color: #666;
            }
            "#}
        </style>
        <div class="quote-chart-app">
            <QuoteFieldDropdown />
            <Show when=move || selected_field().get().is_some()>
                <ChartCanvas ticker=ticker_signal.get_untracked() width=width height=height />
            </Show>
            <div class="status">
                {move || if is_loading().get() { "⏳ Loading...".to_string() } else { status_text().get() }}
            </div>
        </div>
    }
}

/// 🔽 Dropdown listing the eight quote fields
#[component]
fn QuoteFieldDropdown() -> impl IntoView {
    let (open, set_open) = create_signal(false);

    let label = move || {
        selected_field()
            .get()
            .map(|field| field.to_string())
            .unwrap_or_else(|| DROPDOWN_PLACEHOLDER.to_string())
    };

    view! {
        <div class="dropdown">
            <button class="dropdown-toggle" on:click=move |_| set_open.update(|o| *o = !*o)>
                {label}
            </button>
            <Show when=move || open.get()>
                <ul class="dropdown-menu">
                    {QuoteField::iter()
                        .map(|field| {
                            let on_select = move |ev: web_sys::MouseEvent| {
                                ev.prevent_default();
                                ev.stop_propagation();
                                log_info!(LogComponent::Presentation("Dropdown"), "selected {}", field);
                                selected_field().set(Some(field));
                                set_open.set(false);
                            };
                            view! {
                                <li>
                                    <a
                                        href="#"
                                        class="dropdown-item"
                                        class:active=move || selected_field().get() == Some(field)
                                        on:click=on_select
                                    >
                                        {field.key().to_string()}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Show>
        </div>
    }
}

/// 🎨 Chart canvas with the drag-to-measure and range-selection gestures
#[component]
fn ChartCanvas(ticker: Ticker, width: u32, height: u32) -> impl IntoView {
    let canvas_ref = create_node_ref::<Canvas>();
    let session = store_value(ChartSession::new(ticker, width, height));
    let redraw = create_trigger();
    let renderer = CanvasRenderer::new();

    // Session borrows end before any signal is set: setting one runs the
    // render effect synchronously, and that reads the session again.
    let publish = move |outcome: Option<PointerOutcome>| match outcome {
        Some(PointerOutcome::Options(options)) => chart_options().set(options),
        Some(PointerOutcome::Redraw) => redraw.notify(),
        Some(PointerOutcome::Ignored) | None => {}
    };

    create_effect(move |_| {
        let Some(field) = selected_field().get() else {
            return;
        };
        let options = price_series().with(|prices| session.try_update_value(|s| s.select(field, prices)));
        if let Some(options) = options {
            chart_options().set(options);
        }
    });

    create_effect(move |_| {
        chart_options().track();
        redraw.track();
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let result = session.with_value(|s| renderer.render(&canvas, s.handle(), s.options()));
        if let Err(e) = result {
            log_error!(LogComponent::Presentation("ChartCanvas"), "❌ Render error: {}", e);
            status_text().set(format!("❌ Render error: {e}"));
        }
    });

    let on_mousedown = move |ev: web_sys::MouseEvent| {
        let input = PointerInput {
            x: ev.offset_x() as f64,
            y: ev.offset_y() as f64,
            button: ev.button(),
            shift: ev.shift_key(),
        };
        let outcome = session.try_update_value(|s| s.pointer_down(input));
        if session.with_value(|s| s.drag().is_dragging || s.selection().is_some() || s.is_panning()) {
            // keep the browser from starting a text selection mid-gesture
            ev.prevent_default();
        }
        publish(outcome);
    };

    let on_mousemove = move |ev: web_sys::MouseEvent| {
        let (x, y) = (ev.offset_x() as f64, ev.offset_y() as f64);
        publish(session.try_update_value(|s| s.pointer_move(x, y)));
    };

    let on_mouseleave = move |_ev: web_sys::MouseEvent| {
        publish(session.try_update_value(|s| s.pointer_leave()));
    };

    let mouseup = on_window_mouseup(move |_ev| {
        publish(session.try_update_value(|s| s.pointer_up()));
    });
    on_cleanup(move || mouseup.detach());

    view! {
        <canvas
            class="chart-canvas"
            node_ref=canvas_ref
            width=width
            height=height
            on:mousedown=on_mousedown
            on:mousemove=on_mousemove
            on:mouseleave=on_mouseleave
        />
    }
}
