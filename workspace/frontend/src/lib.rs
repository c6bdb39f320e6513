use std::cell::RefCell;

use chart::{ChartTheme, InitOutcome};
use wasm_bindgen::prelude::*;

mod chart_js;
pub mod components;
pub mod dom;
pub mod settings;

pub use chart_js::{ChartHandle, ChartJsRenderer};
use components::{PredictionChart, PredictionChartProps};

thread_local! {
    static ACTIVE_CHART: RefCell<Option<ChartHandle>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== TrackFlow Charts Loaded ===");
    log::debug!("Application settings: {:?}", settings);
}

/// Draws the expense prediction chart into the canvas with the given id (the
/// configured `predChart` by default). The host page calls this once its content
/// has loaded. A missing canvas is ignored and bad data attributes give an empty
/// chart; nothing is ever thrown back to the page.
#[wasm_bindgen(js_name = initPredictionChart)]
pub fn init_prediction_chart(element_id: Option<String>) {
    let settings = settings::get_settings();
    let element_id = element_id.unwrap_or(settings.chart_element_id);
    let theme = ChartTheme::with_currency(&settings.currency_code);

    let canvas = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| dom::find_canvas(&document, &element_id));
    let attributes = canvas.as_ref().map(|canvas| dom::read_attributes(canvas)).unwrap_or_default();
    let mut renderer = canvas.map(ChartJsRenderer::new);

    match chart::init_prediction_chart(renderer.as_mut(), &attributes, &theme) {
        Ok(InitOutcome::NoTarget) => {
            log::debug!("No canvas #{} on this page", element_id);
        }
        Ok(InitOutcome::Rendered(series)) => {
            log::debug!("Chart #{} labels: {:?}", element_id, series.labels);
            if let Some(handle) = renderer.and_then(|mut renderer| renderer.take_handle()) {
                keep_active(handle);
            }
        }
        Err(err) => {
            log::error!("Failed to render prediction chart #{}: {:?}", element_id, err);
        }
    }
}

/// Mounts the [`PredictionChart`] component inside the element with the given id,
/// taking its data from that element's `data-*` attributes.
#[wasm_bindgen(js_name = mountPredictionChart)]
pub fn mount_prediction_chart(container_id: &str) {
    let Some(container) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(container_id))
    else {
        log::debug!("No container #{} on this page", container_id);
        return;
    };

    let input = dom::read_attributes(&container).parse();
    let props = PredictionChartProps {
        months: input.months,
        totals: input.totals,
        prediction: input.prediction,
        height: "300px".into(),
    };

    log::trace!("Mounting prediction chart into #{}", container_id);
    yew::Renderer::<PredictionChart>::with_root_and_props(container, props).render();
}

/// Changes the currency used for chart values and remembers it for later visits.
#[wasm_bindgen(js_name = setChartCurrency)]
pub fn set_chart_currency(code: &str) {
    settings::update_settings(|settings| settings.currency_code = code.trim().to_uppercase());
    if let Err(err) = settings::get_settings().save_to_storage() {
        log::warn!("Could not save chart settings: {:?}", err);
    }
}

fn keep_active(handle: ChartHandle) {
    ACTIVE_CHART.with(|active| {
        if let Some(previous) = active.replace(Some(handle)) {
            previous.destroy();
        }
    });
}
