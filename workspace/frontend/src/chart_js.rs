//! Binding to the global Chart.js constructor.

use chart::config::HISTORICAL_DATASET;
use chart::{ChartConfig, ChartRenderer, ChartTheme};
use js_sys::Reflect;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

#[wasm_bindgen]
extern "C" {
    pub type Chart;

    #[wasm_bindgen(constructor, catch, js_class = "Chart")]
    fn new(target: &HtmlCanvasElement, config: &JsValue) -> Result<Chart, JsValue>;

    #[wasm_bindgen(method)]
    fn destroy(this: &Chart);
}

type Formatter = Closure<dyn Fn(JsValue) -> String>;

/// A live Chart.js instance together with the Rust callbacks it calls into.
/// Dropping the handle invalidates the callbacks, so keep it for as long as the
/// chart is on screen.
pub struct ChartHandle {
    chart: Chart,
    _tooltip_label: Formatter,
    _tick_label: Formatter,
}

impl ChartHandle {
    pub fn destroy(self) {
        self.chart.destroy();
    }
}

/// Draws into a canvas with Chart.js.
pub struct ChartJsRenderer {
    canvas: HtmlCanvasElement,
    handle: Option<ChartHandle>,
}

impl ChartJsRenderer {
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self {
            canvas,
            handle: None,
        }
    }

    /// The chart created by the last successful render.
    pub fn take_handle(&mut self) -> Option<ChartHandle> {
        self.handle.take()
    }

    fn context(&self) -> Result<CanvasRenderingContext2d, JsValue> {
        let context = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context is not available"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(context)
    }
}

impl ChartRenderer for ChartJsRenderer {
    type Error = JsValue;

    fn render(&mut self, config: &ChartConfig, theme: &ChartTheme) -> Result<(), JsValue> {
        let js_config = config.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?;

        let gradient = self
            .context()?
            .create_linear_gradient(0.0, 0.0, 0.0, theme.gradient_height);
        gradient.add_color_stop(0.0, &theme.gradient_top)?;
        gradient.add_color_stop(1.0, &theme.gradient_bottom)?;

        let datasets = path(&js_config, &["data", "datasets"])?;
        let historical = Reflect::get_u32(&datasets, HISTORICAL_DATASET as u32)?;
        Reflect::set(&historical, &"backgroundColor".into(), &gradient)?;

        let tooltip_theme = theme.clone();
        let tooltip_label = Formatter::new(move |context: JsValue| {
            let label = path(&context, &["dataset", "label"])
                .ok()
                .and_then(|label| label.as_string())
                .unwrap_or_default();
            let value = path(&context, &["parsed", "y"])
                .ok()
                .and_then(|y| y.as_f64())
                .unwrap_or_default();
            tooltip_theme.format_tooltip(&label, value)
        });
        let callbacks = path(&js_config, &["options", "plugins", "tooltip", "callbacks"])?;
        Reflect::set(&callbacks, &"label".into(), tooltip_label.as_ref())?;

        let tick_theme = theme.clone();
        let tick_label = Formatter::new(move |value: JsValue| {
            tick_theme.format_value(value.as_f64().unwrap_or_default())
        });
        let ticks = path(&js_config, &["options", "scales", "y", "ticks"])?;
        Reflect::set(&ticks, &"callback".into(), tick_label.as_ref())?;

        let chart = Chart::new(&self.canvas, &js_config)?;
        if let Some(previous) = self.handle.replace(ChartHandle {
            chart,
            _tooltip_label: tooltip_label,
            _tick_label: tick_label,
        }) {
            previous.destroy();
        }
        Ok(())
    }
}

/// Walks nested object properties, e.g. `["options", "scales"]`.
fn path(root: &JsValue, keys: &[&str]) -> Result<JsValue, JsValue> {
    keys.iter().try_fold(root.clone(), |current, key| {
        let next = Reflect::get(&current, &JsValue::from_str(key))?;
        if next.is_undefined() {
            return Err(JsValue::from_str(&format!("missing property '{}'", key)));
        }
        Ok(next)
    })
}
