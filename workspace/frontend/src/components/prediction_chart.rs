use crate::chart_js::ChartJsRenderer;
use crate::settings::get_settings;
use chart::{ChartConfig, ChartInput, ChartRenderer, ChartSeriesPair, ChartTheme};
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PredictionChartProps {
    pub months: Vec<String>,
    pub totals: Vec<f64>,
    #[prop_or_default]
    pub prediction: f64,
    #[prop_or(AttrValue::Static("300px"))]
    pub height: AttrValue,
}

/// Monthly expenses with next month's forecast, drawn with Chart.js.
#[function_component(PredictionChart)]
pub fn prediction_chart(props: &PredictionChartProps) -> Html {
    let canvas_ref = use_node_ref();
    let input = ChartInput {
        months: props.months.clone(),
        totals: props.totals.clone(),
        prediction: props.prediction,
    };

    use_effect_with((canvas_ref.clone(), input), move |(canvas_ref, input)| {
        let mut handle = None;

        if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
            let theme = ChartTheme::with_currency(&get_settings().currency_code);
            let series = ChartSeriesPair::build(input);
            let config = ChartConfig::new(&series, &theme);

            let mut renderer = ChartJsRenderer::new(canvas);
            match renderer.render(&config, &theme) {
                Ok(()) => {
                    log::debug!("Prediction chart drawn with {} labels", series.labels.len());
                    handle = renderer.take_handle();
                }
                Err(err) => log::error!("Failed to draw prediction chart: {:?}", err),
            }
        }

        move || {
            if let Some(handle) = handle {
                log::trace!("Destroying prediction chart");
                handle.destroy();
            }
        }
    });

    html! {
        <div class="chart-container" style={format!("height: {};", props.height)}>
            <canvas ref={canvas_ref}></canvas>
        </div>
    }
}
