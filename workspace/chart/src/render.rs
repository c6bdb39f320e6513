use crate::attributes::ChartAttributes;
use crate::config::ChartConfig;
use crate::series::ChartSeriesPair;
use crate::theme::ChartTheme;
use tracing::{debug, info, instrument};

/// Draws a chart configuration into a target surface.
///
/// Implementations own everything pixel-related: layout, animation, interaction and
/// the lifetime of whatever the chart library creates.
pub trait ChartRenderer {
    type Error;

    fn render(&mut self, config: &ChartConfig, theme: &ChartTheme) -> Result<(), Self::Error>;
}

impl<R: ChartRenderer + ?Sized> ChartRenderer for &mut R {
    type Error = R::Error;

    fn render(&mut self, config: &ChartConfig, theme: &ChartTheme) -> Result<(), Self::Error> {
        (**self).render(config, theme)
    }
}

/// What [`init_prediction_chart`] did.
#[derive(Debug, Clone, PartialEq)]
pub enum InitOutcome {
    /// There was no placeholder to draw into; nothing was rendered.
    NoTarget,
    /// The chart was handed to the renderer with these series.
    Rendered(ChartSeriesPair),
}

/// Builds the prediction chart from the placeholder's attributes and draws it.
///
/// Called once by the host's startup code. A missing target is a silent no-op and
/// malformed attributes degrade to empty data; the only error that can come back is
/// the renderer's own.
#[instrument(skip_all)]
pub fn init_prediction_chart<R>(
    target: Option<R>,
    attributes: &ChartAttributes,
    theme: &ChartTheme,
) -> Result<InitOutcome, R::Error>
where
    R: ChartRenderer,
{
    let Some(mut renderer) = target else {
        debug!("No chart placeholder, skipping");
        return Ok(InitOutcome::NoTarget);
    };

    let input = attributes.parse();
    let series = ChartSeriesPair::build(&input);
    let config = ChartConfig::new(&series, theme);

    renderer.render(&config, theme)?;
    info!(
        months = series.labels.len(),
        predicted = series.has_prediction(),
        "Prediction chart rendered"
    );

    Ok(InitOutcome::Rendered(series))
}
