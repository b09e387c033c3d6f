use detection::presenter::ChartSeries;
use plotly::common::{Fill, Line, Marker, Mode, Title};
use plotly::layout::{Axis, HoverMode, RangeMode};
use plotly::{Bar, Layout, Scatter};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue);
}

const DIV_ID: &str = "production-chart";

#[derive(Properties, PartialEq)]
pub struct ProductionChartProps {
    pub chart: ChartSeries,
}

/// Serialize a plotly value to JSON and parse it back as a JS object
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, String> {
    let json = serde_json::to_string(value).map_err(|e| e.to_string())?;
    js_sys::JSON::parse(&json).map_err(|e| format!("{:?}", e))
}

fn plot(chart: &ChartSeries) -> Result<(), String> {
    let data_js = js_sys::Array::new();

    let bars = Bar::new(chart.labels.clone(), chart.bars.values.clone())
        .name(&chart.bars.label)
        .marker(Marker::new().color_array(chart.bars.fills.clone()));
    data_js.push(&to_js(&bars)?);

    for line in &chart.lines {
        let trace = Scatter::new(chart.labels.clone(), line.values.clone())
            .mode(Mode::Lines)
            .name(&line.label)
            .fill(if line.fill { Fill::ToZeroY } else { Fill::None })
            .line(Line::new().color(line.color).width(line.width));
        data_js.push(&to_js(&trace)?);
    }

    let layout = Layout::new()
        .title(Title::with_text(chart.title))
        .y_axis(
            Axis::new()
                .title(Title::with_text(chart.y_axis_title))
                .range_mode(RangeMode::ToZero),
        )
        .hover_mode(HoverMode::X)
        .height(400);

    newPlot(DIV_ID, data_js.into(), to_js(&layout)?);
    Ok(())
}

#[function_component(ProductionChart)]
pub fn production_chart(props: &ProductionChartProps) -> Html {
    let container_ref = use_node_ref();

    use_effect_with((container_ref.clone(), props.chart.clone()), move |(container_ref, chart)| {
        if let Some(element) = container_ref.cast::<HtmlElement>() {
            element.set_id(DIV_ID);

            if let Err(e) = plot(chart) {
                log::error!("Failed to render production chart: {}", e);
            }
        }
        || ()
    });

    html! {
        <div ref={container_ref} class="mt-6" style="width:100%; height:400px;"></div>
    }
}
