use crate::components::production_chart::ProductionChart;
use common::AnomalyResponse;
use detection::presenter::present;
use detection::Locale;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ResultPanelProps {
    pub response: AnomalyResponse,
    pub locale: Locale,
}

#[function_component(ResultPanel)]
pub fn result_panel(props: &ResultPanelProps) -> Html {
    let presentation = present(&props.response, props.locale);

    if let Some(reason) = &presentation.chart_omission {
        log::warn!("Chart not rendered: {}", reason);
    }

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">{props.locale.result_title()}</h2>
                <ul class="flex flex-col gap-2">
                    {for presentation.flags.iter().map(|flag| {
                        let badge = if flag.value { "badge badge-error" } else { "badge badge-success" };
                        html! {
                            <li class="flex justify-between items-center">
                                <span>{flag.label}</span>
                                <span class={badge}>{flag.text}</span>
                            </li>
                        }
                    })}
                </ul>
                {if let Some(chart) = presentation.chart {
                    html! { <ProductionChart {chart} /> }
                } else {
                    html! {}
                }}
            </div>
        </div>
    }
}
