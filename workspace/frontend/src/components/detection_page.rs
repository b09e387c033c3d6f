use crate::api_client::detect_anomaly;
use crate::components::detection_form::DetectionForm;
use crate::components::result_panel::ResultPanel;
use crate::settings;
use crate::shared::error::ErrorDisplay;
use detection::{Completion, DetectionView, FormField};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Owns the page state and wires the form to the detection service.
///
/// The view lives in a `RefCell` so the async completion can apply its
/// outcome to the state current at that moment, not the one captured when
/// the request started.
#[function_component(DetectionPage)]
pub fn detection_page() -> Html {
    let settings = use_memo((), |_| settings::get_settings());
    let initial_locale = settings.locale;
    let view = use_mut_ref(move || DetectionView::new(initial_locale));
    let trigger = use_force_update();

    let on_field = {
        let view = view.clone();
        let trigger = trigger.clone();
        Callback::from(move |(field, raw): (FormField, String)| {
            log::trace!("Field {:?} changed to {:?}", field, raw);
            view.borrow_mut().update_field(field, raw);
            trigger.force_update();
        })
    };

    let on_submit = {
        let view = view.clone();
        let trigger = trigger.clone();
        let endpoint = settings.endpoint.clone();
        Callback::from(move |_: ()| {
            let ticket = view.borrow_mut().begin_submit();
            log::debug!("Submitting detection request #{}: {:?}", ticket.generation, ticket.request);
            trigger.force_update();

            let view = view.clone();
            let trigger = trigger.clone();
            let endpoint = endpoint.clone();
            spawn_local(async move {
                let outcome = detect_anomaly(&endpoint, &ticket.request).await;
                let completion = view.borrow_mut().complete(ticket.generation, outcome);
                match completion {
                    Completion::Stale => {
                        log::debug!("Dropped outcome of superseded request #{}", ticket.generation);
                    }
                    Completion::Applied | Completion::Failed => trigger.force_update(),
                }
            });
        })
    };

    let snapshot = view.borrow().clone();
    let locale = snapshot.locale();

    html! {
        <div class="container mx-auto max-w-4xl px-4 flex flex-col gap-6">
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h1 class="card-title text-2xl">{locale.form_title()}</h1>
                    <DetectionForm
                        form={snapshot.form().clone()}
                        {locale}
                        busy={snapshot.is_busy()}
                        {on_field}
                        {on_submit}
                    />
                    {if let Some(message) = snapshot.error() {
                        html! { <ErrorDisplay message={message.to_string()} /> }
                    } else {
                        html! {}
                    }}
                </div>
            </div>
            {if let Some(response) = snapshot.response() {
                html! { <ResultPanel response={response.clone()} {locale} /> }
            } else {
                html! {}
            }}
        </div>
    }
}
