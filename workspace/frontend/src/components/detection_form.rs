use crate::shared::loading::Loading;
use common::Month;
use detection::{FormField, FormState, Locale};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DetectionFormProps {
    pub form: FormState,
    pub locale: Locale,
    pub busy: bool,
    pub on_field: Callback<(FormField, String)>,
    pub on_submit: Callback<()>,
}

#[function_component(DetectionForm)]
pub fn detection_form(props: &DetectionFormProps) -> Html {
    let locale = props.locale;

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        let busy = props.busy;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if busy {
                return;
            }
            on_submit.emit(());
        })
    };

    let number_input = |field: FormField| {
        let on_field = props.on_field.clone();
        let oninput = Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_field.emit((field, input.value()));
        });

        html! {
            <div class="form-control">
                <label class="label" for={field.wire_name()}>
                    <span class="label-text">{locale.field_label(field)}</span>
                </label>
                <input
                    type="number"
                    step={field.is_decimal().then_some("any")}
                    required={true}
                    id={field.wire_name()}
                    name={field.wire_name()}
                    class="input input-bordered w-full"
                    value={props.form.get(field).to_string()}
                    {oninput}
                />
            </div>
        }
    };

    let on_month = {
        let on_field = props.on_field.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_field.emit((FormField::Month, select.value()));
        })
    };
    let selected_month = props.form.get(FormField::Month);

    html! {
        <form {onsubmit} class="flex flex-col gap-4">
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                {number_input(FormField::Injection)}
                {number_input(FormField::InstalledPower)}
                {number_input(FormField::Latitude)}
                {number_input(FormField::Longitude)}
                <div class="form-control">
                    <label class="label" for="mes">
                        <span class="label-text">{locale.field_label(FormField::Month)}</span>
                    </label>
                    <select id="mes" name="mes" class="select select-bordered w-full" required={true} onchange={on_month}>
                        {for Month::ALL.iter().map(|month| html! {
                            <option value={month.code()} selected={month.code() == selected_month}>
                                {locale.month_name(*month)}
                            </option>
                        })}
                    </select>
                </div>
            </div>
            <div class="flex items-center gap-4">
                <button type="submit" class="btn btn-primary" disabled={props.busy}>
                    {locale.submit_label(props.busy)}
                </button>
                {if props.busy { html! { <Loading /> } } else { html! {} }}
            </div>
        </form>
    }
}
