//! Поля форм: подпись + input, значение и обработчик снаружи

use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TextField(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label>{label}</label>
            <input
                type=input_type.unwrap_or("text")
                placeholder=placeholder
                prop:value=move || value.get()
                prop:disabled=move || disabled.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

/// Числовое поле; пустой или нечисловой ввод даёт 0
#[component]
pub fn NumberField(
    label: &'static str,
    #[prop(into)] value: Signal<f64>,
    #[prop(into)] on_input: Callback<f64>,
    #[prop(optional)] step: Option<&'static str>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label>{label}</label>
            <input
                type="number"
                min="0"
                step=step.unwrap_or("any")
                prop:value=move || value.get().to_string()
                prop:disabled=move || disabled.get()
                on:input=move |ev| on_input.run(parse_number(&event_target_value(&ev)))
            />
        </div>
    }
}

#[component]
pub fn TextAreaField(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label>{label}</label>
            <textarea
                rows="3"
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn CheckboxField(
    label: &'static str,
    #[prop(into)] checked: Signal<bool>,
    #[prop(into)] on_change: Callback<bool>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="form-group form-group--inline">
            <label>
                <input
                    type="checkbox"
                    prop:checked=move || checked.get()
                    prop:disabled=move || disabled.get()
                    on:change=move |ev| on_change.run(event_target_checked(&ev))
                />
                {label}
            </label>
        </div>
    }
}

/// Выпадающий список; `options` - пары (значение, подпись)
#[component]
pub fn SelectField(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional)] placeholder: Option<&'static str>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label>{label}</label>
            <select
                prop:disabled=move || disabled.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {placeholder.map(|p| view! { <option value="">{p}</option> })}
                {move || {
                    let current = value.get();
                    options
                        .get()
                        .into_iter()
                        .map(|(v, text)| {
                            let selected = v == current;
                            view! { <option value=v selected=selected>{text}</option> }
                        })
                        .collect_view()
                }}
            </select>
        </div>
    }
}

/// Карточка формы с кнопками "Guardar" / "Cancelar"
#[component]
pub fn FormCard(
    #[prop(into)] title: Signal<String>,
    #[prop(into)] saving: Signal<bool>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="form-card">
            <h3 class="form-card__title">{move || title.get()}</h3>
            <div class="details-form">
                {children()}
                <div class="details-actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=saving
                        on_click=move |_| on_submit.run(())
                    >
                        {move || if saving.get() { "Guardando..." } else { "Guardar" }}
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                        "Cancelar"
                    </Button>
                </div>
            </div>
        </div>
    }
}

/// Связать текстовое поле формы с сигналом: (значение, обработчик ввода)
pub fn bind_text<P: Send + Sync + 'static>(
    form: RwSignal<P>,
    get: fn(&P) -> String,
    set: fn(&mut P, String),
) -> (Signal<String>, Callback<String>) {
    (
        Signal::derive(move || form.with(get)),
        Callback::new(move |v: String| form.update(|f| set(f, v))),
    )
}

pub fn bind_number<P: Send + Sync + 'static>(
    form: RwSignal<P>,
    get: fn(&P) -> f64,
    set: fn(&mut P, f64),
) -> (Signal<f64>, Callback<f64>) {
    (
        Signal::derive(move || form.with(get)),
        Callback::new(move |v: f64| form.update(|f| set(f, v))),
    )
}

pub fn parse_number(raw: &str) -> f64 {
    raw.trim().replace(',', ".").parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(0.0)
}

pub fn parse_count(raw: &str) -> u32 {
    parse_number(raw).max(0.0).round() as u32
}
