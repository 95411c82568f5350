//! Экран «Informes»: параметры, таблицы отчёта, вопрос к AI-анализу

mod tables;

use crate::reports::r001_informes::api::{generate_report, request_analysis, HttpReports};
use crate::shared::crud::use_request_guard;
use crate::shared::form_fields::{SelectField, TextAreaField, TextField};
use crate::shared::notify::use_notices;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_REPORT;
use contracts::reports::{AnalysisResponse, ReportData, ReportKind, ReportQuery};
use leptos::prelude::*;
use leptos::task::spawn_local;
use tables::{InventoryReportView, SalesReportView};
use thaw::*;

#[component]
pub fn ReportsPage() -> impl IntoView {
    let notices = use_notices();
    let guard = use_request_guard();

    let query = RwSignal::new(ReportQuery::default());
    // Параметры, с которыми построен текущий отчёт
    let built_for = RwSignal::new(ReportQuery::default());
    let report = RwSignal::new(None::<ReportData>);
    let analysis = RwSignal::new(None::<AnalysisResponse>);
    let consulta = RwSignal::new(String::new());
    let generating = RwSignal::new(false);
    let analyzing = RwSignal::new(false);

    let kind_options = Signal::derive(|| {
        ReportKind::ALL
            .iter()
            .map(|k| (k.as_str().to_string(), k.label().to_string()))
            .collect::<Vec<_>>()
    });

    let on_generate = {
        let guard = guard.clone();
        move |_| {
            if generating.get_untracked() {
                return;
            }
            let q = query.get_untracked();
            let ticket = guard.begin();
            let guard = guard.clone();
            generating.set(true);
            spawn_local(async move {
                let result = generate_report(&HttpReports, &notices, &q).await;
                if !guard.is_current(ticket) {
                    return;
                }
                analysis.try_set(None);
                report.try_set(result);
                built_for.try_set(q);
                generating.try_set(false);
            });
        }
    };

    let on_analyze = move |_| {
        if analyzing.get_untracked() {
            return;
        }
        let q = built_for.get_untracked();
        let current = report.get_untracked();
        let question = consulta.get_untracked();
        let guard = guard.clone();
        analyzing.set(true);
        spawn_local(async move {
            let result = request_analysis(&HttpReports, &notices, &q, current, &question).await;
            if guard.is_disposed() {
                return;
            }
            analysis.try_set(result);
            analyzing.try_set(false);
        });
    };

    let analyze_label = move || if analyzing.get() { "Analizando..." } else { "Analizar Informe" };

    view! {
        <PageFrame page_id="r001_informes--report".to_string() category=PAGE_CAT_REPORT>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Generación de Informes"</h1>
                </div>
            </div>

            <div class="page__content">
                <div class="form-card">
                    <h3 class="form-card__title">"Configurar Informe"</h3>
                    <div class="form-grid">
                        <SelectField
                            label="Tipo de Informe"
                            value=Signal::derive(move || query.with(|q| q.tipo.as_str().to_string()))
                            options=kind_options
                            on_change=Callback::new(move |v: String| {
                                if let Some(kind) = ReportKind::parse(&v) {
                                    query.update(|q| q.tipo = kind);
                                }
                            })
                        />
                        <TextField
                            label="Fecha Inicio"
                            input_type="date"
                            value=Signal::derive(move || query.with(|q| q.fecha_inicio.clone()))
                            on_input=Callback::new(move |v: String| query.update(|q| q.fecha_inicio = v))
                        />
                        <TextField
                            label="Fecha Fin"
                            input_type="date"
                            value=Signal::derive(move || query.with(|q| q.fecha_fin.clone()))
                            on_input=Callback::new(move |v: String| query.update(|q| q.fecha_fin = v))
                        />
                    </div>
                    <div class="details-actions">
                        <Button appearance=ButtonAppearance::Primary disabled=generating on_click=on_generate>
                            {move || if generating.get() { "Generando..." } else { "Generar Informe" }}
                        </Button>
                    </div>
                </div>

                {move || {
                    let q = built_for.get();
                    report.get().map(|data| match data {
                        ReportData::Ventas(r) => view! {
                            <SalesReportView report=r fecha_inicio=q.fecha_inicio fecha_fin=q.fecha_fin />
                        }
                        .into_any(),
                        ReportData::Inventario(r) => view! { <InventoryReportView report=r /> }.into_any(),
                    })
                }}

                <Show when=move || report.with(Option::is_some)>
                    <div class="form-card">
                        <h3 class="form-card__title">"Consulta Personalizada"</h3>
                        <TextAreaField
                            label="Escribe tu consulta sobre el informe"
                            value=Signal::derive(move || consulta.get())
                            on_input=Callback::new(move |v: String| consulta.set(v))
                        />
                        <div class="details-actions">
                            <Button
                                appearance=ButtonAppearance::Primary
                                disabled=analyzing
                                on_click=on_analyze.clone()
                            >
                                {analyze_label}
                            </Button>
                        </div>
                    </div>
                </Show>

                {move || analysis.get().map(|a| view! {
                    <div class="ai-insights">
                        <h3>"Análisis de Informe"</h3>
                        <div class="ai-insights__content">
                            {a.paragraphs()
                                .into_iter()
                                .map(|p| view! { <p>{p.to_string()}</p> })
                                .collect_view()}
                        </div>
                    </div>
                })}
            </div>
        </PageFrame>
    }
}
