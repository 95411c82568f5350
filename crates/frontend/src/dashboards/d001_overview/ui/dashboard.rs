use crate::dashboards::d001_overview::api::{load_stats, HttpStats};
use crate::shared::crud::use_request_guard;
use crate::shared::format::{format_datetime, format_int, format_number};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::dashboards::d001_overview::DashboardStats;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Ширина столбца в процентах от максимума
fn bar_width(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        0.0
    } else {
        (value / max * 100.0).clamp(0.0, 100.0)
    }
}

/// Главная страница: карточки, продажи по моделям, последние события
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let guard = use_request_guard();
    let stats = RwSignal::new(None::<DashboardStats>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    {
        let ticket = guard.begin();
        spawn_local(async move {
            let result = load_stats(&HttpStats).await;
            if !guard.is_current(ticket) {
                return;
            }
            match result {
                Ok(data) => {
                    stats.try_set(Some(data));
                    error.try_set(None);
                }
                Err(e) => {
                    log::error!("dashboard load failed: {}", e);
                    error.try_set(Some(format!("Error al cargar los datos: {}", e)));
                }
            }
            loading.try_set(false);
        });
    }

    let card = move |title: &'static str, value: Signal<String>| {
        view! {
            <div class="dashboard-card">
                <h3>{title}</h3>
                <p>{move || if loading.get() { "...".to_string() } else { value.get() }}</p>
            </div>
        }
    };

    let pending = Signal::derive(move || {
        stats.with(|s| s.as_ref().map_or(0, |s| s.pending_orders)).to_string()
    });
    let low_stock = Signal::derive(move || {
        format!("{} Artículos", stats.with(|s| s.as_ref().map_or(0, |s| s.low_stock)))
    });
    let income = Signal::derive(move || {
        format!("Bs {}", format_number(stats.with(|s| s.as_ref().map_or(0.0, |s| s.month_income)), 2))
    });

    view! {
        <PageFrame page_id="d001_overview--dashboard".to_string() category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Resumen del Sistema"</h1>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}
                <Show when=move || loading.get()>
                    <div class="loading-message">"Cargando datos..."</div>
                </Show>

                <div class="dashboard-cards">
                    {card("Órdenes Pendientes", pending)}
                    {card("Stock Bajo", low_stock)}
                    {card("Ingresos del Mes", income)}
                </div>

                <div class="dashboard-chart">
                    <h3>"Ventas por Modelo"</h3>
                    {move || {
                        if loading.get() {
                            return view! { <p>"Cargando gráfico..."</p> }.into_any();
                        }
                        let (sales, max) = stats.with(|s| {
                            s.as_ref()
                                .map(|s| (s.sales_by_model.clone(), s.max_sales()))
                                .unwrap_or_default()
                        });
                        if sales.is_empty() {
                            return view! { <p>"No hay datos de ventas disponibles para este mes."</p> }.into_any();
                        }
                        view! {
                            <div class="bar-chart">
                                {sales
                                    .into_iter()
                                    .map(|s| {
                                        let width = format!("width: {:.1}%", bar_width(s.cantidad, max));
                                        view! {
                                            <div class="bar-chart__row">
                                                <span class="bar-chart__label">{s.modelo}</span>
                                                <div class="bar-chart__track">
                                                    <div class="bar-chart__bar" style=width></div>
                                                </div>
                                                <span class="bar-chart__value">{format_int(s.cantidad)}</span>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                        .into_any()
                    }}
                </div>

                <div class="dashboard-activity">
                    <h3>"Actividad Reciente"</h3>
                    {move || {
                        if loading.get() {
                            return view! { <p>"Cargando actividad..."</p> }.into_any();
                        }
                        let entries = stats.with(|s| s.as_ref().map(|s| s.recent_activity.clone()).unwrap_or_default());
                        if entries.is_empty() {
                            return view! { <p>"No hay actividad reciente disponible."</p> }.into_any();
                        }
                        view! {
                            <ul class="activity-list">
                                {entries
                                    .into_iter()
                                    .map(|e| view! {
                                        <li class="activity-list__item">
                                            <span class="activity-list__type">{e.tipo}</span>
                                            ": " {e.descripcion} " - " {format_datetime(&e.fecha)}
                                        </li>
                                    })
                                    .collect_view()}
                            </ul>
                        }
                        .into_any()
                    }}
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::bar_width;

    #[test]
    fn bars_scale_to_largest_value() {
        assert_eq!(bar_width(9.0, 9.0), 100.0);
        assert_eq!(bar_width(3.0, 12.0), 25.0);
        assert_eq!(bar_width(5.0, 0.0), 0.0);
    }
}
