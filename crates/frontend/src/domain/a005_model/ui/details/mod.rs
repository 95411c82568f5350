use crate::shared::editor::EditorState;
use crate::shared::form_fields::{
    bind_number, bind_text, parse_number, FormCard, NumberField, SelectField,
    TextAreaField, TextField,
};
use crate::shared::format::format_money;
use crate::shared::line_items;
use contracts::domain::a005_model::{Model, ModelDto, ModelMaterial};
use contracts::domain::common::Entity;
use leptos::prelude::*;
use thaw::*;

fn optional_number(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn parse_optional(raw: &str) -> Option<f64> {
    (!raw.trim().is_empty()).then(|| parse_number(raw))
}

/// Форма модели со спецификацией материалов
///
/// `materials` - имена материалов со склада, `cost` - себестоимость
/// редактируемой записи (считается сервером).
#[component]
pub fn ModelDetails(
    editor: EditorState<ModelDto>,
    #[prop(into)] materials: Signal<Vec<String>>,
    #[prop(into)] cost: Signal<Option<f64>>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let form = editor.form;

    let (nombre, set_nombre) = bind_text(form, |f| f.nombre.clone(), |f, v| f.nombre = v);
    let (descripcion, set_descripcion) = bind_text(form, |f| f.descripcion.clone(), |f, v| f.descripcion = v);
    let (categoria, set_categoria) = bind_text(form, |f| f.categoria.clone(), |f, v| f.categoria = v);
    let (material, set_material) = bind_text(
        form,
        |f| f.material.clone().unwrap_or_default(),
        |f, v| f.material = Some(v),
    );
    let (alto, set_alto) = bind_text(form, |f| optional_number(f.alto), |f, v| f.alto = parse_optional(&v));
    let (ancho, set_ancho) = bind_text(form, |f| optional_number(f.ancho), |f, v| f.ancho = parse_optional(&v));
    let (imagen, set_imagen) = bind_text(
        form,
        |f| f.imagen_url.clone().unwrap_or_default(),
        |f, v| f.imagen_url = Some(v),
    );
    let (precio, set_precio) = bind_number(form, |f| f.precio, |f, v| f.precio = v);
    let (venta, set_venta) = bind_number(form, |f| f.precio_venta, |f, v| f.precio_venta = v);

    let material_count = move || form.with(|f| f.materiales.len());
    let cost_text = Signal::derive(move || {
        cost.get()
            .map(format_money)
            .unwrap_or_else(|| "Se calcula al guardar".to_string())
    });

    view! {
        <FormCard
            title=Signal::derive(move || editor.title(Model::element_name()))
            saving=editor.saving
            on_submit=on_submit
            on_cancel=Callback::new(move |_| editor.close())
        >
            <div class="form-grid">
                <TextField label="Nombre" value=nombre on_input=set_nombre />
                <TextField label="Categoría" value=categoria on_input=set_categoria />
                <TextField label="Material principal" value=material on_input=set_material />
                <TextField label="Alto" value=alto on_input=set_alto input_type="number" />
                <TextField label="Ancho" value=ancho on_input=set_ancho input_type="number" />
                <NumberField label="Precio" value=precio on_input=set_precio step="0.01" />
                <NumberField label="Precio de venta" value=venta on_input=set_venta step="0.01" />
                <TextField label="Costo de producción" value=cost_text on_input=Callback::new(|_| {}) disabled=true />
                <TextField label="URL de imagen" value=imagen on_input=set_imagen placeholder="https://..." />
            </div>
            <TextAreaField label="Descripción" value=descripcion on_input=set_descripcion />

            <div class="line-items">
                <h4>"Materiales"</h4>
                {move || {
                    (0..material_count())
                        .map(|index| view! { <MaterialRow form=form index=index materials=materials /> })
                        .collect_view()
                }}
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| form.update(|f| line_items::add(&mut f.materiales, ModelMaterial::default()))
                >
                    "Agregar material"
                </Button>
            </div>
        </FormCard>
    }
}

#[component]
fn MaterialRow(form: RwSignal<ModelDto>, index: usize, materials: Signal<Vec<String>>) -> impl IntoView {
    let nombre = Signal::derive(move || {
        form.with(|f| f.materiales.get(index).map(|m| m.nombre.clone()).unwrap_or_default())
    });
    let cantidad = Signal::derive(move || {
        form.with(|f| f.materiales.get(index).map(|m| m.cantidad as f64).unwrap_or_default())
    });
    let options = Signal::derive(move || {
        materials.get().into_iter().map(|n| (n.clone(), n)).collect::<Vec<_>>()
    });

    view! {
        <div class="line-items__row">
            <SelectField
                label="Material"
                value=nombre
                options=options
                placeholder="Seleccione material"
                on_change=Callback::new(move |v: String| form.update(|f| {
                    line_items::update_at(&mut f.materiales, index, |m| m.nombre = v);
                }))
            />
            <NumberField
                label="Cantidad"
                value=cantidad
                step="1"
                on_input=Callback::new(move |v: f64| form.update(|f| {
                    line_items::update_at(&mut f.materiales, index, |m| m.cantidad = v.max(0.0).round() as u32);
                }))
            />
            <Button
                appearance=ButtonAppearance::Subtle
                on_click=move |_| form.update(|f| {
                    line_items::remove_at(&mut f.materiales, index);
                })
            >
                "Quitar"
            </Button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_dimensions_stay_empty_when_blank() {
        assert_eq!(parse_optional("  "), None);
        assert_eq!(parse_optional("45,5"), Some(45.5));
        assert_eq!(optional_number(None), "");
        assert_eq!(optional_number(Some(80.0)), "80");
    }
}
