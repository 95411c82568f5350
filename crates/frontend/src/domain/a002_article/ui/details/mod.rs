use crate::shared::crud::EntityStore;
use crate::shared::editor::EditorState;
use crate::shared::form_fields::{bind_number, bind_text, FormCard, NumberField, SelectField, TextField};
use contracts::domain::a001_supplier::Supplier;
use contracts::domain::a002_article::{Article, ArticleDto};
use contracts::domain::common::{Entity, RecordId};
use leptos::prelude::*;

/// Форма артикула
///
/// Цена вводится вручную, выбор контакта её не меняет.
#[component]
pub fn ArticleDetails(
    editor: EditorState<ArticleDto>,
    suppliers: RwSignal<EntityStore<Supplier>>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let form = editor.form;

    let (nombre, set_nombre) = bind_text(form, |f| f.nombre.clone(), |f, v| f.nombre = v);
    let (tipo, set_tipo) = bind_text(form, |f| f.tipo.clone(), |f, v| f.tipo = v);
    let (precio, set_precio) = bind_number(form, |f| f.precio, |f, v| f.precio = v);

    let supplier_options = Signal::derive(move || {
        suppliers.with(|s| {
            s.iter()
                .map(|p| (p.id.to_string(), p.nombre.clone()))
                .collect::<Vec<_>>()
        })
    });

    let contact_options = Signal::derive(move || {
        let Some(supplier_id) = form.with(|f| f.proveedor.clone()) else {
            return Vec::new();
        };
        suppliers.with(|s| {
            s.get(&supplier_id)
                .map(|p| {
                    p.contactos
                        .iter()
                        .filter_map(|c| {
                            c.id.as_ref().map(|id| {
                                (id.to_string(), format!("{} ({})", c.nombre_contacto, c.cargo_contacto))
                            })
                        })
                        .collect()
                })
                .unwrap_or_default()
        })
    });

    view! {
        <FormCard
            title=Signal::derive(move || editor.title(Article::element_name()))
            saving=editor.saving
            on_submit=on_submit
            on_cancel=Callback::new(move |_| editor.close())
        >
            <div class="form-grid">
                <TextField label="Nombre" value=nombre on_input=set_nombre />
                <NumberField label="Precio" value=precio on_input=set_precio step="0.01" />
                <TextField label="Tipo" value=tipo on_input=set_tipo />
                <SelectField
                    label="Proveedor"
                    value=Signal::derive(move || form.with(|f| f.proveedor.as_ref().map(RecordId::to_string).unwrap_or_default()))
                    options=supplier_options
                    placeholder="Seleccione un proveedor"
                    on_change=Callback::new(move |v: String| form.update(|f| f.set_supplier(RecordId::from_select(&v))))
                />
                <SelectField
                    label="Contacto"
                    value=Signal::derive(move || form.with(|f| f.contacto.as_ref().map(RecordId::to_string).unwrap_or_default()))
                    options=contact_options
                    placeholder="Seleccione un contacto (opcional)"
                    disabled=move || !form.with(ArticleDto::contact_enabled)
                    on_change=Callback::new(move |v: String| form.update(|f| f.contacto = RecordId::from_select(&v)))
                />
            </div>
        </FormCard>
    }
}
