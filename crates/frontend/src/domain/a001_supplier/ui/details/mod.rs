use crate::shared::editor::EditorState;
use crate::shared::form_fields::{bind_text, FormCard, TextAreaField, TextField};
use crate::shared::line_items;
use contracts::domain::a001_supplier::{Supplier, SupplierContact, SupplierDto};
use contracts::domain::common::Entity;
use leptos::prelude::*;
use thaw::*;

/// Форма поставщика с контактами; каталог уходит как есть
#[component]
pub fn SupplierDetails(editor: EditorState<SupplierDto>, on_submit: Callback<()>) -> impl IntoView {
    let form = editor.form;

    let (nombre, set_nombre) = bind_text(form, |f| f.nombre.clone(), |f, v| f.nombre = v);
    let (direccion, set_direccion) = bind_text(form, |f| f.direccion.clone(), |f, v| f.direccion = v);
    let (telefono, set_telefono) = bind_text(form, |f| f.telefono.clone(), |f, v| f.telefono = v);
    let (email, set_email) = bind_text(form, |f| f.email.clone(), |f, v| f.email = v);
    let (comentario, set_comentario) = bind_text(form, |f| f.comentario.clone(), |f, v| f.comentario = v);
    let (entrega, set_entrega) =
        bind_text(form, |f| f.tiempo_entrega_estimado.clone(), |f, v| f.tiempo_entrega_estimado = v);

    let contact_count = move || form.with(|f| f.contactos.len());

    view! {
        <FormCard
            title=Signal::derive(move || editor.title(Supplier::element_name()))
            saving=editor.saving
            on_submit=on_submit
            on_cancel=Callback::new(move |_| editor.close())
        >
            <div class="form-grid">
                <TextField label="Nombre" value=nombre on_input=set_nombre />
                <TextField label="Dirección" value=direccion on_input=set_direccion />
                <TextField label="Teléfono" value=telefono on_input=set_telefono input_type="tel" />
                <TextField label="Email" value=email on_input=set_email input_type="email" />
                <TextField label="Tiempo de entrega (días)" value=entrega on_input=set_entrega />
            </div>
            <TextAreaField label="Comentario" value=comentario on_input=set_comentario />

            <div class="line-items">
                <h4>"Contactos"</h4>
                {move || {
                    (0..contact_count())
                        .map(|index| view! { <ContactRow form=form index=index /> })
                        .collect_view()
                }}
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| form.update(|f| line_items::add(&mut f.contactos, SupplierContact::default()))
                >
                    "Agregar contacto"
                </Button>
            </div>
        </FormCard>
    }
}

#[component]
fn ContactRow(form: RwSignal<SupplierDto>, index: usize) -> impl IntoView {
    let field = move |get: fn(&SupplierContact) -> String, set: fn(&mut SupplierContact, String)| {
        (
            Signal::derive(move || {
                form.with(|f| f.contactos.get(index).map(get).unwrap_or_default())
            }),
            Callback::new(move |v: String| {
                form.update(|f| {
                    line_items::update_at(&mut f.contactos, index, |c| set(c, v));
                })
            }),
        )
    };

    let (nombre, set_nombre) = field(|c| c.nombre_contacto.clone(), |c, v| c.nombre_contacto = v);
    let (telefono, set_telefono) =
        field(|c| c.telefono_contacto.clone(), |c, v| c.telefono_contacto = v);
    let (email, set_email) = field(|c| c.email_contacto.clone(), |c, v| c.email_contacto = v);
    let (cargo, set_cargo) = field(|c| c.cargo_contacto.clone(), |c, v| c.cargo_contacto = v);

    // последний контакт удалить нельзя
    let only_one = Signal::derive(move || form.with(|f| f.contactos.len() <= 1));

    view! {
        <div class="line-items__row">
            <TextField label="Nombre contacto" value=nombre on_input=set_nombre />
            <TextField label="Teléfono contacto" value=telefono on_input=set_telefono />
            <TextField label="Email contacto" value=email on_input=set_email />
            <TextField label="Cargo contacto" value=cargo on_input=set_cargo />
            <Button
                appearance=ButtonAppearance::Subtle
                disabled=only_one
                on_click=move |_| form.update(|f| {
                    line_items::remove_at(&mut f.contactos, index);
                })
            >
                "Eliminar contacto"
            </Button>
        </div>
    }
}
