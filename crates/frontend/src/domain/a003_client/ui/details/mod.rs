use crate::shared::editor::EditorState;
use crate::shared::form_fields::{bind_text, FormCard, TextField};
use contracts::domain::a003_client::{Client, ClientDto};
use contracts::domain::common::Entity;
use leptos::prelude::*;

#[component]
pub fn ClientDetails(editor: EditorState<ClientDto>, on_submit: Callback<()>) -> impl IntoView {
    let form = editor.form;

    let (nombre, set_nombre) = bind_text(form, |f| f.nombre.clone(), |f, v| f.nombre = v);
    let (apellido, set_apellido) =
        bind_text(form, |f| f.apellido.clone().unwrap_or_default(), |f, v| f.apellido = Some(v));
    let (email, set_email) = bind_text(form, |f| f.email.clone(), |f, v| f.email = v);
    let (telefono, set_telefono) = bind_text(form, |f| f.telefono.clone(), |f, v| f.telefono = v);
    let (cedula, set_cedula) =
        bind_text(form, |f| f.cedula.clone().unwrap_or_default(), |f, v| f.cedula = Some(v));

    view! {
        <FormCard
            title=Signal::derive(move || editor.title(Client::element_name()))
            saving=editor.saving
            on_submit=on_submit
            on_cancel=Callback::new(move |_| editor.close())
        >
            <div class="form-grid">
                <TextField label="Nombre" value=nombre on_input=set_nombre placeholder="Ingrese el nombre" />
                <TextField label="Apellido (opcional)" value=apellido on_input=set_apellido placeholder="Ingrese el apellido" />
                <TextField label="Email" value=email on_input=set_email input_type="email" placeholder="Ingrese el email" />
                <TextField label="Teléfono" value=telefono on_input=set_telefono input_type="tel" placeholder="Ingrese el teléfono" />
                <TextField label="Cédula (opcional)" value=cedula on_input=set_cedula placeholder="Ingrese la cédula" />
            </div>
        </FormCard>
    }
}
