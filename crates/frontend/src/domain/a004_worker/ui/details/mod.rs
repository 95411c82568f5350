use crate::shared::editor::EditorState;
use crate::shared::form_fields::{bind_number, bind_text, FormCard, NumberField, TextField};
use crate::shared::format::date_input_value;
use contracts::domain::a004_worker::{Worker, WorkerDto};
use contracts::domain::common::Entity;
use leptos::prelude::*;

#[component]
pub fn WorkerDetails(editor: EditorState<WorkerDto>, on_submit: Callback<()>) -> impl IntoView {
    let form = editor.form;

    let (nombre, set_nombre) = bind_text(form, |f| f.nombre.clone(), |f, v| f.nombre = v);
    let (apellido, set_apellido) = bind_text(form, |f| f.apellido.clone(), |f, v| f.apellido = v);
    let (cedula, set_cedula) = bind_text(form, |f| f.cedula.clone(), |f, v| f.cedula = v);
    let (email, set_email) = bind_text(form, |f| f.email.clone(), |f, v| f.email = v);
    let (telefono, set_telefono) = bind_text(form, |f| f.telefono.clone(), |f, v| f.telefono = v);
    let (cargo, set_cargo) = bind_text(form, |f| f.cargo.clone(), |f, v| f.cargo = v);
    let (fecha, set_fecha) = bind_text(
        form,
        |f| date_input_value(&f.fecha_ingreso),
        |f, v| f.fecha_ingreso = v,
    );
    let (salario, set_salario) = bind_number(form, |f| f.salario, |f, v| f.salario = v);

    view! {
        <FormCard
            title=Signal::derive(move || editor.title(Worker::element_name()))
            saving=editor.saving
            on_submit=on_submit
            on_cancel=Callback::new(move |_| editor.close())
        >
            <div class="form-grid">
                <TextField label="Nombre" value=nombre on_input=set_nombre placeholder="Ingrese el nombre" />
                <TextField label="Apellido" value=apellido on_input=set_apellido placeholder="Ingrese el apellido" />
                <TextField label="Cédula" value=cedula on_input=set_cedula placeholder="Ingrese la cédula" />
                <TextField label="Email" value=email on_input=set_email input_type="email" placeholder="Ingrese el email" />
                <TextField label="Teléfono" value=telefono on_input=set_telefono input_type="tel" placeholder="Ingrese el teléfono" />
                <TextField label="Cargo" value=cargo on_input=set_cargo placeholder="Ingrese el cargo" />
                <TextField label="Fecha de ingreso" value=fecha on_input=set_fecha input_type="date" />
                <NumberField label="Salario" value=salario on_input=set_salario step="0.01" />
            </div>
        </FormCard>
    }
}
