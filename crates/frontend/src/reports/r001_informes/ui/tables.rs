use crate::shared::format::{format_date, format_int, format_money};
use contracts::reports::{InventoryReport, SalesReport};
use leptos::prelude::*;
use thaw::*;

fn empty_row(message: &'static str) -> AnyView {
    view! {
        <TableRow>
            <TableCell><TableCellLayout>{message}</TableCellLayout></TableCell>
        </TableRow>
    }
    .into_any()
}

fn yes_no(value: bool) -> &'static str {
    if value { "Sí" } else { "No" }
}

#[component]
pub fn SalesReportView(report: SalesReport, fecha_inicio: String, fecha_fin: String) -> impl IntoView {
    let periodo = format!("{} - {}", format_date(&fecha_inicio), format_date(&fecha_fin));
    let ingresos = format_money(report.total_ingresos);
    let ventas = report.numero_ventas;
    let products = if report.productos_vendidos.is_empty() {
        empty_row("No hay productos vendidos.")
    } else {
        report
            .productos_vendidos
            .into_iter()
            .map(|p| {
                let modelo = if p.modelo.is_empty() { "Desconocido".to_string() } else { p.modelo };
                let cantidad = format_int(p.cantidad);
                let subtotal = format_money(p.subtotal);
                view! {
                    <TableRow>
                        <TableCell><TableCellLayout>{modelo}</TableCellLayout></TableCell>
                        <TableCell><TableCellLayout>{cantidad}</TableCellLayout></TableCell>
                        <TableCell><TableCellLayout>{subtotal}</TableCellLayout></TableCell>
                    </TableRow>
                }
            })
            .collect_view()
            .into_any()
    };

    let orders = if report.pedidos.is_empty() {
        empty_row("No hay pedidos registrados.")
    } else {
        report
            .pedidos
            .into_iter()
            .map(|p| {
                let cliente = p.client_name();
                let entrega = format_date(&p.fecha_entrega);
                let modelos = p.models_summary();
                let factura = yes_no(p.con_factura);
                let total = format_money(p.precio_total);
                let metodo = if p.metodo_pago.is_empty() { "Desconocido".to_string() } else { p.metodo_pago };
                view! {
                    <TableRow>
                        <TableCell><TableCellLayout>{cliente}</TableCellLayout></TableCell>
                        <TableCell><TableCellLayout>{entrega}</TableCellLayout></TableCell>
                        <TableCell><TableCellLayout truncate=true>{modelos}</TableCellLayout></TableCell>
                        <TableCell><TableCellLayout>{metodo}</TableCellLayout></TableCell>
                        <TableCell><TableCellLayout>{factura}</TableCellLayout></TableCell>
                        <TableCell><TableCellLayout>{total}</TableCellLayout></TableCell>
                    </TableRow>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="report-result">
            <h3>"Informe de Ventas"</h3>
            <p><strong>"Período: "</strong>{periodo}</p>
            <p><strong>"Total de Ingresos: "</strong>{ingresos}</p>
            <p><strong>"Número de Ventas: "</strong>{ventas}</p>

            <h4>"Productos Vendidos"</h4>
            <div class="table-wrapper">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Modelo"</TableHeaderCell>
                            <TableHeaderCell>"Cantidad"</TableHeaderCell>
                            <TableHeaderCell>"Subtotal"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>{products}</TableBody>
                </Table>
            </div>

            <h4>"Detalles de Ventas"</h4>
            <div class="table-wrapper">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Cliente"</TableHeaderCell>
                            <TableHeaderCell>"Fecha de Entrega"</TableHeaderCell>
                            <TableHeaderCell>"Modelos"</TableHeaderCell>
                            <TableHeaderCell>"Método de Pago"</TableHeaderCell>
                            <TableHeaderCell>"Con Factura"</TableHeaderCell>
                            <TableHeaderCell>"Precio Total"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>{orders}</TableBody>
                </Table>
            </div>
        </div>
    }
}

#[component]
pub fn InventoryReportView(report: InventoryReport) -> impl IntoView {
    let valor_total = format_money(report.valor_total_inventario);
    let productos = report.numero_productos;
    let lines = if report.inventario.is_empty() {
        empty_row("No hay inventario registrado.")
    } else {
        report
            .inventario
            .into_iter()
            .map(|l| {
                let disponible = format_int(l.cantidad_disponible);
                let reservada = format_int(l.cantidad_reservada);
                let valor = format_money(l.valor);
                let modelo = if l.modelo.is_empty() { "Desconocido".to_string() } else { l.modelo };
                view! {
                    <TableRow>
                        <TableCell><TableCellLayout>{modelo}</TableCellLayout></TableCell>
                        <TableCell><TableCellLayout>{disponible}</TableCellLayout></TableCell>
                        <TableCell><TableCellLayout>{reservada}</TableCellLayout></TableCell>
                        <TableCell><TableCellLayout>{valor}</TableCellLayout></TableCell>
                    </TableRow>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="report-result">
            <h3>"Informe de Inventario"</h3>
            <p><strong>"Valor Total del Inventario: "</strong>{valor_total}</p>
            <p><strong>"Número de Productos: "</strong>{productos}</p>

            <h4>"Detalles del Inventario"</h4>
            <div class="table-wrapper">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Modelo"</TableHeaderCell>
                            <TableHeaderCell>"Cantidad Disponible"</TableHeaderCell>
                            <TableHeaderCell>"Cantidad Reservada"</TableHeaderCell>
                            <TableHeaderCell>"Valor"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>{lines}</TableBody>
                </Table>
            </div>
        </div>
    }
}
