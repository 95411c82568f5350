/// Поиск, фильтр по категории и сортировка списков (общие для всех экранов)
use contracts::domain::common::validation::parse_iso_date;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use std::cmp::Ordering;
use wasm_bindgen::JsCast;

/// Trait для строк таблицы, поддерживающих поиск
pub trait Searchable {
    /// Поля, по которым ищет строка поиска
    fn search_fields(&self) -> Vec<String>;

    /// Подстрока без учёта регистра хотя бы в одном поле
    fn matches_filter(&self, filter: &str) -> bool {
        let needle = filter.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    /// Категориальный фильтр экрана; по умолчанию его нет
    fn matches_category(&self, _category: &str) -> bool {
        true
    }
}

/// Trait для строк таблицы, поддерживающих сортировку
pub trait Sortable {
    /// Сравнивает два объекта по указанному полю (по возрастанию)
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Состояние панели списка: поиск, категория, поле и направление сортировки
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    pub search: String,
    /// Пустая строка - без фильтра
    pub category: String,
    pub sort_field: String,
    pub ascending: bool,
}

impl ListQuery {
    pub fn sorted_by(field: &str, ascending: bool) -> Self {
        Self {
            search: String::new(),
            category: String::new(),
            sort_field: field.to_string(),
            ascending,
        }
    }

    /// Клик по тому же полю меняет направление, по другому - сортирует по возрастанию
    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_field == field {
            self.ascending = !self.ascending;
        } else {
            self.sort_field = field.to_string();
            self.ascending = true;
        }
    }

    pub fn is_filtered(&self) -> bool {
        !self.search.trim().is_empty() || !self.category.trim().is_empty()
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::sorted_by("", true)
    }
}

/// Отфильтрованная и отсортированная проекция списка
///
/// Чистая функция: по убыванию - это ровно обращённый результат по возрастанию.
pub fn filter_sort<T: Searchable + Sortable + Clone>(rows: &[T], query: &ListQuery) -> Vec<T> {
    let category = query.category.trim();
    let mut result: Vec<T> = rows
        .iter()
        .filter(|row| row.matches_filter(&query.search))
        .filter(|row| category.is_empty() || row.matches_category(category))
        .cloned()
        .collect();

    if !query.sort_field.is_empty() {
        result.sort_by(|a, b| a.compare_by_field(b, &query.sort_field));
        if !query.ascending {
            result.reverse();
        }
    }
    result
}

/// Сравнение текста "как в словаре": без регистра и диакритики
pub fn cmp_text(a: &str, b: &str) -> Ordering {
    fold(a).cmp(&fold(b)).then_with(|| a.cmp(b))
}

fn fold(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'á' | 'à' | 'ä' | 'â' => 'a',
            'é' | 'è' | 'ë' | 'ê' => 'e',
            'í' | 'ì' | 'ï' | 'î' => 'i',
            'ó' | 'ò' | 'ö' | 'ô' => 'o',
            'ú' | 'ù' | 'ü' | 'û' => 'u',
            'ñ' => 'n',
            other => other,
        })
        .collect()
}

pub fn cmp_num(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

/// Даты ISO; пустая или битая дата считается самой ранней
pub fn cmp_date(a: Option<&str>, b: Option<&str>) -> Ordering {
    let a = a.and_then(parse_iso_date);
    let b = b.and_then(parse_iso_date);
    a.cmp(&b)
}

/// Варианты категориального фильтра: непустые значения без повторов
pub fn category_options<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(String, String)> {
    let mut seen: Vec<String> = Vec::new();
    for value in values.map(str::trim).filter(|v| !v.is_empty()) {
        if !seen.iter().any(|s| s == value) {
            seen.push(value.to_string());
        }
    }
    seen.into_iter().map(|v| (v.clone(), v)).collect()
}

/// Сообщение для пустой таблицы
///
/// До первой загрузки коллекции таблица молчит.
pub fn empty_message(loaded: bool, total: usize, shown: usize) -> Option<&'static str> {
    if !loaded {
        None
    } else if total == 0 {
        Some("No hay registros todavía.")
    } else if shown == 0 {
        Some("No se encontraron resultados con los filtros actuales.")
    } else {
        None
    }
}

/// Подсветка совпадений в тексте (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let filter_lower = filter.trim().to_lowercase();
    let text_lower = text.to_lowercase();

    // to_lowercase может поменять длину строки, тогда просто без подсветки
    if filter_lower.is_empty()
        || text_lower.len() != text.len()
        || !text_lower.contains(&filter_lower)
    {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;

    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let actual_pos = last_pos + pos;
        if actual_pos > last_pos {
            parts.push(view! { <span>{text[last_pos..actual_pos].to_string()}</span> }.into_any());
        }
        let match_end = actual_pos + filter_lower.len();
        parts.push(
            view! { <mark class="search-hit">{text[actual_pos..match_end].to_string()}</mark> }
                .into_any(),
        );
        last_pos = match_end;
    }

    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Компонент поиска с debounce и кнопкой очистки
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра (для отображения)
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Buscar...".to_string()
    } else {
        placeholder
    };

    // Локальное состояние для input (до debounce)
    let (input_value, set_input_value) = signal(value.get_untracked());
    let debounce_timeout = StoredValue::new(None::<i32>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        let Some(window) = web_sys::window() else {
            on_change.run(new_value);
            return;
        };
        if let Some(timeout_id) = debounce_timeout.get_value() {
            window.clear_timeout_with_handle(timeout_id);
        }

        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            on_change.run(new_value.clone());
        }) as Box<dyn Fn()>);

        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref::<js_sys::Function>(),
            300,
        ) {
            Ok(timeout_id) => debounce_timeout.set_value(Some(timeout_id)),
            Err(_) => log::warn!("setTimeout failed, search not debounced"),
        }
        closure.forget();
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    let clear_filter = move |_| {
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class=move || {
                    if is_filter_active() {
                        "search-input__field search-input__field--active"
                    } else {
                        "search-input__field"
                    }
                }
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Limpiar">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// CSS-класс индикатора: активная колонка выделяется
pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

/// Создать обработчик клика по заголовку колонки
pub fn create_sort_toggle(
    field: &'static str,
    query: RwSignal<ListQuery>,
) -> impl Fn(MouseEvent) + Clone + 'static {
    move |_| query.update(|q| q.toggle_sort(field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        nombre: &'static str,
        tipo: &'static str,
        precio: f64,
        fecha: Option<&'static str>,
    }

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<String> {
            vec![self.nombre.to_string(), self.tipo.to_string()]
        }

        fn matches_category(&self, category: &str) -> bool {
            self.tipo == category
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "precio" => cmp_num(self.precio, other.precio),
                "fecha" => cmp_date(self.fecha, other.fecha),
                _ => cmp_text(self.nombre, other.nombre),
            }
        }
    }

    fn row(nombre: &'static str, tipo: &'static str, precio: f64) -> Row {
        Row { nombre, tipo, precio, fecha: None }
    }

    fn names(rows: &[Row]) -> Vec<&'static str> {
        rows.iter().map(|r| r.nombre).collect()
    }

    #[test]
    fn mesa_and_silla_by_price() {
        let rows = vec![row("Mesa", "A", 100.0), row("Silla", "B", 50.0)];
        let asc = filter_sort(&rows, &ListQuery::sorted_by("precio", true));
        let desc = filter_sort(&rows, &ListQuery::sorted_by("precio", false));
        assert_eq!(names(&asc), vec!["Silla", "Mesa"]);
        assert_eq!(names(&desc), vec!["Mesa", "Silla"]);
    }

    #[test]
    fn descending_is_exact_reverse_even_with_ties() {
        let rows = vec![
            row("Banco", "A", 10.0),
            row("Armario", "B", 10.0),
            row("Cama", "A", 5.0),
            row("Diván", "B", 10.0),
        ];
        let asc = filter_sort(&rows, &ListQuery::sorted_by("precio", true));
        let desc = filter_sort(&asc, &ListQuery::sorted_by("precio", false));
        let mut reversed = asc.clone();
        reversed.reverse();
        assert_eq!(desc, reversed);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let rows = vec![row("Mesa de Comedor", "A", 1.0), row("Silla", "B", 1.0)];
        let mut query = ListQuery::sorted_by("nombre", true);
        query.search = "COMED".into();
        assert_eq!(names(&filter_sort(&rows, &query)), vec!["Mesa de Comedor"]);
        query.search = "b".into();
        assert_eq!(names(&filter_sort(&rows, &query)), vec!["Silla"]);
    }

    #[test]
    fn empty_query_returns_everything_sorted() {
        let rows = vec![row("Silla", "B", 1.0), row("Armario", "A", 1.0)];
        let result = filter_sort(&rows, &ListQuery::sorted_by("nombre", true));
        assert_eq!(names(&result), vec!["Armario", "Silla"]);
    }

    #[test]
    fn category_filter_applies() {
        let rows = vec![row("Mesa", "A", 1.0), row("Silla", "B", 1.0)];
        let mut query = ListQuery::sorted_by("nombre", true);
        query.category = "B".into();
        assert_eq!(names(&filter_sort(&rows, &query)), vec!["Silla"]);
    }

    #[test]
    fn filter_sort_is_idempotent() {
        let rows = vec![row("Mesa", "A", 3.0), row("Silla", "B", 1.0), row("Cama", "A", 2.0)];
        let query = ListQuery::sorted_by("precio", false);
        assert_eq!(filter_sort(&rows, &query), filter_sort(&rows, &query));
    }

    #[test]
    fn text_compare_ignores_accents_and_case() {
        assert_eq!(cmp_text("árbol", "Banco"), Ordering::Less);
        assert_eq!(cmp_text("Ñandú", "nube"), Ordering::Less);
    }

    #[test]
    fn missing_dates_sort_first() {
        let mut a = row("A", "A", 0.0);
        a.fecha = Some("2024-03-01T10:00:00.000Z");
        let b = row("B", "A", 0.0);
        let result = filter_sort(&[a, b], &ListQuery::sorted_by("fecha", true));
        assert_eq!(names(&result), vec!["B", "A"]);
    }

    #[test]
    fn toggle_sort_flips_then_switches() {
        let mut q = ListQuery::sorted_by("nombre", true);
        q.toggle_sort("nombre");
        assert!(!q.ascending);
        q.toggle_sort("precio");
        assert_eq!(q.sort_field, "precio");
        assert!(q.ascending);
    }

    #[test]
    fn category_options_skip_blanks_and_duplicates() {
        let options = category_options(["Sillas", " ", "Mesas", "Sillas"].into_iter());
        let values: Vec<_> = options.into_iter().map(|(v, _)| v).collect();
        assert_eq!(values, vec!["Sillas", "Mesas"]);
    }

    #[test]
    fn empty_messages_distinguish_cases() {
        assert_eq!(empty_message(false, 0, 0), None);
        assert_eq!(empty_message(true, 0, 0), Some("No hay registros todavía."));
        assert!(empty_message(true, 3, 0).unwrap().contains("filtros"));
        assert_eq!(empty_message(true, 3, 2), None);
    }
}
