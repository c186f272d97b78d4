use dioxus::prelude::*;

/// Scrollable table with sticky header styling.
#[component]
pub fn DataTable(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "data-table",
            table {
                {children}
            }
        }
    }
}

/// Wraps column headers in `thead > tr`.
#[component]
pub fn DataTableHeader(children: Element) -> Element {
    rsx! {
        thead {
            tr { {children} }
        }
    }
}

#[component]
pub fn DataTableBody(children: Element) -> Element {
    rsx! {
        tbody { {children} }
    }
}

#[component]
pub fn DataTableColumn(#[props(default = false)] numeric: bool, children: Element) -> Element {
    rsx! {
        th { "data-numeric": if numeric { "true" } else { "false" }, {children} }
    }
}

#[component]
pub fn DataTableRow(children: Element) -> Element {
    rsx! {
        tr { class: "data-table-row", {children} }
    }
}

#[component]
pub fn DataTableCell(#[props(default = false)] numeric: bool, children: Element) -> Element {
    rsx! {
        td { "data-numeric": if numeric { "true" } else { "false" }, {children} }
    }
}

/// Full-width row shown when a filtered table has no rows.
#[component]
pub fn DataTableEmpty(columns: usize, children: Element) -> Element {
    rsx! {
        tr { class: "data-table-empty",
            td { colspan: "{columns}", {children} }
        }
    }
}
