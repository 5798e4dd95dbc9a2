use std::rc::Rc;
use std::sync::Arc;

use dioxus::prelude::*;

use crate::config::AppConfig;
use crate::domain::entities::filter::EquipmentOption;
use crate::domain::entities::result_view::{
    Field, FieldValue, RemarkDisplay, ResultView, NO_MATCH_TEXT, REMARK_HEADING,
};
use crate::infra::clipboard::system::SystemClipboard;
use crate::infra::json::loader::JsonFileSource;
use crate::platform::desktop::notice::show_blocking_notice;
use crate::ui::state::app_state::AppState;
use crate::usecase::services::copy_service::CopyService;
use crate::usecase::services::load_service::LoadService;
use crate::usecase::services::lookup_service::LookupService;
use crate::usecase::services::session::LookupSession;

pub const ALL_OPTION_VALUE: &str = "__all__";
pub const ALL_SYSTEMS_LABEL: &str = "All Systems";
pub const ALL_LABEL: &str = "-- All --";
pub const LOAD_FAILED_TEXT: &str = "Failed to load data.json";
pub const COPY_FAILED_TEXT: &str = "Copy failed";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropdownId {
    System,
    Category,
    Equipment,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DropdownOption {
    pub value: String,
    pub label: String,
}

/// Maps the "All" sentinel back to an unset slot.
pub fn selected_value(value: String) -> Option<String> {
    (value != ALL_OPTION_VALUE).then_some(value)
}

fn all_option(label: &str) -> DropdownOption {
    DropdownOption {
        value: ALL_OPTION_VALUE.to_string(),
        label: label.to_string(),
    }
}

pub fn system_options(systems: &[String]) -> Vec<DropdownOption> {
    std::iter::once(all_option(ALL_SYSTEMS_LABEL))
        .chain(systems.iter().map(|system| DropdownOption {
            value: system.clone(),
            label: system.clone(),
        }))
        .collect()
}

pub fn category_options(categories: &[String]) -> Vec<DropdownOption> {
    std::iter::once(all_option(ALL_LABEL))
        .chain(categories.iter().map(|category| DropdownOption {
            value: category.clone(),
            label: category.clone(),
        }))
        .collect()
}

pub fn equipment_options(equipment: &[EquipmentOption]) -> Vec<DropdownOption> {
    std::iter::once(all_option(ALL_LABEL))
        .chain(equipment.iter().map(|option| DropdownOption {
            value: option.value.clone(),
            label: option.label.clone(),
        }))
        .collect()
}

fn dropdown_label(options: &[DropdownOption], selected: &str) -> String {
    options
        .iter()
        .find(|opt| opt.value == selected)
        .or_else(|| options.first())
        .map(|opt| opt.label.clone())
        .unwrap_or_default()
}

fn selected_or_all(value: Option<&String>) -> String {
    value
        .cloned()
        .unwrap_or_else(|| ALL_OPTION_VALUE.to_string())
}

#[component]
fn DropdownSelect(
    id: DropdownId,
    label: &'static str,
    options: Vec<DropdownOption>,
    selected: String,
    mut open_dropdown: Signal<Option<DropdownId>>,
    mut dropdown_pos: Signal<Option<(f64, f64)>>,
    on_select: EventHandler<String>,
) -> Element {
    let is_open = open_dropdown() == Some(id);
    let selected_label = dropdown_label(&options, &selected);
    let (left, top) = dropdown_pos().unwrap_or((0.0, 0.0));

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 4px; min-width: 220px;",
            span { style: "font-size: 13px; color: #555;", "{label}" }
            button {
                style: "border: 1px solid #bbb; background: #fff; padding: 6px 10px; border-radius: 6px; cursor: pointer; text-align: left;",
                onclick: move |event| {
                    event.stop_propagation();
                    if open_dropdown() == Some(id) {
                        open_dropdown.set(None);
                        return;
                    }
                    let point = event.client_coordinates();
                    dropdown_pos.set(Some((point.x, point.y + 24.0)));
                    open_dropdown.set(Some(id));
                },
                "{selected_label}"
            }
        }

        if is_open {
            div {
                style: "position: fixed; left: {left}px; top: {top}px; min-width: 220px; max-height: 360px; overflow-y: auto; background: #fff; border: 1px solid #bbb; border-radius: 8px; box-shadow: 0 10px 24px rgba(0,0,0,0.15); z-index: 1200;",
                onclick: move |event| event.stop_propagation(),
                {options.iter().map(|opt| {
                    let value = opt.value.clone();
                    let is_selected = selected == value;
                    let background = if is_selected { "#eef4ff" } else { "transparent" };
                    rsx!(
                        div {
                            key: "{opt.value}",
                            style: "padding: 8px 10px; cursor: pointer; background: {background};",
                            onclick: move |_| {
                                on_select.call(value.clone());
                                open_dropdown.set(None);
                            },
                            "{opt.label}"
                        }
                    )
                })}
            }
        }
    }
}

#[component]
fn FieldLine(field: Field) -> Element {
    let label = field.label;
    match field.value {
        FieldValue::Text(text) => {
            let value_style = if field.emphasized {
                "font-weight: 700; color: #0b57d0; font-family: monospace;"
            } else {
                ""
            };
            rsx! {
                div { style: "margin: 3px 0;",
                    strong { "{label}" }
                    " : "
                    span { style: "{value_style}", "{text}" }
                }
            }
        }
        FieldValue::Remark(RemarkDisplay::Plain(text)) => rsx! {
            div { style: "margin: 3px 0;", "{text}" }
        },
        FieldValue::Remark(RemarkDisplay::Block(fragments)) => rsx! {
            div { style: "margin: 6px 0; padding: 6px 8px; background: #fafafa; border-left: 3px solid #ddd;",
                strong { "{REMARK_HEADING}" }
                {fragments.into_iter().enumerate().map(|(idx, fragment)| rsx!(
                    span { key: "{idx}", style: "display: block; padding-left: 12px;", "{fragment}" }
                ))}
            }
        },
    }
}

#[component]
fn ResultPanel(view: ResultView, copy_label: &'static str, on_copy: EventHandler<()>) -> Element {
    let body = match view {
        ResultView::NoMatch => rsx! {
            div { style: "color: #666;", "{NO_MATCH_TEXT}" }
        },
        ResultView::Matches { header, cards } => rsx! {
            div { style: "padding: 8px 10px; margin-bottom: 10px; background: #f3f6fb; border-radius: 8px;",
                {header.into_iter().enumerate().map(|(idx, field)| rsx!(FieldLine { key: "{idx}", field }))}
            }
            {cards.into_iter().map(|card| {
                let badge = card.badge();
                let number = card.number;
                let fields = card.fields;
                rsx!(
                    div {
                        key: "{number}",
                        style: "position: relative; border: 1px solid #ddd; border-radius: 8px; padding: 10px 12px; margin-bottom: 8px;",
                        div { style: "display: inline-block; font-size: 12px; background: #444; color: #fff; border-radius: 10px; padding: 1px 8px; margin-bottom: 4px;",
                            "{badge}"
                        }
                        div {
                            {fields.into_iter().enumerate().map(|(idx, field)| rsx!(FieldLine { key: "{idx}", field }))}
                        }
                    }
                )
            })}
        },
    };

    rsx! {
        div { style: "margin-top: 16px; border: 1px solid #ccc; border-radius: 10px; padding: 12px;",
            div { style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 8px;",
                h3 { style: "margin: 0;", "Result" }
                button {
                    style: "border: 1px solid #bbb; background: #fff; padding: 4px 12px; border-radius: 6px; cursor: pointer;",
                    onclick: move |_| on_copy.call(()),
                    "{copy_label}"
                }
            }
            {body}
        }
    }
}

#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();

    let AppState {
        mut session,
        mut load_failed,
        mut copy_feedback,
    } = AppState::new();

    let mut open_dropdown = use_signal(|| None::<DropdownId>);
    let dropdown_pos = use_signal(|| None::<(f64, f64)>);
    let copy_service = use_hook(|| CopyService::new(Rc::new(SystemClipboard::new())));

    let data_path = config.data_path.clone();
    use_effect(move || {
        if session.peek().is_some() || *load_failed.peek() {
            return;
        }
        let load_service = LoadService::new(Arc::new(JsonFileSource::new(data_path.clone())));
        match load_service.load() {
            Ok(dataset) => {
                session.set(Some(LookupSession::new(LookupService::new(dataset))));
            }
            Err(_) => {
                load_failed.set(true);
                show_blocking_notice("Credential Lookup", LOAD_FAILED_TEXT);
            }
        }
    });

    if load_failed() {
        return rsx! {
            div { style: "font-family: 'Noto Sans TC', sans-serif; padding: 24px; color: #b3261e;",
                p { "{LOAD_FAILED_TEXT}" }
            }
        };
    }
    let Some(snapshot) = session() else {
        return rsx! {
            div { style: "font-family: 'Noto Sans TC', sans-serif; padding: 24px; color: #666;",
                p { "Loading data.json..." }
            }
        };
    };

    let selection = snapshot.filter().selection().clone();
    let system_choices = system_options(snapshot.lookup().systems());
    let category_choices = category_options(snapshot.filter().categories());
    let equipment_choices = equipment_options(snapshot.filter().equipment());
    let visible_result = snapshot.visible_result().cloned();
    let feedback_delay = config.copy_feedback;

    let on_copy = move |_: ()| {
        let current = session.read().as_ref().and_then(|s| s.visible_result().cloned());
        match copy_service.copy_view(current.as_ref()) {
            Ok(_) => {
                let generation = copy_feedback.write().begin();
                spawn(async move {
                    tokio::time::sleep(feedback_delay).await;
                    copy_feedback.write().expire(generation);
                });
            }
            Err(_) => show_blocking_notice("Credential Lookup", COPY_FAILED_TEXT),
        }
    };

    rsx! {
        div {
            onclick: move |_| open_dropdown.set(None),
            style: "font-family: 'Noto Sans TC', sans-serif; padding: 12px 16px; background: #fff; min-height: 100vh; box-sizing: border-box;",

            h2 { "Credential Lookup" }

            div {
                style: "display: flex; flex-wrap: wrap; gap: 12px; align-items: flex-end;",
                DropdownSelect {
                    id: DropdownId::System,
                    label: "System",
                    options: system_choices,
                    selected: selected_or_all(selection.system.as_ref()),
                    open_dropdown,
                    dropdown_pos,
                    on_select: move |value: String| {
                        if let Some(current) = session.write().as_mut() {
                            current.select_system(selected_value(value));
                        }
                    },
                }
                DropdownSelect {
                    id: DropdownId::Category,
                    label: "Category",
                    options: category_choices,
                    selected: selected_or_all(selection.category.as_ref()),
                    open_dropdown,
                    dropdown_pos,
                    on_select: move |value: String| {
                        if let Some(current) = session.write().as_mut() {
                            current.select_category(selected_value(value));
                        }
                    },
                }
                DropdownSelect {
                    id: DropdownId::Equipment,
                    label: "Equipment",
                    options: equipment_choices,
                    selected: selected_or_all(selection.equipment.as_ref()),
                    open_dropdown,
                    dropdown_pos,
                    on_select: move |value: String| {
                        if let Some(current) = session.write().as_mut() {
                            current.select_equipment(selected_value(value));
                        }
                    },
                }

                button {
                    style: "border: 1px solid #0b57d0; background: #0b57d0; color: #fff; padding: 6px 16px; border-radius: 6px; cursor: pointer;",
                    onclick: move |event| {
                        event.prevent_default();
                        if let Some(current) = session.write().as_mut() {
                            current.show();
                        }
                    },
                    "Show"
                }
                button {
                    style: "border: 1px solid #bbb; background: #fff; padding: 6px 16px; border-radius: 6px; cursor: pointer;",
                    onclick: move |event| {
                        event.prevent_default();
                        if let Some(current) = session.write().as_mut() {
                            current.clear();
                        }
                    },
                    "Clear"
                }
            }

            if let Some(view) = visible_result {
                ResultPanel { view, copy_label: copy_feedback.read().label(), on_copy }
            }
        }
    }
}
