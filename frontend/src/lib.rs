use sauron::{
    html::{attributes::*, *},
    prelude::*,
};
use gloo_timers::future::TimeoutFuture;
use shared::{Task, TaskPayload};

pub mod api;
pub mod state;
pub mod toast;

use state::TaskStore;
use toast::{ToastKind, ToastRack, TOAST_TTL_MS};

/// Delay between a successful DELETE and the resync fetch, giving the
/// remote time to reflect the delete before we re-list.
pub const DELETE_RESYNC_DELAY_MS: u32 = 200;

const EMPTY_NAME_MESSAGE: &str = "Input field cannot be empty";

#[derive(Debug, Clone)]
pub enum Msg {
    LoadTasks,
    TasksLoaded(Vec<Task>),
    LoadFailed(String),

    DraftNameChanged(String),

    CreateTask,
    TaskCreated,
    CreateFailed(String),

    BeginEdit(String),
    UpdateTask,
    TaskUpdated,
    UpdateFailed(String),

    MarkComplete(String),
    CompleteFailed(String),

    DeleteTask(String),
    TaskDeleted,
    DeleteFailed(String),

    ToastExpired(u32),
}

#[derive(Debug, Default)]
pub struct Model {
    store: TaskStore,
    toasts: ToastRack,
}

impl Application for Model {
    type MSG = Msg;

    fn init(&mut self) -> Cmd<Msg> {
        Cmd::new(async { Msg::LoadTasks })
    }

    fn update(&mut self, msg: Msg) -> Cmd<Msg> {
        match msg {
            Msg::LoadTasks => {
                self.store.loading = true;
                Cmd::new(async {
                    match api::list_tasks().await {
                        Ok(tasks) => Msg::TasksLoaded(tasks),
                        Err(e) => Msg::LoadFailed(e.to_string()),
                    }
                })
            }
            Msg::TasksLoaded(tasks) => {
                self.store.set_tasks(tasks);
                self.store.loading = false;
                Cmd::none()
            }
            Msg::LoadFailed(error) => {
                self.store.loading = false;
                log_error(&error);
                self.notify(ToastKind::Error, error)
            }
            Msg::DraftNameChanged(name) => {
                self.store.set_draft_name(name);
                Cmd::none()
            }
            Msg::CreateTask => {
                if self.store.draft_is_blank() {
                    return self.notify(ToastKind::Error, EMPTY_NAME_MESSAGE);
                }
                let draft = self.store.draft.clone();
                Cmd::new(async move {
                    match api::create_task(&draft).await {
                        Ok(_) => Msg::TaskCreated,
                        Err(e) => Msg::CreateFailed(e.to_string()),
                    }
                })
            }
            Msg::TaskCreated => {
                self.store.clear_draft_name();
                Cmd::batch(vec![
                    self.notify(ToastKind::Success, "Task added successfully"),
                    Cmd::new(async { Msg::LoadTasks }),
                ])
            }
            Msg::CreateFailed(error) => {
                log_error(&error);
                self.notify(ToastKind::Error, error)
            }
            Msg::BeginEdit(id) => {
                if let Some(task) = self.store.task(&id).cloned() {
                    self.store.begin_edit(&task);
                }
                Cmd::none()
            }
            Msg::UpdateTask => {
                if self.store.draft_is_blank() {
                    return self.notify(ToastKind::Error, EMPTY_NAME_MESSAGE);
                }
                let Some(id) = self.store.selected_id.clone() else {
                    return Cmd::none();
                };
                let draft = self.store.draft.clone();
                Cmd::new(async move {
                    match api::update_task(&id, &draft).await {
                        Ok(_) => Msg::TaskUpdated,
                        Err(e) => Msg::UpdateFailed(e.to_string()),
                    }
                })
            }
            Msg::TaskUpdated => {
                self.store.finish_edit();
                Cmd::new(async { Msg::LoadTasks })
            }
            // Edit mode stays on so the draft can be corrected and resent.
            Msg::UpdateFailed(error) => {
                log_error(&error);
                self.notify(ToastKind::Error, error)
            }
            Msg::MarkComplete(id) => {
                let Some(task) = self.store.task(&id) else {
                    return Cmd::none();
                };
                let payload = TaskPayload::completing(task);
                Cmd::new(async move {
                    match api::update_task(&id, &payload).await {
                        Ok(_) => Msg::LoadTasks,
                        Err(e) => Msg::CompleteFailed(e.to_string()),
                    }
                })
            }
            Msg::CompleteFailed(error) => {
                log_error(&error);
                self.notify(ToastKind::Error, error)
            }
            Msg::DeleteTask(id) => Cmd::new(async move {
                match api::delete_task(&id).await {
                    Ok(()) => Msg::TaskDeleted,
                    Err(e) => Msg::DeleteFailed(e.to_string()),
                }
            }),
            Msg::TaskDeleted => Cmd::batch(vec![
                self.notify(ToastKind::Success, "Task deleted"),
                Cmd::new(async {
                    TimeoutFuture::new(DELETE_RESYNC_DELAY_MS).await;
                    Msg::LoadTasks
                }),
            ]),
            Msg::DeleteFailed(error) => {
                log_error(&error);
                self.notify(ToastKind::Error, error)
            }
            Msg::ToastExpired(id) => {
                self.toasts.dismiss(id);
                Cmd::none()
            }
        }
    }

    fn view(&self) -> Node<Msg> {
        div(
            [class("app")],
            [
                div(
                    [class("task-container")],
                    [
                        h2([], [text("Task Manager")]),
                        self.view_task_form(),
                        self.view_summary(),
                        hr([], []),
                        self.view_task_list(),
                    ],
                ),
                self.view_toasts(),
            ],
        )
    }
}

impl Model {
    /// Puts a toast on screen and schedules its expiry.
    fn notify(&mut self, kind: ToastKind, message: impl Into<String>) -> Cmd<Msg> {
        let id = self.toasts.push(kind, message);
        Cmd::new(async move {
            TimeoutFuture::new(TOAST_TTL_MS).await;
            Msg::ToastExpired(id)
        })
    }

    /// Controlled form: the input value and both submit paths live on the
    /// model; the editing flag picks which message the button sends.
    fn view_task_form(&self) -> Node<Msg> {
        let editing = self.store.editing;
        div(
            [class("task-form")],
            [
                input(
                    [
                        r#type("text"),
                        placeholder("Add a task"),
                        value(&self.store.draft.name),
                        on_input(|event| Msg::DraftNameChanged(event.value())),
                    ],
                    [],
                ),
                button(
                    [
                        r#type("button"),
                        on_click(move |_| {
                            if editing {
                                Msg::UpdateTask
                            } else {
                                Msg::CreateTask
                            }
                        }),
                    ],
                    [text(if editing { "Update" } else { "Add" })],
                ),
            ],
        )
    }

    fn view_summary(&self) -> Node<Msg> {
        if self.store.tasks().is_empty() {
            return span([], []);
        }
        div(
            [class("task-summary")],
            [
                p(
                    [],
                    [text(&format!("Total Tasks: {}", self.store.tasks().len()))],
                ),
                p(
                    [],
                    [text(&format!(
                        "Completed Tasks: {}",
                        self.store.completed_tasks().len()
                    ))],
                ),
            ],
        )
    }

    fn view_task_list(&self) -> Node<Msg> {
        div(
            [class("task-list")],
            [
                if self.store.loading {
                    div([class("loader")], [text("Loading...")])
                } else {
                    span([], [])
                },
                // Rows stay visible while a refetch is in flight; the empty
                // state only shows once a fetch has settled on nothing.
                if !self.store.loading && self.store.tasks().is_empty() {
                    p([class("empty")], [text("No task added. Please add a task")])
                } else {
                    div(
                        [],
                        self.store
                            .tasks()
                            .iter()
                            .enumerate()
                            .map(|(index, task)| self.view_task(index, task))
                            .collect::<Vec<_>>(),
                    )
                },
            ],
        )
    }

    fn view_task(&self, index: usize, task: &Task) -> Node<Msg> {
        let id = task.id.clone();
        div(
            [
                key(task.id.clone()),
                class(if task.completed {
                    "task completed"
                } else {
                    "task"
                }),
            ],
            [
                input(
                    [
                        r#type("checkbox"),
                        checked(task.completed),
                        on_click({
                            let id = id.clone();
                            move |_| Msg::MarkComplete(id.clone())
                        }),
                    ],
                    [],
                ),
                p([], [text(&format!("{}. {}", index + 1, task.name))]),
                div(
                    [class("task-icons")],
                    [
                        button(
                            [
                                r#type("button"),
                                on_click({
                                    let id = id.clone();
                                    move |_| Msg::BeginEdit(id.clone())
                                }),
                            ],
                            [text("Edit")],
                        ),
                        button(
                            [
                                r#type("button"),
                                on_click(move |_| Msg::DeleteTask(id.clone())),
                            ],
                            [text("Delete")],
                        ),
                    ],
                ),
            ],
        )
    }

    fn view_toasts(&self) -> Node<Msg> {
        div(
            [class("toasts")],
            self.toasts
                .iter()
                .map(|toast| {
                    div(
                        [
                            key(toast.id.to_string()),
                            class(match toast.kind {
                                ToastKind::Success => "toast toast-success",
                                ToastKind::Error => "toast toast-error",
                            }),
                        ],
                        [text(&toast.message)],
                    )
                })
                .collect::<Vec<_>>(),
        )
    }
}

#[cfg(target_arch = "wasm32")]
fn log_error(message: &str) {
    web_sys::console::error_1(&wasm_bindgen::JsValue::from_str(message));
}

#[cfg(not(target_arch = "wasm32"))]
fn log_error(_message: &str) {}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    Program::mount_to_body(Model::default());
}
