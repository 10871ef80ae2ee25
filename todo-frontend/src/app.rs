use std::sync::mpsc::{Receiver, Sender, channel};

use todo_client::prelude::*;
use todo_client::{FetchOutcome, Field, criterion};

enum ApiResponse {
    Fetched(FetchOutcome),
    Created(Result<CreatedTodo, ApiError>),
}

/// A notice and the time (in egui seconds) it disappears.
struct ShownNotice {
    notice: Notice,
    until: f64,
}

pub struct TodoApp {
    list: TodoList<HttpRepository>,
    route: Route,

    // List criteria as typed
    owner: String,
    category: String,
    status: Option<bool>,
    body: String,

    form: TodoForm,
    submitting: bool,
    notice: Option<ShownNotice>,

    response_rx: Receiver<ApiResponse>,
    response_tx: Sender<ApiResponse>,
}

impl TodoApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: &ClientConfig) -> Self {
        let (tx, rx) = channel();
        let mut app = Self {
            list: TodoList::new(HttpRepository::new(config)),
            route: Route::TodoList,
            owner: String::new(),
            category: String::new(),
            status: None,
            body: String::new(),
            form: TodoForm::default(),
            submitting: false,
            notice: None,
            response_rx: rx,
            response_tx: tx,
        };
        app.fetch(&cc.egui_ctx);
        app
    }

    fn typed_filter(&self) -> ServerFilter {
        ServerFilter {
            owner: criterion(&self.owner),
            category: criterion(&self.category),
            status: self.status,
        }
    }

    fn fetch(&mut self, ctx: &egui::Context) {
        self.fetch_with(ctx, self.typed_filter());
    }

    fn fetch_with(&mut self, ctx: &egui::Context, filter: ServerFilter) {
        self.list.set_server_filter(filter);
        let pending = self.list.fetch();
        let tx = self.response_tx.clone();
        let ctx = ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let _ = tx.send(ApiResponse::Fetched(pending.await));
            ctx.request_repaint();
        });
    }

    fn update_filter(&mut self) {
        self.list.set_local_filter(LocalFilter {
            owner: criterion(&self.owner),
            category: criterion(&self.category),
            body: criterion(&self.body),
        });
    }

    fn submit_form(&mut self, ctx: &egui::Context) {
        let Ok(todo) = self.form.validate() else {
            return;
        };
        self.submitting = true;
        let repository = self.list.repository().clone();
        let tx = self.response_tx.clone();
        let ctx = ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = submit(&repository, todo).await;
            let _ = tx.send(ApiResponse::Created(result));
            ctx.request_repaint();
        });
    }

    fn navigate(&mut self, ctx: &egui::Context, route: Route) {
        log::debug!("Navigating to {}", route.path());
        if let Some(filter) = route.fetch_filter(self.typed_filter()) {
            self.fetch_with(ctx, filter);
        }
        self.route = route;
    }

    fn show_notice(&mut self, ctx: &egui::Context, notice: Notice) {
        let now = ctx.input(|i| i.time);
        let until = now + notice.duration.as_secs_f64();
        ctx.request_repaint_after(notice.duration);
        self.notice = Some(ShownNotice { notice, until });
    }

    fn process_responses(&mut self, ctx: &egui::Context) {
        while let Ok(response) = self.response_rx.try_recv() {
            match response {
                ApiResponse::Fetched(outcome) => {
                    if let FetchEvent::Failed(e) = self.list.finish_fetch(outcome) {
                        log::error!("Fetch error: {e}");
                        self.show_notice(ctx, Notice::fetch_failed());
                    }
                }
                ApiResponse::Created(Ok(created)) => {
                    self.submitting = false;
                    self.form = TodoForm::default();
                    self.show_notice(ctx, created.notice());
                    self.navigate(ctx, created.route());
                }
                ApiResponse::Created(Err(e)) => {
                    self.submitting = false;
                    log::error!("Create error: {e}");
                    self.show_notice(ctx, Notice::create_failed());
                }
            }
        }
    }

    fn list_view(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        let mut refetch = false;
        let mut refilter = false;

        egui::Grid::new("todo_filters").num_columns(2).show(ui, |ui| {
            ui.label("Owner");
            let owner = ui.text_edit_singleline(&mut self.owner).changed();
            refetch |= owner;
            refilter |= owner;
            ui.end_row();

            ui.label("Category");
            let category = ui.text_edit_singleline(&mut self.category).changed();
            refetch |= category;
            refilter |= category;
            ui.end_row();

            ui.label("Status");
            ui.horizontal(|ui| {
                refetch |= ui.radio_value(&mut self.status, None, "Any").changed();
                refetch |= ui.radio_value(&mut self.status, Some(true), "Complete").changed();
                refetch |= ui.radio_value(&mut self.status, Some(false), "Incomplete").changed();
            });
            ui.end_row();

            ui.label("Body contains");
            refilter |= ui.text_edit_singleline(&mut self.body).changed();
            ui.end_row();
        });

        if refilter {
            self.update_filter();
        }
        if refetch {
            self.fetch(ctx);
        }

        ui.separator();

        ui.horizontal(|ui| {
            ui.label(format!("{} todos", self.list.shown().len()));
            if self.list.state() == FetchState::Fetching {
                ui.spinner();
            }
        });

        let mut open = None;
        egui::ScrollArea::vertical().show(ui, |ui| {
            egui::Grid::new("todo_list").striped(true).num_columns(5).show(ui, |ui| {
                for todo in self.list.shown() {
                    ui.label(todo.owner.as_str());
                    ui.label(todo.category.as_str());
                    ui.label(if todo.status { "Complete" } else { "Incomplete" });
                    ui.label(todo.body.as_str());
                    if ui.small_button("View").clicked() {
                        open = Some(todo.id.clone());
                    }
                    ui.end_row();
                }
            });
        });

        if let Some(id) = open {
            self.navigate(ctx, Route::TodoDetail(id));
        }
    }

    fn add_view(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        let form = &mut self.form;

        field_row(ui, "Owner", &mut form.owner, false);
        errors_for(ui, form, Field::Owner);

        ui.horizontal(|ui| {
            ui.label("Status");
            ui.radio_value(&mut form.status, "true".to_string(), "Complete");
            ui.radio_value(&mut form.status, "false".to_string(), "Incomplete");
        });
        errors_for(ui, form, Field::Status);

        field_row(ui, "Category", &mut form.category, false);
        errors_for(ui, form, Field::Category);

        field_row(ui, "Description", &mut form.body, true);
        errors_for(ui, form, Field::Body);

        let enabled = form.is_valid() && !self.submitting;
        if ui.add_enabled(enabled, egui::Button::new("Add Todo")).clicked() {
            self.submit_form(ctx);
        }
    }

    fn detail_view(&self, ui: &mut egui::Ui, id: &str) {
        match self.list.server_todos().iter().find(|t| t.id == id) {
            Some(todo) => {
                ui.heading(todo.owner.as_str());
                ui.label(format!("Category: {}", todo.category));
                ui.label(format!(
                    "Status: {}",
                    if todo.status { "Complete" } else { "Incomplete" }
                ));
                ui.separator();
                ui.label(todo.body.as_str());
            }
            None if self.list.state() == FetchState::Fetching => {
                ui.spinner();
            }
            None => {
                ui.label(format!("No todo with id {id}"));
            }
        }
    }
}

fn field_row(ui: &mut egui::Ui, label: &str, value: &mut String, multiline: bool) {
    ui.horizontal(|ui| {
        ui.label(label);
        if multiline {
            ui.text_edit_multiline(value);
        } else {
            ui.text_edit_singleline(value);
        }
    });
}

// Errors only show once the field has been touched.
fn errors_for(ui: &mut egui::Ui, form: &TodoForm, field: Field) {
    let touched = match field {
        Field::Owner => !form.owner.is_empty(),
        Field::Status => !form.status.is_empty(),
        Field::Category => !form.category.is_empty(),
        Field::Body => !form.body.is_empty(),
    };
    if !touched {
        return;
    }
    for error in form.field_errors(field) {
        ui.colored_label(egui::Color32::RED, error.message());
    }
}

impl eframe::App for TodoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_responses(ctx);

        let now = ctx.input(|i| i.time);
        if self.notice.as_ref().is_some_and(|n| now >= n.until) {
            self.notice = None;
        }

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                egui::widgets::global_theme_preference_buttons(ui);
                ui.separator();
                if ui.selectable_label(self.route == Route::TodoList, "Todos").clicked() {
                    self.navigate(ctx, Route::TodoList);
                }
                if ui.selectable_label(self.route == Route::NewTodo, "New Todo").clicked() {
                    self.navigate(ctx, Route::NewTodo);
                }
            });
        });

        let mut dismissed = false;
        if let Some(shown) = &self.notice {
            egui::TopBottomPanel::bottom("notice_panel").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(shown.notice.message.as_str());
                    if let Some(action) = shown.notice.action {
                        dismissed = ui.button(action).clicked();
                    }
                });
            });
        }
        if dismissed {
            self.notice = None;
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            match self.route.clone() {
                Route::TodoList => {
                    ui.heading("Todos");
                    self.list_view(ctx, ui);
                }
                Route::NewTodo => {
                    ui.heading("New Todo");
                    self.add_view(ctx, ui);
                }
                Route::TodoDetail(id) => self.detail_view(ui, &id),
            }
            egui::warn_if_debug_build(ui);
        });
    }
}
