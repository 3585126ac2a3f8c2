//! The main shell window: menu bar, empty workspace, and modal dialogs.
//!
//! Menu leaves are pure dispatch: `NewAlias` opens the dialog through the
//! `DialogManager`, `NewChat` and `About` go to injected handlers. While a
//! modal dialog is open the shell processes no menu actions at all.

use eframe::egui;

use crate::config::{self, Settings};
use crate::dialog_manager::DialogManager;
use crate::logging::{LogEntry, Logger};
use crate::store::{AliasStore, MemoryAliasStore};
use crate::ui::dialogs::DialogAction;
use crate::ui::menu::{self, MenuAction};

/// Injected menu command handlers. An unset handler makes the
/// corresponding menu action a no-op.
#[derive(Default)]
pub struct ShellHandlers {
    pub on_new_chat: Option<Box<dyn FnMut()>>,
    pub on_about: Option<Box<dyn FnMut()>>,
}

pub struct ShellApp {
    dialogs: DialogManager,
    handlers: ShellHandlers,
    store: Box<dyn AliasStore>,
    logger: Option<Logger>,
    settings: Settings,
}

impl ShellApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        let logger = match Logger::new() {
            Ok(logger) => Some(logger),
            Err(e) => {
                eprintln!("Event logging disabled: {}", e);
                None
            }
        };

        let mut app = Self::with_store(
            Box::new(MemoryAliasStore::new()),
            ShellHandlers::default(),
            settings,
        );
        app.logger = logger;
        app
    }

    /// Construct a shell around an explicit store and handler set. Used by
    /// tests and by embedders that bring their own collaborators.
    pub fn with_store(
        store: Box<dyn AliasStore>,
        handlers: ShellHandlers,
        settings: Settings,
    ) -> Self {
        Self {
            dialogs: DialogManager::new(),
            handlers,
            store,
            logger: None,
            settings,
        }
    }

    pub fn dialogs(&self) -> &DialogManager {
        &self.dialogs
    }

    pub fn dialogs_mut(&mut self) -> &mut DialogManager {
        &mut self.dialogs
    }

    fn log_event(&self, event: String) {
        if let Some(ref logger) = self.logger {
            logger.log(LogEntry::now(event));
        }
    }

    /// Route a menu command. Ignored entirely while a modal dialog owns
    /// input; unset handlers make their action a no-op.
    pub fn handle_menu_action(&mut self, action: MenuAction) {
        if self.dialogs.has_modal() {
            return;
        }

        self.log_event(format!("menu: {:?}", action));

        match action {
            MenuAction::NewAlias => {
                self.dialogs.open_new_alias();
            }
            MenuAction::NewChat => {
                if let Some(ref mut handler) = self.handlers.on_new_chat {
                    handler();
                }
            }
            MenuAction::About => {
                if let Some(ref mut handler) = self.handlers.on_about {
                    handler();
                }
            }
        }
    }

    fn process_dialog_actions(&mut self, actions: Vec<DialogAction>) {
        for action in actions {
            match action {
                DialogAction::AliasSaved { address, alias } => {
                    self.log_event(format!("alias saved: {} -> {}", alias, address));
                }
            }
        }
    }
}

impl eframe::App for ShellApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let modal_open = self.dialogs.has_modal();

        let mut selected: Option<MenuAction> = None;
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            // The open dialog owns input; grey the bar out underneath it
            ui.add_enabled_ui(!modal_open, |ui| {
                selected = menu::render_menu_bar(ui);
            });
        });
        if let Some(action) = selected {
            self.handle_menu_action(action);
        }

        egui::CentralPanel::default().show(ctx, |_ui| {});

        let actions = self.dialogs.render(ctx, self.store.as_mut());
        self.process_dialog_actions(actions);

        // Remember the window geometry for the next start
        let size = ctx.screen_rect().size();
        self.settings.window_width = size.x;
        self.settings.window_height = size.y;
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Err(e) = config::save_settings(&self.settings) {
            eprintln!("Failed to save settings: {}", e);
        }
    }
}
