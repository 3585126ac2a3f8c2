//! Menu bar: the menu tree as data, plus its egui rendering.
//!
//! The tree is a flat ordered slice; submenu grouping is an index into
//! that slice rather than a pointer, so the structure can be walked and
//! tested without any widget state.

use eframe::egui;

/// Commands the menu bar can request from the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    NewAlias,
    NewChat,
    About,
}

/// One entry in the menu tree.
///
/// `parent` refers to an earlier entry in the slice (a submenu header).
/// Separators have no label and no action and are never selectable.
#[derive(Debug, Clone, Copy)]
pub struct MenuEntry {
    pub label: Option<&'static str>,
    pub parent: Option<usize>,
    pub action: Option<MenuAction>,
}

impl MenuEntry {
    const fn submenu(label: &'static str, parent: Option<usize>) -> Self {
        Self {
            label: Some(label),
            parent,
            action: None,
        }
    }

    const fn leaf(label: &'static str, parent: usize, action: MenuAction) -> Self {
        Self {
            label: Some(label),
            parent: Some(parent),
            action: Some(action),
        }
    }

    const fn separator() -> Self {
        Self {
            label: None,
            parent: None,
            action: None,
        }
    }

    pub fn is_separator(&self) -> bool {
        self.label.is_none()
    }
}

// Fixed, order-significant menu tree. Indices are the `parent` references.
const MENU: &[MenuEntry] = &[
    MenuEntry::submenu("File", None),                     // 0
    MenuEntry::submenu("New", Some(0)),                   // 1
    MenuEntry::leaf("Alias", 1, MenuAction::NewAlias),    // 2
    MenuEntry::leaf("Chat", 1, MenuAction::NewChat),      // 3
    MenuEntry::separator(),                               // 4
    MenuEntry::submenu("Help", None),                     // 5
    MenuEntry::leaf("About", 5, MenuAction::About),       // 6
];

/// The shell's menu tree, constructed once and immutable.
pub fn menu_tree() -> &'static [MenuEntry] {
    MENU
}

/// Render the menu bar from the tree data.
/// Returns `Some(MenuAction)` if a leaf entry was selected this frame.
pub fn render_menu_bar(ui: &mut egui::Ui) -> Option<MenuAction> {
    let mut selected: Option<MenuAction> = None;

    egui::menu::bar(ui, |ui| {
        render_level(ui, None, &mut selected);
    });

    selected
}

/// Render all entries whose `parent` matches, in tree order.
fn render_level(ui: &mut egui::Ui, parent: Option<usize>, selected: &mut Option<MenuAction>) {
    for (idx, entry) in MENU
        .iter()
        .enumerate()
        .filter(|(_, e)| e.parent == parent)
    {
        match (entry.label, entry.action) {
            // Cosmetic separator, not selectable
            (None, _) => {
                ui.separator();
            }
            (Some(label), Some(action)) => {
                if ui.button(label).clicked() {
                    *selected = Some(action);
                    ui.close_menu();
                }
            }
            (Some(label), None) => {
                ui.menu_button(label, |ui| {
                    render_level(ui, Some(idx), selected);
                });
            }
        }
    }
}
