use super::{AppState, Scene};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    CaptureCalculator,
    ShinyCalculator,
}

const MENU_ITEMS: [MenuItem; 2] = [MenuItem::CaptureCalculator, MenuItem::ShinyCalculator];

impl MenuItem {
    fn display(self, app: &AppState) -> String {
        match self {
            MenuItem::CaptureCalculator => format!(
                "Capture Calculator  ({}, {})",
                app.capture.generation, app.capture.ball
            ),
            MenuItem::ShinyCalculator => {
                let charm = if app.shiny.charm { ", Shiny Charm" } else { "" };
                format!("Shiny Odds  ({}{charm})", app.shiny.game)
            }
        }
    }

    fn scene(self) -> Scene {
        match self {
            MenuItem::CaptureCalculator => Scene::Capture,
            MenuItem::ShinyCalculator => Scene::Shiny,
        }
    }
}

impl AppState {
    pub fn menu_items_display(&self) -> Vec<String> {
        MENU_ITEMS.iter().map(|item| item.display(self)).collect()
    }

    /// Leave a calculator for the menu, or return to the last one.
    pub fn toggle_menu(&mut self) {
        self.close_help();
        self.scene = match self.scene {
            Scene::Menu => MENU_ITEMS[self.menu_index % MENU_ITEMS.len()].scene(),
            _ => Scene::Menu,
        };
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % MENU_ITEMS.len();
    }

    pub fn menu_prev(&mut self) {
        self.menu_index = (self.menu_index + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
    }

    pub fn menu_select(&mut self) {
        self.close_help();
        self.scene = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()].scene();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_wraps_and_selects() {
        let mut app = AppState::with_seed(0);
        app.menu_prev();
        assert_eq!(app.menu_index, 1);
        app.menu_select();
        assert_eq!(app.scene, Scene::Shiny);
        app.toggle_menu();
        assert_eq!(app.scene, Scene::Menu);
        app.toggle_menu();
        assert_eq!(app.scene, Scene::Shiny);
    }

    #[test]
    fn menu_labels_show_current_setup() {
        let app = AppState::with_seed(0);
        let items = app.menu_items_display();
        assert!(items[0].contains("Gen IX"));
        assert!(items[1].contains("Scarlet"));
    }
}
