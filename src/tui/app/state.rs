use crate::balls::BallParseError;
use crate::capture::{CaptureResult, StatusParseError};
use crate::game::GameParseError;
use crate::generation::{Generation, GenerationParseError};
use crate::shake::{simulate_throw, RngSource};
use crate::shiny::{MethodInfo, ShinyOdds, GUIDE};
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

use super::capture::{CaptureField, CaptureForm, CAPTURE_FIELDS};
use super::shiny::ShinyForm;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Menu,
    Capture,
    Shiny,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    MenuNext,
    MenuPrev,
    MenuSelect,
    ToggleMenu,
    ToggleHelp,
    FieldNext,
    FieldPrev,
    FieldInc,
    FieldDec,
    Throw,
    LogUp,
    LogDown,
    ClearLog,
    EntryOpen,
    EntryChar(char),
    EntryBackspace,
    EntrySubmit,
    EntryCancel,
    MethodNext,
    MethodPrev,
    GameNext,
    GamePrev,
    ToggleCharm,
    CycleSparkling,
    CycleResearch,
    AdjustInput(i16),
    ToggleLure,
    CycleOutbreak,
    ToggleShinyParent,
    ToggleGuide,
    ScrollGuide(i16),
}

/// Rejected text entry.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EntryError {
    #[error(transparent)]
    Generation(#[from] GenerationParseError),
    #[error(transparent)]
    Game(#[from] GameParseError),
    #[error(transparent)]
    Ball(#[from] BallParseError),
    #[error(transparent)]
    Status(#[from] StatusParseError),
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("{value} is outside {min}-{max}")]
    OutOfRange { value: u16, min: u16, max: u16 },
    #[error("{item} is not available in {generation}")]
    Unavailable { item: String, generation: Generation },
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    pub menu_index: usize,
    pub capture: CaptureForm,
    pub field_index: usize,
    pub shiny: ShinyForm,
    pub method_index: usize,
    pub throws: u32,
    pub catches: u32,
    help_open: bool,
    guide_open: bool,
    guide_scroll: u16,
    throw_log: VecDeque<String>,
    log_offset: usize,
    entry: Option<String>,
    status: Option<String>,
    status_is_error: bool,
    status_at: Option<Instant>,
    source: RngSource<ChaCha8Rng>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_source(RngSource::from_entropy())
    }
}

impl AppState {
    pub const LOG_PAGE_SIZE: usize = 12;
    /// Oldest lines are dropped past this.
    pub const THROW_LOG_CAP: usize = 500;
    const STATUS_TTL: Duration = Duration::from_secs(3);
    const ENTRY_MAX_LEN: usize = 24;
    const GUIDE_SCROLL_MAX: u16 = GUIDE.len() as u16 * 4;

    /// App whose throws replay for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_source(RngSource::seeded(seed))
    }

    fn with_source(source: RngSource<ChaCha8Rng>) -> Self {
        Self {
            scene: Scene::Menu,
            menu_index: 0,
            capture: CaptureForm::default(),
            field_index: 0,
            shiny: ShinyForm::default(),
            method_index: 0,
            throws: 0,
            catches: 0,
            help_open: false,
            guide_open: false,
            guide_scroll: 0,
            throw_log: VecDeque::new(),
            log_offset: 0,
            entry: None,
            status: None,
            status_is_error: false,
            status_at: None,
            source,
        }
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub(crate) fn close_help(&mut self) {
        self.help_open = false;
        self.guide_open = false;
    }

    pub fn guide_open(&self) -> bool {
        self.guide_open
    }

    pub fn guide_scroll(&self) -> u16 {
        self.guide_scroll
    }

    pub fn entry_active(&self) -> bool {
        self.entry.is_some()
    }

    pub fn entry_text(&self) -> Option<&str> {
        self.entry.as_deref()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn status_is_error(&self) -> bool {
        self.status_is_error
    }

    fn set_status(&mut self, message: impl Into<String>, is_error: bool) {
        self.status = Some(message.into());
        self.status_is_error = is_error;
        self.status_at = Some(Instant::now());
    }

    fn clear_status(&mut self) {
        self.status = None;
        self.status_is_error = false;
        self.status_at = None;
    }

    /// Newest first, starting `log_offset` entries back.
    pub fn throw_log_page(&self) -> impl Iterator<Item = &str> {
        self.throw_log
            .iter()
            .rev()
            .skip(self.log_offset)
            .take(Self::LOG_PAGE_SIZE)
            .map(String::as_str)
    }

    pub fn throw_log_len(&self) -> usize {
        self.throw_log.len()
    }

    pub fn log_offset(&self) -> usize {
        self.log_offset
    }

    pub fn capture_fields(&self) -> &'static [CaptureField] {
        &CAPTURE_FIELDS
    }

    pub fn focused_field(&self) -> CaptureField {
        CAPTURE_FIELDS[self.field_index % CAPTURE_FIELDS.len()]
    }

    pub fn capture_result(&self) -> CaptureResult {
        self.capture.result()
    }

    pub fn shiny_rows(&self) -> Vec<(&'static MethodInfo, ShinyOdds)> {
        self.shiny.rows()
    }

    pub fn selected_method(&self) -> Option<&'static MethodInfo> {
        let methods = self.shiny.methods();
        if methods.is_empty() {
            return None;
        }
        methods.get(self.method_index.min(methods.len() - 1)).copied()
    }

    /// Throw a ball with the current capture inputs and log the outcome.
    pub fn throw_ball(&mut self) {
        let generation = self.capture.generation;
        let result = self.capture.result();
        let outcome = simulate_throw(generation, &result, &mut self.source);
        self.throws += 1;
        if outcome.caught {
            self.catches += 1;
        }
        let line = format!(
            "#{} {} {} ({:.2}%): {}",
            self.throws,
            generation,
            self.capture.ball,
            result.capture_percentage,
            outcome.describe()
        );
        self.throw_log.push_back(line);
        if self.throw_log.len() > Self::THROW_LOG_CAP {
            self.throw_log.pop_front();
        }
        self.log_offset = 0;
        self.set_status(outcome.describe(), false);
    }

    fn open_entry(&mut self) -> bool {
        let allowed = match self.scene {
            Scene::Capture => self.focused_field().accepts_entry(),
            Scene::Shiny => true,
            Scene::Menu => false,
        };
        if allowed {
            self.entry = Some(String::new());
        }
        allowed
    }

    fn entry_push(&mut self, c: char) {
        if let Some(buf) = self.entry.as_mut() {
            if buf.chars().count() < Self::ENTRY_MAX_LEN && !c.is_control() {
                buf.push(c);
            }
        }
    }

    fn entry_backspace(&mut self) {
        if let Some(buf) = self.entry.as_mut() {
            buf.pop();
        }
    }

    fn submit_entry(&mut self) -> bool {
        let Some(text) = self.entry.take() else {
            return false;
        };
        let applied = match self.scene {
            Scene::Capture => self.focused_field().apply_entry(&mut self.capture, &text),
            Scene::Shiny => {
                text.parse().map(|game| self.select_game(game)).map_err(EntryError::from)
            }
            Scene::Menu => Ok(()),
        };
        match applied {
            Ok(()) => {
                self.clear_status();
                true
            }
            Err(err) => {
                self.set_status(err.to_string(), true);
                false
            }
        }
    }

    fn select_game(&mut self, game: crate::game::Game) {
        self.shiny.set_game(game);
        self.method_index = 0;
    }

    fn method_count(&self) -> usize {
        self.shiny.methods().len()
    }

    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleMenu => {
                self.toggle_menu();
                false
            }
            InputAction::ToggleHelp => {
                if self.scene != Scene::Menu {
                    self.help_open = !self.help_open;
                    self.guide_open = false;
                }
                false
            }
            InputAction::ToggleGuide => {
                if self.scene == Scene::Shiny {
                    self.guide_open = !self.guide_open;
                    self.help_open = false;
                    self.guide_scroll = 0;
                }
                false
            }
            InputAction::ScrollGuide(delta) => {
                if self.guide_open {
                    let scroll = i32::from(self.guide_scroll) + i32::from(delta);
                    self.guide_scroll =
                        scroll.clamp(0, i32::from(Self::GUIDE_SCROLL_MAX)) as u16;
                }
                false
            }
            InputAction::MenuNext => {
                if self.scene == Scene::Menu {
                    self.menu_next();
                }
                false
            }
            InputAction::MenuPrev => {
                if self.scene == Scene::Menu {
                    self.menu_prev();
                }
                false
            }
            InputAction::MenuSelect => {
                if self.scene == Scene::Menu {
                    self.menu_select();
                }
                false
            }
            InputAction::FieldNext => {
                if self.scene == Scene::Capture {
                    self.field_index = (self.field_index + 1) % CAPTURE_FIELDS.len();
                }
                false
            }
            InputAction::FieldPrev => {
                if self.scene == Scene::Capture {
                    let n = CAPTURE_FIELDS.len();
                    self.field_index = (self.field_index + n - 1) % n;
                }
                false
            }
            InputAction::FieldInc | InputAction::FieldDec => {
                if self.scene == Scene::Capture {
                    let forward = action == InputAction::FieldInc;
                    self.focused_field().adjust(&mut self.capture, forward);
                }
                false
            }
            InputAction::Throw => {
                if self.scene == Scene::Capture {
                    self.throw_ball();
                    return true;
                }
                false
            }
            InputAction::LogUp => {
                let max_offset = self.throw_log.len().saturating_sub(Self::LOG_PAGE_SIZE);
                self.log_offset = (self.log_offset + 1).min(max_offset);
                false
            }
            InputAction::LogDown => {
                self.log_offset = self.log_offset.saturating_sub(1);
                false
            }
            InputAction::ClearLog => {
                self.throw_log.clear();
                self.log_offset = 0;
                self.throws = 0;
                self.catches = 0;
                false
            }
            InputAction::EntryOpen => self.open_entry(),
            InputAction::EntryChar(c) => {
                self.entry_push(c);
                false
            }
            InputAction::EntryBackspace => {
                self.entry_backspace();
                false
            }
            InputAction::EntrySubmit => self.submit_entry(),
            InputAction::EntryCancel => {
                self.entry = None;
                false
            }
            InputAction::MethodNext => {
                let n = self.method_count();
                if self.scene == Scene::Shiny && n > 0 {
                    self.method_index = (self.method_index + 1) % n;
                }
                false
            }
            InputAction::MethodPrev => {
                let n = self.method_count();
                if self.scene == Scene::Shiny && n > 0 {
                    self.method_index = (self.method_index + n - 1) % n;
                }
                false
            }
            InputAction::GameNext => {
                if self.scene == Scene::Shiny {
                    self.select_game(self.shiny.game.next());
                }
                false
            }
            InputAction::GamePrev => {
                if self.scene == Scene::Shiny {
                    self.select_game(self.shiny.game.prev());
                }
                false
            }
            InputAction::ToggleCharm => {
                if self.scene != Scene::Shiny {
                    return false;
                }
                let toggled = self.shiny.toggle_charm();
                if !toggled {
                    let msg = format!("No Shiny Charm in {}", self.shiny.game);
                    self.set_status(msg, true);
                }
                toggled
            }
            InputAction::CycleSparkling => {
                if self.scene == Scene::Shiny {
                    self.shiny.cycle_sparkling();
                }
                false
            }
            InputAction::CycleResearch => {
                if self.scene == Scene::Shiny {
                    self.shiny.cycle_research();
                }
                false
            }
            InputAction::AdjustInput(delta) => match (self.scene, self.selected_method()) {
                (Scene::Shiny, Some(info)) => self.shiny.adjust_input(info, i32::from(delta)),
                _ => false,
            },
            InputAction::ToggleLure => {
                if self.scene == Scene::Shiny {
                    self.shiny.extra.lure = !self.shiny.extra.lure;
                }
                false
            }
            InputAction::CycleOutbreak => {
                if self.scene == Scene::Shiny {
                    self.shiny.extra.outbreak = self.shiny.extra.outbreak.next();
                }
                false
            }
            InputAction::ToggleShinyParent => {
                if self.scene == Scene::Shiny {
                    self.shiny.extra.shiny_parent = !self.shiny.extra.shiny_parent;
                }
                false
            }
        }
    }

    /// Periodic housekeeping: expires the status line.
    pub fn on_tick(&mut self) {
        if let Some(at) = self.status_at {
            if at.elapsed() >= Self::STATUS_TTL {
                self.clear_status();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_apps_throw_alike() {
        let mut a = AppState::with_seed(11);
        let mut b = AppState::with_seed(11);
        a.scene = Scene::Capture;
        b.scene = Scene::Capture;
        for _ in 0..20 {
            a.throw_ball();
            b.throw_ball();
        }
        assert_eq!(a.catches, b.catches);
        let page = |app: &AppState| app.throw_log_page().map(str::to_owned).collect::<Vec<_>>();
        assert_eq!(page(&a), page(&b));
    }

    #[test]
    fn bad_entry_sets_error_status() {
        let mut app = AppState::with_seed(1);
        app.scene = Scene::Shiny;
        assert!(app.handle_input(InputAction::EntryOpen));
        for c in "pokemon snap".chars() {
            let _ = app.handle_input(InputAction::EntryChar(c));
        }
        assert!(!app.handle_input(InputAction::EntrySubmit));
        assert!(app.status_is_error());
        assert!(app.status().unwrap_or_default().contains("pokemon snap"));
        assert!(!app.entry_active());
    }

    #[test]
    fn throw_log_keeps_newest_lines() {
        let mut app = AppState::with_seed(3);
        app.scene = Scene::Capture;
        let total = AppState::THROW_LOG_CAP + 25;
        for _ in 0..total {
            let _ = app.handle_input(InputAction::Throw);
        }
        assert_eq!(app.throws as usize, total);
        assert_eq!(app.throw_log_len(), AppState::THROW_LOG_CAP);
        let newest = app.throw_log_page().next().unwrap_or_default();
        assert!(newest.starts_with(&format!("#{total} ")), "{newest}");
        for _ in 0..total {
            let _ = app.handle_input(InputAction::LogUp);
        }
        let max_offset = AppState::THROW_LOG_CAP - AppState::LOG_PAGE_SIZE;
        assert_eq!(app.log_offset(), max_offset);
        let oldest = app.throw_log_page().last().unwrap_or_default();
        assert!(oldest.starts_with("#26 "), "{oldest}");
    }
}
