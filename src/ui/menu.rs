//! Menu screens and pointer hit-testing
//!
//! The menu owns only presentation state (hover position, whether the
//! instructions page is open, its scroll offset). Anything that changes the
//! game is handed back as a [`MenuAction`] for the next tick.

use glam::Vec2;

use super::hud::TEXT_COLOR;
use crate::renderer::{Anchor, Canvas, Color, DrawContext, Fill};
use crate::sim::{GamePhase, MenuAction};

pub const BUTTON_WIDTH: f32 = 300.0;
pub const BUTTON_HEIGHT: f32 = 60.0;
pub const BUTTON_MARGIN: f32 = 20.0;
/// Pixels moved per scroll step on the instructions page
pub const SCROLL_STEP: f32 = 20.0;

const FONT_TITLE: f32 = 72.0;
const FONT_BUTTON: f32 = 48.0;
const FONT_HEADER: f32 = 32.0;
const FONT_BODY: f32 = 24.0;

const TITLE_COLOR: Color = Color::rgb(255, 255, 0);
const GOLD: Color = Color::rgb(255, 215, 0);
const BODY_COLOR: Color = Color::rgb(200, 200, 200);
const BUTTON_COLOR: Color = Color::rgb(100, 100, 100);
const BUTTON_HOVER: Color = Color::rgb(150, 150, 150);
const OVERLAY: Color = Color::rgb(30, 60, 90).with_alpha(200);
const INSTRUCTIONS_BACKGROUND: Color = Color::rgb(15, 25, 40);
const BACK_COLOR: Color = Color::rgb(50, 70, 90);
const BACK_HOVER: Color = Color::rgb(70, 90, 110);

/// Line spacing on the instructions page
const INSTRUCTION_LINE: f32 = 36.0;

/// Instructions page body: (is_header, text)
const INSTRUCTIONS: &[(bool, &str)] = &[
    (true, "Objective"),
    (false, "Sink every enemy ship using ricochet shots"),
    (false, "while dodging their cannon fire."),
    (true, "Controls"),
    (false, "WASD - Move your ship"),
    (false, "Arrow Keys - Aim your turret"),
    (false, "Spacebar - Fire cannonball"),
    (false, "ESC - Pause game / Open menu"),
    (true, "Strategy"),
    (false, "Bounce shots off obstacles and walls to hit around corners"),
    (false, "You and every enemy can take 3 hits"),
    (false, "Clearing a level awards a bonus"),
    (false, "Only two of your cannonballs can be afloat at once"),
    (false, "Stay mobile to avoid enemy fire"),
    (false, "Watch enemy turret rotation patterns"),
];

/// What a button does when clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Forward to the simulation
    Action(MenuAction),
    ShowInstructions,
    CloseInstructions,
}

/// A clickable, axis-aligned button
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub label: &'static str,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub choice: Choice,
}

impl Button {
    /// Centered horizontally on `center_x` with its top edge at `y`
    fn centered(label: &'static str, center_x: f32, y: f32, size: Vec2, choice: Choice) -> Self {
        Self {
            label,
            pos: Vec2::new(center_x - (size.x / 2.0).floor(), y),
            size,
            choice,
        }
    }

    /// Hit test; left/top edges inclusive, right/bottom exclusive
    pub fn contains(&self, p: Vec2) -> bool {
        self.pos.x <= p.x
            && p.x < self.pos.x + self.size.x
            && self.pos.y <= p.y
            && p.y < self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }
}

/// Menu presentation state
#[derive(Debug, Clone, Default)]
pub struct Menu {
    /// Last known pointer position, for hover highlighting
    pub pointer: Vec2,
    pub instructions_open: bool,
    pub scroll_offset: f32,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the instructions page can be showing in `phase`
    fn instructions_visible(&self, phase: GamePhase) -> bool {
        self.instructions_open && matches!(phase, GamePhase::MainMenu | GamePhase::Paused)
    }

    /// Buttons on screen for `phase`, top to bottom
    pub fn buttons(&self, phase: GamePhase, screen: Vec2) -> Vec<Button> {
        let center_x = (screen.x / 2.0).floor();
        let mid_y = (screen.y / 2.0).floor();
        let size = Vec2::new(BUTTON_WIDTH, BUTTON_HEIGHT);
        let stride = BUTTON_HEIGHT + BUTTON_MARGIN;

        if self.instructions_visible(phase) {
            let size = Vec2::new(
                (screen.x / 3.0).floor().min(BUTTON_WIDTH),
                (screen.y / 12.0).floor().min(BUTTON_HEIGHT),
            );
            let y = screen.y - (screen.y / 12.0).floor();
            return vec![Button::centered(
                "Back to Menu",
                center_x,
                y,
                size,
                Choice::CloseInstructions,
            )];
        }

        let column = |top: f32, entries: &[(&'static str, Choice)]| -> Vec<Button> {
            entries
                .iter()
                .enumerate()
                .map(|(i, &(label, choice))| {
                    Button::centered(label, center_x, top + i as f32 * stride, size, choice)
                })
                .collect()
        };

        match phase {
            GamePhase::MainMenu => column(
                mid_y - 50.0,
                &[
                    ("Start Game", Choice::Action(MenuAction::StartGame)),
                    ("Instructions", Choice::ShowInstructions),
                    ("Quit Game", Choice::Action(MenuAction::Quit)),
                ],
            ),
            GamePhase::Paused => column(
                mid_y - 80.0,
                &[
                    ("Resume Game", Choice::Action(MenuAction::Resume)),
                    ("Instructions", Choice::ShowInstructions),
                    ("Main Menu", Choice::Action(MenuAction::MainMenu)),
                ],
            ),
            GamePhase::LevelComplete => column(
                mid_y + 50.0,
                &[(
                    "Continue to Next Level",
                    Choice::Action(MenuAction::ContinueLevel),
                )],
            ),
            GamePhase::Playing | GamePhase::GameOver => Vec::new(),
        }
    }

    /// Handle a click at `pointer`; page navigation is applied here,
    /// anything else is returned for the simulation.
    pub fn click(&mut self, phase: GamePhase, pointer: Vec2, screen: Vec2) -> Option<MenuAction> {
        self.pointer = pointer;
        let choice = self
            .buttons(phase, screen)
            .into_iter()
            .find(|b| b.contains(pointer))?
            .choice;

        match choice {
            Choice::Action(action) => {
                log::debug!("Menu action {:?}", action);
                Some(action)
            }
            Choice::ShowInstructions => {
                self.instructions_open = true;
                self.scroll_offset = 0.0;
                None
            }
            Choice::CloseInstructions => {
                self.instructions_open = false;
                None
            }
        }
    }

    /// Scroll the instructions page by whole steps (positive scrolls down)
    pub fn scroll(&mut self, steps: i32, screen: Vec2) {
        let max = (instructions_height() - screen.y * 0.6).max(0.0);
        self.scroll_offset = (self.scroll_offset + steps as f32 * SCROLL_STEP).clamp(0.0, max);
    }

    /// Drop page state that no longer applies after a phase change
    pub fn sync(&mut self, phase: GamePhase) {
        if self.instructions_open && !matches!(phase, GamePhase::MainMenu | GamePhase::Paused) {
            self.instructions_open = false;
            self.scroll_offset = 0.0;
        }
    }

    /// Draw whatever menu `phase` calls for (nothing while playing)
    pub fn draw(&self, canvas: &mut dyn Canvas, phase: GamePhase, ctx: &DrawContext) {
        let screen = ctx.tuning.screen();
        if self.instructions_visible(phase) {
            self.draw_instructions(canvas, screen);
            return;
        }

        let center_x = (screen.x / 2.0).floor();
        let (title, title_y) = match phase {
            GamePhase::MainMenu => ("Sea-Ping Warfare", (screen.y / 4.0).floor()),
            GamePhase::Paused => ("PAUSED", (screen.y / 3.0).floor()),
            GamePhase::LevelComplete => ("Level Complete!", (screen.y / 3.0).floor()),
            GamePhase::Playing | GamePhase::GameOver => return,
        };

        canvas.rect(Vec2::ZERO, screen, OVERLAY, Fill::Solid);
        canvas.text(
            title,
            Vec2::new(center_x, title_y),
            Anchor::Center,
            FONT_TITLE,
            TITLE_COLOR,
        );
        if phase == GamePhase::MainMenu {
            canvas.text(
                "Naval Combat Game",
                Vec2::new(center_x, title_y + 60.0),
                Anchor::Center,
                FONT_BUTTON,
                TEXT_COLOR,
            );
        }

        for button in self.buttons(phase, screen) {
            let fill = if button.contains(self.pointer) {
                BUTTON_HOVER
            } else {
                BUTTON_COLOR
            };
            canvas.rect(button.pos, button.size, fill, Fill::Solid);
            canvas.rect(button.pos, button.size, TEXT_COLOR, Fill::Outline(3.0));
            canvas.text(
                button.label,
                button.center(),
                Anchor::Center,
                FONT_BUTTON,
                TEXT_COLOR,
            );
        }
    }

    fn draw_instructions(&self, canvas: &mut dyn Canvas, screen: Vec2) {
        canvas.rect(Vec2::ZERO, screen, INSTRUCTIONS_BACKGROUND, Fill::Solid);

        let center_x = (screen.x / 2.0).floor();
        let top = (screen.y / 8.0).floor() - self.scroll_offset;
        canvas.text(
            "How to Play",
            Vec2::new(center_x, top),
            Anchor::Center,
            FONT_TITLE,
            GOLD,
        );

        let mut y = top + FONT_TITLE;
        for &(header, line) in INSTRUCTIONS {
            if header {
                y += INSTRUCTION_LINE / 2.0;
            }
            let (size, color) = if header {
                (FONT_HEADER, GOLD)
            } else {
                (FONT_BODY, BODY_COLOR)
            };
            canvas.text(line, Vec2::new(center_x, y), Anchor::Center, size, color);
            y += INSTRUCTION_LINE;
        }

        if instructions_height() > screen.y * 0.6 {
            canvas.text(
                "Use UP/DOWN or W/S to scroll",
                Vec2::new(center_x, screen.y - 40.0),
                Anchor::Center,
                FONT_BODY,
                Color::rgb(150, 150, 150),
            );
        }

        for button in self.buttons(GamePhase::MainMenu, screen) {
            let hovered = button.contains(self.pointer);
            let (fill, border) = if hovered {
                (BACK_HOVER, GOLD)
            } else {
                (BACK_COLOR, Color::rgb(120, 120, 120))
            };
            canvas.rect(button.pos, button.size, fill, Fill::Solid);
            canvas.rect(button.pos, button.size, border, Fill::Outline(2.0));
            canvas.text(
                button.label,
                button.center(),
                Anchor::Center,
                FONT_BODY,
                TEXT_COLOR,
            );
        }
    }
}

/// Height of the instructions content below the title
fn instructions_height() -> f32 {
    let headers = INSTRUCTIONS.iter().filter(|(header, _)| *header).count() as f32;
    FONT_TITLE + INSTRUCTIONS.len() as f32 * INSTRUCTION_LINE + headers * INSTRUCTION_LINE / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::DrawList;
    use crate::settings::Settings;
    use crate::tuning::Tuning;

    fn screen() -> Vec2 {
        Vec2::new(800.0, 600.0)
    }

    #[test]
    fn test_main_menu_layout() {
        let menu = Menu::new();
        let buttons = menu.buttons(GamePhase::MainMenu, screen());
        let labels: Vec<_> = buttons.iter().map(|b| b.label).collect();
        assert_eq!(labels, vec!["Start Game", "Instructions", "Quit Game"]);
        assert_eq!(buttons[0].pos, Vec2::new(250.0, 250.0));
        assert_eq!(buttons[1].pos.y, 330.0);
        assert_eq!(buttons[2].pos.y, 410.0);
    }

    #[test]
    fn test_pause_and_level_complete_layout() {
        let menu = Menu::new();
        let pause = menu.buttons(GamePhase::Paused, screen());
        assert_eq!(pause[0].pos.y, 220.0);
        assert_eq!(pause[2].label, "Main Menu");

        let done = menu.buttons(GamePhase::LevelComplete, screen());
        assert_eq!(done.len(), 1);
        assert_eq!(done[0].pos.y, 350.0);
        assert!(menu.buttons(GamePhase::Playing, screen()).is_empty());
    }

    #[test]
    fn test_click_resolves_actions() {
        let mut menu = Menu::new();
        let start = menu.click(GamePhase::MainMenu, Vec2::new(400.0, 280.0), screen());
        assert_eq!(start, Some(MenuAction::StartGame));

        let quit = menu.click(GamePhase::MainMenu, Vec2::new(260.0, 469.0), screen());
        assert_eq!(quit, Some(MenuAction::Quit));

        let cont = menu.click(GamePhase::LevelComplete, Vec2::new(400.0, 380.0), screen());
        assert_eq!(cont, Some(MenuAction::ContinueLevel));
    }

    #[test]
    fn test_click_edges() {
        let mut menu = Menu::new();
        // Top-left corner is inside, the far edges are not
        assert!(menu.click(GamePhase::MainMenu, Vec2::new(250.0, 250.0), screen()).is_some());
        assert!(menu.click(GamePhase::MainMenu, Vec2::new(550.0, 260.0), screen()).is_none());
        // Gap between buttons
        assert!(menu.click(GamePhase::MainMenu, Vec2::new(400.0, 315.0), screen()).is_none());
    }

    #[test]
    fn test_instructions_open_and_close() {
        let mut menu = Menu::new();
        let action = menu.click(GamePhase::Paused, Vec2::new(400.0, 330.0), screen());
        assert_eq!(action, None);
        assert!(menu.instructions_open);

        let buttons = menu.buttons(GamePhase::Paused, screen());
        assert_eq!(buttons.len(), 1);
        assert_eq!(buttons[0].size, Vec2::new(266.0, 50.0));
        assert_eq!(buttons[0].pos, Vec2::new(267.0, 550.0));

        // The buttons underneath are not clickable while the page is up
        assert_eq!(
            menu.click(GamePhase::Paused, Vec2::new(400.0, 250.0), screen()),
            None
        );
        menu.click(GamePhase::Paused, Vec2::new(400.0, 570.0), screen());
        assert!(!menu.instructions_open);
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut menu = Menu::new();
        menu.instructions_open = true;
        menu.scroll(-3, screen());
        assert_eq!(menu.scroll_offset, 0.0);
        menu.scroll(2, screen());
        assert_eq!(menu.scroll_offset, 40.0);
        menu.scroll(1000, screen());
        assert!(menu.scroll_offset <= instructions_height());
    }

    #[test]
    fn test_sync_closes_page_when_play_resumes() {
        let mut menu = Menu::new();
        menu.instructions_open = true;
        menu.scroll_offset = 60.0;
        menu.sync(GamePhase::Paused);
        assert!(menu.instructions_open);
        menu.sync(GamePhase::Playing);
        assert!(!menu.instructions_open);
        assert_eq!(menu.scroll_offset, 0.0);
    }

    #[test]
    fn test_hover_highlight() {
        let settings = Settings::default();
        let tuning = Tuning::default();
        let ctx = DrawContext {
            settings: &settings,
            tuning: &tuning,
        };
        let menu = Menu {
            pointer: Vec2::new(400.0, 280.0),
            ..Default::default()
        };
        let mut list = DrawList::new();
        menu.draw(&mut list, GamePhase::MainMenu, &ctx);
        assert!(list.has_text("Sea-Ping Warfare"));
        assert!(list.commands.iter().any(|cmd| matches!(
            cmd,
            crate::renderer::DrawCommand::Rect { color, .. } if *color == BUTTON_HOVER
        )));
    }
}
