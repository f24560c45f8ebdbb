use crate::application::{App, AppMode, Page};
use crate::presentation::ui::help_line_count;
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        match app.mode {
            AppMode::Normal => Self::handle_normal_mode(app, key, modifiers),
            AppMode::EditingStep => Self::handle_step_input_mode(app, key, modifiers),
            AppMode::Help => Self::handle_help_mode(app, key),
        }
    }

    fn handle_normal_mode(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) {
            return;
        }

        app.status_message = None;

        match key {
            KeyCode::Tab => {
                app.switch_page();
                return;
            }
            KeyCode::F(1) | KeyCode::Char('?') => {
                app.open_help();
                return;
            }
            KeyCode::Char('q') => {
                // Will be handled by main loop
                return;
            }
            _ => {}
        }

        if app.page != Page::Counter {
            return;
        }

        match key {
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right | KeyCode::Char('l') => {
                app.increment();
            }
            KeyCode::Char('-') | KeyCode::Left | KeyCode::Char('h') => {
                app.decrement();
            }
            KeyCode::Char('r') | KeyCode::Char('0') => {
                app.reset();
            }
            KeyCode::Char('c') => {
                app.toggle_color();
            }
            KeyCode::Char('s') | KeyCode::Enter => {
                app.start_step_edit();
            }
            KeyCode::Char(']') => {
                app.secondary_increment();
            }
            KeyCode::Char('[') => {
                app.secondary_decrement();
            }
            _ => {}
        }
    }

    fn handle_step_input_mode(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) {
            return;
        }

        match key {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Tab => {
                app.finish_step_edit();
            }
            KeyCode::Backspace => {
                app.delete_step_char_before_cursor();
            }
            KeyCode::Left => {
                app.move_step_cursor_left();
            }
            KeyCode::Right => {
                app.move_step_cursor_right();
            }
            KeyCode::Home => {
                app.cursor_position = 0;
            }
            KeyCode::End => {
                app.cursor_position = app.step_input.len();
            }
            KeyCode::Char(c) => {
                app.insert_step_char(c);
            }
            _ => {}
        }
    }

    fn handle_help_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                app.close_help();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                app.scroll_help_up(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.scroll_help_down(1, help_line_count());
            }
            KeyCode::PageUp => {
                app.scroll_help_up(5);
            }
            KeyCode::PageDown => {
                app.scroll_help_down(5, help_line_count());
            }
            KeyCode::Home => {
                app.help_scroll = 0;
            }
            _ => {}
        }
    }
}
