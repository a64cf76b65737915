// Key handling, one match per input mode
use crate::app::{App, InputMode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use spacebio_core::Route;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    match app.input_mode {
        InputMode::Editing => handle_editing(app, key),
        InputMode::Filtering => handle_filtering(app, key),
        InputMode::Normal => handle_normal(app, key),
    }
}

fn handle_editing(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            app.input_mode = InputMode::Normal;
            app.submit_query();
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Char(c) => {
            if let Some(buf) = app.query_buffer() {
                buf.push(c);
            }
        }
        KeyCode::Backspace => {
            if let Some(buf) = app.query_buffer() {
                buf.pop();
            }
        }
        _ => {}
    }
}

fn handle_filtering(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('f') => app.toggle_filters(),
        KeyCode::Down | KeyCode::Char('j') => app.next_filter(),
        KeyCode::Up | KeyCode::Char('k') => app.previous_filter(),
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_condition(),
        KeyCode::Char('c') => app.clear_conditions(),
        _ => {}
    }
}

fn handle_normal(app: &mut App, key: KeyEvent) {
    // A paper popup captures everything except closing and opening the PDF
    if app.explore.paper.is_some() {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => app.close_paper(),
            KeyCode::Char('o') => app.open_paper_pdf(),
            KeyCode::Char('q') => app.quit(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Tab => app.next_link(),
        KeyCode::BackTab => app.previous_link(),
        KeyCode::Char('<') | KeyCode::Left => app.back(),
        KeyCode::Char('>') | KeyCode::Right => app.forward(),
        KeyCode::Char('/') => {
            if app.query_buffer().is_some() {
                app.input_mode = InputMode::Editing;
            }
        }
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(true),
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(false),
        KeyCode::Char('f') => app.toggle_filters(),
        KeyCode::Char('c') => app.clear_conditions(),
        KeyCode::Char(c @ '1'..='5') => {
            let idx = c as usize - '1' as usize;
            app.navigate(Route::ALL[idx].path());
        }
        _ => handle_view_key(app, key),
    }
}

fn handle_view_key(app: &mut App, key: KeyEvent) {
    match (app.route(), key.code) {
        (Route::Home, KeyCode::Enter) => app.search_popular(),
        (Route::Home, KeyCode::Char('e')) => app.navigate(Route::Explore.path()),
        (Route::Dashboard, KeyCode::Enter) => app.submit_dashboard(),
        (Route::Dashboard, KeyCode::Char('t')) => app.next_tab(),
        (Route::Dashboard, KeyCode::Char('s')) => app.next_suggestion(),
        (Route::Dashboard, KeyCode::Char('r')) => app.recheck_health(),
        (Route::Dashboard, KeyCode::Char('x')) => app.toggle_chunks(),
        (Route::Explore | Route::Organisms, KeyCode::Enter) => {
            if app.explore.selected_organism.is_some() {
                app.open_selected_paper();
            } else {
                app.open_selected_organism();
            }
        }
        (Route::Explore | Route::Organisms, KeyCode::Esc | KeyCode::Backspace) => {
            app.back_to_organisms();
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Command;
    use spacebio_core::Catalog;

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_typing_a_home_search_lands_on_dashboard() {
        let mut app = App::new("/", Catalog::seeded());
        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.input_mode, InputMode::Editing);

        type_text(&mut app, "yeastt");
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.route(), Route::Dashboard);
        assert_eq!(app.dashboard.query, "yeast");
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_q_while_editing_is_text() {
        let mut app = App::new("/", Catalog::seeded());
        press(&mut app, KeyCode::Char('/'));
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.home.input, "q");

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_back_and_forward_keys() {
        let mut app = App::new("/", Catalog::seeded());
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.route(), Route::Dashboard);

        press(&mut app, KeyCode::Char('<'));
        assert_eq!(app.route(), Route::Home);
        press(&mut app, KeyCode::Char('>'));
        assert_eq!(app.route(), Route::Dashboard);
    }

    #[test]
    fn test_number_keys_jump_to_links() {
        let mut app = App::new("/", Catalog::seeded());
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.route(), Route::About);
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.route(), Route::Explore);
    }

    #[test]
    fn test_paper_popup_captures_keys() {
        let mut app = App::new("/explore", Catalog::seeded());
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert!(app.explore.paper.is_some());

        // Tab would normally change route
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.route(), Route::Explore);

        press(&mut app, KeyCode::Char('o'));
        assert!(matches!(app.drain_commands().as_slice(), [Command::OpenUrl(_)]));

        press(&mut app, KeyCode::Esc);
        assert!(app.explore.paper.is_none());
    }

    #[test]
    fn test_filter_mode_toggles_conditions() {
        let mut app = App::new("/dashboard", Catalog::seeded());
        press(&mut app, KeyCode::Char('f'));
        assert_eq!(app.input_mode, InputMode::Filtering);

        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.dashboard.selected_conditions, ["Cosmic Radiation"]);
        press(&mut app, KeyCode::Char('c'));
        assert!(app.dashboard.selected_conditions.is_empty());

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert!(!app.dashboard.show_filters);
    }
}
