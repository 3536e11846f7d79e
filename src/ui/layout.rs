// src/ui/layout.rs

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Defines the areas of the application's user interface.
///
/// The top strip holds the tab bar, the bottom line the footer, and the
/// middle is handed to whichever tab is active.
pub struct AppLayout {
    pub tabs: Rect,
    pub content: Rect,
    pub footer: Rect,
}

/// The two columns of the input tab: the text box and the sidebar.
pub struct InputLayout {
    pub editor: Rect,
    pub sidebar: Rect,
}

/// Creates the complete application layout.
///
/// # Arguments
/// * `frame_size` - The `Rect` representing the total size of the terminal frame.
pub fn create_layout(frame_size: Rect) -> AppLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame_size);

    AppLayout {
        tabs: main_chunks[0],
        content: main_chunks[1],
        footer: main_chunks[2],
    }
}

/// Splits the content area of the input tab: editor (2/3) and sidebar (1/3).
/// On narrow terminals the sidebar is dropped.
pub fn create_input_layout(content: Rect) -> InputLayout {
    if content.width < 80 {
        return InputLayout { editor: content, sidebar: Rect::default() };
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(2, 3), Constraint::Ratio(1, 3)])
        .split(content);

    InputLayout { editor: chunks[0], sidebar: chunks[1] }
}
