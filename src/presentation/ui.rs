use crate::application::{App, AppMode, Page};
use crate::domain::{DisplayColor, LayoutProps, HISTORY_CAPACITY};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

const SIDEBAR_LINKS: [&str; 3] = ["Link 1", "Link 2", "Link 3"];

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    match app.page {
        Page::Counter => render_counter_page(f, app, chunks[1]),
        Page::Layout => render_layout_page(f, &app.layout, chunks[1]),
    }
    render_status_bar(f, app, chunks[2]);

    if matches!(app.mode, AppMode::Help) {
        render_help_popup(f, app.help_scroll);
    }
}

/// Foreground style for the counter value.
pub fn display_style(color: DisplayColor) -> Style {
    match color {
        DisplayColor::Black => Style::default(),
        DisplayColor::Blue => Style::default().fg(Color::Blue),
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let page = match app.page {
        Page::Counter => "Counter",
        Page::Layout => "Layout",
    };
    let header = Paragraph::new(format!("tcounter - Terminal Counter | Page: {}", page))
        .style(Style::default().fg(Color::Cyan));
    f.render_widget(header, area);
}

fn render_counter_page(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    let snapshot = &app.snapshot;

    let display = Paragraph::new(format!("Current value: {}", snapshot.count))
        .style(display_style(snapshot.color).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL).title("Interactive counter"));
    f.render_widget(display, chunks[0]);

    render_step_input(f, app, chunks[1]);

    let step = snapshot.step;
    let buttons = Line::from(vec![
        Span::styled("[-]", Style::default().fg(Color::Yellow)),
        Span::raw(format!(" Decrement (-{})  ", step)),
        Span::styled("[+]", Style::default().fg(Color::Yellow)),
        Span::raw(format!(" Increment (+{})  ", step)),
        Span::styled("[r]", Style::default().fg(Color::Yellow)),
        Span::raw(" Reset  "),
        Span::styled("[c]", Style::default().fg(Color::Yellow)),
        Span::raw(" Toggle color"),
    ]);
    let controls = Paragraph::new(buttons).block(Block::default().borders(Borders::ALL).title("Controls"));
    f.render_widget(controls, chunks[2]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[3]);

    let items: Vec<ListItem> = snapshot
        .history
        .iter()
        .map(|value| ListItem::new(value.to_string()))
        .collect();
    let history = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("History (last {})", HISTORY_CAPACITY)),
    );
    f.render_widget(history, bottom[0]);

    let secondary = Paragraph::new(vec![
        Line::from(format!("Value: {}", app.secondary.count())),
        Line::from(""),
        Line::from(vec![
            Span::styled("[[]", Style::default().fg(Color::Yellow)),
            Span::raw(" -1  "),
            Span::styled("[]]", Style::default().fg(Color::Yellow)),
            Span::raw(" +1"),
        ]),
    ])
    .block(Block::default().borders(Borders::ALL).title("Second counter"));
    f.render_widget(secondary, bottom[1]);
}

fn render_step_input(f: &mut Frame, app: &App, area: Rect) {
    let editing = matches!(app.mode, AppMode::EditingStep);
    let border_style = if editing {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };
    let input = Paragraph::new(app.step_input.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title("Step (min 1)"),
    );
    f.render_widget(input, area);

    if editing {
        let offset = app.step_input[..app.cursor_position].chars().count() as u16;
        let x = (area.x + 1 + offset).min(area.x + area.width.saturating_sub(2));
        f.set_cursor_position((x, area.y + 1));
    }
}

fn render_layout_page(f: &mut Frame, props: &LayoutProps, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    render_layout_header(f, &props.menu_items, rows[0]);

    let container = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25), Constraint::Percentage(75)])
        .split(rows[1]);

    let links: Vec<ListItem> = SIDEBAR_LINKS
        .iter()
        .map(|link| ListItem::new(Span::styled(*link, Style::default().fg(Color::LightBlue))))
        .collect();
    let sidebar = List::new(links).block(Block::default().borders(Borders::ALL).title("Sidebar"));
    f.render_widget(sidebar, container[0]);

    render_layout_main(f, &props.page_title, container[1]);

    let footer = Paragraph::new("© All rights reserved")
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL).title("Footer"));
    f.render_widget(footer, rows[2]);
}

fn render_layout_header(f: &mut Frame, menu_items: &[String], area: Rect) {
    let mut menu = Vec::with_capacity(menu_items.len() * 2);
    for (index, item) in menu_items.iter().enumerate() {
        if index > 0 {
            menu.push(Span::raw(" | "));
        }
        menu.push(Span::styled(item.as_str(), Style::default().fg(Color::LightBlue)));
    }

    let header = Paragraph::new(vec![
        Line::from(Span::styled("Logo", Style::default().add_modifier(Modifier::BOLD))),
        Line::from(menu),
    ])
    .block(Block::default().borders(Borders::ALL).title("Header"));
    f.render_widget(header, area);
}

fn render_layout_main(f: &mut Frame, title: &str, area: Rect) {
    let main = Paragraph::new(vec![
        Line::from(Span::styled(title, Style::default().add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from("This is the first paragraph of the main content."),
        Line::from("This is the second paragraph with more information."),
        Line::from(""),
        Line::from(Span::styled("[image: example picture 400x400]", Style::default().fg(Color::DarkGray))),
    ])
    .wrap(Wrap { trim: false })
    .block(Block::default().borders(Borders::ALL).title("Main"));
    f.render_widget(main, area);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let input_text = match app.mode {
        AppMode::Normal => {
            if let Some(ref status) = app.status_message {
                status.clone()
            } else {
                match app.page {
                    Page::Counter => "+/-: change | r: reset | c: color | s: step | [/]: second counter | Tab: layout | F1/?: help | q: quit".to_string(),
                    Page::Layout => "Tab: counter | F1/?: help | q: quit".to_string(),
                }
            }
        }
        AppMode::EditingStep => format!("Step: {} (Enter/Esc to finish)", app.step_input),
        AppMode::Help => "↑↓/jk: scroll | PgUp/PgDn: fast scroll | Home: top | Esc/q: close help".to_string(),
    };

    let status = Paragraph::new(input_text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(match app.mode {
            AppMode::Normal => Style::default(),
            AppMode::EditingStep => Style::default().fg(Color::Green),
            AppMode::Help => Style::default().fg(Color::Cyan),
        });
    f.render_widget(status, area);
}

fn help_popup_area(area: Rect) -> Rect {
    Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    }
}

/// Rows of help text that fit in the popup for a terminal of this size.
pub fn help_visible_rows(area: Rect) -> usize {
    help_popup_area(area).height.saturating_sub(2) as usize
}

pub fn help_line_count() -> usize {
    HELP_TEXT.lines().count()
}

fn render_help_popup(f: &mut Frame, scroll: usize) {
    let area = f.area();
    let popup_area = help_popup_area(area);

    f.render_widget(Clear, popup_area);

    let help_lines: Vec<&str> = HELP_TEXT.lines().collect();
    let visible_height = help_visible_rows(area);

    let start_line = scroll.min(help_lines.len().saturating_sub(visible_height));
    let end_line = (start_line + visible_height).min(help_lines.len());

    let visible_text = help_lines[start_line..end_line].join("\n");

    let help_widget = Paragraph::new(visible_text)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(format!("tcounter Help (Line {}/{})", start_line + 1, help_lines.len()))
            .style(Style::default().fg(Color::Cyan)))
        .style(Style::default().fg(Color::White));

    f.render_widget(help_widget, popup_area);
}

pub const HELP_TEXT: &str = r#"TCOUNTER KEY REFERENCE

=== COUNTER PAGE ===
+ = → l         Increment by the current step
- ← h           Decrement by the current step
r or 0          Reset the value to 0
c               Toggle the value color (black/blue)
s or Enter      Edit the step (minimum 1)
]               Second counter +1
[               Second counter -1

=== STEP INPUT ===
Digits          Step follows the field as you type
Backspace       Delete before the cursor
← →             Move the cursor
Enter/Esc       Leave the field
                Empty, non-numeric or values below 1 count as 1

=== HISTORY ===
The last 5 values are listed, most recent first.
Every increment, decrement and reset adds an entry.

=== PAGES ===
Tab             Switch between counter and layout pages

=== HELP NAVIGATION ===
↑↓ or j/k       Scroll help text up/down one line
Page Up/Down    Scroll help text up/down 5 lines
Home            Jump to top of help text
Esc/F1/?/q      Close this help window

q               Quit application"#;
