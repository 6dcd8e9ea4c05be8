//! Search screen rendering
//!
//! Renders the whole widget: the country/city/unit form, the status line,
//! the weather card drawn over the temperature band's gradient colors, the
//! favorites list, and the key-hint footer.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::app::{App, Focus};
use crate::display::{convert, TempBand, Unit};

/// Renders the search screen
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),  // Form
            Constraint::Length(1),  // Status line
            Constraint::Length(9),  // Weather card
            Constraint::Min(4),     // Favorites
            Constraint::Length(1),  // Footer
        ])
        .split(area);

    render_form(frame, app, chunks[0]);
    render_status(frame, app, chunks[1]);
    render_weather_card(frame, app, chunks[2]);
    render_favorites(frame, app, chunks[3]);
    render_footer(frame, chunks[4]);
}

/// Style for a field label depending on focus
fn label_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    }
}

/// Renders the country/city/unit form
fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let country_line = {
        let mut spans = vec![Span::styled(
            "Country: ",
            label_style(app.focus == Focus::Country),
        )];
        match app.selected_country() {
            Some(country) => {
                spans.push(Span::raw(country.name));
                spans.push(Span::styled(
                    format!("  [{}]", country.code),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            None => spans.push(Span::styled(
                "↑/↓ to select",
                Style::default().fg(Color::DarkGray),
            )),
        }
        Line::from(spans)
    };

    let city_line = {
        let mut spans = vec![Span::styled(
            "City:    ",
            label_style(app.focus == Focus::City),
        )];
        if app.city.is_empty() && app.focus != Focus::City {
            spans.push(Span::styled(
                "type a city name",
                Style::default().fg(Color::DarkGray),
            ));
        } else {
            spans.push(Span::raw(app.city.clone()));
        }
        if app.focus == Focus::City {
            spans.push(Span::styled("▏", Style::default().fg(Color::Yellow)));
        }
        Line::from(spans)
    };

    let unit_line = Line::from(vec![
        Span::styled("Unit:    ", Style::default().fg(Color::Gray)),
        Span::raw(app.unit.symbol()),
        Span::styled("  (Ctrl-U toggles)", Style::default().fg(Color::DarkGray)),
    ]);

    let block = Block::default()
        .title(" clima · weather lookup ")
        .borders(Borders::ALL);

    let paragraph = Paragraph::new(vec![country_line, city_line, unit_line]).block(block);
    frame.render_widget(paragraph, area);
}

/// Renders the loading/error status line
fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let line = if app.loading {
        Line::from(Span::styled(
            " Fetching weather...",
            Style::default().fg(Color::Cyan),
        ))
    } else if let Some(error) = &app.error {
        Line::from(Span::styled(
            format!(" ⚠ {error}"),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from("")
    };

    frame.render_widget(Paragraph::new(line), area);
}

/// Text color that stays readable over a band's gradient
fn card_text_color(band: TempBand) -> Color {
    match band {
        TempBand::Mild | TempBand::Warm | TempBand::Hot => Color::Black,
        _ => Color::White,
    }
}

/// Formats a Celsius temperature in the current display unit
fn format_temp(temp_c: f64, unit: Unit) -> String {
    format!("{:.1}{}", convert(temp_c, unit), unit.symbol())
}

/// Renders the current-conditions card
///
/// The card fill uses the band's first gradient stop and the border the
/// second.
fn render_weather_card(frame: &mut Frame, app: &App, area: Rect) {
    let Some(weather) = &app.weather else {
        let block = Block::default().title(" Current Conditions ").borders(Borders::ALL);
        let paragraph = Paragraph::new(Line::from(Span::styled(
            "No weather yet: pick a country, type a city, press Enter",
            Style::default().fg(Color::DarkGray),
        )))
        .block(block)
        .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
        return;
    };

    let band = app
        .band
        .unwrap_or_else(|| TempBand::for_celsius(weather.temp_c));
    let [gradient_from, gradient_to] = band.gradient();
    let text_color = card_text_color(band);

    let block = Block::default()
        .title(format!(" Current Conditions · {} ", band.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(gradient_to))
        .style(Style::default().bg(gradient_from).fg(text_color));

    let unit = app.unit;
    let lines = vec![
        Line::from(Span::styled(
            format!("{}, {}", weather.city, weather.country_code),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(weather.condition_text.clone()),
        Line::from(Span::styled(
            format!("🌡 {}", format_temp(weather.temp_c, unit)),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(
            "🔽 Min: {}   🔼 Max: {}",
            format_temp(weather.temp_min_c, unit),
            format_temp(weather.temp_max_c, unit),
        )),
        Line::from(format!(
            "💨 Feels like: {}   💧 Humidity: {}%",
            format_temp(weather.feels_like_c, unit),
            weather.humidity,
        )),
        Line::from(format!("⚖ Pressure: {} hPa", weather.pressure_hpa)),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Renders the saved favorites list
fn render_favorites(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Favorites;
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let block = Block::default()
        .title(" Favorites ")
        .borders(Borders::ALL)
        .border_style(border_style);

    if app.favorites.is_empty() {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            "No favorites saved yet (Ctrl-S saves the current city)",
            Style::default().fg(Color::DarkGray),
        )))
        .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = app
        .favorites
        .entries()
        .iter()
        .map(|entry| ListItem::new(format!("{}, {}", entry.city, entry.country)))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▸ ");

    let mut state = ListState::default();
    state.select(Some(app.favorite_index));
    frame.render_stateful_widget(list, area, &mut state);
}

/// Renders the key-hint footer
fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Line::from(Span::styled(
        " Tab focus · Enter search · Ctrl-U units · Ctrl-S save · Ctrl-D remove · ? help · Esc quit",
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(Paragraph::new(footer), area);
}
