use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table},
    Frame, Terminal,
};

use crate::app::App;
use crate::owm::WeatherSource;
use crate::weather::{Units, WeatherInfo};

const MISSING: &str = "--";

pub fn run_app<B: Backend, S: WeatherSource>(
    terminal: &mut Terminal<B>,
    app: &mut App<S>,
    interval: Duration,
) -> io::Result<()> {
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|f| ui(f, app))?;

        let timeout = interval.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char('r') => {
                        app.refresh();
                        last_tick = Instant::now();
                    }
                    KeyCode::Char('c') => app.reset_error(),
                    _ => {}
                }
            }
        }

        if last_tick.elapsed() >= interval {
            last_tick = Instant::now();
            app.refresh();
        }
    }
}

fn value_or_missing<T>(value: Option<T>, fmt: impl FnOnce(T) -> String) -> String {
    value.map(fmt).unwrap_or_else(|| MISSING.to_string())
}

fn format_wind(info: &WeatherInfo, units: Units) -> String {
    match (info.wind_speed, info.wind_direction, info.wind_deg) {
        (Some(speed), Some(dir), Some(deg)) => {
            format!("{speed:.1} {} {dir} ({deg:.0}°)", units.speed_suffix())
        }
        (Some(speed), _, _) => format!("{speed:.1} {}", units.speed_suffix()),
        _ => MISSING.to_string(),
    }
}

fn format_rain(info: &WeatherInfo) -> String {
    match (info.rain_1h, info.rain_3h) {
        (None, None) => MISSING.to_string(),
        (rain_1h, rain_3h) => format!(
            "{} mm/1h  {} mm/3h",
            value_or_missing(rain_1h, |r| format!("{r:.1}")),
            value_or_missing(rain_3h, |r| format!("{r:.1}")),
        ),
    }
}

fn conditions_rows(info: &WeatherInfo, units: Units) -> Vec<(&'static str, String)> {
    let temp = |t: f64| format!("{t:.1} {}", units.temperature_suffix());
    vec![
        (
            "Conditions",
            info.description.clone().unwrap_or_else(|| MISSING.to_string()),
        ),
        ("Temperature", value_or_missing(info.temperature, temp)),
        ("Feels like", value_or_missing(info.feels_like, temp)),
        (
            "Low / High",
            format!(
                "{} / {}",
                value_or_missing(info.temp_min, temp),
                value_or_missing(info.temp_max, temp)
            ),
        ),
        (
            "Humidity",
            value_or_missing(info.humidity, |h| format!("{h}%")),
        ),
        ("Wind", format_wind(info, units)),
        ("Rain", format_rain(info)),
        (
            "Icon",
            info.icon_url.clone().unwrap_or_else(|| MISSING.to_string()),
        ),
    ]
}

fn display_current_conditions(info: Option<&WeatherInfo>, units: Units) -> Table<'static> {
    let current_block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            " Current Conditions ",
            Style::default().fg(Color::Yellow),
        ))
        .title_alignment(Alignment::Left)
        .border_style(Style::default().fg(Color::Cyan))
        .border_type(BorderType::Rounded);

    let mut rows = vec![Row::new(vec![Cell::from("")])];
    let fallback = WeatherInfo::default();
    for (label, value) in conditions_rows(info.unwrap_or(&fallback), units) {
        rows.push(Row::new(vec![
            Cell::from(format!(" {label}")),
            Cell::from(value).style(Style::default().fg(Color::Green)),
        ]));
    }

    Table::new(rows, [Constraint::Length(13), Constraint::Min(20)]).block(current_block)
}

fn display_headline<S: WeatherSource>(app: &App<S>) -> Paragraph<'static> {
    let city = app
        .weather
        .as_ref()
        .and_then(|w| w.city_name.clone())
        .unwrap_or_else(|| MISSING.to_string());
    let updated = app
        .updated
        .map(|date| format!(" Updated {}", date.format("%d-%m-%Y %H:%M")))
        .unwrap_or_else(|| format!(" Updated {MISSING}"));

    Paragraph::new(vec![
        Line::from(vec![
            Span::raw(" "),
            Span::styled(
                city,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(updated),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .border_type(BorderType::Rounded),
    )
}

fn display_status<S: WeatherSource>(app: &App<S>) -> Paragraph<'static> {
    let line = match app.error {
        Some(ref err) => Line::from(vec![
            Span::styled(format!(" {err}"), Style::default().fg(Color::Red)),
            Span::raw("  (c to dismiss)"),
        ]),
        None => Line::from(" q quit  r refresh"),
    };
    Paragraph::new(line)
}

fn ui<S: WeatherSource>(f: &mut Frame, app: &App<S>) {
    let vert_layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    f.render_widget(display_headline(app), vert_layout[0]);
    f.render_widget(
        display_current_conditions(app.weather.as_ref(), app.units),
        vert_layout[1],
    );
    f.render_widget(display_status(app), vert_layout[2]);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info() -> WeatherInfo {
        WeatherInfo {
            city_name: Some("Madison".to_string()),
            description: Some("light rain".to_string()),
            temperature: Some(61.26),
            humidity: Some(82),
            wind_speed: Some(9.2),
            wind_deg: Some(225.0),
            wind_direction: Some("SW"),
            rain_3h: Some(1.5),
            icon_url: Some("https://openweathermap.org/img/wn/10d@2x.png".to_string()),
            ..WeatherInfo::default()
        }
    }

    #[test]
    fn test_format_wind() {
        assert_eq!(format_wind(&info(), Units::Imperial), "9.2 mph SW (225°)");
        let calm = WeatherInfo {
            wind_speed: Some(0.0),
            ..WeatherInfo::default()
        };
        assert_eq!(format_wind(&calm, Units::Metric), "0.0 m/s");
        assert_eq!(format_wind(&WeatherInfo::default(), Units::Metric), MISSING);
    }

    #[test]
    fn test_format_rain() {
        assert_eq!(format_rain(&info()), "-- mm/1h  1.5 mm/3h");
        assert_eq!(format_rain(&WeatherInfo::default()), MISSING);
    }

    #[test]
    fn test_conditions_rows() {
        let rows = conditions_rows(&info(), Units::Metric);
        assert_eq!(rows[0], ("Conditions", "light rain".to_string()));
        assert_eq!(rows[1], ("Temperature", "61.3 °C".to_string()));
        assert_eq!(rows[2], ("Feels like", MISSING.to_string()));
        assert_eq!(rows[3], ("Low / High", "-- / --".to_string()));
        assert_eq!(rows[4], ("Humidity", "82%".to_string()));
        assert_eq!(
            rows[7],
            (
                "Icon",
                "https://openweathermap.org/img/wn/10d@2x.png".to_string()
            )
        );
    }
}
