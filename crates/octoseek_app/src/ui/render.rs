use octoseek_core::{Notice, WidgetViewModel};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph};
use ratatui::Frame;
use throbber_widgets_tui::{Throbber, ThrobberState};

use super::input::QueryInput;
use super::layout;
use super::motion::MotionFrame;

/// Draws the whole widget for one frame.
pub fn draw(
    frame: &mut Frame,
    input: &mut QueryInput,
    view: &WidgetViewModel,
    motion: MotionFrame,
    selected: usize,
    throbber: &ThrobberState,
) {
    let areas = layout::widget_areas(frame.area(), motion.scale_y);

    input.set_block(input_block(view.loading, motion.pulse, throbber));
    input.render(frame, areas.input);

    if areas.results.height > 0 {
        render_results(frame, areas.results, view, motion, selected);
    } else if let Some(notice) = &view.notice {
        // The panel is retracted, so the notice takes the body's top line.
        let area = Rect {
            height: areas.body.height.min(1),
            ..areas.body
        };
        render_notice(frame, area, notice);
    }

    render_footer(frame, areas.footer, view, selected);
}

fn input_block(loading: bool, pulse: f32, throbber: &ThrobberState) -> Block<'static> {
    let mut title = Line::from(" octoseek ");
    if loading {
        let spinner = Throbber::default()
            .style(Style::default().fg(Color::Cyan))
            .throbber_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
        title.spans.push(spinner.to_symbol_span(throbber));
        title.spans
            .push(Span::styled("searching ", Style::default().fg(Color::Cyan)));
    }
    Block::bordered().title(title).border_style(pulse_style(pulse))
}

/// Border emphasis follows the pulse level in three coarse steps; a cell
/// terminal cannot glow, so the border brightens instead.
fn pulse_style(pulse: f32) -> Style {
    let color = if pulse < 0.25 {
        Color::DarkGray
    } else if pulse < 0.75 {
        Color::Gray
    } else {
        Color::White
    };
    Style::default().fg(color)
}

fn render_results(
    frame: &mut Frame,
    area: Rect,
    view: &WidgetViewModel,
    motion: MotionFrame,
    selected: usize,
) {
    let shown = motion.revealed_rows.min(view.rows.len());
    let items = view.rows[..shown]
        .iter()
        .map(|row| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    row.display_name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(format!("@{}", row.login), Style::default().fg(Color::DarkGray)),
                Span::raw("  "),
                Span::styled(
                    repositories_label(row.repository_count),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect::<Vec<_>>();

    let mut block = Block::bordered().border_style(Style::default().fg(Color::DarkGray));
    if let Some(total) = view.total {
        block = block.title(format!(" {} ", matches_label(total)));
    }

    let mut list_state = ListState::default();
    if shown > 0 {
        list_state.select(Some(selected.min(shown - 1)));
    }
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_notice(frame: &mut Frame, area: Rect, notice: &Notice) {
    let text = match notice {
        Notice::NoMatches { query } => format!("no matches for '{query}'"),
        Notice::SearchFailed { reason } => format!("search failed: {reason}"),
    };
    let paragraph = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )));
    frame.render_widget(paragraph, area);
}

fn render_footer(frame: &mut Frame, area: Rect, view: &WidgetViewModel, selected: usize) {
    let style = Style::default().fg(Color::DarkGray);
    let line = match view.rows.get(selected) {
        Some(row) => Line::from(vec![
            Span::styled(row.profile_url.clone(), style),
            Span::styled("  ·  ", style),
            Span::styled(row.avatar_url.clone(), style),
        ]),
        None => Line::from(Span::styled(
            "enter open profile · ctrl-u clear · esc quit",
            style,
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn repositories_label(count: u32) -> String {
    if count == 1 {
        "1 repo".to_string()
    } else {
        format!("{count} repos")
    }
}

fn matches_label(total: u32) -> String {
    if total == 1 {
        "1 user".to_string()
    } else {
        format!("{total} users")
    }
}
