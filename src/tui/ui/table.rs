use crate::agents::{Action, AgentKind};
use crate::cards::{Card, Suit};
use crate::game::{Game, Phase};
use crate::seat::{Partnership, Seat};
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner, thirds};

pub(super) fn draw_table(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let header_height: u16 = 2 + 2;
    let status_height: u16 = 3 + 2;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Min(12),
            Constraint::Length(status_height),
        ])
        .split(size);

    let game = &app.game;
    let contract = game
        .contract()
        .map(|c| format!("{c}"))
        .unwrap_or_else(|| "--".to_string());
    let header_lines = vec![
        Line::from(format!(
            "Deal {}   Dealer: {}   Vul: {}   Contract: {}",
            game.deal_number(),
            game.dealer().name(),
            game.vulnerability().label(),
            contract,
        )),
        Line::from(format!(
            "Tricks NS {} EW {}   Totals NS {} EW {} ({} deals)",
            game.tricks_won(Partnership::NorthSouth),
            game.tricks_won(Partnership::EastWest),
            app.scoreboard.total(Partnership::NorthSouth),
            app.scoreboard.total(Partnership::EastWest),
            app.scoreboard.deals(),
        )),
    ];
    let header = Paragraph::new(header_lines)
        .block(Block::default().title("bridge-rs").borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    // Compass: North on top, South below, West and East either side of the centre.
    let rows = thirds(chunks[1], Direction::Vertical);
    let top = thirds(rows[0], Direction::Horizontal);
    let middle = thirds(rows[1], Direction::Horizontal);
    let bottom = thirds(rows[2], Direction::Horizontal);
    render_seat(f, top[1], app, Seat::North);
    render_seat(f, middle[0], app, Seat::West);
    render_seat(f, middle[2], app, Seat::East);
    render_seat(f, bottom[1], app, Seat::South);
    render_centre(f, middle[1], app);

    let status_area = chunks[2];
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), status_area);
    let status_inner = inner(status_area);
    let split = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(status_inner);

    let mut left_info: Vec<Line> = Vec::new();
    if !app.deal_started {
        left_info.push(Line::from("Press Space to deal."));
    } else {
        match (game.phase(), app.human_turn()) {
            (Phase::Complete, _) => left_info.push(Line::from("Deal over. Space for the next deal.")),
            (_, Some(seat)) => {
                left_info.push(Line::from(format!("Your turn ({})", seat.name())));
                left_info.push(choices_line(app));
            }
            (_, None) => {
                let waiting = game.to_act().map(|s| s.name()).unwrap_or("--");
                left_info.push(Line::from(format!("Waiting for {waiting}")));
            }
        }
    }
    if let Some(notice) = app.notice() {
        left_info.push(Line::from(Span::styled(
            notice.to_string(),
            Style::default().fg(Color::Green),
        )));
    }
    if let Some(err) = app.action_error() {
        left_info.push(Line::from(Span::styled(
            format!("Error: {err}"),
            Style::default().fg(Color::Red),
        )));
    }

    let right_keys = vec![
        Line::from("←/→ choose • Enter play"),
        Line::from("P pass • G hint"),
        Line::from("? help • H history • M menu"),
    ];
    let left_para = Paragraph::new(left_info).wrap(Wrap { trim: true });
    let right_para =
        Paragraph::new(right_keys).wrap(Wrap { trim: true }).alignment(Alignment::Right);
    f.render_widget(left_para, split[0]);
    f.render_widget(right_para, split[1]);

    if app.help_open() {
        draw_help(f);
    } else if app.history_open() {
        draw_history(f, app);
    }
}

fn action_label(action: Action) -> String {
    match action {
        Action::Call(call) => call.to_string(),
        Action::Play(card) => short_card(card),
    }
}

/// The human's options, windowed around the cursor.
fn choices_line(app: &AppState) -> Line<'static> {
    const WINDOW: usize = 12;
    let choices = app.choices();
    let selected = app.choice_index().min(choices.len().saturating_sub(1));
    let start = selected.saturating_sub(WINDOW / 2).min(choices.len().saturating_sub(WINDOW));
    let mut spans = vec![Span::raw("> ")];
    for (i, action) in choices.iter().enumerate().skip(start).take(WINDOW) {
        let style = if i == selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default()
        };
        spans.push(Span::styled(action_label(*action), style));
        spans.push(Span::raw(" "));
    }
    if start + WINDOW < choices.len() {
        spans.push(Span::styled("…", Style::default().add_modifier(Modifier::DIM)));
    }
    Line::from(spans)
}

fn seat_visible(app: &AppState, seat: Seat) -> bool {
    let game = &app.game;
    if matches!(game.phase(), Phase::Complete) {
        return true;
    }
    if seat == app.human_seat() {
        return true;
    }
    game.dummy_visible() && game.contract().is_some_and(|c| c.dummy() == seat)
}

fn render_seat(f: &mut Frame, area: Rect, app: &AppState, seat: Seat) {
    let game = &app.game;
    let mut title = seat.name().to_string();
    if seat == app.human_seat() {
        title.push_str(" (You)");
    } else if app.agents.agent_kind(seat) == Some(AgentKind::Bot) {
        title.push_str(" [BOT]");
    }
    if let Some(c) = game.contract() {
        if c.declarer() == seat {
            title.push_str(" [Declarer]");
        } else if c.dummy() == seat {
            title.push_str(" [Dummy]");
        }
    }
    if game.dealer() == seat && matches!(game.phase(), Phase::Bidding) {
        title.push_str(" [D]");
    }
    let on_turn = app.deal_started && game.to_act() == Some(seat);
    if on_turn {
        title.push_str(" [Act]");
    }
    let mut block = Block::default().title(title).borders(Borders::ALL);
    if on_turn && game.controller_of(seat) == app.human_seat() {
        block = block.border_style(Style::default().fg(Color::Magenta));
    } else if on_turn {
        block = block.border_style(Style::default().fg(Color::Yellow));
    } else if seat == app.human_seat() {
        block = block.border_style(Style::default().fg(Color::Cyan));
    }
    f.render_widget(block, area);

    let hand = if matches!(game.phase(), Phase::Complete) {
        game.dealt_hand(seat)
    } else {
        game.hand(seat)
    };
    let selected = match app.selected_choice() {
        Some(Action::Play(card)) if app.human_turn() == Some(seat) => Some(card),
        _ => None,
    };
    let lines: Vec<Line> = if app.deal_started && seat_visible(app, seat) {
        Suit::BY_PRIORITY
            .iter()
            .map(|&suit| {
                let (glyph, style) = suit_glyph_and_style(suit);
                let mut spans = vec![Span::styled(format!("{glyph} "), style)];
                let mut any = false;
                for card in hand.cards_in(suit).rev() {
                    let text = format!("{} ", rank_str(card));
                    if Some(card) == selected {
                        spans.push(Span::styled(
                            text,
                            Style::default().fg(Color::Yellow).add_modifier(Modifier::REVERSED),
                        ));
                    } else {
                        spans.push(Span::raw(text));
                    }
                    any = true;
                }
                if !any {
                    spans.push(Span::styled("-", Style::default().add_modifier(Modifier::DIM)));
                }
                Line::from(spans)
            })
            .collect()
    } else {
        vec![Line::from(Span::styled(
            format!("{} cards", hand.len()),
            Style::default().add_modifier(Modifier::DIM),
        ))]
    };
    f.render_widget(Paragraph::new(lines), inner(area));
}

fn render_centre(f: &mut Frame, area: Rect, app: &AppState) {
    let game = &app.game;
    let (title, lines) = match game.phase() {
        Phase::Bidding | Phase::Void => ("Auction", auction_lines(game)),
        Phase::Playing => ("Trick", trick_lines(game)),
        Phase::Complete => {
            let mut lines = Vec::new();
            if let Some(score) = game.score() {
                lines.push(Line::from(format!("{}", score.contract)));
                lines.push(Line::from(format!("Declarer took {} tricks", score.tricks_won)));
                let result = score.result();
                lines.push(Line::from(if result >= 0 {
                    format!("Made (+{result})")
                } else {
                    format!("Down {}", -result)
                }));
                lines.push(Line::from(score.summary()));
            }
            ("Result", lines)
        }
    };
    let block = Block::default().title(title).borders(Borders::ALL);
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner(area));
}

/// Calls laid out in N E S W columns, starting under the dealer.
fn auction_lines(game: &Game) -> Vec<Line<'static>> {
    let header = Seat::ALL.iter().map(|s| format!("{:<5}", s.to_char())).collect::<String>();
    let mut lines = vec![Line::from(Span::styled(
        header,
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    let mut row = "     ".repeat(game.dealer().index());
    let mut col = game.dealer().index();
    for entry in game.auction().entries() {
        row.push_str(&format!("{:<5}", entry.call.to_string()));
        col += 1;
        if col == 4 {
            lines.push(Line::from(std::mem::take(&mut row)));
            col = 0;
        }
    }
    if !row.is_empty() {
        lines.push(Line::from(row));
    }
    lines
}

fn trick_lines(game: &Game) -> Vec<Line<'static>> {
    let current = game.current_trick();
    let (trick, label) = match (current.is_empty(), game.last_trick()) {
        (true, Some(last)) => (&last.trick, format!("Last trick: {}", last.winner.name())),
        _ => (current, String::new()),
    };
    let cell = |seat: Seat| -> Span<'static> {
        match trick.card_of(seat) {
            Some(card) => {
                let (_, style) = suit_glyph_and_style(card.suit());
                Span::styled(short_card(card), style)
            }
            None => Span::styled("--", Style::default().add_modifier(Modifier::DIM)),
        }
    };
    vec![
        Line::from(cell(Seat::North)),
        Line::from(vec![cell(Seat::West), Span::raw("        "), cell(Seat::East)]),
        Line::from(cell(Seat::South)),
        Line::from(Span::styled(label, Style::default().add_modifier(Modifier::DIM))),
    ]
}

fn draw_history(f: &mut Frame, app: &AppState) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("History").borders(Borders::ALL);
    let mut lines: Vec<Line> = Vec::new();
    let entries = app.game.history_recent_offset(AppState::HISTORY_PAGE_SIZE, app.history_offset());
    if entries.is_empty() {
        lines.push(Line::from("No history yet."));
    } else {
        for entry in entries {
            lines.push(Line::from(format!(
                "{} {} [{}]",
                entry.seat.name(),
                entry.event,
                entry.phase.label()
            )));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Up/Down scroll • Close: H or Esc",
        Style::default().add_modifier(Modifier::DIM),
    )));
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn draw_help(f: &mut Frame) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let lines = vec![
        Line::from(Span::styled("Table:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- Space: deal / next deal"),
        Line::from("- Left / Right or [ / ]: move through your options"),
        Line::from("- Enter: make the selected call or play"),
        Line::from("- P: pass"),
        Line::from("- G: move the cursor to the suggested action"),
        Line::from("- H: history"),
        Line::from(""),
        Line::from("As declarer you also play dummy's cards."),
        Line::from(""),
        Line::from(Span::styled("Menu:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- M: open / close menu"),
        Line::from("- Up / Down: move selection"),
        Line::from("- + / -: adjust value"),
        Line::from("- Enter: apply"),
        Line::from("- Esc: cancel"),
        Line::from("- Q: quit"),
        Line::from(""),
        Line::from("Close help: ? or Esc"),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn suit_glyph_and_style(s: Suit) -> (char, Style) {
    let color = if s.is_red() { Color::Red } else { Color::White };
    (s.symbol(), Style::default().fg(color))
}

fn rank_str(c: Card) -> String {
    match c.rank() {
        crate::cards::Rank::Ten => "10".to_string(),
        r => r.to_char().to_string(),
    }
}

fn short_card(c: Card) -> String {
    format!("{}{}", rank_str(c), c.suit().symbol())
}
