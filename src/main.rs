use std::io;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Clear, Paragraph};

use puck_terminal::filter_store::{ChartKind, FilterParams};
use puck_terminal::models::{HeadToHeadRow, SEASONS};
use puck_terminal::nav::{self, MAIN_NAV};
use puck_terminal::provider::spawn_provider;
use puck_terminal::settings_store::{SettingsStore, Theme};
use puck_terminal::state::{DashboardState, Delta, ProviderCommand, Screen, apply_delta};
use puck_terminal::storage::FileStorage;

struct App {
    state: DashboardState,
    settings: SettingsStore<FileStorage>,
    cmd_tx: mpsc::Sender<ProviderCommand>,
    should_quit: bool,
    // Profile name editing buffer; Some while an edit is in progress.
    name_edit: Option<String>,
}

impl App {
    fn new(cmd_tx: mpsc::Sender<ProviderCommand>, settings: SettingsStore<FileStorage>) -> Self {
        Self {
            state: DashboardState::new(),
            settings,
            cmd_tx,
            should_quit: false,
            name_edit: None,
        }
    }

    fn send(&mut self, cmd: ProviderCommand) {
        if self.cmd_tx.send(cmd).is_err() {
            self.state.push_log("[WARN] Fetch worker unavailable");
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        if self.name_edit.is_some() {
            self.on_edit_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.state.help_overlay = !self.state.help_overlay,
            KeyCode::Char(c @ '1'..='8') => {
                if let Some(screen) = nav::screen_for_key(c) {
                    self.enter_screen(screen);
                }
            }
            KeyCode::Char('r') => self.refresh_current(),
            KeyCode::Char('s') => self.cycle_season(),
            KeyCode::Char('c') => {
                self.state.filters.clear_filters();
                self.state.push_log("[INFO] Chart filters reset");
                self.refresh_current();
            }
            KeyCode::Char('p') => {
                if self.state.screen == Screen::HeadToHead {
                    self.state.next_head_to_head_pair();
                    self.request_head_to_head();
                }
            }
            KeyCode::Char('P') => {
                self.state.push_log("[INFO] Reloading player list");
                self.send(ProviderCommand::FetchPlayers { force: true });
            }
            KeyCode::Char('j') | KeyCode::Down => self.state.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.state.select_prev(),
            KeyCode::Enter => {
                if self.state.screen == Screen::DataGrid {
                    if let Some(player) = self.state.selected_player().map(str::to_string) {
                        self.state.stats_player = Some(player.clone());
                        self.state.stats_loading = true;
                        self.send(ProviderCommand::FetchStats {
                            player: Some(player),
                        });
                    }
                }
            }
            KeyCode::Char('b') | KeyCode::Esc => {
                if self.state.screen == Screen::DataGrid && self.state.stats_player.is_some() {
                    self.state.stats_player = None;
                    self.state.stats_loading = true;
                    self.send(ProviderCommand::FetchStats { player: None });
                }
            }
            KeyCode::Char('e') => {
                if self.state.screen == Screen::Profile {
                    self.name_edit = Some(self.settings.name().to_string());
                }
            }
            KeyCode::Char('t') => {
                if self.state.screen == Screen::Profile {
                    let theme = match self.settings.theme() {
                        Theme::Light => Theme::Dark,
                        Theme::Dark => Theme::Light,
                    };
                    let name = self.settings.name().to_string();
                    self.settings.set_attributes(name, theme);
                }
            }
            _ => {}
        }
    }

    fn on_edit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                if let Some(name) = self.name_edit.take() {
                    let theme = self.settings.theme();
                    self.settings.set_attributes(name, theme);
                    self.state.push_log("[INFO] Profile saved");
                }
            }
            KeyCode::Esc => {
                self.name_edit = None;
            }
            KeyCode::Backspace => {
                if let Some(buffer) = self.name_edit.as_mut() {
                    buffer.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(buffer) = self.name_edit.as_mut() {
                    buffer.push(c);
                }
            }
            _ => {}
        }
    }

    fn enter_screen(&mut self, screen: Screen) {
        self.state.screen = screen;
        let needs_fetch = match screen {
            Screen::DataGrid => self.state.stats.is_empty() && !self.state.stats_loading,
            Screen::TotalPoints => {
                self.state.total_points.is_empty() && !self.state.total_points_loading
            }
            Screen::Production => self.state.production.is_empty() && !self.state.production_loading,
            Screen::ShootingEfficiency => {
                self.state.shooting_efficiency.is_empty()
                    && !self.state.shooting_efficiency_loading
            }
            Screen::PerGameConsistency => {
                self.state.per_game_consistency.is_empty()
                    && !self.state.per_game_consistency_loading
            }
            Screen::ScoutingHeatmap => {
                self.state.scouting_heatmap.is_empty() && !self.state.scouting_heatmap_loading
            }
            Screen::HeadToHead => {
                self.state.head_to_head.is_empty() && !self.state.head_to_head_loading
            }
            Screen::Profile => false,
        };
        if needs_fetch {
            self.refresh_current();
        }
    }

    fn refresh_current(&mut self) {
        if let Some(chart) = self.state.screen.chart_kind() {
            let params = self.state.filters.get_filters(chart);
            self.set_chart_loading(chart);
            self.send(ProviderCommand::FetchChart { chart, params });
            return;
        }
        match self.state.screen {
            Screen::DataGrid => {
                self.state.stats_loading = true;
                let player = self.state.stats_player.clone();
                self.send(ProviderCommand::FetchStats { player });
            }
            Screen::ScoutingHeatmap => {
                self.state.scouting_heatmap_loading = true;
                self.send(ProviderCommand::FetchScoutingHeatmap);
            }
            Screen::HeadToHead => self.request_head_to_head(),
            _ => {}
        }
    }

    fn cycle_season(&mut self) {
        if let Some(chart) = self.state.screen.chart_kind() {
            let params = self.state.cycle_chart_season(chart);
            self.set_chart_loading(chart);
            self.send(ProviderCommand::FetchChart { chart, params });
        } else if self.state.screen == Screen::HeadToHead {
            self.state.cycle_head_to_head_season();
            self.request_head_to_head();
        }
    }

    fn set_chart_loading(&mut self, chart: ChartKind) {
        match chart {
            ChartKind::TotalPoints => self.state.total_points_loading = true,
            ChartKind::Production => self.state.production_loading = true,
            ChartKind::ShootingEfficiency => self.state.shooting_efficiency_loading = true,
            ChartKind::PerGameConsistency => self.state.per_game_consistency_loading = true,
        }
    }

    fn request_head_to_head(&mut self) {
        let Some(players) = self.state.head_to_head_players() else {
            self.state
                .push_log("[INFO] Head-to-head needs the player list first");
            return;
        };
        let params = FilterParams {
            season: self.state.head_to_head_season,
            players: Some(players),
        };
        self.state.head_to_head_loading = true;
        self.send(ProviderCommand::FetchHeadToHead { params });
    }

    fn accent(&self) -> Color {
        match self.settings.theme() {
            Theme::Light => Color::Blue,
            Theme::Dark => Color::Cyan,
        }
    }
}

fn main() -> io::Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let (delta_tx, delta_rx) = mpsc::channel();
    let (cmd_tx, cmd_rx) = mpsc::channel();
    spawn_provider(delta_tx, cmd_rx);

    let settings = SettingsStore::new(FileStorage::open_default());
    let mut app = App::new(cmd_tx, settings);
    app.state.stats_loading = true;
    app.send(ProviderCommand::FetchStats { player: None });
    app.send(ProviderCommand::FetchPlayers { force: false });

    let res = run_app(&mut terminal, &mut app, delta_rx);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("error: {err}");
    }
    Ok(())
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    rx: mpsc::Receiver<Delta>,
) -> io::Result<()> {
    let tick_rate = Duration::from_millis(250);
    let mut last_tick = Instant::now();

    loop {
        while let Ok(delta) = rx.try_recv() {
            apply_delta(&mut app.state, delta);
        }

        terminal.draw(|f| ui(f, app))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key);
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn ui(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(4),
            Constraint::Length(1),
        ])
        .split(frame.size());

    render_header(frame, chunks[0], app);

    match app.state.screen {
        Screen::DataGrid => render_data_grid(frame, chunks[1], app),
        Screen::TotalPoints => render_total_points(frame, chunks[1], app),
        Screen::Production => render_production(frame, chunks[1], app),
        Screen::ShootingEfficiency => render_shooting_efficiency(frame, chunks[1], app),
        Screen::PerGameConsistency => render_per_game_consistency(frame, chunks[1], app),
        Screen::ScoutingHeatmap => render_scouting_heatmap(frame, chunks[1], app),
        Screen::HeadToHead => render_head_to_head(frame, chunks[1], app),
        Screen::Profile => render_profile(frame, chunks[1], app),
    }

    let console = Paragraph::new(console_text(&app.state))
        .block(Block::default().title("Console").borders(Borders::ALL));
    frame.render_widget(console, chunks[2]);

    let footer = Paragraph::new(footer_text(app)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, chunks[3]);

    if app.state.help_overlay {
        render_help_overlay(frame, frame.size());
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let greeting = if app.settings.name().is_empty() {
        String::new()
    } else {
        format!(" | {}", app.settings.name())
    };
    let title = Line::from(vec![
        Span::styled(
            "PUCK TERMINAL",
            Style::default()
                .fg(app.accent())
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(greeting),
    ]);

    let mut strip = Vec::new();
    for (i, item) in MAIN_NAV.iter().enumerate() {
        if i > 0 {
            strip.push(Span::raw("  "));
        }
        let label = format!("{} {} {}", item.key, item.icon, item.display_name);
        let style = if item.screen == app.state.screen {
            Style::default()
                .fg(app.accent())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        strip.push(Span::styled(label, style));
    }

    let header = Paragraph::new(vec![title, Line::from(strip)]);
    frame.render_widget(header, area);
}

fn render_data_grid(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;
    let title = match &state.stats_player {
        Some(player) => format!("Data Grid — {player} (Esc for all)"),
        None => format!("Data Grid — {} rows", state.stats.len()),
    };
    let block = Block::default().title(title).borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height < 2 || inner.width == 0 {
        return;
    }

    if state.stats.is_empty() {
        render_empty_chart(frame, inner, state.stats_loading);
        return;
    }

    let mut lines = vec![Line::styled(
        format!(
            "{:<24}{:<5}{:<7}{:>4}{:>4}{:>4}{:>5}{:>6}{:>7}{:>8}{:>8}{:>7}",
            "Player", "Team", "Season", "GP", "G", "A", "P", "S", "S%", "TOI/G", "PTS/G", "Grade"
        ),
        Style::default().add_modifier(Modifier::BOLD),
    )];

    let visible = (inner.height as usize).saturating_sub(1);
    let (start, end) = visible_range(state.selected, state.stats.len(), visible);
    for idx in start..end {
        let stat = &state.stats[idx];
        let style = if idx == state.selected {
            Style::default().fg(Color::White).bg(Color::DarkGray)
        } else {
            Style::default()
        };
        lines.push(Line::styled(
            format!(
                "{:<24}{:<5}{:<7}{:>4}{:>4}{:>4}{:>5}{:>6}{:>7}{:>8}{:>8}{:>7}",
                clip(&stat.player_name, 23),
                stat.team,
                fmt_i32(stat.season),
                fmt_u32(stat.gp),
                fmt_u32(stat.goals),
                fmt_u32(stat.assists),
                fmt_u32(stat.points),
                fmt_u32(stat.shots),
                fmt_f64(stat.shooting_percentage),
                fmt_f64(stat.toi_per_game),
                fmt_f64(stat.points_per_game),
                fmt_u32(stat.scouting_grade),
            ),
            style,
        ));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_total_points(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;
    let season = state.filters.get_filters(ChartKind::TotalPoints).season;
    let block = Block::default()
        .title(format!("Total Points — {}", season_label(season)))
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    if state.total_points.is_empty() {
        render_empty_chart(frame, inner, state.total_points_loading);
        return;
    }

    let max_points = state
        .total_points
        .iter()
        .filter_map(|row| row.points)
        .max()
        .unwrap_or(1)
        .max(1);

    let bar_width = inner.width.saturating_sub(42).max(10) as usize;
    let mut lines = Vec::new();
    for row in state.total_points.iter().take(inner.height as usize) {
        let goals = row.goals.unwrap_or(0);
        let assists = row.assists.unwrap_or(0);
        let points = row.points.unwrap_or(goals + assists);
        let goal_cells = scale(goals, max_points, bar_width);
        let assist_cells = scale(assists, max_points, bar_width);

        lines.push(Line::from(vec![
            Span::raw(format!(
                "{:<24}{:>4}G{:>4}A{:>5}P ",
                clip(&row.player_name, 23),
                goals,
                assists,
                points
            )),
            Span::styled("█".repeat(goal_cells), Style::default().fg(Color::Green)),
            Span::styled("█".repeat(assist_cells), Style::default().fg(app.accent())),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_production(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;
    let season = state.filters.get_filters(ChartKind::Production).season;
    let block = Block::default()
        .title(format!("Production — {}", season_label(season)))
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    if state.production.is_empty() {
        render_empty_chart(frame, inner, state.production_loading);
        return;
    }

    let max_ppg = state
        .production
        .iter()
        .filter_map(|row| row.points_per_game)
        .fold(0.0_f64, f64::max)
        .max(0.01);

    let bar_width = inner.width.saturating_sub(52).max(10) as usize;
    let mut lines = vec![Line::styled(
        format!(
            "{:<24}{:<5}{:>8}{:>8}  PTS/G",
            "Player", "Team", "TOI/G", "PTS/G"
        ),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    for row in state
        .production
        .iter()
        .take((inner.height as usize).saturating_sub(1))
    {
        let ppg = row.points_per_game.unwrap_or(0.0);
        let cells = ((ppg / max_ppg) * bar_width as f64).round() as usize;
        lines.push(Line::from(vec![
            Span::raw(format!(
                "{:<24}{:<5}{:>8}{:>8}  ",
                clip(&row.player_name, 23),
                row.team,
                fmt_f64(row.toi_per_game),
                fmt_f64(row.points_per_game),
            )),
            Span::styled(
                "█".repeat(cells.min(bar_width)),
                Style::default().fg(app.accent()),
            ),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_shooting_efficiency(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;
    let season = state
        .filters
        .get_filters(ChartKind::ShootingEfficiency)
        .season;
    let block = Block::default()
        .title(format!("Shooting Efficiency — {}", season_label(season)))
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    if state.shooting_efficiency.is_empty() {
        render_empty_chart(frame, inner, state.shooting_efficiency_loading);
        return;
    }

    const BAR_WIDTH: u16 = 8;
    let max_bars = (inner.width / (BAR_WIDTH + 1)).max(1) as usize;
    let bars: Vec<Bar> = state
        .shooting_efficiency
        .iter()
        .take(max_bars)
        .map(|row| {
            let pct = (row.shooting_efficiency.unwrap_or(0.0) * 100.0).round() as u64;
            Bar::default()
                .value(pct)
                .label(Line::from(clip(&row.player_name, BAR_WIDTH as usize)))
                .text_value(format!("{pct}%"))
                .style(Style::default().fg(app.accent()))
        })
        .collect();

    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(BAR_WIDTH)
        .bar_gap(1)
        .max(100);
    frame.render_widget(chart, inner);
}

fn render_per_game_consistency(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;
    let season = state
        .filters
        .get_filters(ChartKind::PerGameConsistency)
        .season;
    let block = Block::default()
        .title(format!("Per Game Consistency — {}", season_label(season)))
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    if state.per_game_consistency.is_empty() {
        render_empty_chart(frame, inner, state.per_game_consistency_loading);
        return;
    }

    let mut lines = vec![Line::styled(
        format!(
            "{:<24}{:<5}{:>8}{:>8}{:>8}{:>8}",
            "Player", "Team", "G/G", "A/G", "S/G", "TOI/G"
        ),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    for row in state
        .per_game_consistency
        .iter()
        .take((inner.height as usize).saturating_sub(1))
    {
        lines.push(Line::raw(format!(
            "{:<24}{:<5}{:>8}{:>8}{:>8}{:>8}",
            clip(&row.player_name, 23),
            row.team,
            fmt_f64(row.goals_per_game),
            fmt_f64(row.assists_per_game),
            fmt_f64(row.shots_per_game),
            fmt_f64(row.toi_per_game),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_scouting_heatmap(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;
    let block = Block::default()
        .title("Scouting Heatmap — grade by season")
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    if state.scouting_heatmap.is_empty() {
        render_empty_chart(frame, inner, state.scouting_heatmap_loading);
        return;
    }

    // Players in first-appearance order, one row each, one cell per season.
    let mut order: Vec<&str> = Vec::new();
    for row in &state.scouting_heatmap {
        if !order.contains(&row.player_name.as_str()) {
            order.push(&row.player_name);
        }
    }

    let mut header = vec![Span::styled(
        format!("{:<24}", "Player"),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    for season in SEASONS {
        header.push(Span::styled(
            format!("{season:>6}"),
            Style::default().add_modifier(Modifier::BOLD),
        ));
    }
    let mut lines = vec![Line::from(header)];

    for player in order.iter().take((inner.height as usize).saturating_sub(1)) {
        let mut spans = vec![Span::raw(format!("{:<24}", clip(player, 23)))];
        for season in SEASONS {
            let grade = state
                .scouting_heatmap
                .iter()
                .find(|row| row.player_name == *player && row.season == Some(season))
                .and_then(|row| row.scouting_grade);
            match grade {
                Some(grade) => spans.push(Span::styled(
                    format!("{grade:>6}"),
                    Style::default().fg(grade_color(grade)),
                )),
                None => spans.push(Span::styled(
                    format!("{:>6}", "·"),
                    Style::default().fg(Color::DarkGray),
                )),
            }
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_head_to_head(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;
    let block = Block::default()
        .title(format!(
            "Head To Head — {} (p next pair)",
            season_label(state.head_to_head_season)
        ))
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    if state.head_to_head.len() < 2 {
        render_empty_chart(frame, inner, state.head_to_head_loading);
        return;
    }

    let left = &state.head_to_head[0];
    let right = &state.head_to_head[1];
    let mut lines = vec![Line::styled(
        format!(
            "{:<14}{:>20}{:>20}",
            "",
            clip(&left.player_name, 19),
            clip(&right.player_name, 19)
        ),
        Style::default().add_modifier(Modifier::BOLD),
    )];

    for (label, a, b) in head_to_head_metrics(left, right) {
        let style_a = matchup_style(app, a.as_deref(), b.as_deref(), true);
        let style_b = matchup_style(app, a.as_deref(), b.as_deref(), false);
        lines.push(Line::from(vec![
            Span::raw(format!("{label:<14}")),
            Span::styled(
                format!("{:>20}", a.unwrap_or_else(|| "-".to_string())),
                style_a,
            ),
            Span::styled(
                format!("{:>20}", b.unwrap_or_else(|| "-".to_string())),
                style_b,
            ),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

type MetricRow = (&'static str, Option<String>, Option<String>);

fn head_to_head_metrics(left: &HeadToHeadRow, right: &HeadToHeadRow) -> Vec<MetricRow> {
    vec![
        ("Team", some_str(&left.team), some_str(&right.team)),
        (
            "GP",
            left.gp.map(|v| v.to_string()),
            right.gp.map(|v| v.to_string()),
        ),
        (
            "Goals",
            left.goals.map(|v| v.to_string()),
            right.goals.map(|v| v.to_string()),
        ),
        (
            "Assists",
            left.assists.map(|v| v.to_string()),
            right.assists.map(|v| v.to_string()),
        ),
        (
            "Points",
            left.points.map(|v| v.to_string()),
            right.points.map(|v| v.to_string()),
        ),
        (
            "Shots",
            left.shots.map(|v| v.to_string()),
            right.shots.map(|v| v.to_string()),
        ),
        (
            "Shooting %",
            left.shooting_percentage.map(|v| format!("{v:.1}")),
            right.shooting_percentage.map(|v| format!("{v:.1}")),
        ),
        (
            "TOI/G",
            left.toi_per_game.map(|v| format!("{v:.2}")),
            right.toi_per_game.map(|v| format!("{v:.2}")),
        ),
        (
            "PTS/G",
            left.points_per_game.map(|v| format!("{v:.2}")),
            right.points_per_game.map(|v| format!("{v:.2}")),
        ),
        (
            "Grade",
            left.scouting_grade.map(|v| v.to_string()),
            right.scouting_grade.map(|v| v.to_string()),
        ),
    ]
}

fn some_str(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn matchup_style(app: &App, a: Option<&str>, b: Option<&str>, left: bool) -> Style {
    let (Some(a), Some(b)) = (a, b) else {
        return Style::default();
    };
    let (Ok(a), Ok(b)) = (a.parse::<f64>(), b.parse::<f64>()) else {
        return Style::default();
    };
    let wins = if left { a > b } else { b > a };
    if wins {
        Style::default()
            .fg(app.accent())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

fn render_profile(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().title("Profile").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let name_line = match &app.name_edit {
        Some(buffer) => Line::from(vec![
            Span::raw("Name:  "),
            Span::styled(
                format!("{buffer}_"),
                Style::default().add_modifier(Modifier::UNDERLINED),
            ),
            Span::styled(
                "  (Enter save, Esc cancel)",
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        None => Line::raw(format!(
            "Name:  {}",
            if app.settings.name().is_empty() {
                "(unset)"
            } else {
                app.settings.name()
            }
        )),
    };

    let theme = match app.settings.theme() {
        Theme::Light => "light",
        Theme::Dark => "dark",
    };
    let lines = vec![
        name_line,
        Line::raw(format!("Theme: {theme}")),
        Line::raw(format!(
            "Tooltip colors: fill {} / text {}",
            app.settings.tooltip_fill(),
            app.settings.tooltip_text()
        )),
        Line::raw(""),
        Line::styled(
            "e edit name | t toggle theme",
            Style::default().fg(Color::DarkGray),
        ),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_empty_chart(frame: &mut Frame, area: Rect, loading: bool) {
    let text = if loading {
        "Loading..."
    } else {
        "No data for this selection"
    };
    frame.render_widget(
        Paragraph::new(text).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

fn console_text(state: &DashboardState) -> String {
    if state.logs.is_empty() {
        return "No alerts yet".to_string();
    }
    state
        .logs
        .iter()
        .rev()
        .take(2)
        .cloned()
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect::<Vec<_>>()
        .join("\n")
}

fn footer_text(app: &App) -> String {
    let refreshed = match &app.state.last_refresh {
        Some(at) => format!(" | refreshed {}", at.format("%H:%M:%S")),
        None => String::new(),
    };
    let hints = match app.state.screen {
        Screen::DataGrid => "j/k Move | Enter Player focus | Esc All | r Refresh | ? Help | q Quit",
        Screen::HeadToHead => "p Next pair | s Season | r Refresh | ? Help | q Quit",
        Screen::Profile => "e Edit name | t Theme | ? Help | q Quit",
        Screen::ScoutingHeatmap => "r Refresh | ? Help | q Quit",
        _ => "s Season | c Clear filters | r Refresh | ? Help | q Quit",
    };
    format!("1-8 Screens | {hints}{refreshed}")
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(64, 70, area);
    frame.render_widget(Clear, popup_area);

    let mut lines = vec![
        Line::raw("Puck Terminal - Help"),
        Line::raw(""),
        Line::raw("Screens:"),
    ];
    for item in MAIN_NAV {
        lines.push(Line::raw(format!(
            "  {}  {} {}",
            item.key, item.icon, item.display_name
        )));
        if !item.description.is_empty() {
            lines.push(Line::styled(
                format!("       {}", item.description),
                Style::default().fg(Color::DarkGray),
            ));
        }
    }
    lines.push(Line::raw(""));
    lines.push(Line::raw("  s  Cycle season filter (charts)"));
    lines.push(Line::raw("  c  Reset all chart filters"));
    lines.push(Line::raw("  P  Reload player list"));
    lines.push(Line::raw("  r  Refresh current screen"));
    lines.push(Line::raw("  q  Quit"));

    let help = Paragraph::new(lines).block(Block::default().title("Help").borders(Borders::ALL));
    frame.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}

fn visible_range(selected: usize, total: usize, visible: usize) -> (usize, usize) {
    if total == 0 || visible == 0 {
        return (0, 0);
    }
    if total <= visible {
        return (0, total);
    }

    let mut start = selected.saturating_sub(visible / 2);
    if start + visible > total {
        start = total - visible;
    }
    (start, start + visible)
}

fn season_label(season: Option<i32>) -> String {
    match season {
        Some(season) => season.to_string(),
        None => "all seasons".to_string(),
    }
}

fn grade_color(grade: u32) -> Color {
    if grade >= 90 {
        Color::Cyan
    } else if grade >= 75 {
        Color::Green
    } else if grade >= 60 {
        Color::Yellow
    } else {
        Color::Red
    }
}

fn scale(value: u32, max: u32, width: usize) -> usize {
    (((value as f64) / (max as f64)) * width as f64).round() as usize
}

fn clip(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        text.chars().take(max.saturating_sub(1)).collect::<String>() + "…"
    }
}

fn fmt_u32(value: Option<u32>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "-".to_string(),
    }
}

fn fmt_i32(value: Option<i32>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "-".to_string(),
    }
}

fn fmt_f64(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "-".to_string(),
    }
}
