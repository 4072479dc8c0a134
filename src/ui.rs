use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use loan_feasibility::{
    calculate, BillingPeriod, FeasibilityReport, LoanInputs, PaymentRisk, ResidualBand,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame, Terminal,
};
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Inputs,
    Schedule,
    Summary,
}

impl Page {
    pub fn next(&self) -> Self {
        match self {
            Page::Inputs => Page::Schedule,
            Page::Schedule => Page::Summary,
            Page::Summary => Page::Inputs,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Page::Inputs => Page::Summary,
            Page::Schedule => Page::Inputs,
            Page::Summary => Page::Schedule,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Page::Inputs => "Inputs",
            Page::Schedule => "Payment Schedule",
            Page::Summary => "Financial Summary",
        }
    }
}

/// Number of editable rows on the Inputs page
const INPUT_FIELDS: usize = 8;

pub struct App {
    pub inputs: LoanInputs,
    pub report: FeasibilityReport,
    pub current_page: Page,
    pub input_state: TableState,
    pub schedule_state: TableState,
}

impl App {
    pub fn new(inputs: LoanInputs) -> Self {
        let report = calculate(&inputs);

        let mut input_state = TableState::default();
        input_state.select(Some(0));

        let mut schedule_state = TableState::default();
        schedule_state.select(Some(0));

        Self {
            inputs,
            report,
            current_page: Page::Inputs,
            input_state,
            schedule_state,
        }
    }

    pub fn recalculate(&mut self) {
        self.report = calculate(&self.inputs);
    }

    pub fn next_page(&mut self) {
        self.current_page = self.current_page.next();
    }

    pub fn previous_page(&mut self) {
        self.current_page = self.current_page.previous();
    }

    /// Label and rendered value for each Inputs row
    pub fn field_rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Tuition Amount", format!("${:.2}", self.inputs.tuition_amount)),
            ("Billing Period", self.inputs.billing_period.as_str().to_string()),
            ("Terms per Year", self.inputs.periods_per_year.to_string()),
            ("Program Length (Yrs)", self.inputs.program_years.to_string()),
            (
                "Annual Tuition Increase",
                format!("{:.2}%", self.inputs.escalation_rate * 100.0),
            ),
            (
                "Interest Rate",
                format!("{:.2}%", self.inputs.interest_rate * 100.0),
            ),
            (
                "Expected Annual Salary",
                format!("${:.2}", self.inputs.gross_salary),
            ),
            (
                "Monthly Cost of Living",
                format!("${:.2}", self.inputs.monthly_living_cost),
            ),
        ]
    }

    /// Nudge the selected input up or down by its step and rerun the
    /// calculation
    pub fn adjust_selected(&mut self, direction: i32) {
        let step = direction as f64;

        match self.input_state.selected().unwrap_or(0) {
            0 => {
                self.inputs.tuition_amount = (self.inputs.tuition_amount + step * 500.0).max(0.0)
            }
            1 => {
                self.inputs.billing_period = match self.inputs.billing_period {
                    BillingPeriod::PerTerm => BillingPeriod::PerYear,
                    BillingPeriod::PerYear => BillingPeriod::PerTerm,
                }
            }
            2 => self.inputs.periods_per_year = adjust_count(self.inputs.periods_per_year, direction),
            3 => self.inputs.program_years = adjust_count(self.inputs.program_years, direction),
            4 => {
                self.inputs.escalation_rate = (self.inputs.escalation_rate + step * 0.0025).max(0.0)
            }
            5 => {
                self.inputs.interest_rate = (self.inputs.interest_rate + step * 0.0025).max(0.0)
            }
            6 => self.inputs.gross_salary = (self.inputs.gross_salary + step * 1000.0).max(0.0),
            7 => {
                self.inputs.monthly_living_cost =
                    (self.inputs.monthly_living_cost + step * 100.0).max(0.0)
            }
            _ => return,
        }

        self.recalculate();
    }

    pub fn next(&mut self) {
        let (state, len) = self.active_list();
        if len == 0 {
            return;
        }
        let i = match state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let (state, len) = self.active_list();
        if len == 0 {
            return;
        }
        let i = match state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        state.select(Some(i));
    }

    pub fn select_first(&mut self) {
        let (state, len) = self.active_list();
        if len > 0 {
            state.select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        let (state, len) = self.active_list();
        if len > 0 {
            state.select(Some(len - 1));
        }
    }

    fn active_list(&mut self) -> (&mut TableState, usize) {
        match self.current_page {
            Page::Schedule => (&mut self.schedule_state, self.report.payments.len()),
            _ => (&mut self.input_state, INPUT_FIELDS),
        }
    }
}

// Keeps count fields at or above one; zero terms or years would make the
// projection and amortization meaningless
fn adjust_count(value: u32, direction: i32) -> u32 {
    if direction > 0 {
        value + 1
    } else {
        value.saturating_sub(1).max(1)
    }
}

fn risk_color(risk: PaymentRisk) -> Color {
    match risk {
        PaymentRisk::Low => Color::Green,
        PaymentRisk::Moderate => Color::Yellow,
        PaymentRisk::Elevated => Color::LightRed,
        PaymentRisk::High => Color::Red,
    }
}

fn band_color(band: ResidualBand) -> Color {
    match band {
        ResidualBand::Deficit => Color::Red,
        ResidualBand::VeryLow => Color::LightRed,
        ResidualBand::Low => Color::Yellow,
        ResidualBand::Sustainable => Color::Green,
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Tab => {
                    if key.modifiers.contains(KeyModifiers::SHIFT) {
                        app.previous_page();
                    } else {
                        app.next_page();
                    }
                }
                KeyCode::BackTab => app.previous_page(),
                KeyCode::Down | KeyCode::Char('j') => app.next(),
                KeyCode::Up | KeyCode::Char('k') => app.previous(),
                KeyCode::Left | KeyCode::Char('-') => {
                    if app.current_page == Page::Inputs {
                        app.adjust_selected(-1);
                    }
                }
                KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => {
                    if app.current_page == Page::Inputs {
                        app.adjust_selected(1);
                    }
                }
                KeyCode::Char('d') => {
                    app.inputs = LoanInputs::default();
                    app.recalculate();
                }
                KeyCode::Home => app.select_first(),
                KeyCode::End => app.select_last(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with navigation
            Constraint::Min(0),    // Content area
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);

    match app.current_page {
        Page::Inputs => render_inputs(f, chunks[1], app),
        Page::Schedule => render_schedule(f, chunks[1], app),
        Page::Summary => render_summary(f, chunks[1], app),
    }

    render_status_bar(f, chunks[2], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let pages = [Page::Inputs, Page::Schedule, Page::Summary];

    let mut tab_spans = vec![];
    for (i, page) in pages.iter().enumerate() {
        if i > 0 {
            tab_spans.push(Span::raw(" │ "));
        }

        let style = if *page == app.current_page {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        tab_spans.push(Span::styled(page.title(), style));
    }

    tab_spans.push(Span::raw("  |  "));
    tab_spans.push(Span::styled(
        format!("Tuition: ${:.0}", app.report.total_tuition),
        Style::default().fg(Color::White),
    ));
    tab_spans.push(Span::raw("  |  "));
    tab_spans.push(Span::styled(
        format!("Take-Home: ${:.0}/mo", app.report.take_home.monthly_net),
        Style::default().fg(Color::Green),
    ));

    let header_text = vec![Line::from(tab_spans)];

    let header = Paragraph::new(header_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(header, area);
}

fn render_inputs(f: &mut Frame, area: Rect, app: &mut App) {
    let header_cells = ["Field", "Value"].iter().map(|h| {
        Cell::from(*h).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    });

    let header = Row::new(header_cells)
        .style(Style::default().bg(Color::DarkGray))
        .height(1);

    let rows = app.field_rows().into_iter().map(|(label, value)| {
        let cells = vec![
            Cell::from(label),
            Cell::from(value).style(Style::default().fg(Color::Cyan)),
        ];

        Row::new(cells).height(1)
    });

    let table = Table::new(rows, [Constraint::Length(26), Constraint::Length(18)])
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White))
                .title(" Loan Inputs "),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("→ ");

    f.render_stateful_widget(table, area, &mut app.input_state);
}

fn render_schedule(f: &mut Frame, area: Rect, app: &mut App) {
    let header_cells = ["Term (Yrs)", "Monthly Payment", "% of Take-Home", "Risk"]
        .iter()
        .map(|h| {
            Cell::from(*h).style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        });

    let header = Row::new(header_cells)
        .style(Style::default().bg(Color::DarkGray))
        .height(1);

    let rows = app.report.payments.iter().map(|row| {
        let risk = PaymentRisk::from_ratio(row.percent_of_take_home);
        let color = risk_color(risk);

        let cells = vec![
            Cell::from(row.term_years.to_string()),
            Cell::from(format!("${:.2}", row.monthly_payment))
                .style(Style::default().fg(color)),
            Cell::from(format!("{:.1}%", row.percent_of_take_home))
                .style(Style::default().fg(color)),
            Cell::from(risk.as_str()).style(Style::default().fg(color)),
        ];

        Row::new(cells).height(1)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Length(17),
            Constraint::Length(16),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Payment Schedule "),
    )
    .highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("→ ");

    f.render_stateful_widget(table, area, &mut app.schedule_state);
}

fn render_summary(f: &mut Frame, area: Rect, app: &App) {
    let summary = &app.report.summary;
    let band = ResidualBand::from_residual(summary.remaining_monthly);

    let content = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "  Total Tuition: ",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("${:.2}", app.report.total_tuition)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "  Monthly Take-Home: ",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("${:.2}", app.report.take_home.monthly_net)),
        ]),
        Line::from(vec![
            Span::styled(
                "    Federal Tax: ",
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                format!("${:.2}/yr", app.report.take_home.federal_tax),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(vec![
            Span::styled(
                "    Payroll Tax: ",
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                format!("${:.2}/yr", app.report.take_home.payroll_tax),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "  Lowest Monthly Payment: ",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("${:.2}", summary.lowest_payment)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "  Cost of Living: ",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("${:.2}", app.inputs.monthly_living_cost)),
        ]),
        Line::from(""),
        Line::from("  ─────────────────────────────────────"),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "  Remaining Monthly Income: ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("${:.2}", summary.remaining_monthly),
                Style::default()
                    .fg(band_color(band))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  ("),
            Span::styled(band.as_str(), Style::default().fg(band_color(band))),
            Span::raw(")"),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(
                band.advisory(),
                Style::default()
                    .fg(band_color(band))
                    .add_modifier(Modifier::ITALIC),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Financial Summary "),
    );

    f.render_widget(paragraph, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mut status_spans = vec![Span::styled(
        format!(" {} ", app.current_page.title()),
        Style::default().fg(Color::Cyan),
    )];

    status_spans.push(Span::raw("| "));
    status_spans.push(Span::styled("Tab", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Page | "));
    status_spans.push(Span::styled("↑/↓", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Select | "));

    if app.current_page == Page::Inputs {
        status_spans.push(Span::styled("←/→", Style::default().fg(Color::Yellow)));
        status_spans.push(Span::raw(" Adjust | "));
        status_spans.push(Span::styled("d", Style::default().fg(Color::Yellow)));
        status_spans.push(Span::raw(" Defaults | "));
    }

    status_spans.push(Span::styled("q", Style::default().fg(Color::Red)));
    status_spans.push(Span::raw(" Quit"));

    let status_text = vec![Line::from(status_spans)];

    let status_bar = Paragraph::new(status_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_navigation_wraps() {
        assert_eq!(Page::Summary.next(), Page::Inputs);
        assert_eq!(Page::Inputs.previous(), Page::Summary);
    }

    #[test]
    fn test_adjust_recalculates_report() {
        let mut app = App::new(LoanInputs::default());
        let before = app.report.total_tuition;

        // Bump tuition on field 0
        app.input_state.select(Some(0));
        app.adjust_selected(1);

        assert!(app.report.total_tuition > before);
        assert_eq!(app.inputs.tuition_amount, 10500.0);
    }

    #[test]
    fn test_count_fields_never_drop_below_one() {
        let mut app = App::new(LoanInputs {
            program_years: 1,
            ..LoanInputs::default()
        });

        app.input_state.select(Some(3));
        app.adjust_selected(-1);

        assert_eq!(app.inputs.program_years, 1);
    }

    #[test]
    fn test_field_selection_wraps() {
        let mut app = App::new(LoanInputs::default());

        app.input_state.select(Some(INPUT_FIELDS - 1));
        app.next();
        assert_eq!(app.input_state.selected(), Some(0));

        app.previous();
        assert_eq!(app.input_state.selected(), Some(INPUT_FIELDS - 1));
    }
}
