use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use lira_words::{
    denominations, format_amount, has_arabic_numerals, parse_amount, sanitize_input, spell_number_simple,
    western_to_arabic, Config, Conversion, CurrencyEra, Direction,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDirection, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;

pub struct App {
    pub direction: Direction,
    /// Sanitised input, Western digits
    pub input: String,
    pub use_arabic_numerals: bool,
    pub show_denominations: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            direction: config.default_direction,
            input: String::new(),
            use_arabic_numerals: config.use_arabic_numerals,
            show_denominations: false,
        }
    }

    /// Typing an Arabic-Indic digit switches the display to Arabic numerals
    pub fn push_char(&mut self, c: char) {
        if has_arabic_numerals(&c.to_string()) {
            self.use_arabic_numerals = true;
        }

        let candidate = sanitize_input(&format!("{}{}", self.input, c));

        // one decimal point at most
        if candidate.matches('.').count() > 1 {
            return;
        }

        self.input = candidate;
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
    }

    pub fn clear(&mut self) {
        self.input.clear();
    }

    /// Switching direction starts from an empty amount
    pub fn toggle_direction(&mut self) {
        self.direction = self.direction.toggle();
        self.clear();
    }

    pub fn toggle_numerals(&mut self) {
        self.use_arabic_numerals = !self.use_arabic_numerals;
    }

    pub fn toggle_denominations(&mut self) {
        self.show_denominations = !self.show_denominations;
    }

    pub fn amount(&self) -> f64 {
        parse_amount(&self.input)
    }

    pub fn conversion(&self) -> Conversion {
        Conversion::new(self.amount(), self.direction)
    }

    pub fn display_input(&self) -> String {
        if self.use_arabic_numerals {
            western_to_arabic(&self.input)
        } else {
            self.input.clone()
        }
    }

    pub fn display_output(&self) -> String {
        let conversion = self.conversion();
        format_amount(
            conversion.output,
            self.use_arabic_numerals,
            conversion.display_fraction_digits(),
        )
    }

    pub fn input_words(&self) -> String {
        spell_number_simple(self.amount())
    }

    pub fn output_words(&self) -> String {
        spell_number_simple(self.conversion().output)
    }

    pub fn denomination_labels(&self, era: CurrencyEra) -> Vec<String> {
        denominations(era)
            .iter()
            .map(|d| format_amount(*d as f64, self.use_arabic_numerals, 0))
            .collect()
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!("terminal UI failed: {:?}", err);
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
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Esc | KeyCode::Char('q') => return Ok(()),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return Ok(()),
                KeyCode::Tab | KeyCode::BackTab => app.toggle_direction(),
                KeyCode::Char('a') => app.toggle_numerals(),
                KeyCode::Char('d') => app.toggle_denominations(),
                KeyCode::Backspace => app.pop_char(),
                KeyCode::Delete => app.clear(),
                KeyCode::Char(c) => app.push_char(c),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([
            Constraint::Length(3), // Direction tabs
            Constraint::Min(0),    // Converter
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);

    if app.show_denominations {
        let content_chunks = Layout::default()
            .direction(LayoutDirection::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(chunks[1]);

        render_converter(f, content_chunks[0], app);
        render_denominations(f, content_chunks[1], app);
    } else {
        render_converter(f, chunks[1], app);
    }

    render_status_bar(f, chunks[2], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let mut tab_spans = vec![];
    for (i, direction) in [Direction::OldToNew, Direction::NewToOld].iter().enumerate() {
        if i > 0 {
            tab_spans.push(Span::raw(" │ "));
        }

        let style = if *direction == app.direction {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        tab_spans.push(Span::styled(direction.title(), style));
    }

    tab_spans.push(Span::raw("  |  "));
    tab_spans.push(Span::styled("١٠٠ قديمة = ١ جديدة", Style::default().fg(Color::Green)));

    let header = Paragraph::new(vec![Line::from(tab_spans)])
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Cyan)));

    f.render_widget(header, area);
}

fn render_converter(f: &mut Frame, area: Rect, app: &App) {
    let source = app.direction.source_era();
    let target = app.direction.target_era();

    let label_style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let words_style = Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC);

    let input = if app.input.is_empty() {
        Span::styled("…", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(app.display_input(), Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
    };

    let content = vec![
        Line::from(Span::styled(format!("المبلغ ({})", source.noun_phrase()), label_style)),
        Line::from(vec![Span::raw("  "), input]),
        Line::from(vec![Span::raw("  "), Span::styled(app.input_words(), words_style)]),
        Line::from(""),
        Line::from(Span::styled(format!("النتيجة ({})", target.noun_phrase()), label_style)),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(app.display_output(), Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(vec![Span::raw("  "), Span::styled(app.output_words(), words_style)]),
    ];

    let converter = Paragraph::new(content)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White))
                .title(" Converter "),
        );

    f.render_widget(converter, area);
}

fn render_denominations(f: &mut Frame, area: Rect, app: &App) {
    let era = app.direction.source_era();

    let content: Vec<Line> = app
        .denomination_labels(era)
        .into_iter()
        .map(|label| {
            Line::from(vec![
                Span::raw("  • "),
                Span::styled(label, Style::default().fg(Color::Cyan)),
            ])
        })
        .collect();

    let panel = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(format!(" فئات الليرة {} ", era.label())),
    );

    f.render_widget(panel, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let numerals = if app.use_arabic_numerals { "١٢٣" } else { "123" };

    let status_text = Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Yellow)),
        Span::raw(" direction  "),
        Span::styled("a", Style::default().fg(Color::Yellow)),
        Span::raw(format!(" numerals ({})  ", numerals)),
        Span::styled("d", Style::default().fg(Color::Yellow)),
        Span::raw(" banknotes  "),
        Span::styled("Del", Style::default().fg(Color::Yellow)),
        Span::raw(" clear  "),
        Span::styled("q/Esc", Style::default().fg(Color::Yellow)),
        Span::raw(" quit"),
    ]);

    let status_bar = Paragraph::new(status_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    f.render_widget(status_bar, area);
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(&Config {
            use_arabic_numerals: false,
            ..Config::default()
        })
    }

    #[test]
    fn test_typing_mixed_scripts() {
        let mut app = app();
        for c in "٥0x٠0".chars() {
            app.push_char(c);
        }
        assert_eq!(app.input, "5000");
        assert_eq!(app.display_output(), "50");
        assert_eq!(app.input_words(), "خمسة آلاف");
        assert_eq!(app.output_words(), "خمسون");
    }

    #[test]
    fn test_arabic_digit_switches_display() {
        let mut app = app();
        app.push_char('1');
        assert!(!app.use_arabic_numerals);
        app.push_char('٢');
        assert!(app.use_arabic_numerals);
        assert_eq!(app.display_input(), "١٢");
    }

    #[test]
    fn test_single_decimal_point() {
        let mut app = app();
        for c in "12.5.0".chars() {
            app.push_char(c);
        }
        assert_eq!(app.input, "12.50");
    }

    #[test]
    fn test_toggle_direction_clears_input() {
        let mut app = app();
        app.push_char('7');
        app.toggle_direction();
        assert_eq!(app.direction, Direction::NewToOld);
        assert!(app.input.is_empty());
        assert_eq!(app.input_words(), "صفر");
    }

    #[test]
    fn test_new_to_old_display() {
        let mut app = app();
        app.toggle_direction();
        for c in "25".chars() {
            app.push_char(c);
        }
        assert_eq!(app.display_output(), "2,500");
        assert_eq!(app.output_words(), "ألفين وخمسمئة");
    }

    #[test]
    fn test_arabic_display() {
        let mut app = app();
        app.toggle_numerals();
        for c in "123456".chars() {
            app.push_char(c);
        }
        assert_eq!(app.display_input(), "١٢٣٤٥٦");
        assert_eq!(app.display_output(), "١٬٢٣٤.٥٦");
        assert_eq!(app.denomination_labels(CurrencyEra::Old)[0], "١٬٠٠٠");
    }

    #[test]
    fn test_backspace_and_clear() {
        let mut app = app();
        app.push_char('1');
        app.push_char('2');
        app.pop_char();
        assert_eq!(app.input, "1");
        app.clear();
        assert_eq!(app.amount(), 0.0);
    }
}
