// src/ui/page.rs

use crate::constants::{ACTIVE_SECTION_MARGIN, SUMMARY_CALL_TO_ACTION, SUMMARY_GENERATING};
use crate::profile::Profile;
use crate::summary::SummaryState;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use textwrap::wrap;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Experience,
    Education,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Experience,
        Section::Education,
        Section::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Experience => "Experience",
            Section::Education => "Education",
            Section::Contact => "Contact",
        }
    }

    pub fn index(self) -> usize {
        Section::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn from_digit(c: char) -> Option<Section> {
        let n = c.to_digit(10)? as usize;
        Section::ALL.get(n.checked_sub(1)?).copied()
    }

    pub fn next(self) -> Section {
        Section::ALL[(self.index() + 1) % Section::ALL.len()]
    }

    pub fn prev(self) -> Section {
        Section::ALL[(self.index() + Section::ALL.len() - 1) % Section::ALL.len()]
    }
}

/// Everything the page needs to render besides the profile itself.
pub struct PageInputs<'a> {
    pub summary: &'a SummaryState,
    pub spinner: &'a str,
    pub year: i32,
}

/// The rendered page for one width: all lines plus the first row of each
/// section.
#[derive(Debug, Clone)]
pub struct PageLayout {
    lines: Vec<Line<'static>>,
    starts: Vec<(Section, u16)>,
}

impl PageLayout {
    pub fn build(profile: &Profile, inputs: &PageInputs<'_>, width: u16) -> Self {
        let width = (width as usize).max(20);
        let mut builder = Builder {
            lines: Vec::new(),
            starts: Vec::new(),
            width,
        };

        builder.home(profile, inputs);
        builder.about(profile);
        builder.experience(profile);
        builder.education(profile);
        builder.contact(profile, inputs.year);

        PageLayout {
            lines: builder.lines,
            starts: builder.starts,
        }
    }

    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<Line<'static>> {
        self.lines
    }

    pub fn height(&self) -> u16 {
        self.lines.len().min(u16::MAX as usize) as u16
    }

    pub fn max_scroll(&self, viewport_height: u16) -> u16 {
        self.height().saturating_sub(viewport_height)
    }

    pub fn section_start(&self, section: Section) -> u16 {
        self.starts
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, start)| *start)
            .unwrap_or(0)
    }

    /// The section nearest the viewport top for a scroll offset. Derived on
    /// every call; nothing is remembered between scrolls.
    pub fn active_section(&self, scroll: u16, viewport_height: u16) -> Section {
        let max = self.max_scroll(viewport_height);
        if max > 0 && scroll >= max {
            if let Some((last, _)) = self.starts.last() {
                return *last;
            }
        }

        let probe = scroll.saturating_add(ACTIVE_SECTION_MARGIN);
        self.starts
            .iter()
            .rev()
            .find(|(_, start)| *start <= probe)
            .map(|(section, _)| *section)
            .unwrap_or(Section::Home)
    }
}

struct Builder {
    lines: Vec<Line<'static>>,
    starts: Vec<(Section, u16)>,
    width: usize,
}

fn accent() -> Style {
    Style::default().fg(Color::Cyan)
}

fn muted() -> Style {
    Style::default().fg(Color::Gray)
}

fn dim() -> Style {
    Style::default().fg(Color::DarkGray)
}

impl Builder {
    fn start(&mut self, section: Section) {
        self.starts.push((section, self.lines.len() as u16));
    }

    fn blank(&mut self) {
        self.lines.push(Line::from(""));
    }

    fn push(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    fn text(&mut self, text: &str, style: Style, prefix: &str, prefix_style: Style) {
        let wrap_width = self.width.saturating_sub(prefix.width()).max(10);
        for wrapped in wrap(text, wrap_width) {
            self.lines.push(Line::from(vec![
                Span::styled(prefix.to_string(), prefix_style),
                Span::styled(wrapped.into_owned(), style),
            ]));
        }
    }

    fn heading(&mut self, plain: &str, highlight: &str, color: Color) {
        self.blank();
        self.push(Line::from(vec![
            Span::styled(
                format!("{} ", plain),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                highlight.to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ]));
        self.push(Line::styled("━".repeat(self.width.min(40)), dim()));
        self.blank();
    }

    /// Lays `[ chip ]` items out in rows that fit the width.
    fn chips(&mut self, items: &[String], style: Style) {
        let mut row: Vec<Span<'static>> = Vec::new();
        let mut row_width = 0;
        for item in items {
            let chip = format!("[ {} ]", item);
            let chip_width = chip.width() + 1;
            if row_width + chip_width > self.width && !row.is_empty() {
                self.lines.push(Line::from(std::mem::take(&mut row)));
                row_width = 0;
            }
            row.push(Span::styled(chip, style));
            row.push(Span::raw(" "));
            row_width += chip_width;
        }
        if !row.is_empty() {
            self.lines.push(Line::from(row));
        }
    }

    fn home(&mut self, profile: &Profile, inputs: &PageInputs<'_>) {
        self.start(Section::Home);
        self.blank();
        self.push(Line::styled(
            format!("[ {} ]", profile.role),
            accent().add_modifier(Modifier::ITALIC),
        ));
        self.blank();
        self.push(Line::from(vec![
            Span::styled("Hi, I'm ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                profile.name.clone(),
                Style::default()
                    .fg(Color::LightBlue)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        self.blank();
        let tagline = if profile.tagline.is_empty() {
            profile.summary.clone()
        } else {
            profile.tagline.clone()
        };
        self.text(&tagline, muted(), "", muted());
        self.blank();

        let pitch_style = Style::default().fg(Color::LightMagenta);
        match inputs.summary {
            SummaryState::NotRequested => {
                self.push(Line::styled(SUMMARY_CALL_TO_ACTION, pitch_style));
            }
            SummaryState::Generating => {
                self.push(Line::from(vec![
                    Span::styled(format!("{} ", inputs.spinner), pitch_style),
                    Span::styled(SUMMARY_GENERATING, pitch_style),
                ]));
            }
            SummaryState::Ready(text) => {
                self.text(
                    &format!("\"{}\"", text),
                    muted().add_modifier(Modifier::ITALIC),
                    "✨ ",
                    pitch_style,
                );
            }
        }

        self.blank();
        self.push(Line::from(vec![
            Span::styled("[v] View Work ↓", accent().add_modifier(Modifier::BOLD)),
            Span::raw("    "),
            Span::styled("[c] Ask AI About Me 🤖", muted()),
        ]));
        self.blank();
    }

    fn about(&mut self, profile: &Profile) {
        self.start(Section::About);
        self.heading("Technical", "Arsenal", Color::Cyan);
        if !profile.about.is_empty() {
            self.push(Line::styled(
                "More Than Just Code",
                Style::default().add_modifier(Modifier::BOLD),
            ));
            self.blank();
            for paragraph in &profile.about {
                self.text(paragraph, muted(), "", muted());
                self.blank();
            }
        }
        self.chips(&profile.skills, Style::default().fg(Color::White));
        self.blank();
    }

    fn experience(&mut self, profile: &Profile) {
        self.start(Section::Experience);
        self.heading("Professional", "Journey", Color::Cyan);
        for (index, exp) in profile.experiences.iter().enumerate() {
            let icon = match index {
                0 => "⌨",
                1 => "✎",
                2 => "◆",
                _ => "⚙",
            };
            self.push(Line::from(vec![
                Span::styled("● ", accent()),
                Span::styled(format!("{} ", icon), accent()),
                Span::styled(
                    exp.role.clone(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
            self.push(Line::from(vec![
                Span::styled("│ ", dim()),
                Span::styled(exp.company.clone(), Style::default().fg(Color::Gray)),
            ]));
            self.push(Line::from(vec![
                Span::styled("│ ", dim()),
                Span::styled(format!("{}  ·  {}", exp.period, exp.location), dim()),
            ]));
            self.text(&exp.description, muted(), "│   ", dim());
            if !exp.skills.is_empty() {
                let tags = exp
                    .skills
                    .iter()
                    .map(|tag| format!("#{}", tag))
                    .collect::<Vec<_>>()
                    .join(" ");
                self.text(&tags, Style::default().fg(Color::LightCyan), "│ ", dim());
            }
            self.push(Line::styled("│", dim()));
        }
        self.blank();
    }

    fn education(&mut self, profile: &Profile) {
        self.start(Section::Education);
        self.heading("Education &", "Background", Color::LightMagenta);
        for (index, edu) in profile.education.iter().enumerate() {
            let icon = if index == 0 { "🎓" } else { "🏅" };
            self.push(Line::from(vec![
                Span::styled(format!("{} ", icon), Style::default().fg(Color::LightMagenta)),
                Span::styled(
                    edu.school.clone(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
            self.push(Line::styled(
                format!("   {}", edu.degree),
                Style::default().fg(Color::LightMagenta),
            ));
            let mut meta = vec![Span::styled(format!("   {}", edu.period), dim())];
            if let Some(grade) = &edu.grade {
                meta.push(Span::styled(format!("   Grade: {}", grade), dim()));
            }
            self.push(Line::from(meta));
            self.text(&edu.details, muted(), "   ", muted());
            self.blank();
        }
    }

    fn contact(&mut self, profile: &Profile, year: i32) {
        self.start(Section::Contact);
        self.heading("Let's Build Something", "Great", Color::Cyan);
        self.text(
            &format!(
                "Currently working at {} but always open to connecting with fellow developers and tech enthusiasts.",
                profile.current_company
            ),
            muted(),
            "",
            muted(),
        );
        self.blank();

        let links = [
            ("[l]", "LinkedIn", profile.contact.linkedin.as_deref()),
            ("[m]", "Email", profile.contact.email.as_deref()),
            ("[g]", "GitHub", profile.contact.github.as_deref()),
        ];
        for (key, label, target) in links {
            if let Some(target) = target {
                self.push(Line::from(vec![
                    Span::styled(format!("{} ", key), accent().add_modifier(Modifier::BOLD)),
                    Span::styled(format!("{:<9}", label), Style::default().fg(Color::White)),
                    Span::styled(target.to_string(), dim()),
                ]));
            }
        }

        self.blank();
        self.text(
            &format!(
                "© {} {}. Built with Rust & ratatui. Powered by Gemini AI.",
                year, profile.name
            ),
            dim(),
            "",
            dim(),
        );
        self.blank();
    }
}
