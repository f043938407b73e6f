//! Interactive analysis menu
//!
//! A finite-state loop over [`MenuState`]. Input and output are injected, so
//! the whole workflow runs against in-memory buffers in tests.
//!
//! ```text
//!            1              any / q
//!   Main ─────────▶ Stats ───────────▶ (Stats | Main)
//!    │  2
//!    ├────────────▶ Viz ─────────────▶ (Viz | Main)
//!    │  3 / EOF
//!    └────────────▶ Exit
//! ```
//!
//! A statistic that fails (degenerate distribution, empty data) sends the
//! session back to `Main` instead of ending it.

use std::io::{self, BufRead, Write};

use boxoffice_io::MovieDataset;
use boxoffice_stats::StatsError;

use crate::charts::{Chart, VizQuery};
use crate::config::BoxofficeConfig;
use crate::report::{Reporter, StatsQuery};

const RULE_WIDTH: usize = 114;
const PROGRAM_INFO: &str = "This program reads a dataset containing 500 of the most profitable hollywood movies from 1970's till the 2020's. \nIt further provides statistical and visual analysis on the dataset.";

/// Which menu the session is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Main,
    Stats,
    Viz,
    Exit,
}

impl std::fmt::Display for MenuState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MenuState::Main => write!(f, "MAIN"),
            MenuState::Stats => write!(f, "STATS"),
            MenuState::Viz => write!(f, "VIZ"),
            MenuState::Exit => write!(f, "EXIT"),
        }
    }
}

/// Draws charts for the visualisation menu
///
/// `present` returns once the user has dismissed the chart.
pub trait ChartPresenter {
    fn present(&mut self, chart: &Chart) -> io::Result<()>;
}

/// One interactive run over a loaded dataset
pub struct Session<'a, R, W, P> {
    dataset: &'a MovieDataset,
    config: &'a BoxofficeConfig,
    input: R,
    output: W,
    presenter: P,
    state: MenuState,
}

impl<'a, R, W, P> Session<'a, R, W, P>
where
    R: BufRead,
    W: Write,
    P: ChartPresenter,
{
    pub fn new(
        dataset: &'a MovieDataset,
        config: &'a BoxofficeConfig,
        input: R,
        output: W,
        presenter: P,
    ) -> Self {
        Self {
            dataset,
            config,
            input,
            output,
            presenter,
            state: MenuState::Main,
        }
    }

    /// Current menu
    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Print the banner and run until the user exits or input ends
    pub fn run(&mut self) -> io::Result<()> {
        self.write_banner()?;
        while self.state != MenuState::Exit {
            self.step()?;
        }
        Ok(())
    }

    /// Show the current menu, handle one choice, and move to the next state
    pub fn step(&mut self) -> io::Result<MenuState> {
        let next = match self.state {
            MenuState::Main => self.main_menu()?,
            MenuState::Stats => self.stats_menu()?,
            MenuState::Viz => self.viz_menu()?,
            MenuState::Exit => MenuState::Exit,
        };

        if next != self.state {
            tracing::debug!("Menu transition {} -> {}", self.state, next);
        }
        self.state = next;
        Ok(next)
    }

    fn write_banner(&mut self) -> io::Result<()> {
        let side = "#".repeat(50);
        writeln!(self.output, "{side} Program Info {side}")?;
        writeln!(self.output, "\n{PROGRAM_INFO}\n")?;
        writeln!(self.output, "{}", "#".repeat(RULE_WIDTH))
    }

    fn main_menu(&mut self) -> io::Result<MenuState> {
        writeln!(self.output, "\n----------/// MENU ///----------\n")?;
        write!(
            self.output,
            "1. Display statistical analysis\n2. Display visualisations\n3. Exit program\n\nPlease select your choice: "
        )?;

        let Some(choice) = self.read_choice()? else {
            return Ok(MenuState::Exit);
        };

        match choice.as_str() {
            "1" => Ok(MenuState::Stats),
            "2" => Ok(MenuState::Viz),
            "3" => {
                writeln!(self.output, "\nProgram is exiting... Good Bye!")?;
                Ok(MenuState::Exit)
            }
            _ => {
                writeln!(self.output, "\nInvalid Choice, Please try again...\n\n")?;
                Ok(MenuState::Main)
            }
        }
    }

    fn stats_menu(&mut self) -> io::Result<MenuState> {
        self.write_stats_menu()?;

        let Some(choice) = self.read_choice()? else {
            return Ok(MenuState::Exit);
        };
        writeln!(self.output, "\n\n")?;

        if choice.eq_ignore_ascii_case("q") {
            return Ok(MenuState::Main);
        }

        match StatsQuery::from_choice(&choice) {
            Some(query) => {
                let reporter = Reporter::new(self.dataset, &self.config.display.unit);
                match reporter.report(query) {
                    Ok(lines) => {
                        for line in lines {
                            writeln!(self.output, "{line}")?;
                        }
                    }
                    Err(err) => return self.redirect(err),
                }
            }
            None => writeln!(self.output, "\nInvalid Choice!")?,
        }

        self.pause(MenuState::Stats)
    }

    fn viz_menu(&mut self) -> io::Result<MenuState> {
        self.write_viz_menu()?;

        let Some(choice) = self.read_choice()? else {
            return Ok(MenuState::Exit);
        };

        if choice.eq_ignore_ascii_case("q") {
            return Ok(MenuState::Main);
        }

        match VizQuery::from_choice(&choice) {
            Some(query) => match Chart::build(query, self.dataset, &self.config.charts) {
                Ok(chart) => {
                    if let Err(err) = self.presenter.present(&chart) {
                        tracing::warn!("Failed to display chart {:?}: {}", chart.title(), err);
                        writeln!(self.output, "\nUnable to display chart: {err}")?;
                    }
                }
                Err(err) => return self.redirect(err),
            },
            None => writeln!(self.output, "\nInvalid Choice!")?,
        }

        self.pause(MenuState::Viz)
    }

    fn write_stats_menu(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "\nAnalysis based on numerical columns (Budgets, Worldwide Gross)"
        )?;
        writeln!(self.output, "{}", "-".repeat(62))?;
        for query in StatsQuery::ALL.iter().filter(|q| !q.is_categorical()) {
            writeln!(self.output, "{}. {}", query.number(), query.label())?;
        }
        writeln!(self.output, "\nAnalysis based on category (Decade)")?;
        writeln!(self.output, "{}", "-".repeat(35))?;
        for query in StatsQuery::ALL.iter().filter(|q| q.is_categorical()) {
            writeln!(self.output, "{}. {}", query.number(), query.label())?;
        }
        writeln!(
            self.output,
            "\nPlease select your choice (1-16), Press Q or q to go back to main menu: \n"
        )?;
        self.output.flush()
    }

    fn write_viz_menu(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "\nVisualisations based on numerical columns (Budgets, Worldwide Gross)"
        )?;
        writeln!(self.output, "{}", "-".repeat(68))?;
        for (i, query) in VizQuery::ALL.iter().enumerate() {
            if *query == VizQuery::DecadeShare {
                writeln!(self.output, "\nVisualisations based on category (Decade)")?;
                writeln!(self.output, "{}", "-".repeat(41))?;
            }
            writeln!(self.output, "{}. {}", i + 1, query.label())?;
        }
        writeln!(
            self.output,
            "\nPlease select your choice (1-8), Press Q or q to go back to main menu: \n"
        )?;
        self.output.flush()
    }

    /// Report a failed analysis and return to the main menu
    fn redirect(&mut self, err: StatsError) -> io::Result<MenuState> {
        tracing::warn!("Analysis aborted: {}", err);
        if err.is_division_by_zero() {
            writeln!(
                self.output,
                "\n\nDivision by zero encountered.\nRedirecting to main menu...\n\n"
            )?;
        } else {
            writeln!(
                self.output,
                "\n\nNo data available for this analysis.\nRedirecting to main menu...\n\n"
            )?;
        }
        Ok(MenuState::Main)
    }

    /// Wait for Enter before showing `state` again
    fn pause(&mut self, state: MenuState) -> io::Result<MenuState> {
        write!(self.output, "\nPress any key to display sub-menu again...\n\n")?;
        match self.read_choice()? {
            Some(_) => Ok(state),
            None => Ok(MenuState::Exit),
        }
    }

    /// Read one trimmed line, or `None` at end of input
    fn read_choice(&mut self) -> io::Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
