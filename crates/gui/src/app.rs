//! Main application state and logic

use crate::styles;

use iced::task::Handle;
use iced::widget::{
    button, column, container, horizontal_rule, pick_list, row, text, vertical_space,
};
use iced::{Alignment, Color, Element, Length, Task, Theme};
use random_strategy::RandomStrategy;
use rps_core::{Move, Outcome, RoundResult};
use rps_session::{Mode, RoundTicket, Session};
use std::time::Duration;

/// How long the computers "think" before an automatic resolution.
const THINK_DELAY: Duration = Duration::from_millis(900);

/// Main application state
pub struct RpsApp {
    /// Session state
    session: Session,
    /// First computer side (computer-vs-computer only)
    first_bot: RandomStrategy,
    /// Second computer side (also the opponent in human mode)
    second_bot: RandomStrategy,
    /// Handle for the pending think-timer, if a round is resolving
    pending: Option<Handle>,
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // Session controls
    ModeSelected(Mode),
    StartRound,
    NewGame,

    // Moves
    MovePicked(Move),
    AutoResolved(RoundTicket),
}

impl RpsApp {
    pub fn new() -> (Self, Task<Message>) {
        (
            Self {
                session: Session::new(Mode::HumanVsComputer),
                first_bot: RandomStrategy::new(),
                second_bot: RandomStrategy::new(),
                pending: None,
            },
            Task::none(),
        )
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ModeSelected(mode) => {
                self.cancel_pending();
                self.session.change_mode(mode);
                Task::none()
            }

            Message::StartRound => {
                if let Some(ticket) = self.session.start_round() {
                    if self.session.mode() == Mode::ComputerVsComputer {
                        // Give the thinking indicator time on screen
                        let (task, handle) =
                            Task::perform(tokio::time::sleep(THINK_DELAY), move |_| {
                                Message::AutoResolved(ticket)
                            })
                            .abortable();
                        self.pending = Some(handle);
                        return task;
                    }
                }
                Task::none()
            }

            Message::MovePicked(mv) => {
                self.session.submit_move(mv, &mut self.second_bot);
                Task::none()
            }

            Message::AutoResolved(ticket) => {
                self.pending = None;
                self.session
                    .finish_auto(ticket, &mut self.first_bot, &mut self.second_bot);
                Task::none()
            }

            Message::NewGame => {
                self.cancel_pending();
                self.session.new_game();
                Task::none()
            }
        }
    }

    /// Abort the think-timer so it cannot fire against a replaced session
    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let title = text("Rock Paper Scissors").size(28);

        let mode_picker = pick_list(Mode::ALL, Some(self.session.mode()), Message::ModeSelected)
            .width(Length::Fill);

        let content = column![
            title,
            vertical_space().height(10),
            text("Mode").size(14),
            mode_picker,
            vertical_space().height(15),
            self.score_row(),
            vertical_space().height(15),
            horizontal_rule(1),
            vertical_space().height(10),
            self.status_area(),
            vertical_space().height(10),
            self.controls(),
        ]
        .spacing(5)
        .padding(20);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Render the three always-visible score counters
    fn score_row(&self) -> Element<'_, Message> {
        let (first_label, second_label) = side_labels(self.session.mode());
        let score = self.session.score();

        row![
            score_cell(first_label, score.first),
            score_cell("Ties", score.ties),
            score_cell(second_label, score.second),
        ]
        .spacing(10)
        .into()
    }

    /// Render the status line: a prompt or thinking indicator while
    /// playing, otherwise the last round's summary
    fn status_area(&self) -> Element<'_, Message> {
        if self.session.is_playing() {
            let status = match self.session.mode() {
                Mode::HumanVsComputer => "Pick your move",
                Mode::ComputerVsComputer => "Computers are thinking...",
            };
            return text(status).size(16).into();
        }

        match self.session.last_result() {
            Some(result) => self.round_summary(result),
            None => text("Press Play to start the first round").size(16).into(),
        }
    }

    fn round_summary(&self, result: RoundResult) -> Element<'_, Message> {
        let (first_label, second_label) = side_labels(self.session.mode());

        let moves_line = format!(
            "{} played {}, {} played {}",
            first_label, result.first, second_label, result.second
        );

        let verdict = match (self.session.mode(), result.outcome) {
            (_, Outcome::Tie) => "It's a tie".to_string(),
            (Mode::HumanVsComputer, Outcome::FirstWins) => "You win!".to_string(),
            (Mode::HumanVsComputer, Outcome::SecondWins) => "Computer wins".to_string(),
            (Mode::ComputerVsComputer, Outcome::FirstWins) => format!("{} wins!", first_label),
            (Mode::ComputerVsComputer, Outcome::SecondWins) => format!("{} wins!", second_label),
        };

        column![
            text(moves_line).size(15),
            text(verdict)
                .size(18)
                .color(outcome_color(self.session.mode(), result.outcome)),
        ]
        .spacing(4)
        .into()
    }

    /// Render the round controls: move buttons while the human is to
    /// play, otherwise the start/continue and reset buttons
    fn controls(&self) -> Element<'_, Message> {
        if self.session.is_playing() {
            if self.session.mode() == Mode::HumanVsComputer {
                let mut buttons = row![].spacing(10);
                for mv in Move::ALL {
                    buttons = buttons.push(
                        button(text(mv.to_string()).center())
                            .on_press(Message::MovePicked(mv))
                            .style(button::primary)
                            .width(styles::MOVE_BUTTON_WIDTH),
                    );
                }
                return buttons.into();
            }
            // Nothing to press while the computers think
            return vertical_space().height(0).into();
        }

        let play_label = if self.session.rounds() == 0 {
            "Play"
        } else {
            "Play again"
        };

        let mut controls = row![button(text(play_label))
            .on_press(Message::StartRound)
            .style(button::success)
            .width(Length::FillPortion(2))]
        .spacing(10);

        if self.session.rounds() > 0 {
            controls = controls.push(
                button(text("New Game"))
                    .on_press(Message::NewGame)
                    .style(button::secondary)
                    .width(Length::FillPortion(1)),
            );
        }

        controls.into()
    }
}

/// Render one score counter with its side label
fn score_cell(label: &str, value: u32) -> Element<'static, Message> {
    column![
        text(label.to_string()).size(14),
        text(format!("{}", value)).size(styles::SCORE_VALUE_SIZE),
    ]
    .spacing(2)
    .align_x(Alignment::Center)
    .width(Length::FillPortion(1))
    .into()
}

/// Score and summary labels for the two sides in the given mode
fn side_labels(mode: Mode) -> (&'static str, &'static str) {
    match mode {
        Mode::HumanVsComputer => ("You", "Computer"),
        Mode::ComputerVsComputer => ("Computer 1", "Computer 2"),
    }
}

/// Summary color for an outcome, seen from the first side
fn outcome_color(mode: Mode, outcome: Outcome) -> Color {
    match (mode, outcome) {
        (_, Outcome::Tie) => styles::TIE_TEXT,
        (Mode::HumanVsComputer, Outcome::FirstWins) => styles::WIN_TEXT,
        (Mode::HumanVsComputer, Outcome::SecondWins) => styles::LOSE_TEXT,
        (Mode::ComputerVsComputer, _) => styles::WIN_TEXT,
    }
}
