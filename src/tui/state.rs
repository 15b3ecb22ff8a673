// src/tui/state.rs - Dashboard menu state machine.
//
// Pure state: no terminal, no IO. The event loop in `app.rs` owns exactly
// one `DashboardState` and feeds it one `MenuKey` at a time.

use crate::infra::errors::BrightsideError;

/// Prefix of the highlighted option.
pub const MARKER: &str = "👉";
/// Prefix of every other option; same display width as `MARKER`.
pub const BLANK_MARKER: &str = "  ";

pub const INSTRUCTIONS: &str = "Use ↑ ↓ to navigate, Enter to select, Q to quit.";

pub const FAREWELL: &str = "👋 Jack: See ya later, boss.";

/// Title, then instructions. Option lines follow.
pub const HEADER_LINES: usize = 2;

const JACK_TITLE: &str = "Brightside Jack";

const JACK_OPTIONS: [&str; 5] = [
    "📡 Live Twitch Chat",
    "🖥 System Stats",
    "📰 News Feeds",
    "🤖 Jack AI",
    "❌ Exit",
];

/// Input after key mapping. The mapping itself lives in `tui::keys`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKey {
    Up,
    Down,
    Select,
    Quit,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Terminated,
}

/// Side effect requested by one input step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The user selected the option with this label.
    Executing(String),
    Farewell,
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::Executing(label) => format!("✅ Jack: Executing {label}"),
            Notice::Farewell => FAREWELL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub notice: Option<Notice>,
    pub terminate: bool,
}

impl Transition {
    fn stay() -> Self {
        Self {
            notice: None,
            terminate: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DashboardState {
    title: String,
    selected: usize,
    options: Vec<String>,
    phase: Phase,
}

impl DashboardState {
    /// Build a menu. Fails on an empty option list, which has no valid selection.
    pub fn new(
        title: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, BrightsideError> {
        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        if options.is_empty() {
            return Err(BrightsideError::Config(
                "dashboard menu needs at least one option".into(),
            ));
        }
        Ok(Self {
            title: title.into(),
            selected: 0,
            options,
            phase: Phase::Running,
        })
    }

    /// The fixed Brightside Jack menu.
    pub fn jack() -> Self {
        Self {
            title: JACK_TITLE.into(),
            selected: 0,
            options: JACK_OPTIONS.iter().map(|s| s.to_string()).collect(),
            phase: Phase::Running,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_label(&self) -> &str {
        &self.options[self.selected]
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Apply one key. Once terminated, every key is ignored.
    pub fn handle_input(&mut self, key: MenuKey) -> Transition {
        if self.phase == Phase::Terminated {
            return Transition {
                notice: None,
                terminate: true,
            };
        }

        match key {
            MenuKey::Down => {
                if self.selected + 1 < self.options.len() {
                    self.selected += 1;
                }
                Transition::stay()
            }
            MenuKey::Up => {
                self.selected = self.selected.saturating_sub(1);
                Transition::stay()
            }
            MenuKey::Select => Transition {
                notice: Some(Notice::Executing(self.selected_label().to_string())),
                terminate: false,
            },
            MenuKey::Quit => {
                self.phase = Phase::Terminated;
                Transition {
                    notice: Some(Notice::Farewell),
                    terminate: true,
                }
            }
            MenuKey::Other => Transition::stay(),
        }
    }

    pub fn title_line(&self) -> String {
        format!("🚀 {} - AI Terminal Dashboard", self.title)
    }

    /// One line per option, marker first.
    pub fn option_lines(&self) -> Vec<String> {
        self.options
            .iter()
            .enumerate()
            .map(|(i, option)| {
                let cursor = if i == self.selected {
                    MARKER
                } else {
                    BLANK_MARKER
                };
                format!("{cursor} {option}")
            })
            .collect()
    }

    /// Plain-text frame: title, instructions, options, separated by blank lines.
    pub fn render(&self) -> String {
        format!(
            "{}\n\n{}\n\n{}\n",
            self.title_line(),
            INSTRUCTIONS,
            self.option_lines().join("\n")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> DashboardState {
        DashboardState::new("Test", ["A", "B", "C"]).unwrap()
    }

    fn apply(state: &mut DashboardState, keys: &[MenuKey]) {
        for key in keys {
            state.handle_input(*key);
        }
    }

    #[test]
    fn test_new_starts_at_zero() {
        let state = abc();
        assert_eq!(state.selected(), 0);
        assert_eq!(state.phase(), Phase::Running);
    }

    #[test]
    fn test_new_rejects_empty_options() {
        let err = DashboardState::new("Empty", Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, BrightsideError::Config(_)));
    }

    #[test]
    fn test_jack_menu() {
        let state = DashboardState::jack();
        assert_eq!(state.title_line(), "🚀 Brightside Jack - AI Terminal Dashboard");
        assert_eq!(state.options().len(), 5);
        assert_eq!(state.options()[0], "📡 Live Twitch Chat");
        assert_eq!(state.options()[4], "❌ Exit");
    }

    #[test]
    fn test_down_clamps_at_last() {
        let mut state = abc();
        apply(&mut state, &[MenuKey::Down, MenuKey::Down, MenuKey::Down]);
        assert_eq!(state.selected(), 2);
    }

    #[test]
    fn test_up_clamps_at_zero() {
        let mut state = abc();
        apply(&mut state, &[MenuKey::Down, MenuKey::Down, MenuKey::Down]);
        apply(
            &mut state,
            &[MenuKey::Up, MenuKey::Up, MenuKey::Up, MenuKey::Up],
        );
        assert_eq!(state.selected(), 0);
    }

    #[test]
    fn test_up_at_zero_is_idempotent() {
        let mut state = abc();
        let t = state.handle_input(MenuKey::Up);
        assert_eq!(state.selected(), 0);
        assert_eq!(t.notice, None);
        assert!(!t.terminate);
    }

    #[test]
    fn test_single_option_never_moves() {
        let mut state = DashboardState::new("One", ["only"]).unwrap();
        apply(&mut state, &[MenuKey::Down, MenuKey::Up, MenuKey::Down]);
        assert_eq!(state.selected(), 0);
    }

    #[test]
    fn test_index_stays_in_bounds_for_all_short_sequences() {
        // Every up/down sequence up to length 8 over a 3-option menu.
        for len in 0..=8u32 {
            for bits in 0..(1u32 << len) {
                let mut state = abc();
                for i in 0..len {
                    let key = if bits & (1 << i) == 0 {
                        MenuKey::Up
                    } else {
                        MenuKey::Down
                    };
                    state.handle_input(key);
                    assert!(state.selected() < 3);
                }
            }
        }
    }

    #[test]
    fn test_select_names_option_exactly() {
        let mut state = abc();
        state.handle_input(MenuKey::Down);
        let t = state.handle_input(MenuKey::Select);
        assert_eq!(t.notice, Some(Notice::Executing("B".into())));
        assert!(!t.terminate);
        assert_eq!(t.notice.unwrap().message(), "✅ Jack: Executing B");
        assert_eq!(state.selected(), 1);
    }

    #[test]
    fn test_other_key_is_noop() {
        let mut state = abc();
        state.handle_input(MenuKey::Down);
        let t = state.handle_input(MenuKey::Other);
        assert_eq!(t, Transition::stay());
        assert_eq!(state.selected(), 1);
    }

    #[test]
    fn test_quit_terminates_with_farewell() {
        let mut state = abc();
        let t = state.handle_input(MenuKey::Quit);
        assert!(t.terminate);
        assert_eq!(t.notice, Some(Notice::Farewell));
        assert_eq!(state.phase(), Phase::Terminated);
    }

    #[test]
    fn test_input_after_quit_is_ignored() {
        let mut state = abc();
        state.handle_input(MenuKey::Down);
        state.handle_input(MenuKey::Quit);

        for key in [MenuKey::Down, MenuKey::Select, MenuKey::Up, MenuKey::Quit] {
            let t = state.handle_input(key);
            assert!(t.terminate);
            assert_eq!(t.notice, None);
        }
        assert_eq!(state.selected(), 1);
        assert!(!state.is_running());
    }

    #[test]
    fn test_render_line_counts_and_single_marker() {
        let mut state = DashboardState::jack();
        for _ in 0..state.options().len() {
            let text = state.render();
            let lines: Vec<&str> = text.lines().filter(|l| !l.is_empty()).collect();
            assert_eq!(lines.len(), HEADER_LINES + state.options().len());
            assert_eq!(lines.iter().filter(|l| l.starts_with(MARKER)).count(), 1);
            state.handle_input(MenuKey::Down);
        }
    }

    #[test]
    fn test_render_text() {
        let mut state = abc();
        state.handle_input(MenuKey::Down);
        pretty_assertions::assert_eq!(
            state.render(),
            "🚀 Test - AI Terminal Dashboard\n\
             \n\
             Use ↑ ↓ to navigate, Enter to select, Q to quit.\n\
             \n\
             \u{20}\u{20} A\n\
             👉 B\n\
             \u{20}\u{20} C\n"
        );
    }

    #[test]
    fn test_blank_marker_pads_unselected() {
        let state = abc();
        let lines = state.option_lines();
        assert_eq!(lines[0], "👉 A");
        assert_eq!(lines[1], "   B");
        assert_eq!(lines[2], "   C");
    }
}
