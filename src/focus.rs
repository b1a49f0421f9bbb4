use super::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum Focus {
  Alternates,
  #[default]
  ApiKey,
  Keyword,
  Participants,
  VideoUrl,
  Winners,
}

impl Focus {
  const ORDER: [Focus; 6] = [
    Focus::ApiKey,
    Focus::VideoUrl,
    Focus::Keyword,
    Focus::Winners,
    Focus::Alternates,
    Focus::Participants,
  ];

  pub(crate) const FIELDS: [Focus; 5] = [
    Focus::ApiKey,
    Focus::VideoUrl,
    Focus::Keyword,
    Focus::Winners,
    Focus::Alternates,
  ];

  pub(crate) fn handle_key(self, key: KeyEvent) -> Command {
    let modifiers = key.modifiers;

    if modifiers.contains(KeyModifiers::CONTROL) {
      return match key.code {
        KeyCode::Char('c') => Command::Quit,
        KeyCode::Char('f') => Command::Fetch,
        KeyCode::Char('r') => Command::Draw,
        _ => Command::None,
      };
    }

    match key.code {
      KeyCode::Tab => return Command::FocusNext,
      KeyCode::BackTab => return Command::FocusPrevious,
      KeyCode::Esc => return Command::Quit,
      KeyCode::F(1) => return Command::ShowHelp,
      _ => {}
    }

    if self == Focus::Participants {
      return match key.code {
        KeyCode::Char('q' | 'Q') => Command::Quit,
        KeyCode::Char('?') => Command::ShowHelp,
        KeyCode::Down | KeyCode::Char('j') => Command::SelectNext,
        KeyCode::Up | KeyCode::Char('k') => Command::SelectPrevious,
        KeyCode::PageDown => Command::PageDown,
        KeyCode::PageUp => Command::PageUp,
        KeyCode::Home => Command::SelectFirst,
        KeyCode::End => Command::SelectLast,
        KeyCode::Enter | KeyCode::Char('o' | 'O') => Command::OpenPermalink,
        KeyCode::Char('f') => Command::Fetch,
        KeyCode::Char('d') => Command::Draw,
        _ => Command::None,
      };
    }

    match key.code {
      KeyCode::Enter => self.submit_command(),
      KeyCode::Backspace => Command::DeleteChar,
      KeyCode::Char(ch)
        if !modifiers.contains(KeyModifiers::ALT)
          && !modifiers.contains(KeyModifiers::SUPER) =>
      {
        Command::Input(ch)
      }
      _ => Command::None,
    }
  }

  pub(crate) fn is_count(self) -> bool {
    matches!(self, Focus::Winners | Focus::Alternates)
  }

  pub(crate) fn label(self) -> &'static str {
    match self {
      Focus::Alternates => "Alternates",
      Focus::ApiKey => "API key",
      Focus::Keyword => "Keyword",
      Focus::Participants => "Participants",
      Focus::VideoUrl => "Video URL",
      Focus::Winners => "Winners",
    }
  }

  pub(crate) fn next(self) -> Self {
    let index = Self::position(self);
    Self::ORDER[(index + 1) % Self::ORDER.len()]
  }

  fn position(self) -> usize {
    Self::ORDER
      .iter()
      .position(|focus| *focus == self)
      .unwrap_or(0)
  }

  pub(crate) fn previous(self) -> Self {
    let index = Self::position(self);
    Self::ORDER[(index + Self::ORDER.len() - 1) % Self::ORDER.len()]
  }

  fn submit_command(self) -> Command {
    if self.is_count() {
      Command::Draw
    } else {
      Command::Fetch
    }
  }
}
