#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Command {
  DeleteChar,
  Draw,
  Fetch,
  FocusNext,
  FocusPrevious,
  HideHelp,
  Input(char),
  None,
  OpenPermalink,
  PageDown,
  PageUp,
  Quit,
  SelectFirst,
  SelectLast,
  SelectNext,
  SelectPrevious,
  ShowHelp,
}
