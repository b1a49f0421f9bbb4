use super::*;

pub(crate) struct State {
  cursor: ListCursor,
  focus: Focus,
  form: Form,
  help: HelpView,
  list_height: usize,
  message: String,
  next_request_id: u64,
  pending_effects: Vec<Effect>,
  pending_fetch: Option<PendingFetch>,
  session: Session,
  transient_message: Option<TransientMessage>,
}

impl State {
  pub(crate) fn clear_pending_effects(&mut self) {
    self.pending_effects.clear();
  }

  pub(crate) fn command_for_key(&self, key: KeyEvent) -> Command {
    if self.help.is_visible() {
      HelpView::handle_key(key)
    } else {
      self.focus.handle_key(key)
    }
  }

  pub(crate) fn cursor(&self) -> &ListCursor {
    &self.cursor
  }

  pub(crate) fn dispatch_command(
    &mut self,
    command: Command,
  ) -> Result<CommandDispatch> {
    debug_assert!(
      self.pending_effects.is_empty(),
      "command dispatch should start without pending effects"
    );

    let mut should_exit = false;

    let len = self.session.participants().len();
    let page = self.page_jump();

    match command {
      Command::Quit => should_exit = true,
      Command::ShowHelp => self.help.show(&mut self.message),
      Command::HideHelp => self.help.hide(&mut self.message),
      Command::FocusNext => self.focus = self.focus.next(),
      Command::FocusPrevious => self.focus = self.focus.previous(),
      Command::Input(ch) => self.form.insert(self.focus, ch),
      Command::DeleteChar => self.form.delete_char(self.focus),
      Command::Fetch => self.start_fetch(),
      Command::Draw => self.draw(),
      Command::SelectNext => self.cursor.select_next(len),
      Command::SelectPrevious => self.cursor.select_previous(len),
      Command::SelectFirst => self.cursor.set_selected(len, 0),
      Command::SelectLast => self.cursor.select_last(len),
      Command::PageDown => self.cursor.page_down(len, page),
      Command::PageUp => self.cursor.page_up(len, page),
      Command::OpenPermalink => self.open_permalink(),
      Command::None => {}
    }

    Ok(CommandDispatch {
      effects: std::mem::take(&mut self.pending_effects),
      should_exit,
    })
  }

  fn draw(&mut self) {
    if self.pending_fetch.is_some() {
      self.set_transient_message(FETCH_IN_PROGRESS_STATUS.into());
      return;
    }

    if !self.session.can_draw() {
      self.set_transient_message(
        "Fetch at least one participant before drawing.".into(),
      );
      return;
    }

    let counts = self
      .form
      .winners()
      .and_then(|winners| Ok((winners, self.form.alternates()?)));

    let (winners, alternates) = match counts {
      Ok(counts) => counts,
      Err(message) => {
        self.set_transient_message(message);
        return;
      }
    };

    let participants = self.session.participants().len();

    match self.session.draw(winners, alternates) {
      Ok(result) => {
        self.message = format!(
          "Drew {} and {} from {}",
          format_count(result.winners.len(), "winner"),
          format_count(result.alternates.len(), "alternate"),
          format_count(participants, "participant"),
        );
      }
      Err(error) => {
        tracing::warn!(%error, "draw refused");
        self.set_transient_message(format!("error: {error}"));
      }
    }
  }

  pub(crate) fn focus(&self) -> Focus {
    self.focus
  }

  pub(crate) fn form(&self) -> &Form {
    &self.form
  }

  pub(crate) fn handle_event(&mut self, event: Event) {
    match event {
      Event::Comments { request_id, result } => {
        let Some(pending) = self.pending_fetch.take_if(|pending| {
          pending.request_id == request_id
        }) else {
          return;
        };

        match result {
          Ok(participants) => {
            let count = participants.len();

            self.session.replace_participants(participants);
            self.cursor.reset();

            self.message = match (count, pending.keyword.as_deref()) {
              (0, Some(keyword)) => format!(
                "No comments on {} contain \"{}\".",
                pending.video_id,
                truncate(keyword, 40)
              ),
              (0, None) => {
                format!("No comments found on {}.", pending.video_id)
              }
              _ => format!(
                "Found {}! Press ctrl+r to draw.",
                format_count(count, "participant")
              ),
            };
          }
          Err(error) => {
            tracing::error!(%error, video_id = %pending.video_id, "fetch failed");
            self.message = IDLE_STATUS.into();
            self.set_transient_message(format!("error: {error}"));
          }
        }
      }
    }
  }

  pub(crate) fn help(&self) -> &HelpView {
    &self.help
  }

  pub(crate) fn is_fetching(&self) -> bool {
    self.pending_fetch.is_some()
  }

  pub(crate) fn message(&self) -> &str {
    &self.message
  }

  pub(crate) fn new(api_key: Option<String>) -> Self {
    let focus = if api_key.is_some() {
      Focus::VideoUrl
    } else {
      Focus::ApiKey
    };

    Self {
      cursor: ListCursor::default(),
      focus,
      form: Form::new(api_key),
      help: HelpView::new(),
      list_height: 0,
      message: IDLE_STATUS.into(),
      next_request_id: 0,
      pending_effects: Vec::new(),
      pending_fetch: None,
      session: Session::default(),
      transient_message: None,
    }
  }

  fn open_permalink(&mut self) {
    let participants = self.session.participants();

    let Some(comment) = self
      .cursor
      .selected_index(participants.len())
      .and_then(|index| participants.get(index))
    else {
      return;
    };

    match comment.permalink.clone() {
      Some(url) => self.pending_effects.push(Effect::OpenUrl { url }),
      None => self.set_transient_message("This comment has no link.".into()),
    }
  }

  fn page_jump(&self) -> usize {
    self.list_height.saturating_sub(1).max(1)
  }

  pub(crate) fn session(&self) -> &Session {
    &self.session
  }

  pub(crate) fn set_list_height(&mut self, height: usize) {
    self.list_height = height;
  }

  pub(crate) fn set_list_offset(&mut self, offset: usize) {
    let len = self.session.participants().len();
    self.cursor.set_offset(len, offset);
  }

  pub(crate) fn set_transient_message(&mut self, message: String) {
    let original = self.transient_message.as_ref().map_or_else(
      || self.message.clone(),
      |transient| transient.original().to_string(),
    );

    self.transient_message =
      Some(TransientMessage::new(message.clone(), original));

    self.message = message;
  }

  fn start_fetch(&mut self) {
    if self.pending_fetch.is_some() {
      self.set_transient_message(FETCH_IN_PROGRESS_STATUS.into());
      return;
    }

    let api_key = self.form.api_key().to_string();

    if api_key.is_empty() {
      self.focus = Focus::ApiKey;
      self.set_transient_message("Enter your YouTube API key first.".into());
      return;
    }

    let url = self.form.video_url();

    if url.is_empty() {
      self.focus = Focus::VideoUrl;
      self.set_transient_message("Enter a video URL first.".into());
      return;
    }

    let Some(video_id) = VideoId::extract(url) else {
      let error = Error::InvalidUrl {
        url: truncate(url, 60),
      };

      self.set_transient_message(format!("error: {error}"));
      return;
    };

    let keyword = self.form.keyword().map(str::to_owned);

    let request_id = self.next_request_id;

    self.next_request_id = self.next_request_id.wrapping_add(1);

    tracing::info!(%video_id, keyword = keyword.as_deref(), "fetching comments");

    self.message = format!("Loading comments for {video_id}...");

    self.pending_fetch = Some(PendingFetch {
      keyword: keyword.clone(),
      request_id,
      video_id: video_id.clone(),
    });

    self.pending_effects.push(Effect::FetchComments {
      api_key,
      keyword,
      request_id,
      video_id,
    });
  }

  pub(crate) fn update_transient_message(&mut self) {
    if let Some(transient) = self.transient_message.clone() {
      if self.message != transient.current() {
        self.transient_message = None;
      } else if transient.is_expired() {
        self.message = transient.original().to_string();
        self.transient_message = None;
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn comment(id: &str, permalink: Option<&str>) -> Comment {
    Comment {
      author: format!("@{id}"),
      id: id.to_string(),
      permalink: permalink.map(str::to_owned),
      text: "participo".to_string(),
    }
  }

  fn dispatch(state: &mut State, command: Command) -> CommandDispatch {
    state.dispatch_command(command).expect("dispatch succeeds")
  }

  fn type_text(state: &mut State, text: &str) {
    for ch in text.chars() {
      dispatch(state, Command::Input(ch));
    }
  }

  fn ready_state() -> State {
    let mut state = State::new(Some("key".to_string()));
    type_text(&mut state, "https://youtu.be/dQw4w9WgXcQ");
    state
  }

  fn fetch_request_id(dispatch: &CommandDispatch) -> u64 {
    match &dispatch.effects[..] {
      [Effect::FetchComments { request_id, .. }] => *request_id,
      _ => panic!("expected a single fetch effect"),
    }
  }

  fn fetched_state(participants: Vec<Comment>) -> State {
    let mut state = ready_state();

    let request_id = fetch_request_id(&dispatch(&mut state, Command::Fetch));

    state.handle_event(Event::Comments {
      request_id,
      result: Ok(participants),
    });

    state
  }

  #[test]
  fn fetch_emits_effect_with_video_id_and_keyword() {
    let mut state = ready_state();

    dispatch(&mut state, Command::FocusNext);
    type_text(&mut state, " Participo ");

    let dispatch = dispatch(&mut state, Command::Fetch);

    match &dispatch.effects[..] {
      [
        Effect::FetchComments {
          api_key,
          keyword,
          video_id,
          ..
        },
      ] => {
        assert_eq!(api_key, "key");
        assert_eq!(keyword.as_deref(), Some("Participo"));
        assert_eq!(video_id.as_str(), "dQw4w9WgXcQ");
      }
      _ => panic!("unexpected effects"),
    }

    assert!(state.is_fetching());
    assert_eq!(state.message, "Loading comments for dQw4w9WgXcQ...");
  }

  #[test]
  fn fetch_without_api_key_is_refused() {
    let mut state = State::new(None);

    let dispatch = dispatch(&mut state, Command::Fetch);

    assert!(dispatch.effects.is_empty());
    assert_eq!(state.focus, Focus::ApiKey);
    assert_eq!(state.message, "Enter your YouTube API key first.");
  }

  #[test]
  fn fetch_with_invalid_url_is_refused() {
    let mut state = State::new(Some("key".to_string()));
    type_text(&mut state, "https://example.com/");

    let dispatch = dispatch(&mut state, Command::Fetch);

    assert!(dispatch.effects.is_empty());
    assert!(!state.is_fetching());
    assert_eq!(
      state.message,
      "error: no video id found in `https://example.com/`"
    );
  }

  #[test]
  fn second_fetch_is_refused_while_one_is_running() {
    let mut state = ready_state();

    dispatch(&mut state, Command::Fetch);

    let second = dispatch(&mut state, Command::Fetch);

    assert!(second.effects.is_empty());
    assert_eq!(state.message, FETCH_IN_PROGRESS_STATUS);
  }

  #[test]
  fn successful_fetch_replaces_participants() {
    let state = fetched_state(vec![comment("a", None), comment("b", None)]);

    assert!(!state.is_fetching());
    assert_eq!(state.session.participants().len(), 2);
    assert_eq!(state.message, "Found 2 participants! Press ctrl+r to draw.");
  }

  #[test]
  fn empty_fetch_warns_and_disables_draw() {
    let mut state = ready_state();

    dispatch(&mut state, Command::FocusNext);
    type_text(&mut state, "participo");

    let request_id = fetch_request_id(&dispatch(&mut state, Command::Fetch));

    state.handle_event(Event::Comments {
      request_id,
      result: Ok(Vec::new()),
    });

    assert_eq!(
      state.message,
      "No comments on dQw4w9WgXcQ contain \"participo\"."
    );

    dispatch(&mut state, Command::Draw);

    assert!(state.session.draw_result().is_none());
    assert_eq!(
      state.message,
      "Fetch at least one participant before drawing."
    );
  }

  #[test]
  fn failed_fetch_keeps_previous_participants() {
    let mut state = fetched_state(vec![comment("a", None)]);

    let request_id = fetch_request_id(&dispatch(&mut state, Command::Fetch));

    state.handle_event(Event::Comments {
      request_id,
      result: Err(Error::from(FetchError::Status { status: 500 })),
    });

    assert!(!state.is_fetching());
    assert_eq!(state.session.participants().len(), 1);
    assert_eq!(
      state.message,
      "error: could not retrieve comments: request failed with HTTP 500"
    );
  }

  #[test]
  fn stale_results_are_ignored() {
    let mut state = ready_state();

    let request_id = fetch_request_id(&dispatch(&mut state, Command::Fetch));

    state.handle_event(Event::Comments {
      request_id: request_id.wrapping_add(1),
      result: Ok(vec![comment("a", None)]),
    });

    assert!(state.is_fetching());
    assert!(state.session.participants().is_empty());
  }

  #[test]
  fn draw_records_result_in_session() {
    let mut state = fetched_state(vec![
      comment("a", None),
      comment("b", None),
      comment("c", None),
    ]);

    state.focus = Focus::Alternates;
    dispatch(&mut state, Command::DeleteChar);
    type_text(&mut state, "1");

    dispatch(&mut state, Command::Draw);

    let result = state.session.draw_result().expect("draw succeeded");

    assert_eq!(result.winners.len(), 1);
    assert_eq!(result.alternates.len(), 1);
    assert_eq!(
      state.message,
      "Drew 1 winner and 1 alternate from 3 participants"
    );
  }

  #[test]
  fn draw_reports_insufficient_participants() {
    let mut state = fetched_state(vec![comment("a", None), comment("b", None)]);

    state.focus = Focus::Winners;
    dispatch(&mut state, Command::DeleteChar);
    type_text(&mut state, "2");

    state.focus = Focus::Alternates;
    dispatch(&mut state, Command::DeleteChar);
    type_text(&mut state, "1");

    dispatch(&mut state, Command::Draw);

    assert!(state.session.draw_result().is_none());
    assert_eq!(
      state.message,
      "error: not enough participants: 3 required but only 2 available"
    );
  }

  #[test]
  fn open_permalink_opens_selected_comment() {
    let mut state = fetched_state(vec![
      comment("a", Some("https://www.youtube.com/watch?v=dQw4w9WgXcQ&lc=a")),
      comment("b", Some("https://www.youtube.com/watch?v=dQw4w9WgXcQ&lc=b")),
    ]);

    state.focus = Focus::Participants;
    dispatch(&mut state, Command::SelectNext);

    let dispatch = dispatch(&mut state, Command::OpenPermalink);

    match &dispatch.effects[..] {
      [Effect::OpenUrl { url }] => {
        assert_eq!(url, "https://www.youtube.com/watch?v=dQw4w9WgXcQ&lc=b");
      }
      _ => panic!("unexpected effects"),
    }
  }

  #[test]
  fn quit_sets_should_exit() {
    let mut state = State::new(None);
    assert!(dispatch(&mut state, Command::Quit).should_exit);
  }
}
