use super::*;

pub(crate) struct App {
  api_base_url: String,
  event_rx: UnboundedReceiver<Event>,
  event_tx: UnboundedSender<Event>,
  handle: Handle,
  state: State,
}

impl App {
  fn border_style(focused: bool) -> Style {
    if focused {
      Style::default().fg(Color::Cyan)
    } else {
      Style::default().fg(Color::DarkGray)
    }
  }

  fn draw(&mut self, frame: &mut Frame) {
    let layout = Layout::default()
      .direction(Direction::Vertical)
      .margin(1)
      .constraints([
        Constraint::Length(FORM_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(1),
      ])
      .split(frame.area());

    frame.render_widget(self.form_widget(), layout[0]);

    let body = Layout::default()
      .direction(Direction::Horizontal)
      .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
      .split(layout[1]);

    self.draw_participants(frame, body[0]);

    frame.render_widget(self.results_widget(), body[1]);

    let status = Paragraph::new(self.state.message().to_string())
      .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, layout[2]);

    self.state.help().draw(frame);
  }

  fn draw_participants(&mut self, frame: &mut Frame, area: Rect) {
    let focused = self.state.focus() == Focus::Participants;

    let participants = self.state.session().participants();

    let title = if participants.is_empty() {
      " Participants ".to_string()
    } else {
      format!(" Participants ({}) ", participants.len())
    };

    let block = Block::default()
      .title(title)
      .borders(Borders::ALL)
      .border_style(Self::border_style(focused));

    let inner_width = area.width.saturating_sub(2) as usize;

    let items: Vec<ListItem> = if participants.is_empty() {
      let text = if self.state.is_fetching() {
        LOADING_STATUS
      } else {
        "No participants yet. Enter a video URL and press enter."
      };

      vec![ListItem::new(Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::raw(text),
      ]))]
    } else {
      let draw = self.state.session().draw_result();

      participants
        .iter()
        .map(|comment| {
          Self::participant_item(comment, Self::tag(draw, comment), inner_width)
        })
        .collect()
    };

    let len = participants.len();
    let cursor = self.state.cursor();

    let mut list_state = ListState::default()
      .with_selected(if focused {
        cursor.selected_index(len)
      } else {
        None
      })
      .with_offset(cursor.offset(len));

    let list = List::new(items).block(block).highlight_style(
      Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD),
    );

    self
      .state
      .set_list_height(area.height.saturating_sub(2) as usize / 3);

    frame.render_stateful_widget(list, area, &mut list_state);

    self.state.set_list_offset(list_state.offset());
  }

  fn execute_effect(&mut self, effect: Effect) {
    match effect {
      Effect::FetchComments {
        api_key,
        keyword,
        request_id,
        video_id,
      } => {
        let client = Client::new(api_key, self.api_base_url.clone());

        let sender = self.event_tx.clone();

        self.handle.spawn(async move {
          let result =
            collect_comments(&client, &video_id, keyword.as_deref()).await;

          let _ = sender.send(Event::Comments { request_id, result });
        });
      }
      Effect::OpenUrl { url } => match webbrowser::open(&url) {
        Ok(()) => {
          self.state.set_transient_message(format!(
            "Opened in browser: {}",
            truncate(&url, 80)
          ));
        }
        Err(error) => {
          self
            .state
            .set_transient_message(format!("Could not open link: {error}"));
        }
      },
    }
  }

  fn form_widget(&self) -> Paragraph<'static> {
    let form = self.state.form();
    let focus = self.state.focus();

    let lines = Focus::FIELDS
      .iter()
      .map(|&field| {
        let focused = field == focus;

        let label_style = if focused {
          Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
        } else {
          Style::default().fg(Color::DarkGray)
        };

        let mut value = form.display_value(field);

        if focused {
          value.push('▏');
        }

        Line::from(vec![
          Span::raw(BASE_INDENT),
          Span::styled(format!("{:<11}", field.label()), label_style),
          Span::styled(value, Style::default().fg(Color::White)),
        ])
      })
      .collect::<Vec<_>>();

    Paragraph::new(lines).block(
      Block::default()
        .title(" Giveaway ")
        .borders(Borders::ALL)
        .border_style(Self::border_style(focus != Focus::Participants)),
    )
  }

  pub(crate) fn new(config: &Config) -> Self {
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    Self {
      api_base_url: config.api_base_url.clone(),
      event_rx,
      event_tx,
      handle: Handle::current(),
      state: State::new(config.api_key.clone()),
    }
  }

  fn participant_item(
    comment: &Comment,
    tag: Option<&'static str>,
    available_width: usize,
  ) -> ListItem<'static> {
    let mut header = vec![Span::raw(BASE_INDENT)];

    if let Some(tag) = tag {
      header.push(Span::styled(
        format!("{tag} "),
        Style::default().fg(Color::Yellow),
      ));
    }

    header.push(Span::styled(
      comment.author.clone(),
      Style::default().fg(Color::White),
    ));

    let mut lines = vec![Line::from(header)];

    let wrap_width = available_width.saturating_sub(BASE_INDENT.len()).max(1);

    let body = truncate(&comment.text, wrap_width.saturating_mul(2));

    for line in wrap_text(&body, wrap_width).into_iter().take(2) {
      lines.push(Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::styled(line, Style::default().fg(Color::DarkGray)),
      ]));
    }

    while lines.len() < 3 {
      lines.push(Line::from(Span::raw(BASE_INDENT)));
    }

    ListItem::new(lines)
  }

  fn process_pending_events(&mut self) {
    self.state.update_transient_message();

    while let Ok(event) = self.event_rx.try_recv() {
      self.state.handle_event(event);
    }
  }

  fn results_widget(&self) -> Paragraph<'static> {
    let heading = Style::default()
      .fg(Color::Cyan)
      .add_modifier(Modifier::BOLD);

    let lines = match self.state.session().draw_result() {
      Some(result) => {
        let mut lines = vec![Line::from(Span::styled("Winners", heading))];

        lines.extend(Self::result_lines(&result.winners));

        if !result.alternates.is_empty() {
          lines.push(Line::default());
          lines.push(Line::from(Span::styled("Alternates", heading)));
          lines.extend(Self::result_lines(&result.alternates));
        }

        lines
      }
      None => vec![Line::from(Span::styled(
        if self.state.session().can_draw() {
          "Set the counts and press ctrl+r to draw."
        } else {
          "Fetch comments to enable the draw."
        },
        Style::default().fg(Color::DarkGray),
      ))],
    };

    Paragraph::new(lines)
      .block(Block::default().title(" Results ").borders(Borders::ALL))
      .wrap(Wrap { trim: true })
  }

  fn result_lines(comments: &[Comment]) -> Vec<Line<'static>> {
    comments
      .iter()
      .enumerate()
      .flat_map(|(index, comment)| {
        [
          Line::from(vec![
            Span::raw(format!("{}. ", index + 1)),
            Span::styled(
              comment.author.clone(),
              Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            ),
          ]),
          Line::from(Span::styled(
            format!("   {}", truncate(&comment.text, 120)),
            Style::default().fg(Color::DarkGray),
          )),
        ]
      })
      .collect()
  }

  pub(crate) fn run(
    &mut self,
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
  ) -> Result {
    loop {
      self.process_pending_events();

      terminal.draw(|frame| self.draw(frame))?;

      if !crossterm_event::poll(Duration::from_millis(200))? {
        continue;
      }

      let CrosstermEvent::Key(key) = crossterm_event::read()? else {
        continue;
      };

      if key.kind != KeyEventKind::Press {
        continue;
      }

      let command = self.state.command_for_key(key);

      match self.state.dispatch_command(command) {
        Ok(dispatch) => {
          for effect in dispatch.effects {
            self.execute_effect(effect);
          }

          if dispatch.should_exit {
            break;
          }
        }
        Err(error) => {
          self.state.clear_pending_effects();
          self.state.set_transient_message(format!("error: {error}"));
        }
      }
    }

    Ok(())
  }

  fn tag(draw: Option<&DrawResult>, comment: &Comment) -> Option<&'static str> {
    let draw = draw?;

    if draw.winners.iter().any(|winner| winner.id == comment.id) {
      Some("★")
    } else if draw.alternates.iter().any(|alt| alt.id == comment.id) {
      Some("☆")
    } else {
      None
    }
  }
}
