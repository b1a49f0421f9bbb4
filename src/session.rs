use super::*;

/// Participants from the latest successful fetch and the latest draw over them.
#[derive(Debug, Default)]
pub(crate) struct Session {
  draw: Option<DrawResult>,
  participants: Vec<Comment>,
}

impl Session {
  pub(crate) fn can_draw(&self) -> bool {
    !self.participants.is_empty()
  }

  pub(crate) fn draw(
    &mut self,
    winners: usize,
    alternates: usize,
  ) -> Result<&DrawResult, Error> {
    let result = draw_winners(&self.participants, winners, alternates)?;
    Ok(&*self.draw.insert(result))
  }

  pub(crate) fn draw_result(&self) -> Option<&DrawResult> {
    self.draw.as_ref()
  }

  pub(crate) fn participants(&self) -> &[Comment] {
    &self.participants
  }

  pub(crate) fn replace_participants(&mut self, participants: Vec<Comment>) {
    self.participants = participants;
    self.draw = None;
  }
}
