/// Selection and scroll position over a list owned elsewhere.
#[derive(Debug, Default)]
pub(crate) struct ListCursor {
  offset: usize,
  selected: usize,
}

impl ListCursor {
  pub(crate) fn offset(&self, len: usize) -> usize {
    if len == 0 {
      0
    } else {
      self.offset.min(self.selected.min(len - 1))
    }
  }

  pub(crate) fn page_down(&mut self, len: usize, page: usize) {
    self.set_selected(len, self.selected.saturating_add(page.max(1)));
  }

  pub(crate) fn page_up(&mut self, len: usize, page: usize) {
    self.set_selected(len, self.selected.saturating_sub(page.max(1)));
  }

  pub(crate) fn reset(&mut self) {
    *self = Self::default();
  }

  pub(crate) fn select_last(&mut self, len: usize) {
    self.set_selected(len, len.saturating_sub(1));
  }

  pub(crate) fn select_next(&mut self, len: usize) {
    self.set_selected(len, self.selected.saturating_add(1));
  }

  pub(crate) fn select_previous(&mut self, len: usize) {
    self.set_selected(len, self.selected.saturating_sub(1));
  }

  pub(crate) fn selected_index(&self, len: usize) -> Option<usize> {
    if len == 0 {
      None
    } else {
      Some(self.selected.min(len - 1))
    }
  }

  pub(crate) fn set_offset(&mut self, len: usize, offset: usize) {
    self.offset = offset.min(len.saturating_sub(1));
  }

  pub(crate) fn set_selected(&mut self, len: usize, index: usize) {
    self.selected = index.min(len.saturating_sub(1));
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn selected_index_is_none_when_empty() {
    let cursor = ListCursor::default();
    assert_eq!(cursor.selected_index(0), None);
    assert_eq!(cursor.offset(0), 0);
  }

  #[test]
  fn selection_and_offset_are_clamped_to_bounds() {
    let mut cursor = ListCursor::default();

    cursor.set_selected(3, 10);
    assert_eq!(cursor.selected_index(3), Some(2));

    cursor.set_offset(3, 10);
    assert_eq!(cursor.offset(3), 2);
  }

  #[test]
  fn moving_stops_at_both_ends() {
    let mut cursor = ListCursor::default();

    cursor.select_previous(4);
    assert_eq!(cursor.selected_index(4), Some(0));

    cursor.select_last(4);
    cursor.select_next(4);
    assert_eq!(cursor.selected_index(4), Some(3));
  }

  #[test]
  fn paging_jumps_by_page_size() {
    let mut cursor = ListCursor::default();

    cursor.page_down(100, 10);
    assert_eq!(cursor.selected_index(100), Some(10));

    cursor.page_up(100, 4);
    assert_eq!(cursor.selected_index(100), Some(6));

    cursor.page_down(100, 0);
    assert_eq!(cursor.selected_index(100), Some(7));
  }

  #[test]
  fn shrinking_list_clamps_selection() {
    let mut cursor = ListCursor::default();

    cursor.set_selected(10, 8);
    assert_eq!(cursor.selected_index(3), Some(2));
  }
}
