use super::*;

pub(crate) enum Event {
  Comments {
    request_id: u64,
    result: Result<Vec<Comment>, Error>,
  },
}
