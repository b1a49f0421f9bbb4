use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct DrawResult {
  pub(crate) alternates: Vec<Comment>,
  pub(crate) winners: Vec<Comment>,
}
