use super::*;

/// Draws winners and alternates from a fresh, unpredictable permutation.
pub(crate) fn draw_winners(
  participants: &[Comment],
  winners: usize,
  alternates: usize,
) -> Result<DrawResult, Error> {
  draw_winners_with_rng(participants, winners, alternates, &mut rand::rng())
}

/// Shuffles a copy of `participants` and splits the front of the permutation
/// into `winners` followed by `alternates`. Everyone past that is unselected.
pub(crate) fn draw_winners_with_rng<R: Rng + ?Sized>(
  participants: &[Comment],
  winners: usize,
  alternates: usize,
  rng: &mut R,
) -> Result<DrawResult, Error> {
  if winners == 0 {
    return Err(Error::NoWinnersRequested);
  }

  let required = winners.saturating_add(alternates);

  if participants.len() < required {
    return Err(Error::InsufficientParticipants {
      available: participants.len(),
      required,
    });
  }

  let mut pool = participants.to_vec();

  pool.shuffle(rng);
  pool.truncate(required);

  let alternates = pool.split_off(winners);

  tracing::info!(
    participants = participants.len(),
    winners = pool.len(),
    alternates = alternates.len(),
    "drew winners"
  );

  Ok(DrawResult {
    alternates,
    winners: pool,
  })
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    rand::{SeedableRng, rngs::StdRng},
    std::collections::HashSet,
  };

  fn participants(names: &[&str]) -> Vec<Comment> {
    names
      .iter()
      .map(|name| Comment {
        author: (*name).to_string(),
        id: format!("id-{name}"),
        permalink: None,
        text: format!("{name} participa"),
      })
      .collect()
  }

  fn ids(comments: &[Comment]) -> HashSet<&str> {
    comments.iter().map(|comment| comment.id.as_str()).collect()
  }

  #[test]
  fn five_participants_two_winners_one_alternate() {
    let pool = participants(&["A", "B", "C", "D", "E"]);

    let result =
      draw_winners_with_rng(&pool, 2, 1, &mut StdRng::seed_from_u64(7)).unwrap();

    assert_eq!(result.winners.len(), 2);
    assert_eq!(result.alternates.len(), 1);

    let winners = ids(&result.winners);
    let alternates = ids(&result.alternates);

    assert!(winners.is_disjoint(&alternates));
    assert!(winners.is_subset(&ids(&pool)));
    assert!(alternates.is_subset(&ids(&pool)));
    assert_eq!(pool.len() - winners.len() - alternates.len(), 2);
  }

  #[test]
  fn two_participants_cannot_fill_three_places() {
    let pool = participants(&["A", "B"]);

    let error = draw_winners(&pool, 2, 1).unwrap_err();

    assert!(matches!(
      error,
      Error::InsufficientParticipants {
        available: 2,
        required: 3
      }
    ));

    assert_eq!(
      error.to_string(),
      "not enough participants: 3 required but only 2 available"
    );
  }

  #[test]
  fn fails_exactly_when_pool_is_smaller_than_requested() {
    let mut rng = StdRng::seed_from_u64(1);

    for size in 0..6 {
      let pool = participants(&["A", "B", "C", "D", "E"][..size]);

      for winners in 1..4 {
        for alternates in 0..3 {
          let result = draw_winners_with_rng(&pool, winners, alternates, &mut rng);

          assert_eq!(
            result.is_err(),
            size < winners + alternates,
            "size={size} winners={winners} alternates={alternates}"
          );
        }
      }
    }
  }

  #[test]
  fn exact_fit_selects_everyone() {
    let pool = participants(&["A", "B", "C"]);

    let result = draw_winners(&pool, 2, 1).unwrap();

    let mut selected = ids(&result.winners);
    selected.extend(ids(&result.alternates));

    assert_eq!(selected, ids(&pool));
  }

  #[test]
  fn zero_winners_is_rejected() {
    let pool = participants(&["A", "B"]);

    assert!(matches!(
      draw_winners(&pool, 0, 1),
      Err(Error::NoWinnersRequested)
    ));
  }

  #[test]
  fn each_participant_wins_with_roughly_equal_frequency() {
    let pool = participants(&["A", "B", "C", "D", "E"]);

    let mut rng = StdRng::seed_from_u64(42);
    let mut wins = [0usize; 5];

    let trials = 20_000;

    for _ in 0..trials {
      let result = draw_winners_with_rng(&pool, 2, 1, &mut rng).unwrap();

      for winner in &result.winners {
        let index = pool.iter().position(|p| p.id == winner.id).unwrap();
        wins[index] += 1;
      }
    }

    // Expected 2/5 of trials each; allow a generous tolerance.
    let expected = trials * 2 / 5;

    for count in wins {
      assert!(
        count.abs_diff(expected) < expected / 20,
        "win count {count} too far from {expected}"
      );
    }
  }

  #[test]
  fn repeated_draws_do_not_repeat_the_same_order() {
    let pool = participants(&[
      "A", "B", "C", "D", "E", "F", "G", "H", "I", "J",
    ]);

    let orders = (0..20)
      .map(|_| {
        draw_winners(&pool, 5, 0)
          .unwrap()
          .winners
          .into_iter()
          .map(|comment| comment.id)
          .collect::<Vec<_>>()
      })
      .collect::<HashSet<_>>();

    assert!(orders.len() > 1);
  }
}
