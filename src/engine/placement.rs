//! Word placement
//!
//! Finds a collision-free span for a word by random probing. A bounded number
//! of rounds keeps a crowded grid from looping forever; running out of rounds
//! is reported to the caller as a failed placement.

use crate::core::{GridGeometry, PlacedWord};
use rand::Rng;

/// Random probes per word before giving up
pub const PLACEMENT_ROUNDS: usize = 20;

/// Try to place `word` somewhere in the grid without touching `placed`
///
/// Each round draws a panel and a start offset uniformly, so that the whole
/// word fits inside the panel's buffer. The first span that does not overlap
/// any word already in that panel wins, and the word's screen cells are
/// computed. After [`PLACEMENT_ROUNDS`] failed rounds the word's placement is
/// cleared and `false` is returned; the caller must not keep it.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use termlink::core::{GridGeometry, PlacedWord};
/// use termlink::engine::place_word;
///
/// let geometry = GridGeometry::new(1, 1, 4);
/// let mut rng = StdRng::seed_from_u64(1);
///
/// let mut word = PlacedWord::unplaced("CODE");
/// assert!(place_word(&mut word, &[], &geometry, &mut rng));
/// assert_eq!((word.start(), word.end()), (0, 4));
///
/// let mut big = PlacedWord::unplaced("ROBOTS");
/// assert!(!place_word(&mut big, &[], &geometry, &mut rng));
/// ```
pub fn place_word<R: Rng>(
    word: &mut PlacedWord,
    placed: &[PlacedWord],
    geometry: &GridGeometry,
    rng: &mut R,
) -> bool {
    let capacity = geometry.panel_capacity();
    let Some(last_start) = capacity.checked_sub(word.len()) else {
        tracing::trace!(word = word.text(), capacity, "word longer than a panel");
        word.clear_placement();
        return false;
    };
    if geometry.panels() == 0 {
        word.clear_placement();
        return false;
    }

    for round in 0..PLACEMENT_ROUNDS {
        let panel = rng.random_range(0..geometry.panels());
        let start = rng.random_range(0..=last_start);
        word.place_at(panel, start, geometry);

        let collides = placed
            .iter()
            .any(|other| other.panel() == panel && word.overlaps(other));
        if !collides {
            return true;
        }

        tracing::trace!(word = word.text(), round, panel, start, "placement collided");
    }

    word.clear_placement();
    false
}
