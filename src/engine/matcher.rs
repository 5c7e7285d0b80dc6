//! Match resolution state machine.
//!
//! The engine decides, for each selection, whether the card joins the play
//! set, and resolves the set once it holds `max_cards_in_play` cards.
//!
//! ## Resolution
//!
//! A full play set is evaluated immediately: it matches iff every face equals
//! the face of the first card. What happens next is deferred:
//!
//! - **Match**: resolved once no card in the set is still flipping, i.e.
//!   when the last flip completion arrives. Cards are marked matched, the
//!   score and clock are credited, and the set is cleared.
//! - **Mismatch**: resolved by the caller's timers. [`MatchEngine::reject`]
//!   turns every card back over and clears the set.
//!
//! While a full set waits for resolution every further selection is ignored,
//! which keeps `play_set().len() <= max_cards_in_play` at all times.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::state::{GameSession, Outcome};
use super::table::Table;
use crate::cards::FlipTicket;
use crate::core::entity::CardId;

/// Cards face up and awaiting resolution, in selection order.
pub type PlaySet = SmallVec<[CardId; 4]>;

/// Result of evaluating a full play set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    Match,
    Mismatch,
}

/// Result of a selection event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    /// Not accepted: game over, card not interactive, already in play, or
    /// the play set is full.
    Ignored,
    /// Accepted; the play set has room for more.
    Flipping(FlipTicket),
    /// Accepted and the play set is now full.
    Evaluated { ticket: FlipTicket, verdict: Verdict },
}

impl Selection {
    /// Flip ticket of an accepted selection.
    #[must_use]
    pub fn ticket(&self) -> Option<FlipTicket> {
        match self {
            Selection::Ignored => None,
            Selection::Flipping(ticket) | Selection::Evaluated { ticket, .. } => Some(*ticket),
        }
    }

    #[must_use]
    pub fn is_accepted(&self) -> bool {
        !matches!(self, Selection::Ignored)
    }
}

/// Result of a flip completion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FlipOutcome {
    /// The ticket was stale or unknown; nothing changed.
    Stale,
    /// The card landed; no resolution followed.
    Landed,
    /// The flip completed a matching set.
    Matched { cards: PlaySet, won: bool },
}

/// Result of a rejection attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// No mismatch is pending.
    Nothing,
    /// A card in the set is still flipping; try again later.
    Retry,
    /// The cards are flipping back face down.
    Rejected(SmallVec<[FlipTicket; 4]>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Pending {
    verdict: Verdict,
    last: FlipTicket,
}

/// The match engine. Owns the play set; cards stay on the [`Table`].
#[derive(Clone, Debug)]
pub struct MatchEngine {
    max_cards_in_play: usize,
    time_bonus: Duration,
    play_set: PlaySet,
    pending: Option<Pending>,
}

impl MatchEngine {
    /// Create an engine comparing `max_cards_in_play` cards per turn and
    /// granting `time_bonus` per match.
    #[must_use]
    pub fn new(max_cards_in_play: usize, time_bonus: Duration) -> Self {
        Self {
            max_cards_in_play,
            time_bonus,
            play_set: PlaySet::new(),
            pending: None,
        }
    }

    #[must_use]
    pub fn max_cards_in_play(&self) -> usize {
        self.max_cards_in_play
    }

    /// Cards currently in play.
    #[must_use]
    pub fn play_set(&self) -> &[CardId] {
        &self.play_set
    }

    /// Verdict of the full play set waiting for resolution, if any.
    #[must_use]
    pub fn pending_verdict(&self) -> Option<Verdict> {
        self.pending.map(|p| p.verdict)
    }

    /// Flip ticket of the card that filled the play set.
    #[must_use]
    pub fn pending_ticket(&self) -> Option<FlipTicket> {
        self.pending.map(|p| p.last)
    }

    /// Handle a card-selection event.
    pub fn select(&mut self, table: &mut Table, session: &GameSession, id: CardId) -> Selection {
        if session.is_over()
            || self.play_set.len() >= self.max_cards_in_play
            || self.play_set.contains(&id)
        {
            return Selection::Ignored;
        }

        let Some(card) = table.get_mut(id) else {
            log::debug!("selection of {} ignored: not on the table", id);
            return Selection::Ignored;
        };
        if !card.is_interactive() {
            return Selection::Ignored;
        }
        let Some(ticket) = card.start_flip() else {
            return Selection::Ignored;
        };
        self.play_set.push(id);

        if self.play_set.len() < self.max_cards_in_play {
            return Selection::Flipping(ticket);
        }

        let verdict = self.evaluate(table);
        log::debug!("play set {:?} evaluated: {:?}", self.play_set.as_slice(), verdict);
        self.pending = Some(Pending {
            verdict,
            last: ticket,
        });
        Selection::Evaluated { ticket, verdict }
    }

    /// Compare every card in play against the first.
    fn evaluate(&self, table: &Table) -> Verdict {
        let faces: SmallVec<[_; 4]> = self
            .play_set
            .iter()
            .filter_map(|&id| table.get(id).map(|c| c.face_value()))
            .collect();

        match faces.split_first() {
            Some((first, rest))
                if faces.len() == self.play_set.len() && rest.iter().all(|f| f == first) =>
            {
                Verdict::Match
            }
            _ => Verdict::Mismatch,
        }
    }

    /// Handle a flip-animation completion.
    ///
    /// A pending match resolves as soon as no card in the set is flipping.
    /// Winning finishes `session`.
    pub fn flip_completed(
        &mut self,
        table: &mut Table,
        session: &mut GameSession,
        ticket: FlipTicket,
    ) -> FlipOutcome {
        let landed = table
            .get_mut(ticket.card)
            .map_or(false, |card| card.finish_flip(ticket));
        if !landed {
            return FlipOutcome::Stale;
        }

        if self.pending_verdict() != Some(Verdict::Match) || session.is_over() {
            return FlipOutcome::Landed;
        }
        let settled = self
            .play_set
            .iter()
            .all(|&id| table.get(id).map_or(true, |c| !c.is_flipping()));
        if !settled {
            return FlipOutcome::Landed;
        }

        let cards = std::mem::take(&mut self.play_set);
        self.pending = None;
        for &id in &cards {
            if let Some(card) = table.get_mut(id) {
                card.mark_matched();
            }
        }
        session.record_match(self.max_cards_in_play, self.time_bonus);
        log::debug!(
            "matched {:?}, {}/{} cards",
            cards.as_slice(),
            session.match_count(),
            session.total_cards()
        );

        let won = session.is_cleared() && session.finish(Outcome::Won);
        FlipOutcome::Matched { cards, won }
    }

    /// Cards of a pending mismatch, for the fail animation.
    #[must_use]
    pub fn mismatched(&self) -> Option<&[CardId]> {
        match self.pending_verdict() {
            Some(Verdict::Mismatch) => Some(self.play_set.as_slice()),
            _ => None,
        }
    }

    /// Turn a mismatched play set back face down and clear it.
    pub fn reject(&mut self, table: &mut Table) -> Rejection {
        if self.pending_verdict() != Some(Verdict::Mismatch) {
            return Rejection::Nothing;
        }
        let flipping = self
            .play_set
            .iter()
            .any(|&id| table.get(id).map_or(false, |c| c.is_flipping()));
        if flipping {
            return Rejection::Retry;
        }

        let tickets = self
            .play_set
            .drain(..)
            .filter_map(|id| table.get_mut(id).and_then(|c| c.start_flip()))
            .collect();
        self.pending = None;
        Rejection::Rejected(tickets)
    }

    /// Drop the play set and any pending resolution.
    pub fn cancel(&mut self) {
        self.play_set.clear();
        self.pending = None;
    }
}
