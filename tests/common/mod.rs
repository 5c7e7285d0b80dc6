//! Shared test collaborators.

#![allow(dead_code)]

use std::time::Duration;

use memory_match::{
    AudioSink, Card, CardId, FaceValue, FlipOutcome, FlipTicket, GridLayout, GridSize,
    MatchConfig, Outcome, Presenter, Session, SoundKey,
};

/// Card art size used when laying out the grid.
pub const CARD_SIZE: (f32, f32) = (100.0, 150.0);

/// Presenter that records every call and queues flip tickets.
#[derive(Debug, Default)]
pub struct Recorder {
    pub flips: Vec<FlipTicket>,
    pub successes: Vec<CardId>,
    pub fails: Vec<CardId>,
    pub win_effects: usize,
    pub outcomes: Vec<Outcome>,
    pub exits: usize,
    pub laid_out: Option<GridSize>,
    pub positions: Vec<(CardId, (f32, f32))>,
}

impl Presenter for Recorder {
    fn layout_grid(&mut self, grid: GridSize, cards: &[Card]) {
        let layout = GridLayout::new(grid, CARD_SIZE.0, CARD_SIZE.1);
        self.laid_out = Some(grid);
        self.positions = cards
            .iter()
            .filter_map(|c| {
                let centre = layout.card_center(c.grid_index()?)?;
                Some((c.id(), centre))
            })
            .collect();
    }

    fn play_flip_animation(&mut self, _card: CardId, ticket: FlipTicket) {
        self.flips.push(ticket);
    }

    fn play_success_animation(&mut self, card: CardId) {
        self.successes.push(card);
    }

    fn play_fail_animation(&mut self, card: CardId) {
        self.fails.push(card);
    }

    fn play_win_effect(&mut self) {
        self.win_effects += 1;
    }

    fn game_over(&mut self, outcome: Outcome) {
        self.outcomes.push(outcome);
    }

    fn exit_to_menu(&mut self) {
        self.exits += 1;
    }
}

/// Audio sink that records every cue.
#[derive(Debug, Default)]
pub struct Sounds(pub Vec<SoundKey>);

impl Sounds {
    pub fn count(&self, key: SoundKey) -> usize {
        self.0.iter().filter(|&&k| k == key).count()
    }
}

impl AudioSink for Sounds {
    fn play_sound(&mut self, key: SoundKey) {
        self.0.push(key);
    }
}

pub type TestSession = Session<Recorder, Sounds>;

pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Session with recording collaborators and a game in progress.
pub fn started(config: MatchConfig) -> TestSession {
    let mut session = Session::new(config, Recorder::default(), Sounds::default()).unwrap();
    session.start().unwrap();
    session
}

/// Complete every queued flip animation, oldest first.
pub fn finish_flips(session: &mut TestSession) -> Vec<FlipOutcome> {
    let tickets = std::mem::take(&mut session.presenter_mut().flips);
    tickets
        .into_iter()
        .map(|ticket| session.complete_flip(ticket))
        .collect()
}

/// Ids of the dealt cards showing `face`, in cell order.
pub fn cards_with_face(session: &TestSession, face: FaceValue) -> Vec<CardId> {
    session
        .cards()
        .iter()
        .filter(|c| c.face_value() == face)
        .map(Card::id)
        .collect()
}

/// Two dealt cards with different faces.
pub fn mismatched_pair(session: &TestSession) -> (CardId, CardId) {
    let first = &session.cards()[0];
    let other = session
        .cards()
        .iter()
        .find(|c| c.face_value() != first.face_value())
        .expect("deck has at least two faces");
    (first.id(), other.id())
}
