//! The match orchestrator.
//!
//! One controller owns one running match: the current [`TurnState`], the
//! active effect context, the effective rule chain, the dice supply, and
//! the model hierarchy. Every inbound move is dispatched against the
//! current state; the subset a state does not support is rejected with
//! the violated precondition and nothing mutates.
//!
//! Implicit effect steps are chained with an iterative trampoline: a
//! step executes, the index advances,
//! and the loop continues until an input step or the end of the card's
//! declared list. State objects never re-enter the transition function,
//! so stack depth stays flat no matter how long card content makes the
//! chain.

use im::Vector;
use smallvec::SmallVec;
use tracing::{debug, info};

use super::errors::{MatchError, MoveFailure, MoveRejection};
use super::moves::{MoveKind, MoveOutcome, MoveRecord, PlayerMove};
use super::state::{ActiveEffect, TurnState};
use crate::core::{DiceSource, PlayerId};
use crate::rounds::{Game, RoundAdvance, TurnAdvance};
use crate::rules::RuleChain;
use crate::scoring::{MatchOutcome, ObjectiveId, Ranker};
use crate::toolcards::{Activation, EffectStep, ToolCardId, ToolCardRegistry};

/// The authoritative controller for one match.
pub struct Controller {
    game: Game,
    state: TurnState,
    registry: ToolCardRegistry,
    active_effect: Option<ActiveEffect>,
    chain: RuleChain,
    supply: Box<dyn DiceSource + Send>,
    ranker: Box<dyn Ranker + Send>,
    objectives: Vec<ObjectiveId>,
    outcome: Option<MatchOutcome>,
    history: Vector<MoveRecord>,
}

impl Controller {
    /// Take ownership of a freshly built game and enter its first turn.
    pub fn new(
        game: Game,
        registry: ToolCardRegistry,
        supply: Box<dyn DiceSource + Send>,
        ranker: Box<dyn Ranker + Send>,
        objectives: Vec<ObjectiveId>,
    ) -> Self {
        let mut controller = Self {
            game,
            state: TurnState::Start,
            registry,
            active_effect: None,
            chain: RuleChain::standard(),
            supply,
            ranker,
            objectives,
            outcome: None,
            history: Vector::new(),
        };

        let advanced = controller.game.advance_turn();
        assert_eq!(
            advanced,
            TurnAdvance::Advanced,
            "A fresh game must have a first turn"
        );
        controller.install_default_chain();
        controller
    }

    /// The model hierarchy.
    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The current turn state.
    #[must_use]
    pub fn state(&self) -> TurnState {
        self.state
    }

    /// The active effect context, while an effect runs.
    #[must_use]
    pub fn active_effect(&self) -> Option<&ActiveEffect> {
        self.active_effect.as_ref()
    }

    /// The rule chain in force for the current turn.
    #[must_use]
    pub fn chain(&self) -> &RuleChain {
        &self.chain
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.game.round().current_turn().player()
    }

    /// The final outcome, once the game has ended.
    #[must_use]
    pub fn outcome(&self) -> Option<&MatchOutcome> {
        self.outcome.as_ref()
    }

    /// Accepted moves so far, in order.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Handle one validated-origin move from the acting player.
    ///
    /// Off-turn and post-game moves are rejected before dispatch; an
    /// accepted move is appended to the history.
    pub fn handle_move(
        &mut self,
        player: PlayerId,
        mv: PlayerMove,
    ) -> Result<MoveOutcome, MoveFailure> {
        if self.outcome.is_some() {
            return Err(MoveRejection::GameOver.into());
        }
        if player != self.current_player() {
            return Err(MoveRejection::NotYourTurn.into());
        }

        let round = self.game.round().number();
        let turn = self.game.round().turns_started();
        let outcome = self.dispatch(mv)?;
        self.history.push_back(MoveRecord {
            player,
            mv,
            round,
            turn,
        });
        Ok(outcome)
    }

    /// The operations the given player may currently attempt.
    ///
    /// Recomputed after every move for the session reply; empty for
    /// anyone but the acting player and for a finished match.
    #[must_use]
    pub fn permitted_moves(&self, player: PlayerId) -> SmallVec<[MoveKind; 4]> {
        let mut permitted = SmallVec::new();
        if self.outcome.is_some() || player != self.current_player() {
            return permitted;
        }

        let card_available = self.game.round().current_turn().used_toolcard().is_none()
            && !self.registry.is_empty();

        match self.state {
            TurnState::Start => {
                permitted.push(MoveKind::Draft);
                if card_available {
                    permitted.push(MoveKind::UseToolCard);
                }
                permitted.push(MoveKind::EndTurn);
            }
            TurnState::Drafted => {
                permitted.push(MoveKind::Place);
                if card_available {
                    permitted.push(MoveKind::UseToolCard);
                }
                permitted.push(MoveKind::EndTurn);
            }
            TurnState::Placed => {
                if card_available {
                    permitted.push(MoveKind::UseToolCard);
                }
                permitted.push(MoveKind::EndTurn);
            }
            TurnState::EffectInput => {
                match self.current_step() {
                    Some(EffectStep::ChooseFromTrack) => permitted.push(MoveKind::ChooseFromTrack),
                    Some(EffectStep::AdjustDrafted) => {
                        permitted.push(MoveKind::IncrementDrafted);
                        permitted.push(MoveKind::DecrementDrafted);
                    }
                    Some(EffectStep::ChooseValue) => permitted.push(MoveKind::ChooseValue),
                    Some(EffectStep::MoveDice { .. }) => permitted.push(MoveKind::MoveDie),
                    Some(EffectStep::PlaceDrafted) => permitted.push(MoveKind::Place),
                    _ => {}
                }
                permitted.push(MoveKind::EndEffect);
            }
        }
        permitted
    }

    fn dispatch(&mut self, mv: PlayerMove) -> Result<MoveOutcome, MoveFailure> {
        match mv {
            PlayerMove::DraftFromPool { die_index } => Ok(self.op_draft(die_index)?),
            PlayerMove::PlaceDrafted { row, col } => Ok(self.op_place(row, col)?),
            PlayerMove::UseToolCard { card } => Ok(self.op_use_toolcard(card)?),
            PlayerMove::ChooseFromTrack { slot, die_index } => {
                Ok(self.op_choose_from_track(slot, die_index)?)
            }
            PlayerMove::MoveDie {
                from_row,
                from_col,
                to_row,
                to_col,
            } => Ok(self.op_move_die(from_row, from_col, to_row, to_col)?),
            PlayerMove::IncrementDrafted => Ok(self.op_adjust_drafted(true)?),
            PlayerMove::DecrementDrafted => Ok(self.op_adjust_drafted(false)?),
            PlayerMove::ChooseValue { value } => Ok(self.op_choose_value(value)?),
            PlayerMove::EndEffect => Ok(self.op_end_effect()?),
            PlayerMove::EndTurn => self.op_end_turn(),
        }
    }

    // === Operations ===

    fn op_draft(&mut self, die_index: usize) -> Result<MoveOutcome, MoveRejection> {
        match self.state {
            TurnState::Start => {
                let die = self
                    .game
                    .round_mut()
                    .pool_mut()
                    .take(die_index)
                    .ok_or(MoveRejection::InvalidDraftIndex { index: die_index })?;
                self.game.round_mut().current_turn_mut().set_drafted(die);
                self.state = TurnState::Drafted;
                debug!(%die, "die drafted");
                Ok(MoveOutcome::Drafted { die })
            }
            TurnState::Drafted => Err(MoveRejection::MustPlaceDrafted),
            TurnState::Placed => Err(MoveRejection::ToolCardOnly),
            TurnState::EffectInput => Err(MoveRejection::MidEffect),
        }
    }

    fn op_place(&mut self, row: usize, col: usize) -> Result<MoveOutcome, MoveRejection> {
        match self.state {
            TurnState::Drafted => {
                let die = self.place_drafted_die(row, col)?;
                self.state = TurnState::Placed;
                Ok(MoveOutcome::Placed { die, row, col })
            }
            TurnState::EffectInput => {
                if self.current_step() != Some(EffectStep::PlaceDrafted) {
                    return Err(MoveRejection::MidEffect);
                }
                let die = self.place_drafted_die(row, col)?;
                self.advance_effect();
                Ok(MoveOutcome::Placed { die, row, col })
            }
            TurnState::Start => Err(MoveRejection::NoDieDrafted),
            TurnState::Placed => Err(MoveRejection::ToolCardOnly),
        }
    }

    /// Validate against the effective chain and move the drafted die onto
    /// the grid. Shared by the ordinary placement and the effect-governed
    /// one.
    fn place_drafted_die(&mut self, row: usize, col: usize) -> Result<crate::core::Die, MoveRejection> {
        let player = self.current_player();
        if !self.game.grid(player).in_bounds(row, col) {
            return Err(MoveRejection::OutOfBounds { row, col });
        }

        let die = *self
            .game
            .round()
            .current_turn()
            .drafted()
            .ok_or(MoveRejection::NoDieDrafted)?;

        self.chain
            .check(self.game.grid(player), &die, row, col)
            .map_err(MoveRejection::Placement)?;

        let taken = self.game.round_mut().current_turn_mut().take_drafted();
        debug_assert!(taken.is_some());
        self.game.grid_mut(player).place(die, row, col);
        debug!(%die, row, col, "die placed");
        Ok(die)
    }

    fn op_use_toolcard(&mut self, card_id: ToolCardId) -> Result<MoveOutcome, MoveRejection> {
        if self.state == TurnState::EffectInput {
            return Err(MoveRejection::MidEffect);
        }
        if self.game.round().current_turn().used_toolcard().is_some() {
            return Err(MoveRejection::ToolCardAlreadyUsed);
        }

        let card = self
            .registry
            .get(card_id)
            .ok_or(MoveRejection::UnknownToolCard { card: card_id })?;

        match card.activation {
            Activation::PreDraft => {
                if self.game.round().current_turn().has_drafted() {
                    return Err(MoveRejection::DraftAlreadyOccurred);
                }
            }
            Activation::AfterDraft => {
                if self.game.round().current_turn().drafted().is_none() {
                    return Err(MoveRejection::NoDieDrafted);
                }
            }
            Activation::Anytime => {}
        }

        let rule_override = card.rule_override;
        debug!(card = %card_id, name = card.name.as_str(), "toolcard activated");

        self.game.round_mut().current_turn_mut().record_toolcard(card_id);
        self.active_effect = Some(ActiveEffect::new(card_id));

        let player = self.current_player();
        let empty = self.game.grid(player).is_empty();
        self.chain = RuleChain::customized(&rule_override, empty);

        self.run_effect_chain();
        Ok(MoveOutcome::EffectActivated { card: card_id })
    }

    fn op_choose_from_track(
        &mut self,
        slot: usize,
        die_index: usize,
    ) -> Result<MoveOutcome, MoveRejection> {
        if self.state != TurnState::EffectInput {
            return Err(self.phase_rejection());
        }
        if self.current_step() != Some(EffectStep::ChooseFromTrack) {
            return Err(MoveRejection::MidEffect);
        }

        let die = self
            .game
            .track_mut()
            .take(slot, die_index)
            .ok_or(MoveRejection::InvalidTrackIndex { slot, die_index })?;
        self.game
            .round_mut()
            .current_turn_mut()
            .set_track_choice(die, slot);
        self.advance_effect();
        Ok(MoveOutcome::TrackChosen { die, slot })
    }

    fn op_move_die(
        &mut self,
        from_row: usize,
        from_col: usize,
        to_row: usize,
        to_col: usize,
    ) -> Result<MoveOutcome, MoveRejection> {
        if self.state != TurnState::EffectInput {
            return Err(self.phase_rejection());
        }
        if !matches!(self.current_step(), Some(EffectStep::MoveDice { .. })) {
            return Err(MoveRejection::MidEffect);
        }

        let player = self.current_player();
        {
            let grid = self.game.grid(player);
            if !grid.in_bounds(from_row, from_col) {
                return Err(MoveRejection::OutOfBounds {
                    row: from_row,
                    col: from_col,
                });
            }
            if !grid.in_bounds(to_row, to_col) {
                return Err(MoveRejection::OutOfBounds {
                    row: to_row,
                    col: to_col,
                });
            }
        }

        // The chain must observe the grid without the moving die.
        let die = self
            .game
            .grid_mut(player)
            .take(from_row, from_col)
            .ok_or(MoveRejection::NoDieToMove {
                row: from_row,
                col: from_col,
            })?;

        if let Err(violation) = self.chain.check(self.game.grid(player), &die, to_row, to_col) {
            self.game.grid_mut(player).place(die, from_row, from_col);
            return Err(MoveRejection::Placement(violation));
        }

        self.game.grid_mut(player).place(die, to_row, to_col);
        debug!(%die, from_row, from_col, to_row, to_col, "die moved");

        let remaining = match self.active_effect.as_mut() {
            Some(active) => {
                active.moves_remaining = active.moves_remaining.saturating_sub(1);
                active.moves_remaining
            }
            None => 0,
        };
        if remaining == 0 {
            self.advance_effect();
        }

        Ok(MoveOutcome::DieMoved {
            from_row,
            from_col,
            to_row,
            to_col,
        })
    }

    fn op_adjust_drafted(&mut self, up: bool) -> Result<MoveOutcome, MoveRejection> {
        if self.state != TurnState::EffectInput {
            return Err(self.phase_rejection());
        }
        if self.current_step() != Some(EffectStep::AdjustDrafted) {
            return Err(MoveRejection::MidEffect);
        }

        let die = {
            let turn = self.game.round_mut().current_turn_mut();
            let die = turn.drafted_mut().ok_or(MoveRejection::NoDieDrafted)?;
            let adjusted = if up { die.increment() } else { die.decrement() };
            if !adjusted {
                return Err(MoveRejection::ValueOutOfRange);
            }
            *die
        };

        self.advance_effect();
        Ok(MoveOutcome::ValueChanged { die })
    }

    fn op_choose_value(&mut self, value: u8) -> Result<MoveOutcome, MoveRejection> {
        if self.state != TurnState::EffectInput {
            return Err(self.phase_rejection());
        }
        if self.current_step() != Some(EffectStep::ChooseValue) {
            return Err(MoveRejection::MidEffect);
        }

        let die = {
            let turn = self.game.round_mut().current_turn_mut();
            let die = turn.drafted_mut().ok_or(MoveRejection::NoDieDrafted)?;
            if !die.set_value(value) {
                return Err(MoveRejection::ValueOutOfRange);
            }
            *die
        };

        self.advance_effect();
        Ok(MoveOutcome::ValueChanged { die })
    }

    fn op_end_effect(&mut self) -> Result<MoveOutcome, MoveRejection> {
        if self.state != TurnState::EffectInput {
            return Err(MoveRejection::NoActiveEffect);
        }
        self.finish_effect();
        Ok(MoveOutcome::EffectEnded)
    }

    fn op_end_turn(&mut self) -> Result<MoveOutcome, MoveFailure> {
        if self.state == TurnState::EffectInput {
            return Err(MoveRejection::MidEffect.into());
        }

        // An unplaced drafted die returns to the pool (it may have had no
        // legal cell).
        if let Some(die) = self.game.round_mut().current_turn_mut().take_drafted() {
            self.game.round_mut().pool_mut().put(die);
        }

        Ok(self.advance_game()?)
    }

    // === Effect machinery ===

    /// The input step the active effect is waiting on, if any.
    fn current_step(&self) -> Option<EffectStep> {
        let active = self.active_effect?;
        let card = self.registry.get(active.card)?;
        card.steps.get(active.step).copied()
    }

    /// Complete the current input step and continue the chain.
    fn advance_effect(&mut self) {
        if let Some(active) = self.active_effect.as_mut() {
            active.step += 1;
            active.moves_remaining = 0;
        }
        self.run_effect_chain();
    }

    /// The transition trampoline: execute implicit steps iteratively
    /// until the chain parks on an input step or runs out.
    fn run_effect_chain(&mut self) {
        while let Some(active) = self.active_effect {
            let step = {
                let card = self
                    .registry
                    .get(active.card)
                    .expect("Active toolcard missing from registry");
                card.steps.get(active.step).copied()
            };

            match step {
                None => {
                    self.finish_effect();
                }
                Some(step) if step.is_implicit() => {
                    self.execute_implicit(step);
                    if let Some(active) = self.active_effect.as_mut() {
                        active.step += 1;
                    }
                }
                Some(step) => {
                    if let EffectStep::MoveDice { count } = step {
                        if let Some(active) = self.active_effect.as_mut() {
                            active.moves_remaining = count;
                        }
                    }
                    self.state = TurnState::EffectInput;
                    break;
                }
            }
        }
    }

    fn execute_implicit(&mut self, step: EffectStep) {
        match step {
            EffectStep::FlipDrafted => {
                let turn = self.game.round_mut().current_turn_mut();
                let die = turn.drafted_mut().expect("Flip requires a drafted die");
                die.flip();
                debug!(value = die.value(), "drafted die flipped");
            }
            EffectStep::SwapDraftedWithTrack => {
                let (slot, drafted) = {
                    let turn = self.game.round_mut().current_turn_mut();
                    let choice = turn
                        .take_track_choice()
                        .expect("Swap requires a track choice");
                    let drafted = turn.take_drafted().expect("Swap requires a drafted die");
                    turn.set_drafted(choice.die);
                    (choice.slot, drafted)
                };
                let deposited = self.game.track_mut().put(slot, drafted);
                debug_assert!(deposited, "Track slot vanished mid-effect");
                debug!(slot, "drafted die swapped with track");
            }
            _ => unreachable!("Not an implicit step"),
        }
    }

    /// Natural or early effect completion: clear the context, restore the
    /// default chain, and return to the turn phase the bookkeeping says
    /// we are in.
    fn finish_effect(&mut self) {
        self.active_effect = None;

        let turn = self.game.round().current_turn();
        self.state = if turn.drafted().is_some() {
            TurnState::Drafted
        } else if turn.has_drafted() {
            TurnState::Placed
        } else {
            TurnState::Start
        };

        self.install_default_chain();
        debug!(state = ?self.state, "effect finished");
    }

    // === Turn/round advancement ===

    /// Install the default chain for the acting player, with the border
    /// variant while their grid is still empty.
    fn install_default_chain(&mut self) {
        let player = self.current_player();
        self.chain = if self.game.grid(player).is_empty() {
            RuleChain::first_placement()
        } else {
            RuleChain::standard()
        };
    }

    /// End-of-turn progression, per the advancement algorithm: reset the
    /// effect context, return to Start, and pull the next turn; on round
    /// exhaustion replenish and pull the next round; on game exhaustion
    /// run the ranking collaborator. A fresh round reporting exhaustion
    /// is fatal.
    fn advance_game(&mut self) -> Result<MoveOutcome, MatchError> {
        self.active_effect = None;
        self.state = TurnState::Start;

        match self.game.advance_turn() {
            TurnAdvance::Advanced => {
                self.install_default_chain();
                let next_player = self.current_player();
                debug!(%next_player, "turn ended");
                Ok(MoveOutcome::TurnEnded { next_player })
            }
            TurnAdvance::Exhausted => match self.game.advance_round(self.supply.as_mut())? {
                RoundAdvance::Advanced => match self.game.advance_turn() {
                    TurnAdvance::Advanced => {
                        self.install_default_chain();
                        let next_player = self.current_player();
                        Ok(MoveOutcome::RoundStarted {
                            round: self.game.round().number(),
                            next_player,
                        })
                    }
                    TurnAdvance::Exhausted => Err(MatchError::DoubleRoundExhaustion),
                },
                RoundAdvance::Exhausted => {
                    let players = self.game.players_reverse_turn_order();
                    let outcome = MatchOutcome {
                        scores: self.ranker.rank(&players, &self.objectives),
                    };
                    self.outcome = Some(outcome.clone());
                    info!("game ended, scores computed");
                    Ok(MoveOutcome::GameEnded { outcome })
                }
            },
        }
    }

    /// The rejection a state hands back for operations it does not carry.
    fn phase_rejection(&self) -> MoveRejection {
        match self.state {
            TurnState::Start => MoveRejection::DraftAndPlaceOnly,
            TurnState::Drafted => MoveRejection::MustPlaceDrafted,
            TurnState::Placed => MoveRejection::ToolCardOnly,
            TurnState::EffectInput => MoveRejection::MidEffect,
        }
    }
}
