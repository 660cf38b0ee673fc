use super::*;

/// A hand replayed section by section up to a target.
///
/// # Fields
///
/// - `ledger`: Outcome of every played section
/// - `record`: Recorded actions with short-stacked ones upgraded to all-in
/// - `shortfalls`: Every forced all-in, in playing order
/// - `running`: Pot total after each played section
/// - `pots`: Settlement at the target
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Replay {
    pub ledger: Ledger,
    pub record: Record,
    pub shortfalls: Vec<Shortfall>,
    pub running: Vec<(SectionId, Chips)>,
    pub pots: Pots,
}

impl Hand {
    /// Replays every section up to `target` and settles the whole hand there.
    pub fn cascade(&self, target: SectionId) -> anyhow::Result<Replay> {
        self.cascade_with(target, Scope::Hand, &mut ())
    }
    /// [`Hand::cascade`] with a chosen settlement scope and an event sink.
    pub fn cascade_with(
        &self,
        target: SectionId,
        scope: Scope,
        trace: &mut impl Trace,
    ) -> anyhow::Result<Replay> {
        self.resume(Ledger::default(), target, scope, trace)
    }
    /// Replays on top of an existing ledger. A section whose outcome changed
    /// since it was last replayed gains a new revision; others are left alone.
    pub fn resume(
        &self,
        mut ledger: Ledger,
        target: SectionId,
        scope: Scope,
        trace: &mut impl Trace,
    ) -> anyhow::Result<Replay> {
        let mut record = self.actions.clone();
        let mut shortfalls = Vec::new();
        let mut running = Vec::new();
        for section in self.played(target).collect::<Vec<_>>() {
            let played = Round::from((self, &ledger, section)).play()?;
            for player in played.fallbacks.iter().copied() {
                trace.event(&Event::Fallback { section, player });
            }
            for shortfall in played.shortfalls {
                record.upgrade(section, shortfall.player);
                trace.event(&Event::Forced(shortfall.clone()));
                shortfalls.push(shortfall);
            }
            trace.event(&Event::Played {
                section,
                total: played.outcome.total(),
            });
            ledger.push(section, played.outcome);
            let total = self.settle(&ledger, section, Scope::Hand).total;
            trace.event(&Event::Settled { section, total });
            running.push((section, total));
        }
        let pots = self.settle(&ledger, target, scope);
        Ok(Replay {
            ledger,
            record,
            shortfalls,
            running,
            pots,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(street: Street, level: Level) -> SectionId {
        SectionId::from((street, level))
    }

    fn stacks_moved(hand: &Hand, replay: &Replay, target: SectionId) -> Chips {
        let latest = hand.played(target).filter_map(|s| replay.ledger.get(s)).last();
        hand.players
            .iter()
            .map(|p| p.stack - latest.and_then(|o| o.exit(p.id)).unwrap_or(p.stack))
            .sum()
    }

    fn check_conservation(pots: &Pots) {
        let active = pots
            .contributions
            .iter()
            .filter(|c| c.is_active())
            .map(|c| c.total)
            .sum::<Chips>();
        let sum = pots.pots.iter().map(|p| p.amount).sum::<Chips>();
        assert_eq!(sum, active + pots.dead.total() + pots.carried);
        assert_eq!(sum, pots.total);
    }

    #[test]
    fn even_limped_pot() {
        let hand = Hand::from((
            vec![
                Player::from((1, "A", Position::UTG(0), 5_000)),
                Player::from((2, "B", Position::CO, 5_000)),
                Player::from((3, "C", Position::BTN, 5_000)),
            ],
            Blinds::from((0, 0, 0)),
            Record::default()
                .with(SectionId::opening(), 1, Action::Bet(Amount::from(100)))
                .with(SectionId::opening(), 2, Action::Call)
                .with(SectionId::opening(), 3, Action::Call),
        ));
        let pots = hand.cascade(SectionId::opening()).unwrap().pots;
        assert_eq!(pots.pots.len(), 1);
        assert_eq!(pots.total, 300);
        assert_eq!(pots.dead.total(), 0);
        assert_eq!(pots.pots[0].eligible.len(), 3);
        assert!(pots.status.is_complete());
    }

    #[test]
    fn one_short_all_in_makes_a_side_pot() {
        let hand = Hand::from((
            vec![
                Player::from((1, "A", Position::UTG(0), 200)),
                Player::from((2, "B", Position::CO, 5_000)),
                Player::from((3, "C", Position::BTN, 5_000)),
            ],
            Blinds::from((0, 0, 0)),
            Record::default()
                .with(SectionId::opening(), 1, Action::AllIn)
                .with(SectionId::opening(), 2, Action::Raise(Amount::from(500)))
                .with(SectionId::opening(), 3, Action::Call),
        ));
        let pots = hand.cascade(SectionId::opening()).unwrap().pots;
        assert_eq!(pots.pots.len(), 2);
        assert!(pots.pots[0].cap == 200 && pots.pots[0].amount == 600);
        assert!(pots.pots[1].cap == 500 && pots.pots[1].amount == 600);
        assert_eq!(pots.total, 1_200);
        check_conservation(&pots);
    }

    fn blinds_only(caller: Action) -> Hand {
        Hand::from((
            vec![
                Player::from((1, "Sam", Position::SB, 50_000)),
                Player::from((2, "Bea", Position::BB, 50_000)),
                Player::from((3, "Cal", Position::BTN, 50_000)),
            ],
            Blinds::default(),
            Record::default()
                .with(SectionId::opening(), 3, caller)
                .with(SectionId::opening(), 1, Action::Fold)
                .with(SectionId::opening(), 2, Action::Check),
        ))
    }

    #[test]
    fn folded_small_blind_and_ante_are_dead() {
        let pots = blinds_only(Action::Fold).cascade(SectionId::opening()).unwrap().pots;
        assert_eq!(pots.total, 2_500);
        assert_eq!(pots.dead.total(), 1_500);
        assert_eq!(pots.dead.ante, 1_000);
        assert_eq!(pots.dead.folded_blinds, 500);
        assert_eq!(pots.pots.len(), 1);
        assert_eq!(pots.pots[0].eligible, vec![2]);
        check_conservation(&pots);

        let pots = blinds_only(Action::Call).cascade(SectionId::opening()).unwrap().pots;
        assert_eq!(pots.total, 3_500);
        assert_eq!(pots.dead.total(), 1_500);
        assert_eq!(pots.pots[0].eligible, vec![2, 3]);
        check_conservation(&pots);
    }

    #[test]
    fn three_all_in_levels_over_a_carried_pot() {
        let flop = at(Street::Flop, Level::Base);
        let hand = Hand::from((
            vec![
                Player::from((1, "A", Position::SB, 190)),
                Player::from((2, "B", Position::BB, 390)),
                Player::from((3, "C", Position::CO, 590)),
                Player::from((4, "D", Position::BTN, 5_000)),
            ],
            Blinds::from((45, 90, 0)),
            Record::default()
                .with(SectionId::opening(), 3, Action::Call)
                .with(SectionId::opening(), 4, Action::Call)
                .with(SectionId::opening(), 1, Action::Call)
                .with(SectionId::opening(), 2, Action::Check)
                .with(flop, 1, Action::AllIn)
                .with(flop, 2, Action::AllIn)
                .with(flop, 3, Action::AllIn)
                .with(flop, 4, Action::Call),
        ));
        let replay = hand.cascade_with(flop, Scope::Street, &mut ()).unwrap();
        let pots = &replay.pots;
        assert_eq!(pots.carried, 360);
        assert_eq!(pots.pots.len(), 3);
        assert_eq!(pots.sides().len(), 2);
        assert_eq!(pots.pots.iter().map(|p| p.cap).collect::<Vec<_>>(), vec![100, 300, 500]);
        assert_eq!(pots.pots[0].amount, 100 * 4 + 360);
        assert!(pots.total > pots.carried);
        assert!(pots.pots.windows(2).all(|w| w[0].cap < w[1].cap));
        check_conservation(pots);
        assert_eq!(pots.total, stacks_moved(&hand, &replay, flop));
    }

    #[test]
    fn ante_only_big_blind_can_win_its_ante() {
        let hand = Hand::from((
            vec![
                Player::from((1, "Sam", Position::SB, 10_000)),
                Player::from((2, "Bea", Position::BB, 800)),
                Player::from((3, "Uma", Position::UTG(0), 10_000)),
                Player::from((4, "Cal", Position::BTN, 10_000)),
            ],
            Blinds::default().with(AnteOrder::AnteFirst),
            Record::default()
                .with(SectionId::opening(), 3, Action::Raise(Amount::from(3_000)))
                .with(SectionId::opening(), 4, Action::Call)
                .with(SectionId::opening(), 1, Action::Fold),
        ));
        let pots = hand.cascade(SectionId::opening()).unwrap().pots;
        assert_eq!(pots.total, 7_300);
        assert_eq!(pots.zeros, vec![2]);
        assert_eq!(pots.pots.len(), 2);
        assert_eq!(pots.pots[0].cap, 0);
        assert_eq!(pots.pots[0].amount, 800 + 500);
        assert_eq!(pots.pots[0].eligible, vec![2, 3, 4]);
        assert_eq!(pots.pots[1].amount, 6_000);
        assert_eq!(pots.pots[1].eligible, vec![3, 4]);
        check_conservation(&pots);
    }

    #[test]
    fn street_scope_keeps_a_player_yet_to_act_in_the_carried_pot() {
        let flop = at(Street::Flop, Level::Base);
        let hand = Hand::from((
            vec![
                Player::from((1, "Sam", Position::SB, 3_000)),
                Player::from((2, "Bea", Position::BB, 10_000)),
            ],
            Blinds::from((500, 1_000, 0)),
            Record::default()
                .with(SectionId::opening(), 1, Action::Call)
                .with(SectionId::opening(), 2, Action::Check)
                .with(flop, 1, Action::AllIn),
        ));
        let pots = hand.cascade_with(flop, Scope::Street, &mut ()).unwrap().pots;
        assert_eq!(pots.carried, 2_000);
        assert_eq!(pots.zeros, vec![2]);
        assert_eq!(pots.pots.len(), 2);
        assert_eq!(pots.pots[0].amount, 2_000);
        assert_eq!(pots.pots[0].eligible, vec![1, 2]);
        assert_eq!(pots.pots[1].cap, 2_000);
        assert_eq!(pots.pots[1].eligible, vec![1]);
        assert_eq!(
            pots.pots[1].excluded,
            vec![Exclusion { player: 2, reason: Reason::Short(0) }]
        );
        assert_eq!(pots.total, 4_000);
        check_conservation(&pots);
    }

    #[test]
    fn forced_all_ins_are_upgraded_and_traced() {
        let flop = at(Street::Flop, Level::Base);
        let hand = Hand::from((
            vec![
                Player::from((1, "Sam", Position::SB, 10_000)),
                Player::from((2, "Bea", Position::BB, 4_000)),
            ],
            Blinds::default(),
            Record::default()
                .with(SectionId::opening(), 1, Action::Call)
                .with(SectionId::opening(), 2, Action::Check)
                .with(flop, 1, Action::Bet(Amount::from(5_000)))
                .with(flop, 2, Action::Call),
        ));
        let mut events = Vec::<Event>::new();
        let replay = hand.cascade_with(flop, Scope::Hand, &mut events).unwrap();
        assert_eq!(replay.shortfalls.len(), 1);
        assert_eq!(replay.shortfalls[0].missing(), 3_000);
        assert_eq!(replay.record.action(flop, 2), Action::AllIn);
        assert_eq!(hand.action(flop, 2), Action::Call);
        assert!(events.iter().any(|e| matches!(e, Event::Forced(s) if s.player == 2)));
        assert_eq!(replay.running, vec![(SectionId::opening(), 3_000), (flop, 10_000)]);
        let pots = replay.pots;
        assert_eq!(pots.pots.len(), 2);
        assert_eq!(pots.pots[0].amount, 1_000 + 2 * 3_000);
        assert_eq!(pots.pots[1].amount, 3_000);
        assert_eq!(pots.pots[1].eligible, vec![1]);
        check_conservation(&pots);
    }

    #[test]
    fn skipped_sections_inherit_the_last_played_stacks() {
        let turn = at(Street::Turn, Level::Base);
        let hand = Hand::from((
            vec![
                Player::from((1, "Sam", Position::SB, 10_000)),
                Player::from((2, "Bea", Position::BB, 10_000)),
            ],
            Blinds::default(),
            Record::default()
                .with(SectionId::opening(), 1, Action::Raise(Amount::from(2_000)))
                .with(SectionId::opening(), 2, Action::Call)
                .with(turn, 1, Action::Bet(Amount::from(1_000)))
                .with(turn, 2, Action::Call),
        ));
        let replay = hand.cascade(turn).unwrap();
        assert!(replay.ledger.get(at(Street::Flop, Level::Base)).is_none());
        assert_eq!(replay.ledger.revisions(turn), 1);
        assert_eq!(replay.ledger.get(turn).and_then(|o| o.entry(2)), Some(7_000));
        assert_eq!(replay.pots.total, 2_000 + 2_000 + 1_000 + 2_000);
    }

    #[test]
    fn validation_errors_stop_the_cascade() {
        let flop = at(Street::Flop, Level::Base);
        let hand = Hand::from((
            vec![
                Player::from((1, "Sam", Position::SB, 10_000)),
                Player::from((2, "Bea", Position::BB, 10_000)),
            ],
            Blinds::default(),
            Record::default()
                .with(SectionId::opening(), 1, Action::Call)
                .with(SectionId::opening(), 2, Action::Check)
                .with(flop, 1, Action::Bet(Amount::try_from("-1K").unwrap())),
        ));
        let err = hand.cascade(flop).unwrap_err();
        assert!(matches!(err.downcast_ref::<Invalid>(), Some(Invalid::Amount(_))));
        assert!(hand.cascade(SectionId::opening()).is_ok());
    }

    #[test]
    fn resuming_appends_revisions_only_for_changes() {
        let flop = at(Street::Flop, Level::Base);
        let mut hand = blinds_only(Action::Call);
        hand.actions.set(flop, 2, Action::Bet(Amount::from(2_000)));
        hand.actions.set(flop, 3, Action::Call);
        let first = hand.cascade(flop).unwrap();
        let again = hand.resume(first.ledger.clone(), flop, Scope::Hand, &mut ()).unwrap();
        assert_eq!(again.ledger, first.ledger);
        hand.actions.set(flop, 2, Action::Bet(Amount::from(4_000)));
        let edited = hand.resume(first.ledger.clone(), flop, Scope::Hand, &mut ()).unwrap();
        assert_eq!(edited.ledger.revisions(SectionId::opening()), 1);
        assert_eq!(edited.ledger.revisions(flop), 2);
        assert_eq!(edited.pots.total, first.pots.total + 4_000);
    }

    #[test]
    fn random_hands_conserve_chips() {
        for _ in 0..500 {
            let hand = Hand::random();
            for target in SectionId::all() {
                let Ok(replay) = hand.cascade(target) else {
                    continue;
                };
                let moved = stacks_moved(&hand, &replay, target);
                for scope in Scope::all() {
                    let pots = hand.settle(&replay.ledger, target, *scope);
                    check_conservation(&pots);
                    assert_eq!(pots.total, moved);
                    assert!(pots.pots.windows(2).all(|w| w[0].cap < w[1].cap));
                    assert!(pots
                        .pots
                        .windows(2)
                        .all(|w| w[0].eligible.len() > w[1].eligible.len()));
                    for c in pots.contributions.iter().filter(|c| c.folded) {
                        assert!(pots.pots.iter().all(|p| !p.is_eligible(c.player)));
                    }
                    assert_eq!(pots, hand.settle(&replay.ledger, target, *scope));
                }
            }
        }
    }

    #[test]
    fn single_pot_without_all_ins() {
        for _ in 0..500 {
            let hand = Hand::random();
            let target = SectionId::closing();
            let Ok(replay) = hand.cascade(target) else {
                continue;
            };
            let pots = replay.pots;
            let active = pots.contributions.iter().filter(|c| c.is_active());
            if active.clone().any(|c| c.allin) {
                continue;
            }
            assert_eq!(pots.pots.len(), 1);
            assert_eq!(
                pots.pots[0].eligible,
                active.map(|c| c.player).collect::<Vec<_>>()
            );
        }
    }
}
