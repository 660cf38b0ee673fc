criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        resolving_a_raise,
        playing_preflop_base,
        cascading_to_the_river,
        settling_every_scope,
        partitioning_all_in_levels,
}

fn resolving_a_raise(c: &mut criterion::Criterion) {
    let facing = Facing::from((1_000, 3_000, 20_000));
    let raise = Action::Raise(Amount::from((7.5, Unit::K)));
    c.bench_function("resolve a Raise against the amount to call", |b| {
        b.iter(|| facing.resolve(&raise))
    });
}

fn playing_preflop_base(c: &mut criterion::Criterion) {
    let hand = Hand::random();
    let ledger = Ledger::default();
    c.bench_function("play the preflop base Round", |b| {
        b.iter(|| Round::from((&hand, &ledger, SectionId::opening())).play())
    });
}

fn cascading_to_the_river(c: &mut criterion::Criterion) {
    let hand = Hand::random();
    c.bench_function("cascade a random Hand to the river", |b| {
        b.iter(|| hand.cascade(SectionId::closing()))
    });
}

fn settling_every_scope(c: &mut criterion::Criterion) {
    let hand = Hand::random();
    let target = SectionId::closing();
    let ledger = hand.cascade(target).map(|r| r.ledger).unwrap_or_default();
    c.bench_function("settle a replayed Hand in every Scope", |b| {
        b.iter(|| {
            Scope::all()
                .iter()
                .map(|scope| hand.settle(&ledger, target, *scope).total)
                .sum::<Chips>()
        })
    });
}

fn partitioning_all_in_levels(c: &mut criterion::Criterion) {
    let contributions = (1..=9)
        .map(|i| Contribution {
            player: i,
            name: format!("P{}", i),
            position: Position::UTG(0),
            total: i as Chips * KILO,
            sections: Default::default(),
            posting: Posting::default(),
            folded: false,
            allin: i % 2 == 1,
            stack: 0,
        })
        .collect::<Vec<_>>();
    let partition = Partition::from((contributions.as_slice(), DeadMoney::default(), 0));
    c.bench_function("partition nine all-in levels into Pots", |b| {
        b.iter(|| partition.pots())
    });
}

use potbook::*;
