use std::hint::black_box;

use bridge_rs::advisor::suggest_bid;
use bridge_rs::agents::{AgentTable, BotAgent, BotProfile};
use bridge_rs::bidding::{Bid, Contract};
use bridge_rs::game::{DealConfig, Game};
use bridge_rs::scoring::score;
use bridge_rs::seat::Seat;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_shuffle_and_deal(c: &mut Criterion) {
    c.bench_function("new_deal", |b| {
        let mut game = Game::new(DealConfig::default().with_seed(1));
        let mut seed = 0u64;
        b.iter(|| {
            seed += 1;
            game.new_deal(black_box(Some(seed)))
        })
    });
}

fn bench_opening_bid(c: &mut Criterion) {
    let game = Game::new(DealConfig::default().with_seed(17));
    let hand = game.hand(Seat::North).clone();
    c.bench_function("suggest_opening_bid", |b| {
        b.iter(|| suggest_bid(Seat::North, black_box(&hand), &[], Seat::South))
    });
}

fn bench_bot_deal(c: &mut Criterion) {
    let mut g = c.benchmark_group("bot_deal");
    for seed in [3u64, 42] {
        g.bench_with_input(BenchmarkId::new("four_bots", seed), &seed, |b, &seed| {
            b.iter(|| {
                let mut game = Game::new(DealConfig::default().with_seed(seed));
                let mut agents = AgentTable::new();
                for seat in Seat::ALL {
                    agents.set_agent(seat, Some(Box::new(BotAgent::new(BotProfile::default()))));
                }
                while game.to_act().is_some() {
                    let _ = agents.on_turn(&mut game);
                }
                black_box(game.score())
            })
        });
    }
    g.finish();
}

fn bench_score(c: &mut Criterion) {
    let contract = Contract::new("6S".parse::<Bid>().unwrap(), Seat::South);
    c.bench_function("score", |b| b.iter(|| score(black_box(contract), black_box(12), true)));
}

criterion_group!(benches, bench_shuffle_and_deal, bench_opening_bid, bench_bot_deal, bench_score);
criterion_main!(benches);
