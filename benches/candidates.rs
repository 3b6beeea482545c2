use std::hint::black_box;
use std::sync::Arc;

use alloy::primitives::Address;
use candidate_pools::models::{ChainId, Token};
use candidate_pools::pools::CandidatePoolGenerator;
use candidate_pools::registry::BaseTokenRegistry;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

/// Generate a random token on `chain`
fn random_token(chain: ChainId) -> Token {
    let mut bytes = [0u8; 20];
    fastrand::fill(&mut bytes);
    Token::new(chain, Address::from(bytes), 18, "RND")
}

fn bench_generate(c: &mut Criterion) {
    let generator = CandidatePoolGenerator::new(Arc::new(BaseTokenRegistry::default()));
    let mut group = c.benchmark_group("generate");

    for chain in [ChainId::Mainnet, ChainId::ArbitrumRinkeby] {
        group.bench_with_input(BenchmarkId::new("bases_only", chain), &chain, |b, &chain| {
            b.iter(|| generator.generate(black_box(chain), None));
        });

        let token_in = random_token(chain);
        let token_out = random_token(chain);
        group.bench_with_input(BenchmarkId::new("requested_pair", chain), &chain, |b, &chain| {
            b.iter(|| generator.generate(black_box(chain), Some((&token_in, &token_out))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
