use namegen_core::model::trainer::train;
use namegen_core::{LetterModel, NameGenError, Sampler, SamplerConfig};
use rand::SeedableRng;
use rand::rngs::StdRng;

const CORPUS: &[&str] = &[
	"Amelia", "Olivia", "Isla", "Ava", "Mia", "Ivy", "Lily", "Isabella", "Rosie", "Sophia",
	"Grace", "Willow", "Freya", "Florence", "Emily", "Ella", "Poppy", "Evie", "Elsie", "Charlotte",
	"Oliver", "George", "Noah", "Arthur", "Muhammad", "Leo", "Harry", "Oscar", "Archie", "Henry",
	"Theodore", "Freddie", "Jack", "Charlie", "Theo", "Alfie", "Jacob", "Thomas", "Finley", "Arlo",
];

fn corpus_model() -> LetterModel {
	train(CORPUS).unwrap()
}

fn lower(name: &str) -> Vec<char> {
	name.to_lowercase().chars().collect()
}

#[test]
fn names_are_capitalized_and_contain_a_vowel() {
	let model = corpus_model();
	for (seed, noise) in [(1, 0.0), (2, 0.2), (3, 0.5), (4, 1.0)] {
		let sampler = Sampler::new(&model, SamplerConfig::default().with_noise(noise)).unwrap();
		let mut rng = StdRng::seed_from_u64(seed);

		for _ in 0..300 {
			let name = sampler.generate(&mut rng).unwrap();
			let mut chars = name.chars();
			let first = chars.next().expect("generated name is never empty");
			assert!(first.is_uppercase(), "{name}");
			assert!(chars.all(|c| c.is_lowercase()), "{name}");
			assert!(name.to_lowercase().chars().any(|c| "aeiou".contains(c)), "{name}");
		}
	}
}

#[test]
fn lengths_come_from_the_corpus() {
	let model = corpus_model();
	let sampler = Sampler::new(&model, SamplerConfig::default()).unwrap();
	let mut rng = StdRng::seed_from_u64(21);

	for _ in 0..300 {
		let name = sampler.generate(&mut rng).unwrap();
		assert!(model.length_counts().contains_key(&name.chars().count()), "{name}");
	}
}

#[test]
fn modeled_names_respect_digrams_and_trigrams_without_fallback() {
	let model = corpus_model();
	let sampler = Sampler::new(&model, SamplerConfig::default()).unwrap();
	let mut rng = StdRng::seed_from_u64(8);

	let mut checked = 0;
	for _ in 0..500 {
		let generated = sampler.generate_traced(&mut rng).unwrap();
		if generated.fallbacks > 0 {
			continue;
		}
		checked += 1;

		let chars = lower(&generated.name);
		let len = chars.len();
		let opening: String = chars[..2].iter().collect();
		let closing: String = chars[len - 2..].iter().collect();
		assert!(model.start_digrams().contains(&opening), "{}", generated.name);
		assert!(model.end_digrams().contains(&closing), "{}", generated.name);
		for window in chars.windows(3) {
			let trigram: String = window.iter().collect();
			assert!(model.valid_trigrams().contains(&trigram), "{}", generated.name);
		}
	}
	assert!(checked > 0, "every generated name needed a fallback");
}

#[test]
fn ann_corpus_only_reproduces_its_names() {
	let model = train(["ann", "anna", "ana"]).unwrap();
	let sampler = Sampler::new(&model, SamplerConfig::default()).unwrap();
	let mut rng = StdRng::seed_from_u64(2024);

	let mut seen = std::collections::BTreeSet::new();
	for _ in 0..500 {
		let generated = sampler.generate_traced(&mut rng).unwrap();
		if generated.fallbacks == 0 {
			assert!(["Ann", "Anna", "Ana"].contains(&generated.name.as_str()), "{}", generated.name);
			seen.insert(generated.name);
		} else {
			// "ana" can never reach a 4th letter through the trigram set.
			let (stem, tail) = generated.name.split_at(3);
			assert_eq!(stem, "Ana");
			assert!(["a", "e", "i", "o", "u"].contains(&tail), "{}", generated.name);
		}
	}
	assert_eq!(seen.len(), 3, "all three names are reachable: {seen:?}");
}

#[test]
fn two_letter_corpus_is_reproduced_exactly() {
	let model = train(["ed"]).unwrap();
	for noise in [0.0, 0.7] {
		let sampler = Sampler::new(&model, SamplerConfig::default().with_noise(noise)).unwrap();
		let mut rng = StdRng::seed_from_u64(6);
		for _ in 0..50 {
			let generated = sampler.generate_traced(&mut rng).unwrap();
			if generated.fallbacks == 0 {
				assert_eq!(generated.name, "Ed");
			}
		}
	}
}

#[test]
fn vowel_less_corpus_hits_the_restart_limit() {
	let model = train(["zz"]).unwrap();
	let config = SamplerConfig::default().with_max_restarts(Some(5));
	let sampler = Sampler::new(&model, config).unwrap();
	let mut rng = StdRng::seed_from_u64(0);

	match sampler.generate(&mut rng) {
		Err(NameGenError::RestartLimit { restarts }) => assert_eq!(restarts, 5),
		other => panic!("expected restart limit, got {other:?}"),
	}
}

#[test]
fn restarts_are_reported() {
	// Half the lengths are 2 ("zz", never a vowel), half are 3 ("zaz").
	let model = train(["zz", "zaz"]).unwrap();
	let sampler = Sampler::new(&model, SamplerConfig::default()).unwrap();
	let mut rng = StdRng::seed_from_u64(13);

	let total_restarts: usize = (0..200)
		.map(|_| sampler.generate_traced(&mut rng).unwrap())
		.inspect(|generated| assert!(generated.name.to_lowercase().contains(|c: char| "aeiou".contains(c))))
		.map(|generated| generated.restarts)
		.sum();
	assert!(total_restarts > 0);
}

/// Share of "Ac" among names of a corpus with 9 "ab" for 1 "ac".
fn share_of_ac(noise: f32, seed: u64) -> f64 {
	let mut corpus = vec!["ac"];
	corpus.extend(std::iter::repeat_n("ab", 9));
	let model = train(corpus).unwrap();
	let sampler = Sampler::new(&model, SamplerConfig::default().with_noise(noise)).unwrap();
	let mut rng = StdRng::seed_from_u64(seed);

	let draws = 4_000;
	let hits = (0..draws)
		.filter(|_| sampler.generate(&mut rng).unwrap() == "Ac")
		.count();
	hits as f64 / draws as f64
}

#[test]
fn noise_moves_letters_from_counts_to_uniform() {
	// Modeled: 'c' follows 'a' once in ten.
	let modeled = share_of_ac(0.0, 31);
	assert!((0.08..0.12).contains(&modeled), "noise 0: {modeled}");

	// Random: only 'b' and 'c' pass the digram checks, equally likely.
	let random = share_of_ac(1.0, 32);
	assert!((0.46..0.54).contains(&random), "noise 1: {random}");

	// Half of the letters each way.
	let mixed = share_of_ac(0.5, 33);
	assert!((0.27..0.33).contains(&mixed), "noise 0.5: {mixed}");
}

#[test]
fn out_of_range_noise_is_accepted() {
	let model = corpus_model();
	let mut rng = StdRng::seed_from_u64(77);
	for noise in [-1.0, 2.5] {
		let sampler = Sampler::new(&model, SamplerConfig::default().with_noise(noise)).unwrap();
		assert!(!sampler.generate(&mut rng).unwrap().is_empty());
	}
}

#[test]
fn convenience_generate_uses_the_thread_rng() {
	let model = train(["ann", "anna", "ana"]).unwrap();
	let name = model.generate(0.0).unwrap();
	assert!(name.starts_with("An"), "{name}");
}

#[test]
fn untrained_model_cannot_generate() {
	let err = LetterModel::default().generate(0.3).unwrap_err();
	assert!(matches!(err, NameGenError::EmptyDistribution(_)));
}
