use deckforge_core::{
    generate_deck, is_allowed_color, is_modern, Catalog, Color, DeckConfig, DeckError,
    EmptyPoolPolicy, Event, EventBus, Face, ManaSymbol, RngState, SamplingStrategy,
};

fn fixture_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    for color in Color::ALL {
        for idx in 0..40 {
            catalog.insert(
                format!("{color} Spell {idx}"),
                vec![Face::default()
                    .with_legality("modern", "Legal")
                    .with_color_identity(&[color])
                    .with_mana_cost(&format!("{{{}}}{{{color}}}", idx % 4))],
            );
            catalog.insert(
                format!("{color} Banned {idx}"),
                vec![Face::default()
                    .with_legality("modern", "Banned")
                    .with_color_identity(&[color])
                    .with_mana_cost(&format!("{{{color}}}"))],
            );
        }
    }
    for (left, right) in [(Color::White, Color::Blue), (Color::Black, Color::Red)] {
        for idx in 0..10 {
            catalog.insert(
                format!("{left}{right} Gold {idx}"),
                vec![Face::default()
                    .with_legality("modern", "Legal")
                    .with_color_identity(&[left, right])
                    .with_mana_cost(&format!("{{{left}}}{{{right}}}"))],
            );
        }
    }
    for idx in 0..40 {
        catalog.insert(
            format!("Artifact {idx}"),
            vec![Face::default()
                .with_legality("modern", "Legal")
                .with_mana_cost("{2}")],
        );
    }
    for idx in 0..5 {
        catalog.insert(
            format!("Vintage Relic {idx}"),
            vec![Face::default().with_legality("vintage", "Legal")],
        );
    }
    catalog
}

macro_rules! generation_case {
    ($name:ident, $num_colors:expr, $seed:expr) => {
        #[test]
        fn $name() {
            let catalog = fixture_catalog();
            let mut rng = RngState::from_seed($seed);
            let mut events = EventBus::default();
            let deck = generate_deck(
                &catalog,
                DeckConfig::with_colors($num_colors),
                &mut rng,
                &mut events,
            )
            .expect("fixture is satisfiable");

            assert_eq!(deck.colors.len(), $num_colors);
            assert_eq!(deck.spells.len(), 36);
            for name in &deck.spells {
                assert!(is_modern(&catalog, name), "{name} not legal");
                assert!(is_allowed_color(&catalog, name, &deck.colors), "{name} off color");
            }
            for (symbol, count) in deck.lands.iter() {
                assert!(count > 0);
                assert!(deck.symbols.get(symbol) > 0 || deck.symbols.total() == 0);
            }
            for (symbol, count) in deck.symbols.iter() {
                if count > 0 {
                    assert!(deck.lands.get(symbol) >= 1, "{symbol} has no land");
                }
            }
            let lines = deck.lines();
            assert_eq!(lines.len(), 36 + deck.lands.len());
            assert!(lines[..36].iter().all(|line| line.starts_with("1 ")));
        }
    };
}

generation_case!(zero_colors_seed_1, 0, 1);
generation_case!(zero_colors_seed_2, 0, 2);
generation_case!(one_color_seed_1, 1, 1);
generation_case!(one_color_seed_2, 1, 2);
generation_case!(two_colors_seed_1, 2, 1);
generation_case!(two_colors_seed_2, 2, 2);
generation_case!(three_colors_seed_1, 3, 1);
generation_case!(three_colors_seed_2, 3, 2);
generation_case!(four_colors_seed_1, 4, 1);
generation_case!(five_colors_seed_1, 5, 1);
generation_case!(five_colors_seed_2, 5, 2);

#[test]
fn six_colors_fail_before_sampling() {
    let catalog = fixture_catalog();
    let mut rng = RngState::from_seed(1);
    let mut events = EventBus::default();
    let err = generate_deck(&catalog, DeckConfig::with_colors(6), &mut rng, &mut events)
        .unwrap_err();
    assert_eq!(err, DeckError::InvalidColorCount(6));
    assert!(events.is_empty());
    let mut untouched = RngState::from_seed(1);
    for _ in 0..8 {
        assert_eq!(rng.index(1000), untouched.index(1000));
    }
}

#[test]
fn same_seed_same_deck() {
    let catalog = fixture_catalog();
    let render = |seed| {
        let mut rng = RngState::from_seed(seed);
        generate_deck(
            &catalog,
            DeckConfig::with_colors(2),
            &mut rng,
            &mut EventBus::default(),
        )
        .expect("generate")
        .render()
    };
    assert_eq!(render(42), render(42));
    assert_ne!(render(42), render(43));
}

#[test]
fn colorless_deck_of_generic_costs_gets_wastes() {
    let mut catalog = Catalog::new();
    for idx in 0..36 {
        catalog.insert(
            format!("Artifact {idx}"),
            vec![Face::default()
                .with_legality("modern", "Legal")
                .with_mana_cost("{3}")],
        );
    }
    let mut rng = RngState::from_seed(8);
    let mut events = EventBus::default();
    let deck = generate_deck(&catalog, DeckConfig::with_colors(0), &mut rng, &mut events)
        .expect("fallback split");
    assert_eq!(deck.lands.get(ManaSymbol::Colorless), 24);
    assert!(deck.render().ends_with("\n24 Wastes"));
    assert!(events
        .drain()
        .any(|event| event == Event::EmptyPoolFallback { lands: 24 }));

    let strict = DeckConfig {
        empty_pool: EmptyPoolPolicy::Error,
        ..DeckConfig::with_colors(0)
    };
    let err = generate_deck(&catalog, strict, &mut rng, &mut EventBus::default()).unwrap_err();
    assert_eq!(err, DeckError::EmptyManaPool);
}

#[test]
fn rejection_strategy_matches_invariants() {
    let catalog = fixture_catalog();
    let mut rng = RngState::from_seed(77);
    let config = DeckConfig {
        sampling: SamplingStrategy::Rejection { max_draws: 200_000 },
        ..DeckConfig::with_colors(3)
    };
    let deck = generate_deck(&catalog, config, &mut rng, &mut EventBus::default())
        .expect("generate");
    assert_eq!(deck.spells.len(), 36);
    assert!(deck
        .spells
        .iter()
        .all(|name| is_modern(&catalog, name) && is_allowed_color(&catalog, name, &deck.colors)));
}

#[test]
fn events_trace_the_pipeline() {
    let catalog = fixture_catalog();
    let mut rng = RngState::from_seed(3);
    let mut events = EventBus::default();
    generate_deck(&catalog, DeckConfig::with_colors(1), &mut rng, &mut events).expect("generate");
    let kinds: Vec<&'static str> = events
        .drain()
        .map(|event| match event {
            Event::ColorsChosen { .. } => "colors",
            Event::PoolBuilt { .. } => "pool",
            Event::DeckFilled { .. } => "filled",
            Event::SymbolsCounted { .. } => "symbols",
            Event::EmptyPoolFallback { .. } => "fallback",
            Event::LandsAllocated { .. } => "lands",
        })
        .collect();
    assert_eq!(kinds, vec!["colors", "pool", "filled", "symbols", "lands"]);
}
