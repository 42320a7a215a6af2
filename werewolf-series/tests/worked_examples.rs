use werewolf_series::{
    AliasResolver, Camp, GameId, GameLog, GameRecord, Participation, PlayerKey, SeriesChannel,
    SeriesEngine, compute_series_report,
};

fn game(idx: usize, participations: Vec<Participation>) -> GameRecord {
    participations.into_iter().fold(
        GameRecord::new(format!("G{idx}"), format!("2024-02-{idx:02}")),
        GameRecord::with_participation,
    )
}

fn solo_log(participations: Vec<Participation>) -> Vec<GameRecord> {
    participations
        .into_iter()
        .enumerate()
        .map(|(idx, p)| game(idx + 1, vec![p]))
        .collect()
}

fn ids(names: &[&str]) -> Vec<GameId> {
    names.iter().map(|name| GameId::from(*name)).collect()
}

#[test]
fn villager_tie_goes_to_the_later_series() {
    let camps = [Camp::Villager, Camp::Villager, Camp::Wolf, Camp::Villager, Camp::Villager];
    let games = solo_log(
        camps
            .iter()
            .map(|camp| Participation::named("P").with_camp(*camp))
            .collect(),
    );
    let report = compute_series_report(&games).expect("report");
    let p = PlayerKey::new("p");

    let villager = report.best_for(SeriesChannel::Villager, &p).unwrap();
    assert_eq!(villager.series_length, 2);
    assert_eq!(villager.start_game, GameId::from("G4"));
    assert_eq!(villager.end_game, GameId::from("G5"));
    assert_eq!(villager.start_date, "2024-02-04");
    assert_eq!(villager.end_date, "2024-02-05");
    assert!(villager.is_ongoing);
    assert!(villager.camp_counts.is_none());

    let wolf = report.best_for(SeriesChannel::Wolf, &p).unwrap();
    assert_eq!(wolf.series_length, 1);
    assert!(!wolf.is_ongoing);
    assert!(report.active_for(SeriesChannel::Wolf, &p).is_none());
}

#[test]
fn win_and_loss_series_split_the_games() {
    let results = [true, false, false, true, true, true];
    let games = solo_log(
        results
            .iter()
            .map(|won| {
                Participation::named("P")
                    .with_camp(Camp::Villager)
                    .victorious(*won)
            })
            .collect(),
    );
    let report = compute_series_report(&games).expect("report");
    let p = PlayerKey::new("p");

    let win = report.best_for(SeriesChannel::Win, &p).unwrap();
    assert_eq!(win.series_length, 3);
    assert_eq!(win.games, ids(&["G4", "G5", "G6"]));
    assert_eq!(win.camp_counts.as_ref().unwrap()["Villager"], 3);
    assert!(win.is_ongoing);

    let loss = report.best_for(SeriesChannel::Loss, &p).unwrap();
    assert_eq!(loss.series_length, 2);
    assert_eq!(loss.games, ids(&["G2", "G3"]));
    assert!(!loss.is_ongoing);

    let win_stats = report.channel(SeriesChannel::Win).stats;
    assert_eq!(win_stats.active_count, 1);
    assert_eq!(win_stats.ongoing_count, 1);
    assert_eq!(report.channel(SeriesChannel::Loss).stats.active_count, 0);
}

#[test]
fn aggregates_average_over_every_player() {
    // A plays villager 6 times, B 4 times, C is always a wolf.
    let mut games = Vec::new();
    for idx in 1..=6 {
        let mut players = vec![
            Participation::named("A").with_camp(Camp::Villager),
            Participation::named("C").with_camp(Camp::Wolf),
        ];
        if idx <= 4 {
            players.push(Participation::named("B").with_camp(Camp::Villager));
        } else {
            players.push(Participation::named("B").with_camp(Camp::Wolf));
        }
        games.push(game(idx, players));
    }

    let report = compute_series_report(&games).expect("report");
    assert_eq!(report.total_players_count, 3);
    assert_eq!(report.total_games_analyzed, 6);

    let villager = report.channel(SeriesChannel::Villager);
    assert!((villager.stats.average_best - 3.3).abs() < f64::EPSILON);
    assert_eq!(villager.stats.elite_threshold, 5);
    assert_eq!(villager.stats.elite_count, 1);
    assert_eq!(villager.stats.active_count, 1);
    assert_eq!(villager.stats.ongoing_count, 1);
    let lengths: Vec<u32> = villager.best.iter().map(|r| r.series_length).collect();
    assert_eq!(lengths, [6, 4]);

    let wolf = report.channel(SeriesChannel::Wolf);
    assert_eq!(wolf.stats.elite_threshold, 3);
    assert_eq!(wolf.stats.elite_count, 1);
    assert_eq!(wolf.stats.active_count, 2);
    let names: Vec<&str> = wolf.active.iter().map(|r| r.player_name.as_str()).collect();
    assert_eq!(names, ["C", "B"]);
}

#[test]
fn solo_and_no_wolf_report_their_composition() {
    let games = solo_log(vec![
        Participation::named("P").with_role("Villageois"),
        Participation::named("P").with_role("La Bête"),
        Participation::named("P").with_role("Agent"),
        Participation::named("P").with_role("Loup").as_lover(),
        Participation::named("P").with_role("Loup"),
    ]);
    let report = compute_series_report(&games).expect("report");
    let p = PlayerKey::new("p");

    let solo = report.best_for(SeriesChannel::Solo, &p).unwrap();
    assert_eq!(solo.series_length, 3);
    let roles = solo.camp_counts.as_ref().unwrap();
    assert_eq!(roles["La Bête"], 1);
    assert_eq!(roles["Agent"], 1);
    assert_eq!(roles["Lovers"], 1);

    let no_wolf = report.best_for(SeriesChannel::NoWolf, &p).unwrap();
    assert_eq!(no_wolf.series_length, 4);
    let camps = no_wolf.camp_counts.as_ref().unwrap();
    assert_eq!(camps["Villager"], 1);
    assert_eq!(camps["Other"], 3);
    assert!(!no_wolf.is_ongoing);
}

#[test]
fn solo_series_resets_on_a_villager_game() {
    let camps = [Camp::Other, Camp::Other, Camp::Villager, Camp::Other];
    let games = solo_log(
        camps
            .iter()
            .map(|camp| Participation::named("P").with_camp(*camp))
            .collect(),
    );
    let report = compute_series_report(&games).expect("report");
    let p = PlayerKey::new("p");

    let solo = report.best_for(SeriesChannel::Solo, &p).unwrap();
    assert_eq!(solo.series_length, 2);
    assert_eq!(solo.games, ids(&["G1", "G2"]));
    assert!(!solo.is_ongoing);

    let running = report.active_for(SeriesChannel::Solo, &p).unwrap();
    assert_eq!(running.series_length, 1);
    assert_eq!(running.games, ids(&["G4"]));
    assert_eq!(report.channel(SeriesChannel::Solo).stats.ongoing_count, 0);
}

#[test]
fn renamed_players_keep_one_identity_and_latest_name() {
    let games = solo_log(vec![
        Participation::named("Anouk").with_camp(Camp::Wolf).died(true),
        Participation::named("Anouk").with_camp(Camp::Wolf).died(true),
        Participation::named("Anna").with_camp(Camp::Wolf).died(false),
    ]);
    let resolver = AliasResolver::from_pairs([("Anouk", "anna")]);
    let engine = SeriesEngine::with_default_rules().with_resolver(resolver);
    let report = engine.compute(&games).expect("report");
    assert_eq!(report.total_players_count, 1);

    let death = &report.channel(SeriesChannel::Death).best[0];
    assert_eq!(death.player_name, "Anna");
    assert_eq!(death.series_length, 2);
    let wolf = &report.channel(SeriesChannel::Wolf).best[0];
    assert_eq!(wolf.series_length, 3);
    assert_eq!(wolf.player_key, PlayerKey::new("anna"));
}

#[test]
fn empty_logs_are_distinct_from_zero_reports() {
    let log = GameLog::from_json(r#"{ "games": [] }"#).unwrap();
    assert!(compute_series_report(log.as_slice()).is_none());

    let quiet = vec![GameRecord::new("G1", "2024-02-01")];
    let report = compute_series_report(&quiet).expect("games without players still report");
    assert_eq!(report.total_games_analyzed, 1);
    assert_eq!(report.total_players_count, 0);
    assert!(report.channel(SeriesChannel::Villager).stats.average_best.abs() < f64::EPSILON);
}

#[test]
fn malformed_rows_do_not_abort_the_batch() {
    let games = vec![game(
        1,
        vec![
            Participation::named(""),
            Participation::named("Q"),
            Participation::named("R").with_role("Loup"),
        ],
    )];
    let report = compute_series_report(&games).expect("report");
    assert_eq!(report.total_players_count, 2);
    let q = PlayerKey::new("q");
    assert_eq!(
        report.best_for(SeriesChannel::Villager, &q).unwrap().series_length,
        1
    );
}
