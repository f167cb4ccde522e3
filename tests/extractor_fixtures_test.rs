use gamedex_import::apis::{PsnCrawler, SteamCrawler, XblCrawler};
use gamedex_import::app::ports::ImportEvent;
use gamedex_import::infra::InMemoryRecorder;
use gamedex_import::{GameSource, Source};

fn fixture(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name);
    std::fs::read_to_string(path).expect("fixture should exist")
}

fn owned(titles: &[&str]) -> Vec<String> {
    titles.iter().map(|t| t.to_string()).collect()
}

#[test]
fn test_steam_returns_names_in_script_order() {
    let recorder = InMemoryRecorder::new();
    let titles = SteamCrawler::new()
        .extract(200, &fixture("steam_games.html"), &recorder)
        .unwrap();

    assert_eq!(titles, Some(owned(&["Half-Life 2", "Portal", "Portal 2"])));
    assert!(recorder.events().is_empty());
}

#[test]
fn test_psn_skips_section_without_title() {
    let recorder = InMemoryRecorder::new();
    let titles = PsnCrawler::new()
        .extract(200, &fixture("psn_trophies.html"), &recorder)
        .unwrap();

    assert_eq!(
        titles,
        Some(owned(&["Uncharted 2: Among Thieves", "kami HD", "Demon's Souls"]))
    );
    assert_eq!(
        recorder.events(),
        vec![ImportEvent::RowSkipped { source: Source::Psn, row_index: 1 }]
    );
}

#[test]
fn test_xbl_strips_non_ascii_and_whitespace() {
    let recorder = InMemoryRecorder::new();
    let titles = XblCrawler::new()
        .extract(200, &fixture("xbl_profile.html"), &recorder)
        .unwrap();

    assert_eq!(
        titles,
        Some(owned(&["Halo: Reach", "Pokmon Caf Mix", "Forza Horizon"]))
    );
    // the header row has no game name
    assert_eq!(recorder.skipped_rows(), 1);
}

#[test]
fn test_non_success_status_is_no_result_for_every_source() {
    let sources: [(Box<dyn GameSource>, &str); 3] = [
        (Box::new(SteamCrawler::new()), "steam_games.html"),
        (Box::new(PsnCrawler::new()), "psn_trophies.html"),
        (Box::new(XblCrawler::new()), "xbl_profile.html"),
    ];

    for (crawler, page) in sources {
        for status in [301, 404, 500] {
            let recorder = InMemoryRecorder::new();
            let result = crawler.extract(status, &fixture(page), &recorder).unwrap();
            assert!(result.is_none(), "{} with status {}", crawler.source(), status);
            assert!(recorder.events().is_empty());
        }
    }
}

#[test]
fn test_extraction_is_repeatable() {
    let page = fixture("xbl_profile.html");
    let crawler = XblCrawler::new();
    let recorder = InMemoryRecorder::new();

    let first = crawler.extract(200, &page, &recorder).unwrap();
    let second = crawler.extract(200, &page, &recorder).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_empty_table_is_empty_list_not_no_result() {
    let page = r#"<table id="recentGamesTable"></table>"#;
    let titles = XblCrawler::new()
        .extract(200, page, &InMemoryRecorder::new())
        .unwrap();
    assert_eq!(titles, Some(vec![]));
}
