//! Integration Tests for the REPL
//!
//! Drives whole sessions through `Repl::run` against a mocked PokeAPI.

use std::time::Duration;

use pokedex::commands::CommandTable;
use pokedex::session::Session;
use pokedex::{Cache, PokeApiClient, Repl};
use rand::rngs::mock::StepRng;
use tokio::io::BufReader;
use tokio_test::assert_ok;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// == Helper Functions ==

const PIDGEY: &str = r#"{
    "id": 16,
    "name": "pidgey",
    "base_experience": 50,
    "height": 3,
    "weight": 18,
    "stats": [
        {"base_stat": 40, "effort": 0, "stat": {"name": "hp", "url": ""}},
        {"base_stat": 56, "effort": 1, "stat": {"name": "speed", "url": ""}}
    ],
    "types": [
        {"slot": 1, "type": {"name": "normal", "url": ""}},
        {"slot": 2, "type": {"name": "flying", "url": ""}}
    ]
}"#;

async fn mock_pokeapi() -> MockServer {
    let server = MockServer::start().await;

    let first_page = format!(
        r#"{{"count": 2, "next": null, "previous": null, "results": [
            {{"name": "canalave-city-area", "url": "{0}/api/v2/location-area/1/"}},
            {{"name": "pastoria-city-area", "url": "{0}/api/v2/location-area/7/"}}
        ]}}"#,
        server.uri()
    );
    Mock::given(method("GET"))
        .and(path("/api/v2/location-area/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(first_page))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v2/location-area/pastoria-city-area"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"id": 7, "name": "pastoria-city-area", "pokemon_encounters": [
                {"pokemon": {"name": "pidgey", "url": ""}},
                {"pokemon": {"name": "magikarp", "url": ""}}
            ]}"#,
        ))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon/missingno"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&server)
        .await;

    server
}

/// Serves pidgey and checks on drop that it was fetched exactly `times` times.
async fn mount_pidgey(server: &MockServer, times: u64) {
    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon/pidgey"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PIDGEY))
        .expect(times)
        .mount(server)
        .await;
}

fn repl_for(server: &MockServer) -> Repl {
    repl_with_ttl(server, Duration::from_secs(60))
}

fn repl_with_ttl(server: &MockServer, ttl: Duration) -> Repl {
    let client = PokeApiClient::new(format!("{}/api/v2/", server.uri()), Cache::new(ttl));
    // Every roll is 0, so every throw lands
    let session = Session::with_rng(StepRng::new(0, 0));
    Repl::new(CommandTable::new(), session, client)
}

async fn run_script(repl: &mut Repl, script: &str) -> String {
    let mut out = Vec::new();
    assert_ok!(repl.run(script.as_bytes(), &mut out).await);
    String::from_utf8(out).unwrap()
}

// == Session Tests ==

#[tokio::test]
async fn test_full_session() {
    let server = mock_pokeapi().await;
    mount_pidgey(&server, 1).await;
    let mut repl = repl_for(&server);

    let output = run_script(
        &mut repl,
        "map\nexplore Pastoria-City-Area\ncatch PIDGEY\ninspect pidgey\npokedex\n",
    )
    .await;

    assert!(output.contains("canalave-city-area\npastoria-city-area\n"));
    assert!(output.contains("Exploring pastoria-city-area...\nFound Pokemon:\n - pidgey\n - magikarp\n"));
    assert!(output.contains("Throwing a Pokeball at pidgey...\nCongratulations! You caught pidgey!\n"));
    assert!(output.contains("Name: pidgey\nHeight: 3\nWeight: 18\nStats:\n  - hp: 40\n  - speed: 56\nTypes:\n  - normal\n  - flying\n"));
    assert!(output.contains("Your Pokedex:\n - pidgey\n"));
    assert!(repl.session().is_caught("pidgey"));
}

#[tokio::test]
async fn test_recatch_makes_no_request() {
    let server = mock_pokeapi().await;
    mount_pidgey(&server, 1).await;
    // The cached body is stale by the second throw, so only the Pokedex can
    // keep a second request from going out
    let mut repl = repl_with_ttl(&server, Duration::from_millis(1));

    run_script(&mut repl, "catch pidgey\n").await;
    tokio::time::sleep(Duration::from_millis(20)).await;
    let output = run_script(&mut repl, "catch pidgey\n").await;

    assert_eq!(output, "Pokedex > You have already caught pidgey.\nPokedex > \n");
    assert_eq!(repl.session().caught_count(), 1);
}

#[tokio::test]
async fn test_errors_are_reported_and_loop_continues() {
    let server = mock_pokeapi().await;
    let mut repl = repl_for(&server);

    let output = run_script(&mut repl, "explore\ncatch missingno\npokedex\n").await;

    assert!(output.contains(
        "Error executing command 'explore': please specify a location to explore\n"
    ));
    assert!(output.contains("Error executing command 'catch': could not find Pokemon 'missingno': "));
    assert!(output.contains("404"));
    assert!(output.contains("You have not caught any Pokemon yet.\n"));
}

#[tokio::test]
async fn test_invalid_utf8_is_just_a_bad_command() {
    let server = mock_pokeapi().await;
    let mut repl = repl_for(&server);

    let mut out = Vec::new();
    let input: &[u8] = b"catch \xff\xfe\npokedex\n";
    assert_ok!(repl.run(input, &mut out).await);
    let output = String::from_utf8(out).unwrap();

    assert!(output.contains("Error executing command 'catch': could not find Pokemon"));
    assert!(output.contains("You have not caught any Pokemon yet.\n"));
}

#[tokio::test]
async fn test_unknown_commands_and_blank_lines_are_silent() {
    let server = mock_pokeapi().await;
    let mut repl = repl_for(&server);

    let output = run_script(&mut repl, "fly away\n\n   \nSURF\n").await;

    // Five prompts (four lines plus the one answered by end of input), nothing else
    assert_eq!(output, "Pokedex > ".repeat(5) + "\n");
}

#[tokio::test]
async fn test_exit_stops_reading() {
    let server = mock_pokeapi().await;
    mount_pidgey(&server, 0).await;
    let mut repl = repl_for(&server);

    let output = run_script(&mut repl, "exit\ncatch pidgey\n").await;

    assert_eq!(output, "Pokedex > \nClosing the Pokedex... Goodbye!\n");
    assert_eq!(repl.session().caught_count(), 0);
}

#[tokio::test]
async fn test_input_arriving_in_fragments() {
    let server = mock_pokeapi().await;
    mount_pidgey(&server, 1).await;
    let mut repl = repl_for(&server);

    let input = tokio_test::io::Builder::new()
        .read(b"cat")
        .read(b"ch pid")
        .read(b"gey\npoke")
        .read(b"dex\n")
        .build();

    let mut out = Vec::new();
    assert_ok!(repl.run(BufReader::new(input), &mut out).await);
    let output = String::from_utf8(out).unwrap();

    assert!(output.contains("Congratulations! You caught pidgey!"));
    assert!(output.contains("Your Pokedex:\n - pidgey\n"));
}

#[tokio::test]
async fn test_help_then_mapb_on_first_page() {
    let server = mock_pokeapi().await;
    let mut repl = repl_for(&server);

    let output = run_script(&mut repl, "help\nmapb\n").await;

    assert!(output.contains("Welcome to the Pokedex!\n"));
    assert!(output.contains(" - pokedex: Lists every caught Pokemon\n"));
    assert!(output.contains("you're on the first page\n"));
}
