use {assert_cmd::Command, predicates::str::contains};

const UNREACHABLE: &str = "http://127.0.0.1:9/v0";

fn cmd() -> Command {
  let mut command = Command::cargo_bin("hn-top").unwrap();
  command.env_remove("HN_API_BASE_URL").env_remove("RUST_LOG");
  command
}

#[test]
fn help_lists_options() {
  cmd()
    .arg("--help")
    .assert()
    .success()
    .stdout(contains("--listing"))
    .stdout(contains("--limit"));
}

#[test]
fn unreachable_api_still_exits_successfully() {
  cmd()
    .args(["--base-url", UNREACHABLE, "--timeout", "2"])
    .assert()
    .success()
    .stdout(contains("Getting top Hacker News story IDs..."))
    .stdout(contains("[warn] request failed: http://127.0.0.1:9/v0/topstories.json"))
    .stdout(contains("Could not load top stories."));
}

#[test]
fn base_url_can_come_from_environment() {
  cmd()
    .env("HN_API_BASE_URL", UNREACHABLE)
    .args(["--listing", "ask", "--timeout", "2"])
    .assert()
    .success()
    .stdout(contains("askstories.json"))
    .stdout(contains("Could not load ask stories."));
}

#[test]
fn json_mode_keeps_diagnostics_off_stdout() {
  cmd()
    .args(["--base-url", UNREACHABLE, "--timeout", "2", "--json"])
    .assert()
    .success()
    .stdout("")
    .stderr(contains("Could not load top stories."));
}

#[test]
fn ranks_served_stories_and_reports_skipped_items() {
  let mut server = mockito::Server::new();

  let fixtures = [
    ("/v0/topstories.json", "[1, 2, 3]"),
    ("/v0/item/1.json", r#"{"title": "A", "by": "u1", "score": 5}"#),
    (
      "/v0/item/2.json",
      r#"{"title": "B", "by": "u2", "score": 1, "descendants": 10}"#,
    ),
    ("/v0/item/3.json", r#""not a record""#),
  ];

  let _mocks = fixtures
    .iter()
    .map(|(path, body)| {
      server
        .mock("GET", *path)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(*body)
        .create()
    })
    .collect::<Vec<_>>();

  let output = cmd()
    .args(["--base-url", &format!("{}/v0", server.url()), "--delay", "0"])
    .output()
    .unwrap();

  assert!(output.status.success());

  let stdout = String::from_utf8(output.stdout).unwrap();

  assert!(stdout.contains("[warn] skip id=3 (no item)\n"), "{stdout}");

  let first = stdout.find("1. B\n").expect("item 2 should be ranked");
  let second = stdout.find("2. A\n").expect("item 1 should be ranked");

  assert!(first < second, "{stdout}");
  assert!(stdout.contains("   by: u1 | comments: 0 | score: 5\n"));
  assert!(!stdout.contains("3. "), "{stdout}");
}

#[test]
fn unknown_listing_is_rejected() {
  cmd().args(["--listing", "frontpage"]).assert().failure();
}
