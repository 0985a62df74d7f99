use std::future::pending;
use std::time::Duration;

use folio_cli::{PlayEnd, PlayOptions, Showcase, play};
use folio_config::SiteConfig;

async fn run(
    showcase: Showcase,
    width: u32,
    duration: Option<Duration>,
    script: &str,
) -> (PlayEnd, Vec<String>) {
    let options = PlayOptions {
        showcase,
        width,
        duration,
        json: false,
    };
    let config = showcase.config(&SiteConfig::default());
    let mut out = Vec::new();
    let end = play(options, config, script.as_bytes(), &mut out, pending())
        .await
        .unwrap();
    let text = String::from_utf8(out).unwrap();
    (end, text.lines().map(str::to_string).collect())
}

#[tokio::test(start_paused = true)]
async fn end_of_input_stops_without_a_duration() {
    let (end, lines) = run(Showcase::Certificates, 1280, None, "").await;
    assert_eq!(end, PlayEnd::EndOfInput);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("[1/9] ●○○○○○○○○"), "{}", lines[0]);
}

#[tokio::test(start_paused = true)]
async fn duration_keeps_autoplay_running_after_input_ends() {
    let (end, lines) =
        run(Showcase::Experience, 1280, Some(Duration::from_secs(9)), "")
            .await;
    assert_eq!(end, PlayEnd::Elapsed);
    // Initial state plus ticks at 4s and 8s.
    assert_eq!(lines.len(), 3, "{lines:#?}");
    assert!(lines[2].starts_with("[3/4]"));
}

#[tokio::test(start_paused = true)]
async fn manual_step_pauses_then_resumes() {
    let (end, lines) = run(
        Showcase::Certificates,
        1280,
        None,
        "next\nwait 6s\nquit\n",
    )
    .await;
    assert_eq!(end, PlayEnd::Quit);
    assert_eq!(lines.len(), 3, "{lines:#?}");
    assert!(lines[1].starts_with("[2/9]"));
    assert!(lines[1].ends_with("[paused]"));
    assert!(lines[2].starts_with("[2/9]"));
    assert!(!lines[2].ends_with("[paused]"));
}

#[tokio::test(start_paused = true)]
async fn resize_and_goto_are_applied() {
    let (_, lines) = run(
        Showcase::Certificates,
        1280,
        None,
        "resize 375\nwait 1s\ngoto 10\nwait 1s\nquit\n",
    )
    .await;
    assert!(lines.iter().any(|line| line.starts_with("[1/10]")));
    let last = lines.last().unwrap();
    assert!(last.starts_with("[10/10]"), "{last}");
}

#[tokio::test(start_paused = true)]
async fn unknown_commands_are_reported_and_skipped() {
    let (end, lines) = run(
        Showcase::Certificates,
        1280,
        None,
        "# comment\ndance\nquit\n",
    )
    .await;
    assert_eq!(end, PlayEnd::Quit);
    assert!(lines.contains(&"? unknown command 'dance'".to_string()));
}

#[tokio::test(start_paused = true)]
async fn json_mode_emits_one_snapshot_per_line() {
    let options = PlayOptions {
        showcase: Showcase::Experience,
        width: 375,
        duration: None,
        json: true,
    };
    let config = Showcase::Experience.config(&SiteConfig::default());
    let mut out = Vec::new();
    let end = play(options, config, &b"next\nquit\n"[..], &mut out, pending())
        .await
        .unwrap();
    assert_eq!(end, PlayEnd::Quit);

    let text = String::from_utf8(out).unwrap();
    let snapshots: Vec<serde_json::Value> = text
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    let first = &snapshots[0];
    assert_eq!(first["current_index"], 0);
    assert_eq!(first["items_per_view"], 1);
    assert_eq!(first["window"].as_array().map(Vec::len), Some(1));
    assert!(first["window"][0]["title"].is_string());
    assert_eq!(first["indicators"].as_array().map(Vec::len), Some(5));
    assert_eq!(first["paused"], false);
}
