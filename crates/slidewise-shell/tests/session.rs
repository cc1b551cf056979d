//! Scripted sessions run through the public shell API.

use slidewise_core::Board;
use slidewise_shell::Shell;

fn session(shell: &mut Shell, script: &str) -> Vec<String> {
    let mut out = Vec::new();
    shell.run(script.as_bytes(), &mut out).unwrap();
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn full_session() {
    let mut shell = Shell::with_seed(7);
    let lines = session(
        &mut shell,
        "\
seed 99
position 2,2,0,0/0,0,0,0/0,0,0,0/0,0,0,0 score 0
d
move right
go
undo
d
quit
",
    );

    assert_eq!(lines[0], "ok");
    assert_eq!(lines[1], "ok");
    assert_eq!(
        lines[2..7],
        ["2 2 . .", ". . . .", ". . . .", ". . . .", "score 0"]
    );
    assert_eq!(lines[7], "moved true");
    assert!(lines[8].starts_with("info depth 3 nodes "));
    assert!(lines[9].starts_with("bestmove "));
    assert_eq!(lines[10], "ok");
    assert_eq!(lines[11], "2 2 . .");
    assert_eq!(lines[15], "score 0");
    assert_eq!(lines.len(), 16);
}

#[test]
fn same_seed_replays_same_game() {
    let script = "seed 2048\nnewgame\nsetoption name Depth value 1\nauto 30\nd\n";
    let mut first = Shell::with_seed(1);
    let mut second = Shell::with_seed(2);
    assert_eq!(session(&mut first, script), session(&mut second, script));
    assert_eq!(first.board(), second.board());
    assert_eq!(first.score(), second.score());
}

#[test]
fn autoplay_small_grid_ends_in_game_over() {
    let mut shell = Shell::with_seed(0);
    let lines = session(&mut shell, "seed 5\nnewgame 2\nauto\n");
    assert_eq!(lines[..2], ["ok", "ok"]);
    assert!(lines[2].starts_with("gameover score "), "{}", lines[2]);
    assert!(!shell.board().can_any_move_occur());
}

#[test]
fn position_round_trips_through_display() {
    let mut shell = Shell::with_seed(0);
    let notation = "2,0,4/0,8,0/16,0,2";
    session(&mut shell, &format!("position {notation} score 40\n"));
    let expected: Board = notation.parse().unwrap();
    assert_eq!(*shell.board(), expected);
    assert_eq!(shell.board().to_string(), notation);
    assert_eq!(shell.score(), 40);
}

#[test]
fn end_of_input_without_quit_is_clean() {
    let mut shell = Shell::with_seed(0);
    let lines = session(&mut shell, "newgame\n\n   \n");
    assert_eq!(lines, ["ok"]);
}
