use assert_cmd::Command;

const GOLDEN: &str = "1100001;0100111;1111101;1000111;1110100;1011110;111001x";

#[test]
fn solves_a_maze_given_as_argument() {
    let mut cmd = Command::cargo_bin("daedal").unwrap();
    cmd.arg(GOLDEN);

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("This maze's size is 7 x 7"))
        .stdout(predicates::str::contains("The goal is at position (6, 6)"))
        .stdout(predicates::str::contains(
            "Solution path: (0, 0), (0, 1), (1, 1), (2, 1), (2, 2), (2, 3), \
             (2, 4), (3, 4), (4, 4), (5, 4), (5, 5), (6, 5), (6, 6)",
        ));
}

#[test]
fn reads_the_encoding_from_stdin_when_no_argument() {
    let mut cmd = Command::cargo_bin("daedal").unwrap();
    cmd.write_stdin("11;1x");

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("This maze's size is 2 x 2"))
        .stdout(predicates::str::contains("Solution path: "));
}

#[test]
fn unreachable_goal_is_reported_not_failed() {
    let mut cmd = Command::cargo_bin("daedal").unwrap();
    cmd.arg("1;0;x");

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("This maze's size is 3 x 1"))
        .stderr(predicates::str::contains("cannot be reached"));
}

#[test]
fn invalid_encoding_exits_with_an_error() {
    let mut cmd = Command::cargo_bin("daedal").unwrap();
    cmd.arg("12;1x");

    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("invalid maze encoding"));
}
