use assert_cmd::Command;

pub fn tagsmith_cmd() -> Command {
    let mut cmd = Command::cargo_bin("tagsmith").unwrap();
    cmd.env_remove("TAGSMITH_ROOT");
    cmd
}
