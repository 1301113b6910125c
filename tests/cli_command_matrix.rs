use assert_cmd::cargo::cargo_bin_cmd;

fn run_help(args: &[&str]) {
    let mut cmd = cargo_bin_cmd!("stead");
    cmd.args(args).arg("--help").assert().success();
}

#[test]
fn every_cli_command_has_help_path() {
    // top-level
    run_help(&[]);

    run_help(&["list"]);
    run_help(&["show"]);
    run_help(&["budget"]);
    run_help(&["phase"]);
    run_help(&["export"]);
    run_help(&["render"]);
    run_help(&["validate"]);
}
