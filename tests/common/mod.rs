#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const SAMPLE: &str = "7 6 4 2 1\n1 2 7 8 9\n9 7 6 2 1\n1 3 2 4 5\n8 6 4 4 1\n1 3 6 7 9\n";

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub inputs: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");
        let inputs = tmp.path().join("inputs");
        fs::create_dir_all(&inputs).expect("create inputs dir");

        Self {
            _tmp: tmp,
            home,
            inputs,
        }
    }

    pub fn write_input(&self, name: &str, content: &str) {
        fs::write(self.inputs.join(name), content).expect("write input file");
    }

    pub fn write_config(&self, content: &str) {
        let dir = self.home.join(".config/rednose");
        fs::create_dir_all(&dir).expect("create config dir");
        fs::write(dir.join("config.toml"), content).expect("write config");
    }

    pub fn read_input(&self, name: &str) -> String {
        fs::read_to_string(self.inputs.join(name)).expect("read generated file")
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("rednose");
        cmd.env("HOME", &self.home)
            .env_remove("RUST_LOG")
            .env_remove("REDNOSE_INPUTS_DIR")
            .arg("--inputs-dir")
            .arg(&self.inputs);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}
