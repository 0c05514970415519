//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a pgpdrop command with an isolated environment.
    ///
    /// Returns a Command configured with:
    /// - HOME and XDG_CONFIG_HOME set to the temporary home directory
    /// - key/config env overrides cleared
    /// - Current directory set to the test working directory
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("pgpdrop").expect("failed to find pgpdrop binary");
        cmd.env("HOME", self.home.path());
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("XDG_CONFIG_HOME", self.home.path());
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("PGPDROP_KEY_URL");
        cmd.env_remove("PGPDROP_CONFIG");
        cmd.env_remove("PGPDROP_LOG");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `pgpdrop files --key public.asc <files>`.
    pub fn files(&self, files: &[&str]) -> Output {
        let key = self.key_file();
        self.cmd()
            .arg("files")
            .arg("--key")
            .arg(&key)
            .args(files)
            .output()
            .expect("failed to run pgpdrop files")
    }

    /// Shortcut for `pgpdrop text --stdout --key public.asc <text>`.
    pub fn text_stdout(&self, text: &str) -> Output {
        let key = self.key_file();
        self.cmd()
            .args(["text", "--stdout", "--key"])
            .arg(&key)
            .arg(text)
            .output()
            .expect("failed to run pgpdrop text")
    }

    /// Shortcut for `pgpdrop key show --key public.asc`.
    pub fn key_show(&self, json: bool) -> Output {
        let key = self.key_file();
        let mut cmd = self.cmd();
        cmd.args(["key", "show", "--key"]).arg(&key);
        if json {
            cmd.arg("--json");
        }
        cmd.output().expect("failed to run pgpdrop key show")
    }
}
